//! Layer visibility state.
//!
//! A fixed mapping from layer kind to an on/off flag. The key set is frozen
//! at construction; toggles are independent per key with no exclusivity
//! between layers.

use heatlens_core::models::LayerKind;
use heatlens_core::{HeatlensError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerVisibility {
    // Small fixed set; insertion order is the declaration order.
    entries: Vec<(LayerKind, bool)>,
}

impl LayerVisibility {
    /// Declare the layer set, every flag initially on. Duplicate kinds keep
    /// their first occurrence.
    pub fn with_layers(kinds: &[LayerKind]) -> Self {
        let mut entries: Vec<(LayerKind, bool)> = Vec::with_capacity(kinds.len());
        for &kind in kinds {
            if !entries.iter().any(|(k, _)| *k == kind) {
                entries.push((kind, true));
            }
        }
        Self { entries }
    }

    /// The explorer's default set: all four thematic layers, active.
    pub fn explorer_default() -> Self {
        Self::with_layers(&LayerKind::ALL)
    }

    pub fn is_active(&self, kind: LayerKind) -> Result<bool> {
        self.entries
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, active)| *active)
            .ok_or_else(|| HeatlensError::UnknownLayer {
                name: kind.label().to_string(),
            })
    }

    /// Flip exactly one flag; all others are untouched. Returns the new
    /// flag value. Never fails for a declared layer.
    pub fn toggle(&mut self, kind: LayerKind) -> Result<bool> {
        let entry = self
            .entries
            .iter_mut()
            .find(|(k, _)| *k == kind)
            .ok_or_else(|| HeatlensError::UnknownLayer {
                name: kind.label().to_string(),
            })?;
        entry.1 = !entry.1;
        Ok(entry.1)
    }

    /// Declared kinds in declaration order.
    pub fn kinds(&self) -> impl Iterator<Item = LayerKind> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    /// Active kinds in declaration order.
    pub fn active(&self) -> impl Iterator<Item = LayerKind> + '_ {
        self.entries
            .iter()
            .filter(|(_, active)| *active)
            .map(|(k, _)| *k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_has_all_layers_active() {
        let vis = LayerVisibility::explorer_default();
        for kind in LayerKind::ALL {
            assert!(vis.is_active(kind).unwrap());
        }
    }

    #[test]
    fn toggle_flips_only_the_named_layer() {
        let mut vis = LayerVisibility::explorer_default();
        assert!(!vis.toggle(LayerKind::HealthRisk).unwrap());

        assert!(!vis.is_active(LayerKind::HealthRisk).unwrap());
        assert!(vis.is_active(LayerKind::UhiIntensity).unwrap());
        assert!(vis.is_active(LayerKind::Vegetation).unwrap());
        assert!(vis.is_active(LayerKind::Boundaries).unwrap());
    }

    #[test]
    fn toggle_twice_restores_the_flag() {
        let mut vis = LayerVisibility::explorer_default();
        let before = vis.is_active(LayerKind::Vegetation).unwrap();
        vis.toggle(LayerKind::Vegetation).unwrap();
        vis.toggle(LayerKind::Vegetation).unwrap();
        assert_eq!(vis.is_active(LayerKind::Vegetation).unwrap(), before);
    }

    #[test]
    fn undeclared_layer_is_rejected() {
        let mut vis = LayerVisibility::with_layers(&[LayerKind::UhiIntensity]);
        let err = vis.toggle(LayerKind::Boundaries).unwrap_err();
        assert!(matches!(err, HeatlensError::UnknownLayer { .. }));
        assert!(vis.is_active(LayerKind::Boundaries).is_err());
    }

    #[test]
    fn active_iterates_declaration_order() {
        let mut vis = LayerVisibility::explorer_default();
        vis.toggle(LayerKind::HealthRisk).unwrap();
        let active: Vec<LayerKind> = vis.active().collect();
        assert_eq!(
            active,
            vec![
                LayerKind::UhiIntensity,
                LayerKind::Vegetation,
                LayerKind::Boundaries
            ]
        );
    }
}
