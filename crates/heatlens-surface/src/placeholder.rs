//! Static placeholder surface.
//!
//! Used when no map credential is configured: there is no native handle and
//! no camera, but the placeholder still mirrors the committed selection so
//! the degraded UI stays coherent with list-based navigation.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use heatlens_core::models::{ClusterId, FocusRequest, SceneDrawables, Zone};
use heatlens_core::ports::MapSurface;
use heatlens_core::Result;

#[derive(Debug, Default)]
struct PlaceholderState {
    marker_count: usize,
    highlighted: Option<(ClusterId, String, Zone)>,
}

#[derive(Default)]
pub struct PlaceholderSurface {
    state: Arc<Mutex<PlaceholderState>>,
}

impl PlaceholderSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn probe(&self) -> PlaceholderProbe {
        PlaceholderProbe {
            state: Arc::clone(&self.state),
        }
    }
}

#[async_trait]
impl MapSurface for PlaceholderSurface {
    fn name(&self) -> &'static str {
        "placeholder"
    }

    fn requires_credential(&self) -> bool {
        false
    }

    async fn initialize(&mut self, _token: &str) -> Result<()> {
        // Nothing to load: the placeholder has no native resources.
        Ok(())
    }

    fn apply(&mut self, scene: &SceneDrawables) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.marker_count = scene.markers.len();
        state.highlighted = scene
            .highlighted_marker()
            .map(|m| (m.cluster.clone(), m.name.clone(), m.zone));
        Ok(())
    }

    fn focus(&mut self, _request: FocusRequest) {
        // Static view: camera transitions have no effect.
    }

    fn destroy(&mut self) {
        let mut state = self.state.lock().unwrap();
        state.marker_count = 0;
        state.highlighted = None;
    }
}

/// Read-only view over the placeholder's retained state.
#[derive(Clone)]
pub struct PlaceholderProbe {
    state: Arc<Mutex<PlaceholderState>>,
}

impl PlaceholderProbe {
    pub fn marker_count(&self) -> usize {
        self.state.lock().unwrap().marker_count
    }

    /// The marker currently highlighted by selection, if any.
    pub fn highlighted(&self) -> Option<(ClusterId, String, Zone)> {
        self.state.lock().unwrap().highlighted.clone()
    }
}
