//! Selection state container.
//!
//! Two independently-tracked ids: the committed selection (drives the
//! detail panel) and the transient active marker (drives the popup).
//! Committing a selection aligns both; dismissing the popup touches only
//! the marker.

use heatlens_core::models::ClusterId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<ClusterId>,
    active_marker: Option<ClusterId>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&ClusterId> {
        self.selected.as_ref()
    }

    pub fn active_marker(&self) -> Option<&ClusterId> {
        self.active_marker.as_ref()
    }

    /// Commit a selection: both ids point at the same cluster.
    pub fn select(&mut self, id: ClusterId) {
        self.active_marker = Some(id.clone());
        self.selected = Some(id);
    }

    /// Dismiss the popup without disturbing the committed selection.
    pub fn clear_marker(&mut self) {
        self.active_marker = None;
    }

    /// Hover moves only the transient marker.
    pub fn hover(&mut self, id: ClusterId) {
        self.active_marker = Some(id);
    }
}
