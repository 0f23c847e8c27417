//! Heatlens Engine - Layer composition and selection synchronization
//!
//! The state containers (layer visibility, selection), the pure layer
//! compositor, and the `Explorer` facade that keeps list selection, the map
//! camera, and marker highlighting in lockstep.

pub mod compositor;
pub mod events;
pub mod explorer;
pub mod layers;
pub mod selection;

pub use compositor::{compose, ComposeParams};
pub use events::{EngineEvent, EngineEventKind, EventQueue};
pub use explorer::Explorer;
pub use layers::LayerVisibility;
pub use selection::SelectionState;
