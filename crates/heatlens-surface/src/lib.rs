//! Heatlens Surface - Map-surface adapters and lifecycle host
//!
//! Adapters implementing the `MapSurface` port from `heatlens-core`, plus
//! the `SurfaceHost` that owns an adapter's asynchronous initialization
//! lifecycle. The concrete adapter is selected by configuration, so the
//! engine never depends on a particular rendering library.

pub mod canvas;
pub mod host;
pub mod placeholder;

use heatlens_core::config::SurfaceKind;
use heatlens_core::ports::MapSurface;

pub use canvas::{CanvasProbe, CanvasSurface};
pub use host::{SurfaceEvent, SurfaceHost, SurfacePhase};
pub use placeholder::{PlaceholderProbe, PlaceholderSurface};

/// Build the configured surface adapter.
pub fn build_surface(kind: SurfaceKind) -> Box<dyn MapSurface> {
    match kind {
        SurfaceKind::Canvas => Box::new(CanvasSurface::new()),
        SurfaceKind::Placeholder => Box::new(PlaceholderSurface::new()),
    }
}
