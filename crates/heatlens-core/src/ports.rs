//! Port trait definitions
//!
//! These traits define the interfaces that surface adapters must implement.
//! A rendering surface might be a full interactive map or a static
//! placeholder; the engine only speaks this capability interface.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{FocusRequest, SceneDrawables};

/// A concrete map-rendering surface.
///
/// Lifecycle is driven from outside: `initialize` once, `apply`/`focus`
/// while live, `destroy` on unmount. Implementations own their native
/// rendering handle exclusively and must release it in `destroy` (and as a
/// backstop in `Drop`, since an aborted initialization can drop the adapter
/// mid-flight).
#[async_trait]
pub trait MapSurface: Send {
    /// Adapter name for diagnostics and logging.
    fn name(&self) -> &'static str;

    /// Whether `initialize` needs a map credential.
    ///
    /// Credential-less surfaces (the static placeholder) are initialized
    /// immediately on mount so they can start mirroring applied scenes.
    fn requires_credential(&self) -> bool {
        true
    }

    /// Asynchronously acquire the native rendering handle.
    ///
    /// The one genuine suspension point in the engine: typically a network
    /// round trip for the rendering library. Failure must leave no partial
    /// native resources behind.
    async fn initialize(&mut self, token: &str) -> Result<()>;

    /// Push a full set of drawables. Only meaningful after a successful
    /// `initialize`; adapters reject earlier calls.
    fn apply(&mut self, scene: &SceneDrawables) -> Result<()>;

    /// Begin a camera transition. Fire-and-forget; a newer request
    /// supersedes the visual effect of any in-flight one.
    fn focus(&mut self, request: FocusRequest);

    /// Release all native resources. Idempotent.
    fn destroy(&mut self);
}
