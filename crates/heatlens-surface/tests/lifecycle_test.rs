//! Lifecycle races: late-arriving initialization results must never mutate
//! host state after teardown.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use heatlens_core::models::{FocusRequest, SceneDrawables};
use heatlens_core::ports::MapSurface;
use heatlens_core::Result;
use heatlens_surface::{SurfaceHost, SurfacePhase};
use tokio::sync::oneshot;

/// A surface whose initialization blocks until an external gate opens,
/// so tests control exactly when the async result arrives.
struct GatedSurface {
    gate: Option<oneshot::Receiver<Result<()>>>,
    released: Arc<AtomicBool>,
}

fn init_failed(reason: &str) -> heatlens_core::HeatlensError {
    heatlens_core::HeatlensError::SurfaceInitFailed {
        reason: reason.to_string(),
    }
}

impl GatedSurface {
    fn new() -> (Self, oneshot::Sender<Result<()>>, Arc<AtomicBool>) {
        let (tx, rx) = oneshot::channel();
        let released = Arc::new(AtomicBool::new(false));
        (
            Self {
                gate: Some(rx),
                released: Arc::clone(&released),
            },
            tx,
            released,
        )
    }
}

#[async_trait]
impl MapSurface for GatedSurface {
    fn name(&self) -> &'static str {
        "gated"
    }

    async fn initialize(&mut self, _token: &str) -> Result<()> {
        match self.gate.take() {
            Some(rx) => rx.await.unwrap_or_else(|_| Err(init_failed("gate dropped"))),
            None => Ok(()),
        }
    }

    fn apply(&mut self, _scene: &SceneDrawables) -> Result<()> {
        Ok(())
    }

    fn focus(&mut self, _request: FocusRequest) {}

    fn destroy(&mut self) {
        self.released.store(true, Ordering::SeqCst);
    }
}

#[tokio::test]
async fn late_success_after_destroy_mutates_nothing() {
    let (surface, gate, released) = GatedSurface::new();
    let mut host = SurfaceHost::new(Box::new(surface));

    host.begin_initialize("tile-token");
    assert_eq!(host.phase(), SurfacePhase::Initializing);

    // Unmount while initialization is in flight.
    host.destroy();
    assert!(!host.is_alive());

    // The (simulated) network load completes afterwards.
    let _ = gate.send(Ok(()));
    host.settled().await;

    assert_ne!(host.phase(), SurfacePhase::Ready);
    assert!(host.drain_events().is_empty());
    assert!(released.load(Ordering::SeqCst));
}

#[tokio::test]
async fn late_failure_after_destroy_is_silent() {
    let (surface, gate, released) = GatedSurface::new();
    let mut host = SurfaceHost::new(Box::new(surface));

    host.begin_initialize("tile-token");
    host.destroy();

    let _ = gate.send(Err(init_failed("script load timed out")));
    host.settled().await;

    assert_ne!(host.phase(), SurfacePhase::Failed);
    assert!(host.drain_events().is_empty());
    assert!(released.load(Ordering::SeqCst));
}

#[tokio::test]
async fn begin_initialize_after_destroy_is_rejected() {
    let (surface, _gate, _released) = GatedSurface::new();
    let mut host = SurfaceHost::new(Box::new(surface));

    host.destroy();
    host.begin_initialize("tile-token");
    assert_ne!(host.phase(), SurfacePhase::Initializing);
}

#[tokio::test]
async fn concurrent_begin_initialize_is_single_flight() {
    let (surface, gate, _released) = GatedSurface::new();
    let mut host = SurfaceHost::new(Box::new(surface));

    host.begin_initialize("tile-token");
    // Re-entrant call while in flight: must not spawn a second task or
    // disturb the phase.
    host.begin_initialize("tile-token");
    assert_eq!(host.phase(), SurfacePhase::Initializing);

    let _ = gate.send(Ok(()));
    host.settled().await;
    assert_eq!(host.phase(), SurfacePhase::Ready);
}
