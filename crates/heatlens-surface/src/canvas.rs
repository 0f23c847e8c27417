//! In-memory canvas surface.
//!
//! Stands in for an interactive tile-service renderer: it holds a "native"
//! session acquired asynchronously against a credential, retains the last
//! applied scene, and tracks the camera target. State sits behind an
//! `Arc<Mutex<..>>` so tests and the CLI can observe draws through a probe
//! while the host owns the adapter.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use heatlens_core::models::{FocusRequest, SceneDrawables};
use heatlens_core::ports::MapSurface;
use heatlens_core::{HeatlensError, Result};

#[derive(Debug, Default)]
struct CanvasState {
    /// Stand-in for the native rendering handle.
    session: Option<TileSession>,
    last_scene: Option<SceneDrawables>,
    camera: Option<FocusRequest>,
    focus_count: u64,
}

#[derive(Debug)]
struct TileSession {
    #[allow(dead_code)]
    token: String,
}

pub struct CanvasSurface {
    state: Arc<Mutex<CanvasState>>,
    init_delay: Duration,
}

impl CanvasSurface {
    pub fn new() -> Self {
        Self::with_init_delay(Duration::ZERO)
    }

    /// A canvas whose initialization takes at least `delay`, to exercise
    /// in-flight lifecycle transitions.
    pub fn with_init_delay(delay: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(CanvasState::default())),
            init_delay: delay,
        }
    }

    /// Observation handle sharing this surface's state.
    pub fn probe(&self) -> CanvasProbe {
        CanvasProbe {
            state: Arc::clone(&self.state),
        }
    }
}

impl Default for CanvasSurface {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MapSurface for CanvasSurface {
    fn name(&self) -> &'static str {
        "canvas"
    }

    async fn initialize(&mut self, token: &str) -> Result<()> {
        // Simulated script/tile-service load.
        tokio::time::sleep(self.init_delay).await;

        if token.trim().is_empty() {
            return Err(HeatlensError::SurfaceInitFailed {
                reason: "map credential is empty".to_string(),
            });
        }
        if token.starts_with("bad-") {
            return Err(HeatlensError::SurfaceInitFailed {
                reason: "credential rejected by tile service".to_string(),
            });
        }

        let mut state = self.state.lock().unwrap();
        state.session = Some(TileSession {
            token: token.to_string(),
        });
        Ok(())
    }

    fn apply(&mut self, scene: &SceneDrawables) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        if state.session.is_none() {
            return Err(HeatlensError::SurfaceInitFailed {
                reason: "canvas has no active session".to_string(),
            });
        }
        state.last_scene = Some(scene.clone());
        Ok(())
    }

    fn focus(&mut self, request: FocusRequest) {
        let mut state = self.state.lock().unwrap();
        if state.session.is_none() {
            return;
        }
        // Overwrite semantics: the newest request owns the camera.
        state.camera = Some(request);
        state.focus_count += 1;
    }

    fn destroy(&mut self) {
        let mut state = self.state.lock().unwrap();
        state.session = None;
        state.last_scene = None;
        state.camera = None;
    }
}

impl Drop for CanvasSurface {
    // Backstop for adapters dropped mid-initialization by an aborted task.
    fn drop(&mut self) {
        self.destroy();
    }
}

/// Read-only view over a canvas's retained state.
#[derive(Clone)]
pub struct CanvasProbe {
    state: Arc<Mutex<CanvasState>>,
}

impl CanvasProbe {
    pub fn initialized(&self) -> bool {
        self.state.lock().unwrap().session.is_some()
    }

    pub fn last_scene(&self) -> Option<SceneDrawables> {
        self.state.lock().unwrap().last_scene.clone()
    }

    pub fn camera(&self) -> Option<FocusRequest> {
        self.state.lock().unwrap().camera
    }

    pub fn focus_count(&self) -> u64 {
        self.state.lock().unwrap().focus_count
    }
}
