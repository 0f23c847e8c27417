//! Asynchronous lifecycle host for a map surface.
//!
//! The host exclusively owns the adapter (and through it the native
//! rendering handle) and drives the lifecycle
//! `uninitialized -> initializing -> ready | failed`. Initialization runs on
//! a spawned task; completion checks a liveness flag first, so a result
//! arriving after `destroy` never mutates state. Lock poisoning is treated
//! as unrecoverable, hence the `unwrap()` on mutex guards.

use std::mem;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use heatlens_core::models::{FocusRequest, SceneDrawables};
use heatlens_core::ports::MapSurface;

/// Surface lifecycle phase. There is no destroyed variant: `destroy` resets
/// the phase to `Uninitialized` and marks the host dead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfacePhase {
    Uninitialized,
    Initializing,
    Ready,
    Failed,
}

/// Lifecycle notifications for the host shell (toast presentation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    Ready,
    InitFailed { reason: String },
}

struct HostState {
    phase: SurfacePhase,
    /// Taken out for the duration of the init task, present otherwise.
    surface: Option<Box<dyn MapSurface>>,
    /// Last composed scene; replayed as the initial full draw on ready.
    scene: Option<SceneDrawables>,
    last_focus: Option<FocusRequest>,
    focus_seq: u64,
    events: Vec<SurfaceEvent>,
}

struct HostShared {
    alive: AtomicBool,
    state: Mutex<HostState>,
}

pub struct SurfaceHost {
    shared: Arc<HostShared>,
    init_task: Option<tokio::task::JoinHandle<()>>,
}

impl SurfaceHost {
    pub fn new(surface: Box<dyn MapSurface>) -> Self {
        Self {
            shared: Arc::new(HostShared {
                alive: AtomicBool::new(true),
                state: Mutex::new(HostState {
                    phase: SurfacePhase::Uninitialized,
                    surface: Some(surface),
                    scene: None,
                    last_focus: None,
                    focus_seq: 0,
                    events: Vec::new(),
                }),
            }),
            init_task: None,
        }
    }

    pub fn phase(&self) -> SurfacePhase {
        self.shared.state.lock().unwrap().phase
    }

    pub fn is_alive(&self) -> bool {
        self.shared.alive.load(Ordering::SeqCst)
    }

    /// Whether the owned adapter needs a credential to initialize.
    /// Reports `true` while the adapter is out on an init task.
    pub fn requires_credential(&self) -> bool {
        self.shared
            .state
            .lock()
            .unwrap()
            .surface
            .as_ref()
            .map_or(true, |s| s.requires_credential())
    }

    /// Start asynchronous initialization with the given credential.
    ///
    /// No-op while already `Initializing` or `Ready`, and after `destroy`.
    /// From `Failed` this retries with the new credential. Must be called
    /// within a Tokio runtime.
    pub fn begin_initialize(&mut self, token: &str) {
        if !self.is_alive() {
            return;
        }

        let surface = {
            let mut state = self.shared.state.lock().unwrap();
            match state.phase {
                SurfacePhase::Initializing | SurfacePhase::Ready => return,
                SurfacePhase::Uninitialized | SurfacePhase::Failed => {}
            }
            let Some(surface) = state.surface.take() else {
                return;
            };
            state.phase = SurfacePhase::Initializing;
            surface
        };

        let shared = Arc::clone(&self.shared);
        let token = token.to_string();
        self.init_task = Some(tokio::spawn(run_initialize(shared, surface, token)));
    }

    /// Stage a scene and, when ready, draw it.
    ///
    /// The scene is retained in every phase so the initial full draw after
    /// `initializing -> ready` always reflects the latest compositor output.
    pub fn apply(&mut self, scene: &SceneDrawables) {
        let mut state = self.shared.state.lock().unwrap();
        state.scene = Some(scene.clone());
        if state.phase == SurfacePhase::Ready {
            if let Some(surface) = state.surface.as_mut() {
                if let Err(e) = surface.apply(scene) {
                    tracing::warn!("surface draw rejected: {e}");
                }
            }
        }
    }

    /// Request a camera transition. Fire-and-forget; the newest request
    /// supersedes earlier ones.
    pub fn focus(&mut self, request: FocusRequest) {
        let mut state = self.shared.state.lock().unwrap();
        state.focus_seq += 1;
        state.last_focus = Some(request);
        if state.phase == SurfacePhase::Ready {
            if let Some(surface) = state.surface.as_mut() {
                surface.focus(request);
            }
        }
    }

    /// The most recent focus request, with its sequence number.
    pub fn last_focus(&self) -> Option<(u64, FocusRequest)> {
        let state = self.shared.state.lock().unwrap();
        state.last_focus.map(|req| (state.focus_seq, req))
    }

    /// Take all pending lifecycle events, oldest first.
    pub fn drain_events(&mut self) -> Vec<SurfaceEvent> {
        mem::take(&mut self.shared.state.lock().unwrap().events)
    }

    /// Tear down: release native resources, reset the phase, and cancel
    /// the effect of any in-flight initialization. The init task is not
    /// interrupted; its completion checks the liveness flag, releases the
    /// adapter, and leaves host state untouched.
    pub fn destroy(&mut self) {
        let mut state = self.shared.state.lock().unwrap();
        self.shared.alive.store(false, Ordering::SeqCst);
        if let Some(mut surface) = state.surface.take() {
            surface.destroy();
        }
        state.phase = SurfacePhase::Uninitialized;
        state.scene = None;
        state.events.clear();
    }

    /// Wait for an in-flight initialization task to finish. Test and CLI
    /// convenience; the engine itself never blocks on initialization.
    pub async fn settled(&mut self) {
        if let Some(task) = self.init_task.take() {
            let _ = task.await;
        }
    }
}

async fn run_initialize(shared: Arc<HostShared>, mut surface: Box<dyn MapSurface>, token: String) {
    let name = surface.name();
    let outcome = surface.initialize(&token).await;

    let mut state = shared.state.lock().unwrap();
    if !shared.alive.load(Ordering::SeqCst) {
        // Unmounted while we were loading: release and walk away.
        drop(state);
        surface.destroy();
        return;
    }

    match outcome {
        Ok(()) => {
            tracing::debug!(surface = name, "surface ready");
            state.phase = SurfacePhase::Ready;
            if let Some(scene) = state.scene.clone() {
                if let Err(e) = surface.apply(&scene) {
                    tracing::warn!("initial draw rejected: {e}");
                }
            }
            state.events.push(SurfaceEvent::Ready);
        }
        Err(e) => {
            tracing::warn!(surface = name, "surface initialization failed: {e}");
            surface.destroy();
            state.phase = SurfacePhase::Failed;
            state.events.push(SurfaceEvent::InitFailed {
                reason: e.to_string(),
            });
        }
    }
    state.surface = Some(surface);
}
