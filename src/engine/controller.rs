//! Per-canvas surface controller
//!
//! Owns the drawing surface, one scene, the viewport and the RNG. The host
//! calls [`SurfaceController::frame`] once per display refresh and keeps
//! scheduling while it returns `true`.

use super::{CancelToken, Scene};
use crate::Viewport;
use crate::renderer::Surface;
use crate::sim::{Frame, SimRng, seeded_rng};

/// Lifecycle of the frame loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Constructed, pools not built yet
    Idle,
    /// Frames are being produced
    Running,
    /// `stop()` was called or the cancel token tripped
    Stopped,
}

pub struct SurfaceController<S, C> {
    surface: S,
    scene: C,
    viewport: Viewport,
    /// Resize queued for the next frame boundary (latest wins)
    pending_resize: Option<Viewport>,
    rng: SimRng,
    state: LoopState,
    cancel: CancelToken,
    frames: u64,
}

impl<S: Surface, C: Scene> SurfaceController<S, C> {
    pub fn new(surface: S, scene: C, seed: u64) -> Self {
        Self {
            surface,
            scene,
            viewport: Viewport::default(),
            pending_resize: None,
            rng: seeded_rng(seed),
            state: LoopState::Idle,
            cancel: CancelToken::new(),
            frames: 0,
        }
    }

    /// Size the surface, build every pool and enter the running state
    pub fn start(&mut self, viewport: Viewport) {
        if self.state != LoopState::Idle {
            log::debug!("{} engine already started ({:?})", self.scene.name(), self.state);
            return;
        }

        self.viewport = viewport;
        self.pending_resize = None;
        self.surface.resize(viewport);
        self.scene.build(viewport, &mut self.rng);
        self.state = LoopState::Running;

        log::info!(
            "{} engine started at {}x{} with {} entities",
            self.scene.name(),
            viewport.width,
            viewport.height,
            self.scene.entity_count()
        );
    }

    /// Run one frame at `time_ms` on the monotonic clock.
    ///
    /// Returns `false` once the loop should no longer be rescheduled.
    pub fn frame(&mut self, time_ms: f64) -> bool {
        if self.state == LoopState::Running && self.cancel.is_cancelled() {
            self.halt();
        }
        if self.state != LoopState::Running {
            return false;
        }

        // Pools are only swapped here, never while the scene is iterating
        if let Some(viewport) = self.pending_resize.take() {
            self.apply_resize(viewport);
        }

        self.surface.clear();
        let frame = Frame::new(self.viewport, time_ms);
        self.scene.step(&frame, &mut self.rng, &mut self.surface);
        self.frames += 1;
        true
    }

    /// Queue a viewport change; applied at the start of the next frame
    pub fn on_resize(&mut self, viewport: Viewport) {
        match self.state {
            LoopState::Running => self.pending_resize = Some(viewport),
            LoopState::Idle | LoopState::Stopped => self.viewport = viewport,
        }
    }

    fn apply_resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.surface.resize(viewport);
        self.scene.resize(viewport, &mut self.rng);
        log::debug!(
            "{} engine resized to {}x{}",
            self.scene.name(),
            viewport.width,
            viewport.height
        );
    }

    /// Stop producing frames; the next `frame` call returns `false`
    pub fn stop(&mut self) {
        self.cancel.cancel();
        if self.state == LoopState::Running {
            self.halt();
        }
    }

    fn halt(&mut self) {
        self.state = LoopState::Stopped;
        self.pending_resize = None;
        self.scene.halt();
        log::info!("{} engine stopped after {} frames", self.scene.name(), self.frames);
    }

    /// Token that stops this loop when cancelled
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running && !self.cancel.is_cancelled()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn has_pending_resize(&self) -> bool {
        self.pending_resize.is_some()
    }

    pub fn scene(&self) -> &C {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut C {
        &mut self.scene
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Settings;
    use crate::engine::{GalaxyScene, run_frames};
    use crate::renderer::{DrawCommand, RecordingSurface};

    const VP: Viewport = Viewport::new(800.0, 600.0);

    fn galaxy() -> SurfaceController<RecordingSurface, GalaxyScene> {
        SurfaceController::new(
            RecordingSurface::new(),
            GalaxyScene::new(&Settings::default()),
            1234,
        )
    }

    #[test]
    fn test_frame_before_start_is_noop() {
        let mut ctrl = galaxy();
        assert!(!ctrl.frame(0.0));
        assert_eq!(ctrl.state(), LoopState::Idle);
        assert!(ctrl.surface().commands.is_empty());
    }

    #[test]
    fn test_start_builds_pools_and_sizes_surface() {
        let mut ctrl = galaxy();
        ctrl.start(VP);
        assert_eq!(ctrl.state(), LoopState::Running);
        assert_eq!(ctrl.surface().viewport, VP);
        assert_eq!(ctrl.scene().stars.len(), 300);
        assert_eq!(ctrl.scene().nebula.len(), 5);
        assert_eq!(ctrl.scene().shooting_stars.len(), 3);
    }

    #[test]
    fn test_each_frame_starts_with_clear() {
        let mut ctrl = galaxy();
        ctrl.start(VP);
        ctrl.surface_mut().take();
        assert!(ctrl.frame(16.0));
        assert_eq!(ctrl.surface().commands.first(), Some(&DrawCommand::Clear));
        assert_eq!(ctrl.frames(), 1);
    }

    #[test]
    fn test_resize_deferred_to_next_frame() {
        let mut ctrl = galaxy();
        ctrl.start(VP);
        let before: Vec<_> = ctrl.scene().stars.iter().map(|s| s.pos).collect();

        let bigger = Viewport::new(1920.0, 1080.0);
        ctrl.on_resize(bigger);
        assert!(ctrl.has_pending_resize());
        assert_eq!(ctrl.viewport(), VP);

        ctrl.frame(16.0);
        assert!(!ctrl.has_pending_resize());
        assert_eq!(ctrl.viewport(), bigger);
        assert_eq!(ctrl.surface().viewport, bigger);
        let after: Vec<_> = ctrl.scene().stars.iter().map(|s| s.pos).collect();
        assert_ne!(before, after);
    }

    #[test]
    fn test_repeated_same_size_resize_rebuilds_each_time() {
        let mut ctrl = galaxy();
        ctrl.start(VP);

        ctrl.on_resize(VP);
        ctrl.frame(16.0);
        let first: Vec<_> = ctrl.scene().stars.iter().map(|s| s.pos).collect();
        assert_eq!(ctrl.scene().stars.len(), 300);
        assert_eq!(ctrl.scene().nebula.len(), 5);

        ctrl.on_resize(VP);
        ctrl.frame(32.0);
        let second: Vec<_> = ctrl.scene().stars.iter().map(|s| s.pos).collect();
        assert_eq!(ctrl.scene().stars.len(), 300);
        assert_eq!(ctrl.scene().nebula.len(), 5);

        assert_ne!(first, second);
    }

    #[test]
    fn test_stop_ends_headless_run() {
        let mut ctrl = galaxy();
        ctrl.start(VP);
        assert_eq!(run_frames(&mut ctrl, 10, 0.0, 16.0), 10);

        let token = ctrl.cancel_token();
        token.cancel();
        assert!(!ctrl.is_running());
        assert_eq!(run_frames(&mut ctrl, 10, 160.0, 16.0), 0);
        assert_eq!(ctrl.state(), LoopState::Stopped);
        assert_eq!(ctrl.frames(), 10);
    }

    #[test]
    fn test_stop_is_immediate_and_drops_pending_resize() {
        let mut ctrl = galaxy();
        ctrl.start(VP);
        ctrl.on_resize(Viewport::new(320.0, 240.0));
        ctrl.stop();
        assert_eq!(ctrl.state(), LoopState::Stopped);
        assert!(!ctrl.has_pending_resize());
        assert!(!ctrl.frame(16.0));
        assert_eq!(ctrl.viewport(), VP);
    }

    #[test]
    fn test_resize_while_idle_updates_viewport_only() {
        let mut ctrl = galaxy();
        ctrl.on_resize(VP);
        assert!(!ctrl.has_pending_resize());
        assert_eq!(ctrl.viewport(), VP);
        assert!(ctrl.scene().stars.is_empty());
    }
}
