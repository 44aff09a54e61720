//! Starfall entry point
//!
//! On the web this starts every engine whose canvas exists on the page.
//! Natively it runs the engines headless against a recording surface and
//! logs what a few seconds of animation would draw.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    starfall::platform::init_logging();
    log::info!("Starfall starting...");
    starfall::platform::start_all();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Starfall (native) starting...");
    log::info!("Native mode runs headless - build for wasm32 and serve the page for the real thing");

    headless::run(&starfall::Settings::load());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use glam::Vec2;
    use starfall::consts::FRAME_MS;
    use starfall::engine::{Scene, run_frames};
    use starfall::platform::clock_seed;
    use starfall::renderer::RecordingSurface;
    use starfall::{FlowerRainScene, GalaxyScene, Settings, SparkScene, SurfaceController, Viewport};

    /// Five seconds at 60 Hz
    const FRAMES: u64 = 300;

    pub fn run(settings: &Settings) {
        let viewport = Viewport::new(1280.0, 720.0);
        let fallback = clock_seed();

        simulate(GalaxyScene::new(settings), viewport, settings.seed_or(fallback, 0), |_| {});
        simulate(FlowerRainScene::new(settings), viewport, settings.seed_or(fallback, 1), |_| {});
        simulate(SparkScene::new(settings), viewport, settings.seed_or(fallback, 2), |ctrl| {
            ctrl.scene_mut().emit(Vec2::new(640.0, 360.0));
        });
    }

    fn simulate<C: Scene>(
        scene: C,
        viewport: Viewport,
        seed: u64,
        setup: impl FnOnce(&mut SurfaceController<RecordingSurface, C>),
    ) {
        let mut ctrl = SurfaceController::new(RecordingSurface::new(), scene, seed);
        ctrl.start(viewport);
        setup(&mut ctrl);

        // Halfway through, shrink the viewport like a window resize
        let half = FRAMES / 2;
        let mut ran = run_frames(&mut ctrl, half, 0.0, FRAME_MS);
        ctrl.on_resize(Viewport::new(viewport.width * 0.75, viewport.height * 0.75));
        ran += run_frames(&mut ctrl, FRAMES - half, half as f64 * FRAME_MS, FRAME_MS);

        let stats = ctrl.surface().frame_stats();
        log::info!(
            "{}: {} frames, {} live entities; last frame drew {} solid fills, {} gradient fills, {} strokes, {} glyphs",
            ctrl.scene().name(),
            ran,
            ctrl.scene().entity_count(),
            stats.solid_fills,
            stats.gradient_fills,
            stats.strokes,
            stats.glyphs,
        );
    }
}
