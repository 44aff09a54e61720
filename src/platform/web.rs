//! Browser glue for the engines (WASM only)

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use super::clock_seed;
use crate::consts::*;
use crate::engine::{FlowerRainScene, GalaxyScene, Scene, SparkScene, SurfaceController};
use crate::renderer::CanvasSurface;
use crate::{CancelToken, Settings, Viewport};

type Engine<C> = Rc<RefCell<SurfaceController<CanvasSurface, C>>>;

/// Seed salts so engines sharing a configured seed differ
const GALAXY_SALT: u64 = 0;
const FLOWER_SALT: u64 = 1;
const SPARK_SALT: u64 = 2;

/// Cancel tokens of engines started on this page
#[derive(Default)]
struct Running {
    galaxy: Option<CancelToken>,
    flower_rain: Option<CancelToken>,
    sparks: Option<CancelToken>,
}

thread_local! {
    static RUNNING: RefCell<Running> = RefCell::new(Running::default());
}

/// Route `log` to the browser console and install the panic hook
pub fn init_logging() {
    console_error_panic_hook::set_once();
    // Err only means a logger is already installed
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Current `innerWidth` x `innerHeight`
fn window_viewport() -> Option<Viewport> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Viewport::new(width as f32, height as f32))
}

/// Attach a scene to `<canvas id=canvas_id>` and start its frame loop.
///
/// A missing canvas is not an error: the engine simply never starts.
fn mount<C: Scene + 'static>(canvas_id: &str, scene: C, seed: u64) -> Option<Engine<C>> {
    let Some(surface) = CanvasSurface::from_element_id(canvas_id) else {
        log::debug!("No 2d canvas #{}, skipping {}", canvas_id, scene.name());
        return None;
    };
    let viewport = window_viewport()?;

    let mut controller = SurfaceController::new(surface, scene, seed);
    controller.start(viewport);
    let engine = Rc::new(RefCell::new(controller));

    subscribe_resize(engine.clone());
    request_animation_frame(engine.clone());
    Some(engine)
}

fn subscribe_resize<C: Scene + 'static>(engine: Engine<C>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
        if let Some(viewport) = window_viewport() {
            engine.borrow_mut().on_resize(viewport);
        }
    });
    let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn request_animation_frame<C: Scene + 'static>(engine: Engine<C>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(move |time: f64| {
        frame_loop(engine, time);
    });
    let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    closure.forget();
}

fn frame_loop<C: Scene + 'static>(engine: Engine<C>, time: f64) {
    let keep_going = engine.borrow_mut().frame(time);
    if keep_going {
        request_animation_frame(engine);
    }
}

/// Emit sparks from the center of every hover target
fn subscribe_hover(engine: Engine<SparkScene>) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(targets) = document.query_selector_all(SPARK_TARGETS) else {
        return;
    };

    for i in 0..targets.length() {
        let Some(element) = targets.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let engine = engine.clone();
        let target = element.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            let rect = target.get_bounding_client_rect();
            let center = Vec2::new(
                (rect.left() + rect.width() / 2.0) as f32,
                (rect.top() + rect.height() / 2.0) as f32,
            );
            let mut engine = engine.borrow_mut();
            if engine.is_running() {
                engine.scene_mut().emit(center);
            }
        });
        let _ = element
            .add_event_listener_with_callback("mouseenter", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    log::info!("Hover sparks attached to {} elements", targets.length());
}

/// Start the galaxy background on `#galaxy-canvas` (once per page)
#[wasm_bindgen]
pub fn start_galaxy() {
    if RUNNING.with(|r| r.borrow().galaxy.is_some()) {
        return;
    }
    let settings = Settings::load();
    let seed = settings.seed_or(clock_seed(), GALAXY_SALT);
    if let Some(engine) = mount(GALAXY_CANVAS_ID, GalaxyScene::new(&settings), seed) {
        let token = engine.borrow().cancel_token();
        RUNNING.with(|r| r.borrow_mut().galaxy = Some(token));
    }
}

/// Start the flower rain overlay on `#flower-canvas` (once per page)
#[wasm_bindgen]
pub fn start_flower_rain() {
    if RUNNING.with(|r| r.borrow().flower_rain.is_some()) {
        return;
    }
    let settings = Settings::load();
    let seed = settings.seed_or(clock_seed(), FLOWER_SALT);
    if let Some(engine) = mount(FLOWER_CANVAS_ID, FlowerRainScene::new(&settings), seed) {
        let token = engine.borrow().cancel_token();
        RUNNING.with(|r| r.borrow_mut().flower_rain = Some(token));
    }
}

/// Start hover sparks on `#spark-canvas` (once per page)
#[wasm_bindgen]
pub fn start_sparks() {
    if RUNNING.with(|r| r.borrow().sparks.is_some()) {
        return;
    }
    let settings = Settings::load();
    if !settings.hover_sparks {
        log::info!("Hover sparks disabled in settings");
        return;
    }
    let seed = settings.seed_or(clock_seed(), SPARK_SALT);
    if let Some(engine) = mount(SPARK_CANVAS_ID, SparkScene::new(&settings), seed) {
        let token = engine.borrow().cancel_token();
        subscribe_hover(engine);
        RUNNING.with(|r| r.borrow_mut().sparks = Some(token));
    }
}

/// Start every engine whose canvas is present
pub fn start_all() {
    start_galaxy();
    start_flower_rain();
    start_sparks();
}

/// Stop every running engine after its current frame
#[wasm_bindgen]
pub fn stop_all() {
    RUNNING.with(|r| {
        let running = r.borrow();
        for token in [&running.galaxy, &running.flower_rain, &running.sparks]
            .into_iter()
            .flatten()
        {
            token.cancel();
        }
    });
}
