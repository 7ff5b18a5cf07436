#![cfg(target_arch = "wasm32")]
use crate::constants::*;
use folio_core::constants::GRAPH_RADIUS;
use folio_core::{
    ConnectionGraph, HoldGesture, LoadSequence, PointField, PointerTracker, SceneParams,
    VisibilityGate,
};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod cursor;
mod dom;
mod events;
mod frame;
mod input;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

// Independent rng streams for the subsystems, derived from one base seed
fn derive_seed(base: u64, stream: u64) -> u64 {
    base ^ stream.wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #core-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    events::wire_canvas_resize(&canvas);

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let params = SceneParams::default();
    let field = PointField::generate(params.particle_count, derive_seed(SCENE_SEED, 0));
    let graph = ConnectionGraph::build(params.node_count, GRAPH_RADIUS, params.link_threshold);
    log::info!(
        "[scene] particles={} nodes={} links={}",
        field.len(),
        graph.nodes().len(),
        graph.edges().len()
    );

    // ---------------- Interaction state ----------------
    let tracker = Rc::new(RefCell::new(PointerTracker::new()));
    let gate = Rc::new(RefCell::new(VisibilityGate::new(true)));
    let hold = Rc::new(RefCell::new(HoldGesture::new(
        params.hold_duration_ms as f64 / 1000.0,
    )));
    let start_clock = Rc::new(Instant::now());

    events::wire_pointer_tracking(&tracker);
    let magnetics = events::wire_magnetics(&document, params.magnet_strength);
    let tilts = events::wire_tilts(&document);
    let scrambles = events::wire_scrambles(
        &document,
        derive_seed(SCENE_SEED, 1),
        params.scramble_duration_ms,
    );
    events::wire_hold(&document, &hold, &start_clock);
    events::wire_visibility(&canvas, &gate);

    let gpu = frame::init_gpu(&canvas, &graph, params.particle_count + 1).await;
    let loader = frame::LoaderUi::new(LoadSequence::new(derive_seed(SCENE_SEED, 2)), &document);

    // Scheduler loop driven by requestAnimationFrame
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        document: document.clone(),
        canvas: canvas.clone(),
        tracker,
        cursor_el: dom::element_by_id(&document, CURSOR_ID),
        loader,
        scrambles,
        magnetics,
        tilts,
        hold,
        hold_button: dom::element_by_id(&document, HOLD_BUTTON_ID),
        hold_ring: dom::element_by_id(&document, HOLD_RING_ID),
        hold_label: dom::element_by_id(&document, HOLD_LABEL_ID),
        burst: None,
        gate,
        field,
        gpu,
        start: start_clock,
        last_instant: Instant::now(),
        scramble_accum: 0.0,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
