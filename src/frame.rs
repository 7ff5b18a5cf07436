use crate::constants::*;
use crate::{cursor, dom, input, render};
use folio_core::{
    ring_dashoffset, Burst, ConnectionGraph, HoldGesture, HoldPhase, LoadSequence, MagneticEffect,
    PointField, PointerTracker, Scrambler, TiltEffect, VisibilityGate,
};
use folio_core::constants::SCRAMBLE_TICK_MS;
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One scramble-driven text element. Event closures request a start; the
/// scheduler performs it on the next frame so all mutation happens in tick
/// order.
pub struct ScrambleSlot {
    pub el: web::Element,
    pub engine: Scrambler,
    pub text: String,
    pub duration_ms: u32,
    pub mount_at: Option<f32>,
    pub start_requested: bool,
}

pub struct MagneticSlot {
    pub el: web::Element,
    pub effect: Rc<RefCell<MagneticEffect>>,
}

pub struct TiltSlot {
    pub el: web::Element,
    pub effect: Rc<RefCell<TiltEffect>>,
}

/// Boot overlay elements plus the simulated sequence driving them.
pub struct LoaderUi {
    pub seq: LoadSequence,
    pub overlay: Option<web::Element>,
    pub bar: Option<web::Element>,
    pub status: Option<web::Element>,
    pub percent: Option<web::Element>,
    hidden: bool,
}

impl LoaderUi {
    pub fn new(seq: LoadSequence, document: &web::Document) -> Self {
        Self {
            seq,
            overlay: dom::element_by_id(document, PRELOADER_ID),
            bar: dom::element_by_id(document, PRELOADER_BAR_ID),
            status: dom::element_by_id(document, PRELOADER_STATUS_ID),
            percent: dom::element_by_id(document, PRELOADER_PERCENT_ID),
            hidden: false,
        }
    }

    fn tick(&mut self, dt: f32) {
        if self.hidden {
            return;
        }
        self.seq.tick(dt);
        let p = self.seq.progress();
        if let Some(bar) = &self.bar {
            dom::set_style(bar, &format!("width:{:.0}%", p.min(100.0)));
        }
        if let Some(percent) = &self.percent {
            dom::set_text(percent, &format!("INITIALIZING... {:.0}%", p.floor()));
        }
        if let Some(status) = &self.status {
            dom::set_text(status, folio_core::status_line(p));
        }
        if self.seq.is_finished() {
            if let Some(overlay) = &self.overlay {
                dom::hide(overlay);
            }
            self.hidden = true;
        }
    }
}

/// Completion burst: a ring of throwaway sprites parented to the hold button.
pub(crate) struct BurstFx {
    burst: Burst,
    nodes: Vec<web::Element>,
}

impl BurstFx {
    fn spawn(document: &web::Document, button: &web::Element) -> Option<Self> {
        let burst = Burst::new();
        let mut nodes = Vec::with_capacity(burst.offsets().len());
        for _ in 0..burst.offsets().len() {
            let node = document.create_element("span").ok()?;
            let _ = node.set_attribute("class", "burst-dot");
            button.append_child(&node).ok()?;
            nodes.push(node);
        }
        Some(Self { burst, nodes })
    }

    /// Returns false once expired; nodes are removed then.
    fn tick(&mut self, dt: f32) -> bool {
        if !self.burst.tick(dt) {
            for node in &self.nodes {
                node.remove();
            }
            return false;
        }
        let opacity = self.burst.opacity();
        for (node, offset) in self.nodes.iter().zip(self.burst.offsets()) {
            dom::set_style(
                node,
                &format!(
                    "transform:translate({:.1}px,{:.1}px);opacity:{:.2}",
                    offset.x, offset.y, opacity
                ),
            );
        }
        true
    }
}

pub struct FrameContext {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,

    pub tracker: Rc<RefCell<PointerTracker>>,
    pub cursor_el: Option<web::Element>,

    pub loader: LoaderUi,
    pub scrambles: Vec<Rc<RefCell<ScrambleSlot>>>,
    pub magnetics: Vec<MagneticSlot>,
    pub tilts: Vec<TiltSlot>,

    pub hold: Rc<RefCell<HoldGesture>>,
    pub hold_button: Option<web::Element>,
    pub hold_ring: Option<web::Element>,
    pub hold_label: Option<web::Element>,
    pub(crate) burst: Option<BurstFx>,

    pub gate: Rc<RefCell<VisibilityGate>>,
    pub field: PointField,
    pub gpu: Option<render::GpuState<'static>>,

    pub start: Rc<Instant>,
    pub last_instant: Instant,
    pub scramble_accum: f32,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        let t = self.start.elapsed().as_secs_f32();

        // Pointer first: every consumer below reads this tick's snapshot.
        self.tracker.borrow_mut().tick();
        let (snapshot, pointer_seen) = {
            let tr = self.tracker.borrow();
            (tr.read(), tr.is_visible())
        };
        if let Some(el) = &self.cursor_el {
            cursor::apply(el, snapshot.position, snapshot.hovering, pointer_seen);
        }

        self.loader.tick(dt);

        self.tick_scrambles(t, dt);

        for slot in &self.magnetics {
            let mut fx = slot.effect.borrow_mut();
            fx.tick(dt);
            let o = fx.offset();
            dom::set_style(
                &slot.el,
                &format!("transform:translate3d({:.1}px,{:.1}px,0)", o.x, o.y),
            );
        }
        for slot in &self.tilts {
            let mut fx = slot.effect.borrow_mut();
            fx.tick(dt);
            let r = fx.rotation();
            dom::set_style(
                &slot.el,
                &format!(
                    "transform:perspective(800px) rotateX({:.2}deg) rotateY({:.2}deg)",
                    r.x, r.y
                ),
            );
        }

        self.tick_hold(self.start.elapsed().as_secs_f64(), dt);

        // Field and paint only while the hero canvas is on screen.
        if self.gate.borrow().is_visible() {
            let pointer_plane = pointer_seen.then(|| self.pointer_on_plane(snapshot.position));
            self.field.update(t, pointer_plane);
            if let Some(gpu) = &mut self.gpu {
                let w = self.canvas.width();
                let h = self.canvas.height();
                gpu.resize_if_needed(w, h);
                if let Err(e) = gpu.render(t, &self.field) {
                    log::error!("render error: {:?}", e);
                }
            }
        }
    }

    /// Smoothed client position -> NDC over the canvas -> z=0 view plane.
    fn pointer_on_plane(&self, client: Vec2) -> Vec2 {
        let rect = self.canvas.get_bounding_client_rect();
        let local = client - Vec2::new(rect.left() as f32, rect.top() as f32);
        let ndc = input::pointer_ndc(local, Vec2::new(rect.width() as f32, rect.height() as f32));
        let aspect = self.canvas.width() as f32 / self.canvas.height().max(1) as f32;
        folio_core::Camera::front(aspect).pointer_to_plane(ndc)
    }

    fn tick_scrambles(&mut self, t: f32, dt: f32) {
        // Start triggers are frame-aligned; the reveal itself runs on its own
        // fixed cadence inside the loop below.
        for slot in &self.scrambles {
            let mut s = slot.borrow_mut();
            if let Some(at) = s.mount_at {
                if t >= at {
                    s.mount_at = None;
                    s.start_requested = true;
                }
            }
            if s.start_requested {
                s.start_requested = false;
                let (text, duration) = (s.text.clone(), s.duration_ms);
                s.engine.start(&text, duration);
            }
        }
        self.scramble_accum += dt;
        let tick_sec = SCRAMBLE_TICK_MS as f32 / 1000.0;
        while self.scramble_accum >= tick_sec {
            self.scramble_accum -= tick_sec;
            for slot in &self.scrambles {
                let mut s = slot.borrow_mut();
                if s.engine.is_active() {
                    s.engine.tick();
                    let text = s.engine.display().to_owned();
                    dom::set_text(&s.el, &text);
                }
            }
        }
    }

    fn tick_hold(&mut self, now_sec: f64, dt: f32) {
        let completed = self.hold.borrow_mut().tick(now_sec);
        let (phase, progress) = {
            let h = self.hold.borrow();
            (h.phase(), h.progress())
        };
        if let Some(ring) = &self.hold_ring {
            let offset = ring_dashoffset(if phase == HoldPhase::Completed {
                1.0
            } else {
                progress
            });
            let _ = ring.set_attribute("stroke-dashoffset", &format!("{offset:.1}"));
        }
        if let Some(label) = &self.hold_label {
            dom::set_text(
                label,
                match phase {
                    HoldPhase::Idle => HOLD_LABEL_IDLE,
                    HoldPhase::Holding => HOLD_LABEL_HOLDING,
                    HoldPhase::Completed => HOLD_LABEL_DONE,
                },
            );
        }
        if completed {
            if let Some(button) = &self.hold_button {
                self.burst = BurstFx::spawn(&self.document, button);
            }
            dom::open_mail_intent(MAIL_INTENT_URL);
        }
        if let Some(fx) = &mut self.burst {
            if !fx.tick(dt) {
                self.burst = None;
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    graph: &ConnectionGraph,
    sprite_capacity: usize,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, graph, sprite_capacity).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
