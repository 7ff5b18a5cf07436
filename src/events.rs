use crate::constants::*;
use crate::{dom, frame};
use folio_core::constants::SCRAMBLE_MOUNT_DELAY_SEC;
use folio_core::{HoldGesture, MagneticEffect, PointerTracker, Scrambler, TiltEffect, VisibilityGate};
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Raw position from every pointer move; hover intent from mouseover against
/// the interactive-capability selector. Both feed the shared tracker; the
/// smoothing itself happens in the frame loop.
pub fn wire_pointer_tracking(tracker: &Rc<RefCell<PointerTracker>>) {
    let t = tracker.clone();
    let move_closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        t.borrow_mut()
            .update(ev.client_x() as f32, ev.client_y() as f32);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd
            .add_event_listener_with_callback("pointermove", move_closure.as_ref().unchecked_ref());
    }
    move_closure.forget();

    let t = tracker.clone();
    let over_closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let interactive = dom::event_target_element(&ev)
            .and_then(|el| el.closest(INTERACTIVE_SELECTOR).ok().flatten())
            .is_some();
        t.borrow_mut().set_hovering(interactive);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd
            .add_event_listener_with_callback("mouseover", over_closure.as_ref().unchecked_ref());
    }
    over_closure.forget();

    // Follower hides while the pointer is off the page.
    if let Some(body) = dom::window_document().and_then(|d| d.body()) {
        let t = tracker.clone();
        let enter_closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
            t.borrow_mut().set_visible(true);
        }) as Box<dyn FnMut(_)>);
        _ = body
            .add_event_listener_with_callback("mouseenter", enter_closure.as_ref().unchecked_ref());
        enter_closure.forget();

        let t = tracker.clone();
        let leave_closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
            t.borrow_mut().set_visible(false);
        }) as Box<dyn FnMut(_)>);
        _ = body
            .add_event_listener_with_callback("mouseleave", leave_closure.as_ref().unchecked_ref());
        leave_closure.forget();
    }
}

fn tagged_elements(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                out.push(el);
            }
        }
    }
    out
}

pub fn wire_magnetics(document: &web::Document, default_strength: f32) -> Vec<frame::MagneticSlot> {
    let mut slots = Vec::new();
    for el in tagged_elements(document, MAGNETIC_SELECTOR) {
        let strength = el
            .get_attribute("data-magnetic")
            .and_then(|s| s.parse().ok())
            .unwrap_or(default_strength);
        let effect = Rc::new(RefCell::new(MagneticEffect::new(strength)));

        let fx = effect.clone();
        let el_move = el.clone();
        let move_closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            let rect = dom::element_rect(&el_move);
            fx.borrow_mut()
                .pointer_move(rect, Vec2::new(ev.client_x() as f32, ev.client_y() as f32));
        }) as Box<dyn FnMut(_)>);
        _ = el.add_event_listener_with_callback("mousemove", move_closure.as_ref().unchecked_ref());
        move_closure.forget();

        let fx = effect.clone();
        let leave_closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
            fx.borrow_mut().pointer_leave();
        }) as Box<dyn FnMut(_)>);
        _ = el
            .add_event_listener_with_callback("mouseleave", leave_closure.as_ref().unchecked_ref());
        leave_closure.forget();

        slots.push(frame::MagneticSlot { el, effect });
    }
    slots
}

pub fn wire_tilts(document: &web::Document) -> Vec<frame::TiltSlot> {
    let mut slots = Vec::new();
    for el in tagged_elements(document, TILT_SELECTOR) {
        let effect = Rc::new(RefCell::new(TiltEffect::new()));

        let fx = effect.clone();
        let el_move = el.clone();
        let move_closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            let rect = dom::element_rect(&el_move);
            fx.borrow_mut()
                .pointer_move(rect, Vec2::new(ev.client_x() as f32, ev.client_y() as f32));
        }) as Box<dyn FnMut(_)>);
        _ = el.add_event_listener_with_callback("mousemove", move_closure.as_ref().unchecked_ref());
        move_closure.forget();

        let fx = effect.clone();
        let leave_closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
            fx.borrow_mut().pointer_leave();
        }) as Box<dyn FnMut(_)>);
        _ = el
            .add_event_listener_with_callback("mouseleave", leave_closure.as_ref().unchecked_ref());
        leave_closure.forget();

        slots.push(frame::TiltSlot { el, effect });
    }
    slots
}

/// One scramble slot per `[data-scramble]` element. The element's own text is
/// the source; `data-scramble-duration`, `-mount`, `-hover` configure each
/// instance independently. Event closures only request a start; the scheduler
/// applies it.
pub fn wire_scrambles(
    document: &web::Document,
    base_seed: u64,
    default_duration_ms: u32,
) -> Vec<Rc<RefCell<frame::ScrambleSlot>>> {
    let mut slots = Vec::new();
    for (i, el) in tagged_elements(document, SCRAMBLE_SELECTOR).into_iter().enumerate() {
        let text = el.text_content().unwrap_or_default();
        let duration_ms = el
            .get_attribute("data-scramble-duration")
            .and_then(|s| s.parse().ok())
            .unwrap_or(default_duration_ms);
        let on_mount = el.has_attribute("data-scramble-mount");
        let on_hover = el.has_attribute("data-scramble-hover");
        // Derive per-slot rngs from the base seed (independent streams)
        let seed = base_seed ^ (i as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);

        let slot = Rc::new(RefCell::new(frame::ScrambleSlot {
            el: el.clone(),
            engine: Scrambler::new(seed),
            text,
            duration_ms,
            mount_at: on_mount.then_some(SCRAMBLE_MOUNT_DELAY_SEC),
            start_requested: false,
        }));

        if on_hover {
            let s = slot.clone();
            let enter_closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
                s.borrow_mut().start_requested = true;
            }) as Box<dyn FnMut(_)>);
            _ = el.add_event_listener_with_callback(
                "mouseenter",
                enter_closure.as_ref().unchecked_ref(),
            );
            enter_closure.forget();
        }

        slots.push(slot);
    }
    slots
}

/// Press on the button, release anywhere (pointerup on the window, leave on
/// the button), all against the shared session clock.
pub fn wire_hold(
    document: &web::Document,
    gesture: &Rc<RefCell<HoldGesture>>,
    clock: &Rc<Instant>,
) {
    let Some(button) = dom::element_by_id(document, HOLD_BUTTON_ID) else {
        return;
    };

    let g = gesture.clone();
    let c = clock.clone();
    let down_closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        g.borrow_mut().press(c.elapsed().as_secs_f64());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = button
        .add_event_listener_with_callback("pointerdown", down_closure.as_ref().unchecked_ref());
    down_closure.forget();

    let g = gesture.clone();
    let up_closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        g.borrow_mut().release();
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", up_closure.as_ref().unchecked_ref());
    }
    up_closure.forget();

    let g = gesture.clone();
    let leave_closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        g.borrow_mut().release();
    }) as Box<dyn FnMut(_)>);
    _ = button
        .add_event_listener_with_callback("pointerleave", leave_closure.as_ref().unchecked_ref());
    leave_closure.forget();
}

/// Gate the hero's per-frame work on canvas visibility.
pub fn wire_visibility(canvas: &web::HtmlCanvasElement, gate: &Rc<RefCell<VisibilityGate>>) {
    let g = gate.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            if let Ok(entry) = entries.get(0).dyn_into::<web::IntersectionObserverEntry>() {
                if let Some(transition) = g.borrow_mut().set_intersecting(entry.is_intersecting()) {
                    log::info!("[gate] {:?}", transition);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
    match web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            observer.observe(canvas);
            callback.forget();
        }
        Err(_) => {
            log::warn!("[gate] IntersectionObserver unavailable; hero stays active");
        }
    }
}
