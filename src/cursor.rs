use crate::dom;
use folio_core::cursor_visual;
use glam::Vec2;
use web_sys as web;

/// Re-style the cursor follower from tracker state. Runs unconditionally
/// every tick; the style is a pure function of the inputs.
pub fn apply(el: &web::Element, position: Vec2, hovering: bool, visible: bool) {
    let v = cursor_visual(hovering, visible);
    let style = format!(
        "width:{:.0}px;height:{:.0}px;border-color:{};opacity:{};\
         transform:translate3d({:.1}px,{:.1}px,0) translate(-50%,-50%)",
        v.diameter_px, v.diameter_px, v.border_color, v.opacity, position.x, position.y,
    );
    dom::set_style(el, &style);
}
