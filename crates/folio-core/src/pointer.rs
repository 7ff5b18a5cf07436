use crate::constants::{
    CURSOR_COLOR, CURSOR_COLOR_HOVER, CURSOR_SIZE_HOVER_PX, CURSOR_SIZE_PX, POINTER_SMOOTHING,
};
use glam::Vec2;

/// What a consumer sees when it reads the tracker on a frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerSnapshot {
    pub position: Vec2,
    pub hovering: bool,
}

/// Session-wide smoothed pointer state.
///
/// `update` records the raw position from pointer-move events; `tick` advances
/// the smoothed position one fixed-weight lerp step per animation frame. The
/// smoothed position lags the raw one and never overshoots it in a single
/// step. One instance is owned by the frame scheduler and read (never
/// mutated) by every per-frame consumer.
#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    raw: Vec2,
    smoothed: Vec2,
    hovering: bool,
    seen: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the latest raw pointer position. Inputs pass through unclamped.
    pub fn update(&mut self, raw_x: f32, raw_y: f32) {
        self.raw = Vec2::new(raw_x, raw_y);
        self.seen = true;
    }

    /// Hover intent over an interactive element, as detected by the host.
    pub fn set_hovering(&mut self, flag: bool) {
        self.hovering = flag;
    }

    /// One interpolation step toward the raw position. Fixed-rate loop
    /// weight, not scaled by elapsed time.
    pub fn tick(&mut self) {
        self.smoothed += (self.raw - self.smoothed) * POINTER_SMOOTHING;
    }

    pub fn read(&self) -> PointerSnapshot {
        PointerSnapshot {
            position: self.smoothed,
            hovering: self.hovering,
        }
    }

    pub fn raw(&self) -> Vec2 {
        self.raw
    }

    /// The pointer entering or leaving the page shows or hides the follower.
    pub fn set_visible(&mut self, flag: bool) {
        self.seen = flag;
    }

    /// False until the first pointer event; the follower stays hidden.
    pub fn is_visible(&self) -> bool {
        self.seen
    }
}

/// Cursor-follower appearance derived from tracker state.
#[derive(Clone, Copy, Debug)]
pub struct CursorVisual {
    pub diameter_px: f32,
    pub border_color: &'static str,
    pub opacity: f32,
}

/// Pure function of `(hovering, visible)`; recomputed every tick whether or
/// not it changed.
pub fn cursor_visual(hovering: bool, visible: bool) -> CursorVisual {
    CursorVisual {
        diameter_px: if hovering {
            CURSOR_SIZE_HOVER_PX
        } else {
            CURSOR_SIZE_PX
        },
        border_color: if hovering {
            CURSOR_COLOR_HOVER
        } else {
            CURSOR_COLOR
        },
        opacity: if visible { 1.0 } else { 0.0 },
    }
}
