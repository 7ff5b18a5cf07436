use crate::constants::{BURST_COUNT, BURST_DURATION_SEC, BURST_RADIUS_PX, HOLD_RING_CIRCUMFERENCE};
use glam::Vec2;
use smallvec::SmallVec;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoldPhase {
    Idle,
    Holding,
    Completed,
}

/// Press-and-hold confirmation gesture over a caller-supplied clock.
///
/// `Idle -> Holding` on press, `Holding -> Completed` exactly once when the
/// accumulated press time reaches the configured duration, `Holding -> Idle`
/// on early release. `Completed` is terminal: the completion event fires at
/// most once per gesture instance and later presses are ignored.
#[derive(Clone, Debug)]
pub struct HoldGesture {
    phase: HoldPhase,
    press_start: Option<f64>,
    hold_duration: f64,
    progress: f32,
}

impl HoldGesture {
    pub fn new(hold_duration_sec: f64) -> Self {
        Self {
            phase: HoldPhase::Idle,
            press_start: None,
            hold_duration: hold_duration_sec,
            progress: 0.0,
        }
    }

    /// Press-start at `now_sec`. Ignored unless idle.
    pub fn press(&mut self, now_sec: f64) {
        if self.phase != HoldPhase::Idle {
            return;
        }
        self.phase = HoldPhase::Holding;
        self.press_start = Some(now_sec);
        self.progress = 0.0;
    }

    /// Release or pointer-leave. An incomplete hold resets; a completed one
    /// stays completed.
    pub fn release(&mut self) {
        if self.phase == HoldPhase::Holding {
            self.phase = HoldPhase::Idle;
            self.press_start = None;
            self.progress = 0.0;
        }
    }

    /// Per-frame step. Returns `true` on the single tick where the hold
    /// completes; the caller runs its one-shot side effect then.
    pub fn tick(&mut self, now_sec: f64) -> bool {
        if self.phase != HoldPhase::Holding {
            return false;
        }
        let Some(start) = self.press_start else {
            return false;
        };
        let elapsed = (now_sec - start).max(0.0);
        self.progress = (elapsed / self.hold_duration).min(1.0) as f32;
        if self.progress >= 1.0 {
            self.phase = HoldPhase::Completed;
            self.press_start = None;
            log::info!("[gesture] hold complete");
            return true;
        }
        false
    }

    pub fn phase(&self) -> HoldPhase {
        self.phase
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_completed(&self) -> bool {
        self.phase == HoldPhase::Completed
    }

    pub fn is_holding(&self) -> bool {
        self.phase == HoldPhase::Holding
    }
}

/// Map progress 0..1 to the radial indicator's stroke-dashoffset, full
/// circumference down to zero.
pub fn ring_dashoffset(progress: f32) -> f32 {
    HOLD_RING_CIRCUMFERENCE * (1.0 - progress.clamp(0.0, 1.0))
}

/// One-shot decorative particle ring played on completion: twelve sprites fly
/// outward with a cubic ease-out and fade, then the whole thing is discarded.
/// Not part of gesture state.
#[derive(Clone, Copy, Debug, Default)]
pub struct Burst {
    age: f32,
}

impl Burst {
    pub fn new() -> Self {
        Self { age: 0.0 }
    }

    /// Advance; returns `false` once expired.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.age += dt;
        self.age < BURST_DURATION_SEC
    }

    fn eased(&self) -> f32 {
        let t = (self.age / BURST_DURATION_SEC).clamp(0.0, 1.0);
        1.0 - (1.0 - t).powi(3)
    }

    /// Sprite offsets from the button center, in pixels.
    pub fn offsets(&self) -> SmallVec<[Vec2; BURST_COUNT]> {
        let reach = self.eased() * BURST_RADIUS_PX;
        (0..BURST_COUNT)
            .map(|i| {
                let angle = i as f32 / BURST_COUNT as f32 * TAU;
                Vec2::new(angle.cos(), angle.sin()) * reach
            })
            .collect()
    }

    pub fn opacity(&self) -> f32 {
        1.0 - (self.age / BURST_DURATION_SEC).clamp(0.0, 1.0)
    }
}
