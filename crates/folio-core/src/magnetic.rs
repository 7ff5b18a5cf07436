use crate::constants::{
    MAGNET_DAMPING, MAGNET_STIFFNESS, TILT_DAMPING, TILT_MAX_DEG, TILT_STIFFNESS,
};
use glam::Vec2;

/// Two-axis damped spring chasing a target, advanced by semi-implicit Euler.
/// Stiffness/damping are chosen near critical so the chase settles without a
/// visible bounce.
#[derive(Clone, Copy, Debug)]
pub struct Spring2 {
    position: Vec2,
    velocity: Vec2,
    target: Vec2,
    stiffness: f32,
    damping: f32,
}

impl Spring2 {
    pub fn new(stiffness: f32, damping: f32) -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            target: Vec2::ZERO,
            stiffness,
            damping,
        }
    }

    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn step(&mut self, dt: f32) {
        let accel = (self.target - self.position) * self.stiffness - self.velocity * self.damping;
        self.velocity += accel * dt;
        self.position += self.velocity * dt;
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }
}

/// Screen-space bounding box of an interactive element, in the same
/// coordinate space as the pointer.
#[derive(Clone, Copy, Debug, Default)]
pub struct ElementRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ElementRect {
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.left + self.width * 0.5,
            self.top + self.height * 0.5,
        )
    }

    /// Pointer position normalized to [-0.5, 0.5] on each axis.
    pub fn normalized(&self, pointer: Vec2) -> Vec2 {
        Vec2::new(
            (pointer.x - self.left) / self.width.max(1.0) - 0.5,
            (pointer.y - self.top) / self.height.max(1.0) - 0.5,
        )
    }
}

/// Pulls an element toward the pointer while it moves inside the bounds,
/// springs back to rest on leave.
#[derive(Clone, Copy, Debug)]
pub struct MagneticEffect {
    spring: Spring2,
    strength: f32,
}

impl MagneticEffect {
    pub fn new(strength: f32) -> Self {
        Self {
            spring: Spring2::new(MAGNET_STIFFNESS, MAGNET_DAMPING),
            strength,
        }
    }

    pub fn pointer_move(&mut self, rect: ElementRect, pointer: Vec2) {
        self.spring
            .set_target((pointer - rect.center()) * self.strength);
    }

    pub fn pointer_leave(&mut self) {
        self.spring.set_target(Vec2::ZERO);
    }

    pub fn tick(&mut self, dt: f32) {
        self.spring.step(dt);
    }

    /// Current visual translation in pixels.
    pub fn offset(&self) -> Vec2 {
        self.spring.position()
    }
}

/// Tilts a card toward the pointer: normalized position maps to sprung
/// rotate-X/rotate-Y targets capped at [`TILT_MAX_DEG`].
#[derive(Clone, Copy, Debug)]
pub struct TiltEffect {
    spring: Spring2,
}

impl TiltEffect {
    pub fn new() -> Self {
        Self {
            spring: Spring2::new(TILT_STIFFNESS, TILT_DAMPING),
        }
    }

    pub fn pointer_move(&mut self, rect: ElementRect, pointer: Vec2) {
        let n = rect.normalized(pointer);
        // Pointer below center tips the card away (negative rotate-X).
        self.spring.set_target(Vec2::new(
            -n.y * 2.0 * TILT_MAX_DEG,
            n.x * 2.0 * TILT_MAX_DEG,
        ));
    }

    pub fn pointer_leave(&mut self) {
        self.spring.set_target(Vec2::ZERO);
    }

    pub fn tick(&mut self, dt: f32) {
        self.spring.step(dt);
    }

    /// Current (rotate_x_deg, rotate_y_deg).
    pub fn rotation(&self) -> Vec2 {
        self.spring.position()
    }
}

impl Default for TiltEffect {
    fn default() -> Self {
        Self::new()
    }
}
