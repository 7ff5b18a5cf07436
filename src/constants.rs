/// DOM contract and render-layer constants.
// Element ids the wasm module drives; absent nodes degrade to no-ops.
pub const CANVAS_ID: &str = "core-canvas";
pub const CURSOR_ID: &str = "cursor-dot";
pub const PRELOADER_ID: &str = "preloader";
pub const PRELOADER_BAR_ID: &str = "preloader-bar";
pub const PRELOADER_STATUS_ID: &str = "preloader-status";
pub const PRELOADER_PERCENT_ID: &str = "preloader-percent";
pub const HOLD_BUTTON_ID: &str = "transmit";
pub const HOLD_RING_ID: &str = "hold-ring";
pub const HOLD_LABEL_ID: &str = "hold-label";

// Capability tags on interactive elements
pub const INTERACTIVE_SELECTOR: &str = "a,button,[data-cursor=hover]";
pub const MAGNETIC_SELECTOR: &str = "[data-magnetic]";
pub const TILT_SELECTOR: &str = "[data-tilt]";
pub const SCRAMBLE_SELECTOR: &str = "[data-scramble]";

// Hold button copy
pub const HOLD_LABEL_IDLE: &str = "HOLD TO SEND";
pub const HOLD_LABEL_HOLDING: &str = "TRANSMITTING...";
pub const HOLD_LABEL_DONE: &str = "\u{2713}";

// Completion side effect: mail-composition intent
pub const MAIL_INTENT_URL: &str = "mailto:hello@example.com?subject=Collaboration%20Inquiry";

// Layer colors (premultiplied in the shader; alpha drives additive weight)
pub const PARTICLE_COLOR: [f32; 4] = [0.0, 1.0, 0.58, 1.0]; // #00FF94
pub const LINK_COLOR: [f32; 4] = [0.30, 0.49, 1.0, 0.15]; // #4D7CFF
pub const GLOW_COLOR: [f32; 4] = [0.0, 1.0, 0.58, 0.1];

// Sprite half-sizes in world units
pub const PARTICLE_SIZE: f32 = 0.02;
pub const GLOW_SIZE: f32 = 0.5;

// IntersectionObserver trigger fraction for the hero canvas
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

// Base seed; per-subsystem rngs derive from it
pub const SCENE_SEED: u64 = 42;
