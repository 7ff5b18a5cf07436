/// Interaction and animation tuning constants.
///
/// These express intended behavior (smoothing weights, falloff radii, clamp
/// limits) and keep magic numbers out of the state machines.
// Fixed lerp weight applied per tick when the cursor chases the raw pointer
pub const POINTER_SMOOTHING: f32 = 0.15;

// Cursor follower visual
pub const CURSOR_SIZE_PX: f32 = 16.0;
pub const CURSOR_SIZE_HOVER_PX: f32 = 48.0;
pub const CURSOR_COLOR: &str = "#00FF94";
pub const CURSOR_COLOR_HOVER: &str = "#E8E8E8";

// Scramble reveal cadence and per-index reveal bias
pub const SCRAMBLE_TICK_MS: u32 = 30;
pub const SCRAMBLE_REVEAL_BIAS: f32 = 0.3;
pub const SCRAMBLE_MOUNT_DELAY_SEC: f32 = 0.5;

// Magnetic pull spring (per-axis, critically-ish damped)
pub const MAGNET_STIFFNESS: f32 = 150.0;
pub const MAGNET_DAMPING: f32 = 15.0;

// Card tilt spring and rotation ceiling (degrees)
pub const TILT_STIFFNESS: f32 = 150.0;
pub const TILT_DAMPING: f32 = 20.0;
pub const TILT_MAX_DEG: f32 = 5.0;

// Radial hold indicator: circumference of the r=45 viewBox circle
pub const HOLD_RING_CIRCUMFERENCE: f32 = 283.0;

// Completion burst
pub const BURST_COUNT: usize = 12;
pub const BURST_RADIUS_PX: f32 = 100.0;
pub const BURST_DURATION_SEC: f32 = 0.8;

// Point field placement radius band
pub const FIELD_RADIUS_MIN: f32 = 2.0;
pub const FIELD_RADIUS_SPAN: f32 = 0.5;

// Per-frame breathing oscillation
pub const BREATHE_RATE: f32 = 0.5;
pub const BREATHE_PHASE_STEP: f32 = 0.01;
pub const BREATHE_AMPLITUDE: f32 = 0.1;

// Pointer attraction field (world units on the z=0 plane)
pub const POINTER_FALLOFF_RADIUS: f32 = 3.0;
pub const POINTER_INFLUENCE_STRENGTH: f32 = 0.3;
pub const POINTER_INFLUENCE_DAMPING: f32 = 0.2;

// Whole-field rigid rotation rates
pub const FIELD_YAW_RATE: f32 = 0.05;
pub const FIELD_PITCH_RATE: f32 = 0.1;
pub const FIELD_PITCH_AMPLITUDE: f32 = 0.1;
pub const GRAPH_YAW_RATE: f32 = 0.03;

// Connection graph node shell
pub const GRAPH_RADIUS: f32 = 2.0;

// Central glow pulse
pub const GLOW_PULSE_RATE: f32 = 2.0;
pub const GLOW_PULSE_AMPLITUDE: f32 = 0.05;

// Simulated boot sequence
pub const LOADER_STEP_SEC: f32 = 0.1;
pub const LOADER_STEP_MAX: f32 = 15.0;
pub const LOADER_LINGER_SEC: f32 = 0.5;

// Camera
// Z distance shared by the renderer and the pointer plane projection.
pub const CAMERA_Z: f32 = 6.0;
pub const CAMERA_FOVY_DEG: f32 = 50.0;
