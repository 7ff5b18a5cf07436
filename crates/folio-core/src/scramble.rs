use crate::constants::{SCRAMBLE_REVEAL_BIAS, SCRAMBLE_TICK_MS};
use rand::prelude::*;

/// Symbols substituted for not-yet-revealed characters.
pub const SCRAMBLE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*";

/// Randomized-reveal text animation.
///
/// A session runs for `total_frames = duration_ms / 30` ticks. On each tick,
/// character `i` is shown as-is once `frame / total_frames` exceeds
/// `i / len + 0.3`, otherwise it is replaced by a uniform pick from
/// [`SCRAMBLE_ALPHABET`]. Spaces always pass through. The final tick forces
/// the exact (uppercased) source so rounding never leaves stray symbols.
/// Reveal is monotonic: progress only grows, so a revealed character never
/// reverts to a random one.
pub struct Scrambler {
    source: Vec<char>,
    display: String,
    frame: u32,
    total_frames: u32,
    active: bool,
    rng: StdRng,
}

impl Scrambler {
    pub fn new(seed: u64) -> Self {
        Self {
            source: Vec::new(),
            display: String::new(),
            frame: 0,
            total_frames: 0,
            active: false,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Begin a reveal session. A no-op while a session is already active
    /// (idempotent start). Empty source or a duration shorter than one tick
    /// resolves immediately to the final text.
    pub fn start(&mut self, source: &str, duration_ms: u32) {
        if self.active {
            return;
        }
        let upper: Vec<char> = source.to_uppercase().chars().collect();
        let total_frames = duration_ms / SCRAMBLE_TICK_MS;
        if upper.is_empty() || total_frames == 0 {
            self.display = upper.iter().collect();
            self.source = upper;
            self.frame = 0;
            self.total_frames = 0;
            return;
        }
        self.source = upper;
        self.frame = 0;
        self.total_frames = total_frames;
        self.active = true;
    }

    /// Advance one frame on the fixed ~30ms cadence. Does nothing between
    /// sessions.
    pub fn tick(&mut self) {
        if !self.active {
            return;
        }
        self.frame += 1;
        if self.frame >= self.total_frames {
            self.display = self.source.iter().collect();
            self.active = false;
            return;
        }
        let progress = self.frame as f32 / self.total_frames as f32;
        let len = self.source.len() as f32;
        let rng = &mut self.rng;
        self.display = self
            .source
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                if c == ' ' {
                    ' '
                } else if progress > i as f32 / len + SCRAMBLE_REVEAL_BIAS {
                    c
                } else {
                    SCRAMBLE_ALPHABET[rng.gen_range(0..SCRAMBLE_ALPHABET.len())] as char
                }
            })
            .collect();
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn total_frames(&self) -> u32 {
        self.total_frames
    }
}
