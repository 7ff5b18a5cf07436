use crate::constants::{LOADER_LINGER_SEC, LOADER_STEP_MAX, LOADER_STEP_SEC};
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LoadPhase {
    Filling,
    Lingering,
    Done,
}

/// Simulated boot progress behind the entry overlay.
///
/// Progress jumps by a uniform random amount every 100ms of accumulated time,
/// clamps at 100, lingers half a second so the bar is seen full, then
/// finishes. Monotonic; never regresses.
#[derive(Clone, Debug)]
pub struct LoadSequence {
    progress: f32,
    step_accum: f32,
    linger: f32,
    phase: LoadPhase,
    rng: StdRng,
}

impl LoadSequence {
    pub fn new(seed: u64) -> Self {
        Self {
            progress: 0.0,
            step_accum: 0.0,
            linger: 0.0,
            phase: LoadPhase::Filling,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn tick(&mut self, dt: f32) {
        match self.phase {
            LoadPhase::Filling => {
                self.step_accum += dt;
                while self.step_accum >= LOADER_STEP_SEC {
                    self.step_accum -= LOADER_STEP_SEC;
                    self.progress =
                        (self.progress + self.rng.gen::<f32>() * LOADER_STEP_MAX).min(100.0);
                    if self.progress >= 100.0 {
                        self.phase = LoadPhase::Lingering;
                        break;
                    }
                }
            }
            LoadPhase::Lingering => {
                self.linger += dt;
                if self.linger >= LOADER_LINGER_SEC {
                    self.phase = LoadPhase::Done;
                    log::info!("[loader] boot sequence finished");
                }
            }
            LoadPhase::Done => {}
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_finished(&self) -> bool {
        self.phase == LoadPhase::Done
    }
}

/// Status line shown under the progress bar.
pub fn status_line(progress: f32) -> &'static str {
    if progress < 30.0 {
        "> loading_neural_core()"
    } else if progress < 60.0 {
        "> initializing_synapses()"
    } else if progress < 90.0 {
        "> calibrating_interface()"
    } else {
        "> ready_for_deployment()"
    }
}
