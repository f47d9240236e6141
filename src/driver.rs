//! Outer loop that keeps the triad kernel running.
//!
//! By default the driver never returns on its own: it runs passes until the
//! stop flag is raised (normally by SIGINT/SIGTERM). Bounded modes exist so the
//! loop can be exercised in tests or short runs.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::errors::{TriadError, TriadResult};
use crate::kernel::{TriadKernel, triad};
use crate::triad_arrays::TriadArrays;

/// When the driver stops issuing passes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RunMode {
    /// Until the stop flag is raised.
    #[default]
    Forever,
    /// Exactly `count` passes, unless stopped earlier.
    Iterations { count: u64 },
    /// Passes keep starting until `seconds` have elapsed.
    Duration { seconds: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    IterationsReached,
    DurationElapsed,
    ShutdownRequested,
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    pub passes: u64,
    pub stop_reason: StopReason,
}

pub struct Driver {
    kernel: TriadKernel,
    run_mode: RunMode,
    verify: bool,
}

impl Driver {
    pub fn new(kernel: TriadKernel, run_mode: RunMode) -> Self {
        Self {
            kernel,
            run_mode,
            verify: false,
        }
    }

    /// Check the initializer's output before the first pass and the triad
    /// result after it.
    pub fn with_verification(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// Runs passes over `arrays` until the run mode is satisfied or `stop` is
    /// set. `stop` is only read between passes.
    pub fn run(&self, arrays: &mut TriadArrays, stop: &AtomicBool) -> TriadResult<RunOutcome> {
        info!(
            "Running {} triad kernel over {} elements ({:?})",
            self.kernel,
            arrays.len(),
            self.run_mode
        );

        if self.verify {
            arrays.verify_initialized()?;
            debug!("Initial values verified");
        }

        let deadline = match self.run_mode {
            RunMode::Duration { seconds } => Some(deadline_after(seconds)?),
            _ => None,
        };

        let mut passes: u64 = 0;
        let stop_reason = loop {
            if stop.load(Ordering::Relaxed) {
                break StopReason::ShutdownRequested;
            }
            if let RunMode::Iterations { count } = self.run_mode {
                if passes >= count {
                    break StopReason::IterationsReached;
                }
            }
            if let Some(deadline) = deadline {
                if Instant::now() >= deadline {
                    break StopReason::DurationElapsed;
                }
            }

            let (a, b, c) = arrays.split_mut();
            triad(self.kernel, a, b, c)?;
            passes += 1;

            if self.verify && passes == 1 {
                arrays.verify_triad()?;
                debug!("First pass verified");
            }
        };

        debug!("Driver stopped after {} passes: {:?}", passes, stop_reason);
        Ok(RunOutcome {
            passes,
            stop_reason,
        })
    }
}

/// Instant `seconds` from now, or a `run.seconds` validation error when no
/// such instant can be represented.
pub(crate) fn deadline_after(seconds: f64) -> TriadResult<Instant> {
    Duration::try_from_secs_f64(seconds)
        .ok()
        .and_then(|duration| Instant::now().checked_add(duration))
        .ok_or_else(|| TriadError::ConfigValidation {
            field: "run.seconds".to_string(),
            message: format!("{} is not a representable duration", seconds),
        })
}
