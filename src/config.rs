//! Run configuration and its loader.
//!
//! The load generator takes no command-line arguments. An optional JSON file
//! at `configs/triad.json` (relative to the working directory) tunes how the
//! driver runs; without it the program behaves as a plain infinite triad loop.

use std::fs;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::driver::{RunMode, deadline_after};
use crate::errors::{TriadError, TriadResult};
use crate::kernel::TriadKernel;

pub const DEFAULT_CONFIG_PATH: &str = "configs/triad.json";

/// Configuration for a triad run. The vector length is fixed and not part of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct TriadConfig {
    pub run: RunMode,
    /// Forces a kernel variant; `None` picks the best one for the target.
    pub kernel: Option<TriadKernel>,
    /// Logical CPU to pin the process to.
    pub cpu: Option<usize>,
    /// Verify the initial values and the first pass.
    pub verify: bool,
}

impl TriadConfig {
    /// The kernel to run, resolving `None` to the detected one.
    pub fn kernel(&self) -> TriadKernel {
        self.kernel.unwrap_or_else(TriadKernel::detect)
    }

    /// Validates the configuration
    pub fn validate(&self) -> TriadResult<()> {
        match self.run {
            RunMode::Forever => {}
            RunMode::Iterations { count } => {
                if count == 0 {
                    return Err(TriadError::ConfigValidation {
                        field: "run.count".to_string(),
                        message: "Iteration count must be greater than 0".to_string(),
                    });
                }
            }
            RunMode::Duration { seconds } => {
                if !seconds.is_finite() || seconds <= 0.0 {
                    return Err(TriadError::ConfigValidation {
                        field: "run.seconds".to_string(),
                        message: format!("Duration must be a positive number, got {}", seconds),
                    });
                }
                deadline_after(seconds)?;
            }
        }

        if let Some(kernel) = self.kernel {
            if !kernel.is_supported() {
                return Err(TriadError::UnsupportedKernel { kernel });
            }
        }

        Ok(())
    }
}

/// Configuration loader that handles JSON files with fallbacks
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a configuration file with fallback to defaults
    pub fn load_config<T>(path: impl AsRef<Path>) -> TriadResult<T>
    where
        T: serde::de::DeserializeOwned + Default,
    {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(content) => {
                info!("Loading configuration from '{}'", path.display());
                serde_json::from_str(&content).map_err(|e| TriadError::ConfigParse {
                    path: path.display().to_string(),
                    source: e,
                })
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(
                    "Config file '{}' not found, using default configuration",
                    path.display()
                );
                Ok(T::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Load and validate the triad configuration from the default location
    pub fn load_triad_config() -> TriadResult<TriadConfig> {
        let config: TriadConfig = Self::load_config(DEFAULT_CONFIG_PATH)?;
        config.validate()?;
        Ok(config)
    }
}
