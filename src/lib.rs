//! Triad memory-bandwidth load generator.
//!
//! Repeatedly computes `a[i] = b[i] + c[i]` over three large `f64` sequences,
//! one element at a time, to keep the memory subsystem saturated while an
//! external tool observes it. The library exposes the storage, the kernels and
//! the driver loop; the `triad` binary wires them together.

pub mod affinity;
pub mod config;
pub mod driver;
pub mod errors;
pub mod kernel;
pub mod shutdown;
pub mod triad_arrays;

pub use config::{ConfigLoader, TriadConfig};
pub use driver::{Driver, RunMode, RunOutcome, StopReason};
pub use errors::{TriadError, TriadResult, ValidationError};
pub use kernel::{TriadKernel, triad};
pub use triad_arrays::{TriadArrays, VECTOR_LEN};
