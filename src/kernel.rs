//! Element-at-a-time triad kernels: `a[i] = c[i] + b[i]`.
//!
//! Every element costs one load of `c`, one load of `b` and one store to `a`.
//! Neither variant lets the compiler vectorize, unroll into wider accesses or
//! elide the loop, so each pass puts the same traffic on the memory bus.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{TriadError, TriadResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriadKernel {
    /// Inline `movsd`/`addsd`/`movsd` per element (x86_64 only).
    Assembly,
    /// Portable volatile loads and stores per element.
    Volatile,
}

impl TriadKernel {
    /// Picks the assembly kernel where it exists, the volatile one otherwise.
    #[inline(always)]
    pub fn detect() -> Self {
        if cfg!(target_arch = "x86_64") {
            TriadKernel::Assembly
        } else {
            TriadKernel::Volatile
        }
    }

    pub fn is_supported(self) -> bool {
        match self {
            TriadKernel::Assembly => cfg!(target_arch = "x86_64"),
            TriadKernel::Volatile => true,
        }
    }
}

impl fmt::Display for TriadKernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriadKernel::Assembly => write!(f, "assembly"),
            TriadKernel::Volatile => write!(f, "volatile"),
        }
    }
}

/// Runs one triad pass over the three sequences.
///
/// The slices must have the same length. An empty pass touches no memory.
/// Sums that overflow become infinities per IEEE-754; nothing is reported.
pub fn triad(kernel: TriadKernel, a: &mut [f64], b: &[f64], c: &[f64]) -> TriadResult<()> {
    if a.len() != b.len() || a.len() != c.len() {
        return Err(TriadError::LengthMismatch {
            a: a.len(),
            b: b.len(),
            c: c.len(),
        });
    }

    let len = a.len();
    let a = a.as_mut_ptr();
    let b = b.as_ptr();
    let c = c.as_ptr();

    match kernel {
        TriadKernel::Volatile => unsafe { triad_volatile(a, b, c, len) },
        #[cfg(target_arch = "x86_64")]
        TriadKernel::Assembly => unsafe { x86_64::triad_asm(a, b, c, len) },
        #[cfg(not(target_arch = "x86_64"))]
        TriadKernel::Assembly => return Err(TriadError::UnsupportedKernel { kernel }),
    }

    Ok(())
}

/// # Safety
///
/// `a`, `b` and `c` must each be valid for `len` elements and `a` must not
/// overlap `b` or `c`.
#[inline(never)]
unsafe fn triad_volatile(a: *mut f64, b: *const f64, c: *const f64, len: usize) {
    let mut i = 0usize;
    while i < len {
        let cv = unsafe { c.add(i).read_volatile() };
        let bv = unsafe { b.add(i).read_volatile() };
        unsafe { a.add(i).write_volatile(cv + bv) };
        i += 1;
    }
}

#[cfg(target_arch = "x86_64")]
mod x86_64 {
    use core::arch::asm;

    /// # Safety
    ///
    /// `a`, `b` and `c` must each be valid for `len` elements and `a` must not
    /// overlap `b` or `c`.
    #[inline(never)]
    pub(super) unsafe fn triad_asm(a: *mut f64, b: *const f64, c: *const f64, len: usize) {
        for i in 0..len {
            unsafe {
                asm!(
                    "movsd {x}, qword ptr [{c}]",
                    "addsd {x}, qword ptr [{b}]",
                    "movsd qword ptr [{a}], {x}",
                    a = in(reg) a.add(i),
                    b = in(reg) b.add(i),
                    c = in(reg) c.add(i),
                    x = out(xmm_reg) _,
                    options(nostack, preserves_flags)
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triad_volatile_basic() {
        let mut a = vec![1.0, 1.0, 1.0];
        let b = vec![2.0, -4.0, 0.5];
        let c = vec![3.0, 1.0, 0.25];
        triad(TriadKernel::Volatile, &mut a, &b, &c).unwrap();
        assert_eq!(a, vec![5.0, -3.0, 0.75]);
    }

    #[test]
    fn test_detected_kernel_is_supported() {
        assert!(TriadKernel::detect().is_supported());
        assert!(TriadKernel::Volatile.is_supported());
    }

    #[test]
    fn test_length_mismatch_leaves_a_untouched() {
        let mut a = vec![1.0; 3];
        let b = vec![2.0; 3];
        let c = vec![3.0; 2];
        let result = triad(TriadKernel::Volatile, &mut a, &b, &c);
        assert!(matches!(
            result,
            Err(TriadError::LengthMismatch { a: 3, b: 3, c: 2 })
        ));
        assert_eq!(a, vec![1.0; 3]);
    }

    #[cfg(target_arch = "x86_64")]
    #[test]
    fn test_triad_assembly_basic() {
        let mut a = vec![0.0; 5];
        let b = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let c = vec![10.0, 20.0, 30.0, 40.0, 50.0];
        triad(TriadKernel::Assembly, &mut a, &b, &c).unwrap();
        assert_eq!(a, vec![11.0, 22.0, 33.0, 44.0, 55.0]);
    }

    #[cfg(not(target_arch = "x86_64"))]
    #[test]
    fn test_triad_assembly_unsupported() {
        let mut a = vec![0.0; 1];
        let result = triad(TriadKernel::Assembly, &mut a, &[1.0], &[1.0]);
        assert!(matches!(result, Err(TriadError::UnsupportedKernel { .. })));
    }

    #[test]
    fn test_kernel_names() {
        assert_eq!(TriadKernel::Assembly.to_string(), "assembly");
        assert_eq!(
            serde_json::from_str::<TriadKernel>("\"volatile\"").unwrap(),
            TriadKernel::Volatile
        );
    }
}
