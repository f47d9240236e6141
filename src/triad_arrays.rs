//! Storage for the three triad sequences.

use crate::errors::{Sequence, ValidationError, ValidationResult};

/// Number of elements in each sequence used by the load generator.
pub const VECTOR_LEN: usize = 10_000_000;

pub const INITIAL_A: f64 = 1.0;
pub const INITIAL_B: f64 = 2.0;
pub const INITIAL_C: f64 = 3.0;

/// Three equally sized `f64` sequences, allocated once and owned for the
/// lifetime of the run.
#[derive(Debug, Clone)]
pub struct TriadArrays {
    a: Box<[f64]>,
    b: Box<[f64]>,
    c: Box<[f64]>,
}

impl TriadArrays {
    /// Allocates three zero-filled sequences of `len` elements.
    pub fn new(len: usize) -> Self {
        Self {
            a: vec![0.0; len].into_boxed_slice(),
            b: vec![0.0; len].into_boxed_slice(),
            c: vec![0.0; len].into_boxed_slice(),
        }
    }

    /// Fills A with 1.0, B with 2.0 and C with 3.0, walking the rows in order.
    pub fn initialize(&mut self) {
        for i in 0..self.len() {
            self.a[i] = INITIAL_A;
            self.b[i] = INITIAL_B;
            self.c[i] = INITIAL_C;
        }
    }

    pub fn len(&self) -> usize {
        self.a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }

    pub fn a(&self) -> &[f64] {
        &self.a
    }

    pub fn b(&self) -> &[f64] {
        &self.b
    }

    pub fn c(&self) -> &[f64] {
        &self.c
    }

    /// Mutable access to B and C, for callers that need inputs other than
    /// the initializer's constants.
    pub fn inputs_mut(&mut self) -> (&mut [f64], &mut [f64]) {
        (&mut self.b, &mut self.c)
    }

    /// Borrows A mutably and B, C shared, in the shape the kernel takes.
    pub fn split_mut(&mut self) -> (&mut [f64], &[f64], &[f64]) {
        (&mut self.a, &self.b, &self.c)
    }

    /// Checks that every row still holds the initializer's constants.
    pub fn verify_initialized(&self) -> ValidationResult<()> {
        check_constant(Sequence::A, &self.a, INITIAL_A)?;
        check_constant(Sequence::B, &self.b, INITIAL_B)?;
        check_constant(Sequence::C, &self.c, INITIAL_C)
    }

    /// Checks `A[i] == C[i] + B[i]` for every row, bit for bit.
    pub fn verify_triad(&self) -> ValidationResult<()> {
        let rows = self.a.iter().zip(self.b.iter()).zip(self.c.iter());
        for (index, ((&actual, &b), &c)) in rows.enumerate() {
            let expected = c + b;
            if actual.to_bits() != expected.to_bits() {
                return Err(ValidationError::Mismatch {
                    sequence: Sequence::A,
                    index,
                    expected,
                    actual,
                });
            }
        }
        Ok(())
    }
}

fn check_constant(sequence: Sequence, values: &[f64], expected: f64) -> ValidationResult<()> {
    match values.iter().position(|&v| v.to_bits() != expected.to_bits()) {
        Some(index) => Err(ValidationError::Mismatch {
            sequence,
            index,
            expected,
            actual: values[index],
        }),
        None => Ok(()),
    }
}
