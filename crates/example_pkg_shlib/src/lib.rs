//! Shared arithmetic library used by the `_core` extension module.
//!
//! # Responsibility
//! - Provide the integer primitive that the call bridge delegates to.
//! - Export the same primitive over the C ABI for non-Rust consumers.
//!
//! # Invariants
//! - `sum` never fails and never panics, including on overflow.
//! - Arithmetic width is the C `int` width (`i32`), two's-complement wraparound.

pub mod ffi;

/// Adds two C-width integers with two's-complement wraparound.
pub fn sum(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}
