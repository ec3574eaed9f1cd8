pub mod consts;
pub mod error;

pub mod tuple;
pub mod color;
pub mod matrix;
pub mod transform;
pub mod ray;

pub mod canvas;
pub mod output;

pub mod description;
pub mod demo;

pub use error::{ Error, Result };

use consts::FEQ_EPSILON;

/// Compares two floats for equality, within `FEQ_EPSILON`.
///
/// Equality of tuples, colors and matrices is built on top of this function.
///
/// ```
/// # use ray_tracer_core::feq;
/// assert!(feq(0.1 + 0.2, 0.3));
/// assert!(!feq(1.0, 1.00001));
/// ```
pub fn feq(left: f64, right: f64) -> bool {
    (left - right).abs() < FEQ_EPSILON
}

#[test]
fn feq_within_epsilon() {
    assert!(feq(1.0, 1.0 + 1e-7));
    assert!(feq(-2.5, -2.5000009));
}

#[test]
fn feq_outside_epsilon() {
    assert!(!feq(1.0, 1.0 + 2e-6));
    assert!(!feq(0.0, -0.001));
}
