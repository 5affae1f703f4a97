//! Finite-difference derivatives and composite quadrature.
//!
//! Each routine works on one fixed example function; these are not general
//! evaluators and never parse a user-supplied expression.

pub mod finite_diff;
pub mod quadrature;

/// Step used when the caller passes a non-positive one.
pub(crate) const DEFAULT_STEP: f64 = 1e-8;

#[inline]
pub(crate) fn effective_step(h: f64) -> f64 {
    if h <= 0.0 {
        DEFAULT_STEP
    } else {
        h
    }
}
