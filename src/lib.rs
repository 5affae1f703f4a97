//! Stateless numerical toolkit: matrix algebra, descriptive statistics,
//! normal distribution evaluation, finite-difference calculus, 1-D
//! optimization, Black-Scholes pricing and Monte Carlo simulation.
//!
//! Every operation is a free function over its arguments. Monte Carlo
//! routines build a private random generator per call, so all functions are
//! safe to call concurrently without coordination.

pub mod algebra;
pub mod calculus;
pub mod config;
pub mod diagnostics;
pub mod dist;
pub mod errors;
pub mod finance;
pub mod optimize;
pub mod sim;
pub mod stats;

pub use errors::{NumericError, NumericResult};
