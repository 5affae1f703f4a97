pub mod matrix;

/// Row-major dense matrix. Every row must have the same length.
pub type Matrix = Vec<Vec<f64>>;
