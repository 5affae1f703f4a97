/// Typed failures for every fallible numerical routine.
///
/// Each variant is local to the operation that produced it. Nothing in the
/// engine retries; the caller decides what to do with a failure.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NumericError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("dimension mismatch: left is {left_rows}x{left_cols}, right is {right_rows}x{right_cols}")]
    DimensionMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    #[error("length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("matrix is singular: pivot {pivot:e} in column {column}")]
    SingularMatrix { column: usize, pivot: f64 },

    #[error("zero variance: correlation is undefined")]
    ZeroVariance,

    #[error("derivative too small at x={x}: {derivative:e}")]
    DerivativeTooSmall { x: f64, derivative: f64 },

    #[error("vega too small at sigma={sigma}: {vega:e}")]
    VegaTooSmall { sigma: f64, vega: f64 },

    #[error("failed to converge after {iterations} iterations")]
    NotConverged { iterations: usize },

    #[error("config error: {0}")]
    Config(String),
}

impl NumericError {
    /// Shorthand for a `DimensionMismatch` between two shapes.
    pub fn dimensions(left: (usize, usize), right: (usize, usize)) -> Self {
        NumericError::DimensionMismatch {
            left_rows: left.0,
            left_cols: left.1,
            right_rows: right.0,
            right_cols: right.1,
        }
    }
}

pub type NumericResult<T> = Result<T, NumericError>;
