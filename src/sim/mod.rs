pub mod gbm;
pub mod monte_carlo;
pub mod rng;

pub use gbm::geometric_brownian_motion;
pub use monte_carlo::{monte_carlo_pi_estimate, option_pricing_monte_carlo, MonteCarloResult};
pub use rng::SimRng;

use crate::errors::{NumericError, NumericResult};

/// Converts a caller-supplied count to `usize`, rejecting non-positive values.
pub(crate) fn positive_count(value: i64, name: &str) -> NumericResult<usize> {
    if value <= 0 {
        return Err(NumericError::InvalidArgument(format!(
            "{name} must be positive, got {value}"
        )));
    }
    usize::try_from(value)
        .map_err(|_| NumericError::InvalidArgument(format!("{name} is too large: {value}")))
}
