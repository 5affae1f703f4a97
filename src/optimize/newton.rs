use crate::errors::{NumericError, NumericResult};

/// Below this |f'(x)| the Newton step is considered unsafe.
const MIN_DERIVATIVE: f64 = 1e-12;

/// f(x) = x^2 - 2, roots at +/- sqrt(2).
#[inline]
fn target(x: f64) -> f64 {
    x * x - 2.0
}

#[inline]
fn target_derivative(x: f64) -> f64 {
    2.0 * x
}

/// Newton-Raphson on x^2 - 2 starting from `x0`.
///
/// Stops when a step moves x by less than `tol`. Fails with
/// `DerivativeTooSmall` if |f'(x)| < 1e-12 and with `NotConverged` once
/// `max_iter` steps have been taken.
pub fn newton_raphson(x0: f64, tol: f64, max_iter: i64) -> NumericResult<f64> {
    let mut x = x0;
    let max_iter = max_iter.max(0) as usize;

    for i in 0..max_iter {
        let fx = target(x);
        let dfx = target_derivative(x);

        if dfx.abs() < MIN_DERIVATIVE {
            tracing::warn!(x, derivative = dfx, iteration = i, "newton-raphson derivative underflow");
            return Err(NumericError::DerivativeTooSmall { x, derivative: dfx });
        }

        let next = x - fx / dfx;
        if (next - x).abs() < tol {
            tracing::debug!(iterations = i + 1, root = next, "newton-raphson converged");
            return Ok(next);
        }
        x = next;
    }

    tracing::warn!(max_iter, last = x, "newton-raphson did not converge");
    Err(NumericError::NotConverged { iterations: max_iter })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::SQRT_2;

    #[test]
    fn test_converges_to_positive_root() {
        let root = newton_raphson(1.0, 1e-12, 50).unwrap();
        assert!((root - SQRT_2).abs() < 1e-12, "root={root}");
    }

    #[test]
    fn test_converges_to_negative_root() {
        let root = newton_raphson(-3.0, 1e-10, 50).unwrap();
        assert!((root + SQRT_2).abs() < 1e-9, "root={root}");
    }

    #[test]
    fn test_zero_derivative_at_origin() {
        assert!(matches!(
            newton_raphson(0.0, 1e-10, 50),
            Err(NumericError::DerivativeTooSmall { .. })
        ));
    }

    #[test]
    fn test_iteration_budget_exhausted() {
        assert_eq!(
            newton_raphson(1000.0, 1e-12, 2),
            Err(NumericError::NotConverged { iterations: 2 })
        );
        assert_eq!(
            newton_raphson(1.0, 1e-12, 0),
            Err(NumericError::NotConverged { iterations: 0 })
        );
    }
}
