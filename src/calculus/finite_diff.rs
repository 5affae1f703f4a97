use crate::calculus::effective_step;
use crate::errors::{NumericError, NumericResult};
use std::str::FromStr;

/// Variable to differentiate with respect to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variable {
    X,
    Y,
}

impl FromStr for Variable {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" => Ok(Variable::X),
            "y" => Ok(Variable::Y),
            other => Err(NumericError::InvalidArgument(format!(
                "variable must be 'x' or 'y', got '{other}'"
            ))),
        }
    }
}

/// f(x) = x^2 + 2x + 1
#[inline]
fn quadratic(x: f64) -> f64 {
    x * x + 2.0 * x + 1.0
}

/// g(x, y) = x^2 + y^2 + xy
#[inline]
fn bivariate(x: f64, y: f64) -> f64 {
    x * x + y * y + x * y
}

/// Central difference of f(x) = x^2 + 2x + 1. A non-positive `h` becomes 1e-8.
pub fn numerical_derivative(x: f64, h: f64) -> f64 {
    let h = effective_step(h);
    (quadratic(x + h) - quadratic(x - h)) / (2.0 * h)
}

/// Central-difference partial of g(x, y) = x^2 + y^2 + xy.
///
/// `variable` must be "x" or "y".
pub fn partial_derivative(x: f64, y: f64, h: f64, variable: &str) -> NumericResult<f64> {
    let variable: Variable = variable.parse()?;
    Ok(partial(x, y, effective_step(h), variable))
}

fn partial(x: f64, y: f64, h: f64, variable: Variable) -> f64 {
    match variable {
        Variable::X => (bivariate(x + h, y) - bivariate(x - h, y)) / (2.0 * h),
        Variable::Y => (bivariate(x, y + h) - bivariate(x, y - h)) / (2.0 * h),
    }
}

/// [dg/dx, dg/dy] of g(x, y) = x^2 + y^2 + xy.
pub fn gradient(x: f64, y: f64, h: f64) -> [f64; 2] {
    let h = effective_step(h);
    [partial(x, y, h, Variable::X), partial(x, y, h, Variable::Y)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derivative_of_quadratic() {
        // f'(x) = 2x + 2
        let d = numerical_derivative(3.0, 1e-5);
        assert!((d - 8.0).abs() < 1e-6, "f'(3)={d}");
    }

    #[test]
    fn test_non_positive_step_uses_default() {
        let d = numerical_derivative(1.0, 0.0);
        assert!((d - 4.0).abs() < 1e-5, "f'(1)={d}");
        let d = numerical_derivative(1.0, -3.0);
        assert!((d - 4.0).abs() < 1e-5, "f'(1)={d}");
    }

    #[test]
    fn test_partials() {
        // dg/dx = 2x + y, dg/dy = 2y + x
        let dx = partial_derivative(1.0, 2.0, 1e-5, "x").unwrap();
        let dy = partial_derivative(1.0, 2.0, 1e-5, "y").unwrap();
        assert!((dx - 4.0).abs() < 1e-6, "dx={dx}");
        assert!((dy - 5.0).abs() < 1e-6, "dy={dy}");
    }

    #[test]
    fn test_partial_rejects_unknown_variable() {
        assert!(matches!(
            partial_derivative(1.0, 2.0, 1e-5, "z"),
            Err(NumericError::InvalidArgument(_))
        ));
        assert!(partial_derivative(1.0, 2.0, 1e-5, "X").is_err());
    }

    #[test]
    fn test_gradient_matches_partials() {
        let g = gradient(-1.0, 3.0, 1e-5);
        assert!((g[0] - 1.0).abs() < 1e-6, "dx={}", g[0]);
        assert!((g[1] - 5.0).abs() < 1e-6, "dy={}", g[1]);
    }
}
