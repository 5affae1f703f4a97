use crate::errors::{NumericError, NumericResult};

/// q(x) = x^2
#[inline]
fn integrand(x: f64) -> f64 {
    x * x
}

fn check_bounds(a: f64, b: f64) -> NumericResult<()> {
    if b <= a {
        return Err(NumericError::InvalidArgument(format!(
            "upper bound {b} must exceed lower bound {a}"
        )));
    }
    Ok(())
}

/// Composite trapezoidal rule for the integral of x^2 over [a, b] with `n` panels.
pub fn trapezoidal_rule(a: f64, b: f64, n: i64) -> NumericResult<f64> {
    if n <= 0 {
        return Err(NumericError::InvalidArgument(format!(
            "number of intervals must be positive, got {n}"
        )));
    }
    check_bounds(a, b)?;

    let h = (b - a) / n as f64;
    let interior: f64 = (1..n).map(|i| integrand(a + i as f64 * h)).sum();
    Ok(h * (integrand(a) + integrand(b) + 2.0 * interior) / 2.0)
}

/// Composite Simpson's rule for the integral of x^2 over [a, b]; `n` must be even.
pub fn simpsons_rule(a: f64, b: f64, n: i64) -> NumericResult<f64> {
    if n <= 0 || n % 2 != 0 {
        return Err(NumericError::InvalidArgument(format!(
            "number of intervals must be positive and even, got {n}"
        )));
    }
    check_bounds(a, b)?;

    let h = (b - a) / n as f64;
    let interior: f64 = (1..n)
        .map(|i| {
            let weight = if i % 2 == 0 { 2.0 } else { 4.0 };
            weight * integrand(a + i as f64 * h)
        })
        .sum();
    Ok(h * (integrand(a) + integrand(b) + interior) / 3.0)
}
