use crate::errors::{NumericError, NumericResult};

const GOLDEN_RATIO: f64 = 1.618033988749895;
const DEFAULT_TOLERANCE: f64 = 1e-6;

/// (x - 2)^2, unimodal with its minimum at x = 2.
#[inline]
fn objective(x: f64) -> f64 {
    (x - 2.0) * (x - 2.0)
}

/// Golden-section minimization of (x - 2)^2 on [a, b].
///
/// Shrinks the bracket by 1/phi per step until its width is at most `tol`
/// (non-positive `tol` means 1e-6) and returns the bracket midpoint. When the
/// minimum lies outside [a, b] the result converges to the nearer endpoint.
pub fn golden_section_search(a: f64, b: f64, tol: f64) -> NumericResult<f64> {
    if b <= a {
        return Err(NumericError::InvalidArgument(format!(
            "upper bound {b} must exceed lower bound {a}"
        )));
    }
    let tol = if tol <= 0.0 { DEFAULT_TOLERANCE } else { tol };

    let (mut a, mut b) = (a, b);
    let mut c = b - (b - a) / GOLDEN_RATIO;
    let mut d = a + (b - a) / GOLDEN_RATIO;
    let mut iterations = 0usize;

    while (b - a).abs() > tol {
        let width = b - a;
        if objective(c) < objective(d) {
            b = d;
        } else {
            a = c;
        }
        // A tolerance below float resolution would otherwise spin forever.
        if b - a >= width {
            break;
        }
        c = b - (b - a) / GOLDEN_RATIO;
        d = a + (b - a) / GOLDEN_RATIO;
        iterations += 1;
    }

    let x = (a + b) / 2.0;
    tracing::debug!(iterations, x, "golden-section search converged");
    Ok(x)
}
