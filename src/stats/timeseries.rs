use crate::errors::{NumericError, NumericResult};

/// Simple moving average over a sliding window.
///
/// Output has `data.len() - window + 1` points; point `i` is the mean of
/// `data[i..i + window]`.
pub fn moving_average(data: &[f64], window: i64) -> NumericResult<Vec<f64>> {
    if window <= 0 || window as usize > data.len() {
        return Err(NumericError::InvalidArgument(format!(
            "window must be in 1..={}, got {window}",
            data.len()
        )));
    }
    let window = window as usize;

    Ok(data
        .windows(window)
        .map(|w| w.iter().sum::<f64>() / window as f64)
        .collect())
}

/// Exponential moving average seeded with the first observation.
///
/// Returns `None` for an empty series or a smoothing factor outside (0, 1].
pub fn exponential_moving_average(data: &[f64], alpha: f64) -> Option<Vec<f64>> {
    let (&first, rest) = data.split_first()?;
    if !(alpha > 0.0 && alpha <= 1.0) {
        return None;
    }

    let mut result = Vec::with_capacity(data.len());
    result.push(first);
    let mut prev = first;
    for &x in rest {
        prev = alpha * x + (1.0 - alpha) * prev;
        result.push(prev);
    }
    Some(result)
}

/// Weighted moving average with a window as wide as `weights`, normalized
/// by the sum of the weights. `weights[0]` applies to the oldest point.
pub fn weighted_moving_average(data: &[f64], weights: &[f64]) -> NumericResult<Vec<f64>> {
    if weights.len() > data.len() {
        return Err(NumericError::InvalidArgument(format!(
            "weights length {} exceeds data length {}",
            weights.len(),
            data.len()
        )));
    }
    if weights.is_empty() {
        return Err(NumericError::InvalidArgument("weights cannot be empty".into()));
    }

    let weight_sum: f64 = weights.iter().sum();
    if weight_sum == 0.0 {
        return Err(NumericError::InvalidArgument("weights must not sum to zero".into()));
    }

    Ok(data
        .windows(weights.len())
        .map(|w| w.iter().zip(weights).map(|(x, wt)| x * wt).sum::<f64>() / weight_sum)
        .collect())
}
