use crate::errors::{NumericError, NumericResult};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Summary statistics of a sample. Variance is the sample (n-1) variance
/// and kurtosis is excess kurtosis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DescriptiveStats {
    pub mean: f64,
    pub median: f64,
    pub mode: f64,
    pub std_dev: f64,
    pub variance: f64,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    pub skewness: f64,
    pub kurtosis: f64,
}

/// Map key with a total order so floats can live in a `BTreeMap`.
#[derive(Debug, Clone, Copy)]
struct OrderedValue(f64);

impl PartialEq for OrderedValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OrderedValue {}

impl PartialOrd for OrderedValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrderedValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Sample variance (divisor n-1). Zero for fewer than two observations.
pub fn variance(data: &[f64]) -> f64 {
    if data.len() <= 1 {
        return 0.0;
    }
    let m = mean(data);
    let sum_sq: f64 = data.iter().map(|&v| (v - m) * (v - m)).sum();
    sum_sq / (data.len() - 1) as f64
}

pub fn std_dev(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Median of an unsorted sample; sorts a private copy.
pub fn median(data: &[f64]) -> f64 {
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    median_of_sorted(&sorted)
}

fn median_of_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return 0.0;
    }
    if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    }
}

/// Most frequent value. Ties go to the smallest value, so the result does
/// not depend on input order.
pub fn mode(data: &[f64]) -> f64 {
    let mut freq: BTreeMap<OrderedValue, usize> = BTreeMap::new();
    for &v in data {
        // Fold -0.0 into 0.0 so both count as the same value.
        *freq.entry(OrderedValue(v + 0.0)).or_insert(0) += 1;
    }

    let mut best: Option<(f64, usize)> = None;
    for (value, count) in freq {
        // Ascending iteration + strict comparison keeps the smallest on ties.
        if best.map_or(true, |(_, c)| count > c) {
            best = Some((value.0, count));
        }
    }
    best.map_or(0.0, |(v, _)| v)
}

/// Mean of cubed z-scores. Zero for an empty sample or zero spread.
pub fn skewness(data: &[f64], mean: f64, std_dev: f64) -> f64 {
    standardized_moment(data, mean, std_dev, 3)
}

/// Excess kurtosis: mean of z^4 minus 3. Zero for an empty sample or zero spread.
pub fn kurtosis(data: &[f64], mean: f64, std_dev: f64) -> f64 {
    if data.is_empty() || std_dev == 0.0 {
        return 0.0;
    }
    standardized_moment(data, mean, std_dev, 4) - 3.0
}

fn standardized_moment(data: &[f64], mean: f64, std_dev: f64, order: i32) -> f64 {
    if data.is_empty() || std_dev == 0.0 {
        return 0.0;
    }
    let sum: f64 = data.iter().map(|&v| ((v - mean) / std_dev).powi(order)).sum();
    sum / data.len() as f64
}

/// All summary statistics at once. The input slice is left untouched;
/// order statistics come from a sorted copy. An empty sample yields zeros.
pub fn descriptive_stats(data: &[f64]) -> DescriptiveStats {
    if data.is_empty() {
        return DescriptiveStats::default();
    }

    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mean = mean(data);
    let variance = variance(data);
    let std_dev = variance.sqrt();
    let min = sorted[0];
    let max = sorted[sorted.len() - 1];

    DescriptiveStats {
        mean,
        median: median_of_sorted(&sorted),
        mode: mode(data),
        std_dev,
        variance,
        min,
        max,
        range: max - min,
        skewness: skewness(data, mean, std_dev),
        kurtosis: kurtosis(data, mean, std_dev),
    }
}

/// Pearson correlation coefficient.
pub fn correlation(x: &[f64], y: &[f64]) -> NumericResult<f64> {
    if x.len() != y.len() || x.is_empty() {
        return Err(NumericError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }

    let mean_x = mean(x);
    let mean_y = mean(y);

    let (mut numerator, mut sum_x2, mut sum_y2) = (0.0, 0.0, 0.0);
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        numerator += dx * dy;
        sum_x2 += dx * dx;
        sum_y2 += dy * dy;
    }

    let denominator = (sum_x2 * sum_y2).sqrt();
    if denominator == 0.0 {
        return Err(NumericError::ZeroVariance);
    }
    Ok(numerator / denominator)
}
