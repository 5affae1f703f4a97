//! Normal distribution evaluation.
//!
//! The CDF is built on the Abramowitz-Stegun 7.1.26 rational approximation of
//! erf (absolute error below 1.5e-7). Option prices downstream inherit that
//! error bound, so the approximation is fixed here rather than delegated.
//!
//! The inverse CDF uses Beasley-Springer-Moro: a rational approximation in the
//! central region and a Chebyshev series in log(-log(p)) in the tails.

use std::f64::consts::{PI, SQRT_2};

const ERF_A1: f64 = 0.254829592;
const ERF_A2: f64 = -0.284496736;
const ERF_A3: f64 = 1.421413741;
const ERF_A4: f64 = -1.453152027;
const ERF_A5: f64 = 1.061405429;
const ERF_P: f64 = 0.3275911;

/// Central-region split: |p - 0.5| <= 0.42.
const BSM_SPLIT: f64 = 0.42;

const BSM_A: [f64; 4] = [
    2.50662823884,
    -18.61500062529,
    41.39119773534,
    -25.44106049637,
];
const BSM_B: [f64; 4] = [
    -8.47351093090,
    23.08336743743,
    -21.06224101826,
    3.13082909833,
];
const BSM_C: [f64; 9] = [
    0.3374754822726147,
    0.9761690190917186,
    0.1607979714918209,
    0.0276438810333863,
    0.0038405729373609,
    0.0003951896511919,
    0.0000321767881768,
    0.0000002888167364,
    0.0000003960315187,
];

/// Gaussian density. A non-positive `std` yields 0.
#[inline]
pub fn normal_pdf(x: f64, mean: f64, std: f64) -> f64 {
    if std <= 0.0 {
        return 0.0;
    }
    let z = (x - mean) / std;
    (-0.5 * z * z).exp() / (std * (2.0 * PI).sqrt())
}

#[inline]
pub fn standard_normal_pdf(z: f64) -> f64 {
    normal_pdf(z, 0.0, 1.0)
}

/// Gaussian distribution function. A non-positive `std` yields 0.
#[inline]
pub fn normal_cdf(x: f64, mean: f64, std: f64) -> f64 {
    if std <= 0.0 {
        return 0.0;
    }
    standard_normal_cdf((x - mean) / std)
}

#[inline]
pub fn standard_normal_cdf(z: f64) -> f64 {
    0.5 * (1.0 + erf(z / SQRT_2))
}

/// Abramowitz-Stegun 7.1.26. Odd by construction: erf(-x) == -erf(x) exactly.
pub fn erf(x: f64) -> f64 {
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + ERF_P * x);
    let poly = ((((ERF_A5 * t + ERF_A4) * t + ERF_A3) * t + ERF_A2) * t + ERF_A1) * t;
    sign * (1.0 - poly * (-x * x).exp())
}

/// Quantile of N(mean, std^2). NaN when `p` is outside the open interval (0, 1).
pub fn inverse_normal_cdf(p: f64, mean: f64, std: f64) -> f64 {
    if !(p > 0.0 && p < 1.0) {
        return f64::NAN;
    }
    mean + std * inverse_standard_normal(p)
}

/// Standard normal quantile by Beasley-Springer-Moro. `p` must lie in (0, 1).
pub fn inverse_standard_normal(p: f64) -> f64 {
    let y = p - 0.5;

    if y.abs() <= BSM_SPLIT {
        let r = y * y;
        let num = ((BSM_A[3] * r + BSM_A[2]) * r + BSM_A[1]) * r + BSM_A[0];
        let den = (((BSM_B[3] * r + BSM_B[2]) * r + BSM_B[1]) * r + BSM_B[0]) * r + 1.0;
        return y * num / den;
    }

    let tail = if y < 0.0 { p } else { 1.0 - p };
    let r = (-tail.ln()).ln();
    let x = BSM_C.iter().rev().fold(0.0, |acc, &c| acc * r + c);
    if y < 0.0 {
        -x
    } else {
        x
    }
}
