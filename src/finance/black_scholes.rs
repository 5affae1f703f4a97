use crate::dist::{standard_normal_cdf, standard_normal_pdf};
use crate::finance::OptionParams;
use serde::Serialize;

/// European call and put prices for the same parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct OptionPrices {
    pub call_price: f64,
    pub put_price: f64,
}

/// Sensitivities for a European call and put.
///
/// Theta is per calendar day (annual / 365); vega and rho are per one
/// percentage-point move (raw / 100).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Greeks {
    pub call_delta: f64,
    pub put_delta: f64,
    pub gamma: f64,
    pub call_theta: f64,
    pub put_theta: f64,
    pub vega: f64,
    pub call_rho: f64,
    pub put_rho: f64,
}

/// Black-Scholes call and put prices.
///
/// call = S*N(d1) - K*e^(-rT)*N(d2)
/// put  = K*e^(-rT)*N(-d2) - S*N(-d1)
///
/// Returns zero prices if any of S, K, T, sigma is non-positive.
pub fn black_scholes(spot: f64, strike: f64, t: f64, rate: f64, sigma: f64) -> OptionPrices {
    price(&OptionParams::new(spot, strike, t, rate, sigma))
}

/// Same as [`black_scholes`] for a prepared parameter set.
pub fn price(params: &OptionParams) -> OptionPrices {
    if !params.is_valid() {
        return OptionPrices::default();
    }

    let (d1, d2) = params.d1_d2();
    let discounted_strike = params.strike * params.discount_factor();

    OptionPrices {
        call_price: params.spot * standard_normal_cdf(d1) - discounted_strike * standard_normal_cdf(d2),
        put_price: discounted_strike * standard_normal_cdf(-d2) - params.spot * standard_normal_cdf(-d1),
    }
}

/// Raw vega S*sqrt(T)*phi(d1), unscaled. Used as the Newton derivative for
/// implied volatility.
#[inline]
pub fn vega(params: &OptionParams) -> f64 {
    let (d1, _) = params.d1_d2();
    params.spot * params.time_to_expiry.sqrt() * standard_normal_pdf(d1)
}

/// Call and put Greeks. `None` if any of S, K, T, sigma is non-positive.
pub fn greeks(spot: f64, strike: f64, t: f64, rate: f64, sigma: f64) -> Option<Greeks> {
    let params = OptionParams::new(spot, strike, t, rate, sigma);
    if !params.is_valid() {
        return None;
    }

    let (d1, d2) = params.d1_d2();
    let sqrt_t = t.sqrt();
    let nd1 = standard_normal_cdf(d1);
    let nd2 = standard_normal_cdf(d2);
    let pdf_d1 = standard_normal_pdf(d1);
    let discounted_strike = strike * params.discount_factor();

    let decay = -(spot * pdf_d1 * sigma) / (2.0 * sqrt_t);
    let call_theta = decay - rate * discounted_strike * nd2;
    let put_theta = decay + rate * discounted_strike * (1.0 - nd2);

    Some(Greeks {
        call_delta: nd1,
        put_delta: nd1 - 1.0,
        gamma: pdf_d1 / (spot * sigma * sqrt_t),
        call_theta: call_theta / 365.0,
        put_theta: put_theta / 365.0,
        vega: spot * sqrt_t * pdf_d1 / 100.0,
        call_rho: t * discounted_strike * nd2 / 100.0,
        put_rho: -t * discounted_strike * (1.0 - nd2) / 100.0,
    })
}
