use crate::errors::{NumericError, NumericResult};
use crate::finance::black_scholes::{price, vega};
use crate::finance::{OptionKind, OptionParams};

const INITIAL_SIGMA: f64 = 0.2;
const TOLERANCE: f64 = 1e-6;
const MAX_ITERATIONS: usize = 100;
const MIN_VEGA: f64 = 1e-10;
/// Volatility restart point when a Newton step overshoots below zero.
const SIGMA_FLOOR: f64 = 0.01;

/// Implied volatility by Newton-Raphson on sigma, with vega as the derivative.
///
/// Starts at sigma = 0.2 and stops once a step moves sigma by less than 1e-6.
/// A step that leaves sigma non-positive restarts from 0.01.
pub fn implied_volatility(
    spot: f64,
    strike: f64,
    t: f64,
    rate: f64,
    market_price: f64,
    kind: OptionKind,
) -> NumericResult<f64> {
    if spot <= 0.0 || strike <= 0.0 || t <= 0.0 || market_price <= 0.0 {
        return Err(NumericError::InvalidArgument(format!(
            "spot, strike, expiry and market price must be positive \
             (S={spot}, K={strike}, T={t}, price={market_price})"
        )));
    }

    let mut sigma = INITIAL_SIGMA;
    for i in 0..MAX_ITERATIONS {
        let params = OptionParams::new(spot, strike, t, rate, sigma);
        let prices = price(&params);
        let model_price = match kind {
            OptionKind::Call => prices.call_price,
            OptionKind::Put => prices.put_price,
        };

        let v = vega(&params);
        if v.abs() < MIN_VEGA {
            tracing::warn!(sigma, vega = v, iteration = i, %kind, "implied vol: vega underflow");
            return Err(NumericError::VegaTooSmall { sigma, vega: v });
        }

        let next = sigma - (model_price - market_price) / v;
        if (next - sigma).abs() < TOLERANCE {
            tracing::debug!(iterations = i + 1, sigma = next, %kind, "implied vol converged");
            return Ok(next);
        }

        sigma = if next <= 0.0 { SIGMA_FLOOR } else { next };
    }

    tracing::warn!(market_price, last_sigma = sigma, %kind, "implied vol did not converge");
    Err(NumericError::NotConverged {
        iterations: MAX_ITERATIONS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finance::black_scholes::black_scholes;

    #[test]
    fn test_recovers_call_vol() {
        let cases = [
            (100.0, 100.0, 1.0, 0.05, 0.2),
            (100.0, 120.0, 0.5, 0.01, 0.35),
            (50.0, 45.0, 2.0, 0.03, 0.05),
            (500.0, 400.0, 3.0, 0.02, 0.8),
            (10.0, 10.0, 0.25, 0.0, 2.0),
            (900.0, 1000.0, 5.0, 0.04, 1.2),
        ];
        for &(s, k, t, r, sigma) in &cases {
            let market = black_scholes(s, k, t, r, sigma).call_price;
            let iv = implied_volatility(s, k, t, r, market, OptionKind::Call).unwrap();
            assert!((iv - sigma).abs() < 1e-4, "S={s} K={k} T={t}: iv={iv} sigma={sigma}");
        }
    }

    #[test]
    fn test_recovers_put_vol() {
        let market = black_scholes(100.0, 110.0, 1.0, 0.03, 0.4).put_price;
        let iv = implied_volatility(100.0, 110.0, 1.0, 0.03, market, OptionKind::Put).unwrap();
        assert!((iv - 0.4).abs() < 1e-4, "iv={iv}");
    }

    #[test]
    fn test_rejects_non_positive_inputs() {
        for args in [
            (0.0, 100.0, 1.0, 5.0),
            (100.0, 0.0, 1.0, 5.0),
            (100.0, 100.0, 0.0, 5.0),
            (100.0, 100.0, 1.0, 0.0),
        ] {
            let (s, k, t, p) = args;
            assert!(matches!(
                implied_volatility(s, k, t, 0.05, p, OptionKind::Call),
                Err(NumericError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn test_vega_underflow_far_from_money() {
        // Deep out of the money with a short expiry: vega at sigma=0.2 is ~0.
        let result = implied_volatility(1.0, 1000.0, 0.01, 0.0, 1e-3, OptionKind::Call);
        assert!(matches!(result, Err(NumericError::VegaTooSmall { .. })), "{result:?}");
    }

    #[test]
    fn test_overshoot_into_floor_can_strand_deep_itm() {
        // A Newton step from 0.2 overshoots below zero; at the 0.01 floor the
        // option is so deep in the money that vega vanishes.
        let market = black_scholes(10.0, 8.0, 0.25, 0.0, 1.5).call_price;
        let result = implied_volatility(10.0, 8.0, 0.25, 0.0, market, OptionKind::Call);
        assert!(matches!(result, Err(NumericError::VegaTooSmall { sigma, .. }) if sigma == 0.01), "{result:?}");
    }

    #[test]
    fn test_price_above_spot_does_not_converge() {
        // No volatility reproduces a call worth more than the underlying.
        let result = implied_volatility(100.0, 100.0, 1.0, 0.05, 150.0, OptionKind::Call);
        assert!(result.is_err(), "{result:?}");
    }
}
