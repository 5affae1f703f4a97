use crate::errors::{NumericError, NumericResult};
use crate::finance::OptionKind;
use crate::sim::{positive_count, SimRng};
use serde::Serialize;

/// Raw indicator samples kept in the result for inspection.
const SAMPLE_PREVIEW: usize = 100;
/// Two-sided 95% normal quantile.
const Z_95: f64 = 1.96;

/// Estimate plus its sampling uncertainty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonteCarloResult {
    pub mean: f64,
    pub std_dev: f64,
    pub confidence_interval: [f64; 2],
    pub samples: Vec<f64>,
}

/// Estimates pi by throwing `num_samples` uniform points into [-1, 1]^2.
///
/// `mean` is 4 * (fraction inside the unit circle). `std_dev` is the sample
/// standard deviation of the per-point estimator 4 * indicator, so the 95%
/// interval `mean +/- 1.96 * std_dev / sqrt(n)` brackets pi itself.
/// `samples` holds the first (up to) 100 raw 0/1 indicators.
pub fn monte_carlo_pi_estimate(num_samples: i64, seed: Option<u64>) -> NumericResult<MonteCarloResult> {
    let n = positive_count(num_samples, "number of samples")?;
    let mut rng = SimRng::new(seed);

    let mut inside = 0usize;
    let mut preview = Vec::with_capacity(n.min(SAMPLE_PREVIEW));
    for i in 0..n {
        let x = rng.gen_range(-1.0, 1.0);
        let y = rng.gen_range(-1.0, 1.0);
        let hit = x * x + y * y <= 1.0;
        if hit {
            inside += 1;
        }
        if i < SAMPLE_PREVIEW {
            preview.push(if hit { 1.0 } else { 0.0 });
        }
    }

    let nf = n as f64;
    let fraction = inside as f64 / nf;
    let mean = 4.0 * fraction;

    // Indicator variance in closed form: inside * (1-f)^2 + outside * f^2.
    let std_dev = if n > 1 {
        let outside = (n - inside) as f64;
        let sum_sq = inside as f64 * (1.0 - fraction).powi(2) + outside * fraction.powi(2);
        4.0 * (sum_sq / (nf - 1.0)).sqrt()
    } else {
        0.0
    };

    let margin = Z_95 * std_dev / nf.sqrt();
    tracing::debug!(samples = n, estimate = mean, margin, seed = rng.seed(), "pi estimate complete");

    Ok(MonteCarloResult {
        mean,
        std_dev,
        confidence_interval: [mean - margin, mean + margin],
        samples: preview,
    })
}

/// European option price by simulating terminal prices under risk-neutral GBM.
///
/// S_T = S0 * exp((r - sigma^2/2) T + sigma sqrt(T) Z); the mean payoff is
/// discounted by e^(-rT).
#[allow(clippy::too_many_arguments)]
pub fn option_pricing_monte_carlo(
    spot: f64,
    strike: f64,
    t: f64,
    rate: f64,
    sigma: f64,
    num_sims: i64,
    kind: OptionKind,
    seed: Option<u64>,
) -> NumericResult<f64> {
    let n = positive_count(num_sims, "number of simulations")?;
    if spot <= 0.0 || strike <= 0.0 || t <= 0.0 || sigma <= 0.0 {
        return Err(NumericError::InvalidArgument(format!(
            "spot, strike, expiry and volatility must be positive \
             (S={spot}, K={strike}, T={t}, sigma={sigma})"
        )));
    }

    let mut rng = SimRng::new(seed);
    let drift = (rate - 0.5 * sigma * sigma) * t;
    let diffusion = sigma * t.sqrt();

    let payoff_sum: f64 = (0..n)
        .map(|_| {
            let terminal = spot * (drift + diffusion * rng.gen_normal()).exp();
            kind.payoff(terminal, strike)
        })
        .sum();

    let price = payoff_sum / n as f64 * (-rate * t).exp();
    tracing::debug!(sims = n, price, %kind, seed = rng.seed(), "monte carlo option price");
    Ok(price)
}
