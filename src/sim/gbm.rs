use crate::errors::{NumericError, NumericResult};
use crate::sim::{positive_count, SimRng};

/// Simulates `paths` geometric Brownian motion trajectories of `steps` steps.
///
/// S_{t+1} = S_t * exp((mu - sigma^2/2) dt + sigma sqrt(dt) Z), dt = T / steps.
/// Each path has `steps + 1` points and starts at `s0`.
pub fn geometric_brownian_motion(
    s0: f64,
    mu: f64,
    sigma: f64,
    t: f64,
    steps: i64,
    paths: i64,
    seed: Option<u64>,
) -> NumericResult<Vec<Vec<f64>>> {
    let steps = positive_count(steps, "steps")?;
    let paths = positive_count(paths, "paths")?;
    if t <= 0.0 || sigma <= 0.0 || s0 <= 0.0 {
        return Err(NumericError::InvalidArgument(format!(
            "initial price, horizon and volatility must be positive (S0={s0}, T={t}, sigma={sigma})"
        )));
    }

    let mut rng = SimRng::new(seed);
    let dt = t / steps as f64;
    let drift = (mu - 0.5 * sigma * sigma) * dt;
    let diffusion = sigma * dt.sqrt();

    let result: Vec<Vec<f64>> = (0..paths)
        .map(|_| {
            let mut path = Vec::with_capacity(steps + 1);
            let mut price = s0;
            path.push(price);
            for _ in 0..steps {
                price *= (drift + diffusion * rng.gen_normal()).exp();
                path.push(price);
            }
            path
        })
        .collect();

    tracing::debug!(paths, steps, seed = rng.seed(), "gbm paths generated");
    Ok(result)
}
