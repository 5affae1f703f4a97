use crate::errors::{NumericError, NumericResult};

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Fixed seed for the self-check's Monte Carlo runs. `None` uses entropy.
    pub rng_seed: Option<u64>,
    pub self_check_sims: i64,
    pub log_filter: String,
}

impl AppConfig {
    pub fn from_env() -> NumericResult<Self> {
        dotenvy::dotenv().ok();

        let rng_seed = match std::env::var("NUMERIC_RNG_SEED") {
            Ok(raw) if !raw.trim().is_empty() => Some(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|e| NumericError::Config(format!("NUMERIC_RNG_SEED: {e}")))?,
            ),
            _ => None,
        };

        let self_check_sims = env_var_or("NUMERIC_SELF_CHECK_SIMS", "200000")
            .parse::<i64>()
            .map_err(|e| NumericError::Config(format!("NUMERIC_SELF_CHECK_SIMS: {e}")))?;

        if self_check_sims <= 0 {
            return Err(NumericError::Config(format!(
                "NUMERIC_SELF_CHECK_SIMS must be positive, got {self_check_sims}"
            )));
        }

        Ok(Self {
            rng_seed,
            self_check_sims,
            log_filter: env_var_or("NUMERIC_LOG", "info"),
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rng_seed: None,
            self_check_sims: 200_000,
            log_filter: "info".to_string(),
        }
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
