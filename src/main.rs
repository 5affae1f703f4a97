use numeric_engine::config::AppConfig;
use numeric_engine::diagnostics;

fn main() {
    // Config first: it carries the default log filter.
    let cfg = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("[numeric_engine] config error: {e}");
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.log_filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(seed = ?cfg.rng_seed, sims = cfg.self_check_sims, "numeric_engine self-check starting");

    let report = diagnostics::run(&cfg);

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(e) => tracing::error!("failed to serialize report: {e}"),
    }

    if !report.passed {
        tracing::error!("self-check failed");
        std::process::exit(1);
    }
    tracing::info!("self-check passed");
}
