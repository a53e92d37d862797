use anyhow::Result;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = jclip::config::load_from_env()?;
    init_logging(&config.log_level, &config.log_format);
    config.print_summary();

    if let Err(e) = jclip::server::run(config).await {
        tracing::error!("Server failed: {e:#}");
        std::process::exit(1);
    }

    Ok(())
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` directives take precedence; `level` is the fallback filter.
fn init_logging(level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match format {
        "json" => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init(),
        _ => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init(),
    }
}
