use dfrp_export::{cli, errors::AppResult};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    cli::cli().inspect_err(|e| error!(error = %e, "Export failed"))
}
