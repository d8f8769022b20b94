use tracing::subscriber::set_global_default;
use tracing_log::LogTracer;
use tracing_subscriber::EnvFilter;

use crate::cli::LogFormat;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info";

/// Installs the global tracing subscriber and routes `log` records (sqlx
/// emits those) into it.
pub fn init(format: LogFormat) -> anyhow::Result<()> {
    LogTracer::init()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter);

    match format {
        LogFormat::Pretty => set_global_default(builder.finish())?,
        LogFormat::Json => set_global_default(builder.json().finish())?,
    }

    Ok(())
}
