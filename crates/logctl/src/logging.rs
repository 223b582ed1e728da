//! Logging setup
//!
//! Diagnostics go to stderr so that command output on stdout stays clean.
//! `RUST_LOG` takes precedence over `--log-level`.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

pub fn init_logging(default_level: &str) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_level)?,
    };

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(filter);

    tracing_subscriber::registry().with(console_layer).try_init()?;
    Ok(())
}
