//! Global tracing subscriber.

use tracing_subscriber::{
    EnvFilter, Registry,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

use crate::config::{ServerConfig, observability::LogFormat};

use super::ObservabilityError;

/// Noisy dependencies are capped at `warn` unless `RUST_LOG` says otherwise.
const QUIET_TARGETS: &str = "h2=warn,hyper=warn,sqlx=warn";

pub(super) fn init_subscriber(config: &ServerConfig) -> Result<(), ObservabilityError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_ignored| default_filter(&config.logging.log_level));

    let fmt = tracing_subscriber::fmt::layer().with_target(true);

    let layer: Box<dyn Layer<Registry> + Send + Sync> = match config.logging.log_format {
        LogFormat::Compact => fmt.compact().boxed(),
        LogFormat::Pretty => fmt.pretty().with_file(true).with_line_number(true).boxed(),
        LogFormat::Json => fmt
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(layer)
        .with(filter)
        .try_init()?;

    Ok(())
}

fn default_filter(level: &str) -> EnvFilter {
    EnvFilter::new(format!("{level},{QUIET_TARGETS}"))
}
