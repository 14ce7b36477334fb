use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogFormat;

static INIT: Once = Once::new();

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` controls the filter (default `info`). Subsequent calls are no-ops.
pub fn init_logging(format: LogFormat) {
  INIT.call_once(|| {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match format {
      LogFormat::Json => {
        tracing_subscriber::registry().with(env_filter).with(fmt::layer().json()).init();
      }
      LogFormat::Pretty => {
        tracing_subscriber::registry().with(env_filter).with(fmt::layer().pretty()).init();
      }
    }
  });
}
