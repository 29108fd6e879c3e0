use std::io;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::cli::LogFormat;

/// Install the global subscriber. Logs go to stderr so stdout stays parseable.
///
/// `RUST_LOG` overrides the default `warn` level.
pub fn init(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(io::stderr),
            )
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_writer(io::stderr))
            .init(),
    }
}
