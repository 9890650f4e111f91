//! Observability for recordbox
//!
//! Structured logging through `tracing`. The subscriber is installed once
//! by the binary; library code only emits events.
//!
//! # Usage
//!
//! ```ignore
//! use recordbox::config::LogFormat;
//! use recordbox::observability::{init_logging, log_event, Event};
//!
//! init_logging(LogFormat::Json);
//! log_event(Event::Serving, "0.0.0.0:3000");
//! ```

mod events;

pub use events::Event;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LogFormat;

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "recordbox=info,tower_http=info";

/// Install the global tracing subscriber.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logging(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let registry = tracing_subscriber::registry().with(filter);

    let result = match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).try_init(),
    };

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

/// Log a lifecycle event with a detail string
pub fn log_event(event: Event, detail: &str) {
    info!(event = event.as_str(), detail, "{}", event);
}
