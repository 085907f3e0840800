use crate::modules::calendar::core::ports::{LogFields, Logger};
use std::fmt::Write as _;
use tracing_subscriber::{EnvFilter, fmt};

/// Forwards use case logs to `tracing`, flattening the key/value context into a
/// single `fields` value.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str, fields: &LogFields) {
        tracing::info!(fields = %render_fields(fields), "{message}");
    }

    fn error(&self, message: &str, fields: &LogFields) {
        tracing::error!(fields = %render_fields(fields), "{message}");
    }
}

pub fn render_fields(fields: &LogFields) -> String {
    let mut rendered = String::new();
    for (index, (key, value)) in fields.iter().enumerate() {
        if index > 0 {
            rendered.push(' ');
        }
        let _ = write!(rendered, "{key}={value}");
    }
    rendered
}

/// Installs the global subscriber. Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
}
