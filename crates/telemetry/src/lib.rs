//! Logging and tracing bootstrap.

use estante_kernel::settings::{LogFormat, TelemetrySettings};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber according to telemetry settings.
///
/// Safe to call more than once; later calls are no-ops so tests can share
/// a process with the bootstrap path.
pub fn init(settings: &TelemetrySettings) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match settings.log_format {
        LogFormat::Json => builder.json().try_init().ok(),
        LogFormat::Pretty => builder.try_init().ok(),
    };
}
