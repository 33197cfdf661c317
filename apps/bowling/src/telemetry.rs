use bowling::LogFormat;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Logs go to stderr so they never interleave with the score lines on stdout.
pub fn init_tracing(format: LogFormat, verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr);

    let registry = tracing_subscriber::registry().with(env_filter);
    match format {
        LogFormat::Json => registry.with(fmt_layer.with_ansi(false).json()).init(),
        LogFormat::Text => registry.with(fmt_layer.without_time()).init(),
    }
}
