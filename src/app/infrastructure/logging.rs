use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,ferris_link=debug";

/// Initialize structured logging to stderr.
///
/// `RUST_LOG` overrides the default filter. Calling this twice is harmless;
/// the second subscriber is simply not installed.
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("FerrisLink {} starting", env!("CARGO_PKG_VERSION"));
    }
}
