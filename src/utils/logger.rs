use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset.
pub fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "drone_location=debug,info"
    } else {
        "drone_location=info"
    }
}

fn build_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)))
}

/// Installs the global subscriber: compact lines for a terminal, or one JSON
/// object per event. `verbose` applies to both.
pub fn init_logger(verbose: bool, json: bool) {
    let registry = tracing_subscriber::registry().with(build_filter(verbose));
    let layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    if json {
        registry.with(layer.json()).init();
    } else {
        registry.with(layer.compact()).init();
    }
}
