use tracing_subscriber::EnvFilter;

const CRATES: [&str; 3] = ["bookfreq", "bookfreq_fetch", "bookfreq_fs"];

/// Filter directives for our crates at the given level.
pub fn filter_directives(debug: bool) -> String {
    let level = if debug { "debug" } else { "info" };
    CRATES
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install the stderr subscriber. `RUST_LOG` wins over the `--debug` flag.
pub fn setup_logging(debug: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(debug));

    // An embedding process may already own the global subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn default_filter(debug: bool) -> EnvFilter { EnvFilter::new(filter_directives(debug)) }
