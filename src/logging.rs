use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Log level for a `-v` count
pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the stderr subscriber. `RUST_LOG` directives are honoured on top of `-v`.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::from_default_env().add_directive(level_for(verbosity).into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbosity >= 2)
        .with_writer(std::io::stderr)
        .init();
}
