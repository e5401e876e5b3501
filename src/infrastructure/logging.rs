use tracing::Level;
use tracing_subscriber::prelude::*;

/// Install the global subscriber: `RUST_LOG` filter (INFO baseline) and a
/// stderr fmt layer, so stdout stays free for command output.
pub fn init_tracing() {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false) // cleaner
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stderr_layer)
        .init();
}
