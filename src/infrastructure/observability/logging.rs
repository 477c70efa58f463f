use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Install the global tracing subscriber (stdout, `RUST_LOG` aware, INFO by default).
pub fn init_tracing() {
    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // A second call (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .try_init();
}
