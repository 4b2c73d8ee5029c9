pub mod config;
pub mod catalog; // Knowledge base: medicines + recognized conditions
pub mod awareness; // Static awareness content for the presentation layer
pub mod risk; // Risk evaluation + safety comparison
pub mod query; // Search query + transport codec
pub mod assemble; // Result assembly for presentation

use tracing_subscriber::EnvFilter;

/// Initialize tracing for binary entry points.
/// `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}
