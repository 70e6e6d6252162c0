//! Shimatabi CLI Library
//!
//! Operator-facing commands for the Shimatabi site. The site itself is a
//! WASM bundle; these commands wrap the bundler and serve its output.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (build, watch, deploy)
//! - [`server`] - Embedded development server with live reload
//! - [`assets`] - Static-asset copy-through

pub mod assets;
pub mod cmd;
pub mod server;

pub use shimatabi_core::Config;

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
