//! Lumen Core
//!
//! Central coordination layer for the Lumen browser. The shell owns the
//! window and webviews; everything they need from the application lives
//! behind [`Browser`].

mod browser;
mod config;
mod error;

pub use browser::Browser;
pub use config::Config;
pub use error::CoreError;

// Re-export navigation components
pub use lumen_navigation::{normalize, Binding, NavigationController, PageSurface};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
