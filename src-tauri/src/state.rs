//! Application state management
use lumen_core::{Browser, Config, CoreError, Result};
use parking_lot::RwLock;
use std::sync::Arc;

/// Thread-safe application state wrapper
pub struct AppState {
    browser: Arc<RwLock<Option<Browser>>>,
}

impl AppState {
    pub fn new() -> Self {
        let browser = Browser::new(Config::default());

        Self {
            browser: Arc::new(RwLock::new(Some(browser))),
        }
    }

    pub fn with_browser<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Browser) -> Result<T>,
    {
        let guard = self.browser.read();
        match guard.as_ref() {
            Some(browser) => f(browser),
            None => Err(CoreError::NotInitialized),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
