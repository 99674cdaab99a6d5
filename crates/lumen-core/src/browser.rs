//! Main browser state container

use std::sync::Arc;

use lumen_navigation::{NavigationController, PageSurface};

use crate::config::Config;

/// Central container for the application: configuration plus the navigation
/// controller that talks to the content surface.
pub struct Browser {
    /// Configuration
    config: Config,
    /// Navigation controller for the address bar
    navigation: NavigationController,
}

impl Browser {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            navigation: NavigationController::new(),
        }
    }

    /// Attach the content surface. The shell calls this once when it creates
    /// its content webview; navigations before this point are dropped.
    pub fn bind_surface(&self, surface: Arc<dyn PageSurface>) {
        self.navigation.bind(surface);
        tracing::info!("content surface bound");
    }

    /// Normalize raw address input and forward it to the content surface.
    pub fn navigate(&self, input: &str) {
        self.navigation.navigate(input);
    }

    pub fn homepage(&self) -> &str {
        &self.config.homepage
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct RecordingSurface {
        loads: Mutex<Vec<String>>,
    }

    impl PageSurface for RecordingSurface {
        fn load(&self, url: &str) {
            self.loads.lock().push(url.to_string());
        }
    }

    #[test]
    fn test_navigate_reaches_bound_surface() {
        let browser = Browser::new(Config::default());
        let surface = Arc::new(RecordingSurface::default());

        browser.bind_surface(surface.clone());
        browser.navigate("example.com");

        assert_eq!(surface.loads.lock().as_slice(), ["https://example.com"]);
    }

    #[test]
    fn test_navigate_without_surface_does_nothing() {
        let browser = Browser::new(Config::default());
        browser.navigate("example.com");
    }

    #[test]
    fn test_homepage_from_config() {
        let config = Config {
            homepage: "https://example.org".to_string(),
            ..Config::default()
        };
        let browser = Browser::new(config);
        assert_eq!(browser.homepage(), "https://example.org");
    }
}
