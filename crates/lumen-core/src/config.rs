//! Browser configuration

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// URL the content surface loads at startup; also seeds the address field
    pub homepage: String,
    /// Main window title
    pub window_title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            homepage: "https://www.google.com".to_string(),
            window_title: "Lumen".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_homepage() {
        let config = Config::default();
        assert_eq!(config.homepage, "https://www.google.com");
        assert_eq!(config.window_title, "Lumen");
    }
}
