//! Surface binding and navigation forwarding

use parking_lot::RwLock;
use std::sync::Arc;

use crate::normalize;

/// The rendering collaborator: fetches and displays web content given a URL.
///
/// Success or failure of the load is the surface's own business; the
/// controller hands it a string and returns.
pub trait PageSurface: Send + Sync {
    fn load(&self, url: &str);
}

/// Binding state of the controller.
///
/// Starts `Unbound`; [`NavigationController::bind`] moves it to `Bound` and
/// normal operation never moves it back.
pub enum Binding {
    Unbound,
    Bound(Arc<dyn PageSurface>),
}

/// Forwards normalized addresses to the bound page surface.
pub struct NavigationController {
    binding: RwLock<Binding>,
}

impl NavigationController {
    pub fn new() -> Self {
        Self {
            binding: RwLock::new(Binding::Unbound),
        }
    }

    /// Record the surface that receives navigations. Replaces any previous
    /// binding.
    pub fn bind(&self, surface: Arc<dyn PageSurface>) {
        *self.binding.write() = Binding::Bound(surface);
        tracing::debug!("page surface bound");
    }

    pub fn is_bound(&self) -> bool {
        matches!(*self.binding.read(), Binding::Bound(_))
    }

    /// Normalize `raw` and hand the result to the bound surface.
    ///
    /// While unbound this is a no-op: the input is dropped without error.
    pub fn navigate(&self, raw: &str) {
        let url = normalize(raw);

        match &*self.binding.read() {
            Binding::Bound(surface) => {
                tracing::info!(url = %url, "navigate");
                surface.load(&url);
            }
            Binding::Unbound => {
                tracing::debug!(url = %url, "navigate before surface bound, dropping");
            }
        }
    }
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new()
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

    impl RecordingSurface {
        fn loads(&self) -> Vec<String> {
            self.loads.lock().clone()
        }
    }

    impl PageSurface for RecordingSurface {
        fn load(&self, url: &str) {
            self.loads.lock().push(url.to_string());
        }
    }

    #[test]
    fn test_navigate_unbound_is_noop() {
        let controller = NavigationController::new();
        assert!(!controller.is_bound());

        // Must not panic and must not reach any surface.
        controller.navigate("example.com");
    }

    #[test]
    fn test_navigate_forwards_normalized_url() {
        let controller = NavigationController::new();
        let surface = Arc::new(RecordingSurface::default());
        controller.bind(surface.clone());
        assert!(controller.is_bound());

        controller.navigate("example.com");

        assert_eq!(surface.loads(), ["https://example.com"]);
    }

    #[test]
    fn test_navigate_loads_exactly_once_per_call() {
        let controller = NavigationController::new();
        let surface = Arc::new(RecordingSurface::default());
        controller.bind(surface.clone());

        controller.navigate("https://example.com");
        controller.navigate("www.example.com");

        assert_eq!(
            surface.loads(),
            ["https://example.com", "https://www.example.com"]
        );
    }

    #[test]
    fn test_input_dropped_while_unbound_stays_dropped() {
        let controller = NavigationController::new();
        let surface = Arc::new(RecordingSurface::default());

        controller.navigate("early.example.com");
        controller.bind(surface.clone());
        controller.navigate("late.example.com");

        assert_eq!(surface.loads(), ["https://late.example.com"]);
    }

    #[test]
    fn test_bind_replaces_surface() {
        let controller = NavigationController::new();
        let first = Arc::new(RecordingSurface::default());
        let second = Arc::new(RecordingSurface::default());

        controller.bind(first.clone());
        controller.bind(second.clone());
        controller.navigate("example.com");

        assert!(first.loads().is_empty());
        assert_eq!(second.loads(), ["https://example.com"]);
    }
}
