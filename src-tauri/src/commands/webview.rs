//! Content webview management
//!
//! A single child webview renders page content below the address bar. It is
//! wrapped in a [`PageSurface`] so the core never sees Tauri types.

use parking_lot::RwLock;
use std::sync::Arc;
use tauri::{AppHandle, LogicalPosition, LogicalSize, Manager};

use lumen_core::PageSurface;

use super::CommandResult;

pub const CONTENT_WEBVIEW_LABEL: &str = "content-main";

/// Layout of the content area inside the main window.
#[derive(Clone, Copy)]
pub struct ContentBounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for ContentBounds {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 96.0, // address bar height
            width: 1024.0,
            height: 672.0,
        }
    }
}

/// Tracks where the content webview sits within the window.
pub struct ContentLayout {
    bounds: Arc<RwLock<ContentBounds>>,
}

impl ContentLayout {
    pub fn new() -> Self {
        Self {
            bounds: Arc::new(RwLock::new(ContentBounds::default())),
        }
    }

    pub fn get_bounds(&self) -> ContentBounds {
        *self.bounds.read()
    }

    pub fn set_bounds(&self, bounds: ContentBounds) {
        *self.bounds.write() = bounds;
    }
}

impl Default for ContentLayout {
    fn default() -> Self {
        Self::new()
    }
}

/// [`PageSurface`] implementation backed by the content webview.
///
/// Load failures end here: input the webview cannot parse or fetch is logged
/// and dropped, never surfaced to the core.
pub struct WebviewSurface {
    app: AppHandle,
}

impl WebviewSurface {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl PageSurface for WebviewSurface {
    fn load(&self, url: &str) {
        let webview = match self.app.get_webview(CONTENT_WEBVIEW_LABEL) {
            Some(w) => w,
            None => {
                tracing::warn!(url = %url, "content webview missing, dropping load");
                return;
            }
        };

        let parsed: url::Url = match url.parse() {
            Ok(u) => u,
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "webview rejected URL");
                return;
            }
        };

        if let Err(e) = webview.navigate(parsed) {
            tracing::warn!(url = %url, error = %e, "navigation failed");
        }
    }
}

/// Reposition the content webview when the window or address bar changes size.
#[tauri::command]
pub async fn set_content_bounds(
    app: AppHandle,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
) -> CommandResult<()> {
    let layout = match app.try_state::<ContentLayout>() {
        Some(l) => l,
        None => return CommandResult::err("ContentLayout not found".to_string()),
    };

    layout.set_bounds(ContentBounds {
        x,
        y,
        width,
        height,
    });

    let webview = match app.get_webview(CONTENT_WEBVIEW_LABEL) {
        Some(w) => w,
        None => return CommandResult::err("Content webview not found".to_string()),
    };

    // Position is relative to the parent window
    let position = LogicalPosition::new(x, y);
    let size = LogicalSize::new(width, height);

    if let Err(e) = webview.set_position(position) {
        return CommandResult::err(format!("Failed to set position: {}", e));
    }

    if let Err(e) = webview.set_size(size) {
        return CommandResult::err(format!("Failed to set size: {}", e));
    }

    CommandResult::ok(())
}
