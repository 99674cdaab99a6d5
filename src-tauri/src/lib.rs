//! Lumen Browser - Tauri Application
//!
//! One window, two child webviews: the address bar UI on top and the page
//! content below it. Rust owns the navigation state; the webviews render.

mod commands;
mod state;

use std::sync::Arc;

use commands::webview::{ContentLayout, WebviewSurface, CONTENT_WEBVIEW_LABEL};
use state::AppState;
use tauri::webview::WebviewBuilder;
use tauri::window::WindowBuilder;
use tauri::{LogicalPosition, LogicalSize, Manager, WebviewUrl};

const UI_WEBVIEW_LABEL: &str = "ui-main";

const WINDOW_WIDTH: f64 = 1024.0;
const WINDOW_HEIGHT: f64 = 768.0;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logging
    lumen_core::init_logging();

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let state = AppState::new();

            let window_title = state
                .with_browser(|browser| Ok(browser.config().window_title.clone()))?;
            let homepage =
                state.with_browser(|browser| Ok(lumen_core::normalize(browser.homepage())))?;

            // Store state in Tauri
            app.manage(state);
            app.manage(ContentLayout::new());

            let window = WindowBuilder::new(app, "main")
                .title(window_title)
                .inner_size(WINDOW_WIDTH, WINDOW_HEIGHT)
                .min_inner_size(640.0, 480.0)
                .center()
                .build()?;

            // Address bar UI spans the window; the content webview sits on
            // top of it within the content bounds.
            let ui_webview =
                WebviewBuilder::new(UI_WEBVIEW_LABEL, WebviewUrl::App("index.html".into()))
                    .auto_resize()
                    .enable_clipboard_access();

            let ui_webview = window.add_child(
                ui_webview,
                LogicalPosition::new(0.0, 0.0),
                LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT),
            )?;
            let _ = ui_webview.show();

            let bounds = app.state::<ContentLayout>().get_bounds();
            let content_url: url::Url = homepage.parse().map_err(|e| {
                lumen_core::CoreError::Setup(format!("homepage is not a loadable URL: {e}"))
            })?;

            let content_webview =
                WebviewBuilder::new(CONTENT_WEBVIEW_LABEL, WebviewUrl::External(content_url))
                    .enable_clipboard_access();

            let content_webview = window.add_child(
                content_webview,
                LogicalPosition::new(bounds.x, bounds.y),
                LogicalSize::new(bounds.width, bounds.height),
            )?;
            let _ = content_webview.show();

            // Bind the content surface so navigations have somewhere to go.
            let surface = Arc::new(WebviewSurface::new(app.handle().clone()));
            app.state::<AppState>().with_browser(|browser| {
                browser.bind_surface(surface);
                Ok(())
            })?;

            tracing::info!("Lumen started");

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Navigation commands
            commands::navigation::get_startup_info,
            commands::navigation::navigate,
            // Webview commands
            commands::webview::set_content_bounds,
        ])
        .run(tauri::generate_context!())
        .expect("error while running Lumen browser");
}
