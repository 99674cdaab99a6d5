//! Navigation and address bar commands

use serde::{Deserialize, Serialize};
use tauri::State;

use super::CommandResult;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct StartupInfo {
    pub homepage: String,
    pub window_title: String,
}

#[tauri::command]
pub fn get_startup_info(state: State<AppState>) -> CommandResult<StartupInfo> {
    match state.with_browser(|browser| {
        Ok(StartupInfo {
            homepage: browser.homepage().to_string(),
            window_title: browser.config().window_title.clone(),
        })
    }) {
        Ok(info) => CommandResult::ok(info),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

/// Normalize address input and forward it to the content surface.
///
/// Returns the resolved URL so the frontend can reflect it in the field.
#[tauri::command]
pub fn navigate(state: State<AppState>, input: String) -> CommandResult<String> {
    let resolved = lumen_core::normalize(&input);

    match state.with_browser(|browser| {
        browser.navigate(&input);
        Ok(())
    }) {
        Ok(()) => CommandResult::ok(resolved),
        Err(e) => CommandResult::err(e.to_string()),
    }
}
