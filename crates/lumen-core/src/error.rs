//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Setup error: {0}")]
    Setup(String),

    #[error("Browser not initialized")]
    NotInitialized,
}
