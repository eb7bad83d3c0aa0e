//! Error taxonomy
//!
//! `NotInstalled` is a specialization of a render failure: both answer
//! `true` to [`Error::is_render_error`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("mermaid-cli is not installed. Run:\n\n    mermaido install\n")]
    NotInstalled,

    #[error("{0}")]
    RenderFailed(String),

    #[error("Install failed: {0}")]
    InstallFailed(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// True for every failure of the render path, including a missing engine.
    pub fn is_render_error(&self) -> bool {
        matches!(self, Error::NotInstalled | Error::RenderFailed(_))
    }

    pub fn is_not_installed(&self) -> bool {
        matches!(self, Error::NotInstalled)
    }
}
