//! Mermaido - Mermaid diagrams to PNG, SVG and PDF
//!
//! Rendering is delegated to mermaid-cli (`mmdc`) and its headless Chromium,
//! provisioned once into a per-user cache by [`install`]. This crate only
//! orchestrates: it builds the mmdc command line, manages scratch files and
//! maps engine failures onto [`Error`].
//!
//! ```no_run
//! use mermaido::{OutputFormat, RenderOptions};
//!
//! mermaido::render("graph TD; A-->B;", "out.png", &RenderOptions::default())?;
//! let opts = RenderOptions::default();
//! let svg = mermaido::render_to_string("graph TD; A-->B;", OutputFormat::Svg, &opts)?;
//! # Ok::<(), mermaido::Error>(())
//! ```

pub mod command;
pub mod engine;
pub mod error;
pub mod install;
pub mod options;
pub mod render;
pub mod settings;

use std::path::{Path, PathBuf};

pub use engine::Mermaido;
pub use error::{Error, Result};
pub use install::SandboxConfig;
pub use options::{OutputFormat, RenderOptions, RenderOutput, Theme};
pub use settings::{CacheLayout, Settings, DEFAULT_MMDC_VERSION};

/// Render `diagram` to the file at `output` using the process-wide settings.
pub fn render(
    diagram: &str,
    output: impl AsRef<Path>,
    options: &RenderOptions,
) -> Result<PathBuf> {
    Mermaido::default().render(diagram, output, options)
}

/// Render `diagram` into memory using the process-wide settings.
pub fn render_to_string(
    diagram: &str,
    format: OutputFormat,
    options: &RenderOptions,
) -> Result<RenderOutput> {
    Mermaido::default().render_to_string(diagram, format, options)
}

pub fn is_installed() -> bool {
    Mermaido::default().is_installed()
}

/// Download mermaid-cli and Chromium into the user cache.
pub fn install() -> Result<()> {
    Mermaido::default().install()
}
