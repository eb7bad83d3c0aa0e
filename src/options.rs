//! Rendering options passed through to mermaid-cli.
//!
//! Every field is optional. An unset field means mmdc applies its own
//! default; values are never validated here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Built-in mermaid themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Default,
    Forest,
    Dark,
    Neutral,
}

impl Theme {
    pub const ALL: [Theme; 4] = [Theme::Default, Theme::Forest, Theme::Dark, Theme::Neutral];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Default => "default",
            Theme::Forest => "forest",
            Theme::Dark => "dark",
            Theme::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Unknown theme: {}", s))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderOptions {
    #[serde(default)]
    pub theme: Option<Theme>,
    /// Any CSS color, e.g. `transparent` or `#1e1e2e`
    #[serde(default)]
    pub background_color: Option<String>,
    #[serde(default)]
    pub width: Option<NonZeroU32>,
    #[serde(default)]
    pub height: Option<NonZeroU32>,
    #[serde(default)]
    pub scale: Option<NonZeroU32>,
    /// Mermaid JSON config, same schema as `mermaid.initialize()`
    #[serde(default)]
    pub config_file: Option<PathBuf>,
    #[serde(default)]
    pub css_file: Option<PathBuf>,
    /// Scale PDF output to fit the chart
    #[serde(default)]
    pub pdf_fit: bool,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn width(mut self, width: NonZeroU32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: NonZeroU32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn scale(mut self, scale: NonZeroU32) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn config_file(mut self, path: impl AsRef<Path>) -> Self {
        self.config_file = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn css_file(mut self, path: impl AsRef<Path>) -> Self {
        self.css_file = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn pdf_fit(mut self, fit: bool) -> Self {
        self.pdf_fit = fit;
        self
    }
}

/// Output formats mmdc can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Svg,
    Png,
    Pdf,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Png => "png",
            OutputFormat::Pdf => "pdf",
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, OutputFormat::Svg)
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Svg
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "svg" => Ok(OutputFormat::Svg),
            "png" => Ok(OutputFormat::Png),
            "pdf" => Ok(OutputFormat::Pdf),
            other => Err(format!("Unsupported output format: {}", other)),
        }
    }
}

/// In-memory render result: text for SVG, raw bytes otherwise
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutput {
    Text(String),
    Bytes(Vec<u8>),
}

impl RenderOutput {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            RenderOutput::Text(s) => s.as_bytes(),
            RenderOutput::Bytes(b) => b,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            RenderOutput::Text(s) => Some(s),
            RenderOutput::Bytes(_) => None,
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            RenderOutput::Text(s) => Some(s),
            RenderOutput::Bytes(_) => None,
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            RenderOutput::Text(s) => s.into_bytes(),
            RenderOutput::Bytes(b) => b,
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
