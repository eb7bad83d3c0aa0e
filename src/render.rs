//! Renderer and String Renderer
//!
//! Every render spawns exactly one mmdc process and blocks until it exits.
//! Scratch files are `tempfile` paths, unique per call and removed on drop,
//! so they never outlive the call whatever the outcome.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tempfile::{Builder, TempPath};
use tracing::{debug, warn};

use crate::command::build_render_command;
use crate::engine::Mermaido;
use crate::error::{Error, Result};
use crate::options::{OutputFormat, RenderOptions, RenderOutput};

const SCRATCH_PREFIX: &str = "mermaido-";
const INPUT_SUFFIX: &str = ".mmd";

impl Mermaido {
    /// Render `diagram` to `output`. The format follows the file extension,
    /// as interpreted by mmdc.
    ///
    /// Returns `output` unchanged on success. The file itself is not checked.
    pub fn render(
        &self,
        diagram: &str,
        output: impl AsRef<Path>,
        options: &RenderOptions,
    ) -> Result<PathBuf> {
        self.require_installed()?;
        let output = output.as_ref().to_path_buf();

        let input = self.scratch_input(diagram)?;
        let cmd = build_render_command(&self.layout(), &input, &output, options);
        debug!(command = ?cmd, "running mmdc");

        let result = Command::new(&cmd[0])
            .args(&cmd[1..])
            .stdin(Stdio::null())
            .output()?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            let message = if stderr.trim().is_empty() {
                format!("mmdc exited with {}", result.status)
            } else {
                stderr.into_owned()
            };
            warn!(status = %result.status, output = %output.display(), "mmdc failed");
            return Err(Error::RenderFailed(message));
        }

        Ok(output)
    }

    /// Render into memory: `Text` for SVG, `Bytes` for PNG and PDF.
    pub fn render_to_string(
        &self,
        diagram: &str,
        format: OutputFormat,
        options: &RenderOptions,
    ) -> Result<RenderOutput> {
        let scratch = Builder::new()
            .prefix(SCRATCH_PREFIX)
            .suffix(&format!(".{}", format.extension()))
            .tempfile_in(self.settings().scratch_dir())?
            .into_temp_path();

        self.render(diagram, &scratch, options)?;

        let content = if format.is_text() {
            RenderOutput::Text(fs::read_to_string(&scratch)?)
        } else {
            RenderOutput::Bytes(fs::read(&scratch)?)
        };
        Ok(content)
    }

    fn scratch_input(&self, diagram: &str) -> Result<TempPath> {
        let mut file = Builder::new()
            .prefix(SCRATCH_PREFIX)
            .suffix(INPUT_SUFFIX)
            .tempfile_in(self.settings().scratch_dir())?;
        file.write_all(diagram.as_bytes())?;
        file.flush()?;

        let path = file.into_temp_path();
        debug!(input = %path.display(), "wrote scratch input");
        Ok(path)
    }
}
