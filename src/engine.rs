//! Engine handle - single entry point for install, render and passthrough
//!
//! `Mermaido` carries its `Settings` explicitly so tests can point it at a
//! throwaway cache root instead of the per-user one. `Mermaido::default()`
//! uses the process-wide settings.

use std::ffi::OsStr;
use std::process::{Command, ExitStatus};

use tracing::debug;

use crate::command::build_passthrough_command;
use crate::error::{Error, Result};
use crate::settings::{CacheLayout, Settings};

#[derive(Debug, Clone)]
pub struct Mermaido {
    settings: Settings,
}

impl Mermaido {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn layout(&self) -> CacheLayout {
        self.settings.layout()
    }

    /// True iff the mmdc binary exists. Does not check that it runs or
    /// matches the configured version.
    pub fn is_installed(&self) -> bool {
        self.layout().mmdc().exists()
    }

    pub(crate) fn require_installed(&self) -> Result<()> {
        if self.is_installed() {
            Ok(())
        } else {
            Err(Error::NotInstalled)
        }
    }

    /// Run mmdc with `args` forwarded verbatim, inheriting stdio.
    pub fn passthrough<I, S>(&self, args: I) -> Result<ExitStatus>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.require_installed()?;

        let cmd = build_passthrough_command(&self.layout(), args);
        debug!(command = ?cmd, "forwarding to mmdc");

        let status = Command::new(&cmd[0]).args(&cmd[1..]).status()?;
        Ok(status)
    }
}

impl Default for Mermaido {
    /// Handle over the process-wide [`Settings::global`].
    fn default() -> Self {
        Self::new(Settings::global().clone())
    }
}
