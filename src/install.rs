//! Provisioning of mermaid-cli and its bundled Chromium into the cache root.
//!
//! Never called implicitly by the render path.

use serde::{Deserialize, Serialize};
use std::fs;
use std::process::Command;

use tracing::info;

use crate::engine::Mermaido;
use crate::error::{Error, Result};

/// Puppeteer launch options handed to mmdc via `-p`.
///
/// Chromium's own sandbox is unavailable in most containers and CI runners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SandboxConfig {
    pub args: Vec<String>,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            args: vec![
                "--no-sandbox".to_string(),
                "--disable-setuid-sandbox".to_string(),
            ],
        }
    }
}

#[derive(Debug, Deserialize)]
struct PackageManifest {
    version: semver::Version,
}

impl Mermaido {
    /// Download mermaid-cli and Chromium (~200 MB). Only needed once.
    ///
    /// Safe to re-run: npm reconciles an existing install to the
    /// configured version.
    pub fn install(&self) -> Result<()> {
        let layout = self.layout();
        let settings = self.settings();

        fs::create_dir_all(&layout.root)?;
        let sandbox = serde_json::to_string(&SandboxConfig::default())?;
        fs::write(layout.puppeteer_config(), sandbox)?;

        let package = settings.package_spec();
        info!(
            npm = %settings.npm.display(),
            package = %package,
            root = %layout.root.display(),
            "installing mermaid-cli"
        );

        let status = Command::new(&settings.npm)
            .arg("install")
            .arg("--prefix")
            .arg(&layout.root)
            .arg(&package)
            .current_dir(&layout.root)
            .status()
            .map_err(|e| {
                Error::InstallFailed(format!("could not run {}: {}", settings.npm.display(), e))
            })?;

        if !status.success() {
            return Err(Error::InstallFailed(format!(
                "{} install {} exited with {}",
                settings.npm.display(),
                package,
                status
            )));
        }

        info!(mmdc = %layout.mmdc().display(), "mermaid-cli installed");
        Ok(())
    }

    /// Version recorded in the installed package manifest, if any.
    pub fn installed_version(&self) -> Result<Option<semver::Version>> {
        let manifest = self.layout().package_manifest();
        if !manifest.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&manifest)?;
        let parsed: PackageManifest = serde_json::from_str(&content)?;
        Ok(Some(parsed.version))
    }
}
