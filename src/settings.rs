//! Settings and Cache Layout
//!
//! Paths are derived on demand from the cache root; nothing is created on
//! disk until `install` runs. Environment overrides are read once per
//! process, the first time [`Settings::global`] is reached.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

pub const DEFAULT_MMDC_VERSION: &str = "11.4.0";
pub const PACKAGE_NAME: &str = "mermaido";
pub const MMDC_PACKAGE: &str = "@mermaid-js/mermaid-cli";

pub const ENV_MMDC_VERSION: &str = "MERMAIDO_MMDC_VERSION";
pub const ENV_CACHE_DIR: &str = "MERMAIDO_CACHE_DIR";
pub const ENV_NPM: &str = "MERMAIDO_NPM";

const PUPPETEER_CONFIG_FILE: &str = "puppeteer-config.json";

#[cfg(windows)]
const MMDC_BIN: &str = "mmdc.cmd";
#[cfg(not(windows))]
const MMDC_BIN: &str = "mmdc";

#[cfg(windows)]
const DEFAULT_NPM: &str = "npm.cmd";
#[cfg(not(windows))]
const DEFAULT_NPM: &str = "npm";

/// Fixed set of paths under the cache root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheLayout {
    pub root: PathBuf,
}

impl CacheLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `<root>/node_modules/.bin/mmdc`
    pub fn mmdc(&self) -> PathBuf {
        self.root.join("node_modules").join(".bin").join(MMDC_BIN)
    }

    /// Headless-browser launch arguments consumed via `mmdc -p`
    pub fn puppeteer_config(&self) -> PathBuf {
        self.root.join(PUPPETEER_CONFIG_FILE)
    }

    /// `package.json` of the installed mermaid-cli package
    pub fn package_manifest(&self) -> PathBuf {
        let mut path = self.root.join("node_modules");
        for part in MMDC_PACKAGE.split('/') {
            path.push(part);
        }
        path.join("package.json")
    }
}

/// Per-user cache directory for this tool
pub fn default_cache_root() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(env::temp_dir)
        .join(PACKAGE_NAME)
}

static GLOBAL: OnceLock<Settings> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub cache_root: PathBuf,
    pub mmdc_version: String,
    /// Package manager used by `install`
    pub npm: PathBuf,
    /// Where scratch input/output files go; system temp dir when unset
    pub scratch_dir: Option<PathBuf>,
}

impl Settings {
    /// Read overrides from `MERMAIDO_*` environment variables.
    pub fn from_env() -> Self {
        let cache_root = non_empty_var(ENV_CACHE_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(default_cache_root);
        let mmdc_version =
            non_empty_var(ENV_MMDC_VERSION).unwrap_or_else(|| DEFAULT_MMDC_VERSION.to_string());
        let npm = non_empty_var(ENV_NPM)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_NPM));

        Self {
            cache_root,
            mmdc_version,
            npm,
            scratch_dir: None,
        }
    }

    /// Process-wide settings, captured from the environment on first use.
    ///
    /// Later changes to `MERMAIDO_*` variables are not picked up. Use
    /// [`Settings::from_env`] or the `with_*` overrides for a fresh value.
    pub fn global() -> &'static Settings {
        GLOBAL.get_or_init(Settings::from_env)
    }

    pub fn with_cache_root(mut self, root: impl AsRef<Path>) -> Self {
        self.cache_root = root.as_ref().to_path_buf();
        self
    }

    pub fn with_mmdc_version(mut self, version: impl Into<String>) -> Self {
        self.mmdc_version = version.into();
        self
    }

    pub fn with_npm(mut self, npm: impl AsRef<Path>) -> Self {
        self.npm = npm.as_ref().to_path_buf();
        self
    }

    pub fn with_scratch_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.scratch_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn scratch_dir(&self) -> PathBuf {
        self.scratch_dir.clone().unwrap_or_else(env::temp_dir)
    }

    pub fn layout(&self) -> CacheLayout {
        CacheLayout::new(&self.cache_root)
    }

    /// npm package spec, e.g. `@mermaid-js/mermaid-cli@11.4.0`
    pub fn package_spec(&self) -> String {
        format!("{}@{}", MMDC_PACKAGE, self.mmdc_version)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::global().clone()
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
