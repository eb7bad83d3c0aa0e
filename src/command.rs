//! Command Builder
//!
//! Maps `RenderOptions` onto mmdc's flag vocabulary. Optional flags are
//! appended in a fixed order: theme, background, width, height, scale,
//! config file, css file, pdf fit.

use std::ffi::{OsStr, OsString};
use std::path::Path;

use crate::options::RenderOptions;
use crate::settings::CacheLayout;

/// Full mmdc invocation for one render, executable first.
pub fn build_render_command(
    layout: &CacheLayout,
    input: &Path,
    output: &Path,
    options: &RenderOptions,
) -> Vec<OsString> {
    let mut cmd: Vec<OsString> = vec![
        layout.mmdc().into(),
        "-i".into(),
        input.into(),
        "-o".into(),
        output.into(),
        "-p".into(),
        layout.puppeteer_config().into(),
    ];
    cmd.extend(option_flags(options));
    cmd
}

/// Passthrough invocation: sandbox config first, then the caller's args untouched.
pub fn build_passthrough_command<I, S>(layout: &CacheLayout, args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut cmd: Vec<OsString> = vec![
        layout.mmdc().into(),
        "-p".into(),
        layout.puppeteer_config().into(),
    ];
    cmd.extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
    cmd
}

fn option_flags(options: &RenderOptions) -> Vec<OsString> {
    let mut flags: Vec<OsString> = vec![];

    let mut pair = |flag: &str, value: OsString| {
        flags.push(flag.into());
        flags.push(value);
    };

    if let Some(theme) = options.theme {
        pair("-t", theme.as_str().into());
    }
    if let Some(bg) = &options.background_color {
        pair("-b", bg.into());
    }
    if let Some(width) = options.width {
        pair("-w", width.to_string().into());
    }
    if let Some(height) = options.height {
        pair("-H", height.to_string().into());
    }
    if let Some(scale) = options.scale {
        pair("-s", scale.to_string().into());
    }
    if let Some(config) = &options.config_file {
        pair("-c", config.into());
    }
    if let Some(css) = &options.css_file {
        pair("-C", css.into());
    }
    if options.pdf_fit {
        flags.push("-f".into());
    }

    flags
}
