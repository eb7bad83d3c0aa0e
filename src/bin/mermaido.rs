//! Mermaido CLI
//!
//! `mermaido install` provisions mermaid-cli. Any other arguments are
//! forwarded verbatim to mmdc and its exit code becomes ours.

use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use mermaido::Mermaido;

#[derive(Parser)]
#[command(name = "mermaido")]
#[command(about = "Render Mermaid diagrams via a managed mermaid-cli install")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download mermaid-cli and Chromium into the user cache
    Install,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let engine = Mermaido::default();

    // Only `install` goes through clap; everything else, `--` included,
    // belongs to mmdc untouched.
    let args: Vec<OsString> = std::env::args_os().skip(1).collect();
    if args.first().is_some_and(|a| a == "install") {
        return match Cli::parse().command {
            Commands::Install => install(&engine),
        };
    }

    match engine.passthrough(&args) {
        Ok(status) => match status.code() {
            Some(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
            // Killed by a signal
            None => ExitCode::FAILURE,
        },
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn install(engine: &Mermaido) -> ExitCode {
    println!("Installing mermaid-cli and Chromium (this may take a minute)...");

    if let Err(e) = engine.install() {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    match engine.installed_version() {
        Ok(Some(version)) => println!("Installed mermaid-cli {}", version),
        Ok(None) => println!("Installed mermaid-cli"),
        Err(e) => tracing::warn!("could not read installed version: {}", e),
    }
    ExitCode::SUCCESS
}
