//! Client-side search assets.
//!
//! Two steps bracket the recipe build:
//!
//! 1. [`run_asset_build`] runs the external build command (by default
//!    `npm run build`) before any output is written. Its success is a
//!    precondition of the whole build: a spawn failure or non-zero exit aborts
//!    the run with nothing written.
//! 2. [`copy_static_assets`] copies `styles.css` and `search.js` from the
//!    static directory into the site root once all pages exist.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;

/// Files copied verbatim from the static directory into the site root.
pub const STATIC_FILES: &[&str] = &["styles.css", "search.js"];

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("Asset build command is empty")]
    EmptyCommand,
    #[error("Failed to run asset build `{command}`: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },
    #[error("Asset build `{command}` failed with {status}")]
    Failed {
        command: String,
        status: std::process::ExitStatus,
    },
    #[error("Failed to copy static asset {path}: {source}")]
    Copy {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Run the external asset build, blocking until it exits.
///
/// `command` is a program followed by its arguments. The child inherits
/// stdout/stderr so its own diagnostics reach the terminal.
pub fn run_asset_build(command: &[String]) -> Result<(), AssetError> {
    let (program, args) = command.split_first().ok_or(AssetError::EmptyCommand)?;
    let display = command.join(" ");
    log::info!("running asset build: {display}");

    let status = Command::new(program)
        .args(args)
        .status()
        .map_err(|source| AssetError::Spawn {
            command: display.clone(),
            source,
        })?;

    if !status.success() {
        return Err(AssetError::Failed {
            command: display,
            status,
        });
    }
    Ok(())
}

/// Copy the shared stylesheet and search script into `output_dir`.
pub fn copy_static_assets(static_dir: &Path, output_dir: &Path) -> Result<(), AssetError> {
    for name in STATIC_FILES {
        let src = static_dir.join(name);
        fs::copy(&src, output_dir.join(name))
            .map_err(|source| AssetError::Copy { path: src, source })?;
        log::debug!("copied {name}");
    }
    Ok(())
}
