//! NVIDIA kernel swap
//!
//! Runs during image assembly. When `NVIDIA_TYPE` is set, the stock kernel
//! packages are erased and the staged replacement kernel is installed in
//! their place. Any failing step aborts the swap.

use std::path::{Path, PathBuf};

use crate::config::{KernelSwapConfig, RPM, RPM_OSTREE};
use crate::exec::{CommandRunner, CommandSpec, ExecError};

/// Result of a kernel swap request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwapOutcome {
    /// Not an NVIDIA build; nothing was touched
    Skipped,
    /// Stock packages removed, staged packages installed
    Swapped {
        removed: Vec<String>,
        installed: Vec<PathBuf>,
    },
}

/// Check the NVIDIA build flag; unset and empty both mean "no"
pub fn nvidia_flag_set(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// Expand the staged package patterns inside `dir`
///
/// Matches are returned pattern by pattern, each group sorted by name.
/// A pattern matching nothing is an error: installing a kernel without its
/// core or modules would leave the image unbootable.
pub fn resolve_staged_packages(
    dir: &Path,
    patterns: &[String],
) -> Result<Vec<PathBuf>, KernelSwapError> {
    let base = glob::Pattern::escape(&dir.to_string_lossy());
    let mut files = Vec::new();

    for pattern in patterns {
        let full = format!("{}/{}", base.trim_end_matches('/'), pattern);
        let entries = glob::glob(&full).map_err(|e| KernelSwapError::Pattern {
            pattern: full.clone(),
            reason: e.to_string(),
        })?;

        let mut matched = entries.collect::<Result<Vec<_>, _>>()?;
        if matched.is_empty() {
            return Err(KernelSwapError::NoStagedPackages {
                dir: dir.to_path_buf(),
                pattern: pattern.clone(),
            });
        }
        matched.sort();

        log::debug!("{}: {} staged package(s)", pattern, matched.len());
        files.extend(matched);
    }

    Ok(files)
}

/// Command erasing the stock kernel packages, skipping dependency checks
pub fn removal_command(packages: &[String]) -> CommandSpec {
    CommandSpec::new(RPM)
        .args(["--erase", "--nodeps"])
        .args(packages.iter().cloned())
}

/// Command layering the staged packages into the image
pub fn install_command(files: &[PathBuf]) -> CommandSpec {
    CommandSpec::new(RPM_OSTREE)
        .arg("install")
        .args(files.iter().map(|f| f.to_string_lossy().into_owned()))
}

/// Swap the stock kernel for the staged one if this is an NVIDIA build
///
/// `nvidia_type` is the value of `NVIDIA_TYPE`, if set. The staged files
/// are resolved before any package is touched; removal always runs before
/// installation, and the first failure stops everything.
pub async fn swap_kernel<R: CommandRunner>(
    runner: &R,
    config: &KernelSwapConfig,
    nvidia_type: Option<&str>,
) -> Result<SwapOutcome, KernelSwapError> {
    if !nvidia_flag_set(nvidia_type) {
        log::info!("NVIDIA_TYPE not set, keeping stock kernel");
        return Ok(SwapOutcome::Skipped);
    }

    log::info!(
        "NVIDIA build ({}), swapping kernel from {}",
        nvidia_type.unwrap_or_default(),
        config.staged_dir.display()
    );

    let files = resolve_staged_packages(&config.staged_dir, &config.patterns)?;

    runner.run(&removal_command(&config.packages)).await?;
    log::info!("Removed stock kernel packages: {}", config.packages.join(" "));

    runner.run(&install_command(&files)).await?;
    log::info!("Installed {} staged kernel package(s)", files.len());

    Ok(SwapOutcome::Swapped {
        removed: config.packages.clone(),
        installed: files,
    })
}

#[derive(Debug, thiserror::Error)]
pub enum KernelSwapError {
    #[error("Invalid package pattern {pattern}: {reason}")]
    Pattern { pattern: String, reason: String },

    #[error("No staged package matching {pattern} in {dir}")]
    NoStagedPackages { dir: PathBuf, pattern: String },

    #[error("Failed to read staged packages: {0}")]
    Glob(#[from] glob::GlobError),

    #[error(transparent)]
    Exec(#[from] ExecError),
}
