use std::io;
use std::path::Path;
use std::process::{Command, Output};

use crate::constants::defaults;

use super::base_path::working_dir_for;

/// Result of a best-effort step that runs after the file is written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Success,
    SkippedUnavailable,
    FailedFatal(String),
}

impl StepOutcome {
    pub fn is_fatal(&self) -> bool {
        matches!(self, StepOutcome::FailedFatal(_))
    }
}

fn run_command(cmd: &str, args: &[&str], dir: &Path) -> io::Result<Output> {
    log::debug!("Running {cmd} {} in {}", args.join(" "), dir.display());
    Command::new(cmd).args(args).current_dir(dir).output()
}

pub fn run_formatter(file: &Path) -> StepOutcome {
    run_formatter_with(defaults::FORMATTER, file)
}

pub fn run_formatter_with(formatter: &str, file: &Path) -> StepOutcome {
    let file_arg = file.to_string_lossy();
    let output = run_command(
        formatter,
        &["--edition", defaults::FORMATTER_EDITION, &*file_arg],
        working_dir_for(file),
    );
    match output {
        Ok(output) if output.status.success() => {
            log::info!("Formatted {} with {formatter}", file.display());
            StepOutcome::Success
        }
        Ok(output) => {
            log::warn!(
                "{formatter} exited with {}; the file was left unformatted: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
            StepOutcome::SkippedUnavailable
        }
        Err(e) => {
            log::warn!(
                "Could not run {formatter} on new file ({e}), please run it to properly format it."
            );
            StepOutcome::SkippedUnavailable
        }
    }
}

pub fn check_repo_clean(dir: &Path) -> StepOutcome {
    check_repo_clean_with(defaults::VCS, dir)
}

pub fn check_repo_clean_with(vcs: &str, dir: &Path) -> StepOutcome {
    match run_command(vcs, &["diff", "--stat"], dir) {
        Ok(output) if output.status.success() => {
            let stat = String::from_utf8_lossy(&output.stdout);
            if stat.trim().is_empty() {
                log::info!("Repo is clean; generated constants are up to date");
                StepOutcome::Success
            } else {
                log::error!("Repo is dirty and needs to be committed!\n{}", stat.trim_end());
                StepOutcome::FailedFatal(stat.trim_end().to_owned())
            }
        }
        // A check that cannot run fails the run too
        Ok(output) => {
            let message = format!(
                "`{vcs} diff --stat` exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
            log::warn!("{message}; please run it to determine whether constants have changed.");
            StepOutcome::FailedFatal(message)
        }
        Err(e) => {
            let message = format!("could not run `{vcs} diff --stat` on repo: {e}");
            log::warn!("{message}; please run it to determine whether constants have changed.");
            StepOutcome::FailedFatal(message)
        }
    }
}
