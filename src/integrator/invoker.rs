//! # Integrator invocation
//!
//! [`IntegratorExe`] resolves the `photodynam` executable once, up front, so
//! an unreachable integrator fails before any document is written. Each
//! [`run`](IntegratorExe::run) writes the input and report documents into a
//! fresh private temporary directory, so repeated or concurrent invocations
//! cannot interfere through shared filenames, then executes the integrator
//! synchronously and captures its stdout as the output document.
//!
//! Execution is blocking with no timeout and no retry: a hang in the
//! external process hangs the caller.

use std::fs;
use std::process::Command;

use camino::{Utf8Path, Utf8PathBuf};
use log::info;

use crate::photodyn_errors::PhotodynError;

/// Default executable name looked up on `PATH`.
pub const DEFAULT_EXECUTABLE: &str = "photodynam";

/// A resolved handle on the external integrator executable.
#[derive(Debug, Clone)]
pub struct IntegratorExe {
    path: Utf8PathBuf,
}

impl IntegratorExe {
    /// Resolve an executable by explicit path or bare name.
    ///
    /// A value containing a path separator is checked for existence as
    /// given; a bare name is searched on `PATH`. Resolution failure is
    /// [`PhotodynError::IntegratorNotFound`].
    ///
    /// Arguments
    /// -----------------
    /// * `exe`: an explicit path (e.g. `/opt/photodynam/photodynam`) or a
    ///   bare name (e.g. `photodynam`).
    pub fn resolve(exe: &str) -> Result<Self, PhotodynError> {
        if exe.contains(std::path::MAIN_SEPARATOR) {
            let path = Utf8PathBuf::from(exe);
            if path.is_file() {
                return Ok(IntegratorExe { path });
            }
            return Err(PhotodynError::IntegratorNotFound(exe.to_string()));
        }

        let search_path =
            std::env::var_os("PATH").ok_or_else(|| PhotodynError::IntegratorNotFound(exe.to_string()))?;
        for dir in std::env::split_paths(&search_path) {
            let candidate = dir.join(exe);
            if candidate.is_file() {
                let path = Utf8PathBuf::from_path_buf(candidate)
                    .map_err(|p| PhotodynError::IntegratorNotFound(p.display().to_string()))?;
                return Ok(IntegratorExe { path });
            }
        }
        Err(PhotodynError::IntegratorNotFound(exe.to_string()))
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Run the integrator against the two rendered documents.
    ///
    /// Arguments
    /// -----------------
    /// * `input_doc`: the positional system/controls document.
    /// * `report_doc`: the channel/evaluation-time document.
    ///
    /// Return
    /// ----------
    /// * The integrator's stdout (the raw output matrix) as text, or a
    ///   fatal error if the process cannot be spawned, exits non-zero, or
    ///   emits non-UTF-8 output.
    pub fn run(&self, input_doc: &str, report_doc: &str) -> Result<String, PhotodynError> {
        let workdir = tempfile::tempdir()?;
        let input_path = workdir.path().join("pd_input");
        let report_path = workdir.path().join("pd_report");
        fs::write(&input_path, input_doc)?;
        fs::write(&report_path, report_doc)?;

        info!(
            "running photodynam: {} {} {}",
            self.path,
            input_path.display(),
            report_path.display()
        );

        let output = Command::new(self.path.as_std_path())
            .arg(&input_path)
            .arg(&report_path)
            .output()?;

        if !output.status.success() {
            return Err(PhotodynError::IntegratorFailed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        String::from_utf8(output.stdout).map_err(|_| PhotodynError::NonUtf8Output)
    }
}
