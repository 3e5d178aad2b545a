// cpr-aio/src/process.rs
use std::path::{Path, PathBuf};
use std::process::Output as StdOutput;
use std::process::{Command, Stdio};
use std::sync::Arc;

use cpr_common::error::{CprError, Result};
use tracing::{debug, error};

/// Runs an external command to completion and captures its output.
///
/// A non-zero exit status is not an error here; callers inspect the returned
/// output themselves. Only a failure to spawn the process is reported.
pub fn run_command_sync(
    command: &Path,
    args: &[&str],
    cwd: Option<PathBuf>,
) -> Result<StdOutput> {
    debug!(
        "Running command: {} {:?} (cwd: {:?})",
        command.display(),
        args,
        cwd
    );
    let mut cmd = Command::new(command);
    cmd.args(args);
    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());
    cmd.stdin(Stdio::null());

    match cmd.output() {
        Ok(output) => {
            if !output.status.success() {
                debug!("Command failed with status: {}", output.status);
                let stdout = String::from_utf8_lossy(&output.stdout);
                let stderr = String::from_utf8_lossy(&output.stderr);
                if !stdout.trim().is_empty() {
                    debug!("Stdout:\n{}", stdout.trim());
                }
                if !stderr.trim().is_empty() {
                    debug!("Stderr:\n{}", stderr.trim());
                }
            } else {
                debug!("Command finished successfully.");
            }
            Ok(output)
        }
        Err(e) => {
            error!("Failed to execute command {}: {}", command.display(), e);
            Err(CprError::Io(Arc::new(e)))
        }
    }
}

/// Runs `command` in `cwd` and returns its stdout and stderr as lossily decoded text.
pub fn exec_and_read_stdout_and_stderr(
    command: &Path,
    args: &[&str],
    cwd: &Path,
) -> Result<(String, String)> {
    let output = run_command_sync(command, args, Some(cwd.to_path_buf()))?;
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    Ok((stdout, stderr))
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn captures_both_streams_in_working_directory() {
        let dir = tempfile::tempdir().unwrap();
        let (stdout, stderr) = exec_and_read_stdout_and_stderr(
            Path::new("/bin/sh"),
            &["-c", "pwd; echo oops >&2"],
            dir.path(),
        )
        .unwrap();

        let reported = PathBuf::from(stdout.trim());
        assert_eq!(
            reported.canonicalize().unwrap(),
            dir.path().canonicalize().unwrap()
        );
        assert_eq!(stderr.trim(), "oops");
    }

    #[test]
    fn non_zero_exit_is_not_an_error() {
        let output =
            run_command_sync(Path::new("/bin/sh"), &["-c", "exit 3"], None).unwrap();
        assert_eq!(output.status.code(), Some(3));
    }

    #[test]
    fn spawn_failure_is_io_error() {
        let err = run_command_sync(Path::new("/no/such/binary"), &[], None).unwrap_err();
        assert!(matches!(err, CprError::Io(_)));
    }
}
