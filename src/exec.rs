//! Scoped invocation of external speech commands
//!
//! Wraps process spawning and exit-status checking into a tagged
//! outcome, so callers with a fallback can pattern match on
//! `NotFound` instead of inspecting raw I/O errors.

use std::io::{self, Write};
use std::process::{Command, ExitStatus, Stdio};

use crate::{AnnounceError, Result};
use log::debug;

/// Outcome of running an external command to completion
#[derive(Debug)]
pub enum Invocation {
    /// The command ran and exited with status zero
    Success,
    /// The command ran but exited with a non-zero status
    NonZeroExit(ExitStatus),
    /// The command binary does not exist on this system
    NotFound,
}

impl Invocation {
    /// Convert an outcome into a `Result` for callers with no
    /// fallback left to try
    pub fn into_result(self, command: &str) -> Result<()> {
        match self {
            Invocation::Success => Ok(()),
            Invocation::NonZeroExit(status) => Err(AnnounceError::CommandFailed {
                command: command.to_string(),
                status,
            }),
            Invocation::NotFound => Err(AnnounceError::CommandNotFound(command.to_string())),
        }
    }
}

/// Run a prepared command to completion and report the outcome
///
/// The child's stdio is detached from ours; the announcer's stdout
/// carries only its own diagnostics.
pub fn run(cmd: &mut Command) -> Result<Invocation> {
    debug!("Running {:?}", cmd);

    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::null());
    cmd.stderr(Stdio::null());

    match cmd.status() {
        Ok(status) if status.success() => Ok(Invocation::Success),
        Ok(status) => Ok(Invocation::NonZeroExit(status)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Invocation::NotFound),
        Err(e) => Err(e.into()),
    }
}

/// Run a prepared command with `input` piped into its stdin
///
/// Used for speech readers that take their text on standard input
/// rather than as an argument.
pub fn run_with_input(cmd: &mut Command, input: &str) -> Result<Invocation> {
    debug!("Running {:?} with piped input", cmd);

    cmd.stdin(Stdio::piped());
    cmd.stdout(Stdio::null());
    cmd.stderr(Stdio::null());

    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Invocation::NotFound),
        Err(e) => return Err(e.into()),
    };

    if let Some(mut stdin) = child.stdin.take() {
        // A reader may exit before draining its input; its exit
        // status is the verdict, not the broken pipe.
        match stdin.write_all(input.as_bytes()).and_then(|_| stdin.write_all(b"\n")) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {}
            Err(e) => return Err(e.into()),
        }
    }

    let status = child.wait()?;
    if status.success() {
        Ok(Invocation::Success)
    } else {
        Ok(Invocation::NonZeroExit(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(unix)]
    fn test_run_success() {
        let outcome = run(&mut Command::new("true")).unwrap();
        assert!(matches!(outcome, Invocation::Success));
    }

    #[test]
    #[cfg(unix)]
    fn test_run_non_zero_exit() {
        let outcome = run(&mut Command::new("false")).unwrap();
        match outcome {
            Invocation::NonZeroExit(status) => assert_eq!(status.code(), Some(1)),
            other => panic!("expected NonZeroExit, got {:?}", other),
        }
    }

    #[test]
    fn test_run_not_found() {
        let outcome = run(&mut Command::new("/nonexistent/speech-command")).unwrap();
        assert!(matches!(outcome, Invocation::NotFound));
    }

    #[test]
    #[cfg(unix)]
    fn test_run_with_input_delivers_text() {
        // grep -q exits 0 only if its stdin contains the pattern
        let mut cmd = Command::new("grep");
        cmd.arg("-q").arg("milestone");
        let outcome = run_with_input(&mut cmd, "a milestone was reached").unwrap();
        assert!(matches!(outcome, Invocation::Success));
    }

    #[test]
    #[cfg(unix)]
    fn test_run_with_input_missing_text() {
        let mut cmd = Command::new("grep");
        cmd.arg("-q").arg("milestone");
        let outcome = run_with_input(&mut cmd, "nothing to see").unwrap();
        assert!(matches!(outcome, Invocation::NonZeroExit(_)));
    }

    #[test]
    fn test_run_with_input_not_found() {
        let mut cmd = Command::new("/nonexistent/speech-command");
        let outcome = run_with_input(&mut cmd, "hello").unwrap();
        assert!(matches!(outcome, Invocation::NotFound));
    }

    #[test]
    #[cfg(unix)]
    fn test_into_result_errors() {
        let outcome = run(&mut Command::new("false")).unwrap();
        let err = outcome.into_result("false").unwrap_err();
        assert!(matches!(err, AnnounceError::CommandFailed { .. }));

        let err = Invocation::NotFound.into_result("espeak").unwrap_err();
        assert!(matches!(err, AnnounceError::CommandNotFound(_)));
    }
}
