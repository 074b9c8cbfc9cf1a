//! Host-side boundary: launching the external tool, waiting for the user,
//! and checking privileges.
//!
//! Everything that touches the outside world goes through the traits here so
//! the orchestration code can be driven by scripted implementations in tests.

use std::io::{self, BufRead};
use std::process::Command;

use log::debug;

/// Default name of the external control program.
pub const DEFAULT_PROGRAM: &str = "openrgb";

/// Captured result of one external invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when terminated by a signal.
    pub code: Option<i32>,
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
}

impl CommandOutput {
    /// Whether the process exited with code zero.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs an external program to completion and captures its output.
pub trait CommandRunner {
    /// Run `program` with `args`, blocking until it exits.
    ///
    /// An `Err` means the program could not be launched at all.
    fn run(&mut self, program: &str, args: &[String]) -> io::Result<CommandOutput>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &mut R {
    fn run(&mut self, program: &str, args: &[String]) -> io::Result<CommandOutput> {
        (**self).run(program, args)
    }
}

/// Runner backed by [`std::process::Command`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, program: &str, args: &[String]) -> io::Result<CommandOutput> {
        debug!("Running: {program} {}", args.join(" "));
        let output = Command::new(program).args(args).output()?;
        Ok(CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Blocks until the user says to continue.
pub trait Confirmation {
    /// Wait for confirmation. Returns an error if input is no longer available.
    fn wait_for_confirmation(&mut self) -> io::Result<()>;
}

impl<C: Confirmation + ?Sized> Confirmation for &mut C {
    fn wait_for_confirmation(&mut self) -> io::Result<()> {
        (**self).wait_for_confirmation()
    }
}

/// Confirmation by reading one line from a reader (stdin by default).
#[derive(Debug)]
pub struct LineConfirmation<R> {
    reader: R,
}

/// Line confirmation on the process's standard input.
pub type StdinConfirmation = LineConfirmation<io::StdinLock<'static>>;

impl StdinConfirmation {
    /// Confirm by pressing Enter on stdin.
    pub fn stdin() -> Self {
        Self {
            reader: io::stdin().lock(),
        }
    }
}

impl<R: BufRead> LineConfirmation<R> {
    /// Confirm by reading lines from `reader`.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Confirmation for LineConfirmation<R> {
    fn wait_for_confirmation(&mut self) -> io::Result<()> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for confirmation",
            ));
        }
        Ok(())
    }
}

/// Whether the process runs with an effective user id of root.
#[cfg(unix)]
pub fn is_elevated() -> bool {
    // SAFETY: geteuid has no preconditions and cannot fail.
    #[allow(unsafe_code)]
    let euid = unsafe { libc::geteuid() };
    euid == 0
}

/// Whether the process runs elevated. Always false off Unix.
#[cfg(not(unix))]
pub fn is_elevated() -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_output_success_only_on_zero() {
        let ok = CommandOutput {
            code: Some(0),
            ..Default::default()
        };
        let failed = CommandOutput {
            code: Some(1),
            ..Default::default()
        };
        let signalled = CommandOutput::default();
        assert!(ok.success());
        assert!(!failed.success());
        assert!(!signalled.success());
    }

    #[test]
    fn test_line_confirmation_consumes_one_line_each() {
        let mut confirm = LineConfirmation::new(&b"\nyes\n"[..]);
        assert!(confirm.wait_for_confirmation().is_ok());
        assert!(confirm.wait_for_confirmation().is_ok());
        let err = confirm.wait_for_confirmation().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_system_runner_reports_missing_program() {
        let mut runner = SystemRunner;
        let result = runner.run("rgbsync-definitely-missing-binary", &[]);
        assert!(result.is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_captures_exit_code_and_stderr() {
        let mut runner = SystemRunner;
        let args = vec!["-c".to_string(), "echo oops >&2; exit 3".to_string()];
        let output = runner.run("sh", &args).unwrap();
        assert_eq!(output.code, Some(3));
        assert_eq!(output.stderr.trim(), "oops");
        assert!(!output.success());
    }
}
