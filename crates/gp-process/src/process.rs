//! Child process supervision.
//!
//! `Command::spawn` on Unix forks, then blocks on a close-on-exec pipe: a
//! successful exec closes the pipe, a failed exec writes `errno` through it.
//! So `spawn` returning `Ok` means the program is running, and a missing
//! executable surfaces as a creation error with the OS code (`ENOENT`),
//! without polling or sleeping.

use std::io::{self, Write};
use std::process::{Child, ChildStdin, Command, Stdio};

use tracing::{debug, warn};

use crate::CommandSink;
use crate::config::ProcessConfig;
use crate::error::{ProcessError, ProcessResult};

/// A running plotting program whose stdin we own.
///
/// Stdout and stderr go to the null device. Dropping closes stdin (end of
/// input for the program) and waits for the child to exit.
#[derive(Debug)]
pub struct ChildProcess {
    program: String,
    child: Child,
    stdin: Option<ChildStdin>,
}

impl ChildProcess {
    /// Launch the program and wait until it has either started executing or
    /// failed to.
    pub fn spawn(config: &ProcessConfig) -> ProcessResult<Self> {
        let mut command = Command::new(&config.program);
        command
            .args(&config.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        #[cfg(target_os = "linux")]
        terminate_with_parent(&mut command);

        let creation_error = |source| ProcessError::Creation {
            program: config.program.clone(),
            source,
        };

        let mut child = command.spawn().map_err(creation_error)?;
        let Some(stdin) = child.stdin.take() else {
            return Err(creation_error(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "child stdin was not captured",
            )));
        };

        debug!(program = %config.program, pid = child.id(), "spawned plotting process");

        Ok(Self {
            program: config.program.clone(),
            child,
            stdin: Some(stdin),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn pid(&self) -> u32 {
        self.child.id()
    }

    /// Whether the child has not exited yet.
    pub fn is_running(&mut self) -> bool {
        matches!(self.child.try_wait(), Ok(None))
    }

    /// Write every byte to the child's stdin.
    ///
    /// Interrupted writes are retried; any other failure is returned.
    pub fn send(&mut self, bytes: &[u8]) -> ProcessResult<()> {
        let stdin = self.stdin.as_mut().ok_or(ProcessError::Closed)?;
        stdin.write_all(bytes).map_err(ProcessError::Write)
    }
}

impl CommandSink for ChildProcess {
    fn send(&mut self, bytes: &[u8]) -> ProcessResult<()> {
        ChildProcess::send(self, bytes)
    }
}

impl Drop for ChildProcess {
    fn drop(&mut self) {
        // Closing stdin tells the program its script is over.
        drop(self.stdin.take());

        match self.child.wait() {
            Ok(status) => debug!(program = %self.program, %status, "plotting process exited"),
            Err(err) => warn!(program = %self.program, error = %err, "failed to reap plotting process"),
        }
    }
}

/// Ask the kernel to send SIGTERM to the child when this process dies.
#[cfg(target_os = "linux")]
fn terminate_with_parent(command: &mut Command) {
    use std::os::unix::process::CommandExt;

    // SAFETY: the hook runs in the forked child before exec and only issues
    // prctl, which is async-signal-safe. Failure is ignored.
    unsafe {
        command.pre_exec(|| {
            libc::prctl(
                libc::PR_SET_PDEATHSIG,
                libc::SIGTERM as libc::c_ulong,
                0 as libc::c_ulong,
                0 as libc::c_ulong,
                0 as libc::c_ulong,
            );
            Ok(())
        });
    }
}
