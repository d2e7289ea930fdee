//! gp-process: the plotting program as a child process.
//!
//! Provides:
//! - [`ChildProcess`]: spawn with synchronous exec confirmation, blocking
//!   sends to the child's stdin, reaping on drop
//! - [`CommandSink`]: the seam the plot layer writes command text through
//! - [`MemorySink`]: an in-memory sink that records writes (for tests and dry runs)

pub mod config;
pub mod error;
pub mod memory;
pub mod process;

pub use config::ProcessConfig;
pub use error::{ProcessError, ProcessResult};
pub use memory::MemorySink;
pub use process::ChildProcess;

/// Destination of command text.
///
/// `send` either accepts every byte or fails; there are no partial writes
/// visible to callers.
pub trait CommandSink {
    fn send(&mut self, bytes: &[u8]) -> ProcessResult<()>;
}
