//! In-memory command sink.

use std::cell::{Cell, RefCell};
use std::io;
use std::rc::Rc;

use crate::CommandSink;
use crate::error::{ProcessError, ProcessResult};

/// Records everything sent to it.
///
/// Clones share the same buffer, so a test can hand one clone to a plot and
/// inspect the other. A failure can be armed with [`MemorySink::fail_next`].
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    written: Rc<RefCell<Vec<u8>>>,
    sends: Rc<Cell<usize>>,
    fail_next: Rc<Cell<Option<i32>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.written.borrow()).into_owned()
    }

    /// Everything written so far, leaving the buffer empty.
    pub fn take(&self) -> String {
        let bytes = std::mem::take(&mut *self.written.borrow_mut());
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// Written text split into lines.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    /// Number of successful sends.
    pub fn send_count(&self) -> usize {
        self.sends.get()
    }

    /// Make the next send fail with the given OS error code.
    pub fn fail_next(&self, code: i32) {
        self.fail_next.set(Some(code));
    }
}

impl CommandSink for MemorySink {
    fn send(&mut self, bytes: &[u8]) -> ProcessResult<()> {
        if let Some(code) = self.fail_next.take() {
            return Err(ProcessError::Write(io::Error::from_raw_os_error(code)));
        }
        self.written.borrow_mut().extend_from_slice(bytes);
        self.sends.set(self.sends.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_buffer() {
        let probe = MemorySink::new();
        let mut sink = probe.clone();
        sink.send(b"set terminal qt\n").unwrap();
        sink.send(b"plot $_0\n").unwrap();

        assert_eq!(probe.send_count(), 2);
        assert_eq!(probe.lines(), ["set terminal qt", "plot $_0"]);
        assert_eq!(probe.take(), "set terminal qt\nplot $_0\n");
        assert!(probe.contents().is_empty());
    }

    #[test]
    fn armed_failure_fires_once() {
        let mut sink = MemorySink::new();
        sink.fail_next(32);

        let err = sink.send(b"lost").unwrap_err();
        assert_eq!(err.code(), Some(32));
        assert_eq!(sink.send_count(), 0);

        sink.send(b"kept").unwrap();
        assert_eq!(sink.contents(), "kept");
    }
}
