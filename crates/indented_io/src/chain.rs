//! Per-chain shared state.
//!
//! Every node of a chain holds a clone of the same [`Chain`]: the raw device
//! and the single beginning-of-line flag live here, behind one lock, so a
//! write through any node sees (and updates) what the others wrote.

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::{MappedMutexGuard, Mutex, MutexGuard};

use crate::rewrite::indent_text;

/// State shared by all nodes of one chain.
pub(crate) struct ChainState<W> {
    pub(crate) device: W,
    /// Whether the next byte written starts a new line.
    pub(crate) bol: bool,
}

/// Handle to a chain's shared state.
pub(crate) struct Chain<W> {
    state: Arc<Mutex<ChainState<W>>>,
}

impl<W> Clone for Chain<W> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<W> Chain<W> {
    /// Start a new chain over `device`.
    pub(crate) fn new(device: W, bol: bool) -> Self {
        Self {
            state: Arc::new(Mutex::new(ChainState { device, bol })),
        }
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, ChainState<W>> {
        self.state.lock()
    }

    pub(crate) fn bol(&self) -> bool {
        self.state.lock().bol
    }

    pub(crate) fn set_bol(&self, bol: bool) {
        self.state.lock().bol = bol;
    }

    pub(crate) fn device(&self) -> MappedMutexGuard<'_, W> {
        MutexGuard::map(self.state.lock(), |state| &mut state.device)
    }

    pub(crate) fn same_chain(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }
}

impl<W: Write> ChainState<W> {
    /// Rewrite `bytes` with `indent`, forward them and update the flag.
    ///
    /// Returns the number of bytes forwarded.
    pub(crate) fn write_indented(&mut self, bytes: &[u8], indent: &[u8]) -> io::Result<usize> {
        let out = indent_text(bytes, indent, self.bol);
        self.device.write_all(&out)?;
        self.bol = out.last() == Some(&b'\n');
        tracing::trace!(bytes = out.len(), bol = self.bol, "indented write");
        Ok(out.len())
    }

    /// Write `line` to the device untouched, followed by a newline.
    pub(crate) fn finish_line_raw(&mut self, line: &str) -> io::Result<()> {
        self.device.write_all(line.as_bytes())?;
        self.device.write_all(b"\n")?;
        self.bol = true;
        Ok(())
    }
}

impl<W: Write> Chain<W> {
    pub(crate) fn flush(&self) -> io::Result<()> {
        self.state.lock().device.flush()
    }
}
