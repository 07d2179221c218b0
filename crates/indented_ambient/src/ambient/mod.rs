//! Process-wide current output.
//!
//! One slot holds the output that [`print`] and [`puts`] write to. It starts
//! out as stdout and can be replaced outright ([`set_output`]), for a scope
//! ([`redirect`], [`with_ambient_indent`]) or persistently
//! ([`indent_ambient`]).
//!
//! The slot's lock is never held while user code runs, so callbacks are free
//! to write through the current output or redirect it again.

use std::fmt::Display;
use std::io;

use indented_io::{IndentError, IndentOptions, IndentedIo};
use parking_lot::{const_mutex, Mutex};

use crate::device::{stdout_device, SharedDevice};
use crate::output::Output;

static CURRENT: Mutex<Option<Output>> = const_mutex(None);

/// The current process-wide output.
pub fn current_output() -> Output {
    CURRENT
        .lock()
        .get_or_insert_with(|| Output::Device(stdout_device()))
        .clone()
}

/// Replace the current output, returning the previous one.
pub fn set_output(output: impl Into<Output>) -> Output {
    let output = output.into();
    let previous = CURRENT.lock().replace(output);
    previous.unwrap_or_else(|| Output::Device(stdout_device()))
}

/// Restores the output that was current before a [`redirect`].
///
/// Restoration happens on drop, so it also runs while unwinding from a
/// panic.
#[must_use = "the previous output is restored as soon as the guard is dropped"]
pub struct OutputGuard {
    previous: Option<Output>,
}

impl OutputGuard {
    /// Keep the redirection in place and return the output it replaced.
    pub fn into_previous(mut self) -> Output {
        self.previous
            .take()
            .unwrap_or_else(|| Output::Device(stdout_device()))
    }
}

impl Drop for OutputGuard {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            tracing::debug!(depth = previous.depth(), "ambient output restored");
            *CURRENT.lock() = Some(previous);
        }
    }
}

/// Make `output` current until the returned guard is dropped.
pub fn redirect(output: impl Into<Output>) -> OutputGuard {
    OutputGuard {
        previous: Some(set_output(output)),
    }
}

/// Build a node from the current output and pass it to `f`.
///
/// The current output is left untouched.
pub fn with_indent<R>(
    options: IndentOptions,
    f: impl FnOnce(&mut IndentedIo<SharedDevice>) -> R,
) -> Result<R, IndentError> {
    let mut node = current_output().indent_with(options)?;
    Ok(f(&mut node))
}

/// Build a node from the current output and make it current while `f` runs.
///
/// The previous output is restored when `f` returns or panics.
pub fn with_ambient_indent<R>(options: IndentOptions, f: impl FnOnce() -> R) -> Result<R, IndentError> {
    let node = current_output().indent_with(options)?;
    tracing::debug!(depth = node.depth(), "ambient output indented for scope");
    let _guard = redirect(node);
    Ok(f())
}

/// Build a node from the current output and make it current until changed.
///
/// Returns the replaced output; pass it to [`set_output`] to undo.
pub fn indent_ambient(options: IndentOptions) -> Result<Output, IndentError> {
    let node = current_output().indent_with(options)?;
    tracing::debug!(depth = node.depth(), "ambient output indented");
    Ok(set_output(node))
}

/// Write `items` through the current output.
pub fn print<I>(items: I) -> io::Result<()>
where
    I: IntoIterator,
    I::Item: Display,
{
    current_output().print(items)
}

/// Write each item on its own line through the current output.
pub fn puts<I>(items: I) -> io::Result<()>
where
    I: IntoIterator,
    I::Item: Display,
{
    current_output().puts(items)
}
