//! Write-family operations.
//!
//! Everything funnels into [`IndentedIo::write_bytes`], which rewrites the
//! payload with [`indent_text`](crate::rewrite::indent_text), forwards it
//! with a single `write_all` and records whether the chain now stands at
//! the start of a line. The chain's lock is held for the whole sequence.

use std::fmt::{self, Debug, Display};
use std::io::{self, Write};

use crate::config::{output_separators, OutputSeparators};
use crate::node::IndentedIo;

impl<W: Write> IndentedIo<W> {
    /// Write `text` with indentation applied.
    ///
    /// Returns the number of bytes forwarded to the device, indentation
    /// included. Empty text forwards nothing and returns 0.
    pub fn write_text(&self, text: &str) -> io::Result<usize> {
        self.write_bytes(text.as_bytes())
    }

    /// Byte-level form of [`write_text`](Self::write_text).
    pub fn write_bytes(&self, bytes: &[u8]) -> io::Result<usize> {
        if bytes.is_empty() {
            return Ok(0);
        }
        self.chain()
            .lock()
            .write_indented(bytes, self.combined_indent().as_bytes())
    }

    /// Write `items` joined by the configured field separator, followed by
    /// the configured record separator.
    pub fn print<I>(&self, items: I) -> io::Result<()>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.write_text(&output_separators().render(items)).map(drop)
    }

    /// Format `args` and write the result once.
    ///
    /// ```
    /// # use indented_io::IndentedIo;
    /// let out = IndentedIo::new(Vec::<u8>::new())?;
    /// out.printf(format_args!("{}-{}", 1, 2))?;
    /// assert_eq!(*out.device(), b"  1-2");
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn printf(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.write_text(&fmt::format(args)).map(drop)
    }

    /// Write each item on its own line. No items writes a single newline.
    pub fn puts<I>(&self, items: I) -> io::Result<()>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.write_text(&OutputSeparators::lines().render(items)).map(drop)
    }

    /// Write the debug representation of `value` on its own line and return
    /// the value.
    ///
    /// When the chain is mid-line, the representation finishes that line on
    /// the raw device without indentation.
    pub fn p<T: Debug>(&self, value: T) -> io::Result<T> {
        self.inspect_all([format!("{value:?}")])?;
        Ok(value)
    }

    /// [`p`](Self::p) for several values; returns them in order.
    pub fn p_all<T: Debug>(&self, values: Vec<T>) -> io::Result<Vec<T>> {
        self.inspect_all(values.iter().map(|value| format!("{value:?}")))?;
        Ok(values)
    }

    /// Format everything first, then check the flag and write under one lock.
    fn inspect_all(&self, reprs: impl IntoIterator<Item = String>) -> io::Result<()> {
        let reprs: Vec<String> = reprs.into_iter().collect();
        let indent = self.combined_indent().as_bytes();
        let mut state = self.chain().lock();
        let mut reprs = reprs.iter();
        if !state.bol {
            if let Some(first) = reprs.next() {
                state.finish_line_raw(first)?;
            }
        }
        for repr in reprs {
            state.write_indented(format!("{repr}\n").as_bytes(), indent)?;
        }
        Ok(())
    }
}

impl<W: Write> Write for IndentedIo<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_bytes(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.chain().flush()
    }
}

impl<W: Write> Write for &IndentedIo<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_bytes(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.chain().flush()
    }
}
