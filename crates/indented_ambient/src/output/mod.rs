//! The value held in the process-wide output slot.

use std::fmt::Display;
use std::io::{self, Write};

use indented_io::{output_separators, IndentError, IndentOptions, IndentedIo, OutputSeparators};

use crate::device::SharedDevice;

/// An unindented device or an indentation node over one.
#[derive(Clone, Debug)]
pub enum Output {
    Device(SharedDevice),
    Indented(IndentedIo<SharedDevice>),
}

impl Output {
    /// Build a node from this output.
    ///
    /// A plain device starts a new chain, so negative levels fail with
    /// [`IndentError::InvalidOperation`].
    pub fn indent_with(&self, options: IndentOptions) -> Result<IndentedIo<SharedDevice>, IndentError> {
        match self {
            Self::Device(device) => IndentedIo::wrap(device.clone(), options),
            Self::Indented(node) => node.indent_with(options),
        }
    }

    /// Accumulated level count; 0 for a plain device.
    pub fn depth(&self) -> usize {
        match self {
            Self::Device(_) => 0,
            Self::Indented(node) => node.depth(),
        }
    }

    /// Accumulated indentation width; 0 for a plain device.
    pub fn tab(&self) -> usize {
        match self {
            Self::Device(_) => 0,
            Self::Indented(node) => node.tab(),
        }
    }

    /// The device at the root of this output.
    pub fn device(&self) -> SharedDevice {
        match self {
            Self::Device(device) => device.clone(),
            Self::Indented(node) => node.device().clone(),
        }
    }

    /// Whether both outputs are the same device handle or the same node.
    pub fn same_output(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Device(a), Self::Device(b)) => a.same_device(b),
            (Self::Indented(a), Self::Indented(b)) => a.same_node(b),
            _ => false,
        }
    }

    /// Write `items` with the process-wide `print` separators.
    pub fn print<I>(&self, items: I) -> io::Result<()>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        match self {
            Self::Device(device) => device
                .clone()
                .write_all(output_separators().render(items).as_bytes()),
            Self::Indented(node) => node.print(items),
        }
    }

    /// Write each item on its own line.
    pub fn puts<I>(&self, items: I) -> io::Result<()>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        match self {
            Self::Device(device) => device
                .clone()
                .write_all(OutputSeparators::lines().render(items).as_bytes()),
            Self::Indented(node) => node.puts(items),
        }
    }
}

impl From<SharedDevice> for Output {
    fn from(device: SharedDevice) -> Self {
        Self::Device(device)
    }
}

impl From<IndentedIo<SharedDevice>> for Output {
    fn from(node: IndentedIo<SharedDevice>) -> Self {
        Self::Indented(node)
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Device(device) => device.write(buf),
            Self::Indented(node) => node.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Device(device) => device.flush(),
            Self::Indented(node) => node.flush(),
        }
    }
}
