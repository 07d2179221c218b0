//! Shared output devices.
//!
//! The process-wide output must be cloneable (every node of a chain and the
//! ambient slot refer to it), so devices are wrapped in a
//! [`SharedDevice`] handle.
//!
//! # Performance
//! Uses enum dispatch for the common targets; arbitrary writers go through
//! a boxed trait object.

use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Output target behind a [`SharedDevice`].
pub enum Device {
    /// Process stdout (default).
    Stdout,
    /// Process stderr.
    Stderr,
    /// Captures to memory (tests, embedding).
    Buffer(Vec<u8>),
    /// Any other writer.
    Writer(Box<dyn Write + Send>),
}

impl Write for Device {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stdout => io::stdout().write(buf),
            Self::Stderr => io::stderr().write(buf),
            Self::Buffer(bytes) => bytes.write(buf),
            Self::Writer(writer) => writer.write(buf),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self {
            Self::Stdout => io::stdout().lock().write_all(buf),
            Self::Stderr => io::stderr().lock().write_all(buf),
            Self::Buffer(bytes) => bytes.write_all(buf),
            Self::Writer(writer) => writer.write_all(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout => io::stdout().flush(),
            Self::Stderr => io::stderr().flush(),
            Self::Buffer(_) => Ok(()),
            Self::Writer(writer) => writer.flush(),
        }
    }
}

impl fmt::Debug for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("Stdout"),
            Self::Stderr => f.write_str("Stderr"),
            Self::Buffer(bytes) => f.debug_tuple("Buffer").field(&bytes.len()).finish(),
            Self::Writer(_) => f.write_str("Writer(..)"),
        }
    }
}

/// Cloneable handle to a [`Device`].
///
/// Clones write to the same target. Equality is identity.
#[derive(Clone, Debug)]
pub struct SharedDevice {
    inner: Arc<Mutex<Device>>,
}

impl SharedDevice {
    pub fn new(device: Device) -> Self {
        Self {
            inner: Arc::new(Mutex::new(device)),
        }
    }

    /// Captured output, for buffer devices.
    ///
    /// Returns an empty string for devices that don't capture.
    pub fn get_output(&self) -> String {
        match &*self.inner.lock() {
            Device::Buffer(bytes) => String::from_utf8_lossy(bytes).into_owned(),
            _ => String::new(),
        }
    }

    /// Take and clear captured output.
    pub fn take_output(&self) -> String {
        match &mut *self.inner.lock() {
            Device::Buffer(bytes) => String::from_utf8_lossy(&std::mem::take(bytes)).into_owned(),
            _ => String::new(),
        }
    }

    /// Clear captured output. No-op for devices that don't capture.
    pub fn clear(&self) {
        if let Device::Buffer(bytes) = &mut *self.inner.lock() {
            bytes.clear();
        }
    }

    /// Whether both handles refer to the same device.
    pub fn same_device(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for SharedDevice {
    fn eq(&self, other: &Self) -> bool {
        self.same_device(other)
    }
}

impl Eq for SharedDevice {}

impl Write for SharedDevice {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.lock().write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.inner.lock().write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.lock().flush()
    }
}

/// Device writing to stdout.
pub fn stdout_device() -> SharedDevice {
    SharedDevice::new(Device::Stdout)
}

/// Device writing to stderr.
pub fn stderr_device() -> SharedDevice {
    SharedDevice::new(Device::Stderr)
}

/// Device capturing output in memory.
pub fn buffer_device() -> SharedDevice {
    SharedDevice::new(Device::Buffer(Vec::new()))
}

/// Device forwarding to `writer`.
pub fn writer_device(writer: impl Write + Send + 'static) -> SharedDevice {
    SharedDevice::new(Device::Writer(Box::new(writer)))
}
