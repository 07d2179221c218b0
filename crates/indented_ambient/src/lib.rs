//! Ambient indented output.
//!
//! Process-wide output built on [`indented_io`]: a current output (stdout by
//! default) that scripts and tools write through, and helpers that indent it.
//!
//! Two entry points cover the two ways of indenting:
//!
//! - [`with_indent`]: the callback receives the new node explicitly; the
//!   current output is not touched
//! - [`with_ambient_indent`]: the new node becomes the current output while
//!   the callback runs, and the previous one is restored afterwards, even if
//!   the callback panics
//!
//! [`indent_ambient`] makes the substitution permanent until reversed.
//!
//! # Example
//!
//! ```
//! use indented_ambient::{buffer_device, puts, redirect, with_ambient_indent};
//! use indented_io::IndentOptions;
//!
//! let device = buffer_device();
//! let _guard = redirect(device.clone());
//!
//! puts(["items:"])?;
//! with_ambient_indent(IndentOptions::string("- "), || puts(["one", "two"]))??;
//! assert_eq!(device.get_output(), "items:\n- one\n- two\n");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod ambient;
pub mod device;
pub mod output;

use std::sync::Once;

pub use ambient::{
    current_output, indent_ambient, print, puts, redirect, set_output, with_ambient_indent,
    with_indent, OutputGuard,
};
pub use device::{
    buffer_device, stderr_device, stdout_device, writer_device, Device, SharedDevice,
};
pub use output::Output;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=indented_io=trace,indented_ambient=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
