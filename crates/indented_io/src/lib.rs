//! Indented I/O
//!
//! Indentation decorator for `std::io::Write` devices.
//!
//! # Architecture
//!
//! Nodes form a chain ending at one raw device:
//!
//! 1. **Chain**: the device and a single beginning-of-line flag, shared by
//!    every node built on top of the same device
//! 2. **Nodes**: immutable entries holding their own indentation string and
//!    level count plus the accumulated indentation, depth and width
//! 3. **Writes**: text is rewritten so that every non-blank line starts with
//!    the node's accumulated indentation, then forwarded to the device
//!
//! Negative level counts outdent by walking back toward the device.
//!
//! # Modules
//!
//! - [`config`]: factory options and process-wide defaults
//! - [`rewrite`]: the pure text transformation
//! - [`error`]: chain construction errors
//!
//! # Example
//!
//! ```
//! use indented_io::{IndentOptions, IndentedIo};
//!
//! let out = IndentedIo::wrap(Vec::<u8>::new(), IndentOptions::levels(2).with_string(">"))?;
//! out.puts(["Hello"])?;
//! out.indent(-1)?.print(["World"])?;
//! assert_eq!(*out.device(), b">>Hello\n>World");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod chain;
pub mod config;
pub mod error;
mod node;
mod output;
pub mod rewrite;

pub use config::{
    default_indent, output_separators, reset_default_indent, set_default_indent,
    set_output_separators, IndentOptions, OutputSeparators, DEFAULT_INDENT,
};
pub use error::IndentError;
pub use node::IndentedIo;
