//! Indentation nodes and the chain factory.
//!
//! A chain is a singly linked list of nodes ending at a raw device:
//!
//! ```text
//! device <- node(levels 1, "  ") <- node(levels 2, ">") <- ...
//! ```
//!
//! Each node caches its accumulated indentation (`combined`), level count
//! (`depth`) and visual width (`tab`), so writes never walk the list. Only
//! outdenting walks it, toward the device.
//!
//! # Outdent resolution
//!
//! A negative level count is resolved against the receiving node: its own
//! levels are added to the request and the new node is placed at the
//! receiver's parent with what is left over. Requests larger than the
//! receiver's own levels are rejected rather than spread over several
//! ancestors. When no indentation string is given, the last node visited
//! during the walk supplies it.

use std::fmt;
use std::io::{self, Seek, SeekFrom};
use std::sync::Arc;

use parking_lot::MappedMutexGuard;

use crate::chain::Chain;
use crate::config::{default_indent, IndentOptions};
use crate::error::IndentError;

/// One entry of a chain.
struct Node<W> {
    /// `None` when the parent is the raw device.
    parent: Option<Arc<Node<W>>>,
    levels: usize,
    indent: String,
    combined: String,
    depth: usize,
    tab: usize,
    chain: Chain<W>,
}

impl<W> Node<W> {
    fn build(
        parent: Option<Arc<Node<W>>>,
        chain: Chain<W>,
        levels: usize,
        indent: String,
    ) -> Result<Self, IndentError> {
        let too_deep = IndentError::TooDeep { levels };
        let own_width = indent.chars().count().checked_mul(levels).ok_or(too_deep)?;
        let (depth, tab) = match &parent {
            Some(parent) => (
                parent.depth.checked_add(levels).ok_or(too_deep)?,
                parent.tab.checked_add(own_width).ok_or(too_deep)?,
            ),
            None => (levels, own_width),
        };
        // `str::repeat` panics when the byte length overflows.
        indent.len().checked_mul(levels).ok_or(too_deep)?;
        let own = indent.repeat(levels);
        let combined = match &parent {
            Some(parent) => format!("{}{own}", parent.combined),
            None => own,
        };
        tracing::trace!(levels, depth, tab, indent = %indent.escape_debug(), "indent node built");
        Ok(Node {
            parent,
            levels,
            indent,
            combined,
            depth,
            tab,
            chain,
        })
    }
}

/// Indentation decorator over a `std::io::Write` device.
///
/// Cloning is cheap and yields a handle to the same node. All nodes of one
/// chain share the device and the beginning-of-line flag, so output written
/// through a deeper node and then through a shallower one continues the
/// same line correctly.
///
/// # Example
///
/// ```
/// use indented_io::{IndentOptions, IndentedIo};
///
/// let out = IndentedIo::wrap(Vec::<u8>::new(), IndentOptions::string("> "))?;
/// out.puts(["header"])?;
/// out.indent(1)?.puts(["nested", "lines"])?;
/// assert_eq!(*out.device(), b"> header\n> > nested\n> > lines\n");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct IndentedIo<W> {
    node: Arc<Node<W>>,
}

impl<W> Clone for IndentedIo<W> {
    fn clone(&self) -> Self {
        Self {
            node: Arc::clone(&self.node),
        }
    }
}

impl<W> IndentedIo<W> {
    /// Wrap a raw device one level deep with the default indentation string.
    pub fn new(device: W) -> Result<Self, IndentError> {
        Self::wrap(device, IndentOptions::default())
    }

    /// Wrap a raw device, starting a new chain.
    ///
    /// Fails with [`IndentError::InvalidOperation`] for negative levels:
    /// a raw device has nothing to outdent.
    pub fn wrap(device: W, options: IndentOptions) -> Result<Self, IndentError> {
        let levels = usize::try_from(options.levels).map_err(|_| IndentError::InvalidOperation)?;
        let indent = options.string.unwrap_or_else(default_indent);
        let chain = Chain::new(device, options.bol.unwrap_or(true));
        Ok(Self {
            node: Arc::new(Node::build(None, chain, levels, indent)?),
        })
    }

    /// Wrap a raw device and hand the new node to `f`.
    pub fn wrap_scoped<R>(
        device: W,
        options: IndentOptions,
        f: impl FnOnce(&mut Self) -> R,
    ) -> Result<R, IndentError> {
        let mut node = Self::wrap(device, options)?;
        Ok(f(&mut node))
    }

    /// Indent (or outdent, for negative `levels`) using this node's string.
    pub fn indent(&self, levels: isize) -> Result<Self, IndentError> {
        self.indent_with(IndentOptions::levels(levels))
    }

    /// Indent (or outdent) with an explicit indentation string.
    pub fn indent_by(&self, levels: isize, string: impl Into<String>) -> Result<Self, IndentError> {
        self.indent_with(IndentOptions::levels(levels).with_string(string))
    }

    /// Create a node relative to this one.
    ///
    /// Non-negative levels nest below this node. Negative levels outdent:
    /// see the module docs for how the new node is placed.
    pub fn indent_with(&self, options: IndentOptions) -> Result<Self, IndentError> {
        let IndentOptions { levels, string, bol } = options;
        let node = match usize::try_from(levels) {
            Ok(levels) => {
                let indent = string.unwrap_or_else(|| self.node.indent.clone());
                Node::build(Some(Arc::clone(&self.node)), self.node.chain.clone(), levels, indent)?
            }
            Err(_) => self.outdent(levels, string)?,
        };
        if let Some(bol) = bol {
            node.chain.set_bol(bol);
        }
        Ok(Self {
            node: Arc::new(node),
        })
    }

    /// Create a node relative to this one and hand it to `f`.
    pub fn scoped<R>(
        &self,
        options: IndentOptions,
        f: impl FnOnce(&mut Self) -> R,
    ) -> Result<R, IndentError> {
        let mut node = self.indent_with(options)?;
        Ok(f(&mut node))
    }

    fn outdent(&self, levels: isize, string: Option<String>) -> Result<Node<W>, IndentError> {
        let requested = levels.unsigned_abs();
        let available = self.node.levels;
        if requested > available {
            return Err(IndentError::OutOfRange {
                requested,
                available,
            });
        }

        let mut remaining = levels;
        let mut sibling = &self.node;
        let mut anchor = Some(&self.node);
        while remaining < 0 {
            let Some(node) = anchor else { break };
            remaining += isize::try_from(node.levels).unwrap_or(isize::MAX);
            sibling = node;
            anchor = node.parent.as_ref();
        }
        let leftover = usize::try_from(remaining).map_err(|_| IndentError::OutOfRange {
            requested,
            available,
        })?;

        tracing::debug!(
            requested,
            leftover,
            anchored_at_device = anchor.is_none(),
            "outdent resolved"
        );

        let indent = string.unwrap_or_else(|| sibling.indent.clone());
        Node::build(anchor.cloned(), self.node.chain.clone(), leftover, indent)
    }

    /// Levels contributed by this node alone.
    pub fn levels(&self) -> usize {
        self.node.levels
    }

    /// This node's own indentation string (one level).
    pub fn indent_string(&self) -> &str {
        &self.node.indent
    }

    /// Full indentation written at the start of each line.
    pub fn combined_indent(&self) -> &str {
        &self.node.combined
    }

    /// Accumulated level count from the device.
    pub fn depth(&self) -> usize {
        self.node.depth
    }

    /// Accumulated indentation width in characters.
    pub fn tab(&self) -> usize {
        self.node.tab
    }

    /// Whether the chain is at the start of a line.
    pub fn is_bol(&self) -> bool {
        self.node.chain.bol()
    }

    /// Whether `other` writes to the same device and shares this node's
    /// beginning-of-line flag.
    pub fn same_chain(&self, other: &Self) -> bool {
        self.node.chain.same_chain(&other.node.chain)
    }

    /// Whether `other` is a handle to this very node.
    pub fn same_node(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }

    /// Borrow the raw device.
    ///
    /// Writing through any node of this chain while the guard is alive
    /// deadlocks.
    pub fn device(&self) -> MappedMutexGuard<'_, W> {
        self.node.chain.device()
    }

    /// Run `f` with the raw device, for capabilities the decorator does not
    /// wrap.
    pub fn with_device<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        f(&mut self.device())
    }

    pub(crate) fn chain(&self) -> &Chain<W> {
        &self.node.chain
    }
}

impl<W> fmt::Debug for IndentedIo<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndentedIo")
            .field("levels", &self.node.levels)
            .field("indent", &self.node.indent)
            .field("combined", &self.node.combined)
            .field("depth", &self.node.depth)
            .field("tab", &self.node.tab)
            .finish_non_exhaustive()
    }
}

impl<W: Seek> Seek for IndentedIo<W> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.device().seek(pos)
    }
}

#[cfg(test)]
mod tests;
