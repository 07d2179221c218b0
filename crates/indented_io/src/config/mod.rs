//! Indentation configuration.
//!
//! Two layers:
//! - [`IndentOptions`]: per-call arguments of the chain factory
//!   (levels, indentation string, beginning-of-line override).
//! - Process-wide defaults: the fallback indentation string and the
//!   separators used by `print`. Both live in `parking_lot::RwLock` statics
//!   and are read on every call that needs them.

use std::borrow::Cow;
use std::fmt::Display;

use parking_lot::{const_rwlock, RwLock};

/// Indentation string used when nothing else in the chain supplies one.
pub const DEFAULT_INDENT: &str = "  ";

static INDENT: RwLock<Cow<'static, str>> = const_rwlock(Cow::Borrowed(DEFAULT_INDENT));

static SEPARATORS: RwLock<OutputSeparators> = const_rwlock(OutputSeparators {
    field: None,
    record: None,
});

/// Current process-wide default indentation string.
pub fn default_indent() -> String {
    INDENT.read().to_string()
}

/// Replace the process-wide default indentation string.
///
/// Only affects nodes created afterwards; existing nodes keep their strings.
pub fn set_default_indent(indent: impl Into<String>) {
    let indent = indent.into();
    tracing::debug!(indent = %indent.escape_debug(), "default indent changed");
    *INDENT.write() = Cow::Owned(indent);
}

/// Restore the default indentation string to [`DEFAULT_INDENT`].
pub fn reset_default_indent() {
    *INDENT.write() = Cow::Borrowed(DEFAULT_INDENT);
}

/// Separators applied by `print`.
///
/// `field` is placed between items, `record` after the last one.
/// Both default to nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputSeparators {
    pub field: Option<String>,
    pub record: Option<String>,
}

impl OutputSeparators {
    /// Separators with only a field separator.
    pub fn field(field: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            record: None,
        }
    }

    /// Separators with only a record terminator.
    pub fn record(record: impl Into<String>) -> Self {
        Self {
            field: None,
            record: Some(record.into()),
        }
    }

    /// One item per line, as `puts` writes them.
    pub fn lines() -> Self {
        Self {
            field: Some("\n".to_string()),
            record: Some("\n".to_string()),
        }
    }

    /// Join `items` with `field` and terminate them with `record`.
    pub fn render<I>(&self, items: I) -> String
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let mut text = String::new();
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                if let Some(field) = &self.field {
                    text.push_str(field);
                }
            }
            text.push_str(&item.to_string());
        }
        if let Some(record) = &self.record {
            text.push_str(record);
        }
        text
    }
}

/// Current process-wide `print` separators.
pub fn output_separators() -> OutputSeparators {
    SEPARATORS.read().clone()
}

/// Replace the process-wide `print` separators, returning the previous ones.
pub fn set_output_separators(separators: OutputSeparators) -> OutputSeparators {
    std::mem::replace(&mut *SEPARATORS.write(), separators)
}

/// Arguments of the chain factory.
///
/// `levels` may be negative to outdent. `string` falls back to the
/// receiver's own indentation string (or [`default_indent`] for a raw
/// device). `bol`, when set, overrides the chain's beginning-of-line flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentOptions {
    pub levels: isize,
    pub string: Option<String>,
    pub bol: Option<bool>,
}

impl Default for IndentOptions {
    fn default() -> Self {
        Self {
            levels: 1,
            string: None,
            bol: None,
        }
    }
}

impl IndentOptions {
    /// Options for `levels` levels with the contextual default string.
    pub fn levels(levels: isize) -> Self {
        Self {
            levels,
            ..Default::default()
        }
    }

    /// Options for one level of `string`.
    pub fn string(string: impl Into<String>) -> Self {
        Self {
            string: Some(string.into()),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_levels(mut self, levels: isize) -> Self {
        self.levels = levels;
        self
    }

    #[must_use]
    pub fn with_string(mut self, string: impl Into<String>) -> Self {
        self.string = Some(string.into());
        self
    }

    #[must_use]
    pub fn with_bol(mut self, bol: bool) -> Self {
        self.bol = Some(bol);
        self
    }
}
