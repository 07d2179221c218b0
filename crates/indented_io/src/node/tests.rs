#![allow(clippy::unwrap_used, reason = "Tests unwrap for brevity")]

use std::io::{Cursor, Seek, SeekFrom};

use super::*;
use pretty_assertions::assert_eq;

fn text(out: &IndentedIo<Vec<u8>>) -> String {
    String::from_utf8(out.device().clone()).unwrap()
}

fn device() -> Vec<u8> {
    Vec::new()
}

// -- Construction --

#[test]
fn wrap_builds_root_node() {
    let out = IndentedIo::wrap(device(), IndentOptions::levels(2).with_string("ab")).unwrap();
    assert_eq!(out.levels(), 2);
    assert_eq!(out.indent_string(), "ab");
    assert_eq!(out.combined_indent(), "abab");
    assert_eq!(out.depth(), 2);
    assert_eq!(out.tab(), 4);
    assert!(out.is_bol());
}

#[test]
fn new_uses_one_level_of_default_indent() {
    let out = IndentedIo::new(device()).unwrap();
    assert_eq!(out.levels(), 1);
    assert_eq!(out.combined_indent(), crate::DEFAULT_INDENT);
}

#[test]
fn wrap_with_zero_levels_has_no_indent() {
    let out = IndentedIo::wrap(device(), IndentOptions::levels(0)).unwrap();
    assert_eq!(out.combined_indent(), "");
    assert_eq!(out.depth(), 0);
    assert_eq!(out.tab(), 0);
}

#[test]
fn nested_node_accumulates() {
    let out = IndentedIo::wrap(device(), IndentOptions::string(">>")).unwrap();
    let inner = out.indent_by(1, "<<").unwrap();
    assert_eq!(inner.combined_indent(), ">><<");
    assert_eq!(inner.depth(), 2);
    assert_eq!(inner.tab(), 4);
    assert!(inner.same_chain(&out));
}

#[test]
fn tab_counts_characters() {
    let out = IndentedIo::wrap(device(), IndentOptions::string(" ")).unwrap();
    assert_eq!(out.tab(), 1);
    let out = out.indent_by(2, "  ").unwrap();
    assert_eq!(out.tab(), 5);
    assert_eq!(out.depth(), 3);

    let arrows = out.indent_by(1, "→").unwrap();
    assert_eq!(arrows.tab(), 6);
}

#[test]
fn node_default_is_own_indent() {
    let out = IndentedIo::wrap(device(), IndentOptions::string(">>")).unwrap();
    let inner = out.indent(1).unwrap();
    assert_eq!(inner.indent_string(), ">>");
    assert_eq!(inner.combined_indent(), ">>>>");
}

#[test]
fn separate_wraps_are_separate_chains() {
    let a = IndentedIo::new(device()).unwrap();
    let b = IndentedIo::new(device()).unwrap();
    assert!(!a.same_chain(&b));
    assert!(a.same_chain(&a.clone()));
}

#[test]
fn same_node_is_identity() {
    let out = IndentedIo::new(device()).unwrap();
    let inner = out.indent(0).unwrap();
    assert!(out.same_node(&out.clone()));
    assert!(!out.same_node(&inner));
    assert!(out.same_chain(&inner));
}

// -- Outdent --

#[test]
fn outdent_on_device_is_invalid() {
    let err = IndentedIo::wrap(device(), IndentOptions::levels(-1).with_string("")).unwrap_err();
    assert_eq!(err, IndentError::InvalidOperation);
}

#[test]
fn outdent_past_own_levels_is_out_of_range() {
    let out = IndentedIo::new(device()).unwrap();
    let err = out.indent(-2).unwrap_err();
    assert_eq!(
        err,
        IndentError::OutOfRange {
            requested: 2,
            available: 1,
        }
    );
}

#[test]
fn outdent_ignores_ancestor_levels() {
    let out = IndentedIo::wrap(device(), IndentOptions::levels(3)).unwrap();
    let inner = out.indent(1).unwrap();
    assert_eq!(inner.depth(), 4);
    assert!(matches!(
        inner.indent(-2),
        Err(IndentError::OutOfRange {
            requested: 2,
            available: 1,
        })
    ));
}

#[test]
fn partial_outdent_keeps_remaining_levels() {
    let out = IndentedIo::wrap(device(), IndentOptions::levels(3).with_string("-")).unwrap();
    let back = out.indent(-1).unwrap();
    assert_eq!(back.levels(), 2);
    assert_eq!(back.combined_indent(), "--");
    assert_eq!(back.depth(), 2);
}

#[test]
fn full_outdent_returns_to_parent_state() {
    let out = IndentedIo::wrap(device(), IndentOptions::string("[")).unwrap();
    let inner = out.indent_by(3, "-").unwrap();
    let back = inner.indent(-3).unwrap();
    assert_eq!(back.combined_indent(), out.combined_indent());
    assert_eq!(back.depth(), out.depth());
    assert_eq!(back.tab(), out.tab());
    assert!(back.same_chain(&out));
}

#[test]
fn outdent_to_device_keeps_chain() {
    let out = IndentedIo::wrap(device(), IndentOptions::levels(2)).unwrap();
    let back = out.indent(-2).unwrap();
    assert_eq!(back.depth(), 0);
    assert!(back.same_chain(&out));
}

#[test]
fn outdent_uses_sibling_indent_by_default() {
    let out = IndentedIo::wrap(device(), IndentOptions::string(">")).unwrap();
    let back = out.indent(-1).unwrap();
    assert_eq!(back.indent_string(), ">");
    assert_eq!(back.combined_indent(), "");
    assert_eq!(back.indent(1).unwrap().combined_indent(), ">");
}

#[test]
fn outdent_with_explicit_string() {
    let out = IndentedIo::wrap(device(), IndentOptions::levels(2).with_string(">")).unwrap();
    let back = out.indent_by(-1, "*").unwrap();
    assert_eq!(back.combined_indent(), "*");
}

// -- Beginning-of-line override --

#[test]
fn wrap_with_bol_false() {
    let out = IndentedIo::wrap(device(), IndentOptions::default().with_bol(false)).unwrap();
    assert!(!out.is_bol());
}

#[test]
fn bol_override_is_shared_by_the_chain() {
    let out = IndentedIo::wrap(device(), IndentOptions::string(">")).unwrap();
    out.print(["a"]).unwrap();
    assert!(!out.is_bol());

    let _sibling = out.indent_with(IndentOptions::levels(0).with_bol(true)).unwrap();
    assert!(out.is_bol());
    out.print(["b"]).unwrap();
    assert_eq!(text(&out), ">a>b");
}

// -- Callbacks --

#[test]
fn scoped_passes_node_and_returns_result() {
    let out = IndentedIo::wrap(device(), IndentOptions::string(">")).unwrap();
    let depth = out
        .scoped(IndentOptions::levels(2), |inner| {
            inner.puts(["*"]).unwrap();
            inner.depth()
        })
        .unwrap();
    assert_eq!(depth, 3);
    assert_eq!(text(&out), ">>>*\n");
}

#[test]
fn scoped_propagates_factory_errors() {
    let out = IndentedIo::new(device()).unwrap();
    let result = out.scoped(IndentOptions::levels(-5), |_| 42);
    assert!(matches!(result, Err(IndentError::OutOfRange { .. })));
}

#[test]
fn wrap_scoped_returns_callback_value() {
    let value = IndentedIo::wrap_scoped(device(), IndentOptions::string("-"), |out| {
        out.print(["x"]).unwrap();
        42
    })
    .unwrap();
    assert_eq!(value, 42);
}

// -- Delegation --

#[test]
fn seek_is_delegated() {
    let mut out = IndentedIo::wrap(Cursor::new(Vec::<u8>::new()), IndentOptions::string(">")).unwrap();
    out.print(["abc"]).unwrap();
    assert_eq!(out.stream_position().unwrap(), 4);
    assert_eq!(out.seek(SeekFrom::Start(1)).unwrap(), 1);
    out.print(["X"]).unwrap();
    assert_eq!(out.device().get_ref().as_slice(), b">Xbc");
}

#[test]
fn with_device_exposes_raw_device() {
    let out = IndentedIo::new(device()).unwrap();
    out.with_device(|dev| dev.extend_from_slice(b"raw"));
    out.print(["x"]).unwrap();
    assert_eq!(text(&out), "raw  x");
}

#[test]
fn debug_shows_indentation_state() {
    let out = IndentedIo::wrap(device(), IndentOptions::levels(2).with_string(">")).unwrap();
    let debug = format!("{out:?}");
    assert!(debug.starts_with("IndentedIo"));
    assert!(debug.contains("combined: \">>\""));
    assert!(debug.contains("depth: 2"));
}

// -- Overflow --

#[test]
fn depth_overflow_is_an_error() {
    let out = IndentedIo::wrap(device(), IndentOptions::levels(isize::MAX).with_string("")).unwrap();
    let deep = out.indent(isize::MAX).unwrap();
    assert_eq!(deep.depth(), usize::MAX - 1);
    assert_eq!(deep.indent(2).unwrap_err(), IndentError::TooDeep { levels: 2 });
    assert_eq!(deep.indent(1).unwrap().depth(), usize::MAX);
}

#[test]
fn width_overflow_is_an_error() {
    let out = IndentedIo::new(device()).unwrap();
    let err = out.indent(isize::MAX).unwrap_err();
    assert_eq!(
        err,
        IndentError::TooDeep {
            levels: isize::MAX.unsigned_abs(),
        }
    );
    assert_eq!(out.depth(), 1);
}
