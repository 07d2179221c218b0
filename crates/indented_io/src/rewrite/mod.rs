//! Text rewriting.
//!
//! Inserts the combined indentation at line starts while leaving blank lines
//! and the end of the text alone. Works on bytes: `\n` never occurs inside a
//! multi-byte UTF-8 sequence, so valid UTF-8 stays valid.

/// Indent `text` for output.
///
/// - The indentation is prepended when `bol` is set and `text` does not
///   start with a newline.
/// - It is inserted after every newline followed by a non-newline byte.
///
/// Returns `text` unchanged (copied) when `indent` is empty.
pub fn indent_text(text: &[u8], indent: &[u8], bol: bool) -> Vec<u8> {
    if indent.is_empty() || text.is_empty() {
        return text.to_vec();
    }

    let mut out = Vec::with_capacity(text.len() + indent.len() * (line_starts(text) + 1));

    if bol && text[0] != b'\n' {
        out.extend_from_slice(indent);
    }

    for (i, &byte) in text.iter().enumerate() {
        out.push(byte);
        if byte == b'\n' && text.get(i + 1).is_some_and(|&next| next != b'\n') {
            out.extend_from_slice(indent);
        }
    }

    out
}

/// Number of newlines followed by a non-newline byte.
fn line_starts(text: &[u8]) -> usize {
    text.windows(2)
        .filter(|pair| pair[0] == b'\n' && pair[1] != b'\n')
        .count()
}
