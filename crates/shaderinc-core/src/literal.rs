//! String literal formatting
//!
//! Each shader line becomes one C string literal carrying its own `\n`
//! escape, so a sequence of generated lines can sit inside an array
//! initializer and concatenate back into the shader text.

use std::path::{Path, PathBuf};

/// Suffix appended to the input file name to form the output path
pub const OUTPUT_SUFFIX: &str = ".inc";

/// Characters copied into the literal verbatim even though C would need them escaped
const UNESCAPED_CHARS: [char; 2] = ['"', '\\'];

/// Derive the output path by appending [`OUTPUT_SUFFIX`] to the whole file name.
///
/// `shaders/basic.frag` becomes `shaders/basic.frag.inc`. Operates on the raw
/// `OsStr` so non-UTF-8 paths survive.
pub fn output_path(input: &Path) -> PathBuf {
    let mut path = input.as_os_str().to_os_string();
    path.push(OUTPUT_SUFFIX);
    PathBuf::from(path)
}

/// Wrap a line (terminator already removed) as `"<line>\n"`.
///
/// The `\n` is the two characters backslash and `n`. Quotes and backslashes
/// inside `line` are not escaped.
pub fn literal_line(line: &str) -> String {
    let mut literal = String::with_capacity(line.len() + 4);
    literal.push('"');
    literal.push_str(line);
    literal.push_str("\\n\"");
    literal
}

/// True when the line holds a `"` or `\` that ends up unescaped in the literal
pub fn needs_escaping(line: &str) -> bool {
    line.contains(UNESCAPED_CHARS)
}
