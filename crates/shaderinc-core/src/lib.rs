//! shaderinc core - shader source to C string literal conversion
//!
//! This crate provides:
//! - Per-line literal formatting and output path derivation
//! - Streaming conversion over any `BufRead`/`Write` pair
//! - The file-level operation used by the `process_shader` binary

pub mod convert;
pub mod literal;

pub use convert::{ConversionReport, ConvertError, convert, convert_file};
pub use literal::{OUTPUT_SUFFIX, literal_line, needs_escaping, output_path};
