//! shaderinc - embed shader sources in C as string literal lists
//!
//! The conversion itself lives in `shaderinc-core`; this crate adds the
//! user configuration and the `process_shader` binary.
//!
//! ```sh
//! process_shader shaders/basic.frag   # writes shaders/basic.frag.inc
//! ```

pub mod config;

pub use config::{Config, ConfigError, LintConfig, LogConfig};
pub use shaderinc_core::{ConversionReport, ConvertError, convert, convert_file, output_path};
