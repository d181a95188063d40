//! Line-by-line conversion of shader sources into `.inc` literal files

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::literal::{literal_line, needs_escaping, output_path};

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("failed to open {path:?}: {source}")]
    OpenInput { path: PathBuf, source: io::Error },

    #[error("failed to create {path:?}: {source}")]
    CreateOutput { path: PathBuf, source: io::Error },

    #[error("failed to read line {line}: {source}")]
    Read { line: usize, source: io::Error },

    #[error("failed to write output: {source}")]
    Write { source: io::Error },
}

/// Summary of one conversion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionReport {
    /// Number of literal lines written
    pub lines: usize,
    /// 1-based numbers of lines copied with a bare `"` or `\`
    pub unescaped_lines: Vec<usize>,
}

/// Convert every line of `reader` into a literal line on `writer`.
///
/// Terminators (`\n` or `\r\n`) are stripped before wrapping; a lone `\r`
/// is line content, not a break. A final line without a terminator is still
/// emitted in full. The writer is flushed on success.
pub fn convert<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
) -> Result<ConversionReport, ConvertError> {
    let mut report = ConversionReport::default();

    for (index, line) in reader.lines().enumerate() {
        let number = index + 1;
        let line = line.map_err(|source| ConvertError::Read { line: number, source })?;

        if needs_escaping(&line) {
            report.unescaped_lines.push(number);
        }

        writeln!(writer, "{}", literal_line(&line))
            .map_err(|source| ConvertError::Write { source })?;
        report.lines = number;
    }

    writer
        .flush()
        .map_err(|source| ConvertError::Write { source })?;

    Ok(report)
}

/// Convert `input` into `<input>.inc`, returning the output path and report.
///
/// The input is opened before the output is created, so a missing input
/// leaves no output file behind. An existing output file is truncated.
pub fn convert_file(input: &Path) -> Result<(PathBuf, ConversionReport), ConvertError> {
    let source = File::open(input).map_err(|source| ConvertError::OpenInput {
        path: input.to_path_buf(),
        source,
    })?;

    let output = output_path(input);
    let target = File::create(&output).map_err(|source| ConvertError::CreateOutput {
        path: output.clone(),
        source,
    })?;
    log::debug!("Converting {:?} -> {:?}", input, output);

    let report = convert(BufReader::new(source), BufWriter::new(target))?;
    log::debug!("Wrote {} literal lines to {:?}", report.lines, output);

    Ok((output, report))
}
