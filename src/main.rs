//! process_shader - turn a shader source into an includable C literal list
//!
//! Usage: `process_shader <shader_file>` writes `<shader_file>.inc`, one
//! `"<line>\n"` literal per source line.

use std::path::PathBuf;

use anyhow::Context;
use log::LevelFilter;
use shaderinc::{Config, convert_file};

fn main() -> anyhow::Result<()> {
    let (config, config_error) = Config::load();
    let level = config.log.level_filter();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(level.unwrap_or(LevelFilter::Warn).as_str()),
    )
    .init();

    if let Some(e) = config_error {
        log::warn!("{}, using defaults", e);
    }
    if level.is_none() {
        log::warn!("Unknown log level {:?} in config, using warn", config.log.level);
    }

    let mut args = std::env::args_os().skip(1);
    let Some(shader_file) = args.next().map(PathBuf::from) else {
        eprintln!("No file provided");
        std::process::exit(1);
    };
    let extra = args.count();
    if extra > 0 {
        log::debug!("Ignoring {} extra argument(s)", extra);
    }

    let (output, report) = convert_file(&shader_file)
        .with_context(|| format!("Could not convert {}", shader_file.display()))?;

    if config.lint.warn_unescaped {
        for line in &report.unescaped_lines {
            log::warn!(
                "{}:{}: quote or backslash copied into literal unescaped",
                shader_file.display(),
                line
            );
        }
    }

    log::info!("Wrote {} lines to {}", report.lines, output.display());
    Ok(())
}
