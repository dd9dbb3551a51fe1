//! Logging setup using the `log` facade and `env_logger` backend.
//!
//! Level priority:
//!
//! 1. `RUST_LOG` environment variable (if set)
//! 2. `--quiet` (errors only)
//! 3. `-v` (debug) / `-vv` (trace)
//! 4. The caller's default
//!
//! Output goes to stderr unless a log file is given. The TUI owns the
//! terminal, so interactive play only logs when a file is provided.

use std::env;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use env_logger::{Builder, Target};
use log::LevelFilter;

/// Where log records should go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink<'a> {
    Stderr,
    File(&'a Path),
    /// Logging disabled.
    Off,
}

/// Initialize the global logger.
///
/// Call once, before any logging. Fails only if the log file cannot be
/// created; a second initialization is silently ignored.
pub fn init_logging(verbose: u8, quiet: bool, default: LevelFilter, sink: LogSink<'_>) -> io::Result<()> {
    let mut builder = Builder::new();

    match sink {
        LogSink::Off => {
            builder.filter_level(LevelFilter::Off);
        }
        LogSink::Stderr | LogSink::File(_) => {
            if env::var("RUST_LOG").is_ok() {
                builder.parse_default_env();
            } else {
                builder.filter_level(determine_level(verbose, quiet, default));
            }
        }
    }

    match sink {
        LogSink::File(path) => {
            let file = File::create(path)?;
            builder.target(Target::Pipe(Box::new(file)));
            builder.write_style(env_logger::WriteStyle::Never);
        }
        LogSink::Stderr | LogSink::Off => {
            builder.target(Target::Stderr);
        }
    }

    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} {:<5} [{}] {}",
            buf.timestamp_seconds(),
            record.level(),
            record.module_path().unwrap_or("unknown"),
            record.args()
        )
    });

    if builder.try_init().is_ok() {
        log::debug!("logging initialized at {:?}", log::max_level());
    }
    Ok(())
}

/// Level from CLI flags. `quiet` wins over `verbose`.
fn determine_level(verbose: u8, quiet: bool, default: LevelFilter) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => default,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
