//! Log sink for the binary: standard output and, optionally, an append-only file.

use crate::config::LogConfig;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum LoggingError {
    #[error("Unable to open log file {}: {}", .path.display(), .source)]
    OpenFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Logger already initialized: {}", .0)]
    Init(#[from] log::SetLoggerError),
}

/// Writes each log line to stdout and to the log file, if there is one.
struct LogWriter {
    file: Option<File>,
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stdout().write_all(buf)?;

        if let Some(file) = &mut self.file {
            file.write_all(buf)?;
        }

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()?;

        if let Some(file) = &mut self.file {
            file.flush()?;
        }

        Ok(())
    }
}

/// Installs the global logger.
pub fn init(config: &LogConfig) -> Result<(), LoggingError> {
    let file = match &config.file {
        Some(path) => Some(
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| LoggingError::OpenFile {
                    path: path.clone(),
                    source,
                })?,
        ),
        None => None,
    };

    env_logger::Builder::new()
        .parse_filters(&config.filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {} - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
                record.target(),
                record.level(),
                record.args(),
            )
        })
        .target(env_logger::Target::Pipe(Box::new(LogWriter { file })))
        .try_init()?;

    Ok(())
}
