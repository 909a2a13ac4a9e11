use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use tracing::Level;

/// Where diagnostic output goes. A terminal UI owns stdout, so events land
/// in a log file when one is given and on stderr otherwise.
#[derive(Clone, Debug)]
pub enum LogTarget {
    File(Arc<Mutex<File>>),
    Stderr,
}

impl LogTarget {
    /// Append to `path`, creating it if needed.
    pub fn file(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(LogTarget::File(Arc::new(Mutex::new(file))))
    }
}

pub struct LogWriter {
    target: LogTarget,
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &self.target {
            LogTarget::File(file) => file.lock().unwrap_or_else(|err| err.into_inner()).write(buf),
            LogTarget::Stderr => io::stderr().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &self.target {
            LogTarget::File(file) => file.lock().unwrap_or_else(|err| err.into_inner()).flush(),
            LogTarget::Stderr => io::stderr().flush(),
        }
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogTarget {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogWriter {
            target: self.clone(),
        }
    }
}

/// Install the global subscriber. `verbose` raises the level from `WARN` to
/// `DEBUG`. Later calls leave the first subscriber in place.
pub fn init(log_file: Option<&Path>, verbose: bool) -> io::Result<()> {
    let target = match log_file {
        Some(path) => LogTarget::file(path)?,
        None => LogTarget::Stderr,
    };
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(target)
        .with_target(false)
        .with_thread_names(false)
        .with_ansi(false)
        .try_init();
    Ok(())
}
