//! File logging for the command line driver
//!
//! Library code only talks to the `log` facade. The driver installs this logger,
//! which writes one line per record to a file in the local data directory.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use log::{LevelFilter, Log, Metadata, Record};

const LOG_DIR_NAME: &str = "CsDocMarkdown";
const LOG_FILE_NAME: &str = "cs_doc_markdown.log";

struct FileLogger {
    file: Mutex<File>,
    level: LevelFilter,
}

impl FileLogger {
    /// Open (and truncate) the log file, creating parent directories as needed
    fn open(file_path: &Path, level: LevelFilter) -> io::Result<Self> {
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(file_path)?;

        Ok(Self {
            file: Mutex::new(file),
            level,
        })
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(
                file,
                "[{}] [{}] {}",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.args()
            );
            let _ = file.flush();
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Platform-specific log file path under the local data directory
pub fn log_file_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(LOG_DIR_NAME).join(LOG_FILE_NAME))
}

/// Install the file logger as the global logger, overwriting logs of the previous run
pub fn init_logger(level: LevelFilter) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = log_file_path().ok_or("Could not determine local data directory")?;
    let logger = FileLogger::open(&path, level)?;

    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(level);

    Ok(path)
}
