// File Logger
// Minimal `log` backend; the terminal belongs to the UI so records go to a file

use anyhow::{anyhow, Context, Result};
use log::{Level, LevelFilter};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

/// Logger that appends every enabled record to a single file
pub struct FileLogger {
    level: LevelFilter,
    file: Mutex<File>,
}

impl FileLogger {
    /// Open `path` for appending and install the logger globally
    pub fn install(path: &Path, level: LevelFilter) -> Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;

        let logger: &'static FileLogger = Box::leak(Box::new(Self {
            level,
            file: Mutex::new(file),
        }));
        log::set_logger(logger).map_err(|e| anyhow!("Failed to install logger: {e}"))?;
        log::set_max_level(level);
        Ok(())
    }
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Trace => "TRA",
        Level::Debug => "DBG",
        Level::Info  => "INF",
        Level::Warn  => "WRN",
        Level::Error => "ERR",
    }
}

/// One log line: `[LVL] target: message`
pub fn format_line(level: Level, target: &str, message: &std::fmt::Arguments) -> String {
    format!("[{}] {}: {}", level_tag(level), target, message)
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "{}", format_line(record.level(), record.target(), record.args()));
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        let line = format_line(Level::Warn, "tab_bar", &format_args!("fell back to {}", "cyan"));
        assert_eq!(line, "[WRN] tab_bar: fell back to cyan");
    }
}
