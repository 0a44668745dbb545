use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum LogLevel {
    Debug = 0,
    Info = 1,
    Warning = 2,
    Error = 3,
}

impl LogLevel {
    fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }
}

/// Leveled logger for the run.
///
/// Console output goes to stderr so prompts and the report on stdout stay
/// readable. Clones share the same log file.
#[derive(Clone)]
pub struct Logger {
    min_level: LogLevel,
    target: &'static str,
    log_file: Option<Arc<Mutex<std::fs::File>>>,
    console_output: bool,
}

impl Logger {
    /// Creates a new logger with console output only
    pub fn new(min_level: LogLevel) -> Self {
        Logger {
            min_level,
            target: "main",
            log_file: None,
            console_output: true,
        }
    }

    /// Creates a new logger with both console and file output
    pub fn with_file(min_level: LogLevel, file_path: &Path) -> std::io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(file_path)?;

        Ok(Logger {
            log_file: Some(Arc::new(Mutex::new(file))),
            ..Logger::new(min_level)
        })
    }

    /// Same sinks and level, tagged with another component name
    pub fn for_target(&self, target: &'static str) -> Self {
        Logger {
            target,
            ..self.clone()
        }
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    fn format_line(&self, level: LogLevel, message: &str) -> String {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        format!(
            "[{}] [{}] [{}] {}",
            timestamp,
            level.as_str(),
            self.target,
            message
        )
    }

    fn log(&self, level: LogLevel, message: &str) {
        if !self.enabled(level) {
            return;
        }

        let formatted = self.format_line(level, message);

        if self.console_output {
            eprintln!("{}", formatted);
        }

        if let Some(file) = &self.log_file {
            if let Ok(mut f) = file.lock() {
                let _ = writeln!(f, "{}", formatted);
            }
        }
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn warning(&self, message: &str) {
        self.log(LogLevel::Warning, message);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Logger::new(LogLevel::Warning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);
    }

    #[test]
    fn test_logger_default_filters_info() {
        let logger = Logger::default();
        assert!(!logger.enabled(LogLevel::Info));
        assert!(logger.enabled(LogLevel::Warning));
    }

    #[test]
    fn test_target_is_tagged() {
        let logger = Logger::new(LogLevel::Debug).for_target("collector");
        let line = logger.format_line(LogLevel::Info, "station added");
        assert!(line.contains("[INFO] [collector] station added"));
    }

    #[test]
    fn test_file_output_respects_level() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.log");
        let mut logger = Logger::with_file(LogLevel::Info, &path).unwrap();
        logger.console_output = false;

        logger.debug("hidden");
        logger.for_target("chart").warning("station over takt");

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(!contents.contains("hidden"));
        assert!(contents.contains("[WARNING] [chart] station over takt"));
    }
}
