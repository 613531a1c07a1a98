use chrono::{DateTime, Local};
use log::{Level, LevelFilter, Metadata, Record};
use std::collections::VecDeque;
use std::io::Write;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

/// Logger that writes timestamped lines to stderr and keeps the most
/// recent entries for an end-of-run summary
#[derive(Clone)]
pub struct CliLogger {
    entries: Arc<Mutex<VecDeque<LogEntry>>>,
    max_entries: usize,
    level: LevelFilter,
}

impl CliLogger {
    pub fn new(max_entries: usize, level: LevelFilter) -> Self {
        Self {
            entries: Arc::new(Mutex::new(VecDeque::new())),
            max_entries,
            level,
        }
    }

    /// Level for a `-v` count: info, debug, then trace
    pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    pub fn init(self) -> Result<(), log::SetLoggerError> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        Ok(())
    }

    pub fn get_entries(&self) -> Vec<LogEntry> {
        self.entries
            .lock()
            .map(|entries| entries.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Number of retained entries at warn level or above
    pub fn warning_count(&self) -> usize {
        self.get_entries()
            .iter()
            .filter(|entry| entry.level <= Level::Warn)
            .count()
    }
}

impl log::Log for CliLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let entry = LogEntry {
            timestamp: Local::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: format!("{}", record.args()),
        };

        let _ = writeln!(
            std::io::stderr(),
            "{} {:<5} [{}] {}",
            entry.timestamp.format("%H:%M:%S%.3f"),
            entry.level,
            entry.target,
            entry.message
        );

        if let Ok(mut entries) = self.entries.lock() {
            entries.push_back(entry);

            // Keep only the most recent entries
            while entries.len() > self.max_entries {
                entries.pop_front();
            }
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}
