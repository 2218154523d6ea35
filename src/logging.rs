use std::{
    io::{self, Write as _},
    sync::{Mutex, OnceLock, PoisonError, RwLock},
};

use crossterm::style::{StyledContent, Stylize};
use log::{Level, LevelFilter, Log, Metadata, Record};

static LOGGER: OnceLock<AppLogger> = OnceLock::new();

pub fn get_logger() -> &'static AppLogger {
    // default configuration
    const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;
    const DEFAULT_COLORED: bool = true;

    LOGGER.get_or_init(|| AppLogger::new(DEFAULT_LEVEL, DEFAULT_COLORED))
}

/// Installs the logger, letting through everything up to `level`.
pub fn init(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    let logger = get_logger();
    logger.set_min_level(level);
    log::set_logger(logger)?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub level: Level,
    pub message: String,
    pub source: String,
}

impl Message {
    /// `[LEVEL] source: message`, the level colored when `colored` is set.
    pub fn format(&self, colored: bool) -> String {
        let level = format!("[{}]", self.level);
        let level = if colored {
            level_style(self.level, level).to_string()
        } else {
            level
        };

        format!("{} {}: {}", level, self.source, self.message)
    }
}

fn level_style(level: Level, text: String) -> StyledContent<String> {
    match level {
        Level::Error => text.red(),
        Level::Warn => text.yellow(),
        Level::Info => text.white(),
        Level::Debug => text.blue(),
        Level::Trace => text.grey(),
    }
}

/// Writes every record to stderr as it comes.
pub struct AppLogger {
    min_level: RwLock<LevelFilter>,
    colored: bool,
    stderr: Mutex<()>,
}

impl AppLogger {
    fn new(min_level: LevelFilter, colored: bool) -> Self {
        Self {
            min_level: RwLock::new(min_level),
            colored,
            stderr: Mutex::new(()),
        }
    }

    pub fn min_level(&self) -> LevelFilter {
        *self.min_level.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_min_level(&self, level: LevelFilter) {
        *self.min_level.write().unwrap_or_else(PoisonError::into_inner) = level;
    }
}

impl Log for AppLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = Message {
            level: record.level(),
            message: record.args().to_string(),
            source: record.module_path().unwrap_or("unknown").to_string(),
        };

        // keeps lines from different threads apart
        let _guard = self.stderr.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writeln!(io::stderr(), "{}", message.format(self.colored));
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}
