use gmaze::{registry::UnknownStrategy, CellId, GenerationError};
use thiserror::Error;

use crate::settings::SettingsError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Settings error; {0}")]
    Settings(#[from] SettingsError),
    #[error("Logger error; {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error(transparent)]
    UnknownStrategy(#[from] UnknownStrategy),
    #[error("Generation error; {0}")]
    Generation(#[from] GenerationError),
    #[error("Maze of {0}x{1} cells is too small, it needs at least two cells")]
    TooSmall(usize, usize),
    #[error("No path from cell {start} to cell {end}")]
    Unsolvable { start: CellId, end: CellId },
}

#[cfg(test)]
mod tests {
    use log::{Log, Metadata, Record};

    use super::*;

    struct Silent;

    impl Log for Silent {
        fn enabled(&self, _: &Metadata) -> bool {
            false
        }

        fn log(&self, _: &Record) {}

        fn flush(&self) {}
    }

    static SILENT: Silent = Silent;

    #[test]
    fn second_logger_is_reported() {
        let _ = log::set_logger(&SILENT);
        let error: Error = log::set_logger(&SILENT).unwrap_err().into();

        assert!(matches!(error, Error::Logger(_)));
        assert!(error.to_string().starts_with("Logger error; "));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn settings_errors_convert() {
        let error: Error = SettingsError::LogLevel("loud".to_string()).into();
        assert_eq!(
            error.to_string(),
            "Settings error; Unknown log level in settings: loud"
        );
    }
}
