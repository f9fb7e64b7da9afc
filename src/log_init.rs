use log::{Level, Metadata, Record, SetLoggerError};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Appends `[LEVEL] target: message` lines to a file.
struct FileLogger {
    path: PathBuf,
    level: Level,
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&self.path) {
                let _ = writeln!(
                    file,
                    "[{}] {}: {}",
                    record.level(),
                    record.target(),
                    record.args()
                );
            }
        }
    }

    fn flush(&self) {}
}

/// Install a logger that appends records up to `level` to the file at `path`.
///
/// Fails if a logger is already installed.
pub fn init_logger(path: impl Into<PathBuf>, level: Level) -> Result<(), SetLoggerError> {
    let logger = FileLogger {
        path: path.into(),
        level,
    };
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(level.to_level_filter());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;

    #[test]
    fn file_logger_respects_level() {
        let path = std::env::temp_dir().join(format!("temaku-log-{}.txt", std::process::id()));
        let _ = std::fs::remove_file(&path);
        let logger = FileLogger {
            path: path.clone(),
            level: Level::Debug,
        };

        logger.log(
            &Record::builder()
                .level(Level::Debug)
                .target("temaku::scanner")
                .args(format_args!("unknown color"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(Level::Trace)
                .args(format_args!("hidden"))
                .build(),
        );

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "[DEBUG] temaku::scanner: unknown color\n");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn init_logger_sets_max_level_once() {
        let path = std::env::temp_dir().join(format!("temaku-init-{}.txt", std::process::id()));
        let _ = std::fs::remove_file(&path);

        init_logger(&path, Level::Info).unwrap();
        assert_eq!(log::max_level(), log::LevelFilter::Info);

        log::info!(target: "temaku::demo", "ready");
        log::debug!(target: "temaku::demo", "hidden");
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "[INFO] temaku::demo: ready\n");

        assert!(init_logger(&path, Level::Trace).is_err());
        let _ = std::fs::remove_file(&path);
    }
}
