use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record};
use std::io::Write;

/// Writes log records to stderr with a local timestamp
pub struct CliLogger {
    level: LevelFilter,
}

impl CliLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    pub fn init(self) -> Result<(), log::SetLoggerError> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        Ok(())
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

        let timestamp = Local::now().format("%H:%M:%S");
        let mut stderr = std::io::stderr().lock();
        let _ = match record.level() {
            Level::Info => writeln!(stderr, "{} {}", timestamp, record.args()),
            level => writeln!(
                stderr,
                "{} {:<5} [{}] {}",
                timestamp,
                level,
                record.target(),
                record.args()
            ),
        };
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;

    fn metadata(level: Level) -> Metadata<'static> {
        Metadata::builder().level(level).target("zinerator").build()
    }

    #[test]
    fn test_level_filter() {
        let logger = CliLogger::new(LevelFilter::Warn);
        assert!(logger.enabled(&metadata(Level::Error)));
        assert!(logger.enabled(&metadata(Level::Warn)));
        assert!(!logger.enabled(&metadata(Level::Info)));

        let verbose = CliLogger::new(LevelFilter::Debug);
        assert!(verbose.enabled(&metadata(Level::Debug)));
        assert!(!verbose.enabled(&metadata(Level::Trace)));
    }

    #[test]
    fn test_init_installs_global_logger() {
        CliLogger::new(LevelFilter::Debug).init().unwrap();
        assert_eq!(log::max_level(), LevelFilter::Debug);

        // Only one logger per process
        let second: Result<(), Box<dyn std::error::Error>> =
            CliLogger::new(LevelFilter::Info).init().map_err(Into::into);
        assert!(second.is_err());
    }
}
