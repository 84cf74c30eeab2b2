use log::{Level, LevelFilter, Metadata, Record};

struct StderrLogger {
    max_level: Level,
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Route log records to stderr, keeping stdout free for program output.
pub fn init_logger(level: LevelFilter) {
    let logger = StderrLogger {
        max_level: level.to_level().unwrap_or(Level::Error),
    };
    log::set_boxed_logger(Box::new(logger)).unwrap();
    log::set_max_level(level);
}
