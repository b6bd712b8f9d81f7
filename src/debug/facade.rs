// SPDX-License-Identifier: Unlicense

//! Route the `log` crate through the global tracer.
//!
//! Drivers written against `log` then share the error trace. An error
//! record reports the global error slot like any other.

use super::logger;
use super::tracer::Trace;
use super::Level;

use log::{LevelFilter, Metadata, Record, SetLoggerError};

/// `log` front end of the global tracer.
pub struct Facade;

static FACADE: Facade = Facade;

/// The tracer level a `log` level renders at.
pub fn level_of(level: log::Level) -> Level {
    match level {
        log::Level::Error => Level::Error,
        log::Level::Warn | log::Level::Info => Level::Info,
        log::Level::Debug | log::Level::Trace => Level::Debug,
    }
}

impl log::Log for Facade {
    fn enabled(&self, metadata: &Metadata) -> bool {
        let level = level_of(metadata.level());
        logger::try_with(|t| t.config().renders(level)).unwrap_or(false)
    }

    fn log(&self, record: &Record) {
        let level = level_of(record.level());
        let file = record.file().unwrap_or_else(|| record.target());
        let line = record.line().unwrap_or(0);
        // Held already means we pre-empted a record in flight; drop this one.
        logger::try_with(|t| t.record(level, file, line, Some(*record.args())));
    }

    fn flush(&self) {}
}

/// Install the global tracer as the `log` logger.
pub fn init() -> Result<(), SetLoggerError> {
    log::set_logger(&FACADE).map(|()| log::set_max_level(LevelFilter::Trace))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels() {
        assert_eq!(level_of(log::Level::Error), Level::Error);
        assert_eq!(level_of(log::Level::Warn), Level::Info);
        assert_eq!(level_of(log::Level::Info), Level::Info);
        assert_eq!(level_of(log::Level::Debug), Level::Debug);
        assert_eq!(level_of(log::Level::Trace), Level::Debug);
    }
}
