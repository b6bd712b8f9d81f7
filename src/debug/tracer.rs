// SPDX-License-Identifier: Unlicense

//! The error slot bound to a sink, and the formatter between them.

use super::config::Config;
use super::Level;
use crate::errno::codes::Registry;
use crate::errno::state::ErrorState;
use crate::errno::ErrorCode;
use crate::util::result::{Fault, Result};

use core::fmt::{self, Arguments, Write};

/// Starts every record on a fresh line.
pub const RECORD_START: &str = "\n\r:: ";

/// Closes the source location.
pub const LOCATION_END: &str = ")| ";

/// Something holding an error slot which can be traced.
///
/// Implemented by an owned [`Tracer`] and by the [`Global`](super::logger::Global)
/// handle; the logging and control-flow macros accept either.
pub trait Trace {
    /// Record `code` and its detail, replacing any previous error.
    fn set_error(&mut self, code: ErrorCode, message: &'static str);

    /// Forget the error.
    fn clear_error(&mut self);

    /// True if an error is in the slot.
    fn has_error(&self) -> bool;

    /// The code that the next error record would print.
    fn current(&self) -> ErrorCode;

    /// Render one record at `level`, with `message` appended.
    fn record(&mut self, level: Level, file: &str, line: u32, message: Option<Arguments<'_>>);

    /// Render an explicit recovery point, then clear the error.
    fn clear_and_log(&mut self, file: &str, line: u32);

    /// Set `code`, report it and hand back the fault to return.
    fn raise(
        &mut self,
        code: ErrorCode,
        file: &str,
        line: u32,
        message: Option<Arguments<'_>>,
    ) -> Fault {
        self.set_error(code, "");
        self.record(Level::Error, file, line, message);
        Fault::Raised(code)
    }

    /// As [`Trace::raise`], keeping `message` in the slot so it survives
    /// a silent configuration and prints again from there.
    fn raise_message(
        &mut self,
        code: ErrorCode,
        message: &'static str,
        file: &str,
        line: u32,
    ) -> Fault {
        self.set_error(code, message);
        self.record(Level::Error, file, line, None);
        Fault::Raised(code)
    }

    /// Fail if an error is already in the slot, optionally reporting it.
    fn check(&mut self, file: &str, line: u32, report: bool) -> Result<()> {
        if !self.has_error() {
            return Ok(());
        }
        let code = self.current();
        if report {
            self.record(Level::Error, file, line, None);
        }
        Err(Fault::Propagated(code))
    }
}

/// Owns the error slot of one unit of work and writes its trace to `W`.
pub struct Tracer<W> {
    sink: W,
    state: ErrorState,
    registry: Registry,
    config: Config,
}

impl<W: Write> Tracer<W> {
    /// Trace everything to `sink` with the stock registry.
    pub fn new(sink: W) -> Self {
        Tracer::with_config(sink, Config::new())
    }

    /// Trace to `sink` as `config` allows.
    pub fn with_config(sink: W, config: Config) -> Self {
        Tracer {
            sink,
            state: ErrorState::new(),
            registry: Registry::DEFAULT,
            config,
        }
    }

    /// Name codes from `registry` instead.
    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = registry;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replace the configuration.
    pub fn set_config(&mut self, config: Config) {
        self.config = config;
    }

    /// Registry used to name codes.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Snapshot of the error slot.
    pub fn state(&self) -> &ErrorState {
        &self.state
    }

    /// The sink.
    pub fn sink(&self) -> &W {
        &self.sink
    }

    /// The sink, mutably.
    pub fn sink_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    /// Swap in a new sink, returning the old one.
    pub fn replace_sink(&mut self, sink: W) -> W {
        core::mem::replace(&mut self.sink, sink)
    }

    /// Give up the sink.
    pub fn into_sink(self) -> W {
        self.sink
    }

    /// Record `code` and its detail, replacing any previous error.
    pub fn set_error(&mut self, code: ErrorCode, message: &'static str) {
        self.state.set(code, message);
    }

    /// Forget the error.
    pub fn clear_error(&mut self) {
        self.state.clear();
    }

    /// True if an error is in the slot.
    pub fn has_error(&self) -> bool {
        self.state.has_error()
    }

    /// Write the head of a record; the caller may stream a message after it.
    ///
    /// Records below the threshold cost one comparison: nothing is written
    /// and the error slot is not touched. An error record prints the slot
    /// and then demotes it to `NONEW`.
    pub fn emit(&mut self, level: Level, file: &str, line: u32) {
        self.render(level, file, line, None);
    }

    /// As [`Tracer::emit`], with `args` appended to the same record.
    pub fn emit_with(&mut self, level: Level, file: &str, line: u32, args: Arguments<'_>) {
        self.render(level, file, line, Some(args));
    }

    /// Render an explicit recovery point, then clear the error.
    pub fn clear_and_log(&mut self, file: &str, line: u32) {
        if self.config.renders(Level::Error) {
            self.state.set(ErrorCode::CLEARED, "");
            self.emit(Level::Error, file, line);
        }
        self.state.clear();
    }

    fn render(&mut self, level: Level, file: &str, line: u32, message: Option<Arguments<'_>>) {
        if !self.config.renders(level) {
            return;
        }
        // A sink that refuses bytes loses the record, nothing else.
        self.write_record(level, file, line, message).unwrap_or(());
        if level == Level::Error {
            self.state.mark_reported();
        }
    }

    fn write_record(
        &mut self,
        level: Level,
        file: &str,
        line: u32,
        message: Option<Arguments<'_>>,
    ) -> fmt::Result {
        write!(
            self.sink,
            "{}{}: ({} {}:{}{}",
            RECORD_START,
            self.config.tag(level),
            self.state.debug_code(),
            file,
            line,
            LOCATION_END
        )?;
        if level == Level::Error {
            let code = self.state.current();
            write!(
                self.sink,
                "({}:{}){}",
                code,
                self.registry.name_of(code),
                self.state.message()
            )?;
        }
        if let Some(args) = message {
            self.sink.write_fmt(args)?;
        }
        Ok(())
    }
}

impl<W: Write> Trace for Tracer<W> {
    fn set_error(&mut self, code: ErrorCode, message: &'static str) {
        Tracer::set_error(self, code, message);
    }

    fn clear_error(&mut self) {
        Tracer::clear_error(self);
    }

    fn has_error(&self) -> bool {
        Tracer::has_error(self)
    }

    fn current(&self) -> ErrorCode {
        self.state.current()
    }

    fn record(&mut self, level: Level, file: &str, line: u32, message: Option<Arguments<'_>>) {
        self.render(level, file, line, message);
    }

    fn clear_and_log(&mut self, file: &str, line: u32) {
        Tracer::clear_and_log(self, file, line);
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;
    use crate::debug::config::LevelFilter;
    use std::string::String;

    fn tracer() -> Tracer<String> {
        Tracer::new(String::new())
    }

    #[test]
    fn debug_record() {
        let mut t = tracer();
        t.emit(Level::Debug, "main.rs", 7);
        assert_eq!(t.sink().as_str(), "\n\r:: DBG: (0 main.rs:7)| ");
    }

    #[test]
    fn info_record_shows_debug_code_only() {
        let mut t = tracer();
        t.set_error(ErrorCode::SPI, "bus stuck");
        t.emit_with(Level::Info, "spi.rs", 40, format_args!("retrying {}", 3));
        assert_eq!(t.sink().as_str(), "\n\r:: INFO: (4 spi.rs:40)| retrying 3");
        assert_eq!(t.state().current(), ErrorCode::SPI);
        assert_eq!(t.state().message(), "bus stuck");
    }

    #[test]
    fn error_reported_once() {
        let mut t = tracer();
        t.set_error(ErrorCode::CONFIG, "bad cfg");
        t.emit(Level::Error, "cfg.rs", 12);
        t.emit(Level::Error, "main.rs", 30);
        assert_eq!(
            t.sink().as_str(),
            "\n\r:: ERR: (7 cfg.rs:12)| (7:ConfigErr)bad cfg\
             \n\r:: ERR: (7 main.rs:30)| (253:NoNew)"
        );
        assert!(t.has_error());
        assert_eq!(t.state().message(), "");
    }

    #[test]
    fn error_without_error() {
        let mut t = tracer();
        t.emit(Level::Error, "a.rs", 1);
        assert_eq!(t.sink().as_str(), "\n\r:: ERR: (0 a.rs:1)| (0:NoErr)");
        assert!(!t.has_error());
    }

    #[test]
    fn unknown_code() {
        let mut t = tracer();
        t.set_error(ErrorCode(99), "");
        t.emit(Level::Error, "a.rs", 1);
        assert!(t.sink().ends_with("(99:UnknownErr)"));
    }

    #[test]
    fn filtered_record_is_free() {
        let mut t = Tracer::with_config(
            String::new(),
            Config::new().with_threshold(LevelFilter::Error),
        );
        t.set_error(ErrorCode::INPUT, "typed q");
        let before = *t.state();
        t.emit(Level::Debug, "a.rs", 1);
        t.emit(Level::Info, "a.rs", 2);
        assert_eq!(t.sink().len(), 0);
        assert_eq!(*t.state(), before);
    }

    #[test]
    fn silent_error_keeps_detail() {
        let mut t = Tracer::with_config(String::new(), Config::silent());
        t.set_error(ErrorCode::INPUT, "typed q");
        t.emit(Level::Error, "a.rs", 1);
        assert_eq!(t.sink().len(), 0);
        assert_eq!(t.state().current(), ErrorCode::INPUT);
    }

    #[test]
    fn clear_and_log_scenario() {
        let mut t = tracer();
        t.set_error(ErrorCode(22), "bad input");
        t.emit(Level::Error, "f.c", 10);
        t.clear_and_log("f.c", 11);
        assert_eq!(
            t.sink().as_str(),
            "\n\r:: ERR: (22 f.c:10)| (22:AssertErr)bad input\
             \n\r:: ERR: (252 f.c:11)| (252:Cleared Error)"
        );
        assert_eq!(*t.state(), ErrorState::new());
    }

    #[test]
    fn clear_and_log_when_silent_still_clears() {
        let mut t = Tracer::with_config(String::new(), Config::silent());
        t.set_error(ErrorCode::PIN, "");
        t.clear_and_log("f.c", 11);
        assert_eq!(t.sink().len(), 0);
        assert!(!t.has_error());
    }

    #[test]
    fn custom_tags_and_registry() {
        const MINE: &[(ErrorCode, &str)] = &[(ErrorCode(100), "MotorStall")];
        let config = Config::new().with_tag(Level::Error, "[ERR]");
        let mut t = Tracer::with_config(String::new(), config).with_registry(Registry::new(MINE));
        t.set_error(ErrorCode(100), "");
        t.emit(Level::Error, "m.rs", 3);
        assert_eq!(t.sink().as_str(), "\n\r:: [ERR]: (100 m.rs:3)| (100:MotorStall)");
    }

    #[test]
    fn failing_sink_still_demotes() {
        struct Refuse;
        impl Write for Refuse {
            fn write_str(&mut self, _: &str) -> fmt::Result {
                Err(fmt::Error)
            }
        }

        let mut t = Tracer::new(Refuse);
        t.set_error(ErrorCode::SERIAL, "");
        t.emit(Level::Error, "a.rs", 1);
        assert_eq!(t.state().current(), ErrorCode::NONEW);
    }

    #[test]
    fn check_and_raise() {
        let mut t = tracer();
        assert_ok!(Trace::check(&mut t, "a.rs", 1, true));
        assert_eq!(t.sink().len(), 0);

        let fault = Trace::raise(&mut t, ErrorCode::TIMEOUT, "a.rs", 2, None);
        assert_eq!(fault, Fault::Raised(ErrorCode::TIMEOUT));

        assert_eq!(
            Trace::check(&mut t, "a.rs", 3, true),
            Err(Fault::Propagated(ErrorCode::NONEW))
        );
        assert!(t.sink().ends_with("\n\r:: ERR: (2 a.rs:3)| (253:NoNew)"));
    }

    #[test]
    fn replace_sink() {
        let mut t = tracer();
        t.emit(Level::Info, "a.rs", 1);
        let old = t.replace_sink(String::new());
        assert!(!old.is_empty());
        assert!(t.into_sink().is_empty());
    }
}
