// SPDX-License-Identifier: Unlicense

//! One process-wide tracer, for firmware that keeps a single global error slot.
//!
//! Output is dropped until a sink is installed, but the error slot works
//! from the start.

use super::config::Config;
use super::tracer::{Trace, Tracer};
use super::Level;
use crate::errno::state::ErrorState;
use crate::errno::ErrorCode;
use crate::util::locked::Locked;

use spin::Lazy;

use core::fmt::{self, Arguments, Write};

/// A sink that outlives the program, such as a UART.
pub type SinkRef = &'static mut (dyn Write + Send);

/// Sink of the global tracer.
pub struct Port(Option<SinkRef>);

impl Write for Port {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        match &mut self.0 {
            Some(sink) => sink.write_str(s),
            None => Ok(()),
        }
    }
}

static TRACER: Lazy<Locked<Tracer<Port>>> = Lazy::new(|| Locked::new(Tracer::new(Port(None))));

/// Send the trace to `sink`, returning the previous one.
pub fn install(sink: SinkRef) -> Option<SinkRef> {
    with(move |t| t.replace_sink(Port(Some(sink))).0)
}

/// Stop writing the trace anywhere, returning the sink.
pub fn uninstall() -> Option<SinkRef> {
    with(|t| t.replace_sink(Port(None)).0)
}

/// Replace the configuration of the global tracer.
pub fn configure(config: Config) {
    with(|t| t.set_config(config))
}

/// Snapshot of the global error slot.
pub fn state() -> ErrorState {
    with(|t| *t.state())
}

/// Run `f` with the global tracer locked.
pub fn with<R>(f: impl FnOnce(&mut Tracer<Port>) -> R) -> R {
    TRACER.with(f)
}

/// Run `f` only if nobody holds the global tracer.
pub fn try_with<R>(f: impl FnOnce(&mut Tracer<Port>) -> R) -> Option<R> {
    TRACER.try_lock().map(|mut t| f(&mut *t))
}

/// Handle on the global tracer, for the logging and control-flow macros.
///
/// ```ignore
/// use liberrtrace::{raise, ErrorCode, Global};
///
/// fn spi_transfer(byte: u8) -> liberrtrace::Result<u8> {
///     if byte == 0xff {
///         raise!(Global, ErrorCode::SPI, "bus floating");
///     }
///     Ok(byte)
/// }
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct Global;

impl Trace for Global {
    fn set_error(&mut self, code: ErrorCode, message: &'static str) {
        with(|t| t.set_error(code, message))
    }

    fn clear_error(&mut self) {
        with(|t| t.clear_error())
    }

    fn has_error(&self) -> bool {
        with(|t| t.has_error())
    }

    fn current(&self) -> ErrorCode {
        with(|t| t.state().current())
    }

    fn record(&mut self, level: Level, file: &str, line: u32, message: Option<Arguments<'_>>) {
        with(|t| t.record(level, file, line, message))
    }

    fn clear_and_log(&mut self, file: &str, line: u32) {
        with(|t| t.clear_and_log(file, line))
    }
}
