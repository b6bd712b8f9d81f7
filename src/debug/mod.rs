// SPDX-License-Identifier: Unlicense

//! Render the error trace.
//!
//! Every record starts on a fresh line:
//!
//! ```text
//! \n\r:: LEVEL: (<debug_code> <file>:<line>)| (<code>:<Name>)<message>
//! ```
//!
//! The `(<code>:<Name>)<message>` annotation is only printed for errors.

pub mod config;
pub mod facade;
pub mod logger;
pub mod tracer;

use enum_map::Enum;

/// Decreasingly verbose levels of a record.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Enum)]
pub enum Level {
    /// Something went wrong.
    Error,
    /// Notable milestone.
    Info,
    /// Detailed understanding of events.
    Debug,
}

impl Level {
    /// Numeric verbosity, compared against a [`config::LevelFilter`].
    pub const fn value(self) -> u8 {
        match self {
            Level::Error => 30,
            Level::Info => 40,
            Level::Debug => 50,
        }
    }
}

/// Render a record at the given level, with an optional message.
#[macro_export]
macro_rules! log {
    ($t:expr, $lvl:expr) => ({
        #[allow(unused_imports)]
        use $crate::debug::tracer::Trace as _;
        ($t).record($lvl, file!(), line!(), None)
    });
    ($t:expr, $lvl:expr, $($arg:tt)+) => ({
        #[allow(unused_imports)]
        use $crate::debug::tracer::Trace as _;
        ($t).record($lvl, file!(), line!(), Some(format_args!($($arg)+)))
    })
}

/// Render an error record, reporting the error slot.
#[macro_export]
macro_rules! log_err {
    ($t:expr) => (
        $crate::log!($t, $crate::debug::Level::Error)
    );
    ($t:expr, $($arg:tt)+) => (
        $crate::log!($t, $crate::debug::Level::Error, $($arg)+)
    )
}

/// Render an info record.
#[macro_export]
macro_rules! info {
    ($t:expr, $($arg:tt)+) => (
        $crate::log!($t, $crate::debug::Level::Info, $($arg)+)
    )
}

/// Render a debug record.
#[macro_export]
macro_rules! debug {
    ($t:expr, $($arg:tt)+) => (
        $crate::log!($t, $crate::debug::Level::Debug, $($arg)+)
    )
}
