// SPDX-License-Identifier: Unlicense

//! Error tracing for microcontroller firmware.
//!
//! A single error slot, a registry of error names and a formatter which
//! writes a trace of where errors were raised to a serial-like sink.
//!
//! ```text
//! :: ERR: (9 main.rs:13)| (9:InputErr)user typed 0x61
//! :: ERR: (9 main.rs:31)| (253:NoNew)
//! :: ERR: (252 main.rs:40)| (252:Cleared Error)
//! ```
//!
//! The first reporter of an error prints the full detail, every caller
//! further up sees only `NoNew`.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
#[macro_use]
extern crate claim;

#[macro_use]
pub mod debug;
#[macro_use]
pub mod flow;

pub mod device;
pub mod errno;
pub mod util;

pub use debug::config::{Config, LevelFilter, ParseLevelError};
pub use debug::logger::Global;
pub use debug::tracer::{Trace, Tracer};
pub use debug::Level;
pub use errno::codes::{name_of, Registry};
pub use errno::state::ErrorState;
pub use errno::ErrorCode;
pub use util::result::{Fault, Result};
