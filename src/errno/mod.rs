// SPDX-License-Identifier: Unlicense

//! Error codes and the error slot.
//!
//! Codes are partitioned into ranges:
//! - `0`: no error.
//! - `1..=9`: hardware and communication faults.
//! - `50..=53`: software faults (`20..=22` in older firmware).
//! - `252..=255`: sentinels with special meaning to the formatter.

pub mod codes;
pub mod state;

use core::fmt;

/// Small integer identifying an error category.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ErrorCode(pub u8);

impl ErrorCode {
    /// No error has occurred.
    pub const NOERR: ErrorCode = ErrorCode(0);
    /// Generic fault.
    pub const BASE: ErrorCode = ErrorCode(1);
    /// An operation timed out.
    pub const TIMEOUT: ErrorCode = ErrorCode(2);
    /// Serial port fault.
    pub const SERIAL: ErrorCode = ErrorCode(3);
    /// SPI bus fault.
    pub const SPI: ErrorCode = ErrorCode(4);
    /// I2C bus fault.
    pub const I2C: ErrorCode = ErrorCode(5);
    /// Other communication fault.
    pub const COMMUNICATION: ErrorCode = ErrorCode(6);
    /// Bad configuration.
    pub const CONFIG: ErrorCode = ErrorCode(7);
    /// Pin misuse.
    pub const PIN: ErrorCode = ErrorCode(8);
    /// Bad input.
    pub const INPUT: ErrorCode = ErrorCode(9);

    /// Value of the wrong type.
    pub const TYPE: ErrorCode = ErrorCode(50);
    /// Value out of range.
    pub const VALUE: ErrorCode = ErrorCode(51);
    /// An assertion failed.
    pub const ASSERT: ErrorCode = ErrorCode(52);
    /// A self test failed.
    pub const TESTFAIL: ErrorCode = ErrorCode(53);

    /// Marks an explicit recovery point in the trace.
    pub const CLEARED: ErrorCode = ErrorCode(252);
    /// The error has already been printed.
    pub const NONEW: ErrorCode = ErrorCode(253);
    /// An error with nothing to print.
    pub const EMPTY: ErrorCode = ErrorCode(254);
    /// Unknown error.
    pub const UNKNOWN: ErrorCode = ErrorCode(255);

    /// True unless this is `NOERR`.
    pub const fn is_err(self) -> bool {
        self.0 != 0
    }

    /// True for the reserved codes `252..=255`.
    pub const fn is_sentinel(self) -> bool {
        self.0 >= Self::CLEARED.0
    }
}

impl From<u8> for ErrorCode {
    fn from(code: u8) -> Self {
        ErrorCode(code)
    }
}

impl From<ErrorCode> for u8 {
    fn from(code: ErrorCode) -> u8 {
        code.0
    }
}

/// Prints the bare number, as it appears in a trace.
impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
