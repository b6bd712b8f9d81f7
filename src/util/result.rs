// SPDX-License-Identifier: Unlicense

//! Uniform structure for errors and results.

use crate::errno::ErrorCode;

use core::fmt;

/// Why a traced function bailed out.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Fault {
    /// This frame set the error and printed its detail.
    Raised(ErrorCode),
    /// This frame found an error already in the slot.
    Propagated(ErrorCode),
}

impl Fault {
    /// The code in the slot when the fault was taken.
    pub fn code(&self) -> ErrorCode {
        match *self {
            Fault::Raised(code) | Fault::Propagated(code) => code,
        }
    }

    /// The same fault as seen by a caller.
    pub fn propagated(self) -> Fault {
        Fault::Propagated(self.code())
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fault::Raised(code) => write!(f, "raised error {}", code),
            Fault::Propagated(code) => write!(f, "propagated error {}", code),
        }
    }
}

/// Default result type for traced functions.
pub type Result<T> = core::result::Result<T, Fault>;
