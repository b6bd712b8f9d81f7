// SPDX-License-Identifier: Unlicense

//! The error slot.

use super::ErrorCode;

/// The one in-flight error.
///
/// `debug_code` mirrors the last code set and survives reporting, so a
/// trace keeps showing which error a call chain is unwinding from after
/// `current` has been demoted to `NONEW`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorState {
    current: ErrorCode,
    debug_code: ErrorCode,
    message: &'static str,
}

impl ErrorState {
    /// A cleared slot.
    pub const fn new() -> Self {
        ErrorState {
            current: ErrorCode::NOERR,
            debug_code: ErrorCode::NOERR,
            message: "",
        }
    }

    /// Record `code`, replacing whatever was there. Unregistered codes are fine.
    pub fn set(&mut self, code: ErrorCode, message: &'static str) {
        self.current = code;
        self.debug_code = code;
        self.message = message;
    }

    /// Forget the error.
    pub fn clear(&mut self) {
        *self = ErrorState::new();
    }

    /// True if the last operation left an error behind.
    pub fn has_error(&self) -> bool {
        self.current.is_err()
    }

    /// The code to be reported next.
    pub fn current(&self) -> ErrorCode {
        self.current
    }

    /// The code last set.
    pub fn debug_code(&self) -> ErrorCode {
        self.debug_code
    }

    /// Detail attached to the current code.
    pub fn message(&self) -> &'static str {
        self.message
    }

    /// Demote after the detail has been printed.
    pub fn mark_reported(&mut self) {
        if self.current.is_err() {
            self.current = ErrorCode::NONEW;
        }
        self.message = "";
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_has_error() {
        let mut state = ErrorState::new();
        assert!(!state.has_error());

        state.set(ErrorCode::CONFIG, "bad cfg");
        assert!(state.has_error());
        assert_eq!(state.current(), ErrorCode::CONFIG);
        assert_eq!(state.debug_code(), ErrorCode::CONFIG);
        assert_eq!(state.message(), "bad cfg");

        state.set(ErrorCode::NOERR, "");
        assert!(!state.has_error());
    }

    #[test]
    fn unregistered_code_is_an_error() {
        let mut state = ErrorState::new();
        state.set(ErrorCode(99), "");
        assert!(state.has_error());
    }

    #[test]
    fn clear_is_idempotent() {
        let mut state = ErrorState::new();
        state.set(ErrorCode::SPI, "bus");
        state.clear();
        let once = state;
        state.clear();
        assert_eq!(state, once);
        assert_eq!(state, ErrorState::new());
        assert!(!state.has_error());
    }

    #[test]
    fn reporting_keeps_debug_code() {
        let mut state = ErrorState::new();
        state.set(ErrorCode::INPUT, "x");
        state.mark_reported();
        assert_eq!(state.current(), ErrorCode::NONEW);
        assert_eq!(state.debug_code(), ErrorCode::INPUT);
        assert_eq!(state.message(), "");
        assert!(state.has_error());
    }

    #[test]
    fn reporting_no_error_stays_clear() {
        let mut state = ErrorState::new();
        state.mark_reported();
        assert_eq!(state, ErrorState::new());
    }
}
