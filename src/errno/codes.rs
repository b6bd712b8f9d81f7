// SPDX-License-Identifier: Unlicense

//! Names of error codes.

use super::ErrorCode;

/// Printed for any code missing from the registry.
pub const UNKNOWN_NAME: &str = "UnknownErr";

/// The table behind [`Registry::DEFAULT`].
pub const DEFAULT_ENTRIES: &[(ErrorCode, &str)] = &[
    (ErrorCode::NOERR, "NoErr"),
    // hardware and communication
    (ErrorCode::BASE, "BaseErr"),
    (ErrorCode::TIMEOUT, "TimeoutErr"),
    (ErrorCode::SERIAL, "SerialErr"),
    (ErrorCode::SPI, "SpiErr"),
    (ErrorCode::I2C, "I2cErr"),
    (ErrorCode::COMMUNICATION, "ComErr"),
    (ErrorCode::CONFIG, "ConfigErr"),
    (ErrorCode::PIN, "PinErr"),
    (ErrorCode::INPUT, "InputErr"),
    // software, as numbered by older firmware
    (ErrorCode(20), "TypeErr"),
    (ErrorCode(21), "ValueErr"),
    (ErrorCode(22), "AssertErr"),
    // software
    (ErrorCode::TYPE, "TypeErr"),
    (ErrorCode::VALUE, "ValueErr"),
    (ErrorCode::ASSERT, "AssertErr"),
    (ErrorCode::TESTFAIL, "TestFail"),
    // sentinels
    (ErrorCode::CLEARED, "Cleared Error"),
    (ErrorCode::NONEW, "NoNew"),
    (ErrorCode::EMPTY, ""),
    (ErrorCode::UNKNOWN, UNKNOWN_NAME),
];

/// Maps error codes to the names printed in a trace.
///
/// Firmware with its own numbering supplies its own table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Registry {
    entries: &'static [(ErrorCode, &'static str)],
}

impl Registry {
    /// The stock numbering.
    pub const DEFAULT: Registry = Registry::new(DEFAULT_ENTRIES);

    /// A registry over a static table. Earlier entries win on duplicates.
    pub const fn new(entries: &'static [(ErrorCode, &'static str)]) -> Self {
        Registry { entries }
    }

    /// Name of a registered code.
    pub fn lookup(&self, code: ErrorCode) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, name)| *name)
    }

    /// Name of any code, falling back to `UnknownErr`.
    pub fn name_of(&self, code: ErrorCode) -> &'static str {
        self.lookup(code).unwrap_or(UNKNOWN_NAME)
    }

    /// All registered codes and names.
    pub fn entries(&self) -> &'static [(ErrorCode, &'static str)] {
        self.entries
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::DEFAULT
    }
}

/// Name of `code` in the stock numbering.
pub fn name_of(code: ErrorCode) -> &'static str {
    Registry::DEFAULT.name_of(code)
}

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;
    use std::vec::Vec;

    #[test]
    fn stock_names() {
        let expected = [
            (0, "NoErr"),
            (1, "BaseErr"),
            (2, "TimeoutErr"),
            (3, "SerialErr"),
            (4, "SpiErr"),
            (5, "I2cErr"),
            (6, "ComErr"),
            (7, "ConfigErr"),
            (8, "PinErr"),
            (9, "InputErr"),
            (50, "TypeErr"),
            (51, "ValueErr"),
            (52, "AssertErr"),
            (53, "TestFail"),
            (252, "Cleared Error"),
            (253, "NoNew"),
            (254, ""),
            (255, "UnknownErr"),
        ];
        for (code, name) in expected.iter() {
            assert_eq!(name_of(ErrorCode(*code)), *name, "code {}", code);
        }
    }

    #[test]
    fn older_software_codes() {
        assert_eq!(name_of(ErrorCode(20)), "TypeErr");
        assert_eq!(name_of(ErrorCode(21)), "ValueErr");
        assert_eq!(name_of(ErrorCode(22)), "AssertErr");
    }

    #[test]
    fn unregistered_codes_are_unknown() {
        let registered: Vec<u8> = DEFAULT_ENTRIES.iter().map(|(c, _)| c.0).collect();
        for code in 0..=255u8 {
            if !registered.contains(&code) {
                assert_eq!(name_of(ErrorCode(code)), UNKNOWN_NAME);
                assert_none!(Registry::DEFAULT.lookup(ErrorCode(code)));
            }
        }
    }

    #[test]
    fn codes_are_unique() {
        let mut codes: Vec<u8> = DEFAULT_ENTRIES.iter().map(|(c, _)| c.0).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), DEFAULT_ENTRIES.len());
    }

    #[test]
    fn custom_table() {
        const MINE: &[(ErrorCode, &str)] = &[(ErrorCode(100), "MotorStall")];
        let registry = Registry::new(MINE);
        assert_eq!(registry.name_of(ErrorCode(100)), "MotorStall");
        assert_eq!(registry.name_of(ErrorCode::CONFIG), UNKNOWN_NAME);
        assert_some_eq!(registry.lookup(ErrorCode(100)), "MotorStall");
    }
}
