// SPDX-License-Identifier: Unlicense

//! A stream sink which writes to a PL011 serial port.

use tock_registers::interfaces::{Readable, Writeable};
use tock_registers::registers::{ReadOnly, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use core::fmt;
use core::fmt::Write;

register_bitfields! [u32,
    Flags [
        /// UART busy transmitting.
        BUSY OFFSET(3) NUMBITS(1) [],
        /// Transmit FIFO full.
        TXFF OFFSET(5) NUMBITS(1) [],
    ]
];

register_structs! {
    Pl011 {
        (0x000 => dr: WriteOnly<u32>),
        (0x004 => _reserved0),
        (0x018 => fr: ReadOnly<u32, Flags::Register>),
        (0x01c => @END),
    }
}

/// Represents a UART end-point.
pub struct Uart {
    regs: *const Pl011,
}

unsafe impl Send for Uart {}

impl Uart {
    /// Create a Uart over the registers at `base`.
    ///
    /// UNSAFE: `base` must be the identity-mapped address of a PL011.
    pub const unsafe fn new(base: usize) -> Uart {
        Uart {
            regs: base as *const Pl011,
        }
    }

    fn regs(&self) -> &Pl011 {
        unsafe { &*self.regs }
    }

    /// Write one byte, waiting while the transmit FIFO is full.
    pub fn put(&self, b: u8) {
        while self.regs().fr.is_set(Flags::TXFF) {
            core::hint::spin_loop();
        }
        self.regs().dr.set(b as u32);
    }

    /// Wait until every queued byte has left the wire.
    pub fn flush(&self) {
        while self.regs().fr.is_set(Flags::BUSY) {
            core::hint::spin_loop();
        }
    }
}

impl Write for Uart {
    /// Writes a slice of bytes to Uart, as stream for formatted output.
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for b in s.as_bytes() {
            self.put(*b)
        }
        Ok(())
    }
}
