// SPDX-License-Identifier: Unlicense

//! Sinks for the trace on bare metal.

pub mod uart;
