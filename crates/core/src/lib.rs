//! Core emulator primitives shared by system crates.
//!
//! - [`cpu_65c816`]: 65C816 register file, memory trait and operand-address
//!   resolution engine
//! - [`ppu`]: planar tile formats
//! - [`logging`]: category/level filtered, rate limited logging

pub mod cpu_65c816;
pub mod logging;
pub mod ppu;
