//! SNES CPU wrapper for the 65C816 core
//!
//! Pairs the register file with the SNES bus and exposes operand access for
//! an external opcode dispatcher: resolve an addressing mode, then read or
//! write 8 or 16 bits depending on the accumulator width.

use crate::bus::SnesBus;
use emu_core::cpu_65c816::{resolve, AddressPair, AddressingMode, Memory65c816, Registers};
use emu_core::logging::{log, LogCategory, LogLevel};

/// SNES CPU wrapper
#[derive(Debug, Clone)]
pub struct SnesCpu {
    pub regs: Registers,
    bus: SnesBus,
}

impl SnesCpu {
    pub fn new(bus: SnesBus) -> Self {
        Self {
            regs: Registers::new(),
            bus,
        }
    }

    pub fn reset(&mut self) {
        self.regs.reset(&self.bus);
        log(LogCategory::CPU, LogLevel::Info, || {
            format!("CPU: reset, PC=${:04X}", self.regs.pc)
        });
    }

    /// Effective address of the current instruction's operand
    pub fn operand_address(&self, mode: AddressingMode) -> AddressPair {
        let pair = resolve(mode, &self.regs, &self.bus);
        log(LogCategory::CPU, LogLevel::Trace, || {
            format!(
                "CPU: {:?} at ${:06X} -> ${:06X}/${:06X}",
                mode,
                self.regs.pc_address(),
                pair.low,
                pair.high
            )
        });
        pair
    }

    /// Read the operand: one byte with an 8-bit accumulator, a word otherwise
    pub fn read_operand(&self, mode: AddressingMode) -> u16 {
        let pair = self.operand_address(mode);
        if self.regs.is_8bit_a() {
            self.bus.read(pair.low) as u16
        } else {
            pair.read_word(&self.bus)
        }
    }

    /// Write the operand, honouring the accumulator width
    pub fn write_operand(&mut self, mode: AddressingMode, val: u16) {
        let pair = self.operand_address(mode);
        if self.regs.is_8bit_a() {
            self.bus.write(pair.low, val as u8);
        } else {
            pair.write_word(&mut self.bus, val);
        }
    }

    pub fn bus(&self) -> &SnesBus {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut SnesBus {
        &mut self.bus
    }
}
