//! WDC 65C816 register file and operand-address resolution
//!
//! This module provides the register/flag state of the 65C816 and the memory
//! trait it talks to. Systems built on the 65C816 (SNES, Apple IIGS, ...) own a
//! `Registers` value and a type implementing `Memory65c816`, and hand both to
//! the functions in [`addressing`] to turn instruction operands into
//! effective addresses.
//!
//! Opcode decoding, cycle accounting and program counter advancement belong
//! to the caller.
//!
//! The 65C816 is a 16-bit extension of the 6502 with:
//! - 16-bit accumulator and index registers (switchable to 8-bit)
//! - 24-bit address space (16MB)
//! - An emulation mode that mimics the 6502's register widths and
//!   zero-page addressing quirks

use serde::{Deserialize, Serialize};

pub mod addressing;

pub use addressing::{resolve, AddressPair, AddressingMode};

/// Mask for the 24-bit address space
pub const ADDRESS_MASK: u32 = 0x00FF_FFFF;

/// Memory interface trait for the 65C816 CPU
///
/// Systems using the 65C816 must implement this trait to provide memory access.
pub trait Memory65c816 {
    /// Read a byte from memory at the given 24-bit address
    fn read(&self, addr: u32) -> u8;

    /// Write a byte to memory at the given 24-bit address
    fn write(&mut self, addr: u32, val: u8);

    /// Read a byte from `bank:offset`
    fn read_bank(&self, bank: u8, offset: u16) -> u8 {
        self.read(bank_address(bank, offset))
    }

    /// Write a byte to `bank:offset`
    fn write_bank(&mut self, bank: u8, offset: u16, val: u8) {
        self.write(bank_address(bank, offset), val);
    }
}

/// Compose a 24-bit address from a bank and a 16-bit offset
#[inline]
pub fn bank_address(bank: u8, offset: u16) -> u32 {
    ((bank as u32) << 16) | offset as u32
}

/// Compose a 24-bit address from its three bytes (high, middle, low)
#[inline]
pub fn long_address(hh: u8, mm: u8, ll: u8) -> u32 {
    ((hh as u32) << 16) | ((mm as u32) << 8) | ll as u32
}

// Status register flags
pub const FLAG_NEGATIVE: u8 = 0b1000_0000;
pub const FLAG_OVERFLOW: u8 = 0b0100_0000;
pub const FLAG_MEMORY: u8 = 0b0010_0000; // m flag: 0=16-bit A, 1=8-bit A
pub const FLAG_INDEX: u8 = 0b0001_0000; // x flag: 0=16-bit X/Y, 1=8-bit X/Y
pub const FLAG_DECIMAL: u8 = 0b0000_1000;
pub const FLAG_IRQ_DISABLE: u8 = 0b0000_0100;
pub const FLAG_ZERO: u8 = 0b0000_0010;
pub const FLAG_CARRY: u8 = 0b0000_0001;

/// 65C816 register file and flag state
///
/// Fields are public so an opcode layer can manipulate them directly; the
/// width-dependent accessors (`get_x`, `get_y`, ...) always honour the current
/// mode, so the address resolution engine never sees a stale high byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registers {
    /// Accumulator register (C: 16-bit, A = low half, B = high half)
    pub c: u16,
    /// X index register (16-bit)
    pub x: u16,
    /// Y index register (16-bit)
    pub y: u16,
    /// Stack pointer (16-bit)
    pub s: u16,
    /// Direct page register (16-bit)
    pub d: u16,
    /// Data bank register (8-bit)
    pub dbr: u8,
    /// Program bank register (K, 8-bit)
    pub pbr: u8,
    /// Program counter (16-bit, combined with PBR for 24-bit address)
    pub pc: u16,
    /// Status register (NVmxDIZC)
    pub status: u8,
    /// Emulation mode flag (true = 6502 emulation mode, false = native 16-bit mode)
    pub emulation: bool,
}

impl Registers {
    /// Power-on register state: emulation mode, 8-bit registers, stack in page 1
    pub fn new() -> Self {
        Self {
            c: 0,
            x: 0,
            y: 0,
            s: 0x01FF,
            d: 0,
            dbr: 0,
            pbr: 0,
            pc: 0,
            status: 0x34,    // m=1, x=1, I=1 (start in 8-bit mode)
            emulation: true, // Start in emulation mode (6502 compatibility)
        }
    }

    /// Reset to power-on state and load PC from the emulation reset vector
    pub fn reset<M: Memory65c816>(&mut self, memory: &M) {
        *self = Self::new();
        let lo = memory.read(0xFFFC) as u16;
        let hi = memory.read(0xFFFD) as u16;
        self.pc = (hi << 8) | lo;
    }

    /// Current 24-bit program counter (K:PC)
    pub fn pc_address(&self) -> u32 {
        bank_address(self.pbr, self.pc)
    }

    /// Check if accumulator is in 8-bit mode
    pub fn is_8bit_a(&self) -> bool {
        self.emulation || (self.status & FLAG_MEMORY) != 0
    }

    /// Check if index registers are in 8-bit mode
    pub fn is_8bit_xy(&self) -> bool {
        self.emulation || (self.status & FLAG_INDEX) != 0
    }

    /// Accumulator low half
    pub fn a(&self) -> u8 {
        (self.c & 0xFF) as u8
    }

    /// Accumulator high half
    pub fn b(&self) -> u8 {
        (self.c >> 8) as u8
    }

    /// Direct page register low byte
    pub fn dl(&self) -> u8 {
        (self.d & 0xFF) as u8
    }

    /// Direct page register high byte
    pub fn dh(&self) -> u8 {
        (self.d >> 8) as u8
    }

    /// Get accumulator value (8 or 16 bit depending on mode)
    pub fn get_a(&self) -> u16 {
        if self.is_8bit_a() {
            self.c & 0xFF
        } else {
            self.c
        }
    }

    /// Set accumulator value (8 or 16 bit depending on mode)
    pub fn set_a(&mut self, val: u16) {
        if self.is_8bit_a() {
            self.c = (self.c & 0xFF00) | (val & 0xFF);
        } else {
            self.c = val;
        }
    }

    /// Get X register value (8 or 16 bit depending on mode)
    pub fn get_x(&self) -> u16 {
        if self.is_8bit_xy() {
            self.x & 0xFF
        } else {
            self.x
        }
    }

    /// Set X register value; the high byte is forced to zero in 8-bit mode
    pub fn set_x(&mut self, val: u16) {
        self.x = if self.is_8bit_xy() { val & 0xFF } else { val };
    }

    /// Get Y register value (8 or 16 bit depending on mode)
    pub fn get_y(&self) -> u16 {
        if self.is_8bit_xy() {
            self.y & 0xFF
        } else {
            self.y
        }
    }

    /// Set Y register value; the high byte is forced to zero in 8-bit mode
    pub fn set_y(&mut self, val: u16) {
        self.y = if self.is_8bit_xy() { val & 0xFF } else { val };
    }

    /// Set the stack pointer; confined to page 1 in emulation mode
    pub fn set_s(&mut self, val: u16) {
        self.s = if self.emulation {
            0x0100 | (val & 0xFF)
        } else {
            val
        };
    }

    /// Write the status register (REP/SEP/PLP path)
    ///
    /// m and x are stuck at 1 in emulation mode. Setting x drops the index
    /// high bytes.
    pub fn set_status(&mut self, val: u8) {
        self.status = if self.emulation {
            val | FLAG_MEMORY | FLAG_INDEX
        } else {
            val
        };
        if self.status & FLAG_INDEX != 0 {
            self.x &= 0xFF;
            self.y &= 0xFF;
        }
    }

    /// Enter or leave emulation mode
    pub fn set_emulation(&mut self, emulation: bool) {
        self.emulation = emulation;
        if emulation {
            self.status |= FLAG_MEMORY | FLAG_INDEX;
            self.x &= 0xFF;
            self.y &= 0xFF;
            self.s = 0x0100 | (self.s & 0xFF);
        }
    }

    /// XCE - exchange the carry and emulation flags
    pub fn exchange_carry_emulation(&mut self) {
        let carry = self.status & FLAG_CARRY != 0;
        if self.emulation {
            self.status |= FLAG_CARRY;
        } else {
            self.status &= !FLAG_CARRY;
        }
        self.set_emulation(carry);
    }

    /// XBA - exchange the accumulator halves, N/Z follow the new low half
    pub fn exchange_b_a(&mut self) {
        self.c = self.c.rotate_left(8);
        self.set_zn_8(self.a());
    }

    /// Set zero and negative flags for 8-bit value
    fn set_zn_8(&mut self, val: u8) {
        if val == 0 {
            self.status |= FLAG_ZERO;
        } else {
            self.status &= !FLAG_ZERO;
        }
        if (val & 0x80) != 0 {
            self.status |= FLAG_NEGATIVE;
        } else {
            self.status &= !FLAG_NEGATIVE;
        }
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}

/// Simple array-backed memory for testing
pub struct ArrayMemory {
    data: Vec<u8>,
}

impl ArrayMemory {
    pub fn new() -> Self {
        Self {
            data: vec![0; 16 * 1024 * 1024], // 16MB address space
        }
    }
}

impl Default for ArrayMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory65c816 for ArrayMemory {
    fn read(&self, addr: u32) -> u8 {
        self.data[(addr & ADDRESS_MASK) as usize]
    }

    fn write(&mut self, addr: u32, val: u8) {
        self.data[(addr & ADDRESS_MASK) as usize] = val;
    }
}
