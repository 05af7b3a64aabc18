//! VRAM and its port ($2115-$2119, $2139/$213A)
//!
//! VRAM is 32K words, stored here as 64KB little-endian. The port address is
//! a word address; VMAIN picks the step (1, 32 or 128 words), whether the
//! step happens after the low or the high byte access, and an optional
//! address remapping used for bitplane conversion.
//!
//! Reads go through a one-word prefetch buffer that is refilled on address
//! writes and on each incrementing read.

use serde::{Deserialize, Serialize};
use std::cell::Cell;

pub const VRAM_SIZE: usize = 0x10000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vram {
    bytes: Vec<u8>,
    /// Word address from VMADDL/VMADDH
    address: Cell<u16>,
    /// VMAIN bit 7: step after the high byte access instead of the low one
    increment_on_high: bool,
    increment_step: u16,
    /// VMAIN bits 2-3
    remap: u8,
    prefetch: Cell<u16>,
}

impl Vram {
    pub fn new() -> Self {
        Self {
            bytes: vec![0; VRAM_SIZE],
            address: Cell::new(0),
            increment_on_high: false,
            increment_step: 1,
            remap: 0,
            prefetch: Cell::new(0),
        }
    }

    /// $2115 VMAIN
    pub fn set_control(&mut self, data: u8) {
        self.increment_on_high = data & 0x80 != 0;
        self.remap = (data >> 2) & 0x03;
        self.increment_step = match data & 0x03 {
            0 => 1,
            1 => 32,
            _ => 128,
        };
    }

    /// $2116 VMADDL
    pub fn set_address_low(&mut self, data: u8) {
        self.address.set((self.address.get() & 0xFF00) | data as u16);
        self.fill_prefetch();
    }

    /// $2117 VMADDH
    pub fn set_address_high(&mut self, data: u8) {
        self.address.set((self.address.get() & 0x00FF) | ((data as u16) << 8));
        self.fill_prefetch();
    }

    /// $2118 VMDATAL
    pub fn write_low(&mut self, data: u8) {
        let index = self.byte_index();
        self.bytes[index] = data;
        if !self.increment_on_high {
            self.step();
        }
    }

    /// $2119 VMDATAH
    pub fn write_high(&mut self, data: u8) {
        let index = self.byte_index() + 1;
        self.bytes[index] = data;
        if self.increment_on_high {
            self.step();
        }
    }

    /// $2139 RDVRAML
    pub fn read_low(&self) -> u8 {
        let value = self.prefetch.get() as u8;
        if !self.increment_on_high {
            self.fill_prefetch();
            self.step();
        }
        value
    }

    /// $213A RDVRAMH
    pub fn read_high(&self) -> u8 {
        let value = (self.prefetch.get() >> 8) as u8;
        if self.increment_on_high {
            self.fill_prefetch();
            self.step();
        }
        value
    }

    pub fn address(&self) -> u16 {
        self.address.get()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Little-endian word at a byte address, wrapping within VRAM
    pub fn read_word(&self, byte_addr: u16) -> u16 {
        let lo = self.bytes[byte_addr as usize];
        let hi = self.bytes[byte_addr.wrapping_add(1) as usize];
        u16::from_le_bytes([lo, hi])
    }

    fn step(&self) {
        self.address
            .set(self.address.get().wrapping_add(self.increment_step));
    }

    fn fill_prefetch(&self) {
        let index = self.byte_index();
        self.prefetch
            .set(u16::from_le_bytes([self.bytes[index], self.bytes[index + 1]]));
    }

    /// Byte offset of the low half of the current word
    fn byte_index(&self) -> usize {
        (self.translate(self.address.get()) & 0x7FFF) as usize * 2
    }

    fn translate(&self, addr: u16) -> u16 {
        match self.remap {
            0 => addr,
            1 => (addr & 0xFF00) | ((addr & 0x001F) << 3) | ((addr >> 5) & 0x07),
            2 => (addr & 0xFE00) | ((addr & 0x003F) << 3) | ((addr >> 6) & 0x07),
            _ => (addr & 0xFC00) | ((addr & 0x007F) << 3) | ((addr >> 7) & 0x07),
        }
    }
}

impl Default for Vram {
    fn default() -> Self {
        Self::new()
    }
}
