//! Object attribute memory and its port ($2102-$2104, $2138)
//!
//! OAM is 544 bytes: a 512-byte low table (four bytes per sprite) and a
//! 32-byte high table (two bits per sprite). The port keeps a 10-bit byte
//! pointer whose bit 0 selects the low or high byte of the current word.
//! Low-table writes are buffered: the even byte goes to a latch and both
//! bytes are committed together on the odd write. High-table writes go
//! straight through.
//!
//! Reads advance the pointer too, so the pointer lives in a `Cell` to keep
//! register reads on `&self`.

use serde::{Deserialize, Serialize};
use std::cell::Cell;

pub const OAM_SIZE: usize = 0x220;
const LOW_TABLE_SIZE: u16 = 0x200;
const POINTER_MASK: u16 = 0x3FF;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Oam {
    bytes: Vec<u8>,
    /// OAMADDL/OAMADDH as written: bits 0-8 word address, bit 15 priority rotation
    address: u16,
    /// Word address captured by the last OAMADDL/OAMADDH write
    last_written_addr: u16,
    pointer: Cell<u16>,
    latch: u8,
}

impl Oam {
    pub fn new() -> Self {
        Self {
            bytes: vec![0; OAM_SIZE],
            address: 0,
            last_written_addr: 0,
            pointer: Cell::new(0),
            latch: 0,
        }
    }

    /// $2102 OAMADDL
    pub fn set_address_low(&mut self, data: u8) {
        self.address = (self.address & 0xFF00) | data as u16;
        self.reload();
    }

    /// $2103 OAMADDH: bit 0 is address bit 8, bit 7 enables priority rotation
    pub fn set_address_high(&mut self, data: u8) {
        self.address = (self.address & 0x00FF) | (((data & 0x81) as u16) << 8);
        self.reload();
    }

    fn reload(&mut self) {
        let word = self.address & 0x01FF;
        self.last_written_addr = word;
        self.pointer.set(word << 1);
    }

    /// $2104 OAMDATA
    pub fn write(&mut self, data: u8) {
        let ptr = self.pointer.get();
        if ptr & 1 == 0 {
            self.latch = data;
        }

        if ptr >= LOW_TABLE_SIZE {
            self.bytes[high_table_index(ptr)] = data;
        } else if ptr & 1 == 1 {
            self.bytes[(ptr - 1) as usize] = self.latch;
            self.bytes[ptr as usize] = data;
        }

        self.advance();
    }

    /// $2138 OAMDATAREAD
    pub fn read(&self) -> u8 {
        let ptr = self.pointer.get();
        let value = if ptr >= LOW_TABLE_SIZE {
            self.bytes[high_table_index(ptr)]
        } else {
            self.bytes[ptr as usize]
        };
        self.advance();
        value
    }

    fn advance(&self) {
        self.pointer.set((self.pointer.get() + 1) & POINTER_MASK);
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Current word address (pointer without the byte-select bit)
    pub fn word_address(&self) -> u16 {
        self.pointer.get() >> 1
    }

    /// True when the next access hits the high byte of the current word
    pub fn flip(&self) -> bool {
        self.pointer.get() & 1 != 0
    }

    pub fn last_written_addr(&self) -> u16 {
        self.last_written_addr
    }

    pub fn priority_rotation(&self) -> bool {
        self.address & 0x8000 != 0
    }
}

impl Default for Oam {
    fn default() -> Self {
        Self::new()
    }
}

/// The 32-byte high table repeats across pointer values $200-$3FF
fn high_table_index(ptr: u16) -> usize {
    (LOW_TABLE_SIZE + (ptr & 0x1F)) as usize
}
