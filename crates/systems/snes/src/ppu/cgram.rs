//! Palette memory and its port ($2121, $2122, $213B)

use serde::{Deserialize, Serialize};
use std::cell::Cell;

/// 256 colors, 15-bit BGR, two bytes each
pub const CGRAM_SIZE: usize = 512;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cgram {
    bytes: Vec<u8>,
    /// Color index
    address: Cell<u8>,
    /// Next write/read is the high byte
    high: Cell<bool>,
    /// Low byte held until the high byte arrives
    latch: u8,
}

impl Cgram {
    pub fn new() -> Self {
        Self {
            bytes: vec![0; CGRAM_SIZE],
            address: Cell::new(0),
            high: Cell::new(false),
            latch: 0,
        }
    }

    /// $2121 CGADD
    pub fn set_address(&mut self, data: u8) {
        self.address.set(data);
        self.high.set(false);
    }

    /// $2122 CGDATA
    pub fn write(&mut self, data: u8) {
        if self.high.get() {
            let index = self.address.get() as usize * 2;
            self.bytes[index] = self.latch;
            self.bytes[index + 1] = data & 0x7F;
            self.address.set(self.address.get().wrapping_add(1));
        } else {
            self.latch = data;
        }
        self.high.set(!self.high.get());
    }

    /// $213B RDCGRAM
    pub fn read(&self) -> u8 {
        let index = self.address.get() as usize * 2;
        let value = if self.high.get() {
            self.address.set(self.address.get().wrapping_add(1));
            self.bytes[index + 1]
        } else {
            self.bytes[index]
        };
        self.high.set(!self.high.get());
        value
    }

    /// 15-bit color at a palette index
    pub fn color(&self, index: u8) -> u16 {
        let i = index as usize * 2;
        u16::from_le_bytes([self.bytes[i], self.bytes[i + 1]])
    }

    pub fn address(&self) -> u8 {
        self.address.get()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl Default for Cgram {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cgram_write() {
        let mut cgram = Cgram::new();
        cgram.set_address(0x01);

        cgram.write(0xFF);
        assert_eq!(cgram.bytes()[2], 0x00, "low byte waits for the high byte");
        cgram.write(0xFF);

        assert_eq!(cgram.bytes()[2], 0xFF);
        assert_eq!(cgram.bytes()[3], 0x7F);
        assert_eq!(cgram.color(1), 0x7FFF);
        assert_eq!(cgram.address(), 0x02);
    }

    #[test]
    fn test_address_write_resets_byte_select() {
        let mut cgram = Cgram::new();
        cgram.write(0x12);
        cgram.set_address(0x00);
        cgram.write(0x34);
        cgram.write(0x05);
        assert_eq!(cgram.color(0), 0x0534);
    }

    #[test]
    fn test_read_back() {
        let mut cgram = Cgram::new();
        cgram.set_address(0xFF);
        cgram.write(0x1F);
        cgram.write(0x00);
        assert_eq!(cgram.address(), 0x00, "index wraps after color 255");

        cgram.set_address(0xFF);
        assert_eq!(cgram.read(), 0x1F);
        assert_eq!(cgram.read(), 0x00);
        assert_eq!(cgram.address(), 0x00);
    }
}
