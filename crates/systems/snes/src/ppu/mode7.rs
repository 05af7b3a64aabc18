//! Mode 7 registers ($211A-$2120) and the PPU multiplier ($2134-$2136)
//!
//! Every mode 7 parameter register is write-twice, low byte first, and all of
//! them share one byte latch: a write stores `data << 8 | latch` into the
//! target and then replaces the latch with `data`. M7HOFS/M7VOFS live at the
//! same addresses as BG1HOFS/BG1VOFS, so every BG1 scroll write also lands
//! here.

use serde::{Deserialize, Serialize};

/// What mode 7 shows outside the 1024x1024 playfield (M7SEL bits 6-7)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScreenOver {
    #[default]
    Wrap,
    Transparent,
    Tile0,
}

impl ScreenOver {
    fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 | 1 => ScreenOver::Wrap,
            2 => ScreenOver::Transparent,
            _ => ScreenOver::Tile0,
        }
    }
}

/// Parameter registers behind the shared latch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode7Param {
    /// $211B M7A
    A,
    /// $211C M7B
    B,
    /// $211D M7C
    C,
    /// $211E M7D
    D,
    /// $211F M7X (center)
    X,
    /// $2120 M7Y (center)
    Y,
    /// $210D M7HOFS
    HorizontalScroll,
    /// $210E M7VOFS
    VerticalScroll,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mode7 {
    pub screen_over: ScreenOver,
    pub h_flip: bool,
    pub v_flip: bool,
    pub a: u16,
    pub b: u16,
    pub c: u16,
    pub d: u16,
    pub x: u16,
    pub y: u16,
    pub horizontal_scroll: u16,
    pub vertical_scroll: u16,
    latch: u8,
}

impl Mode7 {
    pub fn new() -> Self {
        Self::default()
    }

    /// $211A M7SEL
    pub fn set_settings(&mut self, data: u8) {
        self.screen_over = ScreenOver::from_bits(data >> 6);
        self.v_flip = data & 0x02 != 0;
        self.h_flip = data & 0x01 != 0;
    }

    /// Write one byte to a parameter register through the shared latch
    pub fn write(&mut self, param: Mode7Param, data: u8) {
        let value = ((data as u16) << 8) | self.latch as u16;
        self.latch = data;
        *self.param_mut(param) = value;
    }

    pub fn param(&self, param: Mode7Param) -> u16 {
        match param {
            Mode7Param::A => self.a,
            Mode7Param::B => self.b,
            Mode7Param::C => self.c,
            Mode7Param::D => self.d,
            Mode7Param::X => self.x,
            Mode7Param::Y => self.y,
            Mode7Param::HorizontalScroll => self.horizontal_scroll,
            Mode7Param::VerticalScroll => self.vertical_scroll,
        }
    }

    fn param_mut(&mut self, param: Mode7Param) -> &mut u16 {
        match param {
            Mode7Param::A => &mut self.a,
            Mode7Param::B => &mut self.b,
            Mode7Param::C => &mut self.c,
            Mode7Param::D => &mut self.d,
            Mode7Param::X => &mut self.x,
            Mode7Param::Y => &mut self.y,
            Mode7Param::HorizontalScroll => &mut self.horizontal_scroll,
            Mode7Param::VerticalScroll => &mut self.vertical_scroll,
        }
    }

    /// Byte currently held in the shared latch
    pub fn latch(&self) -> u8 {
        self.latch
    }

    /// MPYL/MPYM/MPYH: signed M7A times the signed byte last written to M7B,
    /// as a 24-bit two's complement value
    pub fn multiply_result(&self) -> u32 {
        let product = (self.a as i16 as i32) * ((self.b >> 8) as u8 as i8 as i32);
        (product as u32) & 0x00FF_FFFF
    }
}
