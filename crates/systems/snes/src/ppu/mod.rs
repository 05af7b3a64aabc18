//! SNES PPU (Picture Processing Unit) register state
//!
//! Covers the CPU-visible side of the PPU at $2100-$213F:
//! - Background configuration, scroll and window registers ([`background`])
//! - The shared BGnHOFS/BGnVOFS latch ([`scroll`])
//! - Tilemap entry addressing and decoding ([`tilemap`])
//! - Mode 7 parameters and the signed multiplier ([`mode7`])
//! - OAM, VRAM and CGRAM ports ([`oam`], [`vram`], [`cgram`])
//!
//! Pixel composition is left to the caller; [`Ppu::tile_from_background`]
//! hands out everything needed to fetch a background tile's pixels.

pub mod background;
pub mod cgram;
pub mod mode7;
pub mod oam;
pub mod scroll;
pub mod tilemap;
pub mod vram;

use crate::SnesError;
use background::BackgroundData;
use cgram::Cgram;
use emu_core::logging::{log, LogCategory, LogLevel};
use mode7::{Mode7, Mode7Param};
use oam::Oam;
use serde::{Deserialize, Serialize};
use tilemap::BgTile;
use vram::Vram;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ppu {
    /// $2100 INIDISP - bit 7 = force blank, bits 0-3 = brightness
    screen_display: u8,
    backgrounds: BackgroundData,
    mode7: Mode7,
    oam: Oam,
    vram: Vram,
    cgram: Cgram,
    /// $2125 WOBJSEL, kept raw
    obj_window_select: u8,
    /// $212B WOBJLOG, kept raw
    obj_window_logic: u8,
}

impl Ppu {
    pub fn new() -> Self {
        Self {
            screen_display: 0x80, // Start with screen blanked
            backgrounds: BackgroundData::new(),
            mode7: Mode7::new(),
            oam: Oam::new(),
            vram: Vram::new(),
            cgram: Cgram::new(),
            obj_window_select: 0,
            obj_window_logic: 0,
        }
    }

    /// Write to PPU registers
    pub fn write_register(&mut self, addr: u16, val: u8) {
        log(LogCategory::PPU, LogLevel::Trace, || {
            format!("PPU: write ${:04X} = ${:02X}", addr, val)
        });

        match addr {
            // $2100 - INIDISP
            0x2100 => self.screen_display = val,

            // $2102-$2104 - OAMADDL, OAMADDH, OAMDATA
            0x2102 => self.oam.set_address_low(val),
            0x2103 => self.oam.set_address_high(val),
            0x2104 => self.oam.write(val),

            // $2105 - BGMODE, $2106 - MOSAIC
            0x2105 => self.backgrounds.set_bgmode(val),
            0x2106 => self.backgrounds.set_mosaic(val),

            // $2107-$210A - BG1SC..BG4SC
            0x2107..=0x210A => self
                .backgrounds
                .set_screen_base((addr - 0x2107) as usize, val),

            // $210B - BG12NBA, $210C - BG34NBA
            0x210B => self.backgrounds.set_tileset_base(0, val),
            0x210C => self.backgrounds.set_tileset_base(2, val),

            // $210D/$210E - BG1HOFS/BG1VOFS, doubling as M7HOFS/M7VOFS
            0x210D => {
                self.backgrounds.write_horizontal_scroll(0, val);
                self.mode7.write(Mode7Param::HorizontalScroll, val);
            }
            0x210E => {
                self.backgrounds.write_vertical_scroll(0, val);
                self.mode7.write(Mode7Param::VerticalScroll, val);
            }

            // $210F-$2114 - BG2-BG4 scroll
            0x210F | 0x2111 | 0x2113 => {
                let layer = ((addr - 0x210D) / 2) as usize;
                self.backgrounds.write_horizontal_scroll(layer, val);
            }
            0x2110 | 0x2112 | 0x2114 => {
                let layer = ((addr - 0x210E) / 2) as usize;
                self.backgrounds.write_vertical_scroll(layer, val);
            }

            // $2115-$2119 - VMAIN, VMADDL, VMADDH, VMDATAL, VMDATAH
            0x2115 => self.vram.set_control(val),
            0x2116 => self.vram.set_address_low(val),
            0x2117 => self.vram.set_address_high(val),
            0x2118 => self.vram.write_low(val),
            0x2119 => self.vram.write_high(val),

            // $211A - M7SEL, $211B-$2120 - M7A..M7Y
            0x211A => self.mode7.set_settings(val),
            0x211B => self.mode7.write(Mode7Param::A, val),
            0x211C => self.mode7.write(Mode7Param::B, val),
            0x211D => self.mode7.write(Mode7Param::C, val),
            0x211E => self.mode7.write(Mode7Param::D, val),
            0x211F => self.mode7.write(Mode7Param::X, val),
            0x2120 => self.mode7.write(Mode7Param::Y, val),

            // $2121 - CGADD, $2122 - CGDATA
            0x2121 => self.cgram.set_address(val),
            0x2122 => self.cgram.write(val),

            // $2123-$2125 - W12SEL, W34SEL, WOBJSEL
            0x2123 => self.backgrounds.set_window_select(0, val),
            0x2124 => self.backgrounds.set_window_select(2, val),
            0x2125 => self.obj_window_select = val,

            // $212A - WBGLOG, $212B - WOBJLOG
            0x212A => self.backgrounds.set_window_logic(val),
            0x212B => self.obj_window_logic = val,

            // $212C-$212F - TM, TS, TMW, TSW
            0x212C => self.backgrounds.set_main_screen(val),
            0x212D => self.backgrounds.set_sub_screen(val),
            0x212E => self.backgrounds.set_main_screen_window(val),
            0x212F => self.backgrounds.set_sub_screen_window(val),

            // $2131 - CGADSUB
            0x2131 => self.backgrounds.set_color_math(val),

            _ => log(LogCategory::Stubs, LogLevel::Debug, || {
                format!("PPU: unhandled write ${:04X} = ${:02X}", addr, val)
            }),
        }
    }

    /// Read from PPU registers
    pub fn read_register(&self, addr: u16) -> u8 {
        match addr {
            // $2134-$2136 - MPYL, MPYM, MPYH
            0x2134 => self.mode7.multiply_result() as u8,
            0x2135 => (self.mode7.multiply_result() >> 8) as u8,
            0x2136 => (self.mode7.multiply_result() >> 16) as u8,

            // $2138 - RDOAM
            0x2138 => self.oam.read(),

            // $2139/$213A - RDVRAML/RDVRAMH
            0x2139 => self.vram.read_low(),
            0x213A => self.vram.read_high(),

            // $213B - RDCGRAM
            0x213B => self.cgram.read(),

            // Most PPU registers are write-only
            _ => {
                log(LogCategory::Stubs, LogLevel::Debug, || {
                    format!("PPU: unhandled read ${:04X}", addr)
                });
                0
            }
        }
    }

    /// VRAM byte address of a layer's tilemap entry at tile coordinates `(x, y)`
    pub fn tilemap_address(&self, layer: usize, x: u16, y: u16) -> u16 {
        tilemap::tilemap_address(&self.backgrounds.bg[layer], x, y)
    }

    /// Decode a layer's tilemap entry at tile coordinates `(x, y)`
    pub fn tile_from_background(&self, layer: usize, x: u16, y: u16) -> Result<BgTile, SnesError> {
        tilemap::tile_from_background(&self.backgrounds, &self.vram, layer, x, y)
    }

    /// Layers present in the current screen mode
    pub fn valid_backgrounds(&self) -> &'static [usize] {
        self.backgrounds.valid_backgrounds()
    }

    /// Bits per pixel of `layer` in the current screen mode
    pub fn color_depth(&self, layer: usize) -> Result<u8, SnesError> {
        self.backgrounds.color_depth(layer)
    }

    pub fn screen_display(&self) -> u8 {
        self.screen_display
    }

    pub fn is_forced_blank(&self) -> bool {
        self.screen_display & 0x80 != 0
    }

    pub fn brightness(&self) -> u8 {
        self.screen_display & 0x0F
    }

    pub fn backgrounds(&self) -> &BackgroundData {
        &self.backgrounds
    }

    pub fn mode7(&self) -> &Mode7 {
        &self.mode7
    }

    pub fn oam(&self) -> &Oam {
        &self.oam
    }

    pub fn vram(&self) -> &Vram {
        &self.vram
    }

    pub fn cgram(&self) -> &Cgram {
        &self.cgram
    }

    pub fn obj_window_select(&self) -> u8 {
        self.obj_window_select
    }

    pub fn obj_window_logic(&self) -> u8 {
        self.obj_window_logic
    }
}

impl Default for Ppu {
    fn default() -> Self {
        Self::new()
    }
}
