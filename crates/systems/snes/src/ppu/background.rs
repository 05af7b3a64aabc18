//! Background layer configuration
//!
//! Registers covered here:
//! - $2105 BGMODE: screen mode, BG3 priority, per-layer tile size
//! - $2106 MOSAIC: mosaic size and per-layer enable
//! - $2107-$210A BGnSC: tilemap base and screen size
//! - $210B/$210C BGnnNBA: character (tile data) base
//! - $210D-$2114 BGnHOFS/BGnVOFS: scroll, through [`ScrollLatch`]
//! - $2123/$2124 W12SEL/W34SEL, $212A WBGLOG: window masks
//! - $212C-$212F TM/TS/TMW/TSW: screen designation
//! - $2131 CGADSUB: per-layer color math enable

use super::scroll::ScrollLatch;
use crate::SnesError;
use emu_core::logging::{log, LogCategory, LogLevel};
use serde::{Deserialize, Serialize};

/// Number of background layers the PPU has registers for
pub const BG_LAYERS: usize = 4;

/// One background layer's register-derived state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Background {
    /// 16x16 tiles instead of 8x8 (BGMODE bits 4-7)
    pub large_tiles: bool,
    pub mosaic: bool,
    /// BG3 high priority in mode 1; only ever set on layer index 2
    pub priority: bool,
    /// 0=32x32, 1=64x32, 2=32x64, 3=64x64 tiles
    pub screen_size: u8,
    /// Tilemap base in 1K-word (2KB) units
    pub tilemap_base: u8,
    /// Character base in 4K-word (8KB) units
    pub tileset_base: u8,
    pub horizontal_scroll: u16,
    pub vertical_scroll: u16,
    /// Window 1 mask code: 0/1=disabled, 2=inside, 3=outside
    pub window_mask1: u8,
    /// Window 2 mask code, same encoding as `window_mask1`
    pub window_mask2: u8,
    /// 0=OR, 1=AND, 2=XOR, 3=XNOR
    pub window_mask_logic: u8,
    pub main_screen: bool,
    pub sub_screen: bool,
    pub main_screen_window: bool,
    pub sub_screen_window: bool,
    pub color_math: bool,
}

impl Background {
    /// Tile dimensions in pixels as `(width, height)`
    pub fn tile_size(&self) -> (u16, u16) {
        if self.large_tiles {
            (16, 16)
        } else {
            (8, 8)
        }
    }

    /// Tilemap base as a VRAM byte address
    pub fn tilemap_base_addr(&self) -> u16 {
        (self.tilemap_base as u16) << 11
    }

    /// Character data base as a VRAM byte address (wraps within 64KB)
    pub fn tileset_base_addr(&self) -> u16 {
        (self.tileset_base as u16) << 13
    }
}

/// Layers present in a screen mode, by index
pub fn valid_backgrounds(mode: u8) -> &'static [usize] {
    if mode == 0 {
        &[0, 1, 2, 3]
    } else if mode < 2 {
        &[0, 1, 2]
    } else if mode < 6 {
        &[0, 1]
    } else {
        &[0]
    }
}

/// Bits per pixel of `layer` in screen `mode`
pub fn color_depth(mode: u8, layer: usize) -> Result<u8, SnesError> {
    let depth = match (mode, layer) {
        (0, 0..=3) => Some(2),
        (1, 0) | (1, 1) => Some(4),
        (1, 2) => Some(2),
        (2, 0) | (2, 1) => Some(4),
        (3, 0) | (4, 0) => Some(8),
        (3, 1) | (4, 1) => Some(4),
        (5, 0) => Some(4),
        (5, 1) => Some(2),
        (6, 0) => Some(4),
        (7, 0) => Some(8),
        _ => None,
    };

    depth.ok_or_else(|| {
        log(LogCategory::PPU, LogLevel::Error, || {
            format!("PPU: no color depth for BG{} in mode {}", layer + 1, mode)
        });
        SnesError::Configuration { mode, layer }
    })
}

/// Register state for all four layers plus the settings they share
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundData {
    pub bg: [Background; BG_LAYERS],
    /// BGMODE bits 0-2
    pub screen_mode: u8,
    /// Mosaic block size minus one
    pub mosaic_size: u8,
    pub scroll_latch: ScrollLatch,
}

impl BackgroundData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Layers present in the current screen mode
    pub fn valid_backgrounds(&self) -> &'static [usize] {
        valid_backgrounds(self.screen_mode)
    }

    /// Bits per pixel of `layer` in the current screen mode
    pub fn color_depth(&self, layer: usize) -> Result<u8, SnesError> {
        color_depth(self.screen_mode, layer)
    }

    /// $2105 BGMODE
    pub fn set_bgmode(&mut self, data: u8) {
        self.screen_mode = data & 0x07;
        self.bg[2].priority = data & 0x08 != 0;
        for (i, bg) in self.bg.iter_mut().enumerate() {
            bg.large_tiles = data & (0x10 << i) != 0;
        }
    }

    /// $2106 MOSAIC
    pub fn set_mosaic(&mut self, data: u8) {
        self.mosaic_size = data >> 4;
        for (i, bg) in self.bg.iter_mut().enumerate() {
            bg.mosaic = data & (1 << i) != 0;
        }
    }

    /// $2107-$210A BGnSC
    pub fn set_screen_base(&mut self, layer: usize, data: u8) {
        let bg = &mut self.bg[layer];
        bg.screen_size = data & 0x03;
        bg.tilemap_base = data >> 2;
    }

    /// $210B BG12NBA or $210C BG34NBA; `first` is the lower-numbered layer
    pub fn set_tileset_base(&mut self, first: usize, data: u8) {
        self.bg[first].tileset_base = data & 0x0F;
        self.bg[first + 1].tileset_base = data >> 4;
    }

    /// BGnHOFS; returns the new scroll value
    pub fn write_horizontal_scroll(&mut self, layer: usize, data: u8) -> u16 {
        let value = self.scroll_latch.write_horizontal(data);
        self.bg[layer].horizontal_scroll = value;
        value
    }

    /// BGnVOFS; returns the new scroll value
    pub fn write_vertical_scroll(&mut self, layer: usize, data: u8) -> u16 {
        let value = self.scroll_latch.write_vertical(data);
        self.bg[layer].vertical_scroll = value;
        value
    }

    /// $2123 W12SEL or $2124 W34SEL
    pub fn set_window_select(&mut self, first: usize, data: u8) {
        for (n, bg) in self.bg[first..first + 2].iter_mut().enumerate() {
            let bits = data >> (n * 4);
            bg.window_mask1 = bits & 0x03;
            bg.window_mask2 = (bits >> 2) & 0x03;
        }
    }

    /// $212A WBGLOG
    pub fn set_window_logic(&mut self, data: u8) {
        for (i, bg) in self.bg.iter_mut().enumerate() {
            bg.window_mask_logic = (data >> (i * 2)) & 0x03;
        }
    }

    /// $212C TM
    pub fn set_main_screen(&mut self, data: u8) {
        for (i, bg) in self.bg.iter_mut().enumerate() {
            bg.main_screen = data & (1 << i) != 0;
        }
    }

    /// $212D TS
    pub fn set_sub_screen(&mut self, data: u8) {
        for (i, bg) in self.bg.iter_mut().enumerate() {
            bg.sub_screen = data & (1 << i) != 0;
        }
    }

    /// $212E TMW
    pub fn set_main_screen_window(&mut self, data: u8) {
        for (i, bg) in self.bg.iter_mut().enumerate() {
            bg.main_screen_window = data & (1 << i) != 0;
        }
    }

    /// $212F TSW
    pub fn set_sub_screen_window(&mut self, data: u8) {
        for (i, bg) in self.bg.iter_mut().enumerate() {
            bg.sub_screen_window = data & (1 << i) != 0;
        }
    }

    /// $2131 CGADSUB, BG bits only
    pub fn set_color_math(&mut self, data: u8) {
        for (i, bg) in self.bg.iter_mut().enumerate() {
            bg.color_math = data & (1 << i) != 0;
        }
    }
}
