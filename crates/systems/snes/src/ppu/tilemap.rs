//! Tilemap addressing and tilemap entry decoding
//!
//! A tilemap is one to four 32x32 "screens" of 2-byte entries, laid out one
//! after another in VRAM in 2KB steps. Entry format (little-endian word):
//!
//! ```text
//! vhopppcc cccccccc
//! v/h = flip, o = priority, ppp = palette, c = tile number
//! ```

use super::background::{Background, BackgroundData};
use super::vram::Vram;
use crate::SnesError;
use emu_core::ppu::{TileDecoder, TileFormat};
use serde::{Deserialize, Serialize};

/// VRAM byte address of the tilemap entry for tile coordinates `(x, y)`
pub fn tilemap_address(bg: &Background, x: u16, y: u16) -> u16 {
    let x = x % 64;
    let y = y % 64;

    let mut screen = 0;
    if bg.screen_size & 0x01 != 0 {
        screen += x / 32;
    }
    if bg.screen_size & 0x02 != 0 {
        // Screens are stored row-major, so a 64-wide map skips two per row
        let row_step = if bg.screen_size & 0x01 != 0 { 2 } else { 1 };
        screen += (y / 32) * row_step;
    }

    ((bg.tilemap_base as u16 + screen) << 11)
        .wrapping_add((y % 32) << 6)
        .wrapping_add((x % 32) << 1)
}

/// A decoded tilemap entry plus what is needed to fetch its pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BgTile {
    pub tile_number: u16,
    pub palette: u8,
    pub priority: bool,
    pub h_flip: bool,
    pub v_flip: bool,
    /// VRAM byte address of the tile's pixel data
    pub addr: u16,
    pub format: TileFormat,
    /// Pixel width and height: 8 or 16
    pub size: u16,
    tileset_base: u16,
}

impl BgTile {
    pub fn color_depth(&self) -> u8 {
        self.format.bits_per_pixel()
    }

    /// Palette-relative color index of pixel `(px, py)` within the tile.
    ///
    /// 16x16 tiles are four 8x8 tiles: `n`, `n+1`, `n+16` and `n+17`.
    pub fn pixel_index(&self, vram: &Vram, px: u16, py: u16) -> u8 {
        let mut x = px % self.size;
        let mut y = py % self.size;
        if self.h_flip {
            x = self.size - 1 - x;
        }
        if self.v_flip {
            y = self.size - 1 - y;
        }

        let tile_size = self.format.tile_size();
        let tile = (self.tile_number + x / 8 + (y / 8) * 16) & 0x03FF;
        let start = self
            .tileset_base
            .wrapping_add(tile.wrapping_mul(tile_size as u16)) as usize;
        let data = &vram.bytes()[start..];
        if data.len() < tile_size {
            return 0;
        }

        self.format
            .decode_pixel(&data[..tile_size], (x % 8) as u8, (y % 8) as u8)
    }
}

/// Decode the tilemap entry of `layer` at tile coordinates `(x, y)`
pub fn tile_from_background(
    data: &BackgroundData,
    vram: &Vram,
    layer: usize,
    x: u16,
    y: u16,
) -> Result<BgTile, SnesError> {
    let depth = data.color_depth(layer)?;
    let format = TileFormat::from_bits_per_pixel(depth).ok_or(SnesError::Configuration {
        mode: data.screen_mode,
        layer,
    })?;

    let bg = &data.bg[layer];
    let entry = vram.read_word(tilemap_address(bg, x, y));
    let tile_number = entry & 0x03FF;
    let tileset_base = bg.tileset_base_addr();
    let bytes_per_tile = 8 * depth as u16;

    Ok(BgTile {
        tile_number,
        palette: ((entry >> 10) & 0x07) as u8,
        priority: entry & 0x2000 != 0,
        h_flip: entry & 0x4000 != 0,
        v_flip: entry & 0x8000 != 0,
        addr: tileset_base.wrapping_add(tile_number.wrapping_mul(bytes_per_tile)),
        format,
        size: bg.tile_size().0,
        tileset_base,
    })
}
