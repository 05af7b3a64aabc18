//! Planar tile formats used by 65C816-era tile-based video hardware.
//!
//! SNES character data is stored as pairs of interleaved bitplanes: each
//! 16-byte block holds two planes for 8 rows (row `y` at bytes `2y` and
//! `2y + 1`). 4bpp tiles append a second block for planes 2-3, 8bpp tiles
//! append three, so a tile is always `8 * bits_per_pixel` bytes long.

use serde::{Deserialize, Serialize};

/// Tile format specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileFormat {
    /// 2 bits per pixel, 16 bytes per tile.
    Snes2Bpp,

    /// 4 bits per pixel, 32 bytes per tile.
    Snes4Bpp,

    /// 8 bits per pixel, 64 bytes per tile.
    Snes8Bpp,
}

impl TileFormat {
    /// Format for a color depth given in bits per pixel.
    pub fn from_bits_per_pixel(bpp: u8) -> Option<Self> {
        match bpp {
            2 => Some(TileFormat::Snes2Bpp),
            4 => Some(TileFormat::Snes4Bpp),
            8 => Some(TileFormat::Snes8Bpp),
            _ => None,
        }
    }

    /// Number of bitplanes.
    pub fn bits_per_pixel(self) -> u8 {
        match self {
            TileFormat::Snes2Bpp => 2,
            TileFormat::Snes4Bpp => 4,
            TileFormat::Snes8Bpp => 8,
        }
    }
}

/// Trait for decoding tile data into pixel indices.
pub trait TileDecoder {
    /// Decode a single pixel from a tile.
    ///
    /// # Arguments
    /// * `tile_data` - The raw tile data
    /// * `x` - X coordinate within the tile (0-7)
    /// * `y` - Y coordinate within the tile (0-7)
    ///
    /// # Returns
    /// The palette index for this pixel (0-3 for 2bpp, 0-15 for 4bpp, etc.)
    fn decode_pixel(&self, tile_data: &[u8], x: u8, y: u8) -> u8;

    /// Get the size of a single tile in bytes.
    fn tile_size(&self) -> usize;
}

impl TileDecoder for TileFormat {
    fn decode_pixel(&self, tile_data: &[u8], x: u8, y: u8) -> u8 {
        if tile_data.len() < self.tile_size() || x > 7 || y > 7 {
            return 0;
        }

        let bit = 7 - x;
        let mut index = 0u8;
        for plane in 0..self.bits_per_pixel() as usize {
            let offset = (plane / 2) * 16 + (y as usize) * 2 + (plane % 2);
            index |= ((tile_data[offset] >> bit) & 1) << plane;
        }
        index
    }

    fn tile_size(&self) -> usize {
        8 * self.bits_per_pixel() as usize
    }
}
