//! Reusable PPU (Picture Processing Unit) components for tile-based video systems.
//!
//! Each system has its own PPU implementation that uses these components
//! as appropriate for that system's specific architecture.

pub mod tile;

pub use tile::{TileDecoder, TileFormat};
