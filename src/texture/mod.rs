//! Block textures: the resolver trait the renderer draws through and a
//! palette-backed implementation

pub mod images;
pub mod palette;

pub use images::PaletteBlockImages;
pub use palette::{BlockPalette, PaletteEntry};

use image::RgbaImage;

use crate::biome::Biome;
use crate::core::Result;

/// Low bits of block data that select the texture variant
pub const DATA_MASK: u16 = 0x0f;

/// Side flags set by neighbor checks: the neighbor on that side differs
pub const DATA_NORTH: u16 = 0x10;
pub const DATA_EAST: u16 = 0x20;
pub const DATA_SOUTH: u16 = 0x40;
pub const DATA_WEST: u16 = 0x80;

/// Data value of the precomputed, fully opaque water block used when a
/// deep water column is collapsed into a single layer
pub const OPAQUE_WATER: u16 = 0x2000;

/// Resolves block images for the renderer
pub trait BlockImages {
    /// Texture for a block; unknown blocks are an error
    fn get_block(&self, id: u16, data: u16, extra: u16) -> Result<RgbaImage>;

    /// Texture for a biome-colored block
    fn get_biome_block(&self, id: u16, data: u16, biome: &Biome, extra: u16) -> Result<RgbaImage>;

    /// Side length of one block texture in pixels
    fn texture_size(&self) -> u32;

    /// Side length of one rendered block in pixels
    fn block_size(&self) -> u32;

    /// Whether anything beneath this block can show through it
    fn is_block_transparent(&self, id: u16, data: u16) -> bool;

    /// Consecutive water blocks after which a column is drawn as opaque water
    fn max_water_preblit(&self) -> u32;
}
