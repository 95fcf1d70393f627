//! Cave render mode: shows only blocks that border cave air

use glam::IVec3;
use image::RgbaImage;

use super::RenderMode;
use crate::core::{BlockPos, CHUNK_HEIGHT};
use crate::world::{ChunkSource, block};

/// Neighbors checked for cave air: above and the four horizontal sides
const NEIGHBORS: [IVec3; 5] = [
    IVec3::Y,
    IVec3::X,
    IVec3::NEG_X,
    IVec3::Z,
    IVec3::NEG_Z,
];

/// Weight of the height tint over the block color
const TINT_STRENGTH: f32 = 0.35;

const LOW_COLOR: [f32; 3] = [40.0, 60.0, 230.0];
const HIGH_COLOR: [f32; 3] = [230.0, 60.0, 40.0];

/// Hides the surface and solid rock so the map shows cave floors and walls,
/// tinted from blue (deep) to red (high)
pub struct CaveRenderMode<'w, W: ChunkSource + ?Sized> {
    world: &'w W,
}

impl<'w, W: ChunkSource + ?Sized> CaveRenderMode<'w, W> {
    pub fn new(world: &'w W) -> Self {
        Self { world }
    }

    /// Air that sky light never reaches
    fn is_cave_air(&self, pos: BlockPos) -> bool {
        self.world
            .block_at(pos)
            .is_some_and(|state| state.is_air() && self.world.sky_light_at(pos) == 0)
    }
}

impl<W: ChunkSource + ?Sized> RenderMode for CaveRenderMode<'_, W> {
    fn is_hidden(&self, pos: BlockPos, id: u16, _data: u16) -> bool {
        if block::is_water(id) {
            return true;
        }
        !NEIGHBORS.iter().any(|&offset| self.is_cave_air(pos + offset))
    }

    fn draw(&self, image: &mut RgbaImage, pos: BlockPos, _id: u16, _data: u16) {
        let t = (pos.y as f32 / (CHUNK_HEIGHT - 1) as f32).clamp(0.0, 1.0);
        let tint: [f32; 3] =
            std::array::from_fn(|c| LOW_COLOR[c] + (HIGH_COLOR[c] - LOW_COLOR[c]) * t);
        for pixel in image.pixels_mut() {
            for c in 0..3 {
                let mixed = pixel[c] as f32 * (1.0 - TINT_STRENGTH) + tint[c] * TINT_STRENGTH;
                pixel[c] = mixed.round().clamp(0.0, 255.0) as u8;
            }
        }
    }
}
