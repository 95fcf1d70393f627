//! Lighting render mode: darkens blocks by the light that reaches their top face

use glam::IVec3;
use image::RgbaImage;

use super::RenderMode;
use crate::core::BlockPos;
use crate::world::ChunkSource;
use crate::world::chunk::MAX_LIGHT;

/// Sky light lost at night
const NIGHT_SKY_PENALTY: u8 = 11;

/// Brightness multiplier per missing light level
const LIGHT_FALLOFF: f32 = 0.8;

/// Shades each block by the light of the block directly above it
pub struct LightingRenderMode<'w, W: ChunkSource + ?Sized> {
    world: &'w W,
    day: bool,
    intensity: f32,
}

impl<'w, W: ChunkSource + ?Sized> LightingRenderMode<'w, W> {
    /// Sky light counts fully
    pub fn day(world: &'w W) -> Self {
        Self { world, day: true, intensity: 1.0 }
    }

    /// Sky light is mostly gone, block light dominates
    pub fn night(world: &'w W) -> Self {
        Self { world, day: false, intensity: 1.0 }
    }

    /// How strongly darkness applies, 0 (off) to 1 (full)
    pub fn with_intensity(mut self, intensity: f32) -> Self {
        self.intensity = intensity.clamp(0.0, 1.0);
        self
    }

    /// Effective light level (0-15) on top of the block at `pos`
    pub fn light_level(&self, pos: BlockPos) -> u8 {
        let above = pos + IVec3::Y;
        let block = self.world.block_light_at(above);
        let sky = self.world.sky_light_at(above);
        let sky = if self.day { sky } else { sky.saturating_sub(NIGHT_SKY_PENALTY) };
        block.max(sky).min(MAX_LIGHT)
    }

    /// Brightness multiplier for a light level
    pub fn brightness(&self, level: u8) -> f32 {
        let darkness = 1.0 - LIGHT_FALLOFF.powi((MAX_LIGHT - level.min(MAX_LIGHT)) as i32);
        1.0 - self.intensity * darkness
    }
}

impl<W: ChunkSource + ?Sized> RenderMode for LightingRenderMode<'_, W> {
    fn is_hidden(&self, _pos: BlockPos, _id: u16, _data: u16) -> bool {
        false
    }

    fn draw(&self, image: &mut RgbaImage, pos: BlockPos, _id: u16, _data: u16) {
        let factor = self.brightness(self.light_level(pos));
        if factor >= 1.0 {
            return;
        }
        for pixel in image.pixels_mut() {
            for c in 0..3 {
                pixel[c] = (pixel[c] as f32 * factor).round() as u8;
            }
        }
    }
}
