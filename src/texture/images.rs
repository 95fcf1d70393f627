//! Flat-colored block textures built from a palette

use std::collections::HashMap;

use image::{Rgba, RgbaImage, imageops};

use super::{
    BlockImages, BlockPalette, DATA_EAST, DATA_MASK, DATA_NORTH, DATA_SOUTH, DATA_WEST,
    OPAQUE_WATER,
};
use crate::biome::Biome;
use crate::core::{Error, Result};
use crate::world::{block, ids};

/// Darkening of the 1-pixel texture border
const EDGE_SHADE: f32 = 0.85;

/// Darkening of an edge flagged by a neighbor check (shorelines)
const SIDE_SHADE: f32 = 0.7;

/// Alpha at which stacked water counts as opaque
const OPAQUE_ALPHA: f32 = 0.98;

/// Upper bound on the water preblit depth
const MAX_PREBLIT: u32 = 64;

/// Fallback when the palette has no water entry
const DEFAULT_WATER: [u8; 4] = [56, 98, 220, 150];

type TextureKey = (u16, Option<u16>, Option<u16>);

/// Block images generated from palette colors
///
/// Every palette entry becomes a square texture with a slightly darker
/// border so neighboring blocks stay distinguishable on the map.
pub struct PaletteBlockImages {
    texture_size: u32,
    textures: HashMap<TextureKey, RgbaImage>,
    opaque_water: RgbaImage,
    max_water_preblit: u32,
}

impl PaletteBlockImages {
    /// Build all textures of `palette` at `texture_size` pixels per side
    pub fn new(palette: &BlockPalette, texture_size: u32) -> Self {
        let texture_size = texture_size.max(1);
        let textures: HashMap<TextureKey, RgbaImage> = palette
            .entries
            .iter()
            .map(|e| ((e.id, e.data, e.extra), build_texture(e.color, texture_size)))
            .collect();

        let water = textures
            .get(&(ids::WATER, None, None))
            .cloned()
            .unwrap_or_else(|| build_texture(DEFAULT_WATER, texture_size));
        let max_water_preblit = preblit_depth(&water);
        let opaque_water = preblit_water(&water, max_water_preblit);

        log::debug!(
            "Built {} block textures at {}px, water preblit depth {}",
            textures.len(),
            texture_size,
            max_water_preblit
        );

        Self {
            texture_size,
            textures,
            opaque_water,
            max_water_preblit,
        }
    }

    /// Most specific texture for a block: exact extra data, then data, then id
    fn base(&self, id: u16, data: u16, extra: u16) -> Option<&RgbaImage> {
        let data = data & DATA_MASK;
        let exact = if extra != 0 {
            self.textures.get(&(id, Some(data), Some(extra)))
        } else {
            None
        };
        exact
            .or_else(|| self.textures.get(&(id, Some(data), None)))
            .or_else(|| self.textures.get(&(id, None, None)))
    }
}

impl BlockImages for PaletteBlockImages {
    fn get_block(&self, id: u16, data: u16, extra: u16) -> Result<RgbaImage> {
        if block::is_water(id) && data & OPAQUE_WATER != 0 {
            return Ok(self.opaque_water.clone());
        }
        let mut image = self
            .base(id, data, extra)
            .cloned()
            .ok_or(Error::UnknownBlock { id, data })?;
        shade_sides(&mut image, data);
        Ok(image)
    }

    fn get_biome_block(&self, id: u16, data: u16, biome: &Biome, extra: u16) -> Result<RgbaImage> {
        let mut image = self.get_block(id, data, extra)?;
        let Some(tint) = biome.tint_for(id) else {
            return Ok(image);
        };
        if block::is_water(id) {
            // Biome water replaces the palette color but keeps its alpha
            let alpha = image.pixels().next().map_or(255, |p| p[3]);
            let mut water = build_texture([tint[0], tint[1], tint[2], alpha], image.width());
            shade_sides(&mut water, data);
            return Ok(water);
        }
        for pixel in image.pixels_mut() {
            for c in 0..3 {
                pixel[c] = ((pixel[c] as u16 * tint[c] as u16) / 255) as u8;
            }
        }
        Ok(image)
    }

    fn texture_size(&self) -> u32 {
        self.texture_size
    }

    fn block_size(&self) -> u32 {
        self.texture_size
    }

    fn is_block_transparent(&self, id: u16, data: u16) -> bool {
        if block::is_water(id) && data & OPAQUE_WATER != 0 {
            return false;
        }
        self.base(id, data, 0)
            .is_none_or(|image| image.pixels().any(|p| p[3] < u8::MAX))
    }

    fn max_water_preblit(&self) -> u32 {
        self.max_water_preblit
    }
}

fn shade(color: Rgba<u8>, factor: f32) -> Rgba<u8> {
    let s = |c: u8| (c as f32 * factor).round() as u8;
    Rgba([s(color[0]), s(color[1]), s(color[2]), color[3]])
}

fn build_texture(color: [u8; 4], size: u32) -> RgbaImage {
    let color = Rgba(color);
    RgbaImage::from_fn(size, size, |x, y| {
        if x == 0 || y == 0 || x == size - 1 || y == size - 1 {
            shade(color, EDGE_SHADE)
        } else {
            color
        }
    })
}

/// Darken the texture edges whose side flag is set
fn shade_sides(image: &mut RgbaImage, data: u16) {
    if data & (DATA_NORTH | DATA_EAST | DATA_SOUTH | DATA_WEST) == 0 {
        return;
    }
    let size = image.width();
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let flagged = (data & DATA_NORTH != 0 && y == 0)
            || (data & DATA_SOUTH != 0 && y == size - 1)
            || (data & DATA_WEST != 0 && x == 0)
            || (data & DATA_EAST != 0 && x == size - 1);
        if flagged {
            *pixel = shade(*pixel, SIDE_SHADE);
        }
    }
}

/// Number of stacked water layers until the stack is practically opaque
fn preblit_depth(water: &RgbaImage) -> u32 {
    let alpha = water.pixels().map(|p| p[3]).min().unwrap_or(0) as f32 / 255.0;
    if alpha >= 1.0 {
        return 1;
    }
    if alpha <= 0.0 {
        return MAX_PREBLIT;
    }
    let depth = ((1.0 - OPAQUE_ALPHA).ln() / (1.0 - alpha).ln()).ceil() as u32;
    depth.clamp(1, MAX_PREBLIT)
}

/// Water composited onto itself `depth` times, then made fully opaque
fn preblit_water(water: &RgbaImage, depth: u32) -> RgbaImage {
    let mut stacked = RgbaImage::new(water.width(), water.height());
    for _ in 0..depth {
        imageops::overlay(&mut stacked, water, 0, 0);
    }
    for pixel in stacked.pixels_mut() {
        pixel[3] = u8::MAX;
    }
    stacked
}
