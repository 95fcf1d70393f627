//! Column scanning: which blocks of one vertical column are visible from above

use image::RgbaImage;

use super::neighbors::{NoAdjust, VariantAdjuster};
use crate::biome::{BiomeClassifier, ChunkBiomes};
use crate::core::{BlockPos, LocalBlockPos, Result};
use crate::render_mode::RenderMode;
use crate::texture::{BlockImages, OPAQUE_WATER};
use crate::world::{Chunk, block, ids};

/// One visible block of a column, ready to be composited
#[derive(Clone, Debug)]
pub struct Layer {
    pub image: RgbaImage,
    pub id: u16,
    pub data: u16,
    pub pos: BlockPos,
}

/// Walks columns top to bottom and collects their visible layers
///
/// The returned stack is in scan order: index 0 is the topmost block, the
/// last entry is the deepest one reached before an opaque block (or the
/// bottom of the world) stopped the scan.
pub struct ColumnScanner<'a> {
    images: &'a dyn BlockImages,
    mode: &'a dyn RenderMode,
    biomes: &'a dyn BiomeClassifier,
    adjuster: &'a dyn VariantAdjuster,
    water_preblit: bool,
}

impl<'a> ColumnScanner<'a> {
    /// Scanner with chunk biomes, no neighbor adjustment and per-layer water
    pub fn new(images: &'a dyn BlockImages, mode: &'a dyn RenderMode) -> Self {
        Self {
            images,
            mode,
            biomes: &ChunkBiomes,
            adjuster: &NoAdjust,
            water_preblit: false,
        }
    }

    pub fn with_biomes(mut self, biomes: &'a dyn BiomeClassifier) -> Self {
        self.biomes = biomes;
        self
    }

    pub fn with_adjuster(mut self, adjuster: &'a dyn VariantAdjuster) -> Self {
        self.adjuster = adjuster;
        self
    }

    /// Collapse deep water into one opaque layer instead of stacking it
    pub fn with_water_preblit(mut self, enabled: bool) -> Self {
        self.water_preblit = enabled;
        self
    }

    pub fn images(&self) -> &'a dyn BlockImages {
        self.images
    }

    /// Visible layers of column `(x, z)` of `chunk`
    pub fn scan_column(&self, chunk: &Chunk, x: usize, z: usize) -> Result<Vec<Layer>> {
        let mut layers = Vec::new();
        let Some(start) = first_block_y(chunk, x, z) else {
            return Ok(layers);
        };

        let mut in_water = false;
        let mut water_run = 0u32;

        for y in (0..=start).rev() {
            let local = LocalBlockPos::new(x, y, z);
            let pos = local.to_global(chunk.pos());

            let id = chunk.block_id(local);
            if id == ids::AIR {
                in_water = false;
                continue;
            }
            let data = chunk.block_data(local);
            let extra = chunk.block_extra_data(local, id);
            let is_water = block::is_full_water(id, data);

            if self.mode.is_hidden(pos, id, data) {
                continue;
            }

            if !self.water_preblit {
                // Only the first block of a water run gets a layer
                if is_water {
                    if is_water == in_water {
                        continue;
                    }
                    in_water = is_water;
                }
            } else if !is_water {
                water_run = 0;
            } else {
                water_run += 1;
                if water_run > self.images.max_water_preblit() {
                    self.collapse_water(&mut layers, pos)?;
                    break;
                }
            }

            let layer = self.render_block(chunk, pos, id, data, extra)?;
            let opaque = !self.images.is_block_transparent(layer.id, layer.data);
            layers.push(layer);
            if opaque {
                break;
            }
        }

        Ok(layers)
    }

    /// Resolve, adjust and draw the image of one block
    fn render_block(
        &self,
        chunk: &Chunk,
        pos: BlockPos,
        id: u16,
        data: u16,
        extra: u16,
    ) -> Result<Layer> {
        let data = self.adjuster.check_neighbors(pos, id, data);
        let mut image = if self.biomes.is_biome_block(id, data) {
            let biome = self.biomes.biome_of_block(pos, chunk);
            self.images.get_biome_block(id, data, &biome, extra)?
        } else {
            self.images.get_block(id, data, extra)?
        };
        self.mode.draw(&mut image, pos, id, data);
        Ok(Layer { image, id, data, pos })
    }

    /// Replace the first water run of the stack with one opaque water layer
    /// at the run's top and drop everything after it. With no water on the
    /// stack the opaque layer goes at `pos`.
    fn collapse_water(&self, layers: &mut Vec<Layer>, pos: BlockPos) -> Result<()> {
        let (index, pos) = match layers.iter().position(|l| block::is_water(l.id)) {
            Some(i) => (i, layers[i].pos),
            None => (layers.len(), pos),
        };

        let id = ids::FLOWING_WATER;
        let mut image = self.images.get_block(id, OPAQUE_WATER, 0)?;
        self.mode.draw(&mut image, pos, id, OPAQUE_WATER);

        layers.truncate(index);
        layers.push(Layer { image, id, data: OPAQUE_WATER, pos });
        Ok(())
    }
}

/// Height of the topmost non-air block of a column
fn first_block_y(chunk: &Chunk, x: usize, z: usize) -> Option<usize> {
    let top = chunk.top_y()?;
    (0..=top)
        .rev()
        .find(|&y| chunk.block_id(LocalBlockPos::new(x, y, z)) != ids::AIR)
}
