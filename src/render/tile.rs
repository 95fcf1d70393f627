//! Tile driver: renders the chunks under one map tile

use image::RgbaImage;

use super::column::ColumnScanner;
use super::compositor::composite;
use super::neighbors::VariantAdjuster;
use crate::biome::BiomeClassifier;
use crate::core::{CHUNK_WIDTH, ChunkPos, Result, TilePos};
use crate::render_mode::RenderMode;
use crate::texture::BlockImages;
use crate::world::{Chunk, ChunkSource};

/// Renders square top-down tiles of `tile_width` x `tile_width` chunks
pub struct TopdownTileRenderer<'a> {
    world: &'a dyn ChunkSource,
    scanner: ColumnScanner<'a>,
    tile_width: u32,
}

impl<'a> TopdownTileRenderer<'a> {
    pub fn new(
        world: &'a dyn ChunkSource,
        images: &'a dyn BlockImages,
        mode: &'a dyn RenderMode,
        tile_width: u32,
    ) -> Self {
        Self {
            world,
            scanner: ColumnScanner::new(images, mode),
            tile_width: tile_width.max(1),
        }
    }

    pub fn with_biomes(mut self, biomes: &'a dyn BiomeClassifier) -> Self {
        self.scanner = self.scanner.with_biomes(biomes);
        self
    }

    pub fn with_adjuster(mut self, adjuster: &'a dyn VariantAdjuster) -> Self {
        self.scanner = self.scanner.with_adjuster(adjuster);
        self
    }

    pub fn with_water_preblit(mut self, enabled: bool) -> Self {
        self.scanner = self.scanner.with_water_preblit(enabled);
        self
    }

    /// Side length of a tile in pixels
    pub fn tile_size(&self) -> u32 {
        self.scanner.images().block_size() * CHUNK_WIDTH as u32 * self.tile_width
    }

    /// Paint the tile at `tile` into `image`
    ///
    /// A buffer that already has the tile size keeps its contents, so
    /// absent chunks show whatever background it holds. Any other buffer
    /// is replaced by a transparent one of the right size.
    pub fn render_tile(&self, tile: TilePos, image: &mut RgbaImage) -> Result<()> {
        let size = self.tile_size();
        if image.dimensions() != (size, size) {
            *image = RgbaImage::new(size, size);
        }

        let chunk_pixels = self.scanner.images().texture_size() as i64 * CHUNK_WIDTH as i64;
        let tile_width = self.tile_width as i32;
        let mut rendered = 0usize;

        for cz in 0..tile_width {
            for cx in 0..tile_width {
                let pos = ChunkPos::new(tile.x * tile_width + cx, tile.y * tile_width + cz);
                let Some(chunk) = self.world.chunk(pos) else {
                    log::trace!("No chunk at ({}, {}), leaving tile area blank", pos.x, pos.z);
                    continue;
                };
                let (dx, dy) = (cx as i64 * chunk_pixels, cz as i64 * chunk_pixels);
                self.render_chunk(chunk, image, dx, dy)?;
                rendered += 1;
            }
        }

        log::debug!(
            "Rendered tile ({}, {}): {}/{} chunks, {}px",
            tile.x,
            tile.y,
            rendered,
            self.tile_width * self.tile_width,
            size
        );
        Ok(())
    }

    /// Paint every column of `chunk` with the chunk's corner at `(dx, dy)`
    pub fn render_chunk(
        &self,
        chunk: &Chunk,
        image: &mut RgbaImage,
        dx: i64,
        dy: i64,
    ) -> Result<()> {
        let texture_size = self.scanner.images().texture_size() as i64;
        for z in 0..CHUNK_WIDTH {
            for x in 0..CHUNK_WIDTH {
                let layers = self.scanner.scan_column(chunk, x, z)?;
                if layers.is_empty() {
                    continue;
                }
                composite(
                    layers,
                    image,
                    dx + x as i64 * texture_size,
                    dy + z as i64 * texture_size,
                );
            }
        }
        Ok(())
    }

    /// Render a tile into a fresh transparent image
    pub fn render(&self, tile: TilePos) -> Result<RgbaImage> {
        let mut image = RgbaImage::new(0, 0);
        self.render_tile(tile, &mut image)?;
        Ok(image)
    }
}
