//! End-to-end tile rendering over small hand-built worlds

use glam::IVec3;
use image::{Pixel, Rgba, RgbaImage};

use voxmap::biome::Biome;
use voxmap::core::{ChunkPos, LocalBlockPos, TilePos};
use voxmap::render::{ColumnScanner, NeighborAdjuster, TopdownTileRenderer};
use voxmap::render_mode::{self, CaveRenderMode, PlainRenderMode, RenderMode};
use voxmap::texture::{BlockImages, BlockPalette, OPAQUE_WATER, PaletteBlockImages};
use voxmap::world::{DemoWorldGenerator, World, ids};
use voxmap::{RenderConfig, RenderModeKind};

const TEXTURE: u32 = 4;

fn images() -> PaletteBlockImages {
    PaletteBlockImages::new(&BlockPalette::default(), TEXTURE)
}

/// Pixels of the block at column (x, z) of a single-chunk tile
fn block_pixels(tile: &RgbaImage, x: u32, z: u32) -> RgbaImage {
    image::imageops::crop_imm(tile, x * TEXTURE, z * TEXTURE, TEXTURE, TEXTURE).to_image()
}

#[test]
fn test_absent_chunks_keep_background() {
    let world = World::new();
    let images = images();
    let renderer = TopdownTileRenderer::new(&world, &images, &PlainRenderMode, 2);

    let size = renderer.tile_size();
    assert_eq!(size, TEXTURE * 16 * 2);

    let background = RgbaImage::from_pixel(size, size, Rgba([30, 40, 50, 255]));
    let mut tile = background.clone();
    renderer.render_tile(TilePos::new(4, -3), &mut tile).expect("render");
    assert_eq!(tile, background);

    let fresh = renderer.render(TilePos::new(4, -3)).expect("render");
    assert_eq!(fresh.dimensions(), (size, size));
    assert!(fresh.pixels().all(|p| p[3] == 0));
}

#[test]
fn test_single_opaque_block() {
    // Air everywhere except grass five blocks below the top of its section
    let mut world = World::new();
    world.set_block(IVec3::new(6, 10, 9), ids::GRASS, 0);
    let images = images();
    let renderer = TopdownTileRenderer::new(&world, &images, &PlainRenderMode, 1);

    let tile = renderer.render(TilePos::new(0, 0)).expect("render");

    // Fresh chunks carry biome id 0
    let expected = images
        .get_biome_block(ids::GRASS, 0, &Biome::Ocean, 0)
        .expect("grass");
    assert_eq!(block_pixels(&tile, 6, 9), expected);
    let painted = tile.pixels().filter(|p| p[3] != 0).count();
    assert_eq!(painted as u32, TEXTURE * TEXTURE);
}

#[test]
fn test_water_over_stone_composites_two_layers() {
    let mut world = World::new();
    for y in 51..=60 {
        world.set_block(IVec3::new(0, y, 0), ids::WATER, 0);
    }
    world.set_block(IVec3::new(0, 50, 0), ids::STONE, 0);
    let images = images();

    let scanner = ColumnScanner::new(&images, &PlainRenderMode);
    let chunk = world_chunk(&world, ChunkPos::new(0, 0));
    let layers = scanner.scan_column(chunk, 0, 0).expect("scan");
    assert_eq!(layers.len(), 2);
    assert_eq!((layers[0].id, layers[0].pos.y), (ids::WATER, 60));
    assert_eq!((layers[1].id, layers[1].pos.y), (ids::STONE, 50));

    let renderer = TopdownTileRenderer::new(&world, &images, &PlainRenderMode, 1);
    let tile = renderer.render(TilePos::new(0, 0)).expect("render");

    let water = images
        .get_biome_block(ids::WATER, 0, &Biome::Ocean, 0)
        .expect("water");
    let stone = images.get_block(ids::STONE, 0, 0).expect("stone");
    let mut expected = Rgba([0, 0, 0, 0]);
    expected.blend(stone.get_pixel(1, 1));
    expected.blend(water.get_pixel(1, 1));
    assert_eq!(*tile.get_pixel(1, 1), expected);
}

#[test]
fn test_preblit_draws_opaque_water() {
    let mut world = World::new();
    for y in 40..=60 {
        world.set_block(IVec3::new(2, y, 3), ids::WATER, 0);
    }
    world.set_block(IVec3::new(2, 39, 3), ids::STONE, 0);
    let images = images();
    let renderer = TopdownTileRenderer::new(&world, &images, &PlainRenderMode, 1)
        .with_water_preblit(true);

    let tile = renderer.render(TilePos::new(0, 0)).expect("render");
    let expected = images
        .get_block(ids::FLOWING_WATER, OPAQUE_WATER, 0)
        .expect("opaque water");
    assert_eq!(block_pixels(&tile, 2, 3), expected);
}

#[test]
fn test_demo_tile_is_fully_covered() {
    let mut world = World::new();
    DemoWorldGenerator::new(7).generate_region(
        &mut world,
        ChunkPos::new(-1, -1),
        ChunkPos::new(1, 1),
    );
    let images = images();
    let adjuster = NeighborAdjuster::new(&world);

    for preblit in [false, true] {
        let renderer = TopdownTileRenderer::new(&world, &images, &PlainRenderMode, 1)
            .with_adjuster(&adjuster)
            .with_water_preblit(preblit);
        let tile = renderer.render(TilePos::new(0, 0)).expect("render");
        // Every column ends on solid ground or opaque water
        assert!(tile.pixels().all(|p| p[3] >= 250), "preblit {}", preblit);
    }
}

#[test]
fn test_cave_mode_from_config() {
    // Solid stone 0..=20 under a 3x3 footprint, dark throughout, with one
    // air pocket at (1, 10, 1)
    let mut world = World::new();
    for x in 0..3 {
        for z in 0..3 {
            for y in 0..=20 {
                world.set_block(IVec3::new(x, y, z), ids::STONE, 0);
            }
        }
    }
    world.set_block(IVec3::new(1, 10, 1), ids::AIR, 0);
    if let Some(chunk) = world.chunk_mut(ChunkPos::new(0, 0)) {
        for x in 0..3 {
            for z in 0..3 {
                for y in 0..=20 {
                    chunk.set_light(LocalBlockPos::new(x, y, z), 0, 0);
                }
            }
        }
    }

    let images = images();
    let config = RenderConfig {
        render_mode: RenderModeKind::Cave,
        texture_size: TEXTURE,
        ..RenderConfig::default()
    };
    let mode = render_mode::from_config(&config, &world);
    let renderer = TopdownTileRenderer::new(&world, &images, mode.as_ref(), config.tile_width);
    let tile = renderer.render(TilePos::new(0, 0)).expect("render");
    assert_eq!(tile.dimensions(), (config.tile_size(), config.tile_size()));

    // The pocket floor shows through the hidden surface and ceiling
    let mut floor = images.get_block(ids::STONE, 0, 0).expect("stone");
    CaveRenderMode::new(&world).draw(&mut floor, IVec3::new(1, 9, 1), ids::STONE, 0);
    assert_eq!(block_pixels(&tile, 1, 1), floor);

    // Walls beside the pocket are visible at the pocket's height
    let mut wall = images.get_block(ids::STONE, 0, 0).expect("stone");
    CaveRenderMode::new(&world).draw(&mut wall, IVec3::new(0, 10, 1), ids::STONE, 0);
    assert_eq!(block_pixels(&tile, 0, 1), wall);

    // Columns that never touch the pocket stay empty
    for (x, z) in [(0, 0), (2, 2), (0, 2), (2, 0)] {
        assert!(block_pixels(&tile, x, z).pixels().all(|p| p[3] == 0), "column ({}, {})", x, z);
    }
}

fn world_chunk(world: &World, pos: ChunkPos) -> &voxmap::world::Chunk {
    use voxmap::world::ChunkSource;
    world.chunk(pos).expect("chunk exists")
}
