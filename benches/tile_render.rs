use criterion::{criterion_group, criterion_main, Criterion, black_box};

use voxmap::core::{ChunkPos, TilePos};
use voxmap::render::{ColumnScanner, NeighborAdjuster, TopdownTileRenderer};
use voxmap::render_mode::PlainRenderMode;
use voxmap::texture::{BlockPalette, PaletteBlockImages};
use voxmap::world::{ChunkSource, DemoWorldGenerator, World};

fn demo_world() -> World {
    let mut world = World::new();
    DemoWorldGenerator::new(12345).generate_region(
        &mut world,
        ChunkPos::new(-1, -1),
        ChunkPos::new(2, 2),
    );
    world
}

fn bench_tile_plain(c: &mut Criterion) {
    let world = demo_world();
    let images = PaletteBlockImages::new(&BlockPalette::default(), 12);
    let adjuster = NeighborAdjuster::new(&world);
    let renderer = TopdownTileRenderer::new(&world, &images, &PlainRenderMode, 1)
        .with_adjuster(&adjuster);

    c.bench_function("tile_render_plain", |b| {
        b.iter(|| renderer.render(black_box(TilePos::new(0, 0))))
    });
}

fn bench_tile_preblit(c: &mut Criterion) {
    let world = demo_world();
    let images = PaletteBlockImages::new(&BlockPalette::default(), 12);
    let adjuster = NeighborAdjuster::new(&world);
    let renderer = TopdownTileRenderer::new(&world, &images, &PlainRenderMode, 1)
        .with_adjuster(&adjuster)
        .with_water_preblit(true);

    c.bench_function("tile_render_preblit", |b| {
        b.iter(|| renderer.render(black_box(TilePos::new(0, 0))))
    });
}

fn bench_tile_wide(c: &mut Criterion) {
    let world = demo_world();
    let images = PaletteBlockImages::new(&BlockPalette::default(), 4);
    let renderer = TopdownTileRenderer::new(&world, &images, &PlainRenderMode, 2);

    c.bench_function("tile_render_2x2_chunks", |b| {
        b.iter(|| renderer.render(black_box(TilePos::new(0, 0))))
    });
}

fn bench_column_scan(c: &mut Criterion) {
    let world = demo_world();
    let images = PaletteBlockImages::new(&BlockPalette::default(), 12);
    let scanner = ColumnScanner::new(&images, &PlainRenderMode);
    let Some(chunk) = world.chunk(ChunkPos::new(0, 0)) else {
        return;
    };

    c.bench_function("column_scan_chunk", |b| {
        b.iter(|| {
            let mut layers = 0;
            for z in 0..16 {
                for x in 0..16 {
                    layers += scanner.scan_column(black_box(chunk), x, z).map_or(0, |l| l.len());
                }
            }
            layers
        })
    });
}

criterion_group!(
    benches,
    bench_tile_plain,
    bench_tile_preblit,
    bench_tile_wide,
    bench_column_scan,
);
criterion_main!(benches);
