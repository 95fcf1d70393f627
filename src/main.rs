//! Voxmap - renders one top-down map tile of a generated demo world
//!
//! Usage: cargo run --release -- [OPTIONS]
//!
//! Options:
//!   --config <PATH>   JSON render config (default: built-in settings)
//!   --seed <SEED>     Demo world seed (default: 12345)
//!   --tile <X,Y>      Tile coordinate (default: 0,0)
//!   --out <PATH>      Output PNG (default: tile_<X>_<Y>.png)
//!   --mode <NAME>     plain, daylight, nightlight, cave or highlight
//!   --preblit         Collapse deep water into one opaque layer

use std::path::{Path, PathBuf};
use std::time::Instant;

use voxmap::core::{ChunkPos, TilePos, logging};
use voxmap::render::NeighborAdjuster;
use voxmap::texture::PaletteBlockImages;
use voxmap::world::{DemoWorldGenerator, World};
use voxmap::{Error, RenderConfig, RenderModeKind, Result, TopdownTileRenderer, render_mode};

fn main() {
    logging::init();

    let args: Vec<String> = std::env::args().collect();
    if let Err(e) = run(&args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &[String]) -> Result<()> {
    let mut config = match parse_str_arg(args, "--config") {
        Some(path) => RenderConfig::load(Path::new(&path))?,
        None => RenderConfig::default(),
    };
    if let Some(name) = parse_str_arg(args, "--mode") {
        config.render_mode = RenderModeKind::from_name(&name)
            .ok_or_else(|| Error::InvalidConfig(format!("unknown render mode '{}'", name)))?;
    }
    if args.iter().any(|a| a == "--preblit") {
        config.water_preblit = true;
    }
    config.validate()?;

    let seed = parse_u32_arg(args, "--seed").unwrap_or(12345);
    let tile = parse_tile_arg(args, "--tile").unwrap_or_default();
    let out = parse_str_arg(args, "--out")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(format!("tile_{}_{}.png", tile.x, tile.y)));

    log::info!(
        "Rendering tile ({}, {}) of seed {} in {:?} mode",
        tile.x,
        tile.y,
        seed,
        config.render_mode
    );

    // One extra ring of chunks so border columns see their neighbors
    let start = Instant::now();
    let width = config.tile_width as i32;
    let min = ChunkPos::new(tile.x * width - 1, tile.y * width - 1);
    let max = ChunkPos::new(tile.x * width + width, tile.y * width + width);
    let mut world = World::new();
    DemoWorldGenerator::new(seed).generate_region(&mut world, min, max);
    log::info!(
        "Generated {} chunks in {:.1}ms",
        world.chunk_count(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    let images = PaletteBlockImages::new(&config.palette()?, config.texture_size);
    let mode = render_mode::from_config(&config, &world);
    let adjuster = NeighborAdjuster::new(&world);
    let renderer = TopdownTileRenderer::new(&world, &images, mode.as_ref(), config.tile_width)
        .with_adjuster(&adjuster)
        .with_water_preblit(config.water_preblit);

    let start = Instant::now();
    let image = renderer.render(tile)?;
    log::info!(
        "Rendered {}x{} tile in {:.1}ms",
        image.width(),
        image.height(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    image.save(&out)?;
    log::info!("Wrote {}", out.display());
    Ok(())
}

fn parse_u32_arg(args: &[String], flag: &str) -> Option<u32> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn parse_tile_arg(args: &[String], flag: &str) -> Option<TilePos> {
    let value = parse_str_arg(args, flag)?;
    let (x, y) = value.split_once(',')?;
    Some(TilePos::new(x.trim().parse().ok()?, y.trim().parse().ok()?))
}
