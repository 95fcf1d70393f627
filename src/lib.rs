//! Voxmap - Top-down map tiles for block worlds

pub mod core;
pub mod world;
pub mod biome;
pub mod texture;
pub mod render_mode;
pub mod render;
pub mod config;

pub use config::{RenderConfig, RenderModeKind};
pub use core::{Error, Result};
pub use render::TopdownTileRenderer;
