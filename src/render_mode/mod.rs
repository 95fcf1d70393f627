//! Render modes: per-block visibility and image post-processing hooks
//!
//! The tile renderer consults the active mode for every block it visits and
//! never knows which mode it is talking to.

pub mod cave;
pub mod highlight;
pub mod lighting;

pub use cave::CaveRenderMode;
pub use highlight::HighlightRenderMode;
pub use lighting::LightingRenderMode;

use image::RgbaImage;

use crate::config::{RenderConfig, RenderModeKind};
use crate::core::BlockPos;
use crate::world::ChunkSource;

/// Strategy controlling which blocks are drawn and how their images look
pub trait RenderMode {
    /// Skip this block entirely, as if it were air
    fn is_hidden(&self, pos: BlockPos, id: u16, data: u16) -> bool;

    /// Modify the resolved block image in place before it is composited
    fn draw(&self, image: &mut RgbaImage, pos: BlockPos, id: u16, data: u16);
}

/// Draws every block as its texture
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainRenderMode;

impl RenderMode for PlainRenderMode {
    fn is_hidden(&self, _pos: BlockPos, _id: u16, _data: u16) -> bool {
        false
    }

    fn draw(&self, _image: &mut RgbaImage, _pos: BlockPos, _id: u16, _data: u16) {}
}

/// Several modes applied together: a block is hidden if any mode hides it,
/// and images pass through every mode's `draw` in order
#[derive(Default)]
pub struct MultiplexRenderMode<'a> {
    modes: Vec<Box<dyn RenderMode + 'a>>,
}

impl<'a> MultiplexRenderMode<'a> {
    pub fn new() -> Self {
        Self { modes: Vec::new() }
    }

    pub fn with(mut self, mode: impl RenderMode + 'a) -> Self {
        self.modes.push(Box::new(mode));
        self
    }

    pub fn push(&mut self, mode: Box<dyn RenderMode + 'a>) {
        self.modes.push(mode);
    }
}

impl RenderMode for MultiplexRenderMode<'_> {
    fn is_hidden(&self, pos: BlockPos, id: u16, data: u16) -> bool {
        self.modes.iter().any(|m| m.is_hidden(pos, id, data))
    }

    fn draw(&self, image: &mut RgbaImage, pos: BlockPos, id: u16, data: u16) {
        for mode in &self.modes {
            mode.draw(image, pos, id, data);
        }
    }
}

/// Build the render mode selected by `config`, reading light and cave
/// information from `world`
pub fn from_config<'w, W>(config: &RenderConfig, world: &'w W) -> Box<dyn RenderMode + 'w>
where
    W: ChunkSource + ?Sized,
{
    let base: Box<dyn RenderMode + 'w> = match config.render_mode {
        RenderModeKind::Plain => Box::new(PlainRenderMode),
        RenderModeKind::Daylight => Box::new(
            LightingRenderMode::day(world).with_intensity(config.lighting_intensity),
        ),
        RenderModeKind::Nightlight => Box::new(
            LightingRenderMode::night(world).with_intensity(config.lighting_intensity),
        ),
        RenderModeKind::Cave => Box::new(CaveRenderMode::new(world)),
        RenderModeKind::Highlight => {
            return Box::new(HighlightRenderMode::from_config(&config.highlight));
        }
    };

    if config.highlight.blocks.is_empty() {
        return base;
    }
    let mut modes = MultiplexRenderMode::new();
    modes.push(base);
    Box::new(modes.with(HighlightRenderMode::from_config(&config.highlight)))
}
