//! Highlight render mode: overlays a color on selected block ids

use std::collections::HashSet;

use image::RgbaImage;

use super::RenderMode;
use crate::config::HighlightConfig;
use crate::core::BlockPos;

/// Blends a fixed color over every visible pixel of the chosen blocks
pub struct HighlightRenderMode {
    blocks: HashSet<u16>,
    color: [u8; 4],
}

impl HighlightRenderMode {
    /// `color` alpha is the blend weight
    pub fn new(blocks: impl IntoIterator<Item = u16>, color: [u8; 4]) -> Self {
        Self {
            blocks: blocks.into_iter().collect(),
            color,
        }
    }

    pub fn from_config(config: &HighlightConfig) -> Self {
        Self::new(config.blocks.iter().copied(), config.color)
    }

    pub fn is_highlighted(&self, id: u16) -> bool {
        self.blocks.contains(&id)
    }
}

impl RenderMode for HighlightRenderMode {
    fn is_hidden(&self, _pos: BlockPos, _id: u16, _data: u16) -> bool {
        false
    }

    fn draw(&self, image: &mut RgbaImage, _pos: BlockPos, id: u16, _data: u16) {
        if !self.is_highlighted(id) {
            return;
        }
        let weight = self.color[3] as f32 / 255.0;
        for pixel in image.pixels_mut() {
            if pixel[3] == 0 {
                continue;
            }
            for c in 0..3 {
                let mixed = pixel[c] as f32 * (1.0 - weight) + self.color[c] as f32 * weight;
                pixel[c] = mixed.round() as u8;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::ids;
    use glam::IVec3;
    use image::Rgba;

    #[test]
    fn test_only_selected_blocks_change() {
        let mode = HighlightRenderMode::new([ids::LOG], [255, 0, 0, 255]);
        let mut log = RgbaImage::from_pixel(2, 2, Rgba([10, 20, 30, 200]));
        let mut stone = log.clone();

        mode.draw(&mut log, IVec3::ZERO, ids::LOG, 0);
        mode.draw(&mut stone, IVec3::ZERO, ids::STONE, 0);

        assert_eq!(*log.get_pixel(0, 0), Rgba([255, 0, 0, 200]));
        assert_eq!(*stone.get_pixel(0, 0), Rgba([10, 20, 30, 200]));
    }

    #[test]
    fn test_half_blend_skips_transparent_pixels() {
        let mode = HighlightRenderMode::new([ids::GLASS], [200, 0, 0, 128]);
        let mut image = RgbaImage::from_pixel(2, 1, Rgba([0, 100, 0, 255]));
        image.put_pixel(1, 0, Rgba([0, 100, 0, 0]));

        mode.draw(&mut image, IVec3::ZERO, ids::GLASS, 0);

        let weight = 128.0f32 / 255.0;
        let red = (200.0 * weight).round() as u8;
        let green = (100.0 * (1.0 - weight)).round() as u8;
        assert_eq!(*image.get_pixel(0, 0), Rgba([red, green, 0, 255]));
        assert_eq!(*image.get_pixel(1, 0), Rgba([0, 100, 0, 0]));
    }

    #[test]
    fn test_never_hides() {
        let mode = HighlightRenderMode::new([ids::STONE], [0, 0, 0, 255]);
        assert!(!mode.is_hidden(IVec3::ZERO, ids::STONE, 0));
    }
}
