//! Layer compositing: paints a column's layers onto the tile bottom-up

use image::{RgbaImage, imageops};

use super::column::Layer;

/// Alpha-composite `layers` onto `tile` with their top-left corner at
/// `(dx, dy)`, deepest layer first
///
/// Layers come in scan order (top block first), so the stack is drained
/// from the back. Parts falling outside the tile are clipped.
pub fn composite(mut layers: Vec<Layer>, tile: &mut RgbaImage, dx: i64, dy: i64) {
    while let Some(layer) = layers.pop() {
        imageops::overlay(tile, &layer.image, dx, dy);
    }
}
