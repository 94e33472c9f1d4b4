//! Background gradient and rounded-rectangle mask.

use palette::Srgb;

use super::RenderPass;
use crate::canvas::Canvas;
use crate::geometry::LensGeometry;

/// macOS icons use ~22.37% corner radius.
const CORNER_RADIUS_RATIO: f32 = 0.2237;

const GRADIENT_TOP: (u8, u8, u8) = (45, 55, 72);
const GRADIENT_BOTTOM: (u8, u8, u8) = (26, 32, 44);

/// Fills the canvas with a dark vertical gradient, then clips it to the
/// platform's rounded-rectangle icon shape.
#[derive(Debug, Default)]
pub struct Background;

impl RenderPass for Background {
    fn apply(&self, canvas: &mut Canvas, geom: &LensGeometry) {
        let (tr, tg, tb) = GRADIENT_TOP;
        let (br, bg, bb) = GRADIENT_BOTTOM;
        canvas.fill_vertical_gradient(Srgb::new(tr, tg, tb), Srgb::new(br, bg, bb));
        canvas.apply_rounded_rect_mask(geom.size as f32 * CORNER_RADIUS_RATIO);
    }
}
