//! "RTMP" label under the lens.

use image::Rgba;

use super::RenderPass;
use crate::canvas::Canvas;
use crate::geometry::LensGeometry;
use crate::text::{rasterize_text, FontStack};

const LABEL_COLOR: Rgba<u8> = Rgba([200, 210, 230, 200]);

/// Draws the protocol label, horizontally centered by measuring the laid-out
/// text width. A host without usable fonts simply gets no label; the render
/// itself never fails on font availability.
#[derive(Debug)]
pub struct Label {
    pub text: String,
    pub fonts: FontStack,
}

impl Default for Label {
    fn default() -> Self {
        Self {
            text: "RTMP".to_owned(),
            fonts: FontStack::default(),
        }
    }
}

impl RenderPass for Label {
    fn apply(&self, canvas: &mut Canvas, geom: &LensGeometry) {
        let font_px = geom.px(72.0);
        let Some(raster) = rasterize_text(&self.text, font_px, LABEL_COLOR, &self.fonts) else {
            return;
        };

        let x = (geom.size as f32 / 2.0 - raster.width() as f32 / 2.0).round() as i64;
        let y = (geom.cy + geom.px(290.0)).round() as i64;
        canvas.composite(&raster, x, y);
    }
}
