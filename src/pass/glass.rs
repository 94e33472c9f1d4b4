//! Center glass disc, specular highlight, and reflection rings.

use image::Rgba;

use super::RenderPass;
use crate::canvas::Canvas;
use crate::geometry::LensGeometry;

const GLASS_FILL: Rgba<u8> = Rgba([8, 10, 20, 255]);
const HIGHLIGHT_TINT: [u8; 3] = [180, 200, 255];
const REFLECTION_OUTLINE: Rgba<u8> = Rgba([60, 70, 100, 30]);

/// Draws the dark center glass with a soft off-center specular glow and
/// faint concentric reflection rings.
#[derive(Debug, Default)]
pub struct GlassHighlights;

impl RenderPass for GlassHighlights {
    fn apply(&self, canvas: &mut Canvas, geom: &LensGeometry) {
        let glass_r = geom.px(100.0);
        canvas.fill_disc(geom.cx, geom.cy, glass_r, GLASS_FILL);

        // Soft radial glow: nested discs shrinking toward the highlight
        // center, alpha rising quadratically as the radius shrinks.
        let hl_x = geom.cx - geom.px(30.0);
        let hl_y = geom.cy - geom.px(30.0);
        let hl_r = geom.px(45.0);
        for i in (1..=hl_r.floor() as u32).rev() {
            let alpha = (80.0 * (1.0 - i as f32 / hl_r).powi(2)) as u8;
            let [r, g, b] = HIGHLIGHT_TINT;
            canvas.fill_disc(hl_x, hl_y, i as f32, Rgba([r, g, b, alpha]));
        }

        // Subtle ring reflections on the glass.
        for k in 0..3 {
            let ref_r = glass_r - geom.px(10.0 + k as f32 * 15.0);
            if ref_r > 0.0 {
                canvas.stroke_circle(geom.cx, geom.cy, ref_r, REFLECTION_OUTLINE);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glass_center_is_near_black() {
        let geom = LensGeometry::new(512);
        let mut canvas = Canvas::new(512);
        GlassHighlights.apply(&mut canvas, &geom);

        // Sample below-right of center, away from the offset highlight.
        let x = (geom.cx + geom.px(40.0)) as u32;
        let y = (geom.cy + geom.px(40.0)) as u32;
        let pixel = canvas.data().get_pixel(x, y);
        assert!(pixel[0] < 30 && pixel[1] < 30);
    }

    #[test]
    fn highlight_brightens_offset_region() {
        let geom = LensGeometry::new(512);
        let mut canvas = Canvas::new(512);
        GlassHighlights.apply(&mut canvas, &geom);

        let hx = (geom.cx - geom.px(30.0)) as u32;
        let hy = (geom.cy - geom.px(30.0)) as u32;
        let highlight = canvas.data().get_pixel(hx, hy);
        let opposite = canvas
            .data()
            .get_pixel((geom.cx + geom.px(60.0)) as u32, (geom.cy + geom.px(60.0)) as u32);
        assert!(
            highlight[2] > opposite[2] + 20,
            "specular center should be visibly brighter: {:?} vs {:?}",
            highlight,
            opposite
        );
    }

    #[test]
    fn sub_pixel_highlight_radius_skips_cleanly() {
        let geom = LensGeometry::new(8);
        let mut canvas = Canvas::new(8);
        GlassHighlights.apply(&mut canvas, &geom);
    }
}
