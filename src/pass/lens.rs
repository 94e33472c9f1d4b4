//! Lens barrel, brushed-metal ring, and glass disc.

use std::f32::consts::PI;

use image::Rgba;

use super::RenderPass;
use crate::canvas::Canvas;
use crate::geometry::LensGeometry;

const BARREL_FILL: Rgba<u8> = Rgba([20, 25, 35, 255]);
const GLASS_FILL: Rgba<u8> = Rgba([15, 18, 28, 255]);

/// Draws the camera lens assembly: a dark barrel disc, a sinusoidal
/// brushed-metal ring band, and the near-black lens glass.
#[derive(Debug, Default)]
pub struct LensAssembly;

impl RenderPass for LensAssembly {
    fn apply(&self, canvas: &mut Canvas, geom: &LensGeometry) {
        canvas.fill_disc(geom.cx, geom.cy, geom.outer_radius, BARREL_FILL);

        // Concentric strokes shrinking inward one pixel per stroke; the
        // brightness sweep peaks at the band's midpoint.
        let strokes = geom.ring_width.floor() as u32;
        for i in 0..strokes {
            let t = i as f32 / geom.ring_width;
            let v = (100.0 + 80.0 * (t * PI).sin()) as u8;
            canvas.stroke_circle(
                geom.cx,
                geom.cy,
                geom.outer_radius - i as f32,
                Rgba([v, v, v + 10, 255]),
            );
        }

        canvas.fill_disc(geom.cx, geom.cy, geom.lens_radius, GLASS_FILL);
    }
}
