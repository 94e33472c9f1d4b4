//! Red broadcast indicator: glowing dot plus signal waves.

use image::Rgba;

use super::RenderPass;
use crate::canvas::Canvas;
use crate::geometry::LensGeometry;

const GLOW_COLOR: [u8; 3] = [255, 30, 30];
const DOT_FILL: Rgba<u8> = Rgba([230, 40, 40, 255]);
const DOT_HIGHLIGHT: Rgba<u8> = Rgba([255, 150, 150, 120]);
const WAVE_COLOR: [u8; 3] = [255, 80, 80];

/// Wave sweep in image-space degrees (3-o'clock origin, clockwise): the 90°
/// arc over the top of the dot.
const WAVE_START_DEG: f32 = 200.0;
const WAVE_END_DEG: f32 = 290.0;

/// Draws the red broadcast dot above-right of the lens, with an outward
/// fading halo, a glossy highlight, and three emanating signal waves.
#[derive(Debug, Default)]
pub struct BroadcastIndicator;

impl RenderPass for BroadcastIndicator {
    fn apply(&self, canvas: &mut Canvas, geom: &LensGeometry) {
        let dot_x = geom.cx + geom.px(220.0);
        let dot_y = geom.cy - geom.px(220.0);
        let dot_r = geom.px(55.0);

        // Halo: discs shrinking toward the dot, alpha rising linearly as
        // the radius approaches the dot edge.
        let glow = geom.px(40.0);
        let [gr, gg, gb] = GLOW_COLOR;
        for i in (1..=glow.floor() as u32).rev() {
            let alpha = (60.0 * (1.0 - i as f32 / glow)) as u8;
            canvas.fill_disc(dot_x, dot_y, dot_r + i as f32, Rgba([gr, gg, gb, alpha]));
        }

        canvas.fill_disc(dot_x, dot_y, dot_r, DOT_FILL);
        canvas.fill_disc(
            dot_x - geom.px(12.0),
            dot_y - geom.px(12.0),
            geom.px(18.0),
            DOT_HIGHLIGHT,
        );

        // Signal waves, fainter as they travel outward.
        let [wr, wg, wb] = WAVE_COLOR;
        for k in 0..3u32 {
            let wave_r = dot_r + geom.px(30.0 + k as f32 * 28.0);
            let width = geom.px(3.0).max(1.0);
            let alpha = (150 - k * 40) as u8;
            canvas.stroke_arc(
                dot_x,
                dot_y,
                wave_r,
                width,
                WAVE_START_DEG,
                WAVE_END_DEG,
                Rgba([wr, wg, wb, alpha]),
            );
        }
    }
}
