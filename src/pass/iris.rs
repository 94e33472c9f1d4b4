//! Aperture iris blades.

use std::f32::consts::{FRAC_PI_2, TAU};

use image::Rgba;

use super::RenderPass;
use crate::canvas::Canvas;
use crate::geometry::LensGeometry;

const BLADE_COUNT: u32 = 6;

/// Angular offset (radians) applied to each blade's inner vertices. This is
/// the design's literal geometry; the asymmetric quads overlap to suggest
/// rotated mechanical blades.
const INNER_TWIST: f32 = 0.15;

const BLADE_ALPHA: u8 = 200;

/// Draws six overlapping quadrilaterals arranged radially, alternating
/// between two dark blue-grey shades.
#[derive(Debug, Default)]
pub struct IrisBlades;

impl RenderPass for IrisBlades {
    fn apply(&self, canvas: &mut Canvas, geom: &LensGeometry) {
        let blade_r = geom.px(240.0);
        let inner_r = geom.px(120.0);

        for i in 0..BLADE_COUNT {
            let angle = i as f32 * TAU / BLADE_COUNT as f32 - FRAC_PI_2;
            let next = (i + 1) as f32 * TAU / BLADE_COUNT as f32 - FRAC_PI_2;
            let mid = (angle + next) / 2.0;

            let points = [
                polar(geom, blade_r, angle),
                polar(geom, blade_r * 0.85, mid),
                polar(geom, inner_r, mid + INNER_TWIST),
                polar(geom, inner_r, angle + INNER_TWIST),
            ];

            let shade = 35 + (i % 2) as u8 * 8;
            canvas.fill_polygon(
                &points,
                Rgba([shade, shade + 5, shade + 15, BLADE_ALPHA]),
            );
        }
    }
}

fn polar(geom: &LensGeometry, radius: f32, angle: f32) -> (f32, f32) {
    (
        geom.cx + radius * angle.cos(),
        geom.cy + radius * angle.sin(),
    )
}
