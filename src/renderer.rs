//! Icon renderer: the public rendering entry point.

use crate::canvas::Canvas;
use crate::error::Error;
use crate::geometry::LensGeometry;
use crate::pass::{Label, PassPipeline};
use crate::text::FontStack;

/// Renders the camera-lens icon at any pixel size.
///
/// Rendering is a pure function of the requested size: the same size always
/// produces the same pixels (font availability on the host can only change
/// the label's glyphs, never the outcome of the call). Each render derives
/// its geometry from the size and walks the fixed pass pipeline.
///
/// # Example
///
/// ```
/// use vcam_icon::IconRenderer;
///
/// let canvas = IconRenderer::new().render(64).unwrap();
/// assert_eq!(canvas.size(), 64);
/// ```
#[derive(Debug, Default)]
pub struct IconRenderer {
    pipeline: PassPipeline,
}

impl IconRenderer {
    /// Creates a renderer with the default composition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a renderer using a custom font fallback stack for the label.
    pub fn with_fonts(fonts: FontStack) -> Self {
        Self {
            pipeline: PassPipeline {
                label: Label {
                    fonts,
                    ..Label::default()
                },
                ..PassPipeline::default()
            },
        }
    }

    /// Renders the icon at exactly `size x size` pixels.
    ///
    /// Fails only on `size == 0`; a 1 px render degrades gracefully with
    /// every sub-pixel shape fading out rather than erroring.
    pub fn render(&self, size: u32) -> Result<Canvas, Error> {
        if size == 0 {
            return Err(Error::InvalidSize);
        }
        let geom = LensGeometry::new(size);
        let mut canvas = Canvas::new(size);
        self.pipeline.apply(&mut canvas, &geom);
        Ok(canvas)
    }
}

/// Renders the icon with the default composition. Convenience for
/// [`IconRenderer::new().render(size)`](IconRenderer::render).
pub fn render(size: u32) -> Result<Canvas, Error> {
    IconRenderer::new().render(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_size_is_rejected() {
        assert!(matches!(render(0), Err(Error::InvalidSize)));
    }

    #[test]
    fn render_has_exact_dimensions() {
        for size in [1, 16, 57, 256] {
            let canvas = render(size).unwrap();
            assert_eq!(canvas.size(), size);
            assert_eq!(canvas.data().width(), size);
            assert_eq!(canvas.data().height(), size);
        }
    }

    #[test]
    fn corners_transparent_interior_opaque() {
        let canvas = render(128).unwrap();
        let img = canvas.data();
        assert_eq!(img.get_pixel(0, 0)[3], 0);
        assert_eq!(img.get_pixel(127, 0)[3], 0);
        assert_eq!(img.get_pixel(0, 127)[3], 0);
        assert_eq!(img.get_pixel(127, 127)[3], 0);
        assert_eq!(img.get_pixel(64, 64)[3], 255);
    }

    #[test]
    fn render_is_deterministic() {
        let a = render(96).unwrap();
        let b = render(96).unwrap();
        assert_eq!(a.data(), b.data());
    }

    #[test]
    fn one_pixel_render_does_not_panic() {
        let canvas = render(1).unwrap();
        assert_eq!(canvas.size(), 1);
    }

    #[test]
    fn lens_ring_radius_is_scale_invariant() {
        // Measure the outer ring edge by scanning inward along the row
        // through the lens center until the bright metallic band starts.
        fn measured_ring_ratio(size: u32) -> f32 {
            let canvas = render(size).unwrap();
            let geom = LensGeometry::new(size);
            let y = geom.cy.round() as u32;
            let cx = geom.cx as u32;
            for x in 0..cx {
                let p = canvas.data().get_pixel(x, y);
                if p[0] > 70 && p[1] > 70 {
                    return (geom.cx - x as f32) / size as f32;
                }
            }
            panic!("metallic ring not found at size {size}");
        }

        let r256 = measured_ring_ratio(256);
        let r512 = measured_ring_ratio(512);
        assert!(
            (r256 - r512).abs() < 2.0 / 256.0,
            "ring ratio drifted: {r256} vs {r512}"
        );
    }

    #[test]
    fn broadcast_dot_region_is_red_dominant() {
        let canvas = render(256).unwrap();
        let geom = LensGeometry::new(256);
        let x = (geom.cx + geom.px(220.0)) as u32;
        let y = (geom.cy - geom.px(220.0)) as u32;
        let p = canvas.data().get_pixel(x, y);
        assert!(p[0] > p[1] && p[0] > p[2] && p[0] > 150, "dot pixel {:?}", p);
    }
}
