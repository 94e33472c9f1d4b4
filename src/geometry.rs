//! Derived lens geometry.
//!
//! All measurements in the icon design are expressed in units of a 1024 px
//! reference canvas. [`LensGeometry`] converts them to concrete pixel
//! distances for the size being rendered, so the composition stays
//! proportionally identical from 16 px up to the full master resolution.

/// Reference canvas size the design constants are expressed against.
///
/// This is also the resolution the icon-set master is rendered at; every
/// smaller output is derived from it by downsampling.
pub const MASTER_SIZE: u32 = 1024;

/// Lens placement and radii for one render, computed once from the canvas
/// size and immutable for the duration of the render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LensGeometry {
    /// Canvas width and height in pixels.
    pub size: u32,
    /// Scale factor relative to the 1024 px reference design.
    pub scale: f32,
    /// Lens center x (canvas horizontal center).
    pub cx: f32,
    /// Lens center y (canvas center, nudged 20 units down).
    pub cy: f32,
    /// Radius of the lens glass disc (320 units).
    pub lens_radius: f32,
    /// Radius of the outer barrel disc (360 units).
    pub outer_radius: f32,
    /// Width of the brushed-metal ring band (30 units).
    pub ring_width: f32,
}

impl LensGeometry {
    /// Computes the geometry for a canvas of the given size.
    pub fn new(size: u32) -> Self {
        let scale = size as f32 / MASTER_SIZE as f32;
        let center = size as f32 / 2.0;
        let lens_radius = 320.0 * scale;
        Self {
            size,
            scale,
            cx: center,
            cy: center + 20.0 * scale,
            lens_radius,
            outer_radius: lens_radius + 40.0 * scale,
            ring_width: 30.0 * scale,
        }
    }

    /// Converts a distance in reference-design units to pixels.
    pub fn px(&self, units: f32) -> f32 {
        units * self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn master_geometry_matches_reference_units() {
        let geom = LensGeometry::new(MASTER_SIZE);
        assert_eq!(geom.scale, 1.0);
        assert_eq!(geom.cx, 512.0);
        assert_eq!(geom.cy, 532.0);
        assert_eq!(geom.lens_radius, 320.0);
        assert_eq!(geom.outer_radius, 360.0);
        assert_eq!(geom.ring_width, 30.0);
        assert_eq!(geom.px(240.0), 240.0);
    }

    #[test]
    fn proportions_are_scale_invariant() {
        let a = LensGeometry::new(256);
        let b = LensGeometry::new(512);
        let ratio_a = a.outer_radius / a.size as f32;
        let ratio_b = b.outer_radius / b.size as f32;
        assert!((ratio_a - ratio_b).abs() < 1e-6);
    }

    #[test]
    fn tiny_canvas_degrades_to_zero_radii() {
        let geom = LensGeometry::new(1);
        assert!(geom.lens_radius < 1.0);
        assert!(geom.ring_width < 1.0);
        assert!(geom.scale > 0.0);
    }
}
