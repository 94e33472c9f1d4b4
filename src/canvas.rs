//! Square RGBA canvas with the drawing primitives the render passes need.
//!
//! Everything here is plain CPU rasterization: each primitive computes a
//! per-pixel coverage value (anti-aliased on curved edges) and source-over
//! blends its color into the existing pixels. Drawing outside the canvas
//! bounds is clipped.

use image::{Rgba, RgbaImage};
use palette::{Mix, Srgb};

/// A mutable `size x size` grid of RGBA pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    data: RgbaImage,
}

impl Canvas {
    /// Creates a fully transparent canvas.
    pub fn new(size: u32) -> Self {
        Self {
            data: RgbaImage::new(size, size),
        }
    }

    /// Canvas width and height in pixels.
    pub fn size(&self) -> u32 {
        self.data.width()
    }

    /// Borrows the underlying pixel buffer.
    pub fn data(&self) -> &RgbaImage {
        &self.data
    }

    /// Consumes the canvas, returning the pixel buffer.
    pub fn into_image(self) -> RgbaImage {
        self.data
    }

    /// Source-over blends `color` into the pixel at `(x, y)`, with the
    /// color's alpha scaled by `coverage` (0.0–1.0). Out-of-bounds
    /// coordinates are ignored.
    pub fn blend_pixel(&mut self, x: i64, y: i64, color: Rgba<u8>, coverage: f32) {
        if x < 0 || y < 0 || x >= self.size() as i64 || y >= self.size() as i64 {
            return;
        }
        if coverage <= 0.0 {
            return;
        }
        let src = Rgba([
            color[0],
            color[1],
            color[2],
            (color[3] as f32 * coverage.min(1.0)).round() as u8,
        ]);
        let dst = *self.data.get_pixel(x as u32, y as u32);
        self.data.put_pixel(x as u32, y as u32, alpha_blend(src, dst));
    }

    // ---- Fills ----

    /// Fills every row with an interpolation between `top` and `bottom`,
    /// keyed on the row's fractional vertical position. Rows are written
    /// fully opaque, replacing previous content.
    pub fn fill_vertical_gradient(&mut self, top: Srgb<u8>, bottom: Srgb<u8>) {
        let size = self.size();
        let top = top.into_format::<f32>();
        let bottom = bottom.into_format::<f32>();
        for y in 0..size {
            let t = y as f32 / size as f32;
            let row: Srgb<u8> = top.mix(bottom, t).into_format();
            let pixel = Rgba([row.red, row.green, row.blue, 255]);
            for x in 0..size {
                self.data.put_pixel(x, y, pixel);
            }
        }
    }

    /// Fills a disc of the given center and radius.
    pub fn fill_disc(&mut self, cx: f32, cy: f32, radius: f32, color: Rgba<u8>) {
        if radius <= 0.0 {
            return;
        }
        self.for_each_near(cx, cy, radius + 1.0, |canvas, x, y, d| {
            let coverage = (radius - d + 0.5).clamp(0.0, 1.0);
            canvas.blend_pixel(x, y, color, coverage);
        });
    }

    /// Strokes a one-pixel-wide circle outline.
    pub fn stroke_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgba<u8>) {
        if radius <= 0.0 {
            return;
        }
        self.for_each_near(cx, cy, radius + 1.5, |canvas, x, y, d| {
            let coverage = (1.0 - (d - radius).abs()).clamp(0.0, 1.0);
            canvas.blend_pixel(x, y, color, coverage);
        });
    }

    /// Strokes a partial circular arc. `width` extends inward from `radius`;
    /// `start_deg`/`end_deg` are measured from 3 o'clock, increasing
    /// clockwise in image space (y-down).
    pub fn stroke_arc(
        &mut self,
        cx: f32,
        cy: f32,
        radius: f32,
        width: f32,
        start_deg: f32,
        end_deg: f32,
        color: Rgba<u8>,
    ) {
        if radius <= 0.0 || width <= 0.0 {
            return;
        }
        let size = self.size() as i64;
        let x0 = ((cx - radius - 1.0).floor() as i64).max(0);
        let x1 = ((cx + radius + 1.0).ceil() as i64).min(size - 1);
        let y0 = ((cy - radius - 1.0).floor() as i64).max(0);
        let y1 = ((cy + radius + 1.0).ceil() as i64).min(size - 1);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                let d = (dx * dx + dy * dy).sqrt();
                let outer = (radius - d + 0.5).clamp(0.0, 1.0);
                let inner = (d - (radius - width) + 0.5).clamp(0.0, 1.0);
                let coverage = outer.min(inner);
                if coverage <= 0.0 {
                    continue;
                }
                let deg = dy.atan2(dx).to_degrees().rem_euclid(360.0);
                if deg >= start_deg && deg <= end_deg {
                    self.blend_pixel(x, y, color, coverage);
                }
            }
        }
    }

    /// Fills a closed polygon using even-odd containment at pixel centers.
    pub fn fill_polygon(&mut self, points: &[(f32, f32)], color: Rgba<u8>) {
        if points.len() < 3 {
            return;
        }
        let size = self.size() as i64;
        let (mut min_x, mut min_y) = (f32::MAX, f32::MAX);
        let (mut max_x, mut max_y) = (f32::MIN, f32::MIN);
        for &(px, py) in points {
            min_x = min_x.min(px);
            min_y = min_y.min(py);
            max_x = max_x.max(px);
            max_y = max_y.max(py);
        }
        let x0 = (min_x.floor() as i64).max(0);
        let x1 = (max_x.ceil() as i64).min(size - 1);
        let y0 = (min_y.floor() as i64).max(0);
        let y1 = (max_y.ceil() as i64).min(size - 1);
        for y in y0..=y1 {
            for x in x0..=x1 {
                if point_in_polygon(x as f32 + 0.5, y as f32 + 0.5, points) {
                    self.blend_pixel(x, y, color, 1.0);
                }
            }
        }
    }

    // ---- Masking & compositing ----

    /// Multiplies the alpha channel by a rounded-rectangle mask covering the
    /// whole canvas with the given corner radius. Pixels outside the rounded
    /// region become fully transparent; the edge is anti-aliased.
    pub fn apply_rounded_rect_mask(&mut self, corner_radius: f32) {
        let size = self.size();
        let half = size as f32 / 2.0;
        let r = corner_radius.clamp(0.0, half);
        let inset = half - r;
        for y in 0..size {
            for x in 0..size {
                let px = (x as f32 + 0.5 - half).abs() - inset;
                let py = (y as f32 + 0.5 - half).abs() - inset;
                // Signed distance to the rounded rectangle boundary.
                let outside = (px.max(0.0).powi(2) + py.max(0.0).powi(2)).sqrt();
                let d = outside + px.max(py).min(0.0) - r;
                let coverage = (0.5 - d).clamp(0.0, 1.0);
                if coverage < 1.0 {
                    let pixel = self.data.get_pixel_mut(x, y);
                    pixel[3] = (pixel[3] as f32 * coverage).round() as u8;
                }
            }
        }
    }

    /// Source-over composites `src` onto the canvas with its top-left corner
    /// at `(x, y)`. Regions falling outside the canvas are clipped.
    pub fn composite(&mut self, src: &RgbaImage, x: i64, y: i64) {
        let size = self.size() as i64;
        for sy in 0..src.height() {
            for sx in 0..src.width() {
                let dx = x + sx as i64;
                let dy = y + sy as i64;
                if dx < 0 || dy < 0 || dx >= size || dy >= size {
                    continue;
                }
                let src_pixel = *src.get_pixel(sx, sy);
                if src_pixel[3] == 0 {
                    continue;
                }
                let dst_pixel = *self.data.get_pixel(dx as u32, dy as u32);
                self.data
                    .put_pixel(dx as u32, dy as u32, alpha_blend(src_pixel, dst_pixel));
            }
        }
    }

    /// Visits every pixel within `reach` of `(cx, cy)`, passing the distance
    /// from the pixel center.
    fn for_each_near(
        &mut self,
        cx: f32,
        cy: f32,
        reach: f32,
        mut f: impl FnMut(&mut Self, i64, i64, f32),
    ) {
        let size = self.size() as i64;
        let x0 = ((cx - reach).floor() as i64).max(0);
        let x1 = ((cx + reach).ceil() as i64).min(size - 1);
        let y0 = ((cy - reach).floor() as i64).max(0);
        let y1 = ((cy + reach).ceil() as i64).min(size - 1);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                f(self, x, y, (dx * dx + dy * dy).sqrt());
            }
        }
    }
}

/// Alpha blends two RGBA pixels (source over destination).
fn alpha_blend(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    let sa = src[3] as f32 / 255.0;
    let da = dst[3] as f32 / 255.0;

    let out_a = sa + da * (1.0 - sa);
    if out_a == 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let blend = |s: u8, d: u8| -> u8 {
        let sf = s as f32 / 255.0;
        let df = d as f32 / 255.0;
        let out = (sf * sa + df * da * (1.0 - sa)) / out_a;
        (out * 255.0).round() as u8
    };

    Rgba([
        blend(src[0], dst[0]),
        blend(src[1], dst[1]),
        blend(src[2], dst[2]),
        (out_a * 255.0).round() as u8,
    ])
}

/// Even-odd containment test against a closed polygon.
fn point_in_polygon(px: f32, py: f32, points: &[(f32, f32)]) -> bool {
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (xi, yi) = points[i];
        let (xj, yj) = points[j];
        if (yi > py) != (yj > py) && px < (xj - xi) * (py - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_canvas_is_transparent() {
        let canvas = Canvas::new(8);
        assert_eq!(canvas.size(), 8);
        assert_eq!(canvas.data().get_pixel(3, 3).0, [0, 0, 0, 0]);
    }

    #[test]
    fn gradient_interpolates_between_endpoints() {
        let mut canvas = Canvas::new(64);
        canvas.fill_vertical_gradient(Srgb::new(100, 0, 0), Srgb::new(0, 0, 100));
        let top = canvas.data().get_pixel(0, 0);
        let bottom = canvas.data().get_pixel(0, 63);
        assert_eq!(top.0, [100, 0, 0, 255]);
        assert!(bottom[2] > 90, "bottom row should be nearly pure blue");
        // Midpoint carries roughly half of each endpoint.
        let mid = canvas.data().get_pixel(0, 32);
        assert!(mid[0] > 30 && mid[0] < 70);
        assert!(mid[2] > 30 && mid[2] < 70);
    }

    #[test]
    fn disc_fills_center_and_clips_outside() {
        let mut canvas = Canvas::new(20);
        canvas.fill_disc(10.0, 10.0, 5.0, Rgba([255, 0, 0, 255]));
        assert_eq!(canvas.data().get_pixel(10, 10).0, [255, 0, 0, 255]);
        assert_eq!(canvas.data().get_pixel(0, 0).0, [0, 0, 0, 0]);
        // Drawing centered off-canvas must not panic.
        canvas.fill_disc(-3.0, -3.0, 5.0, Rgba([0, 255, 0, 255]));
    }

    #[test]
    fn translucent_disc_blends_over_background() {
        let mut canvas = Canvas::new(10);
        canvas.fill_vertical_gradient(Srgb::new(0, 0, 200), Srgb::new(0, 0, 200));
        canvas.fill_disc(5.0, 5.0, 4.0, Rgba([200, 0, 0, 128]));
        let pixel = canvas.data().get_pixel(5, 5);
        assert!(pixel[0] > 80, "should pick up red from the disc");
        assert!(pixel[2] > 80, "should keep blue from the background");
        assert_eq!(pixel[3], 255);
    }

    #[test]
    fn stroke_circle_leaves_interior_untouched() {
        let mut canvas = Canvas::new(40);
        canvas.stroke_circle(20.0, 20.0, 10.0, Rgba([255, 255, 255, 255]));
        assert_eq!(canvas.data().get_pixel(20, 20).0, [0, 0, 0, 0]);
        // A point on the ring (20, 20 - 10) lands on the stroke.
        assert!(canvas.data().get_pixel(20, 9)[3] > 0 || canvas.data().get_pixel(20, 10)[3] > 0);
    }

    #[test]
    fn arc_respects_angular_range() {
        let mut canvas = Canvas::new(40);
        // Sweep over the top of the center (200..290 degrees, y-down).
        canvas.stroke_arc(20.0, 20.0, 12.0, 2.0, 200.0, 290.0, Rgba([255, 0, 0, 255]));
        // Directly above center is inside the sweep (270 degrees).
        assert!(canvas.data().get_pixel(20, 9)[3] > 0);
        // Directly below center (90 degrees) must stay empty.
        assert_eq!(canvas.data().get_pixel(20, 31)[3], 0);
    }

    #[test]
    fn polygon_fill_covers_triangle_interior() {
        let mut canvas = Canvas::new(20);
        let tri = [(2.0, 2.0), (18.0, 2.0), (10.0, 18.0)];
        canvas.fill_polygon(&tri, Rgba([0, 255, 0, 255]));
        assert_eq!(canvas.data().get_pixel(10, 5).0, [0, 255, 0, 255]);
        assert_eq!(canvas.data().get_pixel(1, 18).0, [0, 0, 0, 0]);
    }

    #[test]
    fn rounded_mask_clears_corners_keeps_center() {
        let mut canvas = Canvas::new(100);
        canvas.fill_vertical_gradient(Srgb::new(50, 50, 50), Srgb::new(50, 50, 50));
        canvas.apply_rounded_rect_mask(22.0);
        assert_eq!(canvas.data().get_pixel(0, 0)[3], 0);
        assert_eq!(canvas.data().get_pixel(99, 0)[3], 0);
        assert_eq!(canvas.data().get_pixel(0, 99)[3], 0);
        assert_eq!(canvas.data().get_pixel(99, 99)[3], 0);
        assert_eq!(canvas.data().get_pixel(50, 50)[3], 255);
        // Straight edge midpoints stay opaque.
        assert_eq!(canvas.data().get_pixel(50, 0)[3], 255);
        assert_eq!(canvas.data().get_pixel(0, 50)[3], 255);
    }

    #[test]
    fn composite_clips_and_blends() {
        let mut canvas = Canvas::new(10);
        canvas.fill_vertical_gradient(Srgb::new(255, 0, 0), Srgb::new(255, 0, 0));
        let overlay = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 255, 255]));
        canvas.composite(&overlay, 8, 8);
        assert_eq!(canvas.data().get_pixel(9, 9).0, [0, 0, 255, 255]);
        assert_eq!(canvas.data().get_pixel(5, 5).0, [255, 0, 0, 255]);
    }
}
