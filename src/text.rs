//! Label text rasterization through resvg.
//!
//! The label is laid out as an SVG `<text>` element so that font selection,
//! shaping, and measurement all go through usvg's font machinery. The
//! [`FontStack`] is an ordered fallback chain: each family is tried in turn
//! and the generic `sans-serif` family closes the chain, so a missing
//! preferred font degrades the label's appearance without ever failing the
//! render. When no usable font exists at all, rasterization returns `None`
//! and the caller simply skips the label.

use std::sync::Arc;

use image::{Rgba, RgbaImage};
use once_cell::sync::Lazy;
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{fontdb, Options, Tree};

/// Ordered font fallback chain for the icon label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontStack {
    /// Candidate font family names, most preferred first. The generic
    /// `sans-serif` family is always appended at render time.
    pub families: Vec<String>,
}

impl Default for FontStack {
    fn default() -> Self {
        Self {
            families: vec!["SF Compact".to_owned(), "Helvetica".to_owned()],
        }
    }
}

impl FontStack {
    /// Builds a stack from a list of family names.
    pub fn new(families: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            families: families.into_iter().map(Into::into).collect(),
        }
    }

    /// Renders a CSS font-family list closing with the generic fallback.
    fn font_family_attr(&self) -> String {
        let mut attr = String::new();
        for family in &self.families {
            attr.push('\'');
            attr.push_str(family);
            attr.push_str("', ");
        }
        attr.push_str("sans-serif");
        attr
    }
}

/// Rasterizes `text` at the given pixel font size, tightly cropped to the
/// laid-out glyph bounding box.
///
/// Returns `None` when the text lays out to a degenerate box, typically
/// because no candidate font could be resolved on this host.
pub fn rasterize_text(
    text: &str,
    font_px: f32,
    color: Rgba<u8>,
    stack: &FontStack,
) -> Option<RgbaImage> {
    if font_px <= 0.0 || text.is_empty() {
        return None;
    }

    // Layout canvas generously sized so the text cannot clip; the result is
    // cropped to the measured bounding box afterwards.
    let span = (font_px.ceil() as u32).max(1);
    let width = span * (text.len() as u32 + 2);
    let height = span * 3;
    let svg = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='{width}' height='{height}'>\
         <text x='{x}' y='{y}' font-family=\"{families}\" font-size='{font_px}' \
         fill='#{r:02x}{g:02x}{b:02x}' fill-opacity='{opacity}'>{text}</text></svg>",
        x = span,
        y = span * 2,
        families = stack.font_family_attr(),
        r = color[0],
        g = color[1],
        b = color[2],
        opacity = color[3] as f32 / 255.0,
        text = escape_xml(text),
    );

    let mut opt = Options::default();
    opt.fontdb = shared_font_db();
    let tree = Tree::from_str(&svg, &opt).ok()?;

    let bbox = tree.root().abs_bounding_box();
    if bbox.width() < 1.0 || bbox.height() < 1.0 {
        return None;
    }

    let mut pixmap = Pixmap::new(bbox.width().ceil() as u32, bbox.height().ceil() as u32)?;
    let transform = Transform::from_translate(-bbox.left(), -bbox.top());
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Some(pixmap_to_rgba_image(&pixmap))
}

/// System font database, loaded once per process.
fn shared_font_db() -> Arc<fontdb::Database> {
    static DB: Lazy<Arc<fontdb::Database>> = Lazy::new(|| {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        Arc::new(db)
    });
    Arc::clone(&DB)
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Converts a tiny_skia Pixmap to an image::RgbaImage.
fn pixmap_to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let width = pixmap.width();
    let height = pixmap.height();
    let mut img = RgbaImage::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let pixel = pixmap.pixel(x, y).unwrap();
            // tiny_skia uses premultiplied alpha, we need to unpremultiply
            let (r, g, b, a) =
                unpremultiply(pixel.red(), pixel.green(), pixel.blue(), pixel.alpha());
            img.put_pixel(x, y, Rgba([r, g, b, a]));
        }
    }

    img
}

/// Unpremultiplies a premultiplied alpha pixel.
fn unpremultiply(r: u8, g: u8, b: u8, a: u8) -> (u8, u8, u8, u8) {
    if a == 0 {
        (0, 0, 0, 0)
    } else {
        let a_f = a as f32 / 255.0;
        (
            (r as f32 / a_f).round().min(255.0) as u8,
            (g as f32 / a_f).round().min(255.0) as u8,
            (b as f32 / a_f).round().min(255.0) as u8,
            a,
        )
    }
}
