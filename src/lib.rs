//! vcam-icon: procedural app icon generator for the RTMP virtual camera.
//!
//! This crate renders the application icon (a stylized camera lens with a
//! red broadcast indicator on a rounded-rect gradient background) entirely
//! in code, then emits it as a macOS `.appiconset` bundle: ten PNGs plus a
//! `Contents.json` manifest.
//!
//! # Rendering
//!
//! [`IconRenderer`] produces the composition at any pixel size; every
//! measurement scales from a 1024 px reference design, so the output is
//! proportionally identical at 16 px and 1024 px:
//!
//! ```
//! use vcam_icon::IconRenderer;
//!
//! let canvas = IconRenderer::new().render(128)?;
//! assert_eq!(canvas.size(), 128);
//! # Ok::<(), vcam_icon::Error>(())
//! ```
//!
//! # Icon-set assembly
//!
//! [`IconSetBuilder`] renders the 1024 px master once, derives the
//! `{16,32,128,256,512} x {1x,2x}` outputs by Lanczos downsampling, and
//! writes the bundle:
//!
//! ```no_run
//! use vcam_icon::IconSetBuilder;
//!
//! IconSetBuilder::new("Assets.xcassets/AppIcon.appiconset").generate()?;
//! # Ok::<(), vcam_icon::Error>(())
//! ```

mod canvas;
mod error;
mod geometry;
mod iconset;
mod pass;
mod renderer;
mod text;

pub use canvas::Canvas;
pub use error::Error;
pub use geometry::{LensGeometry, MASTER_SIZE};
pub use iconset::{
    default_entries, IconSetBuilder, IconSetEntry, Idiom, Manifest, ManifestImage, ManifestInfo,
    ICON_SET_POINTS,
};
pub use renderer::{render, IconRenderer};
pub use text::FontStack;
