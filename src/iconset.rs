//! Icon-set assembly: multi-resolution outputs plus the asset-catalog
//! manifest.
//!
//! The builder renders the master image once, at [`MASTER_SIZE`] or the
//! largest requested output if that is bigger, and derives every other
//! output from it by high-quality downsampling; nothing is ever upsampled. Output follows the macOS asset-catalog convention: one PNG per
//! (logical size, scale) pair and a `Contents.json` manifest describing each.

use std::fs;
use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::RgbaImage;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Error;
use crate::geometry::MASTER_SIZE;
use crate::renderer::IconRenderer;

/// The (logical size, scale) pairs a macOS app icon set requires.
pub const ICON_SET_POINTS: [u32; 5] = [16, 32, 128, 256, 512];

/// One output raster of the icon set: a logical point size rendered at an
/// integer scale multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSetEntry {
    /// Logical point size (e.g. 16 for a 16x16 icon).
    pub point_size: u32,
    /// Pixel density multiplier, 1 or 2.
    pub scale: u32,
}

impl IconSetEntry {
    pub fn new(point_size: u32, scale: u32) -> Self {
        Self { point_size, scale }
    }

    /// Actual pixel dimensions of this output.
    pub fn pixel_size(&self) -> u32 {
        self.point_size * self.scale
    }

    /// Output filename, e.g. `icon_32x32@2x.png`.
    pub fn filename(&self) -> String {
        format!(
            "icon_{0}x{0}@{1}x.png",
            self.point_size, self.scale
        )
    }

    /// Manifest size label, e.g. `32x32`.
    pub fn size_label(&self) -> String {
        format!("{0}x{0}", self.point_size)
    }

    /// Manifest scale label, e.g. `2x`.
    pub fn scale_label(&self) -> String {
        format!("{}x", self.scale)
    }

    fn manifest_image(&self) -> ManifestImage {
        ManifestImage {
            filename: self.filename(),
            idiom: Idiom::Mac,
            scale: self.scale_label(),
            size: self.size_label(),
        }
    }
}

/// The ten entries of the standard macOS icon set: each logical size at
/// @1x and @2x.
pub fn default_entries() -> Vec<IconSetEntry> {
    ICON_SET_POINTS
        .iter()
        .flat_map(|&point| [IconSetEntry::new(point, 1), IconSetEntry::new(point, 2)])
        .collect()
}

// ============================================================================
// Manifest
// ============================================================================

/// Device/platform family an icon entry targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Idiom {
    Mac,
}

/// One manifest row describing a single output raster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestImage {
    pub filename: String,
    pub idiom: Idiom,
    pub scale: String,
    pub size: String,
}

/// The `info` record Xcode expects in every catalog manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestInfo {
    pub author: String,
    pub version: u32,
}

impl Default for ManifestInfo {
    fn default() -> Self {
        Self {
            author: "xcode".to_owned(),
            version: 1,
        }
    }
}

/// The icon set's `Contents.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub images: Vec<ManifestImage>,
    pub info: ManifestInfo,
}

impl Manifest {
    pub fn new(images: Vec<ManifestImage>) -> Self {
        Self {
            images,
            info: ManifestInfo::default(),
        }
    }
}

/// Catalog-level manifest carrying only the `info` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct CatalogManifest {
    info: ManifestInfo,
}

// ============================================================================
// IconSetBuilder
// ============================================================================

/// Renders the icon master and writes the complete `.appiconset` bundle.
///
/// # Example
///
/// ```no_run
/// use vcam_icon::IconSetBuilder;
///
/// let manifest = IconSetBuilder::new("AppIcon.appiconset").generate()?;
/// assert_eq!(manifest.images.len(), 10);
/// # Ok::<(), vcam_icon::Error>(())
/// ```
#[derive(Debug)]
pub struct IconSetBuilder {
    output_dir: PathBuf,
    entries: Vec<IconSetEntry>,
    renderer: IconRenderer,
}

impl IconSetBuilder {
    /// Creates a builder targeting the given icon-set directory with the
    /// standard macOS entries.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            entries: default_entries(),
            renderer: IconRenderer::new(),
        }
    }

    /// Replaces the output entry list.
    pub fn with_entries(mut self, entries: Vec<IconSetEntry>) -> Self {
        self.entries = entries;
        self
    }

    /// Replaces the renderer (e.g. to use a custom font stack).
    pub fn with_renderer(mut self, renderer: IconRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Renders the master, writes every output raster plus the manifest,
    /// and stamps the catalog-level metadata file if absent.
    ///
    /// File-system and encoding failures are fatal and propagate; the
    /// directory itself is created idempotently.
    pub fn generate(&self) -> Result<Manifest, Error> {
        fs::create_dir_all(&self.output_dir)?;

        // The master is rendered at the largest resolution any entry needs,
        // so every output is a downsample and nothing is ever upsampled.
        let master_px = self
            .entries
            .iter()
            .map(IconSetEntry::pixel_size)
            .max()
            .unwrap_or(MASTER_SIZE)
            .max(MASTER_SIZE);
        info!(size = master_px, "rendering master icon");
        let master = self.renderer.render(master_px)?.into_image();

        let mut images = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            let px = entry.pixel_size();
            let raster = if px == master_px {
                master.clone()
            } else {
                resample(&master, px)
            };
            let path = self.output_dir.join(entry.filename());
            raster.save(&path)?;
            debug!(file = %path.display(), px, "wrote icon raster");
            images.push(entry.manifest_image());
        }

        let manifest = Manifest::new(images);
        let manifest_path = self.output_dir.join("Contents.json");
        fs::write(&manifest_path, serde_json::to_string_pretty(&manifest)?)?;
        info!(
            file = %manifest_path.display(),
            entries = manifest.images.len(),
            "wrote icon set manifest"
        );

        self.write_catalog_stub()?;
        Ok(manifest)
    }

    /// Writes the asset-catalog-level `Contents.json` next to the icon set,
    /// once. An existing file is never touched.
    fn write_catalog_stub(&self) -> Result<(), Error> {
        let Some(parent) = self.output_dir.parent() else {
            return Ok(());
        };
        if parent.as_os_str().is_empty() || !parent.is_dir() {
            return Ok(());
        }
        let path = parent.join("Contents.json");
        if path.exists() {
            return Ok(());
        }
        let stub = CatalogManifest {
            info: ManifestInfo::default(),
        };
        fs::write(&path, serde_json::to_string_pretty(&stub)?)?;
        debug!(file = %path.display(), "wrote catalog metadata");
        Ok(())
    }

    /// The icon-set directory this builder writes into.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

/// Downsamples the master to the requested square size with a Lanczos
/// filter; anything cheaper visibly degrades the 16 px outputs.
fn resample(master: &RgbaImage, px: u32) -> RgbaImage {
    imageops::resize(master, px, px, FilterType::Lanczos3)
}
