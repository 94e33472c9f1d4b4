//! Drawing passes for the icon composition.
//!
//! The icon is built by a fixed sequence of passes, each painting one part
//! of the design on top of whatever the earlier passes produced:
//!
//! ```text
//! Background ─▶ Lens ─▶ Iris ─▶ Glass ─▶ Indicator ─▶ Label
//! ```
//!
//! Every pass is a pure function of the canvas and the derived
//! [`LensGeometry`]; there is no per-pass configuration or state.

pub mod background;
pub mod glass;
pub mod indicator;
pub mod iris;
pub mod label;
pub mod lens;

pub use background::Background;
pub use glass::GlassHighlights;
pub use indicator::BroadcastIndicator;
pub use iris::IrisBlades;
pub use label::Label;
pub use lens::LensAssembly;

use crate::canvas::Canvas;
use crate::geometry::LensGeometry;

/// A single drawing pass over the evolving canvas.
///
/// Passes may overwrite pixels within their geometric region; later passes
/// are layered on top of earlier ones.
pub trait RenderPass {
    fn apply(&self, canvas: &mut Canvas, geom: &LensGeometry);
}

/// The ordered pass pipeline producing the full composition.
#[derive(Debug, Default)]
pub struct PassPipeline {
    pub background: Background,
    pub lens: LensAssembly,
    pub iris: IrisBlades,
    pub glass: GlassHighlights,
    pub indicator: BroadcastIndicator,
    pub label: Label,
}

impl PassPipeline {
    /// Applies every pass in order.
    pub fn apply(&self, canvas: &mut Canvas, geom: &LensGeometry) {
        self.background.apply(canvas, geom);
        self.lens.apply(canvas, geom);
        self.iris.apply(canvas, geom);
        self.glass.apply(canvas, geom);
        self.indicator.apply(canvas, geom);
        self.label.apply(canvas, geom);
    }
}
