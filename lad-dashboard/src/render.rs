//! Chart rendering seam.
//!
//! The controller owns the handles a renderer returns and is responsible for
//! disposing each of them exactly once.

use lad_charts::ChartSpec;

pub use crate::error::RenderError;

/// Creates charts inside named containers.
pub trait ChartRenderer {
    type Handle: ChartHandle;

    fn mount(&mut self, target: &str, spec: &ChartSpec) -> Result<Self::Handle, RenderError>;
}

/// One live chart instance.
pub trait ChartHandle {
    /// Replace the chart's option with `spec`.
    fn update(&mut self, spec: &ChartSpec) -> Result<(), RenderError>;

    /// Release the chart. Called once, after which the handle is dropped.
    fn dispose(&mut self);
}
