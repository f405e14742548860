#![forbid(unsafe_code)]
//! shadow_scene: boulder shadowing on synthetic planetary-surface rasters.
//!
//! Modules:
//! - boulder: a single rectangular rock and its shadow projection
//! - scene: random non-overlapping placement, shadow compositing, coverage statistics, events
//! - raster: row-major grids and cell rectangles
//!
//! Shadows follow the incidence convention: the angle is measured from vertical and the
//! shadow length is `height * tan(angle) / scale` pixels, always extending toward row 0.
pub mod boulder;
pub mod error;
pub mod raster;
pub(crate) mod sampling;
pub mod scene;

/// Convenient re-exports for common types. Import with `use shadow_scene::prelude::*;`.
pub mod prelude {
    pub use crate::boulder::Boulder;
    pub use crate::error::{Error, Result};
    pub use crate::raster::{CellRect, Grid};
    pub use crate::scene::config::SceneConfig;
    pub use crate::scene::events::{EventSink, FnSink, SceneEvent, SceneEventKind, VecSink};
    pub use crate::scene::illumination::{CellClass, ClassifiedRaster, CoverageStats, Illumination};
    pub use crate::scene::placement::PlacementMethod;
    pub use crate::scene::{CoverageBasis, Scene};
}
