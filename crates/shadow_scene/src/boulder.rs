//! A single rectangular boulder and its shadow projection.
use glam::IVec2;

use crate::raster::CellRect;

/// One rock placed on the scene surface.
///
/// A boulder is immutable once created. Its shadow is recomputed on demand for each
/// incidence angle by [`Boulder::project_shadow`].
#[derive(Clone, Debug, PartialEq)]
pub struct Boulder {
    extent: CellRect,
    height: f32,
    scale: f64,
}

impl Boulder {
    /// Create a boulder covering `extent`, `height` meters tall, on a raster with `scale`
    /// meters per pixel. Values are stored as given.
    pub fn new(extent: CellRect, height: f32, scale: f64) -> Self {
        Self {
            extent,
            height,
            scale,
        }
    }

    /// Horizontal footprint on the raster.
    pub fn extent(&self) -> &CellRect {
        &self.extent
    }

    /// Height in meters.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Meters per pixel.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Row of the leading edge together with the column span it covers.
    ///
    /// Shadows always extend toward decreasing row index, so the leading edge is the
    /// footprint's first row.
    pub fn leading_edge(&self) -> (i32, std::ops::Range<i32>) {
        (self.extent.min.x, self.extent.cols())
    }

    /// Shadow length in whole pixels for an incidence angle measured from vertical.
    ///
    /// `round(height * tan(angle) / scale)`, rounding halves to even.
    pub fn shadow_length_px(&self, incidence_angle_deg: f64) -> i64 {
        let length_m = self.height as f64 * incidence_angle_deg.to_radians().tan();
        let px = (length_m / self.scale).round_ties_even();
        if px.is_nan() {
            return 0;
        }
        // Saturating float-to-int cast keeps near-vertical tangents bounded.
        px as i64
    }

    /// Project this boulder's shadow for `incidence_angle_deg`.
    ///
    /// Returns `None` when the shadow rounds to zero pixels. Otherwise the shadow spans the
    /// leading edge's columns and the `length + 1` rows directly above the boulder. The
    /// region may start above row 0; clipping is left to the caller.
    pub fn project_shadow(&self, incidence_angle_deg: f64) -> Option<CellRect> {
        let length = self.shadow_length_px(incidence_angle_deg);
        if length <= 0 {
            return None;
        }

        let (row, cols) = self.leading_edge();
        let length = i32::try_from(length).unwrap_or(i32::MAX);
        let start = row.saturating_sub(length).saturating_sub(1);
        Some(CellRect::new(
            IVec2::new(start, cols.start),
            IVec2::new(row, cols.end),
        ))
    }
}
