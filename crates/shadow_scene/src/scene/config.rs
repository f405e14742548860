//! Scene generation parameters.
use std::ops::Range;

use crate::error::{Error, Result};

/// Largest boulder width is `DEFAULT_MAX_SIZE - 1` pixels.
pub const DEFAULT_MAX_SIZE: u32 = 20;
/// Column-to-row ratio of every boulder footprint.
pub const DEFAULT_ASPECT: u32 = 3;
/// Side length of the simulated pixel in meters.
pub const DEFAULT_SCENE_EXTENT_M: f64 = 70.0;
pub const DEFAULT_SCENE_SIZE: (usize, usize) = (1000, 1000);
/// Random origins tried per boulder before falling back to a full scan of the pool.
pub const DEFAULT_PLACEMENT_ATTEMPTS: usize = 64;

/// Configuration for generating a [`crate::scene::Scene`].
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SceneConfig {
    /// Number of boulders to place.
    pub num_boulders: usize,
    /// Raster shape as `(rows, cols)`.
    pub scene_size: (usize, usize),
    /// Exclusive upper bound on boulder width in pixels.
    pub max_size: u32,
    /// Footprint columns per footprint row.
    pub aspect: u32,
    /// Boulder heights in meters, drawn uniformly from this half-open range.
    pub height_range_m: Range<f32>,
    /// Ground distance in meters spanned by the first raster axis.
    pub scene_extent_m: f64,
    /// Random origins tried per boulder before scanning the whole pool.
    pub placement_attempts: usize,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            num_boulders: 0,
            scene_size: DEFAULT_SCENE_SIZE,
            max_size: DEFAULT_MAX_SIZE,
            aspect: DEFAULT_ASPECT,
            height_range_m: 1.0..2.0,
            scene_extent_m: DEFAULT_SCENE_EXTENT_M,
            placement_attempts: DEFAULT_PLACEMENT_ATTEMPTS,
        }
    }
}

impl SceneConfig {
    /// Creates a new [`SceneConfig`] placing `num_boulders` on the default 1000x1000 raster.
    pub fn new(num_boulders: usize) -> Self {
        Self {
            num_boulders,
            ..Default::default()
        }
    }

    /// Sets the raster shape as `(rows, cols)`.
    pub fn with_scene_size(mut self, scene_size: (usize, usize)) -> Self {
        self.scene_size = scene_size;
        self
    }

    /// Sets the exclusive upper bound on boulder width.
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    /// Sets the footprint aspect ratio.
    pub fn with_aspect(mut self, aspect: u32) -> Self {
        self.aspect = aspect;
        self
    }

    /// Sets the boulder height range in meters.
    pub fn with_height_range(mut self, height_range_m: Range<f32>) -> Self {
        self.height_range_m = height_range_m;
        self
    }

    /// Sets the ground distance spanned by the first raster axis.
    pub fn with_scene_extent(mut self, scene_extent_m: f64) -> Self {
        self.scene_extent_m = scene_extent_m;
        self
    }

    pub fn with_placement_attempts(mut self, placement_attempts: usize) -> Self {
        self.placement_attempts = placement_attempts;
        self
    }

    /// Meters per pixel shared by every boulder in the scene.
    pub fn scale(&self) -> f64 {
        self.scene_extent_m / self.scene_size.0 as f64
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        let (rows, cols) = self.scene_size;
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidConfig(
                "scene_size must be > 0 in both components".into(),
            ));
        }
        if i32::try_from(rows).is_err() || i32::try_from(cols).is_err() {
            return Err(Error::InvalidConfig(
                "scene_size must fit in i32 raster coordinates".into(),
            ));
        }
        if self.max_size < 2 {
            return Err(Error::InvalidConfig("max_size must be >= 2".into()));
        }
        if self.aspect == 0 {
            return Err(Error::InvalidConfig("aspect must be > 0".into()));
        }
        let max_size = i32::try_from(self.max_size)
            .map_err(|_| Error::InvalidConfig("max_size must fit in i32".into()))?;
        let aspect = i32::try_from(self.aspect)
            .map_err(|_| Error::InvalidConfig("aspect must fit in i32".into()))?;
        if aspect.checked_mul(max_size).is_none() {
            return Err(Error::InvalidConfig(
                "aspect * max_size must fit in i32".into(),
            ));
        }
        let h = &self.height_range_m;
        if !h.start.is_finite() || !h.end.is_finite() || h.start <= 0.0 || h.start >= h.end {
            return Err(Error::InvalidConfig(
                "height_range_m must be a non-empty finite range of positive heights".into(),
            ));
        }
        if !self.scene_extent_m.is_finite() || self.scene_extent_m <= 0.0 {
            return Err(Error::InvalidConfig("scene_extent_m must be > 0".into()));
        }

        Ok(())
    }
}
