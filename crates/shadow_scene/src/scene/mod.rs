//! Random boulder scenes and their illumination.
//!
//! A [`Scene`] owns the height surface and the boulders placed on it. Generation draws
//! heights and widths first, then places each boulder at a uniformly chosen free origin.
//! [`Scene::illuminate`] classifies every cell as ground, shadow or boulder for one
//! incidence angle and updates the scene's boulder coverage.
use rand::Rng;
use tracing::{debug, info, warn};

use crate::boulder::Boulder;
use crate::error::{Error, Result};
use crate::raster::Grid;
use crate::sampling::{uniform_f32, uniform_i32};

pub mod config;
pub mod events;
pub mod illumination;
pub mod placement;

use config::SceneConfig;
use events::{EventSink, SceneEvent, SceneEventKind};
use illumination::{ClassifiedRaster, Illumination};
use placement::{PlacementMethod, PlacementPool};

/// Which formula produced [`Scene::boulder_area_pct`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CoverageBasis {
    /// Boulder cells over all cells, as computed at construction.
    Surface,
    /// Boulder cells over non-shadow cells from the last illumination.
    Illuminated { incidence_angle_deg: f64 },
}

/// A synthetic surface with non-overlapping rectangular boulders.
#[derive(Clone, Debug)]
pub struct Scene {
    config: SceneConfig,
    surface: Grid<f32>,
    boulders: Vec<Boulder>,
    boulder_area_pct: f64,
    basis: CoverageBasis,
}

impl Scene {
    /// Place `num_boulders` on a `scene_size` raster with default boulder dimensions.
    pub fn new(
        num_boulders: usize,
        scene_size: (usize, usize),
        rng: &mut dyn Rng,
    ) -> Result<Self> {
        let config = SceneConfig::new(num_boulders).with_scene_size(scene_size);
        Self::generate(&config, rng)
    }

    /// Generate a scene from `config`.
    ///
    /// Fails with [`Error::InvalidConfig`] for an invalid configuration and with
    /// [`Error::PlacementExhausted`] when the boulders do not fit.
    pub fn generate(config: &SceneConfig, rng: &mut dyn Rng) -> Result<Self> {
        Self::generate_with_events(config, rng, &mut ())
    }

    pub fn generate_with_events(
        config: &SceneConfig,
        rng: &mut dyn Rng,
        sink: &mut dyn EventSink,
    ) -> Result<Self> {
        config.validate()?;
        if sink.wants(SceneEventKind::GenerationStarted) {
            sink.send(SceneEvent::GenerationStarted {
                config: config.clone(),
            });
        }

        let (rows, cols) = config.scene_size;
        let scale = config.scale();
        let n = config.num_boulders;

        let heights: Vec<f32> = (0..n)
            .map(|_| uniform_f32(rng, &config.height_range_m))
            .collect();
        let widths: Vec<i32> = (0..n)
            .map(|_| uniform_i32(rng, 1..config.max_size as i32))
            .collect();

        let mut pool = PlacementPool::new(config);
        if n > 0 && pool.origin_capacity() == 0 {
            warn!(
                "Scene {}x{} leaves no room for boulders up to {} px.",
                rows, cols, config.max_size
            );
        }

        let mut surface = Grid::filled(rows, cols, 0.0f32);
        let mut boulders = Vec::with_capacity(n);
        let aspect = config.aspect as i32;

        for (index, (height, width)) in heights.into_iter().zip(widths).enumerate() {
            let Some(footprint_cols) = aspect.checked_mul(width) else {
                return Err(Error::InvalidConfig(format!(
                    "boulder {index}: {width} px footprint overflows at aspect {aspect}"
                )));
            };
            let Some((footprint, method)) = pool.reserve(width, footprint_cols, rng) else {
                return Err(Error::PlacementExhausted {
                    placed: index,
                    requested: n,
                });
            };

            if let PlacementMethod::Scanned { candidates } = method {
                warn!(
                    "Boulder {}: random placement failed {} times; scanned pool ({} origins left).",
                    index, config.placement_attempts, candidates
                );
                if sink.wants(SceneEventKind::PlacementFallback) {
                    sink.send(SceneEvent::PlacementFallback {
                        index,
                        attempts: config.placement_attempts,
                    });
                }
            }

            debug!(
                "Boulder {}: rows {:?} cols {:?} height {:.3} m.",
                index,
                footprint.rows(),
                footprint.cols(),
                height
            );
            if sink.wants(SceneEventKind::BoulderPlaced) {
                sink.send(SceneEvent::BoulderPlaced {
                    index,
                    footprint,
                    height,
                    method,
                });
            }

            surface.fill_rect(&footprint, height);
            boulders.push(Boulder::new(footprint, height, scale));
        }

        let boulder_area_pct = surface_coverage(&surface);
        info!(
            "Generated {}x{} scene with {} boulders | coverage {:.4}.",
            rows,
            cols,
            boulders.len(),
            boulder_area_pct
        );
        if sink.wants(SceneEventKind::GenerationFinished) {
            sink.send(SceneEvent::GenerationFinished {
                boulder_count: boulders.len(),
                boulder_area_pct,
            });
        }

        Ok(Self {
            config: config.clone(),
            surface,
            boulders,
            boulder_area_pct,
            basis: CoverageBasis::Surface,
        })
    }

    /// Classify the scene for `incidence_angle_deg` and store the resulting coverage.
    pub fn illuminate(&mut self, incidence_angle_deg: f64) -> Result<ClassifiedRaster> {
        self.illuminate_with_events(incidence_angle_deg, &mut ())
            .map(|lit| lit.raster)
    }

    pub fn illuminate_with_events(
        &mut self,
        incidence_angle_deg: f64,
        sink: &mut dyn EventSink,
    ) -> Result<Illumination> {
        let lit = self.classify_with_events(incidence_angle_deg, sink)?;
        self.boulder_area_pct = lit.stats.boulder_area_pct;
        self.basis = CoverageBasis::Illuminated {
            incidence_angle_deg,
        };
        Ok(lit)
    }

    /// Classify the scene without touching the stored coverage.
    pub fn classify(&self, incidence_angle_deg: f64) -> Result<Illumination> {
        self.classify_with_events(incidence_angle_deg, &mut ())
    }

    fn classify_with_events(
        &self,
        incidence_angle_deg: f64,
        sink: &mut dyn EventSink,
    ) -> Result<Illumination> {
        if !incidence_angle_deg.is_finite() || !(0.0..90.0).contains(&incidence_angle_deg) {
            return Err(Error::InvalidIncidence(incidence_angle_deg));
        }
        if sink.wants(SceneEventKind::IlluminationStarted) {
            sink.send(SceneEvent::IlluminationStarted {
                incidence_angle_deg,
            });
        }

        let lit =
            illumination::composite(&self.surface, &self.boulders, incidence_angle_deg, sink);
        info!(
            "Illuminated at {:.2} deg | shadows: {} (clipped {}) | coverage {:.4}.",
            incidence_angle_deg,
            lit.shadows_cast,
            lit.shadows_clipped,
            lit.stats.boulder_area_pct
        );
        if sink.wants(SceneEventKind::IlluminationFinished) {
            sink.send(SceneEvent::IlluminationFinished {
                incidence_angle_deg,
                stats: lit.stats,
            });
        }
        Ok(lit)
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Height surface: `0` for ground, boulder height in meters elsewhere.
    pub fn surface(&self) -> &Grid<f32> {
        &self.surface
    }

    /// Boulders in creation order.
    pub fn boulders(&self) -> &[Boulder] {
        &self.boulders
    }

    /// Meters per pixel.
    pub fn scale(&self) -> f64 {
        self.config.scale()
    }

    /// Boulder coverage. Before any illumination this is boulder cells over all cells;
    /// afterwards it is boulder cells over non-shadow cells of the latest illumination.
    pub fn boulder_area_pct(&self) -> f64 {
        self.boulder_area_pct
    }

    pub fn coverage_basis(&self) -> CoverageBasis {
        self.basis
    }
}

fn surface_coverage(surface: &Grid<f32>) -> f64 {
    if surface.is_empty() {
        return 0.0;
    }
    surface.count(|h| h > 0.0) as f64 / surface.len() as f64
}
