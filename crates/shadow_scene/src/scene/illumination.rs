//! Shadow compositing and coverage statistics.
use tracing::trace;

use crate::boulder::Boulder;
use crate::raster::Grid;
use crate::scene::events::{EventSink, SceneEvent, SceneEventKind};

/// Class of a cell in a [`ClassifiedRaster`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum CellClass {
    /// Illuminated ground.
    #[default]
    Ground = 0,
    Shadow = 1,
    Boulder = 2,
}

impl CellClass {
    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Cell counts and the boulder coverage derived from one classified raster.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoverageStats {
    pub ground_pixels: usize,
    pub shadow_pixels: usize,
    pub boulder_pixels: usize,
    /// Cells not classified as shadow.
    pub total_non_shadow: usize,
    /// `boulder_pixels / total_non_shadow`, or 0 when every cell is shadow.
    pub boulder_area_pct: f64,
}

impl CoverageStats {
    fn from_counts(ground_pixels: usize, shadow_pixels: usize, boulder_pixels: usize) -> Self {
        let total_non_shadow = ground_pixels + boulder_pixels;
        let boulder_area_pct = if total_non_shadow == 0 {
            0.0
        } else {
            boulder_pixels as f64 / total_non_shadow as f64
        };
        Self {
            ground_pixels,
            shadow_pixels,
            boulder_pixels,
            total_non_shadow,
            boulder_area_pct,
        }
    }
}

/// Raster of ground, shadow and boulder cells for one incidence angle.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassifiedRaster {
    cells: Grid<CellClass>,
}

impl ClassifiedRaster {
    pub fn rows(&self) -> usize {
        self.cells.rows()
    }

    pub fn cols(&self) -> usize {
        self.cells.cols()
    }

    /// Class at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: i32, col: i32) -> Option<CellClass> {
        self.cells.get(row, col)
    }

    pub fn count(&self, class: CellClass) -> usize {
        self.cells.count(|c| c == class)
    }

    /// Row-major view of the cell classes.
    pub fn as_slice(&self) -> &[CellClass] {
        self.cells.as_slice()
    }

    /// Row-major cell values as `0` ground, `1` shadow, `2` boulder.
    pub fn to_u8(&self) -> Vec<u8> {
        self.as_slice().iter().map(|c| c.as_u8()).collect()
    }

    /// Recount the raster.
    pub fn stats(&self) -> CoverageStats {
        let mut counts = [0usize; 3];
        for class in self.as_slice() {
            counts[class.as_u8() as usize] += 1;
        }
        CoverageStats::from_counts(counts[0], counts[1], counts[2])
    }
}

/// Result of illuminating a scene at one incidence angle.
#[derive(Clone, Debug)]
pub struct Illumination {
    pub raster: ClassifiedRaster,
    pub stats: CoverageStats,
    /// Boulders whose shadow was at least one pixel long.
    pub shadows_cast: usize,
    /// Shadows that reached above row 0 and were folded onto it.
    pub shadows_clipped: usize,
}

/// Classify every cell of `surface` for `incidence_angle_deg`.
///
/// Boulder cells are marked before and after the shadows so a boulder always wins over
/// any shadow, whichever boulder cast it. Shadow rows above the raster are clamped to
/// row 0 rather than dropped.
pub(crate) fn composite(
    surface: &Grid<f32>,
    boulders: &[Boulder],
    incidence_angle_deg: f64,
    sink: &mut dyn EventSink,
) -> Illumination {
    let mut cells = surface.map(|h| {
        if h > 0.0 {
            CellClass::Boulder
        } else {
            CellClass::Ground
        }
    });

    let mut shadows_cast = 0;
    let mut shadows_clipped = 0;
    for (index, boulder) in boulders.iter().enumerate() {
        let Some(region) = boulder.project_shadow(incidence_angle_deg) else {
            if sink.wants(SceneEventKind::ShadowSkipped) {
                sink.send(SceneEvent::ShadowSkipped { index });
            }
            continue;
        };
        shadows_cast += 1;

        let (clamped, rows_folded) = region.clamp_rows_min();
        if rows_folded > 0 {
            shadows_clipped += 1;
            trace!(
                "Boulder {} shadow rows {:?} clamped to {:?}.",
                index,
                region.rows(),
                clamped.rows()
            );
            if sink.wants(SceneEventKind::ShadowClipped) {
                sink.send(SceneEvent::ShadowClipped {
                    index,
                    region,
                    rows_folded,
                });
            }
        }
        cells.fill_rect(&clamped, CellClass::Shadow);
    }

    for boulder in boulders {
        cells.fill_rect(boulder.extent(), CellClass::Boulder);
    }

    let raster = ClassifiedRaster { cells };
    let stats = raster.stats();
    Illumination {
        raster,
        stats,
        shadows_cast,
        shadows_clipped,
    }
}
