//! Candidate pool bookkeeping for non-overlapping boulder placement.
//!
//! The pool is an occupancy grid over the scene plus the range of admissible footprint
//! origins. An origin is available for a footprint when every cell it would cover is
//! still free. Origins are first drawn by rejection sampling; if that keeps failing the
//! whole origin range is scanned with a summed-area table and one valid origin is drawn
//! from the survivors. Both paths are uniform over the valid origins.
use std::ops::Range;

use glam::IVec2;
use rand::Rng;

use crate::raster::{CellRect, Grid};
use crate::sampling::{uniform_i32, uniform_index};
use crate::scene::config::SceneConfig;

/// How a footprint origin was found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacementMethod {
    /// Accepted after this many random draws.
    Sampled { attempts: usize },
    /// Picked from a full scan that found this many valid origins.
    Scanned { candidates: usize },
}

pub(crate) struct PlacementPool {
    occupied: Grid<bool>,
    origin_rows: Range<i32>,
    origin_cols: Range<i32>,
    attempts: usize,
}

impl PlacementPool {
    /// Build an empty pool. Origins leave room for the largest footprint and never use
    /// coordinate 0 on either axis.
    pub fn new(config: &SceneConfig) -> Self {
        let (rows, cols) = config.scene_size;
        let row_limit = rows as i64 - config.max_size as i64;
        let col_limit = cols as i64 - config.aspect as i64 * config.max_size as i64;
        Self {
            occupied: Grid::filled(rows, cols, false),
            origin_rows: 1..row_limit.clamp(1, i32::MAX as i64) as i32,
            origin_cols: 1..col_limit.clamp(1, i32::MAX as i64) as i32,
            attempts: config.placement_attempts,
        }
    }

    /// Number of admissible origins before any placement.
    pub fn origin_capacity(&self) -> usize {
        self.origin_rows.len() * self.origin_cols.len()
    }

    fn is_free(&self, footprint: &CellRect) -> bool {
        self.occupied.all_in_rect(footprint, |taken| !taken)
    }

    /// Reserve a `rows x cols` footprint at a uniformly drawn free origin.
    ///
    /// Returns `None` when no origin can host the footprint.
    pub fn reserve(
        &mut self,
        rows: i32,
        cols: i32,
        rng: &mut dyn Rng,
    ) -> Option<(CellRect, PlacementMethod)> {
        if self.origin_rows.is_empty() || self.origin_cols.is_empty() {
            return None;
        }

        for attempt in 1..=self.attempts {
            let origin = IVec2::new(
                uniform_i32(rng, self.origin_rows.clone()),
                uniform_i32(rng, self.origin_cols.clone()),
            );
            let footprint = CellRect::from_origin_size(origin, rows, cols);
            if self.is_free(&footprint) {
                self.occupy(&footprint);
                return Some((footprint, PlacementMethod::Sampled { attempts: attempt }));
            }
        }

        let candidates = self.scan_free_origins(rows, cols);
        if candidates.is_empty() {
            return None;
        }
        let origin = candidates[uniform_index(rng, candidates.len())];
        let footprint = CellRect::from_origin_size(origin, rows, cols);
        self.occupy(&footprint);
        Some((
            footprint,
            PlacementMethod::Scanned {
                candidates: candidates.len(),
            },
        ))
    }

    fn occupy(&mut self, footprint: &CellRect) {
        debug_assert!(footprint.within(self.occupied.rows(), self.occupied.cols()));
        self.occupied.fill_rect(footprint, true);
    }

    /// Every origin whose `rows x cols` footprint is entirely free, in row-major order.
    fn scan_free_origins(&self, rows: i32, cols: i32) -> Vec<IVec2> {
        let table = SummedArea::new(&self.occupied);
        let mut out = Vec::new();
        for r in self.origin_rows.clone() {
            for c in self.origin_cols.clone() {
                let footprint = CellRect::from_origin_size(IVec2::new(r, c), rows, cols);
                if table.sum(&footprint) == 0 {
                    out.push(footprint.min);
                }
            }
        }
        out
    }
}

/// Summed-area table of occupied cells for O(1) rectangle queries.
struct SummedArea {
    cols: usize,
    sums: Vec<u32>,
}

impl SummedArea {
    fn new(grid: &Grid<bool>) -> Self {
        let (rows, cols) = grid.size();
        let stride = cols + 1;
        let mut sums = vec![0u32; (rows + 1) * stride];
        let cells = grid.as_slice();
        for r in 0..rows {
            let mut row_sum = 0u32;
            for c in 0..cols {
                row_sum += cells[r * cols + c] as u32;
                sums[(r + 1) * stride + c + 1] = sums[r * stride + c + 1] + row_sum;
            }
        }
        Self { cols, sums }
    }

    /// Occupied cells inside `rect`, which must lie within the grid.
    fn sum(&self, rect: &CellRect) -> u32 {
        let stride = self.cols + 1;
        let (r0, c0) = (rect.min.x as usize, rect.min.y as usize);
        let (r1, c1) = (rect.max.x as usize, rect.max.y as usize);
        self.sums[r1 * stride + c1] + self.sums[r0 * stride + c0]
            - self.sums[r0 * stride + c1]
            - self.sums[r1 * stride + c0]
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn small_config() -> SceneConfig {
        SceneConfig::new(0)
            .with_scene_size((12, 16))
            .with_max_size(4)
            .with_aspect(2)
    }

    #[test]
    fn origins_exclude_zero_and_leave_room_for_largest_footprint() {
        let pool = PlacementPool::new(&small_config());
        assert_eq!(pool.origin_rows, 1..8);
        assert_eq!(pool.origin_cols, 1..8);
        assert_eq!(pool.origin_capacity(), 49);
    }

    #[test]
    fn tiny_scene_has_no_origins() {
        let config = small_config().with_scene_size((4, 4));
        let mut pool = PlacementPool::new(&config);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pool.origin_capacity(), 0);
        assert!(pool.reserve(1, 2, &mut rng).is_none());
    }

    #[test]
    fn reserved_footprints_never_overlap() {
        let mut pool = PlacementPool::new(&small_config());
        let mut rng = StdRng::seed_from_u64(42);
        let mut placed: Vec<CellRect> = Vec::new();
        while let Some((footprint, _)) = pool.reserve(2, 4, &mut rng) {
            assert!(footprint.within(12, 16));
            assert!(footprint.min.x >= 1 && footprint.min.y >= 1);
            for other in &placed {
                assert!(!footprint.intersects(other));
            }
            placed.push(footprint);
        }
        assert!(!placed.is_empty());
    }

    #[test]
    fn scan_fallback_finds_last_free_slot() {
        let config = small_config().with_placement_attempts(0);
        let mut pool = PlacementPool::new(&config);
        // Occupy everything except a 1x2 hole at (5, 5).
        pool.occupied = Grid::filled(12, 16, true);
        pool.occupied.set(5, 5, false);
        pool.occupied.set(5, 6, false);

        let mut rng = StdRng::seed_from_u64(9);
        let (footprint, method) = pool.reserve(1, 2, &mut rng).expect("hole fits");
        assert_eq!(footprint.min, IVec2::new(5, 5));
        assert_eq!(method, PlacementMethod::Scanned { candidates: 1 });
        assert!(pool.reserve(1, 1, &mut rng).is_none());
    }

    #[test]
    fn summed_area_counts_occupied_cells() {
        let mut grid = Grid::filled(4, 4, false);
        grid.set(1, 1, true);
        grid.set(2, 3, true);
        let table = SummedArea::new(&grid);
        let all = CellRect::from_origin_size(IVec2::ZERO, 4, 4);
        let corner = CellRect::from_origin_size(IVec2::ZERO, 2, 2);
        let right = CellRect::from_origin_size(IVec2::new(0, 2), 4, 2);
        assert_eq!(table.sum(&all), 2);
        assert_eq!(table.sum(&corner), 1);
        assert_eq!(table.sum(&right), 1);
    }
}
