//! Row-major raster storage and cell rectangles.
//!
//! [`Grid`] backs both the height surface of a scene and the classified shadow raster.
//! [`CellRect`] describes boulder footprints and shadow regions over it.
use glam::IVec2;

pub mod rect;

pub use rect::CellRect;

/// A dense `rows x cols` raster stored in row-major order.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Copy> Grid<T> {
    /// Create a grid with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }

    /// Get the value at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: i32, col: i32) -> Option<T> {
        self.index(IVec2::new(row, col)).map(|i| self.data[i])
    }

    /// Set the value at `(row, col)`. Out-of-bounds writes are ignored.
    pub fn set(&mut self, row: i32, col: i32, value: T) {
        if let Some(i) = self.index(IVec2::new(row, col)) {
            self.data[i] = value;
        }
    }

    /// Write `value` into every in-bounds cell of `rect`, returning the number of cells written.
    pub fn fill_rect(&mut self, rect: &CellRect, value: T) -> usize {
        let Some(clipped) = rect.clip_to(self.rows, self.cols) else {
            return 0;
        };
        let c0 = clipped.min.y as usize;
        let c1 = clipped.max.y as usize;
        for row in clipped.rows() {
            let start = row as usize * self.cols;
            self.data[start + c0..start + c1].fill(value);
        }
        clipped.area()
    }

    /// Whether every in-bounds cell of `rect` satisfies `pred`.
    pub fn all_in_rect(&self, rect: &CellRect, mut pred: impl FnMut(T) -> bool) -> bool {
        let Some(clipped) = rect.clip_to(self.rows, self.cols) else {
            return true;
        };
        let c0 = clipped.min.y as usize;
        let c1 = clipped.max.y as usize;
        clipped.rows().all(|row| {
            let start = row as usize * self.cols;
            self.data[start + c0..start + c1].iter().all(|v| pred(*v))
        })
    }

    /// Count the cells that satisfy `pred`.
    pub fn count(&self, mut pred: impl FnMut(T) -> bool) -> usize {
        self.data.iter().filter(|v| pred(**v)).count()
    }

    /// Build a new grid of the same shape by mapping every cell.
    pub fn map<U: Copy>(&self, f: impl FnMut(T) -> U) -> Grid<U> {
        Grid {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().copied().map(f).collect(),
        }
    }
}

impl<T> Grid<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Raster shape as `(rows, cols)`.
    pub fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Row-major view of the cell values.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    fn index(&self, cell: IVec2) -> Option<usize> {
        if cell.x < 0 || cell.y < 0 {
            return None;
        }
        let (row, col) = (cell.x as usize, cell.y as usize);
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row * self.cols + col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_grid_has_requested_shape() {
        let grid = Grid::filled(3, 4, 0.0f32);
        assert_eq!(grid.size(), (3, 4));
        assert_eq!(grid.len(), 12);
        assert!(grid.as_slice().iter().all(|v| *v == 0.0));
    }

    #[test]
    fn get_returns_none_outside_bounds() {
        let grid = Grid::filled(2, 2, 1u8);
        assert_eq!(grid.get(-1, 0), None);
        assert_eq!(grid.get(0, 2), None);
        assert_eq!(grid.get(1, 1), Some(1));
    }

    #[test]
    fn fill_rect_clips_and_reports_written_cells() {
        let mut grid = Grid::filled(4, 4, 0u8);
        let written = grid.fill_rect(&CellRect::new(IVec2::new(-1, 2), IVec2::new(2, 6)), 7);
        assert_eq!(written, 4);
        assert_eq!(grid.count(|v| v == 7), 4);
        assert_eq!(grid.get(0, 2), Some(7));
        assert_eq!(grid.get(1, 3), Some(7));
        assert_eq!(grid.get(2, 3), Some(0));
    }

    #[test]
    fn all_in_rect_checks_only_covered_cells() {
        let mut grid = Grid::filled(5, 5, false);
        grid.set(4, 4, true);
        let top_left = CellRect::from_origin_size(IVec2::ZERO, 3, 3);
        let bottom_right = CellRect::from_origin_size(IVec2::new(3, 3), 2, 2);
        assert!(grid.all_in_rect(&top_left, |v| !v));
        assert!(!grid.all_in_rect(&bottom_right, |v| !v));
    }
}
