//! Half-open rectangles of raster cells.
use glam::IVec2;

/// An axis-aligned, half-open block of raster cells.
///
/// `x` is the row (first raster axis) and `y` the column (second axis). The block covers
/// rows `min.x..max.x` and columns `min.y..max.y`. Coordinates are signed so that shadow
/// regions can extend past the top of the raster before they are clipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellRect {
    /// Inclusive lower corner (row, column).
    pub min: IVec2,
    /// Exclusive upper corner (row, column).
    pub max: IVec2,
}

impl CellRect {
    /// Create a rect from its inclusive lower and exclusive upper corners.
    pub fn new(min: IVec2, max: IVec2) -> Self {
        Self { min, max }
    }

    /// Create a rect from an origin cell and a `(rows, cols)` size.
    pub fn from_origin_size(origin: IVec2, rows: i32, cols: i32) -> Self {
        Self {
            min: origin,
            max: IVec2::new(origin.x.saturating_add(rows), origin.y.saturating_add(cols)),
        }
    }

    /// Row range covered by the rect.
    pub fn rows(&self) -> std::ops::Range<i32> {
        self.min.x..self.max.x
    }

    /// Column range covered by the rect.
    pub fn cols(&self) -> std::ops::Range<i32> {
        self.min.y..self.max.y
    }

    pub fn height(&self) -> usize {
        (self.max.x as i64 - self.min.x as i64).max(0) as usize
    }

    pub fn width(&self) -> usize {
        (self.max.y as i64 - self.min.y as i64).max(0) as usize
    }

    /// Number of cells covered.
    pub fn area(&self) -> usize {
        self.height() * self.width()
    }

    pub fn is_empty(&self) -> bool {
        self.area() == 0
    }

    /// Whether the cell `(row, col)` lies inside the rect.
    pub fn contains(&self, cell: IVec2) -> bool {
        cell.x >= self.min.x && cell.x < self.max.x && cell.y >= self.min.y && cell.y < self.max.y
    }

    /// Whether the two rects share at least one cell.
    pub fn intersects(&self, other: &CellRect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    /// Whether the rect lies entirely within a `rows x cols` raster.
    pub fn within(&self, rows: usize, cols: usize) -> bool {
        self.min.x >= 0
            && self.min.y >= 0
            && self.max.x as i64 <= rows as i64
            && self.max.y as i64 <= cols as i64
    }

    /// Raise any negative row to row 0, keeping columns untouched.
    ///
    /// Returns the clamped rect and the number of rows that were folded onto row 0.
    pub fn clamp_rows_min(&self) -> (CellRect, usize) {
        if self.min.x >= 0 {
            return (*self, 0);
        }
        let folded = (0i64 - self.min.x as i64).min(self.height() as i64) as usize;
        let clamped = CellRect {
            min: IVec2::new(0, self.min.y),
            max: IVec2::new(self.max.x.max(0), self.max.y),
        };
        (clamped, folded)
    }

    /// Intersection with a `rows x cols` raster, or `None` if nothing remains.
    pub fn clip_to(&self, rows: usize, cols: usize) -> Option<CellRect> {
        let max_row = i32::try_from(rows).unwrap_or(i32::MAX);
        let max_col = i32::try_from(cols).unwrap_or(i32::MAX);
        let clipped = CellRect {
            min: self.min.max(IVec2::ZERO),
            max: IVec2::new(self.max.x.min(max_row), self.max.y.min(max_col)),
        };
        (!clipped.is_empty()).then_some(clipped)
    }

    /// Iterate every covered cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = IVec2> + '_ {
        self.rows()
            .flat_map(move |row| self.cols().map(move |col| IVec2::new(row, col)))
    }
}
