//! Dense row-major 2D storage.
//!
//! Every array in the pipeline (solid mask, temperature quadrant, mirrored
//! full field) is a [`Grid2`]: a flat `Vec<T>` with an explicit stride.
//! Row index `r` runs along the y axis, column index `c` along the x axis.

use std::ops::{Index, IndexMut};

use crate::error::GridError;

/// A `rows × cols` grid stored row-major in a single buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid2<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Clone> Grid2<T> {
    /// Create a grid with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }
}

impl<T> Grid2<T> {
    /// Wrap an existing row-major buffer.
    ///
    /// Returns `Err(GridError::ShapeMismatch)` if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, GridError> {
        let expected = rows * cols;
        if data.len() != expected {
            return Err(GridError::ShapeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Build a grid by evaluating `f(row, col)` for every cell in row-major order.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        Self { rows, cols, data }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// `true` if the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Flat index of `(r, c)`.
    #[inline]
    pub fn offset(&self, r: usize, c: usize) -> usize {
        r * self.cols + c
    }

    /// Cell at `(r, c)`, or `None` when out of bounds.
    pub fn get(&self, r: usize, c: usize) -> Option<&T> {
        if r < self.rows && c < self.cols {
            self.data.get(self.offset(r, c))
        } else {
            None
        }
    }

    /// One row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `r >= rows`.
    pub fn row(&self, r: usize) -> &[T] {
        let start = r * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Iterate rows top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks(self.cols.max(1))
    }

    /// The underlying row-major buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable access to the underlying row-major buffer.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the grid, returning the row-major buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl Grid2<f64> {
    /// Largest absolute cell-wise difference against `other`.
    ///
    /// Returns `None` if the shapes differ. NaN anywhere propagates as NaN.
    pub fn max_abs_diff(&self, other: &Self) -> Option<f64> {
        if self.shape() != other.shape() {
            return None;
        }
        let mut worst = 0.0f64;
        for (a, b) in self.data.iter().zip(&other.data) {
            let d = (a - b).abs();
            if d.is_nan() {
                return Some(f64::NAN);
            }
            worst = worst.max(d);
        }
        Some(worst)
    }

    /// `true` if every cell is finite.
    pub fn all_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }

    /// `(min, max)` over all cells, or `None` for an empty grid.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        let mut it = self.data.iter().copied();
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}

impl<T> Index<(usize, usize)> for Grid2<T> {
    type Output = T;

    #[inline]
    fn index(&self, (r, c): (usize, usize)) -> &T {
        debug_assert!(r < self.rows && c < self.cols, "({r}, {c}) out of bounds");
        &self.data[r * self.cols + c]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid2<T> {
    #[inline]
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut T {
        debug_assert!(r < self.rows && c < self.cols, "({r}, {c}) out of bounds");
        &mut self.data[r * self.cols + c]
    }
}
