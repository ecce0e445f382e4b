//! Evenly spaced coordinate axes.

/// `len` evenly spaced coordinates from `start` to `end` inclusive.
///
/// Values are computed on demand as `start + i * step`, with the last node
/// pinned to `end` exactly so the outer face lands on the configured edge.
#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    start: f64,
    end: f64,
    len: usize,
}

impl Axis {
    /// Linear spacing over `[start, end]` with `len` nodes.
    pub fn linspace(start: f64, end: f64, len: usize) -> Self {
        Self { start, end, len }
    }

    /// Axis spanning `[-half, half]`, as used for the mirrored full field.
    pub fn symmetric(half: f64, len: usize) -> Self {
        Self::linspace(-half, half, len)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` for an axis with no nodes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// First coordinate.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Last coordinate.
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Distance between consecutive nodes; zero for fewer than two nodes.
    pub fn step(&self) -> f64 {
        if self.len < 2 {
            0.0
        } else {
            (self.end - self.start) / (self.len - 1) as f64
        }
    }

    /// Coordinate of node `i`, or `None` when out of range.
    pub fn value(&self, i: usize) -> Option<f64> {
        if i >= self.len {
            return None;
        }
        if i + 1 == self.len && self.len > 1 {
            return Some(self.end);
        }
        Some(self.start + i as f64 * self.step())
    }

    /// All coordinates in order.
    pub fn values(&self) -> Vec<f64> {
        (0..self.len).filter_map(|i| self.value(i)).collect()
    }
}
