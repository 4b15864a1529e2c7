use log::debug;
use ndarray::{Array2, ArrayBase, ArrayView1, Data, Dimension};

use crate::error::PlotError;

/// Number of decimal places shown in cell labels
pub const LABEL_DECIMALS: i32 = 5;

/// The dimensions of a grid-world, as `(rows, cols)`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: usize,
    cols: usize,
}

impl Shape {
    /// Create a new shape
    ///
    /// Panics if either dimension is zero
    pub fn new(rows: usize, cols: usize) -> Self {
        crate::assert_positive!(rows);
        crate::assert_positive!(cols);
        Self { rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells in the grid
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }
}

impl Default for Shape {
    fn default() -> Self {
        Self { rows: 4, cols: 4 }
    }
}

impl From<(usize, usize)> for Shape {
    fn from((rows, cols): (usize, usize)) -> Self {
        Self::new(rows, cols)
    }
}

/// A sequence of state values, either flat or already shaped
///
/// Shaped inputs are flattened in logical row-major order, so an `ndarray` of
/// any layout reshapes the same way its elements are indexed.
pub trait IntoValues {
    fn into_values(self) -> Vec<f64>;
}

impl<T: Copy + Into<f64>> IntoValues for Vec<T> {
    fn into_values(self) -> Vec<f64> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Copy + Into<f64>> IntoValues for &Vec<T> {
    fn into_values(self) -> Vec<f64> {
        self.as_slice().into_values()
    }
}

impl<T: Copy + Into<f64>> IntoValues for &[T] {
    fn into_values(self) -> Vec<f64> {
        self.iter().map(|&v| v.into()).collect()
    }
}

impl<T: Copy + Into<f64>, const N: usize> IntoValues for [T; N] {
    fn into_values(self) -> Vec<f64> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<A, S, D> IntoValues for ArrayBase<S, D>
where
    A: Copy + Into<f64>,
    S: Data<Elem = A>,
    D: Dimension,
{
    fn into_values(self) -> Vec<f64> {
        (&self).into_values()
    }
}

impl<A, S, D> IntoValues for &ArrayBase<S, D>
where
    A: Copy + Into<f64>,
    S: Data<Elem = A>,
    D: Dimension,
{
    fn into_values(self) -> Vec<f64> {
        self.iter().map(|&v| v.into()).collect()
    }
}

/// A state-value function laid out over a rectangular grid-world
///
/// Cell `(row, col)` holds the value of state `row * cols + col`.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueGrid {
    values: Array2<f64>,
}

impl ValueGrid {
    /// Reinterpret `values` as a row-major grid of the given shape
    ///
    /// **Returns** [`PlotError::ShapeMismatch`] if the number of values is not `rows * cols`
    pub fn reshape<V: IntoValues>(values: V, shape: impl Into<Shape>) -> Result<Self, PlotError> {
        let shape = shape.into();
        let values = values.into_values();
        let len = values.len();
        let (rows, cols) = (shape.rows(), shape.cols());

        let values = Array2::from_shape_vec((rows, cols), values)
            .map_err(|_| PlotError::ShapeMismatch { len, rows, cols })?;

        debug!("Reshaped {len} values into a {rows}x{cols} grid");
        Ok(Self { values })
    }

    pub fn shape(&self) -> Shape {
        let (rows, cols) = self.values.dim();
        Shape { rows, cols }
    }

    /// Get the value at `(row, col)`, or `None` if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.values.get((row, col)).copied()
    }

    /// Get a view of a single row
    pub fn row(&self, row: usize) -> Option<ArrayView1<'_, f64>> {
        (row < self.values.nrows()).then(|| self.values.row(row))
    }

    /// Iterate over `((row, col), value)` in row-major order
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), f64)> + '_ {
        self.values.indexed_iter().map(|(idx, &v)| (idx, v))
    }

    /// The minimum and maximum finite values, or `None` if the grid has none
    pub fn bounds(&self) -> Option<(f64, f64)> {
        self.values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((min, max)) => Some((min.min(v), max.max(v))),
            })
    }
}

/// Round `value` to `decimals` places, with ties going to the even neighbour
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round_ties_even() / factor
}

/// Format a cell value the way it is shown on the heatmap
///
/// Uses the shortest representation that round-trips, so whole numbers keep a
/// trailing `.0`.
pub fn label(value: f64) -> String {
    format!("{:?}", round_to(value, LABEL_DECIMALS))
}
