use log::debug;

use crate::{
    error::PlotError,
    grid::{IntoValues, Shape, ValueGrid},
};

pub mod colormap;
pub mod figure;
pub mod heatmap;
mod tui;
mod util;

pub use figure::{FigSize, Figure};
pub use heatmap::ValueHeatmap;

/// Configuration for [`plot_values`]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlotConfig {
    /// The grid-world dimensions the values are laid out over
    pub worldshape: Shape,
    /// Figure size in inches
    pub figsize: FigSize,
}

/// Plot a state-value function as an annotated heatmap and wait for it to be closed
///
/// `values` is reshaped row-major into `config.worldshape` before anything is drawn.
///
/// ### Example
/// ```no_run
/// use gridviz::{grid::Shape, plot_values, PlotConfig};
///
/// let v = (1..=16).map(f64::from).collect::<Vec<_>>();
/// plot_values(v, PlotConfig::default())?;
///
/// let v = vec![0.0f32; 16];
/// let config = PlotConfig {
///     worldshape: Shape::new(2, 8),
///     ..Default::default()
/// };
/// plot_values(v, config)?;
/// # Ok::<(), gridviz::PlotError>(())
/// ```
///
/// **Returns** [`PlotError::ShapeMismatch`] if the number of values does not fill the grid exactly
pub fn plot_values<V: IntoValues>(values: V, config: PlotConfig) -> Result<(), PlotError> {
    let grid = ValueGrid::reshape(values, config.worldshape)?;
    debug!("Plotting with {config:?}");
    Figure::new(config.figsize).show(&grid)
}
