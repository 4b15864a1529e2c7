/// Error types
pub mod error;

/// Reshaping state values into grid-worlds
pub mod grid;

/// Terminal heatmaps of value grids
#[cfg(feature = "viz")]
pub mod viz;

mod util;

pub use error::PlotError;
pub use grid::{Shape, ValueGrid};
#[cfg(feature = "viz")]
pub use viz::{plot_values, FigSize, PlotConfig};
