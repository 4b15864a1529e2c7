use thiserror::Error;

/// Errors that can occur while shaping or displaying a value grid
#[derive(Error, Debug)]
pub enum PlotError {
    /// The value sequence cannot be reshaped into the requested grid
    #[error("cannot reshape {len} values into a {rows}x{cols} grid")]
    ShapeMismatch { len: usize, rows: usize, cols: usize },

    /// Writing to the terminal or an output file failed
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}
