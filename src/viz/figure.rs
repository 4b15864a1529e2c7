use std::{
    fs,
    io::{self, IsTerminal, Write},
    path::Path,
};

use crossterm::event;
use log::{info, warn};
use ratatui::prelude::*;

use super::{heatmap::ValueHeatmap, tui, util::is_dismiss};
use crate::{error::PlotError, grid::ValueGrid};

/// Terminal columns per inch of figure width
pub const COLUMNS_PER_INCH: f64 = 10.0;

/// Terminal rows per inch of figure height
pub const ROWS_PER_INCH: f64 = 5.0;

/// Figure dimensions in inches, as `(width, height)`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FigSize {
    width: f64,
    height: f64,
}

impl FigSize {
    /// Panics if either dimension is not positive
    pub fn new(width: f64, height: f64) -> Self {
        crate::assert_positive!(width);
        crate::assert_positive!(height);
        Self { width, height }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Default for FigSize {
    fn default() -> Self {
        Self {
            width: 6.0,
            height: 6.0,
        }
    }
}

impl From<(f64, f64)> for FigSize {
    fn from((width, height): (f64, f64)) -> Self {
        Self::new(width, height)
    }
}

/// A single heatmap figure
///
/// Created for one display and dropped afterwards.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Figure {
    size: FigSize,
}

impl Figure {
    pub fn new(size: impl Into<FigSize>) -> Self {
        Self { size: size.into() }
    }

    /// Size of the figure in terminal cells, as `(columns, rows)`
    pub fn footprint(&self) -> (u16, u16) {
        let to_cells = |inches: f64, per_inch: f64| (inches * per_inch).round().max(1.0) as u16;
        (
            to_cells(self.size.width, COLUMNS_PER_INCH),
            to_cells(self.size.height, ROWS_PER_INCH),
        )
    }

    /// The figure's area centered within `available`, shrunk to fit if needed
    pub fn area_within(&self, available: Rect) -> Rect {
        let (cols, rows) = self.footprint();
        let width = cols.min(available.width);
        let height = rows.min(available.height);
        Rect::new(
            available.x + (available.width - width) / 2,
            available.y + (available.height - height) / 2,
            width,
            height,
        )
    }

    /// Render the figure into an in-memory buffer covering `area`
    pub fn render(&self, grid: &ValueGrid, area: Rect) -> Buffer {
        let mut buf = Buffer::empty(area);
        ValueHeatmap::new(grid).render(self.area_within(area), &mut buf);
        buf
    }

    /// Render the figure at its own footprint as plain text, one line per row
    pub fn to_text(&self, grid: &ValueGrid) -> String {
        let (cols, rows) = self.footprint();
        let buf = self.render(grid, Rect::new(0, 0, cols, rows));

        let mut text = String::new();
        for y in buf.area.top()..buf.area.bottom() {
            let line = (buf.area.left()..buf.area.right())
                .map(|x| buf.get(x, y).symbol())
                .collect::<String>();
            text.push_str(line.trim_end());
            text.push('\n');
        }
        text
    }

    /// Write the plain-text rendering to `path`
    pub fn save(&self, grid: &ValueGrid, path: impl AsRef<Path>) -> Result<(), PlotError> {
        let path = path.as_ref();
        fs::write(path, self.to_text(grid))?;
        info!("Saved value heatmap to {}", path.display());
        Ok(())
    }

    /// Display the figure and block until it is dismissed
    ///
    /// Press `q`, `Esc`, or `Enter` to close. When stdout is not a terminal,
    /// a plain-text rendering is written to it instead and this returns at once.
    pub fn show(&self, grid: &ValueGrid) -> Result<(), PlotError> {
        if !io::stdout().is_terminal() {
            warn!("Stdout is not a terminal, writing the heatmap as text");
            let mut out = io::stdout().lock();
            out.write_all(self.to_text(grid).as_bytes())?;
            out.flush()?;
            return Ok(());
        }

        info!("Showing value heatmap, press q to close");
        let mut terminal = tui::init()?;

        loop {
            terminal.draw(|frame| {
                let area = self.area_within(frame.size());
                frame.render_widget(ValueHeatmap::new(grid), area);
            })?;

            if is_dismiss(&event::read()?) {
                break;
            }
        }

        Ok(())
    }
}
