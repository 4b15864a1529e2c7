use log::debug;
use ratatui::{
    prelude::*,
    widgets::{Paragraph, WidgetRef},
};
use unicode_width::UnicodeWidthStr;

use super::colormap::{Colormap, Normalize};
use crate::grid::{self, ValueGrid};

/// Title drawn above every value heatmap
pub const TITLE: &str = "State-Value Function";

/// Color-mapped image of a [`ValueGrid`] with each cell labeled by its value
///
/// Row `0` is drawn at the top and column `0` at the left, matching the order
/// the grid is indexed in. No axes or ticks are drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueHeatmap<'a> {
    grid: &'a ValueGrid,
    colormap: Colormap,
}

impl<'a> ValueHeatmap<'a> {
    pub fn new(grid: &'a ValueGrid) -> Self {
        Self {
            grid,
            colormap: Colormap::default(),
        }
    }

    fn render_cells(&self, area: Rect, buf: &mut Buffer) {
        let shape = self.grid.shape();
        let norm = self
            .grid
            .bounds()
            .map(|(min, max)| Normalize::new(min, max))
            .unwrap_or(Normalize::new(0.0, 0.0));

        for ((row, col), value) in self.grid.cells() {
            let (y, height) = partition(area.top(), area.height, shape.rows(), row);
            let (x, width) = partition(area.left(), area.width, shape.cols(), col);
            if width == 0 || height == 0 {
                continue;
            }

            let cell = Rect::new(x, y, width, height);
            let style = if value.is_finite() {
                Style::default()
                    .fg(Color::Black)
                    .bg(self.colormap.color(norm.apply(value)).into())
            } else {
                Style::default()
            };
            buf.set_style(cell, style);

            let label = grid::label(value);
            render_centered(buf, &label, cell, style);
        }
    }
}

/// Split `len` cells starting at `start` into `n` near-equal parts and return
/// the offset and length of part `i`
fn partition(start: u16, len: u16, n: usize, i: usize) -> (u16, u16) {
    let len = len as usize;
    let a = len * i / n;
    let b = len * (i + 1) / n;
    (start + a as u16, (b - a) as u16)
}

fn render_centered(buf: &mut Buffer, label: &str, area: Rect, style: Style) {
    let width = (label.width() as u16).min(area.width);
    let x = area.left() + (area.width - width) / 2;
    let y = area.top() + area.height.saturating_sub(1) / 2;
    buf.set_stringn(x, y, label, width as usize, style);
}

impl Widget for ValueHeatmap<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_ref(area, buf);
    }
}

impl WidgetRef for ValueHeatmap<'_> {
    fn render_ref(&self, area: Rect, buf: &mut Buffer) {
        if area.height < 3 || area.width == 0 {
            return;
        }

        // Layout
        let [title_area, _, grid_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);

        debug!(
            "Rendering {}x{} heatmap into {}x{} cells",
            self.grid.shape().rows(),
            self.grid.shape().cols(),
            grid_area.width,
            grid_area.height
        );

        // Title
        Paragraph::new(TITLE)
            .alignment(Alignment::Center)
            .bold()
            .render(title_area, buf);

        // Grid
        self.render_cells(grid_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(buf: &Buffer, y: u16) -> String {
        (buf.area.left()..buf.area.right())
            .map(|x| buf.get(x, y).symbol())
            .collect()
    }

    fn render(grid: &ValueGrid, width: u16, height: u16) -> Buffer {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        ValueHeatmap::new(grid).render(area, &mut buf);
        buf
    }

    #[test]
    fn partition_spreads_remainder() {
        let parts = (0..3).map(|i| partition(2, 10, 3, i)).collect::<Vec<_>>();
        assert_eq!(parts, vec![(2, 3), (5, 3), (8, 4)]);
    }

    #[test]
    fn title_is_centered() {
        let grid = ValueGrid::reshape([1.0], (1, 1)).unwrap();
        let buf = render(&grid, 40, 10);
        let title = line(&buf, 0);
        assert_eq!(title.trim(), TITLE);
        assert_eq!(title.find(TITLE), Some((40 - TITLE.len()) / 2));
    }

    #[test]
    fn labels_are_centered_in_cells() {
        let v = (1..=16).collect::<Vec<i32>>();
        let grid = ValueGrid::reshape(v, (4, 4)).unwrap();
        // 60x30 leaves a 60x28 grid: 15 columns and 7 rows per cell
        let buf = render(&grid, 60, 30);

        let first_row = line(&buf, 2 + 3);
        assert_eq!(first_row.find("1.0"), Some(6));
        assert_eq!(first_row.find("2.0"), Some(15 + 6));
        assert_eq!(first_row.find("4.0"), Some(45 + 6));

        let last_row = line(&buf, 2 + 21 + 3);
        assert_eq!(last_row.find("13.0"), Some(5));
        assert_eq!(last_row.find("16.0"), Some(45 + 5));
    }

    #[test]
    fn row_zero_is_at_the_top() {
        let grid = ValueGrid::reshape([0.25, 0.75], (2, 1)).unwrap();
        let buf = render(&grid, 10, 6);
        assert!(line(&buf, 2).contains("0.25"));
        assert!(line(&buf, 4).contains("0.75"));
    }

    #[test]
    fn cells_use_cool_colormap() {
        let v = (1..=16).collect::<Vec<i32>>();
        let grid = ValueGrid::reshape(v, (4, 4)).unwrap();
        let buf = render(&grid, 60, 30);
        assert_eq!(buf.get(0, 2).bg, Color::Rgb(0, 255, 255));
        assert_eq!(buf.get(59, 29).bg, Color::Rgb(255, 0, 255));
        assert_eq!(buf.get(6, 5).fg, Color::Black);
    }

    #[test]
    fn no_axis_glyphs() {
        let grid = ValueGrid::reshape([1.0, -1.0, 0.5, 2.0], (2, 2)).unwrap();
        let buf = render(&grid, 30, 12);
        for y in 0..12 {
            let l = line(&buf, y);
            assert!(!l.contains(symbols::line::VERTICAL));
            assert!(!l.contains(symbols::line::HORIZONTAL));
        }
    }

    #[test]
    fn non_finite_cells_are_unfilled() {
        let grid = ValueGrid::reshape([f64::NAN, 1.0], (1, 2)).unwrap();
        let buf = render(&grid, 20, 5);
        assert_eq!(buf.get(0, 2).bg, Color::Reset);
        assert!(line(&buf, 3).contains("NaN"));
    }

    #[test]
    fn wide_labels_are_truncated() {
        let grid = ValueGrid::reshape([123.45678, 0.0], (1, 2)).unwrap();
        let buf = render(&grid, 8, 3);
        assert_eq!(line(&buf, 2), "123.0.0 ");
    }

    #[test]
    fn tiny_area_is_skipped() {
        let grid = ValueGrid::reshape([1.0], (1, 1)).unwrap();
        let buf = render(&grid, 10, 2);
        assert_eq!(line(&buf, 0).trim(), "");
    }
}
