use ratatui::style::Color;

/// An 8-bit RGB color
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl From<Rgb> for Color {
    fn from(value: Rgb) -> Self {
        let Rgb(r, g, b) = value;
        Color::Rgb(r, g, b)
    }
}

/// Colormaps available for heatmaps
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Colormap {
    /// Linear blend from cyan at the low end to magenta at the high end
    #[default]
    Cool,
}

impl Colormap {
    /// Start and end colors of the map
    fn gradient(&self) -> (Rgb, Rgb) {
        match self {
            Colormap::Cool => (Rgb(0, 255, 255), Rgb(255, 0, 255)),
        }
    }

    /// Map a normalized value to a color, clamping `t` to `[0, 1]`
    pub fn color(&self, t: f64) -> Rgb {
        linear_gradient(self.gradient(), t.clamp(0.0, 1.0))
    }
}

/// Linear normalization of values onto `[0, 1]`
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Normalize {
    min: f64,
    max: f64,
}

impl Normalize {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Map `value` onto `[0, 1]`; a degenerate range maps everything to `0`
    pub fn apply(&self, value: f64) -> f64 {
        let range = self.max - self.min;
        if range <= 0.0 {
            return 0.0;
        }
        ((value - self.min) / range).clamp(0.0, 1.0)
    }
}

fn linear_gradient(gradient: (Rgb, Rgb), percent: f64) -> Rgb {
    let (Rgb(r1, g1, b1), Rgb(r2, g2, b2)) = gradient;
    Rgb(
        interpolate(r1, r2, percent),
        interpolate(g1, g2, percent),
        interpolate(b1, b2, percent),
    )
}

fn interpolate(a: u8, b: u8, p: f64) -> u8 {
    let (a, b) = (f64::from(a), f64::from(b));
    (a + (p * (b - a))).round() as u8
}
