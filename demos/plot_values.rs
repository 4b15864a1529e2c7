use std::error::Error;

use gridviz::{plot_values, PlotConfig, Shape};

/// State values of the 4x4 gridworld under the equiprobable random policy
/// (undiscounted, reward -1 per step, terminal corners)
const RANDOM_POLICY_VALUES: [f64; 16] = [
    0.0, -14.0, -20.0, -22.0, //
    -14.0, -18.0, -20.0, -20.0, //
    -20.0, -20.0, -18.0, -14.0, //
    -22.0, -20.0, -14.0, 0.0,
];

fn main() -> Result<(), Box<dyn Error>> {
    plot_values(RANDOM_POLICY_VALUES, PlotConfig::default())?;

    // The same values laid out over a wider world
    let config = PlotConfig {
        worldshape: Shape::new(2, 8),
        figsize: (10.0, 3.0).into(),
    };
    plot_values(&RANDOM_POLICY_VALUES[..], config)?;

    Ok(())
}
