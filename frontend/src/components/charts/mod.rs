pub mod comparison_chart;
pub mod trend_chart;

pub use comparison_chart::ComparisonChart;
pub use trend_chart::TrendChart;

use plotters::style::RGBColor;

/// App accent palette shared by both charts, primary blue first.
pub(crate) const SERIES_COLORS: [RGBColor; 5] = [
    RGBColor(102, 126, 234),
    RGBColor(240, 147, 251),
    RGBColor(255, 154, 158),
    RGBColor(196, 113, 237),
    RGBColor(118, 75, 162),
];
