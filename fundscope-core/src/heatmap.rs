//! Risk metrics heatmap and value-to-color mapping
//!
//! Global invariants enforced:
//! - `color_for` never fails: out-of-range values clamp to the boundary colors
//! - A zero-width or non-finite range maps to the color at t = 0
//! - Identical inputs yield identical colors

use serde::{Deserialize, Serialize};

/// Default heatmap scale
pub const DEFAULT_SCALE: HeatmapScale = HeatmapScale { min: 0.0, max: 10.0 };

/// An sRGB color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// CSS `rgb(r, g, b)` notation
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// `⌊255 * x⌋` for x in [0, 1]
fn channel(x: f64) -> u8 {
    (255.0 * x).floor().clamp(0.0, 255.0) as u8
}

/// Black to green
fn low_band(t: f64) -> Rgb {
    let i = t / 0.25;
    Rgb::new(0, channel(i), 0)
}

/// Green to yellow
fn green_yellow_band(t: f64) -> Rgb {
    let i = (t - 0.25) / 0.25;
    Rgb::new(channel(i), 255, 0)
}

/// Yellow to red
fn yellow_red_band(t: f64) -> Rgb {
    let i = (t - 0.5) / 0.25;
    Rgb::new(255, channel(1.0 - i), 0)
}

/// White to red; green and blue fall together
fn high_band(t: f64) -> Rgb {
    let i = (t - 0.75) / 0.25;
    let fade = channel(1.0 - i);
    Rgb::new(255, fade, fade)
}

/// Ramp segments, highest lower bound first. Lower bounds are inclusive.
const SEGMENTS: [(f64, fn(f64) -> Rgb); 4] = [
    (0.75, high_band),
    (0.5, yellow_red_band),
    (0.25, green_yellow_band),
    (0.0, low_band),
];

/// Position of `value` within `[min, max]`, clamped to `[0, 1]`
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if span == 0.0 || !span.is_finite() {
        return 0.0;
    }
    let t = (value - min) / span;
    if t.is_nan() {
        return 0.0;
    }
    t.clamp(0.0, 1.0)
}

/// Map `value` on the `[min, max]` scale to a heatmap color
pub fn color_for(value: f64, min: f64, max: f64) -> Rgb {
    color_at(normalize(value, min, max))
}

/// Color at a normalized position `t` in `[0, 1]`
pub fn color_at(t: f64) -> Rgb {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    SEGMENTS
        .iter()
        .find(|(lower, _)| t >= *lower)
        .map(|(_, color)| color(t))
        .unwrap_or_else(|| low_band(0.0))
}

/// Numeric range the heatmap colors are computed against
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeatmapScale {
    pub min: f64,
    pub max: f64,
}

impl Default for HeatmapScale {
    fn default() -> Self {
        DEFAULT_SCALE
    }
}

impl HeatmapScale {
    pub fn color(&self, value: f64) -> Rgb {
        color_for(value, self.min, self.max)
    }

    /// Legend labels from top to bottom: max, half the span, min
    pub fn legend(&self) -> [String; 3] {
        [
            format_scale_label(self.max),
            format!("{:.1}", (self.max - self.min) / 2.0),
            format_scale_label(self.min),
        ]
    }
}

fn format_scale_label(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}

/// One value of the heatmap grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapCell {
    pub fund_name: String,
    pub column_label: String,
    pub value: f64,
    pub color: Rgb,
}

/// A fund row in the heatmap input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapRow {
    pub fund: String,
    pub values: Vec<f64>,
}

impl HeatmapRow {
    pub fn new(fund: &str, values: &[f64]) -> Self {
        HeatmapRow {
            fund: fund.to_string(),
            values: values.to_vec(),
        }
    }
}

/// Fund × period grid of risk metric values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heatmap {
    pub columns: Vec<String>,
    pub rows: Vec<HeatmapRow>,
    pub scale: HeatmapScale,
}

impl Heatmap {
    pub fn new(columns: &[&str], rows: Vec<HeatmapRow>, scale: HeatmapScale) -> Self {
        Heatmap {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows,
            scale,
        }
    }

    /// Colored cells for one row. Values past the last column are dropped.
    pub fn row_cells(&self, row: &HeatmapRow) -> Vec<HeatmapCell> {
        row.values
            .iter()
            .zip(&self.columns)
            .map(|(value, column)| HeatmapCell {
                fund_name: row.fund.clone(),
                column_label: column.clone(),
                value: *value,
                color: self.scale.color(*value),
            })
            .collect()
    }

    /// All cells in row-major order
    pub fn cells(&self) -> Vec<HeatmapCell> {
        self.rows.iter().flat_map(|row| self.row_cells(row)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(color_for(0.0, 0.0, 10.0), Rgb::new(0, 0, 0));
        assert_eq!(color_for(2.5, 0.0, 10.0), Rgb::new(0, 255, 0));
        assert_eq!(color_for(5.0, 0.0, 10.0), Rgb::new(255, 255, 0));
        assert_eq!(color_for(7.5, 0.0, 10.0), Rgb::new(255, 255, 255));
        assert_eq!(color_for(10.0, 0.0, 10.0), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_interior_values_truncate() {
        // t = 0.1 -> i = 0.4 -> 102
        assert_eq!(color_for(1.0, 0.0, 10.0), Rgb::new(0, 102, 0));
        // t = 0.375 -> i = 0.5 -> 127.5 -> 127
        assert_eq!(color_for(3.75, 0.0, 10.0), Rgb::new(127, 255, 0));
        // t = 0.625 -> i = 0.5 -> 127
        assert_eq!(color_for(6.25, 0.0, 10.0), Rgb::new(255, 127, 0));
        // t = 0.875 -> i = 0.5 -> 127
        assert_eq!(color_for(8.75, 0.0, 10.0), Rgb::new(255, 127, 127));
    }

    #[test]
    fn test_just_below_band_edge_is_in_lower_band() {
        let c = color_for(7.49, 0.0, 10.0);
        assert_eq!(c.r, 255);
        assert_eq!(c.b, 0);
        assert!(c.g < 5);
    }

    #[test]
    fn test_out_of_range_clamps() {
        assert_eq!(color_for(-3.0, 0.0, 10.0), Rgb::new(0, 0, 0));
        assert_eq!(color_for(42.0, 0.0, 10.0), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_degenerate_range_uses_t_zero() {
        assert_eq!(color_for(5.0, 5.0, 5.0), Rgb::new(0, 0, 0));
        assert_eq!(color_for(100.0, 5.0, 5.0), Rgb::new(0, 0, 0));
        assert_eq!(color_for(f64::NAN, 0.0, 10.0), Rgb::new(0, 0, 0));
        assert_eq!(color_for(1.0, 0.0, f64::INFINITY), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_inverted_scale_still_yields_color() {
        // max < min: values are mirrored, then clamped
        assert_eq!(color_for(10.0, 10.0, 0.0), Rgb::new(0, 0, 0));
        assert_eq!(color_for(0.0, 10.0, 0.0), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_css() {
        let c = Rgb::new(255, 86, 0);
        assert_eq!(c.css(), "rgb(255, 86, 0)");
    }

    #[test]
    fn test_legend_uses_half_span() {
        assert_eq!(DEFAULT_SCALE.legend(), ["10".to_string(), "5.0".to_string(), "0".to_string()]);
        let scale = HeatmapScale { min: 2.0, max: 6.0 };
        assert_eq!(scale.legend()[1], "2.0");
    }

    #[test]
    fn test_cells_pair_values_with_columns() {
        let heatmap = Heatmap::new(
            &["1M", "3M"],
            vec![HeatmapRow::new("Fund A", &[2.5, 5.0, 9.0])],
            DEFAULT_SCALE,
        );
        let cells = heatmap.cells();
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].column_label, "1M");
        assert_eq!(cells[0].color, Rgb::new(0, 255, 0));
        assert_eq!(cells[1].color, Rgb::new(255, 255, 0));
    }
}
