//! Declarative description of the capital/interest doughnut chart.
//!
//! The frontend draws whatever this config says; nothing here touches a canvas.

use serde::{Deserialize, Serialize};

use crate::currency::CurrencyFormatter;

pub const CAPITAL_LABEL: &str = "Capital";
pub const INTEREST_LABEL: &str = "Total Interest";

/// RGBA color with alpha in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// CSS `rgba()` notation, used for legend swatches
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

const CAPITAL_FILL: Rgba = Rgba::new(54, 162, 235, 0.8);
const CAPITAL_BORDER: Rgba = Rgba::new(54, 162, 235, 1.0);
const INTEREST_FILL: Rgba = Rgba::new(255, 99, 132, 0.8);
const INTEREST_BORDER: Rgba = Rgba::new(255, 99, 132, 0.8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegendPosition {
    Top,
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSlice {
    pub label: String,
    pub value: f64,
    pub fill: Rgba,
    pub border: Rgba,
}

impl ChartSlice {
    /// Tooltip text, e.g. `Capital: 10.000,00 €`
    pub fn tooltip_label(&self, formatter: &CurrencyFormatter) -> String {
        if self.label.is_empty() {
            formatter.format(self.value)
        } else {
            format!("{}: {}", self.label, formatter.format(self.value))
        }
    }

    /// Only finite, non-negative values get a visible arc
    pub fn is_drawable(&self) -> bool {
        self.value.is_finite() && self.value >= 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoughnutChartConfig {
    pub slices: Vec<ChartSlice>,
    pub legend_position: LegendPosition,
    pub border_width: u32,
}

impl DoughnutChartConfig {
    /// Sum of the drawable slice values
    pub fn total(&self) -> f64 {
        self.slices
            .iter()
            .filter(|slice| slice.is_drawable())
            .map(|slice| slice.value)
            .sum()
    }

    /// True when at least one slice has something to draw
    pub fn has_data(&self) -> bool {
        self.total() > 0.0
    }

    /// Share of each slice in the drawable total, `0.0` for undrawable ones
    pub fn proportions(&self) -> Vec<f64> {
        let total = self.total();
        self.slices
            .iter()
            .map(|slice| {
                if total > 0.0 && slice.is_drawable() {
                    slice.value / total
                } else {
                    0.0
                }
            })
            .collect()
    }
}

/// Two-slice chart comparing borrowed capital with the interest paid on it
pub fn doughnut_config(principal: f64, total_interest: f64) -> DoughnutChartConfig {
    DoughnutChartConfig {
        slices: vec![
            ChartSlice {
                label: CAPITAL_LABEL.to_string(),
                value: principal,
                fill: CAPITAL_FILL,
                border: CAPITAL_BORDER,
            },
            ChartSlice {
                label: INTEREST_LABEL.to_string(),
                value: total_interest,
                fill: INTEREST_FILL,
                border: INTEREST_BORDER,
            },
        ],
        legend_position: LegendPosition::Bottom,
        border_width: 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doughnut_has_capital_and_interest() {
        let config = doughnut_config(10000.0, 272.8978);

        assert_eq!(config.slices.len(), 2);
        assert_eq!(config.slices[0].label, "Capital");
        assert_eq!(config.slices[0].value, 10000.0);
        assert_eq!(config.slices[1].label, "Total Interest");
        assert_eq!(config.legend_position, LegendPosition::Bottom);
        assert_eq!(config.border_width, 1);
    }

    #[test]
    fn test_tooltip_matches_summary_formatting() {
        let formatter = CurrencyFormatter::default();
        let config = doughnut_config(10000.0, 272.8978);

        assert_eq!(config.slices[0].tooltip_label(&formatter), "Capital: 10.000,00\u{a0}€");
        assert_eq!(
            config.slices[1].tooltip_label(&formatter),
            format!("Total Interest: {}", formatter.format(272.8978))
        );
    }

    #[test]
    fn test_proportions() {
        let config = doughnut_config(750.0, 250.0);

        assert_eq!(config.total(), 1000.0);
        assert_eq!(config.proportions(), vec![0.75, 0.25]);
        assert!(config.has_data());
    }

    #[test]
    fn test_nan_interest_is_not_drawn() {
        let formatter = CurrencyFormatter::default();
        let config = doughnut_config(1000.0, f64::NAN);

        assert!(!config.slices[1].is_drawable());
        assert_eq!(config.proportions(), vec![1.0, 0.0]);
        assert_eq!(config.slices[1].tooltip_label(&formatter), "Total Interest: ---");
    }

    #[test]
    fn test_nothing_to_draw() {
        let config = doughnut_config(f64::NAN, f64::NAN);
        assert!(!config.has_data());
        assert_eq!(config.proportions(), vec![0.0, 0.0]);
    }

    #[test]
    fn test_css_color() {
        assert_eq!(CAPITAL_FILL.to_css(), "rgba(54, 162, 235, 0.8)");
        assert_eq!(CAPITAL_BORDER.to_css(), "rgba(54, 162, 235, 1)");
    }
}
