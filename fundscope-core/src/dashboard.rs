//! Dashboard widgets: stats cards, chart series, risk slices and company rows

use crate::fund::RiskLevel;
use serde::{Deserialize, Serialize};

/// Card color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    #[default]
    Default,
    Success,
    Warning,
    Danger,
    Info,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Default => "default",
            Variant::Success => "success",
            Variant::Warning => "warning",
            Variant::Danger => "danger",
            Variant::Info => "info",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "↑",
            Trend::Down => "↓",
        }
    }
}

/// Headline metric card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsCard {
    pub title: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<(Trend, String)>,
    pub variant: Variant,
}

impl StatsCard {
    pub fn new(title: &str, value: &str, variant: Variant) -> Self {
        StatsCard {
            title: title.to_string(),
            value: value.to_string(),
            trend: None,
            variant,
        }
    }

    pub fn with_trend(mut self, trend: Trend, text: &str) -> Self {
        self.trend = Some((trend, text.to_string()));
        self
    }

    /// Trend badge text, e.g. `↑ 12.5%`
    pub fn trend_label(&self) -> Option<String> {
        self.trend
            .as_ref()
            .map(|(trend, text)| format!("{} {}", trend.arrow(), text))
    }
}

/// Labelled value in a chart series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(label: &str, value: f64) -> Self {
        ChartPoint {
            label: label.to_string(),
            value,
        }
    }
}

/// Largest value in a series, or 0.0 when empty
pub fn series_max(points: &[ChartPoint]) -> f64 {
    points.iter().map(|p| p.value).fold(0.0, f64::max)
}

/// Share of sector funds at one risk level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskSlice {
    pub level: RiskLevel,
    /// Percent of sector funds
    pub share: f64,
    pub color: String,
    /// Localized label
    pub label: String,
}

impl RiskSlice {
    pub fn new(level: RiskLevel, share: f64, color: &str, label: &str) -> Self {
        RiskSlice {
            level,
            share,
            color: color.to_string(),
            label: label.to_string(),
        }
    }
}

/// Per-company aggregate row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyRow {
    pub company: String,
    pub fund_count: u32,
    /// Pre-formatted size in TL, e.g. "34.55B"
    pub total_size: String,
    pub avg_return: f64,
    pub avg_fee: f64,
    pub avg_volatility: f64,
}

impl CompanyRow {
    pub fn new(
        company: &str,
        fund_count: u32,
        total_size: &str,
        avg_return: f64,
        avg_fee: f64,
        avg_volatility: f64,
    ) -> Self {
        CompanyRow {
            company: company.to_string(),
            fund_count,
            total_size: total_size.to_string(),
            avg_return,
            avg_fee,
            avg_volatility,
        }
    }
}
