//! Built-in dataset
//!
//! Every page renders from these fixed tables. They are constructed once per
//! call and never mutated.

use crate::dashboard::{ChartPoint, CompanyRow, RiskSlice, StatsCard, Trend, Variant};
use crate::fund::{FundRecord, RiskLevel};
use crate::heatmap::{Heatmap, HeatmapRow, HeatmapScale};

/// Heatmap period columns
pub const HEATMAP_COLUMNS: &[&str] = &["1M", "3M", "6M", "1Y", "2Y"];

/// Selectable periods on the company comparison chart
pub const TIME_PERIODS: &[&str] = &["1 week", "1 month", "6 months", "2025", "1 Year", "5 Years"];

/// Default period on the company comparison chart
pub const DEFAULT_TIME_PERIOD: &str = "6 months";

/// Range buttons on the overview chart; the active one is `6M`
pub const OVERVIEW_RANGES: &[&str] = &["1M", "3M", "6M", "1Y", "ALL"];

/// Portfolio management companies available for internal comparison (key, display name)
pub const COMPANIES: &[(&str, &str)] = &[
    ("inveo", "INVEO PORTFÖY YÖNETİM A.Ş."),
    ("yapi-kredi", "Yapı Kredi Portfolio Management A.Ş."),
    ("deniz", "Deniz Portfolio Management A.Ş."),
];

/// Top performing funds in the sector
pub fn top_funds() -> Vec<FundRecord> {
    vec![
        FundRecord::new(
            "Atlas Portfolio Management Fund",
            "Deniz Portfolio Management Inc.",
            "Bond Funds",
            10.53,
            23.35,
            RiskLevel::Low,
        ),
        FundRecord::new(
            "Yapı Kredi Portfolio Management Fund",
            "Yapı Kredi Portfolio",
            "Equity Funds",
            12.66,
            25.22,
            RiskLevel::High,
        ),
        FundRecord::new(
            "HSBC Portfolio Management Fund",
            "HSBC Portfolio Management Inc.",
            "Mixed Funds",
            11.25,
            24.15,
            RiskLevel::Medium,
        ),
        FundRecord::new(
            "Akbank Portfolio Management Fund",
            "Akbank Portfolio Management",
            "Bond Funds",
            9.88,
            22.45,
            RiskLevel::VeryLow,
        ),
        FundRecord::new(
            "Garanti Portfolio Management Fund",
            "Garanti Portfolio Management",
            "Equity Funds",
            13.42,
            26.88,
            RiskLevel::Medium,
        ),
    ]
}

/// Sector risk distribution, highest risk first
pub fn risk_distribution() -> Vec<RiskSlice> {
    vec![
        RiskSlice::new(RiskLevel::VeryHigh, 49.3, "#EF4444", "Çok Yüksek"),
        RiskSlice::new(RiskLevel::High, 12.53, "#F59E0B", "Yüksek"),
        RiskSlice::new(RiskLevel::Medium, 14.0, "#3B82F6", "Orta"),
        RiskSlice::new(RiskLevel::Low, 8.0, "#84CC16", "Düşük"),
        RiskSlice::new(RiskLevel::VeryLow, 3.0, "#10B981", "En Düşük"),
    ]
}

/// Risk metric values per fund and period
pub fn heatmap_rows() -> Vec<HeatmapRow> {
    vec![
        HeatmapRow::new("Atlas Portfolio Management Fund", &[6.65, 6.42, 6.31, 5.98, 5.88]),
        HeatmapRow::new("Deniz Portfolio Management Fund", &[6.22, 6.18, 5.97, 5.61, 5.43]),
        HeatmapRow::new("Yapı Kredi Portfolio Management Fund", &[6.55, 6.30, 6.15, 5.82, 5.74]),
        HeatmapRow::new("HSBC Portfolio Management Fund", &[6.11, 6.08, 5.87, 5.51, 5.33]),
        HeatmapRow::new("Akbank Portfolio Management Fund", &[6.45, 6.20, 6.05, 5.72, 5.64]),
        HeatmapRow::new("Garanti Portfolio Management Fund", &[6.75, 6.52, 6.41, 6.08, 5.98]),
        HeatmapRow::new("İş Bankası Portfolio Management Fund", &[6.32, 6.28, 6.07, 5.71, 5.53]),
        HeatmapRow::new("Ziraat Portfolio Management Fund", &[6.65, 6.40, 6.25, 5.92, 5.84]),
    ]
}

/// The risk metrics heatmap on the given scale
pub fn risk_heatmap(scale: HeatmapScale) -> Heatmap {
    Heatmap::new(HEATMAP_COLUMNS, heatmap_rows(), scale)
}

/// Overview headline cards
pub fn overview_cards() -> Vec<StatsCard> {
    vec![
        StatsCard::new("Total Portfolio Value", "$142,350", Variant::Success)
            .with_trend(Trend::Up, "12.5%"),
        StatsCard::new("Monthly Return", "8.2%", Variant::Info).with_trend(Trend::Up, "2.1%"),
        StatsCard::new("Active Investments", "24", Variant::Default),
        StatsCard::new("Risk Score", "Medium", Variant::Warning),
    ]
}

/// Monthly portfolio value series for the overview chart
pub fn portfolio_performance() -> Vec<ChartPoint> {
    vec![
        ChartPoint::new("Jan", 4000.0),
        ChartPoint::new("Feb", 3000.0),
        ChartPoint::new("Mar", 5000.0),
        ChartPoint::new("Apr", 4500.0),
        ChartPoint::new("May", 6000.0),
        ChartPoint::new("Jun", 5500.0),
    ]
}

pub fn quick_actions() -> &'static [&'static str] {
    &[
        "View Sector Risk Analysis",
        "Compare Company Performance",
        "Generate Risk Report",
    ]
}

/// Recent activity feed (title, age)
pub fn recent_activity() -> Vec<(&'static str, &'static str)> {
    vec![("Portfolio Analysis Updated", "2 hours ago"); 3]
}

/// Company analysis headline cards
pub fn company_cards() -> Vec<StatsCard> {
    vec![
        StatsCard::new("Total Fund Count", "75", Variant::Default),
        StatsCard::new("Total Assets Under Management", "75.7B TL", Variant::Default),
        StatsCard::new("Average Management Fee", "2.03%", Variant::Default),
        StatsCard::new("Average 1 Year Return", "23.61%", Variant::Default),
    ]
}

pub fn company_comparison() -> Vec<CompanyRow> {
    let company = "Yapı Kredi Portfolio Management A.Ş.";
    vec![
        CompanyRow::new(company, 12, "34.55B", 23.53, 23.24, 25.14),
        CompanyRow::new(company, 15, "42.33B", 24.15, 22.88, 24.56),
        CompanyRow::new(company, 10, "28.92B", 22.91, 23.67, 25.89),
    ]
}

/// Top 5 funds within the company by return
pub fn company_top_funds() -> Vec<ChartPoint> {
    vec![
        ChartPoint::new("Technology Fund", 14.64),
        ChartPoint::new("Global Equity", 14.84),
        ChartPoint::new("AI Fund", 13.25),
        ChartPoint::new("Portfolio Fund", 12.88),
        ChartPoint::new("Sustainability Fund", 11.92),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heatmap_rows_match_columns() {
        for row in heatmap_rows() {
            assert_eq!(row.values.len(), HEATMAP_COLUMNS.len(), "{}", row.fund);
        }
    }

    #[test]
    fn test_risk_distribution_covers_every_level_once() {
        let slices = risk_distribution();
        let levels: Vec<RiskLevel> = slices.iter().map(|s| s.level).collect();
        assert_eq!(levels, RiskLevel::DISTRIBUTION_ORDER.to_vec());
    }

    #[test]
    fn test_default_period_is_listed() {
        assert!(TIME_PERIODS.contains(&DEFAULT_TIME_PERIOD));
    }
}
