//! Text and JSON rendering
//!
//! Global invariants enforced:
//! - Output order is exactly the order of the computed view
//! - Identical state yields byte-for-byte identical output

use crate::dashboard::{series_max, ChartPoint, StatsCard};
use crate::data;
use crate::fund::FundRecord;
use crate::heatmap::{Heatmap, HeatmapCell};
use crate::navigation::{sidebar, Page, APP_TITLE};
use crate::state::DashboardState;
use crate::view::SortDirection;

const BAR_WIDTH: usize = 30;

/// Render a fund table as text
pub fn render_funds_text(funds: &[FundRecord]) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{} {} {} {:>8} {:>8} {}\n",
        pad("FUND", 38),
        pad("COMPANY", 32),
        pad("CATEGORY", 14),
        "1Y %",
        "3Y %",
        "RISK"
    ));

    for fund in funds {
        output.push_str(&format!(
            "{} {} {} {:>8.2} {:>8.2} {}\n",
            truncate_or_pad(&fund.name, 38),
            truncate_or_pad(&fund.company, 32),
            truncate_or_pad(&fund.category, 14),
            fund.one_year_return,
            fund.three_year_return,
            fund.risk_level,
        ));
    }

    if funds.is_empty() {
        output.push_str("(no funds match)\n");
    }

    output
}

/// Render a fund table as JSON
pub fn render_funds_json(funds: &[FundRecord]) -> String {
    serde_json::to_string_pretty(funds).unwrap_or_else(|_| "[]".to_string())
}

/// Render the heatmap grid as text, each value followed by its cell color
pub fn render_heatmap_text(heatmap: &Heatmap) -> String {
    let mut output = String::new();

    output.push_str(&pad("FUND", 38));
    for column in &heatmap.columns {
        output.push_str(&format!(" {}", pad(column, 22)));
    }
    output.push('\n');

    for row in &heatmap.rows {
        output.push_str(&truncate_or_pad(&row.fund, 38));
        for cell in heatmap.row_cells(row) {
            let entry = format!("{:.2} {}", cell.value, cell.color.css());
            output.push_str(&format!(" {}", pad(&entry, 22)));
        }
        output.push('\n');
    }

    let [high, mid, low] = heatmap.scale.legend();
    output.push_str(&format!("Scale: {} (High) / {} / {} (Low)\n", high, mid, low));
    output
}

/// Render heatmap cells as JSON
pub fn render_heatmap_json(cells: &[HeatmapCell]) -> String {
    serde_json::to_string_pretty(cells).unwrap_or_else(|_| "[]".to_string())
}

fn render_cards(cards: &[StatsCard]) -> String {
    let mut output = String::new();
    for card in cards {
        output.push_str(&format!("  {} {}", pad(&card.title, 32), card.value));
        if let Some(trend) = card.trend_label() {
            output.push_str(&format!("  {}", trend));
        }
        output.push('\n');
    }
    output
}

/// Horizontal bar chart, bars scaled to the series maximum
pub fn render_bars(points: &[ChartPoint], unit: &str) -> String {
    let max = series_max(points);
    let label_width = points
        .iter()
        .map(|p| p.label.chars().count())
        .max()
        .unwrap_or(0);
    let mut output = String::new();
    for point in points {
        let len = if max > 0.0 {
            ((point.value / max) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        output.push_str(&format!(
            "  {} {} {}{}\n",
            pad(&point.label, label_width),
            pad(&"#".repeat(len), BAR_WIDTH),
            point.value,
            unit
        ));
    }
    output
}

fn render_overview_text() -> String {
    let mut output = String::from("Dashboard Overview\n");
    output.push_str("Welcome back! Here's what's happening with your investments.\n\n");
    output.push_str(&render_cards(&data::overview_cards()));
    output.push_str(&format!(
        "\nPortfolio Performance [{}] (active: 6M)\n",
        data::OVERVIEW_RANGES.join(" | ")
    ));
    output.push_str(&render_bars(&data::portfolio_performance(), ""));
    output.push_str("\nQuick Actions\n");
    for action in data::quick_actions() {
        output.push_str(&format!("  - {}\n", action));
    }
    output.push_str("\nRecent Activity\n");
    for (title, age) in data::recent_activity() {
        output.push_str(&format!("  * {} ({})\n", title, age));
    }
    output
}

fn render_sector_risk_text(state: &DashboardState) -> String {
    let sector = &state.sector;
    let slices = data::risk_distribution();

    let mut output = String::from("Sector Risk Analysis\n");
    output.push_str("Analyze risk distribution across sectors\n\n");
    output.push_str("Sector Funds Risk Analysis\n");
    for (index, slice) in slices.iter().enumerate() {
        let marker = if sector.is_highlighted(index) { ">" } else { " " };
        output.push_str(&format!(
            "{} {} {} %{}\n",
            marker,
            pad(slice.level.as_str(), 10),
            pad(&slice.label, 12),
            slice.share
        ));
    }

    output.push_str("\nTop Performing Funds in the Sector\n");
    if !sector.query.is_empty() {
        output.push_str(&format!("Search: \"{}\"\n", sector.query));
    }
    let directive = sector.directive();
    if let (Some(field), dir) = (directive.field, directive.direction) {
        if dir != SortDirection::None {
            output.push_str(&format!("Sorted by: {} ({})\n", field.header(), dir.as_str()));
        }
    }
    output.push_str(&render_funds_text(&sector.view(&data::top_funds())));
    output
}

fn render_risk_metrics_text(state: &DashboardState) -> String {
    let mut output = String::from("Investment Fund Comparative Risk Analysis\n");
    output.push_str("Compare risk metrics across investment funds\n\n");
    output.push_str("Risk Metrics Comparison\n");
    output.push_str(&render_heatmap_text(&data::risk_heatmap(state.scale)));
    output
}

fn render_company_comparison_text(state: &DashboardState) -> String {
    let comparison = &state.comparison;
    let mut output = String::from("Company Internal Comparison\n");
    output.push_str(&format!("Mode: {}\n", comparison.mode.label()));
    output.push_str(&format!(
        "Company to be Analyzed: {}\n\n",
        comparison.company_name()
    ));

    output.push_str("Company Analysis\n");
    output.push_str(&render_cards(&data::company_cards()));

    output.push_str("\nCompany-Based Comparison\n");
    output.push_str(&format!(
        "{} {:>6} {:>10} {:>10} {:>10} {:>10}\n",
        pad("COMPANY", 38),
        "FUNDS",
        "SIZE (TL)",
        "RETURN %",
        "FEE %",
        "VOL %"
    ));
    for row in data::company_comparison() {
        output.push_str(&format!(
            "{} {:>6} {:>10} {:>10.2} {:>10.2} {:>10.2}\n",
            truncate_or_pad(&row.company, 38),
            row.fund_count,
            row.total_size,
            row.avg_return,
            row.avg_fee,
            row.avg_volatility
        ));
    }

    output.push_str(&format!(
        "\nCompany Internal Performance Chart - Top 5 Funds ({})\n",
        comparison.period
    ));
    output.push_str(&render_bars(&data::company_top_funds(), "%"));
    output
}

/// Render a page as text
pub fn render_page_text(page: Page, state: &DashboardState) -> String {
    match page {
        Page::Overview => render_overview_text(),
        Page::SectorRisk => render_sector_risk_text(state),
        Page::RiskMetrics => render_risk_metrics_text(state),
        Page::CompanyComparison => render_company_comparison_text(state),
        Page::NotFound => "404\nOops! Page not found\n".to_string(),
    }
}

/// Render the sidebar navigation as text, marking the current route
pub fn render_sidebar_text(current_route: &str) -> String {
    let mut output = format!("{}\n", APP_TITLE);
    for group in sidebar() {
        output.push_str(&format!("{}\n", group.label));
        for item in &group.items {
            let marker = if crate::navigation::is_active(item, current_route) {
                "*"
            } else {
                " "
            };
            output.push_str(&format!(" {} {} {}\n", marker, pad(item.title, 22), item.route));
        }
    }
    output
}

/// Left-align `s` in `width` columns
fn pad(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// Truncate or pad string to a fixed display width (counted in chars)
fn truncate_or_pad(s: &str, width: usize) -> String {
    if s.chars().count() > width {
        let kept: String = s.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", kept)
    } else {
        pad(s, width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_or_pad_is_char_safe() {
        assert_eq!(truncate_or_pad("İş Bankası", 5), "İş...");
        assert_eq!(truncate_or_pad("abc", 5), "abc  ");
    }

    #[test]
    fn test_empty_view_notice() {
        let text = render_funds_text(&[]);
        assert!(text.contains("(no funds match)"));
    }

    #[test]
    fn test_bars_scale_to_max() {
        let points = vec![ChartPoint::new("a", 5.0), ChartPoint::new("b", 10.0)];
        let text = render_bars(&points, "%");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0].matches('#').count(), 15);
        assert_eq!(lines[1].matches('#').count(), 30);
        assert!(lines[1].ends_with("10%"));
    }

    #[test]
    fn test_not_found_page() {
        let text = render_page_text(Page::NotFound, &DashboardState::default());
        assert!(text.starts_with("404"));
    }

    #[test]
    fn test_sidebar_marks_current_route() {
        let text = render_sidebar_text("/risk-metrics");
        let line = text.lines().find(|l| l.contains("Risk Metrics")).unwrap();
        assert!(line.starts_with(" *"));
    }
}
