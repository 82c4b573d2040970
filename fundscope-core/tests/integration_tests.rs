//! Integration tests for the fund dashboard

use fundscope_core::config;
use fundscope_core::data;
use fundscope_core::heatmap::{color_for, HeatmapScale, Rgb};
use fundscope_core::{
    compute_view, render_funds_json, render_funds_text, render_page_text, DashboardState, Page,
    SectorRiskAction, SectorRiskState, SortDirection, SortDirective, SortField,
};
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("tests")
        .join("fixtures")
        .join("config")
        .join(name)
}

fn names(view: &[fundscope_core::FundRecord]) -> Vec<&str> {
    view.iter().map(|f| f.name.as_str()).collect()
}

#[test]
fn test_fund_query_sorted_by_one_year_return() {
    let funds = data::top_funds();
    let view = compute_view(
        &funds,
        "fund",
        &SortDirective::ascending(SortField::OneYearReturn),
    );

    let returns: Vec<f64> = view.iter().map(|f| f.one_year_return).collect();
    assert_eq!(returns, vec![9.88, 10.53, 11.25, 12.66, 13.42]);
    assert_eq!(view[0].name, "Akbank Portfolio Management Fund");
    assert_eq!(view[4].name, "Garanti Portfolio Management Fund");
}

#[test]
fn test_header_clicks_drive_the_view() {
    let funds = data::top_funds();
    let click = SectorRiskAction::SelectSortField(SortField::ThreeYearReturn);
    let state = SectorRiskState::new();

    let asc = state.apply(click.clone());
    let desc = asc.apply(click.clone());
    let reset = desc.apply(click);

    let asc_view = asc.view(&funds);
    let desc_view = desc.view(&funds);
    assert_eq!(asc_view.first().map(|f| f.three_year_return), Some(22.45));
    assert_eq!(desc_view.first().map(|f| f.three_year_return), Some(26.88));
    // Unsorted view is the input order
    assert_eq!(reset.view(&funds), funds);
}

#[test]
fn test_switching_columns_starts_ascending() {
    let state = SectorRiskState::new().apply_all(vec![
        SectorRiskAction::SelectSortField(SortField::Name),
        SectorRiskAction::SelectSortField(SortField::Name),
        SectorRiskAction::SelectSortField(SortField::Category),
    ]);
    let directive = state.directive();
    assert_eq!(directive.field, Some(SortField::Category));
    assert_eq!(directive.direction, SortDirection::Ascending);
}

#[test]
fn test_query_filters_across_fields() {
    let funds = data::top_funds();
    let unsorted = SortDirective::unsorted();

    // category
    assert_eq!(compute_view(&funds, "EQUITY", &unsorted).len(), 2);
    // company
    assert_eq!(
        names(&compute_view(&funds, "hsbc portfolio management inc", &unsorted)),
        vec!["HSBC Portfolio Management Fund"]
    );
    assert!(compute_view(&funds, "no such fund", &unsorted).is_empty());
}

#[test]
fn test_risk_level_sorts_as_text() {
    let funds = data::top_funds();
    let view = compute_view(&funds, "", &SortDirective::ascending(SortField::RiskLevel));
    let labels: Vec<&str> = view.iter().map(|f| f.risk_level.as_str()).collect();
    assert_eq!(labels, vec!["High", "Low", "Medium", "Medium", "Very Low"]);
    // Equal keys keep input order: HSBC precedes Garanti in the source list
    assert_eq!(view[2].name, "HSBC Portfolio Management Fund");
    assert_eq!(view[3].name, "Garanti Portfolio Management Fund");
}

#[test]
fn test_color_boundaries() {
    assert_eq!(color_for(0.0, 0.0, 10.0), Rgb::new(0, 0, 0));
    assert_eq!(color_for(2.5, 0.0, 10.0), Rgb::new(0, 255, 0));
    assert_eq!(color_for(5.0, 0.0, 10.0), Rgb::new(255, 255, 0));
    assert_eq!(color_for(7.5, 0.0, 10.0), Rgb::new(255, 255, 255));
    assert_eq!(color_for(10.0, 0.0, 10.0), Rgb::new(255, 0, 0));
}

#[test]
fn test_color_degenerate_and_out_of_range() {
    assert_eq!(color_for(5.0, 3.0, 3.0), Rgb::new(0, 0, 0));
    assert_eq!(color_for(-4.0, 0.0, 10.0), Rgb::new(0, 0, 0));
    assert_eq!(color_for(42.0, 0.0, 10.0), Rgb::new(255, 0, 0));
    assert_eq!(color_for(f64::NAN, 0.0, 10.0), Rgb::new(0, 0, 0));
}

#[test]
fn test_risk_heatmap_uses_scale() {
    let heatmap = data::risk_heatmap(HeatmapScale::default());
    assert_eq!(heatmap.columns.len(), data::HEATMAP_COLUMNS.len());
    for cell in heatmap.cells() {
        assert_eq!(cell.color, color_for(cell.value, 0.0, 10.0));
    }

    let wide = data::risk_heatmap(HeatmapScale {
        min: 0.0,
        max: 100.0,
    });
    assert!(wide.cells().iter().all(|c| c.color.r == 0));
}

#[test]
fn test_config_fixture_seeds_dashboard() {
    let resolved = config::load_and_resolve(
        &std::env::temp_dir(),
        Some(&fixture_path("bond-desc.json")),
    )
    .unwrap();
    assert_eq!(resolved.scale.max, 20.0);

    let state = DashboardState::from_config(&resolved);
    assert_eq!(state.comparison.company, "deniz");
    assert_eq!(state.comparison.period, "1 Year");

    let view = state.sector.view(&data::top_funds());
    assert_eq!(
        names(&view),
        vec![
            "Atlas Portfolio Management Fund",
            "Akbank Portfolio Management Fund"
        ]
    );
}

#[test]
fn test_invalid_config_fixtures_are_rejected() {
    let root = std::env::temp_dir();
    for name in ["inverted-scale.json", "unknown-field.json"] {
        let result = config::load_and_resolve(&root, Some(&fixture_path(name)));
        assert!(result.is_err(), "{} should be rejected", name);
    }
}

#[test]
fn test_text_and_json_rendering_follow_view_order() {
    let funds = data::top_funds();
    let view = compute_view(&funds, "", &SortDirective::descending(SortField::Name));

    let text = render_funds_text(&view);
    let yapi = text.find("Yapı Kredi").unwrap();
    let akbank = text.find("Akbank").unwrap();
    assert!(yapi < akbank);

    let json: serde_json::Value = serde_json::from_str(&render_funds_json(&view)).unwrap();
    let first = &json[0];
    assert_eq!(first["name"], "Yapı Kredi Portfolio Management Fund");
    assert_eq!(first["risk_level"], "high");
}

#[test]
fn test_every_route_renders() {
    let state = DashboardState::default();
    for page in Page::MAIN {
        let route = page.route().unwrap();
        let text = render_page_text(Page::from_route(route), &state);
        assert!(!text.is_empty());
        assert!(!text.starts_with("404"), "{} rendered as not found", route);
    }
    assert!(render_page_text(Page::from_route("/missing"), &state).starts_with("404"));
}
