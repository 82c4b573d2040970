//! Page routing and sidebar layout

use serde::{Deserialize, Serialize};

/// Application name shown in the sidebar
pub const APP_TITLE: &str = "Finicify";

/// A dashboard page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Overview,
    SectorRisk,
    RiskMetrics,
    CompanyComparison,
    NotFound,
}

impl Page {
    /// Pages with their own content, in sidebar order
    pub const MAIN: [Page; 4] = [
        Page::Overview,
        Page::SectorRisk,
        Page::RiskMetrics,
        Page::CompanyComparison,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Overview => "Overview",
            Page::SectorRisk => "Sector Risk Analysis",
            Page::RiskMetrics => "Risk Metrics",
            Page::CompanyComparison => "Company Comparison",
            Page::NotFound => "Not Found",
        }
    }

    /// Canonical route; `NotFound` has none
    pub fn route(&self) -> Option<&'static str> {
        match self {
            Page::Overview => Some("/"),
            Page::SectorRisk => Some("/sector-risk"),
            Page::RiskMetrics => Some("/risk-metrics"),
            Page::CompanyComparison => Some("/company-comparison"),
            Page::NotFound => None,
        }
    }

    /// HTML anchor id for the page section
    pub fn anchor(&self) -> &'static str {
        match self {
            Page::Overview => "overview",
            Page::SectorRisk => "sector-risk",
            Page::RiskMetrics => "risk-metrics",
            Page::CompanyComparison => "company-comparison",
            Page::NotFound => "not-found",
        }
    }

    /// Resolve a route to the page it renders.
    ///
    /// Trailing slashes are ignored. `/portfolio` and `/settings` render the
    /// overview; anything else unknown is `NotFound`.
    pub fn from_route(route: &str) -> Page {
        let trimmed = route.trim();
        let path = trimmed.trim_end_matches('/');
        let path = if path.is_empty() && trimmed.starts_with('/') {
            "/"
        } else {
            path
        };
        match path {
            "/" | "/portfolio" | "/settings" => Page::Overview,
            "/sector-risk" => Page::SectorRisk,
            "/risk-metrics" => Page::RiskMetrics,
            "/company-comparison" => Page::CompanyComparison,
            _ => Page::NotFound,
        }
    }
}

/// Sidebar entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub title: &'static str,
    pub route: &'static str,
}

/// Titled group of sidebar entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavGroup {
    pub label: &'static str,
    pub items: Vec<NavItem>,
}

/// Sidebar groups in display order
pub fn sidebar() -> Vec<NavGroup> {
    vec![
        NavGroup {
            label: "Main Menu",
            items: Page::MAIN
                .iter()
                .filter_map(|page| {
                    page.route().map(|route| NavItem {
                        title: page.title(),
                        route,
                    })
                })
                .collect(),
        },
        NavGroup {
            label: "Other",
            items: vec![
                NavItem {
                    title: "Portfolio",
                    route: "/portfolio",
                },
                NavItem {
                    title: "Settings",
                    route: "/settings",
                },
            ],
        },
    ]
}

/// Whether a sidebar item is highlighted for the current route.
///
/// The overview link only matches `/` exactly; the others match their own route.
pub fn is_active(item: &NavItem, current_route: &str) -> bool {
    let current = current_route.trim_end_matches('/');
    let current = if current.is_empty() { "/" } else { current };
    item.route == current
}
