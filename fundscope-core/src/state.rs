//! Page state snapshots and their transitions
//!
//! State is never mutated in place: every action produces a new snapshot,
//! which the renderers then read.

use crate::config::ResolvedConfig;
use crate::data;
use crate::dashboard::RiskSlice;
use crate::fund::{FundRecord, SortField};
use crate::heatmap::HeatmapScale;
use crate::view::{compute_view, SortDirective, SortState};
use serde::{Deserialize, Serialize};

/// User interaction on the sector risk page
#[derive(Debug, Clone, PartialEq)]
pub enum SectorRiskAction {
    SetQuery(String),
    SelectSortField(SortField),
    HoverSlice(usize),
    ClearHover,
}

/// Sector risk page state: search box, table sort and hovered slice
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectorRiskState {
    pub query: String,
    pub sort: SortState,
    pub active_index: Option<usize>,
}

impl SectorRiskState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State seeded from a query and an initial directive
    pub fn with_defaults(query: &str, sort: SortDirective) -> Self {
        SectorRiskState {
            query: query.to_string(),
            sort: sort.into(),
            active_index: None,
        }
    }

    pub fn apply(&self, action: SectorRiskAction) -> SectorRiskState {
        let next = match action {
            SectorRiskAction::SetQuery(query) => SectorRiskState {
                query,
                ..self.clone()
            },
            SectorRiskAction::SelectSortField(field) => SectorRiskState {
                sort: self.sort.select(field),
                ..self.clone()
            },
            SectorRiskAction::HoverSlice(index) => SectorRiskState {
                active_index: Some(index),
                ..self.clone()
            },
            SectorRiskAction::ClearHover => SectorRiskState {
                active_index: None,
                ..self.clone()
            },
        };
        tracing::trace!(?next, "sector risk state updated");
        next
    }

    /// Apply a sequence of actions in order
    pub fn apply_all<I>(&self, actions: I) -> SectorRiskState
    where
        I: IntoIterator<Item = SectorRiskAction>,
    {
        actions
            .into_iter()
            .fold(self.clone(), |state, action| state.apply(action))
    }

    pub fn directive(&self) -> SortDirective {
        self.sort.directive()
    }

    /// The fund table as currently filtered and sorted
    pub fn view(&self, records: &[FundRecord]) -> Vec<FundRecord> {
        compute_view(records, &self.query, &self.directive())
    }

    /// Opacity of a distribution slice: all slices are opaque unless one is hovered
    pub fn slice_opacity(&self, index: usize) -> f64 {
        match self.active_index {
            Some(active) if active != index => 0.5,
            _ => 1.0,
        }
    }

    pub fn is_highlighted(&self, index: usize) -> bool {
        self.active_index == Some(index)
    }

    pub fn active_slice<'a>(&self, slices: &'a [RiskSlice]) -> Option<&'a RiskSlice> {
        self.active_index.and_then(|i| slices.get(i))
    }
}

/// What the company comparison page compares against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonMode {
    Sector,
    #[default]
    Internal,
}

impl ComparisonMode {
    pub fn label(&self) -> &'static str {
        match self {
            ComparisonMode::Sector => "Compare with Sector",
            ComparisonMode::Internal => "Compare Within Company",
        }
    }
}

/// Company comparison page state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonState {
    pub mode: ComparisonMode,
    /// Key into [`data::COMPANIES`]
    pub company: String,
    /// One of [`data::TIME_PERIODS`]
    pub period: String,
}

impl Default for ComparisonState {
    fn default() -> Self {
        ComparisonState {
            mode: ComparisonMode::Internal,
            company: data::COMPANIES[0].0.to_string(),
            period: data::DEFAULT_TIME_PERIOD.to_string(),
        }
    }
}

impl ComparisonState {
    pub fn with_mode(&self, mode: ComparisonMode) -> ComparisonState {
        ComparisonState {
            mode,
            ..self.clone()
        }
    }

    /// Select a company by key or display name; unknown companies leave the state unchanged
    pub fn with_company(&self, company: &str) -> ComparisonState {
        match lookup_company(company) {
            Some((key, _)) => ComparisonState {
                company: key.to_string(),
                ..self.clone()
            },
            None => {
                tracing::warn!(company, "unknown company, keeping current selection");
                self.clone()
            }
        }
    }

    /// Select a chart period; unknown periods leave the state unchanged
    pub fn with_period(&self, period: &str) -> ComparisonState {
        match data::TIME_PERIODS
            .iter()
            .find(|p| p.eq_ignore_ascii_case(period.trim()))
        {
            Some(p) => ComparisonState {
                period: p.to_string(),
                ..self.clone()
            },
            None => {
                tracing::warn!(period, "unknown time period, keeping current selection");
                self.clone()
            }
        }
    }

    pub fn company_name(&self) -> &'static str {
        lookup_company(&self.company)
            .map(|(_, name)| name)
            .unwrap_or(data::COMPANIES[0].1)
    }
}

/// Find a company by key or display name
pub fn lookup_company(company: &str) -> Option<(&'static str, &'static str)> {
    let needle = company.trim();
    data::COMPANIES
        .iter()
        .find(|(key, name)| key.eq_ignore_ascii_case(needle) || *name == needle)
        .copied()
}

/// Everything the page renderers read
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub sector: SectorRiskState,
    pub comparison: ComparisonState,
    pub scale: HeatmapScale,
}

impl DashboardState {
    /// Initial state for a freshly loaded dashboard
    pub fn from_config(config: &ResolvedConfig) -> Self {
        DashboardState {
            sector: SectorRiskState::with_defaults(&config.query, config.sort),
            comparison: ComparisonState::default()
                .with_company(&config.company)
                .with_period(&config.period),
            scale: config.scale,
        }
    }
}
