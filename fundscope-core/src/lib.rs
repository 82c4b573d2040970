//! Fundscope core library - fund table views, risk heatmaps and dashboard rendering

#![deny(warnings)]

// Global invariants enforced in this crate:
// - Views are derived, never stored: records are not mutated by filtering or sorting
// - Sorting is stable; equal keys keep their input order
// - State transitions replace the whole snapshot
// - Color mapping is total: every input yields a color
// - Identical state yields byte-for-byte identical output

pub mod config;
pub mod dashboard;
pub mod data;
pub mod fund;
pub mod heatmap;
pub mod html;
pub mod navigation;
pub mod report;
pub mod state;
pub mod view;

pub use config::ResolvedConfig;
pub use fund::{FundRecord, RiskLevel, SortField};
pub use heatmap::{color_for, Heatmap, HeatmapScale, Rgb};
pub use navigation::Page;
pub use report::{render_funds_json, render_funds_text, render_page_text};
pub use state::{DashboardState, SectorRiskAction, SectorRiskState};
pub use view::{compute_view, SortDirection, SortDirective, SortState};
