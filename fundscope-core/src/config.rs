//! Configuration file support for Fundscope
//!
//! Loads dashboard defaults from JSON files.
//!
//! Search order:
//! 1. Explicit path (--config CLI flag)
//! 2. `.fundscoperc.json` in the working directory
//! 3. `fundscope.config.json` in the working directory
//!
//! All fields are optional. CLI flags take precedence over config file values.

use crate::data;
use crate::fund::SortField;
use crate::heatmap::{HeatmapScale, DEFAULT_SCALE};
use crate::state::lookup_company;
use crate::view::{SortDirection, SortDirective};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Fundscope configuration loaded from a JSON config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FundscopeConfig {
    /// Value range for heatmap coloring (default: 0 to 10)
    #[serde(default)]
    pub heatmap_scale: Option<ScaleConfig>,

    /// Search text applied to the fund table on load
    #[serde(default)]
    pub default_query: Option<String>,

    /// Initial fund table sort
    #[serde(default)]
    pub default_sort: Option<SortConfig>,

    /// Initial company comparison period (default: "6 months")
    #[serde(default)]
    pub default_period: Option<String>,

    /// Initial company for internal comparison, by key or display name
    #[serde(default)]
    pub default_company: Option<String>,
}

/// Heatmap scale bounds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScaleConfig {
    /// Value mapped to the low end of the ramp (default: 0.0)
    pub min: Option<f64>,
    /// Value mapped to the high end of the ramp (default: 10.0)
    pub max: Option<f64>,
}

/// Initial sort column and direction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SortConfig {
    /// Column name, e.g. "one_year_return" or "risk"
    pub field: String,
    /// "asc", "desc" or "none" (default: "asc")
    #[serde(default)]
    pub direction: Option<String>,
}

/// Resolved configuration with parsed values
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub scale: HeatmapScale,
    pub query: String,
    pub sort: SortDirective,
    pub period: String,
    /// Company key
    pub company: String,
    /// Path the config was loaded from (None if defaults)
    pub config_path: Option<PathBuf>,
}

impl FundscopeConfig {
    /// Validate the configuration for logical errors
    pub fn validate(&self) -> Result<()> {
        if let Some(ref s) = self.heatmap_scale {
            let min = s.min.unwrap_or(DEFAULT_SCALE.min);
            let max = s.max.unwrap_or(DEFAULT_SCALE.max);

            if !min.is_finite() {
                anyhow::bail!("heatmap_scale.min must be finite (got {})", min);
            }
            if !max.is_finite() {
                anyhow::bail!("heatmap_scale.max must be finite (got {})", max);
            }
            if min >= max {
                anyhow::bail!(
                    "heatmap_scale.min ({}) must be less than heatmap_scale.max ({})",
                    min,
                    max
                );
            }
        }

        if let Some(ref sort) = self.default_sort {
            if SortField::parse(&sort.field).is_none() {
                anyhow::bail!("default_sort.field is not a sortable column: {}", sort.field);
            }
            if let Some(ref dir) = sort.direction {
                if SortDirection::parse(dir).is_none() {
                    anyhow::bail!(
                        "default_sort.direction must be asc, desc or none (got {})",
                        dir
                    );
                }
            }
        }

        if let Some(ref period) = self.default_period {
            if !data::TIME_PERIODS
                .iter()
                .any(|p| p.eq_ignore_ascii_case(period.trim()))
            {
                anyhow::bail!(
                    "default_period must be one of {} (got {})",
                    data::TIME_PERIODS.join(", "),
                    period
                );
            }
        }

        if let Some(ref company) = self.default_company {
            if lookup_company(company).is_none() {
                anyhow::bail!("default_company is not a known company: {}", company);
            }
        }

        Ok(())
    }

    /// Resolve config into parsed form ready for use
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        self.validate()?;

        let scale = match &self.heatmap_scale {
            Some(s) => HeatmapScale {
                min: s.min.unwrap_or(DEFAULT_SCALE.min),
                max: s.max.unwrap_or(DEFAULT_SCALE.max),
            },
            None => DEFAULT_SCALE,
        };

        let sort = match &self.default_sort {
            Some(s) => SortDirective {
                field: SortField::parse(&s.field),
                direction: s
                    .direction
                    .as_deref()
                    .and_then(SortDirection::parse)
                    .unwrap_or(SortDirection::Ascending),
            },
            None => SortDirective::unsorted(),
        };

        let period = self
            .default_period
            .as_deref()
            .and_then(|p| {
                data::TIME_PERIODS
                    .iter()
                    .find(|known| known.eq_ignore_ascii_case(p.trim()))
            })
            .copied()
            .unwrap_or(data::DEFAULT_TIME_PERIOD)
            .to_string();

        let company = self
            .default_company
            .as_deref()
            .and_then(lookup_company)
            .map(|(key, _)| key)
            .unwrap_or(data::COMPANIES[0].0)
            .to_string();

        Ok(ResolvedConfig {
            scale,
            query: self.default_query.clone().unwrap_or_default(),
            sort,
            period,
            company,
            config_path: None,
        })
    }
}

impl ResolvedConfig {
    /// Build a ResolvedConfig with all defaults (no config file)
    pub fn defaults() -> Result<Self> {
        FundscopeConfig::default().resolve()
    }
}

/// Discover and load a config file from the project root
///
/// Search order:
/// 1. `.fundscoperc.json`
/// 2. `fundscope.config.json`
///
/// Returns `None` if no config file is found (use defaults).
pub fn discover_config(project_root: &Path) -> Result<Option<(FundscopeConfig, PathBuf)>> {
    for name in [".fundscoperc.json", "fundscope.config.json"] {
        let path = project_root.join(name);
        if path.exists() {
            let config = load_config_file(&path)?;
            return Ok(Some((config, path)));
        }
    }

    Ok(None)
}

/// Load config from an explicit file path
pub fn load_config_file(path: &Path) -> Result<FundscopeConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;

    let config: FundscopeConfig = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse config file: {}", path.display()))?;

    config
        .validate()
        .with_context(|| format!("invalid config in: {}", path.display()))?;

    Ok(config)
}

/// Load and resolve config for a project
///
/// If `config_path` is provided, loads from that file.
/// Otherwise, discovers config from the project root.
/// Returns default config if nothing is found.
pub fn load_and_resolve(project_root: &Path, config_path: Option<&Path>) -> Result<ResolvedConfig> {
    let (config, source_path) = if let Some(path) = config_path {
        let config = load_config_file(path)?;
        (config, Some(path.to_path_buf()))
    } else {
        match discover_config(project_root)? {
            Some((config, path)) => (config, Some(path)),
            None => (FundscopeConfig::default(), None),
        }
    };

    let mut resolved = config.resolve()?;
    resolved.config_path = source_path;
    tracing::debug!(
        config_path = ?resolved.config_path,
        scale_min = resolved.scale.min,
        scale_max = resolved.scale.max,
        "resolved configuration"
    );
    Ok(resolved)
}
