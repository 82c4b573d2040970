//! Fundscope CLI - investment fund dashboard in the terminal and as HTML

#![deny(warnings)]

// Global invariants enforced:
// - Deterministic output ordering
// - Identical input yields byte-for-byte identical output

use anyhow::Context;
use clap::{Parser, Subcommand};
use fundscope_core::config::{self, ResolvedConfig};
use fundscope_core::data;
use fundscope_core::heatmap::HeatmapScale;
use fundscope_core::html::{render_html_dashboard, render_html_page};
use fundscope_core::report::{render_heatmap_json, render_heatmap_text, render_sidebar_text};
use fundscope_core::state::{lookup_company, ComparisonMode};
use fundscope_core::{
    render_funds_json, render_funds_text, render_page_text, DashboardState, Page,
    SectorRiskAction, SortField, SortState,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fundscope")]
#[command(about = "Investment fund dashboard: sortable fund tables, risk heatmaps and HTML reports")]
#[command(version = env!("FUNDSCOPE_VERSION"))]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (default: auto-discover)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the top funds table, filtered and sorted
    Funds {
        /// Search text matched against fund name, company and category
        #[arg(long)]
        query: Option<String>,

        /// Column header selection; repeat to click the same header again
        /// (asc, desc, then back to unsorted)
        #[arg(long)]
        sort: Vec<String>,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,

        /// Write output to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Show the risk metrics heatmap
    Heatmap {
        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,

        /// Value mapped to the low end of the color ramp (overrides config file)
        #[arg(long)]
        min: Option<f64>,

        /// Value mapped to the high end of the color ramp (overrides config file)
        #[arg(long)]
        max: Option<f64>,

        /// Write output to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Render a single dashboard page by route (e.g. /sector-risk)
    Page {
        /// Route to render
        route: String,

        /// Output format (text or html)
        #[arg(long, default_value = "text")]
        format: OutputFormat,

        /// Write output to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Write the full HTML dashboard
    Report {
        /// Output file path (default: .fundscope/dashboard.html)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Show the company comparison page
    Compare {
        /// Comparison mode
        #[arg(long)]
        mode: Option<ModeArg>,

        /// Chart period, e.g. "6 months" or "1 Year"
        #[arg(long)]
        period: Option<String>,

        /// Company key or display name
        #[arg(long)]
        company: Option<String>,

        /// Output format (text or html)
        #[arg(long, default_value = "text")]
        format: OutputFormat,

        /// Write output to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the sidebar navigation
    Nav {
        /// Route to mark as current
        #[arg(default_value = "/")]
        route: String,
    },
    /// Validate a configuration file
    #[command(name = "config")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Validate a config file
    Validate {
        /// Path to config file (default: auto-discover from current directory)
        #[arg(long)]
        path: Option<PathBuf>,
    },
    /// Show the resolved configuration (merged defaults + config file)
    Show {
        /// Path to config file (default: auto-discover from current directory)
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, PartialEq, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Html,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum ModeArg {
    Sector,
    Internal,
}

impl From<ModeArg> for ComparisonMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Sector => ComparisonMode::Sector,
            ModeArg::Internal => ComparisonMode::Internal,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Funds {
            query,
            sort,
            format,
            output,
        } => {
            let resolved = load_config(cli.config.as_deref())?;
            let mut state = DashboardState::from_config(&resolved);

            // CLI flags override config file values
            if let Some(query) = query {
                state.sector = state.sector.apply(SectorRiskAction::SetQuery(query));
            }
            if !sort.is_empty() {
                let clicks = parse_sort_clicks(&sort)?;
                state.sector.sort = SortState::Unsorted;
                state.sector = state.sector.apply_all(clicks);
            }

            let view = state.sector.view(&data::top_funds());
            tracing::info!(
                query = %state.sector.query,
                rows = view.len(),
                "computed fund view"
            );

            let rendered = match format {
                OutputFormat::Text => render_funds_text(&view),
                OutputFormat::Json => format!("{}\n", render_funds_json(&view)),
                OutputFormat::Html => render_html_page(Page::SectorRisk, &state),
            };
            emit(output.as_deref(), &rendered)?;
        }
        Commands::Heatmap {
            format,
            min,
            max,
            output,
        } => {
            let resolved = load_config(cli.config.as_deref())?;
            let mut state = DashboardState::from_config(&resolved);
            state.scale = override_scale(state.scale, min, max)?;

            let heatmap = data::risk_heatmap(state.scale);
            let rendered = match format {
                OutputFormat::Text => render_heatmap_text(&heatmap),
                OutputFormat::Json => format!("{}\n", render_heatmap_json(&heatmap.cells())),
                OutputFormat::Html => render_html_page(Page::RiskMetrics, &state),
            };
            emit(output.as_deref(), &rendered)?;
        }
        Commands::Page {
            route,
            format,
            output,
        } => {
            let resolved = load_config(cli.config.as_deref())?;
            let state = DashboardState::from_config(&resolved);

            let page = Page::from_route(&route);
            if page == Page::NotFound {
                tracing::warn!(route = %route, "no page for route");
            }

            let rendered = match format {
                OutputFormat::Text => render_page_text(page, &state),
                OutputFormat::Html => render_html_page(page, &state),
                OutputFormat::Json => {
                    anyhow::bail!("JSON format is only available for the funds and heatmap commands")
                }
            };
            emit(output.as_deref(), &rendered)?;
        }
        Commands::Report { output } => {
            let resolved = load_config(cli.config.as_deref())?;
            let state = DashboardState::from_config(&resolved);

            let output_path = output.unwrap_or_else(|| PathBuf::from(".fundscope/dashboard.html"));
            write_html_report(&output_path, &render_html_dashboard(&state))?;
            eprintln!("HTML report written to: {}", output_path.display());
        }
        Commands::Compare {
            mode,
            period,
            company,
            format,
            output,
        } => {
            let resolved = load_config(cli.config.as_deref())?;
            let mut state = DashboardState::from_config(&resolved);

            if let Some(mode) = mode {
                state.comparison = state.comparison.with_mode(mode.into());
            }
            if let Some(company) = company {
                if lookup_company(&company).is_none() {
                    anyhow::bail!(
                        "unknown company '{}' (expected one of: {})",
                        company,
                        data::COMPANIES
                            .iter()
                            .map(|(key, _)| *key)
                            .collect::<Vec<_>>()
                            .join(", ")
                    );
                }
                state.comparison = state.comparison.with_company(&company);
            }
            if let Some(period) = period {
                if !data::TIME_PERIODS
                    .iter()
                    .any(|p| p.eq_ignore_ascii_case(period.trim()))
                {
                    anyhow::bail!(
                        "unknown period '{}' (expected one of: {})",
                        period,
                        data::TIME_PERIODS.join(", ")
                    );
                }
                state.comparison = state.comparison.with_period(&period);
            }

            emit(output.as_deref(), &render_comparison(&state, format)?)?;
        }
        Commands::Nav { route } => {
            print!("{}", render_sidebar_text(&route));
        }
        Commands::Config { action } => match action {
            ConfigAction::Validate { path } => {
                let project_root = std::env::current_dir()?;
                let resolved = config::load_and_resolve(&project_root, path.as_deref());

                match resolved {
                    Ok(config) => {
                        if let Some(ref p) = config.config_path {
                            println!("Config valid: {}", p.display());
                        } else {
                            println!("No config file found. Using defaults.");
                        }
                    }
                    Err(e) => {
                        eprintln!("Config validation failed: {:#}", e);
                        std::process::exit(1);
                    }
                }
            }
            ConfigAction::Show { path } => {
                let project_root = std::env::current_dir()?;
                let resolved = config::load_and_resolve(&project_root, path.as_deref())
                    .context("failed to load configuration")?;
                print_config(&resolved);
            }
        },
    }

    Ok(())
}

/// Install the stderr log subscriber; `RUST_LOG` wins over `--verbose`
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn load_config(config_path: Option<&Path>) -> anyhow::Result<ResolvedConfig> {
    let project_root = std::env::current_dir()?;
    let resolved = config::load_and_resolve(&project_root, config_path)
        .context("failed to load configuration")?;

    if let Some(config_path) = &resolved.config_path {
        eprintln!("Using config: {}", config_path.display());
    }
    Ok(resolved)
}

fn parse_sort_clicks(fields: &[String]) -> anyhow::Result<Vec<SectorRiskAction>> {
    fields
        .iter()
        .map(|name| {
            SortField::parse(name)
                .map(SectorRiskAction::SelectSortField)
                .ok_or_else(|| {
                    anyhow::anyhow!(
                        "unknown sort field '{}' (expected one of: {})",
                        name,
                        SortField::ALL
                            .iter()
                            .map(|f| f.as_str())
                            .collect::<Vec<_>>()
                            .join(", ")
                    )
                })
        })
        .collect()
}

fn override_scale(
    scale: HeatmapScale,
    min: Option<f64>,
    max: Option<f64>,
) -> anyhow::Result<HeatmapScale> {
    let scale = HeatmapScale {
        min: min.unwrap_or(scale.min),
        max: max.unwrap_or(scale.max),
    };
    if !scale.min.is_finite() || !scale.max.is_finite() {
        anyhow::bail!("heatmap scale bounds must be finite numbers");
    }
    if scale.min >= scale.max {
        anyhow::bail!(
            "heatmap scale min ({}) must be less than max ({})",
            scale.min,
            scale.max
        );
    }
    Ok(scale)
}

/// Print to stdout, or write to `output` when given
fn emit(output: Option<&Path>, rendered: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            write_html_report(path, rendered)?;
            eprintln!("Output written to: {}", path.display());
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

fn render_comparison(state: &DashboardState, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_page_text(Page::CompanyComparison, state)),
        OutputFormat::Html => Ok(render_html_page(Page::CompanyComparison, state)),
        OutputFormat::Json => {
            anyhow::bail!("JSON format is only available for the funds and heatmap commands")
        }
    }
}

fn print_config(resolved: &ResolvedConfig) {
    println!("Configuration:");
    if let Some(ref p) = resolved.config_path {
        println!("  Source: {}", p.display());
    } else {
        println!("  Source: defaults (no config file found)");
    }
    println!();
    println!("Heatmap scale:");
    println!("  min: {}", resolved.scale.min);
    println!("  max: {}", resolved.scale.max);
    println!();
    println!("Fund table:");
    println!(
        "  query: {}",
        if resolved.query.is_empty() {
            "none"
        } else {
            resolved.query.as_str()
        }
    );
    println!(
        "  sort: {}",
        match resolved.sort.field {
            Some(field) => format!("{} ({})", field, resolved.sort.direction.as_str()),
            None => "none".to_string(),
        }
    );
    println!();
    println!("Company comparison:");
    println!("  company: {}", resolved.company);
    println!("  period: {}", resolved.period);
}

/// Write report to file with atomic write pattern
fn write_html_report(path: &Path, content: &str) -> anyhow::Result<()> {
    use std::fs;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    // Temp + rename
    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = PathBuf::from(temp_name);
    fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write temporary file: {}", temp_path.display()))?;
    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temporary file to: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sort_clicks() {
        let clicks = parse_sort_clicks(&["1y".to_string(), "risk".to_string()]).unwrap();
        assert_eq!(
            clicks,
            vec![
                SectorRiskAction::SelectSortField(SortField::OneYearReturn),
                SectorRiskAction::SelectSortField(SortField::RiskLevel),
            ]
        );
        assert!(parse_sort_clicks(&["volume".to_string()]).is_err());
    }

    #[test]
    fn test_override_scale() {
        let base = HeatmapScale::default();
        let scale = override_scale(base, Some(-5.0), None).unwrap();
        assert_eq!(scale.min, -5.0);
        assert_eq!(scale.max, base.max);
        assert!(override_scale(base, Some(10.0), Some(10.0)).is_err());
        assert!(override_scale(base, Some(f64::NAN), None).is_err());
    }

    #[test]
    fn test_comparison_output_goes_to_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("compare.html");
        let mut state = DashboardState::default();
        state.comparison = state.comparison.with_company("deniz");

        let rendered = render_comparison(&state, OutputFormat::Html).unwrap();
        emit(Some(&path), &rendered).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("<!DOCTYPE html>"));
        assert!(written.contains(r#"<option value="deniz" selected>"#));
        assert!(render_comparison(&state, OutputFormat::Json).is_err());
    }

    #[test]
    fn test_write_report_creates_parent_dirs() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("nested").join("dashboard.html");
        write_html_report(&path, "<html></html>").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<html></html>");
    }
}
