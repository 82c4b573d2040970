//! HTML report generation
//!
//! Generates self-contained HTML dashboards with embedded CSS and JavaScript.
//! Reports are interactive (search, tri-state column sort, slice hover) and
//! work offline. The initial render already reflects the dashboard state, so
//! the page reads correctly with scripting disabled.

use crate::dashboard::{series_max, ChartPoint, RiskSlice, StatsCard, Trend};
use crate::data;
use crate::fund::{FundRecord, SortField};
use crate::heatmap::Heatmap;
use crate::navigation::{is_active, sidebar, Page, APP_TITLE};
use crate::state::{ComparisonMode, DashboardState, SectorRiskState};
use crate::view::{matches_query, view_indices, SortDirection};

/// Render the full dashboard (all pages) as one HTML document
pub fn render_html_dashboard(state: &DashboardState) -> String {
    let sections: String = Page::MAIN
        .iter()
        .map(|page| render_page_section(*page, state))
        .collect();
    render_document("Dashboard", "/", &sections)
}

/// Render a single page as an HTML document
pub fn render_html_page(page: Page, state: &DashboardState) -> String {
    let route = page.route().unwrap_or("");
    render_document(page.title(), route, &render_page_section(page, state))
}

fn render_document(title: &str, current_route: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{app} - {title}</title>
    <style>{css}</style>
</head>
<body>
    <div class="layout">
        {sidebar}
        <main class="container">
            {body}
            {footer}
        </main>
    </div>
    <script>{js}</script>
</body>
</html>"#,
        app = APP_TITLE,
        title = html_escape(title),
        css = inline_css(),
        js = inline_javascript(),
        sidebar = render_sidebar(current_route),
        body = body,
        footer = render_footer(),
    )
}

fn render_page_section(page: Page, state: &DashboardState) -> String {
    let content = match page {
        Page::Overview => render_overview(),
        Page::SectorRisk => render_sector_risk(&state.sector),
        Page::RiskMetrics => render_risk_metrics(&data::risk_heatmap(state.scale)),
        Page::CompanyComparison => render_company_comparison(state),
        Page::NotFound => {
            r#"<h1>404</h1><p class="subtitle">Oops! Page not found</p><a href="/">Return to Home</a>"#
                .to_string()
        }
    };
    format!(
        r#"<section class="page" id="{anchor}">{content}</section>"#,
        anchor = page.anchor(),
        content = content,
    )
}

/// Inline CSS styles
fn inline_css() -> &'static str {
    r#"
* {
    box-sizing: border-box;
    margin: 0;
    padding: 0;
}

body {
    font-family: system-ui, -apple-system, 'Segoe UI', sans-serif;
    line-height: 1.6;
    color: #111827;
    background: #f9fafb;
}

.layout {
    display: flex;
    min-height: 100vh;
}

/* Sidebar */
.sidebar {
    width: 240px;
    background: #ffffff;
    border-right: 1px solid #e5e7eb;
    padding: 1rem;
}

.brand {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    font-weight: 700;
    font-size: 1.125rem;
    margin-bottom: 1.5rem;
}

.brand-mark {
    width: 2rem;
    height: 2rem;
    border-radius: 0.5rem;
    background: #3b82f6;
    color: #ffffff;
    display: flex;
    align-items: center;
    justify-content: center;
}

.nav-group-label {
    font-size: 0.75rem;
    font-weight: 600;
    color: #6b7280;
    text-transform: uppercase;
    margin: 1rem 0 0.25rem;
}

.nav-item {
    display: block;
    padding: 0.4rem 0.6rem;
    border-radius: 0.375rem;
    color: #374151;
    text-decoration: none;
    font-size: 0.875rem;
}

.nav-item:hover { background: #f3f4f6; }
.nav-item.active { background: #eff6ff; color: #2563eb; font-weight: 600; }

/* Container */
.container {
    flex: 1;
    max-width: 1400px;
    padding: 2rem;
}

.page {
    margin-bottom: 3rem;
}

.page h1 {
    font-size: 1.875rem;
    font-weight: 700;
}

.subtitle {
    color: #6b7280;
    margin-bottom: 1.5rem;
}

/* Cards */
.card {
    background: #ffffff;
    border: 1px solid #e5e7eb;
    border-radius: 0.5rem;
    padding: 1.5rem;
    margin-bottom: 1.5rem;
}

.card h2 {
    font-size: 1.25rem;
    font-weight: 600;
    margin-bottom: 1rem;
}

.summary {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
    gap: 1rem;
    margin-bottom: 1.5rem;
}

.summary-card {
    background: #ffffff;
    padding: 1rem;
    border-radius: 0.5rem;
    border: 1px solid #e5e7eb;
}

.summary-card.variant-success { background: #f0fdf4; border-color: #bbf7d0; }
.summary-card.variant-warning { background: #fffbeb; border-color: #fde68a; }
.summary-card.variant-danger  { background: #fef2f2; border-color: #fecaca; }
.summary-card.variant-info    { background: #eff6ff; border-color: #bfdbfe; }

.summary-card h3 {
    font-size: 0.875rem;
    font-weight: 600;
    color: #6b7280;
    margin-bottom: 0.5rem;
}

.summary-card .value {
    font-size: 1.5rem;
    font-weight: 700;
}

.trend-up { color: #16a34a; font-size: 0.875rem; font-weight: 600; }
.trend-down { color: #dc2626; font-size: 0.875rem; font-weight: 600; }

/* Buttons */
.button-row {
    display: flex;
    gap: 0.5rem;
    flex-wrap: wrap;
    margin-bottom: 1rem;
}

.btn {
    padding: 0.4rem 0.9rem;
    border: 1px solid #d1d5db;
    border-radius: 0.5rem;
    background: #ffffff;
    font-size: 0.875rem;
}

.btn.active {
    background: #3b82f6;
    border-color: #3b82f6;
    color: #ffffff;
}

/* Table */
table {
    width: 100%;
    border-collapse: collapse;
    background: #ffffff;
}

th {
    padding: 0.75rem;
    text-align: left;
    font-weight: 600;
    font-size: 0.875rem;
    color: #374151;
    border-bottom: 2px solid #e5e7eb;
}

th.sortable {
    cursor: pointer;
    user-select: none;
}

th.sortable.asc::after { content: ' \25B2'; }
th.sortable.desc::after { content: ' \25BC'; }

td {
    padding: 0.75rem;
    border-bottom: 1px solid #e5e7eb;
    font-size: 0.875rem;
}

td.num, th.num { text-align: right; }
td.return { color: #16a34a; font-weight: 500; }

tbody tr:hover {
    background: #f3f4f6;
}

/* Risk badges */
.risk-badge {
    padding: 0.125rem 0.5rem;
    border-radius: 9999px;
    font-size: 0.75rem;
    font-weight: 500;
    border: 1px solid;
}

.risk-very-low  { color: #22c55e; background: #22c55e33; border-color: #22c55e4d; }
.risk-low       { color: #14b8a6; background: #14b8a633; border-color: #14b8a64d; }
.risk-medium    { color: #3b82f6; background: #3b82f633; border-color: #3b82f64d; }
.risk-high      { color: #f97316; background: #f9731633; border-color: #f973164d; }
.risk-very-high { color: #ef4444; background: #ef444433; border-color: #ef44444d; }

/* Filters */
.filters {
    display: flex;
    gap: 1rem;
    margin-bottom: 1rem;
}

.filters input {
    width: 100%;
    max-width: 28rem;
    padding: 0.5rem;
    border: 1px solid #d1d5db;
    border-radius: 0.375rem;
    font-size: 0.875rem;
}

.filters input:focus {
    outline: none;
    border-color: #3b82f6;
}

/* Risk distribution */
.distribution {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 2rem;
    align-items: center;
}

.donut {
    width: 240px;
    height: 240px;
    border-radius: 50%;
    margin: 0 auto;
    position: relative;
}

.donut::after {
    content: '';
    position: absolute;
    inset: 40px;
    background: #ffffff;
    border-radius: 50%;
}

.slice-box {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 0.9rem 1rem;
    border-radius: 0.5rem;
    border: 1px solid #e5e7eb;
    margin-bottom: 0.75rem;
    transition: transform 0.15s, opacity 0.15s;
}

.slice-box.highlighted { transform: scale(1.05); box-shadow: 0 4px 12px #0000001a; }
.slice-dot { width: 0.75rem; height: 0.75rem; border-radius: 50%; display: inline-block; margin-right: 0.75rem; }
.slice-share { font-size: 1.25rem; font-weight: 700; }

/* Heatmap */
.heatmap-wrap {
    display: flex;
    gap: 1rem;
}

.heatmap-cell {
    border-radius: 0.25rem;
    padding: 0.5rem 0.75rem;
    text-align: center;
    color: #ffffff;
    font-weight: 500;
    cursor: default;
}

.scale {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 0.5rem;
    font-size: 0.75rem;
    color: #6b7280;
}

.scale-bar {
    display: flex;
    gap: 0.5rem;
}

.scale-gradient {
    width: 2rem;
    height: 400px;
    border-radius: 0.375rem;
    background: linear-gradient(to top, #ef4444, #eab308, #22c55e);
}

.scale-labels {
    display: flex;
    flex-direction: column;
    justify-content: space-between;
    text-align: right;
}

/* Charts */
.bar-row {
    display: grid;
    grid-template-columns: 160px 1fr 80px;
    gap: 0.75rem;
    align-items: center;
    margin-bottom: 0.5rem;
    font-size: 0.875rem;
}

.bar {
    height: 1.25rem;
    background: #3b82f6;
    border-radius: 0 0.5rem 0.5rem 0;
}

.column-chart {
    display: flex;
    align-items: flex-end;
    gap: 1rem;
    height: 240px;
    border-bottom: 1px solid #e5e7eb;
}

.column {
    flex: 1;
    background: linear-gradient(#3b82f6cc, #3b82f61a);
    border-radius: 0.25rem 0.25rem 0 0;
}

.column-labels {
    display: flex;
    gap: 1rem;
    font-size: 0.75rem;
    color: #6b7280;
}

.column-labels span { flex: 1; text-align: center; }

.activity-item {
    display: flex;
    gap: 0.75rem;
    padding-bottom: 0.75rem;
    margin-bottom: 0.75rem;
    border-bottom: 1px solid #e5e7eb;
}

.activity-dot { width: 0.5rem; height: 0.5rem; border-radius: 50%; background: #3b82f6; margin-top: 0.5rem; }
.activity-age { font-size: 0.75rem; color: #6b7280; }

.two-col {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1.5rem;
}

/* Footer */
footer {
    margin-top: 3rem;
    padding-top: 1rem;
    border-top: 1px solid #e5e7eb;
    text-align: center;
    color: #6b7280;
    font-size: 0.875rem;
}

/* Mobile */
@media (max-width: 768px) {
    .layout { flex-direction: column; }
    .sidebar { width: 100%; }
    .container { padding: 1rem; }
    .distribution, .two-col { grid-template-columns: 1fr; }
    th, td { padding: 0.5rem; }
}
"#
}

fn inline_javascript() -> &'static str {
    r#"
(function() {
    // Header clicks cycle: none -> asc -> desc -> none; another column starts at asc
    function nextSort(state, column) {
        if (state.column === column) {
            if (state.direction === 'asc') return { column: column, direction: 'desc' };
            if (state.direction === 'desc') return { column: null, direction: null };
        }
        return { column: column, direction: 'asc' };
    }

    function compareRows(a, b, column, numeric) {
        const aVal = a.dataset[column] || '';
        const bVal = b.dataset[column] || '';
        if (numeric) return parseFloat(aVal) - parseFloat(bVal);
        return aVal.localeCompare(bVal);
    }

    function applyView(table) {
        const tbody = table.querySelector('tbody');
        const rows = Array.from(tbody.querySelectorAll('tr'));
        const state = table.__fsSort;
        const query = (table.__fsQuery || '').toLowerCase();

        // Array.prototype.sort is stable; original order is the tie-breaker
        rows.sort((a, b) => Number(a.dataset.index) - Number(b.dataset.index));
        if (state.column && state.direction) {
            const th = table.querySelector(`th[data-column="${state.column}"]`);
            const numeric = th && th.dataset.type === 'number';
            rows.sort((a, b) => {
                const c = compareRows(a, b, state.column, numeric);
                return state.direction === 'asc' ? c : -c;
            });
        }
        rows.forEach(row => {
            const match = !query ||
                row.dataset.name.toLowerCase().includes(query) ||
                row.dataset.company.toLowerCase().includes(query) ||
                row.dataset.category.toLowerCase().includes(query);
            row.style.display = match ? '' : 'none';
            tbody.appendChild(row);
        });

        table.querySelectorAll('th.sortable').forEach(th => {
            th.classList.remove('asc', 'desc');
            if (th.dataset.column === state.column && state.direction) th.classList.add(state.direction);
        });

        const empty = table.parentElement.querySelector('.empty-view');
        if (empty) empty.style.display = rows.some(r => r.style.display !== 'none') ? 'none' : '';
    }

    function initFundTable(table) {
        table.__fsSort = {
            column: table.dataset.sortColumn || null,
            direction: table.dataset.sortDirection || null,
        };
        const search = document.getElementById(table.dataset.search);
        table.__fsQuery = search ? search.value : '';
        if (search) {
            search.addEventListener('input', function() {
                table.__fsQuery = this.value;
                applyView(table);
            });
        }
        table.querySelectorAll('th.sortable').forEach(th => {
            th.addEventListener('click', function() {
                table.__fsSort = nextSort(table.__fsSort, this.dataset.column);
                applyView(table);
            });
        });
    }

    function setActiveSlice(container, index) {
        container.querySelectorAll('[data-slice]').forEach(el => {
            const i = Number(el.dataset.slice);
            el.style.opacity = (index === null || index === i) ? '1' : '0.5';
            el.classList.toggle('highlighted', index === i);
        });
    }

    function initDistribution(container) {
        container.querySelectorAll('.slice-box').forEach(box => {
            box.addEventListener('mouseenter', () => setActiveSlice(container, Number(box.dataset.slice)));
            box.addEventListener('mouseleave', () => setActiveSlice(container, null));
        });
    }

    document.addEventListener('DOMContentLoaded', function() {
        document.querySelectorAll('table.fund-table').forEach(initFundTable);
        document.querySelectorAll('.distribution').forEach(initDistribution);
    });
})();
"#
}

fn render_sidebar(current_route: &str) -> String {
    let groups: String = sidebar()
        .iter()
        .map(|group| {
            let items: String = group
                .items
                .iter()
                .map(|item| {
                    format!(
                        r#"<a class="nav-item{active}" href="{href}">{title}</a>"#,
                        active = if is_active(item, current_route) {
                            " active"
                        } else {
                            ""
                        },
                        href = nav_href(item.route),
                        title = html_escape(item.title),
                    )
                })
                .collect();
            format!(
                r#"<div class="nav-group-label">{label}</div>{items}"#,
                label = html_escape(group.label),
                items = items,
            )
        })
        .collect();

    format!(
        r#"<nav class="sidebar">
    <div class="brand"><span class="brand-mark">{initial}</span>{app}</div>
    {groups}
</nav>"#,
        initial = APP_TITLE.chars().next().unwrap_or('F'),
        app = APP_TITLE,
        groups = groups,
    )
}

/// In-document anchor for a route
fn nav_href(route: &str) -> String {
    format!("#{}", Page::from_route(route).anchor())
}

fn render_cards(cards: &[StatsCard]) -> String {
    let cards: String = cards
        .iter()
        .map(|card| {
            let trend = match (&card.trend, card.trend_label()) {
                (Some((t, _)), Some(label)) => format!(
                    r#" <span class="trend-{dir}">{label}</span>"#,
                    dir = match t {
                        Trend::Up => "up",
                        Trend::Down => "down",
                    },
                    label = html_escape(&label),
                ),
                _ => String::new(),
            };
            format!(
                r#"
    <div class="summary-card variant-{variant}">
        <h3>{title}</h3>
        <div class="value">{value}{trend}</div>
    </div>"#,
                variant = card.variant.as_str(),
                title = html_escape(&card.title),
                value = html_escape(&card.value),
                trend = trend,
            )
        })
        .collect();
    format!(r#"<div class="summary">{}</div>"#, cards)
}

fn render_buttons(labels: &[&str], active: Option<&str>) -> String {
    let buttons: String = labels
        .iter()
        .map(|label| {
            format!(
                r#"<button class="btn{active}">{label}</button>"#,
                active = if Some(*label) == active { " active" } else { "" },
                label = html_escape(label),
            )
        })
        .collect();
    format!(r#"<div class="button-row">{}</div>"#, buttons)
}

fn render_horizontal_bars(points: &[ChartPoint], unit: &str) -> String {
    let max = series_max(points);
    points
        .iter()
        .map(|p| {
            let pct = if max > 0.0 { p.value / max * 100.0 } else { 0.0 };
            format!(
                r#"<div class="bar-row"><span>{label}</span><div class="bar" style="width: {pct:.1}%"></div><span>{value}{unit}</span></div>"#,
                label = html_escape(&p.label),
                pct = pct,
                value = p.value,
                unit = unit,
            )
        })
        .collect()
}

fn render_column_chart(points: &[ChartPoint]) -> String {
    let max = series_max(points);
    let columns: String = points
        .iter()
        .map(|p| {
            let pct = if max > 0.0 { p.value / max * 100.0 } else { 0.0 };
            format!(
                r#"<div class="column" style="height: {pct:.1}%" title="{label}: {value}"></div>"#,
                pct = pct,
                label = html_escape(&p.label),
                value = p.value,
            )
        })
        .collect();
    let labels: String = points
        .iter()
        .map(|p| format!("<span>{}</span>", html_escape(&p.label)))
        .collect();
    format!(
        r#"<div class="column-chart">{columns}</div><div class="column-labels">{labels}</div>"#,
        columns = columns,
        labels = labels,
    )
}

fn render_overview() -> String {
    let actions: String = data::quick_actions()
        .iter()
        .map(|a| format!(r#"<button class="btn" style="display:block;width:100%;text-align:left;margin-bottom:0.5rem">{}</button>"#, html_escape(a)))
        .collect();
    let activity: String = data::recent_activity()
        .iter()
        .map(|(title, age)| {
            format!(
                r#"<div class="activity-item"><div class="activity-dot"></div><div><div>{title}</div><div class="activity-age">{age}</div></div></div>"#,
                title = html_escape(title),
                age = html_escape(age),
            )
        })
        .collect();

    format!(
        r#"<h1>Dashboard Overview</h1>
<p class="subtitle">Welcome back! Here's what's happening with your investments.</p>
{cards}
<div class="card">
    <h2>Portfolio Performance</h2>
    {ranges}
    {chart}
</div>
<div class="two-col">
    <div class="card"><h2>Quick Actions</h2>{actions}</div>
    <div class="card"><h2>Recent Activity</h2>{activity}</div>
</div>"#,
        cards = render_cards(&data::overview_cards()),
        ranges = render_buttons(data::OVERVIEW_RANGES, Some("6M")),
        chart = render_column_chart(&data::portfolio_performance()),
        actions = actions,
        activity = activity,
    )
}

/// `conic-gradient` stops for the distribution donut
fn donut_gradient(slices: &[RiskSlice]) -> String {
    let total: f64 = slices.iter().map(|s| s.share).sum();
    if total <= 0.0 {
        return "#e5e7eb".to_string();
    }
    let mut start = 0.0;
    let stops: Vec<String> = slices
        .iter()
        .map(|s| {
            let end = start + s.share / total * 100.0;
            let stop = format!("{} {:.2}% {:.2}%", s.color, start, end);
            start = end;
            stop
        })
        .collect();
    format!("conic-gradient({})", stops.join(", "))
}

fn render_distribution(state: &SectorRiskState) -> String {
    let slices = data::risk_distribution();
    let boxes: String = slices
        .iter()
        .enumerate()
        .map(|(index, slice)| {
            format!(
                r#"<div class="slice-box risk-{slug}{highlight}" data-slice="{index}" style="opacity: {opacity}"><span><span class="slice-dot" style="background: {color}"></span>{name}</span><span class="slice-share">%{share}</span></div>"#,
                slug = slice.level.slug(),
                highlight = if state.is_highlighted(index) {
                    " highlighted"
                } else {
                    ""
                },
                index = index,
                opacity = state.slice_opacity(index),
                color = html_escape(&slice.color),
                name = html_escape(slice.level.as_str()),
                share = slice.share,
            )
        })
        .collect();

    format!(
        r#"<div class="card">
    <h2>Sector Funds Risk Analysis</h2>
    <div class="distribution">
        <div class="donut" style="background: {gradient}"></div>
        <div>{boxes}</div>
    </div>
</div>"#,
        gradient = donut_gradient(&slices),
        boxes = boxes,
    )
}

fn render_fund_row(index: usize, fund: &FundRecord, visible: bool) -> String {
    format!(
        r#"<tr data-index="{index}" data-name="{name}" data-company="{company}" data-category="{category}" data-one_year_return="{one}" data-three_year_return="{three}" data-risk_level="{risk}"{hidden}>
    <td><strong>{name}</strong></td>
    <td>{company}</td>
    <td>{category}</td>
    <td class="num return">{one}%</td>
    <td class="num return">{three}%</td>
    <td><span class="risk-badge risk-{slug}">{risk}</span></td>
</tr>"#,
        index = index,
        name = html_escape(&fund.name),
        company = html_escape(&fund.company),
        category = html_escape(&fund.category),
        one = fund.one_year_return,
        three = fund.three_year_return,
        risk = html_escape(fund.risk_level.as_str()),
        slug = fund.risk_level.slug(),
        hidden = if visible {
            ""
        } else {
            r#" style="display: none""#
        },
    )
}

/// Fund table with search box; rows are pre-sorted for the current state and
/// rows outside the current query are present but hidden.
fn render_fund_table(state: &SectorRiskState, funds: &[FundRecord]) -> String {
    let directive = state.directive();

    // Sort every record so hidden rows are already in place when the query changes
    let rows: String = view_indices(funds, "", &directive)
        .into_iter()
        .map(|index| {
            let fund = &funds[index];
            render_fund_row(index, fund, matches_query(fund, &state.query))
        })
        .collect();
    let any_visible = funds.iter().any(|f| matches_query(f, &state.query));

    let headers: String = SortField::ALL
        .iter()
        .map(|field| {
            let class = match (directive.field, directive.direction) {
                (Some(f), SortDirection::Ascending) if f == *field => "sortable asc",
                (Some(f), SortDirection::Descending) if f == *field => "sortable desc",
                _ => "sortable",
            };
            format!(
                r#"<th class="{class}{num}" data-column="{column}" data-type="{kind}">{header}</th>"#,
                class = class,
                num = if field.is_numeric() { " num" } else { "" },
                column = field.as_str(),
                kind = if field.is_numeric() { "number" } else { "text" },
                header = html_escape(field.header()),
            )
        })
        .collect();

    format!(
        r#"<div class="card">
    <h2>Top Performing Funds in the Sector</h2>
    <div class="filters">
        <input type="search" id="fund-search" placeholder="Search fund name, company, category..." value="{query}">
    </div>
    <table class="fund-table" id="fund-table" data-search="fund-search" data-sort-column="{sort_column}" data-sort-direction="{sort_direction}">
        <thead><tr>{headers}</tr></thead>
        <tbody>
{rows}
        </tbody>
    </table>
    <p class="empty-view subtitle"{empty_hidden}>No funds match the search.</p>
</div>"#,
        query = html_escape(&state.query),
        sort_column = directive.field.map(|f| f.as_str()).unwrap_or(""),
        sort_direction = match directive.direction {
            SortDirection::None => "",
            other => other.as_str(),
        },
        headers = headers,
        rows = rows,
        empty_hidden = if any_visible {
            r#" style="display: none""#
        } else {
            ""
        },
    )
}

fn render_sector_risk(state: &SectorRiskState) -> String {
    format!(
        r#"<h1>Sector Risk Analysis</h1>
<p class="subtitle">Analyze risk distribution across sectors</p>
{distribution}
{table}"#,
        distribution = render_distribution(state),
        table = render_fund_table(state, &data::top_funds()),
    )
}

/// Heatmap table plus its color scale legend
pub fn render_heatmap(heatmap: &Heatmap) -> String {
    let headers: String = heatmap
        .columns
        .iter()
        .map(|c| format!(r#"<th class="num">{}</th>"#, html_escape(c)))
        .collect();
    let rows: String = heatmap
        .rows
        .iter()
        .map(|row| {
            let cells: String = heatmap
                .row_cells(row)
                .iter()
                .map(|cell| {
                    format!(
                        r#"<td><div class="heatmap-cell" style="background-color: {color}" title="{fund}&#10;{column}: {value:.2}">{value:.2}</div></td>"#,
                        color = cell.color.css(),
                        fund = html_escape(&cell.fund_name),
                        column = html_escape(&cell.column_label),
                        value = cell.value,
                    )
                })
                .collect();
            format!(
                "<tr><td><strong>{}</strong></td>{}</tr>\n",
                html_escape(&row.fund),
                cells
            )
        })
        .collect();
    let [high, mid, low] = heatmap.scale.legend();

    format!(
        r#"<div class="heatmap-wrap">
    <div style="flex: 1; overflow-x: auto">
        <table class="heatmap">
            <thead><tr><th>Fund Name</th>{headers}</tr></thead>
            <tbody>
{rows}
            </tbody>
        </table>
    </div>
    <div class="scale">
        <span>Scale</span>
        <div class="scale-bar">
            <div class="scale-labels"><span>{high}</span><span>{mid}</span><span>{low}</span></div>
            <div class="scale-gradient"></div>
        </div>
        <span>High</span>
        <span>Low</span>
    </div>
</div>"#,
        headers = headers,
        rows = rows,
        high = high,
        mid = mid,
        low = low,
    )
}

fn render_risk_metrics(heatmap: &Heatmap) -> String {
    format!(
        r#"<h1>Investment Fund Comparative Risk Analysis</h1>
<p class="subtitle">Compare risk metrics across investment funds</p>
{tabs}
<div class="card">
    <h2>Risk Metrics Comparison</h2>
    {heatmap}
</div>"#,
        tabs = render_buttons(
            &[
                "Risk Metrics",
                "Correlation Analysis",
                "Performance Attribution"
            ],
            Some("Risk Metrics"),
        ),
        heatmap = render_heatmap(heatmap),
    )
}

fn render_company_comparison(state: &DashboardState) -> String {
    let comparison = &state.comparison;
    let modes = [ComparisonMode::Sector, ComparisonMode::Internal];
    let mode_labels: Vec<&str> = modes.iter().map(|m| m.label()).collect();

    let options: String = data::COMPANIES
        .iter()
        .map(|(key, name)| {
            format!(
                r#"<option value="{key}"{selected}>{name}</option>"#,
                key = html_escape(key),
                selected = if *key == comparison.company {
                    " selected"
                } else {
                    ""
                },
                name = html_escape(name),
            )
        })
        .collect();

    let rows: String = data::company_comparison()
        .iter()
        .map(|row| {
            format!(
                r#"<tr><td><strong>{company}</strong></td><td class="num">{count}</td><td class="num">{size}</td><td class="num">{ret}</td><td class="num">{fee}</td><td class="num">{vol}</td></tr>"#,
                company = html_escape(&row.company),
                count = row.fund_count,
                size = html_escape(&row.total_size),
                ret = row.avg_return,
                fee = row.avg_fee,
                vol = row.avg_volatility,
            )
        })
        .collect();

    format!(
        r#"<h1>Company Internal Comparison</h1>
{modes}
<p class="subtitle">Company Selection: Analyze the funds of a specific portfolio management company in detail.</p>
<div class="card">
    <h2>Company to be Analyzed</h2>
    <select>{options}</select>
</div>
<div class="card">
    <h2>Company Analysis</h2>
    {cards}
</div>
<div class="card">
    <h2>Company-Based Comparison</h2>
    <table>
        <thead><tr><th>Company</th><th class="num">Fund Count</th><th class="num">Total Size (TL)</th><th class="num">Average 1 Year Return (%)</th><th class="num">Average Fee (%)</th><th class="num">Average Volatility (%)</th></tr></thead>
        <tbody>{rows}</tbody>
    </table>
</div>
<div class="card">
    <h2>Company Internal Performance Chart - Top 5 Funds</h2>
    {periods}
    {bars}
</div>"#,
        modes = render_buttons(&mode_labels, Some(comparison.mode.label())),
        options = options,
        cards = render_cards(&data::company_cards()),
        rows = rows,
        periods = render_buttons(data::TIME_PERIODS, Some(comparison.period.as_str())),
        bars = render_horizontal_bars(&data::company_top_funds(), "%"),
    )
}

/// Render footer
fn render_footer() -> String {
    format!(
        r#"<footer>
    <p>Generated by Fundscope for {}</p>
</footer>"#,
        APP_TITLE
    )
}

/// Escape HTML special characters
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
