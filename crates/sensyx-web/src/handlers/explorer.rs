//! Explorer page — searchable, filterable snapshot table with facet
//! selectors, biomarker highlight toggles, and reference side panels.

use axum::{
    extract::{Query, State},
    response::Html,
};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Deserialize;
use tracing::debug;

use sensyx_common::{DrugSensitivityRecord, FilterCriteria};
use sensyx_data::{filter, Facets};

use crate::state::SharedState;

/// Navigation HTML template shared across all pages
pub const NAV_HTML: &str = include_str!("../../templates/nav.html");

/// External pharmacogenomics portals linked from the side panel.
const BIO_TOOLS: &[(&str, &str)] = &[
    ("CellMiner", "https://discover.nci.nih.gov/cellminer/"),
    ("GDSC", "https://www.cancerrxgene.org/"),
    ("CCLE", "https://portals.broadinstitute.org/ccle"),
    ("cBioPortal", "https://www.cbioportal.org/"),
    ("OncoLens", "https://www.oncolens.com/"),
    ("TIMER", "https://cistrome.sh/"),
];

#[derive(Debug, Deserialize, Default)]
pub struct RecordQuery {
    pub q: Option<String>,
    pub tissue: Option<String>,
    pub dataset: Option<String>,
    pub drug_class: Option<String>,
    pub biomarker: Option<String>,
}

impl RecordQuery {
    /// Map the query-string surface onto filter criteria. The literal
    /// "all" and the empty string are the unconstrained sentinels the
    /// select controls round-trip.
    pub fn into_criteria(self) -> FilterCriteria {
        fn sentinel(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.is_empty() && v != "all")
        }

        FilterCriteria {
            search: self.q.unwrap_or_default(),
            tissue: sentinel(self.tissue),
            dataset: sentinel(self.dataset),
            drug_class: sentinel(self.drug_class),
            biomarker: sentinel(self.biomarker),
        }
    }
}

pub async fn explorer_page(
    State(state): State<SharedState>,
    Query(query): Query<RecordQuery>,
) -> Html<String> {
    let criteria = query.into_criteria();
    let matched = filter::apply(&state.snapshot, &criteria);
    let total = matched.len();
    let limit = state.config.dataset.display_limit;
    let shown: Vec<&DrugSensitivityRecord> = matched.into_iter().take(limit).collect();

    debug!(total, shown = shown.len(), ?criteria, "explorer filter pass");

    Html(render_explorer(&state, &criteria, &shown, total))
}

fn render_explorer(
    state: &crate::state::AppState,
    criteria: &FilterCriteria,
    shown: &[&DrugSensitivityRecord],
    total: usize,
) -> String {
    let snapshot_size = state.snapshot.len();
    let limit = state.config.dataset.display_limit;

    let truncation_note = if total > limit {
        format!(
            r#"<div class="table-footer text-muted">Showing first {} of {} results</div>"#,
            limit,
            thousands(total)
        )
    } else {
        String::new()
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Drug Sensitivity Database — Sensyx</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
{nav}
<main class="main-content">
    <div class="page-header">
        <div>
            <h1 class="page-title">Drug Sensitivity Database</h1>
            <p class="text-muted">Synthetic pharmacogenomics snapshot · CCLE / GDSC / CellMiner vocabularies</p>
        </div>
        <div class="text-muted">Showing {total} of {snapshot} records</div>
    </div>

    {controls}

    {biomarker_bar}

    <div class="content-grid">
        <aside class="panel">
            <div class="card">
                <div class="card-header">Quick Bio-Tools</div>
                <ul class="tool-list">
{tools}
                </ul>
            </div>
        </aside>

        <section class="results">
            <div class="card">
                <table class="table">
                    <thead>
                        <tr>
                            <th>Drug</th>
                            <th>Cell Line</th>
                            <th>Dataset</th>
                            <th>Sensitivity</th>
                            <th>Biomarkers</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
                {truncation}
            </div>
        </section>

        <aside class="panel">
            {stats}
        </aside>
    </div>
</main>
</body>
</html>"#,
        nav = NAV_HTML,
        total = thousands(total),
        snapshot = thousands(snapshot_size),
        controls = render_controls(&state.facets, criteria),
        biomarker_bar = render_biomarker_bar(&state.facets, criteria),
        tools = render_bio_tools(),
        rows = render_rows(shown, criteria.biomarker.as_deref()),
        truncation = truncation_note,
        stats = render_stats_panel(state),
    )
}

/// Search box plus the three facet selects. One GET form; every control
/// resubmits it so all active criteria survive each change.
fn render_controls(facets: &Facets, criteria: &FilterCriteria) -> String {
    let biomarker_hidden = match &criteria.biomarker {
        Some(bm) => format!(
            r#"<input type="hidden" name="biomarker" value="{}">"#,
            escape_html(bm)
        ),
        None => String::new(),
    };

    format!(
        r#"<form method="get" action="/" class="filter-form">
        <input class="search-input" type="text" name="q" value="{q}"
            placeholder="Search by drug name, cell line, or biomarker...">
        <div class="select-row">
            <select name="tissue" onchange="this.form.submit()">
                <option value="all">All Tissue Types</option>
{tissue_opts}
            </select>
            <select name="dataset" onchange="this.form.submit()">
                <option value="all">All Datasets</option>
{dataset_opts}
            </select>
            <select name="drug_class" onchange="this.form.submit()">
                <option value="all">All Drug Classes</option>
{class_opts}
            </select>
        </div>
        {biomarker_hidden}
        <button type="submit" class="btn btn-primary">Search</button>
    </form>"#,
        q = escape_html(&criteria.search),
        tissue_opts = render_options(&facets.tissue_types, criteria.tissue.as_deref()),
        dataset_opts = render_options(&facets.datasets, criteria.dataset.as_deref()),
        class_opts = render_options(&facets.drug_classes, criteria.drug_class.as_deref()),
        biomarker_hidden = biomarker_hidden,
    )
}

fn render_options(values: &[String], selected: Option<&str>) -> String {
    values
        .iter()
        .map(|v| {
            let sel = if selected == Some(v.as_str()) { " selected" } else { "" };
            format!(
                r#"            <option value="{v}"{sel}>{v}</option>"#,
                v = escape_html(v),
                sel = sel
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Biomarker toggle buttons. Clicking the active one clears the
/// highlight; every link carries the rest of the current criteria.
fn render_biomarker_bar(facets: &Facets, criteria: &FilterCriteria) -> String {
    let clear = match &criteria.biomarker {
        Some(_) => {
            let mut cleared = criteria.clone();
            cleared.biomarker = None;
            format!(
                r#"<a href="{}" class="btn btn-ghost btn-sm">✕ Clear</a>"#,
                href(&cleared)
            )
        }
        None => String::new(),
    };

    let buttons: String = facets
        .biomarkers
        .iter()
        .map(|bm| {
            let active = criteria.biomarker.as_deref() == Some(bm.as_str());
            let mut toggled = criteria.clone();
            toggled.biomarker = if active { None } else { Some(bm.clone()) };
            format!(
                r#"<a href="{href}" class="btn btn-sm {class}">{label}</a>"#,
                href = href(&toggled),
                class = if active { "btn-primary" } else { "btn-outline" },
                label = escape_html(bm)
            )
        })
        .collect::<Vec<_>>()
        .join("\n            ");

    format!(
        r#"<div class="biomarker-bar">
        <div class="d-flex justify-between">
            <h2 class="section-title">Filter by Biomarker</h2>
            {clear}
        </div>
        <div class="button-wrap">
            {buttons}
        </div>
    </div>"#,
        clear = clear,
        buttons = buttons
    )
}

fn render_rows(shown: &[&DrugSensitivityRecord], highlighted: Option<&str>) -> String {
    if shown.is_empty() {
        return r#"<tr><td colspan="5" class="text-center text-muted py-5">No matching records found. Try adjusting your filters.</td></tr>"#
            .to_string();
    }

    shown
        .iter()
        .map(|record| {
            let dataset_badge = match record.dataset.as_str() {
                "CCLE" => r#"<span class="badge badge-ccle">CCLE</span>"#.to_string(),
                "GDSC" => r#"<span class="badge badge-gdsc">GDSC</span>"#.to_string(),
                other => format!(r#"<span class="badge badge-other">{}</span>"#, escape_html(other)),
            };

            let score = record.sensitivity_score;
            let bar_class = if score > 0.7 {
                "success"
            } else if score > 0.4 {
                "warning"
            } else {
                "danger"
            };
            let pct = (score * 100.0) as u32;

            let biomarker_badges: String = record
                .biomarkers
                .iter()
                .map(|bm| {
                    let class = if highlighted == Some(bm.as_str()) {
                        "badge badge-highlight"
                    } else {
                        "badge badge-muted"
                    };
                    format!(r#"<span class="{}">{}</span>"#, class, escape_html(bm))
                })
                .collect::<Vec<_>>()
                .join(" ");

            format!(
                r#"
            <tr>
                <td class="fw-bold">{drug}</td>
                <td>{cell_line}</td>
                <td>{dataset}</td>
                <td>
                    <div class="d-flex align-center gap-2">
                        <div class="progress-track">
                            <div class="progress-bar {bar_class}" style="width:{pct}%"></div>
                        </div>
                        <span class="score-value">{score:.2}</span>
                    </div>
                </td>
                <td>{biomarkers}</td>
            </tr>"#,
                drug = escape_html(&record.drug_name),
                cell_line = escape_html(&record.cell_line),
                dataset = dataset_badge,
                bar_class = bar_class,
                pct = pct,
                score = score,
                biomarkers = biomarker_badges,
            )
        })
        .collect()
}

fn render_bio_tools() -> String {
    BIO_TOOLS
        .iter()
        .map(|(name, url)| {
            format!(
                r#"                <li><a href="{url}" target="_blank" rel="noopener noreferrer">{name} ↗</a></li>"#
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_stats_panel(state: &crate::state::AppState) -> String {
    let facets = &state.facets;
    format!(
        r#"<div class="card">
                <div class="card-header">Database Stats</div>
                <div class="stats-grid">
                    <div class="stat"><span class="stat-label">Total Records</span><span class="stat-value">{total}</span></div>
                    <div class="stat"><span class="stat-label">Biomarkers</span><span class="stat-value">{biomarkers}</span></div>
                    <div class="stat"><span class="stat-label">Tissue Types</span><span class="stat-value">{tissues}</span></div>
                    <div class="stat"><span class="stat-label">Drug Classes</span><span class="stat-value">{classes}</span></div>
                    <div class="stat"><span class="stat-label">Snapshot</span><span class="stat-value">{snapshot_date}</span></div>
                    <div class="stat"><span class="stat-label">Version</span><span class="stat-value">{version}</span></div>
                </div>
                <div class="card-section">
                    <h3 class="section-title">Data Sources</h3>
                    <ul class="source-list">
                        <li><span class="badge badge-ccle">CCLE</span> Cancer Cell Line Encyclopedia</li>
                        <li><span class="badge badge-gdsc">GDSC</span> Genomics of Drug Sensitivity</li>
                        <li><span class="badge badge-other">NCI-60</span> CellMiner Database</li>
                    </ul>
                </div>
            </div>"#,
        total = thousands(state.snapshot.len()),
        biomarkers = facets.biomarkers.len(),
        tissues = facets.tissue_types.len(),
        classes = facets.drug_classes.len(),
        snapshot_date = state.generated_at.format("%b %Y"),
        version = env!("CARGO_PKG_VERSION"),
    )
}

/// Build a page URL carrying every active criterion.
fn href(criteria: &FilterCriteria) -> String {
    let enc = |v: &str| utf8_percent_encode(v, NON_ALPHANUMERIC).to_string();
    let mut params = Vec::new();

    if !criteria.search.is_empty() {
        params.push(format!("q={}", enc(&criteria.search)));
    }
    if let Some(t) = &criteria.tissue {
        params.push(format!("tissue={}", enc(t)));
    }
    if let Some(d) = &criteria.dataset {
        params.push(format!("dataset={}", enc(d)));
    }
    if let Some(c) = &criteria.drug_class {
        params.push(format!("drug_class={}", enc(c)));
    }
    if let Some(b) = &criteria.biomarker {
        params.push(format!("biomarker={}", enc(b)));
    }

    if params.is_empty() {
        "/".to_string()
    } else {
        format!("/?{}", params.join("&"))
    }
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
