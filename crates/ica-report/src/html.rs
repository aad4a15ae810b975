//! HTML dashboard export.
//!
//! Produces a self-contained HTML file with all CSS inlined and the charts
//! drawn as inline SVG.

use anyhow::Result;
use std::path::Path;

use ica_core::dashboard::{answer_marks, DashboardReport};
use ica_core::quiz::attempt_percent;
use ica_core::statistics::{Bucket, ScorePoint};

/// Palette for the per-role bars.
const COLORS: [&str; 5] = ["#6E59F4", "#10B981", "#F59E0B", "#EF4444", "#3B82F6"];

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate the HTML dashboard.
pub fn generate_html(report: &DashboardReport) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>ica dashboard</title>\n");
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n");

    let layout = if report.sidebar_collapsed {
        "sidebar-collapsed"
    } else {
        "sidebar-expanded"
    };
    html.push_str(&format!("<body class=\"{layout}\">\n"));

    html.push_str("<nav class=\"sidebar\">\n<ul>\n");
    for (anchor, label) in [
        ("overview", "Overview"),
        ("charts", "Charts"),
        ("resumes", "Resumes"),
        ("applications", "Applications"),
        ("attempts", "Quiz Attempts"),
    ] {
        html.push_str(&format!(
            "<li><a href=\"#{anchor}\" title=\"{label}\">{label}</a></li>\n"
        ));
    }
    html.push_str("</ul>\n</nav>\n<main>\n");

    // Header
    html.push_str("<header id=\"overview\">\n");
    html.push_str("<h1>Overview</h1>\n");
    html.push_str(&format!(
        "<p class=\"meta\">Track resumes, job applications, and quiz performance at a glance. Generated {}</p>\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    // Summary cards
    let s = &report.summary;
    html.push_str("<section class=\"cards\">\n");
    for (label, value) in [
        ("Resumes", s.resume_count.to_string()),
        ("Applications", s.application_count.to_string()),
        ("Tests Taken", s.test_count.to_string()),
        ("Avg Score", format!("{}%", s.average_score_percent)),
    ] {
        html.push_str(&format!(
            "<div class=\"card\"><h3>{label}</h3><p class=\"stat\">{value}</p></div>\n"
        ));
    }
    html.push_str("</section>\n");

    // Charts
    html.push_str("<section id=\"charts\" class=\"charts\">\n");
    html.push_str("<div class=\"card\"><h2>Quiz Scores Over Time</h2>\n");
    html.push_str(&generate_line_chart(&report.score_series));
    html.push_str("</div>\n");
    html.push_str("<div class=\"card\"><h2>Applications by Status</h2>\n");
    html.push_str(&generate_bar_chart(&report.applications_by_status, |_| COLORS[1]));
    html.push_str("</div>\n");
    html.push_str("<div class=\"card\"><h2>Applications by Role</h2>\n");
    html.push_str(&generate_bar_chart(&report.applications_by_role, |i| {
        COLORS[i % COLORS.len()]
    }));
    html.push_str("</div>\n");
    html.push_str("</section>\n");

    // Resumes
    html.push_str("<section id=\"resumes\">\n<h2>Created Resumes</h2>\n");
    if report.resumes.is_empty() {
        html.push_str("<p class=\"empty\">No resumes yet.</p>\n");
    } else {
        html.push_str("<table>\n<thead><tr><th>Name</th><th>Role</th><th>Location</th></tr></thead>\n<tbody>\n");
        for r in &report.resumes {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                html_escape(&r.full_name),
                html_escape(&r.role),
                html_escape(r.location.as_deref().unwrap_or("Remote"))
            ));
        }
        html.push_str("</tbody></table>\n");
    }
    html.push_str("</section>\n");

    // Applications
    html.push_str("<section id=\"applications\">\n<h2>Applied Jobs</h2>\n");
    if report.applications.is_empty() {
        html.push_str("<p class=\"empty\">No applications yet.</p>\n");
    } else {
        html.push_str("<table>\n<thead><tr><th>Title</th><th>Company</th><th>Location</th><th>Status</th></tr></thead>\n<tbody>\n");
        for a in &report.applications {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td><span class=\"badge\">{}</span></td></tr>\n",
                html_escape(&a.job.title),
                html_escape(&a.job.company),
                html_escape(&a.job.location),
                a.status
            ));
        }
        html.push_str("</tbody></table>\n");
    }
    html.push_str("</section>\n");

    // Attempts
    html.push_str("<section id=\"attempts\">\n<h2>Quiz Attempts</h2>\n");
    if report.attempts.is_empty() {
        html.push_str("<p class=\"empty\">No attempts yet.</p>\n");
    } else {
        html.push_str("<table>\n<thead><tr><th>Quiz</th><th>Date</th><th>Score</th><th>Percent</th><th>Answers</th></tr></thead>\n<tbody>\n");
        for t in &report.attempts {
            html.push_str(&format!(
                "<tr><td>{} Quiz</td><td>{}</td><td>{}/{} correct</td><td>{}%</td><td>{}</td></tr>\n",
                html_escape(&t.role),
                t.date.format("%Y-%m-%d %H:%M"),
                t.score,
                t.total,
                attempt_percent(t),
                html_escape(&answer_marks(t))
            ));
        }
        html.push_str("</tbody></table>\n");
    }
    html.push_str("</section>\n");

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(
        &serde_json::to_string_pretty(report)
            .unwrap_or_default()
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
    );
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    html.push_str("</main>\n</body>\n</html>");
    html
}

/// Write the HTML dashboard to a file.
pub fn write_html_report(report: &DashboardReport, path: &Path) -> Result<()> {
    let html = generate_html(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}

fn generate_line_chart(series: &[ScorePoint]) -> String {
    let width = 600;
    let height = 240;
    let pad = 30;

    if series.is_empty() {
        return "<p class=\"empty\">No attempts yet.</p>\n".to_string();
    }

    let plot_w = (width - 2 * pad) as f64;
    let plot_h = (height - 2 * pad) as f64;
    let step = if series.len() > 1 {
        plot_w / (series.len() - 1) as f64
    } else {
        0.0
    };

    let points: Vec<(f64, f64)> = series
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = pad as f64 + step * i as f64;
            let y = pad as f64 + plot_h * (1.0 - f64::from(p.percent.min(100)) / 100.0);
            (x, y)
        })
        .collect();

    let mut svg = format!(
        "<svg width=\"{width}\" height=\"{height}\" xmlns=\"http://www.w3.org/2000/svg\">\n"
    );

    for tick in (0..=100).step_by(20) {
        let y = pad as f64 + plot_h * (1.0 - f64::from(tick) / 100.0);
        svg.push_str(&format!(
            "  <line x1=\"{pad}\" y1=\"{y:.1}\" x2=\"{}\" y2=\"{y:.1}\" stroke=\"currentColor\" stroke-opacity=\"0.15\" stroke-dasharray=\"3 3\"/>\n",
            width - pad
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{y:.1}\" font-size=\"10\" fill=\"currentColor\" text-anchor=\"end\" dominant-baseline=\"middle\">{tick}</text>\n",
            pad - 6
        ));
    }

    let polyline: Vec<String> = points.iter().map(|(x, y)| format!("{x:.1},{y:.1}")).collect();
    svg.push_str(&format!(
        "  <polyline points=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"2\"/>\n",
        polyline.join(" "),
        COLORS[0]
    ));

    for ((x, y), p) in points.iter().zip(series) {
        svg.push_str(&format!(
            "  <circle cx=\"{x:.1}\" cy=\"{y:.1}\" r=\"3\" fill=\"{}\"><title>{} {}: {}%</title></circle>\n",
            COLORS[0],
            p.date.format("%Y-%m-%d"),
            html_escape(&p.role),
            p.percent
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

fn generate_bar_chart(buckets: &[Bucket], color: impl Fn(usize) -> &'static str) -> String {
    let bar_height = 30;
    let max_width = 400;
    let padding = 10;
    let label_width = 200;

    if buckets.is_empty() {
        return "<p class=\"empty\">No applications yet.</p>\n".to_string();
    }

    let max_count = buckets.iter().map(|b| b.count).max().unwrap_or(1).max(1);
    let total_height = buckets.len() * (bar_height + padding) + padding;

    let mut svg = format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        label_width + max_width + 60,
        total_height
    );

    for (i, bucket) in buckets.iter().enumerate() {
        let y = i * (bar_height + padding) + padding;
        let width = bucket.count * max_width / max_count;

        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"14\" fill=\"currentColor\" text-anchor=\"end\" dominant-baseline=\"middle\">{}</text>\n",
            label_width - 10,
            y + bar_height / 2,
            html_escape(&bucket.label)
        ));
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" rx=\"6\"/>\n",
            label_width,
            y,
            width,
            bar_height,
            color(i)
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"12\" fill=\"currentColor\" dominant-baseline=\"middle\">{}</text>\n",
            label_width + width + 8,
            y + bar_height / 2,
            bucket.count
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --muted: #6b7280; --border: #e5e7eb; --accent: #6E59F4; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --muted: #9ca3af; --border: #374151; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; background: var(--bg); color: var(--fg); display: grid; }
body.sidebar-expanded { grid-template-columns: 16rem 1fr; }
body.sidebar-collapsed { grid-template-columns: 4rem 1fr; }
.sidebar { border-right: 1px solid var(--border); padding: 1rem; overflow: hidden; }
.sidebar ul { list-style: none; padding: 0; margin: 0; }
.sidebar li { margin: 0.5rem 0; white-space: nowrap; }
.sidebar a { color: var(--fg); text-decoration: none; }
body.sidebar-collapsed .sidebar a { display: block; width: 1.5rem; overflow: hidden; }
main { padding: 2rem; }
h1, h2 { margin-top: 2rem; }
h1 { color: var(--accent); }
.meta, .empty { color: var(--muted); }
.cards { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1rem; }
.charts { display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 1rem; }
.card { border: 1px solid var(--border); border-radius: 8px; padding: 1rem; }
.card h3 { margin: 0; font-size: 0.9rem; color: var(--muted); }
.stat { font-size: 2.25rem; font-weight: bold; margin: 0.5rem 0 0; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.5rem 1rem; text-align: left; }
th { background: var(--border); }
.badge { border-radius: 999px; padding: 0.1rem 0.6rem; background: var(--border); font-size: 0.85rem; }
pre { overflow-x: auto; padding: 1rem; background: var(--border); border-radius: 8px; }
code { font-family: 'JetBrains Mono', 'Fira Code', monospace; font-size: 0.85rem; }
details { margin: 1rem 0; }
summary { cursor: pointer; font-weight: bold; }
svg { margin: 1rem 0; max-width: 100%; }
"#;
