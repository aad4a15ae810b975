//! The `ica dashboard` command.

use std::path::PathBuf;

use anyhow::{bail, Result};
use chrono::Utc;
use comfy_table::{Cell, Table};

use ica_core::dashboard::{answer_marks, DashboardReport};
use ica_core::quiz::attempt_percent;
use ica_report::write_html_report;

use super::Session;

pub fn execute(session: &Session, format: String, output: Option<PathBuf>) -> Result<()> {
    let report = DashboardReport::load(&session.store, Utc::now());

    match format.as_str() {
        "json" => match output {
            Some(path) => {
                report.save_json(&path)?;
                eprintln!("Dashboard JSON: {}", path.display());
            }
            None => println!("{}", serde_json::to_string_pretty(&report)?),
        },
        "markdown" | "md" => match output {
            Some(path) => {
                std::fs::write(&path, report.to_markdown())?;
                eprintln!("Dashboard markdown: {}", path.display());
            }
            None => println!("{}", report.to_markdown()),
        },
        "html" => {
            let path = output.unwrap_or_else(|| PathBuf::from("ica-dashboard.html"));
            write_html_report(&report, &path)?;
            println!("HTML dashboard: {}", path.display());
        }
        "text" => print_text(&report),
        other => bail!("unknown format '{other}' (expected text, json, markdown or html)"),
    }

    Ok(())
}

fn print_text(report: &DashboardReport) {
    let s = &report.summary;
    let mut summary = Table::new();
    summary.set_header(vec!["Resumes", "Applications", "Tests Taken", "Avg Score"]);
    summary.add_row(vec![
        Cell::new(s.resume_count),
        Cell::new(s.application_count),
        Cell::new(s.test_count),
        Cell::new(format!("{}%", s.average_score_percent)),
    ]);
    println!("{summary}");

    println!("\nCreated Resumes");
    if report.resumes.is_empty() {
        println!("No resumes yet.");
    } else {
        for r in &report.resumes {
            println!(
                "  {} ({}, {})",
                r.full_name,
                r.role,
                r.location.as_deref().unwrap_or("Remote")
            );
        }
    }

    println!("\nApplied Jobs");
    if report.applications.is_empty() {
        println!("No applications yet.");
    } else {
        for a in &report.applications {
            println!(
                "  {} at {} ({}): {}",
                a.job.title, a.job.company, a.job.location, a.status
            );
        }
    }

    println!("\nQuiz Attempts");
    if report.attempts.is_empty() {
        println!("No attempts yet.");
    } else {
        for t in &report.attempts {
            println!(
                "  {} Quiz, {}: {}/{} correct ({}%) {}",
                t.role,
                t.date.format("%Y-%m-%d %H:%M"),
                t.score,
                t.total,
                attempt_percent(t),
                answer_marks(t)
            );
        }
    }
}
