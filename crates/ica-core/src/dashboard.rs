//! Dashboard snapshot with JSON persistence and markdown rendering.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{Application, QuizAttempt, Resume};
use crate::quiz::attempt_percent;
use crate::state::SidebarPreference;
use crate::statistics::{self, Bucket, DashboardSummary, ScorePoint};
use crate::store::{KeyValueStore, LocalStore};

/// Everything the dashboard shows, read once from the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    /// When the snapshot was taken.
    pub generated_at: DateTime<Utc>,
    pub summary: DashboardSummary,
    /// Most recent first.
    pub resumes: Vec<Resume>,
    /// Most recent first.
    pub applications: Vec<Application>,
    /// Most recent first.
    pub attempts: Vec<QuizAttempt>,
    /// Attempt percentages, oldest first.
    pub score_series: Vec<ScorePoint>,
    pub applications_by_status: Vec<Bucket>,
    pub applications_by_role: Vec<Bucket>,
    pub sidebar_collapsed: bool,
}

impl DashboardReport {
    /// Read the three collections and the sidebar flag and derive the
    /// statistics. Unreadable collections count as empty.
    pub fn load<S: KeyValueStore>(store: &LocalStore<S>, now: DateTime<Utc>) -> Self {
        let resumes = store.resumes();
        let applications = store.applications();
        let attempts = store.attempts();
        Self::from_parts(
            resumes,
            applications,
            attempts,
            SidebarPreference::load(store).is_collapsed(),
            now,
        )
    }

    /// Build a snapshot from already-loaded collections.
    pub fn from_parts(
        resumes: Vec<Resume>,
        applications: Vec<Application>,
        attempts: Vec<QuizAttempt>,
        sidebar_collapsed: bool,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            generated_at: now,
            summary: statistics::summarize(&resumes, &applications, &attempts),
            score_series: statistics::score_series(&attempts),
            applications_by_status: statistics::applications_by_status(&applications),
            applications_by_role: statistics::applications_by_role(&applications),
            resumes,
            applications,
            attempts,
            sidebar_collapsed,
        }
    }

    /// Save the snapshot as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize dashboard")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write dashboard to {}", path.display()))?;
        Ok(())
    }

    /// Load a snapshot from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read dashboard from {}", path.display()))?;
        let report: DashboardReport =
            serde_json::from_str(&content).context("failed to parse dashboard JSON")?;
        Ok(report)
    }

    /// Format the snapshot as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str("# Overview\n\n");
        md.push_str("| Resumes | Applications | Tests Taken | Avg Score |\n");
        md.push_str("|---------|--------------|-------------|-----------|\n");
        md.push_str(&format!(
            "| {} | {} | {} | {}% |\n\n",
            self.summary.resume_count,
            self.summary.application_count,
            self.summary.test_count,
            self.summary.average_score_percent
        ));

        md.push_str("## Created Resumes\n\n");
        if self.resumes.is_empty() {
            md.push_str("No resumes yet.\n\n");
        } else {
            md.push_str("| Name | Role | Location |\n");
            md.push_str("|------|------|----------|\n");
            for r in &self.resumes {
                md.push_str(&format!(
                    "| {} | {} | {} |\n",
                    md_cell(&r.full_name),
                    md_cell(&r.role),
                    md_cell(r.location.as_deref().unwrap_or("Remote"))
                ));
            }
            md.push('\n');
        }

        md.push_str("## Applied Jobs\n\n");
        if self.applications.is_empty() {
            md.push_str("No applications yet.\n\n");
        } else {
            md.push_str("| Title | Company | Location | Status |\n");
            md.push_str("|-------|---------|----------|--------|\n");
            for a in &self.applications {
                md.push_str(&format!(
                    "| {} | {} | {} | {} |\n",
                    md_cell(&a.job.title),
                    md_cell(&a.job.company),
                    md_cell(&a.job.location),
                    a.status
                ));
            }
            md.push('\n');
        }

        md.push_str("## Quiz Attempts\n\n");
        if self.attempts.is_empty() {
            md.push_str("No attempts yet.\n");
        } else {
            md.push_str("| Quiz | Date | Score | Percent | Answers |\n");
            md.push_str("|------|------|-------|---------|---------|\n");
            for t in &self.attempts {
                md.push_str(&format!(
                    "| {} Quiz | {} | {}/{} | {}% | {} |\n",
                    md_cell(&t.role),
                    t.date.format("%Y-%m-%d %H:%M"),
                    t.score,
                    t.total,
                    attempt_percent(t),
                    answer_marks(t)
                ));
            }
        }

        md
    }
}

fn md_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

/// `Q1:✓ Q2:✕ ...` for one attempt.
pub fn answer_marks(attempt: &QuizAttempt) -> String {
    attempt
        .answers
        .iter()
        .enumerate()
        .map(|(i, a)| format!("Q{}:{}", i + 1, if a.correct { "✓" } else { "✕" }))
        .collect::<Vec<_>>()
        .join(" ")
}
