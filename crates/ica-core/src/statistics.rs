//! Dashboard statistics derived from the persisted collections.
//!
//! The average score is rounded twice: each attempt's percentage is rounded
//! first, then the mean of those integers is rounded. Rounding is half away
//! from zero, so 80% and 81% average to 81%.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{Application, QuizAttempt, Resume};
use crate::quiz::attempt_percent;

/// Headline counts for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub resume_count: usize,
    pub application_count: usize,
    pub test_count: usize,
    /// Mean of the rounded per-attempt percentages, rounded. 0 with no attempts.
    pub average_score_percent: u32,
}

/// Compute the headline counts.
pub fn summarize(
    resumes: &[Resume],
    applications: &[Application],
    attempts: &[QuizAttempt],
) -> DashboardSummary {
    DashboardSummary {
        resume_count: resumes.len(),
        application_count: applications.len(),
        test_count: attempts.len(),
        average_score_percent: average_score_percent(attempts),
    }
}

/// Mean of rounded per-attempt percentages, rounded again.
pub fn average_score_percent(attempts: &[QuizAttempt]) -> u32 {
    if attempts.is_empty() {
        return 0;
    }
    let sum: u64 = attempts.iter().map(|a| u64::from(attempt_percent(a))).sum();
    (sum as f64 / attempts.len() as f64).round() as u32
}

/// One point of the score-over-time series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorePoint {
    pub date: DateTime<Utc>,
    pub role: String,
    pub percent: u32,
}

/// Attempt percentages, oldest first.
pub fn score_series(attempts: &[QuizAttempt]) -> Vec<ScorePoint> {
    attempts
        .iter()
        .rev()
        .map(|a| ScorePoint {
            date: a.date,
            role: a.role.clone(),
            percent: attempt_percent(a),
        })
        .collect()
}

/// A labelled count in a breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    pub label: String,
    pub count: usize,
}

fn count_by<I>(labels: I) -> Vec<Bucket>
where
    I: IntoIterator<Item = String>,
{
    let mut buckets: Vec<Bucket> = Vec::new();
    for label in labels {
        match buckets.iter_mut().find(|b| b.label == label) {
            Some(bucket) => bucket.count += 1,
            None => buckets.push(Bucket { label, count: 1 }),
        }
    }
    buckets
}

/// Application counts per status, in first-seen order.
pub fn applications_by_status(applications: &[Application]) -> Vec<Bucket> {
    count_by(applications.iter().map(|a| a.status.to_string()))
}

/// Application counts per job role, in first-seen order.
pub fn applications_by_role(applications: &[Application]) -> Vec<Bucket> {
    count_by(applications.iter().map(|a| a.job.role.clone()))
}
