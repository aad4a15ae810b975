//! Core data model types for ica.
//!
//! Field names serialize in camelCase and enum variants as their display
//! strings, so collections written by earlier browser builds stay readable.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A saved resume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    /// Unique identifier (`cv-…`).
    pub id: String,
    /// Title-cased full name.
    pub full_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Target role, also used to seed the job board and quiz.
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Skills in the order they were entered. Duplicates are kept.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Profile summary.
    pub summary: String,
    /// Work history, most relevant first.
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<Vec<Education>>,
}

/// One entry of a resume's work history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub company: String,
    pub title: String,
    /// Start month, `YYYY-MM`.
    pub start: String,
    /// End month (`YYYY-MM`) or `Present`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub school: String,
    pub degree: String,
    pub year: String,
}

/// Employment type of a job posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
    Internship,
    Remote,
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobType::FullTime => write!(f, "Full-time"),
            JobType::PartTime => write!(f, "Part-time"),
            JobType::Contract => write!(f, "Contract"),
            JobType::Internship => write!(f, "Internship"),
            JobType::Remote => write!(f, "Remote"),
        }
    }
}

impl FromStr for JobType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "full-time" | "fulltime" | "full time" => Ok(JobType::FullTime),
            "part-time" | "parttime" | "part time" => Ok(JobType::PartTime),
            "contract" => Ok(JobType::Contract),
            "internship" => Ok(JobType::Internship),
            "remote" => Ok(JobType::Remote),
            other => Err(format!("unknown job type: {other}")),
        }
    }
}

/// A job board entry. Catalog data, immutable at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    /// Primary role keyword used for matching.
    pub role: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub description: String,
    pub posted_at: DateTime<Utc>,
}

/// Progress of an application. Only `Applied` is ever assigned in-app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplicationStatus {
    Applied,
    #[serde(rename = "In Review")]
    InReview,
    Interview,
    Rejected,
    Offer,
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplicationStatus::Applied => write!(f, "Applied"),
            ApplicationStatus::InReview => write!(f, "In Review"),
            ApplicationStatus::Interview => write!(f, "Interview"),
            ApplicationStatus::Rejected => write!(f, "Rejected"),
            ApplicationStatus::Offer => write!(f, "Offer"),
        }
    }
}

/// A job application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    /// Copy of the posting at the time of applying.
    pub job: JobPosting,
    /// Id of the resume used, or empty if none existed. Not checked.
    #[serde(default)]
    pub resume_id: String,
    pub status: ApplicationStatus,
    pub date: DateTime<Utc>,
}

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: String,
    pub prompt: String,
    pub choices: Vec<String>,
    /// Zero-based index of the correct choice.
    pub answer_index: usize,
}

/// A role quiz. At most one per role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub role: String,
    pub questions: Vec<QuizQuestion>,
}

/// The user's answer to one question within an attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    pub question_id: String,
    /// `None` when the question was left unanswered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choice_index: Option<usize>,
    pub correct: bool,
}

/// A submitted quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAttempt {
    pub id: String,
    pub role: String,
    pub answers: Vec<AnswerRecord>,
    /// Number of correct answers.
    pub score: u32,
    /// Number of questions at submission time.
    pub total: u32,
    pub date: DateTime<Utc>,
}
