//! TOML catalog parser.
//!
//! Loads job postings and role quizzes from TOML files and directories, and
//! validates them.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::catalog::Catalog;
use crate::model::{JobPosting, JobType, Quiz, QuizQuestion};

/// Intermediate TOML structure for catalog files.
#[derive(Debug, Deserialize)]
struct TomlCatalogFile {
    #[serde(default)]
    jobs: Vec<TomlJob>,
    #[serde(default)]
    quizzes: Vec<TomlQuiz>,
}

#[derive(Debug, Deserialize)]
struct TomlJob {
    id: String,
    title: String,
    company: String,
    #[serde(default)]
    location: String,
    #[serde(rename = "type")]
    job_type: String,
    role: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    posted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct TomlQuiz {
    role: String,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    id: String,
    prompt: String,
    choices: Vec<String>,
    answer_index: usize,
}

/// Parse a single TOML file into a `Catalog`.
pub fn parse_catalog(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file: {}", path.display()))?;

    parse_catalog_str(&content, path)
}

/// Parse a TOML string into a `Catalog` (useful for testing).
///
/// Postings without `posted_at` are stamped with the current time.
pub fn parse_catalog_str(content: &str, source_path: &Path) -> Result<Catalog> {
    let parsed: TomlCatalogFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let now = Utc::now();
    let jobs = parsed
        .jobs
        .into_iter()
        .map(|j| {
            let job_type: JobType = j
                .job_type
                .parse()
                .map_err(|e: String| anyhow::anyhow!("job {}: {}", j.id, e))?;
            Ok(JobPosting {
                id: j.id,
                title: j.title,
                company: j.company,
                location: j.location,
                job_type,
                role: j.role,
                tags: j.tags,
                description: j.description,
                posted_at: j.posted_at.unwrap_or(now),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let quizzes = parsed
        .quizzes
        .into_iter()
        .map(|q| {
            let questions = q
                .questions
                .into_iter()
                .map(|question| {
                    anyhow::ensure!(
                        question.answer_index < question.choices.len(),
                        "question {} in the {} quiz: answer_index {} out of range ({} choices)",
                        question.id,
                        q.role,
                        question.answer_index,
                        question.choices.len()
                    );
                    Ok(QuizQuestion {
                        id: question.id,
                        prompt: question.prompt,
                        choices: question.choices,
                        answer_index: question.answer_index,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(Quiz {
                role: q.role,
                questions,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    check_unique_quiz_roles(&quizzes)
        .with_context(|| format!("invalid catalog: {}", source_path.display()))?;

    Ok(Catalog { jobs, quizzes })
}

fn check_unique_quiz_roles(quizzes: &[Quiz]) -> Result<()> {
    let mut seen = HashSet::new();
    for quiz in quizzes {
        if !seen.insert(quiz.role.to_lowercase()) {
            anyhow::bail!("more than one quiz for role '{}'", quiz.role);
        }
    }
    Ok(())
}

/// Recursively load all `.toml` catalog files from a directory.
pub fn load_catalog_directory(dir: &Path) -> Result<Vec<Catalog>> {
    let mut catalogs = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut paths: Vec<_> = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<_>>()?;
    paths.sort();

    for path in paths {
        if path.is_dir() {
            catalogs.extend(load_catalog_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_catalog(&path) {
                Ok(catalog) => catalogs.push(catalog),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(catalogs)
}

/// Load a catalog from a file, or merge every catalog under a directory.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    if !path.is_dir() {
        return parse_catalog(path);
    }

    let mut merged = Catalog::default();
    for catalog in load_catalog_directory(path)? {
        merged.jobs.extend(catalog.jobs);
        merged.quizzes.extend(catalog.quizzes);
    }
    check_unique_quiz_roles(&merged.quizzes)
        .with_context(|| format!("invalid catalog directory: {}", path.display()))?;
    Ok(merged)
}

/// A warning from catalog validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The job id or quiz role the warning is about.
    pub subject: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a catalog for common issues.
pub fn validate_catalog(catalog: &Catalog) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let mut seen_ids = HashSet::new();
    for job in &catalog.jobs {
        if !seen_ids.insert(&job.id) {
            warnings.push(ValidationWarning {
                subject: Some(job.id.clone()),
                message: format!("duplicate job ID: {}", job.id),
            });
        }
    }

    // A posting with no role never matches a non-empty query.
    for job in &catalog.jobs {
        if job.role.trim().is_empty() {
            warnings.push(ValidationWarning {
                subject: Some(job.id.clone()),
                message: "role is empty".into(),
            });
        }
    }

    for quiz in &catalog.quizzes {
        if quiz.questions.is_empty() {
            warnings.push(ValidationWarning {
                subject: Some(quiz.role.clone()),
                message: "quiz has no questions".into(),
            });
        }

        let mut seen_questions = HashSet::new();
        for question in &quiz.questions {
            if !seen_questions.insert(&question.id) {
                warnings.push(ValidationWarning {
                    subject: Some(quiz.role.clone()),
                    message: format!("duplicate question ID: {}", question.id),
                });
            }
        }
    }

    warnings
}
