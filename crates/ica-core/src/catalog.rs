//! Static job and quiz catalogs.
//!
//! The built-in catalog ships with the binary. A TOML catalog file (see
//! [`crate::parser`]) can replace it at startup; either way the catalog is
//! immutable once constructed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::matching;
use crate::model::{JobPosting, JobType, Quiz, QuizQuestion};
use crate::quiz;

/// Job postings and role quizzes available to the board and quiz engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub jobs: Vec<JobPosting>,
    #[serde(default)]
    pub quizzes: Vec<Quiz>,
}

impl Catalog {
    /// The built-in catalog, with every posting stamped `posted_at`.
    pub fn builtin(posted_at: DateTime<Utc>) -> Self {
        Self {
            jobs: builtin_jobs(posted_at),
            quizzes: builtin_quizzes(),
        }
    }

    /// Postings whose role contains `role_query`, case-insensitively.
    pub fn find_jobs_by_role(&self, role_query: &str) -> Vec<&JobPosting> {
        matching::find_jobs_by_role(&self.jobs, role_query)
    }

    /// Look up a posting by id.
    pub fn job(&self, id: &str) -> Option<&JobPosting> {
        self.jobs.iter().find(|j| j.id == id)
    }

    /// The quiz for `role`, matched case-insensitively.
    pub fn quiz_for_role(&self, role: &str) -> Option<&Quiz> {
        quiz::lookup_quiz(&self.quizzes, role)
    }

    /// Roles that have a quiz, in catalog order.
    pub fn quiz_roles(&self) -> Vec<&str> {
        self.quizzes.iter().map(|q| q.role.as_str()).collect()
    }
}

#[allow(clippy::too_many_arguments)]
fn posting(
    id: &str,
    title: &str,
    company: &str,
    location: &str,
    job_type: JobType,
    role: &str,
    tags: &[&str],
    description: &str,
    posted_at: DateTime<Utc>,
) -> JobPosting {
    JobPosting {
        id: id.into(),
        title: title.into(),
        company: company.into(),
        location: location.into(),
        job_type,
        role: role.into(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        description: description.into(),
        posted_at,
    }
}

fn builtin_jobs(posted_at: DateTime<Utc>) -> Vec<JobPosting> {
    vec![
        posting(
            "job-1",
            "Frontend Engineer (React)",
            "NovaTech",
            "Remote",
            JobType::Remote,
            "Frontend Engineer",
            &["React", "TypeScript", "UI", "Tailwind"],
            "Build elegant, accessible UIs in React. Collaborate with design and product to ship delightful experiences.",
            posted_at,
        ),
        posting(
            "job-2",
            "Backend Engineer (Node.js)",
            "DataForge",
            "Bengaluru, IN",
            JobType::FullTime,
            "Backend Engineer",
            &["Node.js", "Postgres", "API", "Cloud"],
            "Design resilient services, craft clean APIs, and optimize DB queries for scale.",
            posted_at,
        ),
        posting(
            "job-3",
            "Full Stack Developer",
            "Skyline",
            "Hyderabad, IN",
            JobType::FullTime,
            "Full Stack Developer",
            &["React", "Node.js", "AWS", "CI/CD"],
            "Own features end-to-end across the stack. From data models to polished UIs.",
            posted_at,
        ),
        posting(
            "job-4",
            "Data Analyst",
            "InsightLabs",
            "Gurugram, IN",
            JobType::Contract,
            "Data Analyst",
            &["SQL", "Python", "Dashboards", "ETL"],
            "Transform data into insights. Build dashboards and reports to inform business decisions.",
            posted_at,
        ),
    ]
}

fn question(id: &str, prompt: &str, choices: &[&str], answer_index: usize) -> QuizQuestion {
    QuizQuestion {
        id: id.into(),
        prompt: prompt.into(),
        choices: choices.iter().map(|c| c.to_string()).collect(),
        answer_index,
    }
}

fn builtin_quizzes() -> Vec<Quiz> {
    vec![
        Quiz {
            role: "Frontend Engineer".into(),
            questions: vec![
                question(
                    "fe-q1",
                    "Which CSS unit adapts based on the root font size?",
                    &["px", "em", "rem", "%"],
                    2,
                ),
                question(
                    "fe-q2",
                    "What does React's useMemo primarily optimize?",
                    &[
                        "Avoid re-rendering components",
                        "Memoize expensive computations",
                        "Cache API responses",
                        "Bundle splitting",
                    ],
                    1,
                ),
                question(
                    "fe-q3",
                    "Which attribute improves image loading performance?",
                    &["alt", "srcset", "loading=\"lazy\"", "title"],
                    2,
                ),
            ],
        },
        Quiz {
            role: "Backend Engineer".into(),
            questions: vec![
                question(
                    "be-q1",
                    "Which HTTP status code represents 'Created'?",
                    &["200", "201", "202", "204"],
                    1,
                ),
                question(
                    "be-q2",
                    "What is an idempotent HTTP method?",
                    &["POST", "GET", "PATCH", "CONNECT"],
                    1,
                ),
                question(
                    "be-q3",
                    "Best way to prevent SQL injection?",
                    &[
                        "Escape strings manually",
                        "Use parameterized queries",
                        "Disable user input",
                        "Use MD5 hashing",
                    ],
                    1,
                ),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::builtin("2024-05-01T00:00:00Z".parse().unwrap())
    }

    #[test]
    fn builtin_answer_indices_are_valid() {
        for quiz in &catalog().quizzes {
            for q in &quiz.questions {
                assert!(q.answer_index < q.choices.len(), "{} out of range", q.id);
            }
        }
    }

    #[test]
    fn builtin_job_ids_are_unique() {
        let cat = catalog();
        let ids: std::collections::HashSet<_> = cat.jobs.iter().map(|j| &j.id).collect();
        assert_eq!(ids.len(), cat.jobs.len());
    }

    #[test]
    fn job_lookup_by_id() {
        let cat = catalog();
        assert_eq!(cat.job("job-4").unwrap().company, "InsightLabs");
        assert!(cat.job("job-99").is_none());
    }

    #[test]
    fn quiz_roles_in_order() {
        assert_eq!(
            catalog().quiz_roles(),
            vec!["Frontend Engineer", "Backend Engineer"]
        );
    }
}
