//! Role matching for the job board.

use crate::model::{JobPosting, Resume};

/// Postings whose `role` contains `role_query`, compared in lowercase.
///
/// Catalog order is kept. An empty query matches every posting.
pub fn find_jobs_by_role<'a>(jobs: &'a [JobPosting], role_query: &str) -> Vec<&'a JobPosting> {
    let key = role_query.to_lowercase();
    jobs.iter()
        .filter(|j| j.role.to_lowercase().contains(&key))
        .collect()
}

/// The role the board opens with: an explicit role if given, else the role
/// of the most recent resume, else `fallback`.
///
/// An explicit role is only trimmed, so an empty one stays empty and the
/// board shows every posting.
pub fn resolve_board_role(active_role: Option<&str>, resumes: &[Resume], fallback: &str) -> String {
    match active_role {
        Some(role) => role.trim().to_string(),
        None => resumes
            .first()
            .map(|r| r.role.as_str())
            .filter(|r| !r.is_empty())
            .unwrap_or(fallback)
            .to_string(),
    }
}
