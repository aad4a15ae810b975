//! Applying to job postings.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::error::StoreError;
use crate::ids::{new_id, APPLICATION_PREFIX};
use crate::model::{Application, ApplicationStatus, JobPosting, Resume};
use crate::store::{KeyValueStore, LocalStore, APPLICATIONS_KEY};

/// Build an application for `job` using the most recent resume, if any.
pub fn new_application(
    job: &JobPosting,
    resumes: &[Resume],
    id: String,
    date: DateTime<Utc>,
) -> Application {
    Application {
        id,
        job: job.clone(),
        resume_id: resumes.first().map(|r| r.id.clone()).unwrap_or_default(),
        status: ApplicationStatus::Applied,
        date,
    }
}

/// Apply to `job` and persist the application.
pub fn apply_to_job<S: KeyValueStore>(
    store: &mut LocalStore<S>,
    job: &JobPosting,
) -> Result<Application, StoreError> {
    let resumes = store.resumes();
    let application = new_application(job, &resumes, new_id(APPLICATION_PREFIX), Utc::now());
    store.append(APPLICATIONS_KEY, application.clone())?;
    info!(
        job = %job.id,
        resume = %application.resume_id,
        "applied to {} at {}",
        job.title,
        job.company
    );
    Ok(application)
}
