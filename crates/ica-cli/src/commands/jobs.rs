//! The `ica jobs` commands.

use anyhow::{Context, Result};
use clap::builder::RangedU64ValueParser;
use clap::Subcommand;
use comfy_table::{Cell, Table};

use ica_core::applications::apply_to_job;

use super::Session;

#[derive(Subcommand)]
pub enum JobsCommand {
    /// Show postings matching a role
    List {
        /// Role to match (defaults to the latest resume's role; "" lists all)
        #[arg(long)]
        role: Option<String>,

        /// Maximum postings to show
        #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
        limit: Option<usize>,
    },

    /// Apply to a posting with the latest resume
    Apply {
        /// Posting id, as shown by `ica jobs list`
        job_id: String,
    },
}

pub fn execute(session: &mut Session, command: JobsCommand) -> Result<()> {
    match command {
        JobsCommand::List { role, limit } => {
            list(session, role.as_deref(), limit);
            Ok(())
        }
        JobsCommand::Apply { job_id } => apply(session, &job_id),
    }
}

fn list(session: &Session, role: Option<&str>, limit: Option<usize>) {
    let role = session.resolve_role(role);
    let limit = limit.unwrap_or(session.config.display_limit);
    let matches = session.catalog.find_jobs_by_role(&role);

    if role.is_empty() {
        println!("All jobs");
    } else {
        println!("Jobs for: {role}");
    }
    if matches.is_empty() {
        println!("No jobs found");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Title", "Company", "Location", "Type", "Tags"]);
    for job in matches.iter().take(limit) {
        table.add_row(vec![
            Cell::new(&job.id),
            Cell::new(&job.title),
            Cell::new(&job.company),
            Cell::new(&job.location),
            Cell::new(job.job_type),
            Cell::new(job.tags.join(", ")),
        ]);
    }
    println!("{table}");

    if matches.len() > limit {
        println!("Showing {limit} of {} matching jobs.", matches.len());
    }
}

fn apply(session: &mut Session, job_id: &str) -> Result<()> {
    let job = session
        .catalog
        .job(job_id)
        .with_context(|| format!("no job with id '{job_id}'"))?
        .clone();

    let application = apply_to_job(&mut session.store, &job)?;
    println!(
        "Applied to {} at {} ({})",
        job.title, job.company, application.id
    );
    if application.resume_id.is_empty() {
        println!("No resume saved yet; the application has no resume attached.");
    }
    Ok(())
}
