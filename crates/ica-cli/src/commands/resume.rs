//! The `ica resume` commands.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use comfy_table::{Cell, Table};

use ica_core::composer::{generate_summary, parse_skills, save_resume, ExperienceForm, ResumeForm};
use ica_core::model::Education;
use ica_core::ComposeError;

use super::Session;

#[derive(Subcommand)]
pub enum ResumeCommand {
    /// Compose and save a resume
    Create(CreateArgs),

    /// List saved resumes, most recent first
    List,

    /// Print the generated profile summary for a role and skills
    Summary {
        /// Target role
        #[arg(long)]
        role: String,

        /// Comma-separated skills
        #[arg(long, default_value = "")]
        skills: String,
    },
}

#[derive(Args)]
pub struct CreateArgs {
    #[arg(long, default_value = "")]
    full_name: String,

    #[arg(long, default_value = "")]
    email: String,

    #[arg(long, default_value = "")]
    phone: String,

    /// Target role
    #[arg(long, default_value = "")]
    role: String,

    #[arg(long, default_value = "")]
    location: String,

    /// Comma-separated skills
    #[arg(long, default_value = "")]
    skills: String,

    /// Profile summary
    #[arg(long, default_value = "")]
    summary: String,

    /// Fill an empty summary from the role and skills
    #[arg(long)]
    generate_summary: bool,

    /// Most recent employer
    #[arg(long, default_value = "")]
    company: String,

    /// Title held at --company
    #[arg(long, default_value = "")]
    title: String,

    #[arg(long, default_value = "")]
    start: String,

    #[arg(long, default_value = "")]
    end: String,

    /// Summary of the role at --company (generated when empty)
    #[arg(long, default_value = "")]
    experience_summary: String,

    /// Education entry as SCHOOL|DEGREE|YEAR (repeatable)
    #[arg(long = "education", value_name = "SCHOOL|DEGREE|YEAR")]
    education: Vec<String>,
}

pub fn execute(session: &mut Session, command: ResumeCommand) -> Result<()> {
    match command {
        ResumeCommand::Create(args) => create(session, args),
        ResumeCommand::List => {
            list(session);
            Ok(())
        }
        ResumeCommand::Summary { role, skills } => {
            println!("{}", generate_summary(role.trim(), &parse_skills(&skills)));
            Ok(())
        }
    }
}

fn parse_education(spec: &str) -> Result<Education> {
    let parts: Vec<&str> = spec.split('|').map(str::trim).collect();
    let [school, degree, year] = parts.as_slice() else {
        bail!("education '{spec}' must look like SCHOOL|DEGREE|YEAR");
    };
    Ok(Education {
        school: school.to_string(),
        degree: degree.to_string(),
        year: year.to_string(),
    })
}

fn create(session: &mut Session, args: CreateArgs) -> Result<()> {
    let education = args
        .education
        .iter()
        .map(|e| parse_education(e))
        .collect::<Result<Vec<_>>>()?;

    let mut form = ResumeForm {
        full_name: args.full_name,
        email: args.email,
        phone: args.phone,
        role: args.role,
        location: args.location,
        skills: args.skills,
        summary: args.summary,
        experience: vec![ExperienceForm {
            company: args.company,
            title: args.title,
            start: args.start,
            end: args.end,
            summary: args.experience_summary,
        }],
        education,
    };

    if args.generate_summary && form.summary.trim().is_empty() {
        form.summary = generate_summary(form.role.trim(), &parse_skills(&form.skills));
    }

    match save_resume(&mut session.store, &form) {
        Ok(resume) => {
            println!("Saved resume {} ({}, {})", resume.id, resume.full_name, resume.role);
            Ok(())
        }
        Err(ComposeError::Invalid { missing }) => {
            bail!("resume is incomplete, missing: {}", missing.join(", "))
        }
        Err(e) => Err(e.into()),
    }
}

fn list(session: &Session) {
    let resumes = session.store.resumes();
    if resumes.is_empty() {
        println!("No resumes yet.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Name", "Role", "Location", "Skills"]);
    for r in &resumes {
        table.add_row(vec![
            Cell::new(&r.id),
            Cell::new(&r.full_name),
            Cell::new(&r.role),
            Cell::new(r.location.as_deref().unwrap_or("Remote")),
            Cell::new(r.skills.join(", ")),
        ]);
    }
    println!("{table}");
}
