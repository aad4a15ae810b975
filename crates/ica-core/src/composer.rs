//! Resume composer: form input to a saved [`Resume`].
//!
//! Validation is a separate step from composition. Callers check
//! [`is_valid`] (or [`missing_fields`]) before offering a save, and
//! [`compose`] assumes the form already passed. [`save_resume`] does both.

use tracing::info;

use crate::error::ComposeError;
use crate::ids::{new_id, RESUME_PREFIX};
use crate::model::{Education, Experience, Resume};
use crate::store::{KeyValueStore, LocalStore, RESUMES_KEY};

/// How many skills the generated summary mentions.
pub const SUMMARY_SKILL_LIMIT: usize = 6;

/// Raw resume form input, one string per field.
#[derive(Debug, Clone, Default)]
pub struct ResumeForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub location: String,
    /// Comma-separated skills.
    pub skills: String,
    pub summary: String,
    pub experience: Vec<ExperienceForm>,
    pub education: Vec<Education>,
}

/// Raw input for one work history entry.
#[derive(Debug, Clone, Default)]
pub struct ExperienceForm {
    pub company: String,
    pub title: String,
    pub start: String,
    pub end: String,
    /// Left empty to have one generated on save.
    pub summary: String,
}

/// Names of the required fields that are empty, in form order.
pub fn missing_fields(form: &ResumeForm) -> Vec<&'static str> {
    let blank = |s: &str| s.trim().is_empty();
    let mut missing = Vec::new();

    if blank(&form.full_name) {
        missing.push("fullName");
    }
    if blank(&form.email) {
        missing.push("email");
    }
    if blank(&form.role) {
        missing.push("role");
    }
    if blank(&form.summary) {
        missing.push("summary");
    }
    match form.experience.first() {
        Some(first) => {
            if blank(&first.company) {
                missing.push("experience[0].company");
            }
            if blank(&first.title) {
                missing.push("experience[0].title");
            }
        }
        None => {
            missing.push("experience[0].company");
            missing.push("experience[0].title");
        }
    }

    missing
}

/// Whether every required field is filled in.
pub fn is_valid(form: &ResumeForm) -> bool {
    missing_fields(form).is_empty()
}

/// Title-case a name: split on commas and whitespace, capitalize each
/// token, lowercase the rest, join with single spaces.
pub fn smart_cap(name: &str) -> String {
    name.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(|token| {
            let mut chars = token.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Split a comma-separated skill list, trimming and dropping blanks.
pub fn parse_skills(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Templated profile summary for `role`, mentioning up to six skills.
pub fn generate_summary(role: &str, skills: &[String]) -> String {
    let lead = format!("Results-driven {role}");
    let body = " with a track record of delivering high-quality, accessible, and scalable solutions.";
    let tail = if skills.is_empty() {
        " Passionate about continuous learning and measurable outcomes.".to_string()
    } else {
        let listed: Vec<String> = skills
            .iter()
            .take(SUMMARY_SKILL_LIMIT)
            .map(|s| s.to_lowercase())
            .collect();
        format!(
            " Strengths include {} with a focus on impact and collaboration.",
            listed.join(", ")
        )
    };
    format!("{lead}{body}{tail}")
}

/// Templated summary for one work history entry.
pub fn generate_experience_summary(role: &str, company: &str) -> String {
    format!(
        "Led {} initiatives at {company}, improving key metrics by 15-30% through iterative delivery, cross-functional collaboration, and rigorous quality standards.",
        role.to_lowercase()
    )
}

fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn compose_experience(entry: &ExperienceForm) -> Experience {
    let company = entry.company.trim().to_string();
    let title = entry.title.trim().to_string();
    let summary = match non_empty(&entry.summary) {
        Some(s) => s,
        None => generate_experience_summary(&title, &company),
    };
    Experience {
        start: entry.start.trim().to_string(),
        end: non_empty(&entry.end),
        summary,
        company,
        title,
    }
}

/// Build a [`Resume`] from a validated form.
pub fn compose(form: &ResumeForm, id: String) -> Resume {
    Resume {
        id,
        full_name: smart_cap(form.full_name.trim()),
        email: form.email.trim().to_string(),
        phone: non_empty(&form.phone),
        role: form.role.trim().to_string(),
        location: non_empty(&form.location),
        skills: parse_skills(&form.skills),
        summary: form.summary.trim().to_string(),
        experience: form.experience.iter().map(compose_experience).collect(),
        education: (!form.education.is_empty()).then(|| form.education.clone()),
    }
}

/// Validate, compose with a fresh id, and prepend to the resume collection.
pub fn save_resume<S: KeyValueStore>(
    store: &mut LocalStore<S>,
    form: &ResumeForm,
) -> Result<Resume, ComposeError> {
    let missing = missing_fields(form);
    if !missing.is_empty() {
        return Err(ComposeError::Invalid { missing });
    }

    let resume = compose(form, new_id(RESUME_PREFIX));
    store.append(RESUMES_KEY, resume.clone())?;
    info!(id = %resume.id, role = %resume.role, "saved resume");
    Ok(resume)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn filled_form() -> ResumeForm {
        ResumeForm {
            full_name: "  alex SHARMA ".into(),
            email: " alex@example.com ".into(),
            phone: "".into(),
            role: "Frontend Engineer".into(),
            location: "Remote".into(),
            skills: "React, TypeScript, , Tailwind,React".into(),
            summary: "Builds accessible UIs.".into(),
            experience: vec![ExperienceForm {
                company: "NovaTech".into(),
                title: "Frontend Engineer".into(),
                start: "2022-01".into(),
                end: "Present".into(),
                summary: String::new(),
            }],
            education: vec![],
        }
    }

    #[test]
    fn smart_cap_normalizes_spacing_and_case() {
        assert_eq!(smart_cap("john   doe"), "John Doe");
        assert_eq!(smart_cap("MARY-ann o'neil"), "Mary-ann O'neil");
        assert_eq!(smart_cap("doe,john"), "Doe John");
        assert_eq!(smart_cap("   "), "");
    }

    #[test]
    fn skills_split_trim_and_keep_duplicates() {
        assert_eq!(
            parse_skills("React, TypeScript, , Tailwind,React"),
            vec!["React", "TypeScript", "Tailwind", "React"]
        );
        assert!(parse_skills("").is_empty());
        assert!(parse_skills(" , ,").is_empty());
    }

    #[test]
    fn summary_with_skills_lists_first_six_lowercased() {
        let skills = parse_skills("A, B, C, D, E, F, G");
        let summary = generate_summary("Data Analyst", &skills);
        assert_eq!(
            summary,
            "Results-driven Data Analyst with a track record of delivering high-quality, accessible, and scalable solutions. Strengths include a, b, c, d, e, f with a focus on impact and collaboration."
        );
    }

    #[test]
    fn summary_without_skills_uses_fallback_tail() {
        let summary = generate_summary("Backend Engineer", &[]);
        assert!(summary.starts_with("Results-driven Backend Engineer with a track record"));
        assert!(summary.ends_with(" Passionate about continuous learning and measurable outcomes."));
    }

    #[test]
    fn summary_is_deterministic() {
        let skills = parse_skills("Rust, SQL");
        assert_eq!(
            generate_summary("Backend Engineer", &skills),
            generate_summary("Backend Engineer", &skills)
        );
    }

    #[test]
    fn experience_summary_lowercases_role_only() {
        assert_eq!(
            generate_experience_summary("Frontend Engineer", "NovaTech"),
            "Led frontend engineer initiatives at NovaTech, improving key metrics by 15-30% through iterative delivery, cross-functional collaboration, and rigorous quality standards."
        );
    }

    #[test]
    fn missing_fields_reported_in_order() {
        let form = ResumeForm::default();
        assert_eq!(
            missing_fields(&form),
            vec![
                "fullName",
                "email",
                "role",
                "summary",
                "experience[0].company",
                "experience[0].title"
            ]
        );
        assert!(!is_valid(&form));
        assert!(is_valid(&filled_form()));
    }

    #[test]
    fn whitespace_only_fields_are_missing() {
        let mut form = filled_form();
        form.summary = "   ".into();
        assert_eq!(missing_fields(&form), vec!["summary"]);
    }

    #[test]
    fn compose_normalizes_fields() {
        let resume = compose(&filled_form(), "cv-test".into());
        assert_eq!(resume.id, "cv-test");
        assert_eq!(resume.full_name, "Alex Sharma");
        assert_eq!(resume.email, "alex@example.com");
        assert_eq!(resume.phone, None);
        assert_eq!(resume.location.as_deref(), Some("Remote"));
        assert_eq!(resume.skills, vec!["React", "TypeScript", "Tailwind", "React"]);
        assert_eq!(resume.experience.len(), 1);
        assert_eq!(resume.experience[0].end.as_deref(), Some("Present"));
        assert_eq!(
            resume.experience[0].summary,
            generate_experience_summary("Frontend Engineer", "NovaTech")
        );
        assert!(resume.education.is_none());
    }

    #[test]
    fn compose_keeps_written_experience_summary() {
        let mut form = filled_form();
        form.experience[0].summary = " Shipped the design system. ".into();
        let resume = compose(&form, "cv-1".into());
        assert_eq!(resume.experience[0].summary, "Shipped the design system.");
    }

    #[test]
    fn save_rejects_invalid_form_without_writing() {
        let mut store = LocalStore::new(MemoryStore::new());
        let mut form = filled_form();
        form.email.clear();

        let err = save_resume(&mut store, &form).unwrap_err();
        assert!(matches!(err, ComposeError::Invalid { ref missing } if missing == &vec!["email"]));
        assert!(store.resumes().is_empty());
    }

    #[test]
    fn save_persists_most_recent_first() {
        let mut store = LocalStore::new(MemoryStore::new());
        let first = save_resume(&mut store, &filled_form()).unwrap();
        let mut form = filled_form();
        form.role = "Data Analyst".into();
        let second = save_resume(&mut store, &form).unwrap();

        assert_ne!(first.id, second.id);
        assert!(second.id.starts_with("cv-"));
        let saved = store.resumes();
        assert_eq!(saved, vec![second, first]);
    }
}
