//! CLI integration tests using assert_cmd.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `ica` running inside `dir`, isolated from the user's config and env.
fn ica(dir: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("ica").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env_remove("ICA_DATA_DIR")
        .env_remove("RUST_LOG");
    cmd
}

fn create_resume(dir: &Path, role: &str) {
    ica(dir)
        .args(["resume", "create"])
        .args(["--full-name", "jane   doe"])
        .args(["--email", "jane@example.com"])
        .args(["--role", role])
        .args(["--skills", "SQL, Python"])
        .arg("--generate-summary")
        .args(["--company", "InsightLabs"])
        .args(["--title", role])
        .args(["--start", "2021-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved resume cv-"))
        .stdout(predicate::str::contains("Jane Doe"));
}

#[test]
fn help_output() {
    let dir = TempDir::new().unwrap();
    ica(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Resume builder, job board and role quizzes"));
}

#[test]
fn version_output() {
    let dir = TempDir::new().unwrap();
    ica(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ica"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    ica(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created ica.toml"))
        .stdout(predicate::str::contains("Created catalogs/example.toml"));

    assert!(dir.path().join("ica.toml").exists());
    assert!(dir.path().join("catalogs/example.toml").exists());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    ica(dir.path()).arg("init").assert().success();

    ica(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn init_catalog_validates() {
    let dir = TempDir::new().unwrap();
    ica(dir.path()).arg("init").assert().success();

    ica(dir.path())
        .args(["validate", "--catalog", "catalogs/example.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Catalog: 2 jobs, 1 quizzes"))
        .stdout(predicate::str::contains("All catalogs valid."));
}

#[test]
fn validate_reports_warnings() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("dupes.toml"),
        r#"
[[jobs]]
id = "job-1"
title = "A"
company = "C"
type = "Contract"
role = "Data Analyst"

[[jobs]]
id = "job-1"
title = "B"
company = "C"
type = "Remote"
role = "Data Analyst"
"#,
    )
    .unwrap();

    ica(dir.path())
        .args(["validate", "--catalog", "dupes.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[job-1] WARNING: duplicate job ID"))
        .stdout(predicate::str::contains("1 warning(s) found."));
}

#[test]
fn validate_directory_rejects_quiz_role_defined_twice() {
    let dir = TempDir::new().unwrap();
    let catalogs = dir.path().join("cat");
    std::fs::create_dir(&catalogs).unwrap();
    let quiz = r#"
[[quizzes]]
role = "Ops"

[[quizzes.questions]]
id = "ops-q1"
prompt = "What restarts a failed unit?"
choices = ["systemd", "cron"]
answer_index = 0
"#;
    std::fs::write(catalogs.join("a.toml"), quiz).unwrap();
    std::fs::write(catalogs.join("b.toml"), quiz.replace("ops-q1", "ops-q2")).unwrap();

    ica(dir.path())
        .args(["validate", "--catalog", "cat"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("All catalogs valid.").not())
        .stderr(predicate::str::contains("more than one quiz for role 'Ops'"));
}

#[test]
fn validate_nonexistent_file() {
    let dir = TempDir::new().unwrap();
    ica(dir.path())
        .args(["validate", "--catalog", "nonexistent.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn resume_create_rejects_incomplete_form() {
    let dir = TempDir::new().unwrap();
    ica(dir.path())
        .args(["resume", "create", "--full-name", "Jane"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing: email, role, summary"));

    ica(dir.path())
        .args(["resume", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No resumes yet."));
}

#[test]
fn resume_create_then_list() {
    let dir = TempDir::new().unwrap();
    create_resume(dir.path(), "Data Analyst");

    ica(dir.path())
        .args(["resume", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jane Doe"))
        .stdout(predicate::str::contains("SQL, Python"));

    assert!(dir.path().join(".ica/ica.resumes.json").exists());
}

#[test]
fn resume_summary_prints_template() {
    let dir = TempDir::new().unwrap();
    ica(dir.path())
        .args(["resume", "summary", "--role", "Backend Engineer", "--skills", "Rust, SQL"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Results-driven Backend Engineer with a track record",
        ))
        .stdout(predicate::str::contains("Strengths include rust, sql"));
}

#[test]
fn jobs_list_defaults_to_frontend() {
    let dir = TempDir::new().unwrap();
    ica(dir.path())
        .args(["jobs", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jobs for: Frontend Engineer"))
        .stdout(predicate::str::contains("NovaTech"))
        .stdout(predicate::str::contains("DataForge").not());
}

#[test]
fn jobs_list_follows_latest_resume_role() {
    let dir = TempDir::new().unwrap();
    create_resume(dir.path(), "Data Analyst");

    ica(dir.path())
        .args(["jobs", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jobs for: Data Analyst"))
        .stdout(predicate::str::contains("InsightLabs"));
}

#[test]
fn jobs_list_substring_and_empty_results() {
    let dir = TempDir::new().unwrap();
    ica(dir.path())
        .args(["jobs", "list", "--role", "engineer"])
        .assert()
        .success()
        .stdout(predicate::str::contains("NovaTech"))
        .stdout(predicate::str::contains("DataForge"));

    ica(dir.path())
        .args(["jobs", "list", "--role", "astronaut"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No jobs found"));
}

#[test]
fn jobs_list_respects_limit() {
    let dir = TempDir::new().unwrap();
    ica(dir.path())
        .args(["jobs", "list", "--role", "engineer", "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 1 of 2 matching jobs."));
}

#[test]
fn jobs_list_empty_role_shows_every_posting() {
    let dir = TempDir::new().unwrap();
    create_resume(dir.path(), "Data Analyst");

    ica(dir.path())
        .args(["jobs", "list", "--role", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains("All jobs"))
        .stdout(predicate::str::contains("NovaTech"))
        .stdout(predicate::str::contains("DataForge"))
        .stdout(predicate::str::contains("InsightLabs"))
        .stdout(predicate::str::contains("job-3"))
        .stdout(predicate::str::contains("Showing").not());
}

#[test]
fn jobs_list_rejects_zero_limit() {
    let dir = TempDir::new().unwrap();
    ica(dir.path())
        .args(["jobs", "list", "--limit", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--limit"));
}

#[test]
fn jobs_apply_records_application() {
    let dir = TempDir::new().unwrap();
    ica(dir.path())
        .args(["jobs", "apply", "job-2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Applied to Backend Engineer (Node.js) at DataForge"))
        .stdout(predicate::str::contains("no resume attached"));

    ica(dir.path())
        .args(["dashboard", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"applicationCount\": 1"))
        .stdout(predicate::str::contains("\"resumeId\": \"\""));
}

#[test]
fn jobs_apply_unknown_id_fails() {
    let dir = TempDir::new().unwrap();
    ica(dir.path())
        .args(["jobs", "apply", "job-99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no job with id 'job-99'"));
}

#[test]
fn quiz_show_and_missing_quiz() {
    let dir = TempDir::new().unwrap();
    ica(dir.path())
        .args(["quiz", "show", "--role", "backend engineer"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Backend Engineer Quiz"))
        .stdout(predicate::str::contains("[be-q1]"))
        .stdout(predicate::str::contains("1) 201"));

    ica(dir.path())
        .args(["quiz", "show", "--role", "Data Analyst"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No quiz available for this role."));
}

#[test]
fn quiz_take_scores_and_saves() {
    let dir = TempDir::new().unwrap();
    ica(dir.path())
        .args(["quiz", "take", "--role", "Frontend Engineer"])
        .args(["--answer", "fe-q1=2", "--answer", "fe-q2=1", "--answer", "fe-q3=0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 2/3 (67%)"))
        .stdout(predicate::str::contains("Q1:✓ Q2:✓ Q3:✕"));

    ica(dir.path())
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("67%"))
        .stdout(predicate::str::contains("Frontend Engineer Quiz"));
}

#[test]
fn quiz_take_rejects_bad_answer() {
    let dir = TempDir::new().unwrap();
    ica(dir.path())
        .args(["quiz", "take", "--answer", "fe-q1=9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn dashboard_empty_state() {
    let dir = TempDir::new().unwrap();
    ica(dir.path())
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("No resumes yet."))
        .stdout(predicate::str::contains("No applications yet."))
        .stdout(predicate::str::contains("No attempts yet."));
}

#[test]
fn dashboard_markdown_and_html() {
    let dir = TempDir::new().unwrap();
    ica(dir.path()).args(["jobs", "apply", "job-4"]).assert().success();

    ica(dir.path())
        .args(["dashboard", "--format", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("| 0 | 1 | 0 | 0% |"))
        .stdout(predicate::str::contains("| Data Analyst | InsightLabs | Gurugram, IN | Applied |"));

    ica(dir.path())
        .args(["dashboard", "--format", "html", "--output", "out/dash.html"])
        .assert()
        .success()
        .stdout(predicate::str::contains("HTML dashboard"));
    let html = std::fs::read_to_string(dir.path().join("out/dash.html")).unwrap();
    assert!(html.contains("InsightLabs"));
}

#[test]
fn dashboard_unknown_format_fails() {
    let dir = TempDir::new().unwrap();
    ica(dir.path())
        .args(["dashboard", "--format", "pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format 'pdf'"));
}

#[test]
fn sidebar_toggle_persists() {
    let dir = TempDir::new().unwrap();
    ica(dir.path())
        .arg("sidebar")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sidebar: expanded"));

    ica(dir.path())
        .args(["sidebar", "--toggle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sidebar: collapsed"));

    ica(dir.path())
        .arg("sidebar")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sidebar: collapsed"));

    ica(dir.path())
        .args(["sidebar", "--expand"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sidebar: expanded"));
}

#[test]
fn sidebar_flags_conflict() {
    let dir = TempDir::new().unwrap();
    ica(dir.path())
        .args(["sidebar", "--collapse", "--expand"])
        .assert()
        .failure();
}

#[test]
fn reset_clears_everything() {
    let dir = TempDir::new().unwrap();
    create_resume(dir.path(), "Backend Engineer");
    ica(dir.path()).args(["jobs", "apply", "job-2"]).assert().success();

    ica(dir.path())
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed all saved data"));

    ica(dir.path())
        .args(["dashboard", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"resumeCount\": 0"))
        .stdout(predicate::str::contains("\"applicationCount\": 0"));
}

#[test]
fn data_dir_flag_and_env_override_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("ica.toml"), "data_dir = \"from-config\"\n").unwrap();

    ica(dir.path()).args(["jobs", "apply", "job-1"]).assert().success();
    assert!(dir.path().join("from-config/ica.applications.json").exists());

    ica(dir.path())
        .env("ICA_DATA_DIR", dir.path().join("from-env"))
        .args(["jobs", "apply", "job-1"])
        .assert()
        .success();
    assert!(dir.path().join("from-env/ica.applications.json").exists());

    ica(dir.path())
        .env("ICA_DATA_DIR", dir.path().join("from-env"))
        .args(["--data-dir", "from-flag", "jobs", "apply", "job-1"])
        .assert()
        .success();
    assert!(dir.path().join("from-flag/ica.applications.json").exists());
}

#[test]
fn config_catalog_replaces_builtin_jobs() {
    let dir = TempDir::new().unwrap();
    ica(dir.path()).arg("init").assert().success();
    std::fs::write(
        dir.path().join("ica.toml"),
        "catalog = \"catalogs/example.toml\"\ndefault_role = \"Platform Engineer\"\n",
    )
    .unwrap();

    ica(dir.path())
        .args(["jobs", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rustworks"));

    ica(dir.path())
        .args(["quiz", "take", "--answer", "pe-q1=1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 1/2 (50%)"));
}

#[test]
fn missing_explicit_config_fails() {
    let dir = TempDir::new().unwrap();
    ica(dir.path())
        .args(["--config", "nope.toml", "jobs", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}
