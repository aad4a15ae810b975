//! The `ica init` command.

use std::path::Path;

use anyhow::Result;

pub fn execute() -> Result<()> {
    if Path::new("ica.toml").exists() {
        println!("ica.toml already exists, skipping.");
    } else {
        std::fs::write("ica.toml", SAMPLE_CONFIG)?;
        println!("Created ica.toml");
    }

    std::fs::create_dir_all("catalogs")?;
    let example_path = Path::new("catalogs/example.toml");
    if example_path.exists() {
        println!("catalogs/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_CATALOG)?;
        println!("Created catalogs/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Run: ica validate --catalog catalogs/example.toml");
    println!("  2. Uncomment `catalog` in ica.toml to use it instead of the built-in jobs");
    println!("  3. Run: ica resume create --help");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# ica configuration

# Where resumes, applications and quiz attempts are kept.
# ICA_DATA_DIR and --data-dir override this.
data_dir = "./.ica"

# Role the job board and quiz use when no resume exists yet.
default_role = "Frontend Engineer"

# How many postings `ica jobs list` shows.
display_limit = 6

# Replace the built-in jobs and quizzes with a TOML catalog (file or directory).
# catalog = "catalogs"
"#;

const EXAMPLE_CATALOG: &str = r#"[[jobs]]
id = "job-101"
title = "Platform Engineer (Rust)"
company = "Rustworks"
location = "Remote"
type = "Remote"
role = "Platform Engineer"
tags = ["Rust", "Kubernetes", "Observability"]
description = "Keep the fleet healthy and the deploys boring."

[[jobs]]
id = "job-102"
title = "Frontend Engineer (Svelte)"
company = "Brightside"
location = "Pune, IN"
type = "Full-time"
role = "Frontend Engineer"
tags = ["Svelte", "TypeScript", "Accessibility"]
description = "Ship fast, accessible interfaces with a small product team."

[[quizzes]]
role = "Platform Engineer"

[[quizzes.questions]]
id = "pe-q1"
prompt = "Which signal asks a process to terminate gracefully?"
choices = ["SIGKILL", "SIGTERM", "SIGSTOP", "SIGHUP"]
answer_index = 1

[[quizzes.questions]]
id = "pe-q2"
prompt = "What does a Kubernetes readiness probe control?"
choices = [
    "Whether the container is restarted",
    "Whether the pod receives traffic",
    "How many replicas run",
    "Which node the pod lands on",
]
answer_index = 1
"#;
