//! ica CLI: resume builder, job board and role quizzes over a local store.

use std::path::PathBuf;
use std::process;

use clap::{ArgGroup, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::jobs::JobsCommand;
use commands::quiz::QuizCommand;
use commands::resume::ResumeCommand;
use commands::sidebar::SidebarAction;
use commands::Session;

#[derive(Parser)]
#[command(name = "ica", version, about = "Resume builder, job board and role quizzes")]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Data directory (overrides config and ICA_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a starter config and example catalog
    Init,

    /// Build and list resumes
    #[command(subcommand)]
    Resume(ResumeCommand),

    /// Browse and apply to jobs
    #[command(subcommand)]
    Jobs(JobsCommand),

    /// Role-based quizzes
    #[command(subcommand)]
    Quiz(QuizCommand),

    /// Show the dashboard
    Dashboard {
        /// Output format: text, json, markdown, html
        #[arg(long, default_value = "text")]
        format: String,

        /// Write to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Validate catalog TOML files
    Validate {
        /// Path to catalog file or directory
        #[arg(long)]
        catalog: PathBuf,
    },

    /// Show or change the sidebar preference
    #[command(group(ArgGroup::new("action").args(["collapse", "expand", "toggle"])))]
    Sidebar {
        #[arg(long)]
        collapse: bool,

        #[arg(long)]
        expand: bool,

        #[arg(long)]
        toggle: bool,
    },

    /// Remove all saved resumes, applications, attempts and preferences
    Reset,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ica=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let open = || Session::open(cli.config.as_deref(), cli.data_dir.clone());

    match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Validate { catalog } => commands::validate::execute(catalog),
        Commands::Resume(command) => commands::resume::execute(&mut open()?, command),
        Commands::Jobs(command) => commands::jobs::execute(&mut open()?, command),
        Commands::Quiz(command) => commands::quiz::execute(&mut open()?, command),
        Commands::Dashboard { format, output } => {
            commands::dashboard::execute(&open()?, format, output)
        }
        Commands::Sidebar {
            collapse,
            expand,
            toggle,
        } => {
            let action = if collapse {
                SidebarAction::Collapse
            } else if expand {
                SidebarAction::Expand
            } else if toggle {
                SidebarAction::Toggle
            } else {
                SidebarAction::Show
            };
            commands::sidebar::execute(&mut open()?, action)
        }
        Commands::Reset => commands::reset::execute(&mut open()?),
    }
}
