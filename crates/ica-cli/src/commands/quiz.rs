//! The `ica quiz` commands.

use std::collections::HashMap;

use anyhow::Result;
use clap::Subcommand;

use ica_core::dashboard::answer_marks;
use ica_core::quiz::{attempt_percent, parse_answer, submit_attempt};

use super::Session;

#[derive(Subcommand)]
pub enum QuizCommand {
    /// Print the quiz for a role
    Show {
        /// Quiz role (defaults to the latest resume's role)
        #[arg(long)]
        role: Option<String>,
    },

    /// Answer the quiz for a role and save the attempt
    Take {
        /// Quiz role (defaults to the latest resume's role)
        #[arg(long)]
        role: Option<String>,

        /// Answer as QUESTION_ID=INDEX, zero-based (repeatable)
        #[arg(long = "answer", value_name = "QUESTION_ID=INDEX")]
        answers: Vec<String>,
    },
}

const NO_QUIZ: &str = "No quiz available for this role.";

pub fn execute(session: &mut Session, command: QuizCommand) -> Result<()> {
    match command {
        QuizCommand::Show { role } => {
            show(session, role.as_deref());
            Ok(())
        }
        QuizCommand::Take { role, answers } => take(session, role.as_deref(), &answers),
    }
}

fn show(session: &Session, role: Option<&str>) {
    let role = session.resolve_role(role);
    let Some(quiz) = session.catalog.quiz_for_role(&role) else {
        println!("{NO_QUIZ}");
        return;
    };

    println!("{} Quiz", quiz.role);
    for (idx, q) in quiz.questions.iter().enumerate() {
        println!("\nQ{}. {} [{}]", idx + 1, q.prompt, q.id);
        for (i, choice) in q.choices.iter().enumerate() {
            println!("  {i}) {choice}");
        }
    }
}

fn take(session: &mut Session, role: Option<&str>, specs: &[String]) -> Result<()> {
    let role = session.resolve_role(role);
    let Some(quiz) = session.catalog.quiz_for_role(&role).cloned() else {
        println!("{NO_QUIZ}");
        return Ok(());
    };

    let answers = specs
        .iter()
        .map(|spec| parse_answer(spec, &quiz))
        .collect::<Result<HashMap<_, _>>>()?;

    let attempt = submit_attempt(&mut session.store, &quiz, &answers)?;
    println!(
        "Score: {}/{} ({}%)",
        attempt.score,
        attempt.total,
        attempt_percent(&attempt)
    );
    println!("{}", answer_marks(&attempt));
    Ok(())
}
