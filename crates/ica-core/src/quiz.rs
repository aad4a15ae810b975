//! Role quiz lookup and scoring.

use std::collections::HashMap;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use tracing::info;

use crate::error::StoreError;
use crate::ids::{new_id, ATTEMPT_PREFIX};
use crate::model::{AnswerRecord, Quiz, QuizAttempt};
use crate::store::{KeyValueStore, LocalStore, QUIZ_ATTEMPTS_KEY};

/// Find the quiz for `role` (exact match, ignoring case).
pub fn lookup_quiz<'a>(quizzes: &'a [Quiz], role: &str) -> Option<&'a Quiz> {
    let key = role.to_lowercase();
    quizzes.iter().find(|q| q.role.to_lowercase() == key)
}

/// Score `answers` (question id → chosen index) against `quiz`.
///
/// Every question gets a record; unanswered questions are never correct.
pub fn score_attempt(
    quiz: &Quiz,
    answers: &HashMap<String, usize>,
    id: String,
    date: DateTime<Utc>,
) -> QuizAttempt {
    let records: Vec<AnswerRecord> = quiz
        .questions
        .iter()
        .map(|q| {
            let choice_index = answers.get(&q.id).copied();
            AnswerRecord {
                question_id: q.id.clone(),
                choice_index,
                correct: choice_index == Some(q.answer_index),
            }
        })
        .collect();

    let score = records.iter().filter(|r| r.correct).count() as u32;

    QuizAttempt {
        id,
        role: quiz.role.clone(),
        answers: records,
        score,
        total: quiz.questions.len() as u32,
        date,
    }
}

/// Score `answers`, stamp the attempt, and persist it.
pub fn submit_attempt<S: KeyValueStore>(
    store: &mut LocalStore<S>,
    quiz: &Quiz,
    answers: &HashMap<String, usize>,
) -> Result<QuizAttempt, StoreError> {
    let attempt = score_attempt(quiz, answers, new_id(ATTEMPT_PREFIX), Utc::now());
    store.append(QUIZ_ATTEMPTS_KEY, attempt.clone())?;
    info!(
        role = %attempt.role,
        score = attempt.score,
        total = attempt.total,
        "submitted quiz attempt"
    );
    Ok(attempt)
}

/// Percentage of correct answers, rounded. Zero for an empty quiz.
pub fn attempt_percent(attempt: &QuizAttempt) -> u32 {
    if attempt.total == 0 {
        return 0;
    }
    ((attempt.score as f64 / attempt.total as f64) * 100.0).round() as u32
}

/// Parse a `QUESTION_ID=INDEX` answer against `quiz`.
pub fn parse_answer(spec: &str, quiz: &Quiz) -> Result<(String, usize)> {
    let (question_id, index) = spec
        .split_once('=')
        .with_context(|| format!("answer '{spec}' must look like QUESTION_ID=INDEX"))?;
    let question_id = question_id.trim();
    let index: usize = index
        .trim()
        .parse()
        .with_context(|| format!("invalid choice index in '{spec}'"))?;

    let Some(question) = quiz.questions.iter().find(|q| q.id == question_id) else {
        bail!(
            "no question '{}' in the {} quiz",
            question_id,
            quiz.role
        );
    };
    if index >= question.choices.len() {
        bail!(
            "choice {} out of range for '{}' ({} choices)",
            index,
            question_id,
            question.choices.len()
        );
    }

    Ok((question_id.to_string(), index))
}
