use crate::error::QuizError;
use crate::models::{Animal, Question, QuestionType};
use crate::quiz::generators::build_question;
use crate::random::shuffle;
use rand::seq::SliceRandom;
use rand::Rng;

pub const DEFAULT_QUESTION_COUNT: usize = 10;
pub const POINTS_PER_CORRECT: u32 = 10;

/// Builds `question_count` questions, each of a uniformly random type, with
/// subjects cycling through a shuffled copy of `pool`.
///
/// Subjects repeat once `question_count` exceeds the pool size. Generators that
/// cannot be satisfied by the pool degrade to category questions.
pub fn generate_quiz<R: Rng + ?Sized>(
    rng: &mut R,
    pool: &[Animal],
    question_count: usize,
) -> Result<Vec<Question>, QuizError> {
    generate_quiz_with_types(rng, pool, question_count, &QuestionType::ALL)
}

/// Same as [`generate_quiz`] with the type draw restricted to `types`.
/// An empty `types` slice means every type.
pub fn generate_quiz_with_types<R: Rng + ?Sized>(
    rng: &mut R,
    pool: &[Animal],
    question_count: usize,
    types: &[QuestionType],
) -> Result<Vec<Question>, QuizError> {
    if pool.is_empty() {
        return Err(QuizError::EmptyPool);
    }
    let types = if types.is_empty() {
        &QuestionType::ALL[..]
    } else {
        types
    };

    let working_order = shuffle(rng, pool);
    let mut questions = Vec::with_capacity(question_count);

    for i in 0..question_count {
        let question_type = *types.choose(rng).unwrap_or(&QuestionType::Category);
        let subject = &working_order[i % working_order.len()];
        let question = build_question(rng, question_type, subject, pool, i);
        debug_assert!(question.validate().is_ok(), "malformed question {:?}", question);
        questions.push(question);
    }

    Ok(questions)
}

/// Saturates at `u32::MAX` for oversized quizzes.
pub fn max_score(question_count: usize) -> u32 {
    u32::try_from(question_count)
        .unwrap_or(u32::MAX)
        .saturating_mul(POINTS_PER_CORRECT)
}

/// End-of-quiz message for a final `score` out of `question_count` questions.
pub fn quiz_feedback(score: u32, question_count: usize) -> &'static str {
    let count = u32::try_from(question_count).unwrap_or(u32::MAX);
    if score == max_score(question_count) {
        "Perfect! You are an animal expert!"
    } else if score >= count.saturating_mul(7) {
        "Great job! You know a lot about animals!"
    } else if score >= count.saturating_mul(5) {
        "Good effort! Keep learning about animals!"
    } else {
        "Keep practicing to learn more about animals!"
    }
}
