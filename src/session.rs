use crate::config::QuizConfig;
use crate::error::QuizError;
use crate::logger;
use crate::models::{Animal, Question, QuestionType};
use crate::progress::GameStats;
use crate::quiz::{generate_quiz_with_types, quiz_feedback, POINTS_PER_CORRECT};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Answering,
    ShowingResult,
    Complete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizAction {
    SelectAnswer(String),
    Next,
}

/// State of one quiz run, owned by the caller. The engine itself keeps nothing
/// between calls; every transition goes through this struct.
#[derive(Debug, Clone)]
pub struct QuizSession {
    pub questions: Vec<Question>,
    pub current_index: usize,
    pub score: u32,
    pub selected_answer: Option<String>,
    pub is_correct: Option<bool>,
    pub phase: QuizPhase,
    pub question_types: Vec<QuestionType>,
    pub started_at: chrono::DateTime<chrono::Local>,
}

impl QuizSession {
    pub fn start<R: Rng + ?Sized>(
        rng: &mut R,
        pool: &[Animal],
        config: &QuizConfig,
    ) -> Result<Self, QuizError> {
        let questions =
            generate_quiz_with_types(rng, pool, config.question_count, &config.question_types)?;
        let mut session = Self::from_questions(questions);
        session.question_types = config.question_types.clone();
        Ok(session)
    }

    pub fn from_questions(questions: Vec<Question>) -> Self {
        let phase = if questions.is_empty() {
            QuizPhase::Complete
        } else {
            QuizPhase::Answering
        };
        Self {
            questions,
            current_index: 0,
            score: 0,
            selected_answer: None,
            is_correct: None,
            phase,
            question_types: Vec::new(),
            started_at: chrono::Local::now(),
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    /// Fraction of the quiz reached, counting the question on screen.
    pub fn progress(&self) -> f32 {
        if self.questions.is_empty() {
            return 1.0;
        }
        (self.current_index + 1) as f32 / self.questions.len() as f32
    }

    /// Locks in an answer for the current question and returns whether it was
    /// right. Returns `None` when an answer is already locked in, the quiz is
    /// over, or `answer` is not one of the options.
    pub fn select_answer(&mut self, answer: &str, stats: &mut GameStats) -> Option<bool> {
        if self.phase != QuizPhase::Answering {
            return None;
        }
        let question = self.questions.get(self.current_index)?;
        if !question.options.iter().any(|o| o == answer) {
            return None;
        }

        let correct = question.is_correct(answer);
        if correct {
            self.score += POINTS_PER_CORRECT;
            stats.increment_correct_answers();
            stats.discover_animal(&question.subject_animal.id);
        } else {
            stats.increment_incorrect_answers();
        }

        self.selected_answer = Some(answer.to_string());
        self.is_correct = Some(correct);
        self.phase = QuizPhase::ShowingResult;
        Some(correct)
    }

    /// Moves past an answered question. On the last one the session completes
    /// and the game is recorded in `stats`. Returns false if nothing changed.
    pub fn next_question(&mut self, stats: &mut GameStats) -> bool {
        if self.phase != QuizPhase::ShowingResult {
            return false;
        }

        if self.current_index < self.questions.len().saturating_sub(1) {
            self.current_index += 1;
            self.selected_answer = None;
            self.is_correct = None;
            self.phase = QuizPhase::Answering;
        } else {
            self.phase = QuizPhase::Complete;
            stats.increment_games_played();
            stats.update_quiz_high_score(self.score);
            logger::log(&format!(
                "Quiz complete: {} points over {} questions",
                self.score,
                self.questions.len()
            ));
        }
        true
    }

    /// Throws the current batch away and starts over with a fresh one of the
    /// same length and type restriction.
    pub fn restart<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        pool: &[Animal],
    ) -> Result<(), QuizError> {
        let questions =
            generate_quiz_with_types(rng, pool, self.questions.len(), &self.question_types)?;
        let question_types = std::mem::take(&mut self.question_types);
        *self = Self::from_questions(questions);
        self.question_types = question_types;
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.phase == QuizPhase::Complete
    }

    pub fn feedback(&self) -> &'static str {
        quiz_feedback(self.score, self.questions.len())
    }
}

pub fn handle_quiz_action(
    session: &mut QuizSession,
    action: QuizAction,
    stats: &mut GameStats,
) -> QuizPhase {
    match action {
        QuizAction::SelectAnswer(answer) => {
            session.select_answer(&answer, stats);
        }
        QuizAction::Next => {
            session.next_question(stats);
        }
    }
    session.phase
}
