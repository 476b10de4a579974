use crate::models::QuestionType;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("cannot build a quiz from an empty animal pool")]
    EmptyPool,
    #[error("{question_type} question about {subject} needs {needed} candidate(s) but only {found} available")]
    InsufficientData {
        question_type: QuestionType,
        subject: String,
        needed: usize,
        found: usize,
    },
    #[error("question {id} has duplicate options or is missing its correct answer")]
    AmbiguousAnswer { id: String },
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: missing field `{field}`")]
    MissingField { line: usize, field: &'static str },
    #[error("line {line}: field `{field}` is empty")]
    EmptyField { line: usize, field: &'static str },
    #[error("line {line}: unknown category `{value}`")]
    UnknownCategory { line: usize, value: String },
    #[error("line {line}: unknown diet `{value}`")]
    UnknownDiet { line: usize, value: String },
    #[error("line {line}: duplicate id or name `{value}`")]
    Duplicate { line: usize, value: String },
    #[error("catalog contains no animals")]
    Empty,
}
