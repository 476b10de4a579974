pub mod builder;
pub mod generators;

pub use builder::{
    generate_quiz, generate_quiz_with_types, max_score, quiz_feedback, DEFAULT_QUESTION_COUNT,
    POINTS_PER_CORRECT,
};
pub use generators::{
    build_question, create_category_question, create_comparison_question, create_diet_question,
    create_fact_true_false_question, create_habitat_match_question, create_habitat_question,
    create_image_identification_question, false_statement, habitat_keyword, HABITAT_KEYWORDS,
};
