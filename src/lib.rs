pub mod catalog;
pub mod config;
pub mod csv;
pub mod error;
pub mod logger;
pub mod memory;
pub mod models;
pub mod progress;
pub mod quiz;
pub mod random;
pub mod session;
pub mod sorting;


// Re-exports for convenience
pub use catalog::{default_catalog, filter_animals, find_animal};
pub use config::QuizConfig;
pub use csv::{get_catalog_files, load_catalog, parse_catalog};
pub use error::{CatalogError, QuizError};
pub use memory::{FlipOutcome, MemoryCard, MemoryGame};
pub use models::{Animal, Category, Diet, Question, QuestionType};
pub use progress::{achievements, Achievement, GameStats};
pub use quiz::{build_question, generate_quiz, generate_quiz_with_types, quiz_feedback};
pub use random::{pick_random_excluding, shuffle};
pub use session::{handle_quiz_action, QuizAction, QuizPhase, QuizSession};
pub use sorting::{SortingAnimal, SortingGame};
