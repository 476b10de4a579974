use serde::{Deserialize, Serialize};

/// Lifetime statistics across all three games. Callers own persistence;
/// this type only serializes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStats {
    pub games_played: u32,
    pub correct_answers: u32,
    pub incorrect_answers: u32,
    pub memory_high_score: u32,
    pub quiz_high_score: u32,
    pub animals_discovered: Vec<String>,
}

impl GameStats {
    pub fn increment_games_played(&mut self) {
        self.games_played += 1;
    }

    pub fn increment_correct_answers(&mut self) {
        self.correct_answers += 1;
    }

    pub fn increment_incorrect_answers(&mut self) {
        self.incorrect_answers += 1;
    }

    pub fn update_memory_high_score(&mut self, score: u32) {
        self.memory_high_score = self.memory_high_score.max(score);
    }

    pub fn update_quiz_high_score(&mut self, score: u32) {
        self.quiz_high_score = self.quiz_high_score.max(score);
    }

    /// Records an animal as discovered. Repeated discoveries are ignored.
    pub fn discover_animal(&mut self, animal_id: &str) {
        if !self.animals_discovered.iter().any(|id| id == animal_id) {
            self.animals_discovered.push(animal_id.to_string());
        }
    }

    pub fn reset(&mut self) {
        *self = GameStats::default();
    }

    /// Share of correct answers in [0, 1]; 0 before anything was answered.
    pub fn accuracy(&self) -> f32 {
        let total = self.correct_answers + self.incorrect_answers;
        if total == 0 {
            0.0
        } else {
            self.correct_answers as f32 / total as f32
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Achievement {
    pub id: &'static str,
    pub title: &'static str,
    pub description: String,
    /// Clamped to [0, 1].
    pub progress: f32,
    pub completed: bool,
}

const GAMES_PLAYED_GOAL: u32 = 10;
const CORRECT_ANSWERS_GOAL: u32 = 20;
const MEMORY_SCORE_GOAL: u32 = 10;

pub fn achievements(stats: &GameStats, total_animals: usize) -> Vec<Achievement> {
    let discovered = stats.animals_discovered.len();

    vec![
        Achievement {
            id: "games_played",
            title: "Game Explorer",
            description: format!("Play {} games", GAMES_PLAYED_GOAL),
            progress: ratio(stats.games_played as usize, GAMES_PLAYED_GOAL as usize),
            completed: stats.games_played >= GAMES_PLAYED_GOAL,
        },
        Achievement {
            id: "animals_discovered",
            title: "Animal Enthusiast",
            description: format!("Discover {} animals", total_animals),
            progress: ratio(discovered, total_animals),
            completed: discovered >= total_animals,
        },
        Achievement {
            id: "correct_answers",
            title: "Knowledge Master",
            description: format!("Get {} correct answers", CORRECT_ANSWERS_GOAL),
            progress: ratio(stats.correct_answers as usize, CORRECT_ANSWERS_GOAL as usize),
            completed: stats.correct_answers >= CORRECT_ANSWERS_GOAL,
        },
        Achievement {
            id: "memory_score",
            title: "Memory Champion",
            description: format!("Score {} points in Memory Match", MEMORY_SCORE_GOAL),
            progress: ratio(stats.memory_high_score as usize, MEMORY_SCORE_GOAL as usize),
            completed: stats.memory_high_score >= MEMORY_SCORE_GOAL,
        },
    ]
}

fn ratio(value: usize, goal: usize) -> f32 {
    if goal == 0 {
        return 1.0;
    }
    (value as f32 / goal as f32).min(1.0)
}
