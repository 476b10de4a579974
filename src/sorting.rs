use crate::error::QuizError;
use crate::logger;
use crate::models::{Animal, Category};
use crate::progress::GameStats;
use crate::random::shuffle;
use rand::Rng;

pub const SORTING_ANIMALS: usize = 12;
pub const SORTING_TIME_LIMIT_SECS: u32 = 60;
pub const SORT_POINTS: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortingAnimal {
    pub animal: Animal,
    pub sorted: bool,
    pub correct_category: bool,
}

/// Timed round of dropping animals into their category. The clock is advanced
/// by the caller through [`SortingGame::tick`].
#[derive(Debug, Clone)]
pub struct SortingGame {
    pub animals: Vec<SortingAnimal>,
    pub selected: Option<usize>,
    pub score: u32,
    pub time_left: u32,
    pub active: bool,
    pub complete: bool,
}

impl SortingGame {
    pub fn new<R: Rng + ?Sized>(rng: &mut R, pool: &[Animal]) -> Result<Self, QuizError> {
        if pool.is_empty() {
            return Err(QuizError::EmptyPool);
        }

        let animals = shuffle(rng, pool)
            .into_iter()
            .take(SORTING_ANIMALS)
            .map(|animal| SortingAnimal {
                animal,
                sorted: false,
                correct_category: false,
            })
            .collect();

        Ok(Self {
            animals,
            selected: None,
            score: 0,
            time_left: SORTING_TIME_LIMIT_SECS,
            active: true,
            complete: false,
        })
    }

    /// Picks up an unsorted animal. Returns false if the game is over or the
    /// animal is unknown or already sorted.
    pub fn select_animal(&mut self, animal_id: &str) -> bool {
        if !self.active {
            return false;
        }
        match self
            .animals
            .iter()
            .position(|a| a.animal.id == animal_id && !a.sorted)
        {
            Some(index) => {
                self.selected = Some(index);
                true
            }
            None => false,
        }
    }

    /// Drops the selected animal into `category`. Returns whether it was the
    /// right one, or `None` when nothing is selected.
    pub fn assign_category(&mut self, category: Category, stats: &mut GameStats) -> Option<bool> {
        if !self.active {
            return None;
        }
        let index = self.selected.take()?;
        let entry = &mut self.animals[index];
        let correct = entry.animal.category == category;
        entry.sorted = true;
        entry.correct_category = correct;

        if correct {
            self.score += SORT_POINTS;
            stats.increment_correct_answers();
            stats.discover_animal(&entry.animal.id);
        } else {
            stats.increment_incorrect_answers();
        }

        if self.animals.iter().all(|a| a.sorted) {
            self.end_game(stats);
        }
        Some(correct)
    }

    pub fn tick(&mut self, elapsed_secs: u32, stats: &mut GameStats) {
        if !self.active {
            return;
        }
        self.time_left = self.time_left.saturating_sub(elapsed_secs);
        if self.time_left == 0 {
            self.end_game(stats);
        }
    }

    fn end_game(&mut self, stats: &mut GameStats) {
        if !self.active {
            return;
        }
        self.active = false;
        self.complete = true;
        self.selected = None;
        stats.increment_games_played();
        logger::log(&format!(
            "Sorting game over: {} points, {}s left",
            self.score, self.time_left
        ));
    }

    pub fn feedback(&self) -> &'static str {
        sorting_feedback(self.score)
    }
}

pub fn sorting_feedback(score: u32) -> &'static str {
    if score >= 100 {
        "Amazing! You are a sorting master!"
    } else if score >= 70 {
        "Great job! You know your animal categories!"
    } else if score >= 40 {
        "Good effort! Keep learning about animals!"
    } else {
        "Keep practicing to learn more about animal categories!"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Diet;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pool(size: usize) -> Vec<Animal> {
        (0..size)
            .map(|i| Animal {
                id: format!("a{}", i),
                name: format!("Animal {}", i),
                category: Category::ALL[i % Category::ALL.len()],
                diet: Diet::Omnivore,
                habitat: "Forest".to_string(),
                fun_fact: "Animals are neat.".to_string(),
                image_url: String::new(),
            })
            .collect()
    }

    #[test]
    fn test_takes_at_most_twelve_animals() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(SortingGame::new(&mut rng, &pool(20)).unwrap().animals.len(), 12);
        assert_eq!(SortingGame::new(&mut rng, &pool(5)).unwrap().animals.len(), 5);
        assert!(matches!(SortingGame::new(&mut rng, &[]), Err(QuizError::EmptyPool)));
    }

    #[test]
    fn test_assign_requires_selection() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut game = SortingGame::new(&mut rng, &pool(3)).unwrap();
        let mut stats = GameStats::default();

        assert_eq!(game.assign_category(Category::Bird, &mut stats), None);
        assert!(!game.select_animal("nope"));
    }

    #[test]
    fn test_correct_and_wrong_sorts() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut game = SortingGame::new(&mut rng, &pool(3)).unwrap();
        let mut stats = GameStats::default();

        // a0 is a mammal, a1 a bird.
        assert!(game.select_animal("a0"));
        assert_eq!(game.assign_category(Category::Mammal, &mut stats), Some(true));
        assert!(game.select_animal("a1"));
        assert_eq!(game.assign_category(Category::Fish, &mut stats), Some(false));

        assert_eq!(game.score, SORT_POINTS);
        assert_eq!(stats.correct_answers, 1);
        assert_eq!(stats.incorrect_answers, 1);
        assert_eq!(stats.animals_discovered, vec!["a0"]);
        assert!(!game.select_animal("a0"));
        assert!(game.active);
    }

    #[test]
    fn test_sorting_everything_ends_the_game_once() {
        let mut rng = StdRng::seed_from_u64(4);
        let animals = pool(2);
        let mut game = SortingGame::new(&mut rng, &animals).unwrap();
        let mut stats = GameStats::default();

        for animal in &animals {
            game.select_animal(&animal.id);
            game.assign_category(animal.category, &mut stats);
        }
        assert!(game.complete);
        assert!(!game.active);

        game.tick(SORTING_TIME_LIMIT_SECS, &mut stats);
        assert_eq!(stats.games_played, 1);
        assert!(!game.select_animal("a0"));
    }

    #[test]
    fn test_clock_runs_out() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut game = SortingGame::new(&mut rng, &pool(6)).unwrap();
        let mut stats = GameStats::default();

        game.tick(45, &mut stats);
        assert_eq!(game.time_left, 15);
        assert!(game.active);

        game.tick(20, &mut stats);
        assert_eq!(game.time_left, 0);
        assert!(game.complete);
        assert_eq!(stats.games_played, 1);
        assert_eq!(game.feedback(), "Keep practicing to learn more about animal categories!");
    }

    #[test]
    fn test_sorting_feedback_thresholds() {
        assert_eq!(sorting_feedback(120), "Amazing! You are a sorting master!");
        assert_eq!(sorting_feedback(70), "Great job! You know your animal categories!");
        assert_eq!(sorting_feedback(40), "Good effort! Keep learning about animals!");
        assert_eq!(sorting_feedback(0), "Keep practicing to learn more about animal categories!");
    }
}
