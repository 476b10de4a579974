use crate::error::QuizError;
use crate::logger;
use crate::models::Animal;
use crate::progress::GameStats;
use crate::random::shuffle;
use rand::seq::SliceRandom;
use rand::Rng;

pub const MEMORY_PAIRS: usize = 8;
pub const MATCH_POINTS: u32 = 10;
pub const MISMATCH_PENALTY: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryCard {
    /// `{animal_id}-{0|1}`
    pub id: String,
    pub animal_id: String,
    pub image_url: String,
    pub is_flipped: bool,
    pub is_matched: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    Ignored,
    FirstCard,
    Match,
    Mismatch,
}

#[derive(Debug, Clone)]
pub struct MemoryGame {
    pub cards: Vec<MemoryCard>,
    pub matched_pairs: usize,
    pub moves: u32,
    pub score: u32,
    pub complete: bool,
    flipped: Vec<usize>,
    pending_mismatch: Vec<usize>,
}

impl MemoryGame {
    /// Deals two cards for each of up to [`MEMORY_PAIRS`] random animals.
    pub fn new<R: Rng + ?Sized>(rng: &mut R, pool: &[Animal]) -> Result<Self, QuizError> {
        if pool.is_empty() {
            return Err(QuizError::EmptyPool);
        }

        let mut cards: Vec<MemoryCard> = shuffle(rng, pool)
            .into_iter()
            .take(MEMORY_PAIRS)
            .flat_map(|animal| {
                (0..2).map(move |i| MemoryCard {
                    id: format!("{}-{}", animal.id, i),
                    animal_id: animal.id.clone(),
                    image_url: animal.image_url.clone(),
                    is_flipped: false,
                    is_matched: false,
                })
            })
            .collect();
        cards.shuffle(rng);

        Ok(Self {
            cards,
            matched_pairs: 0,
            moves: 0,
            score: 0,
            complete: false,
            flipped: Vec::new(),
            pending_mismatch: Vec::new(),
        })
    }

    pub fn total_pairs(&self) -> usize {
        self.cards.len() / 2
    }

    pub fn flip(&mut self, card_id: &str, stats: &mut GameStats) -> FlipOutcome {
        if self.complete {
            return FlipOutcome::Ignored;
        }
        let Some(index) = self.cards.iter().position(|c| c.id == card_id) else {
            return FlipOutcome::Ignored;
        };
        self.hide_mismatched();
        if self.cards[index].is_flipped || self.cards[index].is_matched {
            return FlipOutcome::Ignored;
        }

        self.cards[index].is_flipped = true;
        self.flipped.push(index);

        if self.flipped.len() < 2 {
            return FlipOutcome::FirstCard;
        }

        let (first, second) = (self.flipped[0], self.flipped[1]);
        self.flipped.clear();
        self.moves += 1;

        if self.cards[first].animal_id == self.cards[second].animal_id {
            self.cards[first].is_matched = true;
            self.cards[second].is_matched = true;
            self.matched_pairs += 1;
            self.score += MATCH_POINTS;
            stats.increment_correct_answers();
            stats.discover_animal(&self.cards[first].animal_id);

            if self.matched_pairs == self.total_pairs() {
                self.complete = true;
                stats.increment_games_played();
                stats.update_memory_high_score(self.score);
                logger::log(&format!(
                    "Memory game complete: {} points in {} moves",
                    self.score, self.moves
                ));
            }
            FlipOutcome::Match
        } else {
            self.score = self.score.saturating_sub(MISMATCH_PENALTY);
            stats.increment_incorrect_answers();
            self.pending_mismatch = vec![first, second];
            FlipOutcome::Mismatch
        }
    }

    /// Turns a mismatched pair face down again. Callers schedule this after
    /// showing the pair; the next flip does it implicitly.
    pub fn hide_mismatched(&mut self) {
        for index in self.pending_mismatch.drain(..) {
            self.cards[index].is_flipped = false;
        }
    }
}
