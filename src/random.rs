use crate::models::Animal;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Returns a uniformly shuffled copy of `items`. The input is left untouched.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(rng: &mut R, items: &[T]) -> Vec<T> {
    let mut shuffled = items.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// Picks up to `count` distinct animals from `pool`, never `exclude`, in random order.
///
/// Identity is the animal `id`, so a pool carrying the same animal twice still
/// yields it at most once. Returns fewer than `count` when the pool runs out.
pub fn pick_random_excluding<'a, R: Rng + ?Sized>(
    rng: &mut R,
    exclude: &Animal,
    count: usize,
    pool: &'a [Animal],
) -> Vec<&'a Animal> {
    let mut seen = HashSet::new();
    let mut candidates: Vec<&Animal> = pool
        .iter()
        .filter(|a| a.id != exclude.id)
        .filter(|a| seen.insert(a.id.as_str()))
        .collect();

    candidates.shuffle(rng);
    candidates.truncate(count);
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Diet};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn animal(id: &str) -> Animal {
        Animal {
            id: id.to_string(),
            name: id.to_uppercase(),
            category: Category::Mammal,
            diet: Diet::Herbivore,
            habitat: "Forest".to_string(),
            fun_fact: "Animals are great.".to_string(),
            image_url: format!("{}.png", id),
        }
    }

    fn pool() -> Vec<Animal> {
        ["a", "b", "c", "d", "e"].iter().map(|id| animal(id)).collect()
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(11);
        let input: Vec<u32> = (0..50).collect();
        let mut output = shuffle(&mut rng, &input);

        assert_eq!(output.len(), input.len());
        output.sort();
        assert_eq!(output, input);
    }

    #[test]
    fn test_shuffle_does_not_mutate_input() {
        let mut rng = StdRng::seed_from_u64(3);
        let input = vec!["x", "y", "z"];
        let _ = shuffle(&mut rng, &input);
        assert_eq!(input, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_shuffle_empty() {
        let mut rng = StdRng::seed_from_u64(0);
        let empty: Vec<u8> = Vec::new();
        assert!(shuffle(&mut rng, &empty).is_empty());
    }

    #[test]
    fn test_shuffle_same_seed_same_order() {
        let input: Vec<u32> = (0..20).collect();
        let first = shuffle(&mut StdRng::seed_from_u64(99), &input);
        let second = shuffle(&mut StdRng::seed_from_u64(99), &input);
        assert_eq!(first, second);
    }

    #[test]
    fn test_pick_never_returns_excluded() {
        let pool = pool();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let picked = pick_random_excluding(&mut rng, &pool[2], 3, &pool);
            assert_eq!(picked.len(), 3);
            assert!(picked.iter().all(|a| a.id != "c"));
        }
    }

    #[test]
    fn test_pick_returns_no_duplicates() {
        let mut pool = pool();
        pool.push(animal("b"));
        pool.push(animal("d"));
        let mut rng = StdRng::seed_from_u64(5);

        let picked = pick_random_excluding(&mut rng, &pool[0], 10, &pool);
        let ids: HashSet<&str> = picked.iter().map(|a| a.id.as_str()).collect();

        assert_eq!(ids.len(), picked.len());
        assert_eq!(picked.len(), 4);
    }

    #[test]
    fn test_pick_returns_min_of_count_and_pool() {
        let pool = pool();
        let mut rng = StdRng::seed_from_u64(8);

        assert_eq!(pick_random_excluding(&mut rng, &pool[0], 2, &pool).len(), 2);
        assert_eq!(pick_random_excluding(&mut rng, &pool[0], 4, &pool).len(), 4);
        assert_eq!(pick_random_excluding(&mut rng, &pool[0], 9, &pool).len(), 4);
        assert!(pick_random_excluding(&mut rng, &pool[0], 0, &pool).is_empty());
    }

    #[test]
    fn test_pick_from_pool_of_only_excluded() {
        let pool = vec![animal("solo")];
        let mut rng = StdRng::seed_from_u64(1);
        assert!(pick_random_excluding(&mut rng, &pool[0], 3, &pool).is_empty());
    }
}
