use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DEFAULT_SEED: u64 = 3819201;

/// Chooses among root actions that share the best value.
pub trait TieBreaker {
    /// Returns an index in `0..candidates`. `candidates` is never zero.
    fn pick(&mut self, candidates: usize) -> usize;

    /// Returns one of `items`, or `None` if there are none.
    fn choose<'a, K>(&mut self, items: &'a [K]) -> Option<&'a K> {
        if items.is_empty() {
            return None;
        }
        items.get(self.pick(items.len()))
    }
}

/// Always keeps the last best action in the oracle's order. Deterministic, and the default:
/// an action only displaces an earlier one of equal value, never the other way around.
#[derive(Debug, Default, Copy, Clone)]
pub struct LastSeen;

impl TieBreaker for LastSeen {
    fn pick(&mut self, candidates: usize) -> usize {
        candidates.saturating_sub(1)
    }
}

/// Always keeps the first best action in the oracle's order. Deterministic.
#[derive(Debug, Default, Copy, Clone)]
pub struct FirstSeen;

impl TieBreaker for FirstSeen {
    fn pick(&mut self, _candidates: usize) -> usize {
        0
    }
}

/// Picks uniformly at random among the best actions using the thread-local generator.
#[derive(Debug, Default, Copy, Clone)]
pub struct StandardRandomGenerator;

impl TieBreaker for StandardRandomGenerator {
    fn pick(&mut self, candidates: usize) -> usize {
        rand::rng().random_range(0..candidates)
    }
}

/// Picks uniformly at random among the best actions from a seeded generator, so runs can be
/// reproduced.
#[derive(Debug, Clone)]
pub struct SeededRandomGenerator {
    rng: StdRng,
}

impl SeededRandomGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for SeededRandomGenerator {
    fn default() -> Self {
        SeededRandomGenerator::new(DEFAULT_SEED)
    }
}

impl TieBreaker for SeededRandomGenerator {
    fn pick(&mut self, candidates: usize) -> usize {
        self.rng.random_range(0..candidates)
    }
}

#[cfg(test)]
mod tests {
    use crate::random::{
        FirstSeen, LastSeen, SeededRandomGenerator, StandardRandomGenerator, TieBreaker,
    };

    #[test]
    fn first_seen_keeps_first() {
        let vec = vec![432, 6542, 534];
        let mut tb = FirstSeen;
        assert_eq!(tb.choose(&vec), Some(&432));
        assert_eq!(tb.choose(&vec), Some(&432));
    }

    #[test]
    fn last_seen_keeps_last() {
        let vec = vec![432, 6542, 534];
        let mut tb = LastSeen;
        assert_eq!(tb.choose(&vec), Some(&534));
        assert_eq!(tb.choose(&vec[..1]), Some(&432));
    }

    #[test]
    fn empty_slice_has_no_choice() {
        let empty: Vec<u8> = Vec::new();
        assert_eq!(FirstSeen.choose(&empty), None);
        assert_eq!(LastSeen.choose(&empty), None);
        assert_eq!(StandardRandomGenerator.choose(&empty), None);
    }

    #[test]
    fn same_seed_same_picks() {
        let mut a = SeededRandomGenerator::new(42);
        let mut b = SeededRandomGenerator::new(42);
        let picks_a: Vec<usize> = (0..32).map(|_| a.pick(7)).collect();
        let picks_b: Vec<usize> = (0..32).map(|_| b.pick(7)).collect();
        assert_eq!(picks_a, picks_b);
        assert!(picks_a.iter().all(|&i| i < 7));
    }

    #[test]
    fn random_picks_cover_every_candidate() {
        let mut rg = SeededRandomGenerator::default();
        let mut seen = [false; 3];
        for _ in 0..300 {
            seen[rg.pick(3)] = true;
        }
        assert_eq!(seen, [true; 3]);

        let mut rg = StandardRandomGenerator;
        assert!((0..100).all(|_| rg.pick(5) < 5));
    }
}
