use super::heuristics::{self, MoveScore};
use super::Strategy;
use crate::tiles::Tiles;
use crate::{Board, Lexicon, Move};
use rand::{rngs::StdRng, SeedableRng};

/// Seed of the random generator, if none is given. Seeded to get reproducible games.
pub(super) const DEFAULT_SEED: u64 = 123;

/// A player that only looks one move ahead: of all legal moves, play the one with the
/// best score. On equal scores the first move found wins.
#[derive(Debug, Clone)]
pub struct OneLook {
    name: String,
    score: MoveScore,
    rng: StdRng,
}

impl OneLook {
    /// A one look player with a custom `score`.
    pub fn new(name: &str, score: MoveScore) -> OneLook {
        OneLook {
            name: String::from(name),
            score,
            rng: StdRng::seed_from_u64(DEFAULT_SEED),
        }
    }

    /// Plays the longest word
    pub fn longest_word() -> OneLook {
        OneLook::new("Longest Word One Look", heuristics::longest_word)
    }

    /// Plays the shortest word
    pub fn shortest_word() -> OneLook {
        OneLook::new("Shortest Word One Look", heuristics::shortest_word)
    }

    /// Plays the word with the most scrabble points
    pub fn scrabble() -> OneLook {
        OneLook::new("Scrabble One Look", heuristics::scrabble_points)
    }

    /// Seed the random generator, and return the modified player.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> OneLook {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }
}

impl Strategy for OneLook {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    fn next_moves(&mut self, lexicon: &Lexicon, board: &Board, hand: &Tiles) -> Option<Vec<Move>> {
        let moves = board.all_moves(lexicon, hand);
        let mut best: Option<(&Move, f64)> = None;
        for mv in moves.iter_moves() {
            let score = (self.score)(mv);
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((mv, score));
            }
        }
        best.map(|(mv, _)| vec![mv.clone()])
    }
}
