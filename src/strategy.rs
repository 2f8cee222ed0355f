//! Automated players: choose what to do with a board and a hand.
//!
//! Every player implements [`Strategy`]. A strategy plans a sequence of moves with
//! [`next_moves`](Strategy::next_moves), and turns the plan into a [`Decision`] with
//! [`decide`](Strategy::decide). The game itself is not part of this crate: the caller
//! applies the decision, and supplies the [`Context`] a strategy needs to estimate
//! what a dump or a peel would bring.
mod astar;
mod greedy;
pub mod heuristics;
mod sampling;

pub use astar::{AStar, AStarConfig};
pub use greedy::OneLook;
pub use sampling::{Sampling, SamplingConfig};

use crate::tiles::{Letter, Tiles};
use crate::{Board, Lexicon, Move, TileBag};
use log::debug;
use rand::{rngs::StdRng, Rng};
use std::fmt;

/// What a player wants to do this turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Play these moves, in order
    Play(Vec<Move>),
    /// Return this tile to the pool, and draw two
    Discard(Letter),
    /// The hand is empty: every player draws a tile
    Peel,
    /// Do nothing this turn
    Pass,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Decision::Play(moves) => {
                let moves: Vec<String> = moves.iter().map(Move::to_string).collect();
                write!(f, "play {}", moves.join(", "))
            }
            Decision::Discard(letter) => write!(f, "discard {}", letter),
            Decision::Peel => write!(f, "peel"),
            Decision::Pass => write!(f, "pass"),
        }
    }
}

/// What a player knows about the rest of the game.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// The tiles left in the pool
    pub pool: TileBag,
    /// The number of tiles in the hand of every player, including our own
    pub hand_sizes: Vec<usize>,
}

impl Context {
    pub fn new(pool: TileBag, hand_sizes: Vec<usize>) -> Context {
        Context { pool, hand_sizes }
    }

    /// Number of players in the game
    pub fn players(&self) -> usize {
        self.hand_sizes.len()
    }

    /// The chance that the next peel is triggered before our next turn.
    ///
    /// Each player is taken to empty their hand with the same chance per tile: a player
    /// with at most one tile peels for sure, a player with `n` tiles with chance `1/n`.
    /// The result is the mean over all players, or 0 without players.
    pub fn peel_odds(&self) -> f64 {
        if self.hand_sizes.is_empty() {
            return 0.0;
        }
        let total: f64 = self
            .hand_sizes
            .iter()
            .map(|&n| if n <= 1 { 1.0 } else { 1.0 / n as f64 })
            .sum();
        total / self.hand_sizes.len() as f64
    }
}

/// An automated player.
pub trait Strategy {
    /// A human readable name
    fn name(&self) -> String;

    /// The random generator of the player, for choices that are left to chance.
    fn rng(&mut self) -> &mut StdRng;

    /// Plan the moves to play next, in order. Returns `None` if there is no legal move.
    fn next_moves(&mut self, lexicon: &Lexicon, board: &Board, hand: &Tiles)
        -> Option<Vec<Move>>;

    /// Decide what to do this turn: play the planned moves, or fall back on
    /// [`no_move`] if there are none.
    fn decide(
        &mut self,
        lexicon: &Lexicon,
        board: &Board,
        hand: &Tiles,
        context: &Context,
    ) -> Decision {
        let decision = match self.next_moves(lexicon, board, hand) {
            Some(moves) if !moves.is_empty() => Decision::Play(moves),
            _ => no_move(hand, context, self.rng()),
        };
        debug!("{}: {}", self.name(), decision);
        decision
    }
}

/// What to do without a move to play.
///
/// With an empty hand the player peels. Otherwise a random tile from the hand is discarded,
/// if the pool has the two tiles to draw in return. If not, the player passes.
pub fn no_move<R: Rng>(hand: &Tiles, context: &Context, rng: &mut R) -> Decision {
    if hand.is_empty() {
        return Decision::Peel;
    }
    if context.pool.len() < 2 {
        return Decision::Pass;
    }
    match hand.nth(rng.gen_range(0..hand.len())) {
        Some(letter) => Decision::Discard(letter),
        None => Decision::Pass,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use rand::SeedableRng;
    use std::convert::TryFrom;

    #[test]
    fn test_peel_odds() {
        let context = Context::new(TileBag::new(), vec![1, 2, 4, 0]);
        assert!((context.peel_odds() - (1.0 + 0.5 + 0.25 + 1.0) / 4.0).abs() < 1e-9);
        assert_eq!(Context::default().peel_odds(), 0.0);
    }

    #[test]
    fn test_no_move() -> Result<(), Error> {
        let mut rng = StdRng::seed_from_u64(3);
        let full = Context::new(TileBag::standard(), vec![3, 21]);
        assert_eq!(no_move(&Tiles::new(), &full, &mut rng), Decision::Peel);

        let hand: Tiles = "qxz".parse()?;
        match no_move(&hand, &full, &mut rng) {
            Decision::Discard(letter) => assert!(hand.count(letter) > 0),
            other => panic!("expected a discard, got {:?}", other),
        }

        let almost_empty = Context::new(TileBag::from(&"a".parse::<Tiles>()?), vec![3, 21]);
        assert_eq!(no_move(&hand, &almost_empty, &mut rng), Decision::Pass);
        Ok(())
    }

    #[test]
    fn test_discard_is_uniform_over_tiles() -> Result<(), Error> {
        let mut rng = StdRng::seed_from_u64(11);
        let context = Context::new(TileBag::standard(), vec![10]);
        let hand: Tiles = "aaaaaaaaaz".parse()?;
        let z = Letter::try_from('z')?;
        let discarded_z = (0..1000)
            .filter(|_| no_move(&hand, &context, &mut rng) == Decision::Discard(z))
            .count();
        assert!(discarded_z > 50 && discarded_z < 150, "{}", discarded_z);
        Ok(())
    }

    #[test]
    fn test_display() -> Result<(), Error> {
        assert_eq!(Decision::Discard(Letter::try_from('q')?).to_string(), "discard Q");
        let mv = Move::new(crate::Coord::ORIGIN, "cat".parse()?, crate::Axis::Horizontal, 0);
        assert_eq!(
            Decision::Play(vec![mv]).to_string(),
            "play CAT across from (0, 0)"
        );
        Ok(())
    }
}
