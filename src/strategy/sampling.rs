use super::greedy::DEFAULT_SEED;
use super::heuristics::BoardScore;
use super::{no_move, Context, Decision, Strategy};
use crate::tiles::{Letter, Tiles};
use crate::{Board, Lexicon, Move};
use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Settings for the [`Sampling`] player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SamplingConfig {
    /// Number of random draws to evaluate a dump or a peel
    pub samples: usize,
    /// Only sample when the hand holds at most this many tiles; always sample if `None`
    pub plan_at: Option<usize>,
    /// Seed of the random generator
    pub seed: u64,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        SamplingConfig {
            samples: 10,
            plan_at: None,
            seed: DEFAULT_SEED,
        }
    }
}

/// A player that looks at what a dump or a peel would bring before it plays.
///
/// Three options are compared:
/// - play: the plan of the inner player, applied to a copy of the board, and rated with `score`.
///   A plan that empties both the hand and the pool wins the game and rates infinite.
/// - dump: the average rating over a number of random dumps, of a random tile from the
///   hand for two tiles from the pool.
/// - peel: the average rating over a number of random draws of one tile, weighted by the
///   odds that another player peels first.
///
/// An option that is not possible rates negative infinity. Playing wins a tie, then dumping;
/// the player only passes when waiting for a peel is best.
///
/// With `plan_at` set the player samples only with a small hand, and plays like the inner
/// player otherwise.
#[derive(Debug, Clone)]
pub struct Sampling<S> {
    inner: S,
    score: BoardScore,
    config: SamplingConfig,
    rng: StdRng,
}

impl<S: Strategy> Sampling<S> {
    /// Sample on every turn
    pub fn trial(inner: S, score: BoardScore) -> Sampling<S> {
        Sampling::new(inner, score, SamplingConfig::default())
    }

    /// Sample only when the hand has at most `plan_at` tiles
    pub fn smart(inner: S, score: BoardScore, plan_at: usize) -> Sampling<S> {
        Sampling::trial(inner, score).with_plan_at(plan_at)
    }

    pub fn new(inner: S, score: BoardScore, config: SamplingConfig) -> Sampling<S> {
        Sampling {
            inner,
            score,
            rng: StdRng::seed_from_u64(config.seed),
            config,
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Sampling<S> {
        self.config.seed = seed;
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Set the number of samples. At least one sample is taken.
    #[must_use]
    pub fn with_samples(mut self, samples: usize) -> Sampling<S> {
        self.config.samples = samples.max(1);
        self
    }

    #[must_use]
    pub fn with_plan_at(mut self, plan_at: usize) -> Sampling<S> {
        self.config.plan_at = Some(plan_at);
        self
    }

    pub fn config(&self) -> &SamplingConfig {
        &self.config
    }

    /// Play the plan of the inner player on copies of board and hand.
    /// Returns the rating, the plan and the hand that is left.
    fn try_plan(
        &mut self,
        lexicon: &Lexicon,
        board: &Board,
        hand: &Tiles,
    ) -> (f64, Option<Vec<Move>>, Tiles) {
        let plan = match self.inner.next_moves(lexicon, board, hand) {
            Some(plan) if !plan.is_empty() => plan,
            _ => return (f64::NEG_INFINITY, None, *hand),
        };
        let mut board = board.clone();
        let mut rest = *hand;
        for mv in &plan {
            if board.play(mv, &mut rest).is_err() {
                return (f64::NEG_INFINITY, None, *hand);
            }
        }
        ((self.score)(&board.check(lexicon)), Some(plan), rest)
    }

    fn evaluate_play(
        &mut self,
        lexicon: &Lexicon,
        board: &Board,
        hand: &Tiles,
        context: &Context,
    ) -> (f64, Option<Vec<Move>>) {
        let (value, plan, rest) = self.try_plan(lexicon, board, hand);
        if plan.is_some() && rest.is_empty() && context.pool.is_empty() {
            return (f64::INFINITY, plan);
        }
        (value, plan)
    }

    fn evaluate_dump(
        &mut self,
        lexicon: &Lexicon,
        board: &Board,
        hand: &Tiles,
        context: &Context,
    ) -> f64 {
        if hand.is_empty() || context.pool.len() < 2 {
            return f64::NEG_INFINITY;
        }
        let mut seen: HashMap<(Letter, Vec<Letter>), f64> = HashMap::new();
        let mut total = 0.0;
        for _ in 0..self.config.samples {
            let dumped = match hand.nth(self.rng.gen_range(0..hand.len())) {
                Some(letter) => letter,
                None => continue,
            };
            let drawn = context.pool.draw(2, &mut self.rng);
            let key = (dumped, drawn);
            let value = match seen.get(&key) {
                Some(&value) => value,
                None => {
                    let mut sample = *hand;
                    if sample.remove(dumped).is_err() {
                        continue;
                    }
                    for &letter in &key.1 {
                        sample.insert(letter);
                    }
                    let (value, _, _) = self.try_plan(lexicon, board, &sample);
                    seen.insert(key, value);
                    value
                }
            };
            total += value;
        }
        total / self.config.samples as f64
    }

    fn evaluate_peel(
        &mut self,
        lexicon: &Lexicon,
        board: &Board,
        hand: &Tiles,
        context: &Context,
    ) -> f64 {
        if context.players() <= 1 || context.pool.is_empty() {
            return f64::NEG_INFINITY;
        }
        let mut seen: HashMap<Letter, f64> = HashMap::new();
        let mut total = 0.0;
        for _ in 0..self.config.samples {
            let peeled = match context.pool.draw(1, &mut self.rng).first() {
                Some(&letter) => letter,
                None => continue,
            };
            let value = match seen.get(&peeled) {
                Some(&value) => value,
                None => {
                    let mut sample = *hand;
                    sample.insert(peeled);
                    let (value, _, _) = self.try_plan(lexicon, board, &sample);
                    seen.insert(peeled, value);
                    value
                }
            };
            total += value;
        }
        total / self.config.samples as f64 * context.peel_odds()
    }
}

impl<S: Strategy> Strategy for Sampling<S> {
    fn name(&self) -> String {
        match self.config.plan_at {
            Some(plan_at) => format!(
                "{} Smarty: Sample Number {}, Plan at {} tile",
                self.inner.name(),
                self.config.samples,
                plan_at
            ),
            None => format!(
                "{} Trial: Sample Number {}",
                self.inner.name(),
                self.config.samples
            ),
        }
    }

    fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    fn next_moves(&mut self, lexicon: &Lexicon, board: &Board, hand: &Tiles) -> Option<Vec<Move>> {
        self.inner.next_moves(lexicon, board, hand)
    }

    fn decide(
        &mut self,
        lexicon: &Lexicon,
        board: &Board,
        hand: &Tiles,
        context: &Context,
    ) -> Decision {
        if self.config.plan_at.map_or(false, |plan_at| hand.len() > plan_at) {
            return self.inner.decide(lexicon, board, hand, context);
        }
        let peel = self.evaluate_peel(lexicon, board, hand, context);
        let dump = self.evaluate_dump(lexicon, board, hand, context);
        let (play, plan) = self.evaluate_play(lexicon, board, hand, context);
        debug!(
            "{}: play {:.3}, dump {:.3}, peel {:.3}",
            self.name(),
            play,
            dump,
            peel
        );
        let decision = if play >= dump.max(peel) {
            match plan {
                Some(moves) if play > f64::NEG_INFINITY => Decision::Play(moves),
                _ => no_move(hand, context, &mut self.rng),
            }
        } else if dump >= peel {
            no_move(hand, context, &mut self.rng)
        } else {
            Decision::Pass
        };
        debug!("{}: {}", self.name(), decision);
        decision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{heuristics, AStar, OneLook};
    use crate::{Axis, Coord, Error, TileBag};
    use std::convert::TryFrom;

    fn trial() -> Sampling<OneLook> {
        Sampling::trial(OneLook::longest_word(), heuristics::average_word_length).with_seed(1)
    }

    fn pool(letters: &str) -> Result<TileBag, Error> {
        Ok(TileBag::from(&letters.parse::<Tiles>()?))
    }

    #[test]
    fn test_play_to_win() -> Result<(), Error> {
        let lexicon = Lexicon::from_words(&["cat"])?;
        let context = Context::new(TileBag::new(), vec![3, 4]);
        let decision = trial().decide(&lexicon, &Board::new(), &"cat".parse()?, &context);
        let cat = Move::new(Coord::ORIGIN, "cat".parse()?, Axis::Horizontal, 0);
        assert_eq!(decision, Decision::Play(vec![cat]));
        Ok(())
    }

    #[test]
    fn test_play_beats_dump() -> Result<(), Error> {
        let lexicon = Lexicon::from_words(&["cat", "at"])?;
        // any dump leaves at most a two letter word
        let context = Context::new(pool("qqqq")?, vec![3]);
        let decision = trial().decide(&lexicon, &Board::new(), &"cat".parse()?, &context);
        assert!(matches!(decision, Decision::Play(_)));
        Ok(())
    }

    #[test]
    fn test_nothing_works() -> Result<(), Error> {
        let lexicon = Lexicon::from_words(&["cat"])?;
        let context = Context::new(pool("qqqq")?, vec![3, 3]);
        let hand: Tiles = "qxz".parse()?;
        match trial().decide(&lexicon, &Board::new(), &hand, &context) {
            Decision::Discard(letter) => assert!(hand.count(letter) > 0),
            other => panic!("expected a discard, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_dump() -> Result<(), Error> {
        let lexicon = Lexicon::from_words(&["at"])?;
        // the only dump gives "at"; peeling is not possible with one player
        let context = Context::new(pool("at")?, vec![2]);
        let hand: Tiles = "qq".parse()?;
        let mut player = trial();
        assert_eq!(player.evaluate_dump(&lexicon, &Board::new(), &hand, &context), 2.0);
        assert_eq!(
            player.evaluate_peel(&lexicon, &Board::new(), &hand, &context),
            f64::NEG_INFINITY
        );
        let decision = player.decide(&lexicon, &Board::new(), &hand, &context);
        assert_eq!(decision, Decision::Discard(Letter::try_from('q')?));
        Ok(())
    }

    #[test]
    fn test_wait_for_peel() -> Result<(), Error> {
        let lexicon = Lexicon::from_words(&["at"])?;
        // dumping the "t" gives "aa", a peel gives "at"
        let context = Context::new(pool("aa")?, vec![1, 5]);
        let hand: Tiles = "t".parse()?;
        let mut player = trial();
        let peel = player.evaluate_peel(&lexicon, &Board::new(), &hand, &context);
        assert!((peel - 2.0 * 0.6).abs() < 1e-9);
        assert_eq!(player.decide(&lexicon, &Board::new(), &hand, &context), Decision::Pass);
        Ok(())
    }

    #[test]
    fn test_smart() -> Result<(), Error> {
        let lexicon = Lexicon::from_words(&["at"])?;
        let context = Context::new(pool("aa")?, vec![1, 5]);
        let hand: Tiles = "t".parse()?;
        let mut eager = Sampling::smart(OneLook::longest_word(), heuristics::average_word_length, 0);
        assert_eq!(
            eager.decide(&lexicon, &Board::new(), &hand, &context),
            Decision::Discard(Letter::try_from('t')?)
        );
        let mut patient = Sampling::smart(OneLook::longest_word(), heuristics::average_word_length, 1);
        assert_eq!(patient.decide(&lexicon, &Board::new(), &hand, &context), Decision::Pass);
        Ok(())
    }

    #[test]
    fn test_plan_of_several_moves() -> Result<(), Error> {
        let lexicon = Lexicon::from_words(&["cat", "ax"])?;
        let inner = AStar::tile_count().with_node_budget(50);
        let mut player = Sampling::trial(inner, heuristics::average_word_length);
        let expected = ["CAT across from (0, 0)", "AX down from (1, 0)"];

        // an "A" is left: the board with CAT and AX is rated
        let context = Context::new(TileBag::new(), vec![5, 5]);
        let hand: Tiles = "catxa".parse()?;
        let (value, plan) = player.evaluate_play(&lexicon, &Board::new(), &hand, &context);
        assert_eq!(value, 2.5);
        let plan: Vec<String> = plan.unwrap().iter().map(Move::to_string).collect();
        assert_eq!(plan, expected);

        // both moves empty the hand, and the pool is empty: a win
        let hand: Tiles = "catx".parse()?;
        let (value, _) = player.evaluate_play(&lexicon, &Board::new(), &hand, &context);
        assert_eq!(value, f64::INFINITY);
        match player.decide(&lexicon, &Board::new(), &hand, &context) {
            Decision::Play(moves) => {
                let moves: Vec<String> = moves.iter().map(Move::to_string).collect();
                assert_eq!(moves, expected);
            }
            other => panic!("expected a play, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_names() {
        let player = Sampling::trial(AStar::scrabble(), heuristics::average_word_points).with_samples(5);
        assert_eq!(player.name(), "Scrabble A* Trial: Sample Number 5");
        let player = Sampling::smart(OneLook::scrabble(), heuristics::average_word_length, 3);
        assert_eq!(
            player.name(),
            "Scrabble One Look Smarty: Sample Number 10, Plan at 3 tile"
        );
    }
}
