use super::greedy::DEFAULT_SEED;
use super::heuristics::{self, HandScore};
use super::Strategy;
use crate::tiles::Tiles;
use crate::{Board, Lexicon, Move};
use log::debug;
use rand::{rngs::StdRng, SeedableRng};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Settings for the [`AStar`] player.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AStarConfig {
    /// The search ends when the hand holds at most this fraction of the tiles it started with
    pub goal_fraction: f64,
    /// Stop after expanding this many nodes, if set
    pub node_budget: Option<usize>,
    /// Seed of the random generator
    pub seed: u64,
}

impl Default for AStarConfig {
    fn default() -> Self {
        AStarConfig {
            goal_fraction: 0.2,
            node_budget: None,
            seed: DEFAULT_SEED,
        }
    }
}

/// A position reached during the search, kept in the arena.
struct Node {
    board: Board,
    hand: Tiles,
    moves: Vec<Move>,
    /// Letters of all words played so far, including the letters that were on the board
    played: usize,
}

impl Node {
    fn child(&self, mv: Move) -> Option<Node> {
        let mut board = self.board.clone();
        let mut hand = self.hand;
        board.play(&mv, &mut hand).ok()?;
        let played = self.played + mv.word.len();
        let mut moves = self.moves.clone();
        moves.push(mv);
        Some(Node {
            board,
            hand,
            moves,
            played,
        })
    }
}

/// Entry in the priority queue. The lowest priority comes first, then the earliest entry.
struct Entry {
    priority: f64,
    seq: usize,
    node: usize,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    // reversed, `BinaryHeap` pops the greatest entry
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// A player that plans several moves ahead with a best first (A*) search.
///
/// A search state is a board with a hand. The cost of a path is the number of tiles we
/// started with, minus the letters of all words played: long words are cheap. The
/// `heuristic` estimates the cost to finish the hand that is left.
/// The search ends when the hand is down to the goal fraction of its starting size.
/// If the goal can not be reached, the single move that leaves the best hand is played.
#[derive(Debug, Clone)]
pub struct AStar {
    name: String,
    heuristic: HandScore,
    config: AStarConfig,
    rng: StdRng,
}

impl AStar {
    pub fn new(name: &str, heuristic: HandScore) -> AStar {
        let config = AStarConfig::default();
        AStar {
            name: String::from(name),
            heuristic,
            rng: StdRng::seed_from_u64(config.seed),
            config,
        }
    }

    /// Estimates the cost by the number of tiles left
    pub fn tile_count() -> AStar {
        AStar::new("Tile Count A*", heuristics::tile_count)
    }

    /// Estimates the cost by the scrabble points of the tiles left
    pub fn scrabble() -> AStar {
        AStar::new("Scrabble A*", heuristics::hand_points)
    }

    #[must_use]
    pub fn with_config(mut self, config: AStarConfig) -> AStar {
        self.rng = StdRng::seed_from_u64(config.seed);
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> AStar {
        self.config.seed = seed;
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    #[must_use]
    pub fn with_goal_fraction(mut self, goal_fraction: f64) -> AStar {
        self.config.goal_fraction = goal_fraction;
        self
    }

    #[must_use]
    pub fn with_node_budget(mut self, node_budget: usize) -> AStar {
        self.config.node_budget = Some(node_budget);
        self
    }

    pub fn config(&self) -> &AStarConfig {
        &self.config
    }

    /// The best path to the goal, or `None` if the queue runs empty or the node budget
    /// runs out first.
    fn search(&self, lexicon: &Lexicon, board: &Board, hand: &Tiles) -> Option<Vec<Move>> {
        let start_count = hand.len();
        let goal = self.config.goal_fraction * start_count as f64;
        let heuristic = self.heuristic;

        let mut arena = vec![Node {
            board: board.clone(),
            hand: *hand,
            moves: Vec::new(),
            played: 0,
        }];
        let mut queue = BinaryHeap::new();
        let mut best: HashMap<(Board, Tiles), f64> = HashMap::new();
        let mut closed: HashSet<(Board, Tiles)> = HashSet::new();
        let start_priority = heuristic(hand);
        queue.push(Entry {
            priority: start_priority,
            seq: 0,
            node: 0,
        });
        best.insert((board.clone(), *hand), start_priority);
        let mut seq = 1;
        let mut expanded = 0;

        while let Some(entry) = queue.pop() {
            let current = &arena[entry.node];
            let key = (current.board.clone(), current.hand);
            if best.get(&key).map_or(false, |&p| p < entry.priority) {
                // a cheaper path was found after this entry was queued
                continue;
            }
            if !closed.insert(key) {
                continue;
            }
            if current.hand.len() as f64 <= goal && !current.moves.is_empty() {
                debug!(
                    "{}: goal after {} expansions, {} moves",
                    self.name,
                    expanded,
                    current.moves.len()
                );
                return Some(current.moves.clone());
            }
            if self.config.node_budget.map_or(false, |budget| expanded >= budget) {
                debug!("{}: node budget of {} spent", self.name, expanded);
                return None;
            }
            expanded += 1;

            let children: Vec<Node> = current
                .board
                .all_moves(lexicon, &current.hand)
                .into_iter()
                .filter_map(|mv| current.child(mv))
                .collect();
            for child in children {
                let key = (child.board.clone(), child.hand);
                if closed.contains(&key) {
                    continue;
                }
                let cost = start_count as f64 - child.played as f64;
                let priority = cost + heuristic(&child.hand);
                if best.get(&key).map_or(true, |&p| priority < p) {
                    best.insert(key, priority);
                    arena.push(child);
                    queue.push(Entry {
                        priority,
                        seq,
                        node: arena.len() - 1,
                    });
                    seq += 1;
                }
            }
        }
        debug!("{}: no goal after {} expansions", self.name, expanded);
        None
    }

    /// The single move that leaves the hand with the lowest heuristic.
    fn fallback(&self, lexicon: &Lexicon, board: &Board, hand: &Tiles) -> Option<Vec<Move>> {
        let mut best: Option<(Move, f64)> = None;
        for mv in board.all_moves(lexicon, hand) {
            let mut rest = *hand;
            if board.try_move(&mv).and_then(|used| rest.remove_all(&used)).is_err() {
                continue;
            }
            let value = (self.heuristic)(&rest);
            if best.as_ref().map_or(true, |(_, lowest)| value < *lowest) {
                best = Some((mv, value));
            }
        }
        best.map(|(mv, _)| vec![mv])
    }
}

impl Strategy for AStar {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    fn next_moves(&mut self, lexicon: &Lexicon, board: &Board, hand: &Tiles) -> Option<Vec<Move>> {
        self.search(lexicon, board, hand)
            .or_else(|| self.fallback(lexicon, board, hand))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Axis, Context, Coord, Decision, Error, TileBag};

    fn moves(plan: &[Move]) -> Vec<String> {
        plan.iter().map(Move::to_string).collect()
    }

    #[test]
    fn test_entry_order() {
        let mut queue = BinaryHeap::new();
        for (seq, &priority) in [3.0, 1.0, 2.0, 1.0].iter().enumerate() {
            queue.push(Entry {
                priority,
                seq,
                node: seq,
            });
        }
        let order: Vec<usize> = std::iter::from_fn(|| queue.pop().map(|e| e.seq)).collect();
        assert_eq!(order, [1, 3, 2, 0]);
    }

    #[test]
    fn test_single_move() -> Result<(), Error> {
        let lexicon = Lexicon::from_words(&["cat"])?;
        let plan = AStar::tile_count().next_moves(&lexicon, &Board::new(), &"cat".parse()?);
        let cat = Move::new(Coord::ORIGIN, "cat".parse()?, Axis::Horizontal, 0);
        assert_eq!(plan, Some(vec![cat]));
        Ok(())
    }

    #[test]
    fn test_prefers_long_words() -> Result<(), Error> {
        let lexicon = Lexicon::from_words(&["cat", "cab", "tabs", "bats"])?;
        let plan = AStar::tile_count()
            .next_moves(&lexicon, &Board::new(), &"catbs".parse()?)
            .unwrap();
        assert_eq!(moves(&plan), ["BATS across from (0, 0)"]);
        Ok(())
    }

    #[test]
    fn test_plans_ahead() -> Result<(), Error> {
        let lexicon = Lexicon::from_words(&["cat", "ax"])?;
        let hand: Tiles = "catxa".parse()?;
        let plan = AStar::tile_count()
            .next_moves(&lexicon, &Board::new(), &hand)
            .unwrap();
        assert_eq!(moves(&plan), ["CAT across from (0, 0)", "AX down from (1, 0)"]);

        let mut board = Board::new();
        let mut rest = hand;
        for mv in &plan {
            board.play(mv, &mut rest)?;
        }
        assert!(board.check(&lexicon).is_valid());
        assert_eq!(rest.to_string(), "A");
        Ok(())
    }

    #[test]
    fn test_fallback() -> Result<(), Error> {
        let lexicon = Lexicon::from_words(&["cat", "ax"])?;
        let hand: Tiles = "catxa".parse()?;
        // without expansions only the fallback is left: the move leaving the fewest tiles
        let plan = AStar::tile_count()
            .with_node_budget(0)
            .next_moves(&lexicon, &Board::new(), &hand)
            .unwrap();
        assert_eq!(moves(&plan), ["CAT across from (0, 0)"]);
        // the goal can not be reached with these words
        let plan = AStar::tile_count()
            .with_goal_fraction(0.0)
            .next_moves(&lexicon, &Board::new(), &hand)
            .unwrap();
        assert_eq!(plan.len(), 1);
        Ok(())
    }

    #[test]
    fn test_no_moves() -> Result<(), Error> {
        let lexicon = Lexicon::from_words(&["cat", "ax"])?;
        let hand: Tiles = "qxz".parse()?;
        let mut player = AStar::scrabble().with_seed(9);
        assert_eq!(player.next_moves(&lexicon, &Board::new(), &hand), None);

        let context = Context::new(TileBag::standard(), vec![3, 3]);
        match player.decide(&lexicon, &Board::new(), &hand, &context) {
            Decision::Discard(letter) => assert!(hand.count(letter) > 0),
            other => panic!("expected a discard, got {:?}", other),
        }
        let context = Context::new(TileBag::new(), vec![3, 3]);
        assert_eq!(
            player.decide(&lexicon, &Board::new(), &hand, &context),
            Decision::Pass
        );
        Ok(())
    }

    #[test]
    fn test_empty_hand() -> Result<(), Error> {
        let lexicon = Lexicon::from_words(&["cat"])?;
        let board = Board::from_strings_at(Coord::ORIGIN, &["cat"])?;
        let context = Context::new(TileBag::standard(), vec![0, 5]);
        let decision = AStar::tile_count().decide(&lexicon, &board, &Tiles::new(), &context);
        assert_eq!(decision, Decision::Peel);
        Ok(())
    }
}
