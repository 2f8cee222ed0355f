use crate::board::{Axis, Board, Coord};
use crate::tiles::{Letter, Tiles, Word};
use crate::Lexicon;
#[cfg(feature = "flame_it")]
use flamer::flame;
use log::{debug, trace};
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Deref;

/// A word placed on the board.
///
/// The word starts `offset` squares before `anchor` along `axis`. For a move that builds
/// on the board, the anchor is the first tile already on the board that the word passes
/// through, and the offset is the index of that tile in the word. The first move on an
/// empty board is anchored at the origin with offset 0.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Move {
    pub anchor: Coord,
    pub word: Word,
    pub axis: Axis,
    pub offset: usize,
}

impl Move {
    pub fn new(anchor: Coord, word: Word, axis: Axis, offset: usize) -> Move {
        Move {
            anchor,
            word,
            axis,
            offset,
        }
    }

    /// The square of the first letter
    pub fn start(&self) -> Coord {
        self.anchor.step(self.axis, -(self.offset as i32))
    }

    /// The squares covered by the move, with their letters.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Letter)> + '_ {
        let start = self.start();
        let axis = self.axis;
        self.word
            .iter()
            .enumerate()
            .map(move |(i, &letter)| (start.step(axis, i as i32), letter))
    }

    /// Number of letters in the word
    pub fn len(&self) -> usize {
        self.word.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let dir = match self.axis {
            Axis::Horizontal => "across",
            Axis::Vertical => "down",
        };
        write!(f, "{} {} from {}", self.word, dir, self.start())
    }
}

/// All legal moves, by anchor. The moves of an anchor are sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Moves(BTreeMap<Coord, Vec<Move>>);

impl Deref for Moves {
    type Target = BTreeMap<Coord, Vec<Move>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Moves {
    /// Total number of moves
    pub fn count_moves(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    /// Iterate over all moves, by anchor and then in sorted order.
    pub fn iter_moves(&self) -> impl Iterator<Item = &Move> + '_ {
        self.0.values().flatten()
    }

    fn from_moves<I: IntoIterator<Item = Move>>(moves: I) -> Moves {
        let mut map: BTreeMap<Coord, Vec<Move>> = BTreeMap::new();
        for mv in moves {
            map.entry(mv.anchor).or_default().push(mv);
        }
        for list in map.values_mut() {
            list.sort();
            list.dedup();
        }
        Moves(map)
    }
}

impl IntoIterator for Moves {
    type Item = Move;
    type IntoIter = std::iter::Flatten<std::collections::btree_map::IntoValues<Coord, Vec<Move>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_values().flatten()
    }
}

impl Board {
    /// Find every legal move with the letters of `hand`.
    ///
    /// On an empty board every word of two or more letters that can be formed from
    /// the hand is a horizontal move from the origin.
    /// Otherwise, for each row and column with tiles, every word that can be formed from
    /// the hand plus the letters on that line is tried at every position where it overlaps
    /// a tile on the line. A position is a candidate if the word agrees with the tiles it
    /// covers, the hand holds the other letters, at least one letter comes from the hand,
    /// and the squares before and after the word are empty. A candidate becomes a move
    /// if [`check_move`](Board::check_move) accepts it.
    ///
    /// With the `rayon` feature the lines are searched in parallel. The result is the same.
    /// ## Examples
    /// ```
    /// # use bananagrams_solver::{Board, Lexicon, Tiles, Error};
    /// let lexicon = Lexicon::from_words(&["cat", "act", "at"])?;
    /// let hand: Tiles = "cat".parse()?;
    /// let moves = Board::new().all_moves(&lexicon, &hand);
    /// assert_eq!(moves.count_moves(), 3);
    /// # Ok::<(), Error>(())
    /// ```
    #[cfg_attr(feature = "flame_it", flame)]
    pub fn all_moves(&self, lexicon: &Lexicon, hand: &Tiles) -> Moves {
        if self.is_empty() {
            let moves = lexicon
                .anagrams(hand, 0)
                .filter(|word| word.len() > 1)
                .map(|word| Move::new(Coord::ORIGIN, word, Axis::Horizontal, 0));
            return Moves::from_moves(moves);
        }
        let lines: Vec<(Axis, i32)> = Axis::ALL
            .iter()
            .flat_map(|&axis| self.lines(axis).into_iter().map(move |line| (axis, line)))
            .collect();
        let line_moves = |&(axis, line): &(Axis, i32)| self.line_moves(lexicon, hand, axis, line);
        #[cfg(feature = "rayon")]
        let moves: Vec<Vec<Move>> = lines.par_iter().map(line_moves).collect();
        #[cfg(not(feature = "rayon"))]
        let moves: Vec<Vec<Move>> = lines.iter().map(line_moves).collect();
        let moves = Moves::from_moves(moves.into_iter().flatten());
        debug!(
            "{} moves for hand {} on {} lines",
            moves.count_moves(),
            hand,
            lines.len()
        );
        moves
    }

    /// The legal moves along line `line` of `axis`.
    #[cfg_attr(feature = "flame_it", flame)]
    fn line_moves(&self, lexicon: &Lexicon, hand: &Tiles, axis: Axis, line: i32) -> Vec<Move> {
        let cells = self.line(axis, line);
        let (first, last) = match (cells.first(), cells.last()) {
            (Some(&(first, _)), Some(&(last, _))) => (first, last),
            _ => return Vec::new(),
        };
        let on_line: Tiles = cells.iter().map(|&(_, letter)| letter).collect();
        let letter_at = |pos: i32| self.get(Coord::on_line(axis, line, pos));
        let mut moves = Vec::new();
        let mut candidates = 0;
        for word in lexicon.anagrams(&(*hand + on_line), 0) {
            let len = word.len() as i32;
            if len < 2 {
                continue;
            }
            for start in (first - len + 1)..=last {
                if let Some(offset) = fit(&word, start, hand, &letter_at) {
                    candidates += 1;
                    let anchor = Coord::on_line(axis, line, start + offset as i32);
                    let mv = Move::new(anchor, word.clone(), axis, offset);
                    if self.check_move(lexicon, &mv) {
                        moves.push(mv);
                    }
                }
            }
        }
        trace!(
            "{:?} line {}: {} candidates, {} moves",
            axis,
            line,
            candidates,
            moves.len()
        );
        moves
    }
}

/// Try `word` at position `start` of a line. Returns the index in the word of the first
/// tile it covers, if the word fits.
fn fit<F>(word: &[Letter], start: i32, hand: &Tiles, letter_at: &F) -> Option<usize>
where
    F: Fn(i32) -> Option<Letter>,
{
    let end = start + word.len() as i32;
    if letter_at(start - 1).is_some() || letter_at(end).is_some() {
        return None;
    }
    let mut available = *hand;
    let mut anchor = None;
    let mut from_hand = 0;
    for (i, &letter) in word.iter().enumerate() {
        match letter_at(start + i as i32) {
            Some(current) if current == letter => {
                anchor.get_or_insert(i);
            }
            Some(_) => return None,
            None => {
                available.remove(letter).ok()?;
                from_hand += 1;
            }
        }
    }
    if from_hand == 0 {
        return None;
    }
    anchor
}
