//! Validation of a board against the lexicon.
use crate::board::{Axis, Board, Coord};
use crate::movegen::Move;
use crate::tiles::{Letter, Word};
use crate::Lexicon;
use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;

/// A word on the board: where it starts, its direction and its letters.
/// A single letter without neighbours is reported as a one letter word.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoardWord {
    pub start: Coord,
    pub axis: Axis,
    pub word: Word,
}

impl fmt::Display for BoardWord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} at {} {:?}", self.word, self.start, self.axis)
    }
}

/// The words on a board, split in valid and invalid words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    pub valid: Vec<BoardWord>,
    pub invalid: Vec<BoardWord>,
}

impl Validation {
    /// A board is valid if it has at least one word, and no invalid words.
    pub fn is_valid(&self) -> bool {
        self.invalid.is_empty() && !self.valid.is_empty()
    }

    /// Total number of letters in the valid words
    pub fn letter_count(&self) -> usize {
        self.valid.iter().map(|w| w.word.len()).sum()
    }
}

impl Board {
    /// Check every word on the board.
    ///
    /// The group of tiles connected to the first tile in coordinate order is the main group.
    /// Each run of two or more letters in the main group is looked up in the lexicon, and
    /// a tile without any neighbour is an invalid one letter word. Every word on an island,
    /// a group apart from the main group, is invalid.
    /// Words are reported in coordinate order, horizontal before vertical.
    /// ## Examples
    /// ```
    /// # use bananagrams_solver::{Board, Coord, Lexicon, Error};
    /// let lexicon = Lexicon::from_words(&["cat", "cab"])?;
    /// let board = Board::from_strings_at(Coord::ORIGIN, &["cat", "a..", "b.."])?;
    /// let validation = board.check(&lexicon);
    /// assert!(validation.is_valid());
    /// assert_eq!(validation.valid.len(), 2);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn check(&self, lexicon: &Lexicon) -> Validation {
        let main: HashSet<Coord> = self
            .components()
            .into_iter()
            .next()
            .unwrap_or_default()
            .into_iter()
            .collect();
        let mut validation = Validation::default();
        for found in self.words() {
            let on_main = main.contains(&found.start);
            if on_main && found.word.len() > 1 && lexicon.is_word(&found.word) {
                validation.valid.push(found);
            } else {
                validation.invalid.push(found);
            }
        }
        validation
    }

    /// All words on the board, including isolated single tiles.
    pub fn words(&self) -> Vec<BoardWord> {
        let mut words = Vec::new();
        for (coord, letter) in self.iter() {
            let mut isolated = true;
            for &axis in &Axis::ALL {
                if self.is_occupied(coord.step(axis, -1)) || self.is_occupied(coord.step(axis, 1)) {
                    isolated = false;
                }
                if self.is_anchor(coord, axis) {
                    words.push(BoardWord {
                        start: coord,
                        axis,
                        word: self.read_run(coord, axis),
                    });
                }
            }
            if isolated {
                words.push(BoardWord {
                    start: coord,
                    axis: Axis::Horizontal,
                    word: std::iter::once(letter).collect(),
                });
            }
        }
        words
    }

    /// Returns true if all tiles form one group, connected by shared edges.
    /// An empty board is connected.
    pub fn is_connected(&self) -> bool {
        self.components().len() <= 1
    }

    /// Split the tiles in groups connected by shared edges. The first group holds the
    /// first tile in coordinate order; the others are islands.
    pub fn components(&self) -> Vec<Vec<Coord>> {
        let mut remaining: BTreeSet<Coord> = self.iter().map(|(coord, _)| coord).collect();
        let mut components = Vec::new();
        while let Some(&first) = remaining.iter().next() {
            remaining.remove(&first);
            let mut component = vec![first];
            let mut queue = VecDeque::new();
            queue.push_back(first);
            while let Some(coord) = queue.pop_front() {
                for next in &coord.neighbours() {
                    if remaining.remove(next) {
                        component.push(*next);
                        queue.push_back(*next);
                    }
                }
            }
            components.push(component);
        }
        components
    }

    /// Check the board that results from playing `mv`, without playing it.
    ///
    /// Only the runs touched by the move are looked up: the run along the move, and the
    /// crossing run of every newly placed letter. The resulting board must be connected.
    /// Gives the same answer as playing the move and calling [`check`](Board::check),
    /// if the board was valid before.
    ///
    /// A move with an offset outside the word, or with a letter that contradicts the board,
    /// is a programming error: it panics in debug builds and returns false otherwise.
    pub fn check_move(&self, lexicon: &Lexicon, mv: &Move) -> bool {
        debug_assert!(
            mv.offset < mv.word.len(),
            "offset {} is outside move {}",
            mv.offset,
            mv
        );
        if mv.offset >= mv.word.len() {
            return false;
        }
        let contradicts = mv
            .cells()
            .any(|(coord, letter)| self.get(coord).map_or(false, |current| current != letter));
        debug_assert!(!contradicts, "move {} contradicts the board", mv);
        if contradicts {
            return false;
        }

        let placed: HashMap<Coord, Letter> = mv
            .cells()
            .filter(|&(coord, _)| !self.is_occupied(coord))
            .collect();
        let letter_at = |coord: Coord| placed.get(&coord).copied().or_else(|| self.get(coord));

        let main = run_with(mv.start(), mv.axis, &letter_at);
        if main.len() > 1 && !lexicon.is_word(&main) {
            return false;
        }
        let crossing = mv.axis.other();
        for &coord in placed.keys() {
            let cross = run_with(coord, crossing, &letter_at);
            if cross.len() > 1 {
                if !lexicon.is_word(&cross) {
                    return false;
                }
            } else if main.len() == 1 {
                // a single new tile without neighbours
                return false;
            }
        }
        self.connected_with(&placed)
    }

    /// Returns true if the board plus the `placed` tiles is one connected group.
    fn connected_with(&self, placed: &HashMap<Coord, Letter>) -> bool {
        let occupied = |c: &Coord| self.is_occupied(*c) || placed.contains_key(c);
        let first = self.iter().next().map(|(c, _)| c);
        let first = match first.or_else(|| placed.keys().next().copied()) {
            Some(first) => first,
            None => return true,
        };
        let total = self.len() + placed.len();
        let mut seen = BTreeSet::new();
        seen.insert(first);
        let mut queue = VecDeque::new();
        queue.push_back(first);
        while let Some(coord) = queue.pop_front() {
            for next in &coord.neighbours() {
                if occupied(next) && seen.insert(*next) {
                    queue.push_back(*next);
                }
            }
        }
        seen.len() == total
    }
}

/// The maximal run along `axis` through `coord`, reading letters with `letter_at`.
fn run_with<F>(coord: Coord, axis: Axis, letter_at: &F) -> Word
where
    F: Fn(Coord) -> Option<Letter>,
{
    let mut start = coord;
    while letter_at(start.step(axis, -1)).is_some() {
        start = start.step(axis, -1);
    }
    let mut word = Word::new();
    let mut c = start;
    while let Some(letter) = letter_at(c) {
        word.push(letter);
        c = c.step(axis, 1);
    }
    word
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    const WORDS: &[&str] = &[
        "cat", "cab", "at", "ta", "bat", "tab", "cats", "as", "ab", "abs",
    ];

    fn lexicon() -> Lexicon {
        Lexicon::from_words(WORDS).unwrap()
    }

    fn board(rows: &[&str]) -> Board {
        Board::from_strings_at(Coord::ORIGIN, rows).unwrap()
    }

    fn words(found: &[BoardWord]) -> Vec<String> {
        found.iter().map(|w| w.word.to_string()).collect()
    }

    #[test]
    fn test_check_valid() {
        let validation = board(&["cat", "a..", "b.."]).check(&lexicon());
        assert!(validation.is_valid());
        assert_eq!(words(&validation.valid), ["CAT", "CAB"]);
        assert_eq!(validation.letter_count(), 6);
    }

    #[test]
    fn test_check_invalid_word() {
        let validation = board(&["cat", "x..", "b.."]).check(&lexicon());
        assert!(!validation.is_valid());
        assert_eq!(words(&validation.valid), ["CAT"]);
        assert_eq!(words(&validation.invalid), ["CXB"]);
    }

    #[test]
    fn test_check_is_idempotent() {
        let lexicon = lexicon();
        let board = board(&["cat.", "a..a", "b..b"]);
        assert_eq!(board.check(&lexicon), board.check(&lexicon));
    }

    #[test]
    fn test_single_tile() {
        let validation = board(&["a"]).check(&lexicon());
        assert!(!validation.is_valid());
        assert_eq!(words(&validation.invalid), ["A"]);
        assert!(!Board::new().check(&lexicon()).is_valid());
    }

    #[test]
    fn test_disconnected() {
        let board = board(&["cat.", "...a", "...b"]);
        assert_eq!(board.components().len(), 2);
        let validation = board.check(&lexicon());
        assert!(!validation.is_valid());
        // the main group holds the first tile
        assert_eq!(words(&validation.valid), ["CAT"]);
        assert_eq!(words(&validation.invalid), ["AB"]);
    }

    #[test]
    fn test_islands_are_invalid() {
        let lexicon = lexicon();
        // the main group has a bad word, the island a good one
        let validation = board(&["cxt..", ".....", "...at"]).check(&lexicon);
        assert_eq!(words(&validation.valid), Vec::<String>::new());
        assert_eq!(words(&validation.invalid), ["CXT", "AT"]);
        // a lone tile apart from the main group
        let validation = board(&["cat", "...", "a.."]).check(&lexicon);
        assert_eq!(words(&validation.valid), ["CAT"]);
        assert_eq!(words(&validation.invalid), ["A"]);
    }

    #[test]
    fn test_islands() {
        let board = board(&["at.ta", ".....", "a...."]);
        assert!(!board.is_connected());
        let sizes: Vec<usize> = board.components().iter().map(Vec::len).collect();
        assert_eq!(sizes, [2, 1, 2]);
    }

    #[test]
    fn test_check_move() -> Result<(), Error> {
        let lexicon = lexicon();
        let board = board(&["cat"]);
        // CATS
        let mv = Move::new(Coord::new(0, 0), "cats".parse()?, Axis::Horizontal, 0);
        assert!(board.check_move(&lexicon, &mv));
        // TAB down from the T
        let mv = Move::new(Coord::new(2, 0), "tab".parse()?, Axis::Vertical, 0);
        assert!(board.check_move(&lexicon, &mv));
        // BAT up to the T
        let mv = Move::new(Coord::new(2, 0), "bat".parse()?, Axis::Vertical, 2);
        assert!(board.check_move(&lexicon, &mv));
        // CTA is no word
        let mv = Move::new(Coord::new(0, 0), "cta".parse()?, Axis::Vertical, 0);
        assert!(!board.check_move(&lexicon, &mv));
        Ok(())
    }

    #[test]
    fn test_check_move_cross_words() -> Result<(), Error> {
        let lexicon = lexicon();
        let board = board(&["cat", "a..", "b.."]);
        // "abs" below "cat" forms "ab" and "ts" downwards
        let mv = Move::new(Coord::new(0, 1), "abs".parse()?, Axis::Horizontal, 0);
        assert!(!board.check_move(&lexicon, &mv));
        // "bat" on the bottom row touches nothing but the "b"
        let mv = Move::new(Coord::new(0, 2), "bat".parse()?, Axis::Horizontal, 0);
        assert!(board.check_move(&lexicon, &mv));
        Ok(())
    }

    #[test]
    fn test_check_move_connects() -> Result<(), Error> {
        let lexicon = lexicon();
        let board = board(&["cat", "...", "..b"]);
        // leaves the "b" on its own
        let mv = Move::new(Coord::new(0, 0), "cats".parse()?, Axis::Horizontal, 0);
        assert!(!board.check_move(&lexicon, &mv));
        // joins the "b"
        let mv = Move::new(Coord::new(2, 0), "tab".parse()?, Axis::Vertical, 0);
        assert!(board.check_move(&lexicon, &mv));
        Ok(())
    }

    #[test]
    fn test_check_agrees_with_check_move() -> Result<(), Error> {
        let lexicon = lexicon();
        let board = board(&["cat"]);
        let moves = [
            Move::new(Coord::new(0, 0), "cats".parse()?, Axis::Horizontal, 0),
            Move::new(Coord::new(1, 0), "at".parse()?, Axis::Vertical, 0),
            Move::new(Coord::new(1, 0), "as".parse()?, Axis::Vertical, 0),
            Move::new(Coord::new(0, 0), "cab".parse()?, Axis::Vertical, 0),
            Move::new(Coord::new(0, 0), "cat".parse()?, Axis::Vertical, 0),
            Move::new(Coord::new(0, 0), "ct".parse()?, Axis::Vertical, 0),
            Move::new(Coord::new(2, 0), "tas".parse()?, Axis::Vertical, 0),
        ];
        for mv in &moves {
            let mut after = board.clone();
            after.play_unchecked(mv)?;
            assert_eq!(
                board.check_move(&lexicon, mv),
                after.check(&lexicon).is_valid(),
                "{}",
                mv
            );
        }
        Ok(())
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "contradicts the board")]
    fn test_check_move_contract() {
        let board = board(&["cat"]);
        let mv = Move::new(Coord::new(0, 0), "bat".parse().unwrap(), Axis::Horizontal, 0);
        board.check_move(&lexicon(), &mv);
    }
}
