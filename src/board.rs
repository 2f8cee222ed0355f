use crate::movegen::Move;
use crate::tiles::{Letter, Tiles, Word};
use crate::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::convert::TryFrom;
use std::fmt;

/// A square on the board. `x` is the column and grows to the right, `y` is the row
/// and grows downward. The board is unbounded, so coordinates can be negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    /// The square where the first word is played
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Coord {
        Coord { x, y }
    }

    /// Move `n` squares along `axis`. Negative `n` moves back.
    pub fn step(self, axis: Axis, n: i32) -> Coord {
        match axis {
            Axis::Horizontal => Coord::new(self.x + n, self.y),
            Axis::Vertical => Coord::new(self.x, self.y + n),
        }
    }

    /// Position along `axis`: the column for horizontal, the row for vertical.
    pub fn along(self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// Index of the line along `axis` that holds this square.
    pub fn across(self, axis: Axis) -> i32 {
        self.along(axis.other())
    }

    /// The square at position `pos` on line `line` along `axis`.
    pub fn on_line(axis: Axis, line: i32, pos: i32) -> Coord {
        match axis {
            Axis::Horizontal => Coord::new(pos, line),
            Axis::Vertical => Coord::new(line, pos),
        }
    }

    /// The four squares sharing an edge with this one
    pub fn neighbours(self) -> [Coord; 4] {
        [
            self.step(Axis::Horizontal, -1),
            self.step(Axis::Horizontal, 1),
            self.step(Axis::Vertical, -1),
            self.step(Axis::Vertical, 1),
        ]
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Direction of a word on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    /// left to right, step +x
    Horizontal,
    /// top to bottom, step +y
    Vertical,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];

    /// The crossing axis
    pub fn other(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// Display the board as rows of squares, from the top left to the bottom right
/// of the occupied area. Empty squares show as ".".
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_strings().join("\n"))
    }
}

/// A personal bananagrams grid.
///
/// The grid has no fixed size: it is a sparse map from square to letter. Boards are
/// small values that are cloned freely when searching, and compare and hash by content,
/// so two searches that reach the same grid can tell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    tiles: BTreeMap<Coord, Letter>,
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Board {
        Board {
            tiles: BTreeMap::new(),
        }
    }

    /// Parse a board from rows of letters, with the top left square at `origin`.
    /// Empty squares are "." or " ". All rows must have the same length.
    /// ## Errors
    /// - If a row has a different length than the first row.
    /// - If a square holds anything but a letter or an empty marker.
    /// ## Examples
    /// ```
    /// # use bananagrams_solver::{Board, Coord, Error};
    /// let board = Board::from_strings_at(Coord::new(0, 0), &["cat", "a..", "b.."])?;
    /// assert_eq!(board.len(), 5);
    /// assert_eq!(board.to_string(), "CAT\nA..\nB..");
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_strings_at<S: AsRef<str>>(origin: Coord, rows: &[S]) -> Result<Board, Error> {
        let mut board = Board::new();
        let expected = rows.first().map_or(0, |row| row.as_ref().chars().count());
        for (dy, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let len = row.chars().count();
            if len != expected {
                return Err(Error::InvalidRowLength(String::from(row), len, expected));
            }
            for (dx, ch) in row.chars().enumerate() {
                if ch == '.' || ch == ' ' {
                    continue;
                }
                let coord = Coord::new(origin.x + dx as i32, origin.y + dy as i32);
                board.place(coord, Letter::try_from(ch)?)?;
            }
        }
        Ok(board)
    }

    /// Render the occupied area as rows, with "." for empty squares.
    /// An empty board has no rows.
    pub fn to_strings(&self) -> Vec<String> {
        let (min, max) = match self.bounds() {
            Some(bounds) => bounds,
            None => return Vec::new(),
        };
        (min.y..=max.y)
            .map(|y| {
                (min.x..=max.x)
                    .map(|x| self.get(Coord::new(x, y)).map_or('.', Letter::to_char))
                    .collect()
            })
            .collect()
    }

    /// Number of tiles on the board
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The letter at `coord`, if any
    pub fn get(&self, coord: Coord) -> Option<Letter> {
        self.tiles.get(&coord).copied()
    }

    /// Check if the square at `coord` is occupied.
    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.tiles.contains_key(&coord)
    }

    /// Iterate over the tiles in coordinate order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Letter)> + '_ {
        self.tiles.iter().map(|(&coord, &letter)| (coord, letter))
    }

    /// All letters on the board, as a multiset
    pub fn letters(&self) -> Tiles {
        self.tiles.values().copied().collect()
    }

    /// Put `letter` at `coord`. Returns true if the square was empty.
    /// Placing the same letter again is allowed and changes nothing.
    /// ## Errors
    /// If a different letter is already at `coord`.
    pub fn place(&mut self, coord: Coord, letter: Letter) -> Result<bool, Error> {
        match self.get(coord) {
            None => {
                self.tiles.insert(coord, letter);
                Ok(true)
            }
            Some(current) if current == letter => Ok(false),
            Some(_) => Err(Error::TileReplaceError {
                x: coord.x,
                y: coord.y,
            }),
        }
    }

    /// Remove the tile at `coord` and return its letter.
    pub fn remove(&mut self, coord: Coord) -> Option<Letter> {
        self.tiles.remove(&coord)
    }

    /// Returns the letters of `mv` that are not yet on the board, in the order of use.
    /// The board is not changed.
    /// ## Errors
    /// If a letter of the move would replace a different letter on the board.
    pub fn try_move(&self, mv: &Move) -> Result<Word, Error> {
        let mut used = Word::new();
        for (coord, letter) in mv.cells() {
            match self.get(coord) {
                None => used.push(letter),
                Some(current) if current == letter => {}
                Some(_) => {
                    return Err(Error::TileReplaceError {
                        x: coord.x,
                        y: coord.y,
                    })
                }
            }
        }
        Ok(used)
    }

    /// Play `mv` on the board, taking the new letters from `hand`.
    /// Returns the letters taken from the hand.
    /// The move is not checked against the lexicon; see [`check_move`](Board::check_move).
    /// ## Errors
    /// - If a letter would replace a different letter on the board.
    /// - If the hand does not hold the new letters.
    ///
    /// Board and hand are unchanged when an error is returned.
    /// ## Examples
    /// ```
    /// # use bananagrams_solver::{Axis, Board, Coord, Move, Tiles, Error};
    /// let mut board = Board::new();
    /// let mut hand: Tiles = "tacs".parse()?;
    /// let mv = Move::new(Coord::ORIGIN, "cat".parse()?, Axis::Horizontal, 0);
    /// let used = board.play(&mv, &mut hand)?;
    /// assert_eq!(used.to_string(), "CAT");
    /// assert_eq!(hand.to_string(), "S");
    /// # Ok::<(), Error>(())
    /// ```
    pub fn play(&mut self, mv: &Move, hand: &mut Tiles) -> Result<Word, Error> {
        let used = self.try_move(mv)?;
        hand.remove_all(&used)?;
        for (coord, letter) in mv.cells() {
            self.tiles.insert(coord, letter);
        }
        Ok(used)
    }

    /// Play `mv` without a hand, for building positions.
    /// ## Errors
    /// If a letter would replace a different letter on the board.
    pub fn play_unchecked(&mut self, mv: &Move) -> Result<(), Error> {
        self.try_move(mv)?;
        for (coord, letter) in mv.cells() {
            self.tiles.insert(coord, letter);
        }
        Ok(())
    }

    /// The top left and bottom right corners of the occupied area, if any.
    pub fn bounds(&self) -> Option<(Coord, Coord)> {
        let mut coords = self.tiles.keys();
        let first = *coords.next()?;
        Some(coords.fold((first, first), |(min, max), c| {
            (
                Coord::new(min.x.min(c.x), min.y.min(c.y)),
                Coord::new(max.x.max(c.x), max.y.max(c.y)),
            )
        }))
    }

    /// The top left corner of the occupied area, or the origin for an empty board.
    /// `Board::from_strings_at(board.origin(), &board.to_strings())` gives back the board.
    pub fn origin(&self) -> Coord {
        self.bounds().map_or(Coord::ORIGIN, |(min, _)| min)
    }

    /// The tiles on line `line` along `axis`, as (position, letter) ordered by position.
    pub fn line(&self, axis: Axis, line: i32) -> Vec<(i32, Letter)> {
        let mut cells: Vec<(i32, Letter)> = self
            .iter()
            .filter(|(coord, _)| coord.across(axis) == line)
            .map(|(coord, letter)| (coord.along(axis), letter))
            .collect();
        cells.sort_unstable_by_key(|&(pos, _)| pos);
        cells
    }

    /// Indices of the lines along `axis` with at least one tile, in order.
    pub fn lines(&self, axis: Axis) -> Vec<i32> {
        let mut lines: Vec<i32> = self.tiles.keys().map(|c| c.across(axis)).collect();
        lines.sort_unstable();
        lines.dedup();
        lines
    }

    /// Returns true if `coord` is occupied and starts a run of two or more letters along `axis`.
    pub fn is_anchor(&self, coord: Coord, axis: Axis) -> bool {
        self.is_occupied(coord)
            && !self.is_occupied(coord.step(axis, -1))
            && self.is_occupied(coord.step(axis, 1))
    }

    /// The word read forward from `start` along `axis`, up to the first empty square.
    pub fn read_run(&self, start: Coord, axis: Axis) -> Word {
        let mut word = Word::new();
        let mut c = start;
        while let Some(letter) = self.get(c) {
            word.push(letter);
            c = c.step(axis, 1);
        }
        word
    }
}
