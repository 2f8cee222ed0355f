use super::{codec, Letter};
use crate::error::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;
use std::iter::FromIterator;
use std::ops::Add;
use std::str::FromStr;

/// A multiset of letter tiles, as held in a player's hand.
///
/// Counts can never become negative: removing a letter that is not present is an error.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tiles([u8; Letter::COUNT]);

impl Tiles {
    /// Return an empty set of tiles
    pub fn new() -> Tiles {
        Tiles([0; Letter::COUNT])
    }

    /// Number of tiles with this letter
    pub fn count(&self, letter: Letter) -> usize {
        self.0[letter.index()] as usize
    }

    /// Total number of tiles
    pub fn len(&self) -> usize {
        self.0.iter().map(|&n| n as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&n| n == 0)
    }

    /// Add a tile. A count saturates at 255 tiles per letter.
    pub fn insert(&mut self, letter: Letter) {
        self.insert_times(letter, 1);
    }

    /// Add `n` tiles with `letter`. A count saturates at 255 tiles per letter.
    pub fn insert_times(&mut self, letter: Letter, n: usize) {
        let n = u8::try_from(n).unwrap_or(u8::MAX);
        let count = &mut self.0[letter.index()];
        *count = count.saturating_add(n);
    }

    /// Remove one tile with `letter`.
    /// ## Errors
    /// If there is no such tile. The tiles are not modified in that case.
    pub fn remove(&mut self, letter: Letter) -> Result<(), Error> {
        let count = &mut self.0[letter.index()];
        if *count == 0 {
            return Err(Error::NotInHand(letter.to_char()));
        }
        *count -= 1;
        Ok(())
    }

    /// Remove all `letters`, or nothing if one of them is missing.
    /// ## Errors
    /// If a letter is not (often enough) present.
    pub fn remove_all(&mut self, letters: &[Letter]) -> Result<(), Error> {
        let mut tiles = *self;
        for &letter in letters {
            tiles.remove(letter)?;
        }
        *self = tiles;
        Ok(())
    }

    /// Check if every tile in `other` is also in `self`, counting duplicates.
    pub fn contains_all(&self, other: &Tiles) -> bool {
        self.0.iter().zip(other.0.iter()).all(|(a, b)| a >= b)
    }

    /// Iterate over all tiles in alphabetic order, repeating letters by count.
    pub fn iter(&self) -> impl Iterator<Item = Letter> + '_ {
        Letter::all().flat_map(move |letter| std::iter::repeat(letter).take(self.count(letter)))
    }

    /// Iterate over the different letters present.
    pub fn distinct(&self) -> impl Iterator<Item = Letter> + '_ {
        Letter::all().filter(move |&letter| self.count(letter) > 0)
    }

    /// Return the letter of the `n`'th tile in alphabetic order.
    /// Used to pick a tile at random with equal chance for every tile.
    pub fn nth(&self, n: usize) -> Option<Letter> {
        let mut cnt = 0;
        for letter in Letter::all() {
            cnt += self.count(letter);
            if cnt > n {
                return Some(letter);
            }
        }
        None
    }
}

impl Add for Tiles {
    type Output = Tiles;
    fn add(self, other: Tiles) -> Tiles {
        let mut tiles = self;
        for (a, b) in tiles.0.iter_mut().zip(other.0.iter()) {
            *a = a.saturating_add(*b);
        }
        tiles
    }
}

impl FromIterator<Letter> for Tiles {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        let mut tiles = Tiles::new();
        for letter in iter {
            tiles.insert(letter);
        }
        tiles
    }
}

impl<'a> From<&'a [Letter]> for Tiles {
    fn from(letters: &'a [Letter]) -> Self {
        letters.iter().copied().collect()
    }
}

impl FromStr for Tiles {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(codec::encode(s)?.iter().copied().collect())
    }
}

/// Show the tiles as a string of uppercase letters in alphabetic order.
impl fmt::Display for Tiles {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s: String = self.iter().map(Letter::to_char).collect();
        write!(f, "{}", s)
    }
}

impl fmt::Debug for Tiles {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tiles({})", self)
    }
}
