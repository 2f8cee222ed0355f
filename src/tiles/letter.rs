use crate::error::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;

/// One of the 26 letter tiles. There are no blanks in bananagrams.
///
/// Internally a letter is the index 0..26 of `A`..`Z`. It is displayed in uppercase,
/// which is the form used on the board.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Letter(u8);

impl Letter {
    /// Number of different letters
    pub const COUNT: usize = 26;

    /// Iterate over `A`..`Z`
    pub fn all() -> impl Iterator<Item = Letter> {
        (0..Self::COUNT as u8).map(Letter)
    }

    /// Create a letter from a character, ignoring case.
    /// Returns `None` for anything that is not an ascii letter.
    pub fn from_char(ch: char) -> Option<Letter> {
        if ch.is_ascii_alphabetic() {
            Some(Letter(ch.to_ascii_uppercase() as u8 - b'A'))
        } else {
            None
        }
    }

    /// Index 0..26 of the letter
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The uppercase (board) form of the letter
    pub fn to_char(self) -> char {
        (b'A' + self.0) as char
    }

    /// The lowercase (lexicon) form of the letter
    pub fn to_lowercase(self) -> char {
        (b'a' + self.0) as char
    }
}

impl TryFrom<u8> for Letter {
    type Error = Error;
    fn try_from(code: u8) -> Result<Self, Self::Error> {
        if (code as usize) < Self::COUNT {
            Ok(Letter(code))
        } else {
            Err(Error::InvalidLetterCode(code))
        }
    }
}

impl TryFrom<char> for Letter {
    type Error = Error;
    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Letter::from_char(ch).ok_or_else(|| Error::EncodeInvalidToken(ch.to_string()))
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> char {
        letter.to_char()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
