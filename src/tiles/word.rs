use super::{codec, Letter, DIM};
use crate::error::Error;
use std::fmt;
use std::iter::FromIterator;
use std::ops::Deref;
use std::str::FromStr;
use tinyvec::TinyVec;

/// An ordered list of letters, as read along a run on the board.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word(TinyVec<[Letter; DIM]>);

impl Word {
    pub fn new() -> Word {
        Word(TinyVec::new())
    }

    pub fn push(&mut self, letter: Letter) {
        self.0.push(letter);
    }

    pub fn pop(&mut self) -> Option<Letter> {
        self.0.pop()
    }
}

impl Deref for Word {
    type Target = [Letter];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromIterator<Letter> for Word {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        Word(iter.into_iter().collect())
    }
}

impl<'a> From<&'a [Letter]> for Word {
    fn from(letters: &'a [Letter]) -> Self {
        letters.iter().copied().collect()
    }
}

impl FromStr for Word {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        codec::encode(s)
    }
}

/// Words show in uppercase, like on the board.
impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", codec::decode(self))
    }
}
