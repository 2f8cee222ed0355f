use crate::tiles::{Letter, Tiles};
use crate::TileSet;
use multiset::HashMultiSet;
use rand::{seq::IteratorRandom, Rng};
use std::convert::From;
use std::ops::Deref;
use std::ops::Sub;

/// Snapshot of the shared pool of face down tiles.
///
/// The solver never draws from the real pool; it only samples from a copy to estimate
/// what a dump or a peel would bring.
#[derive(Debug, Clone)]
pub struct TileBag(HashMultiSet<Letter>);

impl Deref for TileBag {
    type Target = HashMultiSet<Letter>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Sub for TileBag {
    type Output = Self;
    fn sub(self, other: Self) -> Self::Output {
        Self(self.0 - other.0)
    }
}

impl Default for TileBag {
    fn default() -> Self {
        TileBag::new()
    }
}

impl TileBag {
    pub fn new() -> Self {
        Self(HashMultiSet::new())
    }

    /// A full bag with the 144 standard Bananagrams tiles
    pub fn standard() -> Self {
        TileBag::from(&TileSet::new())
    }

    fn from_tiles(tiles: &Tiles) -> Self {
        let mut bag = HashMultiSet::new();
        for letter in tiles.distinct() {
            bag.insert_times(letter, tiles.count(letter));
        }
        Self(bag)
    }

    /// The tiles in the bag, as a multiset
    pub fn tiles(&self) -> Tiles {
        self.iter().copied().collect()
    }

    /// The tiles in the bag, in alphabetic order.
    /// The order does not depend on the hashing of the underlying set, so sampling from
    /// it with a seeded generator is reproducible.
    pub fn sorted(&self) -> Vec<Letter> {
        let mut letters: Vec<Letter> = self.iter().copied().collect();
        letters.sort_unstable();
        letters
    }

    /// Draw `n` random tiles, without replacement. The bag itself is not changed.
    /// Returns fewer tiles if the bag holds fewer than `n`. The drawn tiles are sorted.
    pub fn draw<R: Rng>(&self, n: usize, rng: &mut R) -> Vec<Letter> {
        let mut drawn: Vec<Letter> = self.sorted().into_iter().choose_multiple(rng, n);
        drawn.sort_unstable();
        drawn
    }
}

impl<'a> From<&'a TileSet> for TileBag {
    fn from(tileset: &TileSet) -> Self {
        TileBag::from_tiles(&tileset.tiles())
    }
}

impl<'a> From<&'a Tiles> for TileBag {
    fn from(tiles: &Tiles) -> Self {
        TileBag::from_tiles(tiles)
    }
}
