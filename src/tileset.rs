use crate::tiles::{Letter, Tiles};

/// label, count, points
type TileInfo = (char, u32, u32);

/// The 144 tiles of a standard Bananagrams game. Points are the scrabble letter values,
/// used by the point based scoring functions.
const BANANAGRAMS: &[TileInfo] = &[
    ('A', 13, 1),
    ('B', 3, 3),
    ('C', 3, 3),
    ('D', 6, 2),
    ('E', 18, 1),
    ('F', 3, 4),
    ('G', 4, 2),
    ('H', 3, 4),
    ('I', 12, 1),
    ('J', 2, 8),
    ('K', 2, 5),
    ('L', 5, 1),
    ('M', 3, 3),
    ('N', 8, 1),
    ('O', 11, 1),
    ('P', 3, 3),
    ('Q', 2, 10),
    ('R', 9, 1),
    ('S', 6, 1),
    ('T', 9, 1),
    ('U', 6, 1),
    ('V', 3, 4),
    ('W', 3, 4),
    ('X', 2, 8),
    ('Y', 3, 4),
    ('Z', 2, 10),
];

/// The tile distribution of a game, with the points per letter.
#[derive(Debug, Clone)]
pub struct TileSet {
    tiles: &'static [TileInfo],
}

impl Default for TileSet {
    fn default() -> Self {
        TileSet::new()
    }
}

impl TileSet {
    /// Return the standard Bananagrams tileset.
    pub fn new() -> TileSet {
        TileSet { tiles: BANANAGRAMS }
    }

    /// Return the points for letter
    pub fn points(&self, letter: Letter) -> u32 {
        self.tiles[letter.index()].2
    }

    /// Return the number of tiles with this letter in the tileset
    pub fn count(&self, letter: Letter) -> u32 {
        self.tiles[letter.index()].1
    }

    /// Total number of tiles
    pub fn len(&self) -> usize {
        self.tiles.iter().map(|tile| tile.1 as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of the points of `letters`
    pub fn points_of(&self, letters: impl IntoIterator<Item = Letter>) -> u32 {
        letters.into_iter().map(|letter| self.points(letter)).sum()
    }

    /// All tiles of the set as a multiset.
    pub fn tiles(&self) -> Tiles {
        let mut tiles = Tiles::new();
        for letter in Letter::all() {
            tiles.insert_times(letter, self.count(letter) as usize);
        }
        tiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{tiles::encode, Error};

    #[test]
    fn test_tileset() {
        let tileset = TileSet::new();
        assert_eq!(tileset.len(), 144);
        assert_eq!(tileset.tiles().len(), 144);
        for (letter, tile) in Letter::all().zip(BANANAGRAMS) {
            assert_eq!(letter.to_char(), tile.0);
        }
    }

    #[test]
    fn test_points() -> Result<(), Error> {
        let tileset = TileSet::new();
        assert_eq!(tileset.points_of(encode("quiz")?.iter().copied()), 22);
        assert_eq!(tileset.points_of(encode("eat")?.iter().copied()), 3);
        Ok(())
    }
}
