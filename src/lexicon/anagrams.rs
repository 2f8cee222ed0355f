use super::Lexicon;
use crate::tiles::{Tiles, Word};

/// State of the depth first walk: a node, with the tiles left to spend below it.
struct Frame {
    node: u32,
    tiles: Tiles,
    wildcards: usize,
    word: Word,
}

/// Lazy iterator over the words that can be spelled with a set of tiles.
///
/// A word may use any subset of the tiles, and at most `wildcards` letters that are not
/// among the tiles. A letter from the tiles is always preferred over a wildcard, so every
/// word is produced exactly once. Words come in alphabetic order.
pub struct Anagrams<'a> {
    lexicon: &'a Lexicon,
    stack: Vec<Frame>,
}

impl<'a> Anagrams<'a> {
    pub(super) fn new(lexicon: &'a Lexicon, tiles: Tiles, wildcards: usize) -> Anagrams<'a> {
        let root = Frame {
            node: lexicon.root(),
            tiles,
            wildcards,
            word: Word::new(),
        };
        Anagrams {
            lexicon,
            stack: vec![root],
        }
    }

    fn expand(&mut self, frame: &Frame) {
        let children: Vec<_> = self.lexicon.children(frame.node).collect();
        // reversed, so the first letter is on top of the stack
        for &(letter, child) in children.iter().rev() {
            let mut tiles = frame.tiles;
            let wildcards = if tiles.remove(letter).is_ok() {
                frame.wildcards
            } else if frame.wildcards > 0 {
                frame.wildcards - 1
            } else {
                continue;
            };
            let mut word = frame.word.clone();
            word.push(letter);
            self.stack.push(Frame {
                node: child,
                tiles,
                wildcards,
                word,
            });
        }
    }
}

impl<'a> Iterator for Anagrams<'a> {
    type Item = Word;

    fn next(&mut self) -> Option<Word> {
        while let Some(frame) = self.stack.pop() {
            self.expand(&frame);
            if !frame.word.is_empty() && self.lexicon.is_terminal(frame.node) {
                return Some(frame.word);
            }
        }
        None
    }
}
