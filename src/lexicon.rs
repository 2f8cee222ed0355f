mod anagrams;
mod trievec;

pub use self::anagrams::Anagrams;
use self::trievec::TrieVec;
use crate::letterset::LetterSet;
use crate::tiles::{self, Letter, Tiles, Word};
use crate::Error;
use log::info;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs::read_to_string;

/// A node in the lexicon graph.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
struct Node {
    /// Index in `edges` of the first outgoing edge
    first: u32,
    /// Letters of the outgoing edges, in alphabetic order
    letters: LetterSet,
    /// A word ends in this node
    terminal: bool,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// The word list, stored as a directed acyclic word graph.
///
/// The graph is a trie in which nodes with identical subtrees are merged, so shared
/// suffixes ("-ing", "-ness") are stored once.
/// The lexicon is immutable after it is built. It can be shared by reference between
/// any number of players and threads.
pub struct Lexicon {
    nodes: Vec<Node>,
    /// Target node of each edge. The edges of a node are contiguous.
    edges: Vec<u32>,
    root: u32,
    word_count: usize,
    /// Path of the wordfile used to build the lexicon.
    /// Empty if the lexicon is not build from a file.
    wordfile: String,
}

impl fmt::Display for Lexicon {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Lexicon: {} words, {} nodes from '{}'>",
            self.word_count,
            self.nodes.len(),
            self.wordfile
        )
    }
}

/// Merges identical subtrees while copying a trie into the compact node and edge tables.
#[derive(Default)]
struct Compactor {
    nodes: Vec<Node>,
    edges: Vec<u32>,
    registry: HashMap<(bool, Vec<(Letter, u32)>), u32>,
}

impl Compactor {
    /// Add the subtree `trie` and return the index of its root node.
    fn add(&mut self, trie: &TrieVec<Letter>) -> u32 {
        let children: Vec<(Letter, u32)> = trie
            .children()
            .iter()
            .map(|(letter, child)| (*letter, self.add(child)))
            .collect();
        let key = (trie.terminal(), children);
        if let Some(&index) = self.registry.get(&key) {
            return index;
        }
        let node = Node {
            first: self.edges.len() as u32,
            letters: key.1.iter().map(|&(letter, _)| letter).collect(),
            terminal: key.0,
        };
        self.edges.extend(key.1.iter().map(|&(_, child)| child));
        let index = self.nodes.len() as u32;
        self.nodes.push(node);
        self.registry.insert(key, index);
        index
    }
}

impl From<TrieVec<Letter>> for Lexicon {
    fn from(trie: TrieVec<Letter>) -> Self {
        let word_count = trie.word_count();
        let mut compactor = Compactor::default();
        let root = compactor.add(&trie);
        Lexicon {
            nodes: compactor.nodes,
            edges: compactor.edges,
            root,
            word_count,
            wordfile: String::new(),
        }
    }
}

impl Lexicon {
    /// Read the lexicon from a file. The file must be encoded in utf-8 and
    /// have one word per line. Empty lines are skipped.
    /// ## Errors
    /// Fails if the file can not be read, or a word contains anything but letters.
    pub fn from_file(wordfile: &str) -> Result<Lexicon, Error> {
        let contents = read_to_string(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let mut builder = TrieVec::new();
        for word in contents.lines().map(str::trim).filter(|word| !word.is_empty()) {
            builder.insert(&*tiles::encode(word)?);
        }
        let mut lexicon = Lexicon::from(builder);
        lexicon.wordfile = String::from(wordfile);
        info!("loaded {}", lexicon);
        Ok(lexicon)
    }

    /// Build a lexicon from a list of words. Like [`from_file`](Lexicon::from_file), empty
    /// words are skipped.
    /// ## Errors
    /// If a word contains anything but letters.
    /// ## Examples
    /// ```
    /// # use bananagrams_solver::{Lexicon, Error};
    /// let lexicon = Lexicon::from_words(&["ate", "eat", "tea"])?;
    /// assert!(lexicon.contains("EAT"));
    /// assert!(!lexicon.contains("tae"));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_words(words: &[&str]) -> Result<Lexicon, Error> {
        let mut builder = TrieVec::new();
        for word in words.iter().map(|word| word.trim()).filter(|word| !word.is_empty()) {
            builder.insert(&*tiles::encode(word)?);
        }
        Ok(Lexicon::from(builder))
    }

    #[cfg(all(feature = "serde", feature = "bincode"))]
    /// Deserialize the lexicon from a bincoded file.
    /// ## Errors
    /// - If the file can not be read.
    /// - If the contents can not be deserialized
    pub fn deserialize_from(wordfile: &str) -> Result<Lexicon, Error> {
        use std::fs::File;
        use std::io::BufReader;
        let file = File::open(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let reader = BufReader::new(file);
        let mut lexicon: Lexicon = bincode::deserialize_from(reader)
            .map_err(|_| Error::LexiconDeserializeError(String::from(wordfile)))?;
        lexicon.wordfile = String::from(wordfile);
        info!("loaded {}", lexicon);
        Ok(lexicon)
    }

    #[cfg(all(feature = "serde", feature = "bincode"))]
    /// Save the compiled lexicon to a bincoded file, to be read by [`deserialize_from`](Lexicon::deserialize_from).
    /// ## Errors
    /// If the file can not be written.
    pub fn serialize_into(&self, path: &str) -> Result<(), Error> {
        use std::fs::File;
        use std::io::BufWriter;
        let file = File::create(path).map_err(|source| Error::ReadError {
            path: String::from(path),
            source,
        })?;
        bincode::serialize_into(BufWriter::new(file), self)
            .map_err(|err| Error::LexiconSerializeError(err.to_string()))
    }

    /// The number of words in the lexicon
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// The number of nodes, after merging identical subtrees.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Decode letters with the lexicon (lowercase) spelling.
    pub fn decode(&self, letters: &[Letter]) -> String {
        tiles::decode_lowercase(letters)
    }

    pub(crate) fn root(&self) -> u32 {
        self.root
    }

    pub(crate) fn is_terminal(&self, node: u32) -> bool {
        self.nodes[node as usize].terminal
    }

    /// Get the node reached from `node` by `letter`, if present.
    pub(crate) fn child(&self, node: u32, letter: Letter) -> Option<u32> {
        let Node { first, letters, .. } = self.nodes[node as usize];
        letters
            .index_of(letter)
            .map(|rank| self.edges[first as usize + rank])
    }

    /// Iterate over the (letter, node) edges of `node`, in alphabetic order.
    pub(crate) fn children(&self, node: u32) -> impl Iterator<Item = (Letter, u32)> + '_ {
        let Node { first, letters, .. } = self.nodes[node as usize];
        letters
            .iter()
            .zip(self.edges[first as usize..].iter().copied())
    }

    /// Returns true if `word` is in the lexicon
    pub fn is_word(&self, word: &[Letter]) -> bool {
        let mut node = self.root;
        for &letter in word {
            match self.child(node, letter) {
                Some(child) => node = child,
                None => return false,
            }
        }
        self.is_terminal(node)
    }

    /// Returns true if `word` is in the lexicon. Case is ignored; a string with
    /// anything but letters is never a word.
    pub fn contains(&self, word: &str) -> bool {
        match tiles::encode(word) {
            Ok(letters) => self.is_word(&letters),
            Err(_) => false,
        }
    }

    /// Iterate over all words that can be formed with (some of) `letters`, plus
    /// at most `wildcards` letters of any kind. See [`Anagrams`].
    /// ## Examples
    /// ```
    /// # use bananagrams_solver::{Lexicon, Tiles, Error};
    /// let lexicon = Lexicon::from_words(&["ate", "eat", "tea", "tee", "at"])?;
    /// let hand: Tiles = "ate".parse()?;
    /// let words: Vec<String> = lexicon.anagrams(&hand, 0).map(|w| w.to_string()).collect();
    /// assert_eq!(words, ["AT", "ATE", "EAT", "TEA"]);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn anagrams(&self, letters: &Tiles, wildcards: usize) -> Anagrams<'_> {
        Anagrams::new(self, *letters, wildcards)
    }

    /// All words in the lexicon, in alphabetic order.
    pub fn words(&self) -> Vec<Word> {
        let mut result = Vec::with_capacity(self.word_count);
        let mut word = Word::new();
        self.collect_words(self.root, &mut word, &mut result);
        result
    }

    fn collect_words(&self, node: u32, word: &mut Word, result: &mut Vec<Word>) {
        if self.is_terminal(node) {
            result.push(word.clone());
        }
        for (letter, child) in self.children(node) {
            word.push(letter);
            self.collect_words(child, word, result);
            word.pop();
        }
    }
}
