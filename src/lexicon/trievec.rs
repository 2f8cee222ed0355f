/// Trie that collects the words while a lexicon is loaded.
///
/// Children are kept sorted, so the compacted lexicon lists the edges of a node in
/// alphabetic order. A word that is inserted twice is stored once.
/// The idea of `TrieVec` is borrowed from the [`louds`](https://github.com/ajalab/louds) crate.
#[derive(Debug, Default)]
pub struct TrieVec<T> {
    children: Vec<(T, Box<TrieVec<T>>)>,
    terminal: bool,
}

impl<T> TrieVec<T> {
    pub fn new() -> TrieVec<T> {
        TrieVec {
            children: Vec::new(),
            terminal: false,
        }
    }

    pub fn children(&self) -> &[(T, Box<Self>)] {
        &self.children
    }

    /// A word ends here
    pub fn terminal(&self) -> bool {
        self.terminal
    }

    /// Number of distinct words in the trie
    pub fn word_count(&self) -> usize {
        let below: usize = self.children.iter().map(|(_, child)| child.word_count()).sum();
        below + self.terminal as usize
    }
}

impl<T: Ord + Clone> TrieVec<T> {
    /// Insert `key`. Returns false if it was already present.
    pub fn insert(&mut self, key: &[T]) -> bool {
        let mut t = self;
        for c in key {
            let pos = match t.children.binary_search_by(|(c2, _)| c2.cmp(c)) {
                Ok(pos) => pos,
                Err(pos) => {
                    t.children.insert(pos, (c.clone(), Box::new(TrieVec::new())));
                    pos
                }
            };
            t = &mut { t }.children[pos].1;
        }
        !std::mem::replace(&mut t.terminal, true)
    }
}
