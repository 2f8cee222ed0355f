//! Basic types for working with bananagrams tiles.
mod codec;
mod hand;
mod letter;
mod word;

/// Inline capacity of a `Word`; longer words spill to the heap.
pub(super) const DIM: usize = 16;
pub use codec::{decode, decode_lowercase, encode};
pub use hand::Tiles;
pub use letter::Letter;
pub use word::Word;
