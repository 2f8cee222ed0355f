//! A bananagrams library for Rust.
//! <br>
//! This crate finds the legal moves for a hand of tiles on an unbounded bananagrams grid,
//! and lets automated players choose between playing, dumping a tile and waiting for a peel.
//! It can be used to compare strategies in the game.
//! It can use the `rayon` crate to generate moves in parallel.
//!
//! # How to use `bananagrams_solver`
//! Start by loading a lexicon. The wordfile must be in utf-8 and contain one word per line.
//! A board is an unbounded grid of letters; coordinates may be negative.
//! Generate the moves for a hand with [`Board::all_moves`], check a board with
//! [`Board::check`], or let a [`Strategy`] decide what to do.
//!
//! # Basic usage
//!  ```
//! use bananagrams_solver::{Board, Context, Lexicon, OneLook, Strategy, TileBag, Tiles};
//!
//! let lexicon = Lexicon::from_words(&["cat", "cats", "at", "as"])?;
//! let mut board = Board::new();
//! let mut hand: Tiles = "tacs".parse()?;
//! let moves = board.all_moves(&lexicon, &hand);
//! assert_eq!(moves.count_moves(), 4);
//!
//! let mut player = OneLook::longest_word();
//! let plan = player.next_moves(&lexicon, &board, &hand).unwrap();
//! for mv in &plan {
//!     board.play(mv, &mut hand)?;
//! }
//! assert!(board.check(&lexicon).is_valid());
//! println!("{}", board);
//!
//! let context = Context::new(TileBag::standard(), vec![hand.len(), 21]);
//! println!("{}", player.decide(&lexicon, &board, &hand, &context));
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! # About implementation
//!
//! The lexicon is a directed acyclic word graph: a trie in which identical subtrees are
//! merged. The outgoing letters of a node are kept in a 32 bit set, and the children of
//! a node are stored consecutively, so a child is found by counting the bits below its letter.
//!
//! To generate moves, the anagrams of the hand plus the letters in a row or column are
//! enumerated once per line, and fitted at every position where they touch an existing tile.
//! Each fit is then checked against the words it forms across.
mod board;
mod check;
mod error;
mod letterset;
mod lexicon;
mod movegen;
pub mod strategy;
mod tilebag;
mod tiles;
mod tileset;

pub use board::{Axis, Board, Coord};
pub use check::{BoardWord, Validation};
pub use error::Error;
pub use letterset::LetterSet;
pub use lexicon::{Anagrams, Lexicon};
pub use movegen::{Move, Moves};
pub use strategy::{
    heuristics, no_move, AStar, AStarConfig, Context, Decision, OneLook, Sampling,
    SamplingConfig, Strategy,
};
pub use tilebag::TileBag;
pub use tiles::{decode, decode_lowercase, encode, Letter, Tiles, Word};
pub use tileset::TileSet;
