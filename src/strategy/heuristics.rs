//! Scoring functions that players plug in.
//!
//! - [`MoveScore`] ranks a single move; higher is better.
//! - [`HandScore`] estimates the work left in a hand; lower is better.
//! - [`BoardScore`] rates a board after a sample play; higher is better.
use crate::check::Validation;
use crate::tiles::{Letter, Tiles};
use crate::{Move, TileSet};

/// Score a move. The move with the highest score is played.
pub type MoveScore = fn(&Move) -> f64;

/// Estimate the cost to finish a hand.
pub type HandScore = fn(&Tiles) -> f64;

/// Rate the valid words of a board.
pub type BoardScore = fn(&Validation) -> f64;

/// Prefer the longest word
pub fn longest_word(mv: &Move) -> f64 {
    mv.word.len() as f64
}

/// Prefer the shortest word
pub fn shortest_word(mv: &Move) -> f64 {
    -(mv.word.len() as f64)
}

/// Prefer the word with the most scrabble points
pub fn scrabble_points(mv: &Move) -> f64 {
    TileSet::new().points_of(mv.word.iter().copied()) as f64
}

/// Number of tiles left in the hand
pub fn tile_count(hand: &Tiles) -> f64 {
    hand.len() as f64
}

/// Scrabble points of the tiles left in the hand. Hard letters count more.
pub fn hand_points(hand: &Tiles) -> f64 {
    TileSet::new().points_of(hand.iter()) as f64
}

/// Average length of the valid words, 0 without words
pub fn average_word_length(validation: &Validation) -> f64 {
    average(validation, |word| word.len() as f64)
}

/// Average scrabble points of the valid words, 0 without words
pub fn average_word_points(validation: &Validation) -> f64 {
    let tileset = TileSet::new();
    average(validation, |word| tileset.points_of(word.iter().copied()) as f64)
}

fn average<F: Fn(&[Letter]) -> f64>(validation: &Validation, score: F) -> f64 {
    if validation.valid.is_empty() {
        return 0.0;
    }
    let total: f64 = validation.valid.iter().map(|w| score(&w.word)).sum();
    total / validation.valid.len() as f64
}
