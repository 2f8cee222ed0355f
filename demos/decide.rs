use anyhow::Result;
use bananagrams_solver::{
    heuristics, AStar, Board, Context, Coord, Lexicon, OneLook, Sampling, Strategy, TileBag,
    Tiles,
};
use flexi_logger::Logger;
use std::time::Instant;

const WORDS: &[&str] = &[
    "at", "as", "ate", "bat", "bats", "bear", "bread", "cab", "cat", "cats", "coat", "dare",
    "date", "eat", "oat", "oats", "rat", "rate", "read", "sat", "sea", "seat", "star", "stare",
    "tab", "tabs", "tea", "tear", "toad", "toe", "trade", "tread",
];

const STATE: &[&str] = &["cat..", "a.o..", "bread"];

fn show<S: Strategy>(
    player: &mut S,
    lexicon: &Lexicon,
    board: &Board,
    hand: &Tiles,
    context: &Context,
) {
    let now = Instant::now();
    let decision = player.decide(lexicon, board, hand, context);
    let dt = now.elapsed().as_secs_f32();
    println!("{:<50} {:.3} s  {}", player.name(), dt, decision);
}

fn run() -> Result<()> {
    let _logger = Logger::try_with_env_or_str("info")?.start()?;
    let lexicon = match std::env::args().nth(1) {
        Some(wordfile) => Lexicon::from_file(&wordfile)?,
        None => Lexicon::from_words(WORDS)?,
    };
    eprintln!("{}", lexicon);

    let board = Board::from_strings_at(Coord::ORIGIN, STATE)?;
    let hand: Tiles = "stareo".parse()?;
    println!("{}\n", board);
    println!("Hand: {}", hand);
    let validation = board.check(&lexicon);
    println!("Board valid: {}\n", validation.is_valid());

    // the pool is what is not on the board or in a hand
    let full = TileBag::standard();
    let taken = TileBag::from(&(board.letters() + hand));
    let pool = full - taken;
    let context = Context::new(pool, vec![hand.len(), 15, 12]);
    println!("Pool: {} tiles, peel odds {:.2}\n", context.pool.len(), context.peel_odds());

    show(&mut OneLook::longest_word(), &lexicon, &board, &hand, &context);
    show(&mut OneLook::scrabble(), &lexicon, &board, &hand, &context);
    show(&mut AStar::tile_count(), &lexicon, &board, &hand, &context);
    show(
        &mut AStar::scrabble().with_node_budget(500),
        &lexicon,
        &board,
        &hand,
        &context,
    );
    show(
        &mut Sampling::trial(OneLook::longest_word(), heuristics::average_word_length),
        &lexicon,
        &board,
        &hand,
        &context,
    );
    show(
        &mut Sampling::smart(AStar::tile_count(), heuristics::average_word_points, 3),
        &lexicon,
        &board,
        &hand,
        &context,
    );
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:?}", err);
    }
}
