use bananagrams_solver::{AStar, Board, Coord, Lexicon, OneLook, Strategy, Tiles};
use criterion::{criterion_group, criterion_main, Criterion};

mod common;
use common::{BOARD, WORDS};

fn bench_all_moves(c: &mut Criterion, name: &str, letters: &str) {
    let lexicon = Lexicon::from_words(WORDS).unwrap();
    let board = Board::from_strings_at(Coord::ORIGIN, BOARD).unwrap();
    let hand: Tiles = letters.parse().unwrap();
    c.bench_function(&format!("board.all_moves.{}", name), |b| {
        b.iter(|| board.all_moves(&lexicon, &hand))
    });
}

fn bench_check(c: &mut Criterion) {
    let lexicon = Lexicon::from_words(WORDS).unwrap();
    let board = Board::from_strings_at(Coord::ORIGIN, BOARD).unwrap();
    c.bench_function("board.check", |b| b.iter(|| board.check(&lexicon)));
}

fn bench_strategy<S: Strategy>(c: &mut Criterion, mut player: S, letters: &str) {
    let lexicon = Lexicon::from_words(WORDS).unwrap();
    let board = Board::from_strings_at(Coord::ORIGIN, BOARD).unwrap();
    let hand: Tiles = letters.parse().unwrap();
    let name = format!("strategy.{}", player.name());
    c.bench_function(&name, |b| {
        b.iter(|| player.next_moves(&lexicon, &board, &hand))
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    bench_all_moves(c, "1", "set");
    bench_all_moves(c, "2", "stare");
    bench_check(c);
    bench_strategy(c, OneLook::longest_word(), "stare");
}

fn slow_benchmarks(c: &mut Criterion) {
    bench_all_moves(c, "3", "roastgne");
    bench_strategy(c, AStar::tile_count().with_node_budget(200), "stare");
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(60);
    targets = criterion_benchmark
}

criterion_group! {
    name = slow;
    config = Criterion::default()
        .sample_size(10);
    targets = slow_benchmarks
}

criterion_main!(benches, slow);
