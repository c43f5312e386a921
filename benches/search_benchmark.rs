use criterion::{black_box, criterion_group, criterion_main, Criterion};

use sequencium::board::{Board, Player};
use sequencium::engine::SearchEngine;

/// Mid-game 6x6 position: a few opening moves played from the standard
/// starting corners.
fn midgame_board() -> Board {
    let mut board = Board::standard(6);
    board.claim(0, 1, Player::A, 2);
    board.claim(4, 5, Player::B, 2);
    board.claim(1, 1, Player::A, 2);
    board.claim(3, 5, Player::B, 3);
    board
}

fn search_benchmark(c: &mut Criterion) {
    for depth in [3u8, 4, 5] {
        c.bench_function(&format!("search 6x6 depth {depth}"), |b| {
            b.iter(|| {
                let mut board = midgame_board();
                let mut engine = SearchEngine::with_table_slots(1 << 18);
                engine.search(black_box(&mut board), black_box(Player::A), black_box(depth))
            })
        });
    }
}

criterion_group!(benches, search_benchmark);
criterion_main!(benches);
