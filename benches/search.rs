use criterion::{black_box, criterion_group, criterion_main, Criterion};
use connect4_minimax::board::Board;
use connect4_minimax::search::choose_move;

fn search(c: &mut Criterion) {
    let empty = Board::new();
    c.bench_function("depth 6 empty board", |b| {
        b.iter(|| choose_move(black_box(&empty), 6, empty.next_player()))
    });

    let midgame = Board::from_moves("44536253").expect("valid move string");
    c.bench_function("depth 6 midgame", |b| {
        b.iter(|| choose_move(black_box(&midgame), 6, midgame.next_player()))
    });
}

criterion_group!(benches, search);
criterion_main!(benches);
