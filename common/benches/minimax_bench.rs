use common::games::tictactoe::{Board, Mark, Marker, find_best_move};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_minimax_self_play() {
    let mut board = Board::new();
    let mut marker = Marker::X;

    while let Some(pos) = find_best_move(&board, marker).position {
        if board.place(pos, marker).is_err() {
            break;
        }
        marker = marker.opponent();
    }
}

fn bench_minimax_single_move_empty_board() {
    let board = Board::new();
    black_box(find_best_move(black_box(&board), Marker::X));
}

fn bench_minimax_single_move_mid_game() {
    let board = Board::from_rows([
        [Mark::X, Mark::Empty, Mark::Empty],
        [Mark::Empty, Mark::O, Mark::Empty],
        [Mark::Empty, Mark::Empty, Mark::X],
    ]);
    black_box(find_best_move(black_box(&board), Marker::O));
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group.sample_size(20);

    group.bench_function("self_play", |b| b.iter(bench_minimax_self_play));
    group.bench_function("single_move_empty", |b| {
        b.iter(bench_minimax_single_move_empty_board)
    });
    group.bench_function("single_move_mid_game", |b| {
        b.iter(bench_minimax_single_move_mid_game)
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
