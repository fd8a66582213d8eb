use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use damson_draughts::game_state::game_state::GameState;
use damson_draughts::search::board_scoring::StandardScorer;
use damson_draughts::search::minimax::find_best_move;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    fen: &'static str,
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        fen: "b1b1b1b1/1b1b1b1b/b1b1b1b1/8/8/1w1w1w1w/w1w1w1w1/1w1w1w1w w",
    },
    BenchCase {
        name: "midgame_tension",
        fen: "b1b1b1b1/1b1b1b1b/4b1b1/1b1b4/2w1w3/5w1w/w1w1w1w1/1w1w1w1w w",
    },
    BenchCase {
        name: "kings_endgame",
        fen: "8/5b2/2B5/8/4W3/5w2/8/8 w",
    },
];

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax_fixed_depth");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(6));
    group.sample_size(20);

    for case in CASES {
        let game = GameState::from_fen(case.fen).expect("benchmark FEN should parse");

        // Correctness guard: the search must produce a move here.
        let warmup = find_best_move(&game, &StandardScorer).expect("search should run");
        assert!(warmup.best_move.is_some(), "no move in {}", case.name);

        let bench_game = game.clone();
        group.bench_with_input(
            BenchmarkId::from_parameter(case.name),
            &bench_game,
            |b, state| {
                b.iter(|| {
                    let result = find_best_move(black_box(state), &StandardScorer)
                        .expect("search benchmark run should succeed");
                    black_box(result.nodes)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(search_benches, bench_search);
criterion_main!(search_benches);
