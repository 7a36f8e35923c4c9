use criterion::{criterion_group, criterion_main, Criterion};
use expendibots::alpha_beta_searcher::SearchContext;
use expendibots::board::GameState;
use expendibots::boom_search::search_best_action;
use expendibots::evaluate::EvaluationWeights;

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("alpha beta");
    group.sample_size(10);

    for depth in [3, 4] {
        group.bench_function(format!("initial position depth {}", depth), |b| {
            b.iter(|| search_initial_position(depth, false))
        });
        group.bench_function(format!("initial position depth {} parallel", depth), |b| {
            b.iter(|| search_initial_position(depth, true))
        });
    }

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

fn search_initial_position(depth: u8, parallel: bool) {
    let mut context = SearchContext::with_parallel(depth, parallel);
    let state = GameState::initial();
    let action = search_best_action(&mut context, &state, &EvaluationWeights::default())
        .expect("the initial position has legal actions");
    assert!(state.is_legal(&action));
}
