use holdem_odds::{
    classify, compare_with, full_deck, parse_cards, Card, EstimatorConfig, Estimator, Sampling,
    Showdown,
};

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        classifying_seven_cards,
        comparing_river_showdown,
        estimating_turn_exhaustive,
        estimating_flop_exhaustive,
        estimating_preflop_direct,
        estimating_preflop_materialized,
}

fn cards(s: &str) -> Vec<Card> {
    parse_cards(s).unwrap_or_default()
}

fn seeded(cap: usize, sampling: Sampling) -> Estimator {
    Estimator::new(
        EstimatorConfig::default()
            .sample_cap(cap)
            .sampling(sampling)
            .seed(42),
    )
}

fn classifying_seven_cards(c: &mut criterion::Criterion) {
    let deck = full_deck();
    c.bench_function("classify 2 hole + 5 community", |b| {
        b.iter(|| classify(&deck[10..12], &deck[20..25]))
    });
}

fn comparing_river_showdown(c: &mut criterion::Criterion) {
    let board = cards("K-c Q-d 2-h 3-s 4-c");
    let a = classify(&cards("A-s A-h"), &board).unwrap();
    let b = classify(&cards("K-s K-h"), &board).unwrap();
    c.bench_function("compare whole-set showdown", |bn| {
        bn.iter(|| compare_with(&a, &b, Showdown::WholeSet))
    });
    c.bench_function("compare best-five showdown", |bn| {
        bn.iter(|| compare_with(&a, &b, Showdown::BestFive))
    });
}

fn estimating_turn_exhaustive(c: &mut criterion::Criterion) {
    let (a, b, board) = (cards("A-s A-h"), cards("K-s K-h"), cards("K-c Q-d 2-h 3-s"));
    let est = seeded(usize::MAX, Sampling::Direct);
    c.bench_function("estimate turn (44 completions)", |bn| {
        bn.iter(|| est.estimate(&a, &b, &board))
    });
}

fn estimating_flop_exhaustive(c: &mut criterion::Criterion) {
    let (a, b, board) = (cards("A-s A-h"), cards("K-s K-h"), cards("K-c Q-d 2-h"));
    let est = seeded(usize::MAX, Sampling::Direct);
    c.bench_function("estimate flop (990 completions)", |bn| {
        bn.iter(|| est.estimate(&a, &b, &board))
    });
}

fn estimating_preflop_direct(c: &mut criterion::Criterion) {
    let (a, b) = (cards("A-s A-h"), cards("K-s K-h"));
    let est = seeded(10_000, Sampling::Direct);
    c.bench_function("estimate preflop 10k direct", |bn| {
        bn.iter(|| est.estimate(&a, &b, &[]))
    });
}

fn estimating_preflop_materialized(c: &mut criterion::Criterion) {
    let (a, b) = (cards("A-s A-h"), cards("K-s K-h"));
    let est = seeded(10_000, Sampling::Materialize);
    c.bench_function("estimate preflop 10k materialized", |bn| {
        bn.iter(|| est.estimate(&a, &b, &[]))
    });
}
