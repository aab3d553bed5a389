use criterion::{Criterion, black_box, criterion_group, criterion_main};
use wordle_advisor::core::{History, parse_feedback};
use wordle_advisor::solver::{Recommender, ScoringWeights, score_against};
use wordle_advisor::wordlists::{DEFAULT_WORDS, loader::words_from_slice};

fn bench_recommend(c: &mut Criterion) {
    let words = words_from_slice(&DEFAULT_WORDS[..500]);
    let recommender = Recommender::new(&words, ScoringWeights::default());

    let empty = History::new();
    c.bench_function("recommend_empty_history_500", |b| {
        b.iter(|| recommender.recommend(black_box(&empty)));
    });

    let history: History = ["tx a? rx ex sx"]
        .iter()
        .filter_map(|f| parse_feedback(f).ok())
        .collect();
    c.bench_function("recommend_after_feedback_500", |b| {
        b.iter(|| recommender.recommend(black_box(&history)));
    });
}

fn bench_score_against(c: &mut Criterion) {
    let words = words_from_slice(DEFAULT_WORDS);
    let weights = ScoringWeights::default();

    c.bench_function("score_against_full_list", |b| {
        b.iter(|| score_against(black_box(&words[0]), &words, &weights));
    });
}

criterion_group!(benches, bench_recommend, bench_score_against);
criterion_main!(benches);
