use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use dhruv_janma::{
    AnalysisConfig, FixedSkySource, JanmaConfig, MeanMotionSource, ReferenceSample,
    SamplingConfig, SignatureEngine, analyze, generate_matrix, purify_matrix,
};

fn matrix_bench(c: &mut Criterion) {
    let date = NaiveDate::from_ymd_opt(1989, 10, 12).unwrap();
    let config = SamplingConfig::default();

    let mut group = c.benchmark_group("matrix");
    group.sample_size(20);
    group.bench_function("generate_fixed_1920", |b| {
        let src = FixedSkySource::default();
        b.iter(|| generate_matrix(&src, black_box(date), &config))
    });
    group.bench_function("generate_mean_motion_1920", |b| {
        let src = MeanMotionSource::default();
        b.iter(|| generate_matrix(&src, black_box(date), &config))
    });
    group.bench_function("purify_1920", |b| {
        let matrix = generate_matrix(&FixedSkySource::default(), date, &config).unwrap();
        b.iter(|| {
            let mut m = matrix.clone();
            purify_matrix(&mut m, &config.rashi_multipliers);
            m
        })
    });
    group.finish();
}

fn pipeline_bench(c: &mut Criterion) {
    let date = NaiveDate::from_ymd_opt(1989, 10, 12).unwrap();
    let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();

    let mut group = c.benchmark_group("pipeline");
    group.sample_size(20);
    group.bench_function("analyze_1920", |b| {
        let cfg = SamplingConfig::default();
        let mut matrix = generate_matrix(&FixedSkySource::default(), date, &cfg).unwrap();
        purify_matrix(&mut matrix, &cfg.rashi_multipliers);
        let analysis = AnalysisConfig::default();
        b.iter(|| {
            analyze(
                black_box(&matrix),
                &analysis,
                ReferenceSample::default(),
                date,
                today,
            )
        })
    });
    group.bench_function("signature_mean_motion", |b| {
        let engine =
            SignatureEngine::new(MeanMotionSource::default(), JanmaConfig::default()).unwrap();
        b.iter(|| engine.run(black_box(date), today))
    });
    group.finish();
}

criterion_group!(benches, matrix_bench, pipeline_bench);
criterion_main!(benches);
