use criterion::{Criterion, black_box, criterion_group, criterion_main};
use dhruv_vedic_base::{
    calculate_all_bav, calculate_ashtakavarga, calculate_fixed_ashtakavarga, calculate_sav,
    kakshya_from_longitude, lagna_longitude_deg, nakshatra_from_longitude, rashi_from_longitude,
    tithi_from_longitudes, trikona_sodhana,
};

fn ashtakavarga_bench(c: &mut Criterion) {
    let rashis = [5u8, 10, 6, 5, 2, 7, 8];
    let lagna = 4u8;

    let mut group = c.benchmark_group("ashtakavarga");
    group.bench_function("all_bav", |b| {
        b.iter(|| calculate_all_bav(black_box(&rashis), black_box(lagna)))
    });
    group.bench_function("sav", |b| {
        let bavs = calculate_all_bav(&rashis, lagna);
        b.iter(|| calculate_sav(black_box(&bavs)))
    });
    group.bench_function("trikona_sodhana", |b| {
        let totals = [28u8, 25, 30, 20, 32, 22, 35, 18, 25, 27, 40, 15];
        b.iter(|| trikona_sodhana(black_box(&totals)))
    });
    group.bench_function("full_with_shodhita", |b| {
        b.iter(|| calculate_ashtakavarga(black_box(&rashis), black_box(lagna)))
    });
    group.bench_function("fixed_with_shodhita", |b| {
        b.iter(|| calculate_fixed_ashtakavarga(black_box(&rashis)))
    });
    group.finish();
}

fn lookup_bench(c: &mut Criterion) {
    let lon = 123.456;

    let mut group = c.benchmark_group("lookup");
    group.bench_function("rashi", |b| b.iter(|| rashi_from_longitude(black_box(lon))));
    group.bench_function("nakshatra", |b| {
        b.iter(|| nakshatra_from_longitude(black_box(lon)))
    });
    group.bench_function("kakshya", |b| b.iter(|| kakshya_from_longitude(black_box(lon))));
    group.bench_function("tithi", |b| {
        b.iter(|| tithi_from_longitudes(black_box(10.0), black_box(lon)))
    });
    group.bench_function("lagna", |b| {
        b.iter(|| lagna_longitude_deg(black_box(211.75), black_box(28.61)))
    });
    group.finish();
}

criterion_group!(benches, ashtakavarga_bench, lookup_bench);
criterion_main!(benches);
