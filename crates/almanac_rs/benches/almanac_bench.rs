use almanac_rs::{
    GeoLocation, Instant, PhaseRegistry, add_time, moon_illumination, moon_position, moon_times,
    position, times, times_with,
};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

const LAT: f64 = 50.5;
const LNG: f64 = 30.5;

fn bench_date() -> Instant {
    Instant::from_unix_millis(1_362_441_600_000) // 2013-03-05T00:00:00Z
}

fn sun_bench(c: &mut Criterion) {
    let date = bench_date();
    let registry = add_time(&PhaseRegistry::standard(), -4.0, "blueHourDawn", "blueHourDusk");
    let location = GeoLocation::new(LAT, LNG).with_height(250.0);

    let mut group = c.benchmark_group("sun");
    group.bench_function("position", |b| {
        b.iter(|| position(black_box(date), black_box(LAT), black_box(LNG)))
    });
    group.bench_function("times", |b| {
        b.iter(|| times(black_box(date), black_box(LAT), black_box(LNG), black_box(0.0)))
    });
    group.bench_function("times_with_custom_phase", |b| {
        b.iter(|| times_with(black_box(date), black_box(&location), black_box(&registry)))
    });
    group.finish();
}

fn moon_bench(c: &mut Criterion) {
    let date = bench_date();

    let mut group = c.benchmark_group("moon");
    group.bench_function("position", |b| {
        b.iter(|| moon_position(black_box(date), black_box(LAT), black_box(LNG)))
    });
    group.bench_function("illumination", |b| {
        b.iter(|| moon_illumination(black_box(date)))
    });
    group.bench_function("times", |b| {
        b.iter(|| moon_times(black_box(date), black_box(LAT), black_box(LNG), black_box(true)))
    });
    group.finish();
}

criterion_group!(benches, sun_bench, moon_bench);
criterion_main!(benches);
