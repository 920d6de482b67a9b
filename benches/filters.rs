//! Filter and row-operation benchmarks over synthetic columns
//!
//! Run with: cargo bench --bench filters

use colsift::date::calendar::days_from_civil;
use colsift::date::packed::from_epoch_days;
use colsift::query::{both, date_column, number_column};
use colsift::{Column, SamplingConfig, Table};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn make_table(n: usize) -> Table {
    let start = days_from_civil(2000, 1, 1);
    let dates = (0..n)
        .map(|i| from_epoch_days(start + (i % 7300) as i64).unwrap())
        .collect();
    // every 97th value missing
    let approval = (0..n)
        .map(|i| if i % 97 == 0 { f64::NAN } else { (i % 100) as f64 })
        .collect();
    let target = (0..n).map(|i| ((i * 31) % 100) as f64).collect();

    Table::from_columns([
        ("date", Column::new_date(dates)),
        ("approval", Column::new_f64(approval)),
        ("target", Column::new_f64(target)),
    ])
    .unwrap()
}

fn bench_single_column(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_column");

    for size in [10_000, 100_000, 1_000_000].iter() {
        let table = make_table(*size);
        let filter = number_column("approval").is_less_than(70.0);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(filter.apply(black_box(&table)).unwrap()));
        });
    }

    group.finish();
}

fn bench_two_column(c: &mut Criterion) {
    let mut group = c.benchmark_group("two_column");

    for size in [10_000, 100_000, 1_000_000].iter() {
        let table = make_table(*size);
        let filter = number_column("approval").is_less_than_column("target");

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(filter.apply(black_box(&table)).unwrap()));
        });
    }

    group.finish();
}

fn bench_combinator(c: &mut Criterion) {
    let mut group = c.benchmark_group("combinator");
    let size = 1_000_000;
    let table = make_table(size);
    let filter = both(
        date_column("date").is_in_april(),
        number_column("approval").is_greater_than(70.0),
    );

    group.throughput(Throughput::Elements(size as u64));

    group.bench_function("both_apply", |b| {
        b.iter(|| black_box(filter.apply(black_box(&table)).unwrap()));
    });

    group.bench_function("select_where", |b| {
        b.iter(|| black_box(table.select_where(black_box(&filter)).unwrap()));
    });

    group.finish();
}

fn bench_sampling(c: &mut Criterion) {
    let table = make_table(1_000_000);
    let config = SamplingConfig::seeded(7);

    c.bench_function("sample_x_10pct_1M", |b| {
        b.iter(|| black_box(table.sample_x_with(0.1, &config).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_single_column,
    bench_two_column,
    bench_combinator,
    bench_sampling
);
criterion_main!(benches);
