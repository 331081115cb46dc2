use criterion::{black_box, criterion_group, criterion_main, Criterion};
use weatheria::{
    category_breakdown, overall_average, warming_trend, ExtremeCategory, ExtremeCategoryCount,
    MonthlyAverage,
};

fn three_years_of_months() -> Vec<MonthlyAverage> {
    (0..36)
        .map(|i| MonthlyAverage {
            month: format!("{}-{:02}", 2022 + i / 12, i % 12 + 1),
            avg_max: 27.0 + (i % 12) as f64 * 0.3,
            avg_min: 16.0 + (i % 12) as f64 * 0.2,
        })
        .collect()
}

fn bench_engine(c: &mut Criterion) {
    let months = three_years_of_months();
    let counts = vec![
        ExtremeCategoryCount {
            category: ExtremeCategory::VeryHot,
            count: 23,
            avg_temp: 31.2,
        },
        ExtremeCategoryCount {
            category: ExtremeCategory::Normal,
            count: 700,
            avg_temp: 22.0,
        },
        ExtremeCategoryCount {
            category: ExtremeCategory::Cool,
            count: 373,
            avg_temp: 13.5,
        },
    ];

    c.bench_function("overall_average", |b| {
        b.iter(|| overall_average(black_box(&months)))
    });
    c.bench_function("warming_trend", |b| {
        b.iter(|| warming_trend(black_box(&months)))
    });
    c.bench_function("category_breakdown", |b| {
        b.iter(|| category_breakdown(black_box(&counts)))
    });
}

criterion_group!(benches, bench_engine);
criterion_main!(benches);
