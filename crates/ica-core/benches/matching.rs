use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ica_core::catalog::Catalog;
use ica_core::matching::find_jobs_by_role;
use ica_core::model::JobPosting;

fn large_board(copies: usize) -> Vec<JobPosting> {
    let base = Catalog::builtin(Utc::now()).jobs;
    (0..copies)
        .flat_map(|i| {
            base.iter().cloned().map(move |mut job| {
                job.id = format!("{}-{i}", job.id);
                job
            })
        })
        .collect()
}

fn bench_find_jobs(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_jobs_by_role");
    let builtin = Catalog::builtin(Utc::now()).jobs;
    let board = large_board(250);

    group.bench_function("builtin/engineer", |b| {
        b.iter(|| find_jobs_by_role(black_box(&builtin), black_box("engineer")))
    });

    group.bench_function("1000/engineer", |b| {
        b.iter(|| find_jobs_by_role(black_box(&board), black_box("engineer")))
    });

    group.bench_function("1000/empty_query", |b| {
        b.iter(|| find_jobs_by_role(black_box(&board), black_box("")))
    });

    group.bench_function("1000/no_match", |b| {
        b.iter(|| find_jobs_by_role(black_box(&board), black_box("astronaut")))
    });

    group.finish();
}

criterion_group!(benches, bench_find_jobs);
criterion_main!(benches);
