//! Benchmarks for the Tauron shell
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use tauron::{AppShell, ShellAction, Tab};

fn navigation_script(count: usize) -> Vec<ShellAction> {
    let names = ["feed", "map", "log", "bogus", "impact", "about", "home"];
    (0..count)
        .map(|i| ShellAction::select(names[i % names.len()]))
        .collect()
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");

    for size in [100, 1000, 10000] {
        let script = navigation_script(size);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("select_tab_{}", size), |b| {
            b.iter(|| {
                let mut shell = AppShell::default();
                shell.dispatch(ShellAction::Dismiss);
                for action in &script {
                    black_box(shell.dispatch(action.clone()));
                }
            })
        });

        group.bench_function(format!("dispatch_and_render_{}", size), |b| {
            b.iter(|| {
                let mut shell = AppShell::default();
                shell.dispatch(ShellAction::Dismiss);
                for action in &script {
                    if !shell.dispatch(action.clone()).is_empty() {
                        black_box(shell.render());
                    }
                }
            })
        });
    }

    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    group.bench_function("known", |b| {
        b.iter(|| {
            for tab in Tab::ALL {
                black_box(Tab::resolve(black_box(tab.as_str())));
            }
        })
    });

    group.bench_function("unknown", |b| {
        b.iter(|| black_box(Tab::resolve(black_box("unknown-xyz"))))
    });

    group.finish();
}

criterion_group!(benches, bench_dispatch, bench_resolve);
criterion_main!(benches);
