use criterion::{black_box, criterion_group, criterion_main, Criterion};
use routex::{compile, match_path, parse, pattern, Options, Value};

use std::collections::HashMap;

fn pipeline(c: &mut Criterion) {
    let options = Options::default();

    c.bench_function("parse", |b| {
        b.iter(|| parse(black_box("/user/:id/posts/:post(\\d+)/:rest*")).unwrap())
    });

    c.bench_function("pattern", |b| {
        b.iter(|| pattern(black_box("/user/:id/posts/:post(\\d+)/:rest*"), &options).unwrap())
    });

    c.bench_function("match", |b| {
        b.iter(|| {
            match_path(
                black_box("/user/:id/posts/:post(\\d+)"),
                black_box("/user/alice/posts/42"),
                &options,
            )
            .unwrap()
        })
    });

    let builder = compile("/user/:id/posts/:post(\\d+)").unwrap();
    let values = HashMap::from([
        ("id".to_string(), Value::from("alice")),
        ("post".to_string(), Value::from(42)),
    ]);
    c.bench_function("render", |b| {
        b.iter(|| builder.render(black_box(&values)).unwrap())
    });
}

criterion_group!(benches, pipeline);
criterion_main!(benches);
