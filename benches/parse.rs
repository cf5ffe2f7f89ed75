use std::time::Duration;

use criterion::measurement::WallTime;
use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkGroup, BenchmarkId, Criterion,
    Throughput,
};
use jsontree::Value;

fn make_records(count: usize) -> Value {
    (0..count)
        .map(|i| {
            let mut record = Value::Null;
            if let Ok(slot) = record.at_mut("id") {
                *slot = Value::from(i as f64);
            }
            if let Ok(slot) = record.at_mut("name") {
                *slot = Value::from(format!("record-{i}"));
            }
            if let Ok(slot) = record.at_mut("active") {
                *slot = Value::from(i % 3 == 0);
            }
            if let Ok(slot) = record.at_mut("score") {
                *slot = Value::from(i as f64 * 0.125 - 7.5e3);
            }
            if let Ok(slot) = record.at_mut("tags") {
                *slot = (0..i % 5).map(|t| Value::from(format!("tag\t{t}"))).collect();
            }
            record
        })
        .collect()
}

fn make_tree(depth: usize, width: usize) -> Value {
    if depth == 0 {
        return Value::from("leaf");
    }
    (0..width)
        .map(|i| (format!("child{i}"), make_tree(depth - 1, width)))
        .collect()
}

fn bench_parse(group: &mut BenchmarkGroup<'_, WallTime>, name: &str, text: &str) {
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function(BenchmarkId::new("jsontree", name), |b| {
        b.iter(|| {
            let value = jsontree::parse(black_box(text)).unwrap();
            black_box(value);
        });
    });
    group.bench_function(BenchmarkId::new("serde_json", name), |b| {
        b.iter(|| {
            let value: serde_json::Value = serde_json::from_str(black_box(text)).unwrap();
            black_box(value);
        });
    });
}

fn bench_write(group: &mut BenchmarkGroup<'_, WallTime>, name: &str, value: &Value) {
    group.bench_function(BenchmarkId::new("compact", name), |b| {
        b.iter(|| black_box(jsontree::to_string(black_box(value))));
    });
    group.bench_function(BenchmarkId::new("pretty", name), |b| {
        b.iter(|| black_box(jsontree::to_string_pretty(black_box(value))));
    });
}

fn criterion_config() -> Criterion {
    if std::env::var("JSONTREE_BENCH_MINIMAL").is_ok() {
        Criterion::default()
            .warm_up_time(Duration::from_millis(1))
            .measurement_time(Duration::from_millis(10))
            .sample_size(10)
            .nresamples(1)
    } else {
        Criterion::default()
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let records = make_records(2_000);
    let tree = make_tree(5, 5);
    let records_text = jsontree::to_string(&records);
    let tree_text = jsontree::to_string_pretty(&tree);

    let mut parse = c.benchmark_group("parse");
    bench_parse(&mut parse, "records", &records_text);
    bench_parse(&mut parse, "deep_tree", &tree_text);
    parse.finish();

    let mut write = c.benchmark_group("write");
    bench_write(&mut write, "records", &records);
    bench_write(&mut write, "deep_tree", &tree);
    write.finish();
}

criterion_group! {
    name = benches;
    config = criterion_config();
    targets = criterion_benchmark
}
criterion_main!(benches);
