//! Performance benchmarks for jsonform-state operations.
//!
//! Run with: cargo bench --package jsonform-state

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use jsonform_state::{get, remove, set, Map, Path, Value};

// ============================================================================
// Helper functions to generate test data
// ============================================================================

/// Generate a flat document with N fields
fn generate_flat_doc(num_fields: usize) -> Value {
    let mut obj = Map::new();
    for i in 0..num_fields {
        obj.insert(format!("field_{}", i), Value::from(i));
    }
    Value::from(obj)
}

/// Generate a deeply nested document and the path to its innermost leaf
fn generate_nested_doc(depth: usize) -> (Value, Path) {
    let mut current = Value::object([("value", Value::from(42))]);
    let mut path = Path::root();
    for i in (0..depth).rev() {
        let key = format!("level_{}", i);
        current = Value::object([(key, current), ("sibling".to_string(), Value::from(i))]);
    }
    for i in 0..depth {
        path.push_key(format!("level_{}", i));
    }
    (current, path.key("value"))
}

/// Generate an array of N small objects
fn generate_array_doc(len: usize) -> Value {
    let items = (0..len).map(|i| {
        Value::object([
            ("id", Value::from(i)),
            ("name", Value::string(format!("item {}", i))),
        ])
    });
    Value::object([("items", Value::array(items))])
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_set_flat(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_flat_doc");

    for num_fields in [10, 100, 1000, 10000] {
        group.throughput(Throughput::Elements(num_fields as u64));
        let doc = generate_flat_doc(num_fields);
        let path = Path::root().key(format!("field_{}", num_fields / 2));

        group.bench_with_input(BenchmarkId::from_parameter(num_fields), &num_fields, |b, _| {
            b.iter(|| set(black_box(&doc), black_box(&path), Value::from(-1)));
        });
    }

    group.finish();
}

fn bench_set_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_nested_doc");

    for depth in [5, 10, 20, 50] {
        let (doc, path) = generate_nested_doc(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, _| {
            b.iter(|| set(black_box(&doc), black_box(&path), Value::from(0)));
        });
    }

    group.finish();
}

fn bench_get_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_nested_doc");

    for depth in [5, 10, 20, 50] {
        let (doc, path) = generate_nested_doc(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, _| {
            b.iter(|| black_box(get(black_box(&doc), black_box(&path)).is_some()));
        });
    }

    group.finish();
}

fn bench_remove_array_element(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_array_element");

    for len in [10, 100, 1000] {
        group.throughput(Throughput::Elements(len as u64));
        let doc = generate_array_doc(len);
        let path = Path::root().key("items").index(0);

        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, _| {
            b.iter(|| remove(black_box(&doc), black_box(&path)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_set_flat,
    bench_set_nested,
    bench_get_nested,
    bench_remove_array_element
);
criterion_main!(benches);
