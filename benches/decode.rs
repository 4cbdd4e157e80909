use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use jsonpack::from_str;

fn base36(mut value: usize) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(std::char::from_digit((value % 36) as u32, 36).unwrap());
        value /= 36;
    }
    digits.iter().rev().collect()
}

/// Array of `size` user objects sharing three key symbols.
fn packed_users(size: usize) -> String {
    let mut text = vec![
        "id".to_string(),
        "name".to_string(),
        "active".to_string(),
    ];
    for i in 0..size {
        text.push(format!("user{}", i));
    }
    let ints: Vec<String> = (0..size).map(|i| base36(i)).collect();

    let mut instr = String::from("@");
    for i in 0..size {
        // keys 0..=2, name symbol 3+i, int symbol 3+size+i
        instr.push_str(&format!(
            "$|0|{}|1|{}|2|{}]",
            base36(3 + size + i),
            base36(3 + i),
            if i % 2 == 0 { "-1" } else { "-2" },
        ));
    }
    instr.push(']');

    format!("{}^{}^^^{}", text.join("|"), ints.join("|"), instr)
}

fn packed_nested(depth: usize) -> String {
    let mut instr = String::new();
    for _ in 0..depth {
        instr.push_str("@$|0|");
    }
    instr.push_str("-3");
    for _ in 0..depth {
        instr.push_str("]]");
    }
    format!("k^^^^{}", instr)
}

fn benchmark_decode_simple(c: &mut Criterion) {
    let packed = "id|name|Alice|active^7b^^^$|0|4|1|2|3|-1]";

    c.bench_function("decode_simple_object", |b| {
        b.iter(|| from_str(black_box(packed)))
    });
}

fn benchmark_decode_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_array");

    for size in [10, 50, 100, 500].iter() {
        let packed = packed_users(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &packed, |b, packed| {
            b.iter(|| from_str(black_box(packed)))
        });
    }

    group.finish();
}

fn benchmark_decode_nested(c: &mut Criterion) {
    let packed = packed_nested(32);

    c.bench_function("decode_nested_32_levels", |b| {
        b.iter(|| from_str(black_box(&packed)))
    });
}

fn benchmark_decode_escaped_text(c: &mut Criterion) {
    let entry = "a+b%7Cc%5Ed%25e%2Bf".repeat(8);
    let text: Vec<String> = (0..64).map(|i| format!("{}{}", entry, i)).collect();
    let indices: Vec<String> = (0..64).map(base36).collect();
    let packed = format!("{}^^^^@|{}]", text.join("|"), indices.join("|"));

    c.bench_function("decode_escaped_text", |b| {
        b.iter(|| from_str(black_box(&packed)))
    });
}

criterion_group!(
    benches,
    benchmark_decode_simple,
    benchmark_decode_array,
    benchmark_decode_nested,
    benchmark_decode_escaped_text
);
criterion_main!(benches);
