use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use wordfield::{
    bits::{extract_field, extract_field_with, insert_byte},
    field::FieldSpec,
    value::ExtractMode,
};

fn gen_words(count: usize) -> Vec<u64> {
    // Deterministic but non-trivial pattern
    (0..count as u64)
        .map(|i| i.wrapping_mul(0x9E37_79B9_7F4A_7C15))
        .collect()
}

fn bench_insert_byte(c: &mut Criterion) {
    let words = gen_words(1024);

    c.bench_function("insert_byte_1024_words", |b| {
        b.iter(|| {
            for (i, &w) in words.iter().enumerate() {
                let _ = black_box(insert_byte(w, i % 57, i as u8).unwrap());
            }
        })
    });
}

fn bench_extract_field(c: &mut Criterion) {
    let words = gen_words(1024);

    for &width in &[1usize, 8, 17, 64] {
        c.bench_function(&format!("extract_{}_bits", width), |b| {
            b.iter(|| {
                for &w in &words {
                    let _ = black_box(extract_field(w, 0, width, true).unwrap());
                }
            })
        });
    }

    c.bench_function("extract_legacy_8_bits", |b| {
        b.iter(|| {
            for &w in &words {
                let v = extract_field_with(ExtractMode::Legacy, w, 40, 8, true).unwrap();
                let _ = black_box(v);
            }
        })
    });

    let spec = FieldSpec::new_signed(13, 11).unwrap();
    c.bench_function("field_spec_extract", |b| {
        b.iter(|| {
            for &w in &words {
                let _ = black_box(spec.extract(w));
            }
        })
    });
}

criterion_group!(benches, bench_insert_byte, bench_extract_field);
criterion_main!(benches);
