use bioutils::io::parse_fasta;
use bioutils::seq::{gc_content, reverse_complement};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn sample_fasta(records: usize) -> String {
    (0..records)
        .map(|i| format!(">read_{i} sample\n{}\n{}\n", "ACGTTGCA".repeat(8), "GGATCC".repeat(5)))
        .collect()
}

pub fn parse_small_file(c: &mut Criterion) {
    let text = sample_fasta(1000);

    c.bench_function("parse 1000 records", |b| {
        b.iter(|| {
            for record in parse_fasta(black_box(&text)) {
                black_box(reverse_complement(&record.sequence).ok());
                black_box(gc_content(&record.sequence).ok());
            }
        })
    });
}

criterion_group!(benches, parse_small_file);
criterion_main!(benches);
