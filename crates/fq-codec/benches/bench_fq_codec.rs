use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fq_codec::FucqPipeline;

fn generate_json(size_kb: usize) -> String {
    let mut lines = Vec::new();
    let mut total = 0;
    let mut i = 0;
    while total < size_kb * 1024 {
        let line = format!(
            r#"{{"id":{idx},"role":"user","content":"message {idx}","ok":true}}"#,
            idx = i % 10
        );
        total += line.len() + 1;
        lines.push(line);
        i += 1;
    }
    format!("[{}]", lines.join(","))
}

fn bench_encode(c: &mut Criterion) {
    let pipeline = FucqPipeline::default();
    for &kb in &[1, 10, 100] {
        let json = generate_json(kb);
        c.bench_function(&format!("encode_json_{kb}kb"), |b| {
            b.iter(|| black_box(pipeline.encode(black_box(json.as_bytes())).ok()))
        });
    }
}

fn bench_decode(c: &mut Criterion) {
    let pipeline = FucqPipeline::default();
    for &kb in &[1, 10, 100] {
        let json = generate_json(kb);
        let Ok(encoded) = pipeline.encode(json.as_bytes()) else { continue };
        c.bench_function(&format!("decode_json_{kb}kb"), |b| {
            b.iter(|| black_box(pipeline.decode(black_box(&encoded)).ok()))
        });
    }
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
