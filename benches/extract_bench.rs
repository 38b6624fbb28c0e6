//! nalcap 性能基准测试.
//!
//! 覆盖单行分类、标记搜索与整段流水线.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use nalcap::extract::{Pipeline, classify_line, extract_block, find_earliest_marker};

/// 构造一行接近真实 RTP 报文长度的抓包文本 (约 1400 字节)
fn make_capture_line(nal_header: u8) -> String {
    let mut bytes = vec![0x00, 0x1A, 0x2B, 0x3C, 0x4D, 0x5E, 0x00, 0x11, 0x22, 0x33, 0x01, 0x00];
    bytes.extend_from_slice(&[0x00; 30]);
    bytes.extend_from_slice(&[0x00, 0x00, 0x00, 0x01, nal_header]);
    for i in 0..1350u32 {
        bytes.push((i % 251) as u8 | 0x10);
    }
    bytes.extend_from_slice(&[0x00; 8]);
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn bench_classify(c: &mut Criterion) {
    let line = make_capture_line(0x65);
    c.bench_function("classify_line_1400b", |b| {
        b.iter(|| classify_line(black_box(&line)));
    });
}

fn bench_marker_search(c: &mut Criterion) {
    let hex: String = make_capture_line(0x61).split_whitespace().collect();
    c.bench_function("find_earliest_marker_1400b", |b| {
        b.iter(|| find_earliest_marker(black_box(&hex)));
    });
    c.bench_function("extract_block_1400b", |b| {
        b.iter(|| extract_block(black_box(&hex), 1));
    });
}

fn bench_pipeline(c: &mut Criterion) {
    let lines: Vec<String> = [0x67, 0x68, 0x65, 0x61, 0x61, 0x61]
        .iter()
        .cycle()
        .take(600)
        .map(|&h| make_capture_line(h))
        .collect();
    let input = lines.join("\n");

    c.bench_function("pipeline_600_lines", |b| {
        b.iter(|| {
            let mut pipeline = Pipeline::new(Vec::with_capacity(1 << 20), 0);
            pipeline.run(black_box(input.as_bytes())).unwrap();
            pipeline.finish().unwrap()
        });
    });
}

criterion_group!(benches, bench_classify, bench_marker_search, bench_pipeline);
criterion_main!(benches);
