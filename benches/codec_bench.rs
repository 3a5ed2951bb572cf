//! Benchmarks for the project codec

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dasmproj::{read_project, write_project, MemoryEntry, Project};

fn mid_size_project() -> Project {
    let mut p = Project::new();
    p.name = "bench".to_string();
    p.file = "bench.prg".to_string();
    p.image = vec![0xea; 64 * 1024];
    p.memory_flags = vec![0x01; 64 * 1024];
    for addr in 0..4096 {
        let mut mem = MemoryEntry::new(addr);
        mem.is_inside = true;
        mem.is_code = addr % 2 == 0;
        mem.is_data = !mem.is_code;
        if addr % 16 == 0 {
            mem.dasm_location = Some(format!("loc_{:04x}", addr));
        }
        p.memory.push(mem);
    }
    for i in 0..512 {
        p.constants.set(i % 20, i * 7 % 65536, format!("CONST_{}", i));
    }
    p
}

fn codec_benchmarks(c: &mut Criterion) {
    let project = mid_size_project();

    let mut encoded = Vec::new();
    write_project(&mut encoded, &project).unwrap();

    c.bench_function("encode_project", |b| {
        b.iter(|| {
            let mut buf = Vec::with_capacity(encoded.len());
            write_project(&mut buf, black_box(&project)).unwrap();
            buf
        })
    });

    c.bench_function("decode_project", |b| {
        b.iter(|| read_project(black_box(encoded.as_slice())).unwrap())
    });
}

criterion_group!(benches, codec_benchmarks);
criterion_main!(benches);
