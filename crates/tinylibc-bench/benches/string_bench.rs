//! String and memory function benchmarks, against host libc baselines.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

fn bench_memcmp_sizes(c: &mut Criterion) {
    let sizes: &[usize] = &[16, 64, 256, 1024, 4096, 65536];
    let mut group = c.benchmark_group("memcmp");

    for &size in sizes {
        let a = vec![0xABu8; size];
        let b = vec![0xABu8; size];
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("tinylibc", size), &size, |bencher, &sz| {
            bencher.iter(|| {
                black_box(tinylibc_core::string::mem::memcmp(
                    black_box(&a),
                    black_box(&b),
                    sz,
                ))
            });
        });
        group.bench_with_input(BenchmarkId::new("host", size), &size, |bencher, &sz| {
            bencher.iter(|| {
                // SAFETY: both buffers are `sz` bytes long.
                black_box(unsafe {
                    libc::memcmp(
                        black_box(a.as_ptr().cast()),
                        black_box(b.as_ptr().cast()),
                        sz,
                    )
                })
            });
        });
    }
    group.finish();
}

fn bench_memchr_sizes(c: &mut Criterion) {
    let sizes: &[usize] = &[16, 64, 256, 1024, 4096, 65536];
    let mut group = c.benchmark_group("memchr");

    for &size in sizes {
        let mut buf = vec![0u8; size];
        buf[size - 1] = 0xFF;
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("tinylibc", size), &size, |bencher, &sz| {
            bencher.iter(|| {
                black_box(tinylibc_core::string::mem::memchr(
                    black_box(&buf),
                    0xFF,
                    sz,
                ))
            });
        });
        group.bench_with_input(BenchmarkId::new("host", size), &size, |bencher, &sz| {
            bencher.iter(|| {
                // SAFETY: the buffer is `sz` bytes long.
                black_box(unsafe { libc::memchr(black_box(buf.as_ptr().cast()), 0xFF, sz) })
            });
        });
    }
    group.finish();
}

fn bench_strlen_sizes(c: &mut Criterion) {
    let sizes: &[usize] = &[16, 64, 256, 1024, 4096];
    let mut group = c.benchmark_group("strlen");

    for &size in sizes {
        let mut s = vec![b'A'; size];
        s.push(0);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("tinylibc", size), &size, |bencher, _| {
            bencher.iter(|| black_box(tinylibc_core::string::str::strlen(black_box(&s))));
        });
        group.bench_with_input(BenchmarkId::new("host", size), &size, |bencher, _| {
            bencher.iter(|| {
                // SAFETY: the buffer is NUL-terminated.
                black_box(unsafe { libc::strlen(black_box(s.as_ptr().cast())) })
            });
        });
    }
    group.finish();
}

fn bench_memmove_overlap(c: &mut Criterion) {
    let sizes: &[usize] = &[64, 1024, 65536];
    let mut group = c.benchmark_group("memmove_overlap");

    for &size in sizes {
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("tinylibc", size), &size, |bencher, &sz| {
            let mut buf = vec![0x5Au8; sz + 8];
            bencher.iter(|| {
                tinylibc_core::string::mem::memmove_within(black_box(&mut buf), 0, 8, sz);
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_memcmp_sizes,
    bench_memchr_sizes,
    bench_strlen_sizes,
    bench_memmove_overlap
);
criterion_main!(benches);
