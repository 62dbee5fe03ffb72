//! strtoul benchmarks, against the host libc baseline.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

fn bench_strtoul(c: &mut Criterion) {
    let inputs: &[(&str, &[u8])] = &[
        ("short_decimal", b"42\0"),
        ("long_decimal", b"18446744073709551615\0"),
        ("hex_prefixed", b"0xDEADBEEFCAFE\0"),
        ("whitespace_negative", b"   -12345678\0"),
    ];
    let mut group = c.benchmark_group("strtoul");

    for &(name, s) in inputs {
        let digits = &s[..s.len() - 1];
        group.bench_with_input(BenchmarkId::new("tinylibc", name), &s, |bencher, _| {
            bencher.iter(|| {
                black_box(tinylibc_core::stdlib::conversion::strtoul(
                    black_box(digits),
                    0,
                ))
            });
        });
        group.bench_with_input(BenchmarkId::new("host", name), &s, |bencher, _| {
            bencher.iter(|| {
                let mut end: *mut libc::c_char = std::ptr::null_mut();
                // SAFETY: the input is NUL-terminated; `end` is a local out-pointer.
                black_box(unsafe { libc::strtoul(black_box(s.as_ptr().cast()), &mut end, 0) })
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_strtoul);
criterion_main!(benches);
