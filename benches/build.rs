use criterion::{black_box, criterion_group, criterion_main, Criterion};
use http_build_url::{build_url, encode_component, parse_query, Flags, UrlParts};

criterion_group!(
    benches,
    bench_encode,
    bench_parse_query,
    bench_build_replace,
    bench_build_join,
);
criterion_main!(benches);

const ENC_CASE: &str = "te\u{1f603}a \u{6d4b}1`~!@\u{8bd5}#$%st^&+=";

fn bench_encode(c: &mut Criterion) {
    c.bench_function("encode", |b| b.iter(|| encode_component(black_box(ENC_CASE))));
}

const QUERY_CASE: &str = "a%5B2%5D=b&a[]=1&a[]=2&q=%E6%B5%8B%E8%AF%95&q=last";

fn bench_parse_query(c: &mut Criterion) {
    c.bench_function("parse_query", |b| b.iter(|| parse_query(black_box(QUERY_CASE))));
}

const BASE_CASE: &str = "https://user@example.com:8080/a/b/c/./../d?q=1&tags[]=x#frag";

fn bench_build_replace(c: &mut Criterion) {
    c.bench_function("build_replace", |b| {
        b.iter(|| build_url(black_box(BASE_CASE), UrlParts::new(), Flags::REPLACE))
    });
}

fn bench_build_join(c: &mut Criterion) {
    c.bench_function("build_join", |b| {
        b.iter(|| {
            build_url(
                black_box(BASE_CASE),
                black_box("../e?tags[]=y&page=2"),
                Flags::JOIN_PATH | Flags::JOIN_QUERY,
            )
        })
    });
}
