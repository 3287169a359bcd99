//! Lexer throughput benchmarks.
//!
//! `tokenize` measures whole-document lexing; `edit` measures re-lexing a
//! one-character change in the middle of a large document.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use xq_lexer::{lex, LexedDocument, LexerOptions};

/// Generate N small functions mixing expressions, strings and constructors.
fn generate_n_functions(n: usize) -> String {
    (0..n)
        .map(|i| {
            format!(
                "declare function local:f{i}($x as xs:integer) {{\n  \
                 (: step {i} :) <item n=\"{{$x}}\">{{ $x + {i} }} &amp; \"text\"</item>\n}};"
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer/tokenize");

    for num_functions in [10, 100, 1000, 5000] {
        let source = generate_n_functions(num_functions);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(num_functions),
            &source,
            |b, src| {
                b.iter(|| black_box(lex(black_box(src), LexerOptions::default())));
            },
        );
    }

    group.finish();
}

fn bench_edit(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer/edit");

    for num_functions in [100, 1000, 5000] {
        let source = generate_n_functions(num_functions);
        let document = LexedDocument::lex(source, LexerOptions::default());
        let middle = u32::try_from(document.text().len() / 2).unwrap_or(0);
        let at = (0..=middle)
            .rev()
            .find(|&offset| document.text().is_char_boundary(offset as usize))
            .unwrap_or(0);
        group.bench_with_input(
            BenchmarkId::from_parameter(num_functions),
            &document,
            |b, document| {
                b.iter_batched(
                    || document.clone(),
                    |mut document| black_box(document.edit(at..at, " ")),
                    criterion::BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_tokenize, bench_edit);
criterion_main!(benches);
