//! Benchmarks for shorthand expansion.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use shorthand::expand::expand_shorthand;
use shorthand::{
    expand, expand_declarations, parse_declaration, parse_declarations, parse_stylesheet,
    parse_values, BlockOptions, ShorthandRegistry,
};

/// A stylesheet with `rules` copies of a typical rule.
fn stylesheet(rules: usize) -> String {
    (0..rules)
        .map(|i| {
            format!(
                ".item-{i} {{\n  margin: 0 auto;\n  padding: {i}px 2em;\n  border: 1px solid #ccc;\n  \
                 border-left: thick dashed rgb(10, 20, 30);\n  list-style: square inside;\n  color: navy;\n}}\n"
            )
        })
        .collect()
}

// -- Expansion benchmarks --

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("strategies");
    let registry = ShorthandRegistry::standard();

    let cases = [
        ("four_sides", "padding", "1px 2px 3px 4px"),
        ("component_set", "border-top", "red dotted 3px"),
        ("side_fan_out", "border", "6px dashed green"),
        ("keyword_dispatch", "list-style", "none url(dot.png)"),
        ("inherit", "border", "inherit"),
    ];

    for (label, name, css) in cases {
        let shorthand = registry.get(name).unwrap();
        let values = parse_values(css).unwrap();
        group.bench_function(label, |b| {
            b.iter(|| expand_shorthand(shorthand, black_box(&values), false).unwrap())
        });
    }

    group.finish();
}

fn bench_engine(c: &mut Criterion) {
    let declaration = parse_declaration("border: 1px solid #ccc !important").unwrap();

    c.bench_function("expand_border", |b| {
        b.iter(|| expand(black_box(&declaration)).unwrap())
    });
}

// -- Parsing benchmarks --

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    let block = "margin: 0 auto; border: 1px solid red; list-style: disc outside; color: #333";
    let sheet = stylesheet(200);

    group.bench_function("parse_values", |b| {
        b.iter(|| parse_values(black_box("thick dashed rgba(255, 0, 0, 0.5)")).unwrap())
    });

    group.bench_function("parse_declarations", |b| {
        b.iter(|| parse_declarations(black_box(block)).unwrap())
    });

    group.bench_function("parse_stylesheet_200", |b| {
        b.iter(|| parse_stylesheet(black_box(&sheet)).unwrap())
    });

    group.finish();
}

fn bench_block(c: &mut Criterion) {
    let registry = ShorthandRegistry::standard();
    let rules = parse_stylesheet(&stylesheet(200)).unwrap();
    let options = BlockOptions::default();

    c.bench_function("expand_stylesheet_200", |b| {
        b.iter(|| {
            for rule in &rules {
                black_box(expand_declarations(registry, &rule.declarations, &options).unwrap());
            }
        })
    });
}

criterion_group!(benches, bench_strategies, bench_engine, bench_parsing, bench_block);
criterion_main!(benches);
