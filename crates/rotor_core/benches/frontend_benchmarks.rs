use criterion::{criterion_group, criterion_main, Criterion};
use rotor_core::parser::scanner::Lexer;
use rotor_core::parser::Parser;

const SMALL_SCRIPT: &str = "let x = 1 + 2 * 3;";

const LOOP_SCRIPT: &str = "\
let total = 0;
let i = 0;
while (i < 100) {
    total = total + i * i;
    i = i + 1;
}
print(total);
";

fn function_heavy_script() -> String {
    let mut src = String::new();
    for n in 0..50 {
        src.push_str(&format!(
            "function f{n}(a, b) {{ let r = a * b + {n}; return; }}\n"
        ));
    }
    src
}

// ---------------------------------------------------------------------------
// Lexing throughput
// ---------------------------------------------------------------------------

fn bench_lex(c: &mut Criterion) {
    c.bench_function("lex_small_script", |b| {
        b.iter(|| Lexer::new(SMALL_SCRIPT, "bench.js").lex().unwrap());
    });

    c.bench_function("lex_loop_script", |b| {
        b.iter(|| Lexer::new(LOOP_SCRIPT, "bench.js").lex().unwrap());
    });

    let heavy = function_heavy_script();
    c.bench_function("lex_function_heavy", |b| {
        b.iter(|| Lexer::new(&heavy, "bench.js").lex().unwrap());
    });
}

// ---------------------------------------------------------------------------
// Parsing throughput
// ---------------------------------------------------------------------------

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_loop_script", |b| {
        b.iter(|| {
            let tokens = Lexer::new(LOOP_SCRIPT, "bench.js").lex().unwrap();
            Parser::new(tokens).parse().unwrap()
        });
    });

    let heavy = function_heavy_script();
    c.bench_function("parse_function_heavy", |b| {
        b.iter(|| {
            let tokens = Lexer::new(&heavy, "bench.js").lex().unwrap();
            Parser::new(tokens).parse().unwrap()
        });
    });
}

// ---------------------------------------------------------------------------
// AST rendering
// ---------------------------------------------------------------------------

fn bench_render(c: &mut Criterion) {
    let tokens = Lexer::new(LOOP_SCRIPT, "bench.js").lex().unwrap();
    let (program, _) = Parser::new(tokens).parse().unwrap();
    c.bench_function("render_program", |b| {
        b.iter(|| program.to_string());
    });
}

// ---------------------------------------------------------------------------
// Group & main
// ---------------------------------------------------------------------------

criterion_group!(benches, bench_lex, bench_parse, bench_render);
criterion_main!(benches);
