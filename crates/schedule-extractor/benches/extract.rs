use criterion::{criterion_group, criterion_main, Criterion};
use schedule_extractor::extract;
use std::hint::black_box;

const SHORT: &str = "seg das 9h as 11h";

const TYPICAL: &str = "De segunda a quarta das 20h às 23h, Sexta livre, \
                       Domingo das 8 as 12 e das 18 as 23";

fn long_message() -> String {
    // A pasted chat message: mostly noise with a few phrases scattered in.
    let noise = "Fala pessoal, sobre o jogo da semana que vem, vou ver com o time. ";
    let mut text = noise.repeat(40);
    text.push_str(TYPICAL);
    text.push_str(&noise.repeat(40));
    text.push_str("sabado das 14:30 as 18h e das 20 as 22");
    text
}

fn bench_extract(c: &mut Criterion) {
    let long = long_message();

    c.bench_function("extract_short", |b| b.iter(|| extract(black_box(SHORT))));
    c.bench_function("extract_typical", |b| b.iter(|| extract(black_box(TYPICAL))));
    c.bench_function("extract_long_message", |b| b.iter(|| extract(black_box(&long))));
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
