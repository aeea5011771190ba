use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use roma_core::frontend::{KanaFrontend, Lexicon};
use roma_core::romaji::to_hiragana;
use roma_core::{ConvertOptions, Converter};

const BENCH_LEXICON: &str = r#"
[[entries]]
surface = "今日"
reading = "キョウ"

[[entries]]
surface = "良い"
reading = "ヨイ"

[[entries]]
surface = "天気"
reading = "テンキ"

[[entries]]
surface = "秒速"
reading = "ビョウソク"

[[entries]]
surface = "万"
reading = "マン"
"#;

fn bench_converter() -> Converter<KanaFrontend> {
    let lexicon = Lexicon::parse_toml(BENCH_LEXICON).expect("bench lexicon");
    Converter::with_options(KanaFrontend::with_lexicon(lexicon), ConvertOptions::default())
}

static INPUTS: &[(&str, &str)] = &[
    ("short", "もっと"),
    ("medium", "今日は良い天気ですね"),
    ("mixed", "WiFi（テイク2）秒速30万キロメートル"),
    ("long", "アイウエオカキクケコサシスセソタチツテトナニヌネノハヒフヘホ"),
];

fn bench_convert(c: &mut Criterion) {
    let conv = bench_converter();
    let mut group = c.benchmark_group("convert");
    for &(label, text) in INPUTS {
        group.bench_with_input(BenchmarkId::new(label, text.len()), &text, |b, &text| {
            b.iter(|| conv.convert(text));
        });
    }
    group.finish();
}

fn bench_to_hiragana(c: &mut Criterion) {
    let conv = bench_converter();
    let mut group = c.benchmark_group("to_hiragana");
    for &(label, text) in INPUTS {
        let token = conv.convert(text).expect("bench input converts");
        group.bench_with_input(BenchmarkId::new(label, token.len()), &token, |b, token| {
            b.iter(|| to_hiragana(token));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_convert, bench_to_hiragana);
criterion_main!(benches);
