//! 形態素解析とかな変換のベンチマーク
//!
//! ネットワークや実辞書に依存しないよう、組み込みのミニ辞書を使用して
//! `parse`と`to_kana`の速度を計測します。

use criterion::{criterion_group, criterion_main, Criterion, Throughput};

use kanayomi::Analyzer;
use vibrato::dictionary::SystemDictionaryBuilder;

const LEXICON_CSV: &str = "猫,0,0,1,名詞,一般,*,*,*,*,*,猫,ネコ
が,0,0,2,助詞,格助詞,一般,*,*,*,*,が,ガ
走る,0,0,3,動詞,自立,*,*,五段・ラ行,基本形,走る,ハシル,ハシル
庭,0,0,4,名詞,一般,*,*,*,*,*,庭,ニワ
で,0,0,5,助詞,格助詞,一般,*,*,*,*,で,デ";
const MATRIX_DEF: &str = "1 1\n0 0 0";
const CHAR_DEF: &str = "DEFAULT 0 1 0\nSPACE 0 1 0\n0x0020 SPACE";
const UNK_DEF: &str = "DEFAULT,0,0,100,名詞,一般,*,*,*,*,*\nSPACE,0,0,100,記号,空白,*,*,*,*,*";

const CORPUS: &str = "猫が庭で走る猫が庭で走る猫が庭で走る猫が庭で走る";

fn benchmark_analysis(c: &mut Criterion) {
    let dict = SystemDictionaryBuilder::from_readers(
        LEXICON_CSV.as_bytes(),
        MATRIX_DEF.as_bytes(),
        CHAR_DEF.as_bytes(),
        UNK_DEF.as_bytes(),
    )
    .unwrap();
    let analyzer = Analyzer::from_dictionary(dict).unwrap();

    let mut group = c.benchmark_group("Analysis Speed");
    group.throughput(Throughput::Bytes(CORPUS.len() as u64));

    group.bench_function("parse", |b| {
        b.iter(|| analyzer.parse(CORPUS).unwrap());
    });

    group.bench_function("to_kana", |b| {
        b.iter(|| analyzer.to_kana(CORPUS, true).unwrap());
    });

    group.finish();
}

criterion_group!(benches, benchmark_analysis);
criterion_main!(benches);
