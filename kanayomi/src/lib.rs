//! # Kanayomi
//!
//! Kanayomiは、外部の形態素解析エンジン（[vibrato]）への薄い橋渡しレイヤです。
//!
//! ## 概要
//!
//! このライブラリは、日本語テキストに対して次の2つの操作を提供します。
//!
//! - **形態素解析**: 入力文字列をトークン列に分割し、トークンごとの素性
//!   フィールド列を返します。
//! - **かな読みへの変換**: 入力文字列を読みフィールドの連結からなる1つの
//!   文字列に縮約します。辞書に読みがないトークンの扱いは呼び出し側が
//!   フォールバックフラグで選択します。
//!
//! 解析アルゴリズム自体（辞書引き、ラティス構築、コスト最小化）はエンジン側の
//! 責務であり、このライブラリは結果の整形、素性文字列の分解、未知語の
//! フォールバック方針、エンジンハンドルのライフサイクル、および呼び出し境界の
//! 検証だけを担当します。
//!
//! ## 使用例
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use vibrato::dictionary::SystemDictionaryBuilder;
//! use kanayomi::Analyzer;
//!
//! let lexicon_csv = "猫,0,0,1,名詞,一般,*,*,*,*,*,猫,ネコ
//! が,0,0,2,助詞,格助詞,一般,*,*,*,*,が,ガ";
//! let matrix_def = "1 1\n0 0 0";
//! let char_def = "DEFAULT 0 1 0\nSPACE 0 1 0\n0x0020 SPACE";
//! let unk_def = "DEFAULT,0,0,100,名詞,一般,*,*,*,*,*\nSPACE,0,0,100,記号,空白,*,*,*,*,*";
//!
//! let dict = SystemDictionaryBuilder::from_readers(
//!     lexicon_csv.as_bytes(),
//!     matrix_def.as_bytes(),
//!     char_def.as_bytes(),
//!     unk_def.as_bytes(),
//! )?;
//!
//! let analyzer = Analyzer::from_dictionary(dict)?;
//!
//! let rows = analyzer.parse("猫が")?;
//! assert_eq!(rows.len(), 2);
//! assert_eq!(rows[0], ["名詞", "一般", "*", "*", "*", "*", "*", "猫", "ネコ"]);
//!
//! assert_eq!(analyzer.to_kana("猫が", false)?, "ネコガ");
//! # Ok(())
//! # }
//! ```
//!
//! [vibrato]: https://docs.rs/vibrato

/// 解析ハンドルと公開操作
pub mod analyzer;

/// エラー型の定義
pub mod errors;

/// 素性文字列の分解
pub mod feature;

/// 形態素レコードとそのイテレータ
pub mod morpheme;

// Re-exports
pub use analyzer::Analyzer;
pub use errors::{KanayomiError, Result};
pub use morpheme::{Morpheme, MorphemeIter};

/// このライブラリのバージョン番号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
