//! 解析ハンドルと公開操作
//!
//! このモジュールは、エンジンインスタンスを1つ所有するハンドル[`Analyzer`]と、
//! その上の公開操作（形態素解析とかな読みへの変換）を提供します。
//!
//! ハンドルはアプリケーションの組み立て側が明示的に構築し、参照で共有します。
//! プロセス全体のグローバル状態は存在しません。
//!
//! # 例
//!
//! ```no_run
//! use kanayomi::Analyzer;
//!
//! let analyzer = Analyzer::from_path("path/to/system.dic.zst")?;
//! let kana = analyzer.to_kana("形態素解析", false)?;
//! # Ok::<(), kanayomi::KanayomiError>(())
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use vibrato::{Dictionary, Tokenizer};

use crate::errors::{KanayomiError, Result};
use crate::morpheme::{self, Morpheme, MorphemeIter};

/// システム辞書の既定の探索に使用する環境変数名
///
/// [`Analyzer::from_env`]はこの変数が指すパスから辞書を読み込みます。
pub const DICT_ENV: &str = "KANAYOMI_DICT";

// MeCabと同じ結果を得るための未知語の最大グルーピング長。
const MAX_GROUPING_LEN: usize = 24;

/// 形態素解析エンジンのハンドル
///
/// エンジンインスタンスをちょうど1つ所有します。構築後は不変で、
/// スレッド間で参照共有できます。呼び出しごとの可変状態はエンジンの
/// ワーカーに隔離されるため、並行呼び出しに外部ロックは不要です。
///
/// # 例
///
/// ```no_run
/// use kanayomi::Analyzer;
///
/// let analyzer = Analyzer::from_env()?;
/// for row in analyzer.parse("吾輩は猫である")? {
///     println!("{}", row.join(","));
/// }
/// # Ok::<(), kanayomi::KanayomiError>(())
/// ```
pub struct Analyzer {
    tokenizer: Tokenizer,
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer").finish_non_exhaustive()
    }
}

impl Analyzer {
    /// 読み込み済みの辞書からハンドルを構築します。
    ///
    /// エンジンはMeCab互換の構成（空白文字の読み飛ばしと未知語グルーピング長
    /// の制限）で初期化されます。これにより、空白だけの入力は空のトークン列に
    /// なります。
    ///
    /// # 引数
    ///
    /// * `dict` - エンジンのシステム辞書
    ///
    /// # エラー
    ///
    /// 辞書に`SPACE`カテゴリが定義されていないなど、エンジンが構成を
    /// 拒否した場合は[`KanayomiError::EngineInit`]を返します。
    pub fn from_dictionary(dict: Dictionary) -> Result<Self> {
        let tokenizer = Tokenizer::new(dict)
            .ignore_space(true)
            .map_err(|e| {
                KanayomiError::engine_init(
                    "the engine rejected the MeCab-compatible configuration",
                    e.to_string(),
                )
            })?
            .max_grouping_len(MAX_GROUPING_LEN);
        Ok(Self { tokenizer })
    }

    /// zstd圧縮されたシステム辞書をリーダーから読み込んでハンドルを構築します。
    ///
    /// # 引数
    ///
    /// * `rdr` - 圧縮辞書のリーダー
    ///
    /// # エラー
    ///
    /// 伸長や辞書の検証に失敗した場合は[`KanayomiError::EngineInit`]を返します。
    pub fn from_reader<R>(rdr: R) -> Result<Self>
    where
        R: Read,
    {
        let decoder = zstd::Decoder::new(rdr).map_err(|e| {
            KanayomiError::engine_init("failed to decompress the system dictionary", e.to_string())
        })?;
        let dict = Dictionary::read(decoder).map_err(|e| {
            KanayomiError::engine_init("failed to load the system dictionary", e.to_string())
        })?;
        Self::from_dictionary(dict)
    }

    /// zstd圧縮されたシステム辞書をパスから読み込んでハンドルを構築します。
    ///
    /// # 引数
    ///
    /// * `path` - 圧縮辞書のパス
    ///
    /// # エラー
    ///
    /// ファイルが開けない場合や辞書が壊れている場合は
    /// [`KanayomiError::EngineInit`]を返します。
    pub fn from_path<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            KanayomiError::engine_init(
                format!("failed to open the system dictionary at '{}'", path.display()),
                e.to_string(),
            )
        })?;
        Self::from_reader(file)
    }

    /// 既定の探索機構でシステム辞書を見つけてハンドルを構築します。
    ///
    /// 環境変数[`DICT_ENV`]が指すパスを辞書として読み込みます。
    ///
    /// # エラー
    ///
    /// 環境変数が未設定の場合、またはパスの読み込みに失敗した場合は
    /// [`KanayomiError::EngineInit`]を返します。
    pub fn from_env() -> Result<Self> {
        let path = std::env::var_os(DICT_ENV).ok_or_else(|| {
            KanayomiError::engine_init(
                "failed to locate a system dictionary",
                format!("the {DICT_ENV} environment variable is not set"),
            )
        })?;
        Self::from_path(path)
    }

    /// 入力を形態素のイテレータに変換します。
    ///
    /// 入力全体を一度だけ解析し、結果を所有権付きのスナップショットとして
    /// 返します。空の入力や空白だけの入力は空のイテレータになります。
    /// これはエラーではありません。
    ///
    /// # 引数
    ///
    /// * `input` - 解析するテキストのバイト列
    ///
    /// # エラー
    ///
    /// 入力が正しいUTF-8でない場合は[`KanayomiError::InvalidArgument`]を
    /// 返します。
    pub fn morphemes<B>(&self, input: B) -> Result<MorphemeIter>
    where
        B: AsRef<[u8]>,
    {
        let text = ensure_text("morphemes", input.as_ref())?;
        Ok(MorphemeIter::new(self.snapshot(text)))
    }

    /// 入力を形態素解析し、トークンごとの素性フィールド列を返します。
    ///
    /// 外側の列の長さはトークン数に等しく、並び順は入力中の出現順です。
    /// 内側の列の長さは各トークンの素性フィールド数そのものであり、
    /// 固定幅への切り詰めや埋め草は行いません。
    ///
    /// # 引数
    ///
    /// * `input` - 解析するテキストのバイト列
    ///
    /// # 戻り値
    ///
    /// トークンごとの素性フィールド列
    ///
    /// # エラー
    ///
    /// 入力が正しいUTF-8でない場合は[`KanayomiError::InvalidArgument`]を
    /// 返します。部分的な結果が返ることはありません。
    pub fn parse<B>(&self, input: B) -> Result<Vec<Vec<String>>>
    where
        B: AsRef<[u8]>,
    {
        let text = ensure_text("parse", input.as_ref())?;
        Ok(self.snapshot(text).into_iter().map(|m| m.fields).collect())
    }

    /// 入力をかな読みの文字列に変換します。
    ///
    /// トークンごとに、素性が読みフィールドまで届いていればその読みを、
    /// 届いていなければ`surface_fallback`が真のときに限り表層形をそのまま
    /// 連結します。`surface_fallback`が偽の場合、読みのないトークンは
    /// 何も寄与しません。連結に区切り文字は挟みません。
    ///
    /// # 引数
    ///
    /// * `input` - 変換するテキストのバイト列
    /// * `surface_fallback` - 読みのないトークンに表層形を使うかどうか
    ///
    /// # 戻り値
    ///
    /// トークンの出現順に連結された読みの文字列
    ///
    /// # エラー
    ///
    /// 入力が正しいUTF-8でない場合は[`KanayomiError::InvalidArgument`]を
    /// 返します。
    pub fn to_kana<B>(&self, input: B, surface_fallback: bool) -> Result<String>
    where
        B: AsRef<[u8]>,
    {
        let text = ensure_text("to_kana", input.as_ref())?;
        let mut kana = String::new();
        for m in self.snapshot(text) {
            if let Some(reading) = m.reading() {
                kana.push_str(reading);
            } else if surface_fallback {
                kana.push_str(&m.surface);
            }
        }
        Ok(kana)
    }

    /// 1回の呼び出しぶんのワーカーを作り、解析結果を写し取ります。
    fn snapshot(&self, text: &str) -> Vec<Morpheme> {
        let mut worker = self.tokenizer.new_worker();
        worker.reset_sentence(text);
        worker.tokenize();
        morpheme::snapshot(&worker)
    }
}

/// 境界の検証。入力バイト列がテキストであることを確かめます。
fn ensure_text<'a>(op: &'static str, input: &'a [u8]) -> Result<&'a str> {
    std::str::from_utf8(input).map_err(|_| {
        KanayomiError::invalid_argument(
            op,
            format!("the argument of '{op}' must be a valid UTF-8 string"),
        )
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use vibrato::dictionary::SystemDictionaryBuilder;

    use super::*;

    const LEXICON_CSV: &str = "猫,0,0,1,名詞,一般,*,*,*,*,*,猫,ネコ
が,0,0,2,助詞,格助詞,一般,*,*,*,*,が,ガ
走る,0,0,3,動詞,自立,*,*,五段・ラ行,基本形,走る,ハシル,ハシル
肉球,0,0,4,名詞,一般";
    const MATRIX_DEF: &str = "1 1\n0 0 0";
    const CHAR_DEF: &str = "DEFAULT 0 1 0\nSPACE 0 1 0\n0x0020 SPACE";
    const UNK_DEF: &str =
        "DEFAULT,0,0,100,名詞,一般,*,*,*,*,*\nSPACE,0,0,100,記号,空白,*,*,*,*,*";

    #[track_caller]
    fn test_analyzer() -> Analyzer {
        let dict = SystemDictionaryBuilder::from_readers(
            LEXICON_CSV.as_bytes(),
            MATRIX_DEF.as_bytes(),
            CHAR_DEF.as_bytes(),
            UNK_DEF.as_bytes(),
        )
        .unwrap();
        Analyzer::from_dictionary(dict).unwrap()
    }

    #[test]
    fn test_parse_in_token_order() {
        let analyzer = test_analyzer();
        let rows = analyzer.parse("猫が走る").unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], ["名詞", "一般", "*", "*", "*", "*", "*", "猫", "ネコ"]);
        assert_eq!(rows[1][8], "ガ");
        assert_eq!(rows[2][8], "ハシル");
    }

    #[test]
    fn test_parse_empty() {
        let analyzer = test_analyzer();
        assert!(analyzer.parse("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_whitespace_only() {
        let analyzer = test_analyzer();
        assert!(analyzer.parse("   ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_variable_field_counts() {
        let analyzer = test_analyzer();
        let rows = analyzer.parse("肉球猫").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], ["名詞", "一般"]);
        assert_eq!(rows[1].len(), 9);
    }

    #[test]
    fn test_parse_unknown_word_fields() {
        let analyzer = test_analyzer();
        let rows = analyzer.parse("犬").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], ["名詞", "一般", "*", "*", "*", "*", "*"]);
    }

    #[test]
    fn test_kana_concatenates_readings() {
        let analyzer = test_analyzer();
        assert_eq!(analyzer.to_kana("猫が走る", false).unwrap(), "ネコガハシル");
    }

    #[test]
    fn test_kana_unknown_word_fallback() {
        let analyzer = test_analyzer();
        assert_eq!(analyzer.to_kana("犬", false).unwrap(), "");
        assert_eq!(analyzer.to_kana("犬", true).unwrap(), "犬");
        assert_eq!(analyzer.to_kana("猫犬", false).unwrap(), "ネコ");
        assert_eq!(analyzer.to_kana("猫犬", true).unwrap(), "ネコ犬");
    }

    #[test]
    fn test_kana_short_feature_fallback() {
        // 読みフィールドの有無だけで分岐する。辞書に載っている語でも
        // 素性が短ければフォールバック対象になる。
        let analyzer = test_analyzer();
        assert_eq!(analyzer.to_kana("肉球", false).unwrap(), "");
        assert_eq!(analyzer.to_kana("肉球", true).unwrap(), "肉球");
    }

    #[test]
    fn test_invalid_utf8_is_rejected() {
        let analyzer = test_analyzer();

        let err = analyzer.parse(b"\xff\xfe").unwrap_err();
        assert!(matches!(err, KanayomiError::InvalidArgument(_)));
        assert!(err.to_string().contains("parse"));

        let err = analyzer.to_kana(b"\xff\xfe", true).unwrap_err();
        assert!(matches!(err, KanayomiError::InvalidArgument(_)));
        assert!(err.to_string().contains("to_kana"));

        let err = analyzer.morphemes(b"\x80").unwrap_err();
        assert!(matches!(err, KanayomiError::InvalidArgument(_)));
    }

    #[test]
    fn test_parse_is_idempotent() {
        let analyzer = test_analyzer();
        let first = analyzer.parse("猫が走る").unwrap();
        let second = analyzer.parse("猫が走る").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_concurrent_calls_need_no_locking() {
        let analyzer = Arc::new(test_analyzer());
        let expected = analyzer.parse("猫が走る").unwrap();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let analyzer = Arc::clone(&analyzer);
                std::thread::spawn(move || analyzer.parse("猫が走る").unwrap())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }

    #[test]
    fn test_missing_dictionary_is_an_init_error() {
        let err = Analyzer::from_path("no/such/system.dic.zst").unwrap_err();
        assert!(matches!(err, KanayomiError::EngineInit(_)));
    }
}
