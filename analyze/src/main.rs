//! 形態素解析とかな変換を実行するユーティリティ
//!
//! このバイナリは、標準入力から読み込んだ各行を解析し、指定された出力形式
//! （features、kana）で結果を標準出力に出力します。

use std::error::Error;
use std::io::{BufRead, BufWriter, Write};
use std::path::PathBuf;
use std::str::FromStr;

use kanayomi::Analyzer;

use clap::Parser;

/// 出力モード
#[derive(Clone, Debug)]
enum OutputMode {
    Features,
    Kana,
}

/// `OutputMode` の `FromStr` 実装
impl FromStr for OutputMode {
    type Err = &'static str;

    /// 文字列から出力モードをパースする
    ///
    /// # 引数
    ///
    /// * `mode` - パース対象の文字列（"features"、"kana"のいずれか）
    ///
    /// # 戻り値
    ///
    /// パースに成功した場合は対応する `OutputMode`、失敗した場合はエラーメッセージ
    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        match mode {
            "features" => Ok(Self::Features),
            "kana" => Ok(Self::Kana),
            _ => Err("Could not parse a mode"),
        }
    }
}

/// コマンドライン引数
#[derive(Parser, Debug)]
#[clap(name = "analyze", about = "Analyzes Japanese text into morpheme features or kana readings")]
struct Args {
    /// System dictionary (in zstd). Falls back to the KANAYOMI_DICT environment variable.
    #[clap(short = 'i', long)]
    sysdic: Option<PathBuf>,

    /// Output mode. Choices are features and kana.
    #[clap(short = 'O', long, default_value = "features")]
    output_mode: OutputMode,

    /// Appends the surface of tokens without a reading in kana mode.
    #[clap(short = 's', long)]
    surface_fallback: bool,
}

/// メイン関数
///
/// 辞書をロードし、標準入力から読み込んだ各行を解析して、
/// 指定された形式で結果を標準出力に出力します。
///
/// # 戻り値
///
/// 実行が成功した場合は `Ok(())`、エラーが発生した場合はエラー情報
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    eprintln!("Loading the dictionary...");
    let analyzer = match &args.sysdic {
        Some(path) => Analyzer::from_path(path)?,
        None => Analyzer::from_env()?,
    };

    eprintln!("Ready to analyze");

    let is_tty = atty::is(atty::Stream::Stdout);

    let out = std::io::stdout();
    let mut out = BufWriter::new(out.lock());
    let mut stdin = std::io::stdin().lock();

    // 行はバイト列のまま受け取り、テキストかどうかの検証はライブラリに任せる。
    let mut line = Vec::new();
    loop {
        line.clear();
        if stdin.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        while matches!(line.last(), Some(b'\n') | Some(b'\r')) {
            line.pop();
        }

        match args.output_mode {
            OutputMode::Features => {
                for fields in analyzer.parse(&line)? {
                    out.write_all(fields.join("\t").as_bytes())?;
                    out.write_all(b"\n")?;
                }
                out.write_all(b"EOS\n")?;
            }
            OutputMode::Kana => {
                let kana = analyzer.to_kana(&line, args.surface_fallback)?;
                out.write_all(kana.as_bytes())?;
                out.write_all(b"\n")?;
            }
        }
        if is_tty {
            out.flush()?;
        }
    }

    Ok(())
}
