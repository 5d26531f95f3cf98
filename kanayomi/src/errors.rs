//! エラー型の定義
//!
//! このモジュールは、Kanayomiで発生するすべてのエラー型を定義します。

use std::error::Error;
use std::fmt;

/// Kanayomi専用のResult型
///
/// エラー型としてデフォルトで[`KanayomiError`]を使用します。
pub type Result<T, E = KanayomiError> = std::result::Result<T, E>;

/// Kanayomiのエラー型
///
/// 検証エラーとエンジン初期化エラーの2種類だけが存在します。素性フィールドが
/// 期待より少ないことはエラーではなく、かな変換のフォールバック経路として
/// 扱われます。
#[derive(Debug, thiserror::Error)]
pub enum KanayomiError {
    /// 無効な引数エラー
    ///
    /// [`InvalidArgumentError`]のエラーバリアント。
    #[error(transparent)]
    InvalidArgument(InvalidArgumentError),

    /// エンジン初期化エラー
    ///
    /// [`EngineInitError`]のエラーバリアント。辞書が見つからない、読み込めない、
    /// あるいはエンジンが構成を拒否した場合に発生します。
    #[error(transparent)]
    EngineInit(EngineInitError),
}

impl KanayomiError {
    /// 無効な引数エラーを生成します
    ///
    /// # 引数
    ///
    /// * `arg` - 引数を受け取った操作の名前
    /// * `msg` - エラーメッセージ
    pub(crate) fn invalid_argument<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidArgument(InvalidArgumentError {
            arg,
            msg: msg.into(),
        })
    }

    /// エンジン初期化エラーを生成します
    ///
    /// # 引数
    ///
    /// * `msg` - エラーメッセージ
    /// * `cause` - エラーの原因
    pub(crate) fn engine_init<S, M>(msg: S, cause: M) -> Self
    where
        S: Into<String>,
        M: Into<String>,
    {
        Self::EngineInit(EngineInitError {
            msg: msg.into(),
            cause: cause.into(),
        })
    }
}

/// 引数が無効な場合に使用されるエラー
#[derive(Debug)]
pub struct InvalidArgumentError {
    /// 引数を受け取った操作の名前
    pub(crate) arg: &'static str,

    /// エラーメッセージ
    pub(crate) msg: String,
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidArgumentError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidArgumentError {}

/// エンジンの構築に失敗した場合に使用されるエラー
///
/// 一度失敗した構築が自動で再試行されることはありません。
#[derive(Debug)]
pub struct EngineInitError {
    /// エラーメッセージ
    pub(crate) msg: String,

    /// エラーの根本原因
    pub(crate) cause: String,
}

impl fmt::Display for EngineInitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "EngineInitError: {}: {}", self.msg, self.cause)
    }
}

impl Error for EngineInitError {}
