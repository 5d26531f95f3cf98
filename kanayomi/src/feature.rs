//! 素性文字列の分解
//!
//! エンジンはトークンごとの素性をカンマ区切りの1本の文字列として返します。
//! このフォーマットに引用符やエスケープは存在しないため、分解は単純な
//! 分割です。フィールド数の検証は行いません。呼び出し側は`get`で防御的に
//! アクセスしてください。

/// 読みフィールドの論理インデックス（0始まり）
///
/// 辞書エントリによってはこのインデックスに届かない短い素性しか持ちません。
/// 特に未知語は読みフィールドを欠きます。
pub const READING_INDEX: usize = 8;

/// 素性文字列をフィールド列に分解します。
///
/// 空文字列は空フィールド1個に分解されます（通常のsplitのセマンティクス）。
///
/// # 引数
///
/// * `raw` - エンジンが返した素性文字列
///
/// # 戻り値
///
/// カンマで区切られたフィールドの列
pub fn split_fields(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}
