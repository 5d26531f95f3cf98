//! 形態素レコードとそのイテレータ
//!
//! このモジュールは、1回の解析呼び出しの結果をエンジンのワーカーから
//! 所有権付きのスナップショットとして写し取る型を提供します。スナップショットは
//! 呼び出しごとに一度だけ計算され、エンジンの内部状態を一切借用しないため、
//! 呼び出し後も自由に保持できます。

use std::ops::Range;

use vibrato::tokenizer::worker::Worker;

use crate::feature::{split_fields, READING_INDEX};

/// 解析結果の1形態素
///
/// 表層形は入力文字列中の該当バイト範囲そのものであり、範囲を超える余分な
/// データを含むことはありません。
///
/// An owned, self-contained record of one morpheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Morpheme {
    /// 形態素の表層形（元のテキスト中の文字列）
    ///
    /// The surface string of the morpheme.
    pub surface: String,

    /// 形態素のバイト単位の位置範囲
    ///
    /// The position range of the morpheme in bytes.
    pub range_byte: Range<usize>,

    /// 分解済みの素性フィールド列
    ///
    /// フィールド数は辞書エントリに依存し、固定長ではありません。
    pub fields: Vec<String>,
}

impl Morpheme {
    /// 読みフィールドを取得します。
    ///
    /// # 戻り値
    ///
    /// 素性が読みフィールドまで届いている場合はその参照、届いていない
    /// 場合は`None`を返します。
    #[inline(always)]
    pub fn reading(&self) -> Option<&str> {
        self.fields.get(READING_INDEX).map(String::as_str)
    }

    /// 表層形のバイト長を取得します。
    #[inline(always)]
    pub fn len_byte(&self) -> usize {
        self.range_byte.len()
    }
}

/// ワーカーの解析結果を所有権付きのスナップショットに写し取ります。
///
/// ワーカーが返すトークン列には文頭・文末の番兵ノードが含まれないため、
/// このループがそのまま実形態素だけの列になります。
pub(crate) fn snapshot(worker: &Worker) -> Vec<Morpheme> {
    let mut morphemes = Vec::with_capacity(worker.num_tokens());
    for token in worker.token_iter() {
        morphemes.push(Morpheme {
            surface: token.surface().to_string(),
            range_byte: token.range_byte(),
            fields: split_fields(token.feature()),
        });
    }
    morphemes
}

/// 形態素のイテレータ
///
/// 1回の解析呼び出しが生んだスナップショットを先頭から走査します。
/// 有限で、巻き戻しはできません。
///
/// Iterator of morphemes.
#[derive(Debug)]
pub struct MorphemeIter {
    inner: std::vec::IntoIter<Morpheme>,
}

impl MorphemeIter {
    #[inline(always)]
    pub(crate) fn new(morphemes: Vec<Morpheme>) -> Self {
        Self {
            inner: morphemes.into_iter(),
        }
    }
}

impl Iterator for MorphemeIter {
    type Item = Morpheme;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for MorphemeIter {}
