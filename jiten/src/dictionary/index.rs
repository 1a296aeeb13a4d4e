//! 辞書の検索インデックス
//!
//! このモジュールは、蓄積されたエントリ列を語の辞書順に整列し、
//! 完全一致の二分探索を提供します。

use crate::entry::Entry;

/// 整列済みのエントリ列に対する検索インデックス
///
/// エントリ列の所有権を受け取り、語のバイト順で一度だけ整列します。
/// 同じ語を持つエントリが複数ある場合、それらの相対順序は保証されず、
/// 検索はそのうちのいずれか一件を返します。
pub struct Index {
    entries: Vec<Entry>,
}

impl Index {
    /// エントリ列からインデックスを構築します。
    ///
    /// # 引数
    ///
    /// * `entries` - 蓄積されたエントリ列
    ///
    /// # 戻り値
    ///
    /// 語のバイト順に整列されたインデックスを返します。
    pub fn build(mut entries: Vec<Entry>) -> Self {
        entries.sort_unstable_by(|a, b| a.term.cmp(&b.term));
        Self { entries }
    }

    /// 語に完全一致するエントリを検索します。
    ///
    /// 比較はバイト単位かつ大文字小文字を区別し、正規化や前方一致は
    /// 行いません。見つからないことはエラーではなく通常の結果です。
    ///
    /// # 引数
    ///
    /// * `term` - 検索する語
    ///
    /// # 戻り値
    ///
    /// 一致するエントリがあれば `Some(&Entry)`、なければ `None` を
    /// 返します。
    ///
    /// Looks up an entry whose term exactly equals the query.
    pub fn lookup(&self, term: &str) -> Option<&Entry> {
        self.entries
            .binary_search_by(|e| e.term.as_str().cmp(term))
            .ok()
            .map(|i| &self.entries[i])
    }

    /// 整列済みのエントリ列を取得します。
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// エントリ数を取得します。
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// エントリがひとつもないかどうかを判定します。
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
