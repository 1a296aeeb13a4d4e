//! 辞書エントリの結果コンテナ
//!
//! このモジュールは、タームバンクから復元されたひとつの辞書レコードを
//! 表現する型を提供します。

/// 辞書のエントリ
///
/// ひとつの語とその語義のリストを保持します。語義はタームバンク内の
/// 出現順を保ち、重複も許容されます。構築後は変更されず、元のバイト列
/// への参照も保持しません。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// 語（前後の空白を除去済み）
    pub term: String,

    /// 語義のリスト（元の順序のまま）
    pub definitions: Vec<String>,
}

impl Entry {
    /// 新しいエントリを生成します。
    ///
    /// # 引数
    ///
    /// * `term` - 語
    /// * `definitions` - 語義のリスト
    pub fn new<S>(term: S, definitions: Vec<String>) -> Self
    where
        S: Into<String>,
    {
        Self {
            term: term.into(),
            definitions,
        }
    }
}
