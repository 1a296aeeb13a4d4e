//! 辞書の読み込みと検索
//!
//! このモジュールは、ひとつの辞書ディレクトリに属するすべての
//! タームバンクを読み込み、ひとつの検索インデックスにまとめる機能を
//! 提供します。
//!
//! 辞書ディレクトリには、バンク数に数えないメタデータファイル
//! （`index.json`）がちょうどひとつと、`term_bank_1.json`から連番で
//! 続くタームバンクファイルが置かれます。

pub mod index;

use std::fs;
use std::path::Path;

use crate::entry::Entry;
use crate::errors::{JitenError, Result};
use crate::term_bank::TermBank;

use self::index::Index;

/// 読み込み済みの辞書
///
/// ディレクトリ名を識別子とし、全タームバンクのエントリをひとつの
/// 整列済みインデックスとして保持します。読み込みは全バンクが成功した
/// 場合にのみ完了し、部分的に読み込まれた辞書が返されることは
/// ありません。
pub struct Dictionary {
    name: String,
    index: Index,
}

impl Dictionary {
    /// 辞書ディレクトリから新しいインスタンスを構築します。
    ///
    /// ディレクトリ直下の通常ファイルを数え、メタデータファイルの
    /// ひとつぶんを引いた数のタームバンクを`term_bank_1.json`から
    /// 昇順に読み込みます。
    ///
    /// # 引数
    ///
    /// * `path` - 辞書ディレクトリのパス
    /// * `stride` - 1ファイルあたりのエントリ数の見積もり
    ///
    /// # 戻り値
    ///
    /// 成功時は `Ok(Dictionary)` を返します。メタデータファイルのみの
    /// ディレクトリは空の辞書になります。
    ///
    /// # エラー
    ///
    /// ディレクトリが読めない場合、ディレクトリが空の場合、または
    /// いずれかのバンクが開けない・パースできない場合にエラーを
    /// 返します。最初の失敗で読み込みを打ち切ります。
    pub fn from_path<P>(path: P, stride: usize) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();

        let mut file_count = 0usize;
        for dent in fs::read_dir(path)? {
            if dent?.file_type()?.is_file() {
                file_count += 1;
            }
        }
        // One metadata file (index.json) does not count as a bank.
        let bank_count = file_count.checked_sub(1).ok_or_else(|| {
            JitenError::invalid_format(name.clone(), "the dictionary directory has no files")
        })?;

        let mut entries: Vec<Entry> = vec![];
        for i in 1..=bank_count {
            let bank_path = path.join(format!("term_bank_{i}.json"));
            let bank = TermBank::from_path(&bank_path, stride)?;
            entries.extend(bank.into_entries());
        }

        Ok(Self {
            name,
            index: Index::build(entries),
        })
    }

    /// 辞書の名前（ディレクトリ名）を取得します。
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 語に完全一致するエントリを検索します。
    ///
    /// # 引数
    ///
    /// * `term` - 検索する語
    ///
    /// # 戻り値
    ///
    /// 一致するエントリがあれば `Some(&Entry)`、なければ `None` を
    /// 返します。
    pub fn lookup(&self, term: &str) -> Option<&Entry> {
        self.index.lookup(term)
    }

    /// 整列済みのエントリ列を取得します。
    pub fn entries(&self) -> &[Entry] {
        self.index.entries()
    }

    /// エントリ数を取得します。
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// エントリがひとつもないかどうかを判定します。
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
