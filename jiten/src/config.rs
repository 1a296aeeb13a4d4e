//! 既定の辞書設定
//!
//! このモジュールは、明示的な設定なしで使用される辞書の置き場所と
//! 読み込みパラメータを定義します。設定はプロセス全体の暗黙の状態では
//! なく、値として読み込み処理へ渡されます。

use std::path::{Path, PathBuf};

/// 辞書ディレクトリを探す既定のパス接頭辞
pub const DEFAULT_PREFIX: &str = "/usr/share/jiten";

/// 既定で検索する辞書の名前
pub const DEFAULT_DICTIONARIES: &[&str] = &["jmdict"];

/// 1タームバンクあたりのエントリ数の既定の見積もり
///
/// タームバンクのフォーマットは1ファイルに最大1万エントリを収めます。
pub const DEFAULT_STRIDE: usize = 10_000;

/// 辞書の読み込み設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// 辞書ディレクトリを探すパス接頭辞
    pub prefix: PathBuf,

    /// 検索対象の辞書の名前
    pub dictionaries: Vec<String>,

    /// 1タームバンクあたりのエントリ数の見積もり
    pub stride: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prefix: PathBuf::from(DEFAULT_PREFIX),
            dictionaries: DEFAULT_DICTIONARIES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            stride: DEFAULT_STRIDE,
        }
    }
}

impl Config {
    /// 指定した名前の辞書ディレクトリのパスを構築します。
    ///
    /// # 引数
    ///
    /// * `name` - 辞書の名前
    pub fn dictionary_path<S>(&self, name: S) -> PathBuf
    where
        S: AsRef<Path>,
    {
        self.prefix.join(name)
    }
}
