//! # Jiten
//!
//! Jitenは、タームバンク形式で配布される辞書を読み込み、語の完全一致
//! 検索を行うライブラリです。
//!
//! ## 概要
//!
//! 辞書は、ディレクトリごとに複数のJSONタームバンクファイルとして
//! 配布されます。このライブラリは各バンクのバイト列をメモリマップし、
//! 拡張可能なトークンバッファを使ったストリーミング走査で構造を
//! 復元して、語と語義のテーブルを構築します。テーブルは一度だけ
//! 整列され、二分探索で検索されます。
//!
//! ## 主な機能
//!
//! - **再試行つきの走査**: トークンバッファが不足した場合は拡張して
//!   先頭からやり直し、上限つきで必ず収束します
//! - **ゼロコピーの走査**: 文字列はマップされたバイト列へのオフセット
//!   範囲として扱われ、エントリの確定時にのみ所有文字列になります
//! - **複数バンクの蓄積**: ひとつの辞書に属する全バンクをひとつの
//!   テーブルにまとめます
//! - **完全一致検索**: バイト単位の辞書順による整列と二分探索
//!
//! ## 使用例
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use jiten::{Index, TermBank};
//!
//! let bank = r#"[
//!     ["犬", "いぬ", "", "", 0, ["dog"], 1, ""],
//!     ["猫", "ねこ", "", "", 0, ["cat", "feline"], 2, ""]
//! ]"#
//! .as_bytes();
//!
//! let bank = TermBank::from_bytes(bank, 2, "term_bank_1.json")?;
//! let index = Index::build(bank.into_entries());
//!
//! let entry = index.lookup("猫").unwrap();
//! assert_eq!(entry.definitions, vec!["cat", "feline"]);
//! assert!(index.lookup("鳥").is_none());
//! # Ok(())
//! # }
//! ```

/// 既定の辞書設定
pub mod config;

/// 辞書の読み込みと検索
pub mod dictionary;

/// 辞書エントリの型定義
pub mod entry;

/// エラー型の定義
pub mod errors;

/// タームバンクの読み込み
pub mod term_bank;

/// 表示用のユーティリティ関数
pub mod utils;


// Re-exports
pub use config::Config;
pub use dictionary::index::Index;
pub use dictionary::Dictionary;
pub use entry::Entry;
pub use errors::{JitenError, Result};
pub use term_bank::TermBank;

/// このライブラリのバージョン番号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
