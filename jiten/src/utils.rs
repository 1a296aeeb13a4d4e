//! 表示用のユーティリティ関数
//!
//! このモジュールには、検索結果を表示する直前に適用するヘルパー関数が
//! 含まれています。辞書に保持された文字列そのものは変更されません。

/// 文字列中のエスケープされた改行を実際の改行に置き換える
///
/// タームバンクの語義には、バックスラッシュと`n`の2文字からなる
/// リテラルなエスケープ列が含まれることがあります。この関数はそれらを
/// 改行文字に置き換えた新しい文字列を返します。入力は変更されません。
///
/// # 引数
///
/// * `s` - 変換する文字列
///
/// # 戻り値
///
/// 変換後の所有文字列
///
/// # 例
///
/// ```
/// # use jiten::utils::fix_newlines;
/// assert_eq!(fix_newlines("1. dog\\n2. hound"), "1. dog\n2. hound");
/// assert_eq!(fix_newlines("no escapes"), "no escapes");
/// ```
pub fn fix_newlines(s: &str) -> String {
    s.replace("\\n", "\n")
}
