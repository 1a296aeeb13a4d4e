//! 辞書の読み込みと検索に関するテスト
//!
//! 一時ディレクトリにタームバンクファイルを書き出し、ディレクトリ
//! 単位の読み込み、複数バンクの蓄積、検索の完全一致の動作を検証
//! します。

use std::fs;
use std::path::PathBuf;

use tempfile::{tempdir, TempDir};

use crate::{Dictionary, JitenError};

const STRIDE: usize = 16;

struct TestEnv {
    _temp_dir: TempDir,
    pub dict_dir: PathBuf,
}

impl TestEnv {
    /// メタデータファイルと与えられたバンクを持つ辞書ディレクトリを
    /// 一時領域に用意します。
    fn new(name: &str, banks: &[&str]) -> Self {
        let temp_dir = tempdir().expect("Failed to create a temporary directory");
        let dict_dir = temp_dir.path().join(name);
        fs::create_dir(&dict_dir).unwrap();
        fs::write(
            dict_dir.join("index.json"),
            r#"{"title":"test dictionary","format":3}"#,
        )
        .unwrap();
        for (i, bank) in banks.iter().enumerate() {
            fs::write(dict_dir.join(format!("term_bank_{}.json", i + 1)), bank).unwrap();
        }
        Self {
            _temp_dir: temp_dir,
            dict_dir,
        }
    }

    fn load(&self) -> crate::Result<Dictionary> {
        Dictionary::from_path(&self.dict_dir, STRIDE)
    }
}

/// バンクの行をひとつ組み立てます。
fn row(term: &str, defs: &[&str]) -> String {
    let defs = defs
        .iter()
        .map(|d| format!("\"{d}\""))
        .collect::<Vec<_>>()
        .join(",");
    format!("[\"{term}\",\"\",\"\",\"\",0,[{defs}],1,\"\"]")
}

/// 行の列からバンクをひとつ組み立てます。
fn bank(rows: &[String]) -> String {
    format!("[{}]", rows.join(","))
}

/// 手書きのバンクを読み込み、語義が元の順序のまま返ることを確認
#[test]
fn test_round_trip() {
    let env = TestEnv::new(
        "testdict",
        &[bank(&[row("foo", &["def1", "def2"]), row("bar", &["def3"])]).as_str()],
    );
    let dict = env.load().unwrap();

    assert_eq!(dict.name(), "testdict");
    assert_eq!(dict.len(), 2);
    assert_eq!(dict.lookup("foo").unwrap().definitions, vec!["def1", "def2"]);
    assert_eq!(dict.lookup("bar").unwrap().definitions, vec!["def3"]);
}

/// 3バンクに分かれた辞書がひとつのテーブルに蓄積されることを確認
#[test]
fn test_multi_bank_accumulation() {
    let env = TestEnv::new(
        "testdict",
        &[
            bank(&[row("a1", &["d1"]), row("a2", &["d2"])]).as_str(),
            bank(&[row("b1", &["d3"])]).as_str(),
            bank(&[row("c1", &["d4"]), row("c2", &["d5"])]).as_str(),
        ],
    );
    let dict = env.load().unwrap();

    assert_eq!(dict.len(), 5);
    // A term from the second bank is findable after the third loads.
    assert_eq!(dict.lookup("b1").unwrap().definitions, vec!["d3"]);
    assert_eq!(dict.lookup("a2").unwrap().definitions, vec!["d2"]);
    assert_eq!(dict.lookup("c2").unwrap().definitions, vec!["d5"]);
}

/// どの並びで与えても全語が検索でき、未知語は見つからないことを確認
#[test]
fn test_permuted_terms_all_found() {
    let terms = ["zebra", "犬", "apple", "ほん", "mango", "猫", "banana"];
    let rows: Vec<String> = terms.iter().map(|t| row(t, &["def"])).collect();
    let env = TestEnv::new("testdict", &[bank(&rows).as_str()]);
    let dict = env.load().unwrap();

    for term in terms {
        assert_eq!(dict.lookup(term).unwrap().term, term);
    }
    assert!(dict.lookup("grape").is_none());
}

/// メタデータファイルのみの辞書が空として読み込まれることを確認
#[test]
fn test_empty_dictionary() {
    let env = TestEnv::new("testdict", &[]);
    let dict = env.load().unwrap();

    assert!(dict.is_empty());
    assert!(dict.lookup("foo").is_none());
}

/// 語義を持たないエントリが空のリストとして返ることを確認
#[test]
fn test_entry_without_definitions() {
    let env = TestEnv::new("testdict", &[bank(&[row("foo", &[])]).as_str()]);
    let dict = env.load().unwrap();

    assert_eq!(dict.lookup("foo").unwrap().definitions.len(), 0);
}

/// 検索が大文字小文字と部分文字列を区別することを確認
#[test]
fn test_lookup_is_byte_exact() {
    let env = TestEnv::new("testdict", &[bank(&[row("foo", &["def"])]).as_str()]);
    let dict = env.load().unwrap();

    assert!(dict.lookup("foo").is_some());
    assert!(dict.lookup("Foo").is_none());
    assert!(dict.lookup("fo").is_none());
    assert!(dict.lookup("fooo").is_none());
}

/// 不正なバンクがエラーになり、部分的な辞書が返らないことを確認
#[test]
fn test_malformed_bank_rejected() {
    let env = TestEnv::new(
        "testdict",
        &[
            bank(&[row("foo", &["def"])]).as_str(),
            r#"[["bar","","","",0,["#,
        ],
    );
    let result = env.load();
    assert!(matches!(result, Err(JitenError::InvalidFormat(_))));
}

/// 連番のバンクが欠けている場合に読み込みが失敗することを確認
#[test]
fn test_missing_bank_fails() {
    let env = TestEnv::new("testdict", &[]);
    // term_bank_2.json exists but term_bank_1.json does not.
    fs::write(
        env.dict_dir.join("term_bank_2.json"),
        bank(&[row("foo", &["def"])]),
    )
    .unwrap();
    let result = env.load();
    assert!(matches!(result, Err(JitenError::Io(_))));
}

/// ファイルのないディレクトリがフォーマットエラーになることを確認
#[test]
fn test_directory_without_files_fails() {
    let temp_dir = tempdir().unwrap();
    let dict_dir = temp_dir.path().join("empty");
    fs::create_dir(&dict_dir).unwrap();
    let result = Dictionary::from_path(&dict_dir, STRIDE);
    assert!(matches!(result, Err(JitenError::InvalidFormat(_))));
}

/// 存在しないディレクトリがI/Oエラーになることを確認
#[test]
fn test_missing_directory_fails() {
    let temp_dir = tempdir().unwrap();
    let result = Dictionary::from_path(&temp_dir.path().join("nope"), STRIDE);
    assert!(matches!(result, Err(JitenError::Io(_))));
}
