//! タームバンクの読み込み
//!
//! このモジュールは、ひとつのタームバンクファイルからエントリ列を
//! 復元する機能を提供します。
//!
//! バンクのバイト列は[`scanner::Scanner`]で一度だけ走査され、構造を表す
//! トークン列に変換されます。トークンバッファの必要量は事前には
//! 分からないため、エントリ数の見積もり（ストライド）から初期サイズを
//! 決め、不足した場合は一定量ずつ拡張して最初から走査をやり直します。
//! 復元されたエントリは元のバイト列から独立した所有文字列を持ちます。

pub mod scanner;

use std::fs::File;
use std::path::Path;

use memmap2::Mmap;

use crate::entry::Entry;
use crate::errors::{JitenError, Result};
use crate::term_bank::scanner::{ScanError, Scanner, Token, TokenKind};

/// エントリひとつが生成するトークン数
///
/// 語、読み、タグ、活用規則、スコアの各スカラー、語義配列とその語義
/// ひとつ、連番、語タグ、そしてエントリ配列自身で10トークンです。
pub const TOKENS_PER_ENTRY: usize = 10;

/// バッファ不足時に一度に拡張するトークン数
const TOKEN_DELTA: usize = TOKENS_PER_ENTRY * 100;

/// ひとつのバンクに許容するトークン数の上限
const MAX_TOKENS: usize = 1 << 24;

/// エントリ開始トークンから語トークンまでのオフセット
const TERM_SLOT: usize = 1;

/// エントリ開始トークンから語義配列トークンまでのオフセット
const DEFS_SLOT: usize = 6;

/// ひとつのタームバンクから復元されたエントリ列
///
/// # 例
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use jiten::TermBank;
///
/// let data = r#"[
///     ["犬", "いぬ", "", "", 0, ["dog"], 1, ""],
///     ["猫", "ねこ", "", "", 0, ["cat", "feline"], 2, ""]
/// ]"#
/// .as_bytes();
///
/// let bank = TermBank::from_bytes(data, 2, "term_bank_1.json")?;
/// assert_eq!(bank.entries().len(), 2);
/// assert_eq!(bank.entries()[0].term, "犬");
/// assert_eq!(bank.entries()[1].definitions, vec!["cat", "feline"]);
/// # Ok(())
/// # }
/// ```
pub struct TermBank {
    entries: Vec<Entry>,
}

impl TermBank {
    /// タームバンクファイルから新しいインスタンスを構築します。
    ///
    /// ファイルは読み取り専用でメモリマップされ、エントリの構築が
    /// 終わり次第解放されます。
    ///
    /// # 引数
    ///
    /// * `path` - タームバンクファイルのパス
    /// * `stride` - 1ファイルあたりのエントリ数の見積もり
    ///
    /// # 戻り値
    ///
    /// 成功時は `Ok(TermBank)` を返します。
    ///
    /// # エラー
    ///
    /// ファイルが開けない場合、またはフォーマットが不正な場合に
    /// エラーを返します。
    pub fn from_path<P>(path: P, stride: usize) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("term bank");
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };
        Self::from_bytes(&mmap, stride, name)
    }

    /// バイト列から新しいインスタンスを構築します。
    ///
    /// # 引数
    ///
    /// * `data` - タームバンクのバイト列
    /// * `stride` - 1ファイルあたりのエントリ数の見積もり
    /// * `name` - エラー報告に使うバンクの名前
    ///
    /// # エラー
    ///
    /// 構文が不正な場合、エントリの配置規約に違反している場合、
    /// またはトークンバッファが上限を超えて必要になる場合に
    /// エラーを返します。
    pub fn from_bytes(data: &[u8], stride: usize, name: &str) -> Result<Self> {
        let tokens = scan_with_retry(data, stride, name)?;
        let entries = build_entries(&tokens, data, name)?;
        Ok(Self { entries })
    }

    /// 復元されたエントリ列を取得します。
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// エントリ列の所有権を取り出します。
    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }
}

/// 入力全体のトークン列が得られるまで、バッファを拡張しながら走査を
/// 繰り返します。
///
/// 走査は再開できないため、各試行は新しい[`Scanner`]で先頭から
/// やり直します。バッファは1ファイルの処理中に縮小されることはなく、
/// 拡張は[`MAX_TOKENS`]で打ち切られます。
fn scan_with_retry(data: &[u8], stride: usize, name: &str) -> Result<Vec<Token>> {
    let capacity = stride
        .checked_mul(TOKENS_PER_ENTRY)
        .and_then(|n| n.checked_add(1))
        .filter(|&n| n <= MAX_TOKENS)
        .ok_or_else(|| {
            JitenError::invalid_argument("stride", "initial token buffer size is too large")
        })?;

    let mut tokens = vec![Token::default(); capacity];
    loop {
        match Scanner::new().scan(data, &mut tokens) {
            Ok(n) => {
                tokens.truncate(n);
                return Ok(tokens);
            }
            Err(ScanError::NoSpace) => {
                let capacity = tokens
                    .len()
                    .checked_add(TOKEN_DELTA)
                    .filter(|&n| n <= MAX_TOKENS)
                    .ok_or_else(|| {
                        JitenError::invalid_state(
                            format!("too many tokens in {name}"),
                            format!("the token buffer may not exceed {MAX_TOKENS} tokens"),
                        )
                    })?;
                log::debug!("growing the token buffer for {name} to {capacity} tokens");
                tokens.resize(capacity, Token::default());
            }
            Err(ScanError::InvalidSyntax) => {
                return Err(JitenError::invalid_format(name, "invalid syntax"));
            }
            Err(ScanError::Malformed) => {
                return Err(JitenError::invalid_format(
                    name,
                    "input ends in the middle of a string or container",
                ));
            }
        }
    }
}

/// トークン列からエントリ列を復元します。
///
/// エントリ開始トークンの位置を`i`とすると、語は`i + 1`、語義配列は
/// `i + 6`にあり、語義はその配列トークンの直後に子要素数ぶん並びます。
/// この配置はタームバンクのフォーマットが定めるもので、すべての参照は
/// 境界検査つきで行い、途中で途切れたエントリはフォーマットエラーと
/// して報告します。
fn build_entries(tokens: &[Token], data: &[u8], name: &str) -> Result<Vec<Entry>> {
    let mut entries = vec![];

    for (i, token) in tokens.iter().enumerate() {
        if token.kind != TokenKind::Entry {
            continue;
        }

        let term_token = tokens
            .get(i + TERM_SLOT)
            .ok_or_else(|| JitenError::invalid_format(name, "truncated entry"))?;
        if term_token.kind != TokenKind::Str {
            return Err(JitenError::invalid_format(name, "entry term is not a string"));
        }

        let defs_token = tokens
            .get(i + DEFS_SLOT)
            .ok_or_else(|| JitenError::invalid_format(name, "truncated entry"))?;
        if defs_token.kind != TokenKind::Array {
            return Err(JitenError::invalid_format(
                name,
                "entry definitions are not an array",
            ));
        }

        let term = std::str::from_utf8(&data[term_token.start..term_token.end])?.trim();
        if term.is_empty() {
            eprintln!(
                "Skipped an entry with an empty term in {name}, {:?}",
                std::str::from_utf8(&data[token.start..token.end])?,
            );
            continue;
        }

        let mut definitions = Vec::with_capacity(defs_token.len);
        for j in 1..=defs_token.len {
            let def_token = tokens
                .get(i + DEFS_SLOT + j)
                .ok_or_else(|| JitenError::invalid_format(name, "truncated definition list"))?;
            let def = std::str::from_utf8(&data[def_token.start..def_token.end])?;
            definitions.push(def.to_string());
        }

        entries.push(Entry::new(term, definitions));
    }

    Ok(entries)
}
