//! タームバンクの構造スキャナ
//!
//! このモジュールは、タームバンクのバイト列を一度だけ走査し、
//! 構造の骨格（コンテナの境界と文字列スパン）を平坦なトークン列として
//! 書き出すスキャナを提供します。
//!
//! トークンは呼び出し側が用意したスライスに書き込まれます。スライスが
//! 入力の途中で尽きた場合は[`ScanError::NoSpace`]を返し、呼び出し側が
//! より大きなバッファで最初からやり直せるようにします。スキャナ自体は
//! 再試行間で状態を持ち越しません。

/// トークンの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// ルート配列の直下に現れるエントリ配列
    Entry,

    /// エントリ以外の配列
    Array,

    /// オブジェクト
    Object,

    /// 文字列スカラー（スパンは引用符を含みません）
    Str,

    /// 数値・真偽値・null
    Primitive,
}

/// 入力の構造要素ひとつを表すトークン
///
/// スカラーでは`start..end`が元バイト列中のスパンを指します。
/// コンテナでは`len`が直下の子要素数を保持します。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// トークンの種類
    pub kind: TokenKind,

    /// 元バイト列中の開始位置
    pub start: usize,

    /// 元バイト列中の終了位置（排他的）
    pub end: usize,

    /// コンテナの直下の子要素数（スカラーでは0）
    pub len: usize,
}

impl Default for Token {
    fn default() -> Self {
        Self {
            kind: TokenKind::Primitive,
            start: 0,
            end: 0,
            len: 0,
        }
    }
}

/// スキャンの失敗種別
///
/// [`Scanner::scan`]が返しうる結果の完全な集合です。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    /// 入力を消費しきる前にトークンスライスが尽きました。
    /// より大きなバッファで再試行することで回復できます。
    NoSpace,

    /// 値を開始できないバイト、不正なエスケープ、または対応する
    /// 開きコンテナのない閉じ括弧に遭遇しました。
    InvalidSyntax,

    /// 入力が文字列またはコンテナの途中で終端しました。
    Malformed,
}

/// タームバンクの構造スキャナ
///
/// 一回の走査ごとに新しいインスタンスを生成してください。
pub struct Scanner {
    pos: usize,
}

impl Scanner {
    /// 新しいスキャナを生成します。
    pub const fn new() -> Self {
        Self { pos: 0 }
    }

    /// 入力全体を走査し、トークンを`tokens`へ書き込みます。
    ///
    /// # 引数
    ///
    /// * `src` - 走査対象のバイト列
    /// * `tokens` - 書き込み先のトークンスライス
    ///
    /// # 戻り値
    ///
    /// 成功時は書き込んだトークン数を返します。
    /// 空白のみの入力では`Ok(0)`を返します。
    ///
    /// # エラー
    ///
    /// バッファ不足は[`ScanError::NoSpace`]、構文の誤りは
    /// [`ScanError::InvalidSyntax`]、途中で終端した入力は
    /// [`ScanError::Malformed`]を返します。
    pub fn scan(&mut self, src: &[u8], tokens: &mut [Token]) -> Result<usize, ScanError> {
        let mut count = 0;
        // Indices of the currently open containers, innermost last.
        let mut open: Vec<usize> = vec![];

        while self.pos < src.len() {
            match src[self.pos] {
                b @ (b'[' | b'{') => {
                    let kind = if b == b'{' {
                        TokenKind::Object
                    } else if open.len() == 1 && tokens[open[0]].kind == TokenKind::Array {
                        TokenKind::Entry
                    } else {
                        TokenKind::Array
                    };
                    let idx = Self::push(
                        tokens,
                        &mut count,
                        &open,
                        Token {
                            kind,
                            start: self.pos,
                            end: 0,
                            len: 0,
                        },
                    )?;
                    open.push(idx);
                    self.pos += 1;
                }
                b @ (b']' | b'}') => {
                    let idx = open.pop().ok_or(ScanError::InvalidSyntax)?;
                    let expected = match tokens[idx].kind {
                        TokenKind::Object => b'}',
                        _ => b']',
                    };
                    if b != expected {
                        return Err(ScanError::InvalidSyntax);
                    }
                    tokens[idx].end = self.pos + 1;
                    self.pos += 1;
                }
                b',' | b':' => self.pos += 1,
                b'"' => {
                    let (start, end) = self.scan_string(src)?;
                    Self::push(
                        tokens,
                        &mut count,
                        &open,
                        Token {
                            kind: TokenKind::Str,
                            start,
                            end,
                            len: 0,
                        },
                    )?;
                }
                b'-' | b'0'..=b'9' | b't' | b'f' | b'n' => {
                    let start = self.pos;
                    while self.pos < src.len() && !is_delimiter(src[self.pos]) {
                        self.pos += 1;
                    }
                    Self::push(
                        tokens,
                        &mut count,
                        &open,
                        Token {
                            kind: TokenKind::Primitive,
                            start,
                            end: self.pos,
                            len: 0,
                        },
                    )?;
                }
                b if b.is_ascii_whitespace() => self.pos += 1,
                _ => return Err(ScanError::InvalidSyntax),
            }
        }

        if !open.is_empty() {
            return Err(ScanError::Malformed);
        }
        Ok(count)
    }

    /// 開始引用符の位置から文字列をひとつ読み進め、引用符を除いた
    /// スパンを返します。
    fn scan_string(&mut self, src: &[u8]) -> Result<(usize, usize), ScanError> {
        self.pos += 1;
        let start = self.pos;
        loop {
            match src.get(self.pos) {
                None => return Err(ScanError::Malformed),
                Some(b'"') => break,
                Some(b'\\') => match src.get(self.pos + 1) {
                    None => return Err(ScanError::Malformed),
                    Some(b'u') => {
                        let digits = src
                            .get(self.pos + 2..self.pos + 6)
                            .ok_or(ScanError::Malformed)?;
                        if !digits.iter().all(u8::is_ascii_hexdigit) {
                            return Err(ScanError::InvalidSyntax);
                        }
                        self.pos += 6;
                    }
                    Some(_) => self.pos += 2,
                },
                Some(_) => self.pos += 1,
            }
        }
        let end = self.pos;
        self.pos += 1;
        Ok((start, end))
    }

    /// トークンをひとつ書き込み、最内のコンテナの子要素数を進めます。
    fn push(
        tokens: &mut [Token],
        count: &mut usize,
        open: &[usize],
        token: Token,
    ) -> Result<usize, ScanError> {
        if *count >= tokens.len() {
            return Err(ScanError::NoSpace);
        }
        if let Some(&parent) = open.last() {
            tokens[parent].len += 1;
        }
        let idx = *count;
        tokens[idx] = token;
        *count += 1;
        Ok(idx)
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

/// プリミティブの終端となるバイトかどうかを判定します。
fn is_delimiter(b: u8) -> bool {
    matches!(b, b',' | b':' | b']' | b'}') || b.is_ascii_whitespace()
}
