//! 辞書検索を実行するユーティリティ
//!
//! このバイナリは、指定された辞書を読み込み、コマンドラインで与え
//! られた各語を完全一致で検索して語義を標準出力に出力します。

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use jiten::utils::fix_newlines;
use jiten::{Config, Dictionary};

use clap::Parser;

/// コマンドライン引数
#[derive(Parser, Debug)]
#[clap(name = "lookup", about = "Looks up terms in term-bank dictionaries")]
struct Args {
    /// Name of a dictionary under the prefix. May be repeated.
    #[clap(short = 'd', long = "dict")]
    dicts: Vec<String>,

    /// Directory containing the dictionaries.
    #[clap(long)]
    prefix: Option<PathBuf>,

    /// Estimated number of entries per term bank.
    #[clap(long)]
    stride: Option<usize>,

    /// Terms to look up.
    #[clap(required = true)]
    terms: Vec<String>,
}

/// メイン関数
///
/// 各辞書を読み込み、与えられた語を順に検索して語義を出力します。
/// 見つからない語があっても処理は続行し、その場合は終了コード1で
/// 終了します。辞書の読み込みに失敗した場合は即座に終了します。
///
/// # 戻り値
///
/// 実行が成功した場合は終了コード、エラーが発生した場合はエラー情報
fn main() -> Result<ExitCode, Box<dyn Error>> {
    let args = Args::parse();

    let mut config = Config::default();
    if !args.dicts.is_empty() {
        config.dictionaries = args.dicts;
    }
    if let Some(prefix) = args.prefix {
        config.prefix = prefix;
    }
    if let Some(stride) = args.stride {
        config.stride = stride;
    }

    let mut missed = false;
    for name in &config.dictionaries {
        eprintln!("Loading the dictionary...");
        let dict = Dictionary::from_path(config.dictionary_path(name), config.stride)?;

        println!("{name}");
        for term in &args.terms {
            match dict.lookup(term) {
                Some(entry) => {
                    for def in &entry.definitions {
                        println!("{}", fix_newlines(def));
                    }
                }
                None => {
                    println!("term not found: {term}");
                    missed = true;
                }
            }
        }
    }

    Ok(if missed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
