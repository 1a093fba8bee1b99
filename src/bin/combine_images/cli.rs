use clap::Parser;
use std::path::PathBuf;

/// フォルダ内の画像を、ファイル名の番号順に縦へ連結するツール
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// 連結する画像が含まれるフォルダのパス
    #[arg(required = true)]
    pub input_dir: PathBuf,

    /// 出力ファイルのパス (拡張子で画像フォーマットが決まります)
    #[arg(required = true)]
    pub output_file: PathBuf,

    /// 並べ替えた画像リストの開始インデックス (含む。負数は末尾から)
    #[arg(long, allow_negative_numbers = true)]
    pub start: Option<i64>,

    /// 並べ替えた画像リストの終了インデックス (含む。負数は末尾から)
    #[arg(long, allow_negative_numbers = true)]
    pub end: Option<i64>,

    /// 進捗バーを表示しない
    #[arg(short, long)]
    pub quiet: bool,

    /// 詳細なログを出力する
    #[arg(short, long)]
    pub verbose: bool,
}
