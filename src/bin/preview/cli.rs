use clap::Parser;
use std::path::PathBuf;

pub const MAX_DELAY_MS: u64 = 60_000;

/// 縦に並んだスプライトシートをアニメーションとしてプレビューするツール
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// スプライトシート画像のパス (フレームは幅と同じ高さの正方形)
    #[arg(required = true)]
    pub image_path: PathBuf,

    /// フレームを切り替える間隔 (ミリ秒、1〜60000)
    #[arg(short, long, default_value_t = 100, value_parser = clap::value_parser!(u64).range(1..=MAX_DELAY_MS))]
    pub delay_ms: u64,

    /// 詳細なログを出力する
    #[arg(short, long)]
    pub verbose: bool,
}
