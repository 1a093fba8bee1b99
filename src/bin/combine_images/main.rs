mod cli;

use clap::Parser;
use log::{error, info, warn};
use sprite_sheet_tools::combine::{combine_images, CombineRequest};
use sprite_sheet_tools::domain::index_range::IndexRange;
use sprite_sheet_tools::logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    // コマンドライン引数を解析します
    let args = cli::Args::parse();
    logging::init(args.verbose);

    let request = CombineRequest {
        input_dir: args.input_dir,
        output_file: args.output_file,
        range: IndexRange::new(args.start, args.end),
    };

    match combine_images(&request, !args.quiet) {
        Ok(summary) => {
            if !summary.skipped.is_empty() {
                warn!("{} 個の画像をスキップしました", summary.skipped.len());
            }
            let (width, height) = summary.dimensions;
            info!(
                "完了: {} 枚の画像から {} ({}x{}) を生成しました。",
                summary.combined.len(),
                summary.output_file.display(),
                width,
                height
            );
            ExitCode::SUCCESS
        }
        // 連結対象がないだけなので、出力せずに正常終了する
        Err(e) if e.is_nothing_to_do() => {
            warn!("{}", e);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
