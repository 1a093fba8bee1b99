//! 画像の縦連結ワークフロー。
//!
//! フォルダ内の画像を番号順に並べ、範囲で絞り込み、1枚ずつ正規化してから
//! 縦に連結して保存します。個々の画像の読み込み失敗は警告を出してスキップします。

use crate::domain::combined_image::CombinedImage;
use crate::domain::file_order;
use crate::domain::image_stack::ImageStack;
use crate::domain::index_range::IndexRange;
use crate::domain::input_source::directory_path::DirectoryPath;
use crate::domain::opaque_image::load_opaque_rgb;
use crate::error::AppError;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

/// 連結処理への入力。
#[derive(Debug, Clone)]
pub struct CombineRequest {
    pub input_dir: PathBuf,
    pub output_file: PathBuf,
    pub range: IndexRange,
}

/// 連結処理の結果。
#[derive(Debug)]
pub struct CombineSummary {
    pub output_file: PathBuf,
    /// 連結に使った画像のパス (上から順)。
    pub combined: Vec<PathBuf>,
    /// 読み込みに失敗してスキップした画像のパス。
    pub skipped: Vec<PathBuf>,
    pub dimensions: (u32, u32),
}

/// フォルダ内の画像を縦に連結して `output_file` に保存します。
///
/// 画像が見つからない、範囲が空、すべての画像の読み込みに失敗した場合は
/// 何も書き込まずにエラーを返します (`AppError::is_nothing_to_do`)。
pub fn combine_images(
    request: &CombineRequest,
    show_progress: bool,
) -> Result<CombineSummary, AppError> {
    // 1. 入力ディレクトリの検証と画像ファイルの収集
    let input_dir = DirectoryPath::new(&request.input_dir)?;
    let mut files = input_dir.image_files()?;
    if files.is_empty() {
        return Err(AppError::NoImagesFound(
            input_dir.as_path().display().to_string(),
        ));
    }

    // 2. 番号順に並べ替えて範囲で絞り込む
    file_order::sort_by_sort_key(&mut files);
    if !request.range.is_unbounded() {
        debug!("範囲指定: {:?}", request.range);
    }
    let selected = request.range.apply(&files);
    if selected.is_empty() {
        return Err(AppError::EmptyRange {
            available: files.len(),
        });
    }
    info!(
        "{} 個中 {} 個の画像を処理します: {}",
        files.len(),
        selected.len(),
        input_dir
    );

    // 3. 画像を読み込んで正規化する
    let bar = progress_bar(selected.len(), "画像を処理中", show_progress);
    let mut images = Vec::with_capacity(selected.len());
    let mut combined = Vec::with_capacity(selected.len());
    let mut skipped = Vec::new();
    for path in selected {
        match load_opaque_rgb(path) {
            Ok(image) => {
                debug!("{} ({}x{})", display_name(path), image.width(), image.height());
                images.push(image);
                combined.push(path.clone());
            }
            Err(e) => {
                // 1枚の失敗では止めずに次へ進む
                bar.suspend(|| {
                    warn!("{} の処理中にエラーが発生しました: {}", display_name(path), e)
                });
                skipped.push(path.clone());
            }
        }
        bar.inc(1);
    }
    bar.finish_and_clear();

    if images.is_empty() {
        return Err(AppError::NoValidImages);
    }

    // 4. 連結して保存
    let stack = ImageStack::new(images)?;
    let bar = progress_bar(stack.len(), "連結画像を作成中", show_progress);
    let image = CombinedImage::compose(&stack, || bar.inc(1));
    bar.finish_and_clear();

    image.save_to_path(&request.output_file)?;

    Ok(CombineSummary {
        output_file: request.output_file.clone(),
        combined,
        skipped,
        dimensions: image.dimensions(),
    })
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn progress_bar(len: usize, message: &'static str, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{msg} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} img ({eta})")
    {
        bar.set_style(style.progress_chars("#>-"));
    }
    bar.set_message(message);
    bar
}
