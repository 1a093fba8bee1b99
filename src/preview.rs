//! スプライトシートの読み込み。
//!
//! パスの検証、デコード、フレーム分割までを行います。ウィンドウには一切触れないため、
//! ここで失敗した場合はプレビューウィンドウを開かずに終了できます。

use crate::domain::input_source::image_file_path::ImageFilePath;
use crate::domain::opaque_image::load_oriented;
use crate::domain::sprite_sheet::SpriteSheet;
use crate::error::AppError;
use log::info;
use std::path::Path;

/// 画像ファイルを検証・デコードし、フレームに分割したスプライトシートを返します。
///
/// フォーマットはファイルの内容から判定し、記録された向きを適用します。
pub fn load_sprite_sheet(path: &Path) -> Result<SpriteSheet, AppError> {
    let path = ImageFilePath::new(path)?;
    let image = load_oriented(path.as_path()).map_err(|source| AppError::Decode {
        path: path.as_path().to_path_buf(),
        source,
    })?;

    let sheet = SpriteSheet::new(image)?;
    info!(
        "{}: {} フレーム ({}x{}px)",
        path,
        sheet.frame_count(),
        sheet.frame_size(),
        sheet.frame_size()
    );
    Ok(sheet)
}
