use crate::domain::combined_image::CombineError;
use crate::domain::image_stack::ImageValidationError;
use crate::domain::input_source::path_error::PathError;
use crate::domain::sprite_sheet::SpriteSheetError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("パス関連のエラー: {0}")]
    Path(#[from] PathError),

    #[error("画像検証エラー: {0}")]
    ImageValidation(#[from] ImageValidationError),

    #[error("画像の保存エラー: {0}")]
    Combine(#[from] CombineError),

    #[error("スプライトシートのエラー: {0}")]
    SpriteSheet(#[from] SpriteSheetError),

    #[error("画像を読み込めません: {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("ウィンドウのエラー: {0}")]
    Window(String),

    #[error("指定されたフォルダに画像ファイルが見つかりませんでした: {0}")]
    NoImagesFound(String),

    #[error("指定された範囲に画像がありません (画像は全部で {available} 個)")]
    EmptyRange { available: usize },

    #[error("処理できる有効な画像がありません")]
    NoValidImages,
}

impl AppError {
    /// 連結する画像がなかっただけで、異常終了として扱う必要がないエラーかどうか。
    pub fn is_nothing_to_do(&self) -> bool {
        matches!(
            self,
            AppError::NoImagesFound(_) | AppError::EmptyRange { .. } | AppError::NoValidImages
        )
    }
}
