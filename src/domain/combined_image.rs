// --- 依存モジュール ---

use super::image_stack::ImageStack;
use image::{imageops, ImageError, ImageFormat, Rgb, RgbImage};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 連結画像の保存時に発生する可能性のあるエラー。
#[derive(Debug, Error)]
pub enum CombineError {
    /// 出力パスの拡張子から画像フォーマットを決定できない場合。
    #[error("'{0}' の拡張子から出力フォーマットを判別できません")]
    UnknownFormat(PathBuf),
    /// エンコードまたはファイルへの書き込みに失敗した場合。
    #[error("'{path}' への保存に失敗しました: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
}

/// 複数の画像を縦に連結した1枚の画像。
#[derive(Debug)]
pub struct CombinedImage {
    image: RgbImage,
}

impl CombinedImage {
    /// `ImageStack` の画像を上から順に白いキャンバスへ貼り付けます。
    ///
    /// 各画像は左端 (x = 0) に揃えられ、幅が最大幅に満たない部分は白のまま残ります。
    /// `on_paste` は1枚貼り付けるたびに呼ばれます (進捗表示用)。
    pub fn compose<F>(stack: &ImageStack, mut on_paste: F) -> Self
    where
        F: FnMut(),
    {
        let (width, height) = stack.dimensions();
        let mut canvas = RgbImage::from_pixel(width, height, Rgb([255, 255, 255]));

        let mut y_offset: i64 = 0;
        for image in stack.images() {
            imageops::replace(&mut canvas, image, 0, y_offset);
            y_offset += i64::from(image.height());
            on_paste();
        }

        Self { image: canvas }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// 拡張子が示すフォーマットで、指定されたパスに保存します。
    pub fn save_to_path(&self, path: &Path) -> Result<(), CombineError> {
        let format = ImageFormat::from_path(path)
            .map_err(|_| CombineError::UnknownFormat(path.to_path_buf()))?;
        self.image
            .save_with_format(path, format)
            .map_err(|source| CombineError::Save {
                path: path.to_path_buf(),
                source,
            })
    }
}
