use image::{imageops, DynamicImage, RgbImage};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SpriteSheetError {
    /// 幅が0、または高さが幅に満たずフレームを1枚も切り出せない場合。
    #[error("フレームを切り出せません (画像サイズ {width}x{height})")]
    NoFrames { width: u32, height: u32 },
}

/// 正方形のフレームを縦に並べたスプライトシート。
///
/// フレームの一辺は画像の幅と等しく、フレーム数は `高さ / 幅` (切り捨て) です。
/// 端数の行は無視されます。
#[derive(Debug)]
pub struct SpriteSheet {
    image: RgbImage,
    frame_size: u32,
    frame_count: u32,
}

impl SpriteSheet {
    /// アルファチャンネルは破棄され、RGB として保持されます。
    pub fn new(image: DynamicImage) -> Result<Self, SpriteSheetError> {
        let image = image.into_rgb8();
        let (width, height) = image.dimensions();

        if width == 0 || height / width == 0 {
            return Err(SpriteSheetError::NoFrames { width, height });
        }

        Ok(Self {
            frame_size: width,
            frame_count: height / width,
            image,
        })
    }

    /// フレームの一辺の長さ (ピクセル)。
    pub fn frame_size(&self) -> u32 {
        self.frame_size
    }

    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    /// `index` 番目のフレームを切り出します。範囲外なら `None`。
    pub fn frame(&self, index: u32) -> Option<RgbImage> {
        if index >= self.frame_count {
            return None;
        }
        let y = index * self.frame_size;
        Some(imageops::crop_imm(&self.image, 0, y, self.frame_size, self.frame_size).to_image())
    }

    /// すべてのフレームを上から順に返すイテレータ。
    pub fn frames(&self) -> impl Iterator<Item = RgbImage> + '_ {
        (0..self.frame_count).filter_map(move |i| self.frame(i))
    }
}
