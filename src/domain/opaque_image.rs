//! 画像を不透明な RGB 画像に正規化する処理。

use image::{DynamicImage, ImageDecoder, ImageReader, ImageResult, Rgb, RgbImage};
use std::path::Path;

/// 画像ファイルをデコードし、向きの補正と白背景への合成を行った RGB 画像を返します。
pub fn load_opaque_rgb(path: &Path) -> ImageResult<RgbImage> {
    Ok(flatten_on_white(load_oriented(path)?))
}

/// 画像ファイルをデコードし、記録された向きを適用した画像を返します。
///
/// フォーマットは拡張子ではなくファイルの内容から判定します。
/// EXIF などに記録された向き情報があれば、それに従って回転・反転します。
pub fn load_oriented(path: &Path) -> ImageResult<DynamicImage> {
    let mut decoder = ImageReader::open(path)?
        .with_guessed_format()?
        .into_decoder()?;
    let orientation = decoder.orientation()?;

    let mut image = DynamicImage::from_decoder(decoder)?;
    image.apply_orientation(orientation);
    Ok(image)
}

/// アルファチャンネルを持つ画像を白背景に合成し、RGB 画像に変換します。
///
/// アルファを持たない画像はそのまま RGB に変換されます。
pub fn flatten_on_white(image: DynamicImage) -> RgbImage {
    if !image.color().has_alpha() {
        return image.into_rgb8();
    }

    let rgba = image.into_rgba8();
    let mut flattened = RgbImage::new(rgba.width(), rgba.height());
    for (dst, src) in flattened.pixels_mut().zip(rgba.pixels()) {
        let alpha = src[3] as u16;
        // c * a + 255 * (1 - a) を四捨五入
        let blend = |c: u8| ((c as u16 * alpha + 255 * (255 - alpha) + 127) / 255) as u8;
        *dst = Rgb([blend(src[0]), blend(src[1]), blend(src[2])]);
    }
    flattened
}
