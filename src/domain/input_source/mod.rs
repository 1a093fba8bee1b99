pub mod directory_path;
pub mod image_file_path;
pub mod path_error;

/// 対応している画像ファイルの拡張子 (小文字)。
pub const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "bmp"];

/// パスの拡張子が対応画像フォーマットか、大文字小文字を区別せずに判定します。
pub fn has_image_extension(path: &std::path::Path) -> bool {
    // `file_stem` がないとドットファイル (`.png` など) を誤判定するためチェック
    if path.file_stem().is_none() {
        return false;
    }
    match path.extension().and_then(|s| s.to_str()) {
        Some(ext) => IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn accepts_supported_extensions_in_any_case() {
        assert!(has_image_extension(Path::new("frame1.png")));
        assert!(has_image_extension(Path::new("frame1.JPG")));
        assert!(has_image_extension(Path::new("a.Jpeg")));
        assert!(has_image_extension(Path::new("sheet.gif")));
        assert!(has_image_extension(Path::new("sheet.bmp")));
    }

    #[test]
    fn rejects_other_files() {
        assert!(!has_image_extension(Path::new("notes.txt")));
        assert!(!has_image_extension(Path::new("frame.webp")));
        assert!(!has_image_extension(Path::new("no_extension")));
        assert!(!has_image_extension(Path::new(".png")));
    }
}
