use super::path_error::PathError;
use std::fmt;
use std::path::{Path, PathBuf};

/// 既存の画像ファイルへのパスを表現し、その妥当性を保証する構造体。
///
/// 拡張子は検証しません。フォーマットはデコード時に内容から判定されます。
#[derive(Debug)]
pub struct ImageFilePath(PathBuf);

impl ImageFilePath {
    /// 新しい `ImageFilePath` インスタンスを生成する。
    ///
    /// パスが存在し、かつファイルであることを検証する。
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, PathError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(PathError::NotFound(path.display().to_string()));
        }
        if !path.is_file() {
            return Err(PathError::InvalidPath(format!(
                "パス '{}' はファイルではありません。",
                path.display()
            )));
        }
        Ok(Self(path.to_path_buf()))
    }

    /// 内部の `Path` への参照を返す。
    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for ImageFilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
