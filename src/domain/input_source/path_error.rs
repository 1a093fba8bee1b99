use thiserror::Error;

// パス検証で発生するエラー
#[derive(Debug, Error)]
pub enum PathError {
    #[error("無効なパスです: {0}")]
    InvalidPath(String),

    #[error("file not found: {0}")]
    NotFound(String),

    #[error("I/Oエラー: {0}")]
    IoError(#[from] std::io::Error),
}
