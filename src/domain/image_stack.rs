use image::RgbImage;
use std::fmt;

// --- 構造体定義 ---

/// 縦に連結するための、検証済みの不透明 RGB 画像のリスト。
///
/// `new` コンストラクタを通じてのみインスタンス化でき、その際に以下の点が保証されます。
/// - リストが空でないこと
/// - 連結後の高さが `u32` に収まること
///
/// 連結後のキャンバスの幅 (全画像の最大幅) と高さ (全画像の高さの合計) を保持します。
#[derive(Debug, PartialEq)]
pub struct ImageStack {
    images: Vec<RgbImage>,
    width: u32,
    height: u32,
}

// --- エラー定義 ---

/// `ImageStack` のインスタンス化時に発生する可能性のある検証エラー。
#[derive(Debug, PartialEq)]
pub enum ImageValidationError {
    /// 画像が1枚も渡されなかった場合に返されるエラー。
    EmptyData,
    /// 高さの合計が `u32` を超える場合に返されるエラー。
    /// `index` フィールドには、超過が検出された画像のインデックスが格納されます。
    TooLarge { index: usize },
}

// --- 実装ブロック ---

impl ImageStack {
    /// 新しい `ImageStack` インスタンスを作成（コンストラクタ）。
    ///
    /// # 引数
    /// * `images`: 上から順に並べる画像。
    ///
    /// # 戻り値
    /// * `Ok(ImageStack)`: 画像が1枚以上あり、連結後の寸法が表現できる場合。
    /// * `Err(ImageValidationError)`: 画像が空か、高さの合計が大きすぎる場合。
    pub fn new(images: Vec<RgbImage>) -> Result<Self, ImageValidationError> {
        if images.is_empty() {
            return Err(ImageValidationError::EmptyData);
        }

        let mut width = 0u32;
        let mut height = 0u32;
        for (index, image) in images.iter().enumerate() {
            width = width.max(image.width());
            height = height
                .checked_add(image.height())
                .ok_or(ImageValidationError::TooLarge { index })?;
        }

        Ok(Self {
            images,
            width,
            height,
        })
    }

    // --- 便利メソッド ---

    /// 保持している画像の枚数を返します。
    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// 連結後の (幅, 高さ)。
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    // --- ゲッターメソッド ---

    pub fn images(&self) -> &[RgbImage] {
        &self.images
    }
    pub fn width(&self) -> u32 {
        self.width
    }
    pub fn height(&self) -> u32 {
        self.height
    }
}

// --- トレイト実装 ---

impl fmt::Display for ImageValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageValidationError::EmptyData => {
                write!(f, "データが空です。画像を1枚以上渡してください。")
            }
            ImageValidationError::TooLarge { index } => {
                write!(
                    f,
                    "インデックス {} の画像を加えると連結後の高さが上限を超えます。",
                    index
                )
            }
        }
    }
}

impl std::error::Error for ImageValidationError {}

// --- テストモジュール ---
