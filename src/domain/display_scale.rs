//! プレビューウィンドウの表示倍率の計算。
//!
//! フレームは縦方向を 2/3 に縮めて表示するため、高さ方向はその縮小後の値で判定します。

/// ウィンドウが画面に占めてよい割合の既定値。
pub const MAX_WINDOW_RATIO: f64 = 0.75;
pub const MIN_SCALE: u32 = 1;
pub const MAX_SCALE: u32 = 8;

/// 縦方向を 2/3 に縮めた高さ。
fn squashed_height(frame_height: u32) -> f64 {
    frame_height as f64 * 2.0 / 3.0
}

/// 画面サイズ (ピクセル)。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

impl Default for ScreenSize {
    /// 画面サイズを取得できないときに仮定する 1920x1080。
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

/// フレームを画面の `max_window_ratio` の範囲に収める整数倍率を返します。
///
/// 結果は常に `MIN_SCALE..=MAX_SCALE` に収まります。
pub fn optimal_scale(
    frame_width: u32,
    frame_height: u32,
    screen: ScreenSize,
    max_window_ratio: f64,
) -> u32 {
    if frame_width == 0 || frame_height == 0 {
        return MIN_SCALE;
    }

    let max_window_width = screen.width as f64 * max_window_ratio;
    let max_window_height = screen.height as f64 * max_window_ratio;

    let scale_width = max_window_width / frame_width as f64;
    let scale_height = max_window_height / squashed_height(frame_height);

    // `as u32` は切り捨て (NaN と負数は0)
    (scale_width.min(scale_height) as u32).clamp(MIN_SCALE, MAX_SCALE)
}

/// 倍率を適用したフレームの表示サイズ (幅, 高さ)。どちらも1以上。
pub fn display_size(frame_width: u32, frame_height: u32, scale: u32) -> (u32, u32) {
    let width = frame_width.saturating_mul(scale);
    let height = (squashed_height(frame_height) * scale as f64) as u32;
    (width.max(1), height.max(1))
}
