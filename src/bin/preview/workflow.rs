//! プレビューの流れ: 画像の検証と読み込み → フレーム分割 → ウィンドウでのループ再生。
//!
//! ウィンドウを開く前にパスとデコードを検証するため、失敗時はウィンドウ操作を一切行いません。

use crate::cli::Args;
use crate::window::PreviewWindow;
use image::imageops::{self, FilterType};
use image::RgbImage;
use log::info;
use sprite_sheet_tools::domain::display_scale::{self, MAX_WINDOW_RATIO};
use sprite_sheet_tools::error::AppError;
use sprite_sheet_tools::preview::load_sprite_sheet;
use std::time::Duration;

pub const WINDOW_TITLE: &str = "Animation Preview";

pub fn run(args: &Args) -> Result<(), AppError> {
    // 1. パスの検証、デコード、フレーム分割 (ウィンドウはまだ開かない)
    let sheet = load_sprite_sheet(&args.image_path)?;
    let frame_size = sheet.frame_size();

    // 2. 画面サイズから倍率を決めてウィンドウを開く
    let mut display = (frame_size, frame_size);
    let mut window = PreviewWindow::create(WINDOW_TITLE, |screen| {
        let scale = display_scale::optimal_scale(frame_size, frame_size, screen, MAX_WINDOW_RATIO);
        display = display_scale::display_size(frame_size, frame_size, scale);
        info!("表示倍率: {}x (画面 {}x{})", scale, screen.width, screen.height);
        display
    })
    .map_err(AppError::Window)?;

    let (width, height) = display;
    let frames: Vec<RgbImage> = sheet
        .frames()
        .map(|frame| imageops::resize(&frame, width, height, FilterType::Nearest))
        .collect();

    // 3. Escape かウィンドウを閉じるまでループ再生
    let delay = Duration::from_millis(args.delay_ms);
    'playback: loop {
        for frame in &frames {
            window.show(frame).map_err(AppError::Window)?;
            if window.wait_for_quit(delay) {
                break 'playback;
            }
        }
    }

    Ok(())
}
