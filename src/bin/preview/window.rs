use log::debug;
use sdl2::{
    event::{Event, WindowEvent},
    keyboard::Keycode,
    pixels::{Color, PixelFormatEnum},
    render::{Canvas, TextureCreator},
    video::{Window, WindowContext},
    EventPump, VideoSubsystem,
};
use sprite_sheet_tools::domain::display_scale::ScreenSize;
use image::RgbImage;
use std::time::{Duration, Instant};

pub struct PreviewWindow {
    canvas: Canvas<Window>,
    texture_creator: TextureCreator<WindowContext>,
    event_pump: EventPump,
}

impl PreviewWindow {
    /// SDL を初期化してウィンドウを開きます。
    ///
    /// ウィンドウの大きさは、取得した画面サイズを `size_for_screen` に渡して決めます。
    pub fn create<F>(title: &str, size_for_screen: F) -> Result<Self, String>
    where
        F: FnOnce(ScreenSize) -> (u32, u32),
    {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;

        let (width, height) = size_for_screen(screen_size(&video_subsystem));
        debug!("Window: {}x{}", width, height);

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;

        let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
        canvas.set_draw_color(Color::RGB(0, 0, 0));
        let texture_creator = canvas.texture_creator();
        let event_pump = sdl_context.event_pump()?;

        Ok(Self {
            canvas,
            texture_creator,
            event_pump,
        })
    }

    /// フレームをウィンドウ全体に描画します。
    pub fn show(&mut self, frame: &RgbImage) -> Result<(), String> {
        let (width, height) = frame.dimensions();
        let mut texture = self
            .texture_creator
            .create_texture_streaming(PixelFormatEnum::RGB24, width, height)
            .map_err(|e| e.to_string())?;
        texture
            .update(None, frame.as_raw(), 3 * width as usize)
            .map_err(|e| e.to_string())?;

        self.canvas.clear();
        self.canvas.copy(&texture, None, None)?;
        self.canvas.present();
        Ok(())
    }

    /// `delay` の間イベントを処理します。
    /// Escape キーかウィンドウを閉じる操作があれば `true` を返します。
    pub fn wait_for_quit(&mut self, delay: Duration) -> bool {
        // 期限を表せないほど長い場合は期限なしで待つ
        let deadline = Instant::now().checked_add(delay);
        loop {
            let event = match deadline {
                Some(deadline) => {
                    let now = Instant::now();
                    if now >= deadline {
                        return false;
                    }
                    let remaining = (deadline - now).as_millis().clamp(1, u32::MAX as u128);
                    self.event_pump.wait_event_timeout(remaining as u32)
                }
                None => Some(self.event_pump.wait_event()),
            };
            match event {
                Some(Event::Quit { .. })
                | Some(Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                })
                | Some(Event::Window {
                    win_event: WindowEvent::Close,
                    ..
                }) => return true,
                _ => {}
            }
        }
    }
}

/// メインディスプレイの解像度。取得できなければ 1920x1080 を仮定します。
fn screen_size(video_subsystem: &VideoSubsystem) -> ScreenSize {
    match video_subsystem.desktop_display_mode(0) {
        Ok(mode) if mode.w > 0 && mode.h > 0 => ScreenSize {
            width: mode.w as u32,
            height: mode.h as u32,
        },
        Ok(mode) => {
            debug!("Invalid display mode {}x{}, assuming default", mode.w, mode.h);
            ScreenSize::default()
        }
        Err(e) => {
            debug!("Display mode unavailable ({}), assuming default", e);
            ScreenSize::default()
        }
    }
}
