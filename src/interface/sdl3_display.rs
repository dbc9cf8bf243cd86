use sdl3::Sdl;
use sdl3::event::Event;
use sdl3::keyboard::Keycode;
use sdl3::pixels::PixelFormat;
use sdl3::rect::Rect;
use sdl3::video::Window;

use crate::core::frame::Frame;
use crate::core::surface::Surface;
use crate::interface::video::VideoSink;
use crate::utils::logger::log_to_file;

/// SDL3 顯示後端
pub struct SdlDisplay {
    pub _sdl: Sdl,
    pub _window: Window,
    pub canvas: sdl3::render::Canvas<Window>,
    pub event_pump: sdl3::EventPump,
    frame_w: u32,
    frame_h: u32,
}

impl SdlDisplay {
    pub fn new(title: &str, frame_w: u32, frame_h: u32, scale: u32) -> Result<Self, String> {
        let sdl = sdl3::init().map_err(|e| format!("SDL init error: {:?}", e))?;
        let video = sdl
            .video()
            .map_err(|e| format!("SDL video error: {:?}", e))?;
        let width = frame_w * scale;
        let height = frame_h * scale;
        let window = video
            .window(title, width, height)
            .position_centered()
            .resizable()
            .build()
            .map_err(|e| format!("SDL build window error: {:?}", e))?;
        let canvas = window.into_canvas();
        let event_pump = sdl
            .event_pump()
            .map_err(|e| format!("SDL event pump error: {:?}", e))?;
        log_to_file(&format!(
            "[Display] SDL3 視窗建立 {}x{} (frame {}x{})",
            width, height, frame_w, frame_h
        ));
        Ok(Self {
            _sdl: sdl,
            _window: canvas.window().clone(),
            canvas,
            event_pump,
            frame_w,
            frame_h,
        })
    }

    /// 鎖定 streaming texture，逐像素寫入後置中呈現
    ///
    /// texture 鎖定後回報的 pitch 與 Frame 自身的 pitch 是兩回事，
    /// 兩邊各用各的 pitch 定址。
    pub fn present_frame(&mut self, frame: &Frame) -> Result<(), String> {
        if frame.width() != self.frame_w as usize || frame.height() != self.frame_h as usize {
            return Err("frame size mismatch".into());
        }
        let texture_creator = self.canvas.texture_creator();
        let mut texture = texture_creator
            .create_texture_streaming(PixelFormat::ARGB8888, self.frame_w, self.frame_h)
            .map_err(|e| format!("SDL texture error: {:?}", e))?;
        texture
            .with_lock(None, |buf: &mut [u8], pitch: usize| {
                let mut dst = Surface::new(buf, pitch);
                for y in 0..frame.height() {
                    for x in 0..frame.width() {
                        dst.set_pixel(x, y, frame.pixel(x, y));
                    }
                }
            })
            .map_err(|e| format!("lock texture error: {:?}", e))?;
        self.canvas.clear();
        // 整數縮放並置中，避免非整數縮放造成條紋
        let (ww, wh) = self._window.size();
        let sx = (ww / self.frame_w).max(1);
        let sy = (wh / self.frame_h).max(1);
        let scale = sx.min(sy);
        let dst_w = self.frame_w * scale;
        let dst_h = self.frame_h * scale;
        let dst_x = ((ww as i32 - dst_w as i32) / 2).max(0);
        let dst_y = ((wh as i32 - dst_h as i32) / 2).max(0);
        let dst = Rect::new(dst_x, dst_y, dst_w, dst_h);
        self.canvas
            .copy(&texture, None, dst)
            .map_err(|e| format!("copy texture error: {:?}", e))?;
        self.canvas.present();
        Ok(())
    }

    /// 處理事件，回傳是否應該結束
    pub fn pump_events(&mut self) -> bool {
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => return true,
                _ => {}
            }
        }
        false
    }
}

impl VideoSink for SdlDisplay {
    fn present(&mut self, frame: &Frame) -> Result<(), String> {
        self.present_frame(frame)
    }
}
