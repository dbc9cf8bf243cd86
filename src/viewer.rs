//! SDL3 主迴圈：產生端執行緒經 channel 送出畫面，主迴圈負責呈現

use crate::config::Config;
use crate::core::frame::Frame;
use crate::interface::sdl3_display::SdlDisplay;
use crate::interface::video::VideoSink;
use crate::utils::logger::log_to_file;
use std::time::Duration;

pub fn main(cfg: Config) {
    let mut display = SdlDisplay::new(&cfg.title, cfg.width as u32, cfg.height as u32, cfg.scale)
        .expect("SDL3 init failed");

    let (tx, rx) = crossbeam::channel::bounded::<Frame>(2);

    // 產生端執行緒：持續產生測試圖樣畫面。
    // bounded channel 滿的時候 send 會擋住，自然形成節流。
    let width = cfg.width;
    let height = cfg.height;
    let pitch = cfg.pitch();
    let producer = std::thread::spawn(move || {
        let mut tick = 0u32;
        loop {
            let mut frame = match Frame::with_pitch(width, height, pitch) {
                Ok(f) => f,
                Err(e) => {
                    log_to_file(&format!("[Viewer] frame 建立失敗: {:?}", e));
                    return;
                }
            };
            draw_test_pattern(&mut frame, tick);
            tick = tick.wrapping_add(1);
            // 對端關閉就收工
            if tx.send(frame).is_err() {
                return;
            }
        }
    });

    'running: loop {
        if display.pump_events() {
            break 'running;
        }
        if let Ok(frame) = rx.try_recv() {
            if let Err(e) = display.present(&frame) {
                log_to_file(&format!("[Viewer] present error: {}", e));
                break 'running;
            }
        }
        ::std::thread::sleep(Duration::new(0, 1_000_000_000u32 / 60));
    }

    drop(rx);
    let _ = producer.join();
    log_to_file("[Viewer] 結束");
}

/// 移動漸層測試圖樣，逐像素寫入（ARGB，alpha 固定 0xFF）
pub fn draw_test_pattern(frame: &mut Frame, tick: u32) {
    let (w, h) = (frame.width(), frame.height());
    let mut surface = frame.surface();
    for y in 0..h {
        for x in 0..w {
            let r = (x * 255 / w) as u32;
            let g = (y * 255 / h) as u32;
            let b = tick % 256;
            surface.set_pixel(x, y, 0xFF00_0000 | (r << 16) | (g << 8) | b);
        }
    }
}
