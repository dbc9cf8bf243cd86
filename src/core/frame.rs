//! 擁有自身記憶體的畫面緩衝區，供本機產生端與顯示端使用

use crate::core::error::{Error, Result, SurfaceError};
use crate::core::surface::{BYTES_PER_PIXEL, Surface};

/// width x height 像素的緩衝區，每像素 4 bytes
///
/// pitch 可以大於 width * 4，多出的部分是列尾填充，
/// 寫入與讀取都不會碰到填充 bytes。
#[derive(Debug, Clone)]
pub struct Frame {
    width: usize,
    height: usize,
    pitch: usize, // 每列 bytes 數
    data: Vec<u8>,
}

impl Frame {
    /// 緊密排列的緩衝區（pitch = width * 4），初始為全零
    pub fn new(width: usize, height: usize) -> Self {
        let pitch = width * BYTES_PER_PIXEL;
        Frame {
            width,
            height,
            pitch,
            data: vec![0; pitch * height],
        }
    }

    /// 指定 pitch 的緩衝區，pitch 小於 width * 4 視為錯誤
    pub fn with_pitch(width: usize, height: usize, pitch: usize) -> Result<Self> {
        if pitch < width * BYTES_PER_PIXEL {
            return Err(Error::Surface(SurfaceError::BadPitch { pitch, width }));
        }
        Ok(Frame {
            width,
            height,
            pitch,
            data: vec![0; pitch * height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pitch(&self) -> usize {
        self.pitch
    }

    /// 借出整塊儲存的表面控制代碼，所有像素寫入都走這條路
    pub fn surface(&mut self) -> Surface<'_> {
        Surface::new(&mut self.data, self.pitch)
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, color: u32) {
        debug_assert!(x < self.width && y < self.height);
        self.surface().set_pixel(x, y, color);
    }

    pub fn pixel(&self, x: usize, y: usize) -> u32 {
        debug_assert!(x < self.width && y < self.height);
        let offset = y * self.pitch + x * BYTES_PER_PIXEL;
        let mut bytes = [0u8; BYTES_PER_PIXEL];
        bytes.copy_from_slice(&self.data[offset..offset + BYTES_PER_PIXEL]);
        u32::from_ne_bytes(bytes)
    }

    /// 整面填滿單一色彩，列尾填充維持原樣
    pub fn clear(&mut self, color: u32) {
        let (w, h) = (self.width, self.height);
        let mut surface = self.surface();
        for y in 0..h {
            for x in 0..w {
                surface.set_pixel(x, y, color);
            }
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_pitch_smaller_than_row() {
        match Frame::with_pitch(4, 4, 12) {
            Err(Error::Surface(SurfaceError::BadPitch { pitch: 12, width: 4 })) => {}
            other => panic!("預期 BadPitch，得到 {:?}", other),
        }
    }

    #[test]
    fn storage_covers_pitch_times_height() {
        let frame = Frame::with_pitch(2, 3, 16).unwrap();
        assert_eq!(frame.pitch(), 16);
        assert_eq!(frame.as_bytes().len(), 16 * 3);
        assert_eq!(Frame::new(2, 3).pitch(), 2 * 4);
        assert_eq!(Frame::new(2, 3).as_bytes().len(), 2 * 4 * 3);
    }

    #[test]
    fn padded_frame_round_trip() {
        let mut frame = Frame::with_pitch(2, 2, 16).unwrap();
        frame.set_pixel(1, 1, 0x11223344);
        assert_eq!(frame.pixel(1, 1), 0x11223344);
        // 實際落點要跟著 pitch 走
        assert_eq!(&frame.as_bytes()[16 + 4..16 + 8], &0x11223344u32.to_ne_bytes());
    }

    #[test]
    fn clear_skips_row_padding() {
        let mut frame = Frame::with_pitch(2, 2, 16).unwrap();
        frame.clear(0xFFFFFFFF);
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(frame.pixel(x, y), 0xFFFFFFFF);
            }
        }
        // 每列 8..16 是填充，應維持初始的零
        for y in 0..2 {
            let row = &frame.as_bytes()[y * 16..(y + 1) * 16];
            assert!(row[8..].iter().all(|&b| b == 0));
        }
    }
}
