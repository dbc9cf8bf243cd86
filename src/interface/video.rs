//! VideoSink：畫面輸出端的抽象介面

use crate::core::frame::Frame;

pub trait VideoSink {
    /// 呈現一張畫面
    fn present(&mut self, frame: &Frame) -> Result<(), String>;
}

/// 測試用虛擬輸出端：記錄最後一張呈現的畫面
#[derive(Debug, Default)]
pub struct DummyVideoSink {
    pub presented: usize,
    pub last_frame: Option<Frame>,
}

impl DummyVideoSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VideoSink for DummyVideoSink {
    fn present(&mut self, frame: &Frame) -> Result<(), String> {
        self.presented += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
