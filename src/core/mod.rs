pub mod error;
pub mod frame;
pub mod surface;

// 核心只做記憶體內的像素定址與寫入；顯示與設定分別在
// interface 與 config 模組。
