use serde::{Deserialize, Serialize};

use crate::core::error::{ConfigError, Error, Result};
use crate::core::surface::BYTES_PER_PIXEL;

/// 檢視器設定（JSON 檔），欄位全部可省略
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Config {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_scale")]
    pub scale: u32,
    #[serde(default = "default_width")]
    pub width: usize,
    #[serde(default = "default_height")]
    pub height: usize,
    /// 列對齊 bytes 數，None 表示緊密排列
    #[serde(default)]
    pub row_align: Option<usize>,
}

fn default_title() -> String {
    "Pixel Surface".to_string()
}

fn default_scale() -> u32 {
    4
}

fn default_width() -> usize {
    160
}

fn default_height() -> usize {
    144
}

impl Default for Config {
    fn default() -> Self {
        Config {
            title: default_title(),
            scale: default_scale(),
            width: default_width(),
            height: default_height(),
            row_align: None,
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|e| Error::Config(ConfigError::Parse(e.to_string())))
    }

    /// 依 row_align 推出有效 pitch：width * 4 向上取到對齊倍數
    pub fn pitch(&self) -> usize {
        let tight = self.width * BYTES_PER_PIXEL;
        match self.row_align {
            Some(align) if align > 0 => ((tight + align - 1) / align) * align,
            _ => tight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_gives_defaults() {
        let cfg: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.title, "Pixel Surface");
        assert_eq!(cfg.scale, 4);
        assert_eq!(cfg.width, 160);
        assert_eq!(cfg.height, 144);
        assert!(cfg.row_align.is_none());
        assert_eq!(cfg.pitch(), 160 * 4);
    }

    #[test]
    fn row_align_rounds_pitch_up() {
        let cfg: Config =
            serde_json::from_str(r#"{"width": 2, "height": 2, "row_align": 16}"#).unwrap();
        assert_eq!(cfg.pitch(), 16);
        let tight: Config = serde_json::from_str(r#"{"width": 2, "row_align": 8}"#).unwrap();
        assert_eq!(tight.pitch(), 8);
    }

    #[test]
    fn load_reports_parse_error() {
        let path = std::env::temp_dir().join("rust_px_bad_config.json");
        std::fs::write(&path, "not json").unwrap();
        match Config::load(path.to_str().unwrap()) {
            Err(Error::Config(ConfigError::Parse(_))) => {}
            other => panic!("預期 Parse 錯誤，得到 {:?}", other),
        }
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        match Config::load("no_such_config.json") {
            Err(Error::Io(_)) => {}
            other => panic!("預期 Io 錯誤，得到 {:?}", other),
        }
    }
}
