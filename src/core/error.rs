pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Surface(SurfaceError),
    Config(ConfigError),
    Io(std::io::Error),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

#[derive(Debug)]
pub enum SurfaceError {
    /// 寫入位移超出緩衝區：(x, y) 與緩衝區長度
    OutOfBounds { x: usize, y: usize, len: usize },
    /// pitch 小於一列實際需要的 bytes 數
    BadPitch { pitch: usize, width: usize },
}

#[derive(Debug)]
pub enum ConfigError {
    Parse(String),
}
