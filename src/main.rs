mod config;
mod core;
mod interface;
mod utils;
mod viewer;

fn main() {
    println!("=== 啟動 Pixel Surface 檢視器 ===");

    // 獲取命令行參數：可選的 JSON 設定檔路徑
    let args: Vec<String> = std::env::args().collect();
    let cfg = if args.len() >= 2 {
        match config::Config::load(&args[1]) {
            Ok(cfg) => cfg,
            Err(e) => {
                println!("設定檔載入失敗 {}: {:?}", args[1], e);
                return;
            }
        }
    } else {
        config::Config::default()
    };

    // 直接進入 SDL3 主迴圈
    viewer::main(cfg);
}
