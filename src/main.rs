mod core;
mod rendering;
mod storage;
mod ui;

use std::path::PathBuf;

use storage::viewer_config::ViewerConfig;
use ui::app::LianViewerApp;

fn main() {
    env_logger::init();

    let config = ViewerConfig::load();
    config.ensure_saved();

    let initial = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Liv 图片查看器")
            .with_inner_size([config.default_width, config.default_height])
            .with_app_id("lian-viewer"),
        ..Default::default()
    };

    eframe::run_native(
        "Liv 图片查看器",
        options,
        Box::new(move |cc| Box::new(LianViewerApp::new(cc, config, initial))),
    )
    .expect("窗口启动失败");
}
