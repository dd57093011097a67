use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use eframe::egui;

use crate::core::camera::Camera;
use crate::core::fit::fit_to_window;
use crate::core::picture::Picture;
use crate::rendering::gl_canvas::GlCanvasState;
use crate::storage::ui_state::UiState;
use crate::storage::viewer_config::ViewerConfig;
use crate::ui::canvas_view::{HoverInfo, show_canvas};
use crate::ui::splash::show_splash;
use crate::ui::status_bar::show_status_bar;
use crate::ui::theme;
use crate::ui::toolbar::show_toolbar;

/// 查看器会话：相机、当前图片和渲染器共享状态的唯一持有者。
///
/// 相机只被输入事件处理器（画布内）和这里的工具栏动作修改，
/// 渲染端拿到的是每帧生成的四边形值对象。
pub struct LianViewerApp {
    config: ViewerConfig,
    ui_state: UiState,

    camera: Camera,
    /// 上一帧的画布尺寸（逻辑像素），用于检测 resize
    viewport: [f32; 2],
    /// 适应窗口后的基准显示尺寸，相机缩放在其上叠加
    display_size: [f32; 2],

    picture: Option<Picture>,
    gl_canvas: Arc<Mutex<GlCanvasState>>,

    hover: Option<HoverInfo>,
    last_status: String,
}

impl LianViewerApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: ViewerConfig,
        initial: Option<PathBuf>,
    ) -> Self {
        theme::apply_theme(&cc.egui_ctx);

        let camera = Camera::new(config.default_width, config.default_height);
        let viewport = [config.default_width, config.default_height];

        let mut app = Self {
            ui_state: UiState::load(),
            camera,
            viewport,
            display_size: [0.0, 0.0],
            picture: None,
            gl_canvas: Arc::new(Mutex::new(GlCanvasState::new())),
            hover: None,
            last_status: "未加载图片".to_string(),
            config,
        };

        if let Some(path) = initial {
            app.open_picture(&path);
        }

        app
    }

    /// 解码并展示一张图片。失败时弹出错误框并保持运行，
    /// 画布回到 splash 状态而不是渲染未定义尺寸的几何。
    fn open_picture(&mut self, path: &Path) {
        match Picture::load(path) {
            Ok(picture) => {
                log::info!(
                    "已加载图片: {} ({} × {})",
                    path.display(),
                    picture.width,
                    picture.height
                );

                self.gl_canvas.lock().unwrap().set_image_pixels(
                    picture.rgba.clone(),
                    picture.width,
                    picture.height,
                );
                self.display_size = fit_to_window(
                    self.viewport[0],
                    self.viewport[1],
                    picture.width as f32,
                    picture.height as f32,
                );
                self.camera.reset(self.viewport[0], self.viewport[1]);
                self.last_status =
                    format!("已加载: {} ({} × {})", picture.file_name(), picture.width, picture.height);

                if let Some(dir) = path.parent() {
                    self.ui_state.last_open_dir = Some(dir.to_path_buf());
                    self.ui_state.save();
                }

                self.picture = Some(picture);
            }
            Err(error) => {
                log::error!("图片加载失败 {}: {error}", path.display());
                rfd::MessageDialog::new()
                    .set_level(rfd::MessageLevel::Error)
                    .set_title("无法打开图片")
                    .set_description(format!("{}\n\n{error}", path.display()))
                    .show();
                self.last_status = format!("加载失败: {error}");
            }
        }
    }

    fn pick_file(&mut self) {
        let mut dialog = rfd::FileDialog::new().add_filter(
            "图片",
            &["png", "jpg", "jpeg", "bmp", "gif", "webp", "tga", "tif", "tiff"],
        );
        if let Some(dir) = &self.ui_state.last_open_dir {
            dialog = dialog.set_directory(dir);
        }
        if let Some(path) = dialog.pick_file() {
            self.open_picture(&path);
        }
    }
}

impl eframe::App for LianViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let action = egui::TopBottomPanel::top("toolbar")
            .show(ctx, |ui| show_toolbar(ui, self.picture.is_some()))
            .inner;

        if action.open {
            self.pick_file();
        }
        if action.zoom_in {
            // 工具栏缩放以画布中心为锚点
            self.camera.zoom_step(
                1.0,
                self.viewport[0] / 2.0,
                self.viewport[1] / 2.0,
                self.config.zoom_tuning(),
            );
        }
        if action.zoom_out {
            self.camera.zoom_step(
                -1.0,
                self.viewport[0] / 2.0,
                self.viewport[1] / 2.0,
                self.config.zoom_tuning(),
            );
        }
        if action.reset_view {
            self.camera.reset(self.viewport[0], self.viewport[1]);
        }

        egui::TopBottomPanel::bottom("status_bar")
            .resizable(false)
            .min_height(28.0)
            .show(ctx, |ui| {
                show_status_bar(
                    ui,
                    &self.last_status,
                    self.camera.scale,
                    self.picture.as_ref().map(|p| (p.width, p.height)),
                    self.hover,
                );
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(theme::BG_DARK))
            .show(ctx, |ui| {
                if let Some(picture) = &self.picture {
                    self.hover = show_canvas(
                        ui,
                        &self.gl_canvas,
                        &mut self.camera,
                        &mut self.viewport,
                        &mut self.display_size,
                        picture,
                        self.config.zoom_tuning(),
                        self.config.checker_tile,
                    );
                } else {
                    show_splash(ui);
                }
            });
    }

    fn on_exit(&mut self, gl: Option<&eframe::glow::Context>) {
        if let Some(gl) = gl {
            self.gl_canvas.lock().unwrap().destroy(gl);
        }
    }
}
