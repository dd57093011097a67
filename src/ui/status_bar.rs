use egui::Ui;

use crate::ui::canvas_view::HoverInfo;

pub fn show_status_bar(
    ui: &mut Ui,
    message: &str,
    zoom: f32,
    source_size: Option<(u32, u32)>,
    hover: Option<HoverInfo>,
) {
    ui.horizontal_wrapped(|ui| {
        ui.label(format!("状态: {message}"));
        ui.separator();
        ui.label(format!("缩放: {:.0}%", zoom * 100.0));
        if let Some((w, h)) = source_size {
            ui.separator();
            ui.label(format!("尺寸: {w} × {h}"));
        }
        if let Some(hover) = hover {
            ui.separator();
            ui.label(format!("像素: ({}, {})", hover.x, hover.y));
        }
    });
}
