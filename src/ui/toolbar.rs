use egui::Ui;

// ── action returned to the app ──────────────────────────────

#[derive(Debug, Clone)]
pub struct ToolbarAction {
    pub open: bool,
    pub zoom_in: bool,
    pub zoom_out: bool,
    pub reset_view: bool,
}

impl ToolbarAction {
    pub fn none() -> Self {
        Self {
            open: false,
            zoom_in: false,
            zoom_out: false,
            reset_view: false,
        }
    }
}

// ── toolbar rendering ───────────────────────────────────────

pub fn show_toolbar(ui: &mut Ui, has_picture: bool) -> ToolbarAction {
    let mut action = ToolbarAction::none();

    ui.horizontal(|ui| {
        if ui.button("📂 打开图片…").clicked() {
            action.open = true;
        }

        ui.separator();

        if ui
            .add_enabled(has_picture, egui::Button::new("＋"))
            .on_hover_text("放大")
            .clicked()
        {
            action.zoom_in = true;
        }
        if ui
            .add_enabled(has_picture, egui::Button::new("－"))
            .on_hover_text("缩小")
            .clicked()
        {
            action.zoom_out = true;
        }
        if ui
            .add_enabled(has_picture, egui::Button::new("重置视图"))
            .on_hover_text("回到居中、100% 缩放")
            .clicked()
        {
            action.reset_view = true;
        }
    });

    action
}
