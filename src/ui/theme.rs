//! # 粉蓝白主题
//!
//! Lian 系列工具共用的粉蓝白配色，应用到 egui Style。

use egui::{Color32, Rounding, Stroke, Style, Visuals};

// ── 调色板 ──────────────────────────────────────────────────

/// 粉色（主强调色）
pub const PINK: Color32 = Color32::from_rgb(245, 169, 184);
/// 蓝色（次强调色）
pub const BLUE: Color32 = Color32::from_rgb(91, 206, 250);
/// 浅蓝
pub const BLUE_LIGHT: Color32 = Color32::from_rgb(145, 225, 255);
/// 白色
pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);

/// 深色背景（画布之外）
pub const BG_DARK: Color32 = Color32::from_rgb(30, 30, 40);
/// 面板背景
pub const BG_PANEL: Color32 = Color32::from_rgb(38, 38, 52);
/// 控件背景（非激活 / hover / active）
pub const BG_WIDGET: Color32 = Color32::from_rgb(50, 50, 68);
pub const BG_WIDGET_HOVER: Color32 = Color32::from_rgb(62, 62, 82);
pub const BG_WIDGET_ACTIVE: Color32 = Color32::from_rgb(75, 75, 100);

/// 文字颜色
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(235, 235, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(180, 180, 200);

/// 根据参数返回粉到蓝的插值颜色：0.0 = 粉色, 1.0 = 蓝色
pub fn accent_gradient(t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    Color32::from_rgb(
        (PINK.r() as f32 + (BLUE.r() as f32 - PINK.r() as f32) * t) as u8,
        (PINK.g() as f32 + (BLUE.g() as f32 - PINK.g() as f32) * t) as u8,
        (PINK.b() as f32 + (BLUE.b() as f32 - PINK.b() as f32) * t) as u8,
    )
}

// ── 应用主题 ────────────────────────────────────────────────

pub fn apply_theme(ctx: &egui::Context) {
    let mut style: Style = (*ctx.style()).clone();
    let mut visuals = Visuals::dark();
    let rounding = Rounding::same(4.0);

    visuals.panel_fill = BG_PANEL;
    visuals.window_fill = BG_PANEL;
    visuals.extreme_bg_color = BG_DARK;

    visuals.widgets.inactive.bg_fill = BG_WIDGET;
    visuals.widgets.inactive.weak_bg_fill = BG_WIDGET;
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.inactive.rounding = rounding;

    visuals.widgets.hovered.bg_fill = BG_WIDGET_HOVER;
    visuals.widgets.hovered.weak_bg_fill = BG_WIDGET_HOVER;
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, BLUE);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.5, WHITE);
    visuals.widgets.hovered.rounding = rounding;

    visuals.widgets.active.bg_fill = BG_WIDGET_ACTIVE;
    visuals.widgets.active.weak_bg_fill = BG_WIDGET_ACTIVE;
    visuals.widgets.active.bg_stroke = Stroke::new(1.5, PINK);
    visuals.widgets.active.fg_stroke = Stroke::new(2.0, WHITE);
    visuals.widgets.active.rounding = rounding;

    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.noninteractive.rounding = rounding;

    visuals.selection.bg_fill = Color32::from_rgba_unmultiplied(91, 206, 250, 80);
    visuals.selection.stroke = Stroke::new(1.0, BLUE_LIGHT);
    visuals.hyperlink_color = BLUE_LIGHT;

    style.visuals = visuals;
    style.spacing.item_spacing = egui::vec2(6.0, 4.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);

    ctx.set_style(style);
}
