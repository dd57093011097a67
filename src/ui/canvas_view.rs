//! # 画布
//!
//! 每帧一次的输入派发 + 几何生成：把 egui 的指针 / 滚轮 / 尺寸变化
//! 喂给相机，然后用相机快照生成图片四边形交给 GL 回调绘制。
//! 相机由调用方独占持有，这里只在本帧内可变借用。

use std::sync::{Arc, Mutex};

use egui::{PointerButton, Sense, Ui};

use crate::core::camera::{Camera, ZoomTuning};
use crate::core::fit::fit_to_window;
use crate::core::picture::Picture;
use crate::core::quad::build_centered_quad;
use crate::rendering::gl_canvas::{GlCanvasParams, GlCanvasState, make_canvas_callback};

/// 光标正下方的图片像素坐标（源像素）。
#[derive(Debug, Clone, Copy)]
pub struct HoverInfo {
    pub x: u32,
    pub y: u32,
}

pub fn show_canvas(
    ui: &mut Ui,
    gl_canvas: &Arc<Mutex<GlCanvasState>>,
    camera: &mut Camera,
    viewport: &mut [f32; 2],
    display_size: &mut [f32; 2],
    picture: &Picture,
    tuning: ZoomTuning,
    checker_tile: f32,
) -> Option<HoverInfo> {
    let available = ui.available_size();
    let (rect, response) = ui.allocate_exact_size(available, Sense::click_and_drag());

    let size = rect.size();
    if size.x <= 0.0 || size.y <= 0.0 {
        // 退化矩形这一帧直接跳过，保证相机各处理器的非零前置条件
        return None;
    }

    // ── resize: offset 按比例重算，基准尺寸从原始像素重新适应 ──
    if *viewport != [size.x, size.y] {
        camera.on_resize(viewport[0], viewport[1], size.x, size.y);
        *display_size = fit_to_window(size.x, size.y, picture.width as f32, picture.height as f32);
        *viewport = [size.x, size.y];
    }

    // ── cursor move / drag to pan ──
    let dragging = response.dragged_by(PointerButton::Primary);
    if let Some(pos) = ui.ctx().input(|i| i.pointer.latest_pos()) {
        let local = pos - rect.min;
        camera.on_cursor_move(local.x, local.y, dragging);
    }

    // ── scroll wheel to zoom (anchored at cursor) ──
    if response.hovered() || response.dragged() {
        let scroll_y = ui.ctx().input(|i| i.raw_scroll_delta.y);
        if scroll_y != 0.0 {
            camera.on_scroll(scroll_y, tuning);
        }
    }

    // ── geometry + paint ──
    let quad = build_centered_quad(camera, display_size[0], display_size[1]);
    ui.painter_at(rect).add(make_canvas_callback(
        gl_canvas.clone(),
        GlCanvasParams {
            canvas_rect: rect,
            resolution: [size.x, size.y],
            quad,
            checker_tile,
        },
    ));

    // ── hover readout ───────────────────────────────────────
    let pointer = response.hover_pos()?;
    let local = pointer - rect.min;
    let [wx, wy] = camera.screen_to_world(local.x, local.y);

    // 世界原点在图片中心，折算回源像素坐标
    let px = (wx + display_size[0] / 2.0) / display_size[0] * picture.width as f32;
    let py = (wy + display_size[1] / 2.0) / display_size[1] * picture.height as f32;
    if px < 0.0 || py < 0.0 {
        return None;
    }

    let x = px.floor() as u32;
    let y = py.floor() as u32;
    if x >= picture.width || y >= picture.height {
        return None;
    }

    Some(HoverInfo { x, y })
}
