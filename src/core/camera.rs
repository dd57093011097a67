//! # 相机与坐标变换
//!
//! 画布的平移 / 缩放状态机。所有输入事件（光标移动、滚轮、窗口尺寸变化）
//! 都同步地走到这里，渲染端只读取快照。
//!
//! 坐标系约定：
//! - **屏幕空间**：画布左上角为原点的逻辑像素坐标。
//! - **世界空间**：未缩放、未平移的内容坐标，图片四边形始终以世界原点为中心。
//!
//! `offset` 是映射到屏幕原点的世界坐标，`scale` 是世界到屏幕的统一放大倍率。
//! 两个方向的换算互为精确逆运算（`scale` 由缩放限制保证非零）。

/// 缩放调参：单次滚轮步进比例与 scale 上下界。
///
/// 数值来自 [`ViewerConfig`](crate::storage::viewer_config::ViewerConfig)，
/// 相机本身不读配置。`min_scale` 必须大于零。
#[derive(Debug, Clone, Copy)]
pub struct ZoomTuning {
    pub factor: f32,
    pub min_scale: f32,
    pub max_scale: f32,
}

impl Default for ZoomTuning {
    fn default() -> Self {
        Self {
            factor: 0.09,
            min_scale: 0.1,
            max_scale: 10.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Camera {
    /// 映射到画布原点（左上角）的世界坐标
    pub offset: [f32; 2],
    /// 世界 → 屏幕放大倍率，始终在缩放限制区间内
    pub scale: f32,
    /// 最近一次光标位置（画布局部坐标），兼作缩放锚点和平移参考点
    pub last_cursor: [f32; 2],
}

impl Camera {
    /// 初始状态：世界原点位于画布中心，倍率 1。
    pub fn new(viewport_w: f32, viewport_h: f32) -> Self {
        Self {
            offset: [-viewport_w / 2.0, -viewport_h / 2.0],
            scale: 1.0,
            last_cursor: [0.0, 0.0],
        }
    }

    pub fn screen_to_world(&self, sx: f32, sy: f32) -> [f32; 2] {
        [
            sx / self.scale + self.offset[0],
            sy / self.scale + self.offset[1],
        ]
    }

    pub fn world_to_screen(&self, wx: f32, wy: f32) -> [f32; 2] {
        [
            (wx - self.offset[0]) * self.scale,
            (wy - self.offset[1]) * self.scale,
        ]
    }

    /// 光标移动事件。`dragging` 表示主键按下。
    ///
    /// 平移量除以 scale，保证同样的屏幕拖拽距离在任何缩放级别下
    /// 对应同样的视觉移动。未按键时只更新 `last_cursor`。
    pub fn on_cursor_move(&mut self, sx: f32, sy: f32, dragging: bool) {
        if dragging {
            self.offset[0] -= (sx - self.last_cursor[0]) / self.scale;
            self.offset[1] -= (sy - self.last_cursor[1]) / self.scale;
        }
        self.last_cursor = [sx, sy];
    }

    /// 滚轮事件：以当前光标为锚点缩放。方向取 `delta` 的符号，零为 no-op。
    pub fn on_scroll(&mut self, delta: f32, tuning: ZoomTuning) {
        self.zoom_step(delta, self.last_cursor[0], self.last_cursor[1], tuning);
    }

    /// 按 `direction` 的符号步进一次缩放，锚点为给定的屏幕坐标。
    ///
    /// 缩放前后分别求锚点下的世界坐标，差值补偿进 offset，
    /// 使锚点下的世界点在缩放前后保持不动（不会"漂移"）。
    pub fn zoom_step(&mut self, direction: f32, anchor_x: f32, anchor_y: f32, tuning: ZoomTuning) {
        if direction == 0.0 {
            return;
        }

        let [before_x, before_y] = self.screen_to_world(anchor_x, anchor_y);

        if direction < 0.0 {
            self.scale = (self.scale * (1.0 - tuning.factor)).max(tuning.min_scale);
        } else {
            self.scale = (self.scale * (1.0 + tuning.factor)).min(tuning.max_scale);
        }

        let [after_x, after_y] = self.screen_to_world(anchor_x, anchor_y);

        self.offset[0] += before_x - after_x;
        self.offset[1] += before_y - after_y;
    }

    /// 窗口尺寸变化：offset 按分辨率比例缩放，保持平移位置
    /// 相对窗口比例稳定。新旧尺寸由调用方保证非零。
    pub fn on_resize(&mut self, old_w: f32, old_h: f32, new_w: f32, new_h: f32) {
        self.offset[0] = new_w * (self.offset[0] / old_w);
        self.offset[1] = new_h * (self.offset[1] / old_h);
    }

    /// 回到初始视图：世界原点居中，倍率 1。
    pub fn reset(&mut self, viewport_w: f32, viewport_h: f32) {
        self.offset = [-viewport_w / 2.0, -viewport_h / 2.0];
        self.scale = 1.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn screen_world_round_trip() {
        let mut camera = Camera::new(1280.0, 720.0);
        camera.offset = [37.5, -220.0];
        camera.scale = 2.4;

        for &(sx, sy) in &[(0.0, 0.0), (640.0, 360.0), (1279.0, 1.0), (-50.0, 900.0)] {
            let [wx, wy] = camera.screen_to_world(sx, sy);
            let [rx, ry] = camera.world_to_screen(wx, wy);
            assert!(approx(rx, sx), "x: {rx} != {sx}");
            assert!(approx(ry, sy), "y: {ry} != {sy}");
        }
    }

    #[test]
    fn zoom_keeps_world_point_under_cursor() {
        let mut camera = Camera::new(1280.0, 720.0);
        camera.on_cursor_move(400.0, 250.0, false);

        let before = camera.screen_to_world(400.0, 250.0);
        camera.on_scroll(1.0, ZoomTuning::default());
        let after = camera.screen_to_world(400.0, 250.0);
        assert!(approx(before[0], after[0]));
        assert!(approx(before[1], after[1]));

        let before = camera.screen_to_world(400.0, 250.0);
        camera.on_scroll(-1.0, ZoomTuning::default());
        let after = camera.screen_to_world(400.0, 250.0);
        assert!(approx(before[0], after[0]));
        assert!(approx(before[1], after[1]));
    }

    #[test]
    fn zoom_anchor_holds_at_any_cursor() {
        let tuning = ZoomTuning::default();
        for &(cx, cy) in &[(0.0, 0.0), (1280.0, 720.0), (13.0, 700.0)] {
            let mut camera = Camera::new(1280.0, 720.0);
            camera.on_cursor_move(cx, cy, false);
            let before = camera.screen_to_world(cx, cy);
            camera.on_scroll(3.7, tuning);
            camera.on_scroll(-0.2, tuning);
            let after = camera.screen_to_world(cx, cy);
            assert!(approx(before[0], after[0]));
            assert!(approx(before[1], after[1]));
        }
    }

    #[test]
    fn scroll_never_leaves_scale_bounds() {
        let tuning = ZoomTuning::default();
        let mut camera = Camera::new(1280.0, 720.0);

        for _ in 0..200 {
            camera.on_scroll(1.0, tuning);
            assert!(camera.scale <= tuning.max_scale);
        }
        assert!(approx(camera.scale, tuning.max_scale));

        for _ in 0..400 {
            camera.on_scroll(-1.0, tuning);
            assert!(camera.scale >= tuning.min_scale);
        }
        assert!(approx(camera.scale, tuning.min_scale));
    }

    #[test]
    fn zero_scroll_is_a_no_op() {
        let mut camera = Camera::new(1280.0, 720.0);
        camera.on_cursor_move(100.0, 100.0, false);
        let offset = camera.offset;
        let scale = camera.scale;
        camera.on_scroll(0.0, ZoomTuning::default());
        assert_eq!(camera.offset, offset);
        assert_eq!(camera.scale, scale);
    }

    #[test]
    fn pan_at_unit_scale_moves_offset_by_negative_delta() {
        let mut camera = Camera::new(1280.0, 720.0);
        camera.on_cursor_move(100.0, 100.0, false);
        let [ox, oy] = camera.offset;

        camera.on_cursor_move(130.0, 80.0, true);
        assert!(approx(camera.offset[0], ox - 30.0));
        assert!(approx(camera.offset[1], oy + 20.0));
    }

    #[test]
    fn pan_delta_is_divided_by_scale() {
        let mut camera = Camera::new(1280.0, 720.0);
        camera.scale = 2.0;
        camera.on_cursor_move(0.0, 0.0, false);
        let [ox, oy] = camera.offset;

        camera.on_cursor_move(50.0, 50.0, true);
        assert!(approx(camera.offset[0], ox - 25.0));
        assert!(approx(camera.offset[1], oy - 25.0));
    }

    #[test]
    fn cursor_move_without_drag_only_tracks() {
        let mut camera = Camera::new(1280.0, 720.0);
        let offset = camera.offset;
        camera.on_cursor_move(555.0, 111.0, false);
        assert_eq!(camera.offset, offset);
        assert_eq!(camera.last_cursor, [555.0, 111.0]);
    }

    #[test]
    fn resize_rescales_offset_proportionally() {
        let mut camera = Camera::new(1280.0, 720.0);
        camera.offset = [-320.0, 90.0];
        camera.on_resize(1280.0, 720.0, 640.0, 360.0);
        assert!(approx(camera.offset[0], -160.0));
        assert!(approx(camera.offset[1], 45.0));
    }

    #[test]
    fn new_camera_centers_world_origin() {
        let camera = Camera::new(800.0, 600.0);
        let [sx, sy] = camera.world_to_screen(0.0, 0.0);
        assert!(approx(sx, 400.0));
        assert!(approx(sy, 300.0));
    }
}
