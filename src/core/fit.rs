//! 适应窗口策略：保持宽高比，缩放到完全容纳（letterbox）。

/// 计算图片在当前画布内的基准显示尺寸。
///
/// 取宽高两个方向缩放比中较小的一个，相机缩放在此基础上叠加。
/// 图片加载时计算一次，画布尺寸每次变化后都要用图片的**原始**
/// 尺寸重新计算，不能拿上一次的显示尺寸反复缩放（会累积误差）。
pub fn fit_to_window(viewport_w: f32, viewport_h: f32, image_w: f32, image_h: f32) -> [f32; 2] {
    let s = (viewport_w / image_w).min(viewport_h / image_h);
    [image_w * s, image_h * s]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_limited_by_width() {
        let [w, h] = fit_to_window(800.0, 800.0, 400.0, 300.0);
        assert_eq!([w, h], [800.0, 600.0]);
    }

    #[test]
    fn fit_limited_by_height() {
        let [w, h] = fit_to_window(300.0, 800.0, 400.0, 300.0);
        assert_eq!([w, h], [300.0, 225.0]);
    }

    #[test]
    fn fit_preserves_aspect_ratio() {
        let [w, h] = fit_to_window(1024.0, 768.0, 1920.0, 1080.0);
        assert!((w / h - 1920.0 / 1080.0).abs() < 1e-4);
        assert!(w <= 1024.0 + 1e-4 && h <= 768.0 + 1e-4);
    }

    #[test]
    fn small_image_is_scaled_up() {
        let [w, h] = fit_to_window(1000.0, 1000.0, 10.0, 20.0);
        assert_eq!([w, h], [500.0, 1000.0]);
    }
}
