//! # 四边形几何
//!
//! 每帧由相机快照 + 显示尺寸生成一个以世界原点为中心的矩形：
//! 4 个顶点（屏幕坐标 + 纹理坐标）和固定的两三角形索引。
//! 这里只产出值对象，对渲染后端一无所知。

use super::camera::Camera;

/// 两个三角形共享对角线，索引布局固定不变。
pub const QUAD_INDICES: [u32; 6] = [0, 1, 2, 1, 2, 3];

/// 顶点：屏幕空间位置 + `[0,1]²` 纹理坐标。
///
/// `repr(C)` 保证内存布局与 GL 顶点缓冲的交错格式一致，
/// 上传时可直接按字节重新解释。
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub pos: [f32; 2],
    pub uv: [f32; 2],
}

#[derive(Debug, Clone, Copy)]
pub struct Quad {
    pub vertices: [Vertex; 4],
}

/// 由相机状态和基准显示尺寸生成居中矩形。
///
/// 相机缩放乘在适应窗口的基准尺寸之上；平移和缩放完全由相机表达，
/// 矩形本身永远以世界原点为中心。顶点顺序：左上、右上、左下、右下。
pub fn build_centered_quad(camera: &Camera, display_w: f32, display_h: f32) -> Quad {
    let [sx, sy] = camera.world_to_screen(0.0, 0.0);

    let w = display_w * camera.scale;
    let h = display_h * camera.scale;
    let left = sx - w / 2.0;
    let top = sy - h / 2.0;

    Quad {
        vertices: [
            Vertex { pos: [left, top], uv: [0.0, 0.0] },
            Vertex { pos: [left + w, top], uv: [1.0, 0.0] },
            Vertex { pos: [left, top + h], uv: [0.0, 1.0] },
            Vertex { pos: [left + w, top + h], uv: [1.0, 1.0] },
        ],
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
    fn quad_is_centered_at_default_camera() {
        let camera = Camera::new(1280.0, 720.0);
        let quad = build_centered_quad(&camera, 400.0, 300.0);

        let top_left = quad.vertices[0].pos;
        assert!(approx(top_left[0], 1280.0 / 2.0 - 200.0));
        assert!(approx(top_left[1], 720.0 / 2.0 - 150.0));

        let bottom_right = quad.vertices[3].pos;
        assert!(approx(bottom_right[0], 1280.0 / 2.0 + 200.0));
        assert!(approx(bottom_right[1], 720.0 / 2.0 + 150.0));
    }

    #[test]
    fn camera_scale_multiplies_display_size() {
        let mut camera = Camera::new(1000.0, 1000.0);
        camera.scale = 2.0;
        // offset 保持世界原点在 (500, 500) 屏幕处
        camera.offset = [-250.0, -250.0];
        let quad = build_centered_quad(&camera, 100.0, 50.0);

        let width = quad.vertices[1].pos[0] - quad.vertices[0].pos[0];
        let height = quad.vertices[2].pos[1] - quad.vertices[0].pos[1];
        assert!(approx(width, 200.0));
        assert!(approx(height, 100.0));
    }

    #[test]
    fn uv_corners_are_the_unit_square() {
        let camera = Camera::new(640.0, 480.0);
        let quad = build_centered_quad(&camera, 100.0, 100.0);
        assert_eq!(quad.vertices[0].uv, [0.0, 0.0]);
        assert_eq!(quad.vertices[1].uv, [1.0, 0.0]);
        assert_eq!(quad.vertices[2].uv, [0.0, 1.0]);
        assert_eq!(quad.vertices[3].uv, [1.0, 1.0]);
    }

    #[test]
    fn index_layout_is_two_triangles_sharing_the_diagonal() {
        assert_eq!(QUAD_INDICES, [0, 1, 2, 1, 2, 3]);
    }
}
