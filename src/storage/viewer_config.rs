//! # 查看器配置（ViewerConfig）
//!
//! 集中管理查看器的可调参数，消除硬编码。
//! 持久化到 runtime.json 的 `"viewer"` 字段，用户可以直接编辑。

use serde::{Deserialize, Serialize};

use crate::core::camera::ZoomTuning;

use super::runtime;

/// 查看器调参，所有可调数值的唯一来源。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    // ── 缩放 ──
    /// 单次滚轮步进的缩放比例
    pub scale_factor: f32,
    /// 缩放下界，必须大于 0
    pub scale_min: f32,
    /// 缩放上界
    pub scale_max: f32,

    // ── 窗口 ──
    /// 启动时的窗口宽度（逻辑像素）
    pub default_width: f32,
    /// 启动时的窗口高度（逻辑像素）
    pub default_height: f32,

    // ── 画布 ──
    /// 透明背景棋盘格的格子边长（逻辑像素）
    pub checker_tile: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            scale_factor: 0.09,
            scale_min: 0.1,
            scale_max: 10.0,

            default_width: 1280.0,
            default_height: 720.0,

            checker_tile: 48.0,
        }
    }
}

impl ViewerConfig {
    /// 从 runtime.json 加载，字段缺失处用默认值补齐。
    pub fn load() -> Self {
        runtime::load_field("viewer")
            .and_then(|v| serde_json::from_value(v).ok())
            .unwrap_or_default()
    }

    /// 保存到 runtime.json 的 `"viewer"` 字段。
    pub fn save(&self) {
        if let Ok(v) = serde_json::to_value(self) {
            let _ = runtime::merge_field("viewer", v);
        }
    }

    /// 首次运行时把默认值落盘，让用户有现成文件可改。
    pub fn ensure_saved(&self) {
        if runtime::load_field("viewer").is_none() {
            self.save();
        }
    }

    /// 相机模块使用的缩放调参视图。
    pub fn zoom_tuning(&self) -> ZoomTuning {
        ZoomTuning {
            factor: self.scale_factor,
            min_scale: self.scale_min,
            max_scale: self.scale_max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_bounds() {
        let config = ViewerConfig::default();
        assert_eq!(config.scale_factor, 0.09);
        assert_eq!(config.scale_min, 0.1);
        assert_eq!(config.scale_max, 10.0);
    }

    #[test]
    fn partial_json_fills_missing_fields_with_defaults() {
        let config: ViewerConfig =
            serde_json::from_value(serde_json::json!({ "scale_factor": 0.05 })).unwrap();
        assert_eq!(config.scale_factor, 0.05);
        assert_eq!(config.scale_max, 10.0);
        assert_eq!(config.default_width, 1280.0);
    }
}
