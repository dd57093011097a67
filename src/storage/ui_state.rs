//! 界面状态：跨启动记住的小东西。持久化到 runtime.json 的 `"ui"` 字段。

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::runtime;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UiState {
    /// 文件对话框上次使用的目录
    pub last_open_dir: Option<PathBuf>,
}

impl UiState {
    pub fn load() -> Self {
        runtime::load_field("ui")
            .and_then(|v| serde_json::from_value(v).ok())
            .unwrap_or_default()
    }

    pub fn save(&self) {
        if let Ok(v) = serde_json::to_value(self) {
            let _ = runtime::merge_field("ui", v);
        }
    }
}
