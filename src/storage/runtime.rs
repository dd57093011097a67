//! # runtime.json 读写
//!
//! Liv 的全部持久化状态（查看器参数、界面状态）集中保存在应用数据
//! 目录下的单个 runtime.json 里，按顶层字段划分。各模块统一通过
//! 这里的读 / 写 / 合并接口访问，避免多处各自开文件造成不一致。
//!
//! 数据目录解析顺序：`$XDG_DATA_HOME/liv` → `~/.local/share/liv` →
//! 可执行文件同级目录。首次访问时自动创建。

use std::path::PathBuf;
use std::sync::OnceLock;

use serde_json::Value;

static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// 应用数据根目录，首次调用时解析并创建。
pub fn data_dir() -> &'static PathBuf {
    DATA_DIR.get_or_init(|| {
        let dir = resolve_data_dir();
        let _ = std::fs::create_dir_all(&dir);
        dir
    })
}

/// runtime.json 的完整路径。
pub fn runtime_json_path() -> PathBuf {
    data_dir().join("runtime.json")
}

/// 读取 runtime.json 全部内容，文件不存在或解析失败时返回空对象。
pub fn load() -> Value {
    let path = runtime_json_path();
    match std::fs::read_to_string(&path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or(Value::Object(Default::default())),
        Err(_) => Value::Object(Default::default()),
    }
}

/// 读取指定顶层字段，不存在返回 None。
pub fn load_field(key: &str) -> Option<Value> {
    load().get(key).cloned()
}

/// 将整个 Value 写入 runtime.json（格式化输出）。
pub fn save(value: &Value) -> Result<(), std::io::Error> {
    let content = serde_json::to_string_pretty(value).unwrap_or_default();
    std::fs::write(runtime_json_path(), content)
}

/// 读取 → 替换一个顶层字段 → 写回。
pub fn merge_field(key: &str, value: Value) -> Result<(), std::io::Error> {
    let mut root = load();
    if let Some(obj) = root.as_object_mut() {
        obj.insert(key.to_string(), value);
    }
    save(&root)
}

// ── 数据目录解析 ────────────────────────────────────────────

fn resolve_data_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        let p = PathBuf::from(xdg).join("liv");
        if p.parent().map(|d| d.exists()).unwrap_or(false) {
            return p;
        }
    }
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".local").join("share").join("liv");
    }
    exe_dir().unwrap_or_else(|| PathBuf::from("."))
}

fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|d| d.to_path_buf()))
}
