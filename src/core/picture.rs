//! # 图片解码
//!
//! 磁盘文件到 RGBA8 像素缓冲的解码层。解码后尺寸不再变化，
//! 显示尺寸由适应窗口策略另行推导。

use std::path::{Path, PathBuf};

use super::CoreError;

/// 一张解码完成的图片：原始尺寸 + RGBA8 像素。
#[derive(Debug, Clone)]
pub struct Picture {
    pub path: PathBuf,
    /// 原始宽度（源像素）
    pub width: u32,
    /// 原始高度（源像素）
    pub height: u32,
    /// 紧凑 RGBA8 缓冲，行优先，供 GPU 上传
    pub rgba: Vec<u8>,
}

impl Picture {
    /// 解码一个图片文件。格式嗅探和解码全部交给 image crate，
    /// 文件缺失 / 无法读取 / 格式不支持都会落在 [`CoreError::Decode`]。
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let decoded = image::open(path)?;
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();

        if width == 0 || height == 0 {
            return Err(CoreError::EmptyImage);
        }

        Ok(Self {
            path: path.to_path_buf(),
            width,
            height,
            rgba: rgba.into_raw(),
        })
    }

    /// 状态栏用的短文件名。
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_file_reports_decode_error() {
        let err = Picture::load(Path::new("/definitely/not/here.png")).unwrap_err();
        assert!(matches!(err, CoreError::Decode(_)));
    }

    #[test]
    fn load_garbage_bytes_reports_decode_error() {
        let dir = std::env::temp_dir();
        let path = dir.join("liv_test_not_an_image.png");
        std::fs::write(&path, b"this is not a png").unwrap();

        let err = Picture::load(&path).unwrap_err();
        assert!(matches!(err, CoreError::Decode(_)));

        let _ = std::fs::remove_file(&path);
    }
}
