pub mod camera;
pub mod fit;
pub mod picture;
pub mod quad;

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum CoreError {
    Decode(image::ImageError),
    EmptyImage,
}

impl Display for CoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decode(error) => write!(f, "图片解码失败: {error}"),
            Self::EmptyImage => write!(f, "图片尺寸为 0，无法显示"),
        }
    }
}

impl Error for CoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Decode(error) => Some(error),
            Self::EmptyImage => None,
        }
    }
}

impl From<image::ImageError> for CoreError {
    fn from(value: image::ImageError) -> Self {
        Self::Decode(value)
    }
}
