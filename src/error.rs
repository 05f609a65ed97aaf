//! # 错误类型模块
//!
//! 库中所有操作都返回结构化的错误，而不是直接 panic。
//! 错误分为两类：
//! * [`InputError`]：输入有问题 (文件缺失、无法解码、尺寸不符、位数不支持等)。
//! * [`CodecError`]：输入合法，但在编码或写出结果时失败。
//!
//! 调用方可以通过 [`Error::kind`] 区分这两类错误。

use image::{ImageError, ImageFormat};
use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 错误所指向的输入图像的角色。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageRole {
    /// 用于承载秘密的可见图像。
    Carrier,
    /// 需要被隐藏的图像。
    Secret,
    /// 已经嵌入了秘密的图像。
    Stego,
}

impl fmt::Display for ImageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Carrier => write!(f, "carrier"),
            Self::Secret => write!(f, "secret"),
            Self::Stego => write!(f, "stego"),
        }
    }
}

/// 错误的大类。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Input,
    Codec,
}

/// 库的顶层错误类型。
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Codec(#[from] CodecError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Input(_) => ErrorKind::Input,
            Self::Codec(_) => ErrorKind::Codec,
        }
    }
}

/// 由调用方提供的输入引起的错误。
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Unsupported bit depth {0}: only 3 or 4 low-order bits can carry the secret.")]
    UnsupportedBitDepth(u8),

    #[error("Unable to read {role} image file: {}", .path.display())]
    Read {
        role: ImageRole,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("The {0} image is empty.")]
    Empty(ImageRole),

    #[error("The {role} image could not be decoded.")]
    Decode {
        role: ImageRole,
        #[source]
        source: ImageError,
    },

    #[error(
        "Carrier is {}x{} but secret is {}x{}; both images must have the same dimensions.",
        .carrier.0, .carrier.1, .secret.0, .secret.1
    )]
    DimensionMismatch {
        carrier: (u32, u32),
        secret: (u32, u32),
    },

    #[error("Channel buffers differ in length: carrier has {carrier}, secret has {secret}.")]
    LengthMismatch { carrier: usize, secret: usize },

    #[error("Unsupported output format for: {}", .path.display())]
    UnsupportedOutput {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    #[error("Writing {format:?} images is not supported: {}", .path.display())]
    UnwritableOutput { path: PathBuf, format: ImageFormat },

    #[error(
        "Refusing to write a stego image as lossy {format:?} ({}): compression would destroy the embedded bits.",
        .path.display()
    )]
    LossyOutput { path: PathBuf, format: ImageFormat },

    #[error("Output file already exists: {}. Use --force to overwrite it.", .0.display())]
    OutputExists(PathBuf),
}

/// 输入合法，但处理过程中出现的错误。
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Pixel buffer of {actual} bytes does not fit a {width}x{height} RGB image.")]
    BufferSize {
        width: u32,
        height: u32,
        actual: usize,
    },

    #[error("Failed to encode the image as {format:?}.")]
    Encode {
        format: ImageFormat,
        #[source]
        source: ImageError,
    },

    #[error("Unable to write image file: {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
