//! # 图像读写模块
//!
//! 负责把编码后的图像字节 (PNG, JPEG, BMP 等) 解码为 8 位 RGB 像素网格，
//! 调整秘密图像尺寸，以及选择输出格式并写出结果文件。
//! 位平面变换本身在 [`crate::bitplane`] 中完成，本模块不触碰像素值。

use crate::constants::{FALLBACK_EXTENSION, RESIZE_FILTER};
use crate::error::{CodecError, ImageRole, InputError, Result};
use image::{ImageFormat, RgbImage, imageops};
use log::debug;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// 秘密图像与载体尺寸不一致时的处理方式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SecretFit {
    /// 将秘密图像缩放到载体的宽高。
    #[default]
    Resize,
    /// 不做任何调整，尺寸不一致时由嵌入步骤报错。
    Exact,
}

/// 将编码后的图像字节解码为 RGB 图像。
///
/// 透明通道会被丢弃，高位深图像会被转换为每通道 8 位。
pub fn decode_rgb(bytes: &[u8], role: ImageRole) -> Result<RgbImage> {
    if bytes.is_empty() {
        return Err(InputError::Empty(role).into());
    }

    let image = image::load_from_memory(bytes)
        .map_err(|source| InputError::Decode { role, source })?
        .to_rgb8();

    debug!(
        "decoded {role} image: {}x{}",
        image.width(),
        image.height()
    );
    Ok(image)
}

/// 读取磁盘上图像文件的原始字节。
pub fn read_bytes(path: &Path, role: ImageRole) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| {
        InputError::Read {
            role,
            path: path.to_path_buf(),
            source,
        }
        .into()
    })
}

/// 按 `fit` 的要求让秘密图像匹配载体尺寸 `(width, height)`。
pub fn fit_secret(secret: RgbImage, (width, height): (u32, u32), fit: SecretFit) -> RgbImage {
    if secret.dimensions() == (width, height) || fit == SecretFit::Exact {
        return secret;
    }

    debug!(
        "resizing secret image from {}x{} to {width}x{height}",
        secret.width(),
        secret.height()
    );
    imageops::resize(&secret, width, height, RESIZE_FILTER)
}

/// 根据文件扩展名推断输出格式。
///
/// 扩展名可以识别但对应的编码器未编译进来 (如 gif, ico) 时，
/// 返回 [`InputError::UnwritableOutput`]。
pub fn output_format(path: &Path) -> Result<ImageFormat> {
    let format = ImageFormat::from_path(path).map_err(|source| InputError::UnsupportedOutput {
        path: path.to_path_buf(),
        source,
    })?;

    if !format.writing_enabled() {
        return Err(InputError::UnwritableOutput {
            path: path.to_path_buf(),
            format,
        }
        .into());
    }
    Ok(format)
}

/// 有损格式会在压缩时改写低位，无法保存隐写结果。
/// 在已启用的编码器中只有 JPEG 是有损的。
pub fn is_lossy(format: ImageFormat) -> bool {
    format == ImageFormat::Jpeg
}

/// 为 `input` 生成默认输出路径：`<目录>/<prefix><文件名>.<扩展名>`。
///
/// 输入格式为可写出的无损格式时沿用其扩展名，否则使用 PNG。
pub fn default_output(input: &Path, prefix: &str) -> PathBuf {
    let stem = input.file_stem().unwrap_or(OsStr::new("image"));
    let keep_extension = ImageFormat::from_path(input)
        .is_ok_and(|format| format.writing_enabled() && !is_lossy(format));
    let extension = match input.extension() {
        Some(ext) if keep_extension => ext,
        _ => OsStr::new(FALLBACK_EXTENSION),
    };

    let mut name = OsString::from(prefix);
    name.push(stem);
    name.push(".");
    name.push(extension);
    input.with_file_name(name)
}

/// 检查输出路径是否可用。文件已存在且未指定 `force` 时拒绝覆盖。
pub fn ensure_output_available(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(InputError::OutputExists(path.to_path_buf()).into());
    }
    Ok(())
}

/// 将图像编码为指定格式的字节。
pub fn encode(image: &RgbImage, format: ImageFormat) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, format)
        .map_err(|source| CodecError::Encode { format, source })?;
    Ok(buffer.into_inner())
}

/// 以 `path` 扩展名对应的格式保存图像，返回写入的字节数。
///
/// 先在内存中完成编码，编码失败时不会留下不完整的文件。
pub fn save(image: &RgbImage, path: &Path) -> Result<usize> {
    let format = output_format(path)?;
    let bytes = encode(image, format)?;

    fs::write(path, &bytes).map_err(|source| CodecError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("wrote {} bytes as {format:?} to {}", bytes.len(), path.display());
    Ok(bytes.len())
}
