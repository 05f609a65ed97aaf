//! # 命令处理逻辑模块
//!
//! 包含处理 `embed` 和 `extract` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用核心位平面算法以及向用户报告结果。
//! 每个处理函数都把实际写出的路径返回给调用方，而不是保存在全局状态中。

use crate::bitplane::{self, BitDepth};
use crate::cli::{EmbedArgs, ExtractArgs};
use crate::constants::{DECODED_PREFIX, ENCODED_PREFIX};
use crate::error::{Error as StegoError, ErrorKind, ImageRole, InputError, Result as CodecResult};
use crate::imaging::{self, SecretFit};
use anyhow::{Context, Result};
use colored::Colorize;
use image::RgbImage;
use log::info;
use std::path::PathBuf;

/// 在内存中完成嵌入：解码两幅图像，按需调整秘密图像尺寸，然后执行位平面嵌入。
pub fn embed_encoded(
    carrier: &[u8],
    secret: &[u8],
    bits: BitDepth,
    fit: SecretFit,
) -> CodecResult<RgbImage> {
    let carrier = imaging::decode_rgb(carrier, ImageRole::Carrier)?;
    let secret = imaging::decode_rgb(secret, ImageRole::Secret)?;
    let secret = imaging::fit_secret(secret, carrier.dimensions(), fit);
    bitplane::embed(&carrier, &secret, bits)
}

/// 在内存中完成提取。
pub fn extract_encoded(stego: &[u8], bits: BitDepth) -> CodecResult<RgbImage> {
    let stego = imaging::decode_rgb(stego, ImageRole::Stego)?;
    bitplane::extract(&stego, bits)
}

/// 输入错误对应的进程退出码。
pub const EXIT_INPUT_ERROR: u8 = 2;

/// 其余错误对应的进程退出码。
pub const EXIT_FAILURE: u8 = 1;

/// 根据错误链中携带的类型化错误决定进程退出码。
///
/// 输入错误返回 [`EXIT_INPUT_ERROR`]，编解码错误以及不带类型化错误的失败返回 [`EXIT_FAILURE`]。
pub fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<StegoError>().map(StegoError::kind) {
        Some(ErrorKind::Input) => EXIT_INPUT_ERROR,
        Some(ErrorKind::Codec) | None => EXIT_FAILURE,
    }
}

/// 处理 'Embed' 命令的执行逻辑。
///
/// 负责确定输出路径、读取载体和秘密图像、调用嵌入核心函数，
/// 最后将结果写入目标图像文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径及位数的 `EmbedArgs` 结构体。
///
/// # Returns
///
/// 实际写出的隐写图像路径。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 位数不是 3 或 4。
/// * 目标文件已存在且未指定 `--force`，或目标格式为有损格式。
/// * 无法读取或解码输入图像。
/// * 指定了 `--no-resize` 而两幅图像尺寸不同。
/// * 无法编码或写入目标图像文件。
pub fn handle_embed(args: EmbedArgs) -> Result<PathBuf> {
    let bits = BitDepth::try_from(args.bits).map_err(StegoError::from)?;
    let dest = args
        .dest
        .unwrap_or_else(|| imaging::default_output(&args.carrier, ENCODED_PREFIX));

    let format = imaging::output_format(&dest)?;
    if imaging::is_lossy(format) {
        return Err(StegoError::from(InputError::LossyOutput {
            path: dest,
            format,
        })
        .into());
    }
    imaging::ensure_output_available(&dest, args.force)?;

    let carrier = imaging::read_bytes(&args.carrier, ImageRole::Carrier)?;
    let secret = imaging::read_bytes(&args.secret, ImageRole::Secret)?;

    let fit = if args.no_resize {
        SecretFit::Exact
    } else {
        SecretFit::Resize
    };

    info!(
        "embedding {} into {} using {} low-order bits",
        args.secret.display(),
        args.carrier.display(),
        bits.get()
    );
    let stego = embed_encoded(&carrier, &secret, bits, fit)?;

    imaging::save(&stego, &dest).with_context(|| {
        format!(
            "Unable to save the stego image: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The secret image has been successfully embedded and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(dest)
}

/// 处理 'Extract' 命令的执行逻辑。
///
/// 负责读取隐写图像、调用提取核心函数，并将还原出的秘密图像写入目标文件。
/// 还原结果只保留每个通道的高位，是原秘密图像的近似。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径及位数的 `ExtractArgs` 结构体。
///
/// # Returns
///
/// 实际写出的图像路径。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 位数不是 3 或 4。
/// * 目标文件已存在且未指定 `--force`。
/// * 无法读取或解码隐写图像。
/// * 无法编码或写入目标图像文件。
pub fn handle_extract(args: ExtractArgs) -> Result<PathBuf> {
    let bits = BitDepth::try_from(args.bits).map_err(StegoError::from)?;
    let dest = args
        .dest
        .unwrap_or_else(|| imaging::default_output(&args.image, DECODED_PREFIX));

    imaging::output_format(&dest)?;
    imaging::ensure_output_available(&dest, args.force)?;

    let stego = imaging::read_bytes(&args.image, ImageRole::Stego)?;

    info!(
        "extracting secret from {} using {} low-order bits",
        args.image.display(),
        bits.get()
    );
    let secret = extract_encoded(&stego, bits)?;

    imaging::save(&secret, &dest).with_context(|| {
        format!(
            "Unable to save the recovered image: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The secret image has been successfully extracted and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(dest)
}
