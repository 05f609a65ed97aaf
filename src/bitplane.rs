//! # 位平面编解码模块
//!
//! 将秘密图像每个通道的高位写入载体图像对应通道的低位 (`embed`)，
//! 以及从隐写图像的低位中还原秘密图像 (`extract`)。
//!
//! 所有函数都是纯函数：输入只读，输出为新分配的缓冲区。
//!
//! 注意：提取是有损的。只有秘密图像每个通道的高 `bits` 位能被保留，
//! 其余 `8 - bits` 位在嵌入时就已丢弃，提取结果中这些位恒为 0。

use crate::constants::{MAX_BIT_DEPTH, MIN_BIT_DEPTH};
use crate::error::{CodecError, InputError, Result};
use image::RgbImage;

/// 每个通道中用于承载秘密的低位数，只能为 3 或 4。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitDepth(u8);

impl BitDepth {
    pub const THREE: BitDepth = BitDepth(3);
    pub const FOUR: BitDepth = BitDepth(4);

    pub fn get(self) -> u8 {
        self.0
    }

    /// 低 `bits` 位全为 1 的掩码，即秘密数据所占的位。
    pub fn payload_mask(self) -> u8 {
        (1u8 << self.0) - 1
    }

    /// 载体中保留下来的高位掩码。
    pub fn carrier_mask(self) -> u8 {
        0xFF ^ self.payload_mask()
    }

    /// 秘密通道中能够被保留下来的高 `bits` 位。
    pub fn secret_mask(self) -> u8 {
        self.payload_mask() << self.shift()
    }

    /// 秘密通道值需要右移 (或还原时左移) 的位数。
    pub fn shift(self) -> u8 {
        8 - self.0
    }
}

impl Default for BitDepth {
    fn default() -> Self {
        Self::FOUR
    }
}

impl TryFrom<u8> for BitDepth {
    type Error = InputError;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        if (MIN_BIT_DEPTH..=MAX_BIT_DEPTH).contains(&value) {
            Ok(BitDepth(value))
        } else {
            Err(InputError::UnsupportedBitDepth(value))
        }
    }
}

/// 将秘密通道值 `secret` 的高 `bits` 位写入载体通道值 `carrier` 的低位。
#[inline]
pub fn embed_channel(carrier: u8, secret: u8, bits: BitDepth) -> u8 {
    (carrier & bits.carrier_mask()) | (secret >> bits.shift())
}

/// 取出隐写通道值的低 `bits` 位，并将其移回高位。
#[inline]
pub fn extract_channel(stego: u8, bits: BitDepth) -> u8 {
    (stego & bits.payload_mask()) << bits.shift()
}

/// 逐字节地对两段通道数据执行嵌入。
///
/// # Errors
///
/// 两段数据长度不一致时返回 [`InputError::LengthMismatch`]，不会截断任何一方。
pub fn embed_channels(carrier: &[u8], secret: &[u8], bits: BitDepth) -> Result<Vec<u8>> {
    if carrier.len() != secret.len() {
        return Err(InputError::LengthMismatch {
            carrier: carrier.len(),
            secret: secret.len(),
        }
        .into());
    }

    Ok(carrier
        .iter()
        .zip(secret)
        .map(|(&c, &s)| embed_channel(c, s, bits))
        .collect())
}

pub fn extract_channels(stego: &[u8], bits: BitDepth) -> Vec<u8> {
    stego.iter().map(|&v| extract_channel(v, bits)).collect()
}

/// 将 `secret` 隐藏进 `carrier`，返回新的隐写图像。
///
/// 载体每个通道的高 `8 - bits` 位保持不变。
///
/// # Errors
///
/// * 两幅图像尺寸不同时返回 [`InputError::DimensionMismatch`]。
/// * 结果缓冲区与尺寸不匹配时返回 [`CodecError::BufferSize`]。
pub fn embed(carrier: &RgbImage, secret: &RgbImage, bits: BitDepth) -> Result<RgbImage> {
    if carrier.dimensions() != secret.dimensions() {
        return Err(InputError::DimensionMismatch {
            carrier: carrier.dimensions(),
            secret: secret.dimensions(),
        }
        .into());
    }

    let (width, height) = carrier.dimensions();
    let data = embed_channels(carrier.as_raw(), secret.as_raw(), bits)?;
    into_image(width, height, data)
}

/// 从隐写图像中还原秘密图像。
///
/// 结果是原秘密图像的近似：每个通道只有高 `bits` 位是准确的，低位恒为 0。
pub fn extract(stego: &RgbImage, bits: BitDepth) -> Result<RgbImage> {
    let (width, height) = stego.dimensions();
    into_image(width, height, extract_channels(stego.as_raw(), bits))
}

fn into_image(width: u32, height: u32, data: Vec<u8>) -> Result<RgbImage> {
    let actual = data.len();
    RgbImage::from_raw(width, height, data).ok_or_else(|| {
        CodecError::BufferSize {
            width,
            height,
            actual,
        }
        .into()
    })
}
