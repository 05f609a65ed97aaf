use image::imageops::FilterType;

/// 默认用于承载秘密图像的低位数。
pub const DEFAULT_BIT_DEPTH: u8 = 4;

/// 允许的最小低位数。
pub const MIN_BIT_DEPTH: u8 = 3;

/// 允许的最大低位数。
/// 超过 4 位后载体图像的失真会变得肉眼可见。
pub const MAX_BIT_DEPTH: u8 = 4;

/// 未指定输出路径时，隐写结果文件名的前缀。
pub const ENCODED_PREFIX: &str = "encoded_";

/// 未指定输出路径时，提取结果文件名的前缀。
pub const DECODED_PREFIX: &str = "decoded_";

/// 输入格式为有损格式 (或无法写出) 时，默认输出使用的扩展名。
pub const FALLBACK_EXTENSION: &str = "png";

/// 将秘密图像缩放到载体尺寸时使用的插值滤波器 (双线性)。
pub const RESIZE_FILTER: FilterType = FilterType::Triangle;
