//! # bitplane_hide 库
//!
//! 本库包含位平面隐写工具的核心逻辑：把一幅图像隐藏到另一幅图像每个通道的低位中，
//! 并在之后将其近似还原。

// 声明库包含的所有模块。

pub mod bitplane;
pub mod cli;
pub mod constants;
pub mod error;
pub mod handler;
pub mod imaging;
