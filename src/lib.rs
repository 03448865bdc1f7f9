//! # parity_hide 库
//!
//! 本库包含奇偶校验 LSB 隐写工具的核心逻辑。

// 声明库包含的所有模块。

pub mod bits;
pub mod capacity;
pub mod cli;
pub mod constants;
pub mod embed;
pub mod error;
pub mod handler;
pub mod report;
pub mod steganography;
pub mod window;

pub use embed::{EmbedConfig, EmbedReport, embed_message};
pub use error::StegoError;
