//! # nalcap-core
//!
//! nalcap 核心库, 提供错误类型与 H.264 NAL 起始标记表.
//!
//! 不依赖任何 I/O, 供提取流水线与命令行工具共用.

pub mod error;
pub mod marker;

// 重导出常用类型
pub use error::{NalcapError, NalcapResult};
pub use marker::{MARKER_HEX_LEN, START_MARKERS, StartMarker};
