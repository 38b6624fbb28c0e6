//! # nalcap
//!
//! 从抓包十六进制文本中提取 H.264 Annex B 裸码流.
//!
//! 输入为 tshark 等工具导出的文本, 每行一个报文的完整十六进制字节.
//! 对每一行:
//! - 去除空白, 按第 11/12 字节做预筛
//! - 搜索 SPS/PPS/I 帧/P 帧起始标记, 取最靠前者
//! - 解码标记之后的数据, 去除尾部 0x00 填充
//! - 按输入顺序拼接到输出文件
//!
//! # 快速开始
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! let report = nalcap::extract::run_file(
//!     Path::new("tshark_output.txt"),
//!     Path::new("output.h264"),
//!     10_000,
//! );
//! match report {
//!     Ok(report) => println!("写入 {} 字节", report.stats.bytes_written),
//!     Err(e) => eprintln!("错误: {e}"),
//! }
//! ```
//!
//! # Crate 结构
//!
//! | Crate | 功能 |
//! |-------|------|
//! | `nalcap-core` | 错误类型与起始标记表 |
//! | `nalcap-extract` | 分类、提取、累积与流水线驱动 |

/// 核心类型 (错误、起始标记表)
pub use nalcap_core as core;

/// 提取流水线
pub use nalcap_extract as extract;

/// 获取 nalcap 版本号
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
