//! # nalcap-extract
//!
//! 把 tshark 风格的十六进制抓包文本 (每行一个报文) 转换为 H.264 Annex B 裸码流.
//!
//! 处理链路:
//! - [`classify`]: 去除空白并按固定偏移预筛
//! - [`extract`]: 定位最靠前的 NAL 起始标记, 解码并去除尾部填充
//! - [`accumulator`]: 按输入顺序追加到输出
//! - [`pipeline`]: 逐行驱动并统计
//!
//! ```rust,no_run
//! use nalcap_extract::Pipeline;
//!
//! let mut pipeline = Pipeline::new(Vec::new(), 0);
//! pipeline.process_line("00 00 00 01 67 42 00 1e 00 00").unwrap();
//! let (stats, stream) = pipeline.finish().unwrap();
//! assert_eq!(stats.bytes_written as usize, stream.len());
//! ```

pub mod accumulator;
pub mod classify;
pub mod config;
pub mod extract;
pub mod pipeline;
pub mod stats;

pub use accumulator::StreamAccumulator;
pub use classify::{LineClass, classify_line, normalize_line};
pub use config::ExtractConfig;
pub use extract::{ExtractedBlock, extract_block, find_earliest_marker};
pub use pipeline::{LineOutcome, Pipeline, RunReport, run_file, run_with_config};
pub use stats::{MarkerCounts, RunStats};
