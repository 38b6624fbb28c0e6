//! 统一错误类型定义.
//!
//! 所有 nalcap crate 共用的错误类型, 支持跨模块传播.

use std::path::PathBuf;

use thiserror::Error;

/// nalcap 统一错误类型
#[derive(Debug, Error)]
pub enum NalcapError {
    /// 输入文件不存在, 整个运行终止且不产生输出
    #[error("输入文件不存在: {}", path.display())]
    MissingInput { path: PathBuf },

    /// 某一行在起始标记之后含有非十六进制字符
    #[error("第 {line} 行包含无效的十六进制字符: {reason}")]
    InvalidHex { line: usize, reason: String },

    /// 配置文件错误
    #[error("配置错误: {0}")]
    Config(String),

    /// I/O 错误
    #[error("I/O 错误: {0}")]
    Io(#[from] std::io::Error),
}

impl NalcapError {
    /// 是否为单行可恢复错误 (不会中断整个运行)
    pub fn is_line_local(&self) -> bool {
        matches!(self, Self::InvalidHex { .. })
    }
}

/// nalcap 统一 Result 类型
pub type NalcapResult<T> = Result<T, NalcapError>;
