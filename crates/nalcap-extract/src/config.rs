//! 提取运行配置.
//!
//! 可从 JSON 文件加载, 缺省字段取默认值. 相对路径相对于 `base_dir` 解析.

use std::path::{Path, PathBuf};

use nalcap_core::{NalcapError, NalcapResult};
use serde::{Deserialize, Serialize};

/// 默认输入文件名
pub const DEFAULT_INPUT_FILE: &str = "tshark_output.txt";

/// 默认输出文件名
pub const DEFAULT_OUTPUT_FILE: &str = "output.h264";

/// 默认进度间隔 (行)
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExtractConfig {
    #[serde(default = "default_input_file")]
    pub input_file: PathBuf,
    #[serde(default = "default_output_file")]
    pub output_file: PathBuf,
    /// 每处理多少行输出一次进度, 0 表示关闭
    #[serde(default = "default_progress_interval")]
    pub progress_interval: u64,
}

fn default_input_file() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT_FILE)
}

fn default_output_file() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_FILE)
}

fn default_progress_interval() -> u64 {
    DEFAULT_PROGRESS_INTERVAL
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            input_file: default_input_file(),
            output_file: default_output_file(),
            progress_interval: default_progress_interval(),
        }
    }
}

impl ExtractConfig {
    /// 从 JSON 文本解析
    pub fn from_json_str(text: &str) -> NalcapResult<Self> {
        serde_json::from_str(text).map_err(|err| NalcapError::Config(err.to_string()))
    }

    /// 从 JSON 文件加载
    pub fn from_json_file(path: &Path) -> NalcapResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|err| {
            NalcapError::Config(format!("读取配置文件失败, path={}: {err}", path.display()))
        })?;
        Self::from_json_str(&text)
    }

    /// 输入文件的绝对位置
    pub fn input_path(&self, base_dir: &Path) -> PathBuf {
        resolve(base_dir, &self.input_file)
    }

    /// 输出文件的绝对位置
    pub fn output_path(&self, base_dir: &Path) -> PathBuf {
        resolve(base_dir, &self.output_file)
    }
}

fn resolve(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}
