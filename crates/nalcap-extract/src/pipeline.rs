//! 提取流水线驱动.
//!
//! 逐行执行 分类 → 提取 → 累积, 并维护运行统计.
//!
//! 生命周期:
//! - 打开阶段: 输入文件不存在时直接返回 [`NalcapError::MissingInput`], 不创建输出文件
//! - 运行阶段: [`Pipeline::process_line`] 逐行处理, 单行错误只计入统计
//! - 结束阶段: [`Pipeline::finish`] 刷新输出并交回统计

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, trace, warn};
use nalcap_core::{NalcapError, NalcapResult, StartMarker};
use serde::Serialize;

use crate::accumulator::StreamAccumulator;
use crate::classify::{LineClass, classify_line};
use crate::config::ExtractConfig;
use crate::extract::extract_block;
use crate::stats::RunStats;

/// 单行处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// 空行
    Blank,
    /// 偏移预筛未通过
    FilteredByOffset,
    /// 未找到起始标记
    NoMarker,
    /// 十六进制解码失败
    DecodeError,
    /// 写出数据块
    Written { marker: StartMarker, bytes: usize },
}

impl LineOutcome {
    /// 是否计入跳过统计
    pub fn is_skip(&self) -> bool {
        matches!(
            self,
            Self::FilteredByOffset | Self::NoMarker | Self::DecodeError
        )
    }
}

/// 逐行提取流水线
pub struct Pipeline<W: Write> {
    accumulator: StreamAccumulator<W>,
    stats: RunStats,
    progress_interval: u64,
    line_number: usize,
}

impl<W: Write> Pipeline<W> {
    /// 创建流水线, `progress_interval` 为 0 时不输出进度
    pub fn new(sink: W, progress_interval: u64) -> Self {
        Self {
            accumulator: StreamAccumulator::new(sink),
            stats: RunStats::default(),
            progress_interval,
            line_number: 0,
        }
    }

    /// 处理一行原始文本
    ///
    /// 只有输出写入失败会返回错误, 其余情况均体现在 [`LineOutcome`] 与统计中.
    pub fn process_line(&mut self, raw: &str) -> NalcapResult<LineOutcome> {
        self.line_number += 1;
        self.stats.record_line();
        let line = self.line_number;

        if self.progress_interval > 0 && (line as u64) % self.progress_interval == 0 {
            info!("--- 处理中: 第 {} 行 ---", line);
        }

        let hex = match classify_line(raw) {
            LineClass::Blank => {
                self.stats.record_blank();
                return Ok(LineOutcome::Blank);
            }
            LineClass::FilteredByOffset => {
                trace!("第 {} 行未通过偏移预筛", line);
                self.stats.record_filtered_by_offset();
                return Ok(LineOutcome::FilteredByOffset);
            }
            LineClass::Candidate(hex) => hex,
        };

        let block = match extract_block(&hex, line) {
            Ok(Some(block)) => block,
            Ok(None) => {
                trace!("第 {} 行未找到起始标记", line);
                self.stats.record_no_marker();
                return Ok(LineOutcome::NoMarker);
            }
            Err(err) if err.is_line_local() => {
                warn!("{}, 已跳过", err);
                self.stats.record_decode_error();
                return Ok(LineOutcome::DecodeError);
            }
            Err(err) => return Err(err),
        };

        self.accumulator.append(&block.data)?;
        self.stats.bytes_written = self.accumulator.bytes_written();
        self.stats.record_block(block.marker);
        debug!(
            "第 {} 行: {} @{}, {} 字节",
            line,
            block.marker,
            block.offset,
            block.data.len()
        );

        Ok(LineOutcome::Written {
            marker: block.marker,
            bytes: block.data.len(),
        })
    }

    /// 处理整个输入
    ///
    /// 行结束符可以是 `\n`, `\r\n` 或单独的 `\r`.
    /// 按字节读取每一行, 非 UTF-8 内容以替换字符保留, 交由解码阶段报错.
    pub fn run<R: BufRead>(&mut self, mut reader: R) -> NalcapResult<()> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            for line in split_lines(&buf) {
                let text = String::from_utf8_lossy(line);
                self.process_line(&text)?;
            }
        }
        Ok(())
    }

    /// 当前统计
    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// 刷新输出, 返回最终统计与底层输出
    pub fn finish(self) -> NalcapResult<(RunStats, W)> {
        let Self {
            accumulator, stats, ..
        } = self;
        let sink = accumulator.finish()?;
        Ok((stats, sink))
    }
}

/// 把一段以 `\n` 结尾 (或位于文件末尾) 的数据切分为行, 不含行结束符
///
/// `\r\n` 视为一个结束符, 其余单独的 `\r` 也结束一行.
fn split_lines(chunk: &[u8]) -> Vec<&[u8]> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < chunk.len() {
        match chunk[i] {
            b'\r' => {
                lines.push(&chunk[start..i]);
                i += if chunk.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            b'\n' => {
                lines.push(&chunk[start..i]);
                i += 1;
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < chunk.len() {
        lines.push(&chunk[start..]);
    }
    lines
}

/// 一次文件到文件运行的结果
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub input: PathBuf,
    pub output: PathBuf,
    #[serde(flatten)]
    pub stats: RunStats,
}

/// 从输入文件提取到输出文件
///
/// 先打开输入, 成功后才创建输出, 保证输入缺失时不留下输出文件.
pub fn run_file(input: &Path, output: &Path, progress_interval: u64) -> NalcapResult<RunReport> {
    let input_file = match File::open(input) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(NalcapError::MissingInput {
                path: input.to_path_buf(),
            });
        }
        Err(err) => return Err(err.into()),
    };
    let output_file = File::create(output)?;

    info!("开始提取: {} -> {}", input.display(), output.display());

    let mut pipeline = Pipeline::new(BufWriter::new(output_file), progress_interval);
    pipeline.run(BufReader::new(input_file))?;
    let (stats, _) = pipeline.finish()?;

    info!(
        "提取完成: {} 行, {} 字节, 跳过 {} 个报文",
        stats.lines_processed, stats.bytes_written, stats.packets_skipped
    );

    Ok(RunReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        stats,
    })
}

/// 按配置运行, 相对路径相对于 `base_dir`
pub fn run_with_config(config: &ExtractConfig, base_dir: &Path) -> NalcapResult<RunReport> {
    run_file(
        &config.input_path(base_dir),
        &config.output_path(base_dir),
        config.progress_interval,
    )
}
