//! 运行统计.

use nalcap_core::StartMarker;
use serde::Serialize;

/// 按起始标记类型统计写出的数据块数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MarkerCounts {
    pub sps: u64,
    pub pps: u64,
    pub i_frame: u64,
    pub p_frame: u64,
}

impl MarkerCounts {
    fn bump(&mut self, marker: StartMarker) {
        match marker {
            StartMarker::Sps => self.sps += 1,
            StartMarker::Pps => self.pps += 1,
            StartMarker::IFrame => self.i_frame += 1,
            StartMarker::PFrame => self.p_frame += 1,
        }
    }

    /// 数据块总数
    pub fn total(&self) -> u64 {
        self.sps + self.pps + self.i_frame + self.p_frame
    }
}

/// 一次提取运行的统计信息
///
/// `packets_skipped` 只统计预筛、无标记与解码失败三类, 空行单独记在 `blank_lines`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// 已处理行数 (含空行)
    pub lines_processed: u64,
    /// 写入输出流的字节数
    pub bytes_written: u64,
    /// 跳过的报文数
    pub packets_skipped: u64,
    /// 空行数
    pub blank_lines: u64,
    /// 偏移预筛未通过
    pub filtered_by_offset: u64,
    /// 未找到起始标记
    pub no_marker: u64,
    /// 十六进制解码失败
    pub decode_errors: u64,
    /// 各类起始标记命中次数
    pub blocks: MarkerCounts,
}

impl RunStats {
    pub fn record_line(&mut self) {
        self.lines_processed += 1;
    }

    pub fn record_blank(&mut self) {
        self.blank_lines += 1;
    }

    pub fn record_filtered_by_offset(&mut self) {
        self.filtered_by_offset += 1;
        self.packets_skipped += 1;
    }

    pub fn record_no_marker(&mut self) {
        self.no_marker += 1;
        self.packets_skipped += 1;
    }

    pub fn record_decode_error(&mut self) {
        self.decode_errors += 1;
        self.packets_skipped += 1;
    }

    pub fn record_block(&mut self, marker: StartMarker) {
        self.blocks.bump(marker);
    }
}
