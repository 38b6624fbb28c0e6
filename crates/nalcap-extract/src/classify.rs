//! 抓包行分类.
//!
//! 先把原始行规整为纯十六进制串, 再用固定偏移处的字节做一次廉价预筛,
//! 把明显不携带新 NAL 起始的报文挡在标记搜索之前.

/// 启用偏移预筛所需的最小十六进制长度 (12 字节)
pub const OFFSET_FILTER_MIN_LEN: usize = 24;

/// 第 11 字节在十六进制串中的字符下标
const OFFSET_FILTER_START: usize = 20;

/// 预筛要求的字节值
const OFFSET_FILTER_VALUE: [char; 2] = ['0', '1'];

/// 单行分类结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// 空行 (去除空白后为空), 不计入跳过统计
    Blank,
    /// 第 11、12 字节都不是 0x01, 计入跳过统计
    FilteredByOffset,
    /// 通过预筛, 携带规整后的十六进制串
    Candidate(String),
}

/// 去除行内所有空白字符
pub fn normalize_line(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

/// 对一行原始文本分类
pub fn classify_line(raw: &str) -> LineClass {
    let hex = normalize_line(raw);
    if hex.is_empty() {
        return LineClass::Blank;
    }
    if !passes_offset_filter(&hex) {
        return LineClass::FilteredByOffset;
    }
    LineClass::Candidate(hex)
}

/// 偏移预筛
///
/// 长度与下标都按字符计. 不足 24 个字符的行不做判断, 直接放行交给标记搜索.
pub fn passes_offset_filter(hex: &str) -> bool {
    if hex.chars().count() < OFFSET_FILTER_MIN_LEN {
        return true;
    }
    let window: Vec<char> = hex.chars().skip(OFFSET_FILTER_START).take(4).collect();
    window.chunks(2).any(|pair| pair == OFFSET_FILTER_VALUE)
}
