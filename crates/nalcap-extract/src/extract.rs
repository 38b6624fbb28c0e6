//! 单行 NAL 数据提取.
//!
//! 在规整后的十六进制串中搜索所有起始标记, 取最靠前的一个作为切分点,
//! 解码其后的全部数据并去除尾部 0x00 填充.

use nalcap_core::{NalcapError, NalcapResult, START_MARKERS, StartMarker};

/// 提取出的数据块
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedBlock {
    /// 选中的起始标记
    pub marker: StartMarker,
    /// 标记在十六进制串中的字符偏移
    pub offset: usize,
    /// 从起始码开始的 NAL 数据, 已去除尾部填充
    pub data: Vec<u8>,
}

/// 查找最靠前的起始标记
///
/// 每种标记只取其第一次出现的位置, 再在所有命中中取最小偏移.
/// 选择只看位置, 与标记表顺序无关.
pub fn find_earliest_marker(hex: &str) -> Option<(usize, StartMarker)> {
    START_MARKERS
        .iter()
        .filter_map(|&marker| hex.find(marker.hex()).map(|idx| (idx, marker)))
        .min_by_key(|&(idx, _)| idx)
}

/// 去除尾部 0x00 填充, 中间的 0 字节保持不变
pub fn strip_trailing_padding(data: &mut Vec<u8>) {
    let end = data.iter().rposition(|&b| b != 0x00).map_or(0, |pos| pos + 1);
    data.truncate(end);
}

/// 解码从标记偏移开始的十六进制切片
///
/// 按字符计长度, 奇数时丢弃最后一个字符. `line` 为 1 起始的行号, 仅用于错误信息.
pub fn decode_from(hex: &str, offset: usize, line: usize) -> NalcapResult<Vec<u8>> {
    let mut digits = &hex[offset..];
    if digits.chars().count() % 2 != 0 {
        let end = digits.char_indices().last().map_or(0, |(idx, _)| idx);
        digits = &digits[..end];
    }
    hex::decode(digits).map_err(|err| NalcapError::InvalidHex {
        line,
        reason: err.to_string(),
    })
}

/// 从一行规整后的十六进制串中提取数据块
///
/// - `Ok(None)`: 未找到任何起始标记
/// - `Ok(Some(block))`: 提取成功, `block.data` 可能为空
/// - `Err(InvalidHex)`: 标记之后含有非十六进制字符, 整行作废
pub fn extract_block(hex: &str, line: usize) -> NalcapResult<Option<ExtractedBlock>> {
    let Some((offset, marker)) = find_earliest_marker(hex) else {
        return Ok(None);
    };

    let mut data = decode_from(hex, offset, line)?;
    strip_trailing_padding(&mut data);

    Ok(Some(ExtractedBlock {
        marker,
        offset,
        data,
    }))
}
