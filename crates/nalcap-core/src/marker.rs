//! H.264 NAL 起始标记表.
//!
//! 抓包文本中每个候选 NAL 单元都以 4 字节起始码 `00 00 00 01` 开头,
//! 后跟 1 字节 NAL 头部. 这里只关心四种头部:
//!
//! ```text
//! ┌──────────────┬────────┬──────────────────────┐
//! │ 起始码        │ 头部   │ 含义                  │
//! ├──────────────┼────────┼──────────────────────┤
//! │ 00 00 00 01  │ 0x67   │ SPS                  │
//! │ 00 00 00 01  │ 0x68   │ PPS                  │
//! │ 00 00 00 01  │ 0x65   │ IDR 切片 (I 帧)       │
//! │ 00 00 00 01  │ 0x61   │ 非 IDR 切片 (P 帧)    │
//! └──────────────┴────────┴──────────────────────┘
//! ```
//!
//! 标记以十六进制文本形式匹配, 表顺序不影响选择结果.

/// 起始标记的十六进制文本长度 (5 字节)
pub const MARKER_HEX_LEN: usize = 10;

/// NAL 起始标记类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StartMarker {
    /// 序列参数集 (SPS)
    Sps,
    /// 图像参数集 (PPS)
    Pps,
    /// IDR 图像切片 (I 帧)
    IFrame,
    /// 非 IDR 图像切片 (P 帧)
    PFrame,
}

/// 标记表, 固定顺序: SPS, PPS, I 帧, P 帧
pub const START_MARKERS: [StartMarker; 4] = [
    StartMarker::Sps,
    StartMarker::Pps,
    StartMarker::IFrame,
    StartMarker::PFrame,
];

impl StartMarker {
    /// 十六进制文本形式 (起始码 + NAL 头部)
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Sps => "0000000167",
            Self::Pps => "0000000168",
            Self::IFrame => "0000000165",
            Self::PFrame => "0000000161",
        }
    }

    /// 起始码之后的 NAL 头部字节
    pub const fn nal_header(self) -> u8 {
        match self {
            Self::Sps => 0x67,
            Self::Pps => 0x68,
            Self::IFrame => 0x65,
            Self::PFrame => 0x61,
        }
    }
}

impl std::fmt::Display for StartMarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sps => write!(f, "SPS"),
            Self::Pps => write!(f, "PPS"),
            Self::IFrame => write!(f, "I-Frame"),
            Self::PFrame => write!(f, "P-Frame"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_hex_matches_header() {
        for marker in START_MARKERS {
            let text = format!("00000001{:02x}", marker.nal_header());
            assert_eq!(text, marker.hex(), "{marker} 文本与头部字节不一致");
            assert_eq!(marker.hex().len(), MARKER_HEX_LEN);
        }
    }

    #[test]
    fn test_marker_table_order() {
        assert_eq!(START_MARKERS[0], StartMarker::Sps);
        assert_eq!(START_MARKERS[3], StartMarker::PFrame);
    }

    #[test]
    fn test_nal_header_type_bits() {
        // 低 5 位为 nal_unit_type: SPS=7, PPS=8, IDR=5, 非 IDR=1
        assert_eq!(StartMarker::Sps.nal_header() & 0x1F, 7);
        assert_eq!(StartMarker::Pps.nal_header() & 0x1F, 8);
        assert_eq!(StartMarker::IFrame.nal_header() & 0x1F, 5);
        assert_eq!(StartMarker::PFrame.nal_header() & 0x1F, 1);
    }
}
