//! 输出码流累积器.
//!
//! 按输入顺序把数据块原样追加到输出, 不重排、不去重、不加分隔.

use std::io::Write;

use nalcap_core::NalcapResult;

/// 只追加的码流写入器
pub struct StreamAccumulator<W: Write> {
    sink: W,
    bytes_written: u64,
}

impl<W: Write> StreamAccumulator<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            bytes_written: 0,
        }
    }

    /// 追加一个数据块, 空块为合法的空操作
    pub fn append(&mut self, block: &[u8]) -> NalcapResult<()> {
        if block.is_empty() {
            return Ok(());
        }
        self.sink.write_all(block)?;
        self.bytes_written += block.len() as u64;
        Ok(())
    }

    /// 已写入的字节数
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// 刷新并交回底层输出
    pub fn finish(mut self) -> NalcapResult<W> {
        self.sink.flush()?;
        Ok(self.sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_order_and_length() {
        let mut acc = StreamAccumulator::new(Vec::new());
        let blocks: [&[u8]; 3] = [
            &[0x00, 0x00, 0x00, 0x01, 0x67],
            &[],
            &[0x00, 0x00, 0x00, 0x01, 0x68, 0xCE],
        ];
        for block in blocks {
            assert!(acc.append(block).is_ok());
        }
        assert_eq!(acc.bytes_written(), 11);

        let out = acc.finish().expect("刷新失败");
        assert_eq!(
            out,
            vec![0x00, 0x00, 0x00, 0x01, 0x67, 0x00, 0x00, 0x00, 0x01, 0x68, 0xCE]
        );
    }

    #[test]
    fn test_duplicate_blocks_are_kept() {
        let mut acc = StreamAccumulator::new(Vec::new());
        assert!(acc.append(&[0xAA]).is_ok());
        assert!(acc.append(&[0xAA]).is_ok());
        assert_eq!(acc.finish().expect("刷新失败"), vec![0xAA, 0xAA]);
    }
}
