use super::layout;

/// Byte access over a validated 16-byte record.
///
/// The record length is checked before a reader is constructed, so reads are
/// infallible; offsets and ranges come from `layout` and stay inside the
/// record by construction. Sentinel handling (all bits set means "no
/// reading") lives here so the parser never compares raw bytes itself.
pub struct PayloadReader<'a> {
    record: &'a [u8; layout::RECORD_LEN],
}

impl<'a> PayloadReader<'a> {
    pub fn new(record: &'a [u8; layout::RECORD_LEN]) -> Self {
        Self { record }
    }

    pub fn read_u8(&self, offset: usize) -> u8 {
        self.record[offset]
    }

    pub fn read_u16_be(&self, range: std::ops::Range<usize>) -> u16 {
        let bytes = &self.record[range];
        u16::from_be_bytes([bytes[0], bytes[1]])
    }

    pub fn read_u32_be(&self, range: std::ops::Range<usize>) -> u32 {
        let bytes = &self.record[range];
        u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    pub fn read_optional_u8(&self, offset: usize) -> Option<u8> {
        let value = self.read_u8(offset);
        if value == layout::SENTINEL_U8 {
            None
        } else {
            Some(value)
        }
    }

    pub fn read_optional_u16_be(&self, range: std::ops::Range<usize>) -> Option<u16> {
        let value = self.read_u16_be(range);
        if value == layout::SENTINEL_U16 {
            None
        } else {
            Some(value)
        }
    }

    pub fn read_optional_u32_be(&self, range: std::ops::Range<usize>) -> Option<u32> {
        let value = self.read_u32_be(range);
        if value == layout::SENTINEL_U32 {
            None
        } else {
            Some(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PayloadReader;
    use crate::payload::layout;

    #[test]
    fn read_multibyte_big_endian() {
        let mut record = [0u8; layout::RECORD_LEN];
        record[3] = 0x01;
        record[4] = 0x02;
        record[10] = 0xDE;
        record[13] = 0xAD;
        let reader = PayloadReader::new(&record);
        assert_eq!(reader.read_u16_be(3..5), 0x0102);
        assert_eq!(reader.read_u32_be(10..14), 0xDE00_00AD);
    }

    #[test]
    fn optional_reads_map_sentinel_to_none() {
        let mut record = [0u8; layout::RECORD_LEN];
        record[1] = 0xFF;
        record[6] = 0xFF;
        record[7] = 0xFF;
        let reader = PayloadReader::new(&record);
        assert_eq!(reader.read_optional_u8(1), None);
        assert_eq!(reader.read_optional_u16_be(6..8), None);
        assert_eq!(reader.read_optional_u32_be(10..14), Some(0));
    }

    #[test]
    fn optional_u8_keeps_non_sentinel_values() {
        let mut record = [0u8; layout::RECORD_LEN];
        record[1] = 0xFE;
        let reader = PayloadReader::new(&record);
        assert_eq!(reader.read_optional_u8(1), Some(0xFE));
    }
}
