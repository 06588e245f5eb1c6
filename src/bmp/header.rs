//! On-disk BMP headers, serialized field by field in little-endian order.
//!
//! Offsets below are relative to the start of each header, not the file.

/// `"BM"` read as a little-endian `u16`.
pub const SIGNATURE: u16 = 0x4D42;
pub const FILE_HEADER_SIZE: usize = 14;
pub const INFO_HEADER_SIZE: usize = 40;
/// Both headers, and therefore the offset of the first pixel row.
pub const DATA_OFFSET: u32 = (FILE_HEADER_SIZE + INFO_HEADER_SIZE) as u32;
pub const BITS_PER_PIXEL: u16 = 24;
/// 11811 px/m, roughly 300 DPI.
pub const PIXELS_PER_METER: i32 = 11811;
/// `significant_colors` as written by older versions of the converter.
pub const LEGACY_SIGNIFICANT_COLORS: i32 = 0x100_0000;

/// Padded byte length of one 24-bit row: `width * 3` rounded up to a multiple of 4.
///
/// Never stored in the file; encoder and decoder both derive it from the width.
pub const fn stride(width: u32) -> u64 {
    (width as u64 * 3 + 3) & !3
}

/// BITMAPFILEHEADER.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileHeader {
    pub signature: u16,
    /// Headers plus pixel data.
    pub total_size: u32,
    pub reserved: u32,
    pub data_offset: u32,
}

impl FileHeader {
    pub(crate) fn for_data_size(data_size: u32) -> Self {
        Self {
            signature: SIGNATURE,
            total_size: DATA_OFFSET + data_size,
            reserved: 0,
            data_offset: DATA_OFFSET,
        }
    }

    pub fn to_bytes(&self) -> [u8; FILE_HEADER_SIZE] {
        let mut b = [0u8; FILE_HEADER_SIZE];
        b[0..2].copy_from_slice(&self.signature.to_le_bytes());
        b[2..6].copy_from_slice(&self.total_size.to_le_bytes());
        b[6..10].copy_from_slice(&self.reserved.to_le_bytes());
        b[10..14].copy_from_slice(&self.data_offset.to_le_bytes());
        b
    }

    pub fn from_bytes(b: &[u8; FILE_HEADER_SIZE]) -> Self {
        Self {
            signature: le_u16(b, 0),
            total_size: le_u32(b, 2),
            reserved: le_u32(b, 6),
            data_offset: le_u32(b, 10),
        }
    }
}

/// BITMAPINFOHEADER.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoHeader {
    pub header_size: u32,
    pub width: i32,
    /// Positive means rows are stored bottom-up.
    pub height: i32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    /// `stride(width) * height`.
    pub data_size: u32,
    pub dpi_x: i32,
    pub dpi_y: i32,
    pub used_colors: i32,
    pub significant_colors: i32,
}

impl InfoHeader {
    pub(crate) fn new(width: i32, height: i32, data_size: u32, significant_colors: i32) -> Self {
        Self {
            header_size: INFO_HEADER_SIZE as u32,
            width,
            height,
            planes: 1,
            bits_per_pixel: BITS_PER_PIXEL,
            compression: 0,
            data_size,
            dpi_x: PIXELS_PER_METER,
            dpi_y: PIXELS_PER_METER,
            used_colors: 0,
            significant_colors,
        }
    }

    pub fn to_bytes(&self) -> [u8; INFO_HEADER_SIZE] {
        let mut b = [0u8; INFO_HEADER_SIZE];
        b[0..4].copy_from_slice(&self.header_size.to_le_bytes());
        b[4..8].copy_from_slice(&self.width.to_le_bytes());
        b[8..12].copy_from_slice(&self.height.to_le_bytes());
        b[12..14].copy_from_slice(&self.planes.to_le_bytes());
        b[14..16].copy_from_slice(&self.bits_per_pixel.to_le_bytes());
        b[16..20].copy_from_slice(&self.compression.to_le_bytes());
        b[20..24].copy_from_slice(&self.data_size.to_le_bytes());
        b[24..28].copy_from_slice(&self.dpi_x.to_le_bytes());
        b[28..32].copy_from_slice(&self.dpi_y.to_le_bytes());
        b[32..36].copy_from_slice(&self.used_colors.to_le_bytes());
        b[36..40].copy_from_slice(&self.significant_colors.to_le_bytes());
        b
    }

    pub fn from_bytes(b: &[u8; INFO_HEADER_SIZE]) -> Self {
        Self {
            header_size: le_u32(b, 0),
            width: le_i32(b, 4),
            height: le_i32(b, 8),
            planes: le_u16(b, 12),
            bits_per_pixel: le_u16(b, 14),
            compression: le_u32(b, 16),
            data_size: le_u32(b, 20),
            dpi_x: le_i32(b, 24),
            dpi_y: le_i32(b, 28),
            used_colors: le_i32(b, 32),
            significant_colors: le_i32(b, 36),
        }
    }
}

fn le_u16(b: &[u8], off: usize) -> u16 {
    u16::from_le_bytes([b[off], b[off + 1]])
}

fn le_u32(b: &[u8], off: usize) -> u32 {
    u32::from_le_bytes([b[off], b[off + 1], b[off + 2], b[off + 3]])
}

fn le_i32(b: &[u8], off: usize) -> i32 {
    i32::from_le_bytes([b[off], b[off + 1], b[off + 2], b[off + 3]])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stride_is_padded_to_four_bytes() {
        assert_eq!(stride(0), 0);
        assert_eq!(stride(1), 4);
        assert_eq!(stride(2), 8);
        assert_eq!(stride(3), 12);
        assert_eq!(stride(4), 12);
        assert_eq!(stride(5), 16);
        for w in 0..200u32 {
            let s = stride(w);
            assert_eq!(s % 4, 0, "stride({w}) not aligned");
            assert!(s >= u64::from(w) * 3);
            assert!(s < u64::from(w) * 3 + 4);
        }
        assert_eq!(stride(u32::MAX), (u64::from(u32::MAX) * 3 + 3) & !3);
    }

    #[test]
    fn file_header_layout() {
        let b = FileHeader::for_data_size(8).to_bytes();
        assert_eq!(&b[0..2], b"BM");
        assert_eq!(&b[2..6], &62u32.to_le_bytes());
        assert_eq!(&b[6..10], &[0, 0, 0, 0]);
        assert_eq!(&b[10..14], &54u32.to_le_bytes());
    }

    #[test]
    fn info_header_layout() {
        let b = InfoHeader::new(2, -3, 24, 0).to_bytes();
        assert_eq!(&b[0..4], &40u32.to_le_bytes());
        assert_eq!(&b[4..8], &2i32.to_le_bytes());
        assert_eq!(&b[8..12], &(-3i32).to_le_bytes());
        assert_eq!(&b[12..14], &1u16.to_le_bytes());
        assert_eq!(&b[14..16], &24u16.to_le_bytes());
        assert_eq!(&b[16..20], &[0, 0, 0, 0]);
        assert_eq!(&b[20..24], &24u32.to_le_bytes());
        assert_eq!(&b[24..28], &11811i32.to_le_bytes());
        assert_eq!(&b[28..32], &11811i32.to_le_bytes());
        assert_eq!(&b[32..40], &[0u8; 8]);
    }

    #[test]
    fn headers_parse_what_they_write() {
        let file = FileHeader::for_data_size(1234);
        assert_eq!(FileHeader::from_bytes(&file.to_bytes()), file);
        let info = InfoHeader::new(640, 480, 921_600, LEGACY_SIGNIFICANT_COLORS);
        assert_eq!(InfoHeader::from_bytes(&info.to_bytes()), info);
    }
}
