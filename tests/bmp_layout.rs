//! Byte-level layout of encoded BMP files and rejection of malformed input.

use imgconv::*;

fn le_u32(bytes: &[u8], off: usize) -> u32 {
    u32::from_le_bytes(bytes[off..off + 4].try_into().unwrap())
}

#[test]
fn stride_examples() {
    assert_eq!(bmp::stride(1), 4);
    assert_eq!(bmp::stride(4), 12);
    assert_eq!(bmp::stride(5), 16);
    for w in 0..64 {
        assert_eq!(bmp::stride(w) % 4, 0);
        assert!(bmp::stride(w) >= u64::from(w) * 3);
    }
}

#[test]
fn white_2x1_header_literals() {
    let img = PixelBuffer::new(2, 1, colors::WHITE).unwrap();
    let bytes = encode_bmp(&img).unwrap();

    assert_eq!(&bytes[0..2], &[0x42, 0x4D]);
    assert_eq!(le_u32(&bytes, 2), 54 + 8);
    assert_eq!(le_u32(&bytes, 6), 0);
    assert_eq!(le_u32(&bytes, 10), 54);
    assert_eq!(bytes.len() as u64, 54 + bmp::stride(2));

    // info header
    assert_eq!(le_u32(&bytes, 14), 40);
    assert_eq!(le_u32(&bytes, 18), 2);
    assert_eq!(le_u32(&bytes, 22), 1);
    assert_eq!(&bytes[26..28], &1u16.to_le_bytes());
    assert_eq!(&bytes[28..30], &24u16.to_le_bytes());
    assert_eq!(le_u32(&bytes, 30), 0);
    assert_eq!(le_u32(&bytes, 34), 8);
    assert_eq!(le_u32(&bytes, 38), 11811);
    assert_eq!(le_u32(&bytes, 42), 11811);
    assert_eq!(le_u32(&bytes, 46), 0);

    assert_eq!(&bytes[54..], &[255, 255, 255, 255, 255, 255, 0, 0]);
}

#[test]
fn channels_written_as_bgr() {
    let img = PixelBuffer::new(1, 1, Color::new(10, 20, 30)).unwrap();
    let bytes = encode_bmp(&img).unwrap();
    assert_eq!(&bytes[54..57], &[30, 20, 10]);
    assert_eq!(bytes[57], 0);
}

#[test]
fn bottom_row_written_first() {
    let red = Color::new(255, 0, 0);
    let blue = Color::new(0, 0, 255);
    let mut img = PixelBuffer::new(1, 2, red).unwrap();
    img.row_mut(1)[0] = blue;

    let bytes = encode_bmp(&img).unwrap();
    assert_eq!(&bytes[54..58], &[255, 0, 0, 0], "blue row first (BGR)");
    assert_eq!(&bytes[58..62], &[0, 0, 255, 0], "then red");
}

#[test]
fn empty_image_is_just_headers() {
    let img = PixelBuffer::new(0, 0, colors::BLACK).unwrap();
    let bytes = encode_bmp(&img).unwrap();
    assert_eq!(bytes.len(), 54);
    let decoded = decode_bmp(&bytes).unwrap();
    assert!(decoded.is_valid());
    assert_eq!((decoded.width(), decoded.height()), (0, 0));
}

// ── Rejection ────────────────────────────────────────────────────────

fn valid_file() -> Vec<u8> {
    encode_bmp(&PixelBuffer::new(3, 3, colors::WHITE).unwrap()).unwrap()
}

#[test]
fn zero_signature_rejected() {
    let mut bytes = valid_file();
    bytes[0] = 0;
    bytes[1] = 0;
    assert!(matches!(decode_bmp(&bytes), Err(DecodeError::BadSignature)));
}

#[test]
fn reversed_signature_rejected() {
    let mut bytes = valid_file();
    bytes[0] = b'M';
    bytes[1] = b'B';
    assert!(matches!(decode_bmp(&bytes), Err(DecodeError::BadSignature)));
}

#[test]
fn truncation_anywhere_is_reported() {
    let bytes = valid_file();
    for len in [0, 1, 13, 14, 30, 53, 54, 60, bytes.len() - 1] {
        assert!(
            matches!(decode_bmp(&bytes[..len]), Err(DecodeError::Truncated)),
            "length {len}"
        );
    }
}

#[test]
fn negative_width_rejected() {
    let mut bytes = valid_file();
    bytes[18..22].copy_from_slice(&(-3i32).to_le_bytes());
    assert!(matches!(
        decode_bmp(&bytes),
        Err(DecodeError::InvalidDimensions {
            width: -3,
            height: 3
        })
    ));
}

#[test]
fn trailing_bytes_are_ignored() {
    let mut bytes = valid_file();
    bytes.extend_from_slice(b"extra");
    assert_eq!(
        decode_bmp(&bytes).unwrap(),
        PixelBuffer::new(3, 3, colors::WHITE).unwrap()
    );
}
