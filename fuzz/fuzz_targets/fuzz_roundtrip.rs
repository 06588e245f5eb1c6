#![no_main]
use imgconv::*;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // If we can decode it, re-encoding and decoding again must produce identical pixels
    let limits = Limits {
        max_width: Some(1 << 16),
        max_height: Some(1 << 16),
        max_pixels: Some(1 << 22),
        ..Default::default()
    };
    let Some(format) = ImageFormat::from_magic(data) else {
        return;
    };
    if format == ImageFormat::Jpeg {
        return; // lossy
    }
    let Ok(decoded) = format.decode(data, &limits) else {
        return;
    };

    let config = ConvertConfig::default();
    let reencoded = format
        .encode(&decoded, &config)
        .expect("decoded image failed to re-encode");
    let decoded2 = format
        .decode(&reencoded, &limits)
        .expect("re-encoded data failed to decode");
    assert_eq!(decoded, decoded2, "roundtrip pixel mismatch");
});
