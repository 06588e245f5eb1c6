#![no_main]
use imgconv::{ImageFormat, Limits};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let limits = Limits {
        max_pixels: Some(1 << 22),
        ..Default::default()
    };
    // Every decoder must reject garbage without panicking
    for format in ImageFormat::ALL {
        let _ = format.decode(data, &limits);
    }
});
