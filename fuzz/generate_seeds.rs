#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // PPM 2x2
    let ppm = b"P6\n2 2\n255\n\xff\x00\x00\x00\xff\x00\x00\x00\xff\x80\x80\x80";
    fs::write(format!("{dir}/ppm_2x2.ppm"), ppm).unwrap();

    // PPM with comments and a low maxval
    let ppm15 = b"P6\n# seed\n1 2\n15\n\x0f\x00\x07\x01\x02\x03";
    fs::write(format!("{dir}/ppm_maxval15.ppm"), ppm15).unwrap();

    // BMP 1x1, 24-bit
    let mut bmp = vec![0u8; 58]; // 54 header + 4 pixel (3 + 1 padding)
    bmp[0] = b'B'; bmp[1] = b'M';
    bmp[2..6].copy_from_slice(&58u32.to_le_bytes()); // total size
    bmp[10..14].copy_from_slice(&54u32.to_le_bytes()); // data offset
    bmp[14..18].copy_from_slice(&40u32.to_le_bytes()); // info header size
    bmp[18..22].copy_from_slice(&1i32.to_le_bytes()); // width
    bmp[22..26].copy_from_slice(&1i32.to_le_bytes()); // height
    bmp[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    bmp[28..30].copy_from_slice(&24u16.to_le_bytes()); // bpp
    bmp[34..38].copy_from_slice(&4u32.to_le_bytes()); // data size
    bmp[54] = 0xff; bmp[55] = 0x00; bmp[56] = 0x00; // BGR
    fs::write(format!("{dir}/bmp_1x1.bmp"), &bmp).unwrap();

    // BMP 5x2, exercises row padding
    let mut bmp5 = bmp[..54].to_vec();
    bmp5[2..6].copy_from_slice(&(54u32 + 32).to_le_bytes());
    bmp5[18..22].copy_from_slice(&5i32.to_le_bytes());
    bmp5[22..26].copy_from_slice(&2i32.to_le_bytes());
    bmp5[34..38].copy_from_slice(&32u32.to_le_bytes());
    bmp5.extend((0..32u8).map(|i| i.wrapping_mul(37)));
    fs::write(format!("{dir}/bmp_5x2.bmp"), bmp5).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/just_p6.bin"), b"P6").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    fs::write(format!("{dir}/jpeg_soi_only.bin"), b"\xff\xd8\xff").unwrap();

    println!("Generated seed corpus in {dir}/");
}
