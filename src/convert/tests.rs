extern crate alloc;
use super::*;
use crate::ConvertFn;
use alloc::{vec, vec::Vec};

// --- Helpers to generate test data ---

fn make_4bpp(n_pixels: usize) -> Vec<u8> {
    (0..n_pixels * 4).map(|i| (i * 7 % 251) as u8).collect()
}

fn make_3bpp(n_pixels: usize) -> Vec<u8> {
    (0..n_pixels * 3).map(|i| (i * 7 % 251) as u8).collect()
}

fn make_2bpp(n_pixels: usize) -> Vec<u8> {
    (0..n_pixels * 2).map(|i| (i * 13 % 251) as u8).collect()
}

fn le() -> ColorConverter {
    ColorConverter::with_byte_order(ByteOrder::Little)
}

fn be() -> ColorConverter {
    ColorConverter::with_byte_order(ByteOrder::Big)
}

fn u16s(px: &[u16]) -> Vec<u8> {
    px.iter().flat_map(|p| p.to_le_bytes()).collect()
}

fn u32s(px: &[u32]) -> Vec<u8> {
    px.iter().flat_map(|p| p.to_le_bytes()).collect()
}

fn read_u16s(bytes: &[u8]) -> Vec<u16> {
    bytes
        .chunks_exact(2)
        .map(|c| u16::from_le_bytes([c[0], c[1]]))
        .collect()
}

fn read_u32s(bytes: &[u8]) -> Vec<u32> {
    bytes
        .chunks_exact(4)
        .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect()
}

// --- Reference implementations ---

fn ref_reverse_rgb(src: &[u8]) -> Vec<u8> {
    let mut out = src.to_vec();
    for px in out.chunks_exact_mut(3) {
        px.swap(0, 2);
    }
    out
}

fn ref_rgb_to_argb(src: &[u8]) -> Vec<u32> {
    src.chunks_exact(3)
        .map(|p| 0xFF00_0000 | ((p[0] as u32) << 16) | ((p[1] as u32) << 8) | p[2] as u32)
        .collect()
}

// --- Widening ---

#[test]
fn five_bit_channels_widen_by_shift() {
    let mut out = [0u8; 4];
    le().rgb565_to_argb8888(&u16s(&[0xFFFF]), 1, &mut out).unwrap();
    assert_eq!(read_u32s(&out), [0xFFF8_FCF8]);

    le().argb1555_to_argb8888(&u16s(&[0xFFFF]), 1, &mut out).unwrap();
    assert_eq!(read_u32s(&out), [0xFFF8_F8F8]);

    // 1 in a 5-bit channel becomes 8, never 8 | 0b111
    le().argb1555_to_argb8888(&u16s(&[0b1_00001_00001_00001]), 1, &mut out).unwrap();
    assert_eq!(read_u32s(&out), [0xFF08_0808]);
}

#[test]
fn one_bit_alpha_is_a_mask() {
    let mut out = vec![0u8; 8];
    le().argb1555_to_argb8888(&u16s(&[0x7FFF, 0x8000]), 2, &mut out).unwrap();
    assert_eq!(read_u32s(&out), [0x00F8_F8F8, 0xFF00_0000]);
}

#[test]
fn sixteen_bit_to_rgb888_channel_order() {
    let mut out = vec![0u8; 9];
    le().rgb565_to_rgb888(&u16s(&[0xF800, 0x07E0, 0x001F]), 3, &mut out).unwrap();
    assert_eq!(out, [0xF8, 0, 0, 0, 0xFC, 0, 0, 0, 0xF8]);

    le().argb1555_to_rgb888(&u16s(&[0xFC00, 0x03E0, 0x001F]), 3, &mut out).unwrap();
    assert_eq!(out, [0xF8, 0, 0, 0, 0xF8, 0, 0, 0, 0xF8]);
}

#[test]
fn argb1555_bgr888_gives_legacy_byte_order() {
    let src = u16s(&[0b0_10000_01000_00100]);
    let mut rgb = [0u8; 3];
    let mut bgr = [0u8; 3];
    le().argb1555_to_rgb888(&src, 1, &mut rgb).unwrap();
    le().argb1555_to_bgr888(&src, 1, &mut bgr).unwrap();
    assert_eq!(rgb, [0x80, 0x40, 0x20]);
    assert_eq!(bgr, [0x20, 0x40, 0x80]);
}

#[test]
fn bgr_variants_reverse_rgb_variants() {
    const N: usize = 37;
    let cvt = le();
    let cases: [(ConvertFn, ConvertFn, usize); 3] = [
        (
            ColorConverter::argb1555_to_rgb888,
            ColorConverter::argb1555_to_bgr888,
            2,
        ),
        (
            ColorConverter::rgb565_to_rgb888,
            ColorConverter::rgb565_to_bgr888,
            2,
        ),
        (
            ColorConverter::argb8888_to_rgb888,
            ColorConverter::argb8888_to_bgr888,
            4,
        ),
    ];
    for (rgb, bgr, bpp) in cases {
        let src = if bpp == 2 { make_2bpp(N) } else { make_4bpp(N) };
        let mut a = vec![0u8; N * 3];
        let mut b = vec![0u8; N * 3];
        rgb(&cvt, &src, N, &mut a).unwrap();
        bgr(&cvt, &src, N, &mut b).unwrap();
        assert_eq!(ref_reverse_rgb(&a), b);
    }

    let src = make_3bpp(N);
    let mut out = vec![0u8; N * 3];
    cvt.rgb888_to_bgr888(&src, N, &mut out).unwrap();
    assert_eq!(out, ref_reverse_rgb(&src));
}

#[test]
fn rgb888_to_argb8888_sets_opaque_alpha() {
    let mut out = vec![0u8; 8];
    le().rgb888_to_argb8888(&[10, 20, 30, 40, 50, 60], 2, &mut out).unwrap();
    assert_eq!(read_u32s(&out), [0xFF0A_141E, 0xFF28_323C]);
    assert_eq!(&out[..4], &[0x1E, 0x14, 0x0A, 0xFF]);

    let src = make_3bpp(29);
    let mut out = vec![0u8; 29 * 4];
    le().rgb888_to_argb8888(&src, 29, &mut out).unwrap();
    assert_eq!(read_u32s(&out), ref_rgb_to_argb(&src));
}

// --- Narrowing ---

#[test]
fn narrowing_truncates() {
    let mut out = [0u8; 2];
    let src = u32s(&[0x8087_8387]);
    le().argb8888_to_rgb565(&src, 1, &mut out).unwrap();
    assert_eq!(read_u16s(&out), [0x8410]);
    le().argb8888_to_argb1555(&src, 1, &mut out).unwrap();
    assert_eq!(read_u16s(&out), [0xC210]);

    le().rgb888_to_rgb565(&[0x87, 0x83, 0x87], 1, &mut out).unwrap();
    assert_eq!(read_u16s(&out), [0x8410]);
    le().rgb888_to_argb1555(&[0x87, 0x83, 0x87], 1, &mut out).unwrap();
    assert_eq!(read_u16s(&out), [0xC210]);
}

#[test]
fn green_between_555_and_565() {
    let mut out = [0u8; 2];
    le().argb1555_to_rgb565(&u16s(&[0xFFFF]), 1, &mut out).unwrap();
    assert_eq!(read_u16s(&out), [0xFFDF]);

    le().rgb565_to_argb1555(&u16s(&[0x07E0]), 1, &mut out).unwrap();
    assert_eq!(read_u16s(&out), [0x83E0]);
}

#[test]
fn missing_alpha_becomes_opaque() {
    let mut out = [0u8; 2];
    le().rgb565_to_argb1555(&u16s(&[0x0000]), 1, &mut out).unwrap();
    assert_eq!(read_u16s(&out), [0x8000]);
    le().rgb888_to_argb1555(&[0, 0, 0], 1, &mut out).unwrap();
    assert_eq!(read_u16s(&out), [0x8000]);

    let mut wide = [0u8; 4];
    le().rgb565_to_argb8888(&u16s(&[0x0000]), 1, &mut wide).unwrap();
    assert_eq!(read_u32s(&wide), [0xFF00_0000]);
}

// --- Round trips through a wider format ---

#[test]
fn argb8888_through_rgb888_forces_alpha() {
    let src = u32s(&[0x1234_5678, 0x0000_0000, 0xFFFF_FFFF]);
    let mut mid = vec![0u8; 9];
    let mut back = vec![0u8; 12];
    let cvt = le();
    cvt.argb8888_to_rgb888(&src, 3, &mut mid).unwrap();
    assert_eq!(&mid[..3], &[0x34, 0x56, 0x78]);
    cvt.rgb888_to_argb8888(&mid, 3, &mut back).unwrap();
    assert_eq!(read_u32s(&back), [0xFF34_5678, 0xFF00_0000, 0xFFFF_FFFF]);
}

#[test]
fn sixteen_bit_formats_survive_argb8888() {
    const N: usize = 64;
    for order in [ByteOrder::Little, ByteOrder::Big] {
        let cvt = ColorConverter::with_byte_order(order);
        let src = make_2bpp(N);
        let mut wide = vec![0u8; N * 4];
        let mut back = vec![0u8; N * 2];

        cvt.rgb565_to_argb8888(&src, N, &mut wide).unwrap();
        cvt.argb8888_to_rgb565(&wide, N, &mut back).unwrap();
        assert_eq!(back, src, "rgb565 {order:?}");

        cvt.argb1555_to_argb8888(&src, N, &mut wide).unwrap();
        cvt.argb8888_to_argb1555(&wide, N, &mut back).unwrap();
        assert_eq!(back, src, "argb1555 {order:?}");
    }
}

#[test]
fn rgb888_direct_matches_via_argb8888() {
    const N: usize = 41;
    let cvt = le();
    let src = make_3bpp(N);
    let mut wide = vec![0u8; N * 4];
    cvt.rgb888_to_argb8888(&src, N, &mut wide).unwrap();

    let mut direct = vec![0u8; N * 2];
    let mut via = vec![0u8; N * 2];
    cvt.rgb888_to_rgb565(&src, N, &mut direct).unwrap();
    cvt.argb8888_to_rgb565(&wide, N, &mut via).unwrap();
    assert_eq!(direct, via);

    cvt.rgb888_to_argb1555(&src, N, &mut direct).unwrap();
    cvt.argb8888_to_argb1555(&wide, N, &mut via).unwrap();
    assert_eq!(direct, via);
}

// --- Extra destinations ---

#[test]
fn rgba5551_moves_alpha_to_low_bit() {
    let mut out = vec![0u8; 4];
    le().argb1555_to_rgba5551(&u16s(&[0x8001, 0x7C00]), 2, &mut out).unwrap();
    assert_eq!(read_u16s(&out), [0x0003, 0xF800]);
}

#[test]
fn rgba8888_and_abgr8888_reorder_channels() {
    let src = u32s(&[0x1122_3344]);
    let mut out = [0u8; 4];
    le().argb8888_to_rgba8888(&src, 1, &mut out).unwrap();
    assert_eq!(read_u32s(&out), [0x2233_4411]);
    le().argb8888_to_abgr8888(&src, 1, &mut out).unwrap();
    assert_eq!(read_u32s(&out), [0x1144_3322]);
}

#[test]
fn abgr1555_takes_alpha_from_bit_three() {
    let src = u32s(&[0x80FF_0000, 0x08FF_0000, 0xF700_00FF]);
    let mut out = vec![0u8; 6];
    le().argb8888_to_abgr1555(&src, 3, &mut out).unwrap();
    // 0x80: bit 3 clear, alpha lost. 0x08: bit 3 set. 0xF7: bit 3 clear.
    assert_eq!(read_u16s(&out), [0x001F, 0x801F, 0x7C00]);
}

#[test]
fn rgb332_packs_top_bits() {
    let src = u32s(&[0x00FF_FFFF, 0xFF20_4080, 0xFF1F_1F3F]);
    let mut out = [0u8; 3];
    le().argb8888_to_rgb332(&src, 3, &mut out).unwrap();
    assert_eq!(out, [0xFF, 0x2A, 0x00]);
}

// --- Byte order ---

#[test]
fn big_endian_loads_and_stores_packed_values() {
    let mut out = [0u8; 4];
    be().rgb565_to_argb8888(&[0xF8, 0x00], 1, &mut out).unwrap();
    assert_eq!(out, [0xFF, 0xF8, 0x00, 0x00]);

    let mut out = [0u8; 3];
    be().argb8888_to_rgb888(&[0xFF, 0x11, 0x22, 0x33], 1, &mut out).unwrap();
    assert_eq!(out, [0x11, 0x22, 0x33]);
}

#[test]
fn diagonal_copies_swap_only_on_big_endian() {
    let src = [1u8, 2, 3, 4, 5, 6, 7, 8];
    let mut out = [0u8; 8];

    le().argb8888_to_argb8888(&src, 2, &mut out).unwrap();
    assert_eq!(out, src);
    be().argb8888_to_argb8888(&src, 2, &mut out).unwrap();
    assert_eq!(out, [4, 3, 2, 1, 8, 7, 6, 5]);

    le().argb1555_to_argb1555(&src, 4, &mut out).unwrap();
    assert_eq!(out, src);
    be().rgb565_to_rgb565(&src, 4, &mut out).unwrap();
    assert_eq!(out, [2, 1, 4, 3, 6, 5, 8, 7]);

    let mut out = [0u8; 6];
    be().rgb888_to_rgb888(&src[..6], 2, &mut out).unwrap();
    assert_eq!(out, [1, 2, 3, 4, 5, 6]);
}

// --- Validation ---

const ALL: [(ConvertFn, usize, usize); 25] = [
    (ColorConverter::argb1555_to_argb1555, 2, 2),
    (ColorConverter::argb1555_to_rgb565, 2, 2),
    (ColorConverter::argb1555_to_argb8888, 2, 4),
    (ColorConverter::argb1555_to_rgb888, 2, 3),
    (ColorConverter::argb1555_to_bgr888, 2, 3),
    (ColorConverter::argb1555_to_rgba5551, 2, 2),
    (ColorConverter::rgb565_to_argb1555, 2, 2),
    (ColorConverter::rgb565_to_rgb565, 2, 2),
    (ColorConverter::rgb565_to_argb8888, 2, 4),
    (ColorConverter::rgb565_to_rgb888, 2, 3),
    (ColorConverter::rgb565_to_bgr888, 2, 3),
    (ColorConverter::argb8888_to_argb1555, 4, 2),
    (ColorConverter::argb8888_to_rgb565, 4, 2),
    (ColorConverter::argb8888_to_argb8888, 4, 4),
    (ColorConverter::argb8888_to_rgb888, 4, 3),
    (ColorConverter::argb8888_to_bgr888, 4, 3),
    (ColorConverter::argb8888_to_rgba8888, 4, 4),
    (ColorConverter::argb8888_to_abgr8888, 4, 4),
    (ColorConverter::argb8888_to_abgr1555, 4, 2),
    (ColorConverter::argb8888_to_rgb332, 4, 1),
    (ColorConverter::rgb888_to_argb1555, 3, 2),
    (ColorConverter::rgb888_to_rgb565, 3, 2),
    (ColorConverter::rgb888_to_argb8888, 3, 4),
    (ColorConverter::rgb888_to_rgb888, 3, 3),
    (ColorConverter::rgb888_to_bgr888, 3, 3),
];

#[test]
fn zero_pixels_is_noop() {
    let cvt = ColorConverter::new();
    for (f, _, _) in ALL {
        assert_eq!(f(&cvt, &[], 0, &mut []), Ok(()));
        let mut dst = [0xAAu8; 8];
        assert_eq!(f(&cvt, &[1, 2, 3, 4], 0, &mut dst), Ok(()));
        assert_eq!(dst, [0xAA; 8]);
    }
}

#[test]
fn short_buffers_rejected_before_writing() {
    const N: usize = 5;
    let cvt = ColorConverter::new();
    for (i, (f, sb, db)) in ALL.into_iter().enumerate() {
        let src = vec![0x55u8; N * sb];
        let mut dst = vec![0u8; N * db - 1];
        assert_eq!(
            f(&cvt, &src, N, &mut dst),
            Err(SizeError::PixelCountMismatch),
            "converter {i}: short dst"
        );
        assert!(dst.iter().all(|&b| b == 0), "converter {i} wrote");

        let mut dst = vec![0u8; N * db];
        assert_eq!(
            f(&cvt, &src[..N * sb - 1], N, &mut dst),
            Err(SizeError::PixelCountMismatch),
            "converter {i}: short src"
        );
        assert!(dst.iter().all(|&b| b == 0), "converter {i} wrote");

        assert_eq!(
            f(&cvt, &src, usize::MAX, &mut dst),
            Err(SizeError::PixelCountMismatch),
            "converter {i}: overflow"
        );
    }
}

#[test]
fn oversized_buffers_touch_only_n_pixels() {
    let cvt = le();
    let src = make_4bpp(4);
    let mut dst = [0xEEu8; 16];
    cvt.argb8888_to_rgb888(&src, 2, &mut dst).unwrap();
    assert_eq!(&dst[6..], &[0xEE; 10]);
}
