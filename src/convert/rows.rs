use crate::ByteOrder;

// ===========================================================================
// Pixel kernels
//
// Packed inputs arrive as integers already loaded in the converter's byte
// order; sequential inputs as `[R, G, B]`. Widening shifts left and leaves
// the low bits zero. Narrowing shifts right and truncates.
// ===========================================================================

#[inline(always)]
pub(super) fn swap_br_u32(v: u32) -> u32 {
    (v & 0xFF00_FF00) | (v.rotate_left(16) & 0x00FF_00FF)
}

#[inline(always)]
pub(super) fn argb1555_to_rgb565(c: u16) -> u16 {
    ((c & 0x7FE0) << 1) | (c & 0x001F)
}

#[inline(always)]
pub(crate) fn argb1555_to_argb8888(c: u16) -> u32 {
    let c = c as u32;
    // 1-bit alpha is an on/off mask
    let a = if c & 0x8000 != 0 { 0xFF00_0000 } else { 0 };
    a | ((c & 0x7C00) << 9) | ((c & 0x03E0) << 6) | ((c & 0x001F) << 3)
}

#[inline(always)]
pub(super) fn argb1555_to_rgb(c: u16) -> [u8; 3] {
    [
        ((c & 0x7C00) >> 7) as u8,
        ((c & 0x03E0) >> 2) as u8,
        ((c & 0x001F) << 3) as u8,
    ]
}

#[inline(always)]
pub(super) fn argb1555_to_rgba5551(c: u16) -> u16 {
    c.rotate_left(1)
}

#[inline(always)]
pub(super) fn rgb565_to_argb1555(c: u16) -> u16 {
    0x8000 | ((c & 0xFFC0) >> 1) | (c & 0x001F)
}

#[inline(always)]
pub(super) fn rgb565_to_argb8888(c: u16) -> u32 {
    let c = c as u32;
    0xFF00_0000 | ((c & 0xF800) << 8) | ((c & 0x07E0) << 5) | ((c & 0x001F) << 3)
}

#[inline(always)]
pub(super) fn rgb565_to_rgb(c: u16) -> [u8; 3] {
    [
        ((c & 0xF800) >> 8) as u8,
        ((c & 0x07E0) >> 3) as u8,
        ((c & 0x001F) << 3) as u8,
    ]
}

#[inline(always)]
pub(super) fn argb8888_to_argb1555(c: u32) -> u16 {
    (((c & 0x8000_0000) >> 16)
        | ((c & 0x00F8_0000) >> 9)
        | ((c & 0x0000_F800) >> 6)
        | ((c & 0x0000_00F8) >> 3)) as u16
}

#[inline(always)]
pub(super) fn argb8888_to_rgb565(c: u32) -> u16 {
    let [_, r, g, b] = c.to_be_bytes();
    ((r as u16 >> 3) << 11) | ((g as u16 >> 2) << 5) | (b as u16 >> 3)
}

#[inline(always)]
pub(super) fn argb8888_to_rgb(c: u32) -> [u8; 3] {
    let [_, r, g, b] = c.to_be_bytes();
    [r, g, b]
}

#[inline(always)]
pub(super) fn argb8888_to_rgba8888(c: u32) -> u32 {
    c.rotate_left(8)
}

#[inline(always)]
pub(super) fn argb8888_to_abgr1555(c: u32) -> u16 {
    let [a, r, g, b] = c.to_be_bytes().map(|v| (v >> 3) as u32);
    // alpha keeps a single bit: the 16-bit store drops the rest
    ((a << 15) | (b << 10) | (g << 5) | r) as u16
}

#[inline(always)]
pub(super) fn argb8888_to_rgb332(c: u32) -> u8 {
    let [_, r, g, b] = c.to_be_bytes();
    (r & 0xE0) | ((g & 0xE0) >> 3) | ((b & 0xC0) >> 6)
}

#[inline(always)]
pub(super) fn rgb_to_argb1555([r, g, b]: [u8; 3]) -> u16 {
    0x8000 | ((r as u16 >> 3) << 10) | ((g as u16 >> 3) << 5) | (b as u16 >> 3)
}

#[inline(always)]
pub(super) fn rgb_to_rgb565([r, g, b]: [u8; 3]) -> u16 {
    ((r as u16 >> 3) << 11) | ((g as u16 >> 2) << 5) | (b as u16 >> 3)
}

#[inline(always)]
pub(crate) fn rgb_to_argb8888([r, g, b]: [u8; 3]) -> u32 {
    u32::from_be_bytes([0xFF, r, g, b])
}

#[inline(always)]
pub(crate) fn gray_to_argb8888(v: u8) -> u32 {
    u32::from_be_bytes([0xFF, v, v, v])
}

// ===========================================================================
// Row loops
//
// Callers slice `src` and `dst` to exactly `n` pixels; the loops walk both
// in lockstep.
// ===========================================================================

pub(super) fn map_16_to_16(order: ByteOrder, src: &[u8], dst: &mut [u8], f: fn(u16) -> u16) {
    for (s, d) in src.chunks_exact(2).zip(dst.chunks_exact_mut(2)) {
        order.store_u16(f(order.load_u16(s)), d);
    }
}

pub(super) fn map_16_to_32(order: ByteOrder, src: &[u8], dst: &mut [u8], f: fn(u16) -> u32) {
    for (s, d) in src.chunks_exact(2).zip(dst.chunks_exact_mut(4)) {
        order.store_u32(f(order.load_u16(s)), d);
    }
}

pub(super) fn map_16_to_24(
    order: ByteOrder,
    src: &[u8],
    dst: &mut [u8],
    bgr: bool,
    f: fn(u16) -> [u8; 3],
) {
    for (s, d) in src.chunks_exact(2).zip(dst.chunks_exact_mut(3)) {
        let [r, g, b] = f(order.load_u16(s));
        d.copy_from_slice(&if bgr { [b, g, r] } else { [r, g, b] });
    }
}

pub(super) fn map_32_to_8(order: ByteOrder, src: &[u8], dst: &mut [u8], f: fn(u32) -> u8) {
    for (s, d) in src.chunks_exact(4).zip(dst.iter_mut()) {
        *d = f(order.load_u32(s));
    }
}

pub(super) fn map_32_to_16(order: ByteOrder, src: &[u8], dst: &mut [u8], f: fn(u32) -> u16) {
    for (s, d) in src.chunks_exact(4).zip(dst.chunks_exact_mut(2)) {
        order.store_u16(f(order.load_u32(s)), d);
    }
}

pub(super) fn map_32_to_32(order: ByteOrder, src: &[u8], dst: &mut [u8], f: fn(u32) -> u32) {
    for (s, d) in src.chunks_exact(4).zip(dst.chunks_exact_mut(4)) {
        order.store_u32(f(order.load_u32(s)), d);
    }
}

pub(super) fn map_32_to_24(
    order: ByteOrder,
    src: &[u8],
    dst: &mut [u8],
    bgr: bool,
    f: fn(u32) -> [u8; 3],
) {
    for (s, d) in src.chunks_exact(4).zip(dst.chunks_exact_mut(3)) {
        let [r, g, b] = f(order.load_u32(s));
        d.copy_from_slice(&if bgr { [b, g, r] } else { [r, g, b] });
    }
}

pub(super) fn map_24_to_16(order: ByteOrder, src: &[u8], dst: &mut [u8], f: fn([u8; 3]) -> u16) {
    for (s, d) in src.chunks_exact(3).zip(dst.chunks_exact_mut(2)) {
        order.store_u16(f([s[0], s[1], s[2]]), d);
    }
}

pub(super) fn map_24_to_32(order: ByteOrder, src: &[u8], dst: &mut [u8], f: fn([u8; 3]) -> u32) {
    for (s, d) in src.chunks_exact(3).zip(dst.chunks_exact_mut(4)) {
        order.store_u32(f([s[0], s[1], s[2]]), d);
    }
}

/// Same-format copy of packed `bpp`-byte integers: identity when `order`
/// matches the little-endian definition, element byte swap otherwise.
pub(crate) fn copy_packed(order: ByteOrder, bpp: usize, src: &[u8], dst: &mut [u8]) {
    if order.swaps() {
        for (s, d) in src.chunks_exact(bpp).zip(dst.chunks_exact_mut(bpp)) {
            for (o, i) in d.iter_mut().zip(s.iter().rev()) {
                *o = *i;
            }
        }
    } else {
        dst.copy_from_slice(src);
    }
}

/// Copy 3-byte pixels, swapping bytes 0 and 2.
pub(crate) fn copy_swap_rb24(src: &[u8], dst: &mut [u8]) {
    for (s, d) in src.chunks_exact(3).zip(dst.chunks_exact_mut(3)) {
        d[0] = s[2];
        d[1] = s[1];
        d[2] = s[0];
    }
}
