//! Typed wrappers using [`rgb`] crate pixels and native integer slices.
//!
//! Packed formats are plain integers here: `&[u16]` holds ARGB1555 or
//! RGB565 values and `&[u32]` holds `0xAARRGGBB`. Native slices are in host
//! byte order, so every function uses [`ColorConverter::new`].
//!
//! ```rust
//! use rgb::Rgb;
//! use texcvt::typed_rgb;
//!
//! let src = vec![Rgb::new(10u8, 20, 30), Rgb::new(40, 50, 60)];
//! let mut dst = vec![0u32; 2];
//! typed_rgb::rgb_to_argb8888(&src, &mut dst).unwrap();
//! assert_eq!(dst, [0xFF0A_141E, 0xFF28_323C]);
//! ```
//!
//! Destinations may be longer than the source; only `src.len()` pixels are
//! written. A shorter destination is an error and nothing is written.

use rgb::{Bgr, Gray, Rgb};

use crate::{ColorConverter, ConvertFn, Palette, RowLayout, SizeError};

fn run(f: ConvertFn, src: &[u8], n: usize, dst: &mut [u8]) -> Result<(), SizeError> {
    f(&ColorConverter::new(), src, n, dst)
}

// ---------------------------------------------------------------------------
// Native packed ↔ native packed
// ---------------------------------------------------------------------------

/// ARGB1555 values → `0xAARRGGBB` values. Alpha becomes `0x00` or `0xFF`.
pub fn argb1555_to_argb8888(src: &[u16], dst: &mut [u32]) -> Result<(), SizeError> {
    run(
        ColorConverter::argb1555_to_argb8888,
        bytemuck::cast_slice(src),
        src.len(),
        bytemuck::cast_slice_mut(dst),
    )
}

/// RGB565 values → `0xAARRGGBB` values with opaque alpha.
pub fn rgb565_to_argb8888(src: &[u16], dst: &mut [u32]) -> Result<(), SizeError> {
    run(
        ColorConverter::rgb565_to_argb8888,
        bytemuck::cast_slice(src),
        src.len(),
        bytemuck::cast_slice_mut(dst),
    )
}

/// `0xAARRGGBB` values → ARGB1555 values.
pub fn argb8888_to_argb1555(src: &[u32], dst: &mut [u16]) -> Result<(), SizeError> {
    run(
        ColorConverter::argb8888_to_argb1555,
        bytemuck::cast_slice(src),
        src.len(),
        bytemuck::cast_slice_mut(dst),
    )
}

/// `0xAARRGGBB` values → RGB565 values.
pub fn argb8888_to_rgb565(src: &[u32], dst: &mut [u16]) -> Result<(), SizeError> {
    run(
        ColorConverter::argb8888_to_rgb565,
        bytemuck::cast_slice(src),
        src.len(),
        bytemuck::cast_slice_mut(dst),
    )
}

/// ARGB1555 values → RGB565 values.
pub fn argb1555_to_rgb565(src: &[u16], dst: &mut [u16]) -> Result<(), SizeError> {
    run(
        ColorConverter::argb1555_to_rgb565,
        bytemuck::cast_slice(src),
        src.len(),
        bytemuck::cast_slice_mut(dst),
    )
}

/// RGB565 values → ARGB1555 values with the alpha bit set.
pub fn rgb565_to_argb1555(src: &[u16], dst: &mut [u16]) -> Result<(), SizeError> {
    run(
        ColorConverter::rgb565_to_argb1555,
        bytemuck::cast_slice(src),
        src.len(),
        bytemuck::cast_slice_mut(dst),
    )
}

// ---------------------------------------------------------------------------
// Native packed → Rgb / Bgr
// ---------------------------------------------------------------------------

/// `0xAARRGGBB` values → `Rgb<u8>`, dropping alpha.
pub fn argb8888_to_rgb(src: &[u32], dst: &mut [Rgb<u8>]) -> Result<(), SizeError> {
    run(
        ColorConverter::argb8888_to_rgb888,
        bytemuck::cast_slice(src),
        src.len(),
        bytemuck::cast_slice_mut(dst),
    )
}

/// `0xAARRGGBB` values → `Bgr<u8>`, dropping alpha.
pub fn argb8888_to_bgr(src: &[u32], dst: &mut [Bgr<u8>]) -> Result<(), SizeError> {
    run(
        ColorConverter::argb8888_to_bgr888,
        bytemuck::cast_slice(src),
        src.len(),
        bytemuck::cast_slice_mut(dst),
    )
}

/// RGB565 values → `Rgb<u8>`.
pub fn rgb565_to_rgb(src: &[u16], dst: &mut [Rgb<u8>]) -> Result<(), SizeError> {
    run(
        ColorConverter::rgb565_to_rgb888,
        bytemuck::cast_slice(src),
        src.len(),
        bytemuck::cast_slice_mut(dst),
    )
}

/// RGB565 values → `Bgr<u8>`.
pub fn rgb565_to_bgr(src: &[u16], dst: &mut [Bgr<u8>]) -> Result<(), SizeError> {
    run(
        ColorConverter::rgb565_to_bgr888,
        bytemuck::cast_slice(src),
        src.len(),
        bytemuck::cast_slice_mut(dst),
    )
}

/// ARGB1555 values → `Rgb<u8>`, dropping alpha.
pub fn argb1555_to_rgb(src: &[u16], dst: &mut [Rgb<u8>]) -> Result<(), SizeError> {
    run(
        ColorConverter::argb1555_to_rgb888,
        bytemuck::cast_slice(src),
        src.len(),
        bytemuck::cast_slice_mut(dst),
    )
}

/// ARGB1555 values → `Bgr<u8>`, dropping alpha.
pub fn argb1555_to_bgr(src: &[u16], dst: &mut [Bgr<u8>]) -> Result<(), SizeError> {
    run(
        ColorConverter::argb1555_to_bgr888,
        bytemuck::cast_slice(src),
        src.len(),
        bytemuck::cast_slice_mut(dst),
    )
}

// ---------------------------------------------------------------------------
// Rgb → native packed / Bgr
// ---------------------------------------------------------------------------

/// `Rgb<u8>` → `0xFFRRGGBB` values.
pub fn rgb_to_argb8888(src: &[Rgb<u8>], dst: &mut [u32]) -> Result<(), SizeError> {
    run(
        ColorConverter::rgb888_to_argb8888,
        bytemuck::cast_slice(src),
        src.len(),
        bytemuck::cast_slice_mut(dst),
    )
}

/// `Rgb<u8>` → RGB565 values.
pub fn rgb_to_rgb565(src: &[Rgb<u8>], dst: &mut [u16]) -> Result<(), SizeError> {
    run(
        ColorConverter::rgb888_to_rgb565,
        bytemuck::cast_slice(src),
        src.len(),
        bytemuck::cast_slice_mut(dst),
    )
}

/// `Rgb<u8>` → ARGB1555 values with the alpha bit set.
pub fn rgb_to_argb1555(src: &[Rgb<u8>], dst: &mut [u16]) -> Result<(), SizeError> {
    run(
        ColorConverter::rgb888_to_argb1555,
        bytemuck::cast_slice(src),
        src.len(),
        bytemuck::cast_slice_mut(dst),
    )
}

/// Copy `&[Rgb<u8>]` into `&mut [Bgr<u8>]`.
pub fn rgb_to_bgr_buf(src: &[Rgb<u8>], dst: &mut [Bgr<u8>]) -> Result<(), SizeError> {
    run(
        ColorConverter::rgb888_to_bgr888,
        bytemuck::cast_slice(src),
        src.len(),
        bytemuck::cast_slice_mut(dst),
    )
}

// ---------------------------------------------------------------------------
// 8-bit sources
// ---------------------------------------------------------------------------

/// `Gray<u8>` → `0xFFvvvvvv` values.
///
/// A destination shorter than the source fails with
/// [`SizeError::InvalidStride`], as for any single-row image.
pub fn gray_to_argb8888(src: &[Gray<u8>], dst: &mut [u32]) -> Result<(), SizeError> {
    ColorConverter::new().convert_8bit_to_32bit(
        bytemuck::cast_slice(src),
        bytemuck::cast_slice_mut(dst),
        RowLayout::new(src.len(), 1),
        None,
    )
}

/// Palette indices → `0xAARRGGBB` values. `palette` must be built in host
/// byte order, e.g. with [`Palette::from_argb`] and
/// [`ByteOrder::HOST`](crate::ByteOrder::HOST).
pub fn indexed_to_argb8888(
    src: &[u8],
    palette: &Palette,
    dst: &mut [u32],
) -> Result<(), SizeError> {
    ColorConverter::new().convert_8bit_to_32bit(
        src,
        bytemuck::cast_slice_mut(dst),
        RowLayout::new(src.len(), 1),
        Some(palette),
    )
}

/// Palette indices → `Rgb<u8>`, dropping palette alpha.
pub fn indexed_to_rgb(
    src: &[u8],
    palette: &Palette,
    dst: &mut [Rgb<u8>],
) -> Result<(), SizeError> {
    ColorConverter::new().convert_8bit_to_24bit(
        src,
        bytemuck::cast_slice_mut(dst),
        RowLayout::new(src.len(), 1),
        Some(palette),
    )
}
