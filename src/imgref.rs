//! Whole-image conversions using [`imgref`] types.
//!
//! Source and destination may have any stride; rows are converted one at a
//! time. Packed pixels are native integers (`u16`, `u32`) in host byte order.
//!
//! ```rust
//! use rgb::Rgb;
//! use ::imgref::{ImgVec, ImgRefMut};
//! use texcvt::imgref;
//!
//! let src = ImgVec::new(vec![Rgb::new(255u8, 0, 128); 4], 2, 2);
//! let mut dst_buf = vec![0u32; 4];
//! let dst = ImgRefMut::new(&mut dst_buf, 2, 2);
//! imgref::convert_rgb_to_argb8888(src.as_ref(), dst).unwrap();
//! assert_eq!(dst_buf[3], 0xFFFF_0080);
//! ```

use alloc::vec;
use alloc::vec::Vec;

use bytemuck::Pod;
use imgref::{ImgRef, ImgRefMut, ImgVec};
use rgb::{Gray, Rgb};

use crate::{ColorConverter, ConvertFn, Palette, RowLayout, SizeError};

// ---------------------------------------------------------------------------
// Dimension check and row walk
// ---------------------------------------------------------------------------

fn check_dims(sw: usize, sh: usize, dw: usize, dh: usize) -> Result<(), SizeError> {
    if sw != dw || sh != dh {
        Err(SizeError::DimensionMismatch)
    } else {
        Ok(())
    }
}

fn for_each_row<S: Pod, D: Pod>(
    src: ImgRef<'_, S>,
    mut dst: ImgRefMut<'_, D>,
    mut row: impl FnMut(&[u8], &mut [u8], usize) -> Result<(), SizeError>,
) -> Result<(), SizeError> {
    check_dims(src.width(), src.height(), dst.width(), dst.height())?;
    let width = src.width();
    for (src_row, dst_row) in src.rows().zip(dst.rows_mut()) {
        row(
            bytemuck::cast_slice(src_row),
            bytemuck::cast_slice_mut(dst_row),
            width,
        )?;
    }
    Ok(())
}

fn convert_rows<S: Pod, D: Pod>(
    src: ImgRef<'_, S>,
    dst: ImgRefMut<'_, D>,
    f: ConvertFn,
) -> Result<(), SizeError> {
    let cvt = ColorConverter::new();
    for_each_row(src, dst, |s, d, n| f(&cvt, s, n, d))
}

// ---------------------------------------------------------------------------
// Packed ↔ packed
// ---------------------------------------------------------------------------

/// ARGB1555 image → ARGB8888 image.
pub fn convert_argb1555_to_argb8888(
    src: ImgRef<'_, u16>,
    dst: ImgRefMut<'_, u32>,
) -> Result<(), SizeError> {
    convert_rows(src, dst, ColorConverter::argb1555_to_argb8888)
}

/// RGB565 image → ARGB8888 image.
pub fn convert_rgb565_to_argb8888(
    src: ImgRef<'_, u16>,
    dst: ImgRefMut<'_, u32>,
) -> Result<(), SizeError> {
    convert_rows(src, dst, ColorConverter::rgb565_to_argb8888)
}

/// ARGB8888 image → ARGB1555 image.
pub fn convert_argb8888_to_argb1555(
    src: ImgRef<'_, u32>,
    dst: ImgRefMut<'_, u16>,
) -> Result<(), SizeError> {
    convert_rows(src, dst, ColorConverter::argb8888_to_argb1555)
}

/// ARGB8888 image → RGB565 image.
pub fn convert_argb8888_to_rgb565(
    src: ImgRef<'_, u32>,
    dst: ImgRefMut<'_, u16>,
) -> Result<(), SizeError> {
    convert_rows(src, dst, ColorConverter::argb8888_to_rgb565)
}

// ---------------------------------------------------------------------------
// Packed ↔ Rgb
// ---------------------------------------------------------------------------

/// `Rgb<u8>` image → ARGB8888 image with opaque alpha.
pub fn convert_rgb_to_argb8888(
    src: ImgRef<'_, Rgb<u8>>,
    dst: ImgRefMut<'_, u32>,
) -> Result<(), SizeError> {
    convert_rows(src, dst, ColorConverter::rgb888_to_argb8888)
}

/// ARGB8888 image → `Rgb<u8>` image, dropping alpha.
pub fn convert_argb8888_to_rgb(
    src: ImgRef<'_, u32>,
    dst: ImgRefMut<'_, Rgb<u8>>,
) -> Result<(), SizeError> {
    convert_rows(src, dst, ColorConverter::argb8888_to_rgb888)
}

/// RGB565 image → `Rgb<u8>` image.
pub fn convert_rgb565_to_rgb(
    src: ImgRef<'_, u16>,
    dst: ImgRefMut<'_, Rgb<u8>>,
) -> Result<(), SizeError> {
    convert_rows(src, dst, ColorConverter::rgb565_to_rgb888)
}

/// ARGB1555 image → `Rgb<u8>` image, dropping alpha.
pub fn convert_argb1555_to_rgb(
    src: ImgRef<'_, u16>,
    dst: ImgRefMut<'_, Rgb<u8>>,
) -> Result<(), SizeError> {
    convert_rows(src, dst, ColorConverter::argb1555_to_rgb888)
}

// ---------------------------------------------------------------------------
// 8-bit sources
// ---------------------------------------------------------------------------

/// `Gray<u8>` image → ARGB8888 image, `0xFFvvvvvv`.
pub fn convert_gray_to_argb8888(
    src: ImgRef<'_, Gray<u8>>,
    dst: ImgRefMut<'_, u32>,
) -> Result<(), SizeError> {
    let cvt = ColorConverter::new();
    for_each_row(src, dst, |s, d, n| {
        cvt.convert_8bit_to_32bit(s, d, RowLayout::new(n, 1), None)
    })
}

/// Indexed image → ARGB8888 image. `palette` must hold host-order entries.
pub fn convert_indexed_to_argb8888(
    src: ImgRef<'_, u8>,
    palette: &Palette,
    dst: ImgRefMut<'_, u32>,
) -> Result<(), SizeError> {
    let cvt = ColorConverter::new();
    for_each_row(src, dst, |s, d, n| {
        cvt.convert_8bit_to_32bit(s, d, RowLayout::new(n, 1), Some(palette))
    })
}

// ---------------------------------------------------------------------------
// Resize
// ---------------------------------------------------------------------------

/// Point-sample an ARGB1555 image into a new `width × height` ARGB8888 image.
///
/// Alpha comes out as `0x00` or `0x80`; see
/// [`ColorConverter::resize_argb1555_to_argb8888`]. A zero target dimension
/// cannot form an image and is rejected with [`SizeError::DimensionMismatch`].
pub fn resize_argb1555_to_argb8888(
    src: ImgRef<'_, u16>,
    width: usize,
    height: usize,
) -> Result<ImgVec<u32>, SizeError> {
    if width == 0 || height == 0 {
        return Err(SizeError::DimensionMismatch);
    }
    let packed: Vec<u16> = src.pixels().collect();
    let len = width
        .checked_mul(height)
        .ok_or(SizeError::PixelCountMismatch)?;
    let mut out = vec![0u32; len];
    ColorConverter::new().resize_argb1555_to_argb8888(
        bytemuck::cast_slice(&packed),
        (src.width(), src.height()),
        bytemuck::cast_slice_mut(&mut out),
        (width, height),
    )?;
    Ok(ImgVec::new(out, width, height))
}
