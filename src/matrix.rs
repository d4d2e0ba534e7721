//! Capability matrix and runtime dispatch.
//!
//! The four matrix formats are fully connected: every ordered pair, the
//! diagonal included, has a dedicated converter. Pairs involving a
//! source-only format ([`PixelFormat::Indexed8`], [`PixelFormat::Gray8`]) are
//! not in the matrix; the whole-image adapters handle those.

use crate::{ColorConverter, PixelFormat, SizeError};

/// A per-pair converter: `(converter, src, n, dst)`.
pub type ConvertFn = fn(&ColorConverter, &[u8], usize, &mut [u8]) -> Result<(), SizeError>;

/// Converters indexed by `[src][dst]` in [`PixelFormat::MATRIX`] order.
static CONVERTERS: [[ConvertFn; 4]; 4] = [
    [
        ColorConverter::argb1555_to_argb1555,
        ColorConverter::argb1555_to_rgb565,
        ColorConverter::argb1555_to_argb8888,
        ColorConverter::argb1555_to_rgb888,
    ],
    [
        ColorConverter::rgb565_to_argb1555,
        ColorConverter::rgb565_to_rgb565,
        ColorConverter::rgb565_to_argb8888,
        ColorConverter::rgb565_to_rgb888,
    ],
    [
        ColorConverter::argb8888_to_argb1555,
        ColorConverter::argb8888_to_rgb565,
        ColorConverter::argb8888_to_argb8888,
        ColorConverter::argb8888_to_rgb888,
    ],
    [
        ColorConverter::rgb888_to_argb1555,
        ColorConverter::rgb888_to_rgb565,
        ColorConverter::rgb888_to_argb8888,
        ColorConverter::rgb888_to_rgb888,
    ],
];

/// Whether `src` → `dst` can go through [`ColorConverter::convert_via`].
pub const fn can_convert(src: PixelFormat, dst: PixelFormat) -> bool {
    src.can_convert_to(dst)
}

/// The dedicated converter for `src` → `dst`, if the pair is in the matrix.
pub fn converter(src: PixelFormat, dst: PixelFormat) -> Option<ConvertFn> {
    let s = src.matrix_index()?;
    let d = dst.matrix_index()?;
    Some(CONVERTERS[s][d])
}

impl ColorConverter {
    /// Convert `n` pixels from `src_format` to `dst_format`.
    ///
    /// Pairs outside the matrix are a no-op: the call returns `Ok(())` and
    /// `dst` is not written. Check [`can_convert`] first when the difference
    /// matters.
    pub fn convert_via(
        &self,
        src: &[u8],
        src_format: PixelFormat,
        n: usize,
        dst: &mut [u8],
        dst_format: PixelFormat,
    ) -> Result<(), SizeError> {
        match converter(src_format, dst_format) {
            Some(f) => f(self, src, n, dst),
            None => Ok(()),
        }
    }
}
