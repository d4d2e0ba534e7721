//! Whole-image adapters: line padding, vertical flip and palette lookup.
//!
//! Source rows are `width × bpp` pixel bytes followed by `linepad` bytes
//! that are skipped, never read as pixels. Destination rows are tightly
//! packed. With `flip`, source row 0 lands in the last destination row.
//!
//! An empty source or destination, or a zero width or height, is a no-op.

use crate::convert::rows;
use crate::{ColorConverter, Palette, SizeError};

/// Geometry of a whole-image conversion.
///
/// ```rust
/// use texcvt::RowLayout;
///
/// let layout = RowLayout::new(640, 480).with_linepad(2).flipped(true);
/// assert_eq!(layout.src_stride(3), 640 * 3 + 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RowLayout {
    /// Pixels per row.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    /// Bytes skipped after every source row.
    pub linepad: usize,
    /// Write destination rows bottom-up.
    pub flip: bool,
}

impl RowLayout {
    /// Unpadded, unflipped `width × height` image.
    pub const fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            linepad: 0,
            flip: false,
        }
    }

    /// Set the source line padding in bytes.
    pub const fn with_linepad(mut self, linepad: usize) -> Self {
        self.linepad = linepad;
        self
    }

    /// Set whether destination rows are written in reverse order.
    pub const fn flipped(mut self, flip: bool) -> Self {
        self.flip = flip;
        self
    }

    /// Distance in bytes between source rows for `bpp`-byte pixels.
    pub const fn src_stride(&self, bpp: usize) -> usize {
        self.width * bpp + self.linepad
    }

    fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

// ===========================================================================
// Validation helpers
// ===========================================================================

#[inline]
fn check_strided(
    len: usize,
    width: usize,
    height: usize,
    stride: usize,
    bpp: usize,
) -> Result<(), SizeError> {
    let row_bytes = width.checked_mul(bpp).ok_or(SizeError::InvalidStride)?;
    if row_bytes > stride {
        return Err(SizeError::InvalidStride);
    }
    let total = (height - 1)
        .checked_mul(stride)
        .ok_or(SizeError::InvalidStride)?
        .checked_add(row_bytes)
        .ok_or(SizeError::InvalidStride)?;
    if len < total {
        return Err(SizeError::InvalidStride);
    }
    Ok(())
}

/// Validate both buffers, then hand each (source row, destination row) pair
/// to `row` in source order.
fn for_each_row(
    src: &[u8],
    src_bpp: usize,
    dst: &mut [u8],
    dst_bpp: usize,
    layout: RowLayout,
    mut row: impl FnMut(&[u8], &mut [u8]),
) -> Result<(), SizeError> {
    if src.is_empty() || dst.is_empty() || layout.is_empty() {
        return Ok(());
    }
    let RowLayout {
        width,
        height,
        flip,
        ..
    } = layout;
    let ss = layout
        .linepad
        .checked_add(width.checked_mul(src_bpp).ok_or(SizeError::InvalidStride)?)
        .ok_or(SizeError::InvalidStride)?;
    let ds = width.checked_mul(dst_bpp).ok_or(SizeError::InvalidStride)?;
    check_strided(src.len(), width, height, ss, src_bpp)?;
    check_strided(dst.len(), width, height, ds, dst_bpp)?;

    for y in 0..height {
        let dy = if flip { height - 1 - y } else { y };
        row(&src[y * ss..][..width * src_bpp], &mut dst[dy * ds..][..ds]);
    }
    Ok(())
}

impl ColorConverter {
    /// 8-bit indexed or gray image → RGB888 (`[R, G, B]`).
    ///
    /// With a palette, each index selects a packed `0xAARRGGBB` slot whose
    /// color channels are written out. Without one, the byte is luminance and
    /// is repeated into all three channels.
    pub fn convert_8bit_to_24bit(
        &self,
        src: &[u8],
        dst: &mut [u8],
        layout: RowLayout,
        palette: Option<&Palette>,
    ) -> Result<(), SizeError> {
        let order = self.byte_order();
        for_each_row(src, 1, dst, 3, layout, |s, d| match palette {
            Some(p) => {
                for (&i, px) in s.iter().zip(d.chunks_exact_mut(3)) {
                    let [_, r, g, b] = order.load_u32(p.entry(i)).to_be_bytes();
                    px.copy_from_slice(&[r, g, b]);
                }
            }
            None => {
                for (&v, px) in s.iter().zip(d.chunks_exact_mut(3)) {
                    px.copy_from_slice(&[v, v, v]);
                }
            }
        })
    }

    /// 8-bit indexed or gray image → ARGB8888.
    ///
    /// With a palette, each index copies its 4-byte slot verbatim. Without
    /// one, the byte is luminance: `0xFFvvvvvv`, alpha forced opaque.
    pub fn convert_8bit_to_32bit(
        &self,
        src: &[u8],
        dst: &mut [u8],
        layout: RowLayout,
        palette: Option<&Palette>,
    ) -> Result<(), SizeError> {
        let order = self.byte_order();
        for_each_row(src, 1, dst, 4, layout, |s, d| match palette {
            Some(p) => {
                for (&i, px) in s.iter().zip(d.chunks_exact_mut(4)) {
                    px.copy_from_slice(p.entry(i));
                }
            }
            None => {
                for (&v, px) in s.iter().zip(d.chunks_exact_mut(4)) {
                    order.store_u32(rows::gray_to_argb8888(v), px);
                }
            }
        })
    }

    /// 16-bit packed image → same format. Byte-swaps each pixel on big endian.
    ///
    /// `layout.linepad` is in bytes, not pixels: a pad of `k` 16-bit
    /// elements is `k * 2`.
    pub fn convert_16bit_to_16bit(
        &self,
        src: &[u8],
        dst: &mut [u8],
        layout: RowLayout,
    ) -> Result<(), SizeError> {
        let order = self.byte_order();
        for_each_row(src, 2, dst, 2, layout, |s, d| {
            rows::copy_packed(order, 2, s, d)
        })
    }

    /// 24-bit image → 24-bit image, optionally swapping R and B.
    pub fn convert_24bit_to_24bit(
        &self,
        src: &[u8],
        dst: &mut [u8],
        layout: RowLayout,
        bgr: bool,
    ) -> Result<(), SizeError> {
        for_each_row(src, 3, dst, 3, layout, |s, d| {
            if bgr {
                rows::copy_swap_rb24(s, d);
            } else {
                d.copy_from_slice(s);
            }
        })
    }

    /// 32-bit packed image → same format. Byte-swaps each pixel on big endian.
    ///
    /// `layout.linepad` is in bytes, not pixels: a pad of `k` 32-bit
    /// elements is `k * 4`.
    pub fn convert_32bit_to_32bit(
        &self,
        src: &[u8],
        dst: &mut [u8],
        layout: RowLayout,
    ) -> Result<(), SizeError> {
        let order = self.byte_order();
        for_each_row(src, 4, dst, 4, layout, |s, d| {
            rows::copy_packed(order, 4, s, d)
        })
    }
}
