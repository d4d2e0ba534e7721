// ---------------------------------------------------------------------------
// Per-pair converters over flat pixel runs.
//
// Every method takes `n` pixels from `src` and writes `n` pixels to `dst`,
// with no notion of rows. Validation happens up front; the row loops in
// `rows` never see a short buffer.
// ---------------------------------------------------------------------------

use crate::{ByteOrder, SizeError};

pub(crate) mod rows;

#[cfg(test)]
mod tests;

// ===========================================================================
// Validation helpers
// ===========================================================================

/// Slice `src` and `dst` to exactly `n` pixels each.
#[inline]
pub(crate) fn check_run<'s, 'd>(
    src: &'s [u8],
    src_bpp: usize,
    n: usize,
    dst: &'d mut [u8],
    dst_bpp: usize,
) -> Result<(&'s [u8], &'d mut [u8]), SizeError> {
    let src_len = n.checked_mul(src_bpp).ok_or(SizeError::PixelCountMismatch)?;
    let dst_len = n.checked_mul(dst_bpp).ok_or(SizeError::PixelCountMismatch)?;
    if src.len() < src_len || dst.len() < dst_len {
        return Err(SizeError::PixelCountMismatch);
    }
    Ok((&src[..src_len], &mut dst[..dst_len]))
}

// ===========================================================================
// Converter
// ===========================================================================

/// Pixel format converter bound to one packed-integer [`ByteOrder`].
///
/// The byte order is the only state. It is fixed at construction, normally to
/// [`ByteOrder::HOST`], and consulted by every routine that loads or stores a
/// packed pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct ColorConverter {
    order: ByteOrder,
}

impl ColorConverter {
    /// Converter using the host byte order.
    pub const fn new() -> Self {
        Self {
            order: ByteOrder::HOST,
        }
    }

    /// Converter using an explicit byte order for packed pixels.
    pub const fn with_byte_order(order: ByteOrder) -> Self {
        Self { order }
    }

    /// The byte order packed pixels are loaded and stored in.
    pub const fn byte_order(&self) -> ByteOrder {
        self.order
    }

    // -----------------------------------------------------------------------
    // ARGB1555 source
    // -----------------------------------------------------------------------

    /// ARGB1555 → ARGB1555. Copy, byte-swapping each pixel on big endian.
    pub fn argb1555_to_argb1555(
        &self,
        src: &[u8],
        n: usize,
        dst: &mut [u8],
    ) -> Result<(), SizeError> {
        let (s, d) = check_run(src, 2, n, dst, 2)?;
        rows::copy_packed(self.order, 2, s, d);
        Ok(())
    }

    /// ARGB1555 → RGB565. Green gains a zero low bit; alpha is dropped.
    pub fn argb1555_to_rgb565(
        &self,
        src: &[u8],
        n: usize,
        dst: &mut [u8],
    ) -> Result<(), SizeError> {
        let (s, d) = check_run(src, 2, n, dst, 2)?;
        rows::map_16_to_16(self.order, s, d, rows::argb1555_to_rgb565);
        Ok(())
    }

    /// ARGB1555 → ARGB8888. Channels widen by `<< 3`; alpha becomes `0x00` or `0xFF`.
    pub fn argb1555_to_argb8888(
        &self,
        src: &[u8],
        n: usize,
        dst: &mut [u8],
    ) -> Result<(), SizeError> {
        let (s, d) = check_run(src, 2, n, dst, 4)?;
        rows::map_16_to_32(self.order, s, d, rows::argb1555_to_argb8888);
        Ok(())
    }

    /// ARGB1555 → RGB888 (`[R, G, B]`). Alpha is dropped.
    ///
    /// Legacy engines wrote `[B, G, R]` here; use
    /// [`argb1555_to_bgr888`](Self::argb1555_to_bgr888) to reproduce that output.
    pub fn argb1555_to_rgb888(
        &self,
        src: &[u8],
        n: usize,
        dst: &mut [u8],
    ) -> Result<(), SizeError> {
        let (s, d) = check_run(src, 2, n, dst, 3)?;
        rows::map_16_to_24(self.order, s, d, false, rows::argb1555_to_rgb);
        Ok(())
    }

    /// ARGB1555 → BGR888 (`[B, G, R]`). Alpha is dropped.
    pub fn argb1555_to_bgr888(
        &self,
        src: &[u8],
        n: usize,
        dst: &mut [u8],
    ) -> Result<(), SizeError> {
        let (s, d) = check_run(src, 2, n, dst, 3)?;
        rows::map_16_to_24(self.order, s, d, true, rows::argb1555_to_rgb);
        Ok(())
    }

    /// ARGB1555 → RGBA5551 (`0bRRRRRGGGGGBBBBBA`). Rotates alpha to the low bit.
    pub fn argb1555_to_rgba5551(
        &self,
        src: &[u8],
        n: usize,
        dst: &mut [u8],
    ) -> Result<(), SizeError> {
        let (s, d) = check_run(src, 2, n, dst, 2)?;
        rows::map_16_to_16(self.order, s, d, rows::argb1555_to_rgba5551);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // RGB565 source
    // -----------------------------------------------------------------------

    /// RGB565 → ARGB1555. Green loses its low bit; alpha is set.
    pub fn rgb565_to_argb1555(
        &self,
        src: &[u8],
        n: usize,
        dst: &mut [u8],
    ) -> Result<(), SizeError> {
        let (s, d) = check_run(src, 2, n, dst, 2)?;
        rows::map_16_to_16(self.order, s, d, rows::rgb565_to_argb1555);
        Ok(())
    }

    /// RGB565 → RGB565. Copy, byte-swapping each pixel on big endian.
    pub fn rgb565_to_rgb565(&self, src: &[u8], n: usize, dst: &mut [u8]) -> Result<(), SizeError> {
        let (s, d) = check_run(src, 2, n, dst, 2)?;
        rows::copy_packed(self.order, 2, s, d);
        Ok(())
    }

    /// RGB565 → ARGB8888. Channels widen by shifting; alpha is `0xFF`.
    pub fn rgb565_to_argb8888(
        &self,
        src: &[u8],
        n: usize,
        dst: &mut [u8],
    ) -> Result<(), SizeError> {
        let (s, d) = check_run(src, 2, n, dst, 4)?;
        rows::map_16_to_32(self.order, s, d, rows::rgb565_to_argb8888);
        Ok(())
    }

    /// RGB565 → RGB888 (`[R, G, B]`).
    pub fn rgb565_to_rgb888(&self, src: &[u8], n: usize, dst: &mut [u8]) -> Result<(), SizeError> {
        let (s, d) = check_run(src, 2, n, dst, 3)?;
        rows::map_16_to_24(self.order, s, d, false, rows::rgb565_to_rgb);
        Ok(())
    }

    /// RGB565 → BGR888 (`[B, G, R]`).
    pub fn rgb565_to_bgr888(&self, src: &[u8], n: usize, dst: &mut [u8]) -> Result<(), SizeError> {
        let (s, d) = check_run(src, 2, n, dst, 3)?;
        rows::map_16_to_24(self.order, s, d, true, rows::rgb565_to_rgb);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // ARGB8888 source
    // -----------------------------------------------------------------------

    /// ARGB8888 → ARGB1555. Channels truncate to 5 bits; alpha keeps its top bit.
    pub fn argb8888_to_argb1555(
        &self,
        src: &[u8],
        n: usize,
        dst: &mut [u8],
    ) -> Result<(), SizeError> {
        let (s, d) = check_run(src, 4, n, dst, 2)?;
        rows::map_32_to_16(self.order, s, d, rows::argb8888_to_argb1555);
        Ok(())
    }

    /// ARGB8888 → RGB565. Channels truncate; alpha is dropped.
    pub fn argb8888_to_rgb565(
        &self,
        src: &[u8],
        n: usize,
        dst: &mut [u8],
    ) -> Result<(), SizeError> {
        let (s, d) = check_run(src, 4, n, dst, 2)?;
        rows::map_32_to_16(self.order, s, d, rows::argb8888_to_rgb565);
        Ok(())
    }

    /// ARGB8888 → ARGB8888. Copy, byte-swapping each pixel on big endian.
    pub fn argb8888_to_argb8888(
        &self,
        src: &[u8],
        n: usize,
        dst: &mut [u8],
    ) -> Result<(), SizeError> {
        let (s, d) = check_run(src, 4, n, dst, 4)?;
        rows::copy_packed(self.order, 4, s, d);
        Ok(())
    }

    /// ARGB8888 → RGB888 (`[R, G, B]`). Alpha is dropped.
    pub fn argb8888_to_rgb888(
        &self,
        src: &[u8],
        n: usize,
        dst: &mut [u8],
    ) -> Result<(), SizeError> {
        let (s, d) = check_run(src, 4, n, dst, 3)?;
        rows::map_32_to_24(self.order, s, d, false, rows::argb8888_to_rgb);
        Ok(())
    }

    /// ARGB8888 → BGR888 (`[B, G, R]`). Alpha is dropped.
    pub fn argb8888_to_bgr888(
        &self,
        src: &[u8],
        n: usize,
        dst: &mut [u8],
    ) -> Result<(), SizeError> {
        let (s, d) = check_run(src, 4, n, dst, 3)?;
        rows::map_32_to_24(self.order, s, d, true, rows::argb8888_to_rgb);
        Ok(())
    }

    /// ARGB8888 → RGBA8888 (`0xRRGGBBAA`).
    pub fn argb8888_to_rgba8888(
        &self,
        src: &[u8],
        n: usize,
        dst: &mut [u8],
    ) -> Result<(), SizeError> {
        let (s, d) = check_run(src, 4, n, dst, 4)?;
        rows::map_32_to_32(self.order, s, d, rows::argb8888_to_rgba8888);
        Ok(())
    }

    /// ARGB8888 → ABGR8888 (`0xAABBGGRR`). Swaps red and blue.
    pub fn argb8888_to_abgr8888(
        &self,
        src: &[u8],
        n: usize,
        dst: &mut [u8],
    ) -> Result<(), SizeError> {
        let (s, d) = check_run(src, 4, n, dst, 4)?;
        rows::map_32_to_32(self.order, s, d, rows::swap_br_u32);
        Ok(())
    }

    /// ARGB8888 → ABGR1555 (`0bABBBBBGGGGGRRRRR`).
    ///
    /// The alpha bit is bit 3 of the source alpha, not bit 7: each channel is
    /// narrowed to 5 bits first and the 16-bit store keeps only the lowest
    /// alpha bit. Existing texture data depends on this.
    pub fn argb8888_to_abgr1555(
        &self,
        src: &[u8],
        n: usize,
        dst: &mut [u8],
    ) -> Result<(), SizeError> {
        let (s, d) = check_run(src, 4, n, dst, 2)?;
        rows::map_32_to_16(self.order, s, d, rows::argb8888_to_abgr1555);
        Ok(())
    }

    /// ARGB8888 → RGB332 (one byte, `0bRRRGGGBB`).
    pub fn argb8888_to_rgb332(
        &self,
        src: &[u8],
        n: usize,
        dst: &mut [u8],
    ) -> Result<(), SizeError> {
        let (s, d) = check_run(src, 4, n, dst, 1)?;
        rows::map_32_to_8(self.order, s, d, rows::argb8888_to_rgb332);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // RGB888 source
    // -----------------------------------------------------------------------

    /// RGB888 → ARGB1555. Channels truncate to 5 bits; alpha is set.
    pub fn rgb888_to_argb1555(
        &self,
        src: &[u8],
        n: usize,
        dst: &mut [u8],
    ) -> Result<(), SizeError> {
        let (s, d) = check_run(src, 3, n, dst, 2)?;
        rows::map_24_to_16(self.order, s, d, rows::rgb_to_argb1555);
        Ok(())
    }

    /// RGB888 → RGB565. Channels truncate.
    pub fn rgb888_to_rgb565(&self, src: &[u8], n: usize, dst: &mut [u8]) -> Result<(), SizeError> {
        let (s, d) = check_run(src, 3, n, dst, 2)?;
        rows::map_24_to_16(self.order, s, d, rows::rgb_to_rgb565);
        Ok(())
    }

    /// RGB888 → ARGB8888. Alpha is `0xFF`.
    pub fn rgb888_to_argb8888(
        &self,
        src: &[u8],
        n: usize,
        dst: &mut [u8],
    ) -> Result<(), SizeError> {
        let (s, d) = check_run(src, 3, n, dst, 4)?;
        rows::map_24_to_32(self.order, s, d, rows::rgb_to_argb8888);
        Ok(())
    }

    /// RGB888 → RGB888. Plain copy.
    pub fn rgb888_to_rgb888(&self, src: &[u8], n: usize, dst: &mut [u8]) -> Result<(), SizeError> {
        let (s, d) = check_run(src, 3, n, dst, 3)?;
        d.copy_from_slice(s);
        Ok(())
    }

    /// RGB888 → BGR888. Swaps bytes 0 and 2 of every pixel.
    pub fn rgb888_to_bgr888(&self, src: &[u8], n: usize, dst: &mut [u8]) -> Result<(), SizeError> {
        let (s, d) = check_run(src, 3, n, dst, 3)?;
        rows::copy_swap_rb24(s, d);
        Ok(())
    }
}
