// ---------------------------------------------------------------------------
// Nearest-neighbor resize fused with ARGB1555 → ARGB8888.
//
// This is slow on purpose and not meant for per-frame use. The source row
// coordinate is accumulated by repeated `f32` addition, so large targets can
// drift by a row; that drift is part of the output and must not be "fixed".
// ---------------------------------------------------------------------------

use crate::{ColorConverter, SizeError};

/// Expand `0bARRRRRGGGGGBBBBB` by shifting every channel into the top of its
/// byte. The single alpha bit lands in bit 31, so alpha is `0x00` or `0x80`.
#[inline(always)]
fn expand_argb1555(t: u32) -> u32 {
    (((t >> 15) & 0x1) << 31)
        | (((t >> 10) & 0x1F) << 19)
        | (((t >> 5) & 0x1F) << 11)
        | ((t & 0x1F) << 3)
}

impl ColorConverter {
    /// Resample an ARGB1555 image of `src_size` into an ARGB8888 image of
    /// `dst_size` (both `(width, height)` in pixels) by point sampling.
    ///
    /// Returns immediately when either target dimension is zero. The
    /// destination must hold `width × height` tightly packed pixels.
    pub fn resize_argb1555_to_argb8888(
        &self,
        src: &[u8],
        src_size: (usize, usize),
        dst: &mut [u8],
        dst_size: (usize, usize),
    ) -> Result<(), SizeError> {
        let (cur_w, cur_h) = src_size;
        let (new_w, new_h) = dst_size;
        if new_w == 0 || new_h == 0 {
            return Ok(());
        }
        let dst_len = new_w
            .checked_mul(new_h)
            .and_then(|n| n.checked_mul(4))
            .ok_or(SizeError::PixelCountMismatch)?;
        if dst.len() < dst_len {
            return Err(SizeError::PixelCountMismatch);
        }
        let row_len = i32::try_from(cur_w).map_err(|_| SizeError::InvalidStride)?;
        let src_pixels = src.len() / 2;
        let order = self.byte_order();

        let x_step = cur_w as f32 / new_w as f32;
        let y_step = cur_h as f32 / new_h as f32;

        for x in 0..new_w {
            let mut sy = 0.0f32;
            for y in 0..new_h {
                let row_start = (sy as i32)
                    .checked_mul(row_len)
                    .ok_or(SizeError::PixelCountMismatch)?;
                let idx = (row_start as f32 + x as f32 * x_step) as i32;
                let idx = usize::try_from(idx)
                    .ok()
                    .filter(|&i| i < src_pixels)
                    .ok_or(SizeError::PixelCountMismatch)?;
                let t = order.load_u16(&src[idx * 2..]) as u32;
                let o = (y * new_w + x) * 4;
                order.store_u32(expand_argb1555(t), &mut dst[o..o + 4]);
                sy += y_step;
            }
        }
        Ok(())
    }
}
