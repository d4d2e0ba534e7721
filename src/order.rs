// ---------------------------------------------------------------------------
// Byte order of packed-integer pixels.
//
// Packed formats (ARGB1555, RGB565, ARGB8888) are integers in memory. The
// order they are stored in is a single value chosen once, normally the host's,
// and threaded through every converter instead of per-function cfgs.
// ---------------------------------------------------------------------------

/// Byte order used to load and store packed-integer pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Least significant byte first. `0xAARRGGBB` is `[B, G, R, A]`.
    Little,
    /// Most significant byte first. `0xAARRGGBB` is `[A, R, G, B]`.
    Big,
}

impl ByteOrder {
    /// The byte order of the build target.
    pub const HOST: ByteOrder = if cfg!(target_endian = "big") {
        ByteOrder::Big
    } else {
        ByteOrder::Little
    };

    /// Whether packed data in this order must be byte-swapped to reach the
    /// little-endian layout the formats are defined in.
    #[inline]
    pub const fn swaps(self) -> bool {
        matches!(self, ByteOrder::Big)
    }

    #[inline(always)]
    pub(crate) fn load_u16(self, b: &[u8]) -> u16 {
        let b = [b[0], b[1]];
        match self {
            ByteOrder::Little => u16::from_le_bytes(b),
            ByteOrder::Big => u16::from_be_bytes(b),
        }
    }

    #[inline(always)]
    pub(crate) fn store_u16(self, v: u16, out: &mut [u8]) {
        let b = match self {
            ByteOrder::Little => v.to_le_bytes(),
            ByteOrder::Big => v.to_be_bytes(),
        };
        out.copy_from_slice(&b);
    }

    #[inline(always)]
    pub(crate) fn load_u32(self, b: &[u8]) -> u32 {
        let b = [b[0], b[1], b[2], b[3]];
        match self {
            ByteOrder::Little => u32::from_le_bytes(b),
            ByteOrder::Big => u32::from_be_bytes(b),
        }
    }

    #[inline(always)]
    pub(crate) fn store_u32(self, v: u32, out: &mut [u8]) {
        let b = match self {
            ByteOrder::Little => v.to_le_bytes(),
            ByteOrder::Big => v.to_be_bytes(),
        };
        out.copy_from_slice(&b);
    }
}

impl Default for ByteOrder {
    fn default() -> Self {
        Self::HOST
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_matches_target() {
        let marker = 0x0102u16.to_ne_bytes();
        let expected = if marker[0] == 0x02 {
            ByteOrder::Little
        } else {
            ByteOrder::Big
        };
        assert_eq!(ByteOrder::HOST, expected);
        assert_eq!(ByteOrder::default(), expected);
    }

    #[test]
    fn packed_argb_byte_layout() {
        let mut out = [0u8; 4];
        ByteOrder::Little.store_u32(0xAA11_2233, &mut out);
        assert_eq!(out, [0x33, 0x22, 0x11, 0xAA]);
        ByteOrder::Big.store_u32(0xAA11_2233, &mut out);
        assert_eq!(out, [0xAA, 0x11, 0x22, 0x33]);
        assert_eq!(ByteOrder::Big.load_u32(&out), 0xAA11_2233);
    }

    #[test]
    fn packed_u16_roundtrip_each_order() {
        for order in [ByteOrder::Little, ByteOrder::Big] {
            let mut out = [0u8; 2];
            order.store_u16(0x8421, &mut out);
            assert_eq!(order.load_u16(&out), 0x8421, "{order:?}");
        }
    }
}
