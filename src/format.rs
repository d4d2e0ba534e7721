//! The closed catalogue of pixel encodings.
//!
//! Layouts are fixed at compile time. Nothing in the crate inspects a
//! buffer to discover its format; callers name it with a [`PixelFormat`].

/// Supported pixel encodings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// 8-bit palette index. Source-only; needs a [`Palette`](crate::Palette).
    Indexed8,
    /// 8-bit luminance. Source-only; replicated into every color channel.
    Gray8,
    /// 16-bit packed `0bARRRRRGGGGGBBBBB` (also known as A1R5G5B5).
    Argb1555,
    /// 16-bit packed `0bRRRRRGGGGGGBBBBB`.
    Rgb565,
    /// 24-bit sequential bytes `[R, G, B]`.
    Rgb888,
    /// 32-bit packed `0xAARRGGBB`.
    Argb8888,
}

/// How a format's channels sit in memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MemoryFamily {
    /// One byte per channel, in order. Channel offsets are byte indices × 8.
    Sequential,
    /// One integer per pixel, stored in the converter's [`ByteOrder`](crate::ByteOrder).
    /// Channel offsets are bit positions within that integer.
    Packed,
}

/// Width and position of one channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Channel {
    /// Channel width in bits.
    pub bits: u8,
    /// Offset of the least significant bit.
    pub offset: u8,
}

impl Channel {
    const fn new(bits: u8, offset: u8) -> Self {
        Self { bits, offset }
    }

    /// Bit mask of the channel within its pixel.
    pub const fn mask(self) -> u32 {
        ((1u32 << self.bits) - 1) << self.offset
    }
}

impl PixelFormat {
    /// Every format in the catalogue.
    pub const ALL: [PixelFormat; 6] = [
        PixelFormat::Indexed8,
        PixelFormat::Gray8,
        PixelFormat::Argb1555,
        PixelFormat::Rgb565,
        PixelFormat::Rgb888,
        PixelFormat::Argb8888,
    ];

    /// The formats covered by the conversion matrix, in matrix order.
    pub const MATRIX: [PixelFormat; 4] = [
        PixelFormat::Argb1555,
        PixelFormat::Rgb565,
        PixelFormat::Argb8888,
        PixelFormat::Rgb888,
    ];

    /// Bytes per pixel.
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Indexed8 | Self::Gray8 => 1,
            Self::Argb1555 | Self::Rgb565 => 2,
            Self::Rgb888 => 3,
            Self::Argb8888 => 4,
        }
    }

    /// Memory family of the format.
    pub const fn family(self) -> MemoryFamily {
        match self {
            Self::Indexed8 | Self::Gray8 | Self::Rgb888 => MemoryFamily::Sequential,
            Self::Argb1555 | Self::Rgb565 | Self::Argb8888 => MemoryFamily::Packed,
        }
    }

    /// Red channel layout. `None` for [`PixelFormat::Indexed8`].
    ///
    /// [`PixelFormat::Gray8`] reports its single luminance byte for red,
    /// green and blue.
    pub const fn red(self) -> Option<Channel> {
        match self {
            Self::Indexed8 => None,
            Self::Gray8 => Some(Channel::new(8, 0)),
            Self::Argb1555 => Some(Channel::new(5, 10)),
            Self::Rgb565 => Some(Channel::new(5, 11)),
            Self::Rgb888 => Some(Channel::new(8, 0)),
            Self::Argb8888 => Some(Channel::new(8, 16)),
        }
    }

    /// Green channel layout.
    pub const fn green(self) -> Option<Channel> {
        match self {
            Self::Indexed8 => None,
            Self::Gray8 => Some(Channel::new(8, 0)),
            Self::Argb1555 => Some(Channel::new(5, 5)),
            Self::Rgb565 => Some(Channel::new(6, 5)),
            Self::Rgb888 => Some(Channel::new(8, 8)),
            Self::Argb8888 => Some(Channel::new(8, 8)),
        }
    }

    /// Blue channel layout.
    pub const fn blue(self) -> Option<Channel> {
        match self {
            Self::Indexed8 => None,
            Self::Gray8 => Some(Channel::new(8, 0)),
            Self::Argb1555 => Some(Channel::new(5, 0)),
            Self::Rgb565 => Some(Channel::new(5, 0)),
            Self::Rgb888 => Some(Channel::new(8, 16)),
            Self::Argb8888 => Some(Channel::new(8, 0)),
        }
    }

    /// Alpha channel layout, if the format stores one.
    pub const fn alpha(self) -> Option<Channel> {
        match self {
            Self::Argb1555 => Some(Channel::new(1, 15)),
            Self::Argb8888 => Some(Channel::new(8, 24)),
            _ => None,
        }
    }

    /// Whether the format carries an alpha channel.
    pub const fn has_alpha(self) -> bool {
        self.alpha().is_some()
    }

    /// Index into [`PixelFormat::MATRIX`], or `None` for source-only formats.
    pub(crate) const fn matrix_index(self) -> Option<usize> {
        match self {
            Self::Argb1555 => Some(0),
            Self::Rgb565 => Some(1),
            Self::Argb8888 => Some(2),
            Self::Rgb888 => Some(3),
            Self::Indexed8 | Self::Gray8 => None,
        }
    }

    /// Whether `self` → `dst` is in the conversion matrix.
    pub const fn can_convert_to(self, dst: PixelFormat) -> bool {
        self.matrix_index().is_some() && dst.matrix_index().is_some()
    }
}
