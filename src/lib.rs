//! # texcvt
//!
//! Bit-exact pixel format conversions for texture pipelines.
//!
//! The crate transcodes raw image buffers between a closed catalogue of
//! encodings: 8-bit paletted or gray input, two 16-bit packed layouts
//! (ARGB1555 and RGB565), 24-bit sequential RGB, and 32-bit packed ARGB.
//! Output is byte-for-byte stable; conversions widen channels by shifting
//! (zero-padded low bits) and narrow by truncation.
//!
//! ## Memory families
//!
//! Two families of formats coexist and are easy to confuse:
//!
//! - **Sequential** formats store one byte per channel. [`PixelFormat::Rgb888`]
//!   is `[R, G, B]` in memory.
//! - **Packed** formats store each pixel as one integer. [`PixelFormat::Argb8888`]
//!   is `0xAARRGGBB`, which on a little-endian host is `[B, G, R, A]` in memory.
//!
//! Packed integers are read and written through a [`ByteOrder`] held by the
//! [`ColorConverter`]. [`ColorConverter::new`] uses the host byte order; use
//! [`ColorConverter::with_byte_order`] to process data for the other one.
//!
//! ## Entry points
//!
//! - Flat runs of `n` pixels: the per-pair methods such as
//!   [`ColorConverter::rgb888_to_argb8888`], or [`ColorConverter::convert_via`]
//!   with runtime [`PixelFormat`] tags (see [`can_convert`]).
//! - Whole images with line padding and vertical flip:
//!   [`ColorConverter::convert_8bit_to_24bit`] and friends, described by a
//!   [`RowLayout`].
//! - Nearest-neighbor resize into ARGB8888:
//!   [`ColorConverter::resize_argb1555_to_argb8888`].
//!
//! ```rust
//! use texcvt::{ColorConverter, PixelFormat};
//!
//! let cvt = ColorConverter::new();
//! let rgb = [10u8, 20, 30, 40, 50, 60];
//! let mut argb = [0u8; 8];
//! cvt.convert_via(&rgb, PixelFormat::Rgb888, 2, &mut argb, PixelFormat::Argb8888)
//!     .unwrap();
//! let first = u32::from_ne_bytes([argb[0], argb[1], argb[2], argb[3]]);
//! assert_eq!(first, 0xFF0A_141E);
//! ```
//!
//! ## Feature flags
//!
//! - **`rgb`**: type-safe wrappers over [`rgb`] pixel types and native
//!   `u16`/`u32` slices.
//! - **`imgref`**: whole-image conversions using [`imgref`] types
//!   (`ImgRef`, `ImgRefMut`, `ImgVec`). Implies `rgb`.

#![no_std]
#![forbid(unsafe_code)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

mod convert;
mod format;
mod matrix;
mod order;
mod palette;
mod resize;
mod surface;

pub use convert::ColorConverter;
pub use format::{Channel, MemoryFamily, PixelFormat};
pub use matrix::{ConvertFn, can_convert, converter};
pub use order::ByteOrder;
pub use palette::{PALETTE_LEN, Palette, PaletteEntry};
pub use surface::RowLayout;

#[cfg(feature = "rgb")]
pub mod typed_rgb;

#[cfg(feature = "imgref")]
pub mod imgref;

/// Buffer size or geometry does not match the requested conversion.
///
/// Every check runs before the first destination byte is written, so a
/// returned error leaves the destination untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum SizeError {
    /// Buffer length is not a whole number of pixels.
    #[error("buffer length is not a multiple of the pixel size")]
    NotPixelAligned,
    /// Source or destination holds fewer pixels than requested.
    #[error("buffer holds fewer pixels than requested")]
    PixelCountMismatch,
    /// Width, height and line padding describe more bytes than the buffer has.
    #[error("row geometry exceeds the buffer")]
    InvalidStride,
    /// Source and destination images have different dimensions.
    #[error("source and destination dimensions differ")]
    DimensionMismatch,
}
