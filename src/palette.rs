//! Lookup tables for 8-bit indexed sources.
//!
//! Each slot holds a destination color already encoded as a packed
//! `0xAARRGGBB` integer in the converter's byte order. The 32-bit adapter
//! copies slots verbatim; the 24-bit adapter decodes them.

use crate::{ByteOrder, SizeError};

/// Number of slots in a [`Palette`].
pub const PALETTE_LEN: usize = 256;

/// One pre-encoded palette slot.
pub type PaletteEntry = [u8; 4];

/// A 256-entry color table, addressed by an 8-bit index.
///
/// Built and owned by the caller; conversions only borrow it.
#[derive(Clone, Copy, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(transparent)]
pub struct Palette([PaletteEntry; PALETTE_LEN]);

impl Palette {
    /// Wrap a full table of encoded entries.
    pub const fn new(entries: [PaletteEntry; PALETTE_LEN]) -> Self {
        Self(entries)
    }

    /// Copy up to 256 encoded entries. Missing slots are zero.
    pub fn from_entries(entries: &[PaletteEntry]) -> Result<Self, SizeError> {
        if entries.len() > PALETTE_LEN {
            return Err(SizeError::PixelCountMismatch);
        }
        let mut table = [[0u8; 4]; PALETTE_LEN];
        table[..entries.len()].copy_from_slice(entries);
        Ok(Self(table))
    }

    /// Encode up to 256 `0xAARRGGBB` colors in `order`. Missing slots are zero.
    pub fn from_argb(colors: &[u32], order: ByteOrder) -> Result<Self, SizeError> {
        if colors.len() > PALETTE_LEN {
            return Err(SizeError::PixelCountMismatch);
        }
        let mut table = [[0u8; 4]; PALETTE_LEN];
        for (&c, slot) in colors.iter().zip(table.iter_mut()) {
            order.store_u32(c, slot);
        }
        Ok(Self(table))
    }

    /// Borrow a 1024-byte encoded table as a palette without copying.
    ///
    /// A length that splits an entry is [`SizeError::NotPixelAligned`]; any
    /// other length but 1024 is [`SizeError::PixelCountMismatch`].
    pub fn from_bytes(bytes: &[u8]) -> Result<&Self, SizeError> {
        if bytes.len() % 4 != 0 {
            return Err(SizeError::NotPixelAligned);
        }
        bytemuck::try_from_bytes(bytes).map_err(|_| SizeError::PixelCountMismatch)
    }

    /// The encoded slot for `index`.
    #[inline(always)]
    pub fn entry(&self, index: u8) -> &PaletteEntry {
        &self.0[index as usize]
    }

    /// All 256 slots.
    pub fn entries(&self) -> &[PaletteEntry; PALETTE_LEN] {
        &self.0
    }

    /// The table as raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl core::fmt::Debug for Palette {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Palette").finish_non_exhaustive()
    }
}
