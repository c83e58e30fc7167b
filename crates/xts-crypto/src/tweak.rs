//! XTS tweak generation.
//!
//! The tweak for block j of data unit (sector) s is
//! T_{s,j} = E_K2(encode(s)) * alpha^j over GF(2^128), where encode() is the
//! 16-byte little-endian encoding of the sector index and alpha is the
//! element 0x02. Two forms are provided: a stateless generator that computes
//! T_{s,j} for arbitrary coordinates, and a stateful iterator that walks the
//! tweak sequence one block at a time, rolling over at sector boundaries.

use crate::aes::{AesEcb, AES_BLOCK_SIZE};
use crate::gf128;
use xts_types::CryptoError;
use zeroize::Zeroize;

/// Encode a 64-bit sector index as 16 little-endian bytes (zero-extended).
fn encode_sector(sector: u64) -> [u8; AES_BLOCK_SIZE] {
    let mut out = [0u8; AES_BLOCK_SIZE];
    out[..8].copy_from_slice(&sector.to_le_bytes());
    out
}

/// Increment a 128-bit little-endian sector index in place.
fn increment_sector(bytes: &mut [u8; AES_BLOCK_SIZE]) {
    for b in bytes.iter_mut() {
        *b = b.wrapping_add(1);
        if *b != 0 {
            break;
        }
    }
}

/// Stateless tweak generator.
///
/// Holds only the K2-keyed AES context; every call recomputes the tweak
/// from scratch. Matches [`TweakIterator`] at the same coordinates.
pub struct TweakGenerator {
    aes: AesEcb,
}

impl TweakGenerator {
    /// Create a generator keyed with the tweak key K2 (16 or 32 bytes).
    pub fn new(key2: &[u8]) -> Result<Self, CryptoError> {
        Ok(Self {
            aes: AesEcb::new(key2)?,
        })
    }

    /// Compute T_{sector, block} for a 64-bit sector index.
    pub fn compute(&self, sector: u64, block: u64) -> [u8; AES_BLOCK_SIZE] {
        self.compute_raw(&encode_sector(sector), block)
    }

    /// Compute T_{sector, block} for a raw 128-bit little-endian sector
    /// index. Produces the same tweak as [`compute`](Self::compute) when the
    /// numeric values match.
    pub fn compute_raw(&self, sector: &[u8; AES_BLOCK_SIZE], block: u64) -> [u8; AES_BLOCK_SIZE] {
        let mut tweak = *sector;
        self.aes.encrypt_block(&mut tweak);
        gf128::advance(&mut tweak, block);
        tweak
    }
}

/// Stateful tweak iterator.
///
/// Tracks (sector, block) coordinates and keeps `current() ==
/// T_{sector, block}` at every observable moment. Advancing off the last
/// block of a sector recomputes the next sector's starting tweak; tweaks
/// never cross a sector boundary multiplicatively, since each sector begins
/// its own alpha^0 = E_K2(sector).
pub struct TweakIterator {
    aes: AesEcb,
    sector_size: u64,
    blocks_per_sector: u64,
    sector_bytes: [u8; AES_BLOCK_SIZE],
    block: u64,
    tweak: [u8; AES_BLOCK_SIZE],
}

impl Drop for TweakIterator {
    fn drop(&mut self) {
        self.tweak.zeroize();
    }
}

impl TweakIterator {
    /// Create an iterator keyed with K2, positioned at
    /// (start_sector, start_block) of a `sector_size`-byte sector layout.
    pub fn new(
        key2: &[u8],
        sector_size: u64,
        start_sector: u64,
        start_block: u64,
    ) -> Result<Self, CryptoError> {
        let mut iter = Self {
            aes: AesEcb::new(key2)?,
            sector_size: 0,
            blocks_per_sector: 0,
            sector_bytes: [0u8; AES_BLOCK_SIZE],
            block: 0,
            tweak: [0u8; AES_BLOCK_SIZE],
        };
        iter.reset(sector_size, start_sector, start_block)?;
        Ok(iter)
    }

    /// Reposition the iterator, revalidating the sector layout.
    ///
    /// `sector_size` is in bytes, at least 16 and not necessarily a multiple
    /// of 16; a trailing partial block still occupies a tweak slot.
    pub fn reset(
        &mut self,
        sector_size: u64,
        start_sector: u64,
        start_block: u64,
    ) -> Result<(), CryptoError> {
        self.reset_raw(sector_size, &encode_sector(start_sector), start_block)
    }

    /// Reposition at a raw 128-bit little-endian sector index.
    pub fn reset_raw(
        &mut self,
        sector_size: u64,
        start_sector: &[u8; AES_BLOCK_SIZE],
        start_block: u64,
    ) -> Result<(), CryptoError> {
        if sector_size < AES_BLOCK_SIZE as u64 {
            return Err(CryptoError::InvalidArg);
        }
        let blocks_per_sector = sector_size.div_ceil(AES_BLOCK_SIZE as u64);
        if start_block >= blocks_per_sector {
            return Err(CryptoError::OutOfRange);
        }

        self.sector_size = sector_size;
        self.blocks_per_sector = blocks_per_sector;
        self.sector_bytes = *start_sector;
        self.block = start_block;
        self.seed_sector_tweak();
        gf128::advance(&mut self.tweak, start_block);
        Ok(())
    }

    /// Rewind to (sector, 0) keeping the validated sector layout.
    pub(crate) fn rewind_start(&mut self, sector: u64) {
        self.sector_bytes = encode_sector(sector);
        self.block = 0;
        self.seed_sector_tweak();
    }

    /// Read-only view of the current tweak.
    pub fn current(&self) -> &[u8; AES_BLOCK_SIZE] {
        &self.tweak
    }

    /// Step to the next block, rolling over at the sector boundary.
    pub fn advance(&mut self) {
        self.block += 1;
        if self.block == self.blocks_per_sector {
            self.block = 0;
            increment_sector(&mut self.sector_bytes);
            self.seed_sector_tweak();
        } else {
            gf128::double(&mut self.tweak);
        }
    }

    /// Copy the current tweak into `out`, then advance.
    pub fn take_and_advance(&mut self, out: &mut [u8; AES_BLOCK_SIZE]) {
        out.copy_from_slice(&self.tweak);
        self.advance();
    }

    /// Current sector index (low 64 bits of the 128-bit counter).
    pub fn sector(&self) -> u64 {
        let mut low = [0u8; 8];
        low.copy_from_slice(&self.sector_bytes[..8]);
        u64::from_le_bytes(low)
    }

    /// Current block index within the sector.
    pub fn block(&self) -> u64 {
        self.block
    }

    /// Number of 16-byte tweak slots per sector: ceil(sector_size / 16).
    pub fn blocks_per_sector(&self) -> u64 {
        self.blocks_per_sector
    }

    /// Configured sector size in bytes.
    pub fn sector_size(&self) -> u64 {
        self.sector_size
    }

    /// Wipe the tweak buffer ahead of disposal.
    pub(crate) fn wipe(&mut self) {
        self.tweak.zeroize();
    }

    fn seed_sector_tweak(&mut self) {
        self.tweak.copy_from_slice(&self.sector_bytes);
        self.aes.encrypt_block(&mut self.tweak);
    }
}
