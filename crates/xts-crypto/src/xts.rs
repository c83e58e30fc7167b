//! XTS (XEX-based Tweaked-codebook mode with ciphertext Stealing).
//!
//! Implements the IEEE P1619 / NIST SP 800-38E disk-encryption mode as a
//! buffered streaming cipher: callers submit arbitrarily fragmented input
//! through [`XtsCipher::process`], and the cipher holds back the final 16
//! to 31 bytes so the last two blocks are always available for ciphertext
//! stealing at [`XtsCipher::finalize`]. Output is bit-exact against the
//! IEEE P1619 / NIST XTSVS reference vectors for AES-128 and AES-256.
//!
//! XTS provides no authentication; pair it with a MAC where integrity is
//! required.

use crate::aes::{AesEcb, AES_BLOCK_SIZE};
use crate::gf128::xor_block;
use crate::tweak::TweakIterator;
use xts_types::CryptoError;
use zeroize::{Zeroize, Zeroizing};

/// Most bytes ever held between calls: two blocks minus one byte.
const MAX_PENDING: usize = 2 * AES_BLOCK_SIZE - 1;

/// Transform direction, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// Sector handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XtsMode {
    /// The stream traverses many sectors; the tweak rolls over at each
    /// sector boundary and no per-sector length check applies.
    Continuous,
    /// One data unit per lifecycle: submitting more than `sector_size`
    /// bytes between resets is an error.
    Independent,
}

/// Cipher construction parameters.
///
/// Both keys must be 16 or 32 bytes (AES-128 / AES-256); `key1` encrypts
/// data and `key2` generates tweaks. For full XTS security the two keys
/// should be distinct. `sector_size` is in bytes, at least 16, and need not
/// be a multiple of 16.
pub struct XtsParams<'a> {
    pub mode: XtsMode,
    pub key1: &'a [u8],
    pub key2: &'a [u8],
    pub sector_size: u64,
    pub start_sector: u64,
}

/// Buffered XTS-AES streaming cipher.
///
/// A full lifecycle is any number of `process` calls followed by one
/// `finalize`, which emits the ciphertext-stolen tail and resets the cipher
/// to its configured start for reuse. Instances are single-threaded;
/// separate instances share no state.
pub struct XtsCipher {
    direction: Direction,
    mode: XtsMode,
    aes: AesEcb,
    tweaks: TweakIterator,
    start_sector: u64,
    pending: [u8; MAX_PENDING],
    pending_len: usize,
    /// Logical bytes submitted this sector, buffered bytes included
    /// (Independent mode only).
    sector_bytes_used: u64,
    disposed: bool,
}

impl Drop for XtsCipher {
    fn drop(&mut self) {
        self.pending.zeroize();
    }
}

impl XtsCipher {
    /// Create a cipher with the transform direction fixed.
    pub fn new(direction: Direction, params: &XtsParams<'_>) -> Result<Self, CryptoError> {
        Ok(Self {
            direction,
            mode: params.mode,
            aes: AesEcb::new(params.key1)?,
            tweaks: TweakIterator::new(params.key2, params.sector_size, params.start_sector, 0)?,
            start_sector: params.start_sector,
            pending: [0u8; MAX_PENDING],
            pending_len: 0,
            sector_bytes_used: 0,
            disposed: false,
        })
    }

    /// The cipher block size: always 16.
    pub fn block_size(&self) -> usize {
        AES_BLOCK_SIZE
    }

    /// Algorithm identifier.
    pub fn algorithm_name(&self) -> &'static str {
        "AES/XTS"
    }

    /// Read-only view of the running tweak.
    ///
    /// After [`dispose`](Self::dispose) this reads as all zeros.
    pub fn tweak(&self) -> &[u8; AES_BLOCK_SIZE] {
        self.tweaks.current()
    }

    /// Submit input, writing any releasable ciphertext to `output`.
    ///
    /// Emits `16 * k` bytes where `k` leaves at least 16 and at most 31
    /// bytes buffered for the final call; the exact count is
    /// [`predict_update_len`](Self::predict_update_len). Returns the number
    /// of bytes written. All validation happens before any state changes.
    pub fn process(&mut self, input: &[u8], output: &mut [u8]) -> Result<usize, CryptoError> {
        self.check_live()?;
        self.check_budget(input.len() as u64)?;

        let total = self.pending_len + input.len();
        if total <= MAX_PENDING {
            self.pending[self.pending_len..total].copy_from_slice(input);
            self.pending_len = total;
            self.note_consumed(input.len());
            return Ok(0);
        }

        let emit_blocks = total / AES_BLOCK_SIZE - 1;
        let emit_len = emit_blocks * AES_BLOCK_SIZE;
        if output.len() < emit_len {
            return Err(CryptoError::BufferTooSmall {
                need: emit_len,
                got: output.len(),
            });
        }

        let held = Zeroizing::new(self.pending);
        let held_len = self.pending_len;

        let mut block = Zeroizing::new([0u8; AES_BLOCK_SIZE]);
        for k in 0..emit_blocks {
            copy_concat(&held[..held_len], input, k * AES_BLOCK_SIZE, &mut block[..]);
            self.transform_block(&mut block);
            output[k * AES_BLOCK_SIZE..(k + 1) * AES_BLOCK_SIZE].copy_from_slice(&block[..]);
        }

        // The unconsumed 16..=31-byte tail becomes the new pending buffer.
        let tail_len = total - emit_len;
        let mut tail = Zeroizing::new([0u8; MAX_PENDING]);
        copy_concat(&held[..held_len], input, emit_len, &mut tail[..tail_len]);
        self.pending.zeroize();
        self.pending[..tail_len].copy_from_slice(&tail[..tail_len]);
        self.pending_len = tail_len;

        self.note_consumed(input.len());
        Ok(emit_len)
    }

    /// Single-byte variant of [`process`](Self::process).
    pub fn process_byte(&mut self, input: u8, output: &mut [u8]) -> Result<usize, CryptoError> {
        self.process(&[input], output)
    }

    /// Emit the remainder of the data unit and reset for reuse.
    ///
    /// Writes zero bytes if nothing is pending, one block if exactly 16
    /// bytes remain, or the ciphertext-stolen tail otherwise; trailing
    /// `input` is accepted as a final fragment. A remainder shorter than
    /// one block is rejected (XTS is undefined below 16 bytes), as is a
    /// ciphertext-stealing pair that would straddle a sector boundary in
    /// Continuous mode. On success the cipher returns to its configured
    /// start sector with an empty buffer.
    pub fn finalize(&mut self, input: &[u8], output: &mut [u8]) -> Result<usize, CryptoError> {
        self.check_live()?;
        self.check_budget(input.len() as u64)?;

        let total = self.pending_len + input.len();
        if total == 0 {
            self.reset_internal();
            return Ok(0);
        }
        if total < AES_BLOCK_SIZE {
            return Err(CryptoError::InvalidArg);
        }

        let full_blocks = total / AES_BLOCK_SIZE;
        let tail_len = total % AES_BLOCK_SIZE;

        if tail_len != 0 && self.mode == XtsMode::Continuous {
            // The stealing pair must sit inside one data unit: reject when
            // the second-to-last block lands on the last slot of a sector.
            let bps = self.tweaks.blocks_per_sector();
            let last_full = self.tweaks.block() + full_blocks as u64 - 1;
            if last_full % bps == bps - 1 {
                return Err(CryptoError::InvalidArg);
            }
        }

        if output.len() < total {
            return Err(CryptoError::BufferTooSmall {
                need: total,
                got: output.len(),
            });
        }

        let held = Zeroizing::new(self.pending);
        let held_len = self.pending_len;

        let mut block = Zeroizing::new([0u8; AES_BLOCK_SIZE]);
        let plain_blocks = if tail_len == 0 {
            full_blocks
        } else {
            full_blocks - 1
        };
        for k in 0..plain_blocks {
            copy_concat(&held[..held_len], input, k * AES_BLOCK_SIZE, &mut block[..]);
            self.transform_block(&mut block);
            output[k * AES_BLOCK_SIZE..(k + 1) * AES_BLOCK_SIZE].copy_from_slice(&block[..]);
        }

        if tail_len != 0 {
            self.steal_tail(&held[..held_len], input, full_blocks, tail_len, output);
        }

        self.reset_internal();
        Ok(total)
    }

    /// Exact number of bytes [`process`](Self::process) would emit for `add`
    /// further input bytes, given the current buffer state.
    pub fn predict_update_len(&self, add: u64) -> Result<u64, CryptoError> {
        self.check_live()?;
        self.check_budget(add)?;

        let total = (self.pending_len as u64)
            .checked_add(add)
            .ok_or(CryptoError::InvalidState)?;
        let blocks = total / AES_BLOCK_SIZE as u64;
        Ok(if blocks == 0 {
            0
        } else {
            (blocks - 1) * AES_BLOCK_SIZE as u64
        })
    }

    /// Exact number of bytes [`finalize`](Self::finalize) would emit for
    /// `add` trailing input bytes. XTS preserves length, so this is the
    /// pending count plus `add`.
    pub fn predict_final_len(&self, add: u64) -> Result<u64, CryptoError> {
        self.check_live()?;
        self.check_budget(add)?;

        (self.pending_len as u64)
            .checked_add(add)
            .ok_or(CryptoError::InvalidState)
    }

    /// 32-bit variant of [`predict_update_len`](Self::predict_update_len);
    /// fails once the total no longer fits a signed 32-bit output length.
    pub fn predict_update_len32(&self, add: u32) -> Result<u32, CryptoError> {
        self.check_output_fits32(add)?;
        Ok(self.predict_update_len(add as u64)? as u32)
    }

    /// 32-bit variant of [`predict_final_len`](Self::predict_final_len).
    pub fn predict_final_len32(&self, add: u32) -> Result<u32, CryptoError> {
        self.check_output_fits32(add)?;
        Ok(self.predict_final_len(add as u64)? as u32)
    }

    /// Drop any buffered input and return to the configured start sector.
    pub fn reset(&mut self) -> Result<(), CryptoError> {
        self.check_live()?;
        self.reset_internal();
        Ok(())
    }

    /// Wipe key-dependent state and retire the instance.
    ///
    /// The pending buffer and the running tweak are zeroized; every later
    /// operation fails with `InvalidState`. Dropping the cipher performs
    /// the same wipe.
    pub fn dispose(&mut self) {
        self.pending.zeroize();
        self.pending_len = 0;
        self.sector_bytes_used = 0;
        self.tweaks.wipe();
        self.disposed = true;
    }

    // ── internals ──

    fn check_live(&self) -> Result<(), CryptoError> {
        if self.disposed {
            return Err(CryptoError::InvalidState);
        }
        Ok(())
    }

    /// Independent mode bounds every lifecycle to one sector; the count
    /// includes bytes still sitting in the pending buffer.
    fn check_budget(&self, add: u64) -> Result<(), CryptoError> {
        if self.mode == XtsMode::Independent {
            let total = self
                .sector_bytes_used
                .checked_add(add)
                .ok_or(CryptoError::InvalidState)?;
            if total > self.tweaks.sector_size() {
                return Err(CryptoError::InvalidState);
            }
        }
        Ok(())
    }

    fn check_output_fits32(&self, add: u32) -> Result<(), CryptoError> {
        self.check_live()?;
        let total = self.pending_len as u64 + add as u64;
        if total > i32::MAX as u64 {
            return Err(CryptoError::InvalidState);
        }
        Ok(())
    }

    fn note_consumed(&mut self, len: usize) {
        if self.mode == XtsMode::Independent {
            self.sector_bytes_used += len as u64;
        }
    }

    /// Apply the XTS block transform in place and step the tweak:
    /// C = E_K1(P xor T) xor T, or the decrypting mirror.
    fn transform_block(&mut self, block: &mut [u8; AES_BLOCK_SIZE]) {
        xor_block(block, self.tweaks.current());
        match self.direction {
            Direction::Encrypt => self.aes.encrypt_block(block),
            Direction::Decrypt => self.aes.decrypt_block(block),
        }
        xor_block(block, self.tweaks.current());
        self.tweaks.advance();
    }

    /// Ciphertext stealing over the last full block and the `tail_len`-byte
    /// fragment (IEEE P1619 5.3.2 / 5.4.2). `full_blocks` counts the full
    /// blocks in `held || input`, the last of which is the stealing partner.
    fn steal_tail(
        &mut self,
        held: &[u8],
        input: &[u8],
        full_blocks: usize,
        tail_len: usize,
        output: &mut [u8],
    ) {
        let out_off = (full_blocks - 1) * AES_BLOCK_SIZE;

        let mut first = Zeroizing::new([0u8; AES_BLOCK_SIZE]);
        copy_concat(held, input, out_off, &mut first[..]);
        let mut frag = Zeroizing::new([0u8; AES_BLOCK_SIZE]);
        copy_concat(held, input, full_blocks * AES_BLOCK_SIZE, &mut frag[..tail_len]);

        let mut t1 = Zeroizing::new([0u8; AES_BLOCK_SIZE]);
        self.tweaks.take_and_advance(&mut t1);
        let mut t2 = Zeroizing::new([0u8; AES_BLOCK_SIZE]);
        self.tweaks.take_and_advance(&mut t2);

        let mut last = Zeroizing::new([0u8; AES_BLOCK_SIZE]);
        match self.direction {
            Direction::Encrypt => {
                // CC = E(P_{n-1} xor T_{n-1}) xor T_{n-1}
                xor_block(&mut first, &t1);
                self.aes.encrypt_block(&mut first);
                xor_block(&mut first, &t1);
                // C_n is the head of CC; its tail is stolen to pad P_n
                last[..tail_len].copy_from_slice(&frag[..tail_len]);
                last[tail_len..].copy_from_slice(&first[tail_len..]);
                output[out_off + AES_BLOCK_SIZE..out_off + AES_BLOCK_SIZE + tail_len]
                    .copy_from_slice(&first[..tail_len]);
                // C_{n-1} = E(P'_n xor T_n) xor T_n
                xor_block(&mut last, &t2);
                self.aes.encrypt_block(&mut last);
                xor_block(&mut last, &t2);
                output[out_off..out_off + AES_BLOCK_SIZE].copy_from_slice(&last[..]);
            }
            Direction::Decrypt => {
                // PP = D(C_{n-1} xor T_n) xor T_n
                xor_block(&mut first, &t2);
                self.aes.decrypt_block(&mut first);
                xor_block(&mut first, &t2);
                // P_n is the head of PP; its tail completes CC'
                last[..tail_len].copy_from_slice(&frag[..tail_len]);
                last[tail_len..].copy_from_slice(&first[tail_len..]);
                output[out_off + AES_BLOCK_SIZE..out_off + AES_BLOCK_SIZE + tail_len]
                    .copy_from_slice(&first[..tail_len]);
                // P_{n-1} = D(CC' xor T_{n-1}) xor T_{n-1}
                xor_block(&mut last, &t1);
                self.aes.decrypt_block(&mut last);
                xor_block(&mut last, &t1);
                output[out_off..out_off + AES_BLOCK_SIZE].copy_from_slice(&last[..]);
            }
        }
    }

    fn reset_internal(&mut self) {
        self.pending.zeroize();
        self.pending_len = 0;
        self.sector_bytes_used = 0;
        self.tweaks.rewind_start(self.start_sector);
    }
}

/// Copy `dst.len()` bytes starting at logical `offset` of `first || second`.
fn copy_concat(first: &[u8], second: &[u8], offset: usize, dst: &mut [u8]) {
    for (i, d) in dst.iter_mut().enumerate() {
        let pos = offset + i;
        *d = if pos < first.len() {
            first[pos]
        } else {
            second[pos - first.len()]
        };
    }
}

/// Encrypt one data unit with XTS-AES.
///
/// Convenience wrapper over [`XtsCipher`] for whole-unit callers: `sector`
/// is the data unit sequence number and `plaintext` (at least 16 bytes) is
/// the complete unit. Output length equals input length.
pub fn xts_encrypt(
    key1: &[u8],
    key2: &[u8],
    sector: u64,
    plaintext: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    xts_crypt_unit(Direction::Encrypt, key1, key2, sector, plaintext)
}

/// Decrypt one data unit with XTS-AES.
pub fn xts_decrypt(
    key1: &[u8],
    key2: &[u8],
    sector: u64,
    ciphertext: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    xts_crypt_unit(Direction::Decrypt, key1, key2, sector, ciphertext)
}

fn xts_crypt_unit(
    direction: Direction,
    key1: &[u8],
    key2: &[u8],
    sector: u64,
    data: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    if data.len() < AES_BLOCK_SIZE {
        return Err(CryptoError::InvalidArg);
    }
    let mut cipher = XtsCipher::new(
        direction,
        &XtsParams {
            mode: XtsMode::Independent,
            key1,
            key2,
            sector_size: data.len() as u64,
            start_sector: sector,
        },
    )?;

    let mut out = vec![0u8; data.len()];
    let written = cipher.process(data, &mut out)?;
    cipher.finalize(&[], &mut out[written..])?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY1: [u8; 16] = [0x11; 16];
    const KEY2: [u8; 16] = [0x22; 16];

    fn encryptor(mode: XtsMode, sector_size: u64) -> XtsCipher {
        XtsCipher::new(
            Direction::Encrypt,
            &XtsParams {
                mode,
                key1: &KEY1,
                key2: &KEY2,
                sector_size,
                start_sector: 0,
            },
        )
        .unwrap()
    }

    #[test]
    fn buffering_holds_back_final_blocks() {
        let mut c = encryptor(XtsMode::Continuous, 512);
        let mut out = [0u8; 64];

        // 31 bytes fit entirely in the pending buffer
        assert_eq!(c.process(&[0xaa; 31], &mut out).unwrap(), 0);
        // the 32nd byte releases exactly one block
        assert_eq!(c.process_byte(0xaa, &mut out).unwrap(), 16);
        // 16 bytes stay behind for the final call
        assert_eq!(c.predict_final_len(0).unwrap(), 16);
    }

    #[test]
    fn predict_update_matches_process() {
        let mut c = encryptor(XtsMode::Continuous, 512);
        let mut out = [0u8; 256];
        for chunk_len in [0usize, 1, 15, 16, 17, 31, 32, 33, 47, 48, 100] {
            let predicted = c.predict_update_len(chunk_len as u64).unwrap();
            let written = c.process(&vec![0x5a; chunk_len], &mut out).unwrap();
            assert_eq!(written as u64, predicted, "chunk {chunk_len}");
        }
    }

    #[test]
    fn predict_final_matches_finalize() {
        let mut c = encryptor(XtsMode::Continuous, 512);
        let mut out = [0u8; 64];
        c.process(&[0x5a; 40], &mut out).unwrap();

        let predicted = c.predict_final_len(5).unwrap();
        let mut fin = [0u8; 64];
        let written = c.finalize(&[0x5a; 5], &mut fin).unwrap();
        assert_eq!(written as u64, predicted);
    }

    #[test]
    fn finalize_auto_resets() {
        let mut c = encryptor(XtsMode::Continuous, 512);
        let mut out = [0u8; 64];
        c.process(&[1; 20], &mut out).unwrap();
        c.finalize(&[], &mut out).unwrap();
        assert_eq!(c.predict_final_len(0).unwrap(), 0);

        // after the reset a second unit encrypts exactly like a fresh cipher
        let data = [7u8; 48];
        let mut again = [0u8; 48];
        let n = c.process(&data, &mut again).unwrap();
        c.finalize(&[], &mut again[n..]).unwrap();

        let mut c2 = encryptor(XtsMode::Continuous, 512);
        let mut fresh = [0u8; 48];
        let n2 = c2.process(&data, &mut fresh).unwrap();
        c2.finalize(&[], &mut fresh[n2..]).unwrap();
        assert_eq!(again, fresh);
    }

    #[test]
    fn independent_budget_enforced() {
        let mut c = encryptor(XtsMode::Independent, 32);
        let mut out = [0u8; 64];
        assert_eq!(c.process(&[0x42; 32], &mut out).unwrap(), 16);

        // one more byte exceeds the sector and must not disturb state
        assert!(matches!(
            c.process(&[0x42], &mut out),
            Err(CryptoError::InvalidState)
        ));
        assert!(matches!(
            c.predict_update_len(1),
            Err(CryptoError::InvalidState)
        ));

        let mut fin = [0u8; 32];
        assert_eq!(c.finalize(&[], &mut fin).unwrap(), 16);
    }

    #[test]
    fn cts_at_sector_boundary_rejected() {
        let mut c = encryptor(XtsMode::Continuous, 32);
        let mut out = [0u8; 64];
        assert_eq!(c.process(&[0x37; 33], &mut out).unwrap(), 16);

        // 17 bytes remain; the stealing pair would straddle sectors 0 and 1
        assert!(matches!(
            c.finalize(&[], &mut out),
            Err(CryptoError::InvalidArg)
        ));

        // padding the unit to a block boundary clears the condition
        let mut fin = [0u8; 32];
        assert_eq!(c.finalize(&[0x37; 15], &mut fin).unwrap(), 32);
    }

    #[test]
    fn finalize_rejects_short_data_unit() {
        let mut c = encryptor(XtsMode::Continuous, 512);
        let mut out = [0u8; 32];
        c.process(&[1, 2, 3], &mut out).unwrap();
        assert!(matches!(
            c.finalize(&[4, 5], &mut out),
            Err(CryptoError::InvalidArg)
        ));
    }

    #[test]
    fn output_capacity_checked_before_mutation() {
        let data = [0x99u8; 32];

        let mut c = encryptor(XtsMode::Continuous, 512);
        let mut small = [0u8; 8];
        assert!(matches!(
            c.process(&data, &mut small),
            Err(CryptoError::BufferTooSmall { need: 16, got: 8 })
        ));

        // the failed call must not have consumed anything
        let mut out = [0u8; 32];
        let n = c.process(&data, &mut out).unwrap();
        c.finalize(&[], &mut out[n..]).unwrap();

        let mut c2 = encryptor(XtsMode::Continuous, 512);
        let mut fresh = [0u8; 32];
        let n2 = c2.process(&data, &mut fresh).unwrap();
        c2.finalize(&[], &mut fresh[n2..]).unwrap();
        assert_eq!(out, fresh);
    }

    #[test]
    fn finalize_output_capacity_checked() {
        let mut c = encryptor(XtsMode::Continuous, 512);
        let mut out = [0u8; 32];
        c.process(&[0x12; 20], &mut out).unwrap();
        let mut small = [0u8; 19];
        assert!(matches!(
            c.finalize(&[], &mut small),
            Err(CryptoError::BufferTooSmall { need: 20, got: 19 })
        ));
        // state intact: the unit can still be finished
        assert_eq!(c.finalize(&[], &mut out).unwrap(), 20);
    }

    #[test]
    fn predict_len32_overflow_rejected() {
        let mut c = encryptor(XtsMode::Continuous, 512);
        let mut out = [0u8; 16];
        c.process(&[1], &mut out).unwrap();

        assert!(matches!(
            c.predict_update_len32(u32::MAX),
            Err(CryptoError::InvalidState)
        ));
        assert!(matches!(
            c.predict_final_len32(i32::MAX as u32),
            Err(CryptoError::InvalidState)
        ));
        assert_eq!(c.predict_final_len32(19).unwrap(), 20);
    }

    #[test]
    fn dispose_wipes_and_retires() {
        let mut c = encryptor(XtsMode::Continuous, 512);
        let mut out = [0u8; 32];
        c.process(&[0xfe; 20], &mut out).unwrap();
        assert_ne!(*c.tweak(), [0u8; 16]);

        c.dispose();
        assert_eq!(*c.tweak(), [0u8; 16]);
        assert!(matches!(
            c.process(&[1], &mut out),
            Err(CryptoError::InvalidState)
        ));
        assert!(matches!(
            c.finalize(&[], &mut out),
            Err(CryptoError::InvalidState)
        ));
        assert!(matches!(c.reset(), Err(CryptoError::InvalidState)));
        assert!(matches!(
            c.predict_update_len(0),
            Err(CryptoError::InvalidState)
        ));
    }

    #[test]
    fn reset_returns_to_configured_start() {
        let data = [0x61u8; 50];

        let mut c = encryptor(XtsMode::Continuous, 512);
        let mut scratch = [0u8; 64];
        c.process(&data[..37], &mut scratch).unwrap();
        c.reset().unwrap();

        let mut out = [0u8; 50];
        let n = c.process(&data, &mut out).unwrap();
        c.finalize(&[], &mut out[n..]).unwrap();

        let mut c2 = encryptor(XtsMode::Continuous, 512);
        let mut fresh = [0u8; 50];
        let n2 = c2.process(&data, &mut fresh).unwrap();
        c2.finalize(&[], &mut fresh[n2..]).unwrap();
        assert_eq!(out, fresh);
    }

    #[test]
    fn metadata_accessors() {
        let c = encryptor(XtsMode::Continuous, 512);
        assert_eq!(c.block_size(), 16);
        assert_eq!(c.algorithm_name(), "AES/XTS");
    }

    #[test]
    fn one_shot_round_trip_lengths() {
        // cover the single block, the CTS range, and multi-block sizes
        for len in [16usize, 17, 23, 31, 32, 33, 48, 100, 512] {
            let pt: Vec<u8> = (0..len).map(|i| i as u8).collect();
            let ct = xts_encrypt(&KEY1, &KEY2, 42, &pt).unwrap();
            assert_eq!(ct.len(), len, "length must be preserved for {len}");
            assert_ne!(ct, pt);
            let back = xts_decrypt(&KEY1, &KEY2, 42, &ct).unwrap();
            assert_eq!(back, pt, "round trip failed for {len}");
        }
    }

    #[test]
    fn one_shot_rejects_short_unit() {
        assert!(xts_encrypt(&KEY1, &KEY2, 0, &[0u8; 15]).is_err());
        assert!(xts_decrypt(&KEY1, &KEY2, 0, &[0u8; 15]).is_err());
    }
}
