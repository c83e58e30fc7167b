//! AES-ECB block primitive consumed by the XTS core.
//!
//! XTS uses AES strictly as a single-block transform under a fixed key.
//! The block function is delegated to the RustCrypto `aes` crate (which
//! selects AES-NI / NEON through `cpufeatures`); this wrapper fixes the
//! key size at construction and exposes the 16-byte contract the rest of
//! the crate works in.

use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::{Aes128, Aes256};
use xts_types::CryptoError;

/// AES block size in bytes (128 bits).
pub const AES_BLOCK_SIZE: usize = 16;

/// An AES-ECB context with the key size fixed at construction.
///
/// XTS is defined for AES-128 and AES-256 only; 24-byte keys are rejected.
pub struct AesEcb(Inner);

enum Inner {
    Aes128(Aes128),
    Aes256(Aes256),
}

impl AesEcb {
    /// Create a new context from a 16- or 32-byte key.
    pub fn new(key: &[u8]) -> Result<Self, CryptoError> {
        match key.len() {
            16 => Ok(Self(Inner::Aes128(Aes128::new(GenericArray::from_slice(
                key,
            ))))),
            32 => Ok(Self(Inner::Aes256(Aes256::new(GenericArray::from_slice(
                key,
            ))))),
            _ => Err(CryptoError::InvalidKey),
        }
    }

    /// Encrypt a single 16-byte block in place.
    pub fn encrypt_block(&self, block: &mut [u8; AES_BLOCK_SIZE]) {
        let block = GenericArray::from_mut_slice(block);
        match &self.0 {
            Inner::Aes128(c) => c.encrypt_block(block),
            Inner::Aes256(c) => c.encrypt_block(block),
        }
    }

    /// Decrypt a single 16-byte block in place.
    pub fn decrypt_block(&self, block: &mut [u8; AES_BLOCK_SIZE]) {
        let block = GenericArray::from_mut_slice(block);
        match &self.0 {
            Inner::Aes128(c) => c.decrypt_block(block),
            Inner::Aes256(c) => c.decrypt_block(block),
        }
    }

    /// Return the key length in bytes.
    pub fn key_len(&self) -> usize {
        match &self.0 {
            Inner::Aes128(_) => 16,
            Inner::Aes256(_) => 32,
        }
    }
}
