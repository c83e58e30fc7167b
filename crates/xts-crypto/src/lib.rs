#![forbid(unsafe_code)]
#![doc = "XTS-AES (IEEE P1619 / NIST SP 800-38E) buffered streaming cipher."]

pub mod aes;
pub mod gf128;
pub mod tweak;
pub mod xts;

pub use xts::{xts_decrypt, xts_encrypt, Direction, XtsCipher, XtsMode, XtsParams};
