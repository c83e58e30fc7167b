/// Cryptographic operation errors.
#[derive(Debug, thiserror::Error)]
pub enum CryptoError {
    // General errors
    #[error("invalid argument")]
    InvalidArg,
    #[error("invalid key")]
    InvalidKey,

    // Buffer errors
    #[error("buffer length not enough: need {need}, got {got}")]
    BufferTooSmall { need: usize, got: usize },

    // Position errors
    #[error("index out of range")]
    OutOfRange,

    // Lifecycle errors
    #[error("invalid cipher state")]
    InvalidState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_simple_variants() {
        assert_eq!(CryptoError::InvalidArg.to_string(), "invalid argument");
        assert_eq!(CryptoError::InvalidKey.to_string(), "invalid key");
        assert_eq!(CryptoError::OutOfRange.to_string(), "index out of range");
        assert_eq!(
            CryptoError::InvalidState.to_string(),
            "invalid cipher state"
        );
    }

    #[test]
    fn test_error_structured_variants() {
        let e = CryptoError::BufferTooSmall { need: 32, got: 16 };
        assert_eq!(e.to_string(), "buffer length not enough: need 32, got 16");
    }

    #[test]
    fn test_error_debug_impl() {
        let e = CryptoError::BufferTooSmall { need: 10, got: 5 };
        let dbg = format!("{:?}", e);
        assert!(dbg.contains("BufferTooSmall"));
        assert!(dbg.contains("10"));
        assert!(dbg.contains("5"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CryptoError>();
    }
}
