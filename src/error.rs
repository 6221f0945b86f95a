//! Errors produced while loading a serialized cache.

use thiserror::Error;

/// Everything that can go wrong turning bytes back into a [`crate::BddCache`].
///
/// These are all recoverable: malformed input from an untrusted source
/// should produce one of these, never a panic. Precondition violations on
/// already-validated in-memory state (e.g. passing a nonterminal id to
/// [`crate::BddCache::terminal_value`]) are a separate concern, guarded by
/// `cfg!(shields_up)` instead.
#[derive(Debug, Error)]
pub enum BddError {
    #[error("bad magic bytes in header")]
    BadMagic,

    #[error("unsupported format version {0}")]
    UnsupportedVersion(u16),

    #[error("header declares length {declared} but input has {actual} bytes")]
    LengthMismatch { declared: u64, actual: u64 },

    #[error("node record references out-of-range id {0}")]
    DanglingReference(i32),

    #[error("input truncated: expected at least {0} more bytes")]
    Truncated(u32),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
