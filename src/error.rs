//! Errors raised by caller misuse of the encoder/decoder API.
//!
//! `DecodeFailure` (too many errors to correct) is not among these: it is the expected,
//! frequent outcome of a noisy channel, surfaced as `Option::None`/`false` at the
//! `ReedSolomon` boundary rather than a `thiserror` variant, so that callers aren't
//! forced into exception-style control flow for an everyday result.

use thiserror::Error;

/// Raised for malformed input at the encode/decode boundary.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum EncodeError {
    /// A message or codeword buffer did not have the length the code dimensions
    /// require.
    #[error("expected buffer of length {expected}, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    /// A symbol value did not fit in the code's field (`>= 2^m`).
    #[error("symbol value {value} does not fit in GF(2^{m})")]
    SymbolOutOfRange { value: u16, m: u32 },
}
