//! A Reed-Solomon forward-error-correction engine over GF(2^m).
//!
//! The canonical configuration is [`params::Rs15_9`], an RS(15, 9) code over GF(2^4)
//! correcting up to 3 symbol errors. Other symbol widths and correction capacities can
//! be declared with [`define_code!`] and plugged into the same [`codec::ReedSolomon`]
//! engine.
//!
//! ```
//! use reed_solomon_codec::codec::ReedSolomon;
//! use reed_solomon_codec::params::Rs15_9;
//!
//! let rs: ReedSolomon<Rs15_9> = ReedSolomon::new();
//! let message: [u16; 9] = [6, 15, 8, 9, 8, 3, 0, 0, 5];
//! let mut codeword = rs.encode(&message);
//!
//! codeword[2] ^= 0x7; // corrupt one symbol
//! let recovered = rs.decode(&codeword).expect("one error is within capacity");
//! assert_eq!(recovered, message);
//! ```

pub mod codec;
pub mod decoder;
pub mod error;
pub mod field;
pub mod generator;
pub mod params;
pub mod poly;

pub use codec::ReedSolomon;
pub use error::EncodeError;
pub use params::{CodeParams, Rs15_9};
