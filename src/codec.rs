//! The public encoder/decoder engine tying the field, generator, and decode pipeline
//! together for one concrete `CodeParams` instantiation.

use std::marker::PhantomData;

use crate::decoder::{self, DecodeOutcome};
use crate::error::EncodeError;
use crate::field::Gf;
use crate::generator::generator;
use crate::params::CodeParams;
use crate::poly::Polynomial;

/// A Reed-Solomon encoder/decoder for one compile-time-fixed code `C`.
///
/// Once constructed, every field is immutable, so `ReedSolomon<C>` is `Send`+`Sync` and
/// `encode`/`decode`/`decode_in_place` allocate no heap memory: all scratch state lives
/// in fixed-size buffers sized from `C::N`/`C::T`.
pub struct ReedSolomon<C: CodeParams> {
    field: Gf,
    generator: Polynomial,
    _code: PhantomData<C>,
}

impl<C: CodeParams> ReedSolomon<C> {
    /// Build the engine for code `C`, constructing its field tables and generator
    /// polynomial once.
    pub fn new() -> ReedSolomon<C> {
        C::validate();
        let field = Gf::new(C::M);
        let generator = generator(&field, C::N - C::K);
        ReedSolomon { field, generator, _code: PhantomData }
    }

    /// Symbol width in bits.
    pub fn m(&self) -> u32 {
        C::M
    }

    /// Codeword length in symbols.
    pub fn n(&self) -> usize {
        C::N
    }

    /// Message length in symbols.
    pub fn k(&self) -> usize {
        C::K
    }

    /// Number of parity symbols, `N - K`.
    pub fn r(&self) -> usize {
        C::N - C::K
    }

    /// Encode a message into a systematic codeword: `codeword[0..K]` is an exact copy of
    /// `message`, and `codeword[K..N]` is the parity computed from
    /// `p(x) = (M(x)*x^r) mod g(x)`. Symbol `i` of both message and codeword is the
    /// coefficient of `x^i` (codeword[0] is the constant term of `C(x)`).
    pub fn encode(&self, message: &C::Message) -> C::Codeword {
        let msg = message.as_ref();
        debug_assert_eq!(msg.len(), C::K);
        debug_assert!(msg.iter().all(|&s| (s as usize) < (1 << C::M)));

        let r = self.r();
        let m_poly = Polynomial::from_coefs(msg);
        let parity = m_poly.mulx_rem(&self.field, r, &self.generator);

        let mut codeword = C::Codeword::default();
        let cw = codeword.as_mut();
        cw[..C::K].copy_from_slice(msg);
        for i in 0..r {
            cw[C::K + i] = parity.coef(i);
        }
        codeword
    }

    /// Validate and encode a message given as a plain slice, for callers that receive
    /// message data from outside the type system (e.g. deserialized bytes) and can't
    /// statically guarantee `C::Message`'s length or symbol range. Infallible `encode`
    /// above is the right choice whenever the caller already holds a `C::Message`.
    pub fn encode_checked(&self, message: &[u16]) -> Result<C::Codeword, EncodeError> {
        if message.len() != C::K {
            return Err(EncodeError::WrongLength { expected: C::K, actual: message.len() });
        }
        for &value in message {
            if (value as usize) >= (1usize << C::M) {
                return Err(EncodeError::SymbolOutOfRange { value, m: C::M });
            }
        }

        let mut buf = C::Message::default();
        buf.as_mut().copy_from_slice(message);
        Ok(self.encode(&buf))
    }

    /// Decode a received codeword, returning the corrected message, or `None` if the
    /// received word has too many errors to recover.
    pub fn decode(&self, received: &C::Codeword) -> Option<C::Message> {
        let mut scratch = *received;
        if self.decode_in_place(&mut scratch) {
            let mut message = C::Message::default();
            message.as_mut().copy_from_slice(&scratch.as_ref()[..C::K]);
            Some(message)
        } else {
            None
        }
    }

    /// Decode a received codeword in place. Returns `true` and leaves the corrected
    /// codeword in `codeword` on success; on failure, returns `false` and leaves
    /// `codeword` byte-for-byte as it was passed in.
    pub fn decode_in_place(&self, codeword: &mut C::Codeword) -> bool {
        let buf = codeword.as_mut();
        debug_assert_eq!(buf.len(), C::N);

        match decoder::decode(&self.field, buf, C::T, self.r()) {
            DecodeOutcome::Clean | DecodeOutcome::Corrected(_) => true,
            DecodeOutcome::Failure(_) => false,
        }
    }
}

impl<C: CodeParams> Default for ReedSolomon<C> {
    fn default() -> ReedSolomon<C> {
        ReedSolomon::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::params::Rs15_9;

    #[test]
    fn encode_matches_worked_reference_vector() {
        let rs: ReedSolomon<Rs15_9> = ReedSolomon::new();
        let message: [u16; 9] = [6, 15, 8, 9, 8, 3, 0, 0, 5];
        let codeword = rs.encode(&message);
        assert_eq!(codeword, [6, 15, 8, 9, 8, 3, 0, 0, 5, 0, 12, 11, 2, 0, 9]);

        let syn = crate::decoder::syndromes(&rs.field, &codeword, rs.r());
        assert!(syn.is_zero());
    }

    #[test]
    fn worked_vector_noise_free_decode() {
        let rs: ReedSolomon<Rs15_9> = ReedSolomon::new();
        let message: [u16; 9] = [6, 15, 8, 9, 8, 3, 0, 0, 5];
        let codeword: [u16; 15] = [6, 15, 8, 9, 8, 3, 0, 0, 5, 0, 12, 11, 2, 0, 9];
        assert_eq!(rs.decode(&codeword), Some(message));
    }

    #[test]
    fn worked_vector_one_error_in_message() {
        let rs: ReedSolomon<Rs15_9> = ReedSolomon::new();
        let message: [u16; 9] = [6, 15, 8, 9, 8, 3, 0, 0, 5];
        let mut received: [u16; 15] = [6, 15, 8, 9, 8, 3, 0, 0, 5, 0, 12, 11, 2, 0, 9];
        received[2] = 0;
        assert_eq!(rs.decode(&received), Some(message));
    }

    #[test]
    fn worked_vector_two_errors_in_message() {
        let rs: ReedSolomon<Rs15_9> = ReedSolomon::new();
        let message: [u16; 9] = [6, 15, 8, 9, 8, 3, 0, 0, 5];
        let mut received: [u16; 15] = [6, 15, 8, 9, 8, 3, 0, 0, 5, 0, 12, 11, 2, 0, 9];
        received[2] = 0;
        received[3] = 0;
        assert_eq!(rs.decode(&received), Some(message));
    }

    #[test]
    fn worked_vector_three_errors_straddling_parity() {
        let rs: ReedSolomon<Rs15_9> = ReedSolomon::new();
        let message: [u16; 9] = [6, 15, 8, 9, 8, 3, 0, 0, 5];
        let mut received: [u16; 15] = [6, 15, 8, 9, 8, 3, 0, 0, 5, 0, 12, 11, 2, 0, 9];
        received[2] = 0;
        received[3] = 0;
        received[11] = 0;
        assert_eq!(rs.decode(&received), Some(message));
    }

    #[test]
    fn worked_vector_four_errors_is_uncorrectable() {
        let rs: ReedSolomon<Rs15_9> = ReedSolomon::new();
        let mut received: [u16; 15] = [6, 15, 8, 9, 8, 3, 0, 0, 5, 0, 12, 11, 2, 0, 9];
        received[0] = 0;
        received[2] = 0;
        received[3] = 0;
        received[11] = 0;
        assert_eq!(rs.decode(&received), None);
    }

    #[test]
    fn round_trip_with_no_errors() {
        let rs: ReedSolomon<Rs15_9> = ReedSolomon::new();
        let message: [u16; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        let codeword = rs.encode(&message);
        let decoded = rs.decode(&codeword).expect("clean codeword must decode");
        assert_eq!(decoded, message);
    }

    #[test]
    fn round_trip_with_t_errors() {
        let rs: ReedSolomon<Rs15_9> = ReedSolomon::new();
        let message: [u16; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        let mut codeword = rs.encode(&message);
        codeword[0] ^= 0x3;
        codeword[5] ^= 0x7;
        codeword[12] ^= 0x1;

        let decoded = rs.decode(&codeword).expect("t errors must be correctable");
        assert_eq!(decoded, message);
    }

    #[test]
    fn decode_in_place_leaves_buffer_unchanged_on_failure() {
        let rs: ReedSolomon<Rs15_9> = ReedSolomon::new();
        let message: [u16; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        let mut codeword = rs.encode(&message);
        for s in codeword.iter_mut() {
            *s ^= 0xF;
        }
        let before = codeword;

        if !rs.decode_in_place(&mut codeword) {
            assert_eq!(codeword, before);
        }
    }

    #[test]
    fn encode_checked_rejects_wrong_length_and_out_of_range_symbols() {
        let rs: ReedSolomon<Rs15_9> = ReedSolomon::new();
        assert_eq!(
            rs.encode_checked(&[1, 2, 3]),
            Err(crate::error::EncodeError::WrongLength { expected: 9, actual: 3 }),
        );
        assert_eq!(
            rs.encode_checked(&[16, 0, 0, 0, 0, 0, 0, 0, 0]),
            Err(crate::error::EncodeError::SymbolOutOfRange { value: 16, m: 4 }),
        );
        assert!(rs.encode_checked(&[1, 2, 3, 4, 5, 6, 7, 8, 9]).is_ok());
    }

    #[test]
    fn accessors_report_code_dimensions() {
        let rs: ReedSolomon<Rs15_9> = ReedSolomon::new();
        assert_eq!(rs.m(), 4);
        assert_eq!(rs.n(), 15);
        assert_eq!(rs.k(), 9);
        assert_eq!(rs.r(), 6);
    }

    #[test]
    fn randomized_errors_within_capacity_always_correct() {
        use rand::Rng;
        let rs: ReedSolomon<Rs15_9> = ReedSolomon::new();
        let mut rng = rand::thread_rng();

        for _ in 0..200 {
            let message: [u16; 9] = std::array::from_fn(|_| rng.gen_range(0..16));
            let codeword = rs.encode(&message);

            let mut corrupted = codeword;
            let mut positions: Vec<usize> = (0..15).collect();
            for i in (1..positions.len()).rev() {
                positions.swap(i, rng.gen_range(0..=i));
            }
            for &pos in positions.iter().take(rs.r() / 2) {
                let bad: u16 = rng.gen_range(1..16);
                corrupted[pos] ^= bad;
            }

            let decoded = rs.decode(&corrupted);
            assert_eq!(decoded, Some(message));
        }
    }

    #[test]
    fn randomized_errors_beyond_capacity_never_silently_return_wrong_success() {
        use rand::Rng;
        let rs: ReedSolomon<Rs15_9> = ReedSolomon::new();
        let mut rng = rand::thread_rng();
        let mut false_successes = 0;

        for _ in 0..200 {
            let message: [u16; 9] = std::array::from_fn(|_| rng.gen_range(0..16));
            let codeword = rs.encode(&message);

            let mut corrupted = codeword;
            let mut positions: Vec<usize> = (0..15).collect();
            for i in (1..positions.len()).rev() {
                positions.swap(i, rng.gen_range(0..=i));
            }
            // rs.r() = 6, so rs.r() / 2 + 1 = 4 errors, one more than t=3 can guarantee.
            for &pos in positions.iter().take(rs.r() / 2 + 1) {
                let bad: u16 = rng.gen_range(1..16);
                corrupted[pos] ^= bad;
            }

            if let Some(decoded) = rs.decode(&corrupted) {
                if decoded != message {
                    false_successes += 1;
                }
            }
        }

        // Miscorrection beyond the guaranteed capacity is possible in principle (an
        // error pattern can alias onto another valid codeword) but should be rare, not
        // the common case; a properly implemented decoder overwhelmingly reports
        // failure instead of silently returning a wrong message.
        assert!(false_successes < 20, "{false_successes} miscorrections out of 200");
    }
}
