//! The decode pipeline: syndromes, Berlekamp-Massey, Chien search, and Forney
//! correction.
//!
//! Throughout this module, codeword position `j` holds the coefficient of `x^j` in the
//! received polynomial `R(x)` (the same convention the encoder writes: `R[0]` is the
//! constant term). Chien search below works in this same degree space — `X_j = alpha^j`
//! is the classic locator for the term of degree `j` — so a root found at degree `j` is
//! already the array index to correct; no conversion is needed.

use crate::field::Gf;
use crate::poly::Polynomial;

/// Upper bound on the number of errors a single decode can track, dictated by
/// `poly::MAX_COEFS`.
pub const MAX_T: usize = 31;

/// Why a decode attempt failed. Kept internal: the public surface only ever exposes
/// `Option`/`bool`, per the engine's error-handling posture, but tests can check which
/// branch actually fired.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeFailureReason {
    /// The error-locator polynomial has degree greater than `t`.
    LocatorDegreeExceedsCapacity,
    /// Chien search found a different number of roots than the locator's degree.
    RootCountMismatch,
    /// Forney's formula produced a zero error magnitude.
    ZeroMagnitude,
    /// A purported error position fell outside the codeword.
    PositionOutOfRange,
}

/// Outcome of running the full decode pipeline against a received word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeOutcome {
    /// No errors were present; the codeword was already valid.
    Clean,
    /// `count` symbol errors were found and corrected.
    Corrected(usize),
    Failure(DecodeFailureReason),
}

/// Compute the syndrome polynomial `S(x) = sum_{i=1}^{r} S_i x^{i-1}`, where
/// `S_i = R(alpha^i)` via Horner evaluation (`R[0]` is the lowest-degree coefficient, so
/// Horner folds from the high-degree end, i.e. the end of the slice).
pub fn syndromes(field: &Gf, codeword: &[u16], r: usize) -> Polynomial {
    let mut s = Polynomial::zero();
    for i in 1..=r {
        let x = field.exp(i);
        let mut acc = 0u16;
        for &c in codeword.iter().rev() {
            acc = field.add(field.mul(acc, x), c);
        }
        if acc != 0 {
            s.set_coef(i - 1, acc);
        }
    }
    s
}

/// Classic Berlekamp-Massey: finds the minimal-degree error-locator polynomial `Lambda`
/// consistent with the given syndromes, along with its degree `L`.
pub fn berlekamp_massey(field: &Gf, syn: &Polynomial, r: usize) -> (Polynomial, usize) {
    let mut lambda = Polynomial::one();
    let mut prev = Polynomial::one();
    let mut l = 0usize;
    let mut shift_amount = 1usize;
    let mut prev_discrepancy = 1u16;

    for n in 0..r {
        let mut delta = syn.coef(n);
        for i in 1..=l {
            delta = field.add(delta, field.mul(lambda.coef(i), syn.coef(n - i)));
        }

        if delta == 0 {
            shift_amount += 1;
        } else {
            let coef = field.div(delta, prev_discrepancy);
            let correction = prev.shift(shift_amount).scale(field, coef);
            let candidate = lambda.add(field, &correction);

            if 2 * l <= n {
                let next_l = n + 1 - l;
                prev = lambda;
                prev_discrepancy = delta;
                l = next_l;
                shift_amount = 1;
            } else {
                shift_amount += 1;
            }

            lambda = candidate;
        }
    }

    (lambda, l)
}

/// Chien search plus Forney correction: given the error-locator polynomial and its
/// declared degree, find every error position and magnitude and apply the correction to
/// `codeword` in place. Nothing is written to `codeword` unless every failure condition
/// has already been ruled out.
pub fn correct(
    field: &Gf,
    codeword: &mut [u16],
    lambda: &Polynomial,
    l: usize,
    syn: &Polynomial,
    t: usize,
    r: usize,
) -> DecodeOutcome {
    if l > t {
        return DecodeOutcome::Failure(DecodeFailureReason::LocatorDegreeExceedsCapacity);
    }
    if l == 0 {
        return DecodeOutcome::Clean;
    }

    let n = codeword.len();
    let deriv = lambda.deriv();
    let omega = syn.mul(field, lambda).truncate(r);

    let mut positions = [0usize; MAX_T];
    let mut magnitudes = [0u16; MAX_T];
    let mut found = 0usize;

    for degree in 0..n {
        let x_inv = field.exp((n - degree) % n);
        if lambda.eval(field, x_inv) != 0 {
            continue;
        }

        let denom = deriv.eval(field, x_inv);
        if denom == 0 {
            return DecodeOutcome::Failure(DecodeFailureReason::RootCountMismatch);
        }

        // Forney's formula: Y_j = Omega(X_j^-1) / Lambda'(X_j^-1). No extra factor of
        // X_j is needed here because Omega is built from S(x) = sum S_i x^(i-1) (the
        // syndromes already shifted down one degree), which folds that factor in.
        let y = field.div(omega.eval(field, x_inv), denom);
        if y == 0 {
            return DecodeOutcome::Failure(DecodeFailureReason::ZeroMagnitude);
        }

        let idx = degree;
        if idx >= n {
            return DecodeOutcome::Failure(DecodeFailureReason::PositionOutOfRange);
        }
        if found >= MAX_T {
            return DecodeOutcome::Failure(DecodeFailureReason::RootCountMismatch);
        }

        positions[found] = idx;
        magnitudes[found] = y;
        found += 1;
    }

    if found != l {
        return DecodeOutcome::Failure(DecodeFailureReason::RootCountMismatch);
    }

    for i in 0..found {
        codeword[positions[i]] = field.add(codeword[positions[i]], magnitudes[i]);
    }

    DecodeOutcome::Corrected(found)
}

/// Run the full pipeline (syndromes -> Berlekamp-Massey -> Chien/Forney) against a
/// received word, correcting it in place when possible.
pub fn decode(field: &Gf, codeword: &mut [u16], t: usize, r: usize) -> DecodeOutcome {
    let syn = syndromes(field, codeword, r);
    if syn.is_zero() {
        return DecodeOutcome::Clean;
    }

    let (lambda, l) = berlekamp_massey(field, &syn, r);
    correct(field, codeword, &lambda, l, &syn, t, r)
}
