//! Fixed-capacity polynomial arithmetic over a `Gf` field, used by the generator,
//! encoder, and decoder.

use crate::field::Gf;

/// Upper bound on polynomial length (in coefficients) used anywhere in this engine.
/// Bounds the generator, error-locator, and error-evaluator polynomials without a heap
/// allocation; `CodeParams::validate` rejects any code whose parity length would exceed
/// it.
pub const MAX_COEFS: usize = 64;

/// A polynomial over GF(2^m), coefficients stored lowest-degree-first in a fixed-capacity
/// buffer. The first `len` slots are significant; everything past `len` is always zero.
#[derive(Clone, Copy)]
pub struct Polynomial {
    coefs: [u16; MAX_COEFS],
    len: usize,
}

impl Polynomial {
    pub fn zero() -> Polynomial {
        Polynomial { coefs: [0; MAX_COEFS], len: 0 }
    }

    pub fn one() -> Polynomial {
        let mut p = Polynomial::zero();
        p.coefs[0] = 1;
        p.len = 1;
        p
    }

    pub fn from_coefs(coefs: &[u16]) -> Polynomial {
        assert!(coefs.len() <= MAX_COEFS, "polynomial exceeds engine capacity");
        let mut p = Polynomial::zero();
        p.coefs[..coefs.len()].copy_from_slice(coefs);
        p.len = coefs.len();
        p.trim()
    }

    fn trim(mut self) -> Polynomial {
        while self.len > 0 && self.coefs[self.len - 1] == 0 {
            self.len -= 1;
        }
        self
    }

    /// Coefficient of `x^i`, or 0 past the polynomial's degree.
    pub fn coef(&self, i: usize) -> u16 {
        if i < self.len {
            self.coefs[i]
        } else {
            0
        }
    }

    pub fn set_coef(&mut self, i: usize, v: u16) {
        assert!(i < MAX_COEFS, "coefficient index exceeds engine capacity");
        self.coefs[i] = v;
        if i + 1 > self.len {
            self.len = i + 1;
        } else if v == 0 && i + 1 == self.len {
            *self = self.trim();
        }
    }

    /// Highest index with a nonzero coefficient, or `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        if self.len == 0 {
            None
        } else {
            Some(self.len - 1)
        }
    }

    pub fn is_zero(&self) -> bool {
        self.len == 0
    }

    pub fn add(&self, field: &Gf, rhs: &Polynomial) -> Polynomial {
        let n = self.len.max(rhs.len);
        let mut out = Polynomial::zero();
        for i in 0..n {
            out.coefs[i] = field.add(self.coef(i), rhs.coef(i));
        }
        out.len = n;
        out.trim()
    }

    /// Multiply every coefficient by a field element.
    pub fn scale(&self, field: &Gf, k: u16) -> Polynomial {
        let mut out = *self;
        for c in out.coefs[..out.len].iter_mut() {
            *c = field.mul(*c, k);
        }
        out.trim()
    }

    pub fn mul(&self, field: &Gf, rhs: &Polynomial) -> Polynomial {
        if self.is_zero() || rhs.is_zero() {
            return Polynomial::zero();
        }
        let n = self.len + rhs.len - 1;
        assert!(n <= MAX_COEFS, "polynomial product exceeds engine capacity");

        let mut out = Polynomial::zero();
        for (i, &a) in self.coefs[..self.len].iter().enumerate() {
            if a == 0 {
                continue;
            }
            for (j, &b) in rhs.coefs[..rhs.len].iter().enumerate() {
                out.coefs[i + j] = field.add(out.coefs[i + j], field.mul(a, b));
            }
        }
        out.len = n;
        out.trim()
    }

    /// Evaluate the polynomial at `x` via Horner's method.
    pub fn eval(&self, field: &Gf, x: u16) -> u16 {
        let mut acc = 0u16;
        for &c in self.coefs[..self.len].iter().rev() {
            acc = field.add(field.mul(acc, x), c);
        }
        acc
    }

    /// Multiply by `x^shift`.
    pub fn shift(&self, shift: usize) -> Polynomial {
        if self.is_zero() {
            return Polynomial::zero();
        }
        assert!(self.len + shift <= MAX_COEFS, "shift exceeds engine capacity");
        let mut out = Polynomial::zero();
        out.coefs[shift..shift + self.len].copy_from_slice(&self.coefs[..self.len]);
        out.len = shift + self.len;
        out.trim()
    }

    /// Truncate to coefficients of degree strictly less than `deg`.
    pub fn truncate(&self, deg: usize) -> Polynomial {
        let mut out = *self;
        if out.len > deg {
            for c in out.coefs[deg..out.len].iter_mut() {
                *c = 0;
            }
            out.len = deg;
        }
        out.trim()
    }

    /// Formal derivative. In characteristic 2, even-degree terms vanish identically, so
    /// only the odd-degree coefficients survive, each shifted down by exactly one
    /// degree (the coefficient of `x^i`, `i` odd, becomes the coefficient of `x^(i-1)`).
    /// The result keeps the (even) gaps between surviving terms rather than packing them
    /// contiguously, so it can be evaluated with `eval` like any other polynomial.
    pub fn deriv(&self) -> Polynomial {
        let mut out = Polynomial::zero();
        let mut i = 1;
        while i < self.len {
            out.set_coef(i - 1, self.coefs[i]);
            i += 2;
        }
        out.trim()
    }

    /// Remainder of `self * x^shift` divided by `modulus`, which must be a monic
    /// polynomial (leading coefficient 1, as every Reed-Solomon generator is). Used by
    /// the systematic encoder to compute `p(x) = (M(x)*x^r) mod g(x)`.
    pub fn mulx_rem(&self, field: &Gf, shift: usize, modulus: &Polynomial) -> Polynomial {
        let deg_g = modulus.degree().expect("generator polynomial must be nonzero");
        assert_eq!(modulus.coef(deg_g), 1, "divisor must be monic");

        let total = self.len + shift;
        assert!(total <= MAX_COEFS, "dividend exceeds engine capacity");

        let mut rem = [0u16; MAX_COEFS];
        for (i, &c) in self.coefs[..self.len].iter().enumerate() {
            rem[i + shift] = c;
        }

        for i in (deg_g..total).rev() {
            let coef = rem[i];
            if coef == 0 {
                continue;
            }
            for k in 0..=deg_g {
                let idx = i - deg_g + k;
                rem[idx] = field.add(rem[idx], field.mul(coef, modulus.coef(k)));
            }
        }

        Polynomial::from_coefs(&rem[..deg_g])
    }
}

impl Default for Polynomial {
    fn default() -> Polynomial {
        Polynomial::zero()
    }
}
