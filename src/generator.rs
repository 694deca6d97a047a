//! Generator polynomial construction: `g(x) = product_{i=1}^{r} (x - alpha^i)`.

use crate::field::Gf;
use crate::poly::Polynomial;

/// Build the generator polynomial for a code with `r` parity symbols. Computed once per
/// `ReedSolomon` construction and cached for the engine's lifetime.
pub fn generator(field: &Gf, r: usize) -> Polynomial {
    let mut g = Polynomial::one();
    for i in 1..=r {
        // (x - alpha^i), and subtraction is addition in characteristic 2.
        let root = Polynomial::from_coefs(&[field.exp(i), 1]);
        g = g.mul(field, &root);
    }
    g
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn generator_is_monic_of_degree_r() {
        let gf = Gf::new(4);
        let g = generator(&gf, 6);
        assert_eq!(g.degree(), Some(6));
        assert_eq!(g.coef(6), 1);
    }

    #[test]
    fn generator_roots_are_consecutive_powers_of_alpha() {
        let gf = Gf::new(4);
        let r = 6;
        let g = generator(&gf, r);
        for i in 1..=r {
            assert_eq!(g.eval(&gf, gf.exp(i)), 0);
        }
    }
}
