use crate::{
    biginteger::{biguint_to_limbs, naf},
    error::AlgebraError,
};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use std::fmt::Debug;

mod models;
pub use self::models::*;


/// The interface for a generic field. Elements carry a cheap handle to the
/// parameters they were created from, which is also needed to produce the
/// constants of the field.
pub trait Field: Sized + Copy + Clone + Debug + PartialEq + Eq + Send + Sync {
    /// Shared handle to the field description.
    type Parameters: Copy + Send + Sync;

    /// Returns the zero element of the field, the additive identity.
    fn zero(params: Self::Parameters) -> Self;

    /// Returns the one element of the field, a field generator.
    fn one(params: Self::Parameters) -> Self;

    fn parameters(&self) -> Self::Parameters;

    /// Returns true if and only if `self == Self::zero()`.
    fn is_zero(&self) -> bool;

    /// Returns true if and only if `self == Self::one()`.
    fn is_one(&self) -> bool {
        *self == Self::one(self.parameters())
    }

    fn add_assign(&mut self, other: &Self);

    fn sub_assign(&mut self, other: &Self);

    fn mul_assign(&mut self, other: &Self);

    /// Doubles `self` in place.
    fn double_in_place(&mut self) -> &mut Self;

    /// Squares `self` in place.
    fn square_in_place(&mut self) -> &mut Self;

    /// Replaces `self` by its additive inverse.
    fn negate(&mut self);

    /// Computes the multiplicative inverse of `self` if `self` is nonzero.
    #[must_use]
    fn inverse(&self) -> Option<Self>;

    /// Exponentiates this element by a power of the base prime modulus via
    /// the Frobenius automorphism.
    fn frobenius_map(&mut self, power: usize);

    #[must_use]
    fn add(&self, other: &Self) -> Self {
        let mut copy = *self;
        copy.add_assign(other);
        copy
    }

    #[must_use]
    fn sub(&self, other: &Self) -> Self {
        let mut copy = *self;
        copy.sub_assign(other);
        copy
    }

    #[must_use]
    fn mul(&self, other: &Self) -> Self {
        let mut copy = *self;
        copy.mul_assign(other);
        copy
    }

    #[must_use]
    fn double(&self) -> Self {
        let mut copy = *self;
        copy.double_in_place();
        copy
    }

    #[must_use]
    fn square(&self) -> Self {
        let mut copy = *self;
        copy.square_in_place();
        copy
    }

    #[must_use]
    fn neg(&self) -> Self {
        let mut copy = *self;
        copy.negate();
        copy
    }

    /// Exponentiates this element by a number represented with `u64` limbs,
    /// least significant limb first.
    #[must_use]
    fn pow<S: AsRef<[u64]>>(&self, exp: S) -> Self {
        let mut res = Self::one(self.parameters());

        let mut found_one = false;

        for i in BitIterator::new(exp) {
            if !found_one {
                if i {
                    found_one = true;
                } else {
                    continue;
                }
            }

            res.square_in_place();

            if i {
                res.mul_assign(self);
            }
        }
        res
    }
}

/// Fields whose elements of norm one can be inverted by conjugation. The final
/// exponentiation of a pairing maps into that subgroup.
pub trait CyclotomicField: Field {
    fn conjugate(&mut self);

    #[must_use]
    fn unitary_inverse(&self) -> Self {
        let mut copy = *self;
        copy.conjugate();
        copy
    }

    #[must_use]
    fn cyclotomic_square(&self) -> Self {
        self.square()
    }

    /// Exponentiation of an element of the cyclotomic subgroup, walking the
    /// signed digits of the exponent.
    #[must_use]
    fn cyclotomic_exp<S: AsRef<[u64]>>(&self, exp: S) -> Self {
        let mut res = Self::one(self.parameters());
        let self_inverse = self.unitary_inverse();

        let mut found_nonzero = false;
        let naf = naf(exp.as_ref());

        for &value in naf.iter().rev() {
            if found_nonzero {
                res = res.cyclotomic_square();
            }

            if value != 0 {
                found_nonzero = true;

                if value > 0 {
                    res.mul_assign(self);
                } else {
                    res.mul_assign(&self_inverse);
                }
            }
        }

        res
    }
}

/// Iterates over a slice of `u64` in *big-endian* order.
#[derive(Debug)]
pub struct BitIterator<E> {
    t: E,
    n: usize,
}

impl<E: AsRef<[u64]>> BitIterator<E> {
    pub fn new(t: E) -> Self {
        let n = t.as_ref().len() * 64;

        BitIterator { t, n }
    }
}

impl<E: AsRef<[u64]>> Iterator for BitIterator<E> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.n == 0 {
            None
        } else {
            self.n -= 1;
            let part = self.n / 64;
            let bit = self.n - (64 * part);

            Some(self.t.as_ref()[part] & (1 << bit) > 0)
        }
    }
}

/// Computes `(modulus^power - 1) / divisor`, failing if the division is not exact.
pub fn frobenius_exponent(
    modulus: &BigUint,
    power: usize,
    divisor: u64,
) -> Result<Vec<u64>, AlgebraError> {
    let order = modulus.pow(power as u32) - BigUint::one();
    let (quotient, remainder) = order.div_rem(&BigUint::from(divisor));
    if !remainder.is_zero() {
        return Err(AlgebraError::FrobeniusDivisibility(divisor));
    }
    Ok(biguint_to_limbs(&quotient))
}

/// Euler criterion: returns `true` if `element` is not an `n`-th power in a
/// field whose multiplicative group has order `group_order`. If `n` does not
/// divide the group order the test conservatively fails.
pub fn is_non_nth_root<F: Field>(element: &F, group_order: &BigUint, n: u64) -> bool {
    if element.is_zero() {
        return false;
    }
    let (exponent, remainder) = group_order.div_rem(&BigUint::from(n));
    if !remainder.is_zero() {
        return false;
    }
    !element.pow(biguint_to_limbs(&exponent)).is_one()
}
