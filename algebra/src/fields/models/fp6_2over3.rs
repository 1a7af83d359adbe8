use crate::{
    error::AlgebraError,
    fields::{frobenius_exponent, CyclotomicField, Field, Fp, Fp3, Fp3Parameters},
};
use rand::Rng;
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

/// Model for quadratic extension field of F3 as towered extension
///
/// ```text
/// F6 = F3[Y]/(Y^2-X),
/// F3 = Fp[X]/(X^3-alpha),
/// ```
///
/// using a "non-residue" alpha mod p such that (X^6-alpha) is irreducible over Fp.
#[derive(Clone, Debug)]
pub struct Fp6Parameters<'a, const N: usize> {
    pub fp3_params: &'a Fp3Parameters<'a, N>,
    /// alpha^((p^k - 1) / 6)
    frobenius_coeffs_c1: Option<[Fp<'a, N>; 6]>,
}

impl<'a, const N: usize> Fp6Parameters<'a, N> {
    pub fn new(fp3_params: &'a Fp3Parameters<'a, N>) -> Self {
        Self {
            fp3_params,
            frobenius_coeffs_c1: None,
        }
    }

    pub fn calculate_frobenius_coeffs(&mut self) -> Result<(), AlgebraError> {
        let field = self.fp3_params.field();
        let modulus = field.modulus_biguint();
        let mut coeffs = [Fp::one(field); 6];
        for (power, coeff) in coeffs.iter_mut().enumerate() {
            *coeff = self
                .fp3_params
                .non_residue
                .pow(frobenius_exponent(&modulus, power, 6)?);
        }
        self.frobenius_coeffs_c1 = Some(coeffs);
        Ok(())
    }

    pub fn frobenius_coeffs_c1(&self) -> &[Fp<'a, N>; 6] {
        self.frobenius_coeffs_c1
            .as_ref()
            .expect("Fp6 Frobenius coefficients are not computed")
    }

    /// Multiply by X, X * (c0 + c1 * X + c2 * X^2) = alpha * c2 + c0 * X + c1 * X^2.
    #[inline(always)]
    pub fn mul_fp3_by_nonresidue(&self, fe: &Fp3<'a, N>) -> Fp3<'a, N> {
        let new_c0 = self.fp3_params.mul_fp_by_nonresidue(&fe.c2);
        Fp3::new(new_c0, fe.c0, fe.c1, self.fp3_params)
    }
}

#[derive(Copy, Clone)]
pub struct Fp6<'a, const N: usize> {
    pub c0: Fp3<'a, N>,
    pub c1: Fp3<'a, N>,
    params: &'a Fp6Parameters<'a, N>,
}

impl<'a, const N: usize> Fp6<'a, N> {
    pub fn new(c0: Fp3<'a, N>, c1: Fp3<'a, N>, params: &'a Fp6Parameters<'a, N>) -> Self {
        Fp6 { c0, c1, params }
    }

    #[inline]
    pub fn params(&self) -> &'a Fp6Parameters<'a, N> {
        self.params
    }

    pub fn rand<R: Rng + ?Sized>(params: &'a Fp6Parameters<'a, N>, rng: &mut R) -> Self {
        Self::new(
            Fp3::rand(params.fp3_params, rng),
            Fp3::rand(params.fp3_params, rng),
            params,
        )
    }
}

impl<'a, const N: usize> Field for Fp6<'a, N> {
    type Parameters = &'a Fp6Parameters<'a, N>;

    fn zero(params: Self::Parameters) -> Self {
        let zero = Fp3::zero(params.fp3_params);
        Fp6::new(zero, zero, params)
    }

    fn one(params: Self::Parameters) -> Self {
        Fp6::new(
            Fp3::one(params.fp3_params),
            Fp3::zero(params.fp3_params),
            params,
        )
    }

    #[inline]
    fn parameters(&self) -> Self::Parameters {
        self.params
    }

    fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero()
    }

    fn is_one(&self) -> bool {
        self.c0.is_one() && self.c1.is_zero()
    }

    #[inline]
    fn add_assign(&mut self, other: &Self) {
        self.c0.add_assign(&other.c0);
        self.c1.add_assign(&other.c1);
    }

    #[inline]
    fn sub_assign(&mut self, other: &Self) {
        self.c0.sub_assign(&other.c0);
        self.c1.sub_assign(&other.c1);
    }

    fn mul_assign(&mut self, other: &Self) {
        let v0 = self.c0.mul(&other.c0);
        let v1 = self.c1.mul(&other.c1);

        self.c1 = self
            .c0
            .add(&self.c1)
            .mul(&other.c0.add(&other.c1))
            .sub(&v0)
            .sub(&v1);
        self.c0 = v0.add(&self.params.mul_fp3_by_nonresidue(&v1));
    }

    fn double_in_place(&mut self) -> &mut Self {
        self.c0.double_in_place();
        self.c1.double_in_place();
        self
    }

    fn square_in_place(&mut self) -> &mut Self {
        let mut v0 = self.c0.sub(&self.c1);
        let v3 = self.c0.sub(&self.params.mul_fp3_by_nonresidue(&self.c1));
        let v2 = self.c0.mul(&self.c1);

        v0.mul_assign(&v3);
        v0.add_assign(&v2);

        self.c1 = v2.double();
        self.c0 = v0.add(&self.params.mul_fp3_by_nonresidue(&v2));
        self
    }

    fn negate(&mut self) {
        self.c0.negate();
        self.c1.negate();
    }

    fn inverse(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }
        let t = self
            .c0
            .square()
            .sub(&self.params.mul_fp3_by_nonresidue(&self.c1.square()));
        t.inverse().map(|t| {
            Fp6::new(self.c0.mul(&t), self.c1.mul(&t).neg(), self.params)
        })
    }

    fn frobenius_map(&mut self, power: usize) {
        self.c0.frobenius_map(power);
        self.c1.frobenius_map(power);
        self.c1
            .mul_by_fp(&self.params.frobenius_coeffs_c1()[power % 6]);
    }
}

impl<'a, const N: usize> CyclotomicField for Fp6<'a, N> {
    fn conjugate(&mut self) {
        self.c1.negate();
    }
}

impl<'a, const N: usize> PartialEq for Fp6<'a, N> {
    fn eq(&self, other: &Self) -> bool {
        self.c0 == other.c0 && self.c1 == other.c1
    }
}

impl<'a, const N: usize> Eq for Fp6<'a, N> {}

impl<'a, const N: usize> Debug for Fp6<'a, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Fp6_2over3({:?} + {:?} * v)", self.c0, self.c1)
    }
}

impl<'a, const N: usize> Display for Fp6<'a, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Fp6_2over3({} + {} * v)", self.c0, self.c1)
    }
}
