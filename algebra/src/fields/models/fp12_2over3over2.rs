use crate::{
    error::AlgebraError,
    fields::{
        fp6_3over2::{Fp6, Fp6Parameters},
        frobenius_exponent, CyclotomicField, Field, Fp2, Fp2Parameters,
    },
};
use rand::Rng;
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

/// Model for the quadratic extension of F6
///
/// ```text
/// F12 = F6[Z]/(Z^2-Y),
/// F6 = F2[Y]/(Y^3-U),
/// ```
///
/// with U the non-cube of F2 defining F6.
#[derive(Clone, Debug)]
pub struct Fp12Parameters<'a, const N: usize> {
    pub fp6_params: &'a Fp6Parameters<'a, N>,
    /// U^((p^k - 1) / 6)
    frobenius_coeffs_c1: Option<[Fp2<'a, N>; 12]>,
}

impl<'a, const N: usize> Fp12Parameters<'a, N> {
    pub fn new(fp6_params: &'a Fp6Parameters<'a, N>) -> Self {
        Self {
            fp6_params,
            frobenius_coeffs_c1: None,
        }
    }

    #[inline]
    pub fn fp2_params(&self) -> &'a Fp2Parameters<'a, N> {
        self.fp6_params.fp2_params
    }

    pub fn calculate_frobenius_coeffs(&mut self) -> Result<(), AlgebraError> {
        let fp2_params = self.fp2_params();
        let modulus = fp2_params.field().modulus_biguint();
        let mut coeffs = [Fp2::one(fp2_params); 12];
        for (power, coeff) in coeffs.iter_mut().enumerate() {
            *coeff = self
                .fp6_params
                .non_residue
                .pow(frobenius_exponent(&modulus, power, 6)?);
        }
        self.frobenius_coeffs_c1 = Some(coeffs);
        Ok(())
    }

    pub fn calculate_frobenius_coeffs_with_precomputation(&mut self, powers: &[Fp2<'a, N>; 12]) {
        self.frobenius_coeffs_c1 = Some(*powers);
    }

    pub fn frobenius_coeffs_c1(&self) -> &[Fp2<'a, N>; 12] {
        self.frobenius_coeffs_c1
            .as_ref()
            .expect("Fp12 Frobenius coefficients are not computed")
    }

    /// Multiply by Z^2 = Y, Y * (c0 + c1 * Y + c2 * Y^2) = U * c2 + c0 * Y + c1 * Y^2.
    #[inline(always)]
    pub fn mul_fp6_by_nonresidue(&self, fe: &Fp6<'a, N>) -> Fp6<'a, N> {
        let new_c0 = self.fp6_params.mul_fp2_by_nonresidue(&fe.c2);
        Fp6::new(new_c0, fe.c0, fe.c1, self.fp6_params)
    }
}

/// Computes U^((p^k - 1) / 6) for k = 0..12 with a single exponentiation:
/// with g = U^((p - 1) / 6), the k-th value is the product of the first k
/// Frobenius images of g. The Frobenius coefficients of F2 must be available.
pub fn frobenius_powers_of_non_residue<'a, const N: usize>(
    non_residue: &Fp2<'a, N>,
) -> Result<[Fp2<'a, N>; 12], AlgebraError> {
    let fp2_params = non_residue.params();
    let mut exp = *fp2_params.field().modulus();
    exp.0[0] &= !1;
    if exp.div_rem_u64(6) != 0 {
        return Err(AlgebraError::FrobeniusDivisibility(6));
    }

    let mut frobenius_image = non_residue.pow(exp);
    let mut powers = [Fp2::one(fp2_params); 12];
    for power in 1..12 {
        powers[power] = powers[power - 1].mul(&frobenius_image);
        frobenius_image.frobenius_map(1);
    }
    Ok(powers)
}

#[derive(Copy, Clone)]
pub struct Fp12<'a, const N: usize> {
    pub c0: Fp6<'a, N>,
    pub c1: Fp6<'a, N>,
    params: &'a Fp12Parameters<'a, N>,
}

impl<'a, const N: usize> Fp12<'a, N> {
    pub fn new(c0: Fp6<'a, N>, c1: Fp6<'a, N>, params: &'a Fp12Parameters<'a, N>) -> Self {
        Fp12 { c0, c1, params }
    }

    #[inline]
    pub fn params(&self) -> &'a Fp12Parameters<'a, N> {
        self.params
    }

    /// Multiplication by the sparse element c0 + c1 * Y + c4 * Y^2 * Z, the
    /// shape of a line evaluation for M-type twists.
    pub fn mul_by_014(&mut self, c0: &Fp2<'a, N>, c1: &Fp2<'a, N>, c4: &Fp2<'a, N>) {
        let mut aa = self.c0;
        aa.mul_by_01(c0, c1);
        let mut bb = self.c1;
        bb.mul_by_1(c4);
        let mut o = *c1;
        o.add_assign(c4);
        self.c1.add_assign(&self.c0);
        self.c1.mul_by_01(c0, &o);
        self.c1.sub_assign(&aa);
        self.c1.sub_assign(&bb);
        self.c0 = self.params.mul_fp6_by_nonresidue(&bb);
        self.c0.add_assign(&aa);
    }

    /// Multiplication by the sparse element c0 + c3 * Z + c4 * Y * Z, the
    /// shape of a line evaluation for D-type twists.
    pub fn mul_by_034(&mut self, c0: &Fp2<'a, N>, c3: &Fp2<'a, N>, c4: &Fp2<'a, N>) {
        let a0 = self.c0.c0.mul(c0);
        let a1 = self.c0.c1.mul(c0);
        let a2 = self.c0.c2.mul(c0);
        let a = Fp6::new(a0, a1, a2, self.params.fp6_params);
        let mut b = self.c1;
        b.mul_by_01(c3, c4);

        let c0 = c0.add(c3);
        let c1 = c4;
        let mut e = self.c0.add(&self.c1);
        e.mul_by_01(&c0, c1);
        self.c1 = e.sub(&a.add(&b));
        self.c0 = a.add(&self.params.mul_fp6_by_nonresidue(&b));
    }

    pub fn rand<R: Rng + ?Sized>(params: &'a Fp12Parameters<'a, N>, rng: &mut R) -> Self {
        Self::new(
            Fp6::rand(params.fp6_params, rng),
            Fp6::rand(params.fp6_params, rng),
            params,
        )
    }
}

impl<'a, const N: usize> Field for Fp12<'a, N> {
    type Parameters = &'a Fp12Parameters<'a, N>;

    fn zero(params: Self::Parameters) -> Self {
        let zero = Fp6::zero(params.fp6_params);
        Fp12::new(zero, zero, params)
    }

    fn one(params: Self::Parameters) -> Self {
        Fp12::new(
            Fp6::one(params.fp6_params),
            Fp6::zero(params.fp6_params),
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
        self.c0 = v0.add(&self.params.mul_fp6_by_nonresidue(&v1));
    }

    fn double_in_place(&mut self) -> &mut Self {
        self.c0.double_in_place();
        self.c1.double_in_place();
        self
    }

    fn square_in_place(&mut self) -> &mut Self {
        let mut ab = self.c0;
        ab.mul_assign(&self.c1);
        let mut c0c1 = self.c0;
        c0c1.add_assign(&self.c1);
        let mut c0 = self.params.mul_fp6_by_nonresidue(&self.c1);
        c0.add_assign(&self.c0);
        c0.mul_assign(&c0c1);
        c0.sub_assign(&ab);
        self.c1 = ab.double();
        c0.sub_assign(&self.params.mul_fp6_by_nonresidue(&ab));
        self.c0 = c0;
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
            .sub(&self.params.mul_fp6_by_nonresidue(&self.c1.square()));
        t.inverse().map(|t| {
            Fp12::new(self.c0.mul(&t), self.c1.mul(&t).neg(), self.params)
        })
    }

    fn frobenius_map(&mut self, power: usize) {
        self.c0.frobenius_map(power);
        self.c1.frobenius_map(power);

        let coeff = &self.params.frobenius_coeffs_c1()[power % 12];
        self.c1.mul_by_fp2(coeff);
    }
}

impl<'a, const N: usize> CyclotomicField for Fp12<'a, N> {
    fn conjugate(&mut self) {
        self.c1.negate();
    }
}

impl<'a, const N: usize> PartialEq for Fp12<'a, N> {
    fn eq(&self, other: &Self) -> bool {
        self.c0 == other.c0 && self.c1 == other.c1
    }
}

impl<'a, const N: usize> Eq for Fp12<'a, N> {}

impl<'a, const N: usize> Debug for Fp12<'a, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Fp12({:?} + {:?} * w)", self.c0, self.c1)
    }
}

impl<'a, const N: usize> Display for Fp12<'a, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Fp12({} + {} * w)", self.c0, self.c1)
    }
}
