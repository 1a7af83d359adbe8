use crate::{
    error::AlgebraError,
    fields::{frobenius_exponent, Field, Fp2, Fp2Parameters},
};
use rand::Rng;
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

/// Model for cubic extension field of F2
///
/// ```text
/// F6 = F2[Y]/(Y^3-U),
/// ```
///
/// using a non-cube U from F2.
#[derive(Clone, Debug)]
pub struct Fp6Parameters<'a, const N: usize> {
    pub fp2_params: &'a Fp2Parameters<'a, N>,
    /// U
    pub non_residue: Fp2<'a, N>,
    /// U^((p^k - 1) / 3)
    frobenius_coeffs_c1: Option<[Fp2<'a, N>; 6]>,
    /// U^((2 * p^k - 2) / 3)
    frobenius_coeffs_c2: Option<[Fp2<'a, N>; 6]>,
}

impl<'a, const N: usize> Fp6Parameters<'a, N> {
    pub fn new(non_residue: Fp2<'a, N>) -> Self {
        Self {
            fp2_params: non_residue.params(),
            non_residue,
            frobenius_coeffs_c1: None,
            frobenius_coeffs_c2: None,
        }
    }

    /// Computes the coefficients by exponentiating U directly.
    pub fn calculate_frobenius_coeffs(&mut self) -> Result<(), AlgebraError> {
        let modulus = self.fp2_params.field().modulus_biguint();
        let one = Fp2::one(self.fp2_params);
        let mut c1 = [one; 6];
        let mut c2 = [one; 6];
        for power in 0..6 {
            c1[power] = self
                .non_residue
                .pow(frobenius_exponent(&modulus, power, 3)?);
            c2[power] = c1[power].square();
        }
        self.frobenius_coeffs_c1 = Some(c1);
        self.frobenius_coeffs_c2 = Some(c2);
        Ok(())
    }

    /// Derives the coefficients from U^((p^k - 1) / 6) as produced by
    /// `fp12_2over3over2::frobenius_powers_of_non_residue`.
    pub fn calculate_frobenius_coeffs_with_precomputation(&mut self, powers: &[Fp2<'a, N>; 12]) {
        let one = Fp2::one(self.fp2_params);
        let mut c1 = [one; 6];
        let mut c2 = [one; 6];
        for power in 0..6 {
            c1[power] = powers[power].square();
            c2[power] = c1[power].square();
        }
        self.frobenius_coeffs_c1 = Some(c1);
        self.frobenius_coeffs_c2 = Some(c2);
    }

    pub fn frobenius_coeffs_c1(&self) -> &[Fp2<'a, N>; 6] {
        self.frobenius_coeffs_c1
            .as_ref()
            .expect("Fp6 Frobenius coefficients are not computed")
    }

    pub fn frobenius_coeffs_c2(&self) -> &[Fp2<'a, N>; 6] {
        self.frobenius_coeffs_c2
            .as_ref()
            .expect("Fp6 Frobenius coefficients are not computed")
    }

    #[inline(always)]
    pub fn mul_fp2_by_nonresidue(&self, fe: &Fp2<'a, N>) -> Fp2<'a, N> {
        self.non_residue.mul(fe)
    }
}

#[derive(Copy, Clone)]
pub struct Fp6<'a, const N: usize> {
    pub c0: Fp2<'a, N>,
    pub c1: Fp2<'a, N>,
    pub c2: Fp2<'a, N>,
    params: &'a Fp6Parameters<'a, N>,
}

impl<'a, const N: usize> Fp6<'a, N> {
    pub fn new(
        c0: Fp2<'a, N>,
        c1: Fp2<'a, N>,
        c2: Fp2<'a, N>,
        params: &'a Fp6Parameters<'a, N>,
    ) -> Self {
        Fp6 { c0, c1, c2, params }
    }

    #[inline]
    pub fn params(&self) -> &'a Fp6Parameters<'a, N> {
        self.params
    }

    pub fn mul_by_fp2(&mut self, element: &Fp2<'a, N>) {
        self.c0.mul_assign(element);
        self.c1.mul_assign(element);
        self.c2.mul_assign(element);
    }

    /// Multiplication by the sparse element c1 * Y.
    pub fn mul_by_1(&mut self, c1: &Fp2<'a, N>) {
        let mut b_b = self.c1;
        b_b.mul_assign(c1);

        let mut t1 = *c1;
        {
            let mut tmp = self.c1;
            tmp.add_assign(&self.c2);

            t1.mul_assign(&tmp);
            t1.sub_assign(&b_b);
            t1 = self.params.mul_fp2_by_nonresidue(&t1);
        }

        let mut t2 = *c1;
        {
            let mut tmp = self.c0;
            tmp.add_assign(&self.c1);

            t2.mul_assign(&tmp);
            t2.sub_assign(&b_b);
        }

        self.c0 = t1;
        self.c1 = t2;
        self.c2 = b_b;
    }

    /// Multiplication by the sparse element c0 + c1 * Y.
    pub fn mul_by_01(&mut self, c0: &Fp2<'a, N>, c1: &Fp2<'a, N>) {
        let mut a_a = self.c0;
        let mut b_b = self.c1;
        a_a.mul_assign(c0);
        b_b.mul_assign(c1);

        let mut t1 = *c1;
        {
            let mut tmp = self.c1;
            tmp.add_assign(&self.c2);

            t1.mul_assign(&tmp);
            t1.sub_assign(&b_b);
            t1 = self.params.mul_fp2_by_nonresidue(&t1);
            t1.add_assign(&a_a);
        }

        let mut t3 = *c0;
        {
            let mut tmp = self.c0;
            tmp.add_assign(&self.c2);

            t3.mul_assign(&tmp);
            t3.sub_assign(&a_a);
            t3.add_assign(&b_b);
        }

        let mut t2 = *c0;
        t2.add_assign(c1);
        {
            let mut tmp = self.c0;
            tmp.add_assign(&self.c1);

            t2.mul_assign(&tmp);
            t2.sub_assign(&a_a);
            t2.sub_assign(&b_b);
        }

        self.c0 = t1;
        self.c1 = t2;
        self.c2 = t3;
    }

    pub fn rand<R: Rng + ?Sized>(params: &'a Fp6Parameters<'a, N>, rng: &mut R) -> Self {
        Self::new(
            Fp2::rand(params.fp2_params, rng),
            Fp2::rand(params.fp2_params, rng),
            Fp2::rand(params.fp2_params, rng),
            params,
        )
    }
}

impl<'a, const N: usize> Field for Fp6<'a, N> {
    type Parameters = &'a Fp6Parameters<'a, N>;

    fn zero(params: Self::Parameters) -> Self {
        let zero = Fp2::zero(params.fp2_params);
        Fp6::new(zero, zero, zero, params)
    }

    fn one(params: Self::Parameters) -> Self {
        let zero = Fp2::zero(params.fp2_params);
        Fp6::new(Fp2::one(params.fp2_params), zero, zero, params)
    }

    #[inline]
    fn parameters(&self) -> Self::Parameters {
        self.params
    }

    fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero() && self.c2.is_zero()
    }

    fn is_one(&self) -> bool {
        self.c0.is_one() && self.c1.is_zero() && self.c2.is_zero()
    }

    #[inline]
    fn add_assign(&mut self, other: &Self) {
        self.c0.add_assign(&other.c0);
        self.c1.add_assign(&other.c1);
        self.c2.add_assign(&other.c2);
    }

    #[inline]
    fn sub_assign(&mut self, other: &Self) {
        self.c0.sub_assign(&other.c0);
        self.c1.sub_assign(&other.c1);
        self.c2.sub_assign(&other.c2);
    }

    fn mul_assign(&mut self, other: &Self) {
        let v0 = self.c0.mul(&other.c0);
        let v1 = self.c1.mul(&other.c1);
        let v2 = self.c2.mul(&other.c2);

        let x = self
            .c1
            .add(&self.c2)
            .mul(&other.c1.add(&other.c2))
            .sub(&v1)
            .sub(&v2);
        let y = self
            .c0
            .add(&self.c1)
            .mul(&other.c0.add(&other.c1))
            .sub(&v0)
            .sub(&v1);
        let z = self
            .c0
            .add(&self.c2)
            .mul(&other.c0.add(&other.c2))
            .sub(&v0)
            .add(&v1)
            .sub(&v2);

        self.c0 = v0.add(&self.params.mul_fp2_by_nonresidue(&x));
        self.c1 = y.add(&self.params.mul_fp2_by_nonresidue(&v2));
        self.c2 = z;
    }

    fn double_in_place(&mut self) -> &mut Self {
        self.c0.double_in_place();
        self.c1.double_in_place();
        self.c2.double_in_place();
        self
    }

    fn square_in_place(&mut self) -> &mut Self {
        let s0 = self.c0.square();
        let ab = self.c0.mul(&self.c1);
        let s1 = ab.double();
        let s2 = self.c0.sub(&self.c1).add(&self.c2).square();
        let bc = self.c1.mul(&self.c2);
        let s3 = bc.double();
        let s4 = self.c2.square();

        self.c0 = s0.add(&self.params.mul_fp2_by_nonresidue(&s3));
        self.c1 = s1.add(&self.params.mul_fp2_by_nonresidue(&s4));
        self.c2 = s1.add(&s2).add(&s3).sub(&s0).sub(&s4);
        self
    }

    fn negate(&mut self) {
        self.c0.negate();
        self.c1.negate();
        self.c2.negate();
    }

    fn inverse(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }
        let nr = |fe: &Fp2<'a, N>| self.params.mul_fp2_by_nonresidue(fe);

        let t0 = self.c0.square();
        let t1 = self.c1.square();
        let t2 = self.c2.square();
        let t3 = self.c0.mul(&self.c1);
        let t4 = self.c0.mul(&self.c2);
        let t5 = self.c1.mul(&self.c2);

        let s0 = t0.sub(&nr(&t5));
        let s1 = nr(&t2).sub(&t3);
        let s2 = t1.sub(&t4);

        let a1 = self.c2.mul(&s1);
        let a2 = self.c1.mul(&s2);
        let a3 = nr(&a1.add(&a2));
        let t6 = self.c0.mul(&s0).add(&a3);

        t6.inverse()
            .map(|t6| Fp6::new(t6.mul(&s0), t6.mul(&s1), t6.mul(&s2), self.params))
    }

    fn frobenius_map(&mut self, power: usize) {
        self.c0.frobenius_map(power);
        self.c1.frobenius_map(power);
        self.c2.frobenius_map(power);

        self.c1
            .mul_assign(&self.params.frobenius_coeffs_c1()[power % 6]);
        self.c2
            .mul_assign(&self.params.frobenius_coeffs_c2()[power % 6]);
    }
}

impl<'a, const N: usize> PartialEq for Fp6<'a, N> {
    fn eq(&self, other: &Self) -> bool {
        self.c0 == other.c0 && self.c1 == other.c1 && self.c2 == other.c2
    }
}

impl<'a, const N: usize> Eq for Fp6<'a, N> {}

impl<'a, const N: usize> Debug for Fp6<'a, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "Fp6_3over2({:?} + {:?} * v, {:?} * v^2)",
            self.c0, self.c1, self.c2
        )
    }
}

impl<'a, const N: usize> Display for Fp6<'a, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "Fp6_3over2({} + {} * v, {} * v^2)",
            self.c0, self.c1, self.c2
        )
    }
}
