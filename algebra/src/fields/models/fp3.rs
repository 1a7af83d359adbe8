use crate::{
    error::AlgebraError,
    fields::{frobenius_exponent, Field, Fp, PrimeField},
};
use rand::Rng;
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

/// Model for cubic extension field of a prime field, F3 = F[X]/(X^3-alpha),
/// with alpha being a (cubic) "non-residue".
#[derive(Clone, Debug)]
pub struct Fp3Parameters<'a, const N: usize> {
    /// alpha
    pub non_residue: Fp<'a, N>,
    /// alpha^((p^k - 1) / 3)
    frobenius_coeffs_c1: Option<[Fp<'a, N>; 3]>,
    /// alpha^((2 * p^k - 2) / 3)
    frobenius_coeffs_c2: Option<[Fp<'a, N>; 3]>,
}

impl<'a, const N: usize> Fp3Parameters<'a, N> {
    pub fn new(non_residue: Fp<'a, N>) -> Self {
        Self {
            non_residue,
            frobenius_coeffs_c1: None,
            frobenius_coeffs_c2: None,
        }
    }

    #[inline]
    pub fn field(&self) -> &'a PrimeField<N> {
        self.non_residue.field()
    }

    pub fn calculate_frobenius_coeffs(&mut self) -> Result<(), AlgebraError> {
        let modulus = self.field().modulus_biguint();
        let one = Fp::one(self.field());
        let mut c1 = [one; 3];
        let mut c2 = [one; 3];
        for power in 0..3 {
            c1[power] = self
                .non_residue
                .pow(frobenius_exponent(&modulus, power, 3)?);
            c2[power] = c1[power].square();
        }
        self.frobenius_coeffs_c1 = Some(c1);
        self.frobenius_coeffs_c2 = Some(c2);
        Ok(())
    }

    pub fn frobenius_coeffs_c1(&self) -> &[Fp<'a, N>; 3] {
        self.frobenius_coeffs_c1
            .as_ref()
            .expect("Fp3 Frobenius coefficients are not computed")
    }

    pub fn frobenius_coeffs_c2(&self) -> &[Fp<'a, N>; 3] {
        self.frobenius_coeffs_c2
            .as_ref()
            .expect("Fp3 Frobenius coefficients are not computed")
    }

    #[inline(always)]
    pub fn mul_fp_by_nonresidue(&self, fe: &Fp<'a, N>) -> Fp<'a, N> {
        self.non_residue.mul(fe)
    }
}

#[derive(Copy, Clone)]
pub struct Fp3<'a, const N: usize> {
    pub c0: Fp<'a, N>,
    pub c1: Fp<'a, N>,
    pub c2: Fp<'a, N>,
    params: &'a Fp3Parameters<'a, N>,
}

impl<'a, const N: usize> Fp3<'a, N> {
    pub fn new(
        c0: Fp<'a, N>,
        c1: Fp<'a, N>,
        c2: Fp<'a, N>,
        params: &'a Fp3Parameters<'a, N>,
    ) -> Self {
        Fp3 { c0, c1, c2, params }
    }

    pub fn from_base(c0: Fp<'a, N>, params: &'a Fp3Parameters<'a, N>) -> Self {
        let zero = Fp::zero(params.field());
        Fp3::new(c0, zero, zero, params)
    }

    #[inline]
    pub fn params(&self) -> &'a Fp3Parameters<'a, N> {
        self.params
    }

    pub fn mul_by_fp(&mut self, value: &Fp<'a, N>) {
        self.c0.mul_assign(value);
        self.c1.mul_assign(value);
        self.c2.mul_assign(value);
    }

    pub fn rand<R: Rng + ?Sized>(params: &'a Fp3Parameters<'a, N>, rng: &mut R) -> Self {
        let field = params.field();
        Self::new(
            Fp::rand(field, rng),
            Fp::rand(field, rng),
            Fp::rand(field, rng),
            params,
        )
    }
}

impl<'a, const N: usize> Field for Fp3<'a, N> {
    type Parameters = &'a Fp3Parameters<'a, N>;

    fn zero(params: Self::Parameters) -> Self {
        let zero = Fp::zero(params.field());
        Fp3::new(zero, zero, zero, params)
    }

    fn one(params: Self::Parameters) -> Self {
        Fp3::from_base(Fp::one(params.field()), params)
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

    /// Devegili OhEig Scott Dahab, Multiplication and Squaring on
    /// Pairing-Friendly Fields, Section 4 (Karatsuba)
    fn mul_assign(&mut self, other: &Self) {
        let (a, b, c) = (self.c0, self.c1, self.c2);
        let (d, e, f) = (other.c0, other.c1, other.c2);

        let ad = d.mul(&a);
        let be = e.mul(&b);
        let cf = f.mul(&c);

        let x = e.add(&f).mul(&b.add(&c)).sub(&be).sub(&cf);
        let y = a.add(&b).mul(&d.add(&e)).sub(&ad).sub(&be);
        let z = a.add(&c).mul(&d.add(&f)).sub(&ad).add(&be).sub(&cf);

        self.c0 = ad.add(&self.params.mul_fp_by_nonresidue(&x));
        self.c1 = y.add(&self.params.mul_fp_by_nonresidue(&cf));
        self.c2 = z;
    }

    fn double_in_place(&mut self) -> &mut Self {
        self.c0.double_in_place();
        self.c1.double_in_place();
        self.c2.double_in_place();
        self
    }

    /// Chung-Hasan SQR2 squaring.
    fn square_in_place(&mut self) -> &mut Self {
        let a = self.c0;
        let b = self.c1;
        let c = self.c2;

        let s0 = a.square();
        let ab = a.mul(&b);
        let s1 = ab.double();
        let s2 = a.sub(&b).add(&c).square();
        let bc = b.mul(&c);
        let s3 = bc.double();
        let s4 = c.square();

        self.c0 = s0.add(&self.params.mul_fp_by_nonresidue(&s3));
        self.c1 = s1.add(&self.params.mul_fp_by_nonresidue(&s4));
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
        // From "High-Speed Software Implementation of the Optimal Ate Pairing
        // over Barreto-Naehrig Curves"; Algorithm 17
        let t0 = self.c0.square();
        let t1 = self.c1.square();
        let t2 = self.c2.square();
        let t3 = self.c0.mul(&self.c1);
        let t4 = self.c0.mul(&self.c2);
        let t5 = self.c1.mul(&self.c2);
        let n5 = self.params.mul_fp_by_nonresidue(&t5);

        let s0 = t0.sub(&n5);
        let s1 = self.params.mul_fp_by_nonresidue(&t2).sub(&t3);
        let s2 = t1.sub(&t4);

        let a1 = self.c2.mul(&s1);
        let a2 = self.c1.mul(&s2);
        let a3 = self.params.mul_fp_by_nonresidue(&a1.add(&a2));
        let t6 = self.c0.mul(&s0).add(&a3);

        t6.inverse().map(|t6| {
            Fp3::new(t6.mul(&s0), t6.mul(&s1), t6.mul(&s2), self.params)
        })
    }

    fn frobenius_map(&mut self, power: usize) {
        self.c1
            .mul_assign(&self.params.frobenius_coeffs_c1()[power % 3]);
        self.c2
            .mul_assign(&self.params.frobenius_coeffs_c2()[power % 3]);
    }
}

impl<'a, const N: usize> PartialEq for Fp3<'a, N> {
    fn eq(&self, other: &Self) -> bool {
        self.c0 == other.c0 && self.c1 == other.c1 && self.c2 == other.c2
    }
}

impl<'a, const N: usize> Eq for Fp3<'a, N> {}

impl<'a, const N: usize> Debug for Fp3<'a, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Fp3({:?}, {:?}, {:?})", self.c0, self.c1, self.c2)
    }
}

impl<'a, const N: usize> Display for Fp3<'a, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Fp3({}, {}, {})", self.c0, self.c1, self.c2)
    }
}
