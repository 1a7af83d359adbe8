use crate::{
    error::AlgebraError,
    fields::{frobenius_exponent, Field, Fp, LegendreSymbol, PrimeField},
};
use rand::Rng;
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

/// Model for quadratic extension field of a prime field, F2 = F[X]/(X^2-alpha),
/// with alpha being a (quadratic) "non-residue".
#[derive(Clone, Debug)]
pub struct Fp2Parameters<'a, const N: usize> {
    /// alpha
    pub non_residue: Fp<'a, N>,
    /// Coefficients for the Frobenius automorphism, alpha^((p^k - 1) / 2).
    frobenius_coeffs_c1: Option<[Fp<'a, N>; 2]>,
}

impl<'a, const N: usize> Fp2Parameters<'a, N> {
    pub fn new(non_residue: Fp<'a, N>) -> Self {
        Self {
            non_residue,
            frobenius_coeffs_c1: None,
        }
    }

    #[inline]
    pub fn field(&self) -> &'a PrimeField<N> {
        self.non_residue.field()
    }

    /// Computes the Frobenius coefficients from the non-residue directly.
    pub fn calculate_frobenius_coeffs(&mut self) -> Result<(), AlgebraError> {
        let modulus = self.field().modulus_biguint();
        let mut coeffs = [Fp::one(self.field()); 2];
        for (power, coeff) in coeffs.iter_mut().enumerate() {
            *coeff = self
                .non_residue
                .pow(frobenius_exponent(&modulus, power, 2)?);
        }
        self.frobenius_coeffs_c1 = Some(coeffs);
        Ok(())
    }

    pub fn frobenius_coeffs_c1(&self) -> &[Fp<'a, N>; 2] {
        self.frobenius_coeffs_c1
            .as_ref()
            .expect("Fp2 Frobenius coefficients are not computed")
    }

    /// Multiplication of an element of the base field by alpha.
    #[inline(always)]
    pub fn mul_fp_by_nonresidue(&self, fe: &Fp<'a, N>) -> Fp<'a, N> {
        self.non_residue.mul(fe)
    }
}

/// An element of F2, c0 + c1 * X.
#[derive(Copy, Clone)]
pub struct Fp2<'a, const N: usize> {
    pub c0: Fp<'a, N>,
    pub c1: Fp<'a, N>,
    params: &'a Fp2Parameters<'a, N>,
}

impl<'a, const N: usize> Fp2<'a, N> {
    pub fn new(c0: Fp<'a, N>, c1: Fp<'a, N>, params: &'a Fp2Parameters<'a, N>) -> Self {
        Fp2 { c0, c1, params }
    }

    /// Embeds an element of the base field.
    pub fn from_base(c0: Fp<'a, N>, params: &'a Fp2Parameters<'a, N>) -> Self {
        Fp2 {
            c0,
            c1: Fp::zero(params.field()),
            params,
        }
    }

    #[inline]
    pub fn params(&self) -> &'a Fp2Parameters<'a, N> {
        self.params
    }

    /// Norm of Fp2 over Fp: Norm(a) = a.x^2 - beta * a.y^2
    pub fn norm(&self) -> Fp<'a, N> {
        let t0 = self.c0.square();
        let t1 = self.params.mul_fp_by_nonresidue(&self.c1.square());
        t0.sub(&t1)
    }

    pub fn conjugate(&mut self) {
        self.c1.negate();
    }

    pub fn mul_by_fp(&mut self, element: &Fp<'a, N>) {
        self.c0.mul_assign(element);
        self.c1.mul_assign(element);
    }

    pub fn legendre(&self) -> LegendreSymbol {
        self.norm().legendre()
    }

    /// Square root via the norm: if (x0 + x1 * X)^2 = c0 + c1 * X then
    /// x0^2 = (c0 +- sqrt(norm)) / 2 and x1 = c1 / (2 * x0).
    pub fn sqrt(&self) -> Option<Self> {
        let field = self.params.field();
        let zero = Fp::zero(field);

        if self.c1.is_zero() {
            if let Some(root) = self.c0.sqrt() {
                return Some(Self::new(root, zero, self.params));
            }
            // c0 = alpha * x^2
            let alpha_inv = self.params.non_residue.inverse()?;
            let root = self.c0.mul(&alpha_inv).sqrt()?;
            return Some(Self::new(zero, root, self.params));
        }

        let delta = self.norm().sqrt()?;
        let two_inv = Fp::from_u64(field, 2).inverse()?;
        for delta in [delta, delta.neg()].iter() {
            let x0_square = self.c0.add(delta).mul(&two_inv);
            if let Some(x0) = x0_square.sqrt() {
                if let Some(inv) = x0.double().inverse() {
                    let candidate = Self::new(x0, self.c1.mul(&inv), self.params);
                    if candidate.square() == *self {
                        return Some(candidate);
                    }
                }
            }
        }
        None
    }

    pub fn rand<R: Rng + ?Sized>(params: &'a Fp2Parameters<'a, N>, rng: &mut R) -> Self {
        let field = params.field();
        Self::new(Fp::rand(field, rng), Fp::rand(field, rng), params)
    }
}

impl<'a, const N: usize> Field for Fp2<'a, N> {
    type Parameters = &'a Fp2Parameters<'a, N>;

    fn zero(params: Self::Parameters) -> Self {
        let zero = Fp::zero(params.field());
        Fp2::new(zero, zero, params)
    }

    fn one(params: Self::Parameters) -> Self {
        let field = params.field();
        Fp2::new(Fp::one(field), Fp::zero(field), params)
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

    /// Karatsuba multiplication,
    /// [Devegili OhEig Scott Dahab --- Multiplication and Squaring on
    /// Pairing-Friendly Fields.pdf; Section 3 (Karatsuba)]
    #[inline]
    fn mul_assign(&mut self, other: &Self) {
        let v0 = self.c0.mul(&other.c0);
        let v1 = self.c1.mul(&other.c1);

        let mut c1 = self.c0.add(&self.c1);
        c1.mul_assign(&other.c0.add(&other.c1));
        c1.sub_assign(&v0);
        c1.sub_assign(&v1);

        self.c1 = c1;
        self.c0 = v0.add(&self.params.mul_fp_by_nonresidue(&v1));
    }

    fn double_in_place(&mut self) -> &mut Self {
        self.c0.double_in_place();
        self.c1.double_in_place();
        self
    }

    /// Complex squaring.
    fn square_in_place(&mut self) -> &mut Self {
        // v0 = c0 - c1
        let mut v0 = self.c0.sub(&self.c1);
        // v3 = c0 - beta * c1
        let v3 = self.c0.sub(&self.params.mul_fp_by_nonresidue(&self.c1));
        // v2 = c0 * c1
        let v2 = self.c0.mul(&self.c1);

        // v0 = (v0 * v3) + v2
        v0.mul_assign(&v3);
        v0.add_assign(&v2);

        self.c1 = v2.double();
        self.c0 = v0.add(&self.params.mul_fp_by_nonresidue(&v2));
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
        // Guide to Pairing-based Cryptography, Algorithm 5.19.
        self.norm().inverse().map(|t| {
            let c0 = self.c0.mul(&t);
            let c1 = self.c1.mul(&t).neg();
            Self::new(c0, c1, self.params)
        })
    }

    fn frobenius_map(&mut self, power: usize) {
        self.c1
            .mul_assign(&self.params.frobenius_coeffs_c1()[power % 2]);
    }
}

impl<'a, const N: usize> PartialEq for Fp2<'a, N> {
    fn eq(&self, other: &Self) -> bool {
        self.c0 == other.c0 && self.c1 == other.c1
    }
}

impl<'a, const N: usize> Eq for Fp2<'a, N> {}

impl<'a, const N: usize> Debug for Fp2<'a, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Fp2({:?} + {:?} * u)", self.c0, self.c1)
    }
}

impl<'a, const N: usize> Display for Fp2<'a, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Fp2({} + {} * u)", self.c0, self.c1)
    }
}
