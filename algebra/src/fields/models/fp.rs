use crate::{
    biginteger::{arithmetic as arith, BigInteger, MAX_LIMBS},
    error::AlgebraError,
    fields::{BitIterator, Field},
};
use num_bigint::BigUint;
use rand::Rng;
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

/// Bounds the search for a quadratic non-residue in Tonelli-Shanks. Moduli are
/// not checked for primality, so the search must stop somewhere.
const MAX_NON_RESIDUE_CANDIDATES: u64 = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendreSymbol {
    Zero = 0,
    QuadraticResidue = 1,
    QuadraticNonResidue = -1,
}

impl LegendreSymbol {
    pub fn is_zero(&self) -> bool {
        *self == LegendreSymbol::Zero
    }

    pub fn is_qnr(&self) -> bool {
        *self == LegendreSymbol::QuadraticNonResidue
    }

    pub fn is_qr(&self) -> bool {
        *self == LegendreSymbol::QuadraticResidue
    }
}

/// A prime field given by an odd modulus of at most `N` limbs, together with
/// its Montgomery constants for `R = 2^(64 * N)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimeField<const N: usize> {
    modulus: BigInteger<N>,
    modulus_bits: u32,
    /// R mod p, the Montgomery form of one.
    r: BigInteger<N>,
    /// R^2 mod p, used to convert into Montgomery form.
    r2: BigInteger<N>,
    /// -p^(-1) mod 2^64
    inv: u64,
}

impl<const N: usize> PrimeField<N> {
    pub fn new(modulus: BigInteger<N>) -> Result<Self, AlgebraError> {
        if N == 0 || N > MAX_LIMBS {
            return Err(AlgebraError::UnsupportedLimbCount(N));
        }
        if modulus.is_even() || modulus <= BigInteger::from_u64(3) {
            return Err(AlgebraError::InvalidModulus);
        }

        let inv = montgomery_inverse(modulus.0[0]);

        let mut r = BigInteger::from_u64(1);
        for _ in 0..(64 * N) {
            double_mod(&mut r, &modulus);
        }
        let mut r2 = r;
        for _ in 0..(64 * N) {
            double_mod(&mut r2, &modulus);
        }

        Ok(PrimeField {
            modulus,
            modulus_bits: modulus.num_bits(),
            r,
            r2,
            inv,
        })
    }

    /// Builds the field from a canonical big-endian modulus encoding: the top
    /// byte must be nonzero.
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self, AlgebraError> {
        match bytes.first() {
            None | Some(0) => Err(AlgebraError::InvalidModulus),
            Some(_) => Self::new(BigInteger::from_be_bytes_padded(bytes)?),
        }
    }

    #[inline]
    pub fn modulus(&self) -> &BigInteger<N> {
        &self.modulus
    }

    #[inline]
    pub fn modulus_bits(&self) -> u32 {
        self.modulus_bits
    }

    /// Length of the minimal big-endian encoding of the modulus.
    #[inline]
    pub fn modulus_byte_len(&self) -> usize {
        (self.modulus_bits as usize + 7) / 8
    }

    /// Length of the fixed width encoding of an element.
    #[inline]
    pub fn element_byte_len(&self) -> usize {
        N * 8
    }

    pub fn modulus_biguint(&self) -> BigUint {
        self.modulus.to_biguint()
    }

    #[inline]
    pub(crate) fn add_repr(&self, a: &mut BigInteger<N>, b: &BigInteger<N>) {
        let carry = a.add_nocarry(b);
        if carry || *a >= self.modulus {
            a.sub_noborrow(&self.modulus);
        }
    }

    #[inline]
    pub(crate) fn sub_repr(&self, a: &mut BigInteger<N>, b: &BigInteger<N>) {
        if a.sub_noborrow(b) {
            a.add_nocarry(&self.modulus);
        }
    }

    /// Montgomery multiplication, coarsely integrated operand scanning. Two
    /// extra words hold the intermediate sum so the modulus may use the top bit
    /// of its highest limb.
    #[inline]
    pub(crate) fn mont_mul(&self, a: &BigInteger<N>, b: &BigInteger<N>) -> BigInteger<N> {
        let m = &self.modulus.0;
        let mut t = [0u64; N];
        let mut t_hi = 0u64;

        for i in 0..N {
            let mut carry = 0u64;
            for j in 0..N {
                t[j] = arith::mac_with_carry(t[j], a.0[j], b.0[i], &mut carry);
            }
            let mut t_top = 0u64;
            let t_n = arith::adc(t_hi, carry, &mut t_top);

            let k = t[0].wrapping_mul(self.inv);
            let mut carry = 0u64;
            arith::mac_with_carry(t[0], k, m[0], &mut carry);
            for j in 1..N {
                t[j - 1] = arith::mac_with_carry(t[j], k, m[j], &mut carry);
            }
            let mut t_carry = 0u64;
            t[N - 1] = arith::adc(t_n, carry, &mut t_carry);
            t_hi = t_top + t_carry;
        }

        let mut result = BigInteger(t);
        if t_hi != 0 || result >= self.modulus {
            result.sub_noborrow(&self.modulus);
        }
        result
    }

    #[inline]
    fn halve_repr(&self, a: &mut BigInteger<N>) {
        if a.is_even() {
            a.div2();
        } else {
            let carry = a.add_nocarry(&self.modulus);
            a.div2();
            if carry {
                a.0[N - 1] |= 1 << 63;
            }
        }
    }
}

/// Computes -m^(-1) mod 2^64 for odd m. The odd residues mod 2^64 form a group
/// of order 2^63, so m^(2^63 - 1) is the inverse of m.
fn montgomery_inverse(m: u64) -> u64 {
    let mut inv = 1u64;
    for _ in 0..63 {
        inv = inv.wrapping_mul(inv);
        inv = inv.wrapping_mul(m);
    }
    inv.wrapping_neg()
}

#[inline]
fn double_mod<const N: usize>(a: &mut BigInteger<N>, modulus: &BigInteger<N>) {
    let carry = a.mul2();
    if carry || *a >= *modulus {
        a.sub_noborrow(modulus);
    }
}

/// An element of a `PrimeField`, stored in Montgomery form.
#[derive(Copy, Clone)]
pub struct Fp<'a, const N: usize> {
    repr: BigInteger<N>,
    field: &'a PrimeField<N>,
}

impl<'a, const N: usize> Fp<'a, N> {
    /// Converts a plain integer into the field, `None` unless it is reduced.
    pub fn from_repr(field: &'a PrimeField<N>, repr: BigInteger<N>) -> Option<Self> {
        if repr >= field.modulus {
            None
        } else {
            Some(Fp {
                repr: field.mont_mul(&repr, &field.r2),
                field,
            })
        }
    }

    /// Returns the plain integer value of this element.
    pub fn into_repr(&self) -> BigInteger<N> {
        self.field.mont_mul(&self.repr, &BigInteger::from_u64(1))
    }

    pub fn from_u64(field: &'a PrimeField<N>, value: u64) -> Self {
        let one = Self::one(field);
        let mut res = Self::zero(field);
        for bit in BitIterator::new([value]) {
            res.double_in_place();
            if bit {
                res.add_assign(&one);
            }
        }
        res
    }

    /// Decodes exactly `N * 8` big-endian bytes.
    pub fn from_be_bytes(field: &'a PrimeField<N>, bytes: &[u8]) -> Result<Self, AlgebraError> {
        let repr = BigInteger::read_be(bytes)?;
        Self::from_repr(field, repr).ok_or(AlgebraError::NotReduced)
    }

    /// Decodes at most `N * 8` big-endian bytes.
    pub fn from_be_bytes_padded(
        field: &'a PrimeField<N>,
        bytes: &[u8],
    ) -> Result<Self, AlgebraError> {
        let repr = BigInteger::from_be_bytes_padded(bytes)?;
        Self::from_repr(field, repr).ok_or(AlgebraError::NotReduced)
    }

    /// Fixed width encoding, `N * 8` bytes.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        self.into_repr().to_be_bytes()
    }

    /// Encoding trimmed to the byte length of the modulus.
    pub fn to_dense_be_bytes(&self) -> Vec<u8> {
        let bytes = self.to_be_bytes();
        bytes[bytes.len() - self.field.modulus_byte_len()..].to_vec()
    }

    #[inline]
    pub fn field(&self) -> &'a PrimeField<N> {
        self.field
    }

    /// Samples a uniformly random element.
    pub fn rand<R: Rng + ?Sized>(field: &'a PrimeField<N>, rng: &mut R) -> Self {
        let bits = field.modulus_bits as usize;
        loop {
            let mut repr = BigInteger::<N>::zero();
            for (i, limb) in repr.0.iter_mut().enumerate() {
                let low = i * 64;
                *limb = if low >= bits {
                    0
                } else if bits - low < 64 {
                    rng.gen::<u64>() & ((1u64 << (bits - low)) - 1)
                } else {
                    rng.gen()
                };
            }
            if let Some(element) = Self::from_repr(field, repr) {
                return element;
            }
        }
    }

    /// Euler criterion.
    pub fn legendre(&self) -> LegendreSymbol {
        if self.is_zero() {
            return LegendreSymbol::Zero;
        }
        // (p - 1) / 2
        let mut exp = self.field.modulus;
        exp.0[0] &= !1;
        exp.div2();
        if self.pow(exp).is_one() {
            LegendreSymbol::QuadraticResidue
        } else {
            LegendreSymbol::QuadraticNonResidue
        }
    }

    pub fn sqrt(&self) -> Option<Self> {
        if self.is_zero() {
            return Some(*self);
        }

        if self.field.modulus.0[0] & 3 == 3 {
            // a1 = a^((p - 3) / 4)
            let mut exp = self.field.modulus;
            exp.sub_noborrow(&BigInteger::from_u64(3));
            exp.divn(2);
            let a1 = self.pow(exp);

            // a0 = a1^2 * a = a^((p - 1) / 2)
            let mut a0 = a1.square();
            a0.mul_assign(self);

            let mut minus_one = Self::one(self.field);
            minus_one.negate();
            if a0 == minus_one {
                None
            } else {
                Some(a1.mul(self))
            }
        } else {
            self.tonelli_shanks()
        }
    }

    fn tonelli_shanks(&self) -> Option<Self> {
        if !self.legendre().is_qr() {
            return None;
        }

        // p - 1 = 2^s * t, t odd
        let mut trace = self.field.modulus;
        trace.0[0] &= !1;
        let mut two_adicity = 0u32;
        while trace.is_even() {
            trace.div2();
            two_adicity += 1;
        }

        let one = Self::one(self.field);
        let mut z = one.double();
        let mut found = false;
        for _ in 0..MAX_NON_RESIDUE_CANDIDATES {
            if z.legendre().is_qnr() {
                found = true;
                break;
            }
            z.add_assign(&one);
        }
        if !found {
            return None;
        }

        let mut c = z.pow(trace);
        // (t + 1) / 2
        let mut exp = trace;
        exp.add_nocarry(&BigInteger::from_u64(1));
        exp.div2();
        let mut x = self.pow(exp);
        let mut b = self.pow(trace);
        let mut m = two_adicity;

        while !b.is_one() {
            let mut k = 0u32;
            let mut b2k = b;
            while !b2k.is_one() {
                b2k.square_in_place();
                k += 1;
                if k >= m {
                    return None;
                }
            }

            let mut w = c;
            for _ in 0..(m - k - 1) {
                w.square_in_place();
            }

            x.mul_assign(&w);
            c = w.square();
            b.mul_assign(&c);
            m = k;
        }

        if x.square() == *self {
            Some(x)
        } else {
            None
        }
    }
}

impl<'a, const N: usize> Field for Fp<'a, N> {
    type Parameters = &'a PrimeField<N>;

    #[inline]
    fn zero(field: Self::Parameters) -> Self {
        Fp {
            repr: BigInteger::zero(),
            field,
        }
    }

    #[inline]
    fn one(field: Self::Parameters) -> Self {
        Fp {
            repr: field.r,
            field,
        }
    }

    #[inline]
    fn parameters(&self) -> Self::Parameters {
        self.field
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.repr.is_zero()
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.repr == self.field.r
    }

    #[inline]
    fn add_assign(&mut self, other: &Self) {
        self.field.add_repr(&mut self.repr, &other.repr);
    }

    #[inline]
    fn sub_assign(&mut self, other: &Self) {
        self.field.sub_repr(&mut self.repr, &other.repr);
    }

    #[inline]
    fn mul_assign(&mut self, other: &Self) {
        self.repr = self.field.mont_mul(&self.repr, &other.repr);
    }

    #[inline]
    fn double_in_place(&mut self) -> &mut Self {
        double_mod(&mut self.repr, &self.field.modulus);
        self
    }

    #[inline]
    fn square_in_place(&mut self) -> &mut Self {
        self.repr = self.field.mont_mul(&self.repr, &self.repr);
        self
    }

    #[inline]
    fn negate(&mut self) {
        if !self.is_zero() {
            let mut tmp = self.field.modulus;
            tmp.sub_noborrow(&self.repr);
            self.repr = tmp;
        }
    }

    /// Binary extended Euclid on the Montgomery representation. Starting `b`
    /// at R^2 leaves the Montgomery form of the inverse once `u` reaches one.
    fn inverse(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }

        let one = BigInteger::<N>::from_u64(1);
        let field = self.field;

        let mut u = self.repr;
        let mut v = field.modulus;
        let mut b = field.r2;
        let mut c = BigInteger::<N>::zero();

        while u != one && v != one {
            // A common factor with the modulus drives one side to zero.
            if u.is_zero() || v.is_zero() {
                return None;
            }

            while u.is_even() {
                u.div2();
                field.halve_repr(&mut b);
            }

            while v.is_even() {
                v.div2();
                field.halve_repr(&mut c);
            }

            if v < u {
                u.sub_noborrow(&v);
                field.sub_repr(&mut b, &c);
            } else {
                v.sub_noborrow(&u);
                field.sub_repr(&mut c, &b);
            }
        }

        let repr = if u == one { b } else { c };
        Some(Fp { repr, field })
    }

    #[inline]
    fn frobenius_map(&mut self, _: usize) {
        // No-op: No effect in a prime field.
    }
}

impl<'a, const N: usize> PartialEq for Fp<'a, N> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.repr == other.repr
    }
}

impl<'a, const N: usize> Eq for Fp<'a, N> {}

impl<'a, const N: usize> Debug for Fp<'a, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Fp({})", self.into_repr())
    }
}

impl<'a, const N: usize> Display for Fp<'a, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Fp({})", self.into_repr())
    }
}
