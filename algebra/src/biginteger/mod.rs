//! Fixed width unsigned integers used as the representation of field elements,
//! and a few helpers over plain little-endian limb slices used for scalars and
//! loop parameters.

use crate::error::AlgebraError;
use byteorder::{BigEndian, ByteOrder, LittleEndian};
use num_bigint::BigUint;
use std::{
    cmp::Ordering,
    fmt::{Display, Formatter, Result as FmtResult},
};

pub mod arithmetic;
use self::arithmetic as arith;

/// The widest supported representation, 16 limbs of 64 bits.
pub const MAX_LIMBS: usize = 16;

/// An unsigned integer of `N` 64 bit limbs, least significant limb first.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct BigInteger<const N: usize>(pub [u64; N]);

impl<const N: usize> BigInteger<N> {
    pub const fn new(value: [u64; N]) -> Self {
        BigInteger(value)
    }

    #[inline]
    pub fn zero() -> Self {
        BigInteger([0u64; N])
    }

    #[inline]
    pub fn from_u64(value: u64) -> Self {
        let mut repr = Self::zero();
        repr.0[0] = value;
        repr
    }

    #[inline]
    pub fn add_nocarry(&mut self, other: &Self) -> bool {
        let mut carry = 0;

        for (a, b) in self.0.iter_mut().zip(other.0.iter()) {
            *a = arith::adc(*a, *b, &mut carry);
        }

        carry != 0
    }

    #[inline]
    pub fn sub_noborrow(&mut self, other: &Self) -> bool {
        let mut borrow = 0;

        for (a, b) in self.0.iter_mut().zip(other.0.iter()) {
            *a = arith::sbb(*a, *b, &mut borrow);
        }

        borrow != 0
    }

    /// Shifts left by one bit, returns the bit shifted out of the top limb.
    #[inline]
    pub fn mul2(&mut self) -> bool {
        let mut last = 0;
        for i in self.0.iter_mut() {
            let tmp = *i >> 63;
            *i <<= 1;
            *i |= last;
            last = tmp;
        }
        last != 0
    }

    #[inline]
    pub fn div2(&mut self) {
        arith::shr1(&mut self.0);
    }

    #[inline]
    pub fn divn(&mut self, mut n: u32) {
        if n as usize >= 64 * N {
            *self = Self::zero();
            return;
        }

        while n >= 64 {
            let mut t = 0;
            for i in self.0.iter_mut().rev() {
                std::mem::swap(&mut t, i);
            }
            n -= 64;
        }

        if n > 0 {
            let mut t = 0;
            for i in self.0.iter_mut().rev() {
                let t2 = *i << (64 - n);
                *i >>= n;
                *i |= t;
                t = t2;
            }
        }
    }

    #[inline]
    pub fn is_odd(&self) -> bool {
        self.0[0] & 1 == 1
    }

    #[inline]
    pub fn is_even(&self) -> bool {
        !self.is_odd()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&e| e == 0)
    }

    #[inline]
    pub fn num_bits(&self) -> u32 {
        num_bits(&self.0) as u32
    }

    #[inline]
    pub fn get_bit(&self, i: usize) -> bool {
        if i >= 64 * N {
            false
        } else {
            (self.0[i / 64] >> (i % 64)) & 1 == 1
        }
    }

    /// Divides in place by a single word and returns the remainder.
    pub fn div_rem_u64(&mut self, divisor: u64) -> u64 {
        debug_assert!(divisor != 0);
        let divisor = u128::from(divisor);
        let mut rem = 0u128;
        for limb in self.0.iter_mut().rev() {
            let cur = (rem << 64) | u128::from(*limb);
            *limb = (cur / divisor) as u64;
            rem = cur % divisor;
        }
        rem as u64
    }

    /// Reads exactly `N * 8` big-endian bytes.
    pub fn read_be(bytes: &[u8]) -> Result<Self, AlgebraError> {
        if bytes.len() != N * 8 {
            return Err(AlgebraError::InvalidEncodingLength {
                expected: N * 8,
                got: bytes.len(),
            });
        }
        let mut repr = Self::zero();
        for (limb, chunk) in repr.0.iter_mut().zip(bytes.chunks(8).rev()) {
            *limb = BigEndian::read_u64(chunk);
        }
        Ok(repr)
    }

    /// Reads at most `N * 8` big-endian bytes, padding with leading zeroes.
    pub fn from_be_bytes_padded(bytes: &[u8]) -> Result<Self, AlgebraError> {
        if bytes.len() > N * 8 {
            return Err(AlgebraError::InvalidEncodingLength {
                expected: N * 8,
                got: bytes.len(),
            });
        }
        let mut padded = vec![0u8; N * 8];
        padded[N * 8 - bytes.len()..].copy_from_slice(bytes);
        Self::read_be(&padded)
    }

    pub fn to_be_bytes(&self) -> Vec<u8> {
        let mut out = vec![0u8; N * 8];
        for (limb, chunk) in self.0.iter().zip(out.chunks_mut(8).rev()) {
            BigEndian::write_u64(chunk, *limb);
        }
        out
    }

    pub fn to_biguint(&self) -> BigUint {
        limbs_to_biguint(&self.0)
    }

    pub fn from_biguint(value: &BigUint) -> Result<Self, AlgebraError> {
        Self::from_be_bytes_padded(&value.to_bytes_be())
    }
}

impl<const N: usize> Default for BigInteger<N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize> AsRef<[u64]> for BigInteger<N> {
    #[inline]
    fn as_ref(&self) -> &[u64] {
        &self.0
    }
}

impl<const N: usize> AsMut<[u64]> for BigInteger<N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [u64] {
        &mut self.0
    }
}

impl<const N: usize> Ord for BigInteger<N> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        for (a, b) in self.0.iter().rev().zip(other.0.iter().rev()) {
            match a.cmp(b) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }
}

impl<const N: usize> PartialOrd for BigInteger<N> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const N: usize> Display for BigInteger<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "0x")?;
        for i in self.0.iter().rev() {
            write!(f, "{:016x}", *i)?;
        }
        Ok(())
    }
}

/// Number of significant bits of a little-endian limb slice.
pub fn num_bits(limbs: &[u64]) -> usize {
    for (i, limb) in limbs.iter().enumerate().rev() {
        if *limb != 0 {
            return i * 64 + 64 - limb.leading_zeros() as usize;
        }
    }
    0
}

pub fn hamming_weight(limbs: &[u64]) -> u32 {
    limbs.iter().map(|limb| limb.count_ones()).sum()
}

pub fn is_zero(limbs: &[u64]) -> bool {
    limbs.iter().all(|&limb| limb == 0)
}

/// Reads `width` (< 64) bits starting at bit `offset`.
pub fn get_bits(limbs: &[u64], offset: usize, width: usize) -> u64 {
    debug_assert!(width < 64);
    let limb = offset / 64;
    let shift = offset % 64;
    if limb >= limbs.len() {
        return 0;
    }
    let mut value = limbs[limb] >> shift;
    if shift + width > 64 && limb + 1 < limbs.len() {
        value |= limbs[limb + 1] << (64 - shift);
    }
    value & ((1u64 << width) - 1)
}

pub fn limbs_to_biguint(limbs: &[u64]) -> BigUint {
    let mut bytes = vec![0u8; limbs.len() * 8];
    for (limb, chunk) in limbs.iter().zip(bytes.chunks_mut(8)) {
        LittleEndian::write_u64(chunk, *limb);
    }
    BigUint::from_bytes_le(&bytes)
}

/// Little-endian limbs of `value`, at least one limb long.
pub fn biguint_to_limbs(value: &BigUint) -> Vec<u64> {
    let mut bytes = value.to_bytes_le();
    let padded_len = ((bytes.len() + 7) / 8).max(1) * 8;
    bytes.resize(padded_len, 0);
    bytes.chunks(8).map(LittleEndian::read_u64).collect()
}

/// Non-adjacent form of a scalar, least significant digit first.
pub fn naf(limbs: &[u64]) -> Vec<i8> {
    let mut k = limbs.to_vec();
    k.push(0);
    let mut res = Vec::with_capacity(num_bits(limbs) + 1);
    while !is_zero(&k) {
        if k[0] & 1 == 1 {
            let z = 2 - (k[0] % 4) as i8;
            res.push(z);
            if z == 1 {
                arith::sub_small(&mut k, 1);
            } else {
                arith::add_small(&mut k, 1);
            }
        } else {
            res.push(0);
        }
        arith::shr1(&mut k);
    }
    res
}

/// Windowed non-adjacent form with odd digits in `(-2^(window-1), 2^(window-1))`,
/// least significant digit first.
pub fn wnaf(limbs: &[u64], window: usize) -> Vec<i64> {
    debug_assert!(window >= 2 && window < 64);
    let modulus = 1i64 << window;
    let half = 1i64 << (window - 1);

    let mut k = limbs.to_vec();
    k.push(0);
    let mut res = Vec::with_capacity(num_bits(limbs) + 1);
    while !is_zero(&k) {
        if k[0] & 1 == 1 {
            let m = (k[0] % modulus as u64) as i64;
            let z = if m >= half { m - modulus } else { m };
            res.push(z);
            if z >= 0 {
                arith::sub_small(&mut k, z as u64);
            } else {
                arith::add_small(&mut k, (-z) as u64);
            }
        } else {
            res.push(0);
        }
        arith::shr1(&mut k);
    }
    res
}
