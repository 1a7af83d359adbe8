//! A forward-only cursor over untrusted input.
//!
//! Every read checks the remaining length first and fails with
//! `ApiError::InputError` naming what was being read. The cursor remembers
//! the byte lengths of the current modulus and group order, which size all
//! later element and scalar reads.

use crate::{
    constants::{MAX_GROUP_ORDER_BYTE_LEN, MAX_LOOP_PARAMETER_BITS, MAX_MODULUS_BYTE_LEN, MIN_LIMBS},
    errors::{input_error, ApiError},
};
use algebra::{biguint_to_limbs, limbs_to_biguint, num_bits};
use log::trace;
use num_bigint::BigUint;

mod elements;
pub use self::elements::*;

#[cfg(test)]
mod tests;

#[derive(Debug)]
pub struct Decoder<'b> {
    input: &'b [u8],
    position: usize,
    /// Byte length of the modulus of the current field.
    modulus_len: usize,
    /// Byte length of the current group order, also the length of scalars.
    order_len: usize,
}

impl<'b> Decoder<'b> {
    pub fn new(input: &'b [u8]) -> Self {
        Self {
            input,
            position: 0,
            modulus_len: 0,
            order_len: 0,
        }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.input.len() - self.position
    }

    #[inline]
    pub fn modulus_len(&self) -> usize {
        self.modulus_len
    }

    #[inline]
    pub fn order_len(&self) -> usize {
        self.order_len
    }

    fn reject<T>(&self, message: String) -> Result<T, ApiError> {
        trace!("rejecting input at byte {}: {}", self.position, message);
        Err(input_error(message))
    }

    pub fn read_bytes(&mut self, len: usize, what: &str) -> Result<&'b [u8], ApiError> {
        if self.remaining() < len {
            return self.reject(format!(
                "input is truncated, {} needs {} bytes but {} are left",
                what,
                len,
                self.remaining()
            ));
        }
        let bytes = &self.input[self.position..self.position + len];
        self.position += len;
        Ok(bytes)
    }

    pub fn read_u8(&mut self, what: &str) -> Result<u8, ApiError> {
        Ok(self.read_bytes(1, what)?[0])
    }

    /// Reads a boolean encoded as `0` or `1`.
    pub fn read_flag(&mut self, what: &str) -> Result<bool, ApiError> {
        match self.read_u8(what)? {
            0 => Ok(false),
            1 => Ok(true),
            other => self.reject(format!("{} must be 0 or 1, got {}", what, other)),
        }
    }

    /// Reads a one byte count, rejecting zero and anything above `max`.
    pub fn read_count(&mut self, max: usize, what: &str) -> Result<usize, ApiError> {
        let count = self.read_u8(what)? as usize;
        if count == 0 {
            return self.reject(format!("{} must not be zero", what));
        }
        if count > max {
            return self.reject(format!("{} {} exceeds the limit of {}", what, count, max));
        }
        Ok(count)
    }

    /// Reads a big-endian integer prefixed by its one byte length. The
    /// length must be in `1..=max_len` and the top byte must be nonzero.
    fn read_canonical(&mut self, max_len: usize, what: &str) -> Result<&'b [u8], ApiError> {
        let len = self.read_u8(what)? as usize;
        if len == 0 {
            return self.reject(format!("{} has zero length", what));
        }
        if len > max_len {
            return self.reject(format!("{} is longer than {} bytes", what, max_len));
        }
        let bytes = self.read_bytes(len, what)?;
        if bytes[0] == 0 {
            return self.reject(format!("{} is not canonically encoded", what));
        }
        Ok(bytes)
    }

    /// Number of limbs needed by the modulus at the cursor, without moving it.
    pub fn peek_limb_count(&self) -> Result<usize, ApiError> {
        let mut lookahead = Decoder::new(&self.input[self.position..]);
        let modulus = lookahead.read_canonical(MAX_MODULUS_BYTE_LEN, "modulus")?;
        let bits = (modulus.len() - 1) * 8 + (8 - modulus[0].leading_zeros() as usize);
        Ok(std::cmp::max(MIN_LIMBS, (bits + 63) / 64))
    }

    /// Reads the length prefixed modulus and caches its byte length.
    pub fn read_modulus(&mut self) -> Result<&'b [u8], ApiError> {
        let modulus = self.read_canonical(MAX_MODULUS_BYTE_LEN, "modulus")?;
        self.modulus_len = modulus.len();
        Ok(modulus)
    }

    /// Reads the length prefixed group order and caches its byte length.
    pub fn read_group_order(&mut self) -> Result<Vec<u64>, ApiError> {
        let order = self.read_canonical(MAX_GROUP_ORDER_BYTE_LEN, "group order")?;
        self.order_len = order.len();
        Ok(biguint_to_limbs(&BigUint::from_bytes_be(order)))
    }

    /// Reads a scalar of exactly the group order's byte length, which must
    /// be smaller than `order`.
    pub fn read_scalar(&mut self, order: &[u64]) -> Result<Vec<u64>, ApiError> {
        let bytes = self.read_bytes(self.order_len, "scalar")?;
        let scalar = BigUint::from_bytes_be(bytes);
        if scalar >= limbs_to_biguint(order) {
            return self.reject("scalar is not smaller than the group order".to_owned());
        }
        Ok(biguint_to_limbs(&scalar))
    }

    /// Reads the absolute value of a loop parameter.
    pub fn read_loop_parameter(&mut self, what: &str) -> Result<Vec<u64>, ApiError> {
        let bytes = self.read_canonical(u8::MAX as usize, what)?;
        let limbs = biguint_to_limbs(&BigUint::from_bytes_be(bytes));
        if num_bits(&limbs) > MAX_LOOP_PARAMETER_BITS {
            return self.reject(format!(
                "{} is longer than {} bits",
                what, MAX_LOOP_PARAMETER_BITS
            ));
        }
        Ok(limbs)
    }

    /// Reads the extension degree byte and checks it against the accepted ones.
    pub fn read_extension_degree(&mut self, accepted: &[u8]) -> Result<u8, ApiError> {
        let degree = self.read_u8("extension degree")?;
        if !accepted.contains(&degree) {
            return self.reject(format!("extension degree {} is not supported", degree));
        }
        Ok(degree)
    }

    /// Fails unless the whole input has been consumed.
    pub fn finish(self) -> Result<(), ApiError> {
        if self.remaining() != 0 {
            return self.reject(format!("{} trailing bytes", self.remaining()));
        }
        Ok(())
    }
}
