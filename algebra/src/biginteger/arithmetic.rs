/// Calculate a + b + carry, returning the sum and modifying the
/// carry value.
#[inline(always)]
pub fn adc(a: u64, b: u64, carry: &mut u64) -> u64 {
    let tmp = u128::from(a) + u128::from(b) + u128::from(*carry);

    *carry = (tmp >> 64) as u64;

    tmp as u64
}

/// Calculate a - b - borrow, returning the result and modifying
/// the borrow value.
#[inline(always)]
pub fn sbb(a: u64, b: u64, borrow: &mut u64) -> u64 {
    let tmp = (1u128 << 64) + u128::from(a) - u128::from(b) - u128::from(*borrow);

    *borrow = if tmp >> 64 == 0 { 1 } else { 0 };

    tmp as u64
}

/// Calculate a + (b * c) + carry, returning the least significant digit
/// and setting carry to the most significant digit.
#[inline(always)]
pub fn mac_with_carry(a: u64, b: u64, c: u64, carry: &mut u64) -> u64 {
    let tmp = (u128::from(a)) + u128::from(b) * u128::from(c) + u128::from(*carry);

    *carry = (tmp >> 64) as u64;

    tmp as u64
}

/// Adds a single word to a little-endian limb vector, growing it on overflow.
pub(crate) fn add_small(limbs: &mut Vec<u64>, value: u64) {
    let mut carry = value;
    for limb in limbs.iter_mut() {
        if carry == 0 {
            return;
        }
        *limb = adc(*limb, 0, &mut carry);
    }
    if carry != 0 {
        limbs.push(carry);
    }
}

/// Subtracts a single word from a little-endian limb vector. The vector must
/// hold a value of at least `value`.
pub(crate) fn sub_small(limbs: &mut [u64], value: u64) {
    let mut borrow = 0;
    let mut first = true;
    for limb in limbs.iter_mut() {
        let rhs = if first { value } else { 0 };
        first = false;
        *limb = sbb(*limb, rhs, &mut borrow);
        if borrow == 0 {
            return;
        }
    }
}

pub(crate) fn shr1(limbs: &mut [u64]) {
    let mut t = 0;
    for limb in limbs.iter_mut().rev() {
        let t2 = *limb << 63;
        *limb >>= 1;
        *limb |= t;
        t = t2;
    }
}
