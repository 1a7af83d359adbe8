//! The byte level entry point. The first input byte selects the operation,
//! the rest is decoded by the operation itself:
//!
//! ```text
//! 0x01 G1 addition        0x04 G2 addition        0x07 BLS12 pairing check
//! 0x02 G1 multiplication  0x05 G2 multiplication  0x08 BN pairing check
//! 0x03 G1 multi-exp       0x06 G2 multi-exp       0x09 MNT4 pairing check
//!                                                 0x0a MNT6 pairing check
//! ```
//!
//! Arithmetic is instantiated for 4 to 16 limbs; the width of a call is
//! chosen from the bit length of the modulus before anything else is decoded.

use crate::{config::ApiConfig, decoder::Decoder, errors::ApiError};
use log::debug;
use std::convert::TryFrom;

mod curve_ops;
use self::curve_ops::{run_g1_operation, run_g2_operation};

mod pairings;
use self::pairings::{run_bls12_pairing, run_bn_pairing, run_mnt4_pairing, run_mnt6_pairing};


#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum OperationType {
    G1Add = 0x01,
    G1Mul = 0x02,
    G1MultiExp = 0x03,
    G2Add = 0x04,
    G2Mul = 0x05,
    G2MultiExp = 0x06,
    Bls12Pairing = 0x07,
    BnPairing = 0x08,
    Mnt4Pairing = 0x09,
    Mnt6Pairing = 0x0a,
}

impl TryFrom<u8> for OperationType {
    type Error = ApiError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        use self::OperationType::*;
        Ok(match value {
            0x01 => G1Add,
            0x02 => G1Mul,
            0x03 => G1MultiExp,
            0x04 => G2Add,
            0x05 => G2Mul,
            0x06 => G2MultiExp,
            0x07 => Bls12Pairing,
            0x08 => BnPairing,
            0x09 => Mnt4Pairing,
            0x0a => Mnt6Pairing,
            other => return Err(ApiError::UnknownOperation(other)),
        })
    }
}

/// Calls `$func::<N>($args)` for the runtime limb count `$limbs`.
macro_rules! expand_for_limbs {
    ($limbs:expr, $func:ident, $($arg:expr),*) => {
        match $limbs {
            4 => $func::<4>($($arg),*),
            5 => $func::<5>($($arg),*),
            6 => $func::<6>($($arg),*),
            7 => $func::<7>($($arg),*),
            8 => $func::<8>($($arg),*),
            9 => $func::<9>($($arg),*),
            10 => $func::<10>($($arg),*),
            11 => $func::<11>($($arg),*),
            12 => $func::<12>($($arg),*),
            13 => $func::<13>($($arg),*),
            14 => $func::<14>($($arg),*),
            15 => $func::<15>($($arg),*),
            16 => $func::<16>($($arg),*),
            n => Err(ApiError::UnsupportedLimbCount(n)),
        }
    };
}

/// Runs one operation with the default configuration.
pub fn run(input: &[u8]) -> Result<Vec<u8>, ApiError> {
    run_with_config(input, &ApiConfig::default())
}

/// Runs one operation. Point operations return the affine result, pairing
/// checks return a single byte, `0x01` if the product of pairings is one and
/// `0x00` otherwise.
pub fn run_with_config(input: &[u8], config: &ApiConfig) -> Result<Vec<u8>, ApiError> {
    use self::OperationType::*;

    let mut decoder = Decoder::new(input);
    let operation = OperationType::try_from(decoder.read_u8("operation")?)?;
    let limbs = decoder.peek_limb_count()?;
    debug!("running {:?} with {} limbs", operation, limbs);

    match operation {
        G1Add | G1Mul | G1MultiExp => {
            expand_for_limbs!(limbs, run_g1_operation, decoder, operation, config)
        }
        G2Add | G2Mul | G2MultiExp => {
            expand_for_limbs!(limbs, run_g2_operation, decoder, operation, config)
        }
        Bls12Pairing => expand_for_limbs!(limbs, run_bls12_pairing, decoder, config),
        BnPairing => expand_for_limbs!(limbs, run_bn_pairing, decoder, config),
        Mnt4Pairing => expand_for_limbs!(limbs, run_mnt4_pairing, decoder, config),
        Mnt6Pairing => expand_for_limbs!(limbs, run_mnt6_pairing, decoder, config),
    }
}
