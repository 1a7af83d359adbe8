//! Montgomery arithmetics for moduli of up to 16 words of 64 bits, and models of
//! extension fields.
//!
//! - `Fp` over a `PrimeField` built from a modulus known at runtime,
//! - quadratic and cubic extensions of prime fields,
//! - degree 4, 6 and 12 extensions by towering.

pub mod fp;
pub use self::fp::*;

pub mod fp2;
pub use self::fp2::*;

pub mod fp3;
pub use self::fp3::*;

pub mod fp4;
pub use self::fp4::*;

pub mod fp6_2over3;

pub mod fp6_3over2;

pub mod fp12_2over3over2;
