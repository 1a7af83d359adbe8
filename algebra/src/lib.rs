//! Finite fields, short Weierstrass curves and pairing engines whose parameters
//! are only known at runtime.
//!
//! Every object is built from plain big integers for one call and borrowed by
//! the objects stacked on top of it:
//!
//! ```text
//! PrimeField -> Fp2/Fp3 parameters -> Fp4/Fp6/Fp12 parameters
//!            -> WeierstrassCurve   -> CurvePoint
//!            -> pairing engine instances
//! ```
//!
//! Widths are fixed at compile time through a const generic limb count, so the
//! arithmetic of a single field is fully monomorphized.
#![deny(unused_import_braces, unused_extern_crates, renamed_and_removed_lints)]
#![deny(unused_must_use)]
#![forbid(unsafe_code)]

#[macro_use]
extern crate derivative;

pub mod biginteger;
pub use self::biginteger::*;

pub mod error;
pub use self::error::*;

pub mod fields;
pub use self::fields::*;

pub mod curves;
pub use self::curves::*;

pub mod msm;
pub use self::msm::*;

#[cfg(test)]
pub(crate) mod test_utils;
