use crate::fields::CyclotomicField;
use serde::{Deserialize, Serialize};

mod models;
pub use self::models::*;


/// Shape of the sextic twist E' used to represent G2 for BN and BLS12 curves,
/// with `xi` the non-residue defining F6 over F2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TwistType {
    /// E': y^2 = x^3 + b * xi
    M,
    /// E': y^2 = x^3 + b / xi
    D,
}

pub trait PairingEngine {
    /// Points of the source group over the base field.
    type G1;
    /// Points of the source group over the twist.
    type G2;
    /// The extension field that hosts the pairing result.
    type Fqk: CyclotomicField;

    /// Computes the product of the Miller loops of all pairs. Pairs with a
    /// point at infinity contribute nothing.
    fn miller_loop(&self, pairs: &[(Self::G1, Self::G2)]) -> Self::Fqk;

    /// Performs final exponentiation of the result of a miller loop.
    /// Returns `None` if the value is not invertible.
    fn final_exponentiation(&self, f: &Self::Fqk) -> Option<Self::Fqk>;

    /// Computes a product of pairings.
    #[must_use]
    fn pair(&self, pairs: &[(Self::G1, Self::G2)]) -> Option<Self::Fqk> {
        self.final_exponentiation(&self.miller_loop(pairs))
    }
}
