pub mod short_weierstrass_jacobian;
pub use self::short_weierstrass_jacobian::*;

pub(crate) mod quadratic_twist;
pub(crate) mod sextic_twist;

pub mod bls12;
pub mod bn;
pub mod mnt4;
pub mod mnt6;

pub use self::quadratic_twist::MntLoopParameters;
