//! Model for BLS12 curves and their Ate pairing.
//!
//! Supports the following standard efficiency measures for pairings:
//!
//! - G2 is represented by a sextic twist over a quadratic extension of the base field,
//! - the Frobenius operator is applied to reduce the cost of the final exponentiation, and
//! - the loop count is traversed in non-adjacent form when this saves operations.

use crate::{
    curves::{
        models::sextic_twist::{loop_digits, SexticTwist},
        CurvePoint, PairingEngine, TwistType,
    },
    error::AlgebraError,
    fields::{
        fp12_2over3over2::{Fp12, Fp12Parameters},
        CyclotomicField, Field, Fp, Fp2,
    },
};

/// Parameters of a BLS12 curve E: y^2 = x^3 + b mod p as needed by the Ate pairing.
///
/// As in [ABLR 2013](https://eprint.iacr.org/2013/722.pdf), the embedding field F12 is regarded
/// as towered extension
///
/// ```text
/// F12 = F6[Z]/(Z^2-Y),
/// F6 = F2[Y]/(Y^3-U),
/// F2 = Fp[X]/(X^2-alpha),
/// ```
///
/// using a non-square alpha from Fp, and a non-cube U from F2, respectively.
/// G2 is represented by a subgroup of prime order r=ord(G1) of the sextic twist
/// over F2, E6: y^2 = x^3 + b/U or E6: y^2 = x^3 + b*U, depending on the twist
/// type D and M, respectively.
#[derive(Clone, Debug)]
pub struct Bls12Instance<'a, const N: usize> {
    /// The absolute value of the curve parameter x, the Ate loop count.
    x: Vec<u64>,
    x_is_negative: bool,
    loop_digits: Vec<i8>,
    twist: SexticTwist<'a, N>,
}

impl<'a, const N: usize> Bls12Instance<'a, N> {
    pub fn new(
        x: Vec<u64>,
        x_is_negative: bool,
        twist_type: TwistType,
        curve_twist_b: Fp2<'a, N>,
        fp12_params: &'a Fp12Parameters<'a, N>,
        force_binary_loop: bool,
    ) -> Result<Self, AlgebraError> {
        let twist = SexticTwist::new(twist_type, curve_twist_b, fp12_params)?;
        Ok(Self {
            loop_digits: loop_digits(&x, force_binary_loop),
            x,
            x_is_negative,
            twist,
        })
    }

    fn exp_by_x(&self, mut f: Fp12<'a, N>) -> Fp12<'a, N> {
        f = f.cyclotomic_exp(&self.x);
        if self.x_is_negative {
            f.conjugate();
        }
        f
    }
}

impl<'a, const N: usize> PairingEngine for Bls12Instance<'a, N> {
    type G1 = CurvePoint<'a, Fp<'a, N>>;
    type G2 = CurvePoint<'a, Fp2<'a, N>>;
    type Fqk = Fp12<'a, N>;

    fn miller_loop(&self, pairs: &[(Self::G1, Self::G2)]) -> Self::Fqk {
        let mut states = self.twist.prepare(pairs);
        let mut f = self.twist.miller_loop(&mut states, &self.loop_digits);

        if self.x_is_negative {
            f.conjugate();
        }

        f
    }

    fn final_exponentiation(&self, f: &Self::Fqk) -> Option<Self::Fqk> {
        // Computing the final exponentation following
        // https://eprint.iacr.org/2016/130.pdf.
        // We don't use their "faster" formula because it is difficult to make
        // it work for curves with odd `x`.
        // Hence we implement the algorithm from Table 1 below.

        // f1 = r.conjugate() = f^(p^6)
        let mut f1 = *f;
        f1.frobenius_map(6);

        f.inverse().map(|mut f2| {
            // f2 = f^(-1);
            // r = f^(p^6 - 1)
            let mut r = f1.mul(&f2);

            // f2 = f^(p^6 - 1)
            f2 = r;
            // r = f^((p^6 - 1)(p^2))
            r.frobenius_map(2);

            // r = f^((p^6 - 1)(p^2) + (p^6 - 1))
            // r = f^((p^6 - 1)(p^2 + 1))
            r.mul_assign(&f2);

            // Hard part of the final exponentation is below:
            // From https://eprint.iacr.org/2016/130.pdf, Table 1
            let mut y0 = r.cyclotomic_square();
            y0.conjugate();

            let mut y5 = self.exp_by_x(r);

            let mut y1 = y5.cyclotomic_square();
            let mut y3 = y0.mul(&y5);
            y0 = self.exp_by_x(y3);
            let y2 = self.exp_by_x(y0);
            let mut y4 = self.exp_by_x(y2);
            y4.mul_assign(&y1);
            y1 = self.exp_by_x(y4);
            y3.conjugate();
            y1.mul_assign(&y3);
            y1.mul_assign(&r);
            y3 = r;
            y3.conjugate();
            y0.mul_assign(&r);
            y0.frobenius_map(3);
            y4.mul_assign(&y3);
            y4.frobenius_map(1);
            y5.mul_assign(&y2);
            y5.frobenius_map(2);
            y5.mul_assign(&y0);
            y5.mul_assign(&y4);
            y5.mul_assign(&y1);
            y5
        })
    }
}
