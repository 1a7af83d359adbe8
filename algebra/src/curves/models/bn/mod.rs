//! Model for BN curves and their optimal Ate pairing.
//!
//! The Miller loop runs over 6u + 2 and is completed by two additions with
//! the images of Q under the Frobenius endomorphism of the twist.

use crate::{
    biginteger::{biguint_to_limbs, limbs_to_biguint},
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
use num_bigint::BigUint;

/// Parameters of a BN curve E: y^2 = x^3 + b mod p, for the tower
///
/// ```text
/// F12 = F6[Z]/(Z^2-Y),
/// F6 = F2[Y]/(Y^3-U),
/// F2 = Fp[X]/(X^2-alpha),
/// ```
///
/// with G2 on the sextic twist of type M or D with respect to U.
#[derive(Clone, Debug)]
pub struct BnInstance<'a, const N: usize> {
    /// The absolute value of the curve parameter u.
    u: Vec<u64>,
    u_is_negative: bool,
    /// Digits of |6u + 2|.
    loop_digits: Vec<i8>,
    twist: SexticTwist<'a, N>,
    /// Coefficients of the Frobenius endomorphism of the twist,
    /// U^((p - 1) / 3) and U^((p - 1) / 2), inverted for M-type twists.
    twist_mul_by_q_x: Fp2<'a, N>,
    twist_mul_by_q_y: Fp2<'a, N>,
}

/// |6u + 2| for a nonzero u of the given sign.
pub fn six_u_plus_2(u: &[u64], u_is_negative: bool) -> Vec<u64> {
    let six_u = limbs_to_biguint(u) * BigUint::from(6u64);
    let two = BigUint::from(2u64);
    let value = if !u_is_negative {
        six_u + two
    } else if six_u >= two {
        six_u - two
    } else {
        two - six_u
    };
    biguint_to_limbs(&value)
}

impl<'a, const N: usize> BnInstance<'a, N> {
    pub fn new(
        u: Vec<u64>,
        u_is_negative: bool,
        twist_type: TwistType,
        curve_twist_b: Fp2<'a, N>,
        fp12_params: &'a Fp12Parameters<'a, N>,
        force_binary_loop: bool,
    ) -> Result<Self, AlgebraError> {
        let twist = SexticTwist::new(twist_type, curve_twist_b, fp12_params)?;
        let six_u_plus_2 = six_u_plus_2(&u, u_is_negative);

        let x_coeff = fp12_params.fp6_params.frobenius_coeffs_c1()[1];
        let y_coeff = fp12_params.frobenius_coeffs_c1()[1].mul(&x_coeff);
        let (twist_mul_by_q_x, twist_mul_by_q_y) = match twist_type {
            TwistType::D => (x_coeff, y_coeff),
            TwistType::M => (
                x_coeff.inverse().ok_or(AlgebraError::NotInvertible)?,
                y_coeff.inverse().ok_or(AlgebraError::NotInvertible)?,
            ),
        };

        Ok(Self {
            loop_digits: loop_digits(&six_u_plus_2, force_binary_loop),
            u,
            u_is_negative,
            twist,
            twist_mul_by_q_x,
            twist_mul_by_q_y,
        })
    }

    /// The Frobenius endomorphism of the twist, applied to an affine point.
    fn mul_by_char(&self, x: &Fp2<'a, N>, y: &Fp2<'a, N>) -> (Fp2<'a, N>, Fp2<'a, N>) {
        let mut x = *x;
        x.frobenius_map(1);
        x.mul_assign(&self.twist_mul_by_q_x);
        let mut y = *y;
        y.frobenius_map(1);
        y.mul_assign(&self.twist_mul_by_q_y);
        (x, y)
    }

    fn exp_by_neg_u(&self, mut f: Fp12<'a, N>) -> Fp12<'a, N> {
        f = f.cyclotomic_exp(&self.u);
        if !self.u_is_negative {
            f.conjugate();
        }
        f
    }
}

impl<'a, const N: usize> PairingEngine for BnInstance<'a, N> {
    type G1 = CurvePoint<'a, Fp<'a, N>>;
    type G2 = CurvePoint<'a, Fp2<'a, N>>;
    type Fqk = Fp12<'a, N>;

    fn miller_loop(&self, pairs: &[(Self::G1, Self::G2)]) -> Self::Fqk {
        let mut states = self.twist.prepare(pairs);
        let mut f = self.twist.miller_loop(&mut states, &self.loop_digits);

        if self.u_is_negative {
            f.conjugate();
        }

        for state in states.iter_mut() {
            if self.u_is_negative {
                state.r.y.negate();
            }

            let (q1_x, q1_y) = self.mul_by_char(&state.qx, &state.qy);
            let (q2_x, mut q2_y) = self.mul_by_char(&q1_x, &q1_y);
            q2_y.negate();

            let coeffs = self.twist.addition_step(&mut state.r, &q1_x, &q1_y);
            self.twist.ell(&mut f, &coeffs, &state.px, &state.py);
            let coeffs = self.twist.addition_step(&mut state.r, &q2_x, &q2_y);
            self.twist.ell(&mut f, &coeffs, &state.px, &state.py);
        }

        f
    }

    fn final_exponentiation(&self, f: &Self::Fqk) -> Option<Self::Fqk> {
        // Easy part: result = elt^((q^6-1)*(q^2+1)).
        let f1 = f.unitary_inverse();

        f.inverse().map(|mut f2| {
            let mut r = f1.mul(&f2);
            f2 = r;
            r.frobenius_map(2);
            r.mul_assign(&f2);

            // Hard part follows Laura Fuentes-Castaneda et al. "Faster hashing to G2"
            // by computing:
            //
            // result = elt^(q^3 * (12*z^3 + 6z^2 + 4z - 1) +
            //               q^2 * (12*z^3 + 6z^2 + 6z) +
            //               q   * (12*z^3 + 6z^2 + 4z) +
            //               1   * (12*z^3 + 12z^2 + 6z + 1))
            // which equals
            //
            // result = elt^( 2z * ( 6z^2 + 3z + 1 ) * (q^4 - q^2 + 1)/r ).
            let y0 = self.exp_by_neg_u(r);
            let y1 = y0.cyclotomic_square();
            let y2 = y1.cyclotomic_square();
            let mut y3 = y2.mul(&y1);
            let y4 = self.exp_by_neg_u(y3);
            let y5 = y4.cyclotomic_square();
            let mut y6 = self.exp_by_neg_u(y5);
            y3.conjugate();
            y6.conjugate();
            let y7 = y6.mul(&y4);
            let mut y8 = y7.mul(&y3);
            let y9 = y8.mul(&y1);
            let y10 = y8.mul(&y4);
            let y11 = y10.mul(&r);
            let mut y12 = y9;
            y12.frobenius_map(1);
            let y13 = y12.mul(&y11);
            y8.frobenius_map(2);
            let y14 = y8.mul(&y13);
            r.conjugate();
            let mut y15 = r.mul(&y9);
            y15.frobenius_map(3);
            y15.mul(&y14)
        })
    }
}
