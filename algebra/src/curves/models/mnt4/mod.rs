//! Model for MNT4 curves and their Ate pairing.
//!
//! Supports standard efficiency measures for pairings e:G1 x G2 -> GT :
//!
//! - G2 is represented by a quadratic twist over a quadratic extension of the base field,
//! - the Frobenius operator is applied to reduce the cost of the final exponentiation, and
//! - the lines are evaluated from extended Jacobian coordinates, without inversions.

use crate::{
    curves::{
        models::quadratic_twist::{
            final_exponentiation_last_chunk, miller_loop, MntLoopParameters, PreparedPair,
        },
        CurvePoint, PairingEngine,
    },
    error::AlgebraError,
    fields::{Field, Fp, Fp2, Fp2Parameters, Fp4, Fp4Parameters},
};
use log::debug;

/// Parameters for MNT4 curves E: y^2 = x^3 + a*x + b mod p as needed for the Ate pairing.
///
/// The embedding field F4 of E is regarded as towered extension
///
/// ```text
/// F4 = F2[Y]/(Y^2-X),
/// F2 = Fp[X]/(X^2-alpha),
/// ```
///
/// using a "non-residue" alpha mod p such that (X^4-alpha) is irreducible over Fp,
/// and G2 is represented by a prime order subgroup of the quadratic twist
///
/// ```text
/// E2: y^2 = x^3 + (a*twist^2) x + b*twist^3
/// ```
///
/// over F2, where the twist element twist = X = Y^2 is kept fixed.
/// The final pairing exponent is decomposed as (p^4-1)/r = (p-1) (p+1) (p^2 + 1)/r,
/// whereas (p^2 +1)/r = w1 * p + w0.
#[derive(Clone, Debug)]
pub struct Mnt4Instance<'a, const N: usize> {
    params: MntLoopParameters,
    twist: Fp2<'a, N>,
    twist_inv: Fp2<'a, N>,
    /// a * twist^2
    twist_coeff_a: Fp2<'a, N>,
    fp4_params: &'a Fp4Parameters<'a, N>,
}

/// Coefficients (a', b') of the quadratic twist of y^2 = x^3 + a*x + b.
pub fn mnt4_twist_coefficients<'a, const N: usize>(
    a: &Fp<'a, N>,
    b: &Fp<'a, N>,
    fp2_params: &'a Fp2Parameters<'a, N>,
) -> (Fp2<'a, N>, Fp2<'a, N>) {
    let zero = Fp::zero(a.field());
    let alpha = fp2_params.non_residue;
    (
        Fp2::new(a.mul(&alpha), zero, fp2_params),
        Fp2::new(zero, b.mul(&alpha), fp2_params),
    )
}

impl<'a, const N: usize> Mnt4Instance<'a, N> {
    pub fn new(
        params: MntLoopParameters,
        twist_coeff_a: Fp2<'a, N>,
        fp4_params: &'a Fp4Parameters<'a, N>,
    ) -> Result<Self, AlgebraError> {
        let fp2_params = fp4_params.fp2_params;
        let field = fp2_params.field();
        let twist = Fp2::new(Fp::zero(field), Fp::one(field), fp2_params);
        let twist_inv = twist.inverse().ok_or(AlgebraError::NotInvertible)?;

        Ok(Self {
            params,
            twist,
            twist_inv,
            twist_coeff_a,
            fp4_params,
        })
    }

    fn prepare(
        &self,
        p: &CurvePoint<'a, Fp<'a, N>>,
        q: &CurvePoint<'a, Fp2<'a, N>>,
    ) -> PreparedPair<Fp2<'a, N>> {
        let (px, py) = p.into_affine();
        let (qx, mut qy) = q.into_affine();
        if self.params.x_is_negative {
            qy.negate();
        }

        let mut px_twist = self.twist;
        px_twist.mul_by_fp(&px);
        let mut py_twist = self.twist;
        py_twist.mul_by_fp(&py);
        let qx_over_twist = qx.mul(&self.twist_inv);

        PreparedPair {
            px_twist,
            py_twist,
            qx,
            qy,
            qy_squared: qy.square(),
            qy_over_twist: qy.mul(&self.twist_inv),
            l1_coeff: Fp2::from_base(px, self.fp4_params.fp2_params).sub(&qx_over_twist),
        }
    }
}

impl<'a, const N: usize> PairingEngine for Mnt4Instance<'a, N> {
    type G1 = CurvePoint<'a, Fp<'a, N>>;
    type G2 = CurvePoint<'a, Fp2<'a, N>>;
    type Fqk = Fp4<'a, N>;

    fn miller_loop(&self, pairs: &[(Self::G1, Self::G2)]) -> Self::Fqk {
        let prepared: Vec<_> = pairs
            .iter()
            .filter(|(p, q)| !p.is_zero() && !q.is_zero())
            .map(|(p, q)| self.prepare(p, q))
            .collect();
        debug!("MNT4 Miller loop over {} pairs", prepared.len());

        let fp4_params = self.fp4_params;
        miller_loop(
            &prepared,
            &self.params.x,
            &self.twist_coeff_a,
            Fp4::one(fp4_params),
            |c0, c1| Fp4::new(c0, c1, fp4_params),
        )
    }

    fn final_exponentiation(&self, f: &Self::Fqk) -> Option<Self::Fqk> {
        let f_inv = f.inverse()?;

        // f^(p^2-1)
        let mut elt = *f;
        elt.frobenius_map(2);
        elt.mul_assign(&f_inv);

        Some(final_exponentiation_last_chunk(&elt, &self.params))
    }
}
