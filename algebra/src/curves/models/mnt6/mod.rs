//! Model for MNT6 curves and their Ate pairing.
//!
//! G2 lives on a quadratic twist over the cubic extension F3 of the base
//! field, and the pairing lands in F6 = F3[Y]/(Y^2-X).

use crate::{
    curves::{
        models::quadratic_twist::{
            final_exponentiation_last_chunk, miller_loop, MntLoopParameters, PreparedPair,
        },
        CurvePoint, PairingEngine,
    },
    error::AlgebraError,
    fields::{
        fp6_2over3::{Fp6, Fp6Parameters},
        Field, Fp, Fp3, Fp3Parameters,
    },
};
use log::debug;

/// Parameters for MNT6 curves E: y^2 = x^3 + a*x + b mod p as needed for the Ate pairing.
///
/// The embedding field F6 of E is regarded as towered extension
///
/// ```text
/// F6 = F3[Y]/(Y^2-X),
/// F3 = Fp[X]/(X^3-alpha),
/// ```
///
/// and G2 is a prime order subgroup of the quadratic twist
/// E3: y^2 = x^3 + (a*twist^2) x + b*twist^3 over F3 with twist = X.
/// The final pairing exponent is decomposed as
/// (p^6-1)/r = (p^3-1) (p+1) (p^2-p+1)/r, with (p^2-p+1)/r = w1 * p + w0.
#[derive(Clone, Debug)]
pub struct Mnt6Instance<'a, const N: usize> {
    params: MntLoopParameters,
    twist: Fp3<'a, N>,
    twist_inv: Fp3<'a, N>,
    /// a * twist^2
    twist_coeff_a: Fp3<'a, N>,
    fp6_params: &'a Fp6Parameters<'a, N>,
}

/// Coefficients (a', b') of the quadratic twist of y^2 = x^3 + a*x + b.
pub fn mnt6_twist_coefficients<'a, const N: usize>(
    a: &Fp<'a, N>,
    b: &Fp<'a, N>,
    fp3_params: &'a Fp3Parameters<'a, N>,
) -> (Fp3<'a, N>, Fp3<'a, N>) {
    let zero = Fp::zero(a.field());
    let alpha = fp3_params.non_residue;
    (
        Fp3::new(zero, zero, *a, fp3_params),
        Fp3::new(b.mul(&alpha), zero, zero, fp3_params),
    )
}

impl<'a, const N: usize> Mnt6Instance<'a, N> {
    pub fn new(
        params: MntLoopParameters,
        twist_coeff_a: Fp3<'a, N>,
        fp6_params: &'a Fp6Parameters<'a, N>,
    ) -> Result<Self, AlgebraError> {
        let fp3_params = fp6_params.fp3_params;
        let zero = Fp::zero(fp3_params.field());
        let twist = Fp3::new(zero, Fp::one(fp3_params.field()), zero, fp3_params);
        let twist_inv = twist.inverse().ok_or(AlgebraError::NotInvertible)?;

        Ok(Self {
            params,
            twist,
            twist_inv,
            twist_coeff_a,
            fp6_params,
        })
    }

    fn prepare(
        &self,
        p: &CurvePoint<'a, Fp<'a, N>>,
        q: &CurvePoint<'a, Fp3<'a, N>>,
    ) -> PreparedPair<Fp3<'a, N>> {
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
            l1_coeff: Fp3::from_base(px, self.fp6_params.fp3_params).sub(&qx_over_twist),
        }
    }
}

impl<'a, const N: usize> PairingEngine for Mnt6Instance<'a, N> {
    type G1 = CurvePoint<'a, Fp<'a, N>>;
    type G2 = CurvePoint<'a, Fp3<'a, N>>;
    type Fqk = Fp6<'a, N>;

    fn miller_loop(&self, pairs: &[(Self::G1, Self::G2)]) -> Self::Fqk {
        let prepared: Vec<_> = pairs
            .iter()
            .filter(|(p, q)| !p.is_zero() && !q.is_zero())
            .map(|(p, q)| self.prepare(p, q))
            .collect();
        debug!("MNT6 Miller loop over {} pairs", prepared.len());

        let fp6_params = self.fp6_params;
        miller_loop(
            &prepared,
            &self.params.x,
            &self.twist_coeff_a,
            Fp6::one(fp6_params),
            |c0, c1| Fp6::new(c0, c1, fp6_params),
        )
    }

    fn final_exponentiation(&self, f: &Self::Fqk) -> Option<Self::Fqk> {
        let f_inv = f.inverse()?;

        // f^(p^3-1)
        let mut elt = *f;
        elt.frobenius_map(3);
        elt.mul_assign(&f_inv);

        // f^((p^3-1)(p+1))
        let mut elt_q = elt;
        elt_q.frobenius_map(1);
        elt.mul_assign(&elt_q);

        Some(final_exponentiation_last_chunk(&elt, &self.params))
    }
}
