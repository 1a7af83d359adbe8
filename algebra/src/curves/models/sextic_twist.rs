//! Miller loop machinery shared by BN and BLS12 curves, whose G2 lives on a
//! sextic twist over F2 and whose pairing lands in F12.
//!
//! The running point is kept in homogeneous projective coordinates and every
//! doubling or addition step emits the three F2 coefficients of the line
//! through it, following [ABLR 2013](https://eprint.iacr.org/2013/722.pdf).

use crate::{
    biginteger::{hamming_weight, naf, num_bits},
    curves::{CurvePoint, TwistType},
    error::AlgebraError,
    fields::{
        fp12_2over3over2::{Fp12, Fp12Parameters},
        Field, Fp, Fp2,
    },
};
use log::debug;

/// Coefficients of a line function, to be scaled by the coordinates of a
/// G1 point.
pub(crate) type EllCoeff<'a, const N: usize> = (Fp2<'a, N>, Fp2<'a, N>, Fp2<'a, N>);

/// A point on the twist in homogeneous projective coordinates, (x/z, y/z).
#[derive(Copy, Clone, Debug)]
pub(crate) struct HomogeneousPoint<'a, const N: usize> {
    pub x: Fp2<'a, N>,
    pub y: Fp2<'a, N>,
    pub z: Fp2<'a, N>,
}

/// A pair of affine points together with the running multiple of the G2 point.
#[derive(Copy, Clone, Debug)]
pub(crate) struct PairState<'a, const N: usize> {
    pub px: Fp<'a, N>,
    pub py: Fp<'a, N>,
    pub qx: Fp2<'a, N>,
    pub qy: Fp2<'a, N>,
    pub r: HomogeneousPoint<'a, N>,
}

/// Signed digits of the Miller loop scalar, most significant first and with
/// the leading one removed. The NAF is used when it needs fewer doublings and
/// additions than the binary expansion.
pub(crate) fn loop_digits(scalar: &[u64], force_binary: bool) -> Vec<i8> {
    let bits = num_bits(scalar);
    let binary_cost = bits + hamming_weight(scalar) as usize;

    let naf_digits = naf(scalar);
    let naf_cost = naf_digits.len() + naf_digits.iter().filter(|&&d| d != 0).count();

    if force_binary || naf_cost >= binary_cost {
        debug!("binary Miller loop over {} bits", bits);
        (0..bits.saturating_sub(1))
            .rev()
            .map(|i| ((scalar[i / 64] >> (i % 64)) & 1) as i8)
            .collect()
    } else {
        debug!("NAF Miller loop over {} digits", naf_digits.len());
        naf_digits.iter().rev().skip(1).copied().collect()
    }
}

#[derive(Clone, Debug)]
pub(crate) struct SexticTwist<'a, const N: usize> {
    pub twist_type: TwistType,
    /// The constant coefficient b of the twist.
    pub twist_b: Fp2<'a, N>,
    pub two_inv: Fp<'a, N>,
    pub fp12_params: &'a Fp12Parameters<'a, N>,
}

impl<'a, const N: usize> SexticTwist<'a, N> {
    pub fn new(
        twist_type: TwistType,
        twist_b: Fp2<'a, N>,
        fp12_params: &'a Fp12Parameters<'a, N>,
    ) -> Result<Self, AlgebraError> {
        let field = fp12_params.fp2_params().field();
        let two_inv = Fp::from_u64(field, 2)
            .inverse()
            .ok_or(AlgebraError::NotInvertible)?;
        Ok(Self {
            twist_type,
            twist_b,
            two_inv,
            fp12_params,
        })
    }

    /// Normalizes the pairs, dropping those with a point at infinity.
    pub fn prepare(
        &self,
        pairs: &[(CurvePoint<'a, Fp<'a, N>>, CurvePoint<'a, Fp2<'a, N>>)],
    ) -> Vec<PairState<'a, N>> {
        pairs
            .iter()
            .filter(|(p, q)| !p.is_zero() && !q.is_zero())
            .map(|(p, q)| {
                let (px, py) = p.into_affine();
                let (qx, qy) = q.into_affine();
                PairState {
                    px,
                    py,
                    qx,
                    qy,
                    r: HomogeneousPoint {
                        x: qx,
                        y: qy,
                        z: Fp2::one(self.fp12_params.fp2_params()),
                    },
                }
            })
            .collect()
    }

    pub fn doubling_step(&self, r: &mut HomogeneousPoint<'a, N>) -> EllCoeff<'a, N> {
        // Formula 11 of https://eprint.iacr.org/2013/722.pdf
        let mut a = r.x.mul(&r.y);
        a.mul_by_fp(&self.two_inv);
        let b = r.y.square();
        let c = r.z.square();
        let e = self.twist_b.mul(&c.double().add(&c));
        let f = e.double().add(&e);
        let mut g = b.add(&f);
        g.mul_by_fp(&self.two_inv);
        let h = r.y.add(&r.z).square().sub(&b.add(&c));
        let i = e.sub(&b);
        let j = r.x.square();
        let e_square = e.square();

        r.x = a.mul(&b.sub(&f));
        r.y = g.square().sub(&e_square.double().add(&e_square));
        r.z = b.mul(&h);

        match self.twist_type {
            TwistType::M => (i, j.double().add(&j), h.neg()),
            TwistType::D => (h.neg(), j.double().add(&j), i),
        }
    }

    pub fn addition_step(
        &self,
        r: &mut HomogeneousPoint<'a, N>,
        qx: &Fp2<'a, N>,
        qy: &Fp2<'a, N>,
    ) -> EllCoeff<'a, N> {
        // Formula 12 of https://eprint.iacr.org/2013/722.pdf
        let theta = r.y.sub(&qy.mul(&r.z));
        let lambda = r.x.sub(&qx.mul(&r.z));
        let c = theta.square();
        let d = lambda.square();
        let e = lambda.mul(&d);
        let f = r.z.mul(&c);
        let g = r.x.mul(&d);
        let h = e.add(&f).sub(&g.double());

        r.x = lambda.mul(&h);
        r.y = theta.mul(&g.sub(&h)).sub(&e.mul(&r.y));
        r.z.mul_assign(&e);

        let j = theta.mul(qx).sub(&lambda.mul(qy));

        match self.twist_type {
            TwistType::M => (j, theta.neg(), lambda),
            TwistType::D => (lambda, theta.neg(), j),
        }
    }

    /// Evaluates the line function at (px, py) and multiplies it into f.
    pub fn ell(
        &self,
        f: &mut Fp12<'a, N>,
        coeffs: &EllCoeff<'a, N>,
        px: &Fp<'a, N>,
        py: &Fp<'a, N>,
    ) {
        let (mut c0, mut c1, mut c2) = *coeffs;

        match self.twist_type {
            TwistType::M => {
                c2.mul_by_fp(py);
                c1.mul_by_fp(px);
                f.mul_by_014(&c0, &c1, &c2);
            }
            TwistType::D => {
                c0.mul_by_fp(py);
                c1.mul_by_fp(px);
                f.mul_by_034(&c0, &c1, &c2);
            }
        }
    }

    /// Runs the shared Miller loop over `digits`, leaving the final multiple
    /// of each G2 point in its state.
    pub fn miller_loop(&self, states: &mut [PairState<'a, N>], digits: &[i8]) -> Fp12<'a, N> {
        let mut f = Fp12::one(self.fp12_params);

        for &digit in digits {
            f.square_in_place();

            for state in states.iter_mut() {
                let coeffs = self.doubling_step(&mut state.r);
                self.ell(&mut f, &coeffs, &state.px, &state.py);
            }

            if digit != 0 {
                for state in states.iter_mut() {
                    let qy = if digit > 0 { state.qy } else { state.qy.neg() };
                    let coeffs = self.addition_step(&mut state.r, &state.qx, &qy);
                    self.ell(&mut f, &coeffs, &state.px, &state.py);
                }
            }
        }

        f
    }
}
