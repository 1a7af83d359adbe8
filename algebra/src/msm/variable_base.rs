use crate::{
    biginteger::{get_bits, num_bits},
    curves::{CurvePoint, WeierstrassCurve},
    error::AlgebraError,
    fields::Field,
    msm::window_size,
};
use log::trace;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub struct VariableBaseMSM;

impl VariableBaseMSM {
    /// Computes the sum of `scalars[i] * bases[i]` with the bucket method.
    /// Scalars are little-endian limbs.
    pub fn multi_scalar_mul<'c, F, S>(
        curve: &'c WeierstrassCurve<F>,
        bases: &[CurvePoint<'c, F>],
        scalars: &[S],
    ) -> Result<CurvePoint<'c, F>, AlgebraError>
    where
        F: Field,
        S: AsRef<[u64]> + Sync,
    {
        if bases.len() != scalars.len() {
            return Err(AlgebraError::LengthMismatch {
                bases: bases.len(),
                scalars: scalars.len(),
            });
        }

        let c = window_size(scalars.len());
        let num_bits = scalars
            .iter()
            .map(|s| num_bits(s.as_ref()))
            .fold(curve.subgroup_order_bits(), usize::max);
        trace!(
            "multi-scalar multiplication of {} terms over {} bits, window {}",
            scalars.len(),
            num_bits,
            c
        );

        let zero = CurvePoint::zero(curve);
        let window_starts: Vec<_> = (0..num_bits).step_by(c).collect();

        #[cfg(feature = "parallel")]
        let window_starts_iter = window_starts.into_par_iter();
        #[cfg(not(feature = "parallel"))]
        let window_starts_iter = window_starts.into_iter();

        // Each window is of size `c`.
        // We divide up the bits 0..num_bits into windows of size `c`, and
        // process each such window on its own.
        let window_sums: Vec<_> = window_starts_iter
            .map(|w_start| Self::window_sum(zero, bases, scalars, w_start, c))
            .collect();

        let (lowest, higher) = match window_sums.split_first() {
            Some(split) => split,
            None => return Ok(zero),
        };

        // We're traversing windows from high to low.
        let mut total = higher.iter().rev().fold(zero, |mut total, sum_i| {
            total.add_assign(sum_i);
            for _ in 0..c {
                total.double_in_place();
            }
            total
        });
        total.add_assign(lowest);
        Ok(total)
    }

    fn window_sum<'c, F: Field, S: AsRef<[u64]>>(
        zero: CurvePoint<'c, F>,
        bases: &[CurvePoint<'c, F>],
        scalars: &[S],
        w_start: usize,
        c: usize,
    ) -> CurvePoint<'c, F> {
        let mut res = zero;
        // We don't need the "zero" bucket, so we only have 2^c - 1 buckets
        let mut buckets = vec![zero; (1 << c) - 1];
        for (scalar, base) in scalars.iter().zip(bases) {
            let scalar = scalar.as_ref();
            if is_unit(scalar) {
                // We only process unit scalars once in the first window.
                if w_start == 0 {
                    res.add_assign(base);
                }
            } else {
                let digit = get_bits(scalar, w_start, c);
                if digit != 0 {
                    buckets[(digit - 1) as usize].add_assign(base);
                }
            }
        }

        let mut running_sum = zero;
        for b in buckets.iter().rev() {
            running_sum.add_assign(b);
            res.add_assign(&running_sum);
        }
        res
    }
}

fn is_unit(scalar: &[u64]) -> bool {
    match scalar.split_first() {
        Some((&1, rest)) => rest.iter().all(|&limb| limb == 0),
        _ => false,
    }
}
