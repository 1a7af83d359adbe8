//! Miller loop machinery shared by MNT4 and MNT6 curves, whose G2 lives on a
//! quadratic twist over the extension Fqe = F2 resp. F3 and whose pairing
//! lands in Fqk = Fqe[Y]/(Y^2 - X).
//!
//! The running point is kept in extended Jacobian coordinates (X, Y, Z, T)
//! with T = Z^2, and the line functions are those of the flipped Miller
//! loop of [libff](https://github.com/scipr-lab/libff).

use crate::fields::{BitIterator, CyclotomicField, Field};

/// Loop count and final exponentiation parameters of an MNT curve.
///
/// The loop count is the Frobenius trace minus one, and the hard part of
/// the final exponentiation is decomposed as `w1 * p + w0`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MntLoopParameters {
    /// Absolute value of the loop count.
    pub x: Vec<u64>,
    pub x_is_negative: bool,
    pub w1: Vec<u64>,
    /// Absolute value of w0.
    pub w0: Vec<u64>,
    pub w0_is_negative: bool,
}

#[derive(Copy, Clone, Debug)]
pub(crate) struct ExtendedPoint<F: Field> {
    pub x: F,
    pub y: F,
    pub z: F,
    pub t: F,
}

pub(crate) struct DoublingCoefficients<F: Field> {
    pub c_h: F,
    pub c_4c: F,
    pub c_j: F,
    pub c_l: F,
}

pub(crate) struct AdditionCoefficients<F: Field> {
    pub c_l1: F,
    pub c_rz: F,
}

/// The G1 and G2 data the line evaluations need, with P = (px, py) and
/// Q = (qx, qy) affine.
#[derive(Copy, Clone, Debug)]
pub(crate) struct PreparedPair<F: Field> {
    /// twist * px
    pub px_twist: F,
    /// twist * py
    pub py_twist: F,
    pub qx: F,
    pub qy: F,
    pub qy_squared: F,
    /// qy / twist
    pub qy_over_twist: F,
    /// px - qx / twist
    pub l1_coeff: F,
}

pub(crate) fn doubling_step<F: Field>(
    r: &mut ExtendedPoint<F>,
    twist_coeff_a: &F,
) -> DoublingCoefficients<F> {
    let a = r.t.square();
    let b = r.x.square();
    let c = r.y.square();
    let d = c.square();
    let e = r.x.add(&c).square().sub(&b).sub(&d);
    let f = b.double().add(&b).add(&twist_coeff_a.mul(&a));
    let g = f.square();

    let x = *r;
    // X3 = -4*E+G
    r.x = g.sub(&e.double().double());
    // Y3 = -8*D+F*(2*E-X3)
    r.y = f.mul(&e.double().sub(&r.x)).sub(&d.double().double().double());
    // Z3 = (Y1+Z1)^2-C-T1
    r.z = x.y.add(&x.z).square().sub(&c).sub(&x.t);
    // T3 = Z3^2
    r.t = r.z.square();

    DoublingCoefficients {
        c_h: r.z.add(&x.t).square().sub(&r.t).sub(&a),
        c_4c: c.double().double(),
        c_j: f.add(&x.t).square().sub(&g).sub(&a),
        c_l: f.add(&x.x).square().sub(&g).sub(&b),
    }
}

pub(crate) fn mixed_addition_step<F: Field>(
    r: &mut ExtendedPoint<F>,
    x2: &F,
    y2: &F,
    y2_squared: &F,
) -> AdditionCoefficients<F> {
    let x1 = *r;

    let b = x2.mul(&x1.t);
    let d = y2.add(&x1.z).square().sub(y2_squared).sub(&x1.t).mul(&x1.t);
    let h = b.sub(&x1.x);
    let i = h.square();
    let e = i.double().double();
    let j = h.mul(&e);
    let v = x1.x.mul(&e);
    let l1 = d.sub(&x1.y.double());

    // X3 = L1^2 - J - 2*V
    r.x = l1.square().sub(&j).sub(&v.double());
    // Y3 = L1 * (V-X3) - 2*Y1 * J
    r.y = l1.mul(&v.sub(&r.x)).sub(&x1.y.double().mul(&j));
    // Z3 = (Z1 + H)^2 - T1 - I
    r.z = x1.z.add(&h).square().sub(&x1.t).sub(&i);
    // T3 = Z3^2
    r.t = r.z.square();

    AdditionCoefficients {
        c_l1: l1,
        c_rz: r.z,
    }
}

/// Flipped Miller loop over the bits of `loop_count`, accumulating all pairs
/// in a single traversal. `line` assembles an element of Fqk from its two
/// Fqe coordinates.
pub(crate) fn miller_loop<F, K, L>(
    pairs: &[PreparedPair<F>],
    loop_count: &[u64],
    twist_coeff_a: &F,
    one: K,
    line: L,
) -> K
where
    F: Field,
    K: Field,
    L: Fn(F, F) -> K,
{
    let fqe_one = F::one(twist_coeff_a.parameters());
    let mut points: Vec<ExtendedPoint<F>> = pairs
        .iter()
        .map(|pair| ExtendedPoint {
            x: pair.qx,
            y: pair.qy,
            z: fqe_one,
            t: fqe_one,
        })
        .collect();

    let mut f = one;
    let mut found_one = false;

    for bit in BitIterator::new(loop_count) {
        if !found_one {
            found_one = bit;
            continue;
        }

        f.square_in_place();

        for (pair, r) in pairs.iter().zip(points.iter_mut()) {
            let dc = doubling_step(r, twist_coeff_a);
            let g_rr_at_p = line(
                dc.c_l.sub(&dc.c_4c).sub(&dc.c_j.mul(&pair.px_twist)),
                dc.c_h.mul(&pair.py_twist),
            );
            f.mul_assign(&g_rr_at_p);
        }

        if bit {
            for (pair, r) in pairs.iter().zip(points.iter_mut()) {
                let ac = mixed_addition_step(r, &pair.qx, &pair.qy, &pair.qy_squared);
                let g_rq_at_p = line(
                    ac.c_rz.mul(&pair.py_twist),
                    pair.qy_over_twist
                        .mul(&ac.c_rz)
                        .add(&pair.l1_coeff.mul(&ac.c_l1))
                        .neg(),
                );
                f.mul_assign(&g_rq_at_p);
            }
        }
    }

    f
}

/// Exponentiation by `w1 * p + w0` of an element of the cyclotomic subgroup.
pub(crate) fn final_exponentiation_last_chunk<K: CyclotomicField>(
    elt: &K,
    params: &MntLoopParameters,
) -> K {
    let mut elt_q = *elt;
    elt_q.frobenius_map(1);

    let w1_part = elt_q.cyclotomic_exp(&params.w1);
    let w0_part = if params.w0_is_negative {
        elt.unitary_inverse().cyclotomic_exp(&params.w0)
    } else {
        elt.cyclotomic_exp(&params.w0)
    };

    w1_part.mul(&w0_part)
}
