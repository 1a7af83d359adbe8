use crate::{
    biginteger::{num_bits, wnaf},
    fields::Field,
};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// A short Weierstrass curve y^2 = x^3 + a * x + b over `F`, together with
/// the order of the prime subgroup its points are expected to live in.
#[derive(Derivative)]
#[derivative(Clone(bound = ""), Debug(bound = ""), PartialEq(bound = ""), Eq(bound = ""))]
pub struct WeierstrassCurve<F: Field> {
    pub a: F,
    pub b: F,
    a_is_zero: bool,
    subgroup_order: Vec<u64>,
}

impl<F: Field> WeierstrassCurve<F> {
    pub fn new(a: F, b: F, subgroup_order: Vec<u64>) -> Self {
        Self {
            a_is_zero: a.is_zero(),
            a,
            b,
            subgroup_order,
        }
    }

    #[inline]
    pub fn a_is_zero(&self) -> bool {
        self.a_is_zero
    }

    /// Little-endian limbs of the subgroup order.
    #[inline]
    pub fn subgroup_order(&self) -> &[u64] {
        &self.subgroup_order
    }

    pub fn subgroup_order_bits(&self) -> usize {
        num_bits(&self.subgroup_order)
    }

    pub fn zero(&self) -> CurvePoint<'_, F> {
        CurvePoint::zero(self)
    }
}

/// A point in Jacobian coordinates, representing the affine point
/// (x / z^2, y / z^3). The point at infinity has z = 0.
#[derive(Derivative)]
#[derivative(Debug(bound = ""))]
pub struct CurvePoint<'c, F: Field> {
    pub x: F,
    pub y: F,
    pub z: F,
    #[derivative(Debug = "ignore")]
    curve: &'c WeierstrassCurve<F>,
}

impl<'c, F: Field> CurvePoint<'c, F> {
    /// The point at infinity, (0, 1, 0).
    pub fn zero(curve: &'c WeierstrassCurve<F>) -> Self {
        let params = curve.b.parameters();
        CurvePoint {
            x: F::zero(params),
            y: F::one(params),
            z: F::zero(params),
            curve,
        }
    }

    /// Lifts an affine point. The curve equation is not checked.
    pub fn from_xy(curve: &'c WeierstrassCurve<F>, x: F, y: F) -> Self {
        let z = F::one(x.parameters());
        CurvePoint { x, y, z, curve }
    }

    #[inline]
    pub fn curve(&self) -> &'c WeierstrassCurve<F> {
        self.curve
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.z.is_zero()
    }

    /// Checks y^2 = x^3 + a * x * z^4 + b * z^6.
    pub fn is_on_curve(&self) -> bool {
        if self.is_zero() {
            return true;
        }
        let z2 = self.z.square();
        let z4 = z2.square();
        let z6 = z4.mul(&z2);

        let mut rhs = self.x.square().mul(&self.x);
        if !self.curve.a_is_zero {
            rhs.add_assign(&self.curve.a.mul(&self.x).mul(&z4));
        }
        rhs.add_assign(&self.curve.b.mul(&z6));

        self.y.square() == rhs
    }

    /// Returns the affine coordinates, (0, 0) for the point at infinity.
    pub fn into_affine(&self) -> (F, F) {
        let params = self.x.parameters();
        match self.z.inverse() {
            None => (F::zero(params), F::zero(params)),
            Some(z_inv) => {
                let z_inv_squared = z_inv.square();
                let x = self.x.mul(&z_inv_squared);
                let y = self.y.mul(&z_inv_squared.mul(&z_inv));
                (x, y)
            }
        }
    }

    pub fn double_in_place(&mut self) -> &mut Self {
        if self.is_zero() {
            return self;
        }

        if self.curve.a_is_zero {
            // http://www.hyperelliptic.org/EFD/g1p/auto-shortw-jacobian-0.html#doubling-dbl-2009-l

            // A = X1^2
            let a = self.x.square();
            // B = Y1^2
            let b = self.y.square();
            // C = B^2
            let mut c = b.square();
            // D = 2*((X1+B)2-A-C)
            let d = self.x.add(&b).square().sub(&a).sub(&c).double();
            // E = 3*A
            let e = a.double().add(&a);
            // F = E^2
            let f = e.square();

            // Z3 = 2*Y1*Z1
            self.z.mul_assign(&self.y);
            self.z.double_in_place();
            // X3 = F-2*D
            self.x = f.sub(&d.double());
            // Y3 = E*(D-X3)-8*C
            c.double_in_place().double_in_place().double_in_place();
            self.y = e.mul(&d.sub(&self.x)).sub(&c);
        } else {
            // http://www.hyperelliptic.org/EFD/g1p/auto-shortw-jacobian.html#doubling-dbl-2007-bl

            // XX = X1^2
            let xx = self.x.square();
            // YY = Y1^2
            let yy = self.y.square();
            // YYYY = YY^2
            let mut yyyy = yy.square();
            // ZZ = Z1^2
            let zz = self.z.square();
            // S = 2*((X1+YY)^2-XX-YYYY)
            let s = self.x.add(&yy).square().sub(&xx).sub(&yyyy).double();
            // M = 3*XX+a*ZZ^2
            let m = xx.double().add(&xx).add(&self.curve.a.mul(&zz.square()));
            // T = M^2-2*S
            let t = m.square().sub(&s.double());

            // Z3 = (Y1+Z1)^2-YY-ZZ
            self.z = self.y.add(&self.z).square().sub(&yy).sub(&zz);
            // X3 = T
            self.x = t;
            // Y3 = M*(S-T)-8*YYYY
            yyyy.double_in_place().double_in_place().double_in_place();
            self.y = m.mul(&s.sub(&t)).sub(&yyyy);
        }
        self
    }

    #[must_use]
    pub fn double(&self) -> Self {
        let mut copy = *self;
        copy.double_in_place();
        copy
    }

    pub fn add_assign(&mut self, other: &Self) {
        if self.is_zero() {
            *self = *other;
            return;
        }
        if other.is_zero() {
            return;
        }

        // http://www.hyperelliptic.org/EFD/g1p/auto-shortw-jacobian.html#addition-add-2007-bl

        // Z1Z1 = Z1^2
        let z1z1 = self.z.square();
        // Z2Z2 = Z2^2
        let z2z2 = other.z.square();
        // U1 = X1*Z2Z2
        let u1 = self.x.mul(&z2z2);
        // U2 = X2*Z1Z1
        let u2 = other.x.mul(&z1z1);
        // S1 = Y1*Z2*Z2Z2
        let s1 = self.y.mul(&other.z).mul(&z2z2);
        // S2 = Y2*Z1*Z1Z1
        let s2 = other.y.mul(&self.z).mul(&z1z1);

        if u1 == u2 {
            if s1 == s2 {
                self.double_in_place();
            } else {
                *self = Self::zero(self.curve);
            }
            return;
        }

        // H = U2-U1
        let h = u2.sub(&u1);
        // I = (2*H)^2
        let i = h.double().square();
        // J = H*I
        let j = h.mul(&i);
        // r = 2*(S2-S1)
        let r = s2.sub(&s1).double();
        // V = U1*I
        let v = u1.mul(&i);

        // X3 = r^2 - J - 2*V
        self.x = r.square().sub(&j).sub(&v.double());
        // Y3 = r*(V - X3) - 2*S1*J
        self.y = r.mul(&v.sub(&self.x)).sub(&s1.mul(&j).double());
        // Z3 = ((Z1+Z2)^2 - Z1Z1 - Z2Z2)*H
        self.z = self
            .z
            .add(&other.z)
            .square()
            .sub(&z1z1)
            .sub(&z2z2)
            .mul(&h);
    }

    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let mut copy = *self;
        copy.add_assign(other);
        copy
    }

    pub fn sub_assign(&mut self, other: &Self) {
        self.add_assign(&other.neg());
    }

    pub fn negate(&mut self) {
        self.y.negate();
    }

    #[must_use]
    pub fn neg(&self) -> Self {
        let mut copy = *self;
        copy.negate();
        copy
    }

    /// Double-and-add, scanning the scalar from its least significant bit.
    #[must_use]
    pub fn mul<S: AsRef<[u64]>>(&self, scalar: S) -> Self {
        let scalar = scalar.as_ref();
        let mut res = Self::zero(self.curve);
        let mut base = *self;
        let bits = num_bits(scalar);
        for i in 0..bits {
            if (scalar[i / 64] >> (i % 64)) & 1 == 1 {
                res.add_assign(&base);
            }
            if i + 1 < bits {
                base.double_in_place();
            }
        }
        res
    }

    /// Scalar multiplication over the width-3 NAF of the scalar, with a table
    /// holding P and 3P.
    #[must_use]
    pub fn wnaf_mul<S: AsRef<[u64]>>(&self, scalar: S) -> Self {
        let table = [*self, self.double().add(self)];
        let mut res = Self::zero(self.curve);
        for &digit in wnaf(scalar.as_ref(), 3).iter().rev() {
            res.double_in_place();
            if digit > 0 {
                res.add_assign(&table[(digit / 2) as usize]);
            } else if digit < 0 {
                res.sub_assign(&table[(-digit / 2) as usize]);
            }
        }
        res
    }

    /// Whether multiplying by the subgroup order of the curve gives the
    /// point at infinity.
    pub fn is_in_subgroup(&self) -> bool {
        self.wnaf_mul(&self.curve.subgroup_order).is_zero()
    }
}

impl<'c, F: Field> Clone for CurvePoint<'c, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'c, F: Field> Copy for CurvePoint<'c, F> {}

impl<'c, F: Field> PartialEq for CurvePoint<'c, F> {
    fn eq(&self, other: &Self) -> bool {
        if self.is_zero() {
            return other.is_zero();
        }
        if other.is_zero() {
            return false;
        }

        // The points (X, Y, Z) and (X', Y', Z')
        // are equal when (X * Z'^2) = (X' * Z^2)
        // and (Y * Z'^3) = (Y' * Z^3).
        let z1z1 = self.z.square();
        let z2z2 = other.z.square();

        if self.x.mul(&z2z2) != other.x.mul(&z1z1) {
            false
        } else {
            self.y.mul(&z2z2.mul(&other.z)) == other.y.mul(&z1z1.mul(&self.z))
        }
    }
}

impl<'c, F: Field> Eq for CurvePoint<'c, F> {}

impl<'c, F: Field + Display> Display for CurvePoint<'c, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.is_zero() {
            write!(f, "CurvePoint(Infinity)")
        } else {
            let (x, y) = self.into_affine();
            write!(f, "CurvePoint(x={}, y={})", x, y)
        }
    }
}
