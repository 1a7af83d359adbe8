use super::Decoder;
use crate::errors::{input_error, ApiError};
use algebra::{
    is_non_nth_root, AlgebraError, CurvePoint, Field, Fp, Fp2, Fp2Parameters, Fp3,
    Fp3Parameters, PrimeField, WeierstrassCurve,
};
use num_bigint::BigUint;
use num_traits::One;

/// Field elements with a fixed width big-endian encoding: every base field
/// coordinate takes exactly the byte length of the modulus.
pub trait WireElement: Field {
    fn read(decoder: &mut Decoder<'_>, params: Self::Parameters, what: &str)
        -> Result<Self, ApiError>;

    fn write(&self, out: &mut Vec<u8>);
}

impl<'a, const N: usize> WireElement for Fp<'a, N> {
    fn read(
        decoder: &mut Decoder<'_>,
        field: &'a PrimeField<N>,
        what: &str,
    ) -> Result<Self, ApiError> {
        let len = decoder.modulus_len();
        let bytes = decoder.read_bytes(len, what)?;
        Fp::from_be_bytes_padded(field, bytes).map_err(|e| match e {
            AlgebraError::NotReduced => input_error(format!("{} is not reduced", what)),
            e => e.into(),
        })
    }

    fn write(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_dense_be_bytes());
    }
}

impl<'a, const N: usize> WireElement for Fp2<'a, N> {
    fn read(
        decoder: &mut Decoder<'_>,
        params: &'a Fp2Parameters<'a, N>,
        what: &str,
    ) -> Result<Self, ApiError> {
        let c0 = Fp::read(decoder, params.field(), what)?;
        let c1 = Fp::read(decoder, params.field(), what)?;
        Ok(Fp2::new(c0, c1, params))
    }

    fn write(&self, out: &mut Vec<u8>) {
        self.c0.write(out);
        self.c1.write(out);
    }
}

impl<'a, const N: usize> WireElement for Fp3<'a, N> {
    fn read(
        decoder: &mut Decoder<'_>,
        params: &'a Fp3Parameters<'a, N>,
        what: &str,
    ) -> Result<Self, ApiError> {
        let c0 = Fp::read(decoder, params.field(), what)?;
        let c1 = Fp::read(decoder, params.field(), what)?;
        let c2 = Fp::read(decoder, params.field(), what)?;
        Ok(Fp3::new(c0, c1, c2, params))
    }

    fn write(&self, out: &mut Vec<u8>) {
        self.c0.write(out);
        self.c1.write(out);
        self.c2.write(out);
    }
}

/// Affine encoding `x || y`, the identity is encoded as all zeros.
pub fn encode_point<F: WireElement>(point: &CurvePoint<'_, F>) -> Vec<u8> {
    let (x, y) = point.into_affine();
    let mut out = Vec::new();
    x.write(&mut out);
    y.write(&mut out);
    out
}

/// Order of the multiplicative group of the field with `modulus^degree`
/// elements.
fn multiplicative_order(modulus: &BigUint, degree: u32) -> BigUint {
    modulus.pow(degree) - BigUint::one()
}

impl<'b> Decoder<'b> {
    /// Reads the length prefixed modulus and builds its field.
    pub fn read_prime_field<const N: usize>(&mut self) -> Result<PrimeField<N>, ApiError> {
        let modulus = self.read_modulus()?;
        PrimeField::from_be_bytes(modulus).map_err(|e| match e {
            AlgebraError::InvalidModulus => {
                input_error("modulus must be odd and greater than three")
            }
            e => e.into(),
        })
    }

    pub fn read_element<F: WireElement>(
        &mut self,
        params: F::Parameters,
        what: &str,
    ) -> Result<F, ApiError> {
        F::read(self, params, what)
    }

    /// Reads `a`, `b` and the subgroup order of a curve over `F`.
    pub fn read_curve<F: WireElement>(
        &mut self,
        params: F::Parameters,
    ) -> Result<WeierstrassCurve<F>, ApiError> {
        let a = self.read_element(params, "curve coefficient a")?;
        let b = self.read_element(params, "curve coefficient b")?;
        let order = self.read_group_order()?;
        Ok(WeierstrassCurve::new(a, b, order))
    }

    /// Reads an affine point, `(0, 0)` being the identity. Any other point
    /// must satisfy the curve equation.
    pub fn read_point<'c, F: WireElement>(
        &mut self,
        curve: &'c WeierstrassCurve<F>,
        what: &str,
    ) -> Result<CurvePoint<'c, F>, ApiError> {
        let params = curve.a.parameters();
        let x: F = self.read_element(params, what)?;
        let y: F = self.read_element(params, what)?;
        if x.is_zero() && y.is_zero() {
            return Ok(CurvePoint::zero(curve));
        }

        let point = CurvePoint::from_xy(curve, x, y);
        if !point.is_on_curve() {
            return self.reject(format!("{} is not on the curve", what));
        }
        Ok(point)
    }

    /// Reads a subgroup check flag followed by a point, and runs the check
    /// if requested.
    pub fn read_checked_point<'c, F: WireElement>(
        &mut self,
        curve: &'c WeierstrassCurve<F>,
        what: &str,
    ) -> Result<CurvePoint<'c, F>, ApiError> {
        let check = self.read_flag("subgroup check flag")?;
        let point = self.read_point(curve, what)?;
        if check && !point.is_in_subgroup() {
            return self.reject(format!("{} is not in the prime order subgroup", what));
        }
        Ok(point)
    }

    /// Reads a base field element which must not be an n-th power for any
    /// of the given `degrees`.
    pub fn read_non_residue<'a, const N: usize>(
        &mut self,
        field: &'a PrimeField<N>,
        degrees: &[u64],
    ) -> Result<Fp<'a, N>, ApiError> {
        let non_residue: Fp<'a, N> = self.read_element(field, "non-residue")?;
        if non_residue.is_zero() {
            return self.reject("non-residue is zero".to_owned());
        }
        let group_order = multiplicative_order(&field.modulus_biguint(), 1);
        for &degree in degrees {
            if !is_non_nth_root(&non_residue, &group_order, degree) {
                return self.reject(format!("non-residue is a residue of degree {}", degree));
            }
        }
        Ok(non_residue)
    }

    /// Reads the element of F2 defining F6, which must be neither a square
    /// nor a cube.
    pub fn read_sextic_non_residue<'a, const N: usize>(
        &mut self,
        fp2_params: &'a Fp2Parameters<'a, N>,
    ) -> Result<Fp2<'a, N>, ApiError> {
        let non_residue: Fp2<'a, N> = self.read_element(fp2_params, "F6 non-residue")?;
        if non_residue.is_zero() {
            return self.reject("F6 non-residue is zero".to_owned());
        }
        let group_order = multiplicative_order(&fp2_params.field().modulus_biguint(), 2);
        for &degree in &[2, 3] {
            if !is_non_nth_root(&non_residue, &group_order, degree) {
                return self.reject(format!("F6 non-residue is a residue of degree {}", degree));
            }
        }
        Ok(non_residue)
    }

    /// Reads a sign flag, `1` meaning negative.
    pub fn read_sign(&mut self, what: &str) -> Result<bool, ApiError> {
        self.read_flag(what)
    }
}
