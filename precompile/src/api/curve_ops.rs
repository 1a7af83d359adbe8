use super::OperationType;
use crate::{
    config::ApiConfig,
    constants::{EXTENSION_DEGREE_2, EXTENSION_DEGREE_3},
    decoder::{encode_point, Decoder, WireElement},
    errors::ApiError,
};
use algebra::{
    msm::VariableBaseMSM, Fp, Fp2, Fp2Parameters, Fp3, Fp3Parameters, WeierstrassCurve,
};

/// Addition, multiplication and multi-exponentiation on a curve over the
/// base field.
pub(crate) fn run_g1_operation<const N: usize>(
    mut decoder: Decoder<'_>,
    operation: OperationType,
    config: &ApiConfig,
) -> Result<Vec<u8>, ApiError> {
    let field = decoder.read_prime_field::<N>()?;
    let curve: WeierstrassCurve<Fp<'_, N>> = decoder.read_curve(&field)?;
    execute(decoder, &curve, operation, config)
}

/// The same operations on a curve over a quadratic or cubic extension, given
/// by its non-residue.
pub(crate) fn run_g2_operation<const N: usize>(
    mut decoder: Decoder<'_>,
    operation: OperationType,
    config: &ApiConfig,
) -> Result<Vec<u8>, ApiError> {
    let field = decoder.read_prime_field::<N>()?;
    let degree = decoder.read_extension_degree(&[EXTENSION_DEGREE_2, EXTENSION_DEGREE_3])?;

    if degree == EXTENSION_DEGREE_2 {
        let fp2_params = Fp2Parameters::new(decoder.read_non_residue(&field, &[2])?);
        let curve: WeierstrassCurve<Fp2<'_, N>> = decoder.read_curve(&fp2_params)?;
        execute(decoder, &curve, operation, config)
    } else {
        let fp3_params = Fp3Parameters::new(decoder.read_non_residue(&field, &[3])?);
        let curve: WeierstrassCurve<Fp3<'_, N>> = decoder.read_curve(&fp3_params)?;
        execute(decoder, &curve, operation, config)
    }
}

fn execute<F: WireElement>(
    mut decoder: Decoder<'_>,
    curve: &WeierstrassCurve<F>,
    operation: OperationType,
    config: &ApiConfig,
) -> Result<Vec<u8>, ApiError> {
    use super::OperationType::*;

    let result = match operation {
        G1Add | G2Add => {
            let p = decoder.read_point(curve, "first point")?;
            let q = decoder.read_point(curve, "second point")?;
            p.add(&q)
        }
        G1Mul | G2Mul => {
            let p = decoder.read_point(curve, "point")?;
            let scalar = decoder.read_scalar(curve.subgroup_order())?;
            p.wnaf_mul(&scalar)
        }
        G1MultiExp | G2MultiExp => {
            let terms = decoder.read_count(config.max_pairs, "number of terms")?;
            let mut bases = Vec::with_capacity(terms);
            let mut scalars = Vec::with_capacity(terms);
            for _ in 0..terms {
                bases.push(decoder.read_point(curve, "base")?);
                scalars.push(decoder.read_scalar(curve.subgroup_order())?);
            }
            VariableBaseMSM::multi_scalar_mul(curve, &bases, &scalars)?
        }
        other => return Err(ApiError::UnknownOperation(other as u8)),
    };

    decoder.finish()?;
    Ok(encode_point(&result))
}
