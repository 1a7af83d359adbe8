//! Pairing checks. Each family decodes its base curve, builds the extension
//! tower and the twist carrying G2, reads the loop parameters and the pairs,
//! and reports whether the product of pairings is one.

use crate::{
    config::ApiConfig,
    constants::{
        EXTENSION_DEGREE_2, EXTENSION_DEGREE_3, MAX_LOOP_HAMMING_WEIGHT,
        MAX_MNT_LOOP_HAMMING_WEIGHT, PAIRING_FAILURE, PAIRING_SUCCESS, TWIST_TYPE_D,
        TWIST_TYPE_M,
    },
    decoder::{Decoder, WireElement},
    errors::{input_error, ApiError},
};
use algebra::{
    bls12::Bls12Instance,
    bn::{six_u_plus_2, BnInstance},
    fp12_2over3over2::{frobenius_powers_of_non_residue, Fp12Parameters},
    fp6_2over3, fp6_3over2, hamming_weight,
    mnt4::{mnt4_twist_coefficients, Mnt4Instance},
    mnt6::{mnt6_twist_coefficients, Mnt6Instance},
    CurvePoint, Field, Fp, Fp2, Fp2Parameters, Fp3Parameters, Fp4Parameters, MntLoopParameters,
    PairingEngine, TwistType, WeierstrassCurve,
};
use log::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SexticFamily {
    Bls12,
    Bn,
}

pub(crate) fn run_bls12_pairing<const N: usize>(
    decoder: Decoder<'_>,
    config: &ApiConfig,
) -> Result<Vec<u8>, ApiError> {
    run_sextic_pairing::<N>(decoder, config, SexticFamily::Bls12)
}

pub(crate) fn run_bn_pairing<const N: usize>(
    decoder: Decoder<'_>,
    config: &ApiConfig,
) -> Result<Vec<u8>, ApiError> {
    run_sextic_pairing::<N>(decoder, config, SexticFamily::Bn)
}

/// Reads the pairs of a pairing check. Pairs with the identity on either
/// side are dropped.
fn read_pairs<'c, F1: WireElement, F2: WireElement>(
    decoder: &mut Decoder<'_>,
    g1_curve: &'c WeierstrassCurve<F1>,
    g2_curve: &'c WeierstrassCurve<F2>,
    config: &ApiConfig,
) -> Result<Vec<(CurvePoint<'c, F1>, CurvePoint<'c, F2>)>, ApiError> {
    let count = decoder.read_count(config.max_pairs, "number of pairs")?;
    let mut pairs = Vec::with_capacity(count);
    for _ in 0..count {
        let p = decoder.read_checked_point(g1_curve, "G1 point")?;
        let q = decoder.read_checked_point(g2_curve, "G2 point")?;
        if !p.is_zero() && !q.is_zero() {
            pairs.push((p, q));
        }
    }
    debug!("{} of {} pairs enter the Miller loop", pairs.len(), count);
    Ok(pairs)
}

fn pairing_check<E: PairingEngine>(engine: &E, pairs: &[(E::G1, E::G2)]) -> Vec<u8> {
    match engine.pair(pairs) {
        Some(f) if f.is_one() => vec![PAIRING_SUCCESS],
        _ => vec![PAIRING_FAILURE],
    }
}

fn read_twist_type(decoder: &mut Decoder<'_>) -> Result<TwistType, ApiError> {
    match decoder.read_u8("twist type")? {
        TWIST_TYPE_M => Ok(TwistType::M),
        TWIST_TYPE_D => Ok(TwistType::D),
        other => Err(input_error(format!("unknown twist type {}", other))),
    }
}

fn run_sextic_pairing<const N: usize>(
    mut decoder: Decoder<'_>,
    config: &ApiConfig,
    family: SexticFamily,
) -> Result<Vec<u8>, ApiError> {
    let field = decoder.read_prime_field::<N>()?;
    let g1_curve: WeierstrassCurve<Fp<'_, N>> = decoder.read_curve(&field)?;
    if !g1_curve.a_is_zero() {
        return Err(input_error("curve coefficient a must be zero"));
    }

    decoder.read_extension_degree(&[EXTENSION_DEGREE_2])?;
    let mut fp2_params = Fp2Parameters::new(decoder.read_non_residue(&field, &[2])?);
    fp2_params.calculate_frobenius_coeffs()?;
    let xi = decoder.read_sextic_non_residue(&fp2_params)?;

    let twist_type = read_twist_type(&mut decoder)?;
    let mut twist_b = match twist_type {
        TwistType::M => xi,
        TwistType::D => xi
            .inverse()
            .ok_or_else(|| input_error("F6 non-residue is not invertible"))?,
    };
    twist_b.mul_by_fp(&g1_curve.b);

    let powers = frobenius_powers_of_non_residue(&xi)?;
    let mut fp6_params = fp6_3over2::Fp6Parameters::new(xi);
    fp6_params.calculate_frobenius_coeffs_with_precomputation(&powers);
    let mut fp12_params = Fp12Parameters::new(&fp6_params);
    fp12_params.calculate_frobenius_coeffs_with_precomputation(&powers);

    let g2_curve = WeierstrassCurve::new(
        Fp2::zero(&fp2_params),
        twist_b,
        g1_curve.subgroup_order().to_vec(),
    );

    let x = decoder.read_loop_parameter("loop parameter")?;
    let x_is_negative = decoder.read_sign("loop parameter sign")?;
    let loop_weight = match family {
        SexticFamily::Bls12 => hamming_weight(&x),
        SexticFamily::Bn => hamming_weight(&six_u_plus_2(&x, x_is_negative)),
    };
    if loop_weight > MAX_LOOP_HAMMING_WEIGHT {
        return Err(input_error(format!(
            "loop scalar has Hamming weight {} above {}",
            loop_weight, MAX_LOOP_HAMMING_WEIGHT
        )));
    }

    let pairs = read_pairs(&mut decoder, &g1_curve, &g2_curve, config)?;
    decoder.finish()?;

    let force_binary = config.force_binary_miller_loop;
    match family {
        SexticFamily::Bls12 => {
            let engine = Bls12Instance::new(
                x,
                x_is_negative,
                twist_type,
                twist_b,
                &fp12_params,
                force_binary,
            )?;
            Ok(pairing_check(&engine, &pairs))
        }
        SexticFamily::Bn => {
            let engine =
                BnInstance::new(x, x_is_negative, twist_type, twist_b, &fp12_params, force_binary)?;
            Ok(pairing_check(&engine, &pairs))
        }
    }
}

fn read_mnt_loop_parameters(decoder: &mut Decoder<'_>) -> Result<MntLoopParameters, ApiError> {
    let x = decoder.read_loop_parameter("loop parameter")?;
    let loop_weight = hamming_weight(&x);
    if loop_weight > MAX_MNT_LOOP_HAMMING_WEIGHT {
        return Err(input_error(format!(
            "loop scalar has Hamming weight {} above {}",
            loop_weight, MAX_MNT_LOOP_HAMMING_WEIGHT
        )));
    }
    let x_is_negative = decoder.read_sign("loop parameter sign")?;
    let w1 = decoder.read_loop_parameter("exponent w1")?;
    let w0 = decoder.read_loop_parameter("exponent w0")?;
    let w0_is_negative = decoder.read_sign("exponent w0 sign")?;
    Ok(MntLoopParameters {
        x,
        x_is_negative,
        w1,
        w0,
        w0_is_negative,
    })
}

pub(crate) fn run_mnt4_pairing<const N: usize>(
    mut decoder: Decoder<'_>,
    config: &ApiConfig,
) -> Result<Vec<u8>, ApiError> {
    let field = decoder.read_prime_field::<N>()?;
    let g1_curve: WeierstrassCurve<Fp<'_, N>> = decoder.read_curve(&field)?;

    decoder.read_extension_degree(&[EXTENSION_DEGREE_2])?;
    let mut fp2_params = Fp2Parameters::new(decoder.read_non_residue(&field, &[2])?);
    fp2_params.calculate_frobenius_coeffs()?;
    let mut fp4_params = Fp4Parameters::new(&fp2_params);
    fp4_params.calculate_frobenius_coeffs()?;

    let (twist_a, twist_b) = mnt4_twist_coefficients(&g1_curve.a, &g1_curve.b, &fp2_params);
    let g2_curve = WeierstrassCurve::new(twist_a, twist_b, g1_curve.subgroup_order().to_vec());

    let loop_parameters = read_mnt_loop_parameters(&mut decoder)?;
    let pairs = read_pairs(&mut decoder, &g1_curve, &g2_curve, config)?;
    decoder.finish()?;

    let engine = Mnt4Instance::new(loop_parameters, twist_a, &fp4_params)?;
    Ok(pairing_check(&engine, &pairs))
}

pub(crate) fn run_mnt6_pairing<const N: usize>(
    mut decoder: Decoder<'_>,
    config: &ApiConfig,
) -> Result<Vec<u8>, ApiError> {
    let field = decoder.read_prime_field::<N>()?;
    let g1_curve: WeierstrassCurve<Fp<'_, N>> = decoder.read_curve(&field)?;

    decoder.read_extension_degree(&[EXTENSION_DEGREE_3])?;
    let mut fp3_params = Fp3Parameters::new(decoder.read_non_residue(&field, &[2, 3])?);
    fp3_params.calculate_frobenius_coeffs()?;
    let mut fp6_params = fp6_2over3::Fp6Parameters::new(&fp3_params);
    fp6_params.calculate_frobenius_coeffs()?;

    let (twist_a, twist_b) = mnt6_twist_coefficients(&g1_curve.a, &g1_curve.b, &fp3_params);
    let g2_curve = WeierstrassCurve::new(twist_a, twist_b, g1_curve.subgroup_order().to_vec());

    let loop_parameters = read_mnt_loop_parameters(&mut decoder)?;
    let pairs = read_pairs(&mut decoder, &g1_curve, &g2_curve, config)?;
    decoder.finish()?;

    let engine = Mnt6Instance::new(loop_parameters, twist_a, &fp6_params)?;
    Ok(pairing_check(&engine, &pairs))
}
