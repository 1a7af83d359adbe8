use super::{encode_point, Decoder};
use crate::errors::ApiError;
use algebra::{Field, Fp, PrimeField, WeierstrassCurve};

fn is_input_error<T>(result: Result<T, ApiError>) -> bool {
    matches!(result, Err(ApiError::InputError(_)))
}

#[test]
fn test_cursor() {
    let input = [0x01, 0x00, 0x02, 0xaa, 0xbb, 0xcc];
    let mut decoder = Decoder::new(&input);

    assert_eq!(decoder.read_flag("flag"), Ok(true));
    assert_eq!(decoder.read_flag("flag"), Ok(false));
    assert!(is_input_error(decoder.read_flag("flag")));
    assert_eq!(decoder.position(), 3);
    assert_eq!(decoder.read_bytes(2, "bytes"), Ok(&input[3..5]));
    assert!(is_input_error(decoder.read_bytes(2, "bytes")));
    assert_eq!(decoder.remaining(), 1);
    assert!(is_input_error(Decoder::new(&input[..4]).finish()));

    assert_eq!(decoder.read_u8("byte"), Ok(0xcc));
    assert!(is_input_error(decoder.read_u8("byte")));
    assert!(decoder.finish().is_ok());
}

#[test]
fn test_counts() {
    assert_eq!(Decoder::new(&[3]).read_count(3, "count"), Ok(3));
    assert!(is_input_error(Decoder::new(&[4]).read_count(3, "count")));
    assert!(is_input_error(Decoder::new(&[0]).read_count(3, "count")));
}

#[test]
fn test_limb_count() {
    let limbs = |modulus: &[u8]| {
        let mut input = vec![modulus.len() as u8];
        input.extend_from_slice(modulus);
        Decoder::new(&input).peek_limb_count()
    };

    assert_eq!(limbs(&[0x07]), Ok(4));
    assert_eq!(limbs(&[0xff; 32]), Ok(4));
    assert_eq!(limbs(&[0x01; 33]), Ok(5));
    assert_eq!(limbs(&[0x1a; 48]), Ok(6));
    assert_eq!(limbs(&[0x01; 65]), Ok(9));
    assert_eq!(limbs(&[0xff; 128]), Ok(16));
    assert!(is_input_error(limbs(&[0xff; 129])));
    assert!(is_input_error(limbs(&[])));
    assert!(is_input_error(limbs(&[0x00, 0x07])));

    // peeking does not move the cursor
    let input = [1, 7];
    let decoder = Decoder::new(&input);
    assert_eq!(decoder.peek_limb_count(), Ok(4));
    assert_eq!(decoder.position(), 0);
}

#[test]
fn test_group_order_and_scalars() {
    // order 0x0101, scalars take two bytes
    let input = [2, 0x01, 0x01, 0x01, 0x00, 0x01, 0x01, 0x00];
    let mut decoder = Decoder::new(&input);
    let order = decoder.read_group_order().unwrap();
    assert_eq!(order, vec![0x0101]);
    assert_eq!(decoder.order_len(), 2);
    assert_eq!(decoder.read_scalar(&order), Ok(vec![0x0100]));
    assert!(is_input_error(decoder.read_scalar(&order)));
    assert!(is_input_error(decoder.read_scalar(&order)));

    assert!(is_input_error(Decoder::new(&[0]).read_group_order()));
    assert!(is_input_error(Decoder::new(&[1, 0]).read_group_order()));
}

#[test]
fn test_loop_parameters() {
    let mut input = vec![9, 0x01];
    input.extend_from_slice(&[0u8; 8]);
    assert_eq!(
        Decoder::new(&input).read_loop_parameter("x"),
        Ok(vec![0, 1])
    );

    // 2032 bits are accepted, 2033 are not
    let mut input = vec![254, 0xff];
    input.extend_from_slice(&[0u8; 253]);
    assert!(Decoder::new(&input).read_loop_parameter("x").is_ok());
    let mut input = vec![255, 0x01];
    input.extend_from_slice(&[0u8; 254]);
    assert!(is_input_error(Decoder::new(&input).read_loop_parameter("x")));

    assert!(is_input_error(Decoder::new(&[0]).read_loop_parameter("x")));
    assert!(is_input_error(Decoder::new(&[2, 0, 1]).read_loop_parameter("x")));
}

#[test]
fn test_field_elements() {
    // p = 13
    let input = [1, 13, 12, 13, 2];
    let mut decoder = Decoder::new(&input);
    let field: PrimeField<4> = decoder.read_prime_field().unwrap();
    assert_eq!(decoder.modulus_len(), 1);

    let twelve: Fp<'_, 4> = decoder.read_element(&field, "element").unwrap();
    assert_eq!(twelve, Fp::one(&field).neg());
    assert!(is_input_error(
        decoder.read_element::<Fp<'_, 4>>(&field, "element")
    ));

    // 2 is a non-square modulo 13, 4 is a square; 2 is a non-cube, 5 is a cube
    let mut decoder = Decoder::new(&[2, 4, 2, 5]);
    decoder.modulus_len = 1;
    assert!(decoder.read_non_residue(&field, &[2, 3]).is_ok());
    assert!(is_input_error(decoder.read_non_residue(&field, &[2])));
    assert!(decoder.read_non_residue(&field, &[3]).is_ok());
    assert!(is_input_error(decoder.read_non_residue(&field, &[3])));
}

#[test]
fn test_points() {
    // y^2 = x^3 + 1 over p = 13
    let field: PrimeField<4> = Decoder::new(&[1, 13]).read_prime_field().unwrap();
    let curve = WeierstrassCurve::new(Fp::zero(&field), Fp::one(&field), vec![7]);

    let input = [0, 0, 2, 3, 2, 4];
    let mut decoder = Decoder::new(&input);
    decoder.modulus_len = 1;

    let identity = decoder.read_point(&curve, "point").unwrap();
    assert!(identity.is_zero());
    assert_eq!(encode_point(&identity), vec![0, 0]);

    let point = decoder.read_point(&curve, "point").unwrap();
    assert!(point.is_on_curve());
    assert_eq!(encode_point(&point), vec![2, 3]);

    assert!(is_input_error(decoder.read_point(&curve, "point")));
}
