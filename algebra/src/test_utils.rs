//! Parameter sets of well known curves, built the same way callers build
//! them at runtime. Everything is leaked to obtain `'static` borrows.

use crate::{
    biginteger::{biguint_to_limbs, BigInteger},
    curves::{
        mnt4::mnt4_twist_coefficients, mnt6::mnt6_twist_coefficients, CurvePoint,
        MntLoopParameters, TwistType, WeierstrassCurve,
    },
    fields::{
        fp12_2over3over2::Fp12Parameters, fp6_2over3, fp6_3over2, Field, Fp, Fp2,
        Fp2Parameters, Fp3, Fp3Parameters, Fp4Parameters, PrimeField,
    },
};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;

pub(crate) const BN254_P: &str =
    "21888242871839275222246405745257275088696311157297823662689037894645226208583";
pub(crate) const BN254_R: &str =
    "21888242871839275222246405745257275088548364400416034343698204186575808495617";

pub(crate) const FP254BNB_P: &str =
    "16798108731015832284940804142231733909889187121439069848933715426072753864723";
pub(crate) const FP254BNB_R: &str =
    "16798108731015832284940804142231733909759579603404752749028378864165570215949";

pub(crate) const BLS12_381_P: &str = "1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab";
pub(crate) const BLS12_381_R: &str =
    "73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001";

/// The MNT4-298 / MNT6-298 cycle: the base field of one curve is the scalar
/// field of the other.
pub(crate) const MNT_A: &str = "475922286169261325753349249653048451545124878552823515553267735739164647307408490559963137";
pub(crate) const MNT_B: &str = "475922286169261325753349249653048451545124879242694725395555128576210262817955800483758081";

pub(crate) fn leak<T>(value: T) -> &'static T {
    Box::leak(Box::new(value))
}

pub(crate) fn dec(s: &str) -> BigUint {
    BigUint::parse_bytes(s.as_bytes(), 10).expect("invalid decimal fixture")
}

pub(crate) fn hex(s: &str) -> BigUint {
    let padded = if s.len() % 2 == 1 {
        format!("0{}", s)
    } else {
        s.to_owned()
    };
    BigUint::from_bytes_be(&hex::decode(padded).expect("invalid hex fixture"))
}

pub(crate) fn prime_field<const N: usize>(modulus: &BigUint) -> &'static PrimeField<N> {
    leak(PrimeField::new(BigInteger::from_biguint(modulus).unwrap()).unwrap())
}

pub(crate) fn fp<const N: usize>(field: &'static PrimeField<N>, value: &BigUint) -> Fp<'static, N> {
    Fp::from_repr(field, BigInteger::from_biguint(value).unwrap()).unwrap()
}

pub(crate) fn minus_one<const N: usize>(field: &'static PrimeField<N>) -> Fp<'static, N> {
    Fp::one(field).neg()
}

/// Loop count q - r and the signed decomposition w1 * q + w0 of
/// (q^2 + 1) / r (MNT4) resp. (q^2 - q + 1) / r (MNT6).
pub(crate) fn mnt_loop_parameters(q: &BigUint, r: &BigUint, embedding_degree: usize) -> MntLoopParameters {
    let (x, x_is_negative) = if q >= r {
        (q - r, false)
    } else {
        (r - q, true)
    };
    let q_squared = q * q;
    let exponent = match embedding_degree {
        4 => (q_squared + 1u32) / r,
        6 => (q_squared - q + 1u32) / r,
        _ => unreachable!(),
    };
    let (mut w1, w0) = exponent.div_rem(q);
    let (w0, w0_is_negative) = if w0 > (q >> 1usize) {
        w1 += BigUint::one();
        (q - w0, true)
    } else {
        (w0, false)
    };

    MntLoopParameters {
        x: biguint_to_limbs(&x),
        x_is_negative,
        w1: biguint_to_limbs(&w1),
        w0: biguint_to_limbs(&w0),
        w0_is_negative,
    }
}

/// A BN or BLS12 curve with G2 on a sextic twist.
pub(crate) struct SexticFixture<const N: usize> {
    pub field: &'static PrimeField<N>,
    pub fp2_params: &'static Fp2Parameters<'static, N>,
    pub fp12_params: &'static Fp12Parameters<'static, N>,
    pub g1_curve: &'static WeierstrassCurve<Fp<'static, N>>,
    pub g2_curve: &'static WeierstrassCurve<Fp2<'static, N>>,
    pub g1: CurvePoint<'static, Fp<'static, N>>,
    pub g2: CurvePoint<'static, Fp2<'static, N>>,
    pub twist_type: TwistType,
    pub twist_b: Fp2<'static, N>,
    /// |u| for BN, |x| for BLS12
    pub loop_parameter: Vec<u64>,
    pub loop_parameter_is_negative: bool,
}

/// Fp2 = Fp[u]/(u^2 + 1) and Fp12 over the sextic non-residue `xi`, or
/// over its inverse when `invert_xi` is set.
fn sextic_tower<const N: usize>(
    field: &'static PrimeField<N>,
    xi: (u64, u64),
    invert_xi: bool,
) -> (&'static Fp2Parameters<'static, N>, &'static Fp12Parameters<'static, N>) {
    let mut fp2_params = Fp2Parameters::new(minus_one(field));
    fp2_params.calculate_frobenius_coeffs().unwrap();
    let fp2_params = leak(fp2_params);

    let mut xi = Fp2::new(Fp::from_u64(field, xi.0), Fp::from_u64(field, xi.1), fp2_params);
    if invert_xi {
        xi = xi.inverse().unwrap();
    }
    let mut fp6_params = fp6_3over2::Fp6Parameters::new(xi);
    fp6_params.calculate_frobenius_coeffs().unwrap();
    let fp6_params = leak(fp6_params);

    let mut fp12_params = Fp12Parameters::new(fp6_params);
    fp12_params.calculate_frobenius_coeffs().unwrap();
    (fp2_params, leak(fp12_params))
}

/// b * xi on an M-twist, b / xi on a D-twist.
fn twist_coefficient<const N: usize>(
    b: &Fp<'static, N>,
    twist_type: TwistType,
    fp12_params: &'static Fp12Parameters<'static, N>,
) -> Fp2<'static, N> {
    let xi = fp12_params.fp6_params.non_residue;
    let mut twist_b = match twist_type {
        TwistType::M => xi,
        TwistType::D => xi.inverse().unwrap(),
    };
    twist_b.mul_by_fp(b);
    twist_b
}

/// Short Weierstrass `y^2 = x^3 + b` with generators given as
/// `[x, y]` resp. `[x.c0, x.c1, y.c0, y.c1]`.
struct SexticCurve<'s, const N: usize> {
    field: &'static PrimeField<N>,
    order: BigUint,
    b: u64,
    xi: (u64, u64),
    invert_xi: bool,
    twist_type: TwistType,
    g1: [Fp<'static, N>; 2],
    g2: [&'s BigUint; 4],
    loop_parameter: u64,
    loop_parameter_is_negative: bool,
}

fn sextic_fixture<const N: usize>(curve: SexticCurve<'_, N>) -> SexticFixture<N> {
    let field = curve.field;
    let r = biguint_to_limbs(&curve.order);
    let (fp2_params, fp12_params) = sextic_tower(field, curve.xi, curve.invert_xi);

    let b = Fp::from_u64(field, curve.b);
    let g1_curve = leak(WeierstrassCurve::new(Fp::zero(field), b, r.clone()));
    let twist_b = twist_coefficient(&b, curve.twist_type, fp12_params);
    let g2_curve = leak(WeierstrassCurve::new(Fp2::zero(fp2_params), twist_b, r));

    let [x, y] = curve.g1;
    let g1 = CurvePoint::from_xy(g1_curve, x, y);
    let [x0, x1, y0, y1] = curve.g2;
    let g2 = CurvePoint::from_xy(
        g2_curve,
        Fp2::new(fp(field, x0), fp(field, x1), fp2_params),
        Fp2::new(fp(field, y0), fp(field, y1), fp2_params),
    );

    SexticFixture {
        field,
        fp2_params,
        fp12_params,
        g1_curve,
        g2_curve,
        g1,
        g2,
        twist_type: curve.twist_type,
        twist_b,
        loop_parameter: vec![curve.loop_parameter],
        loop_parameter_is_negative: curve.loop_parameter_is_negative,
    }
}

/// alt_bn128, u > 0 on a D-twist.
pub(crate) fn bn254() -> SexticFixture<4> {
    let field = prime_field::<4>(&dec(BN254_P));
    sextic_fixture(SexticCurve {
        field,
        order: dec(BN254_R),
        b: 3,
        xi: (9, 1),
        invert_xi: false,
        twist_type: TwistType::D,
        g1: [Fp::from_u64(field, 1), Fp::from_u64(field, 2)],
        g2: [
            &dec("10857046999023057135944570762232829481370756359578518086990519993285655852781"),
            &dec("11559732032986387107991004021392285783925812861821192530917403151452391805634"),
            &dec("8495653923123431417604973247489272438418190587263600148770280649306958101930"),
            &dec("4082367875863433681332203403145435568316851327593401208105741076214120093531"),
        ],
        loop_parameter: 4965661367192848881,
        loop_parameter_is_negative: false,
    })
}

/// Fp254BNb, u = -(2^62 + 2^55 + 1) with G1 = (-1, 1). The G2 generator is
/// the cofactor 2p - r times the twist point with x = 4 + i.
///
/// With `xi = 1 + i` the curve is a D-twist. The same twist curve is an
/// M-twist over the tower built on `xi^-1`, since `b * xi^-1 = b / xi`.
pub(crate) fn fp254bnb(twist_type: TwistType) -> SexticFixture<4> {
    let field = prime_field::<4>(&dec(FP254BNB_P));
    sextic_fixture(SexticCurve {
        field,
        order: dec(FP254BNB_R),
        b: 2,
        xi: (1, 1),
        invert_xi: twist_type == TwistType::M,
        twist_type,
        g1: [minus_one(field), Fp::one(field)],
        g2: [
            &dec("3183461328059746161485255759853561254315005693971655640515975790101400121822"),
            &dec("16341354648347783937658568662356235557911266819982186341504448800805826672123"),
            &dec("5231304657505508117772262766013523836654918297613739911203280856112993092493"),
            &dec("3888110054508891712257828618405222131687685421945574272244710537359569768540"),
        ],
        loop_parameter: (1 << 62) + (1 << 55) + 1,
        loop_parameter_is_negative: true,
    })
}

/// BLS12-381 with `xi = 1 + i` is an M-twist. As for [`fp254bnb`], the
/// D-twist view of the same G2 uses the tower over `xi^-1`.
pub(crate) fn bls12_381_with_twist(twist_type: TwistType) -> SexticFixture<6> {
    let field = prime_field::<6>(&hex(BLS12_381_P));
    sextic_fixture(SexticCurve {
        field,
        order: hex(BLS12_381_R),
        b: 4,
        xi: (1, 1),
        invert_xi: twist_type == TwistType::D,
        twist_type,
        g1: [
            fp(field, &hex("17f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb")),
            fp(field, &hex("08b3f481e3aaa0f1a09e30ed741d8ae4fcf5e095d5d00af600db18cb2c04b3edd03cc744a2888ae40caa232946c5e7e1")),
        ],
        g2: [
            &hex("024aa2b2f08f0a91260805272dc51051c6e47ad4fa403b02b4510b647ae3d1770bac0326a805bbefd48056c8c121bdb8"),
            &hex("13e02b6052719f607dacd3a088274f65596bd0d09920b61ab5da61bbdc7f5049334cf11213945d57e5ac7d055d042b7e"),
            &hex("0ce5d527727d6e118cc9cdc6da2e351aadfd9baa8cbdd3a76d429a695160d12c923ac9cc3baca289e193548608b82801"),
            &hex("0606c4a02ea734cc32acd2b02bc28b99cb3e287e85a763af267492ab572e99ab3f370d275cec1da1aaa9075ff05f79be"),
        ],
        loop_parameter: 0xd201000000010000,
        loop_parameter_is_negative: true,
    })
}

pub(crate) fn bls12_381() -> SexticFixture<6> {
    bls12_381_with_twist(TwistType::M)
}

pub(crate) struct Mnt4Fixture {
    pub field: &'static PrimeField<5>,
    pub fp4_params: &'static Fp4Parameters<'static, 5>,
    pub g1_curve: &'static WeierstrassCurve<Fp<'static, 5>>,
    pub g2_curve: &'static WeierstrassCurve<Fp2<'static, 5>>,
    pub g1: CurvePoint<'static, Fp<'static, 5>>,
    pub g2: CurvePoint<'static, Fp2<'static, 5>>,
    pub loop_parameters: MntLoopParameters,
}

pub(crate) fn mnt4_298() -> Mnt4Fixture {
    let q = dec(MNT_B);
    let r = dec(MNT_A);
    let field = prime_field::<5>(&q);

    let mut fp2_params = Fp2Parameters::new(Fp::from_u64(field, 17));
    fp2_params.calculate_frobenius_coeffs().unwrap();
    let fp2_params = leak(fp2_params);
    let mut fp4_params = Fp4Parameters::new(fp2_params);
    fp4_params.calculate_frobenius_coeffs().unwrap();
    let fp4_params = leak(fp4_params);

    let a = Fp::from_u64(field, 2);
    let b = fp(field, &dec("423894536526684178289416011533888240029318103673896002803341544124054745019340795360841685"));
    let g1_curve = leak(WeierstrassCurve::new(a, b, biguint_to_limbs(&r)));
    let (twist_a, twist_b) = mnt4_twist_coefficients(&a, &b, fp2_params);
    let g2_curve = leak(WeierstrassCurve::new(twist_a, twist_b, biguint_to_limbs(&r)));

    let g1 = CurvePoint::from_xy(
        g1_curve,
        fp(field, &dec("60760244141852568949126569781626075788424196370144486719385562369396875346601926534016838")),
        fp(field, &dec("363732850702582978263902770815145784459747722357071843971107674179038674942891694705904306")),
    );
    let g2 = CurvePoint::from_xy(
        g2_curve,
        Fp2::new(
            fp(field, &dec("438374926219350099854919100077809681842783509163790991847867546339851681564223481322252708")),
            fp(field, &dec("37620953615500480110935514360923278605464476459712393277679280819942849043649216370485641")),
            fp2_params,
        ),
        Fp2::new(
            fp(field, &dec("37437409008528968268352521034936931842973546441370663118543015118291998305624025037512482")),
            fp(field, &dec("424621479598893882672393190337420680597584695892317197646113820787463109735345923009077489")),
            fp2_params,
        ),
    );

    Mnt4Fixture {
        field,
        fp4_params,
        g1_curve,
        g2_curve,
        g1,
        g2,
        loop_parameters: mnt_loop_parameters(&q, &r, 4),
    }
}

pub(crate) struct Mnt6Fixture {
    pub field: &'static PrimeField<5>,
    pub fp6_params: &'static fp6_2over3::Fp6Parameters<'static, 5>,
    pub g1_curve: &'static WeierstrassCurve<Fp<'static, 5>>,
    pub g2_curve: &'static WeierstrassCurve<Fp3<'static, 5>>,
    pub g1: CurvePoint<'static, Fp<'static, 5>>,
    pub g2: CurvePoint<'static, Fp3<'static, 5>>,
    pub loop_parameters: MntLoopParameters,
}

pub(crate) fn mnt6_298() -> Mnt6Fixture {
    let q = dec(MNT_A);
    let r = dec(MNT_B);
    let field = prime_field::<5>(&q);

    let mut fp3_params = Fp3Parameters::new(Fp::from_u64(field, 5));
    fp3_params.calculate_frobenius_coeffs().unwrap();
    let fp3_params = leak(fp3_params);
    let mut fp6_params = fp6_2over3::Fp6Parameters::new(fp3_params);
    fp6_params.calculate_frobenius_coeffs().unwrap();
    let fp6_params = leak(fp6_params);

    let a = Fp::from_u64(field, 11);
    let b = fp(field, &dec("106700080510851735677967319632585352256454251201367587890185989362936000262606668469523074"));
    let g1_curve = leak(WeierstrassCurve::new(a, b, biguint_to_limbs(&r)));
    let (twist_a, twist_b) = mnt6_twist_coefficients(&a, &b, fp3_params);
    let g2_curve = leak(WeierstrassCurve::new(twist_a, twist_b, biguint_to_limbs(&r)));

    let g1 = CurvePoint::from_xy(
        g1_curve,
        fp(field, &dec("336685752883082228109289846353937104185698209371404178342968838739115829740084426881123453")),
        fp(field, &dec("402596290139780989709332707716568920777622032073762749862342374583908837063963736098549800")),
    );
    let g2 = CurvePoint::from_xy(
        g2_curve,
        Fp3::new(
            fp(field, &dec("421456435772811846256826561593908322288509115489119907560382401870203318738334702321297427")),
            fp(field, &dec("103072927438548502463527009961344915021167584706439945404959058962657261178393635706405114")),
            fp(field, &dec("143029172143731852627002926324735183809768363301149009204849580478324784395590388826052558")),
            fp3_params,
        ),
        Fp3::new(
            fp(field, &dec("464673596668689463130099227575639512541218133445388869383893594087634649237515554342751377")),
            fp(field, &dec("100642907501977375184575075967118071807821117960152743335603284583254620685343989304941678")),
            fp(field, &dec("123019855502969896026940545715841181300275180157288044663051565390506010149881373807142903")),
            fp3_params,
        ),
    );

    Mnt6Fixture {
        field,
        fp6_params,
        g1_curve,
        g2_curve,
        g1,
        g2,
        loop_parameters: mnt_loop_parameters(&q, &r, 6),
    }
}
