//! Encoders for well known curves, producing call payloads the same way an
//! external caller would.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

pub(crate) fn hex(s: &str) -> BigUint {
    let padded = if s.len() % 2 == 1 {
        format!("0{}", s)
    } else {
        s.to_owned()
    };
    BigUint::from_bytes_be(&hex::decode(padded).expect("invalid hex fixture"))
}

pub(crate) fn dec(s: &str) -> BigUint {
    BigUint::parse_bytes(s.as_bytes(), 10).expect("invalid decimal fixture")
}

/// `value` as exactly `len` big-endian bytes.
pub(crate) fn be(value: &BigUint, len: usize) -> Vec<u8> {
    let bytes = value.to_bytes_be();
    assert!(bytes.len() <= len);
    let mut out = vec![0u8; len - bytes.len()];
    out.extend_from_slice(&bytes);
    out
}

/// One length byte followed by the minimal big-endian encoding.
pub(crate) fn prefixed(value: &BigUint) -> Vec<u8> {
    let bytes = value.to_bytes_be();
    let mut out = vec![bytes.len() as u8];
    out.extend_from_slice(&bytes);
    out
}

/// A curve over the base field, described by plain integers.
pub(crate) struct CurveVector {
    pub modulus: BigUint,
    pub a: BigUint,
    pub b: BigUint,
    pub order: BigUint,
    pub g1: (BigUint, BigUint),
}

impl CurveVector {
    pub fn modulus_len(&self) -> usize {
        ((self.modulus.bits() + 7) / 8) as usize
    }

    pub fn order_len(&self) -> usize {
        ((self.order.bits() + 7) / 8) as usize
    }

    pub fn element(&self, value: &BigUint) -> Vec<u8> {
        be(value, self.modulus_len())
    }

    pub fn scalar(&self, value: &BigUint) -> Vec<u8> {
        be(value, self.order_len())
    }

    pub fn neg(&self, value: &BigUint) -> BigUint {
        if value.is_zero() {
            BigUint::zero()
        } else {
            &self.modulus - value
        }
    }

    /// `modulus | a | b | order`, all length prefixes included.
    pub fn g1_prefix(&self) -> Vec<u8> {
        let mut out = prefixed(&self.modulus);
        out.extend(self.element(&self.a));
        out.extend(self.element(&self.b));
        out.extend(prefixed(&self.order));
        out
    }

    pub fn point(&self, coordinates: &[&BigUint]) -> Vec<u8> {
        coordinates.iter().flat_map(|c| self.element(c)).collect()
    }

    pub fn g1_point(&self, negate: bool) -> Vec<u8> {
        let y = if negate {
            self.neg(&self.g1.1)
        } else {
            self.g1.1.clone()
        };
        self.point(&[&self.g1.0, &y])
    }

    pub fn g1_identity(&self) -> Vec<u8> {
        vec![0u8; 2 * self.modulus_len()]
    }
}

/// A BN or BLS12 curve with the data of a pairing check.
pub(crate) struct SexticVector {
    pub curve: CurveVector,
    /// Non-square of the base field defining F2.
    pub alpha: BigUint,
    /// c0, c1 of the non-residue defining F6.
    pub xi: (u64, u64),
    pub twist: u8,
    pub loop_parameter: BigUint,
    pub loop_parameter_is_negative: bool,
    /// x.c0, x.c1, y.c0, y.c1
    pub g2: [BigUint; 4],
}

impl SexticVector {
    pub fn bls12_381() -> Self {
        let modulus = hex("1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab");
        Self {
            alpha: &modulus - 1u32,
            curve: CurveVector {
                modulus,
                a: BigUint::zero(),
                b: BigUint::from(4u32),
                order: hex("73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001"),
                g1: (
                    hex("17f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb"),
                    hex("08b3f481e3aaa0f1a09e30ed741d8ae4fcf5e095d5d00af600db18cb2c04b3edd03cc744a2888ae40caa232946c5e7e1"),
                ),
            },
            xi: (1, 1),
            twist: 1,
            loop_parameter: hex("d201000000010000"),
            loop_parameter_is_negative: true,
            g2: [
                hex("024aa2b2f08f0a91260805272dc51051c6e47ad4fa403b02b4510b647ae3d1770bac0326a805bbefd48056c8c121bdb8"),
                hex("13e02b6052719f607dacd3a088274f65596bd0d09920b61ab5da61bbdc7f5049334cf11213945d57e5ac7d055d042b7e"),
                hex("0ce5d527727d6e118cc9cdc6da2e351aadfd9baa8cbdd3a76d429a695160d12c923ac9cc3baca289e193548608b82801"),
                hex("0606c4a02ea734cc32acd2b02bc28b99cb3e287e85a763af267492ab572e99ab3f370d275cec1da1aaa9075ff05f79be"),
            ],
        }
    }

    pub fn bn254() -> Self {
        let modulus =
            dec("21888242871839275222246405745257275088696311157297823662689037894645226208583");
        Self {
            alpha: &modulus - 1u32,
            curve: CurveVector {
                modulus,
                a: BigUint::zero(),
                b: BigUint::from(3u32),
                order: dec("21888242871839275222246405745257275088548364400416034343698204186575808495617"),
                g1: (BigUint::from(1u32), BigUint::from(2u32)),
            },
            xi: (9, 1),
            twist: 2,
            loop_parameter: BigUint::from(4965661367192848881u64),
            loop_parameter_is_negative: false,
            g2: [
                dec("10857046999023057135944570762232829481370756359578518086990519993285655852781"),
                dec("11559732032986387107991004021392285783925812861821192530917403151452391805634"),
                dec("8495653923123431417604973247489272438418190587263600148770280649306958101930"),
                dec("4082367875863433681332203403145435568316851327593401208105741076214120093531"),
            ],
        }
    }

    /// `degree | alpha`, the description of F2.
    pub fn fp2_description(&self) -> Vec<u8> {
        let mut out = vec![2u8];
        out.extend(self.curve.element(&self.alpha));
        out
    }

    /// The G2 curve prefix for the point operations: y^2 = x^3 + b' over F2.
    pub fn g2_prefix(&self) -> Vec<u8> {
        let xi = (BigUint::from(self.xi.0), BigUint::from(self.xi.1));
        assert_eq!(self.twist, 1, "only the M-twist coefficient is encoded here");
        let p = &self.curve.modulus;
        let b = &self.curve.b;

        let mut out = prefixed(p);
        out.extend(self.fp2_description());
        out.extend(self.curve.element(&BigUint::zero()));
        out.extend(self.curve.element(&BigUint::zero()));
        out.extend(self.curve.element(&((b * &xi.0) % p)));
        out.extend(self.curve.element(&((b * &xi.1) % p)));
        out.extend(prefixed(&self.curve.order));
        out
    }

    /// Everything of a pairing check before the pairs.
    pub fn pairing_header(&self, operation: u8) -> Vec<u8> {
        let mut out = vec![operation];
        out.extend(self.curve.g1_prefix());
        out.extend(self.fp2_description());
        out.extend(self.curve.element(&BigUint::from(self.xi.0)));
        out.extend(self.curve.element(&BigUint::from(self.xi.1)));
        out.push(self.twist);
        out.extend(prefixed(&self.loop_parameter));
        out.push(self.loop_parameter_is_negative as u8);
        out
    }

    pub fn g2_point(&self, negate: bool) -> Vec<u8> {
        let (y0, y1) = if negate {
            (self.curve.neg(&self.g2[2]), self.curve.neg(&self.g2[3]))
        } else {
            (self.g2[2].clone(), self.g2[3].clone())
        };
        self.curve.point(&[&self.g2[0], &self.g2[1], &y0, &y1])
    }
}

const MNT_A: &str = "475922286169261325753349249653048451545124878552823515553267735739164647307408490559963137";
const MNT_B: &str = "475922286169261325753349249653048451545124879242694725395555128576210262817955800483758081";

/// An MNT4 or MNT6 curve with the data of a pairing check.
pub(crate) struct MntVector {
    pub curve: CurveVector,
    pub embedding_degree: usize,
    pub alpha: BigUint,
    /// Coordinates of x followed by those of y.
    pub g2: Vec<BigUint>,
}

impl MntVector {
    pub fn mnt4_298() -> Self {
        Self {
            curve: CurveVector {
                modulus: dec(MNT_B),
                a: BigUint::from(2u32),
                b: dec("423894536526684178289416011533888240029318103673896002803341544124054745019340795360841685"),
                order: dec(MNT_A),
                g1: (
                    dec("60760244141852568949126569781626075788424196370144486719385562369396875346601926534016838"),
                    dec("363732850702582978263902770815145784459747722357071843971107674179038674942891694705904306"),
                ),
            },
            embedding_degree: 4,
            alpha: BigUint::from(17u32),
            g2: vec![
                dec("438374926219350099854919100077809681842783509163790991847867546339851681564223481322252708"),
                dec("37620953615500480110935514360923278605464476459712393277679280819942849043649216370485641"),
                dec("37437409008528968268352521034936931842973546441370663118543015118291998305624025037512482"),
                dec("424621479598893882672393190337420680597584695892317197646113820787463109735345923009077489"),
            ],
        }
    }

    pub fn mnt6_298() -> Self {
        Self {
            curve: CurveVector {
                modulus: dec(MNT_A),
                a: BigUint::from(11u32),
                b: dec("106700080510851735677967319632585352256454251201367587890185989362936000262606668469523074"),
                order: dec(MNT_B),
                g1: (
                    dec("336685752883082228109289846353937104185698209371404178342968838739115829740084426881123453"),
                    dec("402596290139780989709332707716568920777622032073762749862342374583908837063963736098549800"),
                ),
            },
            embedding_degree: 6,
            alpha: BigUint::from(5u32),
            g2: vec![
                dec("421456435772811846256826561593908322288509115489119907560382401870203318738334702321297427"),
                dec("103072927438548502463527009961344915021167584706439945404959058962657261178393635706405114"),
                dec("143029172143731852627002926324735183809768363301149009204849580478324784395590388826052558"),
                dec("464673596668689463130099227575639512541218133445388869383893594087634649237515554342751377"),
                dec("100642907501977375184575075967118071807821117960152743335603284583254620685343989304941678"),
                dec("123019855502969896026940545715841181300275180157288044663051565390506010149881373807142903"),
            ],
        }
    }

    pub fn extension_degree(&self) -> u8 {
        (self.embedding_degree / 2) as u8
    }

    /// Coefficients a' and b' of the twist, as extension coordinates.
    pub fn twist_coefficients(&self) -> (Vec<BigUint>, Vec<BigUint>) {
        let p = &self.curve.modulus;
        let zero = BigUint::zero();
        if self.embedding_degree == 4 {
            (
                vec![(&self.curve.a * &self.alpha) % p, zero.clone()],
                vec![zero, (&self.curve.b * &self.alpha) % p],
            )
        } else {
            (
                vec![zero.clone(), zero.clone(), self.curve.a.clone()],
                vec![(&self.curve.b * &self.alpha) % p, zero.clone(), zero],
            )
        }
    }

    /// The G2 curve prefix for the point operations over the twist.
    pub fn g2_prefix(&self) -> Vec<u8> {
        let (a, b) = self.twist_coefficients();
        let mut out = prefixed(&self.curve.modulus);
        out.push(self.extension_degree());
        out.extend(self.curve.element(&self.alpha));
        for c in a.iter().chain(b.iter()) {
            out.extend(self.curve.element(c));
        }
        out.extend(prefixed(&self.curve.order));
        out
    }

    /// Loop count `|q - r|` with its sign, and the signed decomposition
    /// `w1 * q + w0` of the hard part of the final exponent.
    pub fn loop_parameters(&self) -> (BigUint, bool, BigUint, BigUint, bool) {
        let q = &self.curve.modulus;
        let r = &self.curve.order;
        let (x, x_is_negative) = if q >= r { (q - r, false) } else { (r - q, true) };
        let q_squared = q * q;
        let exponent = if self.embedding_degree == 4 {
            (q_squared + 1u32) / r
        } else {
            (q_squared - q + 1u32) / r
        };
        let (mut w1, w0) = exponent.div_rem(q);
        let (w0, w0_is_negative) = if w0 > (q >> 1usize) {
            w1 += BigUint::one();
            (q - w0, true)
        } else {
            (w0, false)
        };
        (x, x_is_negative, w1, w0, w0_is_negative)
    }

    pub fn pairing_header(&self, operation: u8) -> Vec<u8> {
        let (x, x_is_negative, w1, w0, w0_is_negative) = self.loop_parameters();
        let mut out = vec![operation];
        out.extend(self.curve.g1_prefix());
        out.push(self.extension_degree());
        out.extend(self.curve.element(&self.alpha));
        out.extend(prefixed(&x));
        out.push(x_is_negative as u8);
        out.extend(prefixed(&w1));
        out.extend(prefixed(&w0));
        out.push(w0_is_negative as u8);
        out
    }

    pub fn g2_point(&self) -> Vec<u8> {
        self.curve.point(&self.g2.iter().collect::<Vec<_>>())
    }
}

/// `count | (check | P | check | Q)*`
pub(crate) fn pairs(entries: &[(Vec<u8>, Vec<u8>)], check: bool) -> Vec<u8> {
    let mut out = vec![entries.len() as u8];
    for (p, q) in entries {
        out.push(check as u8);
        out.extend(p);
        out.push(check as u8);
        out.extend(q);
    }
    out
}
