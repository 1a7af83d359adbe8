/// Longest accepted encoding of the modulus, in bytes.
pub const MAX_MODULUS_BYTE_LEN: usize = 128;

/// Longest accepted encoding of a group order, in bytes.
pub const MAX_GROUP_ORDER_BYTE_LEN: usize = 128;

/// Bound on the bit length of Miller loop parameters.
pub const MAX_LOOP_PARAMETER_BITS: usize = 2032;

/// Bound on the Hamming weight of the BN and BLS12 loop scalars.
pub const MAX_LOOP_HAMMING_WEIGHT: u32 = 128;

/// Bound on the Hamming weight of the MNT loop count `|q - r|`, which is
/// dense and at most half the width of the modulus.
pub const MAX_MNT_LOOP_HAMMING_WEIGHT: u32 = 512;

/// Default bound on the number of pairs or multi-exponentiation terms.
pub const MAX_PAIRS: usize = 255;

/// Narrowest arithmetic instantiated by the dispatcher.
pub const MIN_LIMBS: usize = 4;

pub const TWIST_TYPE_M: u8 = 1;
pub const TWIST_TYPE_D: u8 = 2;

pub const EXTENSION_DEGREE_2: u8 = 2;
pub const EXTENSION_DEGREE_3: u8 = 3;

pub const PAIRING_SUCCESS: u8 = 0x01;
pub const PAIRING_FAILURE: u8 = 0x00;
