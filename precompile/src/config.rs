use crate::constants::MAX_PAIRS;
use serde::{Deserialize, Serialize};

/// Options of a single call, passed to `run_with_config`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Traverse the BN and BLS12 loop scalars bit by bit even when their
    /// non-adjacent form is cheaper.
    pub force_binary_miller_loop: bool,
    /// Upper bound on the number of pairs of a pairing check and on the
    /// number of terms of a multi-exponentiation.
    pub max_pairs: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            force_binary_miller_loop: false,
            max_pairs: MAX_PAIRS,
        }
    }
}
