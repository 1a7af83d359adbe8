//! Curve arithmetic and pairing checks over parameters that arrive as
//! untrusted bytes.
//!
//! A call carries everything it needs: the modulus, curve coefficients,
//! group order, extension non-residues, loop parameters and points. All of
//! it is validated while decoding, before any expensive arithmetic runs, and
//! every object built for a call is dropped when the call returns.
#![deny(unused_import_braces, unused_extern_crates, renamed_and_removed_lints)]
#![deny(unused_must_use)]
#![forbid(unsafe_code)]

pub mod api;
pub use self::api::{run, run_with_config, OperationType};

pub mod config;
pub use self::config::ApiConfig;

pub mod constants;

pub mod decoder;

pub mod errors;
pub use self::errors::ApiError;

#[cfg(test)]
pub(crate) mod test_vectors;
