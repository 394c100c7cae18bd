#![warn(missing_docs)]

//! Primitive types and codecs
//!
//! Big-integer types and the low-level quantity codec shared by the canonical
//! and wire representations of blocks and transactions.

/// Codec for hex-encoded JSON-RPC quantities
pub mod quantity;
mod scalar;
/// Helper utilities for serde
pub mod serde;

pub use alloy_primitives::{U256, U64};

pub use self::scalar::{decode_ambiguous_scalar, AmbiguousScalar, ScalarError};
