#![warn(missing_docs)]

//! Ethereum types
//!
//! The canonical, strongly-typed representation of blocks and transactions
//! as consumed by application logic, independent of how any particular node
//! encodes them on the wire.

/// Ethereum block types
pub mod block;
/// Semantic equivalence of entities
pub mod equality;
/// Persistence of entities as JSON
pub mod persistence;
/// Ethereum transaction types
pub mod transaction;

pub use ethrpc_primitives::{U256, U64};

pub use self::{
    block::Block,
    equality::Equivalent,
    persistence::{JsonPersist, PersistenceError},
    transaction::{Condition, Transaction},
};
