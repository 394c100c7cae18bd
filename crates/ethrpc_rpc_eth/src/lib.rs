#![warn(missing_docs)]

//! Ethereum JSON-RPC types
//!
//! The wire representation of blocks and transactions as emitted by node
//! implementations, its conversion to and from the canonical types of
//! [`ethrpc_eth`], and a client that performs the conversion on the fly.

/// Types for Ethereum JSON-RPC blocks
pub mod block;
/// Types related to the Ethereum JSON-RPC API
pub mod client;
mod conversion;
mod equality;
mod request_methods;
/// Types for Ethereum JSON-RPC transactions
pub mod transaction;

pub use self::{
    block::BlockResult,
    client::{EthRpcClient, EthRpcClientError},
    conversion::{ConversionError, EntityKind, ErrorKind},
    request_methods::{BlockSpec, BlockTag, RequestMethod},
    transaction::{ConditionResult, TransactionResult},
};
