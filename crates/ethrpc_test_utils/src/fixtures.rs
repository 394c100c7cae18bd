//! Responses of real node implementations, in their wire encoding.

/// A Geth block with full transaction objects, as returned by
/// `eth_getBlockByNumber`.
pub const GETH_BLOCK: &str = include_str!("../fixtures/geth_block.json");

/// A mined Geth transaction, as returned by `eth_getTransactionByHash`.
pub const GETH_TRANSACTION: &str = include_str!("../fixtures/geth_transaction.json");

/// A Parity block with full transaction objects, as returned by
/// `eth_getBlockByNumber`.
///
/// Includes the `author` and `sealFields` extensions, and encodes the `v`
/// value of its transactions as a JSON number.
pub const PARITY_BLOCK: &str = include_str!("../fixtures/parity_block.json");

/// A queued Parity transaction with every vendor extension present.
pub const PARITY_TRANSACTION: &str = include_str!("../fixtures/parity_transaction.json");
