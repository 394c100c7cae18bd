use serde::{Deserialize, Serialize};

use crate::U256;

/// Condition that must be met before a queued transaction is propagated.
///
/// Only emitted by Parity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// Propagate once the chain reaches the block number
    Block(u64),
    /// Propagate once the chain reaches the unix timestamp
    Time(u64),
}

/// Ethereum transaction
///
/// The union of the fields emitted by every supported node dialect. Fields
/// that only some dialects emit are optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Transaction {
    /// Hash of the block containing the transaction. `None` when pending.
    pub block_hash: Option<String>,
    /// Number of the block containing the transaction. `None` when pending.
    pub block_number: Option<u64>,
    /// Address of the sender
    pub from: String,
    /// Gas limit provided by the sender
    pub gas: u64,
    /// Gas price provided by the sender in wei
    pub gas_price: U256,
    /// Transaction hash
    pub hash: String,
    /// Data sent along with the transaction
    pub input: String,
    /// Number of transactions made by the sender prior to this one
    pub nonce: u64,
    /// Address of the receiver. `None` for contract creations.
    pub to: Option<String>,
    /// Index of the transaction within its block. `None` when pending.
    pub transaction_index: Option<u64>,
    /// ECDSA signature r
    pub r: String,
    /// ECDSA signature s
    pub s: String,
    /// ECDSA recovery id, possibly chain-id encoded
    pub v: u64,
    /// Value transferred in wei
    pub value: U256,
    /// Address of the created contract (Parity)
    pub creates: Option<String>,
    /// Network id (Parity)
    pub network_id: Option<u64>,
    /// Chain id
    pub chain_id: Option<u64>,
    /// Public key of the signer (Parity)
    pub public_key: Option<String>,
    /// Raw RLP-encoded transaction (Parity)
    pub raw: Option<String>,
    /// Normalized recovery id, 0 or 1 (Parity)
    pub standard_v: Option<u8>,
    /// Propagation condition (Parity)
    pub condition: Option<Condition>,
}

impl Transaction {
    /// Whether the transaction creates a contract.
    pub fn is_contract_creation(&self) -> bool {
        self.to.is_none()
    }

    /// Whether the transaction has not been included in a block yet.
    pub fn is_pending(&self) -> bool {
        self.block_hash.is_none()
    }

    /// Returns whether the transaction has odd Y parity.
    pub fn odd_y_parity(&self) -> bool {
        match self.standard_v {
            Some(standard_v) => standard_v == 1,
            None => self.v == 1 || self.v == 28 || (self.v >= 35 && (self.v - 35) % 2 == 1),
        }
    }
}
