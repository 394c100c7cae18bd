use serde::{Deserialize, Serialize};

use crate::{transaction::Transaction, U256, U64};

/// Ethereum block with full transaction data
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Block {
    /// Address of the block author (Parity)
    pub author: Option<String>,
    /// Difficulty of the block
    pub difficulty: U256,
    /// The "extra data" field of the block
    pub extra_data: String,
    /// Maximum gas allowed in the block
    pub gas_limit: u64,
    /// Total gas used by all transactions in the block
    pub gas_used: u64,
    /// Block hash
    pub hash: String,
    /// Bloom filter for the logs of the block
    pub logs_bloom: String,
    /// Address of the beneficiary of the mining reward
    pub miner: String,
    /// Mix hash of the proof-of-work
    pub mix_hash: String,
    /// Proof-of-work nonce. Required on the wire.
    pub nonce: Option<U64>,
    /// Block number
    pub number: u64,
    /// Hash of the parent block
    pub parent_hash: String,
    /// Root of the receipts trie
    pub receipts_root: String,
    /// Consensus engine seal (Parity)
    pub seal_fields: Option<Vec<String>>,
    /// SHA3 of the uncles data in the block
    pub sha3_uncles: String,
    /// Length of the RLP encoding of the block in bytes
    pub size: u64,
    /// Root of the final state trie
    pub state_root: String,
    /// Unix timestamp at which the block was collated
    pub timestamp: u64,
    /// Total difficulty of the chain up to and including this block. Required
    /// on the wire.
    pub total_difficulty: Option<U256>,
    /// Transactions in chain order
    pub transactions: Vec<Transaction>,
    /// Root of the transactions trie
    pub transactions_root: String,
    /// Uncle hashes in chain order
    pub uncles: Vec<String>,
}

impl Block {
    /// Returns the transaction with the provided hash, if the block contains
    /// it.
    pub fn transaction_by_hash(&self, hash: &str) -> Option<&Transaction> {
        self.transactions
            .iter()
            .find(|transaction| transaction.hash.eq_ignore_ascii_case(hash))
    }

    /// Whether the block carries the fields of a sealed block.
    pub fn is_sealed(&self) -> bool {
        self.nonce.is_some() && self.total_difficulty.is_some()
    }
}
