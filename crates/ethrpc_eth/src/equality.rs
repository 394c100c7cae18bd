use ethrpc_primitives::{decode_ambiguous_scalar, AmbiguousScalar};

use crate::{block::Block, transaction::Transaction};

/// Semantic equivalence between two values of the same representation.
///
/// Unlike [`PartialEq`], equivalence of a block is limited to its own scalar
/// fields. Sequences such as transactions and uncles are left to the caller
/// to compare element-wise.
pub trait Equivalent {
    /// Whether `self` and `other` represent the same entity.
    fn equivalent(&self, other: &Self) -> bool;
}

impl<T: Equivalent> Equivalent for Option<T> {
    fn equivalent(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(lhs), Some(rhs)) => lhs.equivalent(rhs),
            (None, None) => true,
            _ => false,
        }
    }
}

impl Equivalent for AmbiguousScalar {
    fn equivalent(&self, other: &Self) -> bool {
        match (
            decode_ambiguous_scalar(self, 256),
            decode_ambiguous_scalar(other, 256),
        ) {
            (Ok(lhs), Ok(rhs)) => lhs == rhs,
            _ => self == other,
        }
    }
}

impl Equivalent for Transaction {
    fn equivalent(&self, other: &Self) -> bool {
        // All fields are leaves, and big integers compare by value.
        self == other
    }
}

impl Equivalent for Block {
    fn equivalent(&self, other: &Self) -> bool {
        self.author == other.author
            && self.difficulty == other.difficulty
            && self.extra_data == other.extra_data
            && self.gas_limit == other.gas_limit
            && self.gas_used == other.gas_used
            && self.hash == other.hash
            && self.logs_bloom == other.logs_bloom
            && self.miner == other.miner
            && self.mix_hash == other.mix_hash
            && self.nonce == other.nonce
            && self.number == other.number
            && self.parent_hash == other.parent_hash
            && self.receipts_root == other.receipts_root
            && self.sha3_uncles == other.sha3_uncles
            && self.size == other.size
            && self.state_root == other.state_root
            && self.timestamp == other.timestamp
            && self.total_difficulty == other.total_difficulty
            && self.transactions_root == other.transactions_root
    }
}
