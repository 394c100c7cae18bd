use ethrpc_eth::Equivalent;
use ethrpc_primitives::quantity::quantity_eq;

use crate::{
    block::BlockResult,
    transaction::{ConditionResult, TransactionResult},
};

fn optional_quantity_eq(lhs: Option<&String>, rhs: Option<&String>) -> bool {
    match (lhs, rhs) {
        (Some(lhs), Some(rhs)) => quantity_eq(lhs, rhs),
        (None, None) => true,
        _ => false,
    }
}

impl Equivalent for ConditionResult {
    fn equivalent(&self, other: &Self) -> bool {
        match (self, other) {
            (ConditionResult::Block(lhs), ConditionResult::Block(rhs))
            | (ConditionResult::Time(lhs), ConditionResult::Time(rhs)) => lhs.equivalent(rhs),
            _ => false,
        }
    }
}

impl Equivalent for TransactionResult {
    fn equivalent(&self, other: &Self) -> bool {
        self.block_hash == other.block_hash
            && optional_quantity_eq(self.block_number.as_ref(), other.block_number.as_ref())
            && self.from == other.from
            && quantity_eq(&self.gas, &other.gas)
            && quantity_eq(&self.gas_price, &other.gas_price)
            && self.hash == other.hash
            && self.input == other.input
            && quantity_eq(&self.nonce, &other.nonce)
            && self.r == other.r
            && self.s == other.s
            && self.to == other.to
            && optional_quantity_eq(
                self.transaction_index.as_ref(),
                other.transaction_index.as_ref(),
            )
            && self.v.equivalent(&other.v)
            && quantity_eq(&self.value, &other.value)
            && self.creates == other.creates
            && self.network_id.equivalent(&other.network_id)
            && optional_quantity_eq(self.chain_id.as_ref(), other.chain_id.as_ref())
            && self.public_key == other.public_key
            && self.raw == other.raw
            && optional_quantity_eq(self.standard_v.as_ref(), other.standard_v.as_ref())
            && self.condition.equivalent(&other.condition)
    }
}

impl Equivalent for BlockResult {
    fn equivalent(&self, other: &Self) -> bool {
        self.author == other.author
            && quantity_eq(&self.difficulty, &other.difficulty)
            && self.extra_data == other.extra_data
            && quantity_eq(&self.gas_limit, &other.gas_limit)
            && quantity_eq(&self.gas_used, &other.gas_used)
            && self.hash == other.hash
            && self.logs_bloom == other.logs_bloom
            && self.miner == other.miner
            && self.mix_hash == other.mix_hash
            && optional_quantity_eq(self.nonce.as_ref(), other.nonce.as_ref())
            && quantity_eq(&self.number, &other.number)
            && self.parent_hash == other.parent_hash
            && self.receipts_root == other.receipts_root
            && self.sha3_uncles == other.sha3_uncles
            && quantity_eq(&self.size, &other.size)
            && self.state_root == other.state_root
            && quantity_eq(&self.timestamp, &other.timestamp)
            && optional_quantity_eq(
                self.total_difficulty.as_ref(),
                other.total_difficulty.as_ref(),
            )
            && self.transactions_root == other.transactions_root
    }
}
