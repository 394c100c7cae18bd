use ethrpc_eth::{Block, JsonPersist, Transaction, U256, U64};
use ethrpc_primitives::quantity::{encode_hex_int, encode_u64, NONCE_HEX_DIGITS};
use serde::{Deserialize, Serialize};

use crate::{
    conversion::{ConversionError, EntityKind, FieldDecoder, BIG_QUANTITY_BITS, QUANTITY_BITS},
    transaction::TransactionResult,
};

/// Block object returned by `eth_getBlockBy*` with full transaction objects.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockResult {
    /// the address of the author of the block, as emitted by Parity
    #[serde(default)]
    pub author: Option<String>,
    /// integer of the difficulty for this block
    pub difficulty: String,
    /// the "extra data" field of this block
    pub extra_data: String,
    /// the maximum gas allowed in this block
    pub gas_limit: String,
    /// the total used gas by all transactions in this block
    pub gas_used: String,
    /// hash of the block
    pub hash: String,
    /// the bloom filter for the logs of the block
    pub logs_bloom: String,
    /// the address of the beneficiary to whom the mining rewards were given
    pub miner: String,
    /// mix hash
    pub mix_hash: String,
    /// hash of the generated proof-of-work, always 8 bytes. null when pending
    #[serde(default)]
    pub nonce: Option<String>,
    /// the block number
    pub number: String,
    /// hash of the parent block
    pub parent_hash: String,
    /// the root of the receipts trie of the block
    pub receipts_root: String,
    /// the seal of the block, as emitted by Parity
    #[serde(default)]
    pub seal_fields: Option<Vec<String>>,
    /// SHA3 of the uncles data in the block
    pub sha3_uncles: String,
    /// the length of the RLP encoding of this block in bytes
    pub size: String,
    /// the root of the final state trie of the block
    pub state_root: String,
    /// the unix timestamp for when the block was collated
    pub timestamp: String,
    /// integer of the total difficulty of the chain until this block. Absent
    /// on nodes that dropped it
    #[serde(default)]
    pub total_difficulty: Option<String>,
    /// Array of transaction objects
    #[serde(default)]
    pub transactions: Vec<TransactionResult>,
    /// the root of the transaction trie of the block
    pub transactions_root: String,
    /// Array of uncle hashes
    #[serde(default)]
    pub uncles: Vec<String>,
}

impl TryFrom<&BlockResult> for Block {
    type Error = ConversionError;

    fn try_from(value: &BlockResult) -> Result<Self, Self::Error> {
        let decoder = FieldDecoder::new(EntityKind::Block);

        let transactions = value
            .transactions
            .iter()
            .enumerate()
            .map(|(index, transaction)| {
                transaction
                    .to_canonical(EntityKind::BlockTransaction { index })
                    .map_err(|error| {
                        log::debug!("Discarding block {}: {error}", value.hash);
                        error
                    })
            })
            .collect::<Result<Vec<Transaction>, _>>()?;

        let nonce = decoder.optional_big("nonce", value.nonce.as_ref(), QUANTITY_BITS)?;

        Ok(Block {
            author: value.author.clone(),
            difficulty: decoder.big("difficulty", &value.difficulty, BIG_QUANTITY_BITS)?,
            extra_data: value.extra_data.clone(),
            gas_limit: decoder.u64("gasLimit", &value.gas_limit)?,
            gas_used: decoder.u64("gasUsed", &value.gas_used)?,
            hash: value.hash.clone(),
            logs_bloom: value.logs_bloom.clone(),
            miner: value.miner.clone(),
            mix_hash: value.mix_hash.clone(),
            nonce: nonce.map(|nonce| U64::from(nonce.to::<u64>())),
            number: decoder.u64("number", &value.number)?,
            parent_hash: value.parent_hash.clone(),
            receipts_root: value.receipts_root.clone(),
            seal_fields: value.seal_fields.clone(),
            sha3_uncles: value.sha3_uncles.clone(),
            size: decoder.u64("size", &value.size)?,
            state_root: value.state_root.clone(),
            timestamp: decoder.u64("timestamp", &value.timestamp)?,
            total_difficulty: decoder.optional_big(
                "totalDifficulty",
                value.total_difficulty.as_ref(),
                BIG_QUANTITY_BITS,
            )?,
            transactions,
            transactions_root: value.transactions_root.clone(),
            uncles: value.uncles.clone(),
        })
    }
}

impl TryFrom<BlockResult> for Block {
    type Error = ConversionError;

    fn try_from(value: BlockResult) -> Result<Self, Self::Error> {
        Block::try_from(&value)
    }
}

impl TryFrom<&Block> for BlockResult {
    type Error = ConversionError;

    fn try_from(value: &Block) -> Result<Self, Self::Error> {
        let decoder = FieldDecoder::new(EntityKind::Block);

        let nonce = decoder.require("nonce", value.nonce.as_ref())?;
        let total_difficulty =
            decoder.require("totalDifficulty", value.total_difficulty.as_ref())?;

        Ok(BlockResult {
            author: value.author.clone(),
            difficulty: encode_hex_int(&value.difficulty, 0),
            extra_data: value.extra_data.clone(),
            gas_limit: encode_u64(value.gas_limit),
            gas_used: encode_u64(value.gas_used),
            hash: value.hash.clone(),
            logs_bloom: value.logs_bloom.clone(),
            miner: value.miner.clone(),
            mix_hash: value.mix_hash.clone(),
            nonce: Some(encode_hex_int(
                &U256::from(nonce.to::<u64>()),
                NONCE_HEX_DIGITS,
            )),
            number: encode_u64(value.number),
            parent_hash: value.parent_hash.clone(),
            receipts_root: value.receipts_root.clone(),
            seal_fields: value.seal_fields.clone(),
            sha3_uncles: value.sha3_uncles.clone(),
            size: encode_u64(value.size),
            state_root: value.state_root.clone(),
            timestamp: encode_u64(value.timestamp),
            total_difficulty: Some(encode_hex_int(total_difficulty, 0)),
            transactions: value
                .transactions
                .iter()
                .map(TransactionResult::from)
                .collect(),
            transactions_root: value.transactions_root.clone(),
            uncles: value.uncles.clone(),
        })
    }
}

impl TryFrom<Block> for BlockResult {
    type Error = ConversionError;

    fn try_from(value: Block) -> Result<Self, Self::Error> {
        BlockResult::try_from(&value)
    }
}

impl JsonPersist for BlockResult {
    const ENTITY: &'static str = "block result";
}
