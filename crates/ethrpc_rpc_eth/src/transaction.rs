use ethrpc_eth::{Condition, JsonPersist, Transaction};
use ethrpc_primitives::{
    quantity::{encode_hex_int, encode_u64},
    AmbiguousScalar,
};
use serde::{Deserialize, Serialize};

use crate::conversion::{
    ConversionError, EntityKind, FieldDecoder, BIG_QUANTITY_BITS, STANDARD_V_BITS,
};

/// Condition of a queued transaction, as emitted by Parity.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ConditionResult {
    /// Propagate once the chain reaches the block number
    Block(AmbiguousScalar),
    /// Propagate once the chain reaches the UNIX timestamp
    Time(AmbiguousScalar),
}

/// Transaction object returned by `eth_getTransactionByHash` and embedded in
/// the result of `eth_getBlockBy*`.
///
/// Numeric fields are kept in their wire encoding. Vendor-specific fields
/// default to `None` when a node does not emit them.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResult {
    /// hash of the block where this transaction was in. null when pending
    pub block_hash: Option<String>,
    /// block number where this transaction was in. null when pending
    pub block_number: Option<String>,
    /// address of the sender
    pub from: String,
    /// gas provided by the sender
    pub gas: String,
    /// gas price provided by the sender in Wei
    pub gas_price: String,
    /// hash of the transaction
    pub hash: String,
    /// the data sent along with the transaction
    pub input: String,
    /// the number of transactions made by the sender prior to this one
    pub nonce: String,
    /// ECDSA signature r
    pub r: String,
    /// ECDSA signature s
    pub s: String,
    /// address of the receiver. null when it's a contract creation
    /// transaction
    pub to: Option<String>,
    /// index of the transaction in the block. null when pending
    pub transaction_index: Option<String>,
    /// ECDSA recovery id; a quantity string for Geth, a number for Parity
    pub v: AmbiguousScalar,
    /// value transferred in Wei
    pub value: String,
    /// address of the created contract
    #[serde(default)]
    pub creates: Option<String>,
    /// network ID
    #[serde(default)]
    pub network_id: Option<AmbiguousScalar>,
    /// chain ID
    #[serde(default)]
    pub chain_id: Option<String>,
    /// public key of the signer
    #[serde(default)]
    pub public_key: Option<String>,
    /// RLP-encoded transaction
    #[serde(default)]
    pub raw: Option<String>,
    /// normalized recovery id
    #[serde(default)]
    pub standard_v: Option<String>,
    /// condition for propagation of a queued transaction
    #[serde(default)]
    pub condition: Option<ConditionResult>,
}

impl TransactionResult {
    pub(crate) fn to_canonical(&self, entity: EntityKind) -> Result<Transaction, ConversionError> {
        let decoder = FieldDecoder::new(entity);

        let condition = self
            .condition
            .as_ref()
            .map(|condition| match condition {
                ConditionResult::Block(number) => decoder
                    .scalar_u64("condition", number)
                    .map(Condition::Block),
                ConditionResult::Time(timestamp) => decoder
                    .scalar_u64("condition", timestamp)
                    .map(Condition::Time),
            })
            .transpose()?;

        let standard_v = self
            .standard_v
            .as_ref()
            .map(|standard_v| {
                decoder
                    .big("standardV", standard_v, STANDARD_V_BITS)
                    .map(|standard_v| standard_v.to::<u8>())
            })
            .transpose()?;

        Ok(Transaction {
            block_hash: self.block_hash.clone(),
            block_number: decoder.optional_u64("blockNumber", self.block_number.as_ref())?,
            from: self.from.clone(),
            gas: decoder.u64("gas", &self.gas)?,
            gas_price: decoder.big("gasPrice", &self.gas_price, BIG_QUANTITY_BITS)?,
            hash: self.hash.clone(),
            input: self.input.clone(),
            nonce: decoder.u64("nonce", &self.nonce)?,
            to: self.to.clone(),
            transaction_index: decoder
                .optional_u64("transactionIndex", self.transaction_index.as_ref())?,
            r: self.r.clone(),
            s: self.s.clone(),
            v: decoder.scalar_u64("v", &self.v)?,
            value: decoder.big("value", &self.value, BIG_QUANTITY_BITS)?,
            creates: self.creates.clone(),
            network_id: self
                .network_id
                .as_ref()
                .map(|network_id| decoder.scalar_u64("networkId", network_id))
                .transpose()?,
            chain_id: decoder.optional_u64("chainId", self.chain_id.as_ref())?,
            public_key: self.public_key.clone(),
            raw: self.raw.clone(),
            standard_v,
            condition,
        })
    }
}

impl TryFrom<&TransactionResult> for Transaction {
    type Error = ConversionError;

    fn try_from(value: &TransactionResult) -> Result<Self, Self::Error> {
        value.to_canonical(EntityKind::Transaction)
    }
}

impl TryFrom<TransactionResult> for Transaction {
    type Error = ConversionError;

    fn try_from(value: TransactionResult) -> Result<Self, Self::Error> {
        Transaction::try_from(&value)
    }
}

impl From<&Transaction> for TransactionResult {
    fn from(value: &Transaction) -> Self {
        Self {
            block_hash: value.block_hash.clone(),
            block_number: value.block_number.map(encode_u64),
            from: value.from.clone(),
            gas: encode_u64(value.gas),
            gas_price: encode_hex_int(&value.gas_price, 0),
            hash: value.hash.clone(),
            input: value.input.clone(),
            nonce: encode_u64(value.nonce),
            r: value.r.clone(),
            s: value.s.clone(),
            to: value.to.clone(),
            transaction_index: value.transaction_index.map(encode_u64),
            v: AmbiguousScalar::quantity(value.v),
            value: encode_hex_int(&value.value, 0),
            creates: value.creates.clone(),
            network_id: value.network_id.map(AmbiguousScalar::number),
            chain_id: value.chain_id.map(encode_u64),
            public_key: value.public_key.clone(),
            raw: value.raw.clone(),
            standard_v: value
                .standard_v
                .map(|standard_v| encode_u64(standard_v.into())),
            condition: value.condition.map(|condition| match condition {
                Condition::Block(number) => ConditionResult::Block(AmbiguousScalar::number(number)),
                Condition::Time(timestamp) => {
                    ConditionResult::Time(AmbiguousScalar::number(timestamp))
                }
            }),
        }
    }
}

impl From<Transaction> for TransactionResult {
    fn from(value: Transaction) -> Self {
        Self::from(&value)
    }
}

impl JsonPersist for TransactionResult {
    const ENTITY: &'static str = "transaction result";
}
