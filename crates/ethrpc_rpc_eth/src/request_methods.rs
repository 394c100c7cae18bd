use serde::{Deserialize, Serialize};

/// A named block
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockTag {
    /// The genesis block
    Earliest,
    /// The most recent block
    Latest,
    /// The block being mined
    Pending,
}

/// Identifies a block either by number or by tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum BlockSpec {
    /// A block number
    Number(#[serde(with = "ethrpc_primitives::serde::u64")] u64),
    /// A block tag
    Tag(BlockTag),
}

impl BlockSpec {
    /// Constructs an instance for the latest block.
    pub fn latest() -> Self {
        Self::Tag(BlockTag::Latest)
    }

    /// Constructs an instance for the pending block.
    pub fn pending() -> Self {
        Self::Tag(BlockTag::Pending)
    }
}

impl From<u64> for BlockSpec {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

/// Methods for requests to a remote Ethereum node.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "method", content = "params")]
pub enum RequestMethod {
    /// `eth_blockNumber`
    #[serde(rename = "eth_blockNumber", with = "ethrpc_primitives::serde::empty_params")]
    BlockNumber(()),
    /// `eth_getBlockByHash`, always requesting full transaction objects
    #[serde(rename = "eth_getBlockByHash")]
    GetBlockByHash(String, bool),
    /// `eth_getBlockByNumber`, always requesting full transaction objects
    #[serde(rename = "eth_getBlockByNumber")]
    GetBlockByNumber(BlockSpec, bool),
    /// `eth_getTransactionByHash`
    #[serde(
        rename = "eth_getTransactionByHash",
        with = "ethrpc_primitives::serde::sequence"
    )]
    GetTransactionByHash(String),
    /// `eth_getFilterChanges`
    #[serde(
        rename = "eth_getFilterChanges",
        with = "ethrpc_primitives::serde::sequence"
    )]
    GetFilterChanges(String),
    /// `eth_newBlockFilter`
    #[serde(rename = "eth_newBlockFilter", with = "ethrpc_primitives::serde::empty_params")]
    NewBlockFilter(()),
    /// `eth_newPendingTransactionFilter`
    #[serde(
        rename = "eth_newPendingTransactionFilter",
        with = "ethrpc_primitives::serde::empty_params"
    )]
    NewPendingTransactionFilter(()),
    /// `eth_uninstallFilter`
    #[serde(
        rename = "eth_uninstallFilter",
        with = "ethrpc_primitives::serde::sequence"
    )]
    UninstallFilter(String),
}

impl RequestMethod {
    /// The name of the JSON-RPC method.
    pub fn name(&self) -> &'static str {
        match self {
            RequestMethod::BlockNumber(()) => "eth_blockNumber",
            RequestMethod::GetBlockByHash(..) => "eth_getBlockByHash",
            RequestMethod::GetBlockByNumber(..) => "eth_getBlockByNumber",
            RequestMethod::GetTransactionByHash(_) => "eth_getTransactionByHash",
            RequestMethod::GetFilterChanges(_) => "eth_getFilterChanges",
            RequestMethod::NewBlockFilter(()) => "eth_newBlockFilter",
            RequestMethod::NewPendingTransactionFilter(()) => "eth_newPendingTransactionFilter",
            RequestMethod::UninstallFilter(_) => "eth_uninstallFilter",
        }
    }
}
