use ethrpc_eth::{Block, Transaction};
use ethrpc_primitives::quantity::{decode_u64, QuantityError};
pub use ethrpc_rpc_client::{header, RpcClientConfig, RpcClientError};
use ethrpc_rpc_client::RpcClient;
use futures::{StreamExt, TryStreamExt};

use crate::{
    block::BlockResult,
    conversion::ConversionError,
    request_methods::{BlockSpec, RequestMethod},
    transaction::TransactionResult,
};

// Constrain parallel requests to avoid rate limiting on transport level.
const MAX_PARALLEL_REQUESTS: usize = 20;

/// Error that occurs when calling a typed Ethereum JSON-RPC method.
#[derive(Debug, thiserror::Error)]
pub enum EthRpcClientError {
    /// The request failed at the transport or JSON-RPC level.
    #[error(transparent)]
    Rpc(#[from] RpcClientError),
    /// The node returned an entity that cannot be converted to its canonical
    /// form.
    #[error(transparent)]
    Conversion(#[from] ConversionError),
    /// The node returned a malformed block number.
    #[error("Invalid block number: {0}")]
    InvalidBlockNumber(QuantityError),
}

/// A client for fetching canonical blocks and transactions from a remote
/// Ethereum node.
#[derive(Debug)]
pub struct EthRpcClient {
    inner: RpcClient<RequestMethod>,
}

impl EthRpcClient {
    /// Creates a new instance from the provided configuration.
    pub fn new(config: &RpcClientConfig) -> Result<Self, RpcClientError> {
        let inner = RpcClient::new(config)?;
        Ok(Self { inner })
    }

    /// The URL of the remote node.
    pub fn url(&self) -> &str {
        self.inner.url().as_str()
    }

    /// Calls `eth_blockNumber` and returns the block number.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn block_number(&self) -> Result<u64, EthRpcClientError> {
        let block_number: String = self.inner.call(RequestMethod::BlockNumber(())).await?;
        decode_u64(&block_number).map_err(EthRpcClientError::InvalidBlockNumber)
    }

    /// Calls `eth_getBlockByHash` and returns the block with its transactions,
    /// if it exists.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_block_by_hash(&self, hash: &str) -> Result<Option<Block>, EthRpcClientError> {
        let block: Option<BlockResult> = self
            .inner
            .call(RequestMethod::GetBlockByHash(hash.to_owned(), true))
            .await?;

        Ok(block.map(Block::try_from).transpose()?)
    }

    /// Calls `eth_getBlockByNumber` and returns the block with its
    /// transactions, if it exists.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_block_by_number(
        &self,
        block: BlockSpec,
    ) -> Result<Option<Block>, EthRpcClientError> {
        let block: Option<BlockResult> = self
            .inner
            .call(RequestMethod::GetBlockByNumber(block, true))
            .await?;

        Ok(block.map(Block::try_from).transpose()?)
    }

    /// Fetches multiple blocks by hash using concurrent requests.
    ///
    /// The result preserves the order of `hashes`.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_blocks_by_hash(
        &self,
        hashes: &[String],
    ) -> Result<Vec<Option<Block>>, EthRpcClientError> {
        futures::stream::iter(hashes.iter())
            .map(|hash| self.get_block_by_hash(hash))
            .buffered(MAX_PARALLEL_REQUESTS)
            .try_collect()
            .await
    }

    /// Calls `eth_getTransactionByHash` and returns the transaction, if it
    /// exists.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_transaction_by_hash(
        &self,
        hash: &str,
    ) -> Result<Option<Transaction>, EthRpcClientError> {
        let transaction: Option<TransactionResult> = self
            .inner
            .call(RequestMethod::GetTransactionByHash(hash.to_owned()))
            .await?;

        Ok(transaction.map(Transaction::try_from).transpose()?)
    }

    /// Calls `eth_newBlockFilter` and returns the filter ID.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn new_block_filter(&self) -> Result<String, EthRpcClientError> {
        Ok(self.inner.call(RequestMethod::NewBlockFilter(())).await?)
    }

    /// Calls `eth_newPendingTransactionFilter` and returns the filter ID.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn new_pending_transaction_filter(&self) -> Result<String, EthRpcClientError> {
        Ok(self
            .inner
            .call(RequestMethod::NewPendingTransactionFilter(()))
            .await?)
    }

    /// Calls `eth_getFilterChanges` and returns the hashes of the blocks or
    /// transactions observed since the last poll.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn get_filter_changes(
        &self,
        filter_id: &str,
    ) -> Result<Vec<String>, EthRpcClientError> {
        Ok(self
            .inner
            .call(RequestMethod::GetFilterChanges(filter_id.to_owned()))
            .await?)
    }

    /// Calls `eth_uninstallFilter` and returns whether the filter existed.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn uninstall_filter(&self, filter_id: &str) -> Result<bool, EthRpcClientError> {
        Ok(self
            .inner
            .call(RequestMethod::UninstallFilter(filter_id.to_owned()))
            .await?)
    }
}
