use ethrpc_eth::{Equivalent, U64};
use ethrpc_rpc_eth::{
    client::{EthRpcClient, RpcClientConfig, RpcClientError},
    BlockResult, BlockSpec, EntityKind, ErrorKind, EthRpcClientError,
};
use ethrpc_test_utils::fixtures;
use mockito::Matcher;
use serde_json::json;

fn new_client(url: &str) -> EthRpcClient {
    let config = RpcClientConfig {
        max_retries: 0,
        ..RpcClientConfig::with_url(url)
    };
    EthRpcClient::new(&config).expect("url ok")
}

fn response(id: u64, result: &str) -> String {
    format!(r#"{{"jsonrpc":"2.0","id":{id},"result":{result}}}"#)
}

#[tokio::test]
async fn block_number() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({
            "method": "eth_blockNumber",
            "params": [],
        })))
        .with_body(response(0, r#""0x5b8d80""#))
        .create_async()
        .await;

    let block_number = new_client(&server.url()).block_number().await?;
    assert_eq!(block_number, 6_000_000);

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn invalid_block_number() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/")
        .with_body(response(0, r#""latest""#))
        .create_async()
        .await;

    let error = new_client(&server.url())
        .block_number()
        .await
        .expect_err("should fail to decode the block number");
    assert!(matches!(error, EthRpcClientError::InvalidBlockNumber(_)));

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn get_block_by_number_geth() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({
            "method": "eth_getBlockByNumber",
            "params": ["0x5b8d80", true],
        })))
        .with_body(response(0, fixtures::GETH_BLOCK))
        .create_async()
        .await;

    let block = new_client(&server.url())
        .get_block_by_number(BlockSpec::Number(0x5b_8d80))
        .await?
        .expect("block exists");

    assert_eq!(block.number, 0x5b_8d80);
    assert_eq!(block.nonce, Some(U64::from(0x4db7_a1c0_1d8a_8072_u64)));
    assert_eq!(block.transactions.len(), 2);
    assert!(block.transactions[1].is_contract_creation());

    let wire: BlockResult = serde_json::from_str(fixtures::GETH_BLOCK)?;
    assert!(BlockResult::try_from(&block)?.equivalent(&wire));

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn get_block_by_hash_parity() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;

    let wire: BlockResult = serde_json::from_str(fixtures::PARITY_BLOCK)?;
    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({
            "method": "eth_getBlockByHash",
            "params": [wire.hash.clone(), true],
        })))
        .with_body(response(0, fixtures::PARITY_BLOCK))
        .create_async()
        .await;

    let block = new_client(&server.url())
        .get_block_by_hash(&wire.hash)
        .await?
        .expect("block exists");

    assert_eq!(block.author.as_deref(), Some(wire.miner.as_str()));
    assert_eq!(block.seal_fields, wire.seal_fields);
    assert!(block.transactions.iter().all(|transaction| transaction.v == 28));

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn unknown_block_is_none() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/")
        .with_body(response(0, "null"))
        .create_async()
        .await;

    let block = new_client(&server.url())
        .get_block_by_number(BlockSpec::latest())
        .await?;
    assert_eq!(block, None);

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn get_pending_block() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;

    let mut wire: serde_json::Value = serde_json::from_str(fixtures::GETH_BLOCK)?;
    wire["nonce"] = serde_json::Value::Null;
    if let Some(fields) = wire.as_object_mut() {
        fields.remove("totalDifficulty");
    }

    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({
            "method": "eth_getBlockByNumber",
            "params": ["pending", true],
        })))
        .with_body(response(0, &wire.to_string()))
        .create_async()
        .await;

    let block = new_client(&server.url())
        .get_block_by_number(BlockSpec::pending())
        .await?
        .expect("block exists");

    assert_eq!(block.nonce, None);
    assert_eq!(block.total_difficulty, None);
    assert_eq!(block.transactions.len(), 2);

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn get_blocks_by_hash() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;

    let wire: BlockResult = serde_json::from_str(fixtures::GETH_BLOCK)?;
    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({
            "method": "eth_getBlockByHash",
            "params": [wire.hash.clone(), true],
        })))
        .with_body(response(0, fixtures::GETH_BLOCK))
        .create_async()
        .await;

    let blocks = new_client(&server.url())
        .get_blocks_by_hash(&[wire.hash.clone()])
        .await?;

    assert_eq!(blocks.len(), 1);
    assert_eq!(
        blocks[0].as_ref().map(|block| block.hash.as_str()),
        Some(wire.hash.as_str())
    );

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn malformed_block_fails_conversion() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;

    let mut wire: serde_json::Value = serde_json::from_str(fixtures::PARITY_BLOCK)?;
    wire["transactions"][2]["gas"] = json!("0xgas");

    let mock = server
        .mock("POST", "/")
        .with_body(response(0, &wire.to_string()))
        .create_async()
        .await;

    let error = new_client(&server.url())
        .get_block_by_number(BlockSpec::latest())
        .await
        .expect_err("should fail to convert the block");

    if let EthRpcClientError::Conversion(error) = error {
        assert_eq!(error.kind(), ErrorKind::MalformedNumeric);
        assert_eq!(error.entity(), EntityKind::BlockTransaction { index: 2 });
        assert_eq!(error.field(), "gas");
    } else {
        unreachable!("Invalid error: {error}");
    }

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn get_transaction_by_hash() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({
            "method": "eth_getTransactionByHash",
        })))
        .with_body(response(0, fixtures::PARITY_TRANSACTION))
        .create_async()
        .await;

    let transaction = new_client(&server.url())
        .get_transaction_by_hash(
            "0x0eca4feda706cfd623808a146bc4b6c587de34e9def38fc32d56bebdd8424dfa",
        )
        .await?
        .expect("transaction exists");

    assert!(transaction.is_pending());
    assert_eq!(transaction.v, 28);
    assert_eq!(transaction.network_id, Some(1));

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn filter_lifecycle() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;

    let new_filter = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({
            "method": "eth_newBlockFilter",
            "params": [],
        })))
        .with_body(response(0, r#""0x1""#))
        .create_async()
        .await;
    let changes = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({
            "method": "eth_getFilterChanges",
            "params": ["0x1"],
        })))
        .with_body(response(1, r#"["0xaa","0xbb"]"#))
        .create_async()
        .await;
    let uninstall = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({
            "method": "eth_uninstallFilter",
            "params": ["0x1"],
        })))
        .with_body(response(2, "true"))
        .create_async()
        .await;

    let client = new_client(&server.url());
    let filter_id = client.new_block_filter().await?;
    assert_eq!(
        client.get_filter_changes(&filter_id).await?,
        vec!["0xaa".to_owned(), "0xbb".to_owned()]
    );
    assert!(client.uninstall_filter(&filter_id).await?);

    new_filter.assert_async().await;
    changes.assert_async().await;
    uninstall.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn json_rpc_error() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/")
        .with_body(r#"{"jsonrpc":"2.0","id":0,"error":{"code":-32000,"message":"filter not found"}}"#)
        .create_async()
        .await;

    let error = new_client(&server.url())
        .get_filter_changes("0x2")
        .await
        .expect_err("should fail with a JSON-RPC error");

    if let EthRpcClientError::Rpc(RpcClientError::JsonRpcError { error, .. }) = error {
        assert_eq!(error.code, -32000);
        assert_eq!(error.message, "filter not found");
    } else {
        unreachable!("Invalid error: {error}");
    }

    mock.assert_async().await;
    Ok(())
}

#[cfg(feature = "test-remote")]
mod remote {
    use ethrpc_test_utils::env::json_rpc_url;

    use super::*;

    #[tokio::test]
    async fn latest_block_round_trips() -> anyhow::Result<()> {
        let client = new_client(&json_rpc_url());

        let block_number = client.block_number().await?;
        let block = client
            .get_block_by_number(BlockSpec::Number(block_number))
            .await?
            .expect("block exists");
        assert_eq!(block.number, block_number);

        let hashes = vec![block.hash.clone()];
        let blocks = client.get_blocks_by_hash(&hashes).await?;
        assert_eq!(blocks, vec![Some(block)]);

        Ok(())
    }
}
