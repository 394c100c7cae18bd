use ethrpc_rpc_client::{
    jsonrpc::{DecodeError, Id, MethodInvocation},
    RpcClient, RpcClientConfig, RpcClientError,
};
use reqwest::StatusCode;
use serde_json::json;

fn block_number_method() -> MethodInvocation {
    MethodInvocation {
        method: "eth_blockNumber".to_owned(),
        params: Vec::new(),
    }
}

fn new_client(url: &str) -> RpcClient<MethodInvocation> {
    let config = RpcClientConfig {
        max_retries: 0,
        ..RpcClientConfig::with_url(url)
    };
    RpcClient::new(&config).expect("url ok")
}

#[tokio::test]
async fn call_success() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/")
        .match_header("content-type", "application/json")
        .match_body(mockito::Matcher::PartialJson(json!({
            "jsonrpc": "2.0",
            "method": "eth_blockNumber",
            "params": [],
        })))
        .with_status(200)
        .with_body(r#"{"jsonrpc":"2.0","id":0,"result":"0x1b4"}"#)
        .create_async()
        .await;

    let result: String = new_client(&server.url()).call(block_number_method()).await?;
    assert_eq!(result, "0x1b4");

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn request_ids_increase() -> anyhow::Result<()> {
    let mut server = mockito::Server::new_async().await;

    let first = server
        .mock("POST", "/")
        .match_body(mockito::Matcher::PartialJson(json!({ "id": 0 })))
        .with_body(r#"{"jsonrpc":"2.0","id":0,"result":"0x1"}"#)
        .create_async()
        .await;
    let second = server
        .mock("POST", "/")
        .match_body(mockito::Matcher::PartialJson(json!({ "id": 1 })))
        .with_body(r#"{"jsonrpc":"2.0","id":1,"result":"0x2"}"#)
        .create_async()
        .await;

    let client = new_client(&server.url());
    let lhs: String = client.call(block_number_method()).await?;
    let rhs: String = client.call(block_number_method()).await?;
    assert_eq!((lhs.as_str(), rhs.as_str()), ("0x1", "0x2"));

    first.assert_async().await;
    second.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn send_request_body_400_status() {
    const STATUS_CODE: u16 = 400;

    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/")
        .with_status(STATUS_CODE.into())
        .with_header("content-type", "text/plain")
        .create_async()
        .await;

    let error = new_client(&server.url())
        .call::<String>(block_number_method())
        .await
        .expect_err("should have failed to due to a HTTP status error");

    if let RpcClientError::HttpStatus(error) = error {
        assert_eq!(
            error.status(),
            Some(StatusCode::from_u16(STATUS_CODE).unwrap())
        );
    } else {
        unreachable!("Invalid error: {error}");
    }

    mock.assert_async().await;
}

#[tokio::test]
async fn json_rpc_error() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/")
        .with_body(
            r#"{"jsonrpc":"2.0","id":0,"error":{"code":-32601,"message":"the method eth_blockNumber does not exist/is not available"}}"#,
        )
        .create_async()
        .await;

    let error = new_client(&server.url())
        .call::<String>(block_number_method())
        .await
        .expect_err("should have failed due to a JSON-RPC error");

    if let RpcClientError::JsonRpcError { error, request } = error {
        assert_eq!(error.code, -32601);
        assert!(request.contains("eth_blockNumber"));
    } else {
        unreachable!("Invalid error: {error}");
    }

    mock.assert_async().await;
}

#[tokio::test]
async fn mismatched_id() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/")
        .with_body(r#"{"jsonrpc":"2.0","id":"other","result":"0x1"}"#)
        .create_async()
        .await;

    let error = new_client(&server.url())
        .call::<String>(block_number_method())
        .await
        .expect_err("should have failed due to an invalid id");

    assert!(matches!(
        error,
        RpcClientError::InvalidId { id: Id::Str(ref id), .. } if id == "other"
    ));

    mock.assert_async().await;
}

#[tokio::test]
async fn invalid_response() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/")
        .with_body("not json")
        .create_async()
        .await;

    let error = new_client(&server.url())
        .call::<String>(block_number_method())
        .await
        .expect_err("should have failed due to an invalid response");

    if let RpcClientError::InvalidResponse(DecodeError::InvalidResponse { response, .. }) = error {
        assert_eq!(response, "not json");
    } else {
        unreachable!("Invalid error: {error}");
    }

    mock.assert_async().await;
}

#[test]
fn invalid_configuration() {
    let error = RpcClient::<MethodInvocation>::new(&RpcClientConfig::with_url("not a url"))
        .expect_err("should have failed due to an invalid url");
    assert!(matches!(error, RpcClientError::InvalidUrl(_)));

    let mut config = RpcClientConfig::default();
    config
        .extra_headers
        .insert("bad header".to_owned(), "value".to_owned());
    let error = RpcClient::<MethodInvocation>::new(&config)
        .expect_err("should have failed due to an invalid header");
    assert!(
        matches!(error, RpcClientError::InvalidHeader { ref name, .. } if name == "bad header")
    );
}
