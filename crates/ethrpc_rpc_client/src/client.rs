use std::{
    fmt::Debug,
    marker::PhantomData,
    sync::atomic::{AtomicU64, Ordering},
};

use reqwest::{
    header::{self, HeaderMap, HeaderName, HeaderValue},
    Client as HttpClient,
};
use reqwest_middleware::{ClientBuilder as HttpClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
#[cfg(feature = "tracing")]
use reqwest_tracing::TracingMiddleware;
use serde::{de::DeserializeOwned, Serialize};

use crate::{config::RpcClientConfig, jsonrpc};

const EXPONENT_BASE: u32 = 2;

/// Specialized error types
#[derive(Debug, thiserror::Error)]
pub enum RpcClientError {
    /// The HTTP client could not be constructed
    #[error("Failed to construct the HTTP client: {0}")]
    HttpClient(reqwest::Error),

    /// The message could not be sent to the remote node
    #[error(transparent)]
    FailedToSend(reqwest_middleware::Error),

    /// The remote node failed to reply with the body of the response
    #[error("The response text was corrupted: {0}.")]
    CorruptedResponse(reqwest::Error),

    /// The server returned an error code.
    #[error("The Http server returned error status code: {0}")]
    HttpStatus(reqwest::Error),

    /// The request cannot be serialized as JSON.
    #[error(transparent)]
    InvalidJsonRequest(serde_json::Error),

    /// The server returned an invalid JSON-RPC response.
    #[error(transparent)]
    InvalidResponse(#[from] jsonrpc::DecodeError),

    /// The server returned an invalid JSON-RPC id.
    #[error("The server returned an invalid id: '{id:?}' in response: '{response}'")]
    InvalidId {
        /// The response text
        response: String,
        /// The invalid id
        id: jsonrpc::Id,
    },

    /// Invalid URL format
    #[error(transparent)]
    InvalidUrl(#[from] url::ParseError),

    /// A configured header is not a valid HTTP header.
    #[error("Invalid header '{name}': {message}")]
    InvalidHeader {
        /// Name of the header
        name: String,
        /// Description of the problem
        message: String,
    },

    /// The JSON-RPC returned an error.
    #[error("{error}. Request: {request}")]
    JsonRpcError {
        /// The JSON-RPC error
        error: jsonrpc::Error,
        /// The request JSON
        request: String,
    },
}

/// A client for executing RPC methods on a remote Ethereum node.
#[derive(Debug)]
pub struct RpcClient<MethodT: Serialize> {
    url: url::Url,
    client: ClientWithMiddleware,
    next_id: AtomicU64,
    _phantom: PhantomData<fn() -> MethodT>,
}

impl<MethodT: Serialize + Debug> RpcClient<MethodT> {
    /// Creates a new instance from the provided configuration.
    pub fn new(config: &RpcClientConfig) -> Result<Self, RpcClientError> {
        let url = config.url.parse()?;

        let retry_policy = ExponentialBackoff::builder()
            .retry_bounds(config.min_retry_interval(), config.max_retry_interval())
            .base(EXPONENT_BASE)
            .build_with_max_retries(config.max_retries);

        let mut headers = HeaderMap::new();
        for (name, value) in &config.extra_headers {
            let invalid_header = |message: String| RpcClientError::InvalidHeader {
                name: name.clone(),
                message,
            };

            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|error| invalid_header(error.to_string()))?;
            let header_value =
                HeaderValue::from_str(value).map_err(|error| invalid_header(error.to_string()))?;

            headers.append(header_name, header_value);
        }
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::USER_AGENT,
            HeaderValue::from_static(concat!("ethrpc ", env!("CARGO_PKG_VERSION"))),
        );

        let client = HttpClient::builder()
            .default_headers(headers)
            .build()
            .map_err(RpcClientError::HttpClient)?;

        #[cfg(feature = "tracing")]
        let client = HttpClientBuilder::new(client)
            .with(TracingMiddleware::default())
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();
        #[cfg(not(feature = "tracing"))]
        let client = HttpClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        Ok(RpcClient {
            url,
            client,
            next_id: AtomicU64::new(0),
            _phantom: PhantomData,
        })
    }

    /// The URL of the remote node.
    pub fn url(&self) -> &url::Url {
        &self.url
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all))]
    async fn send_request_body(&self, request_body: &str) -> Result<String, RpcClientError> {
        log::trace!("Sending JSON-RPC request: {request_body}");

        self.client
            .post(self.url.clone())
            .body(request_body.to_owned())
            .send()
            .await
            .map_err(RpcClientError::FailedToSend)?
            .error_for_status()
            .map_err(RpcClientError::HttpStatus)?
            .text()
            .await
            .map_err(RpcClientError::CorruptedResponse)
    }

    fn serialize_request(&self, method: &MethodT) -> Result<(jsonrpc::Id, String), RpcClientError> {
        let id = jsonrpc::Id::Num(self.next_id.fetch_add(1, Ordering::Relaxed));
        let request = serde_json::to_string(&jsonrpc::Request::new(id.clone(), method))
            .map_err(RpcClientError::InvalidJsonRequest)?;

        Ok((id, request))
    }

    /// Calls the provided JSON-RPC method and returns the result.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self)))]
    pub async fn call<SuccessT: DeserializeOwned>(
        &self,
        method: MethodT,
    ) -> Result<SuccessT, RpcClientError> {
        let (id, request) = self.serialize_request(&method)?;

        let response_text = self.send_request_body(&request).await?;
        log::trace!("Received JSON-RPC response: {response_text}");

        let response = jsonrpc::parse_response::<SuccessT>(&response_text)?;
        if response.id != id {
            return Err(RpcClientError::InvalidId {
                response: response_text,
                id: response.id,
            });
        }

        response.data.into_result().map_err(|error| {
            log::warn!("JSON-RPC request {method:?} failed: {error}");
            RpcClientError::JsonRpcError { error, request }
        })
    }
}
