use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// The JSON-RPC version
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum Version {
    /// Version 2.0
    #[default]
    #[serde(rename = "2.0")]
    V2_0,
}

/// Identifier of a JSON-RPC request
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Id {
    /// Numeric id
    Num(u64),
    /// String id
    Str(String),
}

/// A JSON-RPC request
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Request<MethodT> {
    /// JSON-RPC version
    #[serde(rename = "jsonrpc")]
    pub version: Version,
    /// The method and its parameters
    #[serde(flatten)]
    pub method: MethodT,
    /// The request id
    pub id: Id,
}

impl<MethodT> Request<MethodT> {
    /// Constructs a version 2.0 request.
    pub fn new(id: Id, method: MethodT) -> Self {
        Self {
            version: Version::V2_0,
            method,
            id,
        }
    }
}

/// A method name with an ordered list of parameters.
///
/// Used for methods that are not modelled by a typed method enum.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct MethodInvocation {
    /// Name of the method
    pub method: String,
    /// Positional parameters
    pub params: Vec<serde_json::Value>,
}

/// Encodes a request for the provided method name and positional parameters.
pub fn encode_request(
    id: Id,
    method: impl Into<String>,
    params: Vec<serde_json::Value>,
) -> Result<String, serde_json::Error> {
    serde_json::to_string(&Request::new(
        id,
        MethodInvocation {
            method: method.into(),
            params,
        },
    ))
}

/// Error object of a failed JSON-RPC request
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, thiserror::Error)]
#[error("The response reported error `{code}`: `{message}`. (optional data: {data:?})")]
pub struct Error {
    /// Error code
    pub code: i64,
    /// Error message
    pub message: String,
    /// Additional error information
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

/// A JSON-RPC response
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Response<T> {
    /// JSON-RPC version
    #[serde(rename = "jsonrpc")]
    pub version: Version,
    /// The id of the request this responds to
    pub id: Id,
    /// The result or error
    #[serde(flatten)]
    pub data: ResponseData<T>,
}

/// The payload of a JSON-RPC response
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ResponseData<T> {
    /// The request failed
    Error {
        /// The error object
        error: Error,
    },
    /// The request succeeded
    Success {
        /// The result of the method
        result: T,
    },
}

impl<T> ResponseData<T> {
    /// Returns the result of a successful response or the error of a failed
    /// one.
    pub fn into_result(self) -> Result<T, Error> {
        match self {
            ResponseData::Success { result } => Ok(result),
            ResponseData::Error { error } => Err(error),
        }
    }
}

/// Error that occurs when decoding a response body.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The body is not a JSON-RPC response with the expected result type.
    #[error("Response '{response}' failed to parse with expected type '{expected_type}', due to error: '{error}'")]
    InvalidResponse {
        /// The response text
        response: String,
        /// The expected type of the response
        expected_type: &'static str,
        /// The parse error
        error: serde_json::Error,
    },
    /// The node returned a JSON-RPC error.
    #[error(transparent)]
    JsonRpc(#[from] Error),
}

/// Parses a response body into a [`Response`].
pub fn parse_response<T: DeserializeOwned>(response: &str) -> Result<Response<T>, DecodeError> {
    serde_json::from_str(response).map_err(|error| DecodeError::InvalidResponse {
        response: response.to_owned(),
        expected_type: std::any::type_name::<Response<T>>(),
        error,
    })
}

/// Decodes a response body into its result.
pub fn decode_response<T: DeserializeOwned>(response: &str) -> Result<T, DecodeError> {
    let result = parse_response(response)?.data.into_result()?;
    Ok(result)
}
