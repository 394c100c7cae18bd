#![warn(missing_docs)]

//! Ethereum JSON-RPC client

mod client;
mod config;

/// Types specific to JSON-RPC
pub mod jsonrpc;

pub use reqwest::header;

pub use self::{
    client::{RpcClient, RpcClientError},
    config::RpcClientConfig,
};
