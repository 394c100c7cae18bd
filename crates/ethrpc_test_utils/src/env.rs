//! Helper functions for environment variables

/// Returns the URL of the remote node used by tests that require network
/// access.
///
/// # Panics
///
/// Panics if the `ETH_RPC_URL` environment variable is not defined or is
/// empty.
pub fn json_rpc_url() -> String {
    let url = std::env::var("ETH_RPC_URL")
        .unwrap_or_else(|_error| panic!("ETH_RPC_URL environment variable not defined"));

    assert!(!url.is_empty(), "ETH_RPC_URL environment variable is empty");
    url
}
