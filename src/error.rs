use solana_client::client_error::ClientError;
use solana_sdk::signer::SignerError;
use thiserror::Error;

pub type BridgeResult<T> = Result<T, BridgeError>;

/// Failure taxonomy surfaced to the facade. Nothing here is retried or
/// swallowed internally; validation errors belong upstream and have no
/// variant.
#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("no valid off-curve address for {0} seeds")]
    Derivation(&'static str),

    #[error("failed to encode instruction data")]
    Encoding(#[from] std::io::Error),

    #[error("ledger network error")]
    Network(#[source] ClientError),

    #[error("transaction rejected by the ledger")]
    SubmissionRejected(#[source] ClientError),

    #[error("required signer unavailable")]
    Signing(#[from] SignerError),
}
