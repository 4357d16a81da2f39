// src/submit.rs
//
// Transaction assembly, signing, and single-shot submission. The async RPC
// calls are the only suspension points; dropping the returned future aborts
// any in-flight request, so caller cancellation needs no extra plumbing.

use std::time::Duration;

use solana_client::client_error::{ClientError, ClientErrorKind};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    commitment_config::CommitmentConfig,
    hash::Hash,
    instruction::Instruction,
    message::Message,
    signature::{Keypair, Signature, Signer},
    transaction::Transaction,
};
use tracing::{debug, info, warn};

use crate::error::{BridgeError, BridgeResult};

/// Submission attempts for transport-level failures. Ledger rejections are
/// terminal and never retried. The default is a single attempt; callers that
/// want retries opt in explicitly.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub attempts: u32,
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 1,
            backoff: Duration::from_millis(500),
        }
    }
}

/// A recent blockhash plus the block height after which it expires.
#[derive(Debug, Clone, Copy)]
pub struct Freshness {
    pub blockhash: Hash,
    pub last_valid_block_height: u64,
}

/// Fetch a recent blockhash at finalized commitment.
pub async fn fetch_freshness(rpc: &RpcClient) -> BridgeResult<Freshness> {
    let (blockhash, last_valid_block_height) = rpc
        .get_latest_blockhash_with_commitment(CommitmentConfig::finalized())
        .await
        .map_err(BridgeError::Network)?;

    Ok(Freshness {
        blockhash,
        last_valid_block_height,
    })
}

/// Assemble and sign a single-instruction transaction with `payer` as fee
/// payer. A required signer we do not hold fails here, before anything
/// reaches the network.
pub fn sign_transaction(
    instruction: Instruction,
    payer: &Keypair,
    blockhash: Hash,
) -> BridgeResult<Transaction> {
    let message = Message::new(&[instruction], Some(&payer.pubkey()));
    let mut tx = Transaction::new_unsigned(message);
    tx.try_sign(&[payer], blockhash)?;
    Ok(tx)
}

/// Build, sign, and submit one instruction as one transaction, returning the
/// network-assigned signature. One logical unit of work: either a signature
/// comes back or an error does.
pub async fn submit_instruction(
    rpc: &RpcClient,
    payer: &Keypair,
    instruction: Instruction,
    retry: &RetryPolicy,
) -> BridgeResult<Signature> {
    let freshness = fetch_freshness(rpc).await?;
    debug!(
        blockhash = %freshness.blockhash,
        last_valid_block_height = freshness.last_valid_block_height,
        "fetched recent blockhash"
    );

    let tx = sign_transaction(instruction, payer, freshness.blockhash)?;

    let attempts = retry.attempts.max(1);
    let mut attempt = 0;
    loop {
        attempt += 1;
        match rpc.send_transaction(&tx).await {
            Ok(sig) => {
                info!(%sig, "transaction submitted");
                return Ok(sig);
            }
            Err(e) if is_transport_error(&e) && attempt < attempts => {
                warn!(attempt, error = %e, "transient submission failure, retrying");
                tokio::time::sleep(retry.backoff).await;
            }
            Err(e) if is_transport_error(&e) => return Err(BridgeError::Network(e)),
            Err(e) => return Err(BridgeError::SubmissionRejected(e)),
        }
    }
}

/// Transport failures are the caller-retriable class; everything else is a
/// ledger-side rejection surfaced verbatim.
pub(crate) fn is_transport_error(err: &ClientError) -> bool {
    matches!(
        err.kind,
        ClientErrorKind::Io(_) | ClientErrorKind::Reqwest(_)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::instruction::AccountMeta;
    use solana_sdk::pubkey::Pubkey;

    fn instruction_with_signers(signers: &[(Pubkey, bool)]) -> Instruction {
        Instruction {
            program_id: Pubkey::new_unique(),
            accounts: signers
                .iter()
                .map(|(key, is_signer)| AccountMeta::new(*key, *is_signer))
                .collect(),
            data: vec![1, 2, 3],
        }
    }

    #[test]
    fn signing_succeeds_with_held_key() {
        let payer = Keypair::new();
        let ix = instruction_with_signers(&[(payer.pubkey(), true)]);

        let tx = sign_transaction(ix, &payer, Hash::default()).unwrap();
        assert_eq!(tx.signatures.len(), 1);
    }

    #[test]
    fn signing_fails_without_required_key() {
        // the instruction demands a signature from a key we do not hold
        let payer = Keypair::new();
        let foreign = Pubkey::new_unique();
        let ix = instruction_with_signers(&[(foreign, true), (payer.pubkey(), true)]);

        let err = sign_transaction(ix, &payer, Hash::default()).unwrap_err();
        assert!(matches!(err, BridgeError::Signing(_)), "got {err:?}");
    }

    #[test]
    fn default_policy_is_single_attempt() {
        assert_eq!(RetryPolicy::default().attempts, 1);
    }

    #[test]
    fn transport_errors_are_classified_as_network() {
        let io = ClientError::from(ClientErrorKind::Io(std::io::Error::new(
            std::io::ErrorKind::ConnectionReset,
            "reset",
        )));
        assert!(is_transport_error(&io));

        let rejection = ClientError::from(ClientErrorKind::Custom(
            "custom program error: 0x1".to_string(),
        ));
        assert!(!is_transport_error(&rejection));
    }
}
