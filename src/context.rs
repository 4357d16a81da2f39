use std::sync::Arc;

use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signer};

use crate::config::BridgeConfig;
use crate::error::BridgeResult;

/// Shared, immutable process context: RPC client, signing authority, and the
/// target program. Constructed once and passed by reference into every
/// operation; requests share it without locking.
pub struct BridgeContext {
    rpc: RpcClient,
    authority: Arc<Keypair>,
    program_id: Pubkey,
}

impl BridgeContext {
    pub fn new(rpc_url: String, authority: Keypair, program_id: Pubkey) -> Self {
        let rpc = RpcClient::new_with_commitment(rpc_url, CommitmentConfig::finalized());
        Self {
            rpc,
            authority: Arc::new(authority),
            program_id,
        }
    }

    pub fn from_config(config: &BridgeConfig) -> BridgeResult<Self> {
        let authority = config.load_keypair()?;
        Ok(Self::new(config.rpc_url.clone(), authority, config.program_id))
    }

    pub fn rpc(&self) -> &RpcClient {
        &self.rpc
    }

    pub fn authority(&self) -> &Keypair {
        &self.authority
    }

    pub fn authority_pubkey(&self) -> Pubkey {
        self.authority.pubkey()
    }

    pub fn program_id(&self) -> &Pubkey {
        &self.program_id
    }
}
