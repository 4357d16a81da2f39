//! Environment-backed configuration. Secret material is injected, never a
//! literal in source: the signing keypair comes from a solana-keygen JSON
//! file whose path is itself configurable.

use std::env;
use std::path::{Path, PathBuf};

use dotenvy::dotenv;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;

use crate::error::{BridgeError, BridgeResult};

const ENV_RPC_URL: &str = "SOLANA_RPC_URL";
const ENV_CLUSTER: &str = "SOLANA_CLUSTER";
const ENV_PROGRAM_ID: &str = "VOTING_PROGRAM_ID";
const ENV_KEYPAIR_PATH: &str = "VOTING_KEYPAIR_PATH";

#[derive(Debug, Clone)]
pub struct BridgeConfig {
    pub rpc_url: String,
    /// Cluster label used for explorer links ("devnet", "mainnet-beta", ...).
    pub cluster: String,
    pub program_id: Pubkey,
    pub keypair_path: PathBuf,
}

impl BridgeConfig {
    /// Load from the process environment, reading `.env` if present.
    pub fn from_env() -> BridgeResult<Self> {
        dotenv().ok();

        let rpc_url = env::var(ENV_RPC_URL)
            .unwrap_or_else(|_| "https://api.devnet.solana.com".to_string());
        let cluster = env::var(ENV_CLUSTER).unwrap_or_else(|_| "devnet".to_string());

        let program_id = env::var(ENV_PROGRAM_ID)
            .map_err(|_| BridgeError::Config(format!("{ENV_PROGRAM_ID} is not set")))?
            .parse::<Pubkey>()
            .map_err(|e| BridgeError::Config(format!("invalid {ENV_PROGRAM_ID}: {e}")))?;

        let keypair_path = match env::var(ENV_KEYPAIR_PATH) {
            Ok(path) => PathBuf::from(path),
            Err(_) => default_keypair_path().ok_or_else(|| {
                BridgeError::Config(format!(
                    "{ENV_KEYPAIR_PATH} is not set and no home directory was found"
                ))
            })?,
        };

        Ok(Self {
            rpc_url,
            cluster,
            program_id,
            keypair_path,
        })
    }

    pub fn load_keypair(&self) -> BridgeResult<Keypair> {
        read_keypair(&self.keypair_path)
    }
}

/// Read a solana-keygen JSON keypair file.
pub fn read_keypair(path: &Path) -> BridgeResult<Keypair> {
    let data = std::fs::read_to_string(path).map_err(|e| {
        BridgeError::Config(format!("failed to read keypair file {}: {e}", path.display()))
    })?;
    let bytes: Vec<u8> = serde_json::from_str(&data).map_err(|e| {
        BridgeError::Config(format!(
            "keypair file {} is not a JSON byte array: {e}",
            path.display()
        ))
    })?;
    Keypair::from_bytes(&bytes)
        .map_err(|e| BridgeError::Config(format!("invalid keypair bytes: {e}")))
}

fn default_keypair_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config/solana/id.json"))
}
