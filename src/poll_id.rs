use sha2::{Digest, Sha256};
use solana_sdk::pubkey::Pubkey;

/// Derive the content-addressed poll identifier: the first 8 bytes of
/// sha256(question || option_digest || creator), little-endian.
///
/// Pure function; identical inputs always yield the identical id. Collisions
/// are bounded only by hash strength.
pub fn generate_poll_id(question: &str, option_digest: &str, creator: &Pubkey) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(question.as_bytes());
    hasher.update(option_digest.as_bytes());
    hasher.update(creator.as_ref());
    let hash = hasher.finalize();

    let mut id = [0u8; 8];
    id.copy_from_slice(&hash[..8]);
    u64::from_le_bytes(id)
}

/// Digest input covering every option in order, so polls with any option
/// count hash safely.
pub fn option_digest(options: &[String]) -> String {
    options.concat()
}
