//! Program-derived addresses for poll and voter-record accounts.
//!
//! The on-chain program recomputes these from the same seeds to authorize
//! access, so the derivation here must match it bit-for-bit.

use solana_sdk::pubkey::Pubkey;

use crate::error::{BridgeError, BridgeResult};
use crate::protocol::{POLL_SEED, VOTER_SEED};

/// Seeds: `["poll", authority, poll_id as 8 LE bytes]`.
pub fn find_poll_address(
    program_id: &Pubkey,
    authority: &Pubkey,
    poll_id: u64,
) -> BridgeResult<(Pubkey, u8)> {
    Pubkey::try_find_program_address(
        &[POLL_SEED, authority.as_ref(), &poll_id.to_le_bytes()],
        program_id,
    )
    .ok_or(BridgeError::Derivation("poll"))
}

/// Seeds: `["voter", poll_address, voter_address]`.
pub fn find_voter_record_address(
    program_id: &Pubkey,
    poll: &Pubkey,
    voter: &Pubkey,
) -> BridgeResult<(Pubkey, u8)> {
    Pubkey::try_find_program_address(&[VOTER_SEED, poll.as_ref(), voter.as_ref()], program_id)
        .ok_or(BridgeError::Derivation("voter record"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poll_address_is_deterministic() {
        let program_id = Pubkey::new_unique();
        let authority = Pubkey::new_unique();

        let first = find_poll_address(&program_id, &authority, 42).unwrap();
        let second = find_poll_address(&program_id, &authority, 42).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn voter_record_rederivation_is_stable() {
        let program_id = Pubkey::new_unique();
        let poll = Pubkey::new_unique();
        let voter = Pubkey::new_unique();

        let (addr, bump) = find_voter_record_address(&program_id, &poll, &voter).unwrap();
        let (addr2, bump2) = find_voter_record_address(&program_id, &poll, &voter).unwrap();
        assert_eq!(addr, addr2);
        assert_eq!(bump, bump2);
    }

    #[test]
    fn derived_addresses_are_off_curve() {
        let program_id = Pubkey::new_unique();
        let authority = Pubkey::new_unique();
        let voter = Pubkey::new_unique();

        let (poll, _) = find_poll_address(&program_id, &authority, 7).unwrap();
        assert!(!poll.is_on_curve());

        let (record, _) = find_voter_record_address(&program_id, &poll, &voter).unwrap();
        assert!(!record.is_on_curve());
    }

    #[test]
    fn matches_sdk_derivation() {
        let program_id = Pubkey::new_unique();
        let authority = Pubkey::new_unique();
        let poll_id: u64 = 99;

        let ours = find_poll_address(&program_id, &authority, poll_id).unwrap();
        let sdk = Pubkey::find_program_address(
            &[b"poll", authority.as_ref(), &poll_id.to_le_bytes()],
            &program_id,
        );
        assert_eq!(ours, sdk);
    }

    #[test]
    fn different_voters_get_different_records() {
        let program_id = Pubkey::new_unique();
        let poll = Pubkey::new_unique();

        let (a, _) =
            find_voter_record_address(&program_id, &poll, &Pubkey::new_unique()).unwrap();
        let (b, _) =
            find_voter_record_address(&program_id, &poll, &Pubkey::new_unique()).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn poll_id_feeds_the_seeds() {
        let program_id = Pubkey::new_unique();
        let authority = Pubkey::new_unique();

        let (a, _) = find_poll_address(&program_id, &authority, 1).unwrap();
        let (b, _) = find_poll_address(&program_id, &authority, 2).unwrap();
        assert_ne!(a, b);
    }
}
