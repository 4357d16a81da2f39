//! End-to-end tests against a live devnet deployment of the voting program.
//!
//! Disabled by default: they need network access, a deployed program, and a
//! funded authority keypair.
//!
//! # Running
//!
//! ```bash
//! VOTING_PROGRAM_ID=<id> VOTING_KEYPAIR_PATH=~/.config/solana/id.json \
//!   cargo test --test devnet -- --ignored --nocapture
//! ```

use solana_sdk::pubkey::Pubkey;
use voting_bridge::{service, BridgeConfig, BridgeContext, RetryPolicy};

#[tokio::test]
#[ignore = "requires Solana devnet access and a funded authority keypair"]
async fn devnet_create_poll_and_cast_vote() {
    let config = BridgeConfig::from_env().expect("configuration");
    let ctx = BridgeContext::from_config(&config).expect("context");
    let retry = RetryPolicy::default();

    let request = service::CreatePollRequest::new(
        format!("Integration poll for authority {}", ctx.authority_pubkey()),
        vec!["yes".to_string(), "no".to_string()],
    );
    let created = service::create_poll(&ctx, &request, &retry)
        .await
        .expect("create poll");
    println!(
        "created poll {} at {} (sig {})",
        created.poll_id, created.poll_address, created.signature
    );

    let vote = service::CastVoteRequest {
        poll_address: created.poll_address,
        voter: Pubkey::new_unique(),
        option_index: 0,
    };
    let cast = service::cast_vote(&ctx, &vote, &retry)
        .await
        .expect("cast vote");
    println!("voter record {} (sig {})", cast.voter_record, cast.signature);
}

#[tokio::test]
#[ignore = "requires Solana devnet access"]
async fn devnet_blockhash_fetch() {
    let config = BridgeConfig::from_env().expect("configuration");
    let ctx = BridgeContext::from_config(&config).expect("context");

    let freshness = voting_bridge::submit::fetch_freshness(ctx.rpc())
        .await
        .expect("finalized blockhash");
    println!(
        "blockhash {} valid through height {}",
        freshness.blockhash, freshness.last_valid_block_height
    );
}
