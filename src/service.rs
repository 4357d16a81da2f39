// src/service.rs
//
// Facade-facing operations. The facade validates inputs (option count,
// question length) before calling in; this layer derives addresses, encodes
// the instruction, and submits, then hands back everything the facade
// persists off-chain.

use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use tracing::info;

use crate::context::BridgeContext;
use crate::error::BridgeResult;
use crate::pda;
use crate::poll_id;
use crate::protocol::{cast_vote_instruction, create_poll_instruction, CastVoteArgs, CreatePollArgs};
use crate::submit::{submit_instruction, RetryPolicy};

/// Default poll lifetime: 24 hours.
pub const DEFAULT_POLL_DURATION_SECS: i64 = 86_400;

#[derive(Debug, Clone)]
pub struct CreatePollRequest {
    pub question: String,
    pub options: Vec<String>,
    pub duration_secs: i64,
}

impl CreatePollRequest {
    pub fn new(question: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            question: question.into(),
            options,
            duration_secs: DEFAULT_POLL_DURATION_SECS,
        }
    }
}

/// Everything the facade needs to persist a created poll.
#[derive(Debug)]
pub struct PollCreated {
    pub poll_id: u64,
    pub poll_address: Pubkey,
    pub bump: u8,
    pub signature: Signature,
}

#[derive(Debug, Clone)]
pub struct CastVoteRequest {
    pub poll_address: Pubkey,
    pub voter: Pubkey,
    pub option_index: u8,
}

#[derive(Debug)]
pub struct VoteCast {
    pub voter_record: Pubkey,
    pub signature: Signature,
}

/// Create a poll on chain under the service authority.
pub async fn create_poll(
    ctx: &BridgeContext,
    request: &CreatePollRequest,
    retry: &RetryPolicy,
) -> BridgeResult<PollCreated> {
    let authority = ctx.authority_pubkey();

    let digest = poll_id::option_digest(&request.options);
    let poll_id = poll_id::generate_poll_id(&request.question, &digest, &authority);
    let (poll_address, bump) = pda::find_poll_address(ctx.program_id(), &authority, poll_id)?;
    info!(%poll_address, bump, poll_id, "derived poll account");

    let args = CreatePollArgs {
        poll_id,
        question: request.question.clone(),
        options: request.options.clone(),
        duration: request.duration_secs,
    };
    let instruction = create_poll_instruction(ctx.program_id(), &poll_address, &authority, &args)?;

    let signature = submit_instruction(ctx.rpc(), ctx.authority(), instruction, retry).await?;

    Ok(PollCreated {
        poll_id,
        poll_address,
        bump,
        signature,
    })
}

/// Cast a vote on an existing poll. The voter-record account derived from
/// the voter's address is the canonical duplicate guard: the program rejects
/// a second creation at the same address, so the writable account below is
/// what makes dedup race-free.
pub async fn cast_vote(
    ctx: &BridgeContext,
    request: &CastVoteRequest,
    retry: &RetryPolicy,
) -> BridgeResult<VoteCast> {
    let authority = ctx.authority_pubkey();

    let (voter_record, _bump) = pda::find_voter_record_address(
        ctx.program_id(),
        &request.poll_address,
        &request.voter,
    )?;
    info!(%voter_record, poll = %request.poll_address, "derived voter record");

    let args = CastVoteArgs {
        option_index: request.option_index,
    };
    let instruction = cast_vote_instruction(
        ctx.program_id(),
        &request.poll_address,
        &voter_record,
        &authority,
        &args,
    )?;

    let signature = submit_instruction(ctx.rpc(), ctx.authority(), instruction, retry).await?;

    Ok(VoteCast {
        voter_record,
        signature,
    })
}

/// Solana explorer link for a submitted transaction.
pub fn explorer_url(signature: &Signature, cluster: &str) -> String {
    format!("https://explorer.solana.com/tx/{signature}?cluster={cluster}")
}
