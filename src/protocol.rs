// src/protocol.rs
//
// Wire contract with the on-chain voting program. Account order, account
// flags, discriminators, and the borsh field layout must all match the
// program exactly.

use borsh::{BorshDeserialize, BorshSerialize};
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
};

use crate::error::BridgeResult;

/// Must match the on-chain PDA seed constants.
pub const POLL_SEED: &[u8] = b"poll";
pub const VOTER_SEED: &[u8] = b"voter";

/// Anchor instruction discriminators for the two program operations.
pub const CREATE_POLL_DISCRIMINATOR: [u8; 8] = [182, 171, 112, 238, 6, 219, 14, 110];
pub const CAST_VOTE_DISCRIMINATOR: [u8; 8] = [20, 212, 15, 189, 69, 180, 69, 151];

/// The argument layouts MUST match the on-chain program.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone)]
pub struct CreatePollArgs {
    pub poll_id: u64,
    pub question: String,
    pub options: Vec<String>,
    pub duration: i64,
}

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone)]
pub struct CastVoteArgs {
    pub option_index: u8,
}

/// Instruction data is the 8-byte discriminator followed by the borsh
/// serialization of the args, nothing else.
pub fn encode_instruction_data(
    discriminator: [u8; 8],
    args: &impl BorshSerialize,
) -> BridgeResult<Vec<u8>> {
    let mut data = discriminator.to_vec();
    data.extend(args.try_to_vec()?);
    Ok(data)
}

pub fn create_poll_instruction(
    program_id: &Pubkey,
    poll: &Pubkey,
    authority: &Pubkey,
    args: &CreatePollArgs,
) -> BridgeResult<Instruction> {
    let data = encode_instruction_data(CREATE_POLL_DISCRIMINATOR, args)?;

    let accounts = vec![
        AccountMeta::new(*poll, false),
        AccountMeta::new(*authority, true),
        AccountMeta::new_readonly(system_program::id(), false),
    ];

    Ok(Instruction {
        program_id: *program_id,
        accounts,
        data,
    })
}

pub fn cast_vote_instruction(
    program_id: &Pubkey,
    poll: &Pubkey,
    voter_record: &Pubkey,
    authority: &Pubkey,
    args: &CastVoteArgs,
) -> BridgeResult<Instruction> {
    let data = encode_instruction_data(CAST_VOTE_DISCRIMINATOR, args)?;

    let accounts = vec![
        AccountMeta::new(*poll, false),
        AccountMeta::new(*voter_record, false),
        AccountMeta::new(*authority, true),
        AccountMeta::new_readonly(system_program::id(), false),
    ];

    Ok(Instruction {
        program_id: *program_id,
        accounts,
        data,
    })
}
