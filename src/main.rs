//! Operational CLI for the voting bridge: create a poll or cast a vote
//! straight from the shell, against whatever cluster the environment points
//! at.
//!
//! ```bash
//! VOTING_PROGRAM_ID=<id> voting-bridge create-poll \
//!   --question "Release this week?" --option yes --option no
//!
//! VOTING_PROGRAM_ID=<id> voting-bridge cast-vote \
//!   --poll <poll-address> --voter <wallet> --option-index 0
//! ```

use std::str::FromStr;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use solana_sdk::pubkey::Pubkey;
use tracing::info;

use voting_bridge::{service, BridgeConfig, BridgeContext, RetryPolicy};

#[derive(Parser, Debug)]
#[command(name = "voting-bridge")]
#[command(about = "Submit poll and vote transactions to the voting program")]
struct Args {
    /// Transport-level submission attempts (ledger rejections never retry)
    #[arg(long, default_value_t = 1, env = "VOTING_SUBMIT_ATTEMPTS")]
    attempts: u32,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a poll on chain under the service authority
    CreatePoll {
        #[arg(long)]
        question: String,
        /// Poll option, repeat the flag for each entry
        #[arg(long = "option", required = true)]
        options: Vec<String>,
        #[arg(long, default_value_t = service::DEFAULT_POLL_DURATION_SECS)]
        duration_secs: i64,
    },
    /// Cast a vote on an existing poll
    CastVote {
        /// Poll account address (base58)
        #[arg(long)]
        poll: String,
        /// Voter wallet address (base58)
        #[arg(long)]
        voter: String,
        #[arg(long)]
        option_index: u8,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = BridgeConfig::from_env().context("failed to load configuration")?;
    let ctx = BridgeContext::from_config(&config).context("failed to initialize bridge context")?;
    info!(
        authority = %ctx.authority_pubkey(),
        program = %ctx.program_id(),
        rpc = %config.rpc_url,
        "bridge ready"
    );

    let retry = RetryPolicy {
        attempts: args.attempts,
        ..RetryPolicy::default()
    };

    match args.command {
        Command::CreatePoll {
            question,
            options,
            duration_secs,
        } => {
            let request = service::CreatePollRequest {
                question,
                options,
                duration_secs,
            };
            let created = service::create_poll(&ctx, &request, &retry).await?;

            println!("poll id:      {}", created.poll_id);
            println!("poll address: {}", created.poll_address);
            println!("signature:    {}", created.signature);
            println!(
                "explorer:     {}",
                service::explorer_url(&created.signature, &config.cluster)
            );
        }
        Command::CastVote {
            poll,
            voter,
            option_index,
        } => {
            let poll_address = Pubkey::from_str(&poll).context("invalid poll address")?;
            let voter = Pubkey::from_str(&voter).context("invalid voter address")?;
            let request = service::CastVoteRequest {
                poll_address,
                voter,
                option_index,
            };
            let cast = service::cast_vote(&ctx, &request, &retry).await?;

            println!("voter record: {}", cast.voter_record);
            println!("signature:    {}", cast.signature);
            println!(
                "explorer:     {}",
                service::explorer_url(&cast.signature, &config.cluster)
            );
        }
    }

    Ok(())
}
