//! Off-chain transaction bridge for the on-chain voting program.
//!
//! Translates structured poll/vote requests into signed Solana transactions:
//! derives the program's poll and voter-record PDAs, encodes instruction data
//! in the program's layout (8-byte discriminator + borsh args), fetches a
//! recent blockhash at finalized commitment, signs with the service
//! authority, and submits through RPC.
//!
//! The HTTP facade and the relational store sit outside this crate: it takes
//! validated requests in and returns the identifiers, addresses, and
//! signatures the facade persists.

pub mod config;
pub mod context;
pub mod error;
pub mod pda;
pub mod poll_id;
pub mod protocol;
pub mod service;
pub mod submit;

pub use config::BridgeConfig;
pub use context::BridgeContext;
pub use error::{BridgeError, BridgeResult};
pub use submit::RetryPolicy;
