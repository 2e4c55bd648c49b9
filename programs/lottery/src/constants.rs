use anchor_lang::prelude::*;

/// Seed of the single lottery PDA.
#[constant]
pub const LOTTERY_SEED: &[u8] = b"lottery";

/// Upper bound on entries per round. The account is allocated for this many
/// players up front, and a full round must still be drawable by a legacy
/// transaction carrying every entrant plus compute-budget instructions.
pub const MAX_PLAYERS: usize = 25;

/// 0.001 SOL. Suggested threshold for `initialize`; an entry must be strictly
/// greater than the configured minimum.
#[constant]
pub const DEFAULT_MINIMUM_ENTRY: u64 = 1_000_000;

pub const DISCRIMINATOR_SIZE: usize = 8;

// SlotHashes sysvar layout: u64 entry count, then (slot: u64, hash: [u8; 32])
// pairs, most recent first.
pub const SLOT_HASHES_LEN_SIZE: usize = 8;
pub const SLOT_HASH_ENTRY_SIZE: usize = 40;
