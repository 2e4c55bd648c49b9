//! Winner selection from block metadata.
//!
//! The draw hashes inputs that are public by the time the transaction runs:
//! the latest `SlotHashes` entry, the clock, the caller and the current
//! player list. This is not secure randomness. The slot leader can steer the
//! slot hash and timestamp, and the operator chooses when to submit
//! `pick_winner`, so either can bias the outcome. Treat the draw as
//! "unpredictable enough" for low-stakes pools only.

use anchor_lang::prelude::*;
use solana_program::keccak;

use crate::constants::{SLOT_HASHES_LEN_SIZE, SLOT_HASH_ENTRY_SIZE};
use crate::error::ErrorCode;

/// Inputs mixed into the winner seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entropy {
    /// Hash of the most recent slot recorded in the `SlotHashes` sysvar.
    pub slot_hash: [u8; 32],
    pub slot: u64,
    pub unix_timestamp: i64,
    pub caller: Pubkey,
}

impl Entropy {
    pub fn new(clock: &Clock, slot_hash: [u8; 32], caller: Pubkey) -> Self {
        Self {
            slot_hash,
            slot: clock.slot,
            unix_timestamp: clock.unix_timestamp,
            caller,
        }
    }

    /// keccak256(slot_hash || slot || unix_timestamp || caller || players...)
    pub fn seed(&self, players: &[Pubkey]) -> [u8; 32] {
        let slot = self.slot.to_le_bytes();
        let unix_timestamp = self.unix_timestamp.to_le_bytes();

        let mut parts: Vec<&[u8]> = Vec::with_capacity(4 + players.len());
        parts.push(&self.slot_hash);
        parts.push(&slot);
        parts.push(&unix_timestamp);
        parts.push(self.caller.as_ref());
        parts.extend(players.iter().map(|player| player.as_ref()));

        keccak::hashv(&parts).to_bytes()
    }
}

/// Reduces the seed, read as a 256-bit big-endian integer, modulo `count`.
pub fn winner_index(seed: &[u8; 32], count: usize) -> Result<usize> {
    require!(count > 0, ErrorCode::NoEntrants);

    let modulus = count as u128;
    let index = seed
        .iter()
        .fold(0u128, |acc, byte| (acc * 256 + u128::from(*byte)) % modulus);

    Ok(index as usize)
}

/// Hash of the newest entry in the `SlotHashes` sysvar.
pub fn latest_slot_hash(slot_hashes: &AccountInfo) -> Result<[u8; 32]> {
    let data = slot_hashes.try_borrow_data()?;
    parse_latest_slot_hash(&data)
}

pub(crate) fn parse_latest_slot_hash(data: &[u8]) -> Result<[u8; 32]> {
    let len_bytes: [u8; SLOT_HASHES_LEN_SIZE] = data
        .get(..SLOT_HASHES_LEN_SIZE)
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or(ErrorCode::SlotHashesUnavailable)?;
    require!(
        u64::from_le_bytes(len_bytes) > 0,
        ErrorCode::SlotHashesUnavailable
    );

    // First entry: skip its slot number, take the hash.
    let start = SLOT_HASHES_LEN_SIZE + 8;
    let end = SLOT_HASHES_LEN_SIZE + SLOT_HASH_ENTRY_SIZE;
    let hash: [u8; 32] = data
        .get(start..end)
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or(ErrorCode::SlotHashesUnavailable)?;

    Ok(hash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;
    use proptest::prelude::*;

    fn error_code(err: Error) -> u32 {
        match err {
            Error::AnchorError(err) => err.error_code_number,
            other => panic!("expected an anchor error, got {other:?}"),
        }
    }

    fn entropy() -> Entropy {
        Entropy {
            slot_hash: [7u8; 32],
            slot: 250_000_000,
            unix_timestamp: 1_700_000_000,
            caller: Pubkey::new_unique(),
        }
    }

    #[test]
    fn index_reduces_big_endian() {
        let mut seed = [0u8; 32];
        seed[31] = 7;
        assert_eq!(winner_index(&seed, 5).unwrap(), 2);

        // 256 % 5
        let mut seed = [0u8; 32];
        seed[30] = 1;
        assert_eq!(winner_index(&seed, 5).unwrap(), 1);

        // (2^256 - 1) % 3 == 0
        assert_eq!(winner_index(&[0xff; 32], 3).unwrap(), 0);
    }

    #[test]
    fn single_player_always_wins() {
        assert_eq!(winner_index(&[0xab; 32], 1).unwrap(), 0);
    }

    #[test]
    fn zero_players_is_rejected() {
        let err = winner_index(&[1u8; 32], 0).unwrap_err();
        assert_eq!(error_code(err), u32::from(ErrorCode::NoEntrants));
    }

    #[test]
    fn seed_is_deterministic() {
        let entropy = entropy();
        let players = vec![Pubkey::new_unique(), Pubkey::new_unique()];
        assert_eq!(entropy.seed(&players), entropy.seed(&players));
    }

    #[test]
    fn seed_depends_on_every_input() {
        let base = entropy();
        let players = vec![Pubkey::new_unique(), Pubkey::new_unique()];
        let seed = base.seed(&players);

        let later = Entropy { slot: base.slot + 1, ..base };
        let other_time = Entropy { unix_timestamp: base.unix_timestamp + 1, ..base };
        let other_hash = Entropy { slot_hash: [8u8; 32], ..base };
        let other_caller = Entropy { caller: Pubkey::new_unique(), ..base };

        assert_ne!(seed, later.seed(&players));
        assert_ne!(seed, other_time.seed(&players));
        assert_ne!(seed, other_hash.seed(&players));
        assert_ne!(seed, other_caller.seed(&players));
        assert_ne!(seed, base.seed(&players[..1]));
    }

    #[test]
    fn entropy_reads_clock() {
        let clock = Clock {
            slot: 42,
            unix_timestamp: 1_650_000_000,
            ..Clock::default()
        };
        let caller = Pubkey::new_unique();
        let entropy = Entropy::new(&clock, [3u8; 32], caller);

        assert_eq!(entropy.slot, 42);
        assert_eq!(entropy.unix_timestamp, 1_650_000_000);
        assert_eq!(entropy.slot_hash, [3u8; 32]);
        assert_eq!(entropy.caller, caller);
    }

    #[test]
    fn parses_newest_slot_hash() {
        let mut data = Vec::new();
        data.extend_from_slice(&2u64.to_le_bytes());
        data.extend_from_slice(&101u64.to_le_bytes());
        data.extend_from_slice(&[0x11; 32]);
        data.extend_from_slice(&100u64.to_le_bytes());
        data.extend_from_slice(&[0x22; 32]);

        assert_eq!(parse_latest_slot_hash(&data).unwrap(), [0x11; 32]);
    }

    #[test]
    fn empty_slot_hashes_are_rejected() {
        let unavailable = u32::from(ErrorCode::SlotHashesUnavailable);

        let err = parse_latest_slot_hash(&0u64.to_le_bytes()).unwrap_err();
        assert_eq!(error_code(err), unavailable);

        let err = parse_latest_slot_hash(&[0u8; 4]).unwrap_err();
        assert_eq!(error_code(err), unavailable);

        // Claims one entry but the data is cut short.
        let mut truncated = 1u64.to_le_bytes().to_vec();
        truncated.extend_from_slice(&[0u8; 20]);
        let err = parse_latest_slot_hash(&truncated).unwrap_err();
        assert_eq!(error_code(err), unavailable);
    }

    proptest! {
        #[test]
        fn index_is_in_range(seed in any::<[u8; 32]>(), count in 1usize..=1_000) {
            let index = winner_index(&seed, count).unwrap();
            prop_assert!(index < count);
        }
    }
}
