use anchor_lang::prelude::*;

use crate::constants::MAX_PLAYERS;
use crate::error::ErrorCode;
use crate::randomness::{winner_index, Entropy};

#[account]
#[derive(InitSpace)]
pub struct Lottery {
    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,

    /// The account that initialized the lottery. Only it may pick a winner.
    pub operator: Pubkey,

    /// Entries must be strictly greater than this many lamports.
    pub minimum_entry: u64,

    /// Lamports contributed since the last draw. The account's rent reserve
    /// is never part of the pot.
    pub pot: u64,

    /// Number of completed draws.
    pub round: u64,

    /// Entrants of the current round in entry order. A player who enters
    /// twice holds two slots.
    #[max_len(MAX_PLAYERS)]
    pub players: Vec<Pubkey>,
}

/// Outcome of a draw, computed before the round is reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Draw {
    pub winner: Pubkey,
    pub index: usize,
    pub payout: u64,
}

impl Lottery {
    /// Starts an empty lottery. The minimum may not sit below the rent-exempt
    /// balance of an empty account, so any pot can be paid into a drained
    /// wallet.
    pub fn open(
        &mut self,
        operator: Pubkey,
        minimum_entry: u64,
        bump: u8,
        rent: &Rent,
    ) -> Result<()> {
        require!(
            minimum_entry >= rent.minimum_balance(0),
            ErrorCode::MinimumEntryTooLow
        );

        self.bump = bump;
        self.operator = operator;
        self.minimum_entry = minimum_entry;
        self.pot = 0;
        self.round = 0;
        self.players = Vec::new();
        Ok(())
    }

    /// Admits `player` with `amount` lamports. Nothing changes on error.
    pub fn enter(&mut self, player: Pubkey, amount: u64) -> Result<()> {
        require!(
            amount > self.minimum_entry,
            ErrorCode::InsufficientContribution
        );
        require!(self.players.len() < MAX_PLAYERS, ErrorCode::LotteryFull);
        let pot = self
            .pot
            .checked_add(amount)
            .ok_or(ErrorCode::ArithmeticOverflow)?;

        self.players.push(player);
        self.pot = pot;
        Ok(())
    }

    /// Picks the winner for the current round without touching state.
    pub fn select_winner(&self, caller: Pubkey, entropy: &Entropy) -> Result<Draw> {
        require_keys_eq!(caller, self.operator, ErrorCode::Unauthorized);

        let index = winner_index(&entropy.seed(&self.players), self.players.len())?;
        let winner = self
            .players
            .get(index)
            .copied()
            .ok_or(ErrorCode::NoEntrants)?;

        Ok(Draw {
            winner,
            index,
            payout: self.pot,
        })
    }

    /// Clears the round so the lottery accepts entries again.
    pub fn finish_round(&mut self) -> Result<()> {
        let round = self
            .round
            .checked_add(1)
            .ok_or(ErrorCode::ArithmeticOverflow)?;

        self.players.clear();
        self.pot = 0;
        self.round = round;
        Ok(())
    }
}
