use anchor_lang::prelude::*;

#[event]
pub struct LotteryInitialized {
    pub lottery: Pubkey,
    pub operator: Pubkey,
    pub minimum_entry: u64,
}

#[event]
pub struct PlayerEntered {
    pub player: Pubkey,
    pub amount: u64,
    pub pot: u64,
    pub entries: u32,
}

#[event]
pub struct WinnerPicked {
    pub winner: Pubkey,
    pub winner_index: u32,
    pub payout: u64,
    pub round: u64,
}
