use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Entry amount must be greater than the lottery minimum.")]
    InsufficientContribution,
    #[msg("Only the lottery operator can pick a winner.")]
    Unauthorized,
    #[msg("Cannot pick a winner without any players.")]
    NoEntrants,
    #[msg("The lottery has reached its player limit for this round.")]
    LotteryFull,
    #[msg("Winner account was not supplied or is not writable.")]
    WinnerAccountMissing,
    #[msg("SlotHashes sysvar has no usable entry.")]
    SlotHashesUnavailable,
    #[msg("Minimum entry must cover the rent-exempt balance of an empty account.")]
    MinimumEntryTooLow,
    #[msg("Math operation overflow.")]
    ArithmeticOverflow,
}
