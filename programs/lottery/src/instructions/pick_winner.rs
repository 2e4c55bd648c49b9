use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::slot_hashes;

use crate::constants::LOTTERY_SEED;
use crate::error::ErrorCode;
use crate::events::WinnerPicked;
use crate::randomness::{latest_slot_hash, Entropy};
use crate::state::Lottery;

/// Accounts required to draw the current round.
///
/// The winner is not known when the transaction is built, so the client
/// passes every distinct entrant as a writable remaining account. The
/// operator's own account is used directly when the operator wins.
/// `MAX_PLAYERS` keeps a full round within one legacy transaction, so no
/// address lookup table is needed.
#[derive(Accounts)]
pub struct PickWinner<'info> {
    #[account(mut)]
    pub operator: Signer<'info>,

    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump,
        has_one = operator @ ErrorCode::Unauthorized,
    )]
    pub lottery: Account<'info, Lottery>,

    /// CHECK: address constrained to the SlotHashes sysvar, parsed in the handler.
    #[account(address = slot_hashes::ID)]
    pub slot_hashes: UncheckedAccount<'info>,
}

/// Draws a winner, resets the round and pays out the pot.
///
/// Steps:
/// 1. Mix the newest slot hash, the clock and the operator into a seed.
/// 2. Reduce it modulo the entry count to get the winning slot.
/// 3. Clear the round, then move the pot lamports to the winner.
pub fn process_pick_winner<'info>(
    ctx: Context<'_, '_, '_, 'info, PickWinner<'info>>,
) -> Result<()> {
    let clock = Clock::get()?;
    let operator = ctx.accounts.operator.key();
    let slot_hash = latest_slot_hash(&ctx.accounts.slot_hashes.to_account_info())?;
    let entropy = Entropy::new(&clock, slot_hash, operator);

    let lottery = &mut ctx.accounts.lottery;
    let draw = lottery.select_winner(operator, &entropy)?;

    msg!("Current slot: {}", clock.slot);
    msg!("Player count: {}", lottery.players.len());
    msg!("Winner: {} (entry {})", draw.winner, draw.index);

    let winner = if draw.winner == operator {
        ctx.accounts.operator.to_account_info()
    } else {
        ctx.remaining_accounts
            .iter()
            .find(|account| account.key() == draw.winner && account.is_writable)
            .cloned()
            .ok_or(ErrorCode::WinnerAccountMissing)?
    };

    // The round is closed before any lamports leave the account.
    lottery.finish_round()?;
    let round = lottery.round;

    transfer_pot(&ctx.accounts.lottery.to_account_info(), &winner, draw.payout)?;

    msg!("Paid {} lamports for round {}", draw.payout, round);

    emit!(WinnerPicked {
        winner: draw.winner,
        winner_index: draw.index as u32,
        payout: draw.payout,
        round,
    });

    Ok(())
}

/// Moves `amount` lamports out of the program-owned lottery account.
/// Both balances are checked before either is written.
pub(crate) fn transfer_pot(lottery: &AccountInfo, winner: &AccountInfo, amount: u64) -> Result<()> {
    let remaining = lottery
        .lamports()
        .checked_sub(amount)
        .ok_or(ErrorCode::ArithmeticOverflow)?;
    let credited = winner
        .lamports()
        .checked_add(amount)
        .ok_or(ErrorCode::ArithmeticOverflow)?;

    **lottery.try_borrow_mut_lamports()? = remaining;
    **winner.try_borrow_mut_lamports()? = credited;
    Ok(())
}
