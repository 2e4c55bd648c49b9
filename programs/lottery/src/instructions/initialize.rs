use anchor_lang::prelude::*;

use crate::constants::{DISCRIMINATOR_SIZE, LOTTERY_SEED};
use crate::events::LotteryInitialized;
use crate::state::Lottery;

/// Accounts required to create the lottery.
/// The signer becomes the operator for the lifetime of the account.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Pays for the lottery account and becomes its operator.
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = DISCRIMINATOR_SIZE + Lottery::INIT_SPACE,
        seeds = [LOTTERY_SEED],
        bump
    )]
    pub lottery: Box<Account<'info, Lottery>>,

    pub system_program: Program<'info, System>,
}

/// Creates the lottery with an empty round.
///
/// # Arguments
/// * `ctx` - Context holding the Initialize accounts
/// * `minimum_entry` - Entries must be strictly greater than this (lamports).
///   At least the rent-exempt balance of an empty account.
pub fn process_initialize(ctx: Context<Initialize>, minimum_entry: u64) -> Result<()> {
    let rent = Rent::get()?;
    let operator = ctx.accounts.payer.key();
    let lottery_key = ctx.accounts.lottery.key();

    ctx.accounts
        .lottery
        .open(operator, minimum_entry, ctx.bumps.lottery, &rent)?;

    msg!("Lottery opened by {}", operator);
    msg!("Minimum entry: {} lamports", minimum_entry);

    emit!(LotteryInitialized {
        lottery: lottery_key,
        operator,
        minimum_entry,
    });

    Ok(())
}
