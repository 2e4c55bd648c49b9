use anchor_lang::prelude::*;

use crate::constants::LOTTERY_SEED;
use crate::state::Lottery;

/// Read-only view of the lottery; anyone may call.
#[derive(Accounts)]
pub struct ReadLottery<'info> {
    #[account(
        seeds = [LOTTERY_SEED],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,
}

pub fn process_get_players(ctx: Context<ReadLottery>) -> Result<Vec<Pubkey>> {
    Ok(ctx.accounts.lottery.players.clone())
}

pub fn process_manager(ctx: Context<ReadLottery>) -> Result<Pubkey> {
    Ok(ctx.accounts.lottery.operator)
}
