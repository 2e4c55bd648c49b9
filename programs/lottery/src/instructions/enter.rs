use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::LOTTERY_SEED;
use crate::events::PlayerEntered;
use crate::state::Lottery;

/// Accounts required to enter the current round.
#[derive(Accounts)]
pub struct Enter<'info> {
    /// The player, who also funds the entry.
    #[account(mut)]
    pub player: Signer<'info>,

    /// Holds the pot between draws.
    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,

    pub system_program: Program<'info, System>,
}

/// Adds the signer to the current round.
///
/// The entry is validated and recorded first, then `amount` lamports move
/// from the player into the lottery account. A failed transfer aborts the
/// whole instruction, so the recorded entry never outlives it.
pub fn process_enter(ctx: Context<Enter>, amount: u64) -> Result<()> {
    let player = ctx.accounts.player.key();

    let lottery = &mut ctx.accounts.lottery;
    lottery.enter(player, amount)?;
    let pot = lottery.pot;
    let entries = lottery.players.len() as u32;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.player.to_account_info(),
                to: ctx.accounts.lottery.to_account_info(),
            },
        ),
        amount,
    )?;

    msg!("Player {} entered with {} lamports", player, amount);
    msg!("Pot: {} lamports across {} entries", pot, entries);

    emit!(PlayerEntered {
        player,
        amount,
        pot,
        entries,
    });

    Ok(())
}
