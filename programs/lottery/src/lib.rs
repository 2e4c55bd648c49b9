use anchor_lang::prelude::*;
use instructions::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod randomness;
pub mod state;

declare_id!("Bzqf4U3ut9ZfC3isL2ojt2bRWmrctpb8PUknLgEXyFJ7");

#[program]
pub mod lottery {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, minimum_entry: u64) -> Result<()> {
        process_initialize(ctx, minimum_entry)
    }

    pub fn enter(ctx: Context<Enter>, amount: u64) -> Result<()> {
        process_enter(ctx, amount)
    }

    pub fn pick_winner<'info>(
        ctx: Context<'_, '_, '_, 'info, PickWinner<'info>>,
    ) -> Result<()> {
        process_pick_winner(ctx)
    }

    pub fn get_players(ctx: Context<ReadLottery>) -> Result<Vec<Pubkey>> {
        process_get_players(ctx)
    }

    pub fn manager(ctx: Context<ReadLottery>) -> Result<Pubkey> {
        process_manager(ctx)
    }
}
