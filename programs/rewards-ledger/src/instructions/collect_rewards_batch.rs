use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::error::LedgerError;
use crate::state::{PoolState, RewardLedger};

// NOTE: the `collect_rewards_batch` handler logic lives in `src/lib.rs`: it
// walks `remaining_accounts` (one recipient token account per identifier),
// which needs the unified `'info` Context signature.

#[derive(Accounts)]
pub struct CollectRewardsBatch<'info> {
    #[account(mut, seeds = [b"pool_state"], bump)]
    pub pool_state: Account<'info, PoolState>,

    #[account(mut, address = pool_state.ledger @ LedgerError::InvalidLedgerAccount)]
    pub ledger: AccountLoader<'info, RewardLedger>,

    #[account(
        mut,
        seeds = [b"vault", pool_state.key().as_ref()],
        bump,
        constraint = vault.mint == pool_state.mint @ LedgerError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    /// Either the recorded claimant of every identifier in the batch, or
    /// the controller.
    pub collector: Signer<'info>,

    pub token_program: Program<'info, Token>,
}
