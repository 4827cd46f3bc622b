use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::TOTAL_REWARD_POOL;
use crate::error::LedgerError;
use crate::state::PoolState;
use crate::utils::accrual;

/// Fund the reward pool, exactly once, with the exact pool total pulled from
/// the admin's token account.
pub fn initialize_pool(ctx: Context<InitializePool>) -> Result<()> {
    let st = &mut ctx.accounts.pool_state;
    require_keys_eq!(
        ctx.accounts.admin.key(),
        st.admin,
        LedgerError::UnauthorizedAdmin
    );
    require!(!st.pool_initialized, LedgerError::PoolAlreadyInitialized);

    // Reconcile the schedule arithmetic against the declared pool total
    // before any tokens move.
    require!(
        accrual::expected_pool_size()? == TOTAL_REWARD_POOL,
        LedgerError::PoolSizeMismatch
    );

    require_keys_eq!(
        ctx.accounts.admin_token_account.mint,
        st.mint,
        LedgerError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.admin_token_account.owner,
        ctx.accounts.admin.key(),
        LedgerError::InvalidTokenAccount
    );

    // Flag committed before the transfer CPI.
    st.pool_initialized = true;

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.admin_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.admin.to_account_info(),
            },
        ),
        TOTAL_REWARD_POOL,
    )?;

    emit!(PoolInitialized {
        admin: ctx.accounts.pool_state.admin,
        amount: TOTAL_REWARD_POOL,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializePool<'info> {
    #[account(mut, seeds = [b"pool_state"], bump)]
    pub pool_state: Account<'info, PoolState>,

    #[account(
        mut,
        seeds = [b"vault", pool_state.key().as_ref()],
        bump,
        constraint = vault.mint == pool_state.mint @ LedgerError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin_token_account: Account<'info, TokenAccount>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct PoolInitialized {
    pub admin: Pubkey,
    pub amount: u64,
}
