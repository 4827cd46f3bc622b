use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::error::LedgerError;
use crate::state::{PoolState, RewardLedger};

pub fn initialize(ctx: Context<Initialize>, controller: Pubkey) -> Result<()> {
    require!(controller != Pubkey::default(), LedgerError::InvalidConfig);
    require!(
        controller != ctx.accounts.admin.key(),
        LedgerError::InvalidConfig
    );
    require!(
        controller != ctx.accounts.pool_state.key(),
        LedgerError::InvalidConfig
    );
    require!(controller != crate::ID, LedgerError::InvalidConfig);

    // The controller must be able to sign; block the program PDAs.
    let pool_state_key = ctx.accounts.pool_state.key();
    let (vault_pda, _) =
        Pubkey::find_program_address(&[b"vault", pool_state_key.as_ref()], &crate::ID);
    require!(controller != vault_pda, LedgerError::InvalidConfig);
    require!(
        controller != ctx.accounts.ledger.key(),
        LedgerError::InvalidConfig
    );

    // Adopt the pre-created, zeroed record ledger: every record starts
    // inactive with lifetime counters at zero.
    ctx.accounts.ledger.load_init()?;

    let st = &mut ctx.accounts.pool_state;
    st.mint = ctx.accounts.mint.key();
    st.admin = ctx.accounts.admin.key();
    st.controller = controller;
    st.ledger = ctx.accounts.ledger.key();
    st.pool_initialized = false;
    st.total_collected = 0;

    emit!(LedgerInitialized {
        mint: st.mint,
        admin: st.admin,
        controller: st.controller,
        ledger: st.ledger,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + PoolState::SIZE,
        seeds = [b"pool_state"],
        bump
    )]
    pub pool_state: Account<'info, PoolState>,

    /// Record ledger, created and zeroed by the client (too large for an
    /// in-program allocation).
    #[account(zero)]
    pub ledger: AccountLoader<'info, RewardLedger>,

    #[account(
        init,
        payer = admin,
        token::mint = mint,
        token::authority = pool_state,
        seeds = [b"vault", pool_state.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct LedgerInitialized {
    pub mint: Pubkey,
    pub admin: Pubkey,
    pub controller: Pubkey,
    pub ledger: Pubkey,
}
