use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::LedgerError;
use crate::state::{PoolState, RewardLedger};
use crate::utils::{self, accrual};

/// Collect accrued linear reward for one asset. Callable by the recorded
/// claimant or by the controller; the payout always goes to the recorded
/// claimant. Zero accrual is an idempotent no-op.
pub fn collect_rewards(ctx: Context<CollectRewards>, asset_id: u16) -> Result<()> {
    let pool_state_ai = ctx.accounts.pool_state.to_account_info();
    let pool_state_bump = ctx.bumps.pool_state;

    let st = &mut ctx.accounts.pool_state;
    require!(st.pool_initialized, LedgerError::PoolNotInitialized);
    accrual::check_asset_id(asset_id)?;

    let now = utils::unix_now()?;
    let collector = ctx.accounts.collector.key();

    let (claimant, days, amount) = {
        let mut ledger = ctx.accounts.ledger.load_mut()?;
        let record = &mut ledger.records[asset_id as usize];
        require!(
            collector == record.claimant || collector == st.controller,
            LedgerError::Unauthorized
        );
        let claimant = record.claimant;
        let (days, amount) = record.collect(asset_id, now)?;
        (claimant, days, amount)
    };

    if amount == 0 {
        return Ok(());
    }

    require_keys_eq!(
        ctx.accounts.claimant_token_account.mint,
        st.mint,
        LedgerError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.claimant_token_account.owner,
        claimant,
        LedgerError::InvalidRecipientTokenAccount
    );
    require!(
        ctx.accounts.vault.amount >= amount,
        LedgerError::InsufficientVaultBalance
    );

    st.total_collected = st
        .total_collected
        .checked_add(amount)
        .ok_or(LedgerError::MathOverflow)?;

    // Record and pool state are committed above; the transfer is last.
    let signer_seeds: &[&[&[u8]]] = &[&[b"pool_state", &[pool_state_bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.claimant_token_account.to_account_info(),
                authority: pool_state_ai,
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(RewardsCollected {
        claimant,
        asset_id,
        days,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CollectRewards<'info> {
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

    /// Destination for the reward; must belong to the recorded claimant.
    #[account(mut)]
    pub claimant_token_account: Account<'info, TokenAccount>,

    /// Either the recorded claimant or the controller.
    pub collector: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct RewardsCollected {
    pub claimant: Pubkey,
    pub asset_id: u16,
    pub days: u16,
    pub amount: u64,
}
