//! Token-reward vesting ledger for a fixed 6000-asset collection.
//!
//! Each asset identifier carries a one-time initial unlock plus a
//! day-granular linear unlock over a 364-day horizon, paid from a
//! pre-funded vault. The staking controller drives custody transitions;
//! the recorded claimant and the controller may both collect accruals.

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use anchor_lang::prelude::*;
use anchor_spl::token::{self, TokenAccount, Transfer};

use error::LedgerError;
use instructions::*;

declare_id!("6kEjRiRNSU4ZEhnn8JpC6L9VRHz6oKvD9YzSP6bNZNWp");

#[program]
pub mod rewards_ledger {
    use super::*;

    /// Create the pool state, the vault, and adopt the zeroed record ledger.
    pub fn initialize(ctx: Context<Initialize>, controller: Pubkey) -> Result<()> {
        instructions::initialize::initialize(ctx, controller)
    }

    /// Admin funds the vault with the exact pool total, exactly once.
    pub fn initialize_pool(ctx: Context<InitializePool>) -> Result<()> {
        instructions::initialize_pool::initialize_pool(ctx)
    }

    /// Controller callback: asset entered custody; pays the one-time
    /// initial unlock on first-ever entry and opens the accrual period.
    pub fn enter_custody(
        ctx: Context<EnterCustody>,
        claimant: Pubkey,
        asset_id: u16,
    ) -> Result<()> {
        instructions::enter_custody::enter_custody(ctx, claimant, asset_id)
    }

    /// Controller callback: asset left custody; flushes accrued reward to
    /// the recorded claimant and closes the accrual period.
    pub fn exit_custody(
        ctx: Context<ExitCustody>,
        claimant: Pubkey,
        asset_id: u16,
    ) -> Result<()> {
        instructions::exit_custody::exit_custody(ctx, claimant, asset_id)
    }

    /// Collect accrued linear reward for one asset (claimant or controller).
    pub fn collect_rewards(ctx: Context<CollectRewards>, asset_id: u16) -> Result<()> {
        instructions::collect_rewards::collect_rewards(ctx, asset_id)
    }

    /// Sequential collection over a list of identifiers; the i-th remaining
    /// account is the recipient token account for `asset_ids[i]`. Empty
    /// input is a no-op; any per-identifier failure aborts the whole batch.
    pub fn collect_rewards_batch<'info>(
        ctx: Context<'_, '_, 'info, 'info, CollectRewardsBatch<'info>>,
        asset_ids: Vec<u16>,
    ) -> Result<()> {
        if asset_ids.is_empty() {
            return Ok(());
        }
        require!(
            ctx.remaining_accounts.len() == asset_ids.len(),
            LedgerError::BatchLengthMismatch
        );
        require!(
            ctx.accounts.pool_state.pool_initialized,
            LedgerError::PoolNotInitialized
        );

        let pool_state_ai = ctx.accounts.pool_state.to_account_info();
        let signer_seeds: &[&[&[u8]]] = &[&[b"pool_state", &[ctx.bumps.pool_state]]];
        let collector = ctx.accounts.collector.key();
        let controller = ctx.accounts.pool_state.controller;
        let mint = ctx.accounts.pool_state.mint;
        let now = utils::unix_now()?;

        for (i, &asset_id) in asset_ids.iter().enumerate() {
            utils::accrual::check_asset_id(asset_id)?;

            // Ledger borrow is scoped per identifier so the transfer CPI
            // below runs against fully committed record state.
            let (claimant, days, amount) = {
                let mut ledger = ctx.accounts.ledger.load_mut()?;
                let record = &mut ledger.records[asset_id as usize];
                require!(
                    collector == record.claimant || collector == controller,
                    LedgerError::Unauthorized
                );
                let claimant = record.claimant;
                let (days, amount) = record.collect(asset_id, now)?;
                (claimant, days, amount)
            };
            if amount == 0 {
                continue;
            }

            ctx.accounts.pool_state.total_collected = ctx
                .accounts
                .pool_state
                .total_collected
                .checked_add(amount)
                .ok_or(LedgerError::MathOverflow)?;

            let recipient_ai = &ctx.remaining_accounts[i];
            let recipient: Account<TokenAccount> = Account::try_from(recipient_ai)?;
            require_keys_eq!(recipient.mint, mint, LedgerError::InvalidTokenMint);
            require_keys_eq!(
                recipient.owner,
                claimant,
                LedgerError::InvalidRecipientTokenAccount
            );

            token::transfer(
                CpiContext::new_with_signer(
                    ctx.accounts.token_program.to_account_info(),
                    Transfer {
                        from: ctx.accounts.vault.to_account_info(),
                        to: recipient_ai.clone(),
                        authority: pool_state_ai.clone(),
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
        }

        Ok(())
    }

    /// Read-only pending-reward quote for one identifier.
    pub fn emit_pending_rewards(ctx: Context<EmitPendingRewards>, asset_id: u16) -> Result<()> {
        instructions::emit_pending_rewards::emit_pending_rewards(ctx, asset_id)
    }

    /// Read-only element-wise quotes plus a summed total.
    pub fn emit_pending_rewards_batch(
        ctx: Context<EmitPendingRewards>,
        asset_ids: Vec<u16>,
    ) -> Result<()> {
        instructions::emit_pending_rewards::emit_pending_rewards_batch(ctx, asset_ids)
    }
}
