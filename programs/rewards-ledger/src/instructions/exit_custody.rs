use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::LedgerError;
use crate::state::{PoolState, RewardLedger};
use crate::utils::{self, accrual};

/// Custody callback from the controller: an asset left staking custody.
///
/// Flushes accrued linear reward to the recorded claimant, then closes the
/// accrual period. The caller-supplied `claimant` is not cross-checked
/// against the record: the controller owns custody verification, and the
/// payout always goes to the recorded claimant regardless.
pub fn exit_custody(ctx: Context<ExitCustody>, _claimant: Pubkey, asset_id: u16) -> Result<()> {
    let pool_state_ai = ctx.accounts.pool_state.to_account_info();
    let pool_state_bump = ctx.bumps.pool_state;

    let st = &mut ctx.accounts.pool_state;
    require_keys_eq!(
        ctx.accounts.controller.key(),
        st.controller,
        LedgerError::UnauthorizedController
    );
    accrual::check_asset_id(asset_id)?;

    let now = utils::unix_now()?;

    let (recorded_claimant, days, amount) = {
        let mut ledger = ctx.accounts.ledger.load_mut()?;
        let record = &mut ledger.records[asset_id as usize];
        let recorded_claimant = record.claimant;
        let (days, amount) = record.exit_custody(asset_id, now)?;
        (recorded_claimant, days, amount)
    };

    if amount > 0 {
        require_keys_eq!(
            ctx.accounts.claimant_token_account.mint,
            st.mint,
            LedgerError::InvalidTokenMint
        );
        require_keys_eq!(
            ctx.accounts.claimant_token_account.owner,
            recorded_claimant,
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
    }

    emit!(CustodyExited {
        claimant: recorded_claimant,
        asset_id,
        days,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ExitCustody<'info> {
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

    /// Destination for the flushed reward; must belong to the recorded
    /// claimant when a payout occurs.
    #[account(mut)]
    pub claimant_token_account: Account<'info, TokenAccount>,

    pub controller: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct CustodyExited {
    pub claimant: Pubkey,
    pub asset_id: u16,
    pub days: u16,
    pub amount: u64,
}
