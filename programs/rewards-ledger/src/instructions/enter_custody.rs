use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::LedgerError;
use crate::state::{PoolState, RewardLedger};
use crate::utils::{self, accrual};

/// Custody callback from the controller: an asset entered staking custody.
///
/// Opens the accrual period for `claimant` and pays the one-time initial
/// unlock on the asset's first-ever entry. The controller has already
/// verified true ownership before calling.
pub fn enter_custody(ctx: Context<EnterCustody>, claimant: Pubkey, asset_id: u16) -> Result<()> {
    // Capture AccountInfo/bump before taking mutable borrows.
    let pool_state_ai = ctx.accounts.pool_state.to_account_info();
    let pool_state_bump = ctx.bumps.pool_state;

    let st = &mut ctx.accounts.pool_state;
    require_keys_eq!(
        ctx.accounts.controller.key(),
        st.controller,
        LedgerError::UnauthorizedController
    );
    require!(st.pool_initialized, LedgerError::PoolNotInitialized);
    accrual::check_asset_id(asset_id)?;

    let now = utils::unix_now()?;

    let (outcome, amount) = {
        let mut ledger = ctx.accounts.ledger.load_mut()?;
        let record = &mut ledger.records[asset_id as usize];
        let outcome = record.enter_custody(claimant, now)?;
        let amount = if outcome.initial_unlock_due {
            accrual::initial_unlock_amount(asset_id)?
        } else {
            0
        };
        (outcome, amount)
    };

    if amount > 0 {
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
    }

    emit!(CustodyEntered {
        claimant,
        asset_id,
        initial_unlock: amount,
        activated: outcome.activated,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EnterCustody<'info> {
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

    /// Destination for the initial unlock; must belong to the claimant.
    #[account(mut)]
    pub claimant_token_account: Account<'info, TokenAccount>,

    pub controller: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct CustodyEntered {
    pub claimant: Pubkey,
    pub asset_id: u16,
    pub initial_unlock: u64,
    pub activated: bool,
}
