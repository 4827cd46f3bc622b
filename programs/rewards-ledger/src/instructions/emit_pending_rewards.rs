use anchor_lang::prelude::*;

use crate::error::LedgerError;
use crate::state::{PoolState, RewardLedger, VestingRecord};
use crate::utils::{self, accrual};

/// Read-only quote of the still-unpaid reward for one identifier: the
/// initial unlock (if never paid) plus the pending linear accrual.
pub fn emit_pending_rewards(ctx: Context<EmitPendingRewards>, asset_id: u16) -> Result<()> {
    accrual::check_asset_id(asset_id)?;

    let now = utils::unix_now()?;
    let ledger = ctx.accounts.ledger.load()?;
    let record = &ledger.records[asset_id as usize];

    emit!(quote_for(record, asset_id, now)?);

    Ok(())
}

/// Element-wise quotes plus a summed total. Duplicate identifiers are
/// quoted and summed as given; an empty list totals zero.
pub fn emit_pending_rewards_batch(
    ctx: Context<EmitPendingRewards>,
    asset_ids: Vec<u16>,
) -> Result<()> {
    let now = utils::unix_now()?;
    let ledger = ctx.accounts.ledger.load()?;

    let mut total: u64 = 0;
    for &asset_id in asset_ids.iter() {
        accrual::check_asset_id(asset_id)?;
        let quote = quote_for(&ledger.records[asset_id as usize], asset_id, now)?;
        total = total
            .checked_add(quote.total)
            .ok_or(LedgerError::MathOverflow)?;
        emit!(quote);
    }

    emit!(PendingRewardsBatchTotal {
        count: asset_ids.len() as u32,
        total,
    });

    Ok(())
}

fn quote_for(record: &VestingRecord, asset_id: u16, now: u64) -> Result<PendingRewardsQuote> {
    let pending = accrual::pending_rewards(
        record.days_collected,
        record.last_collection_ts,
        record.initial_unlock_collected != 0,
        asset_id,
        now,
    )?;
    Ok(PendingRewardsQuote {
        asset_id,
        claimant: record.claimant,
        initial_unlock: pending.initial_unlock,
        linear: pending.linear,
        total: pending.total,
    })
}

#[derive(Accounts)]
pub struct EmitPendingRewards<'info> {
    #[account(seeds = [b"pool_state"], bump)]
    pub pool_state: Account<'info, PoolState>,

    #[account(address = pool_state.ledger @ LedgerError::InvalidLedgerAccount)]
    pub ledger: AccountLoader<'info, RewardLedger>,
}

#[event]
pub struct PendingRewardsQuote {
    pub asset_id: u16,
    pub claimant: Pubkey,
    pub initial_unlock: u64,
    pub linear: u64,
    pub total: u64,
}

#[event]
pub struct PendingRewardsBatchTotal {
    pub count: u32,
    pub total: u64,
}
