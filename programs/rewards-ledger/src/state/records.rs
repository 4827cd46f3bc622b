//! Per-asset vesting records and their state transitions.
//!
//! One packed record per identifier, held in a single zero-copy account.
//! A record is *active* while its asset sits in custody; both `claimant`
//! and `last_collection_ts` are set on entry and cleared together on exit.
//! `days_collected` and `initial_unlock_collected` are lifetime values and
//! survive any number of custody cycles.

use anchor_lang::prelude::*;

use crate::constants::{SECONDS_PER_DAY, TOTAL_ASSETS, VESTING_PERIOD_DAYS};
use crate::error::LedgerError;
use crate::utils::accrual;

/// Packed accrual state for a single asset identifier (48 bytes).
#[zero_copy]
pub struct VestingRecord {
    /// Current claimant; `Pubkey::default()` while inactive.
    pub claimant: Pubkey,
    /// Unix seconds of the last whole-day collection boundary; `0` while
    /// inactive. Only ever advances by whole-day multiples during a period.
    pub last_collection_ts: u64,
    /// Lifetime whole days collected, capped at the 364-day horizon.
    pub days_collected: u16,
    /// 1 once the one-time initial unlock has been paid; never reset.
    pub initial_unlock_collected: u8,
    pub _padding: [u8; 5],
}

/// Result of a custody-entry transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnterOutcome {
    /// The one-time initial unlock became due on this entry.
    pub initial_unlock_due: bool,
    /// An accrual period was opened (false once the horizon is exhausted).
    pub activated: bool,
}

impl VestingRecord {
    pub fn is_active(&self) -> bool {
        self.claimant != Pubkey::default() && self.last_collection_ts != 0
    }

    /// Open an accrual period for `claimant` at time `now`.
    ///
    /// Flips the initial-unlock flag on the first-ever entry and reports it
    /// as due; the caller pays it after committing state. When the horizon
    /// is already exhausted the period is not re-opened.
    pub fn enter_custody(
        &mut self,
        claimant: Pubkey,
        now: u64,
    ) -> std::result::Result<EnterOutcome, LedgerError> {
        if claimant == Pubkey::default() {
            return Err(LedgerError::ZeroClaimant);
        }
        // Guard both fields: claimant and timestamp are zero or set together.
        if self.claimant != Pubkey::default() || self.last_collection_ts != 0 {
            return Err(LedgerError::AlreadyActive);
        }

        let initial_unlock_due = self.initial_unlock_collected == 0;
        if initial_unlock_due {
            self.initial_unlock_collected = 1;
        }

        if self.days_collected >= VESTING_PERIOD_DAYS {
            return Ok(EnterOutcome {
                initial_unlock_due,
                activated: false,
            });
        }

        self.claimant = claimant;
        self.last_collection_ts = now;
        Ok(EnterOutcome {
            initial_unlock_due,
            activated: true,
        })
    }

    /// Collect whole-day linear accrual up to `now`.
    ///
    /// Advances `last_collection_ts` by the collected days only — never
    /// snapped to `now` — so day boundaries stay exact across collections.
    /// Zero accrual mutates nothing. Returns `(days, amount)`.
    pub fn collect(
        &mut self,
        asset_id: u16,
        now: u64,
    ) -> std::result::Result<(u16, u64), LedgerError> {
        let (days, amount) =
            accrual::linear_accrual(self.days_collected, self.last_collection_ts, asset_id, now)?;
        if amount == 0 {
            return Ok((0, 0));
        }

        self.days_collected = self
            .days_collected
            .checked_add(days)
            .ok_or(LedgerError::MathOverflow)?;
        self.last_collection_ts = self
            .last_collection_ts
            .checked_add(days as u64 * SECONDS_PER_DAY)
            .ok_or(LedgerError::MathOverflow)?;
        Ok((days, amount))
    }

    /// Close the accrual period, flushing any accrued linear reward first.
    ///
    /// With an exhausted horizon the flush is skipped. Closing an inactive
    /// record is a harmless no-op. Returns the flushed `(days, amount)`.
    pub fn exit_custody(
        &mut self,
        asset_id: u16,
        now: u64,
    ) -> std::result::Result<(u16, u64), LedgerError> {
        let flushed = if self.days_collected >= VESTING_PERIOD_DAYS {
            (0, 0)
        } else {
            self.collect(asset_id, now)?
        };
        self.claimant = Pubkey::default();
        self.last_collection_ts = 0;
        Ok(flushed)
    }
}

/// Zero-copy account holding every asset's vesting record, indexed by
/// identifier. Pre-created and zeroed by the client, adopted at initialize.
#[account(zero_copy)]
pub struct RewardLedger {
    pub records: [VestingRecord; TOTAL_ASSETS],
}

impl RewardLedger {
    pub const SPACE: usize = 8 + core::mem::size_of::<RewardLedger>();
}
