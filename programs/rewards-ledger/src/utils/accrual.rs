//! Day-truncated linear accrual math.
//!
//! Pure functions over record fields; the ledger state itself lives in
//! `state::records`. Rules:
//! - elapsed days = floor((now - last_collection_ts) / 86 400); partial days
//!   never count
//! - elapsed days are clamped so lifetime days never exceed the 364-day
//!   horizon
//! - amount = elapsed_days * daily unlock * allocation multiplier (1x or 10x)

use crate::constants::{
    DAILY_LINEAR_UNLOCK, INITIAL_UNLOCK, PER_UNIT_ALLOCATION, SECONDS_PER_DAY, TOTAL_ASSETS,
    UNIQUE_ALLOCATION_MULTIPLIER, UNIQUE_ASSET_IDS, VESTING_PERIOD_DAYS,
};
use crate::error::LedgerError;

/// Reject identifiers outside the fixed collection range `[0, 6000)`.
pub fn check_asset_id(asset_id: u16) -> Result<(), LedgerError> {
    if (asset_id as usize) < TOTAL_ASSETS {
        Ok(())
    } else {
        Err(LedgerError::InvalidAssetId)
    }
}

/// True if `asset_id` belongs to the fixed 13-member high-allocation subset.
pub fn is_unique_asset(asset_id: u16) -> bool {
    UNIQUE_ASSET_IDS.contains(&asset_id)
}

/// Allocation multiplier for an identifier: 10 for unique assets, else 1.
pub fn allocation_multiplier(asset_id: u16) -> u64 {
    if is_unique_asset(asset_id) {
        UNIQUE_ALLOCATION_MULTIPLIER
    } else {
        1
    }
}

/// One-time initial unlock owed to `asset_id` on first-ever custody entry.
pub fn initial_unlock_amount(asset_id: u16) -> Result<u64, LedgerError> {
    INITIAL_UNLOCK
        .checked_mul(allocation_multiplier(asset_id))
        .ok_or(LedgerError::MathOverflow)
}

/// Whole vesting days elapsed since the last collection, and the linear
/// reward they represent. Returns `(0, 0)` for an inactive record
/// (`last_collection_ts == 0`) or an exhausted horizon.
pub fn linear_accrual(
    days_collected: u16,
    last_collection_ts: u64,
    asset_id: u16,
    now: u64,
) -> Result<(u16, u64), LedgerError> {
    if days_collected >= VESTING_PERIOD_DAYS {
        return Ok((0, 0));
    }
    if last_collection_ts == 0 {
        return Ok((0, 0));
    }

    let elapsed_secs = now
        .checked_sub(last_collection_ts)
        .ok_or(LedgerError::InvalidTimestamp)?;
    let remaining = (VESTING_PERIOD_DAYS - days_collected) as u64;
    let elapsed_days = (elapsed_secs / SECONDS_PER_DAY).min(remaining) as u16;

    let amount = (elapsed_days as u64)
        .checked_mul(DAILY_LINEAR_UNLOCK)
        .ok_or(LedgerError::MathOverflow)?
        .checked_mul(allocation_multiplier(asset_id))
        .ok_or(LedgerError::MathOverflow)?;

    Ok((elapsed_days, amount))
}

/// Still-unpaid reward for an identifier, broken into its components.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingRewards {
    /// The one-time initial unlock, zero once paid.
    pub initial_unlock: u64,
    /// Linear accrual since the last collection boundary.
    pub linear: u64,
    /// Sum of the two.
    pub total: u64,
}

/// Total still-unpaid reward for an identifier: the initial unlock (if never
/// paid) plus whatever the linear schedule has accrued. Read-only.
pub fn pending_rewards(
    days_collected: u16,
    last_collection_ts: u64,
    initial_unlock_collected: bool,
    asset_id: u16,
    now: u64,
) -> Result<PendingRewards, LedgerError> {
    let initial_unlock = if initial_unlock_collected {
        0
    } else {
        initial_unlock_amount(asset_id)?
    };
    let (_, linear) = linear_accrual(days_collected, last_collection_ts, asset_id, now)?;
    let total = initial_unlock
        .checked_add(linear)
        .ok_or(LedgerError::MathOverflow)?;
    Ok(PendingRewards {
        initial_unlock,
        linear,
        total,
    })
}

/// Recompute the pool total from first principles. The funding instruction
/// compares this against the declared constant before any tokens move.
pub fn expected_pool_size() -> Result<u64, LedgerError> {
    let standard_units = (TOTAL_ASSETS - UNIQUE_ASSET_IDS.len()) as u64;
    let unique_units = (UNIQUE_ASSET_IDS.len() as u64)
        .checked_mul(UNIQUE_ALLOCATION_MULTIPLIER)
        .ok_or(LedgerError::MathOverflow)?;
    standard_units
        .checked_add(unique_units)
        .ok_or(LedgerError::MathOverflow)?
        .checked_mul(PER_UNIT_ALLOCATION)
        .ok_or(LedgerError::MathOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TOTAL_REWARD_POOL;

    const DAY: u64 = SECONDS_PER_DAY;

    #[test]
    fn asset_ids_past_the_collection_are_rejected() {
        // Scenario: identifier 6000 is one past the last valid id.
        assert!(check_asset_id(0).is_ok());
        assert!(check_asset_id(5999).is_ok());
        assert!(matches!(
            check_asset_id(6000),
            Err(LedgerError::InvalidAssetId)
        ));
        assert!(matches!(
            check_asset_id(u16::MAX),
            Err(LedgerError::InvalidAssetId)
        ));
    }

    #[test]
    fn multiplier_is_10x_for_unique_ids_only() {
        for &id in UNIQUE_ASSET_IDS.iter() {
            assert_eq!(allocation_multiplier(id), 10);
        }
        assert_eq!(allocation_multiplier(0), 1);
        assert_eq!(allocation_multiplier(100), 1);
        assert_eq!(allocation_multiplier(5999), 1);
        // 931 is in the unique subset.
        assert_eq!(allocation_multiplier(931), 10);
        assert_eq!(allocation_multiplier(930), 1);
    }

    #[test]
    fn inactive_record_accrues_nothing() {
        assert_eq!(linear_accrual(0, 0, 100, 1_000 * DAY).unwrap(), (0, 0));
    }

    #[test]
    fn exhausted_horizon_accrues_nothing() {
        let r = linear_accrual(VESTING_PERIOD_DAYS, 1_000, 100, 1_000 + 50 * DAY).unwrap();
        assert_eq!(r, (0, 0));
    }

    #[test]
    fn partial_days_truncate_to_zero() {
        let start = 10 * DAY;
        assert_eq!(linear_accrual(0, start, 100, start + DAY - 1).unwrap(), (0, 0));
        assert_eq!(
            linear_accrual(0, start, 100, start + DAY).unwrap(),
            (1, DAILY_LINEAR_UNLOCK)
        );
    }

    #[test]
    fn ten_days_standard_asset() {
        // Scenario: identifier 100 staked, 10 days elapse.
        let start = 123 * DAY + 4_567;
        let (days, amount) = linear_accrual(0, start, 100, start + 10 * DAY).unwrap();
        assert_eq!(days, 10);
        assert_eq!(amount, 10 * DAILY_LINEAR_UNLOCK);
    }

    #[test]
    fn five_days_unique_asset() {
        // Scenario: identifier 931 (10x) staked, 5 days elapse.
        let start = 7 * DAY;
        let (days, amount) = linear_accrual(0, start, 931, start + 5 * DAY).unwrap();
        assert_eq!(days, 5);
        assert_eq!(amount, 5 * DAILY_LINEAR_UNLOCK * 10);
    }

    #[test]
    fn elapsed_days_clamp_at_horizon() {
        let start = DAY;
        // Far beyond the horizon from a fresh record.
        let (days, amount) = linear_accrual(0, start, 100, start + 1_000 * DAY).unwrap();
        assert_eq!(days, VESTING_PERIOD_DAYS);
        assert_eq!(amount, VESTING_PERIOD_DAYS as u64 * DAILY_LINEAR_UNLOCK);

        // Partially consumed horizon clamps to the remainder.
        let (days, amount) = linear_accrual(360, start, 100, start + 1_000 * DAY).unwrap();
        assert_eq!(days, 4);
        assert_eq!(amount, 4 * DAILY_LINEAR_UNLOCK);
    }

    #[test]
    fn clock_behind_last_collection_is_rejected() {
        let r = linear_accrual(0, 10 * DAY, 100, 10 * DAY - 1);
        assert!(matches!(r, Err(LedgerError::InvalidTimestamp)));
    }

    #[test]
    fn pending_includes_unpaid_initial_unlock() {
        let start = 2 * DAY;
        // Inactive, never entered custody: only the initial unlock is pending.
        assert_eq!(
            pending_rewards(0, 0, false, 100, start).unwrap(),
            PendingRewards {
                initial_unlock: INITIAL_UNLOCK,
                linear: 0,
                total: INITIAL_UNLOCK,
            }
        );
        assert_eq!(
            pending_rewards(0, 0, false, 931, start).unwrap().total,
            INITIAL_UNLOCK * 10
        );
        // Active with the initial unlock already paid: linear only.
        assert_eq!(
            pending_rewards(0, start, true, 100, start + 3 * DAY).unwrap(),
            PendingRewards {
                initial_unlock: 0,
                linear: 3 * DAILY_LINEAR_UNLOCK,
                total: 3 * DAILY_LINEAR_UNLOCK,
            }
        );
        // Active with the flag still unset: both components.
        assert_eq!(
            pending_rewards(0, start, false, 100, start + 3 * DAY)
                .unwrap()
                .total,
            INITIAL_UNLOCK + 3 * DAILY_LINEAR_UNLOCK
        );
    }

    #[test]
    fn pending_sums_are_additive_over_identifier_sets() {
        let start = 5 * DAY;
        let now = start + 9 * DAY;
        let ids: [u16; 4] = [100, 931, 100, 5999];
        let mut total: u64 = 0;
        for &id in ids.iter() {
            total += pending_rewards(0, start, false, id, now).unwrap().total;
        }
        // Duplicates are summed as given; no uniqueness filtering.
        let expected = 2 * (INITIAL_UNLOCK + 9 * DAILY_LINEAR_UNLOCK) // two entries for 100...
            + (INITIAL_UNLOCK + 9 * DAILY_LINEAR_UNLOCK) * 10 // 931 at 10x
            + (INITIAL_UNLOCK + 9 * DAILY_LINEAR_UNLOCK); // 5999
        assert_eq!(total, expected);
    }

    #[test]
    fn expected_pool_size_matches_declared_constant() {
        assert_eq!(expected_pool_size().unwrap(), TOTAL_REWARD_POOL);
    }
}
