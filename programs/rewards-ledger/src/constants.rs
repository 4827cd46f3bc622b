//! Program-wide constants.
//!
//! The reward schedule is fixed at build time: every asset earns a one-time
//! initial unlock plus a daily linear unlock over [`VESTING_PERIOD_DAYS`].
//! The 13 identifiers in [`UNIQUE_ASSET_IDS`] earn at 10x the standard rate.
//! The pool total is derived from these numbers and re-checked before funding.

/// Number of assets in the collection (identifiers 0..6000).
pub const TOTAL_ASSETS: usize = 6000;

/// The 13 uniquely-allocated identifiers (static membership, never configured).
pub const UNIQUE_ASSET_IDS: [u16; 13] = [
    88, 457, 931, 1202, 1788, 2215, 2644, 3107, 3503, 4166, 4757, 5289, 5941,
];

/// Reward multiplier applied to uniquely-allocated identifiers.
pub const UNIQUE_ALLOCATION_MULTIPLIER: u64 = 10;

/// Linear vesting horizon in whole days.
pub const VESTING_PERIOD_DAYS: u16 = 364;

/// Seconds per day (UTC).
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Base units per reward token (9 decimals).
pub const ONE_TOKEN: u64 = 1_000_000_000;

/// Linear unlock per elapsed day for a standard (1x) asset.
pub const DAILY_LINEAR_UNLOCK: u64 = 10 * ONE_TOKEN;

/// One-time unlock paid on an asset's first-ever custody entry, for a
/// standard (1x) asset. Equal to the full linear total, so it is exactly
/// half of the per-asset lifetime allocation.
pub const INITIAL_UNLOCK: u64 = VESTING_PERIOD_DAYS as u64 * DAILY_LINEAR_UNLOCK;

/// Lifetime allocation for a standard (1x) asset: initial + linear.
pub const PER_UNIT_ALLOCATION: u64 =
    INITIAL_UNLOCK + VESTING_PERIOD_DAYS as u64 * DAILY_LINEAR_UNLOCK;

/// Total reward pool across the collection: 5987 assets at 1x plus 13 at 10x.
pub const TOTAL_REWARD_POOL: u64 = ((TOTAL_ASSETS - UNIQUE_ASSET_IDS.len()) as u64
    + UNIQUE_ASSET_IDS.len() as u64 * UNIQUE_ALLOCATION_MULTIPLIER)
    * PER_UNIT_ALLOCATION;

// Pool arithmetic must reconcile: 6117 weighted units of 7280 tokens each.
const _: () = assert!(TOTAL_REWARD_POOL == 44_531_760 * ONE_TOKEN);
const _: () = assert!(INITIAL_UNLOCK * 2 == PER_UNIT_ALLOCATION);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_ids_are_in_range_and_sorted() {
        let mut prev = None;
        for &id in UNIQUE_ASSET_IDS.iter() {
            assert!((id as usize) < TOTAL_ASSETS);
            if let Some(p) = prev {
                assert!(id > p, "duplicate or unsorted unique id {}", id);
            }
            prev = Some(id);
        }
    }

    #[test]
    fn pool_total_reconciles() {
        let standard = (TOTAL_ASSETS - UNIQUE_ASSET_IDS.len()) as u64;
        let unique = UNIQUE_ASSET_IDS.len() as u64 * UNIQUE_ALLOCATION_MULTIPLIER;
        assert_eq!(TOTAL_REWARD_POOL, (standard + unique) * PER_UNIT_ALLOCATION);
        assert_eq!(standard + unique, 6_117);
    }

    #[test]
    fn initial_unlock_is_half_of_lifetime_allocation() {
        assert_eq!(INITIAL_UNLOCK, VESTING_PERIOD_DAYS as u64 * DAILY_LINEAR_UNLOCK);
        assert_eq!(PER_UNIT_ALLOCATION, 2 * INITIAL_UNLOCK);
    }
}
