pub mod accrual;

use anchor_lang::prelude::*;

use crate::error::LedgerError;

/// Current cluster time as unsigned Unix seconds.
pub fn unix_now() -> Result<u64> {
    let ts = Clock::get()?.unix_timestamp;
    u64::try_from(ts).map_err(|_| error!(LedgerError::InvalidTimestamp))
}
