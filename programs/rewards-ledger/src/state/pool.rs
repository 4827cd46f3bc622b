use anchor_lang::prelude::*;

/// Global ledger configuration and pool lifecycle PDA.
#[account]
pub struct PoolState {
    /// Reward token mint.
    pub mint: Pubkey,
    /// Admin authority; gates pool initialization.
    pub admin: Pubkey,
    /// Controller authority (the custody/staking program's signer);
    /// gates enter/exit custody and may collect on behalf of claimants.
    pub controller: Pubkey,
    /// Address of the zero-copy record ledger account.
    pub ledger: Pubkey,
    /// Set once, when the pool is funded with the exact pool total.
    pub pool_initialized: bool,
    /// Lifetime sum of all rewards paid out of the vault.
    pub total_collected: u64,
}

impl PoolState {
    pub const SIZE: usize =
        32 + // mint
        32 + // admin
        32 + // controller
        32 + // ledger
        1 +  // pool_initialized
        8;   // total_collected
}
