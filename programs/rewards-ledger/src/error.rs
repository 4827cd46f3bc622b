use anchor_lang::prelude::*;

/// Custom error codes for the rewards ledger program.
#[error_code]
pub enum LedgerError {
    #[msg("Unauthorized: admin signature required")]
    UnauthorizedAdmin,

    #[msg("Unauthorized: controller signature required")]
    UnauthorizedController,

    #[msg("Unauthorized: caller is neither the recorded claimant nor the controller")]
    Unauthorized,

    #[msg("Asset identifier out of range")]
    InvalidAssetId,

    #[msg("Claimant must not be the default public key")]
    ZeroClaimant,

    #[msg("Asset is already in an active accrual period")]
    AlreadyActive,

    #[msg("Reward pool is already initialized")]
    PoolAlreadyInitialized,

    #[msg("Reward pool has not been initialized")]
    PoolNotInitialized,

    #[msg("Configured constants do not reconcile to the declared pool size")]
    PoolSizeMismatch,

    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Invalid timestamp")]
    InvalidTimestamp,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Recipient token account does not belong to the recorded claimant")]
    InvalidRecipientTokenAccount,

    #[msg("Ledger account does not match the registered ledger address")]
    InvalidLedgerAccount,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Batch identifiers and recipient accounts differ in length")]
    BatchLengthMismatch,
}
