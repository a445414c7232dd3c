use anchor_lang::prelude::*;

#[error_code]
pub enum EscrowError {
    #[msg("Invalid amount: amount must be greater than zero")]
    InvalidAmount,
    #[msg("Insufficient funds: source balance is below the required transfer")]
    InsufficientFunds,
    /// Raised by the runtime before the handler runs: `init` rejects an
    /// escrow PDA that is already allocated for this (maker, seed).
    #[msg("Duplicate seed: an open escrow already exists for this maker and seed")]
    DuplicateSeed,
    /// Raised by account validation: a settled escrow no longer exists at
    /// its PDA, so loading the record fails.
    #[msg("Already resolved: no open escrow exists at this address")]
    AlreadyResolved,
    #[msg("Unauthorized: signer does not match the escrow maker")]
    Unauthorized,
    #[msg("Mint mismatch: supplied mint does not match the escrow terms")]
    MintMismatch,
}
