use anchor_lang::prelude::*;

mod errors;
mod instructions;
mod state;

use instructions::*;

declare_id!("2hznKBqeb9whtoQDi7sjN9t8UiKomckkNPpyD42FMmBo");

#[program]
pub mod otc_escrow {
    use super::*;

    /// Open an escrow: maker locks Token A in the vault and sets exchange terms
    #[instruction(discriminator = 0)]
    pub fn make(ctx: Context<Make>, seed: u64, receive: u64, amount: u64) -> Result<()> {
        instructions::make::handler(ctx, seed, receive, amount)
    }

    /// Settle the escrow: taker pays Token B to the maker, receives the vaulted Token A
    #[instruction(discriminator = 1)]
    pub fn take(ctx: Context<Take>) -> Result<()> {
        instructions::take::handler(ctx)
    }

    /// Cancel the escrow: maker reclaims the vaulted Token A
    #[instruction(discriminator = 2)]
    pub fn refund(ctx: Context<Refund>) -> Result<()> {
        instructions::refund::handler(ctx)
    }
}
