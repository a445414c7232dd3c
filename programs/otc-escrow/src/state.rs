use anchor_lang::prelude::*;

/// Seed prefix for escrow PDA derivation
pub const ESCROW_SEED: &[u8] = b"escrow";

/// Escrow account that stores one agreement's terms
///
/// Exists exactly while the agreement is open: created by `make`,
/// closed by `take` or `refund`. No instruction mutates its fields.
#[account(discriminator = 1)]
#[derive(InitSpace)]
pub struct Escrow {
    /// Caller-chosen diversifier so one maker can run several escrows
    pub seed: u64,
    /// The maker's wallet address (creator of the escrow)
    pub maker: Pubkey,
    /// Token A mint address (the token the maker deposits)
    pub mint_a: Pubkey,
    /// Token B mint address (the token the maker wants back)
    pub mint_b: Pubkey,
    /// Amount of Token B the maker wants to receive
    pub receive: u64,
    /// Canonical bump for the escrow PDA, fixed at creation
    pub bump: u8,
}

impl Escrow {
    /// Derive the escrow address and canonical bump for (maker, seed).
    ///
    /// Deterministic and computable without ledger state; the resulting
    /// address is off-curve, so no private key can ever sign for it.
    pub fn find_address(maker: &Pubkey, seed: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[ESCROW_SEED, maker.as_ref(), &seed.to_le_bytes()],
            &crate::ID,
        )
    }
}
