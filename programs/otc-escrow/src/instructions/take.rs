use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{
        close_account, transfer_checked, CloseAccount, Mint, Token, TokenAccount, TransferChecked,
    },
};

use crate::errors::EscrowError;
use crate::state::{Escrow, ESCROW_SEED};

#[derive(Accounts)]
pub struct Take<'info> {
    /// The taker accepting the exchange terms
    #[account(mut)]
    pub taker: Signer<'info>,

    /// The original maker; receives Token B and the reclaimed rent
    #[account(mut)]
    pub maker: SystemAccount<'info>,

    /// Escrow record; validated against its PDA and stored terms, closed
    /// on success with rent returned to the maker
    #[account(
        mut,
        close = maker,
        has_one = maker @ EscrowError::Unauthorized,
        has_one = mint_a @ EscrowError::MintMismatch,
        has_one = mint_b @ EscrowError::MintMismatch,
        seeds = [ESCROW_SEED, maker.key().as_ref(), escrow.seed.to_le_bytes().as_ref()],
        bump = escrow.bump,
    )]
    pub escrow: Box<Account<'info, Escrow>>,

    /// Token A mint
    pub mint_a: Box<Account<'info, Mint>>,

    /// Token B mint
    pub mint_b: Box<Account<'info, Mint>>,

    /// Vault holding the maker's deposit (owned by the escrow PDA)
    #[account(
        mut,
        associated_token::mint = mint_a,
        associated_token::authority = escrow,
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    /// Taker's associated token account for Token A (receives the deposit)
    #[account(
        init_if_needed,
        payer = taker,
        associated_token::mint = mint_a,
        associated_token::authority = taker,
    )]
    pub taker_ata_a: Box<Account<'info, TokenAccount>>,

    /// Taker's associated token account for Token B (source of payment)
    #[account(
        mut,
        associated_token::mint = mint_b,
        associated_token::authority = taker,
    )]
    pub taker_ata_b: Box<Account<'info, TokenAccount>>,

    /// Maker's associated token account for Token B (receives payment).
    /// Created by the taker if absent; the maker need not be online.
    #[account(
        init_if_needed,
        payer = taker,
        associated_token::mint = mint_b,
        associated_token::authority = maker,
    )]
    pub maker_ata_b: Box<Account<'info, TokenAccount>>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> Take<'info> {
    /// Transfer the agreed amount of Token B from taker to maker
    pub fn pay_maker(&mut self) -> Result<()> {
        let cpi_accounts = TransferChecked {
            from: self.taker_ata_b.to_account_info(),
            mint: self.mint_b.to_account_info(),
            to: self.maker_ata_b.to_account_info(),
            authority: self.taker.to_account_info(),
        };
        let cpi_program = self.token_program.to_account_info();
        let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);

        transfer_checked(cpi_ctx, self.escrow.receive, self.mint_b.decimals)
    }

    /// Release the full vault balance to the taker, then close the vault
    /// with the escrow PDA signing; vault rent goes back to the maker
    pub fn withdraw_and_close_vault(&mut self) -> Result<()> {
        let signer_seeds: &[&[&[u8]]] = &[&[
            ESCROW_SEED,
            self.maker.key.as_ref(),
            &self.escrow.seed.to_le_bytes(),
            &[self.escrow.bump],
        ]];

        // Empty the vault to the taker
        let cpi_accounts = TransferChecked {
            from: self.vault.to_account_info(),
            mint: self.mint_a.to_account_info(),
            to: self.taker_ata_a.to_account_info(),
            authority: self.escrow.to_account_info(),
        };
        let cpi_program = self.token_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);

        transfer_checked(cpi_ctx, self.vault.amount, self.mint_a.decimals)?;

        // Close the vault account and return its rent to the maker
        let cpi_accounts = CloseAccount {
            account: self.vault.to_account_info(),
            destination: self.maker.to_account_info(),
            authority: self.escrow.to_account_info(),
        };
        let cpi_program = self.token_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);

        close_account(cpi_ctx)
    }
}

/// Handler for the take instruction
pub fn handler(ctx: Context<Take>) -> Result<()> {
    // Verify the taker can cover the maker's asking amount before any transfer
    require_gte!(
        ctx.accounts.taker_ata_b.amount,
        ctx.accounts.escrow.receive,
        EscrowError::InsufficientFunds
    );

    ctx.accounts.pay_maker()?;
    ctx.accounts.withdraw_and_close_vault()?;

    msg!("Escrow settled: vault released to {}", ctx.accounts.taker.key());
    Ok(())
}
