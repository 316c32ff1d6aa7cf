use anchor_lang::prelude::*;

use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{
        close_account, transfer_checked, CloseAccount, Mint, TokenAccount, TokenInterface,
        TransferChecked,
    },
};

use crate::{state::Offer, utils::transfer_tokens};

pub fn send_wanted_tokens_to_maker(ctx: &Context<TakeOffer>) -> Result<()> {
    transfer_tokens(
        &ctx.accounts.taker_token_account_b,
        &ctx.accounts.maker_token_account_b,
        &ctx.accounts.offer.token_b_wanted_amount,
        &ctx.accounts.token_mint_b,
        &ctx.accounts.taker,
        &ctx.accounts.token_program,
    )
}

pub fn withdraw_from_vault_and_close_it(ctx: Context<TakeOffer>) -> Result<()> {
    // The vault's authority is the offer PDA, so the withdrawal is signed
    // with the offer's seeds.
    let seeds = &[
        b"offer",
        ctx.accounts.maker.key.as_ref(),
        &ctx.accounts.offer.id.to_le_bytes()[..],
        &[ctx.accounts.offer.bump],
    ];
    let signer_seeds = [&seeds[..]];

    let accounts = TransferChecked {
        from: ctx.accounts.vault.to_account_info(),
        to: ctx.accounts.taker_token_account_a.to_account_info(),
        authority: ctx.accounts.offer.to_account_info(),
        mint: ctx.accounts.token_mint_a.to_account_info(),
    };

    let cpi_context = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        accounts,
        &signer_seeds,
    );

    transfer_checked(
        cpi_context,
        ctx.accounts.vault.amount,
        ctx.accounts.token_mint_a.decimals,
    )?;

    // Vault is empty now and can be closed
    let accounts = CloseAccount {
        account: ctx.accounts.vault.to_account_info(),
        authority: ctx.accounts.offer.to_account_info(),
        destination: ctx.accounts.maker.to_account_info(),
    };

    let cpi_context = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        accounts,
        &signer_seeds,
    );

    close_account(cpi_context)
}

/// Accounts for `take_offer`.
///
/// Settles an open offer in one transaction: the taker pays the maker the
/// wanted amount of token B, the vault's full token A balance goes to the
/// taker, and the offer and vault accounts are closed with their rent
/// returned to the maker. If any leg fails, the whole transaction is
/// rolled back and the offer stays open.
#[derive(Accounts)]
pub struct TakeOffer<'info> {
    /// Whoever accepts the offer. Signs the transaction and pays for any
    /// destination token accounts created on demand.
    #[account(mut)]
    pub taker: Signer<'info>,

    /// The offer's creator, receiving token B plus the rent of the closed
    /// accounts. `has_one = maker` on the offer pins this to the recorded
    /// maker.
    #[account(mut)]
    pub maker: SystemAccount<'info>,

    /// The token held in the vault; the taker receives it
    #[account(mint::token_program = token_program)]
    pub token_mint_a: InterfaceAccount<'info, Mint>,

    /// The token the maker asked for; the taker pays with it
    #[account(mint::token_program = token_program)]
    pub token_mint_b: InterfaceAccount<'info, Mint>,

    /// Destination for the vaulted tokens, created here if the taker does
    /// not hold a `token_mint_a` account yet.
    #[account(
        init_if_needed,
        payer = taker,
        associated_token::mint = token_mint_a,
        associated_token::authority = taker,
        associated_token::token_program = token_program
    )]
    pub taker_token_account_a: InterfaceAccount<'info, TokenAccount>,

    /// Source of the taker's payment in `token_mint_b`.
    #[account(
        mut,
        associated_token::mint = token_mint_b,
        associated_token::authority = taker,
        associated_token::token_program = token_program
    )]
    pub taker_token_account_b: InterfaceAccount<'info, TokenAccount>,

    /// Destination for the maker's payment, created on demand so the maker
    /// needs no preparation to be paid.
    #[account(
        init_if_needed,
        payer = taker,
        associated_token::mint = token_mint_b,
        associated_token::authority = maker,
        associated_token::token_program = token_program,
    )]
    pub maker_token_account_b: InterfaceAccount<'info, TokenAccount>,

    /// The offer being taken. The seeds constraint re-derives the address
    /// from the recorded maker and id, and the `has_one` checks tie the
    /// supplied mints and maker to the ones fixed at creation, so a forged
    /// or mismatched reference fails before any transfer. Closed at the
    /// end of the instruction, rent to the maker.
    #[account(
        mut,
        close = maker,
        has_one = maker,
        has_one = token_mint_a,
        has_one = token_mint_b,
        seeds = [b"offer", maker.key().as_ref(), offer.id.to_le_bytes().as_ref()],
        bump = offer.bump,
    )]
    pub offer: Account<'info, Offer>,

    /// The escrow vault. The associated-token constraints force it to be
    /// the canonical token account of the offer PDA for `token_mint_a`.
    #[account(
        mut,
        associated_token::mint = token_mint_a,
        associated_token::authority = offer,
        associated_token::token_program = token_program
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,

    pub associated_token_program: Program<'info, AssociatedToken>,

    pub system_program: Program<'info, System>,
}
