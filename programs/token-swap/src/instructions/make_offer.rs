use anchor_lang::prelude::*;

use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::{
    constants::ANCHOR_DISCRIMINATOR, error::ErrorCode, state::Offer, utils::transfer_tokens,
};

pub fn send_offered_tokens_to_vault(
    ctx: &Context<MakeOffer>,
    token_a_offered_amount: u64,
) -> Result<()> {
    require!(token_a_offered_amount > 0, ErrorCode::ZeroOfferedAmount);
    require_keys_neq!(
        ctx.accounts.token_mint_a.key(),
        ctx.accounts.token_mint_b.key(),
        ErrorCode::SameTokenMints
    );

    transfer_tokens(
        &ctx.accounts.maker_token_account_a,
        &ctx.accounts.vault,
        &token_a_offered_amount,
        &ctx.accounts.token_mint_a,
        &ctx.accounts.maker,
        &ctx.accounts.token_program,
    )
}

pub fn save_offer(
    ctx: Context<MakeOffer>,
    offer_id: u64,
    token_b_wanted_amount: u64,
) -> Result<()> {
    require!(token_b_wanted_amount > 0, ErrorCode::ZeroWantedAmount);

    ctx.accounts.offer.set_inner(Offer {
        id: offer_id,
        maker: ctx.accounts.maker.key(),
        token_mint_a: ctx.accounts.token_mint_a.key(),
        token_mint_b: ctx.accounts.token_mint_b.key(),
        token_b_wanted_amount,
        bump: ctx.bumps.offer,
    });
    Ok(())
}

/// Accounts for `make_offer`.
///
/// The `offer` account is a PDA derived from the maker and a caller-chosen
/// id, so each `(maker, offer_id)` pair maps to exactly one address and a
/// repeat creation fails at the system program. The `vault` is the offer
/// PDA's associated token account for `token_mint_a`, which puts the
/// deposited tokens under the sole authority of this program.
#[derive(Accounts)]
#[instruction(offer_id: u64)]
pub struct MakeOffer<'info> {
    /// Creator of the offer. Signs the transaction and pays for the two
    /// accounts created here.
    #[account(mut)]
    pub maker: Signer<'info>,

    /// The token the maker is depositing
    #[account(mint::token_program = token_program)]
    pub token_mint_a: InterfaceAccount<'info, Mint>,

    /// The token the maker wants in return
    #[account(mint::token_program = token_program)]
    pub token_mint_b: InterfaceAccount<'info, Mint>,

    /// Maker's own token account for `token_mint_a`; the deposit is debited
    /// from here. The associated-token constraints pin it to the maker and
    /// the offered mint.
    #[account(
        mut,
        associated_token::mint = token_mint_a,
        associated_token::authority = maker,
        associated_token::token_program = token_program,
    )]
    pub maker_token_account_a: InterfaceAccount<'info, TokenAccount>,

    /// The offer record, created at its derived address. Occupancy of this
    /// address is what rejects a duplicate `(maker, offer_id)`.
    #[account(
        init,
        payer = maker,
        space = (ANCHOR_DISCRIMINATOR as usize) + Offer::INIT_SPACE,
        seeds = [b"offer", maker.key().as_ref(), offer_id.to_le_bytes().as_ref()],
        bump
    )]
    pub offer: Account<'info, Offer>,

    /// Escrow vault holding the offered tokens until the offer is taken.
    /// Its authority is the `offer` PDA, so only this program can sign
    /// outgoing transfers.
    #[account(
        init,
        payer = maker,
        associated_token::mint = token_mint_a,
        associated_token::authority = offer,
        associated_token::token_program = token_program
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,

    pub associated_token_program: Program<'info, AssociatedToken>,

    pub system_program: Program<'info, System>,
}
