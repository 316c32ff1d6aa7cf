use anchor_lang::prelude::*;

/// One outstanding swap intent. Lives at the PDA derived from
/// `[b"offer", maker, id]` and owns the vault holding the deposited tokens.
/// Created by `make_offer`, closed by `take_offer`, never mutated in place.
#[account]
#[derive(InitSpace)]
pub struct Offer {
    /// Caller-chosen identifier, unique per maker among live offers
    pub id: u64,
    /// Creator of the offer
    pub maker: Pubkey,
    /// Token being offered
    pub token_mint_a: Pubkey,
    /// Token wanted in return
    pub token_mint_b: Pubkey,
    /// Amount of token B wanted
    pub token_b_wanted_amount: u64,
    /// PDA bump seed
    pub bump: u8,
}
