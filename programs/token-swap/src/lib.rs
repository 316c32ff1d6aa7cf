#![allow(deprecated)]

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use anchor_lang::prelude::*;

pub use instructions::*;


declare_id!("3T5VkVogPgq2G3BHfdSqCXt16twvXkcvELRAkutqkbNF");

#[program]
pub mod token_swap {
    use super::*;

    pub fn make_offer(
        ctx: Context<MakeOffer>,
        offer_id: u64,
        token_a_offered_amount: u64,
        token_b_wanted_amount: u64,
    ) -> Result<()> {
        instructions::send_offered_tokens_to_vault(&ctx, token_a_offered_amount)?;
        instructions::save_offer(ctx, offer_id, token_b_wanted_amount)
    }

    pub fn take_offer(ctx: Context<TakeOffer>) -> Result<()> {
        instructions::send_wanted_tokens_to_maker(&ctx)?;
        instructions::withdraw_from_vault_and_close_it(ctx)
    }
}
