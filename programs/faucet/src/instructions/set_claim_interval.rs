use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::instructions as instructions_sysvar;
use crate::state::*;
use crate::error::*;
use crate::event::*;
use crate::constants::*;
use crate::utils::*;

/**
 * Account context for changing the claim interval
 *
 * The call must be paired with a `CONFIG_FEE` transfer from the creator to
 * the creator's own account.
 *
 * Access Control: Only the creator, fee gated, `Configurable` variant only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetClaimInterval<'info> {
    /// Faucet configuration to update
    #[account(
        mut,
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump,
        constraint = config.variant.configurable_parameters() @ FaucetError::FixedParameter
    )]
    pub config: Account<'info, FaucetConfig>,

    /// The creator of the faucet
    #[account(constraint = config.is_creator(&creator.key()) @ FaucetError::Unauthorized)]
    pub creator: Signer<'info>,

    /// Instructions sysvar used to find the fee payment
    /// CHECK: Address constraint
    #[account(address = instructions_sysvar::ID)]
    pub instructions_sysvar: UncheckedAccount<'info>,
}

/**
 * Sets the minimum slot gap between two claims
 *
 * @param ctx - The account context containing config and creator
 * @param claim_interval - New interval, one of `ALLOWED_CLAIM_INTERVALS`
 */
pub fn handle_set_claim_interval(
    ctx: Context<SetClaimInterval>,
    claim_interval: u64,
) -> Result<()> {
    let creator = ctx.accounts.creator.key();
    let (instructions, current_index) =
        load_transaction_instructions(&ctx.accounts.instructions_sysvar.to_account_info())?;
    require_payment_proof(&instructions, current_index, &creator, &creator, CONFIG_FEE)?;

    ctx.accounts.config.set_claim_interval(claim_interval)?;

    emit_cpi!(ClaimIntervalSet {
        creator,
        claim_interval,
    });

    Ok(())
}
