use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::instructions as instructions_sysvar;
use crate::state::*;
use crate::error::*;
use crate::event::*;
use crate::constants::*;
use crate::utils::*;

/**
 * Account context for changing the regular claim amount
 *
 * The call must be paired with a `CONFIG_FEE` transfer from the creator to
 * the vault, so every reconfiguration tops up the pool.
 *
 * Access Control: Only the creator, fee gated, `Configurable` variant only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetClaimAmount<'info> {
    /// Faucet configuration to update
    #[account(
        mut,
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump,
        constraint = config.variant.configurable_parameters() @ FaucetError::FixedParameter
    )]
    pub config: Account<'info, FaucetConfig>,

    /// Pooled vault, receiver of the fee
    #[account(
        seeds = [VAULT_SEED.as_bytes()],
        bump = config.vault_bump
    )]
    pub vault: Account<'info, Vault>,

    /// The creator of the faucet
    #[account(constraint = config.is_creator(&creator.key()) @ FaucetError::Unauthorized)]
    pub creator: Signer<'info>,

    /// Instructions sysvar used to find the fee payment
    /// CHECK: Address constraint
    #[account(address = instructions_sysvar::ID)]
    pub instructions_sysvar: UncheckedAccount<'info>,
}

/**
 * Sets the regular claim amount
 *
 * @param ctx - The account context containing config, vault and creator
 * @param claim_amount - New payout, one of `ALLOWED_CLAIM_AMOUNTS`
 */
pub fn handle_set_claim_amount(ctx: Context<SetClaimAmount>, claim_amount: u64) -> Result<()> {
    let (instructions, current_index) =
        load_transaction_instructions(&ctx.accounts.instructions_sysvar.to_account_info())?;
    require_payment_proof(
        &instructions,
        current_index,
        &ctx.accounts.creator.key(),
        &ctx.accounts.vault.key(),
        CONFIG_FEE,
    )?;

    ctx.accounts.config.set_claim_amount(claim_amount)?;

    emit_cpi!(ClaimAmountSet {
        creator: ctx.accounts.creator.key(),
        claim_amount,
    });

    Ok(())
}
