use anchor_lang::prelude::*;
use crate::state::*;
use crate::error::*;
use crate::event::*;
use crate::constants::*;

/**
 * Account context for tearing the faucet down
 *
 * Closes the vault and the config. Every remaining lamport, reserve
 * included, goes back to the creator. Claim records are left in place and
 * can no longer be used.
 *
 * Access Control: Only the creator can close the faucet
 */
#[event_cpi]
#[derive(Accounts)]
pub struct CloseFaucet<'info> {
    /// Faucet configuration, closed to the creator
    #[account(
        mut,
        close = creator,
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, FaucetConfig>,

    /// Pooled vault, closed to the creator
    #[account(
        mut,
        close = creator,
        seeds = [VAULT_SEED.as_bytes()],
        bump = config.vault_bump
    )]
    pub vault: Account<'info, Vault>,

    /// The creator of the faucet
    #[account(
        mut,
        constraint = config.is_creator(&creator.key()) @ FaucetError::Unauthorized
    )]
    pub creator: Signer<'info>,
}

/**
 * Closes the faucet
 *
 * @param ctx - The account context containing config, vault and creator
 */
pub fn handle_close_faucet(ctx: Context<CloseFaucet>) -> Result<()> {
    emit_cpi!(FaucetClosed {
        creator: ctx.accounts.creator.key(),
        swept: ctx.accounts.vault.to_account_info().lamports(),
    });

    // Note: both accounts are closed by the `close = creator` constraints
    Ok(())
}
