use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::instructions as instructions_sysvar;
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::utils::*;
use crate::event::*;

/**
 * Account context for withdrawing pooled lamports
 *
 * This instruction allows the creator to take lamports out of the vault as
 * long as the reserve stays behind.
 *
 * Access Control: Only the creator can withdraw
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Withdraw<'info> {
    /// Faucet configuration, source of the creator identity
    #[account(
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, FaucetConfig>,

    /// Pooled vault to withdraw from
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes()],
        bump = config.vault_bump
    )]
    pub vault: Account<'info, Vault>,

    /// The creator of the faucet
    /// - Must match the creator stored in the config
    /// - Receives the withdrawn lamports
    #[account(
        mut,
        constraint = config.is_creator(&creator.key()) @ FaucetError::Unauthorized
    )]
    pub creator: Signer<'info>,

    /// Instructions sysvar used to inspect the rest of the transaction
    /// CHECK: Address constraint
    #[account(address = instructions_sysvar::ID)]
    pub instructions_sysvar: UncheckedAccount<'info>,
}

/**
 * Withdraws lamports from the pool to the creator
 *
 * @param ctx - The account context containing config, vault and creator
 * @param amount - Lamports to withdraw
 *
 * Validation Rules:
 * - Pool balance must cover amount + reserve
 * - No rekey or close instructions in the same transaction
 */
pub fn handle_withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    let vault_info = ctx.accounts.vault.to_account_info();

    // ===== VALIDATION PHASE =====

    let (instructions, _) =
        load_transaction_instructions(&ctx.accounts.instructions_sysvar.to_account_info())?;
    require_no_forbidden_side_effects(&instructions)?;

    let pool_balance = check_withdrawal(vault_info.lamports(), amount, vault_reserve()?)?;

    // ===== INTERACTIONS PHASE =====

    debit_program_account(&vault_info, &ctx.accounts.creator.to_account_info(), amount)?;

    emit_cpi!(Withdrawn {
        creator: ctx.accounts.creator.key(),
        amount,
        pool_balance,
    });

    Ok(())
}
