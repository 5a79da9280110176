use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::instructions as instructions_sysvar;
use crate::state::*;
use crate::error::*;
use crate::event::*;
use crate::constants::*;
use crate::utils::*;

/**
 * Account context for deleting one claim record
 *
 * Resets a beneficiary's claim history by deleting its record; the record's
 * rent goes back to the creator. In the `Configurable` variant the call must
 * also be paired with a `CONFIG_FEE` transfer from the creator to the fee
 * recipient.
 *
 * Access Control: Only the creator can delete records
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(beneficiary: Pubkey)]
pub struct DeleteRecord<'info> {
    /// Faucet configuration
    #[account(
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, FaucetConfig>,

    /// Claim record to delete
    /// - Derived from: ["claim", beneficiary]
    /// CHECK: Either missing (NotFound) or a record owned by this program
    #[account(
        mut,
        seeds = [CLAIM_SEED.as_bytes(), beneficiary.as_ref()],
        bump
    )]
    pub claim_record: UncheckedAccount<'info>,

    /// The creator of the faucet
    /// - Receives the reclaimed rent
    #[account(
        mut,
        constraint = config.is_creator(&creator.key()) @ FaucetError::Unauthorized
    )]
    pub creator: Signer<'info>,

    /// Instructions sysvar used to find the fee payment
    /// CHECK: Address constraint
    #[account(address = instructions_sysvar::ID)]
    pub instructions_sysvar: UncheckedAccount<'info>,
}

/**
 * Deletes the claim record of `beneficiary`
 *
 * @param ctx - The account context containing config, record and creator
 * @param beneficiary - Account whose record is removed
 */
pub fn handle_delete_record(ctx: Context<DeleteRecord>, beneficiary: Pubkey) -> Result<()> {
    let config = &ctx.accounts.config;

    if config.variant.fee_gated_deletion() {
        let (instructions, current_index) =
            load_transaction_instructions(&ctx.accounts.instructions_sysvar.to_account_info())?;
        require_payment_proof(
            &instructions,
            current_index,
            &config.creator,
            &config.fee_recipient,
            CONFIG_FEE,
        )?;
    }

    let (last_claim_slot, refunded) = delete_record(
        &ctx.accounts.claim_record.to_account_info(),
        &ctx.accounts.creator.to_account_info(),
    )?;

    emit_cpi!(ClaimRecordDeleted {
        beneficiary,
        last_claim_slot,
        refunded,
    });

    Ok(())
}
