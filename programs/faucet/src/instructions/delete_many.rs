use anchor_lang::prelude::*;
use crate::state::*;
use crate::error::*;
use crate::event::*;
use crate::constants::*;
use crate::utils::*;

/**
 * Account context for deleting a batch of claim records
 *
 * The records are passed as remaining accounts, writable, in the same order
 * as the `beneficiaries` argument. No fee is required for batches.
 *
 * Access Control: Only the creator can delete records
 */
#[event_cpi]
#[derive(Accounts)]
pub struct DeleteMany<'info> {
    /// Faucet configuration
    #[account(
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, FaucetConfig>,

    /// The creator of the faucet
    /// - Receives the reclaimed rent
    #[account(
        mut,
        constraint = config.is_creator(&creator.key()) @ FaucetError::Unauthorized
    )]
    pub creator: Signer<'info>,
}

/**
 * Deletes up to `MAX_DELETE_BATCH` records, all or nothing
 *
 * @param ctx - The account context; remaining accounts are the records
 * @param beneficiaries - Accounts whose records are removed
 *
 * Validation Rules:
 * - Between 1 and 8 beneficiaries, one writable record account each
 * - Every record address must match its beneficiary
 * - Every record must exist and appear once, checked before any deletion
 */
pub fn handle_delete_many<'info>(
    ctx: Context<'_, '_, '_, 'info, DeleteMany<'info>>,
    beneficiaries: Vec<Pubkey>,
) -> Result<()> {
    let records = ctx.remaining_accounts;

    // ===== VALIDATION PHASE =====

    check_batch_accounts(records, &beneficiaries)?;

    // ===== EFFECTS PHASE =====

    let creator_info = ctx.accounts.creator.to_account_info();
    for (record, beneficiary) in records.iter().zip(beneficiaries.into_iter()) {
        let (last_claim_slot, refunded) = delete_record(record, &creator_info)?;
        emit_cpi!(ClaimRecordDeleted {
            beneficiary,
            last_claim_slot,
            refunded,
        });
    }

    Ok(())
}
