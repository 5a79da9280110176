use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::instructions as instructions_sysvar;
use crate::constants::*;
use crate::eligibility::*;
use crate::event::*;
use crate::state::*;
use crate::utils::*;

/**
 * Account context for claiming from the faucet
 *
 * Pays the claimant either the regular amount or, for a brand new beneficiary
 * that proves a solved captcha, the bonus amount. The claim record is created
 * on the first attempt with rent paid by `payer`, which lets a sponsor cover
 * an empty wallet.
 *
 * Rent: the bonus only goes to a wallet holding zero lamports, and the bonus
 * alone does not make that wallet rent exempt. The runtime rejects the
 * transaction unless the client tops the claimant up to its rent-exempt
 * minimum in a later instruction of the same transaction, for example a
 * system transfer from `payer`. Regular payouts to an existing wallet have
 * the same constraint whenever the wallet sits below the minimum.
 *
 * Access Control: Any signer, rate limited per claimant
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Claim<'info> {
    /// Faucet configuration
    #[account(
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, FaucetConfig>,

    /// Pooled vault the payout is taken from
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes()],
        bump = config.vault_bump
    )]
    pub vault: Account<'info, Vault>,

    /// Claim record of the claimant
    /// - Derived from: ["claim", claimant_key]
    /// - May not exist yet; existence before this call decides bonus eligibility
    /// CHECK: Address pinned by seeds, created and decoded in the handler
    #[account(
        mut,
        seeds = [CLAIM_SEED.as_bytes(), claimant.key().as_ref()],
        bump
    )]
    pub claim_record: UncheckedAccount<'info>,

    /// The account receiving the payout
    #[account(mut)]
    pub claimant: Signer<'info>,

    /// Pays the rent of a newly created claim record
    /// - May be the claimant itself
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Instructions sysvar used to inspect the rest of the transaction
    /// CHECK: Address constraint
    #[account(address = instructions_sysvar::ID)]
    pub instructions_sysvar: UncheckedAccount<'info>,

    /// System program for record creation
    pub system_program: Program<'info, System>,
}

/**
 * Processes a claim attempt
 *
 * @param ctx - The account context containing config, vault, record and claimant
 *
 * Flow:
 * 1. Resolve the record (bonus eligibility is decided before creating it)
 * 2. Inspect the transaction for a captcha proof and forbidden side effects
 * 3. Let the eligibility engine pick the tier and check pool and interval
 * 4. Pay out and record the current slot
 */
pub fn handle_claim(ctx: Context<Claim>) -> Result<()> {
    let config = &ctx.accounts.config;
    let claimant_key = ctx.accounts.claimant.key();
    let claimant_info = ctx.accounts.claimant.to_account_info();
    let vault_info = ctx.accounts.vault.to_account_info();
    let record_info = ctx.accounts.claim_record.to_account_info();

    // ===== RECORD RESOLUTION =====

    let claimant_balance = claimant_info.lamports();
    let record_existed = ensure_record(
        &record_info,
        &ctx.accounts.payer.to_account_info(),
        &ctx.accounts.system_program.to_account_info(),
        &claimant_key,
        ctx.bumps.claim_record,
    )?;
    let last_claim_slot = read_last_claim(&record_info)?;

    // ===== TRANSACTION INSPECTION =====

    let (instructions, current_index) =
        load_transaction_instructions(&ctx.accounts.instructions_sysvar.to_account_info())?;
    let verification_proof = config.variant.grants_bonus()
        && has_verification_proof(
            &instructions,
            current_index,
            &claimant_key,
            &config.verifier_program,
        );
    let side_effect_free = require_no_forbidden_side_effects(&instructions).is_ok();

    // ===== ELIGIBILITY =====

    let request = ClaimRequest {
        variant: config.variant,
        record_existed,
        claimant_balance,
        last_claim_slot,
        verification_proof,
        current_slot: Clock::get()?.slot,
        pool_balance: vault_info.lamports(),
        reserve: vault_reserve()?,
        regular_amount: config.claim_amount(),
        claim_interval: config.claim_interval(),
        side_effect_free,
    };
    let outcome = evaluate_claim(&request)?;

    // ===== INTERACTIONS PHASE (Payout) =====

    debit_program_account(&vault_info, &claimant_info, outcome.amount)?;
    trace(ClaimStage::PayoutSent);

    write_last_claim(&record_info, outcome.new_last_claim_slot)?;
    trace(ClaimStage::RecordUpdated);

    emit_cpi!(Claimed {
        beneficiary: claimant_key,
        amount: outcome.amount,
        bonus: outcome.tier == PayoutTier::Bonus,
        slot: outcome.new_last_claim_slot,
        pool_balance: outcome.pool_balance_after,
    });

    Ok(())
}
