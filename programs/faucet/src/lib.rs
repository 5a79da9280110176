use anchor_lang::prelude::*;

declare_id!("EawrMzJDCFUNEjxoN2ZtPPNesvV5UUhuWZQ74nbqihW2");

pub mod constants;
pub mod eligibility;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;
use state::FaucetVariant;

/**
 * Faucet Program
 *
 * A Solana program that hands out small lamport payouts from a pooled vault.
 * Any account may claim periodically; a brand new, empty wallet that proves a
 * solved captcha in the same transaction receives a one-time bonus instead.
 *
 * Key Features:
 * - Per-account rate limiting by slot interval
 * - Captcha-gated first-claim bonus (soft: no proof means the regular tier)
 * - Fee-gated reconfiguration proven by a companion transfer in the transaction
 * - A reserve the pool never drops below
 * - Creator-only record deletion, batch deletion and withdrawal
 *
 * Architecture:
 * - Config PDA: creator identity, deployment variant and payout parameters
 * - Vault PDA: program-owned account whose lamports are the pool
 * - Claim Record PDAs: last claim slot of each beneficiary
 *
 * Workflow:
 * 1. Creator initializes the faucet and funds the vault
 * 2. Users claim, optionally preceded by a captcha `solve` instruction
 * 3. Creator tunes amount and interval, paying the configuration fee
 * 4. Creator deletes stale records and withdraws surplus lamports
 */
#[program]
pub mod faucet {
    use super::*;

    /**
     * Creates the faucet
     *
     * @param ctx - Account context containing config, vault and creator
     * @param variant - Behaviour of this deployment
     * @param fee_recipient - Receiver of paid record deletions
     * @param verifier_program - Program whose `solve` call proves a captcha
     *
     * Access Control: Anyone, once; the signer becomes the creator
     */
    pub fn initialize(
        ctx: Context<Initialize>,
        variant: FaucetVariant,
        fee_recipient: Pubkey,
        verifier_program: Pubkey,
    ) -> Result<()> {
        handle_initialize(ctx, variant, fee_recipient, verifier_program)
    }

    /**
     * Claims a payout from the pool
     *
     * Pays the bonus tier to a new beneficiary with a captcha proof and the
     * regular tier otherwise, subject to the claim interval and the reserve.
     *
     * @param ctx - Account context containing config, vault, record and claimant
     *
     * Access Control: Any signer
     */
    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        handle_claim(ctx)
    }

    /**
     * Deletes one claim record
     *
     * @param ctx - Account context containing config, record and creator
     * @param beneficiary - Account whose record is removed
     *
     * Access Control: Creator only
     * Note: The `Configurable` variant also requires a fee payment
     */
    pub fn delete_record(ctx: Context<DeleteRecord>, beneficiary: Pubkey) -> Result<()> {
        handle_delete_record(ctx, beneficiary)
    }

    /**
     * Deletes up to eight claim records at once
     *
     * @param ctx - Account context; records are passed as remaining accounts
     * @param beneficiaries - Accounts whose records are removed
     *
     * Access Control: Creator only
     * Note: All or nothing, one missing record aborts the batch
     */
    pub fn delete_many<'info>(
        ctx: Context<'_, '_, '_, 'info, DeleteMany<'info>>,
        beneficiaries: Vec<Pubkey>,
    ) -> Result<()> {
        handle_delete_many(ctx, beneficiaries)
    }

    /**
     * Withdraws lamports from the pool
     *
     * @param ctx - Account context containing config, vault and creator
     * @param amount - Lamports to withdraw
     *
     * Access Control: Creator only
     */
    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        handle_withdraw(ctx, amount)
    }

    /**
     * Sets the regular claim amount
     *
     * @param ctx - Account context containing config, vault and creator
     * @param claim_amount - New payout in lamports
     *
     * Access Control: Creator only, `Configurable` variant, paired with a fee
     * transfer to the vault
     */
    pub fn set_claim_amount(ctx: Context<SetClaimAmount>, claim_amount: u64) -> Result<()> {
        handle_set_claim_amount(ctx, claim_amount)
    }

    /**
     * Sets the claim interval
     *
     * @param ctx - Account context containing config and creator
     * @param claim_interval - New interval in slots
     *
     * Access Control: Creator only, `Configurable` variant, paired with a fee
     * transfer to the creator
     */
    pub fn set_claim_interval(ctx: Context<SetClaimInterval>, claim_interval: u64) -> Result<()> {
        handle_set_claim_interval(ctx, claim_interval)
    }

    /**
     * Closes the faucet
     *
     * Sweeps the vault and closes config and vault.
     *
     * @param ctx - Account context containing config, vault and creator
     *
     * Access Control: Creator only
     */
    pub fn close_faucet(ctx: Context<CloseFaucet>) -> Result<()> {
        handle_close_faucet(ctx)
    }
}
