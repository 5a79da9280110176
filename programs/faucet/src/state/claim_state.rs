use anchor_lang::prelude::*;

/**
 * Per-beneficiary claim record
 *
 * Tracks the slot of the most recent successful claim of one account.
 * The existence of the record is meaningful on its own: once it exists the
 * account can never again qualify as a new beneficiary, whatever the value.
 *
 * Derivation: ["claim", beneficiary]
 *
 * Lifecycle:
 * 1. Created on the first claim attempt, rent paid by the transaction payer
 * 2. Updated with every successful claim (value only ever grows)
 * 3. Deleted only by the creator, which resets the account's history
 */
#[account]
#[derive(Default, Debug)]
pub struct ClaimRecord {
    /// Slot of the last successful claim, 0 if none committed yet
    pub last_claim_slot: u64,
}

impl ClaimRecord {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ClaimRecord>();
}
