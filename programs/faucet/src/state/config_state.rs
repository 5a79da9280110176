use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::FaucetError;

/**
 * Behaviour selected at initialization
 *
 * The two deployments share one engine and differ only in the policy below.
 *
 * - Captcha: a brand new, empty-balance beneficiary that proves a solved
 *   captcha receives the bonus payout, and is exempt from the interval on
 *   that claim. The regular amount and interval are fixed at their defaults.
 *   Record deletion is free for the creator.
 * - Configurable: every claim pays the regular amount, which the creator can
 *   change along with the interval. The very first claim of a record is
 *   exempt from the interval, and record deletion also requires a fee
 *   payment to the fee recipient.
 */
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum FaucetVariant {
    Captcha,
    Configurable,
}

impl FaucetVariant {
    /// Whether the verified first-claim bonus exists in this deployment
    pub fn grants_bonus(self) -> bool {
        matches!(self, FaucetVariant::Captcha)
    }

    /// Whether the creator may change the regular amount and the interval
    pub fn configurable_parameters(self) -> bool {
        matches!(self, FaucetVariant::Configurable)
    }

    /// Whether deleting a single record must be paid for
    pub fn fee_gated_deletion(self) -> bool {
        matches!(self, FaucetVariant::Configurable)
    }
}

/**
 * Singleton faucet configuration account
 *
 * Holds the creator identity and the creator-mutable payout parameters.
 * Parameters that were never set are stored as `None` and read back as
 * their defaults, so an explicit value is never confused with "unset".
 * Only the `Configurable` variant accepts parameter updates.
 *
 * Derivation: ["faucet_config"]
 *
 * Lifecycle:
 * 1. Created by `initialize`, parameters unset
 * 2. Updated by the fee-gated `set_claim_amount` / `set_claim_interval`
 * 3. Closed by `close_faucet`
 */
#[account]
#[derive(Debug, InitSpace)]
pub struct FaucetConfig {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Bump seed of the vault PDA
    pub vault_bump: u8,

    /// Behaviour selected for this deployment
    pub variant: FaucetVariant,

    /// Creator of the faucet
    /// - Only identity allowed to delete records, withdraw and reconfigure
    pub creator: Pubkey,

    /// Receiver of the fee attached to single record deletions
    /// - Only consulted by the `Configurable` variant
    pub fee_recipient: Pubkey,

    /// External program whose `solve` instruction proves a captcha
    pub verifier_program: Pubkey,

    /// Regular payout in lamports, `None` until first set
    pub claim_amount: Option<u64>,

    /// Minimum slot gap between claims, `None` until first set
    pub claim_interval: Option<u64>,
}

impl FaucetConfig {
    /// Space required for this account
    /// - Includes 8-byte discriminator + borsh size
    pub const LEN: usize = 8 + FaucetConfig::INIT_SPACE;

    pub fn is_creator(&self, key: &Pubkey) -> bool {
        self.creator == *key
    }

    /// Regular payout, the default while unset or in the `Captcha` variant
    pub fn claim_amount(&self) -> u64 {
        match self.claim_amount {
            Some(amount) if self.variant.configurable_parameters() => amount,
            _ => DEFAULT_CLAIM_AMOUNT,
        }
    }

    /// Claim interval, the default while unset or in the `Captcha` variant
    pub fn claim_interval(&self) -> u64 {
        match self.claim_interval {
            Some(interval) if self.variant.configurable_parameters() => interval,
            _ => DEFAULT_CLAIM_INTERVAL,
        }
    }

    pub fn set_claim_amount(&mut self, claim_amount: u64) -> Result<()> {
        require!(
            self.variant.configurable_parameters(),
            FaucetError::FixedParameter
        );
        require!(
            ALLOWED_CLAIM_AMOUNTS.contains(&claim_amount),
            FaucetError::InvalidParameter
        );
        self.claim_amount = Some(claim_amount);
        Ok(())
    }

    pub fn set_claim_interval(&mut self, claim_interval: u64) -> Result<()> {
        require!(
            self.variant.configurable_parameters(),
            FaucetError::FixedParameter
        );
        require!(
            ALLOWED_CLAIM_INTERVALS.contains(&claim_interval),
            FaucetError::InvalidParameter
        );
        self.claim_interval = Some(claim_interval);
        Ok(())
    }
}
