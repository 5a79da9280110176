use anchor_lang::prelude::*;

use crate::constants::BONUS_CLAIM_AMOUNT;
use crate::error::FaucetError;
use crate::state::FaucetVariant;

/// Stages a claim attempt walks through, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClaimStage {
    Start,
    RecordResolved,
    TierDetermined,
    InvariantsChecked,
    IntervalChecked,
    FirstClaimExempt,
    PayoutSent,
    RecordUpdated,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PayoutTier {
    Regular,
    Bonus,
}

/// Everything the engine needs to decide one claim attempt.
#[derive(Clone, Copy, Debug)]
pub struct ClaimRequest {
    pub variant: FaucetVariant,
    /// Whether a record existed before this attempt
    pub record_existed: bool,
    /// Claimant lamports before this attempt
    pub claimant_balance: u64,
    /// Stored last claim slot, 0 for a fresh record
    pub last_claim_slot: u64,
    /// Outcome of the soft verification-proof check
    pub verification_proof: bool,
    pub current_slot: u64,
    pub pool_balance: u64,
    pub reserve: u64,
    pub regular_amount: u64,
    pub claim_interval: u64,
    /// Outcome of the forbidden side-effect scan
    pub side_effect_free: bool,
}

/// Decision reached for a claim that passed every check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimOutcome {
    pub tier: PayoutTier,
    pub amount: u64,
    /// Stage that cleared the timing check
    pub timing: ClaimStage,
    pub new_last_claim_slot: u64,
    pub pool_balance_after: u64,
}

impl ClaimRequest {
    /// No record yet and nothing in the wallet. Once a record exists the
    /// account never qualifies again, even with an empty wallet.
    pub fn is_new_beneficiary(&self) -> bool {
        !self.record_existed && self.claimant_balance == 0
    }

    pub fn is_first_claim(&self) -> bool {
        self.last_claim_slot == 0
    }

    pub fn tier(&self) -> PayoutTier {
        if self.variant.grants_bonus() && self.is_new_beneficiary() && self.verification_proof {
            PayoutTier::Bonus
        } else {
            PayoutTier::Regular
        }
    }

    pub fn payout(&self) -> u64 {
        match self.tier() {
            PayoutTier::Bonus => BONUS_CLAIM_AMOUNT,
            PayoutTier::Regular => self.regular_amount,
        }
    }

    fn interval_exempt(&self) -> bool {
        match self.variant {
            FaucetVariant::Captcha => self.is_new_beneficiary(),
            FaucetVariant::Configurable => self.is_first_claim(),
        }
    }
}

/// Runs one claim attempt through the eligibility state machine.
///
/// Every failure aborts the whole attempt; the host discards any record
/// allocation made on the way.
pub fn evaluate_claim(request: &ClaimRequest) -> Result<ClaimOutcome> {
    trace(ClaimStage::Start);

    // Record resolution happened in the caller; tiers only need the facts.
    trace(ClaimStage::RecordResolved);
    let tier = request.tier();
    let amount = request.payout();
    trace(ClaimStage::TierDetermined);

    require!(request.side_effect_free, FaucetError::ForbiddenSideEffect);
    require!(request.pool_balance >= amount, FaucetError::InsufficientBalance);
    let pool_balance_after = request.pool_balance - amount;
    require!(
        pool_balance_after >= request.reserve,
        FaucetError::InsufficientBalance
    );
    trace(ClaimStage::InvariantsChecked);

    let timing = if request.interval_exempt() {
        ClaimStage::FirstClaimExempt
    } else {
        let next_allowed = request
            .last_claim_slot
            .checked_add(request.claim_interval)
            .ok_or(FaucetError::ArithmeticOverflow)?;
        require!(
            request.current_slot >= next_allowed,
            FaucetError::RateLimited
        );
        ClaimStage::IntervalChecked
    };
    trace(timing);

    Ok(ClaimOutcome {
        tier,
        amount,
        timing,
        new_last_claim_slot: request.current_slot,
        pool_balance_after,
    })
}

#[inline(always)]
pub(crate) fn trace(_stage: ClaimStage) {
    #[cfg(feature = "verbose")]
    msg!("claim stage: {:?}", _stage);
}
