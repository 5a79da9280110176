use anchor_lang::prelude::*;

use crate::state::FaucetVariant;

/// Event emitted when the faucet is created
#[event]
pub struct FaucetInitialized {
    /// The config account public key
    pub config: Pubkey,
    /// Creator, the only admin of the faucet
    pub creator: Pubkey,
    /// Pooled vault address
    pub vault: Pubkey,
    /// Behaviour selected for this deployment
    pub variant: FaucetVariant,
    /// Receiver of record deletion fees
    pub fee_recipient: Pubkey,
    /// Program whose `solve` call proves a captcha
    pub verifier_program: Pubkey,
}

/// Event emitted on every successful claim
#[event]
pub struct Claimed {
    /// Account that received the payout
    pub beneficiary: Pubkey,
    /// Lamports paid out
    pub amount: u64,
    /// Whether the bonus tier applied
    pub bonus: bool,
    /// Slot recorded as the new last claim
    pub slot: u64,
    /// Vault balance after the payout
    pub pool_balance: u64,
}

/// Event emitted when the creator deletes a claim record
#[event]
pub struct ClaimRecordDeleted {
    /// Beneficiary whose history was reset
    pub beneficiary: Pubkey,
    /// Slot the record held when deleted
    pub last_claim_slot: u64,
    /// Rent lamports refunded to the creator
    pub refunded: u64,
}

/// Event emitted when pooled lamports are withdrawn
#[event]
pub struct Withdrawn {
    /// Creator who received the lamports
    pub creator: Pubkey,
    /// Lamports withdrawn
    pub amount: u64,
    /// Vault balance after the withdrawal
    pub pool_balance: u64,
}

/// Event emitted when the regular claim amount changes
#[event]
pub struct ClaimAmountSet {
    /// Creator who paid for the change
    pub creator: Pubkey,
    /// New regular payout
    pub claim_amount: u64,
}

/// Event emitted when the claim interval changes
#[event]
pub struct ClaimIntervalSet {
    /// Creator who paid for the change
    pub creator: Pubkey,
    /// New interval in slots
    pub claim_interval: u64,
}

/// Event emitted when the faucet is torn down
#[event]
pub struct FaucetClosed {
    /// Creator who received the remaining pool
    pub creator: Pubkey,
    /// Lamports swept out of the vault
    pub swept: u64,
}
