use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * Payout amounts, timing, fees and PDA seeds used throughout the faucet program.
 * All monetary values are in lamports; all timing values are in slots.
 */

#[constant]
/// ===== PAYOUT CONSTANTS =====

/// Regular claim payout used while the claim amount is unset
pub const DEFAULT_CLAIM_AMOUNT: u64 = 2_000;

/// One-time payout for a brand new beneficiary that proves a solved captcha
/// - Only granted by the `Captcha` variant
pub const BONUS_CLAIM_AMOUNT: u64 = 100_000;

/// Floor the pooled balance may never drop below
/// - The effective reserve is the larger of this and the vault's rent-exempt minimum
/// - Under the default rent (about 953,520 lamports for the vault) the rent
///   minimum is the binding value and this floor only matters on cheaper hosts
pub const MIN_POOL_RESERVE: u64 = 100_000;

/// ===== TIMING CONSTANTS =====

/// Minimum slot gap between two claims while the interval is unset
pub const DEFAULT_CLAIM_INTERVAL: u64 = 10_000;

/// ===== FEE CONSTANTS =====

/// Fee a companion transfer must carry to pay for a configuration change
pub const CONFIG_FEE: u64 = 8_000;

/// Lowest per-signature network fee the client is expected to attach
/// - Charged by the host, never by the program
pub const MIN_NETWORK_FEE: u64 = 1_000;

/// ===== PARAMETER ALLOW-LISTS =====

/// Values accepted by `set_claim_amount`
pub const ALLOWED_CLAIM_AMOUNTS: [u64; 4] = [1_000, 2_000, 4_000, 8_000];

/// Values accepted by `set_claim_interval`
pub const ALLOWED_CLAIM_INTERVALS: [u64; 4] = [5_000, 10_000, 20_000, 40_000];

/// ===== GROUP CONSTANTS =====

/// First argument of the verifier instruction that proves a solved captcha
/// - Must match exactly, up to the zero byte that ends the argument
pub const SOLVE_MARKER: &[u8] = b"solve";

/// Position of the verifier instruction inside the transaction
pub const VERIFICATION_INDEX: usize = 0;

/// Instruction count a fee-gated call and its payment must form
pub const PAYMENT_GROUP_SIZE: usize = 2;

/// Largest number of claim records `delete_many` removes in one call
pub const MAX_DELETE_BATCH: usize = 8;

/// ===== PDA SEED CONSTANTS =====

/// Seed for the singleton config PDA
/// - Used in: ["faucet_config"]
pub const CONFIG_SEED: &str = "faucet_config";

/// Seed for the pooled vault PDA
/// - Used in: ["vault"]
/// - Program owned so payouts are plain lamport debits
pub const VAULT_SEED: &str = "vault";

/// Seed for per-beneficiary claim records
/// - Used in: ["claim", beneficiary]
pub const CLAIM_SEED: &str = "claim";
