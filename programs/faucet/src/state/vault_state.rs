use anchor_lang::prelude::*;

/**
 * Pooled vault account
 *
 * Program-owned PDA whose lamports are the faucet's pool. Anyone can top it
 * up with a plain system transfer; only the program can debit it.
 *
 * Derivation: ["vault"]
 */
#[account]
#[derive(Default, Debug)]
pub struct Vault {
    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl Vault {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<Vault>();
}
