use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for creating the faucet
 *
 * Creates the singleton config PDA and the pooled vault PDA. The signer
 * becomes the creator, the only identity allowed to run admin operations.
 * Fund the faucet afterwards with a plain transfer to the vault.
 *
 * Access Control: Anyone, once (the config PDA can only be created once)
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Singleton config account
    /// - Derived from: ["faucet_config"]
    #[account(
        init,
        payer = creator,
        space = FaucetConfig::LEN,
        seeds = [CONFIG_SEED.as_bytes()],
        bump
    )]
    pub config: Account<'info, FaucetConfig>,

    /// Pooled vault holding the lamports to hand out
    /// - Derived from: ["vault"]
    #[account(
        init,
        payer = creator,
        space = Vault::LEN,
        seeds = [VAULT_SEED.as_bytes()],
        bump
    )]
    pub vault: Account<'info, Vault>,

    /// The creator of the faucet
    #[account(mut)]
    pub creator: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/**
 * Initializes the faucet with every payout parameter unset
 *
 * @param ctx - The account context containing config, vault and creator
 * @param variant - Behaviour of this deployment
 * @param fee_recipient - Receiver of paid record deletions
 * @param verifier_program - Program whose `solve` call proves a captcha
 */
pub fn handle_initialize(
    ctx: Context<Initialize>,
    variant: FaucetVariant,
    fee_recipient: Pubkey,
    verifier_program: Pubkey,
) -> Result<()> {
    require!(
        fee_recipient != Pubkey::default(),
        FaucetError::InvalidParameter
    );
    // The bonus tier is unreachable without a verifier to point at
    require!(
        !variant.grants_bonus() || verifier_program != Pubkey::default(),
        FaucetError::InvalidParameter
    );

    let config = &mut ctx.accounts.config;
    config.bump = ctx.bumps.config;
    config.vault_bump = ctx.bumps.vault;
    config.variant = variant;
    config.creator = ctx.accounts.creator.key();
    config.fee_recipient = fee_recipient;
    config.verifier_program = verifier_program;
    config.claim_amount = None;
    config.claim_interval = None;

    ctx.accounts.vault.bump = ctx.bumps.vault;

    emit_cpi!(FaucetInitialized {
        config: ctx.accounts.config.key(),
        creator: ctx.accounts.creator.key(),
        vault: ctx.accounts.vault.key(),
        variant,
        fee_recipient,
        verifier_program,
    });

    Ok(())
}
