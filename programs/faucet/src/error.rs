use anchor_lang::prelude::*;

#[error_code]
pub enum FaucetError {
    // Access control errors
    #[msg("Only the faucet creator can perform this action")]
    Unauthorized,

    // Storage errors
    #[msg("Claim record does not exist")]
    NotFound,

    // Balance errors
    #[msg("Pool cannot cover the payout while keeping its reserve")]
    InsufficientBalance,

    // Timing errors
    #[msg("Claim interval has not elapsed yet")]
    RateLimited,

    // Transaction shape errors
    #[msg("Required companion instruction is missing or malformed")]
    InvalidGroupComposition,
    #[msg("Rekey or close instructions are not allowed alongside this call")]
    ForbiddenSideEffect,

    // Parameter errors
    #[msg("Value is not in the allowed set")]
    InvalidParameter,
    #[msg("Account does not match its expected address")]
    InvalidAccount,
    #[msg("Payout parameters are fixed for this faucet variant")]
    FixedParameter,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
