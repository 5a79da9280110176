use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::solana_program::sysvar::instructions::{
    load_current_index_checked, load_instruction_at_checked,
};
use anchor_lang::system_program;

use crate::constants::*;
use crate::error::FaucetError;

// System program instructions are bincode encoded with a u32 little endian tag
const SYSTEM_ASSIGN: u32 = 1;
const SYSTEM_TRANSFER: u32 = 2;
const SYSTEM_ASSIGN_WITH_SEED: u32 = 10;
const SYSTEM_TRANSFER_LEN: usize = 4 + 8;

// Verifier arguments are separated by a zero byte
const ARGUMENT_DELIMITER: u8 = 0;

// SPL token (and token-2022) instructions carry a one byte tag
const TOKEN_SET_AUTHORITY: u8 = 6;
const TOKEN_CLOSE_ACCOUNT: u8 = 9;

/// Reads every instruction of the enclosing transaction together with the
/// index of the currently executing one.
pub fn load_transaction_instructions(
    instructions_sysvar: &AccountInfo,
) -> Result<(Vec<Instruction>, usize)> {
    let count = {
        let data = instructions_sysvar.try_borrow_data()?;
        require!(data.len() >= 2, FaucetError::InvalidAccount);
        u16::from_le_bytes([data[0], data[1]]) as usize
    };
    let current_index = load_current_index_checked(instructions_sysvar)? as usize;

    let mut instructions = Vec::with_capacity(count);
    for index in 0..count {
        instructions.push(load_instruction_at_checked(index, instructions_sysvar)?);
    }
    Ok((instructions, current_index))
}

/// Checks that the transaction opens with a captcha `solve` call made by the
/// claimant.
///
/// This is a soft check: any mismatch yields `false` and the caller simply
/// loses access to the bonus tier.
pub fn has_verification_proof(
    instructions: &[Instruction],
    current_index: usize,
    claimant: &Pubkey,
    verifier_program: &Pubkey,
) -> bool {
    if instructions.len() < 2 || current_index == VERIFICATION_INDEX {
        return false;
    }
    let Some(solve) = instructions.get(VERIFICATION_INDEX) else {
        return false;
    };

    solve.program_id == *verifier_program
        && first_argument(&solve.data) == SOLVE_MARKER
        && solve
            .accounts
            .first()
            .is_some_and(|meta| meta.pubkey == *claimant && meta.is_signer)
}

/// Requires the transaction to be exactly this call plus a system transfer of
/// `lamports` from `sender` to `receiver`.
pub fn require_payment_proof(
    instructions: &[Instruction],
    current_index: usize,
    sender: &Pubkey,
    receiver: &Pubkey,
    lamports: u64,
) -> Result<()> {
    require!(
        instructions.len() == PAYMENT_GROUP_SIZE && current_index < PAYMENT_GROUP_SIZE,
        FaucetError::InvalidGroupComposition
    );

    let payment = &instructions[1 - current_index];
    require!(
        decode_system_transfer(payment) == Some(lamports),
        FaucetError::InvalidGroupComposition
    );

    match payment.accounts.as_slice() {
        [from, to, ..] if from.pubkey == *sender && from.is_signer && to.pubkey == *receiver => {
            Ok(())
        }
        _ => err!(FaucetError::InvalidGroupComposition),
    }
}

/// Rejects transactions that reassign an account owner, change a token
/// authority or close a token account next to a payout.
pub fn require_no_forbidden_side_effects(instructions: &[Instruction]) -> Result<()> {
    for ix in instructions {
        if is_forbidden_side_effect(ix) {
            #[cfg(feature = "verbose")]
            msg!("Forbidden side effect from program {}", ix.program_id);
            return err!(FaucetError::ForbiddenSideEffect);
        }
    }
    Ok(())
}

/// Lamports moved by a system `Transfer`, `None` for anything else.
pub fn decode_system_transfer(ix: &Instruction) -> Option<u64> {
    if system_instruction_tag(ix)? != SYSTEM_TRANSFER || ix.data.len() != SYSTEM_TRANSFER_LEN {
        return None;
    }
    let lamports: [u8; 8] = ix.data[4..SYSTEM_TRANSFER_LEN].try_into().ok()?;
    Some(u64::from_le_bytes(lamports))
}

/// Bytes of `data` up to the first argument delimiter
fn first_argument(data: &[u8]) -> &[u8] {
    data.split(|byte| *byte == ARGUMENT_DELIMITER)
        .next()
        .unwrap_or_default()
}

fn system_instruction_tag(ix: &Instruction) -> Option<u32> {
    if ix.program_id != system_program::ID {
        return None;
    }
    let tag: [u8; 4] = ix.data.get(..4)?.try_into().ok()?;
    Some(u32::from_le_bytes(tag))
}

fn is_forbidden_side_effect(ix: &Instruction) -> bool {
    if let Some(tag) = system_instruction_tag(ix) {
        return tag == SYSTEM_ASSIGN || tag == SYSTEM_ASSIGN_WITH_SEED;
    }
    if ix.program_id == anchor_spl::token::ID || ix.program_id == anchor_spl::token_2022::ID {
        return matches!(
            ix.data.first(),
            Some(&TOKEN_SET_AUTHORITY) | Some(&TOKEN_CLOSE_ACCOUNT)
        );
    }
    false
}
