use anchor_lang::prelude::*;
use anchor_lang::system_program::{
    allocate, assign, create_account, transfer, Allocate, Assign, CreateAccount, Transfer,
};

use crate::constants::MIN_POOL_RESERVE;
use crate::error::FaucetError;
use crate::state::Vault;

/// Effective reserve of the pool: never below the vault's rent-exempt minimum
pub fn pool_reserve(rent_exempt_minimum: u64) -> u64 {
    rent_exempt_minimum.max(MIN_POOL_RESERVE)
}

/// Reserve of the vault account under the current rent parameters
pub fn vault_reserve() -> Result<u64> {
    let rent = Rent::get()?;
    Ok(pool_reserve(rent.minimum_balance(Vault::LEN)))
}

/// Checks that `amount` can leave the pool while `reserve` stays behind,
/// returning the balance left after the debit.
pub fn check_withdrawal(pool_balance: u64, amount: u64, reserve: u64) -> Result<u64> {
    let required = amount
        .checked_add(reserve)
        .ok_or(FaucetError::ArithmeticOverflow)?;
    require!(pool_balance >= required, FaucetError::InsufficientBalance);
    Ok(pool_balance - amount)
}

/// Moves lamports out of an account owned by this program.
///
/// No fee is involved: the runtime lets the owning program debit directly.
pub fn debit_program_account<'info>(
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    let from_balance = from
        .lamports()
        .checked_sub(amount)
        .ok_or(FaucetError::InsufficientBalance)?;
    let to_balance = to
        .lamports()
        .checked_add(amount)
        .ok_or(FaucetError::ArithmeticOverflow)?;

    **from.try_borrow_mut_lamports()? = from_balance;
    **to.try_borrow_mut_lamports()? = to_balance;
    Ok(())
}

/// Closes a program-owned account, sending all of its lamports to
/// `destination`. Returns the lamports moved.
pub fn close_program_account<'info>(
    account: &AccountInfo<'info>,
    destination: &AccountInfo<'info>,
) -> Result<u64> {
    let refunded = account.lamports();
    debit_program_account(account, destination, refunded)?;

    account.assign(&anchor_lang::system_program::ID);
    account.realloc(0, false)?;
    Ok(refunded)
}

/// Creates a rent-exempt PDA owned by this program, tolerating an address
/// that was already pre-funded by someone else.
pub fn create_pda_account<'info>(
    payer: &AccountInfo<'info>,
    target: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    space: usize,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let required = Rent::get()?.minimum_balance(space);
    let current = target.lamports();

    if current == 0 {
        return create_account(
            CpiContext::new_with_signer(
                system_program.clone(),
                CreateAccount {
                    from: payer.clone(),
                    to: target.clone(),
                },
                signer_seeds,
            ),
            required,
            space as u64,
            &crate::ID,
        );
    }

    let top_up = required.saturating_sub(current);
    if top_up > 0 {
        transfer(
            CpiContext::new(
                system_program.clone(),
                Transfer {
                    from: payer.clone(),
                    to: target.clone(),
                },
            ),
            top_up,
        )?;
    }
    allocate(
        CpiContext::new_with_signer(
            system_program.clone(),
            Allocate {
                account_to_allocate: target.clone(),
            },
            signer_seeds,
        ),
        space as u64,
    )?;
    assign(
        CpiContext::new_with_signer(
            system_program.clone(),
            Assign {
                account_to_assign: target.clone(),
            },
            signer_seeds,
        ),
        &crate::ID,
    )
}
