use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::FaucetError;
use crate::state::ClaimRecord;
use crate::utils::{close_program_account, create_pda_account};

/// Address and bump of the claim record for `beneficiary`
pub fn claim_record_address(beneficiary: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CLAIM_SEED.as_bytes(), beneficiary.as_ref()], &crate::ID)
}

/// A record exists once its PDA holds data owned by this program
pub fn record_exists(record: &AccountInfo) -> bool {
    record.owner == &crate::ID && !record.data_is_empty()
}

/// Decodes raw record data; empty data means no record.
pub fn decode_last_claim(data: &[u8]) -> Result<Option<u64>> {
    if data.is_empty() {
        return Ok(None);
    }
    let record = ClaimRecord::try_deserialize(&mut &data[..])?;
    Ok(Some(record.last_claim_slot))
}

/// Last claim slot of a record, 0 when the record is absent
pub fn read_last_claim(record: &AccountInfo) -> Result<u64> {
    if !record_exists(record) {
        return Ok(0);
    }
    let data = record.try_borrow_data()?;
    Ok(decode_last_claim(&data)?.unwrap_or(0))
}

pub fn write_last_claim(record: &AccountInfo, slot: u64) -> Result<()> {
    let mut data = record.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data[..];
    ClaimRecord {
        last_claim_slot: slot,
    }
    .try_serialize(&mut writer)
}

/// Allocates a zeroed record if none exists yet.
///
/// Returns whether the record existed before the call.
pub fn ensure_record<'info>(
    record: &AccountInfo<'info>,
    payer: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    beneficiary: &Pubkey,
    bump: u8,
) -> Result<bool> {
    if record_exists(record) {
        return Ok(true);
    }

    let bump_seed = [bump];
    let seeds: &[&[u8]] = &[CLAIM_SEED.as_bytes(), beneficiary.as_ref(), &bump_seed];
    create_pda_account(payer, record, system_program, ClaimRecord::LEN, &[seeds])?;
    write_last_claim(record, 0)?;
    Ok(false)
}

/// Deletes a record, refunding its rent to `destination`.
///
/// Returns the slot the record held and the lamports refunded.
pub fn delete_record<'info>(
    record: &AccountInfo<'info>,
    destination: &AccountInfo<'info>,
) -> Result<(u64, u64)> {
    require!(record_exists(record), FaucetError::NotFound);
    let last_claim_slot = read_last_claim(record)?;
    let refunded = close_program_account(record, destination)?;
    Ok((last_claim_slot, refunded))
}

/// Validates a batch of deletions before anything is removed.
///
/// The batch must hold between 1 and `MAX_DELETE_BATCH` beneficiaries, each
/// present once and each backed by an existing record.
pub fn check_deletion_batch<F>(beneficiaries: &[Pubkey], mut exists: F) -> Result<()>
where
    F: FnMut(usize, &Pubkey) -> bool,
{
    require!(
        !beneficiaries.is_empty() && beneficiaries.len() <= MAX_DELETE_BATCH,
        FaucetError::InvalidParameter
    );

    for (index, beneficiary) in beneficiaries.iter().enumerate() {
        // a repeated id would hit an already deleted record
        require!(
            !beneficiaries[..index].contains(beneficiary),
            FaucetError::NotFound
        );
        require!(exists(index, beneficiary), FaucetError::NotFound);
    }
    Ok(())
}

/// Validates the record accounts passed for a batch deletion.
///
/// `records` must line up with `beneficiaries`: same length, each account at
/// its beneficiary's record address and writable. The batch itself must then
/// pass `check_deletion_batch`.
pub fn check_batch_accounts(records: &[AccountInfo], beneficiaries: &[Pubkey]) -> Result<()> {
    require!(
        records.len() == beneficiaries.len(),
        FaucetError::InvalidParameter
    );
    for (record, beneficiary) in records.iter().zip(beneficiaries.iter()) {
        require_keys_eq!(
            record.key(),
            claim_record_address(beneficiary).0,
            FaucetError::InvalidAccount
        );
        require!(record.is_writable, FaucetError::InvalidAccount);
    }
    check_deletion_batch(beneficiaries, |index, _| record_exists(&records[index]))
}
