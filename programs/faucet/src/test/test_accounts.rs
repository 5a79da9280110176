use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::*;
use crate::error::FaucetError;
use crate::state::{ClaimRecord, Vault};
use crate::utils::*;

use super::assert_faucet_err;
use super::loader::{install_host_stubs, LoaderInput, TestAccount};

fn record_rent() -> u64 {
    Rent::default().minimum_balance(ClaimRecord::LEN)
}

mod records {
    use super::*;

    #[test]
    fn test_zero_valued_record_still_exists() {
        let beneficiary = Pubkey::new_unique();
        let mut input = LoaderInput::new(&[TestAccount::record(&beneficiary, 0)]);
        let infos = input.account_infos();

        assert!(record_exists(&infos[0]));
        assert_eq!(read_last_claim(&infos[0]).unwrap(), 0);
    }

    #[test]
    fn test_untouched_address_is_no_record() {
        let beneficiary = Pubkey::new_unique();
        let mut input = LoaderInput::new(&[TestAccount::missing_record(&beneficiary)]);
        let infos = input.account_infos();

        assert!(!record_exists(&infos[0]));
        assert_eq!(read_last_claim(&infos[0]).unwrap(), 0);
    }

    #[test]
    fn test_data_owned_by_someone_else_is_no_record() {
        let beneficiary = Pubkey::new_unique();
        let mut foreign = TestAccount::record(&beneficiary, 42);
        foreign.owner = Pubkey::new_unique();
        let mut input = LoaderInput::new(&[foreign]);
        let infos = input.account_infos();

        assert!(!record_exists(&infos[0]));
        assert_eq!(read_last_claim(&infos[0]).unwrap(), 0);
    }

    #[test]
    fn test_written_slot_reads_back() {
        let beneficiary = Pubkey::new_unique();
        let mut input = LoaderInput::new(&[TestAccount::record(&beneficiary, 1_000)]);
        let infos = input.account_infos();

        write_last_claim(&infos[0], 11_001).unwrap();

        assert_eq!(read_last_claim(&infos[0]).unwrap(), 11_001);
        let data = infos[0].try_borrow_data().unwrap();
        assert_eq!(decode_last_claim(&data).unwrap(), Some(11_001));
    }

    #[test]
    fn test_delete_refunds_rent_and_empties_record() {
        let beneficiary = Pubkey::new_unique();
        let creator = Pubkey::new_unique();
        let mut input = LoaderInput::new(&[
            TestAccount::record(&beneficiary, 7_500),
            TestAccount::wallet(creator, 5_000),
        ]);
        let infos = input.account_infos();

        let (last_claim_slot, refunded) = delete_record(&infos[0], &infos[1]).unwrap();

        assert_eq!(last_claim_slot, 7_500);
        assert_eq!(refunded, record_rent());
        assert_eq!(infos[0].lamports(), 0);
        assert!(infos[0].data_is_empty());
        assert_eq!(*infos[0].owner, system_program::ID);
        assert!(!record_exists(&infos[0]));
        assert_eq!(infos[1].lamports(), 5_000 + record_rent());
    }

    #[test]
    fn test_delete_absent_record_is_not_found() {
        let beneficiary = Pubkey::new_unique();
        let creator = Pubkey::new_unique();
        let mut input = LoaderInput::new(&[
            TestAccount::missing_record(&beneficiary),
            TestAccount::wallet(creator, 5_000),
        ]);
        let infos = input.account_infos();

        assert_faucet_err(delete_record(&infos[0], &infos[1]), FaucetError::NotFound);
        assert_eq!(infos[1].lamports(), 5_000);
    }

    #[test]
    fn test_ensure_record_reports_missing_then_creates_it() {
        install_host_stubs();
        let beneficiary = Pubkey::new_unique();
        let payer = Pubkey::new_unique();
        let (_, bump) = claim_record_address(&beneficiary);
        let mut input = LoaderInput::new(&[
            TestAccount::missing_record(&beneficiary),
            TestAccount::wallet(payer, 10_000_000),
            TestAccount::system_program(),
        ]);
        let infos = input.account_infos();

        let existed = ensure_record(&infos[0], &infos[1], &infos[2], &beneficiary, bump).unwrap();

        assert!(!existed);
        assert!(record_exists(&infos[0]));
        assert_eq!(read_last_claim(&infos[0]).unwrap(), 0);
        assert_eq!(infos[0].data_len(), ClaimRecord::LEN);
        assert_eq!(infos[0].lamports(), record_rent());
        assert_eq!(infos[1].lamports(), 10_000_000 - record_rent());

        // A second attempt sees the zero-valued record and leaves it alone
        let existed = ensure_record(&infos[0], &infos[1], &infos[2], &beneficiary, bump).unwrap();
        assert!(existed);
        assert_eq!(infos[1].lamports(), 10_000_000 - record_rent());
    }

    #[test]
    fn test_ensure_record_tops_up_prefunded_address() {
        install_host_stubs();
        let beneficiary = Pubkey::new_unique();
        let payer = Pubkey::new_unique();
        let (_, bump) = claim_record_address(&beneficiary);
        let mut input = LoaderInput::new(&[
            TestAccount::missing_record(&beneficiary).funded(1_000),
            TestAccount::wallet(payer, 10_000_000),
            TestAccount::system_program(),
        ]);
        let infos = input.account_infos();

        let existed = ensure_record(&infos[0], &infos[1], &infos[2], &beneficiary, bump).unwrap();

        assert!(!existed);
        assert_eq!(*infos[0].owner, crate::ID);
        assert_eq!(infos[0].lamports(), record_rent());
        assert_eq!(infos[1].lamports(), 10_000_000 - (record_rent() - 1_000));
    }

    #[test]
    fn test_deleted_record_can_be_recreated() {
        install_host_stubs();
        let beneficiary = Pubkey::new_unique();
        let payer = Pubkey::new_unique();
        let (_, bump) = claim_record_address(&beneficiary);
        let mut input = LoaderInput::new(&[
            TestAccount::record(&beneficiary, 3_000),
            TestAccount::wallet(payer, 10_000_000),
            TestAccount::system_program(),
        ]);
        let infos = input.account_infos();

        delete_record(&infos[0], &infos[1]).unwrap();
        let existed = ensure_record(&infos[0], &infos[1], &infos[2], &beneficiary, bump).unwrap();

        assert!(!existed);
        assert_eq!(read_last_claim(&infos[0]).unwrap(), 0);
    }
}

mod lamports {
    use super::*;

    #[test]
    fn test_debit_moves_exactly_the_amount() {
        let mut input = LoaderInput::new(&[
            TestAccount::program_owned(Pubkey::new_unique(), 1_000_000, vec![0; Vault::LEN]),
            TestAccount::wallet(Pubkey::new_unique(), 0),
        ]);
        let infos = input.account_infos();

        debit_program_account(&infos[0], &infos[1], DEFAULT_CLAIM_AMOUNT).unwrap();

        assert_eq!(infos[0].lamports(), 1_000_000 - DEFAULT_CLAIM_AMOUNT);
        assert_eq!(infos[1].lamports(), DEFAULT_CLAIM_AMOUNT);
    }

    #[test]
    fn test_overdraft_moves_nothing() {
        let mut input = LoaderInput::new(&[
            TestAccount::program_owned(Pubkey::new_unique(), 1_000, vec![0; Vault::LEN]),
            TestAccount::wallet(Pubkey::new_unique(), 7),
        ]);
        let infos = input.account_infos();

        assert_faucet_err(
            debit_program_account(&infos[0], &infos[1], 1_001),
            FaucetError::InsufficientBalance,
        );
        assert_eq!(infos[0].lamports(), 1_000);
        assert_eq!(infos[1].lamports(), 7);
    }

    #[test]
    fn test_vault_reserve_follows_rent() {
        install_host_stubs();
        let rent_minimum = Rent::default().minimum_balance(Vault::LEN);

        assert_eq!(vault_reserve().unwrap(), rent_minimum);
        assert!(vault_reserve().unwrap() > MIN_POOL_RESERVE);
    }
}

mod batch_accounts {
    use super::*;

    fn beneficiaries(count: usize) -> Vec<Pubkey> {
        (0..count).map(|_| Pubkey::new_unique()).collect()
    }

    fn records_of(beneficiaries: &[Pubkey]) -> Vec<TestAccount> {
        beneficiaries
            .iter()
            .enumerate()
            .map(|(i, b)| TestAccount::record(b, i as u64 * 100))
            .collect()
    }

    #[test]
    fn test_batch_deletes_exactly_the_given_records() {
        let keys = beneficiaries(7);
        let creator = Pubkey::new_unique();
        let mut accounts = records_of(&keys);
        accounts.push(TestAccount::wallet(creator, 0));
        let mut input = LoaderInput::new(&accounts);
        let infos = input.account_infos();
        let (records, creator_info) = (&infos[..7], &infos[7]);

        check_batch_accounts(&records[..5], &keys[..5]).unwrap();
        for record in &records[..5] {
            delete_record(record, creator_info).unwrap();
        }

        assert!(records[..5].iter().all(|r| !record_exists(r)));
        assert!(records[5..].iter().all(record_exists));
        assert_eq!(creator_info.lamports(), 5 * record_rent());
    }

    #[test]
    fn test_one_missing_record_rejects_the_batch() {
        let keys = beneficiaries(4);
        let mut accounts = records_of(&keys);
        accounts[2] = TestAccount::missing_record(&keys[2]);
        let mut input = LoaderInput::new(&accounts);
        let infos = input.account_infos();

        assert_faucet_err(check_batch_accounts(&infos, &keys), FaucetError::NotFound);
        assert_eq!(infos.iter().filter(|r| record_exists(r)).count(), 3);
    }

    #[test]
    fn test_account_count_must_match() {
        let keys = beneficiaries(3);
        let mut input = LoaderInput::new(&records_of(&keys));
        let infos = input.account_infos();

        assert_faucet_err(
            check_batch_accounts(&infos[..2], &keys),
            FaucetError::InvalidParameter,
        );
    }

    #[test]
    fn test_record_of_another_beneficiary_is_rejected() {
        let keys = beneficiaries(2);
        let stranger = Pubkey::new_unique();
        let mut input = LoaderInput::new(&[
            TestAccount::record(&keys[0], 0),
            TestAccount::record(&stranger, 0),
        ]);
        let infos = input.account_infos();

        assert_faucet_err(check_batch_accounts(&infos, &keys), FaucetError::InvalidAccount);
    }

    #[test]
    fn test_readonly_record_is_rejected() {
        let keys = beneficiaries(2);
        let mut input = LoaderInput::new(&[
            TestAccount::record(&keys[0], 0),
            TestAccount::record(&keys[1], 0).readonly(),
        ]);
        let infos = input.account_infos();

        assert_faucet_err(check_batch_accounts(&infos, &keys), FaucetError::InvalidAccount);
    }

    #[test]
    fn test_repeated_beneficiary_is_rejected() {
        let keys = beneficiaries(2);
        let batch = vec![keys[0], keys[1], keys[0]];
        let mut input = LoaderInput::new(&[
            TestAccount::record(&keys[0], 0),
            TestAccount::record(&keys[1], 0),
            TestAccount::record(&keys[0], 0),
        ]);
        let infos = input.account_infos();

        assert_faucet_err(check_batch_accounts(&infos, &batch), FaucetError::NotFound);
    }
}
