mod test_accounts;

use anchor_lang::error::{Error, ERROR_CODE_OFFSET};

use crate::error::FaucetError;

/// Asserts that `result` failed with the given faucet error
pub(crate) fn assert_faucet_err<T: std::fmt::Debug>(
    result: anchor_lang::Result<T>,
    expected: FaucetError,
) {
    match result {
        Err(Error::AnchorError(err)) => assert_eq!(
            err.error_code_number,
            ERROR_CODE_OFFSET + expected as u32,
            "expected {:?}, got {}",
            expected,
            err.error_name
        ),
        other => panic!("expected {:?}, got {:?}", expected, other),
    }
}
