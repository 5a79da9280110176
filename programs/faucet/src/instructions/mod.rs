pub mod initialize;
pub mod claim;
pub mod delete_record;
pub mod delete_many;
pub mod withdraw;
pub mod set_claim_amount;
pub mod set_claim_interval;
pub mod close_faucet;

pub use initialize::*;
pub use claim::*;
pub use delete_record::*;
pub use delete_many::*;
pub use withdraw::*;
pub use set_claim_amount::*;
pub use set_claim_interval::*;
pub use close_faucet::*;
