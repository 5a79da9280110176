pub mod config_state;
pub mod claim_state;
pub mod vault_state;

pub use config_state::*;
pub use claim_state::*;
pub use vault_state::*;
