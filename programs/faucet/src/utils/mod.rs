pub mod group;
pub mod lamports;
pub mod records;

pub use group::*;
pub use lamports::*;
pub use records::*;
