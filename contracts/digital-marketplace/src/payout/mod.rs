mod transfer;
mod types;

pub(crate) use transfer::stranded_payout_reserve;
pub use types::StrandedPayout;
