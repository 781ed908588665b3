mod bid;
mod listing;
mod purchase;
mod types;
mod views;

pub(crate) use types::AssetDeposit;
pub use types::{AssetMessage, CurrentBid, Sale, SaleKey, SaleView};
