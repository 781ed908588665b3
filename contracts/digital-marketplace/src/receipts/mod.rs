mod book;
mod types;
mod views;

pub use types::{BidReceipt, TotalAndUnencumbered};
