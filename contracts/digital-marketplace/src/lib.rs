use near_sdk::json_types::U128;
use near_sdk::store::{IterableSet, LookupMap};
use near_sdk::{AccountId, Gas, NearToken, PanicOnDefault, Promise, env, near};

pub mod constants;
mod errors;
mod events;
mod guards;

mod config;
mod escrow;
mod external;
mod payout;
mod receipts;
mod sale;
mod storage;

mod admin;
mod ft_receiver;

#[cfg(test)]
mod tests;

pub use config::{MarketplaceConfig, MarketplaceConfigUpdate};
pub use constants::*;
pub use errors::{ErrorKind, MarketplaceError};
pub use events::MarketplaceEvent;
pub use payout::StrandedPayout;
pub use receipts::{BidReceipt, TotalAndUnencumbered};
pub use sale::{AssetMessage, CurrentBid, Sale, SaleKey, SaleView};
pub use storage::{RentDelta, StorageKey};

pub(crate) use sale::AssetDeposit;

#[near(contract_state)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub version: String,
    pub owner_id: AccountId,
    pub config: MarketplaceConfig,

    /// Escrowed yoctoNEAR per account. Entries are created on first deposit and never removed.
    pub(crate) deposited: LookupMap<AccountId, U128>,
    pub(crate) sales: LookupMap<SaleKey, Sale>,
    pub(crate) receipt_book: LookupMap<AccountId, Vec<BidReceipt>>,

    pub(crate) sponsored_assets: IterableSet<AccountId>,
    pub(crate) clawback_assets: IterableSet<AccountId>,
    pub(crate) stranded_payouts: LookupMap<AccountId, Vec<StrandedPayout>>,
    /// Rent held back from escrow for payouts whose callbacks have not run yet.
    pub(crate) reserved_payout_rent: u128,
}
