use near_sdk::json_types::U128;
use near_sdk::{AccountId, near};

use crate::SaleKey;

#[near(event_json(standard = "nep297"))]
pub enum MarketplaceEvent {
    #[event_version("1.0.0")]
    Deposited {
        account_id: AccountId,
        amount: U128,
        balance: U128,
    },
    #[event_version("1.0.0")]
    Withdrawn {
        account_id: AccountId,
        amount: U128,
        balance: U128,
    },
    #[event_version("1.0.0")]
    AssetSponsored {
        asset_id: AccountId,
        sponsor_id: AccountId,
        cost: U128,
    },
    #[event_version("1.0.0")]
    AssetSponsorFailed {
        asset_id: AccountId,
        sponsor_id: AccountId,
        refund: U128,
    },
    #[event_version("1.0.0")]
    SaleOpened {
        sale: SaleKey,
        amount: U128,
        price: U128,
    },
    #[event_version("1.0.0")]
    SaleClosed { sale: SaleKey, amount: U128 },
    #[event_version("1.0.0")]
    SaleBought {
        sale: SaleKey,
        buyer_id: AccountId,
        amount: U128,
        price: U128,
    },
    #[event_version("1.0.0")]
    BidPlaced {
        sale: SaleKey,
        bidder_id: AccountId,
        amount: U128,
    },
    #[event_version("1.0.0")]
    BidsClaimed {
        bidder_id: AccountId,
        amount: U128,
        remaining_receipts: u32,
    },
    #[event_version("1.0.0")]
    BidAccepted {
        sale: SaleKey,
        bidder_id: AccountId,
        amount: U128,
    },
    #[event_version("1.0.0")]
    PayoutStranded {
        asset_id: AccountId,
        receiver_id: AccountId,
        amount: U128,
    },
    #[event_version("1.0.0")]
    PayoutRetried {
        asset_id: AccountId,
        receiver_id: AccountId,
        amount: U128,
    },
    #[event_version("1.0.0")]
    ConfigUpdated { owner_id: AccountId },
    #[event_version("1.0.0")]
    OwnerTransferred {
        old_owner: AccountId,
        new_owner: AccountId,
    },
    #[event_version("1.0.0")]
    ClawbackFlagSet { asset_id: AccountId, flagged: bool },
}
