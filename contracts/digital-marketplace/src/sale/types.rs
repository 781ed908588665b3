use crate::*;

/// Sales are keyed by seller and asset, so a seller has at most one open sale per asset.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct SaleKey {
    pub seller_id: AccountId,
    pub asset_id: AccountId,
}

impl SaleKey {
    pub fn new(seller_id: AccountId, asset_id: AccountId) -> Self {
        Self {
            seller_id,
            asset_id,
        }
    }
}

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CurrentBid {
    #[default]
    NoBid,
    Bid { bidder_id: AccountId, amount: U128 },
}

impl CurrentBid {
    pub fn bidder(&self) -> Option<&AccountId> {
        match self {
            Self::Bid { bidder_id, .. } => Some(bidder_id),
            Self::NoBid => None,
        }
    }

    pub fn is_held_by(&self, account_id: &AccountId) -> bool {
        self.bidder() == Some(account_id)
    }

    /// The first bid may be any amount; later bids must strictly exceed the standing one.
    pub fn is_beaten_by(&self, amount: u128) -> bool {
        match self {
            Self::NoBid => true,
            Self::Bid { amount: standing, .. } => amount > standing.0,
        }
    }
}

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sale {
    /// Asset units held in escrow for this sale.
    pub amount: U128,
    /// Buy-now price in yoctoNEAR.
    pub price: U128,
    pub bid: CurrentBid,
}

#[near(serializers = [json])]
#[derive(Clone, Debug)]
pub struct SaleView {
    pub seller_id: AccountId,
    pub asset_id: AccountId,
    pub amount: U128,
    pub price: U128,
    pub bid: CurrentBid,
}

impl SaleView {
    pub(crate) fn new(key: &SaleKey, sale: &Sale) -> Self {
        Self {
            seller_id: key.seller_id.clone(),
            asset_id: key.asset_id.clone(),
            amount: sale.amount,
            price: sale.price,
            bid: sale.bid.clone(),
        }
    }
}

/// An incoming asset transfer that accompanies an `open_sale` request.
#[derive(Clone, Debug)]
pub(crate) struct AssetDeposit {
    pub asset_id: AccountId,
    pub sender_id: AccountId,
    pub receiver_id: AccountId,
    pub amount: u128,
}

/// `msg` payload accepted by `ft_on_transfer`.
#[near(serializers = [json])]
#[serde(rename_all = "snake_case")]
#[derive(Clone, Debug)]
pub enum AssetMessage {
    OpenSale { price: U128 },
}
