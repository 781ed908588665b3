use crate::*;

/// Record of yoctoNEAR a bidder committed to a sale. It stays encumbered while the
/// bidder still holds that sale's bid slot.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BidReceipt {
    pub sale_key: SaleKey,
    pub amount: U128,
}

#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct TotalAndUnencumbered {
    pub total: U128,
    pub unencumbered: U128,
}
