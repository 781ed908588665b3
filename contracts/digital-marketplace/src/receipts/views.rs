use crate::*;

#[near]
impl Contract {
    pub fn get_total_and_unencumbered_bids(&self, account_id: AccountId) -> TotalAndUnencumbered {
        self.total_and_unencumbered(&account_id)
    }

    pub fn get_receipt_book(&self, account_id: AccountId) -> Vec<BidReceipt> {
        self.receipt_book
            .get(&account_id)
            .cloned()
            .unwrap_or_default()
    }
}
