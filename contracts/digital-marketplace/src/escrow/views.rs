use crate::*;

#[near]
impl Contract {
    pub fn get_deposited(&self, account_id: AccountId) -> U128 {
        U128(self.escrow_balance(&account_id))
    }

    pub fn is_asset_sponsored(&self, asset_id: AccountId) -> bool {
        self.sponsored_assets.contains(&asset_id)
    }

    pub fn get_sponsored_assets(&self, from_index: Option<u32>, limit: Option<u32>) -> Vec<AccountId> {
        let limit = limit.unwrap_or(MAX_VIEW_LIMIT).min(MAX_VIEW_LIMIT);
        self.sponsored_assets
            .iter()
            .skip(from_index.unwrap_or(0) as usize)
            .take(limit as usize)
            .cloned()
            .collect()
    }
}
